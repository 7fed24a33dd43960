use {
    crate::BalanceTracker,
    amm_app::{App, AppResult},
    amm_math::{NumberConst, Uint256},
    amm_types::{
        bank,
        pool::{self, Reserves},
        router, Addr, Asset, Config, Message, Query, Response, StdError,
    },
    serde::de::DeserializeOwned,
    std::collections::BTreeMap,
};

/// Drives an [`App`] with typed helpers for every message and query.
pub struct TestSuite {
    pub app: App,
    config: Config,
    /// Balances recorded by the [`BalanceTracker`].
    pub(crate) balances: BTreeMap<Addr, BTreeMap<Asset, Uint256>>,
}

impl TestSuite {
    pub fn new(app: App) -> AppResult<Self> {
        let config = query(&app, Query::Config {})?;

        Ok(Self {
            app,
            config,
            balances: BTreeMap::new(),
        })
    }

    pub fn pool(&self) -> Addr {
        self.config.pool
    }

    pub fn router(&self) -> Addr {
        self.config.router
    }

    pub fn balances(&mut self) -> BalanceTracker<'_> {
        BalanceTracker { suite: self }
    }

    pub fn execute(&mut self, sender: Addr, msg: Message, funds: Uint256) -> AppResult<Response> {
        self.app.do_execute(sender, msg, funds)
    }

    // -------------------------------- router ---------------------------------

    pub fn add_liquidity(
        &mut self,
        sender: Addr,
        to: Addr,
        native: Uint256,
        desired_token: Uint256,
        min_token: Uint256,
        max_token: Uint256,
    ) -> AppResult<Response> {
        self.execute(
            sender,
            Message::Router(router::ExecuteMsg::AddLiquidity {
                to,
                desired_token,
                min_token,
                max_token,
            }),
            native,
        )
    }

    pub fn remove_liquidity(
        &mut self,
        sender: Addr,
        to: Addr,
        min_native: Uint256,
        min_token: Uint256,
        shares: Uint256,
    ) -> AppResult<Response> {
        self.execute(
            sender,
            Message::Router(router::ExecuteMsg::RemoveLiquidity {
                to,
                min_native,
                min_token,
                shares,
            }),
            Uint256::ZERO,
        )
    }

    pub fn router_swap(
        &mut self,
        sender: Addr,
        to: Addr,
        native_in: Uint256,
        token_in: Uint256,
        min_native_out: Uint256,
        min_token_out: Uint256,
    ) -> AppResult<Response> {
        self.execute(
            sender,
            Message::Router(router::ExecuteMsg::Swap {
                to,
                token_in,
                min_native_out,
                min_token_out,
            }),
            native_in,
        )
    }

    // --------------------------------- pool ----------------------------------

    pub fn pool_mint(&mut self, sender: Addr, to: Addr, funds: Uint256) -> AppResult<Response> {
        self.execute(sender, Message::Pool(pool::ExecuteMsg::Mint { to }), funds)
    }

    pub fn pool_burn(&mut self, sender: Addr, to: Addr) -> AppResult<Response> {
        self.execute(
            sender,
            Message::Pool(pool::ExecuteMsg::Burn { to }),
            Uint256::ZERO,
        )
    }

    pub fn pool_swap(&mut self, sender: Addr, to: Addr, funds: Uint256) -> AppResult<Response> {
        self.execute(sender, Message::Pool(pool::ExecuteMsg::Swap { to }), funds)
    }

    pub fn transfer_shares(
        &mut self,
        sender: Addr,
        to: Addr,
        amount: Uint256,
    ) -> AppResult<Response> {
        self.execute(
            sender,
            Message::Pool(pool::ExecuteMsg::Transfer { to, amount }),
            Uint256::ZERO,
        )
    }

    pub fn approve_shares(
        &mut self,
        sender: Addr,
        spender: Addr,
        amount: Uint256,
    ) -> AppResult<Response> {
        self.execute(
            sender,
            Message::Pool(pool::ExecuteMsg::Approve { spender, amount }),
            Uint256::ZERO,
        )
    }

    // --------------------------------- bank ----------------------------------

    pub fn transfer(
        &mut self,
        sender: Addr,
        to: Addr,
        asset: Asset,
        amount: Uint256,
    ) -> AppResult<Response> {
        self.execute(
            sender,
            Message::Bank(bank::ExecuteMsg::Transfer { to, asset, amount }),
            Uint256::ZERO,
        )
    }

    pub fn approve(&mut self, sender: Addr, spender: Addr, amount: Uint256) -> AppResult<Response> {
        self.execute(
            sender,
            Message::Bank(bank::ExecuteMsg::Approve { spender, amount }),
            Uint256::ZERO,
        )
    }

    // -------------------------------- queries --------------------------------

    pub fn query_config(&self) -> AppResult<Config> {
        query(&self.app, Query::Config {})
    }

    pub fn query_balance(&self, address: Addr, asset: Asset) -> AppResult<Uint256> {
        query(
            &self.app,
            Query::Bank(bank::QueryMsg::Balance { address, asset }),
        )
    }

    pub fn query_allowance(&self, owner: Addr, spender: Addr) -> AppResult<Uint256> {
        query(
            &self.app,
            Query::Bank(bank::QueryMsg::Allowance { owner, spender }),
        )
    }

    pub fn query_supply(&self, asset: Asset) -> AppResult<Uint256> {
        query(&self.app, Query::Bank(bank::QueryMsg::Supply { asset }))
    }

    pub fn query_reserves(&self) -> AppResult<Reserves> {
        query(&self.app, Query::Pool(pool::QueryMsg::Reserves {}))
    }

    pub fn query_total_shares(&self) -> AppResult<Uint256> {
        query(&self.app, Query::Pool(pool::QueryMsg::TotalShares {}))
    }

    pub fn query_share_balance(&self, holder: Addr) -> AppResult<Uint256> {
        query(
            &self.app,
            Query::Pool(pool::QueryMsg::ShareBalance { holder }),
        )
    }

    pub fn query_share_allowance(&self, owner: Addr, spender: Addr) -> AppResult<Uint256> {
        query(
            &self.app,
            Query::Pool(pool::QueryMsg::ShareAllowance { owner, spender }),
        )
    }

    pub fn query_share_holders(&self) -> AppResult<BTreeMap<Addr, Uint256>> {
        query(&self.app, Query::Pool(pool::QueryMsg::ShareHolders {}))
    }
}

fn query<R>(app: &App, req: Query) -> AppResult<R>
where
    R: DeserializeOwned,
{
    let value = app.do_query(req)?;

    Ok(serde_json::from_value(value).map_err(|err| StdError::deserialize::<R, _>("json", err))?)
}
