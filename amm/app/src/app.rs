use {
    crate::{AppError, AppResult, CONFIG},
    amm_math::{IsZero, Uint256},
    amm_types::{
        Addr, Asset, BorshDeExt, BorshSerExt, Buffer, GenesisState, ImmutableCtx, JsonSerExt,
        MemStorage, Message, MutableCtx, Query, Response,
    },
    serde_json::Value,
    std::mem,
};

/// The host. Owns the committed state and runs every message atomically
/// against it.
#[derive(Default, Debug, Clone)]
pub struct App {
    storage: MemStorage,
}

impl App {
    /// Create an app with empty, uninitialized state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore an app from bytes produced by [`App::snapshot`].
    pub fn from_snapshot(bytes: &[u8]) -> AppResult<Self> {
        Ok(Self {
            storage: bytes.deserialize_borsh()?,
        })
    }

    /// Serialize the committed state.
    pub fn snapshot(&self) -> AppResult<Vec<u8>> {
        Ok(self.storage.to_borsh_vec()?)
    }

    pub fn is_initialized(&self) -> bool {
        CONFIG.exists(&self.storage)
    }

    pub fn do_init(&mut self, genesis: GenesisState) -> AppResult<()> {
        if self.is_initialized() {
            return Err(AppError::AlreadyInitialized);
        }

        #[cfg(feature = "tracing")]
        let num_accounts = genesis.balances.len();

        self.atomically(|storage| {
            CONFIG.save(storage, &genesis.config)?;
            amm_bank::initialize(storage, genesis.balances)?;
            amm_pool::initialize(storage)?;

            Ok(())
        })?;

        #[cfg(feature = "tracing")]
        {
            tracing::info!(
                pool = genesis.config.pool.to_string(),
                router = genesis.config.router.to_string(),
                num_accounts,
                "Initialized state"
            );
        }

        Ok(())
    }

    /// Run one top-level message from `sender`, attaching `funds` of native
    /// value.
    ///
    /// Either every effect of the message is committed, or, if anything
    /// fails, none is.
    pub fn do_execute(
        &mut self,
        sender: Addr,
        msg: Message,
        funds: Uint256,
    ) -> AppResult<Response> {
        let config = CONFIG.load(&self.storage)?;

        if sender == config.pool || sender == config.router {
            return Err(AppError::ReservedSender { sender });
        }

        #[cfg(feature = "tracing")]
        let msg_str = format!("{msg:?}");

        let result = self.atomically(|storage| match msg {
            Message::Bank(msg) => {
                if funds.is_non_zero() {
                    return Err(AppError::UnexpectedFunds { funds });
                }

                Ok(amm_bank::execute(storage, sender, msg)?)
            },
            Message::Pool(msg) => {
                amm_bank::transfer(storage, sender, config.pool, Asset::Native, funds)?;

                let ctx = MutableCtx {
                    storage,
                    config: &config,
                    contract: config.pool,
                    sender,
                    funds,
                };

                Ok(amm_pool::execute(ctx, msg)?)
            },
            Message::Router(msg) => {
                amm_bank::transfer(storage, sender, config.router, Asset::Native, funds)?;

                let ctx = MutableCtx {
                    storage,
                    config: &config,
                    contract: config.router,
                    sender,
                    funds,
                };

                Ok(amm_router::execute(ctx, msg)?)
            },
        });

        #[cfg(feature = "tracing")]
        match &result {
            Ok(response) => {
                tracing::info!(
                    sender = sender.to_string(),
                    funds = funds.to_string(),
                    msg = msg_str,
                    response = ?response,
                    "Executed message"
                );
            },
            Err(err) => {
                tracing::warn!(
                    sender = sender.to_string(),
                    funds = funds.to_string(),
                    msg = msg_str,
                    err = err.to_string(),
                    "Message failed; state changes discarded"
                );
            },
        }

        result
    }

    pub fn do_query(&self, query: Query) -> AppResult<Value> {
        let config = CONFIG.load(&self.storage)?;
        let ctx = ImmutableCtx {
            storage: &self.storage,
            config: &config,
        };

        match query {
            Query::Config {} => Ok(config.to_json_value()?),
            Query::Bank(msg) => Ok(amm_bank::query(ctx, msg)?),
            Query::Pool(msg) => Ok(amm_pool::query(ctx, msg)?),
        }
    }

    /// Run `action` on a write buffer over the committed state. Flush the
    /// buffer if it succeeds; discard it otherwise.
    fn atomically<F, T>(&mut self, action: F) -> AppResult<T>
    where
        F: FnOnce(&mut Buffer<MemStorage>) -> AppResult<T>,
    {
        let (storage, result) = Buffer::transact(mem::take(&mut self.storage), action);

        self.storage = storage;

        result
    }
}

// ----------------------------------- tests -----------------------------------
