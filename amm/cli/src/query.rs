use {
    crate::{home_directory::HomeDirectory, print_json_pretty, state::load_app},
    amm_types::{bank, pool, Addr, Asset, Query},
    clap::{Parser, Subcommand},
};

#[derive(Parser)]
pub struct QueryCmd {
    #[command(subcommand)]
    subcmd: SubCmd,
}

#[derive(Subcommand)]
enum SubCmd {
    /// Deployment parameters set at genesis
    Config,
    /// The pool's recorded reserves
    Reserves,
    /// Total supply of shares
    TotalShares,
    /// An account's native or token balance
    Balance {
        /// Account address
        address: Addr,
        /// `native` or `token`
        asset: Asset,
    },
    /// Total supply of native or token
    Supply {
        /// `native` or `token`
        asset: Asset,
    },
    /// An account's share balance
    Shares {
        /// Account address
        holder: Addr,
    },
    /// Token allowance granted by an owner to a spender
    Allowance { owner: Addr, spender: Addr },
    /// Share allowance granted by an owner to a spender
    ShareAllowance { owner: Addr, spender: Addr },
    /// Every non-zero share balance, including the pool's locked shares
    Holders,
}

impl QueryCmd {
    pub fn run(self, dir: HomeDirectory) -> anyhow::Result<()> {
        let app = load_app(&dir)?;

        let req = match self.subcmd {
            SubCmd::Config => Query::Config {},
            SubCmd::Reserves => Query::Pool(pool::QueryMsg::Reserves {}),
            SubCmd::TotalShares => Query::Pool(pool::QueryMsg::TotalShares {}),
            SubCmd::Balance { address, asset } => {
                Query::Bank(bank::QueryMsg::Balance { address, asset })
            },
            SubCmd::Supply { asset } => Query::Bank(bank::QueryMsg::Supply { asset }),
            SubCmd::Shares { holder } => Query::Pool(pool::QueryMsg::ShareBalance { holder }),
            SubCmd::Allowance { owner, spender } => {
                Query::Bank(bank::QueryMsg::Allowance { owner, spender })
            },
            SubCmd::ShareAllowance { owner, spender } => {
                Query::Pool(pool::QueryMsg::ShareAllowance { owner, spender })
            },
            SubCmd::Holders => Query::Pool(pool::QueryMsg::ShareHolders {}),
        };

        print_json_pretty(app.do_query(req)?)
    }
}
