use {
    crate::{
        config::Config,
        home_directory::HomeDirectory,
        parse_amount, print_json_pretty,
        state::{load_app, save_app},
    },
    amm_math::{Uint256, DECIMALS},
    amm_types::{bank, pool, router, Addr, Asset, Message, Response},
    clap::{Parser, Subcommand},
    colored::Colorize,
};

#[derive(Parser)]
pub struct TxCmd {
    /// Address sending the message
    #[arg(long)]
    sender: Addr,

    /// Native value to attach to the message
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    funds: Uint256,

    #[command(subcommand)]
    subcmd: SubCmd,
}

#[derive(Subcommand)]
enum SubCmd {
    /// Deposit the attached native value and a ratio-matched amount of token
    AddLiquidity {
        /// Token amount to deposit into an empty pool
        #[arg(value_parser = parse_amount)]
        desired_token: Uint256,
        /// Least token the deposit may take
        #[arg(value_parser = parse_amount)]
        min_token: Uint256,
        /// Most token the deposit may take
        #[arg(value_parser = parse_amount)]
        max_token: Uint256,
        /// Recipient of the shares [default: sender]
        #[arg(long)]
        to: Option<Addr>,
    },
    /// Redeem shares for both assets
    RemoveLiquidity {
        /// Shares to redeem
        #[arg(value_parser = parse_amount)]
        shares: Uint256,
        /// Least native to receive
        #[arg(value_parser = parse_amount)]
        min_native: Uint256,
        /// Least token to receive
        #[arg(value_parser = parse_amount)]
        min_token: Uint256,
        /// Recipient of the assets [default: sender]
        #[arg(long)]
        to: Option<Addr>,
    },
    /// Swap the attached native value, or token, through the router
    Swap {
        /// Token to swap for native
        #[arg(long, value_parser = parse_amount, default_value = "0")]
        token_in: Uint256,
        /// Least native to receive when swapping token
        #[arg(long, value_parser = parse_amount, default_value = "0")]
        min_native_out: Uint256,
        /// Least token to receive when swapping native
        #[arg(long, value_parser = parse_amount, default_value = "0")]
        min_token_out: Uint256,
        /// Recipient of the output [default: sender]
        #[arg(long)]
        to: Option<Addr>,
    },
    /// Mint shares directly against the pool's unaccounted balances
    PoolMint {
        /// Recipient of the shares [default: sender]
        #[arg(long)]
        to: Option<Addr>,
    },
    /// Burn the shares held by the pool directly
    PoolBurn {
        /// Recipient of the assets [default: sender]
        #[arg(long)]
        to: Option<Addr>,
    },
    /// Swap directly against the pool's unaccounted balance
    PoolSwap {
        /// Recipient of the output [default: sender]
        #[arg(long)]
        to: Option<Addr>,
    },
    /// Send native or token
    Transfer {
        /// Recipient address
        to: Addr,
        /// `native` or `token`
        asset: Asset,
        #[arg(value_parser = parse_amount)]
        amount: Uint256,
    },
    /// Allow an address to spend the sender's token
    Approve {
        spender: Addr,
        #[arg(value_parser = parse_amount)]
        amount: Uint256,
    },
    /// Send shares
    TransferShares {
        to: Addr,
        #[arg(value_parser = parse_amount)]
        amount: Uint256,
    },
    /// Allow an address to spend the sender's shares
    ApproveShares {
        spender: Addr,
        #[arg(value_parser = parse_amount)]
        amount: Uint256,
    },
}

impl SubCmd {
    fn into_message(self, sender: Addr) -> Message {
        match self {
            SubCmd::AddLiquidity {
                desired_token,
                min_token,
                max_token,
                to,
            } => Message::Router(router::ExecuteMsg::AddLiquidity {
                to: to.unwrap_or(sender),
                desired_token,
                min_token,
                max_token,
            }),
            SubCmd::RemoveLiquidity {
                shares,
                min_native,
                min_token,
                to,
            } => Message::Router(router::ExecuteMsg::RemoveLiquidity {
                to: to.unwrap_or(sender),
                min_native,
                min_token,
                shares,
            }),
            SubCmd::Swap {
                token_in,
                min_native_out,
                min_token_out,
                to,
            } => Message::Router(router::ExecuteMsg::Swap {
                to: to.unwrap_or(sender),
                token_in,
                min_native_out,
                min_token_out,
            }),
            SubCmd::PoolMint { to } => Message::Pool(pool::ExecuteMsg::Mint {
                to: to.unwrap_or(sender),
            }),
            SubCmd::PoolBurn { to } => Message::Pool(pool::ExecuteMsg::Burn {
                to: to.unwrap_or(sender),
            }),
            SubCmd::PoolSwap { to } => Message::Pool(pool::ExecuteMsg::Swap {
                to: to.unwrap_or(sender),
            }),
            SubCmd::Transfer { to, asset, amount } => {
                Message::Bank(bank::ExecuteMsg::Transfer { to, asset, amount })
            },
            SubCmd::Approve { spender, amount } => {
                Message::Bank(bank::ExecuteMsg::Approve { spender, amount })
            },
            SubCmd::TransferShares { to, amount } => {
                Message::Pool(pool::ExecuteMsg::Transfer { to, amount })
            },
            SubCmd::ApproveShares { spender, amount } => {
                Message::Pool(pool::ExecuteMsg::Approve { spender, amount })
            },
        }
    }
}

impl TxCmd {
    pub fn run(self, dir: HomeDirectory, cfg: &Config) -> anyhow::Result<()> {
        let mut app = load_app(&dir)?;
        let msg = self.subcmd.into_message(self.sender);

        // A failed message changes nothing, so there is nothing to save.
        let response = app.do_execute(self.sender, msg, self.funds)?;

        save_app(&dir, &app)?;

        if let Some(summary) = summarize(&response, cfg.display_decimals) {
            println!("{}", summary.green().bold());
        }

        print_json_pretty(response)
    }
}

fn summarize(response: &Response, display_decimals: u32) -> Option<String> {
    let fmt = |amount: Uint256| format_amount(amount, display_decimals);

    match response {
        Response::Empty => None,
        Response::Minted { shares } => Some(format!("Minted {} shares", fmt(*shares))),
        Response::Burned {
            native_out,
            token_out,
        } => Some(format!(
            "Received {} native and {} token",
            fmt(*native_out),
            fmt(*token_out)
        )),
        Response::Swapped {
            asset_out,
            amount_out,
        } => Some(format!("Received {} {asset_out}", fmt(*amount_out))),
    }
}

/// Render base units as a decimal string, cut to `display_decimals`
/// fractional digits.
fn format_amount(amount: Uint256, display_decimals: u32) -> String {
    let Ok(full) = amount.to_units_string(DECIMALS) else {
        return amount.to_string();
    };

    match full.split_once('.') {
        Some((whole, _)) if display_decimals == 0 => whole.to_string(),
        Some((whole, fraction)) if fraction.len() > display_decimals as usize => {
            let fraction = fraction[..display_decimals as usize].trim_end_matches('0');
            if fraction.is_empty() {
                whole.to_string()
            } else {
                format!("{whole}.{fraction}")
            }
        },
        _ => full,
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, amm_math::NumberConst};

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        tx: TxCmd,
    }

    const SENDER: &str = "0x000000000000000000000000000000000000000a";

    #[test]
    fn add_liquidity_defaults_recipient_to_sender() {
        let cmd = Wrapper::try_parse_from([
            "amm",
            "--sender",
            SENDER,
            "--funds",
            "1",
            "add-liquidity",
            "5",
            "4.9",
            "5.1",
        ])
        .unwrap()
        .tx;

        let sender: Addr = SENDER.parse().unwrap();

        assert_eq!(cmd.funds, Uint256::new_from_u128(1_000_000_000_000_000_000));
        assert_eq!(
            cmd.subcmd.into_message(sender),
            Message::Router(router::ExecuteMsg::AddLiquidity {
                to: sender,
                desired_token: Uint256::new_from_u128(5_000_000_000_000_000_000),
                min_token: Uint256::new_from_u128(4_900_000_000_000_000_000),
                max_token: Uint256::new_from_u128(5_100_000_000_000_000_000),
            })
        );
    }

    #[test]
    fn rejects_unknown_asset() {
        assert!(Wrapper::try_parse_from([
            "amm",
            "--sender",
            SENDER,
            "transfer",
            SENDER,
            "gold",
            "1",
        ])
        .is_err());
    }

    #[test]
    fn formatting_amounts() {
        let amount = Uint256::new_from_u128(4_504_094_631_483_166_516);

        assert_eq!(format_amount(amount, 6), "4.504094");
        assert_eq!(format_amount(amount, 0), "4");
        assert_eq!(format_amount(amount, 18), "4.504094631483166516");
        assert_eq!(format_amount(Uint256::new_from_u64(1), 6), "0");
        assert_eq!(format_amount(Uint256::ZERO, 6), "0");
    }
}
