mod config;
mod home_directory;
mod init;
mod query;
mod state;
mod tx;

use {
    crate::{
        config::Config, home_directory::HomeDirectory, init::InitCmd, query::QueryCmd, tx::TxCmd,
    },
    amm_math::{Uint256, DECIMALS},
    clap::Parser,
    colored_json::ToColoredJson,
    config_parser::ConfigParser,
    serde::Serialize,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
};

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Directory for the config file and persisted state [default: ~/.amm]
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Initialize state from a genesis file
    Init(InitCmd),

    /// Make a query [alias: q]
    #[command(next_display_order = None, alias = "q")]
    Query(QueryCmd),

    /// Send a message
    #[command(next_display_order = None)]
    Tx(TxCmd),
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Find the home directory from the CLI `--home` flag.
    let app_dir = HomeDirectory::new_or_default(cli.home)?;

    // Parse the config file, if there is one.
    let cfg: Config = if app_dir.config_file().exists() {
        ConfigParser::parse(app_dir.config_file())?
    } else {
        Config::default()
    };

    // Set up tracing.
    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level.parse::<LevelFilter>()?)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Init(cmd) => cmd.run(app_dir),
        Command::Query(cmd) => cmd.run(app_dir),
        Command::Tx(cmd) => cmd.run(app_dir, &cfg),
    }
}

/// Amounts on the command line are decimal strings with 18 decimals, e.g.
/// `1.5` for 1.5 native or token.
fn parse_amount(s: &str) -> anyhow::Result<Uint256> {
    Ok(Uint256::checked_from_units(s, DECIMALS)?)
}

fn print_json_pretty<T>(data: T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let json = serde_json::to_string_pretty(&data)?;
    let colored = json.to_colored_json_auto()?;

    println!("{colored}");

    Ok(())
}

// ----------------------------------- tests -----------------------------------
