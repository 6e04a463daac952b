mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::{path::PathBuf, sync::Arc};

use crate::{
    address::{TxLimit, UpdateOptions},
    app::{AddressProperty, App},
    index::MemoryIndex,
};
pub use config::*;

#[derive(Parser)]
#[clap(version, long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[clap(short, long, env = "TALLY_CONFIG", value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// Index snapshot (JSON) to answer lookups from
    #[clap(
        short,
        long,
        env = "TALLY_INDEX",
        default_value = "index.json",
        value_name = "FILE",
        global = true
    )]
    index: PathBuf,
    /// Overrides the configured cache policy for confirmations
    #[clap(long, env = "TALLY_IGNORE_CACHE", global = true)]
    ignore_cache: Option<bool>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Balances, totals and transaction history of an address
    Summary {
        address: String,
        /// 0 skips the history list, -1 returns every transaction
        #[clap(long, default_value_t = -1, allow_hyphen_values = true)]
        tx_limit: i64,
        #[clap(long)]
        include_tx_info: bool,
    },
    /// A single satoshi figure of an address
    Balance {
        address: String,
        #[clap(short, long, value_enum, default_value = "balance")]
        property: AddressProperty,
    },
    /// Unspent outputs of one or more addresses
    Utxo {
        #[clap(required = true)]
        addresses: Vec<String>,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_path(
        cli.config,
        EnvOverride {
            ignore_cache: cli.ignore_cache,
        },
    )?;
    crate::tracing::init_tracer(config.tracing)?;

    let index = MemoryIndex::from_path(&cli.index, config.app.ledger.safe_confirmations)
        .context("Couldn't load index snapshot")?;
    let app = App::from_index(config.app, Arc::new(index));

    match cli.command {
        Command::Summary {
            address,
            tx_limit,
            include_tx_info,
        } => {
            let opts = UpdateOptions::builder()
                .tx_limit(TxLimit::from(tx_limit))
                .include_tx_info(include_tx_info)
                .build()?;
            print_json(&app.address_summary(&address, opts).await?)?;
        }
        Command::Balance { address, property } => {
            print_json(&app.address_property(&address, property).await?)?;
        }
        Command::Utxo { addresses } => {
            print_json(&app.list_utxos(&addresses, None).await?)?;
        }
    }
    Ok(())
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
