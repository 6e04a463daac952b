mod config;
pub mod error;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use std::sync::Arc;

use crate::{
    address::*,
    index::{BlockIndex, TransactionIndex},
    primitives::{bitcoin::Network, Satoshis},
};
pub use config::*;
use error::ApplicationError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, clap::ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AddressProperty {
    Balance,
    TotalReceived,
    TotalSent,
    UnconfirmedBalance,
}

#[derive(Clone)]
pub struct App {
    ledger: AddressLedger,
    network: Network,
}

impl App {
    pub fn new(
        config: AppConfig,
        transactions: Arc<dyn TransactionIndex>,
        blocks: Arc<dyn BlockIndex>,
    ) -> Self {
        Self {
            ledger: AddressLedger::new(transactions, blocks, config.ledger),
            network: config.network,
        }
    }

    pub fn from_index<I>(config: AppConfig, index: Arc<I>) -> Self
    where
        I: TransactionIndex + BlockIndex + 'static,
    {
        Self::new(config, index.clone(), index)
    }

    #[instrument(name = "app.address_summary", skip(self), err)]
    pub async fn address_summary(
        &self,
        address: &str,
        opts: UpdateOptions,
    ) -> Result<AddressView, ApplicationError> {
        let mut summary = AddressSummary::new(address, self.network)?;
        self.ledger.update(&mut summary, opts).await?;
        Ok(summary.to_view())
    }

    #[instrument(name = "app.address_property", skip(self), err)]
    pub async fn address_property(
        &self,
        address: &str,
        property: AddressProperty,
    ) -> Result<Satoshis, ApplicationError> {
        let mut summary = AddressSummary::new(address, self.network)?;
        let opts = UpdateOptions {
            tx_limit: TxLimit::NoHistory,
            ..Default::default()
        };
        self.ledger.update(&mut summary, opts).await?;
        Ok(match property {
            AddressProperty::Balance => summary.balance_sat,
            AddressProperty::TotalReceived => summary.total_received_sat,
            AddressProperty::TotalSent => summary.total_sent_sat,
            AddressProperty::UnconfirmedBalance => summary.unconfirmed_balance_sat,
        })
    }

    /// Unspent outputs of every address, in request order. Each address
    /// gets its own pass and the passes run concurrently.
    #[instrument(name = "app.list_utxos", skip(self), err)]
    pub async fn list_utxos(
        &self,
        addresses: &[String],
        ignore_cache: Option<bool>,
    ) -> Result<Vec<UnspentOutput>, ApplicationError> {
        let passes = addresses
            .iter()
            .map(|address| self.address_utxos(address, ignore_cache));
        let unspent = futures::future::try_join_all(passes).await?;
        Ok(unspent.into_iter().flatten().collect())
    }

    async fn address_utxos(
        &self,
        address: &str,
        ignore_cache: Option<bool>,
    ) -> Result<Vec<UnspentOutput>, ApplicationError> {
        let mut summary = AddressSummary::new(address, self.network)?;
        let opts = UpdateOptions {
            ignore_cache,
            only_unspent: true,
            ..Default::default()
        };
        self.ledger.update(&mut summary, opts).await?;
        Ok(summary.unspent)
    }
}
