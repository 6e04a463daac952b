use tracing::instrument;

use std::sync::Arc;

use super::{config::*, entity::*, error::*, options::*, unspent::*};
use crate::index::*;

/// Drives aggregation passes over the transaction and block indexes.
///
/// A pass runs fetch, confirm and cache in order, then either builds the
/// unspent outputs or folds every record into the summary. The first
/// failing stage aborts the pass. Whatever the summary held at that point
/// is kept as is.
#[derive(Clone)]
pub struct AddressLedger {
    transactions: Arc<dyn TransactionIndex>,
    blocks: Arc<dyn BlockIndex>,
    config: AddressLedgerConfig,
}

impl AddressLedger {
    pub fn new(
        transactions: Arc<dyn TransactionIndex>,
        blocks: Arc<dyn BlockIndex>,
        config: AddressLedgerConfig,
    ) -> Self {
        Self {
            transactions,
            blocks,
            config,
        }
    }

    #[instrument(
        name = "address_ledger.update",
        skip(self, summary),
        fields(address = %summary.addr_str, n_outputs, n_unspent),
        err
    )]
    pub async fn update(
        &self,
        summary: &mut AddressSummary,
        opts: UpdateOptions,
    ) -> Result<(), LedgerError> {
        if summary.addr_str.is_empty() {
            return Ok(());
        }

        let fetch = FetchOptions {
            ignore_cache: opts.ignore_cache.unwrap_or(self.config.ignore_cache),
            limit: opts.tx_limit.fetch_limit(),
        };
        let mut outputs = self.fetch_outputs(&summary.addr_str, fetch).await?;
        tracing::Span::current().record("n_outputs", outputs.len());
        self.fill_confirmations(&mut outputs).await?;
        self.cache_confirmations(&outputs).await?;

        if opts.only_unspent {
            summary.unspent = self.build_unspent(&summary.addr_str, outputs).await?;
            tracing::Span::current().record("n_unspent", summary.unspent.len());
        } else {
            let mut history = opts.tx_limit.records_history().then(Vec::new);
            for output in outputs.iter() {
                summary.add_tx_item(output, history.as_mut(), opts.include_tx_info)?;
            }
            if let Some(history) = history {
                summary.transactions = history;
            }
        }

        Ok(())
    }

    #[instrument(name = "address_ledger.fetch_outputs", skip(self), err)]
    async fn fetch_outputs(
        &self,
        address: &str,
        opts: FetchOptions,
    ) -> Result<Vec<TxOutputRecord>, LedgerError> {
        Ok(self.transactions.outputs_for_address(address, opts).await?)
    }

    #[instrument(name = "address_ledger.fill_confirmations", skip_all, err)]
    async fn fill_confirmations(&self, outputs: &mut [TxOutputRecord]) -> Result<(), LedgerError> {
        Ok(self.blocks.fill_confirmations(outputs).await?)
    }

    #[instrument(name = "address_ledger.cache_confirmations", skip_all, err)]
    async fn cache_confirmations(&self, outputs: &[TxOutputRecord]) -> Result<(), LedgerError> {
        Ok(self.transactions.cache_confirmations(outputs).await?)
    }

    #[instrument(name = "address_ledger.build_unspent", skip(self, outputs), err)]
    async fn build_unspent(
        &self,
        address: &str,
        outputs: Vec<TxOutputRecord>,
    ) -> Result<Vec<UnspentOutput>, LedgerError> {
        let mut unspent: Vec<TxOutputRecord> =
            outputs.into_iter().filter(|o| !o.is_spent()).collect();
        self.transactions.fill_script_pubkeys(&mut unspent).await?;
        Ok(unspent
            .into_iter()
            .filter_map(|o| UnspentOutput::from_record(address, o, self.config.safe_confirmations))
            .collect())
    }
}
