use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::instrument;

use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use super::{entity::*, error::*, r#trait::*};

/// Serialized form of an in-process index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexSnapshot {
    #[serde(default)]
    pub tip_height: u32,
    /// Outputs per address, in index order.
    #[serde(default)]
    pub outputs: HashMap<String, Vec<TxOutputRecord>>,
    /// Block height of every mined transaction.
    #[serde(default)]
    pub blocks: HashMap<String, u32>,
    /// scriptPubKey hex keyed by `txid:vout`.
    #[serde(default)]
    pub scripts: HashMap<String, String>,
}

/// Transaction and block index held in memory. Confirmations that reached
/// `safe_confirmations` are cached and served without recomputation on
/// later fetches.
#[derive(Debug)]
pub struct MemoryIndex {
    snapshot: IndexSnapshot,
    safe_confirmations: u32,
    confirmed_cache: RwLock<HashSet<String>>,
}

impl MemoryIndex {
    pub fn new(snapshot: IndexSnapshot, safe_confirmations: u32) -> Self {
        Self {
            snapshot,
            safe_confirmations,
            confirmed_cache: RwLock::new(HashSet::new()),
        }
    }

    pub fn from_path(path: impl AsRef<Path>, safe_confirmations: u32) -> Result<Self, IndexError> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot: IndexSnapshot = serde_json::from_str(&raw)?;
        Ok(Self::new(snapshot, safe_confirmations))
    }

    fn confirmations(&self, txid: &str) -> u32 {
        self.snapshot
            .blocks
            .get(txid)
            .and_then(|height| self.snapshot.tip_height.checked_sub(*height))
            .map_or(0, |depth| depth.saturating_add(1))
    }
}

#[async_trait]
impl TransactionIndex for MemoryIndex {
    #[instrument(name = "memory_index.outputs_for_address", skip(self), err)]
    async fn outputs_for_address(
        &self,
        address: &str,
        opts: FetchOptions,
    ) -> Result<Vec<TxOutputRecord>, IndexError> {
        let mut outputs: Vec<TxOutputRecord> = self
            .snapshot
            .outputs
            .get(address)
            .map(|stored| {
                stored
                    .iter()
                    .take(opts.limit.unwrap_or(usize::MAX))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        if !opts.ignore_cache {
            let cache = self.confirmed_cache.read().await;
            for output in outputs.iter_mut().filter(|o| cache.contains(&o.txid)) {
                output.is_confirmed = true;
                output.is_confirmed_cached = true;
            }
        }
        Ok(outputs)
    }

    #[instrument(name = "memory_index.fill_script_pubkeys", skip_all, err)]
    async fn fill_script_pubkeys(
        &self,
        outputs: &mut [TxOutputRecord],
    ) -> Result<(), IndexError> {
        for output in outputs.iter_mut().filter(|o| o.script_pub_key.is_none()) {
            output.script_pub_key = self.snapshot.scripts.get(&output.outpoint()).cloned();
        }
        Ok(())
    }

    #[instrument(name = "memory_index.cache_confirmations", skip_all, fields(n_cached), err)]
    async fn cache_confirmations(&self, outputs: &[TxOutputRecord]) -> Result<(), IndexError> {
        let mut cache = self.confirmed_cache.write().await;
        let mut n_cached = 0;
        for output in outputs.iter().filter(|o| {
            !o.is_confirmed_cached && o.is_confirmed && o.confirmations >= self.safe_confirmations
        }) {
            if cache.insert(output.txid.clone()) {
                n_cached += 1;
            }
        }
        tracing::Span::current().record("n_cached", n_cached);
        Ok(())
    }
}

#[async_trait]
impl BlockIndex for MemoryIndex {
    #[instrument(name = "memory_index.fill_confirmations", skip_all, err)]
    async fn fill_confirmations(&self, outputs: &mut [TxOutputRecord]) -> Result<(), IndexError> {
        for output in outputs.iter_mut() {
            if !output.is_confirmed_cached {
                output.confirmations = self.confirmations(&output.txid);
                output.is_confirmed = output.confirmations > 0;
            }
            output.spent_is_confirmed = output
                .spent_tx_id
                .as_deref()
                .map(|spent| self.confirmations(spent) > 0)
                .unwrap_or(false);
        }
        Ok(())
    }
}
