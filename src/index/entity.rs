use serde::{Deserialize, Serialize};

use crate::primitives::Satoshis;

/// One output that was ever paid to an address, as served by the
/// transaction index and annotated by the block index.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxOutputRecord {
    pub txid: String,
    pub ts: u64,
    #[serde(default)]
    pub first_seen_ts: Option<u64>,
    #[serde(rename = "value_sat")]
    pub value: Satoshis,
    pub index: u32,
    #[serde(default)]
    pub spent_tx_id: Option<String>,
    #[serde(default)]
    pub spent_ts: Option<u64>,
    #[serde(default)]
    pub is_confirmed: bool,
    #[serde(default)]
    pub spent_is_confirmed: bool,
    #[serde(default)]
    pub script_pub_key: Option<String>,
    #[serde(default)]
    pub confirmations: u32,
    #[serde(default)]
    pub is_confirmed_cached: bool,
}

impl TxOutputRecord {
    pub fn new(txid: impl Into<String>, index: u32, value: impl Into<Satoshis>, ts: u64) -> Self {
        Self {
            txid: txid.into(),
            ts,
            first_seen_ts: None,
            value: value.into(),
            index,
            spent_tx_id: None,
            spent_ts: None,
            is_confirmed: false,
            spent_is_confirmed: false,
            script_pub_key: None,
            confirmations: 0,
            is_confirmed_cached: false,
        }
    }

    pub fn outpoint(&self) -> String {
        format!("{}:{}", self.txid, self.index)
    }

    pub fn is_spent(&self) -> bool {
        self.spent_tx_id.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub ignore_cache: bool,
    /// Upper bound on the number of records returned; `None` is unbounded.
    pub limit: Option<usize>,
}
