use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::index::TxOutputRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnspentOutput {
    pub address: String,
    pub txid: String,
    pub vout: u32,
    pub ts: u64,
    pub script_pub_key: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub confirmations: u32,
    pub confirmations_from_cache: bool,
}

impl UnspentOutput {
    /// `None` when the output has no scriptPubKey, which happens for
    /// outputs of conflicting (double spent) transactions.
    pub(super) fn from_record(
        address: &str,
        record: TxOutputRecord,
        safe_confirmations: u32,
    ) -> Option<Self> {
        let script_pub_key = record.script_pub_key?;
        let confirmations = if record.is_confirmed_cached {
            safe_confirmations
        } else {
            record.confirmations
        };
        Some(Self {
            address: address.to_owned(),
            txid: record.txid,
            vout: record.index,
            ts: record.ts,
            script_pub_key,
            amount: record.value.to_btc(),
            confirmations,
            confirmations_from_cache: record.is_confirmed_cached,
        })
    }
}
