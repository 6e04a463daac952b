use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::collections::HashSet;

use super::{error::AddressError, unspent::UnspentOutput};
use crate::primitives::{bitcoin::*, *};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxInfo {
    pub txid: String,
    pub ts: Option<u64>,
    pub first_seen_ts: Option<u64>,
}

/// A history entry: the bare txid, or the txid with its timestamps when
/// full info was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TxEntry {
    Id(String),
    Info(TxInfo),
}

impl TxEntry {
    pub fn txid(&self) -> &str {
        match self {
            Self::Id(txid) => txid,
            Self::Info(info) => &info.txid,
        }
    }
}

/// Ledger summary of a single address, filled by one `AddressLedger` pass.
#[derive(Debug, Clone, Default)]
pub struct AddressSummary {
    pub addr_str: String,
    pub balance_sat: Satoshis,
    pub total_received_sat: Satoshis,
    pub total_sent_sat: Satoshis,
    pub unconfirmed_balance_sat: Satoshis,
    pub tx_appearances: u64,
    pub unconfirmed_tx_appearances: u64,
    pub transactions: Vec<TxEntry>,
    pub unspent: Vec<UnspentOutput>,
    pub(super) seen: HashSet<String>,
    pub(super) folded: HashSet<(String, u32)>,
}

impl AddressSummary {
    /// Validates `address` for `network` and keeps its canonical encoding,
    /// derived back from the scriptPubKey it pays to.
    pub fn new(address: &str, network: Network) -> Result<Self, AddressError> {
        let addr_str = canonical_address(address, network)?;
        Ok(Self {
            addr_str,
            ..Default::default()
        })
    }

    pub fn balance(&self) -> Decimal {
        self.balance_sat.to_btc()
    }

    pub fn set_balance(&mut self, btc: Decimal) -> Result<(), AddressError> {
        self.balance_sat = Satoshis::from_btc(btc)?;
        Ok(())
    }

    pub fn total_received(&self) -> Decimal {
        self.total_received_sat.to_btc()
    }

    pub fn set_total_received(&mut self, btc: Decimal) -> Result<(), AddressError> {
        self.total_received_sat = Satoshis::from_btc(btc)?;
        Ok(())
    }

    pub fn total_sent(&self) -> Decimal {
        self.total_sent_sat.to_btc()
    }

    pub fn set_total_sent(&mut self, btc: Decimal) -> Result<(), AddressError> {
        self.total_sent_sat = Satoshis::from_btc(btc)?;
        Ok(())
    }

    pub fn unconfirmed_balance(&self) -> Decimal {
        self.unconfirmed_balance_sat.to_btc()
    }

    pub fn set_unconfirmed_balance(&mut self, btc: Decimal) -> Result<(), AddressError> {
        self.unconfirmed_balance_sat = Satoshis::from_btc(btc)?;
        Ok(())
    }

    pub fn has_seen(&self, txid: &str) -> bool {
        self.seen.contains(txid)
    }
}

fn canonical_address(address: &str, network: Network) -> Result<String, AddressError> {
    let parsed = address
        .parse::<Address<NetworkUnchecked>>()?
        .require_network(network)?;
    let canonical = Address::from_script(&parsed.script_pubkey(), network)?.to_string();
    // re-validate the derived form
    canonical
        .parse::<Address<NetworkUnchecked>>()?
        .require_network(network)?;
    Ok(canonical)
}
