use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entity::*;
use crate::primitives::Satoshis;

/// Flat explorer representation of an `AddressSummary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressView {
    pub addr_str: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub balance_sat: Satoshis,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_received: Decimal,
    pub total_received_sat: Satoshis,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_sent: Decimal,
    pub total_sent_sat: Satoshis,
    #[serde(with = "rust_decimal::serde::float")]
    pub unconfirmed_balance: Decimal,
    pub unconfirmed_balance_sat: Satoshis,
    #[serde(rename = "unconfirmedTxApperances")]
    pub unconfirmed_tx_appearances: u64,
    #[serde(rename = "txApperances")]
    pub tx_appearances: u64,
    pub transactions: Vec<TxEntry>,
}

impl From<&AddressSummary> for AddressView {
    fn from(summary: &AddressSummary) -> Self {
        Self {
            addr_str: summary.addr_str.clone(),
            balance: summary.balance(),
            balance_sat: summary.balance_sat,
            total_received: summary.total_received(),
            total_received_sat: summary.total_received_sat,
            total_sent: summary.total_sent(),
            total_sent_sat: summary.total_sent_sat,
            unconfirmed_balance: summary.unconfirmed_balance(),
            unconfirmed_balance_sat: summary.unconfirmed_balance_sat,
            unconfirmed_tx_appearances: summary.unconfirmed_tx_appearances,
            tx_appearances: summary.tx_appearances,
            transactions: summary.transactions.clone(),
        }
    }
}

impl AddressSummary {
    pub fn to_view(&self) -> AddressView {
        AddressView::from(self)
    }
}
