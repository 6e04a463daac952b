use super::entity::*;
use crate::{index::TxOutputRecord, primitives::error::ConversionError};

impl AddressSummary {
    /// Folds one output record into the counters.
    ///
    /// The receiving txid counts as a founding appearance the first time it
    /// is seen, and the spending txid as a spending appearance the first
    /// time it is seen. Appearances are pushed to `history` (when present)
    /// in that order. An outpoint already folded in this pass is ignored.
    /// A record whose amounts would overflow leaves the summary untouched.
    pub fn add_tx_item(
        &mut self,
        item: &TxOutputRecord,
        mut history: Option<&mut Vec<TxEntry>>,
        include_info: bool,
    ) -> Result<(), ConversionError> {
        let outpoint = (item.txid.clone(), item.index);
        if self.folded.contains(&outpoint) {
            return Ok(());
        }

        let founding = !self.seen.contains(&item.txid);
        let spending = item
            .spent_tx_id
            .as_ref()
            .is_some_and(|spent| *spent != item.txid && !self.seen.contains(spent));

        let value = item.value;
        let mut balance = self.balance_sat;
        let mut received = self.total_received_sat;
        let mut sent = self.total_sent_sat;
        let mut pending = self.unconfirmed_balance_sat;
        let mut appearances = self.tx_appearances;
        let mut pending_appearances = self.unconfirmed_tx_appearances;
        match (item.is_confirmed, item.is_spent(), item.spent_is_confirmed) {
            (false, _, _) => {
                pending = pending.checked_add(value)?;
                pending_appearances += u64::from(founding);
            }
            (true, false, _) => {
                appearances += u64::from(founding);
                received = received.checked_add(value)?;
                balance = balance.checked_add(value)?;
            }
            (true, true, false) => {
                appearances += u64::from(founding);
                received = received.checked_add(value)?;
                balance = balance.checked_add(value)?;
                pending = pending.checked_sub(value)?;
                pending_appearances += u64::from(spending);
            }
            (true, true, true) => {
                appearances += u64::from(spending);
                received = received.checked_add(value)?;
                sent = sent.checked_add(value)?;
            }
        }

        self.balance_sat = balance;
        self.total_received_sat = received;
        self.total_sent_sat = sent;
        self.unconfirmed_balance_sat = pending;
        self.tx_appearances = appearances;
        self.unconfirmed_tx_appearances = pending_appearances;
        self.folded.insert(outpoint);

        if founding {
            self.seen.insert(item.txid.clone());
            push_entry(
                &mut history,
                include_info,
                TxInfo {
                    txid: item.txid.clone(),
                    ts: Some(item.ts),
                    first_seen_ts: item.first_seen_ts,
                },
            );
        }
        if let (true, Some(spent_tx_id)) = (spending, item.spent_tx_id.as_ref()) {
            self.seen.insert(spent_tx_id.clone());
            push_entry(
                &mut history,
                include_info,
                TxInfo {
                    txid: spent_tx_id.clone(),
                    ts: item.spent_ts,
                    first_seen_ts: None,
                },
            );
        }
        Ok(())
    }
}

fn push_entry(history: &mut Option<&mut Vec<TxEntry>>, include_info: bool, info: TxInfo) {
    if let Some(list) = history.as_deref_mut() {
        if include_info {
            list.push(TxEntry::Info(info));
        } else {
            list.push(TxEntry::Id(info.txid));
        }
    }
}
