#![allow(dead_code)]

use async_trait::async_trait;

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tally::{
    address::*,
    index::{error::IndexError, *},
    primitives::Satoshis,
};

pub const ADDRESS: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
pub const OTHER_ADDRESS: &str = "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq";
pub const SAFE_CONFIRMATIONS: u32 = 6;

pub fn record(txid: &str, vout: u32, value: i64, ts: u64) -> TxOutputRecord {
    TxOutputRecord::new(txid, vout, Satoshis::from(value), ts)
}

fn spent_by(mut record: TxOutputRecord, txid: &str, ts: u64) -> TxOutputRecord {
    record.spent_tx_id = Some(txid.to_string());
    record.spent_ts = Some(ts);
    record
}

/// Tip at 200. `ADDRESS` holds, in index order:
/// - `a1` 100_000 mined at 100, unspent
/// - `a2` 200_000 mined at 150, spent by `s1` mined at 160
/// - `a3` 300_000 mined at 199, spent by `s2` still in the mempool
/// - `m1` 500_000 in the mempool
/// - `d1` 50_000 mined at 180, unspent but without a known scriptPubKey
///
/// `OTHER_ADDRESS` holds `b1` 70_000 mined at 120, unspent.
pub fn snapshot() -> IndexSnapshot {
    let mut m1 = record("m1", 0, 500_000, 1_900);
    m1.first_seen_ts = Some(1_890);
    let outputs = vec![
        record("a1", 0, 100_000, 1_000),
        spent_by(record("a2", 1, 200_000, 1_500), "s1", 1_600),
        spent_by(record("a3", 0, 300_000, 1_990), "s2", 1_995),
        m1,
        record("d1", 0, 50_000, 1_800),
    ];
    IndexSnapshot {
        tip_height: 200,
        outputs: HashMap::from([
            (ADDRESS.to_string(), outputs),
            (
                OTHER_ADDRESS.to_string(),
                vec![record("b1", 2, 70_000, 1_200)],
            ),
        ]),
        blocks: HashMap::from([
            ("a1".to_string(), 100),
            ("a2".to_string(), 150),
            ("s1".to_string(), 160),
            ("a3".to_string(), 199),
            ("d1".to_string(), 180),
            ("b1".to_string(), 120),
        ]),
        scripts: HashMap::from([
            ("a1:0".to_string(), "76a91462e907b15cbf27d5425399ebf6f0fb50ebb88f1888ac".to_string()),
            ("a2:1".to_string(), "76a91462e907b15cbf27d5425399ebf6f0fb50ebb88f1888ac".to_string()),
            ("m1:0".to_string(), "76a91462e907b15cbf27d5425399ebf6f0fb50ebb88f1888ac".to_string()),
            ("b1:2".to_string(), "0014e8df018c7e326cc253faac7e46cdc51e68542c42".to_string()),
        ]),
    }
}

pub fn memory_index() -> Arc<MemoryIndex> {
    Arc::new(MemoryIndex::new(snapshot(), SAFE_CONFIRMATIONS))
}

pub fn ledger(index: Arc<MemoryIndex>) -> AddressLedger {
    AddressLedger::new(index.clone(), index, AddressLedgerConfig::default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Confirm,
    Cache,
    Scripts,
}

/// Wraps a `MemoryIndex`, logging every collaborator call and failing at
/// the configured stage.
pub struct ScriptedIndex {
    inner: MemoryIndex,
    fail_at: Option<Stage>,
    calls: Mutex<Vec<Stage>>,
}

impl ScriptedIndex {
    pub fn new(fail_at: Option<Stage>) -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryIndex::new(snapshot(), SAFE_CONFIRMATIONS),
            fail_at,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Stage> {
        self.calls.lock().unwrap().clone()
    }

    fn enter(&self, stage: Stage) -> Result<(), IndexError> {
        self.calls.lock().unwrap().push(stage);
        if self.fail_at == Some(stage) {
            return Err(IndexError::Unavailable(format!("{stage:?} is down")));
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionIndex for ScriptedIndex {
    async fn outputs_for_address(
        &self,
        address: &str,
        opts: FetchOptions,
    ) -> Result<Vec<TxOutputRecord>, IndexError> {
        self.enter(Stage::Fetch)?;
        self.inner.outputs_for_address(address, opts).await
    }

    async fn fill_script_pubkeys(
        &self,
        outputs: &mut [TxOutputRecord],
    ) -> Result<(), IndexError> {
        self.enter(Stage::Scripts)?;
        self.inner.fill_script_pubkeys(outputs).await
    }

    async fn cache_confirmations(&self, outputs: &[TxOutputRecord]) -> Result<(), IndexError> {
        self.enter(Stage::Cache)?;
        self.inner.cache_confirmations(outputs).await
    }
}

#[async_trait]
impl BlockIndex for ScriptedIndex {
    async fn fill_confirmations(&self, outputs: &mut [TxOutputRecord]) -> Result<(), IndexError> {
        self.enter(Stage::Confirm)?;
        self.inner.fill_confirmations(outputs).await
    }
}

pub fn scripted_ledger(index: Arc<ScriptedIndex>) -> AddressLedger {
    AddressLedger::new(index.clone(), index, AddressLedgerConfig::default())
}
