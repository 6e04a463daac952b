use async_trait::async_trait;

use super::{entity::*, error::*};

#[async_trait]
pub trait TransactionIndex: Send + Sync {
    async fn outputs_for_address(
        &self,
        address: &str,
        opts: FetchOptions,
    ) -> Result<Vec<TxOutputRecord>, IndexError>;

    async fn fill_script_pubkeys(&self, outputs: &mut [TxOutputRecord])
        -> Result<(), IndexError>;

    /// Write-back of freshly computed confirmations. Must be idempotent.
    async fn cache_confirmations(&self, outputs: &[TxOutputRecord]) -> Result<(), IndexError>;
}

#[async_trait]
pub trait BlockIndex: Send + Sync {
    async fn fill_confirmations(&self, outputs: &mut [TxOutputRecord]) -> Result<(), IndexError>;
}
