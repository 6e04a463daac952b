use derive_builder::Builder;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TxLimit {
    /// Fold every output without recording a history list.
    NoHistory,
    #[default]
    Unlimited,
    Capped(usize),
}

impl TxLimit {
    pub fn records_history(&self) -> bool {
        !matches!(self, Self::NoHistory)
    }

    pub fn fetch_limit(&self) -> Option<usize> {
        match self {
            Self::Capped(n) => Some(*n),
            _ => None,
        }
    }
}

/// `0` skips the history list, negative values lift the cap.
impl From<i64> for TxLimit {
    fn from(limit: i64) -> Self {
        match usize::try_from(limit) {
            Ok(0) => Self::NoHistory,
            Ok(n) => Self::Capped(n),
            Err(_) => Self::Unlimited,
        }
    }
}

#[derive(Builder, Debug, Clone, Default)]
#[builder(default)]
pub struct UpdateOptions {
    /// Falls back to the ledger's configured default when unset.
    #[builder(setter(strip_option))]
    pub ignore_cache: Option<bool>,
    #[builder(setter(into))]
    pub tx_limit: TxLimit,
    pub include_tx_info: bool,
    pub only_unspent: bool,
}

impl UpdateOptions {
    pub fn builder() -> UpdateOptionsBuilder {
        UpdateOptionsBuilder::default()
    }
}
