use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressLedgerConfig {
    #[serde(default)]
    pub ignore_cache: bool,
    #[serde(default = "default_safe_confirmations")]
    pub safe_confirmations: u32,
}

impl Default for AddressLedgerConfig {
    fn default() -> Self {
        Self {
            ignore_cache: false,
            safe_confirmations: default_safe_confirmations(),
        }
    }
}

fn default_safe_confirmations() -> u32 {
    6
}
