use serde::{Deserialize, Serialize};

use crate::{address::AddressLedgerConfig, primitives::bitcoin::Network};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_network")]
    pub network: Network,
    #[serde(default)]
    pub ledger: AddressLedgerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            ledger: AddressLedgerConfig::default(),
        }
    }
}

fn default_network() -> Network {
    Network::Bitcoin
}
