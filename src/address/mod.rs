mod config;
mod entity;
pub mod error;
mod ledger;
mod options;
mod tx_item;
mod unspent;
mod view;

pub use config::*;
pub use entity::*;
pub use ledger::*;
pub use options::*;
pub use unspent::*;
pub use view::*;
