mod entity;
pub mod error;
mod memory;
mod r#trait;

pub use entity::*;
pub use error::IndexError;
pub use memory::*;
pub use r#trait::*;
