use thiserror::Error;

use crate::address::error::{AddressError, LedgerError};

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("TallyError - AddressError: {0}")]
    AddressError(#[from] AddressError),
    #[error("TallyError - LedgerError: {0}")]
    LedgerError(#[from] LedgerError),
}
