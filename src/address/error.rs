use thiserror::Error;

use crate::{index::error::IndexError, primitives::error::ConversionError};

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("AddressError - InvalidAddress: {0}")]
    InvalidAddress(#[from] crate::primitives::bitcoin::AddressError),
    #[error("AddressError - Conversion: {0}")]
    Conversion(#[from] ConversionError),
}

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("LedgerError - IndexError: {0}")]
    Index(#[from] IndexError),
    #[error("LedgerError - Conversion: {0}")]
    Conversion(#[from] ConversionError),
}
