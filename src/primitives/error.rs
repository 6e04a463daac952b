use rust_decimal::Decimal;
use thiserror::Error;

use super::Satoshis;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("ConversionError - SubSatoshiPrecision: {0} is not a whole number of satoshis")]
    SubSatoshiPrecision(Decimal),
    #[error("ConversionError - Overflow: {0} does not fit in satoshis")]
    Overflow(Decimal),
    #[error("ConversionError - AmountOverflow: {0} and {1} sats exceed the satoshi range")]
    AmountOverflow(Satoshis, Satoshis),
}
