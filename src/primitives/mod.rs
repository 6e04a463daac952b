pub mod error;

use rust_decimal::{prelude::ToPrimitive, Decimal};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use std::fmt;

use error::ConversionError;

pub mod bitcoin {
    pub use bdk::bitcoin::{
        address::{Error as AddressError, NetworkUnchecked},
        Address, Network,
    };
}

pub const SATS_PER_BTC: Decimal = dec!(100_000_000);

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Satoshis(i64);

impl Satoshis {
    pub const ZERO: Self = Self(0);

    pub fn to_btc(self) -> Decimal {
        Decimal::from(self.0) / SATS_PER_BTC
    }

    /// Exact conversion from a display amount. Amounts that would need
    /// rounding to a whole satoshi are rejected.
    pub fn from_btc(btc: Decimal) -> Result<Self, ConversionError> {
        let sats = btc
            .checked_mul(SATS_PER_BTC)
            .ok_or(ConversionError::Overflow(btc))?;
        if !sats.fract().is_zero() {
            return Err(ConversionError::SubSatoshiPrecision(btc));
        }
        sats.to_i64()
            .map(Self)
            .ok_or(ConversionError::Overflow(btc))
    }

    pub fn checked_add(self, rhs: Satoshis) -> Result<Self, ConversionError> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(ConversionError::AmountOverflow(self, rhs))
    }

    pub fn checked_sub(self, rhs: Satoshis) -> Result<Self, ConversionError> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(ConversionError::AmountOverflow(self, rhs))
    }
}

impl From<i64> for Satoshis {
    fn from(sats: i64) -> Self {
        Self(sats)
    }
}

impl From<i32> for Satoshis {
    fn from(sats: i32) -> Self {
        Self(i64::from(sats))
    }
}

impl From<u32> for Satoshis {
    fn from(sats: u32) -> Self {
        Self(i64::from(sats))
    }
}

impl From<Satoshis> for i64 {
    fn from(sats: Satoshis) -> i64 {
        sats.0
    }
}

impl fmt::Display for Satoshis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
