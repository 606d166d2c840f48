use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::domain::Error;

/// A strictly positive sum of money.
///
/// Every balance mutation takes an `Amount`, so zero and negative values are
/// rejected at construction and never reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, Error> {
        if value <= Decimal::ZERO {
            return Err(Error::InvalidAmount(value));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> Decimal {
        self.0
    }

    pub fn parse(s: &str) -> Result<Self, Error> {
        let value = s
            .trim()
            .parse::<Decimal>()
            .map_err(|_| Error::Ingestion(format!("invalid amount: {s:?}")))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self, Error> {
        Self::new(value)
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::parse(&s).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
