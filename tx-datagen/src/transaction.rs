use std::convert::TryFrom;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::DataGenError;

pub const NUM_DECIMAL_PLACES: u32 = 2;

/// Inclusive bounds of the sampled amount range.
pub const MIN_AMOUNT: f64 = 0.01;
pub const MAX_AMOUNT: f64 = 1000.00;

#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// One synthetic CSV row. Serializes with the `type,client,tx,amount`
/// header, in that column order.
#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    pub transaction_type: TransactionKind,
    #[serde(rename = "client")]
    pub client_id: u16,
    #[serde(rename = "tx")]
    pub transaction_id: u32,
    pub amount: Amount,
}

/// A non-negative amount rescaled to exactly [`NUM_DECIMAL_PLACES`] fractional
/// digits, so it serializes as e.g. `5.10` rather than `5.1`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Distribution<TransactionKind> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TransactionKind {
        if rng.gen::<bool>() {
            TransactionKind::Deposit
        } else {
            TransactionKind::Withdrawal
        }
    }
}

impl Distribution<Amount> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Amount {
        let raw = rng.gen_range(MIN_AMOUNT..=MAX_AMOUNT);
        // raw is finite and within [MIN_AMOUNT, MAX_AMOUNT]
        Amount::try_from(raw).expect("sampled amount is a finite non-negative f64")
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = DataGenError;
    fn try_from(mut decimal: Decimal) -> Result<Self, Self::Error> {
        if decimal >= Decimal::ZERO {
            decimal.rescale(NUM_DECIMAL_PLACES);
            Ok(Amount(decimal))
        } else {
            Err(DataGenError::InvalidAmount)
        }
    }
}

impl TryFrom<f64> for Amount {
    type Error = DataGenError;
    fn try_from(decimal: f64) -> Result<Self, Self::Error> {
        Amount::try_from(Decimal::from_f64(decimal).ok_or(DataGenError::InvalidAmount)?)
    }
}

impl Amount {
    #[must_use]
    pub fn as_decimal(self) -> Decimal {
        self.0
    }
}
