use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    #[error("Exchange rate must be greater than zero, got {0}")]
    NonPositiveRate(Decimal),

    #[error("Conversion of {amount} overflowed")]
    Overflow { amount: Decimal },
}

/// Converts `amount` quoted at `from_rate` into `to_rate`, rounded half away
/// from zero to two decimal places.
///
/// Rates are units per base unit, so the amount is first expressed in the base
/// unit and then scaled into the target.
pub fn convert(
    amount: Decimal,
    from_rate: Decimal,
    to_rate: Decimal,
) -> Result<Decimal, ConversionError> {
    if from_rate <= Decimal::ZERO {
        return Err(ConversionError::NonPositiveRate(from_rate));
    }
    if to_rate <= Decimal::ZERO {
        return Err(ConversionError::NonPositiveRate(to_rate));
    }

    amount
        .checked_div(from_rate)
        .and_then(|base| base.checked_mul(to_rate))
        .map(|converted| converted.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .ok_or(ConversionError::Overflow { amount })
}
