//! Overflow bookkeeping for `Decimal` arithmetic.
//!
//! Record values arrive unbounded from CSV files and requests, so sums,
//! products and quotients can leave the `Decimal` range. Calculations use the
//! checked operations and report an overflowed value as zero, naming it here.

use rust_decimal::Decimal;

/// Sum of `values`, or `None` if any partial sum overflows.
pub(crate) fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |total, value| total.checked_add(value))
}

/// Names of the values that overflowed during one calculation.
#[derive(Debug, Default)]
pub(crate) struct Overflows(Vec<String>);

impl Overflows {
    /// Unwraps a checked result, recording `field` and yielding zero on overflow.
    pub(crate) fn or_zero(&mut self, value: Option<Decimal>, field: &str) -> Decimal {
        self.or_zero_with(value, || field.to_string())
    }

    /// Like [`Overflows::or_zero`], building the field name only on overflow.
    pub(crate) fn or_zero_with(
        &mut self,
        value: Option<Decimal>,
        field: impl FnOnce() -> String,
    ) -> Decimal {
        match value {
            Some(value) => value,
            None => {
                self.0.push(field());
                Decimal::ZERO
            }
        }
    }

    pub(crate) fn into_fields(self) -> Vec<String> {
        self.0
    }
}
