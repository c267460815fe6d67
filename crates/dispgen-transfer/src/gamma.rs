//! Pure power-law display curve.

use crate::error::{TransferError, TransferResult};
use crate::{TransferFunction, unit};

/// `to_linear(v) = v^gamma`, `from_linear(l) = l^(1/gamma)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma {
    value: f64,
}

impl Gamma {
    /// Power law with exponent `value`.
    pub fn new(value: f64) -> TransferResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(TransferError::InvalidGamma { value });
        }
        Ok(Self { value })
    }

    /// The exponent.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl TransferFunction for Gamma {
    fn to_linear(&self, code: f64) -> f64 {
        unit(code).powf(self.value)
    }

    fn from_linear(&self, linear: f64) -> f64 {
        unit(linear).powf(1.0 / self.value)
    }

    fn name(&self) -> &'static str {
        "GAMMA"
    }
}
