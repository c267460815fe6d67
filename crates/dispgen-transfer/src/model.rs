//! Concrete model selection from an [`Eotf`].

use crate::error::TransferResult;
use crate::{Gamma, Hlg, Pq, TransferFunction};
use dispgen_core::{Eotf, LuminanceProfile, ViewingConditions};
use tracing::debug;

/// One of the three display curves, parameterized for a display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransferModel {
    /// ST 2084.
    Pq(Pq),
    /// BT.2100 HLG.
    Hlg(Hlg),
    /// Power law.
    Gamma(Gamma),
}

impl TransferModel {
    /// Builds the model for `eotf` on a display with `luminance` viewed
    /// under `viewing`.
    pub fn for_eotf(
        eotf: Eotf,
        luminance: &LuminanceProfile,
        viewing: &ViewingConditions,
    ) -> TransferResult<Self> {
        let model = match eotf {
            Eotf::Pq => Self::Pq(Pq::new(luminance.peak_luminance)?),
            Eotf::Hlg => Self::Hlg(Hlg::new(luminance.peak_luminance, viewing.ambient_light)?),
            Eotf::Gamma(g) => Self::Gamma(Gamma::new(g)?),
        };
        debug!(eotf = %eotf, model = ?model, "transfer::for_eotf");
        Ok(model)
    }

    fn inner(&self) -> &dyn TransferFunction {
        match self {
            Self::Pq(m) => m,
            Self::Hlg(m) => m,
            Self::Gamma(m) => m,
        }
    }
}

impl TransferFunction for TransferModel {
    fn to_linear(&self, code: f64) -> f64 {
        self.inner().to_linear(code)
    }

    fn from_linear(&self, linear: f64) -> f64 {
        self.inner().from_linear(linear)
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }
}
