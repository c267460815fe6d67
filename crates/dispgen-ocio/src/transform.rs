//! Transform descriptions written into color spaces and view transforms.
//!
//! Only the transform kinds a generated display profile and the built-in
//! base configs need are modeled: matrix, exponent, range, builtin and
//! group. They are descriptions, never evaluated here.

/// Transform application direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformDirection {
    /// Forward transform.
    #[default]
    Forward,
    /// Inverse transform.
    Inverse,
}

impl TransformDirection {
    /// Returns the opposite direction.
    #[inline]
    pub fn inverse(self) -> Self {
        match self {
            Self::Forward => Self::Inverse,
            Self::Inverse => Self::Forward,
        }
    }

    /// True for [`TransformDirection::Inverse`].
    #[inline]
    pub fn is_inverse(self) -> bool {
        self == Self::Inverse
    }
}

/// Color transform description.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// 4x4 matrix with offset.
    Matrix(MatrixTransform),
    /// Per-channel power.
    Exponent(ExponentTransform),
    /// Linear remap with optional clamping.
    Range(RangeTransform),
    /// Named builtin (OCIO v2).
    Builtin(BuiltinTransform),
    /// Chain of transforms.
    Group(GroupTransform),
}

/// 4x4 matrix transform, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixTransform {
    /// Row-major 4x4 values.
    pub matrix: [f64; 16],
    /// RGBA offset.
    pub offset: [f64; 4],
    /// Direction.
    pub direction: TransformDirection,
}

/// Per-channel exponent.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentTransform {
    /// RGBA exponents.
    pub value: [f64; 4],
    /// Direction.
    pub direction: TransformDirection,
}

/// Range remap. With equal in/out bounds it is a clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTransform {
    /// Input lower bound.
    pub min_in: Option<f64>,
    /// Input upper bound.
    pub max_in: Option<f64>,
    /// Output lower bound.
    pub min_out: Option<f64>,
    /// Output upper bound.
    pub max_out: Option<f64>,
    /// Direction.
    pub direction: TransformDirection,
}

/// Builtin transform referenced by style name.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltinTransform {
    /// Style, e.g. `CURVE - LINEAR_to_ST-2084`.
    pub style: String,
    /// Direction.
    pub direction: TransformDirection,
}

/// Ordered chain.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTransform {
    /// Children, applied in order.
    pub transforms: Vec<Transform>,
    /// Direction.
    pub direction: TransformDirection,
}

impl Transform {
    /// Matrix transform from a row-major 4x4 array.
    pub fn matrix(m: [f64; 16]) -> Self {
        Self::Matrix(MatrixTransform {
            matrix: m,
            offset: [0.0; 4],
            direction: TransformDirection::Forward,
        })
    }

    /// Uniform RGB scale as a matrix.
    #[rustfmt::skip]
    pub fn scale(s: f64) -> Self {
        Self::matrix([
            s,   0.0, 0.0, 0.0,
            0.0, s,   0.0, 0.0,
            0.0, 0.0, s,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// RGB exponent, alpha untouched.
    pub fn exponent(value: f64) -> Self {
        Self::Exponent(ExponentTransform {
            value: [value, value, value, 1.0],
            direction: TransformDirection::Forward,
        })
    }

    /// Clamp to `[min, max]`.
    pub fn clamp(min: f64, max: f64) -> Self {
        Self::Range(RangeTransform {
            min_in: Some(min),
            max_in: Some(max),
            min_out: Some(min),
            max_out: Some(max),
            direction: TransformDirection::Forward,
        })
    }

    /// Builtin transform by style name.
    pub fn builtin(style: impl Into<String>) -> Self {
        Self::Builtin(BuiltinTransform {
            style: style.into(),
            direction: TransformDirection::Forward,
        })
    }

    /// Group of chained transforms.
    pub fn group(transforms: Vec<Transform>) -> Self {
        Self::Group(GroupTransform {
            transforms,
            direction: TransformDirection::Forward,
        })
    }

    /// Returns the inverse of this transform.
    ///
    /// Groups flip their own direction and reverse child order.
    pub fn inverse(self) -> Self {
        match self {
            Self::Matrix(mut t) => {
                t.direction = t.direction.inverse();
                Self::Matrix(t)
            }
            Self::Exponent(mut t) => {
                t.direction = t.direction.inverse();
                Self::Exponent(t)
            }
            Self::Range(mut t) => {
                t.direction = t.direction.inverse();
                Self::Range(t)
            }
            Self::Builtin(mut t) => {
                t.direction = t.direction.inverse();
                Self::Builtin(t)
            }
            Self::Group(mut t) => {
                t.direction = t.direction.inverse();
                t.transforms.reverse();
                Self::Group(t)
            }
        }
    }

    /// Direction of this transform.
    pub fn direction(&self) -> TransformDirection {
        match self {
            Self::Matrix(t) => t.direction,
            Self::Exponent(t) => t.direction,
            Self::Range(t) => t.direction,
            Self::Builtin(t) => t.direction,
            Self::Group(t) => t.direction,
        }
    }

    /// Children of a group, or this transform alone.
    pub fn steps(&self) -> &[Transform] {
        match self {
            Self::Group(g) => &g.transforms,
            other => std::slice::from_ref(other),
        }
    }
}
