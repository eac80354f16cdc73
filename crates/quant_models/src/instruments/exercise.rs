//! Option exercise style definitions.

/// Option exercise style.
///
/// Defines when an option can be exercised during its lifetime. The
/// lattice engine supports both styles; the analytic engine is
/// European-only by construction.
///
/// # Variants
/// - `European`: exercise only at expiry
/// - `American`: exercise at any node up to and including expiry
///
/// # Examples
/// ```
/// use quant_models::instruments::Exercise;
///
/// assert!(Exercise::American.is_american());
/// assert!(!Exercise::European.is_american());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Exercise {
    /// European style: exercise only at expiry.
    European,

    /// American style: exercise at any time before expiry.
    American,
}

impl Exercise {
    /// Returns whether this is a European exercise style.
    #[inline]
    pub fn is_european(self) -> bool {
        matches!(self, Exercise::European)
    }

    /// Returns whether this is an American exercise style.
    #[inline]
    pub fn is_american(self) -> bool {
        matches!(self, Exercise::American)
    }
}
