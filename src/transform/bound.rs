/// An axis bound that is either given by the caller or derived from the data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Bound {
    /// Use this exact value.
    Explicit(f64),

    /// Infer the value from the data (and the configured limits).
    #[default]
    Derived,
}

impl Bound {
    /// Converts an optional user value into a bound; [`None`] means [`Bound::Derived`].
    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(Bound::Derived, Bound::Explicit)
    }

    /// Returns the explicit value, or computes one with `derive`.
    pub fn resolve(self, derive: impl FnOnce() -> f64) -> f64 {
        match self {
            Bound::Explicit(value) => value,
            Bound::Derived => derive(),
        }
    }
}

impl From<Option<f64>> for Bound {
    fn from(value: Option<f64>) -> Self {
        Bound::from_option(value)
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Bound::Explicit(value)
    }
}
