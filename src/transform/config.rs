use super::bound::Bound;

/// Offset used to push clamped samples outside the visible axis range.
pub const OUT_OF_BOUNDS_OFFSET: f64 = 1e6;

/// Controls how raw observations are turned into plottable values.
///
/// # Remarks
///
/// The pipeline only ever reads this struct; [`transform`] is a pure function of
/// the table and the configuration.
///
/// [`transform`]: crate::transform::pipeline::transform
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformConfig {
    /// Added to every observation before anything else happens.
    pub shift: f64,

    /// Skips the shift and uses observations as they are.
    pub raw: bool,

    /// Divide every row by its minimum, making the best solver on each instance 1.0.
    pub as_ratio: bool,

    /// Left end of the x axis, in plotted units.
    pub x_min: Bound,

    /// Right end of the x axis, in plotted units.
    pub x_max: Bound,

    /// Samples at or below this (shifted) value are pushed out of the visible range.
    ///
    /// With [`Self::as_ratio`] the limit is divided by each row's minimum before
    /// comparing, so it keeps its meaning in the original units.
    pub x_lower_limit: Option<f64>,

    /// Samples at or above this (shifted) value are pushed out of the visible range.
    ///
    /// Scaled like [`Self::x_lower_limit`].
    pub x_upper_limit: Option<f64>,
}

impl TransformConfig {
    pub fn with_shift(mut self, shift: f64) -> Self {
        self.shift = shift;
        self
    }

    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    pub fn with_ratio(mut self, as_ratio: bool) -> Self {
        self.as_ratio = as_ratio;
        self
    }

    pub fn with_x_min(mut self, x_min: impl Into<Bound>) -> Self {
        self.x_min = x_min.into();
        self
    }

    pub fn with_x_max(mut self, x_max: impl Into<Bound>) -> Self {
        self.x_max = x_max.into();
        self
    }

    pub fn with_lower_limit(mut self, limit: Option<f64>) -> Self {
        self.x_lower_limit = limit;
        self
    }

    pub fn with_upper_limit(mut self, limit: Option<f64>) -> Self {
        self.x_upper_limit = limit;
        self
    }

    /// Amount actually added to every observation.
    pub fn effective_shift(&self) -> f64 {
        if self.raw {
            0.0
        } else {
            self.shift
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_derives_everything() {
        let config = TransformConfig::default();
        assert_eq!(config.shift, 0.0);
        assert!(!config.as_ratio);
        assert_eq!(config.x_min, Bound::Derived);
        assert_eq!(config.x_max, Bound::Derived);
        assert_eq!(config.x_lower_limit, None);
        assert_eq!(config.x_upper_limit, None);
    }

    #[test]
    fn raw_disables_shift() {
        let config = TransformConfig::default().with_shift(10.0);
        assert_eq!(config.effective_shift(), 10.0);
        assert_eq!(config.with_raw(true).effective_shift(), 0.0);
    }

    #[test]
    fn builders_accept_plain_and_optional_bounds() {
        let config = TransformConfig::default()
            .with_x_min(1.0)
            .with_x_max(Bound::Derived)
            .with_upper_limit(Some(3600.0));
        assert_eq!(config.x_min, Bound::Explicit(1.0));
        assert_eq!(config.x_max, Bound::Derived);
        assert_eq!(config.x_upper_limit, Some(3600.0));
    }
}
