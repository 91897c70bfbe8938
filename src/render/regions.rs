//! Shaded regions split at `x = 0`, used when plotting signed differences.

/// Which side of zero a region covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// `x < 0`, drawn green.
    Below,

    /// `x >= 0`, drawn red.
    AtOrAbove,
}

/// A horizontal span of the x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub kind: RegionKind,
    pub start: f64,
    pub end: f64,
}

/// Splits the visible range `[x_min, x_max]` at zero.
///
/// Returns only the non-empty sides.
pub fn threshold_regions(x_min: f64, x_max: f64) -> Vec<Region> {
    let mut regions = Vec::with_capacity(2);

    if x_min < 0.0 {
        regions.push(Region {
            kind: RegionKind::Below,
            start: x_min,
            end: x_max.min(0.0),
        });
    }

    if x_max >= 0.0 {
        regions.push(Region {
            kind: RegionKind::AtOrAbove,
            start: x_min.max(0.0),
            end: x_max,
        });
    }

    regions
}
