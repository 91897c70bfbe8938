//! Fixed style palettes and the deterministic mapping from solver index to style.

use static_assertions::const_assert;

/// Line pattern of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashPattern {
    Solid,
    Dotted,
    Dashed,
    DashDot,
}

/// Shape drawn at every visible sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Square,
    TriangleUp,
    Circle,
    Diamond,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    Star,
    TriDown,
    Cross,
    Plus,
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Everything needed to draw one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTriple {
    pub dash: DashPattern,
    pub marker: MarkerShape,
    pub color: Rgb,
}

pub const DASHES: [DashPattern; 4] = [
    DashPattern::Solid,
    DashPattern::Dotted,
    DashPattern::Dashed,
    DashPattern::DashDot,
];

pub const MARKERS: [MarkerShape; 11] = [
    MarkerShape::Square,
    MarkerShape::TriangleUp,
    MarkerShape::Circle,
    MarkerShape::Diamond,
    MarkerShape::TriangleDown,
    MarkerShape::TriangleLeft,
    MarkerShape::TriangleRight,
    MarkerShape::Star,
    MarkerShape::TriDown,
    MarkerShape::Cross,
    MarkerShape::Plus,
];

/// Tableau palette, followed by magenta.
pub const COLORS: [Rgb; 10] = [
    Rgb(31, 119, 180),
    Rgb(255, 127, 14),
    Rgb(44, 160, 44),
    Rgb(214, 39, 40),
    Rgb(148, 103, 189),
    Rgb(140, 86, 75),
    Rgb(227, 119, 194),
    Rgb(127, 127, 127),
    Rgb(188, 189, 34),
    Rgb(255, 0, 255),
];

pub const BLACK: Rgb = Rgb(0, 0, 0);

// Indexing below is modulo the palette lengths.
const_assert!(!DASHES.is_empty());
const_assert!(!MARKERS.is_empty());
const_assert!(!COLORS.is_empty());

/// Style of the series at `index` (solver column plus the configured offset).
///
/// Each component cycles through its own palette, so the triple repeats only every
/// `lcm(4, 11, 10)` series.
pub fn style_for(index: usize) -> StyleTriple {
    StyleTriple {
        dash: DASHES[index % DASHES.len()],
        marker: MARKERS[index % MARKERS.len()],
        color: COLORS[index % COLORS.len()],
    }
}

impl DashPattern {
    /// Alternating on/off lengths in pixels; empty for a solid line.
    pub fn segments(self) -> &'static [u32] {
        match self {
            DashPattern::Solid => &[],
            DashPattern::Dotted => &[2, 4],
            DashPattern::Dashed => &[9, 5],
            DashPattern::DashDot => &[9, 4, 2, 4],
        }
    }
}

impl MarkerShape {
    /// Whether the marker is a closed outline that can be filled.
    pub fn is_closed(self) -> bool {
        !matches!(self, MarkerShape::TriDown | MarkerShape::Cross | MarkerShape::Plus)
    }

    /// Strokes making up the marker, in pixel offsets around its center.
    ///
    /// Closed shapes return a single stroke whose last point repeats the first.
    pub fn strokes(self, size: i32) -> Vec<Vec<(i32, i32)>> {
        let r = size;
        let closed = |points: Vec<(i32, i32)>| {
            let mut points = points;
            if let Some(&first) = points.first() {
                points.push(first);
            }
            vec![points]
        };

        match self {
            MarkerShape::Square => closed(vec![(-r, -r), (r, -r), (r, r), (-r, r)]),
            MarkerShape::TriangleUp => closed(vec![(0, -r), (r, r), (-r, r)]),
            MarkerShape::TriangleDown => closed(vec![(0, r), (-r, -r), (r, -r)]),
            MarkerShape::TriangleLeft => closed(vec![(-r, 0), (r, -r), (r, r)]),
            MarkerShape::TriangleRight => closed(vec![(r, 0), (-r, r), (-r, -r)]),
            MarkerShape::Diamond => closed(vec![(0, -r), (r, 0), (0, r), (-r, 0)]),
            MarkerShape::Circle => closed(polygon_points(12, r as f64, 0.0)),
            MarkerShape::Star => closed(star_points(r as f64)),
            MarkerShape::TriDown => {
                let spokes = polygon_points(3, r as f64, std::f64::consts::PI);
                spokes.into_iter().map(|tip| vec![(0, 0), tip]).collect()
            }
            MarkerShape::Cross => vec![vec![(-r, -r), (r, r)], vec![(-r, r), (r, -r)]],
            MarkerShape::Plus => vec![vec![(-r, 0), (r, 0)], vec![(0, -r), (0, r)]],
        }
    }
}

/// Vertices of a regular polygon with one vertex pointing up (screen y grows down).
fn polygon_points(count: usize, radius: f64, phase: f64) -> Vec<(i32, i32)> {
    (0..count)
        .map(|i| {
            let angle = phase + i as f64 * std::f64::consts::TAU / count as f64;
            let x = radius * angle.sin();
            let y = -radius * angle.cos();
            (x.round() as i32, y.round() as i32)
        })
        .collect()
}

fn star_points(radius: f64) -> Vec<(i32, i32)> {
    let outer = polygon_points(5, radius, 0.0);
    let inner = polygon_points(5, radius * 0.45, std::f64::consts::PI / 5.0);
    outer
        .into_iter()
        .zip(inner)
        .flat_map(|(o, i)| [o, i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_styles_follow_palettes() {
        assert_eq!(
            style_for(0),
            StyleTriple {
                dash: DashPattern::Solid,
                marker: MarkerShape::Square,
                color: COLORS[0],
            }
        );
        assert_eq!(style_for(1).dash, DashPattern::Dotted);
        assert_eq!(style_for(1).marker, MarkerShape::TriangleUp);
        assert_eq!(style_for(1).color, COLORS[1]);
    }

    #[test]
    fn palettes_cycle_independently() {
        assert_eq!(style_for(4).dash, DashPattern::Solid);
        assert_eq!(style_for(4).marker, MarkerShape::TriangleDown);
        assert_eq!(style_for(10).color, COLORS[0]);
        assert_eq!(style_for(11).marker, MarkerShape::Square);
        assert_eq!(style_for(220), style_for(0));
    }

    #[test]
    fn style_is_deterministic() {
        for index in 0..50 {
            assert_eq!(style_for(index), style_for(index));
        }
    }

    #[test]
    fn closed_markers_repeat_their_first_point() {
        for marker in MARKERS {
            let strokes = marker.strokes(4);
            assert!(!strokes.is_empty());
            if marker.is_closed() {
                assert_eq!(strokes.len(), 1);
                assert_eq!(strokes[0].first(), strokes[0].last());
            }
        }
    }

    #[test]
    fn markers_stay_within_their_size() {
        for marker in MARKERS {
            for stroke in marker.strokes(5) {
                assert!(stroke.iter().all(|&(x, y)| x.abs() <= 5 && y.abs() <= 5));
            }
        }
    }

    #[test]
    fn dash_patterns_have_even_length() {
        for dash in DASHES {
            assert_eq!(dash.segments().len() % 2, 0);
        }
    }
}
