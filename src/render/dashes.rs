/// Splits a pixel polyline into the visible pieces of a dash pattern.
///
/// # Arguments
/// * `points` - Polyline in backend (pixel) coordinates
/// * `pattern` - Alternating on/off lengths; empty means a solid line
///
/// # Returns
/// The "on" pieces, each a polyline of its own. The pattern carries over across
/// vertices so corners do not restart it.
pub fn dash_polyline(points: &[(i32, i32)], pattern: &[u32]) -> Vec<Vec<(i32, i32)>> {
    if points.len() < 2 || pattern.is_empty() || pattern.iter().all(|&len| len == 0) {
        return if points.is_empty() {
            Vec::new()
        } else {
            vec![points.to_vec()]
        };
    }

    let mut pieces = Vec::new();
    let mut current: Vec<(i32, i32)> = Vec::new();
    let mut phase = 0;
    let mut remaining = pattern[0] as f64;

    for window in points.windows(2) {
        let (start, end) = (window[0], window[1]);
        let dx = (end.0 - start.0) as f64;
        let dy = (end.1 - start.1) as f64;
        let length = dx.hypot(dy);
        let mut travelled = 0.0;

        let at = |distance: f64| {
            if length == 0.0 {
                return start;
            }
            let t = distance / length;
            (
                (start.0 as f64 + dx * t).round() as i32,
                (start.1 as f64 + dy * t).round() as i32,
            )
        };

        while length - travelled > remaining {
            travelled += remaining;
            let point = at(travelled);
            if phase % 2 == 0 {
                if current.is_empty() {
                    current.push(at(travelled - remaining));
                }
                current.push(point);
                pieces.push(std::mem::take(&mut current));
            }
            phase = (phase + 1) % pattern.len();
            remaining = pattern[phase] as f64;
        }

        remaining -= length - travelled;
        if phase % 2 == 0 {
            if current.is_empty() {
                current.push(at(travelled));
            }
            current.push(end);
        }
    }

    if current.len() > 1 {
        pieces.push(current);
    }

    pieces
}
