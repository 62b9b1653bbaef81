/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const START_COLOR: Rgb = Rgb(0xff, 0x77, 0x77);
pub const END_COLOR: Rgb = Rgb(0x77, 0x77, 0xff);

/// Linear RGB blend between `a` and `b`, `t` clamped to [0, 1].
pub fn interpolate(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Colour of series `index` out of `count`, spread from red to blue.
pub fn series_color(index: usize, count: usize) -> Rgb {
    if count <= 1 {
        return START_COLOR;
    }
    interpolate(START_COLOR, END_COLOR, index as f64 / (count - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_palette() {
        assert_eq!(series_color(0, 5), START_COLOR);
        assert_eq!(series_color(4, 5), END_COLOR);
    }

    #[test]
    fn midpoint_is_blended() {
        assert_eq!(series_color(1, 3), Rgb(0xbb, 0x77, 0xbb));
    }

    #[test]
    fn single_series_uses_start_color() {
        assert_eq!(series_color(0, 1), START_COLOR);
    }
}
