use serde::{Deserialize, Serialize};

/// Saturate a channel value into `[0, 1]`.
///
/// Never fails: out-of-range input is clamped, in-range input is returned unchanged.
/// NaN maps to 0.
pub fn clip(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else if value > 1.0 {
        1.0
    } else {
        value
    }
}

/// One individual of the population: a fixed position plus an RGB genome.
///
/// The constructor stores every field verbatim. Operators that write colour
/// channels clip before they assign, so `r`, `g` and `b` stay in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Member {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Member {
    pub fn new(x: f64, y: f64, r: f64, g: f64, b: f64, vx: f64, vy: f64) -> Self {
        Self { x, y, r, g, b, vx, vy }
    }

    /// All seven fields zero.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Assign all three channels, clipping each one.
    pub fn set_channels(&mut self, [r, g, b]: [f64; 3]) {
        self.r = clip(r);
        self.g = clip(g);
        self.b = clip(b);
    }

    pub fn max_channel(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    pub fn min_channel(&self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    /// Channels scaled to 0-255 for display.
    pub fn to_rgb8(&self) -> [u8; 3] {
        self.channels().map(|c| (clip(c) * 255.0).round() as u8)
    }

    pub fn hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Screen cell `(x, y, width, height)` for the member at `index` of a snapshot
/// laid out row-major in `columns` square cells of `cell_size`.
pub fn grid_cell(index: usize, columns: usize, cell_size: f64) -> (f64, f64, f64, f64) {
    let columns = columns.max(1);
    let x = (index % columns) as f64 * cell_size;
    let y = (index / columns) as f64 * cell_size;
    (x, y, cell_size, cell_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_saturates() {
        assert_eq!(clip(-0.5), 0.0);
        assert_eq!(clip(1.5), 1.0);
        assert_eq!(clip(f64::NEG_INFINITY), 0.0);
        assert_eq!(clip(f64::INFINITY), 1.0);
        assert_eq!(clip(f64::NAN), 0.0);
    }

    #[test]
    fn test_clip_identity_in_range() {
        for v in [0.0, 0.25, 0.5, 0.999, 1.0] {
            assert_eq!(clip(v), v);
        }
    }

    #[test]
    fn test_constructor_stores_verbatim() {
        let m = Member::new(1.0, 2.0, 3.0, -4.0, 0.5, 6.0, 7.0);
        assert_eq!(m.r, 3.0);
        assert_eq!(m.g, -4.0);
        assert_eq!(m.vx, 6.0);
    }

    #[test]
    fn test_set_channels_clips() {
        let mut m = Member::zeroed();
        m.set_channels([1.2, -0.1, 0.4]);
        assert_eq!(m.channels(), [1.0, 0.0, 0.4]);
    }

    #[test]
    fn test_hex() {
        let m = Member::new(0.0, 0.0, 1.0, 0.0, 0.5, 0.0, 0.0);
        assert_eq!(m.to_rgb8(), [255, 0, 128]);
        assert_eq!(m.hex(), "#ff0080");
    }

    #[test]
    fn test_grid_cell_ten_columns() {
        assert_eq!(grid_cell(0, 10, 40.0), (0.0, 0.0, 40.0, 40.0));
        assert_eq!(grid_cell(9, 10, 40.0), (360.0, 0.0, 40.0, 40.0));
        assert_eq!(grid_cell(23, 10, 40.0), (120.0, 80.0, 40.0, 40.0));
    }
}
