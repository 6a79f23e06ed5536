//! Dark banding colors, one per top-level group.

use crate::models::RgbColor;

/// First hue of the sweep, in degrees.
pub const START_HUE: f64 = 0.0;
/// Last hue of the sweep, in degrees.
pub const END_HUE: f64 = 275.0;
/// Saturation in percent.
pub const SATURATION: f64 = 90.0;
/// Lightness in percent.
pub const LIGHTNESS: f64 = 18.0;

/// Produces `count` dark colors sweeping hue linearly from red to violet.
///
/// The first color is always hue 0; a single group gets just that color.
///
/// ```
/// use shortcuts_popup::layout::assign_colors;
///
/// let colors = assign_colors(3);
/// assert_eq!(colors[0].to_hex(), "#570505");
/// assert_eq!(colors[2].to_hex(), "#350557");
/// ```
#[must_use]
pub fn assign_colors(count: usize) -> Vec<RgbColor> {
    let steps = count.saturating_sub(1);
    (0..count)
        .map(|i| {
            let hue = if steps == 0 {
                START_HUE
            } else {
                START_HUE + (i as f64 / steps as f64) * (END_HUE - START_HUE)
            };
            RgbColor::from_hsl(hue, SATURATION, LIGHTNESS)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::collections::HashSet;

    #[test]
    fn test_five_distinct_hex_colors() {
        let pattern = Regex::new(r"^#[0-9a-f]{6}$").unwrap();
        let colors: Vec<String> = assign_colors(5).iter().map(RgbColor::to_hex).collect();

        assert_eq!(colors.len(), 5);
        assert!(colors.iter().all(|c| pattern.is_match(c)), "{colors:?}");
        let unique: HashSet<_> = colors.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_single_color_uses_start_hue() {
        let colors = assign_colors(1);
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].to_hex(), "#570505");
    }

    #[test]
    fn test_zero_colors() {
        assert!(assign_colors(0).is_empty());
    }

    #[test]
    fn test_sweep_endpoints_and_order() {
        let colors = assign_colors(12);
        assert_eq!(colors[0], RgbColor::from_hsl(0.0, 90.0, 18.0));
        assert_eq!(colors[11], RgbColor::from_hsl(275.0, 90.0, 18.0));
        assert_eq!(colors[0..3], assign_colors(12)[0..3]);
    }
}
