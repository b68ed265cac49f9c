use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Per-day accent colors
// ---------------------------------------------------------------------------

/// Accent color for entry `index` of `total`, using evenly spaced hues so
/// neighbouring days stay visually distinct across the whole program.
pub fn accent(index: usize, total: usize) -> Color32 {
    let total = total.max(1);
    let hue = (index as f32 / total as f32) * 360.0;
    let hsl = Hsl::new(hue, 0.65, 0.40);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_accents_are_distinct_over_the_program() {
        let colors: BTreeSet<_> = (0..30).map(|i| accent(i, 30).to_array()).collect();
        assert_eq!(colors.len(), 30);
    }

    #[test]
    fn test_degenerate_sizes_do_not_panic() {
        let _ = accent(0, 0);
        let _ = accent(0, 1);
    }
}
