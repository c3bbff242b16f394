// Official Rwanda zoning display colors, keyed by zone code.
//
// Static configuration data, not logic: the dashboard expects these exact
// hex values per land-use category.
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Neutral gray for zone codes outside the official table.
pub const DEFAULT_COLOR: &str = "#666666";

static ZONING_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("W5", "#c6e0b4"),
        ("W4", "#c6e0b4"),
        ("W3", "#c6e0b4"),
        ("W2", "#c6e0b4"),
        ("U", "#7f5f3f"),
        ("T", "#b2b2b2"),
        ("T1", "#b2b2b2"),
        ("R4", "#ff5a25"),
        ("R3", "#ff7f00"),
        ("R2", "#ffbb36"),
        ("R1B", "#ffebb0"),
        ("R1A", "#ffec18"),
        ("R1", "#ffff7f"),
        ("PF5", "#003fff"),
        ("PF4", "#003fff"),
        ("PF3", "#003fff"),
        ("PF2", "#003fff"),
        ("PF1", "#003fff"),
        ("PA", "#00ffff"),
        ("P3C", "#0d4925"),
        ("P3B", "#0d4925"),
        ("P2", "#007f3f"),
        ("P1", "#7dff00"),
        ("I3", "#9452a5"),
        ("I2", "#9c7abc"),
        ("I1", "#c27ac0"),
        ("C3", "#960202"),
        ("C1", "#cc3366"),
        ("A1", "#6e8131"),
        ("A2", "#6e8131"),
        ("ET", "#888888"),
    ])
});

pub fn color_for(code: &str) -> &'static str {
    ZONING_COLORS.get(code).copied().unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_official_colors() {
        assert_eq!(color_for("R1"), "#ffff7f");
        assert_eq!(color_for("C3"), "#960202");
        assert_eq!(color_for("PF1"), "#003fff");
    }

    #[test]
    fn unknown_codes_fall_back_to_gray() {
        assert_eq!(color_for("ZZ9"), DEFAULT_COLOR);
        assert_eq!(color_for(""), DEFAULT_COLOR);
    }
}
