use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use eframe::egui::Color32;
use palette::{Hsla, IntoColor, Srgba};

/// Largest value of the unsigned 32-bit range the hash is normalized against.
const U32_RANGE: f64 = 4_294_967_295.0;

const SATURATION: f64 = 0.5;
const LIGHTNESS: f64 = 0.5;
const ALPHA: f64 = 0.5;

// ---------------------------------------------------------------------------
// Hashing: label → i32
// ---------------------------------------------------------------------------

/// Polynomial (base 31) string hash with 32-bit wraparound.
///
/// Iterates UTF-16 code units, so a character outside the Basic Multilingual
/// Plane contributes both of its surrogates. Not collision resistant; only
/// meant for stable bucketing.
pub fn string_to_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        // (hash << 5) - hash == hash * 31
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}

// ---------------------------------------------------------------------------
// Normalization: i32 → [0, 1]
// ---------------------------------------------------------------------------

/// Reinterpret the hash as unsigned and scale it onto `[0, 1]`.
///
/// Both ends are reachable: `0` maps to `0.0` and `-1` (all bits set) maps to
/// exactly `1.0`.
pub fn hash_to_normalized_01(hash: i32) -> f64 {
    f64::from(hash as u32) / U32_RANGE
}

// ---------------------------------------------------------------------------
// Colour rendering: [0, 1] → "hsla(...)"
// ---------------------------------------------------------------------------

/// Render a normalized hue as a CSS `hsla()` colour with fixed saturation,
/// lightness and alpha.
pub fn hue_to_color(hue: f64) -> String {
    HslaColor::from_normalized(hue).to_string()
}

/// Full pipeline: label → hash → normalized hue → CSS colour string.
pub fn key_to_color(key: &str) -> String {
    HslaColor::for_key(key).to_string()
}

/// An HSLA colour. Saturation, lightness and alpha are fractions in `[0, 1]`,
/// hue is in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslaColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl HslaColor {
    /// Colour for a normalized hue; the hue angle is `n * 360`, unrounded.
    pub fn from_normalized(n: f64) -> Self {
        Self {
            hue: n * 360.0,
            saturation: SATURATION,
            lightness: LIGHTNESS,
            alpha: ALPHA,
        }
    }

    /// Stable colour for a label.
    pub fn for_key(key: &str) -> Self {
        Self::from_normalized(hash_to_normalized_01(string_to_hash(key)))
    }

    /// Convert to an egui colour (unmultiplied alpha).
    pub fn to_color32(self) -> Color32 {
        let hsla = Hsla::new(
            self.hue as f32,
            self.saturation as f32,
            self.lightness as f32,
            self.alpha as f32,
        );
        let rgba: Srgba = hsla.into_color();
        Color32::from_rgba_unmultiplied(
            to_channel(rgba.red),
            to_channel(rgba.green),
            to_channel(rgba.blue),
            to_channel(rgba.alpha),
        )
    }
}

impl fmt::Display for HslaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            css_number(self.hue),
            css_number(self.saturation * 100.0),
            css_number(self.lightness * 100.0),
            css_number(self.alpha),
        )
    }
}

/// Shortest round-trip decimal printed the way a browser prints numbers:
/// exponent form below 1e-6 and from 1e21 up, no negative zero, and
/// `NaN`/`Infinity` spelled out.
fn css_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let magnitude = v.abs();
    if magnitude < 1e-6 {
        format!("{v:e}")
    } else if magnitude >= 1e21 {
        format!("{v:e}").replacen('e', "e+", 1)
    } else {
        format!("{v}")
    }
}

fn to_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

// ---------------------------------------------------------------------------
// Color mapping: category → Color32
// ---------------------------------------------------------------------------

/// Maps dataset categories to their stable colours.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, HslaColor>,
}

impl ColorMap {
    /// Build a colour map for the given categories.
    pub fn new(categories: &BTreeSet<String>) -> Self {
        let mapping = categories
            .iter()
            .map(|c| (c.clone(), HslaColor::for_key(c)))
            .collect();
        ColorMap { mapping }
    }

    /// HSLA colour for a category. Unknown categories are hashed on the fly,
    /// which yields the same colour they would get once mapped.
    pub fn hsla_for(&self, category: &str) -> HslaColor {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or_else(|| HslaColor::for_key(category))
    }

    /// Look up the egui colour for a category.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.hsla_for(category).to_color32()
    }

    /// Return the legend entries (category → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(c, hsla)| (c.clone(), hsla.to_color32()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(string_to_hash(""), 0);
    }

    #[test]
    fn hash_is_deterministic() {
        for s in ["Engineering", "Marketing", "", "2020", "ünïcödé"] {
            assert_eq!(string_to_hash(s), string_to_hash(s));
        }
    }

    #[test]
    fn hash_regression_values() {
        assert_eq!(string_to_hash("a"), 97);
        assert_eq!(string_to_hash("Engineering"), -920_488_205);
        assert_eq!(string_to_hash("Marketing"), 1_070_197_254);
        assert_eq!(string_to_hash("Sales"), 79_649_004);
        assert_eq!(string_to_hash("Other"), 76_517_104);
        assert_eq!(string_to_hash("2020"), 1_537_276);
    }

    #[test]
    fn hash_uses_code_points_not_utf8_bytes() {
        // 'é' is two UTF-8 bytes but a single UTF-16 unit (0xE9).
        assert_eq!(string_to_hash("é"), 233);
    }

    #[test]
    fn astral_characters_hash_as_surrogate_pairs() {
        // U+1F600 → 0xD83D 0xDE00
        assert_eq!(string_to_hash("😀"), 0xD83D * 31 + 0xDE00);
        assert_eq!(string_to_hash("😀"), 1_772_899);
    }

    #[test]
    fn normalized_bounds() {
        assert_eq!(hash_to_normalized_01(0), 0.0);
        assert_eq!(hash_to_normalized_01(-1), 1.0);
        assert_eq!(hash_to_normalized_01(i32::MIN), 2_147_483_648.0 / U32_RANGE);
        for s in ["Engineering", "Marketing", "Sales", "Other", "x", "😀"] {
            let n = hash_to_normalized_01(string_to_hash(s));
            assert!((0.0..=1.0).contains(&n), "{s} → {n}");
        }
    }

    #[test]
    fn hue_to_color_format() {
        assert_eq!(hue_to_color(0.0), "hsla(0, 50%, 50%, 0.5)");
        assert_eq!(hue_to_color(0.5), "hsla(180, 50%, 50%, 0.5)");
        assert_eq!(hue_to_color(1.0), "hsla(360, 50%, 50%, 0.5)");
        assert_eq!(hue_to_color(0.25), format!("hsla({}, 50%, 50%, 0.5)", 0.25 * 360.0));
    }

    #[test]
    fn tiny_hues_use_exponent_notation() {
        let n = hash_to_normalized_01(1);
        assert_eq!(hue_to_color(n), "hsla(8.38190317349087e-8, 50%, 50%, 0.5)");
    }

    #[test]
    fn hue_edge_values_print_like_browser_numbers() {
        assert_eq!(hue_to_color(-0.0), "hsla(0, 50%, 50%, 0.5)");
        assert_eq!(hue_to_color(f64::INFINITY), "hsla(Infinity, 50%, 50%, 0.5)");
        assert_eq!(hue_to_color(f64::NEG_INFINITY), "hsla(-Infinity, 50%, 50%, 0.5)");
        assert_eq!(hue_to_color(f64::NAN), "hsla(NaN, 50%, 50%, 0.5)");
        assert_eq!(hue_to_color(1e20), "hsla(3.6e+22, 50%, 50%, 0.5)");
        assert_eq!(css_number(1e21), "1e+21");
        assert_eq!(css_number(1e20), "100000000000000000000");
    }

    #[test]
    fn key_to_color_regression() {
        assert_eq!(
            key_to_color("Engineering"),
            "hsla(282.8455700173149, 50%, 50%, 0.5)"
        );
        assert_eq!(key_to_color(""), "hsla(0, 50%, 50%, 0.5)");
        assert_eq!(key_to_color("Marketing"), key_to_color("Marketing"));
    }

    #[test]
    fn distinct_labels_get_distinct_hues() {
        let eng = HslaColor::for_key("Engineering");
        let mkt = HslaColor::for_key("Marketing");
        assert_ne!(eng.hue, mkt.hue);
        assert_ne!(key_to_color("Engineering"), key_to_color("Marketing"));
    }

    #[test]
    fn color32_keeps_half_alpha() {
        let c = HslaColor::from_normalized(0.0).to_color32();
        assert_eq!(c.a(), 128);
        // hue 0, s=l=0.5 → rgb(191, 64, 64) before alpha
        assert_eq!(Color32::from_rgba_unmultiplied(191, 64, 64, 128), c);
    }

    #[test]
    fn color_map_matches_direct_lookup() {
        let categories: BTreeSet<String> =
            ["Sales", "Other"].iter().map(|s| s.to_string()).collect();
        let cm = ColorMap::new(&categories);
        assert_eq!(cm.len(), 2);
        assert_eq!(cm.color_for("Sales"), HslaColor::for_key("Sales").to_color32());
        assert_eq!(cm.hsla_for("Unmapped"), HslaColor::for_key("Unmapped"));

        let legend = cm.legend_entries();
        assert_eq!(legend[0].0, "Other");
        assert_eq!(legend[1].0, "Sales");
    }
}
