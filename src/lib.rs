//! Deterministic label → colour mapping for chart front-ends.
//!
//! A label is hashed (base-31 polynomial over UTF-16 units, 32-bit
//! wraparound), the hash is normalized onto `[0, 1]` and rendered as a hue
//! with fixed saturation, lightness and alpha:
//!
//! ```
//! assert_eq!(
//!     label_hue::key_to_color("Engineering"),
//!     "hsla(282.8455700173149, 50%, 50%, 0.5)"
//! );
//! ```

pub mod color;
pub mod data;

pub use color::{
    ColorMap, HslaColor, hash_to_normalized_01, hue_to_color, key_to_color, string_to_hash,
};
pub use data::example::example_dataset;
pub use data::model::{Dataset, DatasetError, Row};
