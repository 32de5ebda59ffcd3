//! Text and number extraction over semi-structured HTML.
//!
//! Pure synchronous helpers shared by the source adapters. Nothing here
//! fails: a pattern that does not match means "field absent" and yields
//! `None` (or an empty list), never an error.
//!
//! # Quick start
//!
//! ```
//! use nerithys_extract::{Range, extract_numbers};
//!
//! let nums = extract_numbers("22 – 24 – 26,5 – 28 °C");
//! assert_eq!(nums, vec![22.0, 24.0, 26.5, 28.0]);
//! assert_eq!(Range::from_numbers(&nums), Some(Range { min: 22.0, max: 28.0 }));
//! ```

mod html;
mod numbers;
mod water;

pub use html::{
  clean_html, decode_entities, extract_image_src, extract_label, resolve_url,
  strip_tags, window_after,
};
pub use numbers::{Range, extract_max_size, extract_numbers, extract_param_range};
pub use water::classify_water_type;
