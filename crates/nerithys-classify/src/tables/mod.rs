//! Curated lookup tables. Compiled in; never mutated.

pub mod genera;
pub mod keywords;
pub mod popular;
