//! Pure classifiers over existing fiches.
//!
//! [`region`] refines an unqualified freshwater biotope into a regional one;
//! [`popularity`] decides whether a species stays in the encyclopedia.
//! Neither touches the repository: the reconcile passes apply the verdicts.

pub mod popularity;
pub mod region;
pub mod tables;

pub use popularity::{Keep, Verdict, assess, is_popular};
pub use region::{Evidence, Refinement, Region, classify_region, keyword_hits};
