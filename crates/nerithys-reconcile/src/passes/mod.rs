//! The concrete passes. Network passes implement [`Pass`](crate::Pass);
//! local ones are methods on [`Engine`](crate::Engine).

mod crossref;
mod images;
mod local;
mod scrape;

pub use crossref::CrossRefPass;
pub use images::ImagePass;
pub use local::FilterOptions;
pub use scrape::{ScrapeItem, ScrapePass};
