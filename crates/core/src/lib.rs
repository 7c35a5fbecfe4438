#![forbid(unsafe_code)]

pub mod adapt;
pub mod catalog;
pub mod error;
pub mod model;
pub mod recommend;
pub mod time;

pub use catalog::{Catalog, CatalogError, ChapterFilter};
pub use error::Error;
pub use recommend::{Recommendation, rank};
pub use time::Clock;
