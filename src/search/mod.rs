//! Column search with normalized matching and keyword fallback

pub mod matcher;
pub mod normalize;


pub use matcher::{RowMatch, RowMatcher, SearchOutcome};
