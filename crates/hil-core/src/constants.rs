//! Constants used throughout the core crate.

/// Catalogue document used when neither `--data` nor `HIL_DATA_FILE` is given.
pub const DEFAULT_DATA_FILE: &str = "data/database.json";

/// Default byte limit for a compiled reference pattern.
///
/// Matches the `regex` crate's own default; answers declare a handful of keywords, so hitting it
/// means the link map is malformed.
pub const DEFAULT_PATTERN_SIZE_LIMIT: usize = 10 * 1024 * 1024;

/// Route prefix for entity detail pages, e.g. `/results/nutrient/維生素C`.
pub const RESULTS_ROUTE_PREFIX: &str = "/results";
