//! # HIL Core
//!
//! Core logic for the health information lookup.
//!
//! The centre of the crate is the annotated-answer engine used by scenario Q&A pages:
//! - [`scanner`] splits an answer into text and bracketed references such as `【輔酶Q10】`
//! - [`resolver`] decides which category a referenced keyword links to
//! - [`segment`] assembles the result into text and link segments
//! - [`answer::AnswerRenderer`] ties the three together
//!
//! Around it sit category normalisation, key-based catalogue lookups, scenario rendering and the
//! natural prescription summary.
//!
//! **No transport concerns**: fetching records from the data service and turning segments into
//! markup belong to the callers (see `hil-cli`).

pub mod answer;
pub mod catalogue;
pub mod category;
pub mod config;
pub mod constants;
pub mod error;
pub mod link_map;
pub mod prescriptions;
pub mod related;
pub mod resolver;
pub mod scanner;
pub mod scenario;
pub mod segment;

pub use answer::AnswerRenderer;
pub use catalogue::Catalogue;
pub use category::Category;
pub use config::CoreConfig;
pub use error::{LookupError, LookupResult};
pub use link_map::LinkMap;
pub use related::RelatedTag;
pub use scenario::{RenderedQa, RenderedScenario, ScenarioService};
pub use segment::Segment;

pub use hil_types::Keyword;
