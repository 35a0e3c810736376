pub mod cli;
pub mod config;
pub mod dict;
pub mod expanders;
pub mod parser;
pub mod splitters;

pub use config::Config;
pub use splitters::gentest::GenTest;
pub use splitters::samurai::Samurai;
pub use splitters::{Algorithm, IdentifierSplitter, SplitError, Splitter};

use serde::Serialize;

/// One identifier and the words it was split into.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SplitReport {
    pub identifier: String,
    pub words: Vec<String>,
    /// Underscore-joined dictionary expansion, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expansion: Option<String>,
}
