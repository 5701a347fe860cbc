//! Configuration module for the expense tracker
//!
//! Resolves where the expense store lives and sets up logging.

pub mod logging;
pub mod paths;

pub use logging::init_tracing;
pub use paths::{PathSource, TrackerPaths};
