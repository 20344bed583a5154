//! Careerwise library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod scoring;

pub use config::Config;
pub use error::{CareerwiseError, Result};
pub use scoring::matcher::{compute_match, MatchEngine, MatchReport};
pub use scoring::skills::extract_skills;
