//! Comparison report assembly

use crate::llm::analyzer::JdMatchAnalysis;
use crate::scoring::matcher::MatchReport;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything one `match` run produced: the deterministic scores plus the
/// optional LLM comparison, stamped with generation time and input paths.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub generated_at: DateTime<Utc>,
    pub resume_path: String,
    pub jd_path: String,
    pub scores: MatchReport,
    pub llm: Option<JdMatchAnalysis>,
}

impl ComparisonReport {
    pub fn new(
        resume_path: String,
        jd_path: String,
        scores: MatchReport,
        llm: Option<JdMatchAnalysis>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            resume_path,
            jd_path,
            scores,
            llm,
        }
    }
}
