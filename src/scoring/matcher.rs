//! Hybrid match scoring between a resume and a job description

use crate::config::ScoringConfig;
use crate::scoring::similarity::{NullBackend, SimilarityBackend, TfidfBackend};
use crate::scoring::skills::{SkillCatalog, SkillSet};
use serde::{Deserialize, Serialize};

/// Aggregate result of one resume / job description comparison.
///
/// All numeric fields are in [0, 1]. `engine_available` flags whether the
/// cosine figure came from a real vectorization backend; when false the
/// hybrid score carries only the skills-overlap component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub cosine: f32,
    pub skills_overlap: f32,
    pub hybrid: f32,
    pub resume_skills: SkillSet,
    pub jd_skills: SkillSet,
    pub engine_available: bool,
}

/// Jaccard index of two skill sets. The denominator is floored at 1, so
/// two empty sets score 0.0 rather than dividing by zero.
pub fn skills_jaccard(a: &SkillSet, b: &SkillSet) -> f32 {
    let intersection = a.intersection(b).count();
    let union = a.union(b).count().max(1);
    intersection as f32 / union as f32
}

/// Convex-weighted combination of cosine similarity and skills overlap.
///
/// With the similarity engine available the weights are the configured pair
/// (default 0.65 / 0.35). Without it, the cosine weight is dropped entirely
/// rather than redistributed, which caps the score and makes the degraded
/// mode visible in the output.
pub fn hybrid_score(cosine: f32, skills_overlap: f32, engine_available: bool) -> f32 {
    weighted_hybrid(&ScoringConfig::default(), cosine, skills_overlap, engine_available)
}

fn weighted_hybrid(
    scoring: &ScoringConfig,
    cosine: f32,
    skills_overlap: f32,
    engine_available: bool,
) -> f32 {
    let score = if engine_available {
        scoring.cosine_weight * cosine + scoring.skills_weight * skills_overlap
    } else {
        scoring.skills_weight * skills_overlap
    };
    score.clamp(0.0, 1.0)
}

/// Entry point for resume / job description scoring.
///
/// Stateless apart from the backend chosen at construction time, so one
/// engine can serve concurrent comparisons without coordination.
pub struct MatchEngine {
    backend: Box<dyn SimilarityBackend>,
    scoring: ScoringConfig,
}

impl MatchEngine {
    /// Engine with the backend selected by configuration: TF-IDF when
    /// enabled, the null backend otherwise.
    pub fn new(scoring: ScoringConfig) -> Self {
        let backend: Box<dyn SimilarityBackend> = if scoring.enable_tfidf {
            Box::new(TfidfBackend::new())
        } else {
            Box::new(NullBackend)
        };
        Self { backend, scoring }
    }

    /// Engine with an explicit backend, mainly for tests.
    pub fn with_backend(backend: Box<dyn SimilarityBackend>, scoring: ScoringConfig) -> Self {
        Self { backend, scoring }
    }

    pub fn engine_available(&self) -> bool {
        self.backend.available()
    }

    /// Scores `resume_text` against `jd_text`.
    ///
    /// Never fails for any string inputs, empty strings included: skill
    /// extraction and vectorization are both total, and the report always
    /// comes back fully populated.
    pub fn compute_match(
        &self,
        resume_text: &str,
        jd_text: &str,
        extra_skill_keywords: &[String],
    ) -> MatchReport {
        let catalog = SkillCatalog::with_extra(extra_skill_keywords);
        let resume_skills = catalog.extract(resume_text);
        let jd_skills = catalog.extract(jd_text);
        let skills_overlap = skills_jaccard(&resume_skills, &jd_skills);

        let engine_available = self.backend.available();
        let cosine = self.backend.cosine(resume_text, jd_text);
        let hybrid = weighted_hybrid(&self.scoring, cosine, skills_overlap, engine_available);

        MatchReport {
            cosine,
            skills_overlap,
            hybrid,
            resume_skills,
            jd_skills,
            engine_available,
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Scores with the default TF-IDF engine and default weights.
pub fn compute_match(
    resume_text: &str,
    jd_text: &str,
    extra_skill_keywords: &[String],
) -> MatchReport {
    MatchEngine::default().compute_match(resume_text, jd_text, extra_skill_keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_stay_in_range() {
        let cases = [
            ("", ""),
            ("python", ""),
            ("Experienced Python and SQL developer", "Python developer wanted"),
            ("!!!", "???"),
        ];
        for (resume, jd) in cases {
            let report = compute_match(resume, jd, &[]);
            assert!((0.0..=1.0).contains(&report.cosine));
            assert!((0.0..=1.0).contains(&report.skills_overlap));
            assert!((0.0..=1.0).contains(&report.hybrid));
        }
    }

    #[test]
    fn test_identical_documents_full_overlap() {
        let text = "Senior Python engineer, Docker and AWS";
        let report = compute_match(text, text, &[]);
        assert_eq!(report.skills_overlap, 1.0);
        assert!((report.cosine - 1.0).abs() < 1e-6);
        assert!((report.hybrid - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_documents() {
        let report = compute_match("", "", &[]);
        assert_eq!(report.skills_overlap, 0.0);
        assert_eq!(report.cosine, 0.0);
        assert_eq!(report.hybrid, 0.0);
        assert!(report.resume_skills.is_empty());
        assert!(report.jd_skills.is_empty());
    }

    #[test]
    fn test_jaccard_example() {
        let resume = "Experienced Python and SQL developer with AWS deployment experience";
        let jd = "Looking for a Python developer with AWS and Docker skills";
        let report = compute_match(resume, jd, &[]);

        assert!(report.resume_skills.contains("python"));
        assert!(report.resume_skills.contains("sql"));
        assert!(report.resume_skills.contains("aws"));
        assert!(report.jd_skills.contains("python"));
        assert!(report.jd_skills.contains("aws"));
        assert!(report.jd_skills.contains("docker"));

        // intersection {python, aws} = 2, union {python, sql, aws, docker} = 4
        assert!((report.skills_overlap - 0.5).abs() < 1e-6);

        let expected = 0.65 * report.cosine + 0.35 * report.skills_overlap;
        assert!((report.hybrid - expected).abs() < 1e-6);
    }

    #[test]
    fn test_hybrid_weights_when_engine_unavailable() {
        assert!((hybrid_score(1.0, 0.5, false) - 0.175).abs() < 1e-6);
        assert!((hybrid_score(0.8, 0.4, true) - (0.65 * 0.8 + 0.35 * 0.4)).abs() < 1e-6);
    }

    #[test]
    fn test_hybrid_monotonicity() {
        let base = hybrid_score(0.4, 0.4, true);
        assert!(hybrid_score(0.5, 0.4, true) >= base);
        assert!(hybrid_score(0.4, 0.5, true) >= base);
    }

    #[test]
    fn test_null_backend_degrades_gracefully() {
        let scoring = ScoringConfig {
            enable_tfidf: false,
            ..ScoringConfig::default()
        };
        let engine = MatchEngine::new(scoring);
        assert!(!engine.engine_available());

        let text = "Python and Docker all day";
        let report = engine.compute_match(text, text, &[]);
        assert_eq!(report.cosine, 0.0);
        assert!(!report.engine_available);
        assert_eq!(report.skills_overlap, 1.0);
        assert!((report.hybrid - 0.35).abs() < 1e-6);
    }

    #[test]
    fn test_extra_keywords_flow_through() {
        let extras = vec!["rustlang".to_string()];
        let report = compute_match("I ship Rustlang daily", "Rustlang shop", &extras);
        assert!(report.resume_skills.contains("rustlang"));
        assert!(report.jd_skills.contains("rustlang"));
        assert_eq!(report.skills_overlap, 1.0);
    }

    #[test]
    fn test_jaccard_empty_sets() {
        assert_eq!(skills_jaccard(&SkillSet::new(), &SkillSet::new()), 0.0);
    }
}
