//! Integration tests for careerwise

use careerwise::config::ScoringConfig;
use careerwise::input::manager::InputManager;
use careerwise::llm::analyzer::parse_match_reply;
use careerwise::llm::coach::{fallback_questions, heuristic_feedback, InterviewMode};
use careerwise::output::formatter::{JsonFormatter, OutputFormatter};
use careerwise::output::report::ComparisonReport;
use careerwise::scoring::similarity::NullBackend;
use careerwise::{compute_match, extract_skills, MatchEngine};
use std::io::Write;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Python"));
    assert!(text.contains("AWS"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Python"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_extraction_caching() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.xyz");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "some text").unwrap();

    let mut manager = InputManager::new();
    let result = manager.extract_text(&path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_end_to_end_scoring_from_fixtures() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let jd_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let report = compute_match(&resume_text, &jd_text, &[]);

    assert!(report.engine_available);
    assert!(report.cosine > 0.0 && report.cosine <= 1.0);
    assert!(report.skills_overlap > 0.0 && report.skills_overlap <= 1.0);
    assert!(report.hybrid > 0.0 && report.hybrid <= 1.0);

    for skill in ["python", "sql", "aws", "docker"] {
        assert!(report.resume_skills.contains(skill), "resume missing {}", skill);
        assert!(report.jd_skills.contains(skill), "jd missing {}", skill);
    }
}

#[test]
fn test_worked_example_scores() {
    let resume = "Experienced Python and SQL developer with AWS deployment experience";
    let jd = "Looking for a Python developer with AWS and Docker skills";

    let report = compute_match(resume, jd, &[]);

    assert!((report.skills_overlap - 0.5).abs() < 1e-6);
    let expected = 0.65 * report.cosine + 0.35 * report.skills_overlap;
    assert!((report.hybrid - expected).abs() < 1e-6);
}

#[test]
fn test_extract_skills_public_api() {
    let skills = extract_skills("I use Python and AWS", &[]);
    assert!(skills.contains("python"));
    assert!(skills.contains("aws"));

    let skills = extract_skills("javascript", &[]);
    assert!(!skills.contains("java"));

    let skills = extract_skills("I use Power BI daily", &[]);
    assert!(skills.contains("power bi"));

    let extras = vec!["rustlang".to_string()];
    assert!(extract_skills("I know Rustlang", &extras).contains("rustlang"));
    assert!(!extract_skills("I know Rustlang", &[]).contains("rustlang"));
}

#[test]
fn test_degraded_engine_weighting() {
    let scoring = ScoringConfig {
        enable_tfidf: false,
        ..ScoringConfig::default()
    };
    let engine = MatchEngine::with_backend(Box::new(NullBackend), scoring);

    let text = "Python and Docker in production";
    let report = engine.compute_match(text, text, &[]);

    assert!(!report.engine_available);
    assert_eq!(report.cosine, 0.0);
    assert_eq!(report.skills_overlap, 1.0);
    assert!((report.hybrid - 0.35).abs() < 1e-6);
}

#[test]
fn test_json_report_round_trip() {
    let scores = compute_match(
        "Experienced Python and SQL developer with AWS deployment experience",
        "Looking for a Python developer with AWS and Docker skills",
        &[],
    );
    let report = ComparisonReport::new("r.txt".into(), "j.txt".into(), scores, None);

    let rendered = JsonFormatter::new(false).format_report(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert!(parsed["scores"]["resume_skills"]
        .as_array()
        .unwrap()
        .iter()
        .any(|v| v.as_str() == Some("python")));
    assert!(parsed["scores"]["engine_available"].as_bool().unwrap());
}

#[test]
fn test_llm_reply_parsing_and_fallbacks() {
    let reply = "Match score: 8/10\n\nMatched skills/Experience:\n- Python\n\n\
Missing or weak areas:\n- Docker\n\nSuggestions:\n- Mention containers\n";
    let analysis = parse_match_reply(reply);
    assert_eq!(analysis.score, Some(8));
    assert!(analysis.matched.contains("Python"));

    let questions = fallback_questions(InterviewMode::Technical, 3);
    assert_eq!(questions.len(), 3);

    let feedback = heuristic_feedback("Situation: X. Result: cut costs 30%.");
    assert!(feedback.scores.structure > 2);
    assert_eq!(feedback.scores.impact, 4);
}
