//! LLM-backed resume feedback and resume-vs-JD comparison

use crate::config::Config;
use crate::error::Result;
use crate::llm::client::ChatClient;
use crate::llm::prompts::{PromptTemplates, JOB_FIT_SYSTEM, RESUME_ADVISOR_SYSTEM};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Structured view of the free-text resume-vs-JD reply.
///
/// Parsed best-effort: a section the model omitted is an empty string and a
/// missing score is `None`; the raw reply is always preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdMatchAnalysis {
    pub raw: String,
    pub score: Option<u8>,
    pub matched: String,
    pub missing: String,
    pub suggestions: String,
    pub strengths: String,
}

pub struct ResumeAnalyzer {
    client: ChatClient,
    templates: PromptTemplates,
}

impl ResumeAnalyzer {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: ChatClient::new(&config.llm)?,
            templates: PromptTemplates::default(),
        })
    }

    /// Free-text strengths/weaknesses/suggestions feedback for one resume.
    pub async fn resume_feedback(&self, resume_text: &str) -> Result<String> {
        let prompt = self.templates.render_resume_feedback(resume_text);
        self.client
            .chat_system_user(RESUME_ADVISOR_SYSTEM, &prompt)
            .await
    }

    /// Compares a resume against a job description and parses the reply.
    pub async fn compare_with_jd(
        &self,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<JdMatchAnalysis> {
        let prompt = self.templates.render_jd_match(resume_text, jd_text);
        let reply = self.client.chat_system_user(JOB_FIT_SYSTEM, &prompt).await?;
        Ok(parse_match_reply(&reply))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Matched,
    Missing,
    Suggestions,
    Strengths,
}

/// Parses "Match score: X/10" and the expected section bodies out of a
/// free-text reply. Tolerates markdown heading markers and missing sections.
pub fn parse_match_reply(text: &str) -> JdMatchAnalysis {
    let score_re = Regex::new(r"(?im)^\s*(?:#+\s*)?match\s*score\s*[:\-]?\s*(\d+)\s*/\s*10")
        .expect("Invalid match score regex");

    let score = score_re
        .captures(text)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<u8>().ok());

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut suggestions = Vec::new();
    let mut strengths = Vec::new();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        if let Some(section) = classify_heading(line) {
            current = Some(section);
            continue;
        }
        if score_re.is_match(line) {
            current = None;
            continue;
        }
        if let Some(section) = current {
            let bucket = match section {
                Section::Matched => &mut matched,
                Section::Missing => &mut missing,
                Section::Suggestions => &mut suggestions,
                Section::Strengths => &mut strengths,
            };
            bucket.push(line);
        }
    }

    let matched = join_section(&matched);
    let missing = join_section(&missing);
    let suggestions = join_section(&suggestions);
    let mut strengths = join_section(&strengths);
    if strengths.is_empty() {
        strengths = matched.clone();
    }

    JdMatchAnalysis {
        raw: text.to_string(),
        score,
        matched,
        missing,
        suggestions,
        strengths,
    }
}

fn join_section(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}

/// A heading is a short line that names one of the expected sections, with
/// optional markdown/bullet decoration. Body bullets never qualify because
/// they are matched against the full label set, not by prefix.
fn classify_heading(line: &str) -> Option<Section> {
    let cleaned = line
        .trim()
        .trim_start_matches(['#', '*', ' '])
        .trim_end_matches(['*', ' '])
        .trim_end_matches([':', '-'])
        .trim()
        .to_lowercase();

    if cleaned.is_empty() || cleaned.len() > 60 {
        return None;
    }

    match cleaned.as_str() {
        "matched skills/experience" | "matched skills" | "matched experience" => {
            Some(Section::Matched)
        }
        "missing or weak areas" | "missing" | "weak areas" | "gaps" => Some(Section::Missing),
        "suggestions" | "suggestions for tailoring the resume" | "improvements"
        | "recommendations" => Some(Section::Suggestions),
        "strengths" | "strengths / matches" => Some(Section::Strengths),
        _ => None,
    }
}
