//! Interview practice: question generation and answer critique
//!
//! Both operations go through the chat service first and fall back to
//! built-in behavior on any failure, so a practice session keeps moving
//! when the model is down or returns something unparseable.

use crate::config::Config;
use crate::error::Result;
use crate::llm::client::ChatClient;
use crate::llm::decode::{extract_json_list, extract_json_object};
use crate::llm::prompts::{PromptTemplates, COACH_SYSTEM, EVALUATOR_SYSTEM};
use clap::ValueEnum;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum InterviewMode {
    Behavioral,
    Technical,
    Aptitude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum SeniorityLevel {
    Entry,
    Mid,
    Senior,
}

impl fmt::Display for InterviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InterviewMode::Behavioral => "Behavioral",
            InterviewMode::Technical => "Technical",
            InterviewMode::Aptitude => "Aptitude",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeniorityLevel::Entry => "Entry",
            SeniorityLevel::Mid => "Mid",
            SeniorityLevel::Senior => "Senior",
        };
        write!(f, "{}", label)
    }
}

/// Rubric scores, each in 1..=5.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnswerScores {
    pub clarity: u8,
    pub structure: u8,
    pub technical_depth: u8,
    pub impact: u8,
    pub conciseness: u8,
}

impl AnswerScores {
    fn clamped(self) -> Self {
        Self {
            clarity: self.clarity.clamp(1, 5),
            structure: self.structure.clamp(1, 5),
            technical_depth: self.technical_depth.clamp(1, 5),
            impact: self.impact.clamp(1, 5),
            conciseness: self.conciseness.clamp(1, 5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub scores: AnswerScores,
    pub summary: String,
    pub suggestions: Vec<String>,
    pub improved_answer: String,
}

const FALLBACK_BEHAVIORAL: &[&str] = &[
    "Tell me about a time you had to learn something quickly.",
    "Describe a conflict on a team and how you resolved it.",
    "Tell me about a time you made a mistake. What did you learn?",
    "Give an example of a time you worked under a tight deadline.",
    "Tell me about a time you influenced a decision without authority.",
    "Describe a time you handled ambiguous requirements.",
    "Tell me about a time you prioritized tasks with limited resources.",
];

const FALLBACK_TECHNICAL: &[&str] = &[
    "Explain the Big-O complexity of an algorithm you recently optimized.",
    "What data structure would you use to implement an LRU cache and why?",
    "How would you design a rate limiter for an API? Outline components and trade-offs.",
    "Explain ACID vs BASE and when eventual consistency is acceptable.",
    "Given a large log file, how would you find the top K most frequent entries?",
    "How do you track down a memory leak in a long-running service?",
    "What is the difference between concurrency and parallelism? Give examples.",
];

pub struct InterviewCoach {
    client: ChatClient,
    templates: PromptTemplates,
}

impl InterviewCoach {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: ChatClient::new(&config.llm)?,
            templates: PromptTemplates::default(),
        })
    }

    /// Generates up to `n` interview questions, tailored to the role and job
    /// description when the model cooperates. Never fails: any chat or
    /// decoding problem falls back to the built-in question bank.
    pub async fn generate_questions(
        &self,
        job_title: &str,
        jd_text: &str,
        mode: InterviewMode,
        level: SeniorityLevel,
        n: usize,
    ) -> Vec<String> {
        let prompt = self.templates.render_interview_questions(
            job_title,
            jd_text,
            &mode.to_string(),
            &level.to_string(),
            n,
        );

        match self.client.chat_system_user(COACH_SYSTEM, &prompt).await {
            Ok(reply) => {
                if let Some(questions) = extract_json_list(&reply) {
                    let questions: Vec<String> = questions
                        .into_iter()
                        .filter(|q| !q.trim().is_empty())
                        .take(n)
                        .collect();
                    if !questions.is_empty() {
                        return questions;
                    }
                }
                warn!("Question generation reply was unparseable, using fallback bank");
            }
            Err(e) => warn!("Question generation failed ({}), using fallback bank", e),
        }

        fallback_questions(mode, n)
    }

    /// Critiques one answer against the rubric. Never fails: a chat error or
    /// malformed reply degrades to the heuristic critique.
    pub async fn critique_answer(
        &self,
        question: &str,
        answer: &str,
        mode: InterviewMode,
        jd_text: Option<&str>,
    ) -> AnswerFeedback {
        let prompt =
            self.templates
                .render_answer_critique(question, answer, &mode.to_string(), jd_text);

        match self.client.chat_system_user(EVALUATOR_SYSTEM, &prompt).await {
            Ok(reply) => {
                if let Some(mut feedback) = extract_json_object::<AnswerFeedback>(&reply) {
                    feedback.scores = feedback.scores.clamped();
                    return feedback;
                }
                warn!("Critique reply was unparseable, using heuristic feedback");
            }
            Err(e) => warn!("Answer critique failed ({}), using heuristic feedback", e),
        }

        heuristic_feedback(answer)
    }
}

/// First `n` entries of the mode's question bank. Behavioral questions for
/// behavioral sessions, the technical bank otherwise.
pub fn fallback_questions(mode: InterviewMode, n: usize) -> Vec<String> {
    let bank = match mode {
        InterviewMode::Behavioral => FALLBACK_BEHAVIORAL,
        InterviewMode::Technical | InterviewMode::Aptitude => FALLBACK_TECHNICAL,
    };
    bank.iter().take(n.max(1)).map(|q| q.to_string()).collect()
}

/// Rubric critique computed from surface features of the answer: length,
/// quantified results, and STAR structure keywords.
pub fn heuristic_feedback(answer: &str) -> AnswerFeedback {
    let word_count = answer.split_whitespace().count();
    let has_numbers = answer.chars().any(|c| c.is_ascii_digit());
    let lowered = answer.to_lowercase();
    let star_hits = ["situation", "task", "action", "result"]
        .iter()
        .filter(|k| lowered.contains(*k))
        .count() as u8;

    let scores = AnswerScores {
        clarity: if word_count >= 40 { 3 } else { 2 },
        structure: (2 + star_hits).min(5),
        technical_depth: 3 + u8::from(has_numbers),
        impact: 3 + u8::from(has_numbers),
        conciseness: if (60..=220).contains(&word_count) {
            4
        } else if word_count < 60 {
            3
        } else {
            2
        },
    };

    AnswerFeedback {
        scores,
        summary: "Decent start. Sharpen structure and make outcomes measurable.".to_string(),
        suggestions: vec![
            "Use STAR: briefly set context, then focus on actions and results.".to_string(),
            "Quantify impact (e.g., %, time saved, errors reduced).".to_string(),
            "Explain trade-offs and tools used; keep it within 2 minutes.".to_string(),
        ],
        improved_answer: "Situation: Briefly describe the context and goal.\n\
Task: Your specific responsibility.\n\
Action: 2-3 concrete steps you took, including tools and trade-offs.\n\
Result: Quantified outcome (e.g., 23% faster, 2 bugs/week down to 0.3).\n\
Reflection: One learning or improvement you'd make."
            .to_string(),
    }
}
