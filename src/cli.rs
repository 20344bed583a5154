//! CLI interface for careerwise

use crate::llm::coach::{InterviewMode, SeniorityLevel};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "careerwise")]
#[command(about = "Resume and job description matching with interview practice")]
#[command(
    long_about = "Score resume / job description fit with deterministic TF-IDF and skill-catalog matching, get LLM resume feedback, and run interview practice sessions against a local chat model"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Match {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Extra skill keywords added to the catalog, comma separated
        #[arg(short, long, value_delimiter = ',')]
        extra_skills: Vec<String>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Skip the LLM comparison (deterministic scores only)
        #[arg(long)]
        no_llm: bool,
    },

    /// Get LLM feedback on a resume
    Feedback {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Save feedback to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Run an interactive interview practice session
    Interview {
        /// Job title / role to practice for
        #[arg(short, long, default_value = "")]
        role: String,

        /// Optional job description file used to tailor questions
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Question style
        #[arg(short, long, value_enum, default_value_t = InterviewMode::Behavioral)]
        mode: InterviewMode,

        /// Candidate seniority
        #[arg(short, long, value_enum, default_value_t = SeniorityLevel::Entry)]
        level: SeniorityLevel,

        /// Number of questions
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let path = PathBuf::from("resume.PDF");
        assert!(validate_file_extension(&path, &["pdf", "txt"]).is_ok());

        let bad = PathBuf::from("resume.docx");
        assert!(validate_file_extension(&bad, &["pdf", "txt"]).is_err());

        let none = PathBuf::from("resume");
        assert!(validate_file_extension(&none, &["pdf"]).is_err());
    }
}
