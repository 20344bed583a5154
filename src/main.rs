//! Careerwise: resume / job description matching and interview practice

mod cli;
mod config;
mod error;
mod input;
mod llm;
mod output;
mod scoring;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use colored::Colorize;
use config::Config;
use error::{CareerwiseError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use input::file_detector::FileType;
use input::manager::InputManager;
use llm::analyzer::{JdMatchAnalysis, ResumeAnalyzer};
use llm::coach::{AnswerFeedback, InterviewCoach, InterviewMode, SeniorityLevel};
use log::{error, info, warn};
use output::formatter::formatter_for;
use output::report::ComparisonReport;
use scoring::matcher::MatchEngine;
use std::io::{BufRead, Write};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            job,
            extra_skills,
            output,
            save,
            no_llm,
        } => {
            info!("Starting resume / job description match");

            cli::validate_file_extension(&resume, FileType::SUPPORTED_EXTENSIONS)
                .map_err(|e| CareerwiseError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, FileType::SUPPORTED_EXTENSIONS)
                .map_err(|e| CareerwiseError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(CareerwiseError::InvalidInput)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let jd_text = input_manager.extract_text(&job).await?;

            info!(
                "Extracted {} resume chars, {} job description chars",
                resume_text.len(),
                jd_text.len()
            );

            // Config extras first, CLI extras appended; the catalog dedups.
            let mut extras = config.skills.extra_keywords.clone();
            extras.extend(extra_skills);

            let engine = MatchEngine::new(config.scoring.clone());
            let scores = engine.compute_match(&resume_text, &jd_text, &extras);

            let llm_analysis = if no_llm {
                None
            } else {
                run_llm_comparison(&config, &resume_text, &jd_text).await
            };

            let report = ComparisonReport::new(
                resume.to_string_lossy().to_string(),
                job.to_string_lossy().to_string(),
                scores,
                llm_analysis,
            );

            let formatter = formatter_for(&output_format, config.output.color_output);
            let rendered = formatter.format_report(&report)?;
            println!("{}", rendered);

            if let Some(path) = save {
                std::fs::write(&path, &rendered)?;
                println!("Report saved to {}", path.display());
            }
        }

        Commands::Feedback { resume, save } => {
            cli::validate_file_extension(&resume, FileType::SUPPORTED_EXTENSIONS)
                .map_err(|e| CareerwiseError::InvalidInput(format!("Resume file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;

            let analyzer = ResumeAnalyzer::new(&config)?;
            let spinner = spinner("Analyzing resume...");
            let feedback = analyzer.resume_feedback(&resume_text).await;
            spinner.finish_and_clear();
            let feedback = feedback?;

            println!("{}", "Resume Feedback".bold());
            println!();
            println!("{}", feedback);

            if let Some(path) = save {
                std::fs::write(&path, &feedback)?;
                println!("\nFeedback saved to {}", path.display());
            }
        }

        Commands::Interview {
            role,
            job,
            mode,
            level,
            count,
        } => {
            let jd_text = match &job {
                Some(path) => {
                    cli::validate_file_extension(path, FileType::SUPPORTED_EXTENSIONS).map_err(|e| {
                        CareerwiseError::InvalidInput(format!("Job description file: {}", e))
                    })?;
                    InputManager::new().extract_text(path).await?
                }
                None => String::new(),
            };

            run_interview_session(&config, &role, &jd_text, mode, level, count).await?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("{}", "Current Configuration".bold());
                println!();
                println!("Chat service: {}", config.llm.base_url);
                println!("Chat model:   {}", config.llm.model);
                println!();
                println!("Scoring weights:");
                println!("  Cosine: {:.0}%", config.scoring.cosine_weight * 100.0);
                println!("  Skills: {:.0}%", config.scoring.skills_weight * 100.0);
                println!(
                    "  TF-IDF backend: {}",
                    if config.scoring.enable_tfidf {
                        "enabled"
                    } else {
                        "disabled"
                    }
                );
                if !config.skills.extra_keywords.is_empty() {
                    println!();
                    println!("Extra skill keywords: {}", config.skills.extra_keywords.join(", "));
                }
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

/// LLM comparison is additive: when the chat service is down the
/// deterministic report still prints, with a warning instead of a failure.
async fn run_llm_comparison(
    config: &Config,
    resume_text: &str,
    jd_text: &str,
) -> Option<JdMatchAnalysis> {
    let analyzer = match ResumeAnalyzer::new(config) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            warn!("Could not initialize chat client, skipping LLM analysis: {}", e);
            return None;
        }
    };

    let spinner = spinner("Comparing resume and job description...");
    let result = analyzer.compare_with_jd(resume_text, jd_text).await;
    spinner.finish_and_clear();

    match result {
        Ok(analysis) => Some(analysis),
        Err(e) => {
            warn!("LLM comparison failed, reporting deterministic scores only: {}", e);
            None
        }
    }
}

async fn run_interview_session(
    config: &Config,
    role: &str,
    jd_text: &str,
    mode: InterviewMode,
    level: SeniorityLevel,
    count: usize,
) -> Result<()> {
    let coach = InterviewCoach::new(config)?;

    let progress = spinner("Generating questions...");
    let questions = coach
        .generate_questions(role, jd_text, mode, level, count)
        .await;
    progress.finish_and_clear();

    println!(
        "{} ({} {} questions)",
        "Interview Practice".bold(),
        questions.len(),
        mode
    );
    println!("Answer each question, finishing with an empty line. Type 'skip' to skip or 'quit' to stop.");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    for (i, question) in questions.iter().enumerate() {
        println!();
        println!(
            "{} {}",
            format!("Question {} of {}:", i + 1, questions.len()).bold(),
            question
        );
        print!("> ");
        std::io::stdout().flush()?;

        let answer = match read_answer(&mut lines)? {
            AnswerInput::Text(answer) => answer,
            AnswerInput::Skip => continue,
            AnswerInput::Quit => break,
        };

        if answer.trim().is_empty() {
            println!("(empty answer, skipping)");
            continue;
        }

        let progress = spinner("Evaluating your answer...");
        let jd = if jd_text.is_empty() { None } else { Some(jd_text) };
        let feedback = coach.critique_answer(question, &answer, mode, jd).await;
        progress.finish_and_clear();

        print_feedback(&feedback);
    }

    println!();
    println!("Session complete.");
    Ok(())
}

enum AnswerInput {
    Text(String),
    Skip,
    Quit,
}

/// Reads a multi-line answer terminated by an empty line. End of input quits
/// the session.
fn read_answer(lines: &mut impl Iterator<Item = std::io::Result<String>>) -> Result<AnswerInput> {
    let mut answer = Vec::new();
    let mut saw_input = false;

    for line in lines {
        let line = line?;
        saw_input = true;
        let trimmed = line.trim();

        if answer.is_empty() {
            if trimmed.eq_ignore_ascii_case("skip") {
                return Ok(AnswerInput::Skip);
            }
            if trimmed.eq_ignore_ascii_case("quit") {
                return Ok(AnswerInput::Quit);
            }
        }

        if trimmed.is_empty() {
            break;
        }
        answer.push(line);
    }

    if !saw_input {
        Ok(AnswerInput::Quit)
    } else {
        Ok(AnswerInput::Text(answer.join("\n")))
    }
}

fn print_feedback(feedback: &AnswerFeedback) {
    let scores = &feedback.scores;
    println!();
    println!("{}", "Feedback".bold());
    println!(
        "  Clarity {}/5 | Structure {}/5 | Depth {}/5 | Impact {}/5 | Conciseness {}/5",
        scores.clarity, scores.structure, scores.technical_depth, scores.impact, scores.conciseness
    );
    println!();
    println!("  {}", feedback.summary);

    if !feedback.suggestions.is_empty() {
        println!();
        println!("  {}", "Suggestions:".bold());
        for suggestion in &feedback.suggestions {
            println!("  - {}", suggestion);
        }
    }

    if !feedback.improved_answer.is_empty() {
        println!();
        println!("  {}", "Improved answer (example):".bold());
        for line in feedback.improved_answer.lines() {
            println!("  {}", line);
        }
    }
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
