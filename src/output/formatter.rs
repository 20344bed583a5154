//! Output formatters: console, JSON, and markdown renderings of a report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ComparisonReport;
use crate::scoring::skills::SkillSet;
use colored::Colorize;
use std::fmt::Write as _;

pub trait OutputFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String>;
}

/// Console formatter with optional ANSI colors.
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting and API integration.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports.
pub struct MarkdownFormatter;

/// Picks the formatter for a configured output format.
pub fn formatter_for(format: &OutputFormat, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn percentage(&self, score: f32) -> String {
        let text = format!("{:.1}%", score * 100.0);
        if !self.use_colors {
            return text;
        }
        if score >= 0.75 {
            text.green().bold().to_string()
        } else if score >= 0.5 {
            text.cyan().bold().to_string()
        } else if score >= 0.25 {
            text.yellow().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

fn join_skills(skills: &SkillSet) -> String {
    if skills.is_empty() {
        "(none detected)".to_string()
    } else {
        skills.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        let mut out = String::new();
        let scores = &report.scores;

        writeln!(&mut out, "{}", self.heading("Match Result")).ok();
        writeln!(&mut out, "  Resume: {}", report.resume_path).ok();
        writeln!(&mut out, "  Job:    {}", report.jd_path).ok();
        writeln!(&mut out).ok();

        writeln!(
            &mut out,
            "  Cosine Similarity: {}",
            self.percentage(scores.cosine)
        )
        .ok();
        writeln!(
            &mut out,
            "  Skills Overlap:    {}",
            self.percentage(scores.skills_overlap)
        )
        .ok();
        writeln!(
            &mut out,
            "  Final (Hybrid):    {}",
            self.percentage(scores.hybrid)
        )
        .ok();

        if !scores.engine_available {
            writeln!(
                &mut out,
                "  (similarity engine unavailable, hybrid uses skills overlap only)"
            )
            .ok();
        }

        writeln!(&mut out).ok();
        writeln!(
            &mut out,
            "  Resume skills: {}",
            join_skills(&scores.resume_skills)
        )
        .ok();
        writeln!(&mut out, "  Job skills:    {}", join_skills(&scores.jd_skills)).ok();

        if let Some(llm) = &report.llm {
            writeln!(&mut out).ok();
            writeln!(&mut out, "{}", self.heading("AI Analysis")).ok();
            if let Some(score) = llm.score {
                writeln!(&mut out, "  LLM match score: {}/10", score).ok();
            }
            for (title, body) in [
                ("Strengths / Matches", &llm.strengths),
                ("Gaps / Missing", &llm.missing),
                ("Suggestions", &llm.suggestions),
            ] {
                if !body.is_empty() {
                    writeln!(&mut out).ok();
                    writeln!(&mut out, "  {}:", self.heading(title)).ok();
                    for line in body.lines() {
                        writeln!(&mut out, "    {}", line).ok();
                    }
                }
            }
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        let serialized = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(serialized)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        let mut out = String::new();
        let scores = &report.scores;

        writeln!(&mut out, "# Match Result").ok();
        writeln!(&mut out).ok();
        writeln!(
            &mut out,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        )
        .ok();
        writeln!(&mut out).ok();
        writeln!(&mut out, "| Metric | Score |").ok();
        writeln!(&mut out, "|--------|-------|").ok();
        writeln!(
            &mut out,
            "| Cosine Similarity | {:.1}% |",
            scores.cosine * 100.0
        )
        .ok();
        writeln!(
            &mut out,
            "| Skills Overlap | {:.1}% |",
            scores.skills_overlap * 100.0
        )
        .ok();
        writeln!(&mut out, "| Final (Hybrid) | {:.1}% |", scores.hybrid * 100.0).ok();
        writeln!(&mut out).ok();
        writeln!(&mut out, "## Skills").ok();
        writeln!(&mut out).ok();
        writeln!(&mut out, "- Resume: {}", join_skills(&scores.resume_skills)).ok();
        writeln!(&mut out, "- Job: {}", join_skills(&scores.jd_skills)).ok();

        if let Some(llm) = &report.llm {
            writeln!(&mut out).ok();
            writeln!(&mut out, "## AI Analysis").ok();
            if let Some(score) = llm.score {
                writeln!(&mut out).ok();
                writeln!(&mut out, "LLM match score: {}/10", score).ok();
            }
            for (title, body) in [
                ("Strengths / Matches", &llm.strengths),
                ("Gaps / Missing", &llm.missing),
                ("Suggestions", &llm.suggestions),
            ] {
                if !body.is_empty() {
                    writeln!(&mut out).ok();
                    writeln!(&mut out, "### {}", title).ok();
                    writeln!(&mut out).ok();
                    writeln!(&mut out, "{}", body).ok();
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::matcher::compute_match;

    fn sample_report() -> ComparisonReport {
        let scores = compute_match(
            "Experienced Python and SQL developer with AWS deployment experience",
            "Looking for a Python developer with AWS and Docker skills",
            &[],
        );
        ComparisonReport::new("resume.pdf".to_string(), "job.txt".to_string(), scores, None)
    }

    #[test]
    fn test_console_format_contains_scores() {
        let formatter = ConsoleFormatter::new(false);
        let rendered = formatter.format_report(&sample_report()).unwrap();
        assert!(rendered.contains("Cosine Similarity"));
        assert!(rendered.contains("Skills Overlap"));
        assert!(rendered.contains("Final (Hybrid)"));
        assert!(rendered.contains("python"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let formatter = JsonFormatter::new(true);
        let rendered = formatter.format_report(&sample_report()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let overlap = parsed["scores"]["skills_overlap"].as_f64().unwrap();
        assert!((overlap - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_markdown_format() {
        let rendered = MarkdownFormatter.format_report(&sample_report()).unwrap();
        assert!(rendered.starts_with("# Match Result"));
        assert!(rendered.contains("| Skills Overlap | 50.0% |"));
    }

    #[test]
    fn test_degraded_mode_is_visible() {
        let mut report = sample_report();
        report.scores.engine_available = false;
        let formatter = ConsoleFormatter::new(false);
        let rendered = formatter.format_report(&report).unwrap();
        assert!(rendered.contains("similarity engine unavailable"));
    }
}
