//! Skill keyword extraction via whole-word catalog matching

use aho_corasick::AhoCorasick;
use std::collections::BTreeSet;

/// A deduplicated set of lower-cased skill tokens detected in one document.
pub type SkillSet = BTreeSet<String>;

/// Default skill catalog. All entries lower-case; multi-word phrases and
/// punctuated names ("c++", "ci/cd") are matched literally.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "c",
    "c++",
    "html",
    "css",
    "javascript",
    "typescript",
    "react",
    "node",
    "sql",
    "postgres",
    "postgresql",
    "mysql",
    "mongodb",
    "aws",
    "gcp",
    "azure",
    "docker",
    "kubernetes",
    "linux",
    "git",
    "bash",
    "powershell",
    "pandas",
    "numpy",
    "scikit-learn",
    "sklearn",
    "tensorflow",
    "pytorch",
    "tableau",
    "power bi",
    "excel",
    "airflow",
    "dbt",
    "spark",
    "hadoop",
    "kafka",
    "etl",
    "mlops",
    "ci/cd",
];

/// An immutable keyword catalog compiled into an Aho-Corasick automaton.
///
/// Built fresh per invocation of [`extract_skills`]; nothing persists across
/// calls. Tests can substitute an arbitrary catalog via [`SkillCatalog::from_keywords`].
pub struct SkillCatalog {
    keywords: Vec<String>,
    matcher: AhoCorasick,
}

impl SkillCatalog {
    /// The default catalog extended with the caller's extra keywords
    /// (lower-cased before use).
    pub fn with_extra(extra_keywords: &[String]) -> Self {
        let merged: BTreeSet<String> = DEFAULT_SKILLS
            .iter()
            .map(|s| s.to_string())
            .chain(extra_keywords.iter().map(|k| k.to_lowercase()))
            .collect();
        Self::from_keywords(merged)
    }

    /// A catalog from an arbitrary keyword collection. Keywords are
    /// lower-cased and deduplicated.
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        // Overlapping iteration needs the default (standard) match kind, so
        // shorter keywords are still reported inside longer candidates.
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&keywords)
            .expect("Invalid skill catalog patterns");

        Self { keywords, matcher }
    }

    /// Returns the catalog keywords found in `text` as whole words/phrases.
    ///
    /// The text is lower-cased but otherwise unmodified, so punctuation like
    /// `+` and multi-word phrases survive. An occurrence counts only when the
    /// characters adjacent to it are not word characters: "java" does not
    /// match inside "javascript", while "c++" matches literal "c++".
    pub fn extract(&self, text: &str) -> SkillSet {
        let corpus = text.to_lowercase();
        let mut found = SkillSet::new();

        for mat in self.matcher.find_overlapping_iter(&corpus) {
            if has_word_boundaries(&corpus, mat.start(), mat.end()) {
                found.insert(self.keywords[mat.pattern().as_usize()].clone());
            }
        }

        found
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::with_extra(&[])
    }
}

/// Detects catalog skills in `text`, extending the default catalog with
/// `extra_keywords`. Pure function: absent or empty text yields an empty set.
pub fn extract_skills(text: &str, extra_keywords: &[String]) -> SkillSet {
    SkillCatalog::with_extra(extra_keywords).extract(text)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A match at `start..end` is a whole word/phrase when neither neighbor is a
/// word character. Match offsets land on char boundaries since all catalog
/// patterns are ASCII.
fn has_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
    let after_ok = text[end..].chars().next().map_or(true, |c| !is_word_char(c));
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_extraction() {
        let skills = extract_skills("I use Python and AWS", &[]);
        assert!(skills.contains("python"));
        assert!(skills.contains("aws"));
    }

    #[test]
    fn test_word_boundaries() {
        let skills = extract_skills("javascript", &[]);
        assert!(skills.contains("javascript"));
        assert!(!skills.contains("java"));
    }

    #[test]
    fn test_multi_word_phrase() {
        let skills = extract_skills("I use Power BI daily", &[]);
        assert!(skills.contains("power bi"));
    }

    #[test]
    fn test_plus_in_keyword() {
        let skills = extract_skills("Strong C++ background", &[]);
        assert!(skills.contains("c++"));
        // "c" also matches: the "+" after it is not a word character.
        assert!(skills.contains("c"));
    }

    #[test]
    fn test_underscore_is_word_char() {
        let skills = extract_skills("java_script", &[]);
        assert!(!skills.contains("java"));
    }

    #[test]
    fn test_extra_keywords() {
        let extras = vec!["rustlang".to_string()];
        let skills = extract_skills("I know Rustlang", &extras);
        assert!(skills.contains("rustlang"));

        let without = extract_skills("I know Rustlang", &[]);
        assert!(!without.contains("rustlang"));
    }

    #[test]
    fn test_extra_keywords_lowercased() {
        let extras = vec!["RustLang".to_string()];
        let skills = extract_skills("shipping rustlang services", &extras);
        assert!(skills.contains("rustlang"));
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_skills("", &[]).is_empty());
    }

    #[test]
    fn test_substituted_catalog() {
        let catalog = SkillCatalog::from_keywords(["erlang", "elixir"]);
        let skills = catalog.extract("Erlang and Elixir, no python here");
        assert_eq!(skills.len(), 2);
        assert!(skills.contains("erlang"));
        assert!(!skills.contains("python"));
    }

    #[test]
    fn test_no_match_inside_longer_word() {
        let skills = extract_skills("excellent spreadsheets", &[]);
        assert!(!skills.contains("excel"));
    }

    #[test]
    fn test_slash_keyword() {
        let skills = extract_skills("we practice CI/CD everywhere", &[]);
        assert!(skills.contains("ci/cd"));
    }
}
