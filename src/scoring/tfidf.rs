//! Sparse TF-IDF term weighting over a small document corpus

use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Weighs each document of a corpus with smoothed TF-IDF:
/// `tf * (ln((1 + n) / (1 + df)) + 1)`, L2-normalized per document.
///
/// Tokens are unicode words of at least two characters, minus English stop
/// words. Operates on already-normalized text (see `normalizer`).
pub struct TfidfVectorizer {
    min_token_len: usize,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self { min_token_len: 2 }
    }
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize one document: unicode words, length filter, stop-word filter.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words()
            .filter(|w| w.len() >= self.min_token_len)
            .filter(|w| !is_stop_word(w))
            .collect()
    }

    /// Builds one L2-normalized TF-IDF vector per document, keyed by term.
    ///
    /// A document with no surviving tokens yields an empty map. The corpus
    /// vocabulary is exactly the union of surviving tokens, so out-of-corpus
    /// terms never appear.
    pub fn fit_transform(&self, docs: &[&str]) -> Vec<HashMap<String, f32>> {
        let tokenized: Vec<Vec<&str>> = docs.iter().map(|d| self.tokenize(d)).collect();

        // Document frequency per term.
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let mut seen: Vec<&str> = tokens.clone();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n = docs.len() as f32;

        tokenized
            .iter()
            .map(|tokens| {
                let mut counts: HashMap<&str, usize> = HashMap::new();
                for &term in tokens {
                    *counts.entry(term).or_insert(0) += 1;
                }

                let mut vector: HashMap<String, f32> = counts
                    .into_iter()
                    .map(|(term, count)| {
                        let df = doc_freq[term] as f32;
                        let idf = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
                        (term.to_string(), count as f32 * idf)
                    })
                    .collect();

                let norm: f32 = vector.values().map(|w| w * w).sum::<f32>().sqrt();
                if norm > 0.0 {
                    for weight in vector.values_mut() {
                        *weight /= norm;
                    }
                }

                vector
            })
            .collect()
    }
}

/// Cosine of the angle between two sparse vectors. Zero when either vector
/// is empty or zero-length.
pub fn sparse_cosine(a: &HashMap<String, f32>, b: &HashMap<String, f32>) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f32 = small
        .iter()
        .filter_map(|(term, wa)| large.get(term).map(|wb| wa * wb))
        .sum();

    let norm_a: f32 = a.values().map(|w| w * w).sum::<f32>().sqrt();
    let norm_b: f32 = b.values().map(|w| w * w).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Standard English stop words excluded from vectorization.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each",
    "else", "every", "few", "for", "from", "further", "had", "has", "have", "having", "he",
    "her", "here", "hers", "herself", "him", "himself", "his", "how", "if", "in", "into",
    "is", "it", "its", "itself", "just", "me", "might", "more", "most", "must", "my",
    "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "ours", "ourselves", "out", "over", "own", "same", "shall", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until",
    "up", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_filters_stop_words_and_short_tokens() {
        let vectorizer = TfidfVectorizer::new();
        let tokens = vectorizer.tokenize("the quick brown fox is a coder");
        assert_eq!(tokens, vec!["quick", "brown", "fox", "coder"]);
    }

    #[test]
    fn test_identical_documents_have_unit_cosine() {
        let vectorizer = TfidfVectorizer::new();
        let doc = "python developer with cloud deployment experience";
        let vectors = vectorizer.fit_transform(&[doc, doc]);
        let cosine = sparse_cosine(&vectors[0], &vectors[1]);
        assert!((cosine - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_disjoint_documents_have_zero_cosine() {
        let vectorizer = TfidfVectorizer::new();
        let vectors = vectorizer.fit_transform(&["rust systems", "gardening tips"]);
        let cosine = sparse_cosine(&vectors[0], &vectors[1]);
        assert_eq!(cosine, 0.0);
    }

    #[test]
    fn test_partial_overlap_is_between_zero_and_one() {
        let vectorizer = TfidfVectorizer::new();
        let vectors =
            vectorizer.fit_transform(&["python developer aws", "python engineer docker"]);
        let cosine = sparse_cosine(&vectors[0], &vectors[1]);
        assert!(cosine > 0.0);
        assert!(cosine < 1.0);
    }

    #[test]
    fn test_empty_document_yields_empty_vector() {
        let vectorizer = TfidfVectorizer::new();
        let vectors = vectorizer.fit_transform(&["", "python"]);
        assert!(vectors[0].is_empty());
        assert_eq!(sparse_cosine(&vectors[0], &vectors[1]), 0.0);
    }

    #[test]
    fn test_vectors_are_l2_normalized() {
        let vectorizer = TfidfVectorizer::new();
        let vectors = vectorizer.fit_transform(&["python sql aws python", "irrelevant text"]);
        let norm: f32 = vectors[0].values().map(|w| w * w).sum::<f32>();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("with"));
        assert!(!is_stop_word("python"));
    }
}
