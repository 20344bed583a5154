//! Document similarity backends
//!
//! The real backend vectorizes with TF-IDF; the null backend stands in when
//! vectorization is disabled and reports a fixed neutral score. Selection
//! happens once at configuration time, never per call.

use crate::scoring::normalizer::normalize;
use crate::scoring::tfidf::{sparse_cosine, TfidfVectorizer};

pub trait SimilarityBackend: Send + Sync {
    /// Cosine similarity between two raw documents, always in [0, 1].
    /// Total over all string inputs: degenerate input yields 0.0.
    fn cosine(&self, doc_a: &str, doc_b: &str) -> f32;

    /// Whether a real vectorization backend is behind this engine. Callers
    /// use this to adjust hybrid weighting, not to handle errors.
    fn available(&self) -> bool;
}

/// TF-IDF cosine similarity over the two-document corpus.
#[derive(Default)]
pub struct TfidfBackend {
    vectorizer: TfidfVectorizer,
}

impl TfidfBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SimilarityBackend for TfidfBackend {
    fn cosine(&self, doc_a: &str, doc_b: &str) -> f32 {
        let a = normalize(doc_a);
        let b = normalize(doc_b);

        let vectors = self.vectorizer.fit_transform(&[a.as_str(), b.as_str()]);
        let score = sparse_cosine(&vectors[0], &vectors[1]);

        // TF-IDF weights are non-negative, so the cosine already lands in
        // [0, 1]; the clamp only irons out float noise.
        score.clamp(0.0, 1.0)
    }

    fn available(&self) -> bool {
        true
    }
}

/// Degraded-mode backend: vectorization unavailable, similarity pinned to 0.
pub struct NullBackend;

impl SimilarityBackend for NullBackend {
    fn cosine(&self, _doc_a: &str, _doc_b: &str) -> f32 {
        0.0
    }

    fn available(&self) -> bool {
        false
    }
}
