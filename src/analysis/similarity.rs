use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::analysis::normalizer::normalize;
use crate::analysis::round2;
use crate::error::{Error, Result};
use crate::taxonomy::is_english_stopword;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// TF-IDF vectors for a small corpus, one L2-normalized row per document.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    pub vocabulary: BTreeMap<String, usize>,
    pub idf: Vec<f64>,
    pub rows: Vec<Vec<f64>>,
}

/// Bag-of-terms vectorizer over word n-grams with English stop words removed.
///
/// IDF is smoothed, `ln((1 + n) / (1 + df)) + 1`, so terms shared by every
/// document keep a positive weight.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    min_n: usize,
    max_n: usize,
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        Self { min_n: 1, max_n: 2 }
    }

    pub fn with_ngram_range(min_n: usize, max_n: usize) -> Self {
        let min_n = min_n.max(1);
        Self {
            min_n,
            max_n: max_n.max(min_n),
        }
    }

    /// Terms of one document: lowercase word runs, stop words dropped,
    /// then joined into n-grams.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = WORD
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|token| !is_english_stopword(token))
            .collect();

        let mut terms = Vec::new();
        for n in self.min_n..=self.max_n {
            if n > tokens.len() {
                break;
            }
            terms.extend(tokens.windows(n).map(|window| window.join(" ")));
        }
        terms
    }

    pub fn fit_transform(&self, documents: &[&str]) -> Result<TfIdfMatrix> {
        let analyzed: Vec<Vec<String>> = documents.iter().map(|doc| self.analyze(doc)).collect();

        let mut vocabulary = BTreeMap::new();
        for term in analyzed.iter().flatten() {
            vocabulary.entry(term.clone()).or_insert(0);
        }
        if vocabulary.is_empty() {
            return Err(Error::EmptyVocabulary);
        }
        for (idx, slot) in vocabulary.values_mut().enumerate() {
            *slot = idx;
        }

        let mut doc_freq = vec![0usize; vocabulary.len()];
        for terms in &analyzed {
            let unique: HashSet<usize> = terms.iter().map(|t| vocabulary[t]).collect();
            for idx in unique {
                doc_freq[idx] += 1;
            }
        }

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = analyzed
            .iter()
            .map(|terms| {
                let mut counts: HashMap<usize, f64> = HashMap::new();
                for term in terms {
                    *counts.entry(vocabulary[term]).or_insert(0.0) += 1.0;
                }

                let mut row = vec![0.0; vocabulary.len()];
                for (idx, count) in counts {
                    row[idx] = count * idf[idx];
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        Ok(TfIdfMatrix {
            vocabulary,
            idf,
            rows,
        })
    }

    /// Cosine similarity of two documents in [0, 1].
    pub fn similarity(&self, a: &str, b: &str) -> Result<f64> {
        let matrix = self.fit_transform(&[a, b])?;
        let sim = cosine_similarity(&matrix.rows[0], &matrix.rows[1]);

        if !sim.is_finite() || sim < 0.0 {
            return Ok(0.0);
        }
        Ok(sim.min(1.0))
    }

    /// Similarity as a percentage; degenerate inputs score `0.0`.
    pub fn score(&self, text_a: &str, text_b: &str) -> f64 {
        let a = normalize(text_a);
        let b = normalize(text_b);
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        match self.similarity(&a, &b) {
            Ok(sim) => round2(sim * 100.0),
            Err(e) => {
                tracing::warn!("Text similarity unavailable: {}", e);
                0.0
            }
        }
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        row.iter_mut().for_each(|x| *x /= norm);
    }
}

/// Zero when either vector has no magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

pub fn score_by_similarity(text_a: &str, text_b: &str) -> f64 {
    TfIdfVectorizer::new().score(text_a, text_b)
}
