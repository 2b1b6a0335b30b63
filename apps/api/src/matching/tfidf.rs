//! TF-IDF index over a fixed set of documents.
//!
//! Weights use raw term counts and smoothed IDF, `ln((1 + n) / (1 + df)) + 1`,
//! and every vector is L2-normalised, so cosine similarity is a dot product.
//! Vocabulary and IDF are fixed when the index is built.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::matching::tokenize::{is_stop_word, ngrams, tokenize, TokenPattern};
use crate::matching::ScoreError;

/// Vectoriser settings for one index.
#[derive(Debug, Clone)]
pub struct VectorizerOptions {
    pub pattern: TokenPattern,
    pub max_ngram: usize,
    pub remove_stop_words: bool,
    /// Terms present in more than this fraction of documents are dropped.
    pub max_df: f64,
    pub max_features: usize,
}

impl VectorizerOptions {
    /// Listing content: unigrams and bigrams of alphabetic words.
    pub fn content() -> Self {
        Self {
            pattern: TokenPattern::Alphabetic,
            max_ngram: 2,
            remove_stop_words: true,
            max_df: 0.95,
            max_features: 5000,
        }
    }

    /// Skill names: unigrams that keep `+ # .`.
    pub fn skills() -> Self {
        Self {
            pattern: TokenPattern::SkillSymbols,
            max_ngram: 1,
            remove_stop_words: false,
            max_df: 1.0,
            max_features: 1000,
        }
    }

    fn terms(&self, text: &str) -> Vec<String> {
        let mut tokens = tokenize(text, self.pattern);
        if self.remove_stop_words {
            tokens.retain(|t| !is_stop_word(t));
        }
        ngrams(&tokens, self.max_ngram)
    }
}

/// Sparse unit vector, entries sorted by term id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_counts(counts: BTreeMap<usize, f64>) -> Self {
        let norm = counts.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Self::default();
        }
        Self {
            entries: counts.into_iter().map(|(id, w)| (id, w / norm)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cosine similarity of two unit vectors, clamped to `[0, 1]`.
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j, mut dot) = (0, 0, 0.0);
        while i < self.entries.len() && j < other.entries.len() {
            let (a, wa) = self.entries[i];
            let (b, wb) = other.entries[j];
            match a.cmp(&b) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    dot += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct TfidfIndex {
    options: VectorizerOptions,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    documents: Vec<SparseVector>,
}

impl TfidfIndex {
    pub fn build<S: AsRef<str>>(documents: &[S], options: VectorizerOptions) -> Self {
        let doc_terms: Vec<Vec<String>> = documents
            .iter()
            .map(|d| options.terms(d.as_ref()))
            .collect();
        let n_docs = doc_terms.len();

        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
        for terms in &doc_terms {
            let unique: HashSet<&str> = terms.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
            for term in terms {
                *corpus_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let max_doc_count = options.max_df * n_docs as f64;
        let mut kept: Vec<&str> = doc_freq
            .iter()
            .filter(|(_, &df)| df as f64 <= max_doc_count)
            .map(|(&term, _)| term)
            .collect();
        // A small catalog can lose every term to the cutoff; keep them all then.
        if kept.is_empty() {
            kept = doc_freq.keys().copied().collect();
        }

        kept.sort_by(|a, b| corpus_freq[b].cmp(&corpus_freq[a]).then_with(|| a.cmp(b)));
        kept.truncate(options.max_features);
        kept.sort_unstable();

        let vocabulary: HashMap<String, usize> = kept
            .iter()
            .enumerate()
            .map(|(id, term)| (term.to_string(), id))
            .collect();
        let idf: Vec<f64> = kept
            .iter()
            .map(|term| ((1.0 + n_docs as f64) / (1.0 + doc_freq[term] as f64)).ln() + 1.0)
            .collect();

        let mut index = Self {
            options,
            vocabulary,
            idf,
            documents: Vec::new(),
        };
        index.documents = doc_terms.iter().map(|terms| index.vectorize(terms)).collect();
        index
    }

    fn vectorize(&self, terms: &[String]) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in terms {
            if let Some(&id) = self.vocabulary.get(term) {
                *counts.entry(id).or_insert(0.0) += 1.0;
            }
        }
        for (id, weight) in counts.iter_mut() {
            *weight *= self.idf[*id];
        }
        SparseVector::from_counts(counts)
    }

    /// Projects free text into the fixed vocabulary. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.vectorize(&self.options.terms(text))
    }

    /// Cosine similarity of `query` against every document, in document order.
    pub fn score_query(&self, query: &str) -> Result<Vec<f64>, ScoreError> {
        if self.vocabulary.is_empty() {
            return Err(ScoreError::EmptyVocabulary);
        }
        let query = self.transform(query);
        Ok(self.documents.iter().map(|doc| query.cosine(doc)).collect())
    }

    /// Cosine similarity of document `position` against every document,
    /// itself included.
    pub fn score_document(&self, position: usize) -> Result<Vec<f64>, ScoreError> {
        if self.vocabulary.is_empty() {
            return Err(ScoreError::EmptyVocabulary);
        }
        let target = self
            .documents
            .get(position)
            .ok_or(ScoreError::LengthMismatch {
                expected: self.documents.len(),
                actual: position,
            })?;
        Ok(self.documents.iter().map(|doc| target.cosine(doc)).collect())
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }
}
