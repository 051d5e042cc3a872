use super::window::sliding_window;
use std::collections::HashMap;
use std::io::BufRead;
use thiserror::Error;
use tracing::debug;

/// N-gram string -> natural-log probability
pub type NgramLogProbs = HashMap<String, f64>;

/// Errors from building or evaluating an N-gram table
#[derive(Error, Debug)]
pub enum NgramError {
    /// No window survived filtering, so every probability would be `c / 0`
    #[error("Empty corpus: no {n}-grams of A-Z letters found (cannot divide by a total of zero)")]
    EmptyCorpus { n: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Occurrence counts of letter N-grams across a whole corpus
///
/// Counts accumulate over every line observed; they are never reset between
/// lines.
#[derive(Debug, Clone, Default)]
pub struct NgramCounter {
    n: usize,
    counts: HashMap<String, usize>,
    total: usize,
}

impl NgramCounter {
    /// Empty counter for windows of length `n`
    pub fn new(n: usize) -> Self {
        Self {
            n,
            counts: HashMap::new(),
            total: 0,
        }
    }

    /// Count every line of `lines`
    pub fn from_lines<I, S>(lines: I, n: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counter = Self::new(n);
        for line in lines {
            counter.observe_line(line.as_ref());
        }
        counter
    }

    /// Count every line read from `reader`
    ///
    /// # Errors
    /// `NgramError::Io` if a line cannot be read.
    pub fn from_reader<R: BufRead>(reader: R, n: usize) -> Result<Self, NgramError> {
        let mut counter = Self::new(n);
        for line in reader.lines() {
            counter.observe_line(&line?);
        }
        Ok(counter)
    }

    /// Add the N-grams of a single line
    ///
    /// The line is case-folded and uppercased, then every window containing a
    /// character outside `A`-`Z` is discarded.
    pub fn observe_line(&mut self, line: &str) {
        let normalized = line.to_lowercase().to_uppercase();

        for window in sliding_window(normalized.chars(), self.n) {
            if !window.iter().all(char::is_ascii_uppercase) {
                continue;
            }
            let ngram: String = window.into_iter().collect();
            *self.counts.entry(ngram).or_insert(0) += 1;
            self.total += 1;
        }
    }

    /// Window length
    pub fn n(&self) -> usize {
        self.n
    }

    /// Occurrences of `ngram` (0 if never seen)
    pub fn count(&self, ngram: &str) -> usize {
        self.counts.get(ngram).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct N-grams
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Maximum-likelihood log-probabilities: `ln(count / total)`
    ///
    /// Unseen N-grams are absent; there is no smoothing.
    ///
    /// # Errors
    /// `NgramError::EmptyCorpus` when nothing was counted.
    pub fn log_probs(&self) -> Result<NgramLogProbs, NgramError> {
        if self.total == 0 {
            return Err(NgramError::EmptyCorpus { n: self.n });
        }

        let total = self.total as f64;
        debug!(
            n = self.n,
            distinct = self.counts.len(),
            total = self.total,
            "computing log-probabilities"
        );

        Ok(self
            .counts
            .iter()
            .map(|(ngram, &count)| (ngram.clone(), (count as f64 / total).ln()))
            .collect())
    }
}

/// Compute N-gram log-probabilities over a stream of lines
///
/// # Example
/// ```
/// use cryptogram::ngram::compute_ngram_log_probs;
///
/// let probs = compute_ngram_log_probs(["AB CD"], 2).unwrap();
/// assert_eq!(probs.len(), 2);
/// assert!((probs["AB"] - 0.5f64.ln()).abs() < 1e-12);
/// ```
pub fn compute_ngram_log_probs<I, S>(lines: I, n: usize) -> Result<NgramLogProbs, NgramError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NgramCounter::from_lines(lines, n).log_probs()
}
