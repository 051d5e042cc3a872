// Letter N-gram log-probability estimation
//
// Counts fixed-length windows of uppercase Latin letters over a reference
// corpus and turns the counts into maximum-likelihood natural-log
// probabilities. The resulting table can be used to rank candidate
// decipherments; nothing here touches cipher state.
//
// Windows never cross a non-letter: "AB CD" with n=2 yields AB and CD only.

mod model;
mod window;

pub use model::{compute_ngram_log_probs, NgramCounter, NgramError, NgramLogProbs};
pub use window::{sliding_window, SlidingWindow};
