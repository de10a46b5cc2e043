//! Collapsed Gibbs sampling for latent Dirichlet allocation.
//!
//! Documents arrive as feature sequences over a shared vocabulary. The
//! sampler runs for a fixed iteration budget; when the corpus is large
//! enough it splits documents across worker threads which sample against
//! local copies of the topic-word statistics, merged back into the global
//! counts after every sweep (AD-LDA style). The merge is approximate but
//! the stationary distribution it approaches is the same, which is all the
//! downstream divergence ranking needs.

use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::LdaConfig;

/// Topic count policy as a step function of document count.
///
/// K=5 below 5 documents, K=N up to 10, then a linear ramp
/// `10 + round(0.09 * N)` (round half-up) to 50, capped at 50 from 500
/// documents on. Small corpora stay identifiable, large ones expressive.
pub fn topic_count(num_docs: usize) -> usize {
    if num_docs < 5 {
        5
    } else if num_docs <= 10 {
        num_docs
    } else if num_docs < 500 {
        10 + (0.09 * num_docs as f64 + 0.5).floor() as usize
    } else {
        50
    }
}

/// Per-document sampler state.
struct DocState {
    /// Feature ids of the document's tokens
    tokens: Vec<u32>,
    /// Current topic assignment per token position
    assignments: Vec<usize>,
    /// Topic occupancy counts for this document, length K
    counts: Vec<u32>,
}

/// A fitted topic model.
///
/// Read-only after [`LdaModel::fit`]; exposes one topic-probability vector
/// per document index plus the per-topic word counts for reporting.
pub struct LdaModel {
    num_topics: usize,
    vocab_size: usize,
    /// Per-document topic distributions, each summing to 1
    distributions: Vec<Vec<f64>>,
    /// K x V word counts from the final sampler state
    topic_word: Vec<Vec<u32>>,
}

impl LdaModel {
    /// Fit a model over the given feature-sequence documents.
    ///
    /// Degenerate corpora (no documents, or all documents empty) are legal
    /// and produce uniform distributions.
    pub fn fit(documents: &[Vec<u32>], vocab_size: usize, config: &LdaConfig) -> Self {
        let num_docs = documents.len();
        let num_topics = topic_count(num_docs);
        let alpha = config.alpha_sum / num_topics as f64;
        let total_tokens: usize = documents.iter().map(Vec::len).sum();

        info!(
            documents = num_docs,
            topics = num_topics,
            vocab = vocab_size,
            tokens = total_tokens,
            iterations = config.iterations,
            "Fitting topic model"
        );

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);

        // Random initial assignment
        let mut topic_word = vec![vec![0u32; vocab_size]; num_topics];
        let mut topic_totals = vec![0u32; num_topics];
        let mut docs: Vec<DocState> = documents
            .iter()
            .map(|tokens| {
                let mut counts = vec![0u32; num_topics];
                let assignments: Vec<usize> = tokens
                    .iter()
                    .map(|&w| {
                        let t = rng.random_range(0..num_topics);
                        counts[t] += 1;
                        topic_word[t][w as usize] += 1;
                        topic_totals[t] += 1;
                        t
                    })
                    .collect();
                DocState {
                    tokens: tokens.clone(),
                    assignments,
                    counts,
                }
            })
            .collect();

        if total_tokens > 0 {
            let workers = effective_workers(config.workers, num_docs);
            for iteration in 0..config.iterations {
                if workers == 1 {
                    sweep(
                        &mut docs,
                        &mut topic_word,
                        &mut topic_totals,
                        alpha,
                        config.beta,
                        vocab_size,
                        &mut rng,
                    );
                } else {
                    parallel_sweep(
                        &mut docs,
                        &mut topic_word,
                        &mut topic_totals,
                        alpha,
                        config.beta,
                        vocab_size,
                        workers,
                        seed,
                        iteration,
                    );
                }
            }
            debug!(workers, "Sampling complete");
        }

        let distributions = docs
            .iter()
            .map(|doc| {
                let total = doc.tokens.len() as f64 + config.alpha_sum;
                doc.counts
                    .iter()
                    .map(|&c| (c as f64 + alpha) / total)
                    .collect()
            })
            .collect();

        Self {
            num_topics,
            vocab_size,
            distributions,
            topic_word,
        }
    }

    pub fn num_topics(&self) -> usize {
        self.num_topics
    }

    pub fn num_documents(&self) -> usize {
        self.distributions.len()
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// Topic-probability vector for one document index.
    ///
    /// # Panics
    /// Panics if the index is out of range.
    pub fn topic_distribution(&self, doc_index: usize) -> &[f64] {
        &self.distributions[doc_index]
    }

    /// The `n` highest-count words of a topic as (feature id, count) pairs,
    /// highest first. Words with zero count are omitted.
    pub fn top_words(&self, topic: usize, n: usize) -> Vec<(u32, u32)> {
        let mut words: Vec<(u32, u32)> = self.topic_word[topic]
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(w, &count)| (w as u32, count))
            .collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        words.truncate(n);
        words
    }
}

/// Partition count actually used: at least two documents per partition,
/// never more partitions than requested.
fn effective_workers(requested: usize, num_docs: usize) -> usize {
    requested.max(1).min(num_docs / 2).max(1)
}

/// One collapsed Gibbs sweep over a set of documents.
///
/// `topic_word` and `topic_totals` may be a worker-local copy of the
/// global statistics; the caller is responsible for merging.
#[allow(clippy::too_many_arguments)]
fn sweep(
    docs: &mut [DocState],
    topic_word: &mut [Vec<u32>],
    topic_totals: &mut [u32],
    alpha: f64,
    beta: f64,
    vocab_size: usize,
    rng: &mut StdRng,
) {
    let num_topics = topic_totals.len();
    let beta_sum = beta * vocab_size as f64;
    let mut weights = vec![0.0f64; num_topics];

    for doc in docs.iter_mut() {
        for pos in 0..doc.tokens.len() {
            let word = doc.tokens[pos] as usize;
            let old = doc.assignments[pos];
            doc.counts[old] -= 1;
            topic_word[old][word] -= 1;
            topic_totals[old] -= 1;

            let mut total = 0.0;
            for (t, weight) in weights.iter_mut().enumerate() {
                *weight = (doc.counts[t] as f64 + alpha) * (topic_word[t][word] as f64 + beta)
                    / (topic_totals[t] as f64 + beta_sum);
                total += *weight;
            }

            let mut target = rng.random::<f64>() * total;
            let mut new = num_topics - 1;
            for (t, &weight) in weights.iter().enumerate() {
                target -= weight;
                if target <= 0.0 {
                    new = t;
                    break;
                }
            }

            doc.assignments[pos] = new;
            doc.counts[new] += 1;
            topic_word[new][word] += 1;
            topic_totals[new] += 1;
        }
    }
}

/// One sweep split across scoped worker threads.
///
/// Each worker samples its partition against a snapshot of the global
/// topic-word statistics; the deltas are summed back into the global
/// counts afterwards. Partitions hold disjoint token sets, so the merged
/// counts stay non-negative.
#[allow(clippy::too_many_arguments)]
fn parallel_sweep(
    docs: &mut [DocState],
    topic_word: &mut [Vec<u32>],
    topic_totals: &mut [u32],
    alpha: f64,
    beta: f64,
    vocab_size: usize,
    workers: usize,
    seed: u64,
    iteration: usize,
) {
    let chunk_size = docs.len().div_ceil(workers);
    let results: Vec<(Vec<Vec<u32>>, Vec<u32>)> = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        for (worker, chunk) in docs.chunks_mut(chunk_size).enumerate() {
            let mut local_word = topic_word.to_vec();
            let mut local_totals = topic_totals.to_vec();
            let worker_seed = seed
                .wrapping_add(1)
                .wrapping_mul(iteration as u64 + 1)
                .wrapping_add(worker as u64);
            handles.push(scope.spawn(move || {
                let mut rng = StdRng::seed_from_u64(worker_seed);
                sweep(
                    chunk,
                    &mut local_word,
                    &mut local_totals,
                    alpha,
                    beta,
                    vocab_size,
                    &mut rng,
                );
                (local_word, local_totals)
            }));
        }
        handles
            .into_iter()
            .map(|h| h.join().expect("sampler worker panicked"))
            .collect()
    });

    for (topic, row) in topic_word.iter_mut().enumerate() {
        for (word, count) in row.iter_mut().enumerate() {
            let mut merged = *count as i64;
            for (local_word, _) in &results {
                merged += local_word[topic][word] as i64 - *count as i64;
            }
            *count = merged.max(0) as u32;
        }
        let mut merged_total = topic_totals[topic] as i64;
        for (_, local_totals) in &results {
            merged_total += local_totals[topic] as i64 - topic_totals[topic] as i64;
        }
        topic_totals[topic] = merged_total.max(0) as u32;
    }
}
