//! Pairwise divergence between topic distributions.
//!
//! Kullback-Leibler divergence is directional: KL(p ‖ q) asks how badly q
//! models samples drawn from p. The matrix is computed once per unordered
//! pair in the (i, j) direction only, so just the strict upper triangle is
//! meaningful. Lower score = more similar.

use tracing::debug;

use crate::model::LdaModel;

/// Square pairwise divergence matrix, strict upper triangle only.
///
/// Stored packed: entry (i, j) with i < j lives at
/// `i*n - i*(i+1)/2 + (j-i-1)`.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// A zeroed matrix over `n` documents.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            scores: vec![0.0; n * n.saturating_sub(1) / 2],
        }
    }

    /// Number of documents the matrix covers.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Divergence for the unordered pair (i, j).
    ///
    /// # Panics
    /// Panics unless `i < j < len`; the diagonal and lower triangle are
    /// undefined.
    pub fn divergence(&self, i: usize, j: usize) -> f64 {
        self.scores[self.index(i, j)]
    }

    /// Set the divergence for the unordered pair (i, j).
    ///
    /// # Panics
    /// Panics unless `i < j < len`.
    pub fn set(&mut self, i: usize, j: usize, score: f64) {
        let index = self.index(i, j);
        self.scores[index] = score;
    }

    fn index(&self, i: usize, j: usize) -> usize {
        assert!(i < j && j < self.n, "upper triangle requires i < j < n");
        i * self.n - i * (i + 1) / 2 + (j - i - 1)
    }
}

/// KL(p ‖ q) in bits.
///
/// Convention for zero probabilities, applied uniformly: any index where
/// either distribution is zero contributes nothing to the sum, so the
/// result is always finite and never NaN. Identical distributions score 0.
///
/// # Panics
/// Panics if the distributions have different lengths.
pub fn kl_divergence(p: &[f64], q: &[f64]) -> f64 {
    assert_eq!(p.len(), q.len(), "distributions must have same length");
    p.iter()
        .zip(q.iter())
        .filter(|(&pi, &qi)| pi > 0.0 && qi > 0.0)
        .map(|(&pi, &qi)| pi * (pi / qi).log2())
        .sum()
}

/// Divergence between every unordered document pair of a fitted model,
/// evaluated once per pair in the (i, j) direction.
pub fn pairwise_divergence(model: &LdaModel) -> SimilarityMatrix {
    let n = model.num_documents();
    let mut matrix = SimilarityMatrix::new(n);
    for i in 0..n {
        let p = model.topic_distribution(i);
        for j in (i + 1)..n {
            matrix.set(i, j, kl_divergence(p, model.topic_distribution(j)));
        }
    }
    debug!(documents = n, "Pairwise divergence computed");
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LdaConfig;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_kl_identical_is_zero() {
        let p = vec![0.25, 0.25, 0.25, 0.25];
        assert!(kl_divergence(&p, &p).abs() < 1e-12);
    }

    #[test]
    fn test_kl_is_directional() {
        let p = vec![0.9, 0.05, 0.05];
        let q = vec![0.4, 0.3, 0.3];
        let forward = kl_divergence(&p, &q);
        let backward = kl_divergence(&q, &p);
        assert!(forward > 0.0);
        assert!((forward - backward).abs() > 1e-6);
    }

    #[test]
    fn test_kl_skips_zero_entries() {
        // Disjoint one-hot distributions: every term has a zero on one
        // side, so the skip convention yields a finite result
        let p = vec![1.0, 0.0];
        let q = vec![0.0, 1.0];
        let score = kl_divergence(&p, &q);
        assert!(score.is_finite());
        assert!(!score.is_nan());
    }

    #[test]
    fn test_near_identical_scores_below_disjoint() {
        let near_p = vec![0.6, 0.3, 0.05, 0.05];
        let near_q = vec![0.55, 0.35, 0.05, 0.05];
        let hot_p = vec![0.97, 0.01, 0.01, 0.01];
        let hot_q = vec![0.01, 0.01, 0.01, 0.97];
        assert!(kl_divergence(&near_p, &near_q) < kl_divergence(&hot_p, &hot_q));
    }

    #[test]
    fn test_ranking_monotonicity_under_random_pairs() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let base: Vec<f64> = random_distribution(&mut rng, 8);
            let nudged = nudge(&base, 0.01);
            let far = nudge(&base, 0.6);
            let close_score = kl_divergence(&base, &nudged);
            let far_score = kl_divergence(&base, &far);
            assert!(
                close_score <= far_score,
                "nudged {close_score} should not exceed far {far_score}"
            );
        }
    }

    #[test]
    fn test_matrix_upper_triangle_round_trip() {
        let mut matrix = SimilarityMatrix::new(4);
        let mut value = 0.5;
        for i in 0..4 {
            for j in (i + 1)..4 {
                matrix.set(i, j, value);
                value += 0.5;
            }
        }
        value = 0.5;
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_eq!(matrix.divergence(i, j), value);
                value += 0.5;
            }
        }
    }

    #[test]
    #[should_panic(expected = "upper triangle")]
    fn test_matrix_diagonal_is_undefined() {
        let matrix = SimilarityMatrix::new(3);
        matrix.divergence(1, 1);
    }

    #[test]
    fn test_pairwise_covers_all_pairs() {
        let config = LdaConfig {
            iterations: 30,
            seed: Some(5),
            ..LdaConfig::default()
        };
        let docs = vec![vec![0, 1, 0, 1], vec![2, 3, 2, 3], vec![0, 2, 0, 2]];
        let model = LdaModel::fit(&docs, 4, &config);
        let matrix = pairwise_divergence(&model);
        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            for j in (i + 1)..3 {
                assert!(matrix.divergence(i, j).is_finite());
                assert!(matrix.divergence(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn test_pairwise_empty_model() {
        let model = LdaModel::fit(&[], 0, &LdaConfig::default());
        let matrix = pairwise_divergence(&model);
        assert!(matrix.is_empty());
    }

    fn random_distribution(rng: &mut StdRng, len: usize) -> Vec<f64> {
        let mut v: Vec<f64> = (0..len).map(|_| rng.random::<f64>() + 1e-3).collect();
        let sum: f64 = v.iter().sum();
        for x in v.iter_mut() {
            *x /= sum;
        }
        v
    }

    /// Mix a distribution towards its own reversal; `amount` 0 keeps it
    /// unchanged, 1 fully reverses it.
    fn nudge(base: &[f64], amount: f64) -> Vec<f64> {
        let reversed: Vec<f64> = base.iter().rev().copied().collect();
        base.iter()
            .zip(reversed.iter())
            .map(|(&a, &b)| (1.0 - amount) * a + amount * b)
            .collect()
    }
}
