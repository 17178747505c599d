//! Candidate solutions (individuals).
//!
//! A [`Tour`] is one closed Hamiltonian circuit: a permutation of point
//! indices anchored at a fixed start point on both ends, plus its total
//! length under a distance matrix. Tours are value types — the solver
//! clones them across generation boundaries so mutating one generation can
//! never retroactively change another generation's records.

use crate::matrix::DistanceMatrix;
use rand::Rng;

/// One candidate circuit through all points.
///
/// The gene sequence has `n + 1` entries for an `n`-point instance:
/// `genes[0]` and `genes[n]` both equal the start index, and the interior
/// positions hold every other point index exactly once. This invariant
/// holds after construction and after every genetic operator.
///
/// `length` is `f64::INFINITY` until the tour is evaluated against a
/// distance matrix; lower is better.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    genes: Vec<usize>,
    length: f64,
}

impl Tour {
    /// Wraps an already-valid gene sequence, unevaluated.
    pub(crate) fn from_genes(genes: Vec<usize>) -> Self {
        Self {
            genes,
            length: f64::INFINITY,
        }
    }

    /// Builds a tour with a preassigned length, bypassing evaluation.
    #[cfg(test)]
    pub(crate) fn with_length(genes: Vec<usize>, length: f64) -> Self {
        Self { genes, length }
    }

    /// Generates a uniformly shuffled random tour on `n` points anchored at
    /// `start`.
    ///
    /// The interior is first laid out in ascending order skipping `start`,
    /// then shuffled with one in-place pass: every interior position is
    /// swapped with a target drawn uniformly from the full interior range.
    /// The anchor positions are never touched.
    ///
    /// # Panics
    /// Panics if `n < 3` or `start >= n` — the solver validates both before
    /// any tour is built.
    pub(crate) fn random<R: Rng + ?Sized>(n: usize, start: usize, rng: &mut R) -> Self {
        assert!(n >= 3, "a tour requires at least 3 points");
        assert!(start < n, "start index out of bounds");

        let mut genes = Vec::with_capacity(n + 1);
        genes.push(start);
        genes.extend((0..n).filter(|&point| point != start));
        genes.push(start);

        // Interior positions are 1..n; both swap ends draw from that range.
        for i in 1..n {
            let j = rng.random_range(1..n);
            genes.swap(i, j);
        }

        Self::from_genes(genes)
    }

    /// The ordered point-index sequence, anchors included.
    #[inline]
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Total circuit length; `f64::INFINITY` if not yet evaluated.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of points the tour visits (excluding the repeated anchor).
    #[inline]
    pub fn points(&self) -> usize {
        self.genes.len() - 1
    }

    /// Computes and stores the circuit length: the sum of the directed
    /// costs of all consecutive edges, closing edge included.
    ///
    /// Pure in the genes and the matrix; O(n).
    pub(crate) fn evaluate(&mut self, matrix: &DistanceMatrix) {
        self.length = self
            .genes
            .windows(2)
            .map(|edge| matrix.cost(edge[0], edge[1]))
            .sum();
    }

    /// Checks the closed-permutation invariant: anchored at `start` on both
    /// ends, every point index present exactly once in between.
    pub(crate) fn is_closed_circuit(&self, n: usize, start: usize) -> bool {
        if self.genes.len() != n + 1 {
            return false;
        }
        if self.genes[0] != start || self.genes[n] != start {
            return false;
        }
        let mut seen = vec![false; n];
        for &gene in &self.genes[..n] {
            if gene >= n || seen[gene] {
                return false;
            }
            seen[gene] = true;
        }
        true
    }
}
