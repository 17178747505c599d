//! Genetic operators on anchored tours.
//!
//! Both operators are pure with respect to their parents: they clone gene
//! material into a fresh, unevaluated [`Tour`] and leave the parents
//! untouched, so breeding-group bookkeeping can keep reusing parents within
//! a generation.
//!
//! - [`order_crossover`]: order-preserving single-point recombination —
//!   a prefix of one parent plus the remaining cities in the other parent's
//!   relative order (the classic OX pattern, Davis 1985, restricted to a
//!   single cut point)
//! - [`swap_mutation`]: exchange of two random interior genes
//!
//! The closed-permutation invariant is checked with debug assertions after
//! every operator. A violation is an operator bug, never a runtime
//! condition to repair.

use crate::tour::Tour;
use rand::Rng;

/// Produces one child from two parents by order-preserving single-point
/// crossover.
///
/// A cut point `c` is drawn uniformly from `[2, n-1]`. The child takes
/// `parent_a`'s genes at positions `[0, c)` verbatim, then fills the
/// remaining slots with the cities it is still missing, in the order they
/// appear in `parent_b` (scanned from position 1), and finally closes the
/// circuit with the anchor.
///
/// One child per parent pair; callers wanting the mirrored child swap the
/// argument order.
///
/// # Panics
/// Panics if the parents have different sizes or fewer than 3 points.
pub fn order_crossover<R: Rng + ?Sized>(parent_a: &Tour, parent_b: &Tour, rng: &mut R) -> Tour {
    let n = parent_a.points();
    assert_eq!(n, parent_b.points(), "parents must have equal size");
    assert!(n >= 3, "crossover requires at least 3 points");

    let genes_a = parent_a.genes();
    let genes_b = parent_b.genes();
    let start = genes_a[0];

    let cut = rng.random_range(2..n);

    let mut genes = Vec::with_capacity(n + 1);
    let mut used = vec![false; n];
    for &gene in &genes_a[..cut] {
        genes.push(gene);
        used[gene] = true;
    }

    // Remaining cities in parent_b's relative order; the trailing anchor of
    // parent_b is skipped naturally because the start city is already used.
    for &gene in &genes_b[1..] {
        if genes.len() == n {
            break;
        }
        if !used[gene] {
            genes.push(gene);
            used[gene] = true;
        }
    }
    genes.push(start);

    let child = Tour::from_genes(genes);
    debug_assert!(
        child.is_closed_circuit(n, start),
        "order crossover produced an invalid circuit"
    );
    child
}

/// Produces one child by swapping two distinct interior genes of a copy of
/// the parent.
///
/// The two positions are drawn uniformly from the interior range,
/// resampling until they differ; the anchor positions are never candidates.
/// The parent is retained unchanged.
///
/// # Panics
/// Panics if the tour has fewer than 3 points.
pub fn swap_mutation<R: Rng + ?Sized>(parent: &Tour, rng: &mut R) -> Tour {
    let n = parent.points();
    assert!(n >= 3, "mutation requires at least 3 points");

    let start = parent.genes()[0];
    let mut genes = parent.genes().to_vec();

    let first = rng.random_range(1..n);
    let mut second = rng.random_range(1..n);
    while second == first {
        second = rng.random_range(1..n);
    }
    genes.swap(first, second);

    let child = Tour::from_genes(genes);
    debug_assert!(
        child.is_closed_circuit(n, start),
        "swap mutation produced an invalid circuit"
    );
    child
}
