//! Roulette-wheel replacement with an elitism pocket.
//!
//! One selection pass turns the evaluated descendant pool of a generation
//! into the next population. Lengths are inverted into strictly positive
//! weights, the weights are laid out as contiguous half-open intervals
//! tiling `[0, 1)`, and the new population is sampled from those intervals.
//! The pocket guarantees the best-ever tour's genetic material survives the
//! generation even when the roulette misses it.
//!
//! Every selected individual is cloned into the new population — tours are
//! never shared across generation boundaries.

use crate::tour::Tour;
use rand::Rng;

/// Shift added to every inverted length so the worst descendant still
/// receives a strictly positive selection weight.
pub(crate) const WEIGHT_EPSILON: f64 = 0.01;

/// Inverts lengths into selection weights: `-length + worst + ε`.
///
/// Shorter tours get larger weights; the generation's worst tour gets
/// exactly ε, never zero.
pub(crate) fn selection_weights(descendants: &[Tour], worst_length: f64) -> Vec<f64> {
    descendants
        .iter()
        .map(|tour| -tour.length() + worst_length + WEIGHT_EPSILON)
        .collect()
}

/// Normalizes weights into cumulative upper bounds on `[0, 1)`.
///
/// Descendant `i` owns the half-open interval `[bounds[i-1], bounds[i])`
/// (with an implicit lower bound of 0 for the first). The final bound is 1
/// up to floating-point rounding.
pub(crate) fn cumulative_bounds(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    let mut cumulative = 0.0;
    weights
        .iter()
        .map(|weight| {
            cumulative += weight / total;
            cumulative
        })
        .collect()
}

/// Builds the next population from an evaluated descendant pool.
///
/// 1. Finds the pool's best and worst lengths.
/// 2. Replaces `best` with a copy of the pool's best on strict improvement.
/// 3. Samples `population_size` tours fitness-proportionally, cloning each
///    pick. A sample that falls past the last bound (floating-point edge)
///    selects the last descendant.
/// 4. Pocket: if no sample hit the pool member carrying `best`'s genes, the
///    last slot is overwritten with a copy of `best`.
///
/// # Panics
/// Panics if the descendant pool is empty.
pub(crate) fn next_population<R: Rng + ?Sized>(
    descendants: &[Tour],
    best: &mut Tour,
    population_size: usize,
    rng: &mut R,
) -> Vec<Tour> {
    assert!(
        !descendants.is_empty(),
        "cannot select from an empty descendant pool"
    );

    let mut gen_best = 0;
    let mut gen_worst = 0;
    for (i, tour) in descendants.iter().enumerate() {
        if tour.length() <= descendants[gen_best].length() {
            gen_best = i;
        }
        if tour.length() > descendants[gen_worst].length() {
            gen_worst = i;
        }
    }

    if descendants[gen_best].length() < best.length() {
        *best = descendants[gen_best].clone();
    }

    let weights = selection_weights(descendants, descendants[gen_worst].length());
    let bounds = cumulative_bounds(&weights);

    // The pool member whose genes match the best-ever tour, if it is
    // present in this generation at all.
    let best_in_pool = descendants
        .iter()
        .position(|tour| tour.genes() == best.genes());

    let mut best_selected = false;
    let mut population = Vec::with_capacity(population_size);
    for _ in 0..population_size {
        let pick: f64 = rng.random();
        let index = bounds
            .iter()
            .position(|&upper| pick < upper)
            .unwrap_or(descendants.len() - 1);
        if Some(index) == best_in_pool {
            best_selected = true;
        }
        population.push(descendants[index].clone());
    }

    if !best_selected {
        if let Some(last) = population.last_mut() {
            *last = best.clone();
        }
    }

    population
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tour_with_length(genes: Vec<usize>, length: f64) -> Tour {
        Tour::with_length(genes, length)
    }

    fn pool(lengths: &[f64]) -> Vec<Tour> {
        // Distinct gene sequences so gene-equality checks can tell the
        // descendants apart: rotate the interior.
        let n = lengths.len().max(3) + 2;
        lengths
            .iter()
            .enumerate()
            .map(|(i, &len)| {
                let mut interior: Vec<usize> = (1..n).collect();
                interior.rotate_left(i % (n - 1));
                let mut genes = vec![0];
                genes.extend(interior);
                genes.push(0);
                tour_with_length(genes, len)
            })
            .collect()
    }

    #[test]
    fn test_weights_strictly_positive_and_invert_order() {
        let descendants = pool(&[4.0, 9.0, 2.0, 9.0]);
        let weights = selection_weights(&descendants, 9.0);

        assert!(weights.iter().all(|&w| w > 0.0));
        // Shortest tour gets the largest weight, worst gets exactly ε.
        assert!((weights[2] - (9.0 - 2.0 + WEIGHT_EPSILON)).abs() < 1e-12);
        assert!((weights[1] - WEIGHT_EPSILON).abs() < 1e-12);
        assert!(weights[2] > weights[0]);
        assert!(weights[0] > weights[1]);
    }

    #[test]
    fn test_bounds_tile_unit_interval() {
        let descendants = pool(&[4.0, 9.0, 2.0, 7.5, 3.25]);
        let weights = selection_weights(&descendants, 9.0);
        let bounds = cumulative_bounds(&weights);

        assert_eq!(bounds.len(), descendants.len());
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert!((bounds.last().unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_selection_favors_short_tours() {
        let descendants = pool(&[1.0, 100.0]);
        let mut best = descendants[0].clone();
        let mut rng = StdRng::seed_from_u64(42);

        let population = next_population(&descendants, &mut best, 1000, &mut rng);
        let short_picks = population
            .iter()
            .filter(|t| t.genes() == descendants[0].genes())
            .count();
        assert!(
            short_picks > 900,
            "short tour picked only {short_picks}/1000 times"
        );
    }

    #[test]
    fn test_best_updated_on_strict_improvement() {
        let descendants = pool(&[4.0, 2.0, 9.0]);
        let mut best = tour_with_length(descendants[0].genes().to_vec(), 3.0);
        let mut rng = StdRng::seed_from_u64(1);

        let _ = next_population(&descendants, &mut best, 10, &mut rng);
        assert_eq!(best.length(), 2.0);
        assert_eq!(best.genes(), descendants[1].genes());
    }

    #[test]
    fn test_best_not_replaced_on_tie() {
        let descendants = pool(&[4.0, 9.0]);
        let best_before = tour_with_length(vec![0, 3, 2, 1, 0], 4.0);
        let mut best = best_before.clone();
        let mut rng = StdRng::seed_from_u64(1);

        let _ = next_population(&descendants, &mut best, 10, &mut rng);
        assert_eq!(best.genes(), best_before.genes());
    }

    #[test]
    fn test_pocket_forces_best_survival() {
        // Best-ever tour is shorter than everything in the pool, so it can
        // never be roulette-picked; the pocket must plant it in the last
        // slot.
        let descendants = pool(&[10.0, 12.0, 15.0]);
        let mut best = tour_with_length(vec![0, 4, 3, 2, 1, 0], 1.0);
        let best_genes = best.genes().to_vec();
        let mut rng = StdRng::seed_from_u64(42);

        let population = next_population(&descendants, &mut best, 8, &mut rng);
        assert_eq!(population.len(), 8);
        assert_eq!(population.last().unwrap().genes(), &best_genes[..]);
    }

    #[test]
    fn test_selected_tours_are_copies() {
        let descendants = pool(&[5.0, 6.0]);
        let mut best = descendants[0].clone();
        let mut rng = StdRng::seed_from_u64(3);

        let mut population = next_population(&descendants, &mut best, 4, &mut rng);
        // Re-evaluating a selected tour must not affect the pool it came
        // from: the new population holds copies, not shared references.
        let n = population[0].points();
        let zero_matrix =
            crate::matrix::DistanceMatrix::from_rows(vec![vec![0.0; n]; n]).unwrap();
        population[0].evaluate(&zero_matrix);
        assert_eq!(population[0].length(), 0.0);
        assert!(descendants.iter().all(|d| d.length() > 0.0));
    }

    #[test]
    #[should_panic(expected = "empty descendant pool")]
    fn test_empty_pool_panics() {
        let mut best = tour_with_length(vec![0, 1, 2, 0], 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        next_population(&[], &mut best, 5, &mut rng);
    }
}
