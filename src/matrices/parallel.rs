#![cfg(feature = "parallel")]
use crate::condensed::{condensed_len, CondensedMatrix};
use crate::distance::Dissimilarity;
use crate::landscape::ScoringFunction;
use num_traits::Float;
use rayon::prelude::*;

/// Builds the `[attribute][neighborhood]` score matrix, populating attribute rows in parallel.
pub fn build_score_matrix_par<T, N, S>(
    neighborhoods: &[N],
    attributes: &[usize],
    scoring: &S,
) -> Vec<Vec<T>>
where
    T: Float + Send,
    N: Sync,
    S: ScoringFunction<N, T>,
{
    attributes
        .par_iter()
        .map(|&attribute| {
            neighborhoods
                .iter()
                .map(|neighborhood| scoring.score(neighborhood, attribute))
                .collect()
        })
        .collect()
}

/// Computes the dissimilarity between every pair of rows of `scores`, with each row of the
/// upper triangle filled by its own task. Rows cover disjoint cells of the condensed array.
pub fn pairwise_distances_par<T, D>(scores: &[Vec<T>], dist: &D) -> CondensedMatrix<T>
where
    T: Float + Send + Sync,
    D: Dissimilarity<T> + ?Sized,
{
    let n_rows = scores.len();
    let mut condensed = vec![T::zero(); condensed_len(n_rows)];

    let mut rows: Vec<(usize, &mut [T])> = Vec::with_capacity(n_rows);
    let mut remaining = condensed.as_mut_slice();
    for i in 0..n_rows.saturating_sub(1) {
        let (row, rest) = std::mem::take(&mut remaining).split_at_mut(n_rows - i - 1);
        rows.push((i, row));
        remaining = rest;
    }

    rows.into_par_iter().for_each(|(i, row)| {
        for (offset, cell) in row.iter_mut().enumerate() {
            let j = i + 1 + offset;
            *cell = dist.dissimilarity(&scores[i], &scores[j]);
        }
    });

    CondensedMatrix::new(n_rows, condensed)
}
