use crate::condensed::{condensed_len, CondensedMatrix};
use crate::distance::Dissimilarity;
use crate::landscape::ScoringFunction;
use num_traits::Float;

/// Builds the `[attribute][neighborhood]` score matrix one attribute at a time.
///
/// # Examples
/// ```
///use domain_grouping::build_score_matrix;
///
///let neighborhoods = vec![vec![1.0, 0.0], vec![0.0, 2.0], vec![3.0, 3.0]];
///let scores = build_score_matrix(&neighborhoods, &[1], &|n: &Vec<f64>, attr: usize| n[attr]);
///assert_eq!(scores, vec![vec![0.0, 2.0, 3.0]]);
/// ```
pub fn build_score_matrix<T, N, S>(
    neighborhoods: &[N],
    attributes: &[usize],
    scoring: &S,
) -> Vec<Vec<T>>
where
    T: Float,
    S: ScoringFunction<N, T>,
{
    attributes
        .iter()
        .map(|&attribute| {
            neighborhoods
                .iter()
                .map(|neighborhood| scoring.score(neighborhood, attribute))
                .collect()
        })
        .collect()
}

/// Computes the dissimilarity between every pair of rows of `scores`, row by row.
pub fn pairwise_distances<T, D>(scores: &[Vec<T>], dist: &D) -> CondensedMatrix<T>
where
    T: Float,
    D: Dissimilarity<T> + ?Sized,
{
    let n_rows = scores.len();
    let mut condensed = Vec::with_capacity(condensed_len(n_rows));
    for i in 0..n_rows {
        for j in (i + 1)..n_rows {
            condensed.push(dist.dissimilarity(&scores[i], &scores[j]));
        }
    }
    CondensedMatrix::new(n_rows, condensed)
}
