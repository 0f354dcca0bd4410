use num_traits::Float;

/// Position of the pair `(i, j)`, `i < j < n_observations`, in a condensed (upper triangular,
/// row-major) distance array.
///
/// # Examples
/// ```
///use domain_grouping::condensed_index;
///
/// // Row 0 holds pairs (0,1), (0,2), (0,3); row 1 starts at (1,2)
///assert_eq!(0, condensed_index(4, 0, 1));
///assert_eq!(3, condensed_index(4, 1, 2));
///assert_eq!(5, condensed_index(4, 2, 3));
/// ```
pub fn condensed_index(n_observations: usize, i: usize, j: usize) -> usize {
    debug_assert!(i < j && j < n_observations);
    i * (2 * n_observations - i - 1) / 2 + j - i - 1
}

/// Number of cells in a condensed distance array over `n_observations`.
pub fn condensed_len(n_observations: usize) -> usize {
    n_observations * n_observations.saturating_sub(1) / 2
}

/// Symmetric access to the dissimilarity between two observations.
pub trait DissimilarityMeasure<T> {
    fn n_observations(&self) -> usize;

    /// The dissimilarity between observations `i` and `j`. Zero when `i == j` and equal for
    /// `(i, j)` and `(j, i)`.
    fn dissimilarity(&self, i: usize, j: usize) -> T;
}

/// The pairwise dissimilarities between observations, holding only the upper triangle of the
/// symmetric matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct CondensedMatrix<T> {
    n_observations: usize,
    distances: Vec<T>,
}

impl<T: Float> CondensedMatrix<T> {
    pub(crate) fn new(n_observations: usize, distances: Vec<T>) -> Self {
        debug_assert_eq!(condensed_len(n_observations), distances.len());
        CondensedMatrix {
            n_observations,
            distances,
        }
    }

    /// Wraps an already condensed distance array. Returns `None` if its length does not match
    /// `n_observations * (n_observations - 1) / 2`.
    pub fn from_condensed(n_observations: usize, distances: Vec<T>) -> Option<Self> {
        if distances.len() != condensed_len(n_observations) {
            return None;
        }
        Some(CondensedMatrix {
            n_observations,
            distances,
        })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.distances
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

impl<T: Float> DissimilarityMeasure<T> for CondensedMatrix<T> {
    fn n_observations(&self) -> usize {
        self.n_observations
    }

    fn dissimilarity(&self, i: usize, j: usize) -> T {
        match i.cmp(&j) {
            std::cmp::Ordering::Equal => T::zero(),
            std::cmp::Ordering::Less => self.distances[condensed_index(self.n_observations, i, j)],
            std::cmp::Ordering::Greater => {
                self.distances[condensed_index(self.n_observations, j, i)]
            }
        }
    }
}
