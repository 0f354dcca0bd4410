use num_traits::Float;

/// Possible distance methods used to calculate the dissimilarity between the score vectors of
/// two attributes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DistanceMethod {
    /// One minus the Jaccard index of the sets of neighborhoods where each attribute has a
    /// non-zero score. Suited to binary scores. Two attributes with no non-zero scores at all
    /// have a distance of zero.
    Jaccard,
    Euclidean,
    Manhattan,
    /// One minus the Pearson correlation coefficient. If either vector has no variance the
    /// distance is zero for identical vectors and one otherwise.
    Correlation,
}

/// A pure, commutative dissimilarity between two equal length score vectors.
///
/// Implemented by [`DistanceMethod`] and by any `Fn(&[T], &[T]) -> T` closure, which allows
/// custom distances to be injected when clustering.
pub trait Dissimilarity<T>: Sync {
    fn dissimilarity(&self, a: &[T], b: &[T]) -> T;
}

impl<T: Float> Dissimilarity<T> for DistanceMethod {
    fn dissimilarity(&self, a: &[T], b: &[T]) -> T {
        self.calc_dist(a, b)
    }
}

impl<T, F> Dissimilarity<T> for F
where
    F: Fn(&[T], &[T]) -> T + Sync,
{
    fn dissimilarity(&self, a: &[T], b: &[T]) -> T {
        self(a, b)
    }
}

impl DistanceMethod {
    pub(crate) fn calc_dist<T: Float>(&self, a: &[T], b: &[T]) -> T {
        match *self {
            Self::Jaccard => jaccard_distance(a, b),
            Self::Euclidean => euclidean_distance(a, b),
            Self::Manhattan => manhattan_distance(a, b),
            Self::Correlation => correlation_distance(a, b),
        }
    }
}

pub(crate) fn jaccard_distance<T: Float>(a: &[T], b: &[T]) -> T {
    let is_member = |x: &T| !x.is_nan() && !x.is_zero();
    let (intersection, union) = a
        .iter()
        .zip(b.iter())
        .fold((0_usize, 0_usize), |(both, either), (x, y)| {
            match (is_member(x), is_member(y)) {
                (true, true) => (both + 1, either + 1),
                (false, false) => (both, either),
                _ => (both, either + 1),
            }
        });
    if union == 0 {
        return T::zero();
    }
    let intersection = T::from(intersection).unwrap_or(T::zero());
    let union = T::from(union).unwrap_or(T::one());
    T::one() - intersection / union
}

pub(crate) fn euclidean_distance<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (*x - *y) * (*x - *y))
        .fold(T::zero(), std::ops::Add::add)
        .sqrt()
}

pub(crate) fn manhattan_distance<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (*x - *y).abs())
        .fold(T::zero(), std::ops::Add::add)
}

pub(crate) fn correlation_distance<T: Float>(a: &[T], b: &[T]) -> T {
    let n = a.len().min(b.len());
    if n == 0 {
        return T::zero();
    }
    let count = T::from(n).unwrap_or(T::one());
    let mean_a = a[..n].iter().fold(T::zero(), |sum, x| sum + *x) / count;
    let mean_b = b[..n].iter().fold(T::zero(), |sum, y| sum + *y) / count;

    let (cov, var_a, var_b) = a[..n].iter().zip(b[..n].iter()).fold(
        (T::zero(), T::zero(), T::zero()),
        |(cov, var_a, var_b), (x, y)| {
            let dx = *x - mean_a;
            let dy = *y - mean_b;
            (cov + dx * dy, var_a + dx * dx, var_b + dy * dy)
        },
    );

    if var_a.is_zero() || var_b.is_zero() {
        return if a[..n] == b[..n] { T::zero() } else { T::one() };
    }
    T::one() - cov / (var_a.sqrt() * var_b.sqrt())
}
