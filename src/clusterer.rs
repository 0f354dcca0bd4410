use crate::condensed::CondensedMatrix;
use crate::data_wrappers::Linkage;
use crate::extraction::extract_clusters;
use crate::linkage::compute_linkages;
#[cfg(feature = "parallel")]
use crate::matrices::parallel::pairwise_distances_par;
#[cfg(feature = "serial")]
use crate::matrices::serial::pairwise_distances;
use crate::tree_cut::{tree_height, ParentForest};
use crate::validation::{validate_threshold, DataValidator};
use crate::{ClusterParams, Dissimilarity, GroupingError};
use log::debug;
use num_traits::Float;

/// Clusters attributes by their score vectors with single-linkage clustering, cutting the tree
/// at a height relative threshold. Generic over floating point numeric types.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeClusterer<'a, T> {
    scores: &'a [Vec<T>],
    n_observations: usize,
    params: ClusterParams,
}

impl<'a, T: Float + Send + Sync> AttributeClusterer<'a, T> {
    /// Creates a clusterer with a custom parameter configuration.
    ///
    /// # Parameters
    /// * `scores` - one score vector per attribute, all of the same length.
    /// * `params` - the parameter configuration.
    ///
    /// # Examples
    /// ```
    ///use domain_grouping::{AttributeClusterer, ClusterParams, DistanceMethod};
    ///
    ///let scores: Vec<Vec<f64>> = vec![
    ///    vec![1.0, 1.0, 0.0, 0.0],
    ///    vec![1.0, 1.0, 1.0, 0.0],
    ///    vec![0.0, 0.0, 1.0, 1.0],
    ///];
    ///let params = ClusterParams::builder()
    ///    .threshold(0.5)
    ///    .distance_method(DistanceMethod::Euclidean)
    ///    .build();
    ///let clusterer = AttributeClusterer::new(&scores, params);
    /// ```
    pub fn new(scores: &'a [Vec<T>], params: ClusterParams) -> Self {
        AttributeClusterer {
            scores,
            n_observations: scores.len(),
            params,
        }
    }

    /// Creates a clusterer using the default parameters.
    pub fn default_params(scores: &'a [Vec<T>]) -> Self {
        AttributeClusterer::new(scores, ClusterParams::default())
    }

    /// Clusters the attributes passed to the constructor.
    ///
    /// # Returns
    /// * A result that, if successful, contains the clusters as lists of attribute positions
    ///   in `scores`, largest cluster first. Attributes that were not merged with any other
    ///   attribute below the cut are left out. An error is returned if the threshold is not in
    ///   the range 0 to 1, if there are no attributes, or if the score vectors differ in
    ///   length.
    ///
    /// # Examples
    /// ```
    ///use domain_grouping::AttributeClusterer;
    ///
    ///let scores: Vec<Vec<f64>> = vec![
    ///    vec![1.0, 1.0, 0.0, 0.0, 0.0],
    ///    vec![0.0, 0.0, 0.0, 1.0, 1.0],
    ///    vec![1.0, 1.0, 1.0, 0.0, 0.0],
    ///    vec![0.0, 0.0, 1.0, 1.0, 1.0],
    ///    vec![1.0, 0.0, 1.0, 0.0, 1.0],
    ///];
    /// // Jaccard distances, cut at 0.75 of the tree height
    ///let clusterer = AttributeClusterer::default_params(&scores);
    ///let clusters = clusterer.cluster().unwrap();
    ///assert_eq!(clusters, vec![vec![0, 2], vec![1, 3]]);
    /// ```
    #[cfg(feature = "serial")]
    pub fn cluster(&self) -> Result<Vec<Vec<usize>>, GroupingError> {
        self.cluster_with(&self.params.distance_method)
    }

    /// Like [`AttributeClusterer::cluster`], with a custom dissimilarity in place of the
    /// configured distance method.
    #[cfg(feature = "serial")]
    pub fn cluster_with<D>(&self, dist: &D) -> Result<Vec<Vec<usize>>, GroupingError>
    where
        D: Dissimilarity<T> + ?Sized,
    {
        DataValidator::new(self.scores, &self.params).validate_input_data()?;
        let matrix = pairwise_distances(self.scores, dist);
        self.cluster_matrix(&matrix)
    }

    /// Clusters the attributes passed to the constructor, computing the dissimilarity matrix in
    /// parallel. Results are identical to [`AttributeClusterer::cluster`].
    #[cfg(feature = "parallel")]
    pub fn cluster_par(&self) -> Result<Vec<Vec<usize>>, GroupingError> {
        self.cluster_par_with(&self.params.distance_method)
    }

    /// Like [`AttributeClusterer::cluster_par`], with a custom dissimilarity in place of the
    /// configured distance method.
    #[cfg(feature = "parallel")]
    pub fn cluster_par_with<D>(&self, dist: &D) -> Result<Vec<Vec<usize>>, GroupingError>
    where
        D: Dissimilarity<T> + ?Sized,
    {
        DataValidator::new(self.scores, &self.params).validate_input_data()?;
        let matrix = pairwise_distances_par(self.scores, dist);
        self.cluster_matrix(&matrix)
    }

    fn cluster_matrix(
        &self,
        matrix: &CondensedMatrix<T>,
    ) -> Result<Vec<Vec<usize>>, GroupingError> {
        let linkages = compute_linkages(matrix);
        cut_tree(&linkages, self.n_observations, self.params.threshold)
    }
}

/// Cuts a clustering tree at `threshold` times its height and extracts the clusters below the
/// cut, largest first. Self merges in `linkages` are ignored.
///
/// # Errors
/// [`GroupingError::InvalidThreshold`] if `threshold` is not in the range 0 to 1,
/// [`GroupingError::InvalidLinkage`] if a linkage refers to an observation outside
/// `0..n_observations`, and [`GroupingError::InconsistentParents`] if the linkages chain
/// observations into a cycle.
///
/// # Examples
/// ```
///use domain_grouping::{cut_tree, Linkage};
///
///let linkages = vec![
///    Linkage::new(0, 1, 0.1),
///    Linkage::new(2, 3, 0.1),
///    Linkage::new(0, 2, 0.3),
///    Linkage::new(0, 4, 0.3),
///];
///assert_eq!(cut_tree(&linkages, 5, 0.5).unwrap(), vec![vec![0, 1], vec![2, 3]]);
/// // Merges at exactly the cutoff are not applied
///assert_eq!(cut_tree(&linkages, 5, 1.0).unwrap(), vec![vec![0, 1], vec![2, 3]]);
/// ```
pub fn cut_tree<T: Float>(
    linkages: &[Linkage<T>],
    n_observations: usize,
    threshold: f64,
) -> Result<Vec<Vec<usize>>, GroupingError> {
    validate_threshold(threshold)?;
    cut_tree_at(linkages, n_observations, tree_height(linkages), threshold)
}

/// Cuts at `threshold` times an already computed tree `height`. `None` means there is no
/// merge to cut. The threshold must have been validated.
pub(crate) fn cut_tree_at<T: Float>(
    linkages: &[Linkage<T>],
    n_observations: usize,
    height: Option<T>,
    threshold: f64,
) -> Result<Vec<Vec<usize>>, GroupingError> {
    let Some(height) = height else {
        debug!("No linkages between {n_observations} observations, nothing to cut");
        return Ok(Vec::new());
    };
    let relative = T::from(threshold).ok_or_else(|| {
        GroupingError::InvalidThreshold(format!("{threshold} cannot be represented"))
    })?;
    let cutoff = height * relative;
    debug!("Cutting tree at {:?} of height {:?}", cutoff.to_f64(), height.to_f64());

    let mut forest = ParentForest::from_linkages(linkages, n_observations, cutoff)?;
    extract_clusters(&mut forest)
}
