//! Groups scored attributes into domains by clustering their enrichment profiles. Generic over
//! floating point numeric types.
//!
//! Every attribute is described by a vector of scores, one per neighborhood of a network (for
//! example, how enriched a functional annotation is around each node). Attributes whose score
//! vectors are close are considered to describe the same region of the network and are merged
//! into a single domain. The clustering runs in five steps:
//!  1. The score matrix is built for the attributes that pass the filter, one row per
//!     attribute;
//!  2. The dissimilarity between every pair of rows is computed with a configurable distance
//!     method and stored as a condensed (upper triangular) matrix;
//!  3. Single-linkage agglomerative clustering produces the ordered sequence of merges;
//!  4. The tree is cut at a threshold relative to its height, keeping only merges strictly
//!     below the cut; and
//!  5. Attributes are grouped by the root they resolve to. Groups are ordered by descending
//!     size, and attributes that never merged are left out.
//!
//! Steps 1 and 2 are run in parallel with rayon by the `_par` methods when the `parallel`
//! feature is enabled. Results are identical to the serial methods.
//!
//! # Examples
//! ```
//!use domain_grouping::{AttributeClusterer, ClusterParams, DistanceMethod};
//!
//!let scores: Vec<Vec<f64>> = vec![
//!    vec![0.9, 0.8, 0.1, 0.0],
//!    vec![0.1, 0.0, 0.9, 0.9],
//!    vec![1.0, 0.9, 0.0, 0.1],
//!    vec![0.0, 0.2, 1.0, 0.8],
//!    vec![5.0, 5.0, 5.0, 5.0],
//!];
//!let params = ClusterParams::builder()
//!    .threshold(0.1)
//!    .distance_method(DistanceMethod::Euclidean)
//!    .build();
//!let clusterer = AttributeClusterer::new(&scores, params);
//!let clusters = clusterer.cluster().unwrap();
//!assert_eq!(clusters, vec![vec![0, 2], vec![1, 3]]);
//! ```

pub use crate::annotation::{AnnotationProvider, DenseAnnotations};
pub use crate::clusterer::{cut_tree, AttributeClusterer};
pub use crate::condensed::{condensed_index, condensed_len, CondensedMatrix, DissimilarityMeasure};
pub use crate::data_wrappers::Linkage;
pub use crate::distance::{DistanceMethod, Dissimilarity};
pub use crate::error::GroupingError;
pub use crate::extraction::extract_clusters;
pub use crate::grouping::ClusterGrouping;
pub use crate::hyper_parameters::{ClusterParams, ParamBuilder};
pub use crate::landscape::{
    AttributeFilter, DomainConsumer, EnrichmentLandscape, NoProgress, ProgressSink,
    ScoringFunction,
};
pub use crate::linkage::{compute_linkages, single_linkage, LinkageBuilder};
#[cfg(feature = "parallel")]
pub use crate::matrices::parallel::{build_score_matrix_par, pairwise_distances_par};
#[cfg(feature = "serial")]
pub use crate::matrices::serial::{build_score_matrix, pairwise_distances};
pub use crate::tree_cut::{tree_height, ParentForest};

mod annotation;
mod clusterer;
mod condensed;
mod data_wrappers;
mod distance;
mod error;
mod extraction;
mod grouping;
mod hyper_parameters;
mod landscape;
mod linkage;
mod matrices;
mod tree_cut;
mod union_find;
mod validation;
