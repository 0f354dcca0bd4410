use crate::data_wrappers::Linkage;
use crate::error::GroupingError;
use log::warn;
use num_traits::Float;

/// The height of the clustering tree: the largest merge dissimilarity. Non finite
/// dissimilarities count as zero so a single unreachable observation cannot stretch the tree,
/// and self merges are left out entirely. Returns `None` when there are no real merges.
///
/// # Examples
/// ```
///use domain_grouping::{tree_height, Linkage};
///
///let linkages = vec![
///    Linkage::new(0, 1, 0.1),
///    Linkage::new(0, 2, f64::INFINITY),
///    Linkage::new(0, 3, 0.4),
///    Linkage::new(3, 3, 9.0),
///];
///assert_eq!(Some(0.4), tree_height(&linkages));
/// ```
pub fn tree_height<T: Float>(linkages: &[Linkage<T>]) -> Option<T> {
    let merges = || linkages.iter().filter(|linkage| !linkage.is_self_merge());
    let n_non_finite = merges()
        .filter(|linkage| !linkage.dissimilarity.is_finite())
        .count();
    if n_non_finite > 0 {
        warn!("Ignoring {n_non_finite} non-finite linkage dissimilarities in tree height");
    }
    merges()
        .map(|linkage| {
            if linkage.dissimilarity.is_finite() {
                linkage.dissimilarity
            } else {
                T::zero()
            }
        })
        .reduce(T::max)
}

/// Parent pointers over observations, built from the linkages that fall below a cutoff.
/// `None` means an observation was never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentForest {
    parents: Vec<Option<usize>>,
}

impl ParentForest {
    /// Applies, in order, every linkage whose dissimilarity is below `cutoff`, pointing both
    /// merged observations at the smaller of the two. Self merges are skipped. Later linkages
    /// overwrite earlier pointers, so the final roots only emerge from [`ParentForest::resolve`].
    ///
    /// # Errors
    /// [`GroupingError::InvalidLinkage`] if any linkage refers to an observation outside
    /// `0..n_observations`, whether or not it falls below the cutoff.
    pub fn from_linkages<T: Float>(
        linkages: &[Linkage<T>],
        n_observations: usize,
        cutoff: T,
    ) -> Result<Self, GroupingError> {
        let mut parents = vec![None; n_observations];
        for (n, linkage) in linkages.iter().enumerate() {
            let largest = linkage.o1.max(linkage.o2);
            if largest >= n_observations {
                return Err(GroupingError::InvalidLinkage(format!(
                    "{n}th linkage merges observation {largest}, but there are only \
                     {n_observations} observations"
                )));
            }
            if linkage.is_self_merge() || linkage.dissimilarity >= cutoff {
                continue;
            }
            let parent = linkage.o1.min(linkage.o2);
            parents[linkage.o1] = Some(parent);
            parents[linkage.o2] = Some(parent);
        }
        Ok(ParentForest { parents })
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// The current, possibly uncompressed, parent of `index`. `None` for observations outside
    /// the forest.
    pub fn parent(&self, index: usize) -> Option<usize> {
        self.parents.get(index).copied().flatten()
    }

    /// Follows parent pointers from `index` to its root. Every observation passed on the way
    /// to a root is re-pointed directly at it, so later calls finish in one step. Returns
    /// `None` if the walk ends at an observation that was never merged, or if `index` is
    /// outside the forest.
    ///
    /// # Errors
    /// [`GroupingError::InconsistentParents`] if the pointers form a cycle.
    pub fn resolve(&mut self, index: usize) -> Result<Option<usize>, GroupingError> {
        let mut path = Vec::new();
        let mut current = index;
        let root = loop {
            match self.parent(current) {
                None => return Ok(None),
                Some(parent) if parent == current => break current,
                Some(parent) => {
                    if path.len() >= self.parents.len() {
                        return Err(GroupingError::InconsistentParents(format!(
                            "resolving observation {index} revisits observation {current}"
                        )));
                    }
                    path.push(current);
                    current = parent;
                }
            }
        };
        for node in path {
            self.parents[node] = Some(root);
        }
        Ok(Some(root))
    }
}
