#[derive(Clone, Debug)]
pub(crate) struct MSTEdge<T> {
    pub(crate) left_node_id: usize,
    pub(crate) right_node_id: usize,
    pub(crate) distance: T,
}

/// A single merge event of the agglomerative clustering. The two observations are the
/// representatives (smallest member index) of the clusters that were merged.
#[derive(Clone, Debug, PartialEq)]
pub struct Linkage<T> {
    pub o1: usize,
    pub o2: usize,
    pub dissimilarity: T,
}

impl<T> Linkage<T> {
    pub fn new(o1: usize, o2: usize, dissimilarity: T) -> Self {
        Linkage {
            o1,
            o2,
            dissimilarity,
        }
    }

    /// Whether both sides of the merge are the same observation. Such linkages carry no
    /// information and are skipped when cutting the tree.
    pub fn is_self_merge(&self) -> bool {
        self.o1 == self.o2
    }
}
