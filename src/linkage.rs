//! Single-linkage agglomerative clustering.
//!
//! Single-linkage merges are exactly the edges of a minimum spanning tree of the complete
//! dissimilarity graph, taken in ascending order. The tree is found with Prim's algorithm in
//! `O(n²)`, then its edges are sorted and replayed through a union find to report each merge.
//!
//! Ties are broken deterministically: Prim's step picks the lowest indexed observation among
//! equally near candidates, and tree edges of equal dissimilarity are merged in ascending
//! order of their (smaller endpoint, larger endpoint) pair.

use crate::condensed::DissimilarityMeasure;
use crate::data_wrappers::{Linkage, MSTEdge};
use crate::union_find::UnionFind;
use num_traits::Float;
use std::cmp::Ordering;

/// Receives the merges of an agglomerative clustering in the order they happen.
pub trait LinkageBuilder<T> {
    fn merge(&mut self, o1: usize, o2: usize, dissimilarity: T);
}

impl<T> LinkageBuilder<T> for Vec<Linkage<T>> {
    fn merge(&mut self, o1: usize, o2: usize, dissimilarity: T) {
        self.push(Linkage::new(o1, o2, dissimilarity));
    }
}

/// Runs single-linkage clustering over all observations of `measure`, reporting the `n - 1`
/// merges to `builder` in ascending order of dissimilarity.
///
/// Each merge reports the smallest observation index of either cluster. Pairs whose
/// dissimilarity is NaN or infinite never win a comparison, so observations only reachable
/// through such pairs are merged last with a dissimilarity of `+inf`.
///
/// # Examples
/// ```
///use domain_grouping::{single_linkage, CondensedMatrix, Linkage};
///
/// // (0,1) = 1.0, (0,2) = 4.0, (1,2) = 2.0
///let matrix = CondensedMatrix::from_condensed(3, vec![1.0, 4.0, 2.0]).unwrap();
///let mut linkages: Vec<Linkage<f64>> = Vec::new();
///single_linkage(&matrix, &mut linkages);
///assert_eq!(linkages, vec![Linkage::new(0, 1, 1.0), Linkage::new(0, 2, 2.0)]);
/// ```
pub fn single_linkage<T, M, B>(measure: &M, builder: &mut B)
where
    T: Float,
    M: DissimilarityMeasure<T>,
    B: LinkageBuilder<T>,
{
    let n_samples = measure.n_observations();
    if n_samples < 2 {
        return;
    }
    let min_spanning_tree = prims_min_spanning_tree(measure);
    let mut union_find = UnionFind::new(n_samples);

    for mst_edge in min_spanning_tree.iter() {
        let left_child = union_find.find(mst_edge.left_node_id);
        let right_child = union_find.find(mst_edge.right_node_id);
        builder.merge(
            union_find.representative_of(left_child),
            union_find.representative_of(right_child),
            mst_edge.distance,
        );
        union_find.union(left_child, right_child);
    }
}

/// Convenience wrapper around [`single_linkage`] that collects the merges.
pub fn compute_linkages<T, M>(measure: &M) -> Vec<Linkage<T>>
where
    T: Float,
    M: DissimilarityMeasure<T>,
{
    let mut linkages = Vec::with_capacity(measure.n_observations().saturating_sub(1));
    single_linkage(measure, &mut linkages);
    linkages
}

fn prims_min_spanning_tree<T, M>(measure: &M) -> Vec<MSTEdge<T>>
where
    T: Float,
    M: DissimilarityMeasure<T>,
{
    let n_samples = measure.n_observations();
    let mut in_tree = vec![false; n_samples];
    let mut distances = vec![T::infinity(); n_samples];
    let mut parents = vec![0; n_samples];
    let mut mst = Vec::with_capacity(n_samples - 1);

    let mut left_node_id = 0;
    for _ in 1..n_samples {
        in_tree[left_node_id] = true;
        let mut nearest: Option<usize> = None;

        for i in 0..n_samples {
            if in_tree[i] {
                continue;
            }
            let dist = measure.dissimilarity(left_node_id, i);
            if dist < distances[i] {
                distances[i] = dist;
                parents[i] = left_node_id;
            }
            nearest = match nearest {
                Some(current) if distances[current] <= distances[i] => Some(current),
                Some(_) if distances[i] < T::infinity() => Some(i),
                // Everything left is unreachable; keep the lowest index
                Some(current) => Some(current),
                None => Some(i),
            };
        }

        let Some(right_node_id) = nearest else {
            break;
        };
        mst.push(MSTEdge {
            left_node_id: parents[right_node_id],
            right_node_id,
            distance: distances[right_node_id],
        });
        left_node_id = right_node_id;
    }
    sort_mst_by_dist(&mut mst);
    mst
}

fn sort_mst_by_dist<T: Float>(min_spanning_tree: &mut [MSTEdge<T>]) {
    let endpoints = |edge: &MSTEdge<T>| {
        let (a, b) = (edge.left_node_id, edge.right_node_id);
        (a.min(b), a.max(b))
    };
    min_spanning_tree.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| endpoints(a).cmp(&endpoints(b)))
    });
}
