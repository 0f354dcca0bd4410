use crate::error::GroupingError;
use crate::tree_cut::ParentForest;
use std::collections::BTreeMap;

/// Groups observations by the root they resolve to, leaving out observations that were never
/// merged. Clusters are ordered by descending size, then by their smallest member; members
/// are in ascending order.
///
/// # Examples
/// ```
///use domain_grouping::{extract_clusters, Linkage, ParentForest};
///
///let linkages = vec![Linkage::new(3, 4, 0.1), Linkage::new(0, 1, 0.2), Linkage::new(0, 3, 0.2)];
///let mut forest = ParentForest::from_linkages(&linkages, 6, 0.5).unwrap();
///let clusters = extract_clusters(&mut forest).unwrap();
///assert_eq!(clusters, vec![vec![0, 1, 3, 4]]);
/// ```
pub fn extract_clusters(forest: &mut ParentForest) -> Result<Vec<Vec<usize>>, GroupingError> {
    let mut members: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for index in 0..forest.len() {
        if let Some(root) = forest.resolve(index)? {
            members.entry(root).or_default().push(index);
        }
    }

    let mut clusters: Vec<Vec<usize>> = members
        .into_values()
        .filter(|cluster| !cluster.is_empty())
        .collect();
    clusters.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a[0].cmp(&b[0])));
    Ok(clusters)
}
