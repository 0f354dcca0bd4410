use domain_grouping::{AttributeClusterer, ClusterParams, DistanceMethod, GroupingError};
use std::collections::HashSet;

pub fn test_cluster<F>(cluster_fn: F)
where
    F: Fn(&AttributeClusterer<f64>) -> Result<Vec<Vec<usize>>, GroupingError>,
{
    let scores = cluster_test_data();
    let clusterer = AttributeClusterer::default_params(&scores);
    let result = cluster_fn(&clusterer).unwrap();
    // The first three attributes share their neighborhoods, as do the next two. The last one
    // straddles both groups and is left out.
    assert_eq!(vec![vec![0, 1, 2], vec![3, 4]], result);
}

pub fn test_builder_cluster<F>(cluster_fn: F)
where
    F: Fn(&AttributeClusterer<f64>) -> Result<Vec<Vec<usize>>, GroupingError>,
{
    let scores = vec![
        vec![0.0, 0.0],
        vec![0.1, 0.0],
        vec![0.0, 0.2],
        vec![3.0, 3.0],
        vec![3.1, 3.0],
        vec![10.0, 10.0],
    ];
    let params = ClusterParams::builder()
        .threshold(0.3)
        .distance_method(DistanceMethod::Euclidean)
        .build();
    let clusterer = AttributeClusterer::new(&scores, params);
    let result = cluster_fn(&clusterer).unwrap();
    assert_eq!(vec![vec![0, 1, 2], vec![3, 4]], result);

    // Raising the threshold above the gap between the two groups joins them
    let params = ClusterParams::builder()
        .threshold(0.5)
        .distance_method(DistanceMethod::Euclidean)
        .build();
    let clusterer = AttributeClusterer::new(&scores, params);
    let result = cluster_fn(&clusterer).unwrap();
    assert_eq!(vec![vec![0, 1, 2, 3, 4]], result);
}

pub fn test_empty_data<F>(cluster_fn: F)
where
    F: Fn(&AttributeClusterer<f64>) -> Result<Vec<Vec<usize>>, GroupingError>,
{
    let scores: Vec<Vec<f64>> = Vec::new();
    let clusterer = AttributeClusterer::default_params(&scores);
    let result = cluster_fn(&clusterer);
    assert!(matches!(result, Err(GroupingError::EmptyDataset)));
}

pub fn test_mismatched_dimensions<F>(cluster_fn: F)
where
    F: Fn(&AttributeClusterer<f64>) -> Result<Vec<Vec<usize>>, GroupingError>,
{
    let scores = vec![vec![1.0, 0.0, 1.0], vec![1.0, 1.0, 0.0], vec![0.0, 1.0]];
    let clusterer = AttributeClusterer::default_params(&scores);
    let result = cluster_fn(&clusterer);
    assert!(matches!(result, Err(GroupingError::WrongDimension(..))));
}

pub fn test_invalid_threshold<F>(cluster_fn: F)
where
    F: Fn(&AttributeClusterer<f64>) -> Result<Vec<Vec<usize>>, GroupingError>,
{
    let scores = cluster_test_data();
    for threshold in [-0.01, 1.01, f64::NAN] {
        let params = ClusterParams::builder().threshold(threshold).build();
        let clusterer = AttributeClusterer::new(&scores, params);
        let result = cluster_fn(&clusterer);
        assert!(matches!(result, Err(GroupingError::InvalidThreshold(..))));
    }
}

pub fn test_single_attribute<F>(cluster_fn: F)
where
    F: Fn(&AttributeClusterer<f64>) -> Result<Vec<Vec<usize>>, GroupingError>,
{
    let scores = vec![vec![1.0, 0.0, 1.0]];
    let clusterer = AttributeClusterer::default_params(&scores);
    let result = cluster_fn(&clusterer).unwrap();
    assert!(result.is_empty());
}

pub fn test_threshold_coarsens_clusters<F>(cluster_fn: F)
where
    F: Fn(&AttributeClusterer<f64>) -> Result<Vec<Vec<usize>>, GroupingError>,
{
    let scores: Vec<Vec<f64>> = [0.0, 0.1, 0.35, 1.0, 1.2, 2.5, 2.6, 4.0]
        .iter()
        .map(|&x| vec![x])
        .collect();
    let n = scores.len();

    let mut previous: Option<Vec<Vec<usize>>> = None;
    for step in 0..=10 {
        let params = ClusterParams::builder()
            .threshold(step as f64 / 10.0)
            .distance_method(DistanceMethod::Euclidean)
            .build();
        let clusterer = AttributeClusterer::new(&scores, params);
        let clusters = cluster_fn(&clusterer).unwrap();

        if let Some(previous) = previous {
            // Unmerged attributes count as groups of their own
            let groups = |clusters: &[Vec<usize>]| {
                clusters.len() + n - clusters.iter().map(Vec::len).sum::<usize>()
            };
            assert!(groups(&clusters) <= groups(&previous));
            for cluster in &previous {
                assert!(clusters
                    .iter()
                    .any(|larger| cluster.iter().all(|member| larger.contains(member))));
            }
        }
        previous = Some(clusters);
    }
}

pub fn test_cluster_ordering<F>(cluster_fn: F)
where
    F: Fn(&AttributeClusterer<f64>) -> Result<Vec<Vec<usize>>, GroupingError>,
{
    let scores: Vec<Vec<f64>> = [5.0, 5.1, 0.0, 0.1, 0.2, 9.0, 9.05, 9.1, 9.15, 20.0]
        .iter()
        .map(|&x| vec![x])
        .collect();
    let params = ClusterParams::builder()
        .threshold(0.2)
        .distance_method(DistanceMethod::Manhattan)
        .build();
    let clusterer = AttributeClusterer::new(&scores, params);
    let clusters = cluster_fn(&clusterer).unwrap();
    assert_eq!(vec![vec![5, 6, 7, 8], vec![2, 3, 4], vec![0, 1]], clusters);

    let mut seen = HashSet::new();
    for window in clusters.windows(2) {
        assert!(window[0].len() >= window[1].len());
    }
    for cluster in &clusters {
        assert!(cluster.len() >= 2);
        assert!(cluster.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(cluster.iter().all(|member| seen.insert(*member)));
    }
}

pub fn test_non_finite_scores<F>(cluster_fn: F)
where
    F: Fn(&AttributeClusterer<f64>) -> Result<Vec<Vec<usize>>, GroupingError>,
{
    let scores = vec![
        vec![0.0],
        vec![0.1],
        vec![f64::NAN],
        vec![5.0],
        vec![5.1],
    ];
    let params = ClusterParams::builder()
        .threshold(0.5)
        .distance_method(DistanceMethod::Euclidean)
        .build();
    let clusterer = AttributeClusterer::new(&scores, params);
    let clusters = cluster_fn(&clusterer).unwrap();
    // The attribute without a comparable score never merges below the cut
    assert_eq!(vec![vec![0, 1], vec![3, 4]], clusters);
}

pub fn test_identical_attributes<F>(cluster_fn: F)
where
    F: Fn(&AttributeClusterer<f64>) -> Result<Vec<Vec<usize>>, GroupingError>,
{
    let scores = vec![vec![1.0, 0.0, 1.0, 1.0]; 4];
    let params = ClusterParams::builder().threshold(1.0).build();
    let clusterer = AttributeClusterer::new(&scores, params);
    // A tree of height zero has nothing strictly below its cut
    assert!(cluster_fn(&clusterer).unwrap().is_empty());
}

fn cluster_test_data() -> Vec<Vec<f64>> {
    vec![
        vec![0.9, 0.4, 0.7, 0.0, 0.0, 0.0],
        vec![0.2, 0.3, 0.1, 0.0, 0.0, 0.0],
        vec![1.0, 0.6, 0.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 0.8, 0.5, 0.3],
        vec![0.0, 0.0, 0.0, 0.4, 0.9, 0.0],
        vec![0.0, 0.0, 0.2, 0.7, 0.0, 0.0],
    ]
}
