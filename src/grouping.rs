use crate::clusterer::cut_tree_at;
use crate::landscape::{AttributeFilter, DomainConsumer, EnrichmentLandscape, ProgressSink};
use crate::linkage::compute_linkages;
#[cfg(feature = "parallel")]
use crate::matrices::parallel::{build_score_matrix_par, pairwise_distances_par};
#[cfg(feature = "serial")]
use crate::matrices::serial::{build_score_matrix, pairwise_distances};
use crate::tree_cut::tree_height;
use crate::validation::validate_threshold;
use crate::{ClusterParams, GroupingError};
use log::{debug, info};
use num_traits::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Execution {
    #[cfg(feature = "serial")]
    Serial,
    #[cfg(feature = "parallel")]
    Parallel,
}

/// Groups the top attributes of an enrichment landscape into domains by clustering their
/// neighborhood scores.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterGrouping {
    params: ClusterParams,
}

impl ClusterGrouping {
    pub const ID: &'static str = "cluster";

    pub fn new(params: ClusterParams) -> Self {
        ClusterGrouping { params }
    }

    pub fn id(&self) -> &'static str {
        Self::ID
    }

    pub fn params(&self) -> &ClusterParams {
        &self.params
    }

    /// Groups the attributes of `landscape` that pass `filter` for `type_index`, emitting one
    /// domain per cluster to `consumer`, largest first. Attributes that do not merge with any
    /// other attribute are not emitted. Status updates go to `progress` and to the log.
    ///
    /// # Errors
    /// [`GroupingError::InvalidThreshold`] if the configured threshold is not in the range 0
    /// to 1 and [`GroupingError::EmptyDataset`] if no attribute passes the filter. Nothing is
    /// emitted when an error is returned.
    ///
    /// # Examples
    /// ```
    ///use domain_grouping::{ClusterGrouping, ClusterParams, EnrichmentLandscape, NoProgress};
    ///
    ///struct Landscape {
    ///    neighborhoods: Vec<Vec<f64>>,
    ///}
    ///
    ///impl EnrichmentLandscape<f64> for Landscape {
    ///    type Neighborhood = Vec<f64>;
    ///
    ///    fn attribute_count(&self) -> usize {
    ///        4
    ///    }
    ///
    ///    fn neighborhoods(&self) -> &[Vec<f64>] {
    ///        &self.neighborhoods
    ///    }
    ///
    ///    fn score(&self, neighborhood: &Vec<f64>, attribute: usize, _type_index: usize) -> f64 {
    ///        neighborhood[attribute]
    ///    }
    ///}
    ///
    /// // Attributes 0 and 2 are enriched in the same neighborhoods, as are 1 and 3
    ///let landscape = Landscape {
    ///    neighborhoods: vec![
    ///        vec![1.0, 0.0, 1.0, 0.0],
    ///        vec![1.0, 0.0, 1.0, 0.0],
    ///        vec![0.0, 1.0, 0.0, 1.0],
    ///        vec![0.0, 1.0, 1.0, 1.0],
    ///    ],
    ///};
    ///let grouping = ClusterGrouping::new(ClusterParams::builder().threshold(0.9).build());
    ///let mut domains: Vec<Vec<usize>> = Vec::new();
    ///let filter = |_attribute: usize, _type_index: usize| true;
    ///grouping.group(&landscape, &filter, 0, &mut domains, &mut NoProgress).unwrap();
    ///assert_eq!(domains, vec![vec![0, 2], vec![1, 3]]);
    /// ```
    #[cfg(feature = "serial")]
    pub fn group<T, L, F, C, P>(
        &self,
        landscape: &L,
        filter: &F,
        type_index: usize,
        consumer: &mut C,
        progress: &mut P,
    ) -> Result<(), GroupingError>
    where
        T: Float + Send + Sync,
        L: EnrichmentLandscape<T>,
        F: AttributeFilter + ?Sized,
        C: DomainConsumer + ?Sized,
        P: ProgressSink + ?Sized,
    {
        self.run(
            landscape,
            filter,
            type_index,
            consumer,
            progress,
            Execution::Serial,
        )
    }

    /// Like [`ClusterGrouping::group`], populating the score matrix and the dissimilarity
    /// matrix in parallel. Emits exactly the same domains.
    #[cfg(feature = "parallel")]
    pub fn group_par<T, L, F, C, P>(
        &self,
        landscape: &L,
        filter: &F,
        type_index: usize,
        consumer: &mut C,
        progress: &mut P,
    ) -> Result<(), GroupingError>
    where
        T: Float + Send + Sync,
        L: EnrichmentLandscape<T>,
        F: AttributeFilter + ?Sized,
        C: DomainConsumer + ?Sized,
        P: ProgressSink + ?Sized,
    {
        self.run(
            landscape,
            filter,
            type_index,
            consumer,
            progress,
            Execution::Parallel,
        )
    }

    fn run<T, L, F, C, P>(
        &self,
        landscape: &L,
        filter: &F,
        type_index: usize,
        consumer: &mut C,
        progress: &mut P,
        execution: Execution,
    ) -> Result<(), GroupingError>
    where
        T: Float + Send + Sync,
        L: EnrichmentLandscape<T>,
        F: AttributeFilter + ?Sized,
        C: DomainConsumer + ?Sized,
        P: ProgressSink + ?Sized,
    {
        validate_threshold(self.params.threshold)?;

        let total_attributes = landscape.attribute_count();
        let filtered_indexes: Vec<usize> = (0..total_attributes)
            .filter(|&attribute| filter.is_top(attribute, type_index))
            .collect();
        let total_filtered = filtered_indexes.len();
        report(progress, &format!("Top attributes: {total_filtered}"));
        if filtered_indexes.is_empty() {
            return Err(GroupingError::EmptyDataset);
        }

        report(progress, "Computing attribute distances...");
        let scoring = |neighborhood: &L::Neighborhood, attribute: usize| {
            landscape.score(neighborhood, attribute, type_index)
        };
        let neighborhoods = landscape.neighborhoods();
        let scores = match execution {
            #[cfg(feature = "serial")]
            Execution::Serial => build_score_matrix(neighborhoods, &filtered_indexes, &scoring),
            #[cfg(feature = "parallel")]
            Execution::Parallel => {
                build_score_matrix_par(neighborhoods, &filtered_indexes, &scoring)
            }
        };
        debug!(
            "Scored {total_filtered} attributes over {} neighborhoods",
            neighborhoods.len()
        );

        report(progress, "Computing dissimilarity matrix...");
        let dist = &self.params.distance_method;
        let matrix = match execution {
            #[cfg(feature = "serial")]
            Execution::Serial => pairwise_distances(&scores, dist),
            #[cfg(feature = "parallel")]
            Execution::Parallel => pairwise_distances_par(&scores, dist),
        };

        report(progress, "Computing cluster linkages...");
        let linkages = compute_linkages(&matrix);
        let height = tree_height(&linkages);
        report(
            progress,
            &format!(
                "Cluster tree height: {:.6}",
                height.unwrap_or_else(T::zero).to_f64().unwrap_or(f64::NAN)
            ),
        );
        report(progress, &format!("Total linkages: {}", linkages.len()));

        let clusters = cut_tree_at(&linkages, total_filtered, height, self.params.threshold)?;

        report(progress, "Assigning clusters...");
        for cluster in clusters {
            if cluster.is_empty() {
                continue;
            }
            consumer.start_domain(type_index);
            for observation in cluster {
                consumer.attribute(filtered_indexes[observation]);
            }
            consumer.end_domain();
        }
        Ok(())
    }
}

fn report<P: ProgressSink + ?Sized>(progress: &mut P, status: &str) {
    info!("{status}");
    progress.set_status(status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoProgress;

    struct Columns {
        neighborhoods: Vec<Vec<f64>>,
        n_attributes: usize,
    }

    impl EnrichmentLandscape<f64> for Columns {
        type Neighborhood = Vec<f64>;

        fn attribute_count(&self) -> usize {
            self.n_attributes
        }

        fn neighborhoods(&self) -> &[Vec<f64>] {
            &self.neighborhoods
        }

        fn score(&self, neighborhood: &Vec<f64>, attribute: usize, _type_index: usize) -> f64 {
            neighborhood[attribute]
        }
    }

    fn landscape() -> Columns {
        Columns {
            neighborhoods: vec![
                vec![1.0, 0.0, 1.0, 0.0, 1.0],
                vec![1.0, 0.0, 1.0, 0.0, 1.0],
                vec![0.0, 1.0, 0.0, 1.0, 0.0],
                vec![0.0, 1.0, 1.0, 1.0, 0.0],
            ],
            n_attributes: 5,
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl DomainConsumer for Recorder {
        fn start_domain(&mut self, type_index: usize) {
            self.events.push(format!("start {type_index}"));
        }

        fn attribute(&mut self, attribute_index: usize) {
            self.events.push(format!("attribute {attribute_index}"));
        }

        fn end_domain(&mut self) {
            self.events.push(String::from("end"));
        }
    }

    #[cfg(feature = "serial")]
    #[test]
    fn emits_domains_in_protocol_order() {
        // Only attributes 1, 3 and 4 are top; 1 and 3 are identical
        let filter = |attribute: usize, _type_index: usize| attribute != 0 && attribute != 2;
        let grouping = ClusterGrouping::new(ClusterParams::builder().threshold(0.5).build());
        let mut recorder = Recorder::default();
        grouping
            .group(&landscape(), &filter, 7, &mut recorder, &mut NoProgress)
            .unwrap();
        assert_eq!(
            vec!["start 7", "attribute 1", "attribute 3", "end"],
            recorder.events
        );
    }

    #[cfg(feature = "serial")]
    #[test]
    fn reports_progress() {
        let filter = |_attribute: usize, _type_index: usize| true;
        let grouping = ClusterGrouping::default();
        let mut statuses: Vec<String> = Vec::new();
        let mut domains: Vec<Vec<usize>> = Vec::new();
        let mut sink = |status: &str| statuses.push(status.to_string());
        grouping
            .group(&landscape(), &filter, 0, &mut domains, &mut sink)
            .unwrap();
        assert_eq!(
            vec![
                "Top attributes: 5",
                "Computing attribute distances...",
                "Computing dissimilarity matrix...",
                "Computing cluster linkages...",
                "Cluster tree height: 0.750000",
                "Total linkages: 4",
                "Assigning clusters...",
            ],
            statuses
        );
    }

    #[cfg(feature = "serial")]
    #[test]
    fn no_top_attributes() {
        let filter = |_attribute: usize, _type_index: usize| false;
        let mut domains: Vec<Vec<usize>> = Vec::new();
        let result = ClusterGrouping::default().group(
            &landscape(),
            &filter,
            0,
            &mut domains,
            &mut NoProgress,
        );
        assert!(matches!(result, Err(GroupingError::EmptyDataset)));
        assert!(domains.is_empty());
    }

    #[cfg(feature = "serial")]
    #[test]
    fn single_top_attribute() {
        let filter = |attribute: usize, _type_index: usize| attribute == 2;
        let mut domains: Vec<Vec<usize>> = Vec::new();
        ClusterGrouping::default()
            .group(&landscape(), &filter, 0, &mut domains, &mut NoProgress)
            .unwrap();
        assert!(domains.is_empty());
    }

    #[cfg(feature = "serial")]
    #[test]
    fn invalid_threshold_emits_nothing() {
        let filter = |_attribute: usize, _type_index: usize| true;
        let grouping = ClusterGrouping::new(ClusterParams::builder().threshold(-1.0).build());
        let mut statuses: Vec<String> = Vec::new();
        let mut domains: Vec<Vec<usize>> = Vec::new();
        let mut sink = |status: &str| statuses.push(status.to_string());
        let result = grouping.group(&landscape(), &filter, 0, &mut domains, &mut sink);
        assert!(matches!(result, Err(GroupingError::InvalidThreshold(..))));
        assert!(statuses.is_empty());
        assert!(domains.is_empty());
    }

    #[cfg(all(feature = "serial", feature = "parallel"))]
    #[test]
    fn parallel_matches_serial() {
        let filter = |_attribute: usize, _type_index: usize| true;
        let grouping = ClusterGrouping::default();
        let mut serial: Vec<Vec<usize>> = Vec::new();
        let mut parallel: Vec<Vec<usize>> = Vec::new();
        grouping
            .group(&landscape(), &filter, 0, &mut serial, &mut NoProgress)
            .unwrap();
        grouping
            .group_par(&landscape(), &filter, 0, &mut parallel, &mut NoProgress)
            .unwrap();
        assert_eq!(serial, parallel);
    }
}
