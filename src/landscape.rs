//! The collaborators a grouping run consumes and the consumer it emits domains to.

/// Selects the attributes eligible for clustering.
pub trait AttributeFilter {
    /// Whether `attribute` is one of the top attributes for the given type index.
    fn is_top(&self, attribute: usize, type_index: usize) -> bool;
}

impl<F> AttributeFilter for F
where
    F: Fn(usize, usize) -> bool,
{
    fn is_top(&self, attribute: usize, type_index: usize) -> bool {
        self(attribute, type_index)
    }
}

/// A pure mapping from a neighborhood and an attribute to an enrichment score. Called
/// concurrently for different attributes.
pub trait ScoringFunction<N, T>: Sync {
    fn score(&self, neighborhood: &N, attribute: usize) -> T;
}

impl<N, T, F> ScoringFunction<N, T> for F
where
    F: Fn(&N, usize) -> T + Sync,
{
    fn score(&self, neighborhood: &N, attribute: usize) -> T {
        self(neighborhood, attribute)
    }
}

/// The enrichment results the attributes are scored against: an ordered collection of
/// neighborhoods and a scoring function per type index.
pub trait EnrichmentLandscape<T>: Sync {
    type Neighborhood: Sync;

    /// Total number of attributes, before any filtering.
    fn attribute_count(&self) -> usize;

    fn neighborhoods(&self) -> &[Self::Neighborhood];

    /// The score of `attribute` in `neighborhood` under the scoring function selected by
    /// `type_index`.
    fn score(&self, neighborhood: &Self::Neighborhood, attribute: usize, type_index: usize) -> T;
}

/// Receives the grouped domains. For every domain `start_domain` is called once, followed by
/// one `attribute` call per member and a final `end_domain`.
pub trait DomainConsumer {
    fn start_domain(&mut self, type_index: usize);

    fn attribute(&mut self, attribute_index: usize);

    fn end_domain(&mut self);
}

/// Collects each domain as the list of its attribute indexes.
impl DomainConsumer for Vec<Vec<usize>> {
    fn start_domain(&mut self, _type_index: usize) {
        self.push(Vec::new());
    }

    fn attribute(&mut self, attribute_index: usize) {
        if let Some(domain) = self.last_mut() {
            domain.push(attribute_index);
        }
    }

    fn end_domain(&mut self) {}
}

/// Human readable status updates. Purely observational.
pub trait ProgressSink {
    fn set_status(&mut self, status: &str);
}

/// Discards all status updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn set_status(&mut self, _status: &str) {}
}

impl<F> ProgressSink for F
where
    F: FnMut(&str),
{
    fn set_status(&mut self, status: &str) {
        self(status)
    }
}
