use num_traits::Float;

/// Per node, per attribute annotation values that neighborhood scores are computed from.
pub trait AnnotationProvider<T> {
    fn node_count(&self) -> usize;

    fn attribute_count(&self) -> usize;

    /// The value of `attribute` at `node`. NaN means the node is not annotated.
    fn value(&self, node: usize, attribute: usize) -> T;

    /// Visits every annotated node of `attribute` in node order, skipping NaN cells.
    fn for_each_attribute_value<F>(&self, attribute: usize, consumer: F)
    where
        F: FnMut(usize, T);
}

/// Annotations held as a dense node by attribute matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseAnnotations<T> {
    values: Vec<Vec<T>>,
    n_attributes: usize,
    is_binary: bool,
}

impl<T: Float> DenseAnnotations<T> {
    /// Creates a provider where no node is annotated yet.
    pub fn new(n_nodes: usize, n_attributes: usize) -> Self {
        DenseAnnotations {
            values: vec![vec![T::nan(); n_attributes]; n_nodes],
            n_attributes,
            is_binary: true,
        }
    }

    /// Sets the value of `attribute` at `node`. Any value other than 0 or 1 marks the
    /// annotations as non binary.
    ///
    /// # Panics
    /// If `node` or `attribute` is out of range.
    pub fn set_value(&mut self, node: usize, attribute: usize, value: T) {
        self.values[node][attribute] = value;
        self.track_binary(value);
    }

    /// Records a value read for a node that is not part of the network. Nothing is stored, but
    /// the value still counts towards [`DenseAnnotations::is_binary`].
    pub fn set_unmapped_value(&mut self, value: T) {
        self.track_binary(value);
    }

    fn track_binary(&mut self, value: T) {
        if !value.is_zero() && value != T::one() {
            self.is_binary = false;
        }
    }

    /// Whether every value set so far was 0 or 1.
    pub fn is_binary(&self) -> bool {
        self.is_binary
    }
}

impl<T: Float> AnnotationProvider<T> for DenseAnnotations<T> {
    fn node_count(&self) -> usize {
        self.values.len()
    }

    fn attribute_count(&self) -> usize {
        self.n_attributes
    }

    fn value(&self, node: usize, attribute: usize) -> T {
        self.values[node][attribute]
    }

    fn for_each_attribute_value<F>(&self, attribute: usize, mut consumer: F)
    where
        F: FnMut(usize, T),
    {
        self.values
            .iter()
            .enumerate()
            .map(|(node, row)| (node, row[attribute]))
            .filter(|(_node, value)| !value.is_nan())
            .for_each(|(node, value)| consumer(node, value));
    }
}
