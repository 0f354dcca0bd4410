use crate::distance::DistanceMethod;

// Defaults for parameters
const THRESHOLD_DEFAULT: f64 = 0.75;
const DISTANCE_METHOD_DEFAULT: DistanceMethod = DistanceMethod::Jaccard;

/// The parameters of a clustering run. Only use if you want to change the defaults, otherwise
/// use `AttributeClusterer::default_params()` or `ClusterGrouping::default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterParams {
    pub(crate) threshold: f64,
    pub(crate) distance_method: DistanceMethod,
}

/// Builder object to set custom parameters.
pub struct ParamBuilder {
    threshold: Option<f64>,
    distance_method: Option<DistanceMethod>,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ClusterParams {
    /// Enters the builder pattern, allowing custom parameters to be set using various setter
    /// methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> ParamBuilder {
        ParamBuilder {
            threshold: None,
            distance_method: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn distance_method(&self) -> DistanceMethod {
        self.distance_method
    }
}

impl ParamBuilder {
    /// Sets the threshold at which the clustering tree is cut, as a fraction of the tree
    /// height. Merges with a dissimilarity at or above `threshold * height` are ignored. Higher
    /// values give fewer, larger domains. Must lie in the range 0 to 1, which is checked when
    /// clustering starts. Defaults to 0.75.
    ///
    /// # Parameters
    /// * threshold - the relative cut height
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn threshold(mut self, threshold: f64) -> ParamBuilder {
        self.threshold = Some(threshold);
        self
    }

    /// Sets the distance method used to compare the score vectors of two attributes.
    /// Defaults to Jaccard. Options are defined by the DistanceMethod enum.
    ///
    /// # Parameters
    /// * distance_method - the distance method
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn distance_method(mut self, distance_method: DistanceMethod) -> ParamBuilder {
        self.distance_method = Some(distance_method);
        self
    }

    /// Finishes the building of the parameter configuration.
    ///
    /// # Returns
    /// * The completed clustering parameters.
    pub fn build(self) -> ClusterParams {
        ClusterParams {
            threshold: self.threshold.unwrap_or(THRESHOLD_DEFAULT),
            distance_method: self.distance_method.unwrap_or(DISTANCE_METHOD_DEFAULT),
        }
    }
}
