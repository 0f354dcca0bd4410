use crate::{ClusterParams, GroupingError};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DataValidator<'a, T> {
    scores: &'a [Vec<T>],
    params: &'a ClusterParams,
}

impl<'a, T> DataValidator<'a, T> {
    pub(crate) fn new(scores: &'a [Vec<T>], params: &'a ClusterParams) -> Self {
        Self { scores, params }
    }

    /// Checks everything that can be checked before any computation starts. Non-finite scores
    /// are allowed through; the distance method decides what they mean.
    pub(crate) fn validate_input_data(&self) -> Result<(), GroupingError> {
        validate_threshold(self.params.threshold)?;
        if self.scores.is_empty() {
            return Err(GroupingError::EmptyDataset);
        }
        let dims_0th = self.scores[0].len();
        for (n, row) in self.scores.iter().enumerate() {
            let dims_nth = row.len();
            if dims_nth != dims_0th {
                return Err(GroupingError::WrongDimension(format!(
                    "0th attribute has {dims_0th} scores, but {n}th has {dims_nth}"
                )));
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<(), GroupingError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(GroupingError::InvalidThreshold(format!(
            "{threshold} is not in the range 0 to 1"
        )));
    }
    Ok(())
}
