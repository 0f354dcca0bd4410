//! The two data parallel phases of a clustering run: populating the score matrix and computing
//! the condensed dissimilarities between its rows. Both have a serial and a parallel version
//! which produce identical results.

#[cfg(feature = "parallel")]
pub(super) mod parallel;
#[cfg(feature = "serial")]
pub(super) mod serial;
