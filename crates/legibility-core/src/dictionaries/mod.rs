//! Word sets used by sentence segmentation.

pub mod abbreviations;
