pub mod candidate;
pub mod config;
pub mod contour;
pub mod dedup;
pub mod extractor;
pub mod geometry;
pub mod gradient;
pub mod hough;
pub mod morphology;
pub mod threshold;

pub use candidate::Candidate;
pub use config::{
    ContourConfig, DedupeConfig, ExtractorConfig, GradientConfig, HoughPass, ThresholdMethod,
};
pub use dedup::dedupe;
pub use extractor::{create_extractor, ContourExtractor, FeatureExtractor, GradientExtractor};
