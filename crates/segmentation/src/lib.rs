//! Customer segmentation — RFM value scoring, declarative criteria
//! matching, and a registry of named segment definitions.

pub mod criteria;
pub mod presets;
pub mod registry;
pub mod rfm;

pub use criteria::{matches, SegmentCriteria};
pub use registry::{SegmentDefinition, SegmentRegistry};
pub use rfm::{analyze, RfmAnalysis, RfmSegment};
