pub mod coordinate;
pub mod result;
pub mod simulation;
pub mod source;

pub use coordinate::Coordinate;
pub use result::{
    AnalysisResult, Confidence, EnvironmentalData, Indices, PlasticAnalysis, SensorReadings,
    SentinelMetadata,
};
pub use simulation::SimulationIntent;
pub use source::{InputSource, SourceMode};
