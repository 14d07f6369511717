//! Analyzer engine: talks to the analysis service and runs submissions off the UI thread.
mod client;
mod engine;
mod settings;
mod types;
mod upload;

pub use client::{AnalysisClient, ReqwestAnalysisClient};
pub use engine::EngineHandle;
pub use settings::{ClientSettings, ANALYZE_PATH, DEFAULT_BASE_URL};
pub use types::{AnalysisError, AnalysisRequest, EngineError, EngineEvent, FailureKind};
