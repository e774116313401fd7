//! Classification flow. Asks the clustering backend which segment a profile belongs to.

pub mod client;

pub use client::{AnalysisResult, ClassificationClient, Classifier};
