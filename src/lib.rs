//! Segment Advisor: request/response core of the customer-segmentation dashboard.

pub mod advice;
pub mod analysis;
pub mod clusters;
pub mod config;
pub mod dialog;
pub mod error;
pub mod llm;
pub mod profile;
pub mod server;
