//! Configuration and data model shared by the pipeline stages

pub mod config;
pub mod models;
