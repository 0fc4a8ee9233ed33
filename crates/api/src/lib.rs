//! HTTP API: router, request validation, configuration.

pub mod app;
pub mod config;
pub mod extract;
pub mod validation;
