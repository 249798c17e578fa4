pub mod auth;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod service;
pub mod subject;
