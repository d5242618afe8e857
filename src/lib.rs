pub mod api;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod logger;
pub mod model;

mod macros;
