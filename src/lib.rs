// Library exports for integration tests and the command-line binary

pub mod app_data;
pub mod cli;
pub mod config;
pub mod coordinators;
pub mod errors;
pub mod presentation;
pub mod providers;
pub mod types;

pub use app_data::AppData;
