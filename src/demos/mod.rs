//! Runnable scenarios shared by the CLI and the integration tests.

pub mod custom;
pub mod run_all;
pub mod technical_report;

pub use run_all::run as run_all_demos;
