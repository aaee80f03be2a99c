pub mod cli;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod telemetry;

mod startup;

pub use startup::run;
