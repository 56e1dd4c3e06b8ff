//! cogsamples - interactive runner for cognitive-services quickstart samples

pub mod config;
pub mod console;
pub mod driver;
pub mod error;
pub mod menu;
pub mod registry;
pub mod samples;

pub use config::Config;
pub use error::{HarnessError, Result};
