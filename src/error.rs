//! Error types for cogsamples
//!
//! The runner keeps two channels apart: [`DiscoveryError`] is fatal and only
//! produced while the sample registry is being built, whereas
//! [`InvalidSelection`] is an ordinary outcome of reading user input.
//! [`AttemptError`] covers everything that can end a single invocation
//! attempt. All of them use `thiserror` for `Display`/`Error` derives.

use thiserror::Error;

/// A defect in the candidate table, found while loading the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// A sample group name does not follow the naming rules.
    #[error("Invalid sample group name '{0}': must be 1-64 ASCII alphanumeric characters, starting with a letter")]
    InvalidGroupName(String),

    /// Two candidate types carry the same group marker.
    #[error("Sample group '{0}' is declared more than once")]
    DuplicateGroup(String),

    /// An example marker carries an empty description.
    #[error("Example '{method}' in group '{group}' has an empty description")]
    EmptyDescription { group: String, method: String },

    /// The example needs an instance receiver; only free functions are invocable.
    #[error("Example '{method}' in group '{group}' must not require an instance receiver")]
    BoundReceiver { group: String, method: String },

    /// The example's parameter list is not the shape its group accepts.
    #[error("Example '{method}' in group '{group}' takes ({found}) but the group requires ({expected})")]
    UnsupportedShape {
        group: String,
        method: String,
        found: String,
        expected: String,
    },
}

/// User input that does not name any offered option.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{input}' is not a valid selection")]
pub struct InvalidSelection {
    /// The input exactly as it was read.
    pub input: String,
}

impl InvalidSelection {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Failure of one invocation attempt after a sample was selected.
#[derive(Error, Debug)]
pub enum AttemptError {
    /// The secondary configuration argument is not an integer.
    #[error("'{input}' is not a valid integer configuration value")]
    InvalidArgument {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The sample itself failed.
    #[error("Sample '{group}' #{index} failed")]
    Sample {
        group: String,
        index: usize,
        #[source]
        source: anyhow::Error,
    },
}

/// The primary error type for cogsamples operations.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// The registry could not be built.
    #[error("Sample discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),

    /// An invocation attempt failed.
    #[error(transparent)]
    Attempt(#[from] AttemptError),

    /// Configuration-related errors (unreadable file, bad override value, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for cogsamples operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
