//! Sample registry for cogsamples
//!
//! Samples are declared in a static candidate table instead of being found by
//! runtime introspection. A candidate type becomes a sample group when it
//! carries a group marker, and its methods become examples when they carry an
//! example marker. The loader validates every example's calling convention
//! before anything is registered.
//!
//! # Architecture
//!
//! - **types**: Declarations (`TypeDecl`, `MethodDecl`) and runtime entries (`SampleGroup`, `Example`)
//! - **loader**: Marker filtering and calling-convention validation
//! - **registry**: The name-indexed `Registry` and its process-wide instance
//!
//! # Calling convention
//!
//! Every example takes the subscription key as a string. Examples in the
//! `CustomImageSearch` group additionally take an integer custom
//! configuration id. Any other parameter list, or a method that needs an
//! instance receiver, fails the load.
//!
//! # Usage
//!
//! ```rust,no_run
//! let registry = cogsamples::registry::registry().unwrap();
//! for group in registry.groups() {
//!     println!("{} ({} examples)", group.name, group.len());
//! }
//! ```

mod loader;
#[allow(clippy::module_inception)]
pub mod registry;
pub mod types;

pub use loader::{discover_groups, validate_example, validate_group_name};
pub use registry::{registry, Registry};
pub use types::{
    expected_shape, Arguments, ConfiguredFn, CredentialFn, Example, Handler, MethodDecl,
    ParamKind, Receiver, SampleGroup, TypeDecl, CUSTOM_IMAGE_SEARCH_GROUP,
};
