//! Registry types for cogsamples
//!
//! Two layers live here. The declaration layer (`TypeDecl`, `MethodDecl`) is
//! the raw candidate table: types that may carry a group marker and methods
//! that may carry an example marker. The runtime layer (`SampleGroup`,
//! `Example`) is what the loader produces after filtering and validation.

use std::fmt;

/// Name of the one group whose examples take a numeric configuration id.
pub const CUSTOM_IMAGE_SEARCH_GROUP: &str = "CustomImageSearch";

/// Type of a single example parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A text argument (the subscription key).
    Text,
    /// A signed integer argument (the custom configuration id).
    Integer,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
        }
    }
}

/// Render a parameter list as `string, integer`.
pub fn format_shape(shape: &[ParamKind]) -> String {
    shape
        .iter()
        .map(ParamKind::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sample taking only a subscription key.
pub type CredentialFn = fn(&str) -> anyhow::Result<()>;

/// Sample taking a subscription key and a custom configuration id.
pub type ConfiguredFn = fn(&str, i64) -> anyhow::Result<()>;

/// Callable behind an example. The variant fixes the parameter shape.
#[derive(Clone, Copy)]
pub enum Handler {
    Credential(CredentialFn),
    CredentialAndConfig(ConfiguredFn),
}

impl Handler {
    /// Parameter list of the wrapped function.
    pub fn params(&self) -> &'static [ParamKind] {
        match self {
            Self::Credential(_) => &[ParamKind::Text],
            Self::CredentialAndConfig(_) => &[ParamKind::Text, ParamKind::Integer],
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({})", format_shape(self.params()))
    }
}

/// How a declared method is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    /// Free function, callable without any instance.
    Free,
    /// Needs an instance of its declaring type.
    Instance,
}

/// A method on a candidate type.
#[derive(Debug, Clone, Copy)]
pub struct MethodDecl<'a> {
    /// Method name, used in diagnostics only.
    pub name: &'a str,
    /// Example marker: `Some(description)` makes the method an example.
    pub example: Option<&'a str>,
    pub receiver: Receiver,
    pub handler: Handler,
}

impl<'a> MethodDecl<'a> {
    /// A free function marked as an example.
    pub const fn example(name: &'a str, description: &'a str, handler: Handler) -> Self {
        Self {
            name,
            example: Some(description),
            receiver: Receiver::Free,
            handler,
        }
    }

    /// A helper method without an example marker. The loader skips it.
    pub const fn helper(name: &'a str, handler: Handler) -> Self {
        Self {
            name,
            example: None,
            receiver: Receiver::Free,
            handler,
        }
    }
}

/// A candidate type in the closed set handed to the loader.
#[derive(Debug, Clone, Copy)]
pub struct TypeDecl<'a> {
    /// Type name, used in diagnostics only.
    pub name: &'a str,
    /// Group marker: `Some(name)` makes the type a sample group.
    pub group: Option<&'a str>,
    /// Methods in declaration order.
    pub methods: &'a [MethodDecl<'a>],
}

impl<'a> TypeDecl<'a> {
    /// A type marked as the sample group `group`.
    pub const fn group(name: &'a str, group: &'a str, methods: &'a [MethodDecl<'a>]) -> Self {
        Self {
            name,
            group: Some(group),
            methods,
        }
    }
}

/// Arguments collected for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    pub credential: String,
    /// Present only for examples taking a configuration id.
    pub config: Option<i64>,
}

impl Arguments {
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            config: None,
        }
    }

    pub fn with_config(mut self, config: i64) -> Self {
        self.config = Some(config);
        self
    }
}

/// A validated, invocable example.
#[derive(Debug, Clone)]
pub struct Example {
    /// Zero-based position within its group.
    pub index: usize,
    pub description: String,
    /// Declaring method name.
    pub method: String,
    handler: Handler,
}

impl Example {
    pub(crate) fn new(index: usize, description: &str, method: &str, handler: Handler) -> Self {
        Self {
            index,
            description: description.to_string(),
            method: method.to_string(),
            handler,
        }
    }

    /// Parameter list the example accepts.
    pub fn params(&self) -> &'static [ParamKind] {
        self.handler.params()
    }

    /// Call the sample once.
    ///
    /// Arguments are passed credential first, then the configuration id.
    /// Whatever the sample returns is handed back untouched.
    pub fn invoke(&self, args: &Arguments) -> anyhow::Result<()> {
        match (self.handler, args.config) {
            (Handler::Credential(f), _) => f(&args.credential),
            (Handler::CredentialAndConfig(f), Some(config)) => f(&args.credential, config),
            (Handler::CredentialAndConfig(_), None) => Err(anyhow::anyhow!(
                "example '{}' requires a configuration id",
                self.description
            )),
        }
    }
}

/// A named group of examples, in declaration order.
#[derive(Debug, Clone)]
pub struct SampleGroup {
    pub name: String,
    examples: Vec<Example>,
}

impl SampleGroup {
    pub(crate) fn new(name: &str, examples: Vec<Example>) -> Self {
        Self {
            name: name.to_string(),
            examples,
        }
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn example(&self, index: usize) -> Option<&Example> {
        self.examples.get(index)
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Whether invoking this group needs a configuration id.
    pub fn requires_config(&self) -> bool {
        expected_shape(&self.name).contains(&ParamKind::Integer)
    }
}

/// The parameter list every example of `group` must take.
pub fn expected_shape(group: &str) -> &'static [ParamKind] {
    if group == CUSTOM_IMAGE_SEARCH_GROUP {
        &[ParamKind::Text, ParamKind::Integer]
    } else {
        &[ParamKind::Text]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CONFIGURED_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn noop(_key: &str) -> anyhow::Result<()> {
        Ok(())
    }

    fn failing(key: &str) -> anyhow::Result<()> {
        anyhow::bail!("rejected key {}", key)
    }

    fn configured(_key: &str, config: i64) -> anyhow::Result<()> {
        CONFIGURED_CALLS.fetch_add(1, Ordering::SeqCst);
        anyhow::ensure!(config == 42, "unexpected config {}", config);
        Ok(())
    }

    #[test]
    fn test_handler_params() {
        assert_eq!(Handler::Credential(noop).params(), &[ParamKind::Text]);
        assert_eq!(
            Handler::CredentialAndConfig(configured).params(),
            &[ParamKind::Text, ParamKind::Integer]
        );
    }

    #[test]
    fn test_format_shape() {
        assert_eq!(format_shape(&[ParamKind::Text]), "string");
        assert_eq!(
            format_shape(&[ParamKind::Text, ParamKind::Integer]),
            "string, integer"
        );
        assert_eq!(format_shape(&[]), "");
    }

    #[test]
    fn test_expected_shape_designated_group_only() {
        assert_eq!(
            expected_shape(CUSTOM_IMAGE_SEARCH_GROUP),
            &[ParamKind::Text, ParamKind::Integer]
        );
        assert_eq!(expected_shape("NewsSearch"), &[ParamKind::Text]);
        assert_eq!(expected_shape("customimagesearch"), &[ParamKind::Text]);
    }

    #[test]
    fn test_invoke_propagates_sample_error() {
        let example = Example::new(0, "Fails", "fails", Handler::Credential(failing));
        let err = example.invoke(&Arguments::new("abc")).unwrap_err();
        assert_eq!(err.to_string(), "rejected key abc");
    }

    #[test]
    fn test_invoke_configured_without_config_is_refused() {
        let before = CONFIGURED_CALLS.load(Ordering::SeqCst);
        let example = Example::new(
            0,
            "Custom search",
            "custom",
            Handler::CredentialAndConfig(configured),
        );
        assert!(example.invoke(&Arguments::new("key")).is_err());
        assert_eq!(CONFIGURED_CALLS.load(Ordering::SeqCst), before);

        example
            .invoke(&Arguments::new("key").with_config(42))
            .unwrap();
        assert_eq!(CONFIGURED_CALLS.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_group_requires_config() {
        let group = SampleGroup::new(CUSTOM_IMAGE_SEARCH_GROUP, Vec::new());
        assert!(group.requires_config());
        assert!(group.is_empty());

        let group = SampleGroup::new("NewsSearch", Vec::new());
        assert!(!group.requires_config());
    }
}
