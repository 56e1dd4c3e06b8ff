//! Sample discovery for cogsamples
//!
//! Walks the candidate table, keeps the types carrying a group marker and,
//! inside them, the methods carrying an example marker. Every kept method is
//! validated before it becomes an [`Example`]. Any violation aborts the whole
//! load: a half-built registry is never returned.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::error::DiscoveryError;

use super::types::{
    expected_shape, format_shape, Example, MethodDecl, Receiver, SampleGroup, TypeDecl,
};

static GROUP_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]{0,63}$").unwrap());

/// Discover all sample groups in `candidates`.
///
/// Groups come back in candidate order and examples in method order, so the
/// result is fully determined by the table.
///
/// # Errors
/// Returns the first [`DiscoveryError`] found. No partial result is produced.
pub fn discover_groups(candidates: &[TypeDecl<'_>]) -> Result<Vec<SampleGroup>, DiscoveryError> {
    let mut groups = Vec::new();
    let mut seen = HashSet::new();

    for candidate in candidates {
        let Some(group_name) = candidate.group else {
            debug!(ty = %candidate.name, "Type has no group marker, skipping");
            continue;
        };

        validate_group_name(group_name)?;
        if !seen.insert(group_name) {
            return Err(DiscoveryError::DuplicateGroup(group_name.to_string()));
        }

        let group = load_group(group_name, candidate.methods)?;
        info!(
            group = %group.name,
            examples = group.len(),
            "Registered sample group"
        );
        groups.push(group);
    }

    Ok(groups)
}

/// Build one group from its declared methods.
fn load_group(
    group_name: &str,
    methods: &[MethodDecl<'_>],
) -> Result<SampleGroup, DiscoveryError> {
    let mut examples = Vec::new();

    for method in methods {
        let Some(description) = method.example else {
            debug!(
                group = %group_name,
                method = %method.name,
                "Method has no example marker, skipping"
            );
            continue;
        };

        validate_example(group_name, method)?;
        examples.push(Example::new(
            examples.len(),
            description,
            method.name,
            method.handler,
        ));
    }

    Ok(SampleGroup::new(group_name, examples))
}

/// Check a group name: ASCII alphanumerics, 1-64 chars, starting with a letter.
pub fn validate_group_name(name: &str) -> Result<(), DiscoveryError> {
    if GROUP_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(DiscoveryError::InvalidGroupName(name.to_string()))
    }
}

/// Validate one marked method against the calling convention of its group.
///
/// The method must be a free function, carry a non-empty description, and
/// take exactly the parameter list returned by [`expected_shape`].
pub fn validate_example(group: &str, method: &MethodDecl<'_>) -> Result<(), DiscoveryError> {
    if method
        .example
        .map_or(true, |description| description.trim().is_empty())
    {
        return Err(DiscoveryError::EmptyDescription {
            group: group.to_string(),
            method: method.name.to_string(),
        });
    }

    if method.receiver != Receiver::Free {
        return Err(DiscoveryError::BoundReceiver {
            group: group.to_string(),
            method: method.name.to_string(),
        });
    }

    let expected = expected_shape(group);
    let found = method.handler.params();
    if found != expected {
        return Err(DiscoveryError::UnsupportedShape {
            group: group.to_string(),
            method: method.name.to_string(),
            found: format_shape(found),
            expected: format_shape(expected),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::types::{Handler, CUSTOM_IMAGE_SEARCH_GROUP};

    fn key_only(_key: &str) -> anyhow::Result<()> {
        Ok(())
    }

    fn key_and_config(_key: &str, _config: i64) -> anyhow::Result<()> {
        Ok(())
    }

    const KEY_ONLY: Handler = Handler::Credential(key_only);
    const KEY_AND_CONFIG: Handler = Handler::CredentialAndConfig(key_and_config);

    #[test]
    fn test_one_group_per_marked_type() {
        let news = [
            MethodDecl::example("search", "Search news", KEY_ONLY),
            MethodDecl::example("trending", "Trending topics", KEY_ONLY),
        ];
        let suggest = [MethodDecl::example("suggest", "Suggest queries", KEY_ONLY)];
        let helpers = [MethodDecl::example("print", "Not a sample", KEY_ONLY)];
        let candidates = [
            TypeDecl::group("AutoSuggestSamples", "AutoSuggestSearch", &suggest),
            TypeDecl {
                name: "JsonHelpers",
                group: None,
                methods: &helpers,
            },
            TypeDecl::group("NewsSamples", "NewsSearch", &news),
        ];

        let groups = discover_groups(&candidates).unwrap();
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["AutoSuggestSearch", "NewsSearch"]);
        assert_eq!(groups[1].len(), 2);
    }

    #[test]
    fn test_examples_keep_declaration_order() {
        let methods = [
            MethodDecl::example("c", "Third alphabetically", KEY_ONLY),
            MethodDecl::helper("format_output", KEY_ONLY),
            MethodDecl::example("a", "First alphabetically", KEY_ONLY),
            MethodDecl::example("b", "Second alphabetically", KEY_ONLY),
        ];
        let candidates = [TypeDecl::group("Ordered", "Ordered", &methods)];

        for _ in 0..3 {
            let groups = discover_groups(&candidates).unwrap();
            let order: Vec<(usize, &str)> = groups[0]
                .examples()
                .iter()
                .map(|e| (e.index, e.method.as_str()))
                .collect();
            assert_eq!(order, vec![(0, "c"), (1, "a"), (2, "b")]);
        }
    }

    #[test]
    fn test_marked_type_without_examples_is_registered_empty() {
        let methods = [MethodDecl::helper("helper", KEY_ONLY)];
        let candidates = [TypeDecl::group("Empty", "EmptyGroup", &methods)];

        let groups = discover_groups(&candidates).unwrap();
        assert_eq!(groups.len(), 1);
        assert!(groups[0].is_empty());
    }

    #[test]
    fn test_two_param_shape_rejected_outside_designated_group() {
        let methods = [MethodDecl::example("custom", "Custom", KEY_AND_CONFIG)];
        let candidates = [TypeDecl::group("News", "NewsSearch", &methods)];

        let err = discover_groups(&candidates).unwrap_err();
        assert_eq!(
            err,
            DiscoveryError::UnsupportedShape {
                group: "NewsSearch".into(),
                method: "custom".into(),
                found: "string, integer".into(),
                expected: "string".into(),
            }
        );
    }

    #[test]
    fn test_two_param_shape_accepted_in_designated_group() {
        let methods = [MethodDecl::example("search", "Custom search", KEY_AND_CONFIG)];
        let candidates = [TypeDecl::group(
            "CustomImages",
            CUSTOM_IMAGE_SEARCH_GROUP,
            &methods,
        )];

        let groups = discover_groups(&candidates).unwrap();
        assert!(groups[0].requires_config());
        assert_eq!(groups[0].examples()[0].params().len(), 2);
    }

    #[test]
    fn test_one_param_shape_rejected_in_designated_group() {
        let methods = [MethodDecl::example("search", "Custom search", KEY_ONLY)];
        let candidates = [TypeDecl::group(
            "CustomImages",
            CUSTOM_IMAGE_SEARCH_GROUP,
            &methods,
        )];

        assert!(matches!(
            discover_groups(&candidates),
            Err(DiscoveryError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn test_bound_receiver_rejected() {
        let methods = [MethodDecl {
            name: "with_client",
            example: Some("Needs an instance"),
            receiver: Receiver::Instance,
            handler: KEY_ONLY,
        }];
        let candidates = [TypeDecl::group("Vision", "ComputerVision", &methods)];

        assert_eq!(
            discover_groups(&candidates).unwrap_err(),
            DiscoveryError::BoundReceiver {
                group: "ComputerVision".into(),
                method: "with_client".into(),
            }
        );
    }

    #[test]
    fn test_unmarked_bound_method_is_ignored() {
        let methods = [
            MethodDecl {
                name: "client",
                example: None,
                receiver: Receiver::Instance,
                handler: KEY_ONLY,
            },
            MethodDecl::example("describe", "Describe an image", KEY_ONLY),
        ];
        let candidates = [TypeDecl::group("Vision", "ComputerVision", &methods)];

        let groups = discover_groups(&candidates).unwrap();
        assert_eq!(groups[0].len(), 1);
    }

    #[test]
    fn test_one_invalid_example_fails_whole_load() {
        let good = [MethodDecl::example("ok", "Fine", KEY_ONLY)];
        let bad = [
            MethodDecl::example("ok", "Fine", KEY_ONLY),
            MethodDecl::example("bad", "Wrong shape", KEY_AND_CONFIG),
        ];
        let candidates = [
            TypeDecl::group("A", "Alpha", &good),
            TypeDecl::group("B", "Beta", &bad),
        ];

        assert!(discover_groups(&candidates).is_err());
    }

    #[test]
    fn test_duplicate_group_rejected() {
        let methods = [MethodDecl::example("ok", "Fine", KEY_ONLY)];
        let candidates = [
            TypeDecl::group("NewsV1", "NewsSearch", &methods),
            TypeDecl::group("NewsV2", "NewsSearch", &methods),
        ];

        assert_eq!(
            discover_groups(&candidates).unwrap_err(),
            DiscoveryError::DuplicateGroup("NewsSearch".into())
        );
    }

    #[test]
    fn test_empty_description_rejected() {
        let methods = [MethodDecl::example("blank", "   ", KEY_ONLY)];
        let candidates = [TypeDecl::group("T", "TextAnalytics", &methods)];

        assert!(matches!(
            discover_groups(&candidates),
            Err(DiscoveryError::EmptyDescription { .. })
        ));
    }

    #[test]
    fn test_validate_group_name() {
        assert!(validate_group_name("NewsSearch").is_ok());
        assert!(validate_group_name("Vision2").is_ok());
        assert!(validate_group_name("").is_err());
        assert!(validate_group_name("2Vision").is_err());
        assert!(validate_group_name("News Search").is_err());
        assert!(validate_group_name("news-search").is_err());
        assert!(validate_group_name(&"A".repeat(65)).is_err());
        assert!(validate_group_name(&"A".repeat(64)).is_ok());
    }
}
