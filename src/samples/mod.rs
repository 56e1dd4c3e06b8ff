//! Bundled quickstart samples.
//!
//! Each sample sends one REST call with the user's subscription key and
//! prints the JSON reply. [`CANDIDATES`] is the closed table the registry
//! scans; declaration order here is menu order.

pub mod client;
mod language;
mod search;
mod vision;

use crate::registry::{Handler, MethodDecl, TypeDecl, CUSTOM_IMAGE_SEARCH_GROUP};

pub use client::{SampleClient, SampleRequest};

const AUTO_SUGGEST: &[MethodDecl<'static>] = &[MethodDecl::example(
    "auto_suggest",
    "Suggest search queries for 'Xbox'",
    Handler::Credential(search::auto_suggest),
)];

const NEWS: &[MethodDecl<'static>] = &[
    MethodDecl::example(
        "news_search",
        "Search news for 'Quantum Computing'",
        Handler::Credential(search::news_search),
    ),
    MethodDecl::example(
        "trending_topics",
        "List trending news topics",
        Handler::Credential(search::trending_topics),
    ),
    MethodDecl::example(
        "news_category",
        "Latest news in the entertainment category",
        Handler::Credential(search::news_category),
    ),
];

const CUSTOM_IMAGE: &[MethodDecl<'static>] = &[MethodDecl::example(
    "custom_image_search",
    "Search images for 'Xbox' in a custom search configuration",
    Handler::CredentialAndConfig(search::custom_image_search),
)];

const TEXT_ANALYTICS: &[MethodDecl<'static>] = &[
    MethodDecl::example(
        "detect_language",
        "Detect the language of three documents",
        Handler::Credential(language::detect_language),
    ),
    MethodDecl::example(
        "analyze_sentiment",
        "Analyze document sentiment",
        Handler::Credential(language::analyze_sentiment),
    ),
    MethodDecl::example(
        "extract_key_phrases",
        "Extract key phrases",
        Handler::Credential(language::extract_key_phrases),
    ),
    MethodDecl::example(
        "recognize_entities",
        "Recognize named entities",
        Handler::Credential(language::recognize_entities),
    ),
];

const COMPUTER_VISION: &[MethodDecl<'static>] = &[
    MethodDecl::example(
        "analyze_image",
        "Analyze a remote image",
        Handler::Credential(vision::analyze_image),
    ),
    MethodDecl::example(
        "describe_image",
        "Describe a remote image",
        Handler::Credential(vision::describe_image),
    ),
    MethodDecl::example(
        "tag_image",
        "Tag a remote image",
        Handler::Credential(vision::tag_image),
    ),
    MethodDecl::example(
        "read_printed_text",
        "Read printed text in a remote image",
        Handler::Credential(vision::read_printed_text),
    ),
];

const CONTENT_MODERATOR: &[MethodDecl<'static>] = &[MethodDecl::example(
    "screen_text",
    "Screen text for profanity and personal data",
    Handler::Credential(language::screen_text),
)];

/// Candidate types scanned by the registry, in menu order.
pub const CANDIDATES: &[TypeDecl<'static>] = &[
    TypeDecl::group("AutoSuggestSamples", "AutoSuggestSearch", AUTO_SUGGEST),
    TypeDecl::group("NewsSearchSamples", "NewsSearch", NEWS),
    TypeDecl::group(
        "CustomImageSearchSamples",
        CUSTOM_IMAGE_SEARCH_GROUP,
        CUSTOM_IMAGE,
    ),
    TypeDecl::group("TextAnalyticsSamples", "TextAnalytics", TEXT_ANALYTICS),
    TypeDecl::group("ComputerVisionSamples", "ComputerVision", COMPUTER_VISION),
    TypeDecl::group("ContentModeratorSamples", "ContentModerator", CONTENT_MODERATOR),
    TypeDecl {
        name: "SampleClient",
        group: None,
        methods: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    #[test]
    fn test_bundled_candidates_load() {
        let registry = Registry::load(CANDIDATES).unwrap();
        assert_eq!(
            registry.group_names(),
            vec![
                "AutoSuggestSearch",
                "NewsSearch",
                "CustomImageSearch",
                "TextAnalytics",
                "ComputerVision",
                "ContentModerator",
            ]
        );
        assert_eq!(registry.example_count(), 14);
    }

    #[test]
    fn test_only_custom_image_search_takes_config() {
        let registry = Registry::load(CANDIDATES).unwrap();
        let configured: Vec<&str> = registry
            .groups()
            .iter()
            .filter(|g| g.requires_config())
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(configured, vec![CUSTOM_IMAGE_SEARCH_GROUP]);
    }
}
