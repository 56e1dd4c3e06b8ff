//! Web search samples: auto-suggest, news and custom image search.

use anyhow::Result;

use super::client::{run, SampleRequest};

pub fn auto_suggest(key: &str) -> Result<()> {
    run(
        "Suggestions for 'Xbox':",
        key,
        SampleRequest::get("/bing/v7.0/Suggestions")
            .query("q", "Xbox")
            .query("mkt", "en-US"),
    )
}

pub fn news_search(key: &str) -> Result<()> {
    run(
        "News about 'Quantum Computing':",
        key,
        news_search_request("Quantum Computing"),
    )
}

pub fn trending_topics(key: &str) -> Result<()> {
    run(
        "Trending news topics:",
        key,
        SampleRequest::get("/bing/v7.0/news/trendingtopics").query("mkt", "en-US"),
    )
}

pub fn news_category(key: &str) -> Result<()> {
    run(
        "Latest 'Movie_And_TV_Entertainment' news:",
        key,
        SampleRequest::get("/bing/v7.0/news")
            .query("category", "Movie_And_TV_Entertainment")
            .query("mkt", "en-US")
            .query("safeSearch", "Strict"),
    )
}

pub fn custom_image_search(key: &str, custom_config: i64) -> Result<()> {
    run(
        &format!("Images for 'Xbox' in custom configuration {}:", custom_config),
        key,
        custom_image_request("Xbox", custom_config),
    )
}

fn news_search_request(query: &str) -> SampleRequest {
    SampleRequest::get("/bing/v7.0/news/search")
        .query("q", query)
        .query("mkt", "en-US")
        .query("freshness", "Week")
        .query("sortBy", "Date")
}

fn custom_image_request(query: &str, custom_config: i64) -> SampleRequest {
    SampleRequest::get("/bingcustomsearch/v7.0/images/search")
        .query("q", query)
        .query("customconfig", custom_config)
}
