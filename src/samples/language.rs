//! Text samples: text analytics and content moderation.

use anyhow::Result;
use serde_json::{json, Value};

use super::client::{run, SampleRequest};

const TEXT_ANALYTICS_BASE: &str = "/text/analytics/v3.0";

fn documents() -> Value {
    json!({
        "documents": [
            { "id": "1", "language": "en", "text": "I had a wonderful trip to Seattle last week." },
            { "id": "2", "language": "es", "text": "Los caminos que llevan hasta Monte Rainier son espectaculares." },
            { "id": "3", "language": "en", "text": "The hotel was dirty and the staff was rude." }
        ]
    })
}

fn text_analytics_request(operation: &str) -> SampleRequest {
    SampleRequest::post_json(&format!("{}/{}", TEXT_ANALYTICS_BASE, operation), documents())
}

pub fn detect_language(key: &str) -> Result<()> {
    run("Detected languages:", key, text_analytics_request("languages"))
}

pub fn analyze_sentiment(key: &str) -> Result<()> {
    run("Document sentiment:", key, text_analytics_request("sentiment"))
}

pub fn extract_key_phrases(key: &str) -> Result<()> {
    run("Key phrases:", key, text_analytics_request("keyPhrases"))
}

pub fn recognize_entities(key: &str) -> Result<()> {
    run(
        "Recognized entities:",
        key,
        text_analytics_request("entities/recognition/general"),
    )
}

pub fn screen_text(key: &str) -> Result<()> {
    run(
        "Text screening result:",
        key,
        SampleRequest::post_text(
            "/contentmoderator/moderate/v1.0/ProcessText/Screen",
            "Is this a crap email abcdef@abcd.com, phone: 6657789887, IP: 255.255.255.255, 1 Microsoft Way, Redmond, WA 98052",
        )
        .query("classify", "True")
        .query("PII", "True")
        .query("language", "eng"),
    )
}
