//! Computer vision samples against a public landmark photo.

use anyhow::Result;
use serde_json::json;

use super::client::{run, SampleRequest};

const IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/3/3c/Salto_del_Angel-Canaima-Venezuela08.JPG";

fn image_request(path: &str) -> SampleRequest {
    SampleRequest::post_json(path, json!({ "url": IMAGE_URL }))
}

pub fn analyze_image(key: &str) -> Result<()> {
    run(
        "Image analysis:",
        key,
        image_request("/vision/v3.2/analyze")
            .query("visualFeatures", "Categories,Description,Tags,Color"),
    )
}

pub fn describe_image(key: &str) -> Result<()> {
    run(
        "Image description:",
        key,
        image_request("/vision/v3.2/describe").query("maxCandidates", 3),
    )
}

pub fn tag_image(key: &str) -> Result<()> {
    run("Image tags:", key, image_request("/vision/v3.2/tag"))
}

pub fn read_printed_text(key: &str) -> Result<()> {
    run(
        "Printed text (OCR):",
        key,
        image_request("/vision/v3.2/ocr")
            .query("language", "unk")
            .query("detectOrientation", "true"),
    )
}
