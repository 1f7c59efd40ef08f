//! Builder for release payloads served by the mock API

use serde_json::{json, Value};

use super::constants::*;

/// Builder for GitHub release JSON bodies
#[derive(Debug, Clone)]
pub struct ReleasePayloadBuilder {
    tag_name: String,
    name: Option<String>,
    body: Option<String>,
    prerelease: bool,
    assets: Vec<Value>,
}

impl ReleasePayloadBuilder {
    pub fn new() -> Self {
        Self {
            tag_name: TAG_V1_1_21.to_string(),
            name: None,
            body: None,
            prerelease: false,
            assets: Vec::new(),
        }
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tag_name = tag.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    pub fn prerelease(mut self) -> Self {
        self.prerelease = true;
        self
    }

    /// Add an asset entry
    pub fn asset(mut self, name: &str, url: &str, size: u64) -> Self {
        self.assets.push(json!({
            "name": name,
            "browser_download_url": url,
            "size": size,
        }));
        self
    }

    pub fn build(self) -> Value {
        json!({
            "tag_name": self.tag_name,
            "name": self.name,
            "body": self.body,
            "prerelease": self.prerelease,
            "draft": false,
            "html_url": format!("https://github.com/{}/{}/releases/tag/{}", OWNER, REPO, self.tag_name),
            "published_at": "2026-01-15T10:00:00Z",
            "assets": self.assets,
        })
    }
}

impl Default for ReleasePayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Release payload with just a tag
pub fn release_with_tag(tag: &str) -> Value {
    ReleasePayloadBuilder::new().tag(tag).build()
}
