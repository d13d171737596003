pub mod github;

use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Emoji short-code (without colons) to image URL.
///
/// A `BTreeMap` keeps keys in byte-wise order, so iteration is deterministic
/// no matter how the API orders its response.
pub type EmojiIndex = BTreeMap<String, String>;

#[async_trait]
pub trait EmojiSource: Send + Sync {
    async fn fetch(&self) -> Result<EmojiIndex>;
}
