pub mod cli;
pub mod feeds;
pub mod logging;
pub mod plist;
pub mod replacements;

use anyhow::Result;
use feeds::EmojiSource;
use replacements::ReplacementSet;

/// Fetch the emoji index from `source` and turn it into replacements.
///
/// Any fetch error is returned untouched; nothing is rendered in that case.
pub async fn generate(source: &dyn EmojiSource) -> Result<ReplacementSet> {
    let index = source.fetch().await?;
    Ok(replacements::build_replacements(&index))
}
