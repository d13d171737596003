use anyhow::Result;
use async_trait::async_trait;
use emojiplist::feeds::{EmojiIndex, EmojiSource};
use emojiplist::plist::{render_plist, write_plist};

struct StaticSource(Vec<(&'static str, &'static str)>);

#[async_trait]
impl EmojiSource for StaticSource {
    async fn fetch(&self) -> Result<EmojiIndex> {
        Ok(self
            .0
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect())
    }
}

struct FailingSource;

#[async_trait]
impl EmojiSource for FailingSource {
    async fn fetch(&self) -> Result<EmojiIndex> {
        Err(anyhow::anyhow!("404 Not Found (https://api.github.com/emojis)"))
    }
}

#[tokio::test]
async fn test_grinning_kept_octocat_dropped() {
    let source = StaticSource(vec![
        (
            "octocat",
            "https://github.githubassets.com/images/icons/emoji/octocat.png?v8",
        ),
        (
            "grinning",
            "https://github.githubassets.com/images/icons/emoji/unicode/1f600.png?v8",
        ),
    ]);

    let set = emojiplist::generate(&source).await.unwrap();
    assert_eq!(set.len(), 1);

    let doc = render_plist(&set).unwrap();
    assert!(doc.contains("<string>:grinning:</string>"));
    assert!(doc.contains("<string>&#x1f600;</string>"));
    assert!(!doc.contains("octocat"));
    assert_eq!(doc.matches("<dict>").count(), 1);
}

#[tokio::test]
async fn test_empty_source_gives_empty_plist() {
    let set = emojiplist::generate(&StaticSource(vec![])).await.unwrap();
    assert!(set.is_empty());

    let mut out = Vec::new();
    write_plist(&set, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("<plist version=\"1.0\">"));
    assert!(!text.contains("<dict>"));
    assert!(text.ends_with("</plist>\n"));
}

#[tokio::test]
async fn test_fetch_error_propagates() {
    let err = emojiplist::generate(&FailingSource).await.unwrap_err();
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_output_follows_shortcode_order() {
    let source = StaticSource(vec![
        (
            "smile",
            "https://github.githubassets.com/images/icons/emoji/unicode/1f604.png?v8",
        ),
        (
            "+1",
            "https://github.githubassets.com/images/icons/emoji/unicode/1f44d.png?v8",
        ),
        (
            "100",
            "https://github.githubassets.com/images/icons/emoji/unicode/1f4af.png?v8",
        ),
    ]);

    let doc = render_plist(&emojiplist::generate(&source).await.unwrap()).unwrap();
    let plus = doc.find(":+1:").unwrap();
    let hundred = doc.find(":100:").unwrap();
    let smile = doc.find(":smile:").unwrap();
    assert!(plus < hundred && hundred < smile);
}
