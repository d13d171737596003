use crate::feeds::github::GITHUB_EMOJIS_URL;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "emojiplist",
    author,
    version,
    about = "Generate a macOS text-replacement plist from the GitHub emoji list",
    long_about = None
)]
pub struct Cli {
    /// Emoji list endpoint returning a JSON object of short-code to image URL
    #[arg(long, value_name = "URL", default_value = GITHUB_EMOJIS_URL)]
    pub endpoint: String,

    /// GitHub token sent as a bearer token (raises the API rate limit)
    #[arg(long)]
    pub token: Option<String>,

    /// Write the plist to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log_level: String,
}
