use anyhow::{Context, Result};
use clap::Parser;
use emojiplist::cli::Cli;
use emojiplist::feeds::github::GithubEmojiFetcher;
use emojiplist::{logging, plist};
use std::fs::File;
use std::io::{self, BufWriter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging(&cli.log_level) {
        eprintln!("emojiplist: {:#}", err);
    }

    if let Err(err) = run(cli).await {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let fetcher = GithubEmojiFetcher::new(cli.endpoint, cli.token);
    let set = emojiplist::generate(&fetcher).await?;

    match cli.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            plist::write_plist(&set, &mut BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), count = set.len(), "wrote plist");
        }
        None => {
            plist::write_plist(&set, &mut io::stdout().lock())
                .context("failed to write to stdout")?;
        }
    }

    Ok(())
}
