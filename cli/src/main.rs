//! Command-line front-end for the posts pipeline.

mod args;
mod render;

use anyhow::Context;
use clap::Parser;
use posts_core::{PostClient, PostDataSource, PostRepository, PostViewModel, ReqwestTransport, ViewEvent};

use args::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.debug {
        "debug"
    } else {
        "posts_core=info,posts_cli=info,warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(cli.debug)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(base_url = %cli.base_url, "starting");

    let source = PostDataSource::new(PostClient::new(&cli.base_url), ReqwestTransport::new());
    let view_model = PostViewModel::new(PostRepository::new(source));

    let state = match cli.command {
        Command::List => {
            view_model
                .handle(ViewEvent::Fetch)
                .await
                .context("post list task failed")?;
            view_model.posts_state()
        }
        Command::Show { id } => {
            view_model
                .handle(ViewEvent::FetchSingle(id))
                .await
                .context("post task failed")?;
            view_model.post_state()
        }
    };

    let lines = render::render(&state)?;
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
