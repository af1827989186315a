use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "posts-cli", version, about = "Browse posts from a JSONPlaceholder-style API", long_about = None)]
pub struct Cli {
    /// API root; requests go to {base_url}/posts and {base_url}/posts/{id}
    #[arg(long, env = "POSTS_BASE_URL", default_value = posts_core::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log everything at debug level (RUST_LOG still takes precedence)
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch and print every post
    List,
    /// Fetch and print one post
    Show {
        /// Post id, passed to the API as-is
        id: Option<String>,
    },
}
