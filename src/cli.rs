use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "brain")]
#[command(about = "Terminal client for the Smart Brain daily-plan and capture API", long_about = None)]
pub struct Cli {
    /// Override the API base URL from config
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's plan once
    Plan,
    /// Follow the plan live; type a task number to toggle it
    Watch {
        /// Seconds between refreshes
        #[arg(short, long)]
        interval: Option<u64>,
    },
    /// Mark a task complete
    Done { task_id: String },
    /// Save a page or URL to the brain
    Save {
        url: String,

        #[arg(short, long)]
        title: Option<String>,

        /// Tag to attach (repeatable); falls back to default_tags from config
        #[arg(short = 'g', long = "tag")]
        tags: Vec<String>,
    },
    /// Search stored items
    Search {
        query: String,

        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Check whether the backend is reachable
    Status,
}
