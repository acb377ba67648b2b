mod cli;

use smart_brain::api::BrainClient;
use smart_brain::api::models::SaveUrlRequest;
use smart_brain::config::Config;
use smart_brain::tasks::{TaskBoard, TaskEvent, TaskFeed};
use smart_brain::utils::paths::get_logs_dir;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::fs;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Initialize file-based logging for watch mode.
///
/// Logs are written to ~/.smartbrain/logs/brain.log; use
/// `tail -f ~/.smartbrain/logs/brain.log` to follow them. Log level is
/// controlled with RUST_LOG (default: info).
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = match get_logs_dir() {
        Ok(dir) => dir,
        Err(_) => return None,
    };

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "brain.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let base_url = cli
        .api_url
        .unwrap_or_else(|| config.api_base_url.clone());
    let client = BrainClient::new(base_url)?;

    match cli.command {
        Commands::Plan => handle_plan(client).await,
        Commands::Watch { interval } => {
            // Guard must be kept alive for the duration of the watch
            let _log_guard = init_file_logging();

            tracing::info!("brain watch starting");

            let secs = interval.unwrap_or(config.poll_interval_secs).max(1);
            handle_watch(client, Duration::from_secs(secs)).await
        }
        Commands::Done { task_id } => handle_done(client, &task_id).await,
        Commands::Save { url, title, tags } => {
            let tags = if tags.is_empty() {
                config.default_tags.clone()
            } else {
                tags
            };
            handle_save(client, url, title, tags).await
        }
        Commands::Search { query, limit } => handle_search(client, &query, limit).await,
        Commands::Status => handle_status(client).await,
    }
}

async fn handle_plan(client: BrainClient) -> Result<()> {
    let plan = client.fetch_daily_plan().await?;
    let board = TaskBoard::with_tasks(plan.tasks.into_iter().map(Into::into).collect());

    if board.is_empty() {
        println!("No goals for today!");
        return Ok(());
    }

    render_plan(&board);
    Ok(())
}

async fn handle_watch(client: BrainClient, interval: Duration) -> Result<()> {
    let (feed, mut events) = TaskFeed::new(client);
    let poller = feed.spawn_poller(interval);

    println!("Watching today's plan (type a task number to toggle it, ctrl-c to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                feed.shutdown();
                break;
            }
            event = events.recv() => {
                match event {
                    Some(TaskEvent::Refreshed) => {
                        render_plan(&TaskBoard::with_tasks(feed.snapshot()));
                    }
                    Some(TaskEvent::Celebrate { .. }) => {
                        println!("✨ Nice! One more goal down.");
                    }
                    None => break,
                }
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(input)) => toggle_by_number(&feed, input.trim()),
                    _ => {
                        feed.shutdown();
                        break;
                    }
                }
            }
        }
    }

    let _ = poller.await;
    println!("bye 👋");
    Ok(())
}

fn toggle_by_number(feed: &TaskFeed, input: &str) {
    if input.is_empty() {
        return;
    }

    let Ok(number) = input.parse::<usize>() else {
        println!("Type a task number to toggle it");
        return;
    };

    let snapshot = feed.snapshot();
    match number.checked_sub(1).and_then(|i| snapshot.get(i)) {
        Some(task) => {
            feed.toggle(&task.id);
            render_plan(&TaskBoard::with_tasks(feed.snapshot()));
        }
        None => println!("No task #{number}"),
    }
}

async fn handle_done(client: BrainClient, task_id: &str) -> Result<()> {
    client.complete_task(task_id).await?;
    println!("✓ Task {task_id} marked complete");
    Ok(())
}

async fn handle_save(
    client: BrainClient,
    url: String,
    title: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    let request = SaveUrlRequest { url, title, tags };
    let item = client.save_url(&request).await?;

    let label = item.title.as_deref().unwrap_or(request.url.as_str());
    println!("✓ Saved to brain: {} ({}, {})", label, item.id, item.status);
    Ok(())
}

async fn handle_search(client: BrainClient, query: &str, limit: usize) -> Result<()> {
    let items = client.search_items(query, limit).await?;

    if items.is_empty() {
        println!("No items matched '{query}'");
        return Ok(());
    }

    for item in items {
        println!(
            "{}  [{}] {}",
            item.id,
            item.status,
            item.title.as_deref().unwrap_or("(untitled)")
        );
    }
    Ok(())
}

async fn handle_status(client: BrainClient) -> Result<()> {
    match client.health().await {
        Ok(true) => println!("Backend is up at {}", client.base_url()),
        Ok(false) => println!(
            "Backend at {} responded but is not healthy",
            client.base_url()
        ),
        Err(e) => println!("Backend at {} is unreachable: {e:#}", client.base_url()),
    }
    Ok(())
}

fn render_plan(board: &TaskBoard) {
    println!("\nDaily Goals  {}/{}", board.completed_count(), board.len());
    println!("{}", progress_bar(board.progress(), 24));

    for (idx, task) in board.tasks().iter().enumerate() {
        let mark = if task.completed { "x" } else { " " };
        println!("{:>3}. [{}] {}", idx + 1, mark, task.text);
    }

    if board.all_done() {
        println!("\n✨ You're crushing it! All goals done! ✨");
    }
    println!();
}

fn progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress * width as f64).round() as usize).min(width);
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        progress * 100.0
    )
}
