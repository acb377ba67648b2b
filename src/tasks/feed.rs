use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::{Task, TaskBoard, ToggleOutcome};
use crate::api::BrainClient;

/// Events emitted by the feed for the view layer to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    /// The board was rebuilt from a server refresh.
    Refreshed,
    /// A task just went pending -> done.
    Celebrate { task_id: String },
}

/// Owns the board snapshot, the API client and the polling loop.
///
/// Completion notifications are dispatched at most once per toggle and
/// never retried here; a lost notification is healed by the next refresh
/// through the board's sticky merge.
pub struct TaskFeed {
    board: Arc<Mutex<TaskBoard>>,
    client: Arc<BrainClient>,
    events: mpsc::UnboundedSender<TaskEvent>,
    cancel: CancellationToken,
}

impl TaskFeed {
    pub fn new(client: BrainClient) -> (Self, mpsc::UnboundedReceiver<TaskEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let feed = Self {
            board: Arc::new(Mutex::new(TaskBoard::new())),
            client: Arc::new(client),
            events: tx,
            cancel: CancellationToken::new(),
        };
        (feed, rx)
    }

    /// Clone of the current task list.
    pub fn snapshot(&self) -> Vec<Task> {
        self.board
            .lock()
            .expect("task board lock poisoned")
            .tasks()
            .to_vec()
    }

    pub fn completed_count(&self) -> usize {
        self.board
            .lock()
            .expect("task board lock poisoned")
            .completed_count()
    }

    pub fn progress(&self) -> f64 {
        self.board.lock().expect("task board lock poisoned").progress()
    }

    /// Fetch the daily plan once and merge it into the board.
    pub async fn refresh_once(&self) -> Result<()> {
        let plan = self.client.fetch_daily_plan().await?;
        let tasks: Vec<Task> = plan.tasks.into_iter().map(Task::from).collect();

        self.board
            .lock()
            .expect("task board lock poisoned")
            .refresh(tasks);

        let _ = self.events.send(TaskEvent::Refreshed);
        Ok(())
    }

    /// Spawn the polling loop. The first tick fires immediately, which
    /// doubles as the initial load. The loop stops when this feed is
    /// shut down or dropped; a failed refresh keeps the last known list.
    pub fn spawn_poller(&self, interval: Duration) -> JoinHandle<()> {
        let board = Arc::clone(&self.board);
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!("task poller stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        match client.fetch_daily_plan().await {
                            Ok(plan) => {
                                let tasks: Vec<Task> =
                                    plan.tasks.into_iter().map(Task::from).collect();
                                board
                                    .lock()
                                    .expect("task board lock poisoned")
                                    .refresh(tasks);
                                let _ = events.send(TaskEvent::Refreshed);
                            }
                            Err(e) => {
                                warn!("daily plan refresh failed, keeping last known list: {e:#}");
                            }
                        }
                    }
                }
            }
        })
    }

    /// Flip a task locally and, when it just became done, fire the two
    /// side effects: a celebration event and one best-effort completion
    /// notification to the server.
    pub fn toggle(&self, id: &str) -> Option<ToggleOutcome> {
        let outcome = self
            .board
            .lock()
            .expect("task board lock poisoned")
            .toggle(id)?;

        if outcome == ToggleOutcome::Completed {
            let _ = self.events.send(TaskEvent::Celebrate {
                task_id: id.to_string(),
            });

            let client = Arc::clone(&self.client);
            let task_id = id.to_string();
            tokio::spawn(async move {
                if let Err(e) = client.complete_task(&task_id).await {
                    warn!(task_id = %task_id, "completion notification failed: {e:#}");
                }
            });
        }

        Some(outcome)
    }

    /// Stop the polling loop. No further board updates fire after this.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for TaskFeed {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
