use std::collections::HashSet;

use super::Task;

/// Direction of a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The task went pending -> done.
    Completed,
    /// The task went done -> pending.
    Reopened,
}

/// Local view of the server-owned daily plan.
///
/// Membership is server-driven: every refresh rebuilds the list from the
/// latest server response, in server order. The completed flag is locally
/// sticky: once a task is marked done here, a refresh cannot flip it back
/// to pending while the server still reports the task. A task only leaves
/// the board when the server stops reporting its id.
///
/// The board never performs I/O. Notifying the server about a completion
/// is the feed's job; if that notification is lost, the sticky rule keeps
/// the local flag set until the server catches up.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Replace the board with the latest server list, preserving local
    /// completion state for ids present in both.
    pub fn refresh(&mut self, server_tasks: Vec<Task>) -> &[Task] {
        let locally_done: HashSet<String> = self
            .tasks
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.id.clone())
            .collect();

        self.tasks = server_tasks
            .into_iter()
            .map(|mut task| {
                if locally_done.contains(&task.id) {
                    task.completed = true;
                }
                task
            })
            .collect();

        &self.tasks
    }

    /// Flip one task's completed flag. Unknown ids are a silent no-op.
    pub fn toggle(&mut self, id: &str) -> Option<ToggleOutcome> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;

        Some(if task.completed {
            ToggleOutcome::Completed
        } else {
            ToggleOutcome::Reopened
        })
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Fraction of tasks done, in [0, 1]. An empty board reports 0.0
    /// rather than NaN.
    pub fn progress(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.tasks.len() as f64
    }

    pub fn all_done(&self) -> bool {
        !self.tasks.is_empty() && self.completed_count() == self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task(id: &str, text: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_refresh_keeps_local_completion_sticky() {
        let mut board = TaskBoard::with_tasks(vec![
            task("1", "A", true),
            task("2", "B", false),
        ]);

        board.refresh(vec![task("1", "A", false), task("3", "C", false)]);

        assert_eq!(
            board.tasks(),
            &[task("1", "A", true), task("3", "C", false)]
        );
    }

    #[test]
    fn test_refresh_adds_server_only_tasks_as_reported() {
        let mut board = TaskBoard::with_tasks(vec![task("1", "A", false)]);

        board.refresh(vec![task("1", "A", false), task("2", "B", true)]);

        assert_eq!(board.tasks()[1], task("2", "B", true));
    }

    #[test]
    fn test_refresh_drops_tasks_missing_from_server() {
        let mut board = TaskBoard::with_tasks(vec![
            task("1", "A", true),
            task("2", "B", false),
        ]);

        board.refresh(vec![task("2", "B", false)]);

        assert_eq!(board.tasks(), &[task("2", "B", false)]);
    }

    #[test]
    fn test_refresh_trusts_server_flag_when_not_locally_done() {
        let mut board = TaskBoard::with_tasks(vec![task("1", "A", false)]);

        board.refresh(vec![task("1", "A", true)]);

        assert!(board.tasks()[0].completed);
    }

    #[test]
    fn test_refresh_follows_server_order() {
        let mut board = TaskBoard::with_tasks(vec![
            task("1", "A", false),
            task("2", "B", false),
        ]);

        board.refresh(vec![task("2", "B", false), task("1", "A", false)]);

        let ids: Vec<&str> = board.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut board = TaskBoard::with_tasks(vec![task("1", "A", true)]);
        let server = vec![task("1", "A", false), task("2", "B", false)];

        board.refresh(server.clone());
        let first = board.tasks().to_vec();
        board.refresh(server);

        assert_eq!(board.tasks(), first.as_slice());
    }

    #[test]
    fn test_refresh_with_empty_server_list_clears_board() {
        let mut board = TaskBoard::with_tasks(vec![task("1", "A", true)]);

        board.refresh(Vec::new());

        assert!(board.is_empty());
        assert_eq!(board.progress(), 0.0);
    }

    #[test]
    fn test_refresh_converges_when_stale_response_arrives_late() {
        // Two overlapping refreshes completing out of order still land on
        // the same fixed point: the sticky rule is re-applied per pass.
        let mut board = TaskBoard::with_tasks(vec![task("1", "A", true)]);

        let fresh = vec![task("1", "A", true), task("2", "B", false)];
        let stale = vec![task("1", "A", false), task("2", "B", false)];

        board.refresh(fresh.clone());
        board.refresh(stale);

        assert_eq!(
            board.tasks(),
            &[task("1", "A", true), task("2", "B", false)]
        );
    }

    #[test]
    fn test_toggle_flips_only_the_matching_task() {
        let mut board = TaskBoard::with_tasks(vec![
            task("1", "A", false),
            task("2", "B", false),
        ]);

        let outcome = board.toggle("2");

        assert_eq!(outcome, Some(ToggleOutcome::Completed));
        assert_eq!(
            board.tasks(),
            &[task("1", "A", false), task("2", "B", true)]
        );
    }

    #[test]
    fn test_toggle_is_symmetric() {
        let mut board = TaskBoard::with_tasks(vec![task("1", "A", false)]);

        assert_eq!(board.toggle("1"), Some(ToggleOutcome::Completed));
        assert_eq!(board.toggle("1"), Some(ToggleOutcome::Reopened));
        assert!(!board.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_a_silent_noop() {
        let mut board = TaskBoard::with_tasks(vec![task("1", "A", false)]);
        let before = board.tasks().to_vec();

        assert_eq!(board.toggle("missing"), None);
        assert_eq!(board.tasks(), before.as_slice());
    }

    #[test]
    fn test_completed_count_and_progress() {
        let mut board = TaskBoard::with_tasks(vec![
            task("1", "A", true),
            task("2", "B", false),
            task("3", "C", false),
            task("4", "D", true),
        ]);

        assert_eq!(board.completed_count(), 2);
        assert_eq!(board.progress(), 0.5);
        assert!(!board.all_done());

        board.toggle("2");
        board.toggle("3");
        assert!(board.all_done());
        assert_eq!(board.progress(), 1.0);
    }

    #[test]
    fn test_progress_empty_board_is_zero_not_nan() {
        let board = TaskBoard::new();
        assert_eq!(board.progress(), 0.0);
        assert!(!board.progress().is_nan());
        assert!(!board.all_done());
    }
}
