use crate::application::dto::StatusMessage;
use crate::domain::entities::ThemeKind;
use std::sync::{Arc, Mutex};

/// Result of one background operation, written by a worker thread into its
/// task slot and collected on the UI thread by `poll`.
#[derive(Debug, Clone)]
pub struct TaskOutcome {
    pub success: bool,
    pub message: StatusMessage,
    /// Shell theme asked for without the User Themes extension; the UI shows
    /// an install prompt instead of a status line.
    pub prerequisite_missing: bool,
}

impl TaskOutcome {
    pub fn ok(message: StatusMessage) -> Self {
        Self {
            success: true,
            message,
            prerequisite_missing: false,
        }
    }

    pub fn err(message: StatusMessage) -> Self {
        Self {
            success: false,
            message,
            prerequisite_missing: false,
        }
    }

    pub fn prerequisite(message: StatusMessage) -> Self {
        Self {
            success: false,
            message,
            prerequisite_missing: true,
        }
    }
}

pub type OutcomeSlot = Arc<Mutex<Option<TaskOutcome>>>;

pub fn outcome_slot() -> OutcomeSlot {
    Arc::new(Mutex::new(None))
}

pub enum AsyncTask {
    ApplyLayout {
        outcome: OutcomeSlot,
    },
    ApplyTheme {
        kind: ThemeKind,
        outcome: OutcomeSlot,
    },
    CreateBackup {
        outcome: OutcomeSlot,
    },
    RestoreBackup {
        outcome: OutcomeSlot,
    },
    ToggleExtension {
        uuid: String,
        enable: bool,
        outcome: OutcomeSlot,
    },
}

impl AsyncTask {
    fn kind_name(&self) -> &'static str {
        match self {
            AsyncTask::ApplyLayout { .. } => "ApplyLayout",
            AsyncTask::ApplyTheme { .. } => "ApplyTheme",
            AsyncTask::CreateBackup { .. } => "CreateBackup",
            AsyncTask::RestoreBackup { .. } => "RestoreBackup",
            AsyncTask::ToggleExtension { .. } => "ToggleExtension",
        }
    }
}

#[derive(Default)]
pub struct TaskResult {
    pub layout_completed: Option<TaskOutcome>,
    pub theme_completed: Option<(ThemeKind, TaskOutcome)>,
    pub backup_completed: Option<TaskOutcome>,
    pub restore_completed: Option<TaskOutcome>,
    pub toggle_completed: Option<(String, bool, TaskOutcome)>,
}

/// Tracks in-flight background tasks. Workers fill the outcome slots; the UI
/// thread polls every frame and reacts to whatever completed. Same-kind apply
/// tasks are never queued twice.
pub struct AsyncTaskManager {
    active_tasks: Vec<AsyncTask>,
}

impl AsyncTaskManager {
    pub fn new() -> Self {
        Self {
            active_tasks: Vec::new(),
        }
    }

    pub fn set_active_task(&mut self, task: AsyncTask) {
        if self.has_task_kind(task.kind_name()) {
            tracing::warn!("{} task is already running, ignoring duplicate", task.kind_name());
            return;
        }
        self.active_tasks.push(task);
    }

    pub fn has_task_kind(&self, kind_name: &str) -> bool {
        self.active_tasks
            .iter()
            .any(|task| task.kind_name() == kind_name)
    }

    pub fn poll(&mut self) -> TaskResult {
        let mut result = TaskResult::default();
        let mut tasks_to_keep = Vec::new();

        for task in self.active_tasks.drain(..) {
            let finished = match &task {
                AsyncTask::ApplyLayout { outcome }
                | AsyncTask::ApplyTheme { outcome, .. }
                | AsyncTask::CreateBackup { outcome }
                | AsyncTask::RestoreBackup { outcome }
                | AsyncTask::ToggleExtension { outcome, .. } => match outcome.try_lock() {
                    Ok(mut slot) => slot.take(),
                    Err(_) => None,
                },
            };

            match finished {
                Some(outcome) => match task {
                    AsyncTask::ApplyLayout { .. } => result.layout_completed = Some(outcome),
                    AsyncTask::ApplyTheme { kind, .. } => {
                        result.theme_completed = Some((kind, outcome))
                    }
                    AsyncTask::CreateBackup { .. } => result.backup_completed = Some(outcome),
                    AsyncTask::RestoreBackup { .. } => result.restore_completed = Some(outcome),
                    AsyncTask::ToggleExtension { uuid, enable, .. } => {
                        result.toggle_completed = Some((uuid, enable, outcome))
                    }
                },
                None => tasks_to_keep.push(task),
            }
        }

        self.active_tasks = tasks_to_keep;
        result
    }
}

impl Default for AsyncTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_apply_task_is_ignored() {
        let mut manager = AsyncTaskManager::new();
        let first = outcome_slot();
        let second = outcome_slot();

        manager.set_active_task(AsyncTask::ApplyLayout { outcome: first });
        manager.set_active_task(AsyncTask::ApplyLayout { outcome: second.clone() });
        assert!(manager.has_task_kind("ApplyLayout"));

        // Only the first slot is live: completing the second does nothing.
        *second.lock().unwrap() = Some(TaskOutcome::ok(StatusMessage::plain("success")));
        let result = manager.poll();
        assert!(result.layout_completed.is_none());
    }

    #[test]
    fn incomplete_task_is_kept_until_its_slot_fills() {
        let mut manager = AsyncTaskManager::new();
        let slot = outcome_slot();
        manager.set_active_task(AsyncTask::ApplyLayout { outcome: slot.clone() });

        assert!(manager.poll().layout_completed.is_none());
        assert!(manager.has_task_kind("ApplyLayout"));

        *slot.lock().unwrap() = Some(TaskOutcome::ok(StatusMessage::plain("success")));
        let result = manager.poll();
        assert!(result.layout_completed.expect("completed").success);
        assert!(!manager.has_task_kind("ApplyLayout"));
    }

    #[test]
    fn theme_completion_carries_its_kind() {
        let mut manager = AsyncTaskManager::new();
        let slot = outcome_slot();
        manager.set_active_task(AsyncTask::ApplyTheme {
            kind: ThemeKind::Gtk,
            outcome: slot.clone(),
        });

        *slot.lock().unwrap() = Some(TaskOutcome::ok(StatusMessage::plain("success_gtk")));
        let (kind, outcome) = manager.poll().theme_completed.expect("completed");
        assert_eq!(kind, ThemeKind::Gtk);
        assert_eq!(outcome.message.key, "success_gtk");
    }

    #[test]
    fn layout_and_theme_tasks_may_overlap() {
        let mut manager = AsyncTaskManager::new();
        manager.set_active_task(AsyncTask::ApplyLayout { outcome: outcome_slot() });
        manager.set_active_task(AsyncTask::ApplyTheme {
            kind: ThemeKind::Icon,
            outcome: outcome_slot(),
        });

        assert!(manager.has_task_kind("ApplyLayout"));
        assert!(manager.has_task_kind("ApplyTheme"));
    }
}
