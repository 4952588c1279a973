pub mod apply_session;
pub mod async_executor;
pub mod async_task_manager;

pub use apply_session::{ApplySession, ApplyTarget, WorkflowStep};
pub use async_executor::AsyncExecutor;
pub use async_task_manager::{
    outcome_slot, AsyncTask, AsyncTaskManager, OutcomeSlot, TaskOutcome, TaskResult,
};
