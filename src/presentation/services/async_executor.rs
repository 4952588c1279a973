use std::future::Future;
use std::sync::Arc;

/// Shared tokio runtime. Worker threads run whole operations through it;
/// the UI thread uses it only for quick one-shot queries.
pub struct AsyncExecutor {
    runtime: Arc<tokio::runtime::Runtime>,
}

impl AsyncExecutor {
    pub fn new() -> Self {
        Self {
            runtime: Arc::new(
                tokio::runtime::Runtime::new().expect("failed to build tokio runtime"),
            ),
        }
    }

    pub fn execute<F, T>(&self, future: F) -> T
    where
        F: Future<Output = T>,
    {
        self.runtime.block_on(future)
    }
}

impl Clone for AsyncExecutor {
    fn clone(&self) -> Self {
        Self {
            runtime: Arc::clone(&self.runtime),
        }
    }
}

impl Default for AsyncExecutor {
    fn default() -> Self {
        Self::new()
    }
}
