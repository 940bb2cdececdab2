use super::operation::Operation;
use super::output::Outcome;
use crate::di::UseCases;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Runs operations on a bounded pool of blocking threads.
///
/// Resolver calls cannot be cancelled, so the deadline only stops waiting:
/// a timed-out call reports `NOT_FOUND` and its thread is left to finish.
pub struct Executor {
    use_cases: Arc<UseCases>,
    timeout: Duration,
    permits: Arc<Semaphore>,
}

impl Executor {
    pub fn new(use_cases: Arc<UseCases>, timeout: Duration, max_concurrent: usize) -> Self {
        Self {
            use_cases,
            timeout,
            permits: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }

    pub async fn run(&self, operation: &Operation, input: String) -> Outcome {
        if !operation.uses_resolver() {
            let result = operation.execute(&self.use_cases, input.as_bytes());
            return Outcome::new(input, result);
        }

        let Ok(permit) = Arc::clone(&self.permits).acquire_owned().await else {
            return Outcome::failed(input, "INTERNAL", "Worker pool closed".to_string());
        };

        let use_cases = Arc::clone(&self.use_cases);
        let task_operation = operation.clone();
        let task_input = input.clone();
        // The permit lives as long as the thread, not as long as the wait.
        let task = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            task_operation.execute(&use_cases, task_input.as_bytes())
        });

        match tokio::time::timeout(self.timeout, task).await {
            Ok(Ok(result)) => Outcome::new(input, result),
            Ok(Err(e)) => {
                warn!(operation = operation.name(), error = %e, "Worker task failed");
                Outcome::failed(input, "INTERNAL", e.to_string())
            }
            Err(_) => {
                debug!(
                    operation = operation.name(),
                    input = %input,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Call timed out"
                );
                let message = format!("Timed out after {:?}", self.timeout);
                Outcome::failed(input, "NOT_FOUND", message)
            }
        }
    }

    /// Runs every input concurrently, bounded by the pool size. Outcomes keep
    /// input order and one failure never affects the others.
    pub async fn run_batch(&self, operation: &Operation, inputs: Vec<String>) -> Vec<Outcome> {
        join_all(inputs.into_iter().map(|input| self.run(operation, input))).await
    }
}
