//! The async seam to the embedded editor process.
//!
//! `NvimApi` returns futures instead of being an async trait so it stays
//! object-safe and callers can spawn the round-trips however they want.
//! The mock in `api::mock` scripts eval results for tests.

use futures::future::BoxFuture;
use plume_core::NvimError;
use serde_json::Value;

/// Request/response surface of the editor process.
///
/// Both calls are single round-trips with no timeout or retry; transport
/// failures surface to the caller unchanged.
pub trait NvimApi: Send + Sync {
    /// Evaluate a VimL expression and return its value.
    fn eval(&self, expression: &str) -> BoxFuture<'static, Result<Value, NvimError>>;

    /// Run an ex command.
    fn command(&self, command: &str) -> BoxFuture<'static, Result<(), NvimError>>;
}

#[cfg(test)]
pub mod mock {
    //! Scriptable editor stub for tests.

    use super::*;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Mock editor that records calls and serves scripted eval results.
    pub struct MockNvim {
        /// Eval results by expression. Unscripted expressions eval to 0.
        pub eval_results: Arc<Mutex<HashMap<String, Value>>>,

        /// Every eval expression received, in order.
        pub evals: Arc<Mutex<Vec<String>>>,

        /// Every ex command received, in order.
        pub commands: Arc<Mutex<Vec<String>>>,

        /// When set, all calls fail with a channel error.
        pub fail: Arc<Mutex<bool>>,
    }

    impl MockNvim {
        /// Create a mock with no scripted results.
        pub fn new() -> Self {
            Self {
                eval_results: Arc::new(Mutex::new(HashMap::new())),
                evals: Arc::new(Mutex::new(Vec::new())),
                commands: Arc::new(Mutex::new(Vec::new())),
                fail: Arc::new(Mutex::new(false)),
            }
        }

        /// Script the result of an eval expression.
        pub fn with_eval_result(self, expression: impl Into<String>, value: Value) -> Self {
            self.eval_results.lock().insert(expression.into(), value);
            self
        }

        /// Make every call fail.
        pub fn with_failure(self) -> Self {
            *self.fail.lock() = true;
            self
        }
    }

    impl Default for MockNvim {
        fn default() -> Self {
            Self::new()
        }
    }

    impl NvimApi for MockNvim {
        fn eval(&self, expression: &str) -> BoxFuture<'static, Result<Value, NvimError>> {
            let expression = expression.to_string();
            let results = self.eval_results.clone();
            let evals = self.evals.clone();
            let fail = *self.fail.lock();

            Box::pin(async move {
                if fail {
                    return Err(NvimError::Channel("mock failure".to_string()));
                }
                evals.lock().push(expression.clone());
                Ok(results
                    .lock()
                    .get(&expression)
                    .cloned()
                    .unwrap_or(Value::from(0)))
            })
        }

        fn command(&self, command: &str) -> BoxFuture<'static, Result<(), NvimError>> {
            let command = command.to_string();
            let commands = self.commands.clone();
            let fail = *self.fail.lock();

            Box::pin(async move {
                if fail {
                    return Err(NvimError::Channel("mock failure".to_string()));
                }
                commands.lock().push(command);
                Ok(())
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockNvim;
    use super::*;

    #[tokio::test]
    async fn test_mock_scripted_eval() {
        let nvim = MockNvim::new().with_eval_result("1 + 2", Value::from(3));

        let value = nvim.eval("1 + 2").await.unwrap();
        assert_eq!(value, Value::from(3));

        // Unscripted expressions eval to 0
        let value = nvim.eval("g:undefined").await.unwrap();
        assert_eq!(value, Value::from(0));
    }

    #[tokio::test]
    async fn test_mock_records_commands() {
        let nvim = MockNvim::new();
        nvim.command("echo 'hi'").await.unwrap();
        assert_eq!(*nvim.commands.lock(), vec!["echo 'hi'".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_failure_mode() {
        let nvim = MockNvim::new().with_failure();
        assert!(nvim.eval("1").await.is_err());
        assert!(nvim.command("q").await.is_err());
    }
}
