// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Long-running operations.
//!
//! Some operations take a long time to complete: creating a namespace,
//! deleting a namespace, or deleting a resource group. The request builders
//! for these operations return an [Operation][crate::model::Operation], which
//! must be polled until it completes. Most applications call `until_done()`
//! on the request builder. Applications that want to observe progress use
//! `poller()` and call [Poller::poll] in a loop.
//!
//! # Example
//! ```no_run
//! # use servicebus_admin::client::ServiceBusManagement;
//! # use servicebus_admin::lro::{Poller, PollingResult};
//! # async fn sample(client: &ServiceBusManagement) -> servicebus_admin::Result<()> {
//! let mut poller = client
//!     .delete_resource_group()
//!     .set_resource_group_name("my-resource-group")
//!     .poller();
//! while let Some(p) = poller.poll().await {
//!     match p {
//!         PollingResult::Completed(r) => return r,
//!         PollingResult::InProgress(name) => println!("in progress: {name:?}"),
//!         PollingResult::PollingError(e) => println!("transient error: {e}"),
//!     }
//!     tokio::time::sleep(std::time::Duration::from_millis(500)).await;
//! }
//! # Ok(()) }
//! ```

use crate::Result;
use crate::error::Error;
use crate::model::{Operation, OperationResult};
use crate::polling::backoff_policy::PollingBackoffPolicy;
use crate::polling::error_policy::PollingErrorPolicy;
use crate::polling::loop_state::LoopState;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

/// The result of polling a long-running operation.
#[derive(Debug)]
pub enum PollingResult<R> {
    /// The operation is still in progress. Carries the operation name, if
    /// the service returned one.
    InProgress(Option<String>),

    /// The operation completed, successfully or not, or the polling policy
    /// decided to stop.
    Completed(Result<R>),

    /// Polling failed, the polling error policy decided to keep polling.
    PollingError(Error),
}

/// Polls a long-running operation.
pub trait Poller<R>: Send {
    /// Makes one attempt to start or poll the operation.
    ///
    /// Returns `None` once a [PollingResult::Completed] was returned.
    fn poll(&mut self) -> impl Future<Output = Option<PollingResult<R>>> + Send;

    /// Polls the operation until it completes, sleeping between polls as
    /// the polling backoff policy dictates.
    fn until_done(self) -> impl Future<Output = Result<R>> + Send;
}

/// Creates a poller.
///
/// * `start` - a function that starts the operation.
/// * `query` - a function that queries the operation by name.
#[doc(hidden)]
pub fn new_poller<R, S, SF, Q, QF>(
    polling_error_policy: Arc<dyn PollingErrorPolicy>,
    polling_backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: S,
    query: Q,
) -> impl Poller<R>
where
    R: DeserializeOwned + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<Operation>> + Send + 'static,
    Q: Fn(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<Operation>> + Send + 'static,
{
    PollerImpl::new(polling_error_policy, polling_backoff_policy, start, query)
}

struct PollerImpl<R, S, Q> {
    error_policy: Arc<dyn PollingErrorPolicy>,
    backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: Option<S>,
    query: Q,
    operation: Option<String>,
    loop_start: Instant,
    attempt_count: u32,
    response: PhantomData<fn() -> R>,
}

impl<R, S, Q> PollerImpl<R, S, Q> {
    fn new(
        error_policy: Arc<dyn PollingErrorPolicy>,
        backoff_policy: Arc<dyn PollingBackoffPolicy>,
        start: S,
        query: Q,
    ) -> Self {
        Self {
            error_policy,
            backoff_policy,
            start: Some(start),
            query,
            operation: None,
            loop_start: Instant::now(),
            attempt_count: 0,
            response: PhantomData,
        }
    }
}

impl<R, S, SF, Q, QF> Poller<R> for PollerImpl<R, S, Q>
where
    R: DeserializeOwned + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<Operation>> + Send + 'static,
    Q: Fn(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<Operation>> + Send + 'static,
{
    async fn poll(&mut self) -> Option<PollingResult<R>> {
        if let Some(start) = self.start.take() {
            let result = start().await;
            let (name, poll) = handle_start(result);
            self.operation = name;
            return Some(poll);
        }
        if let Some(name) = self.operation.take() {
            self.attempt_count += 1;
            let result = (self.query)(name.clone()).await;
            let (name, poll) = handle_poll(
                self.error_policy.as_ref(),
                self.loop_start,
                self.attempt_count,
                name,
                result,
            );
            self.operation = name;
            return Some(poll);
        }
        None
    }

    async fn until_done(mut self) -> Result<R> {
        while let Some(p) = self.poll().await {
            match p {
                PollingResult::Completed(r) => return r,
                PollingResult::InProgress(_) => (),
                PollingResult::PollingError(e) => {
                    tracing::debug!("recoverable error polling long-running operation: {e}");
                }
            }
            let wait = self
                .backoff_policy
                .wait_period(self.loop_start, self.attempt_count + 1);
            tokio::time::sleep(wait).await;
        }
        // `poll()` only returns `None` after returning `Completed`.
        unreachable!("loop should exit via the `Completed` branch");
    }
}

fn handle_start<R>(result: Result<Operation>) -> (Option<String>, PollingResult<R>)
where
    R: DeserializeOwned,
{
    match result {
        Err(e) => (None, PollingResult::Completed(Err(e))),
        Ok(op) => handle_common(op),
    }
}

fn handle_poll<R>(
    error_policy: &dyn PollingErrorPolicy,
    loop_start: Instant,
    attempt_count: u32,
    operation_name: String,
    result: Result<Operation>,
) -> (Option<String>, PollingResult<R>)
where
    R: DeserializeOwned,
{
    match result {
        Err(e) => match error_policy.on_error(loop_start, attempt_count, e) {
            LoopState::Continue(e) => (Some(operation_name), PollingResult::PollingError(e)),
            LoopState::Exhausted(e) | LoopState::Permanent(e) => {
                (None, PollingResult::Completed(Err(e)))
            }
        },
        Ok(op) => match handle_common(op) {
            (name, PollingResult::InProgress(n)) => {
                match error_policy.on_in_progress(loop_start, attempt_count, &operation_name) {
                    None => (name, PollingResult::InProgress(n)),
                    Some(e) => (None, PollingResult::Completed(Err(e))),
                }
            }
            completed => completed,
        },
    }
}

fn handle_common<R>(op: Operation) -> (Option<String>, PollingResult<R>)
where
    R: DeserializeOwned,
{
    if !op.done {
        let name = (!op.name.is_empty()).then_some(op.name);
        if name.is_none() {
            let e = Error::deser("the service returned an in-progress operation without a name");
            return (None, PollingResult::Completed(Err(e)));
        }
        return (name.clone(), PollingResult::InProgress(name));
    }
    let result = match op.result {
        None => Err(Error::deser(
            "the service returned a completed operation without a result",
        )),
        Some(OperationResult::Error(status)) => Err(Error::service(status)),
        Some(OperationResult::Response(value)) => {
            serde_json::from_value::<R>(value).map_err(Error::deser)
        }
    };
    (None, PollingResult::Completed(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::{Code, Status};
    use crate::model::Namespace;
    use crate::polling::error_policy::{
        AlwaysContinue, LimitedAttemptCount, PollingErrorPolicyExt, TransientErrors,
    };
    use crate::polling::exponential_backoff::ExponentialBackoffBuilder;
    use std::sync::Mutex;
    use std::time::Duration;

    fn test_backoff() -> Arc<dyn PollingBackoffPolicy> {
        Arc::new(
            ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_millis(1))
                .with_maximum_delay(Duration::from_millis(1))
                .build()
                .expect("a valid backoff policy"),
        )
    }

    fn in_progress() -> Operation {
        Operation::new().set_name("op-123")
    }

    fn done_namespace() -> Operation {
        let ns = Namespace::new().set_name("ns").set_location("westus");
        Operation::completed(serde_json::to_value(ns).unwrap())
    }

    async fn no_polling(_: String) -> Result<Operation> {
        panic!("no polling expected")
    }

    fn permanent() -> Status {
        Status::default()
            .set_code(Code::PermissionDenied)
            .set_reason("AuthorizationFailed")
            .set_message("uh-oh")
    }

    #[tokio::test]
    async fn poll_basic_flow() {
        let start = || async { Ok(in_progress()) };
        let query = |_: String| async { Ok(done_namespace()) };
        let mut poller = new_poller::<Namespace, _, _, _, _>(
            Arc::new(TransientErrors),
            test_backoff(),
            start,
            query,
        );
        let p0 = poller.poll().await;
        assert!(
            matches!(p0, Some(PollingResult::InProgress(Some(ref n))) if n == "op-123"),
            "{p0:?}"
        );
        let p1 = poller.poll().await;
        assert!(
            matches!(p1, Some(PollingResult::Completed(Ok(ref ns))) if ns.name == "ns"),
            "{p1:?}"
        );
        let p2 = poller.poll().await;
        assert!(p2.is_none(), "{p2:?}");
    }

    #[tokio::test]
    async fn until_done_immediate() -> anyhow::Result<()> {
        let start = || async { Ok(Operation::completed(serde_json::Value::Null)) };
        let poller = new_poller::<(), _, _, _, _>(
            Arc::new(TransientErrors),
            test_backoff(),
            start,
            no_polling,
        );
        poller.until_done().await?;
        Ok(())
    }

    #[tokio::test]
    async fn until_done_with_transient() -> anyhow::Result<()> {
        let start = || async { Ok(in_progress()) };
        let count = Arc::new(Mutex::new(0));
        let query = move |name: String| {
            assert_eq!(name, "op-123");
            let attempt = {
                let mut guard = count.lock().unwrap();
                *guard += 1;
                *guard
            };
            async move {
                match attempt {
                    1 => Err(Error::service(Status::default().set_code(Code::Unavailable))),
                    2 => Ok(in_progress()),
                    _ => Ok(done_namespace()),
                }
            }
        };
        let got = new_poller::<Namespace, _, _, _, _>(
            Arc::new(TransientErrors),
            test_backoff(),
            start,
            query,
        )
        .until_done()
        .await?;
        assert_eq!(got.name, "ns");
        Ok(())
    }

    #[tokio::test]
    async fn until_done_error_on_start() {
        let start = || async { Err(Error::service(permanent())) };
        let got = new_poller::<Namespace, _, _, _, _>(
            Arc::new(AlwaysContinue),
            test_backoff(),
            start,
            no_polling,
        )
        .until_done()
        .await;
        assert!(
            matches!(got, Err(ref e) if e.status() == Some(&permanent())),
            "{got:?}"
        );
    }

    #[tokio::test]
    async fn until_done_error_on_done() {
        let start = || async { Ok(in_progress()) };
        let query = |_: String| async {
            Ok(Operation::new()
                .set_name("op-123")
                .set_done(true)
                .set_result(OperationResult::Error(permanent())))
        };
        let got = new_poller::<Namespace, _, _, _, _>(
            Arc::new(AlwaysContinue),
            test_backoff(),
            start,
            query,
        )
        .until_done()
        .await;
        assert!(
            matches!(got, Err(ref e) if e.status() == Some(&permanent())),
            "{got:?}"
        );
    }

    #[tokio::test]
    async fn until_done_permanent_polling_error() {
        let start = || async { Ok(in_progress()) };
        let query = |_: String| async { Err(Error::service(permanent())) };
        let got = new_poller::<Namespace, _, _, _, _>(
            Arc::new(TransientErrors),
            test_backoff(),
            start,
            query,
        )
        .until_done()
        .await;
        assert!(
            matches!(got, Err(ref e) if e.status() == Some(&permanent())),
            "{got:?}"
        );
    }

    #[tokio::test]
    async fn until_done_exhausted() {
        let start = || async { Ok(in_progress()) };
        let query = |_: String| async { Ok(in_progress()) };
        let got = new_poller::<Namespace, _, _, _, _>(
            Arc::new(LimitedAttemptCount::new(3)),
            test_backoff(),
            start,
            query,
        )
        .until_done()
        .await;
        assert!(matches!(got, Err(ref e) if e.is_exhausted()), "{got:?}");
    }

    #[tokio::test]
    async fn until_done_exhausted_on_errors() {
        let start = || async { Ok(in_progress()) };
        let query = |_: String| async { Err(Error::io("connection reset")) };
        let got = new_poller::<Namespace, _, _, _, _>(
            Arc::new(TransientErrors.with_attempt_limit(2)),
            test_backoff(),
            start,
            query,
        )
        .until_done()
        .await;
        assert!(matches!(got, Err(ref e) if e.is_io()), "{got:?}");
    }

    #[tokio::test]
    async fn bad_response() {
        let start = || async { Ok(Operation::completed(serde_json::json!({"name": 42}))) };
        let got = new_poller::<Namespace, _, _, _, _>(
            Arc::new(TransientErrors),
            test_backoff(),
            start,
            no_polling,
        )
        .until_done()
        .await;
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");
    }

    #[tokio::test]
    async fn missing_name() {
        let start = || async { Ok(Operation::new()) };
        let got = new_poller::<Namespace, _, _, _, _>(
            Arc::new(TransientErrors),
            test_backoff(),
            start,
            no_polling,
        )
        .until_done()
        .await;
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");
    }
}
