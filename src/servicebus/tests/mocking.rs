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

#[cfg(test)]
mod mocking {
    use mockall::Sequence;
    use servicebus_admin::client::ServiceBusManagement;
    use servicebus_admin::error::Error;
    use servicebus_admin::error::rpc::{Code, Status};
    use servicebus_admin::model::{Operation, OperationResult};
    use servicebus_admin::options::RequestOptionsBuilder;
    use servicebus_admin::polling::error_policy::{AlwaysContinue, PollingErrorPolicyExt};
    use servicebus_admin::polling::exponential_backoff::ExponentialBackoffBuilder;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        ServiceBusManagement {}
        impl servicebus_admin::stub::ServiceBusManagement for ServiceBusManagement {
            async fn get_topic(&self, req: servicebus_admin::model::GetTopicRequest, _options: servicebus_admin::options::RequestOptions) -> servicebus_admin::Result<servicebus_admin::model::Topic>;
            async fn create_namespace(&self, req: servicebus_admin::model::CreateNamespaceRequest, _options: servicebus_admin::options::RequestOptions) -> servicebus_admin::Result<Operation>;
            async fn get_operation(&self, req: servicebus_admin::model::GetOperationRequest, _options: servicebus_admin::options::RequestOptions) -> servicebus_admin::Result<Operation>;
        }
    }

    fn fast_backoff() -> Result<servicebus_admin::polling::exponential_backoff::ExponentialBackoff> {
        Ok(ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .build()?)
    }

    fn unavailable() -> Error {
        Error::service(
            Status::default()
                .set_code(Code::Unavailable)
                .set_message("try-again"),
        )
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn send_forwards_request() -> Result<()> {
        let mut mock = MockServiceBusManagement::new();
        mock.expect_get_topic()
            .withf(|r, _| {
                r.resource_group_name == "rg" && r.namespace_name == "ns" && r.topic_name == "t"
            })
            .return_once(|_, _| Err(unavailable()));

        let client = ServiceBusManagement::from_stub(mock);
        let response = client
            .get_topic()
            .set_resource_group_name("rg")
            .set_namespace_name("ns")
            .set_topic_name("t")
            .send()
            .await;
        let err = response.unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn until_done_polls_operation() -> Result<()> {
        let mut seq = Sequence::new();
        let mut mock = MockServiceBusManagement::new();
        mock.expect_create_namespace()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Operation::new().set_name("op-1")));
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.name == "op-1")
            .returning(|_, _| Err(unavailable()));
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Operation::new().set_name("op-1")));
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Operation::completed(serde_json::json!({
                    "name": "ns",
                    "properties": {"provisioningState": "Succeeded"}
                })))
            });

        let client = ServiceBusManagement::from_stub(mock);
        let namespace = client
            .create_namespace()
            .set_resource_group_name("rg")
            .set_namespace_name("ns")
            .with_polling_backoff_policy(fast_backoff()?)
            .until_done()
            .await?;
        assert_eq!(namespace.name, "ns");
        assert_eq!(namespace.provisioning_state(), "Succeeded");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn until_done_reports_failure() -> Result<()> {
        let mut mock = MockServiceBusManagement::new();
        mock.expect_create_namespace().return_once(|_, _| {
            Ok(Operation::new().set_done(true).set_result(OperationResult::Error(
                Status::default()
                    .set_code(Code::AlreadyExists)
                    .set_reason("Conflict"),
            )))
        });

        let client = ServiceBusManagement::from_stub(mock);
        let err = client
            .create_namespace()
            .set_resource_group_name("rg")
            .set_namespace_name("ns")
            .until_done()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.reason.as_str()), Some("Conflict"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn until_done_exhausted() -> Result<()> {
        let mut mock = MockServiceBusManagement::new();
        mock.expect_create_namespace()
            .return_once(|_, _| Ok(Operation::new().set_name("op-1")));
        mock.expect_get_operation()
            .times(3)
            .returning(|_, _| Ok(Operation::new().set_name("op-1")));

        let client = ServiceBusManagement::from_stub(mock);
        let err = client
            .create_namespace()
            .set_resource_group_name("rg")
            .set_namespace_name("ns")
            .with_polling_error_policy(AlwaysContinue.with_attempt_limit(3))
            .with_polling_backoff_policy(fast_backoff()?)
            .until_done()
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn tracing_decorator_forwards() -> Result<()> {
        let mut mock = MockServiceBusManagement::new();
        mock.expect_get_topic()
            .withf(|r, _| r.topic_name == "t")
            .return_once(|_, _| Ok(servicebus_admin::model::Topic::new().set_name("t")));

        let decorated = servicebus_admin::tracing::ServiceBusManagement::new(mock);
        let client = ServiceBusManagement::from_stub(decorated);
        let topic = client
            .get_topic()
            .set_resource_group_name("rg")
            .set_namespace_name("ns")
            .set_topic_name("t")
            .send()
            .await?;
        assert_eq!(topic.name, "t");
        Ok(())
    }
}
