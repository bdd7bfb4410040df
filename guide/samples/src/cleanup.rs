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

//! Delete the resources created by a sample, whether it succeeded or not.

use servicebus_admin::client::ServiceBusManagement;

/// The result of [ResourceGroupCleanup::run].
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// No resource group was recorded, nothing was deleted.
    NothingToCleanUp,
    /// The resource group was deleted.
    Deleted(String),
    /// The resource group did not exist.
    AlreadyGone(String),
    /// The delete failed. The error was logged.
    Failed(String),
}

/// Records the resource group created by a sample and deletes it at the end.
///
/// Deleting the resource group deletes everything in it. Record the group
/// once it is created, and call [run][ResourceGroupCleanup::run] after the
/// sample completes, successfully or not.
#[derive(Clone, Debug, Default)]
pub struct ResourceGroupCleanup {
    resource_group: Option<String>,
}

impl ResourceGroupCleanup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the name of the resource group to delete.
    pub fn record<T: Into<String>>(&mut self, resource_group: T) {
        self.resource_group = Some(resource_group.into());
    }

    /// The recorded resource group, if any.
    pub fn resource_group(&self) -> Option<&str> {
        self.resource_group.as_deref()
    }

    /// Deletes the recorded resource group and waits for the delete to
    /// complete.
    ///
    /// Never returns an error: a missing group is reported as
    /// [Outcome::AlreadyGone], other errors are logged.
    pub async fn run(self, client: &ServiceBusManagement) -> Outcome {
        let Some(name) = self.resource_group else {
            println!("Did not create any resources in Azure. No clean up is necessary");
            return Outcome::NothingToCleanUp;
        };
        println!("Deleting resource group: {name}");
        let result = client
            .delete_resource_group()
            .set_resource_group_name(&name)
            .until_done()
            .await;
        match result {
            Ok(()) => {
                println!("Deleted resource group: {name}");
                Outcome::Deleted(name)
            }
            Err(e) if e.is_not_found() => {
                tracing::info!("resource group {name} was already deleted");
                Outcome::AlreadyGone(name)
            }
            Err(e) => {
                tracing::error!("cannot delete resource group {name}: {e}");
                Outcome::Failed(name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use servicebus_admin::error::Error;
    use servicebus_admin::error::rpc::{Code, Status};
    use servicebus_admin::model::{DeleteResourceGroupRequest, Operation};
    use servicebus_admin::options::RequestOptions;
    use test_case::test_case;

    mockall::mock! {
        #[derive(Debug)]
        ServiceBusManagement {}
        impl servicebus_admin::stub::ServiceBusManagement for ServiceBusManagement {
            async fn delete_resource_group(&self, req: DeleteResourceGroupRequest, _options: RequestOptions) -> servicebus_admin::Result<Operation>;
        }
    }

    fn service_error(code: Code, http: u16) -> Error {
        Error::service_with_http_status(
            Status::default()
                .set_code(code)
                .set_reason("TestError")
                .set_message("simulated"),
            Some(http),
        )
    }

    #[tokio::test]
    async fn nothing_recorded() {
        let mock = MockServiceBusManagement::new();
        let client = ServiceBusManagement::from_stub(mock);
        let cleanup = ResourceGroupCleanup::new();
        assert_eq!(cleanup.resource_group(), None);
        assert_eq!(cleanup.run(&client).await, Outcome::NothingToCleanUp);
    }

    #[tokio::test]
    async fn deleted() {
        let mut mock = MockServiceBusManagement::new();
        mock.expect_delete_resource_group()
            .withf(|r, _| r.resource_group_name == "rg-test")
            .times(1)
            .returning(|_, _| Ok(Operation::completed(serde_json::Value::Null)));
        let client = ServiceBusManagement::from_stub(mock);
        let mut cleanup = ResourceGroupCleanup::new();
        cleanup.record("rg-test");
        assert_eq!(cleanup.resource_group(), Some("rg-test"));
        assert_eq!(
            cleanup.run(&client).await,
            Outcome::Deleted("rg-test".to_string())
        );
    }

    #[test_case(Code::NotFound, 404, Outcome::AlreadyGone("rg-test".to_string()))]
    #[test_case(Code::PermissionDenied, 403, Outcome::Failed("rg-test".to_string()))]
    #[test_case(Code::AlreadyExists, 409, Outcome::Failed("rg-test".to_string()))]
    #[tokio::test]
    async fn errors(code: Code, http: u16, want: Outcome) {
        let mut mock = MockServiceBusManagement::new();
        mock.expect_delete_resource_group()
            .times(1)
            .returning(move |_, _| Err(service_error(code, http)));
        let client = ServiceBusManagement::from_stub(mock);
        let mut cleanup = ResourceGroupCleanup::new();
        cleanup.record("rg-test");
        assert_eq!(cleanup.run(&client).await, want);
    }
}
