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

//! The client for the Service Bus management API.

use crate::client_builder::{ClientBuilder, ClientConfig};
use std::sync::Arc;

/// Implements a client for the Service Bus management API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// use servicebus_admin::client::ServiceBusManagement;
/// let client = ServiceBusManagement::builder().build().await?;
/// let topic = client
///     .get_topic()
///     .set_resource_group_name("my-resource-group")
///     .set_namespace_name("my-namespace")
///     .set_topic_name("my-topic")
///     .send()
///     .await?;
/// println!("topic = {topic:?}");
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Manages resource groups and the Service Bus resources they contain:
/// namespaces, topics, subscriptions and namespace authorization rules.
/// Creating or deleting resource groups and namespaces are long-running
/// operations, use the `poller()` or `until_done()` functions on the request
/// builders to wait for them.
///
/// # Configuration
///
/// To configure `ServiceBusManagement` use the `with_*` methods in the type
/// returned by [builder()][ServiceBusManagement::builder]. The default
/// configuration should work for most applications. Common configuration
/// changes include
///
/// * [with_endpoint()]: by default this client uses the global Resource
///   Manager endpoint (`https://management.azure.com`). Applications using
///   sovereign clouds or emulators may need to override this default.
/// * [with_credentials()]: by default this client loads credentials from the
///   environment. Applications with custom authentication needs can override
///   this default.
///
/// [with_endpoint()]: super::client_builder::ClientBuilder::with_endpoint
/// [with_credentials()]: super::client_builder::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `ServiceBusManagement` holds a connection pool internally, it is advised
/// to create one and then reuse it. You do not need to wrap
/// `ServiceBusManagement` in an [Rc](std::rc::Rc) or [Arc] to reuse it,
/// because it already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct ServiceBusManagement {
    inner: Arc<dyn super::stub::dynamic::ServiceBusManagement>,
}

impl ServiceBusManagement {
    /// Returns a builder for [ServiceBusManagement].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use servicebus_admin::client::ServiceBusManagement;
    /// let client = ServiceBusManagement::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior, and to use the in-memory emulator.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ServiceBusManagement + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(config: ClientConfig) -> crate::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: ClientConfig,
    ) -> crate::client_builder::Result<Arc<dyn super::stub::dynamic::ServiceBusManagement>> {
        if conf.tracing {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: ClientConfig,
    ) -> crate::client_builder::Result<impl super::stub::ServiceBusManagement> {
        super::transport::ServiceBusManagement::new(conf).await
    }

    async fn build_with_tracing(
        conf: ClientConfig,
    ) -> crate::client_builder::Result<impl super::stub::ServiceBusManagement> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::ServiceBusManagement::new)
    }

    /// Creates or updates a resource group.
    pub fn create_resource_group(&self) -> super::builder::service_bus_management::CreateResourceGroup {
        super::builder::service_bus_management::CreateResourceGroup::new(self.inner.clone())
    }

    /// Gets a resource group.
    pub fn get_resource_group(&self) -> super::builder::service_bus_management::GetResourceGroup {
        super::builder::service_bus_management::GetResourceGroup::new(self.inner.clone())
    }

    /// Deletes a resource group, and all the resources it contains.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use `until_done()` on the returned builder to wait for completion.
    ///
    /// [long-running Operation]: crate::lro
    pub fn delete_resource_group(&self) -> super::builder::service_bus_management::DeleteResourceGroup {
        super::builder::service_bus_management::DeleteResourceGroup::new(self.inner.clone())
    }

    /// Creates or updates a namespace.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use `until_done()` on the returned builder to wait for completion.
    ///
    /// [long-running Operation]: crate::lro
    pub fn create_namespace(&self) -> super::builder::service_bus_management::CreateNamespace {
        super::builder::service_bus_management::CreateNamespace::new(self.inner.clone())
    }

    /// Gets a namespace.
    pub fn get_namespace(&self) -> super::builder::service_bus_management::GetNamespace {
        super::builder::service_bus_management::GetNamespace::new(self.inner.clone())
    }

    /// Lists the namespaces in a resource group.
    ///
    /// Use `by_item()` on the returned builder to iterate over all the pages.
    pub fn list_namespaces(&self) -> super::builder::service_bus_management::ListNamespaces {
        super::builder::service_bus_management::ListNamespaces::new(self.inner.clone())
    }

    /// Deletes a namespace, and all the topics and subscriptions it contains.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use `until_done()` on the returned builder to wait for completion.
    ///
    /// [long-running Operation]: crate::lro
    pub fn delete_namespace(&self) -> super::builder::service_bus_management::DeleteNamespace {
        super::builder::service_bus_management::DeleteNamespace::new(self.inner.clone())
    }

    /// Creates or updates a topic.
    pub fn create_or_update_topic(&self) -> super::builder::service_bus_management::CreateOrUpdateTopic {
        super::builder::service_bus_management::CreateOrUpdateTopic::new(self.inner.clone())
    }

    /// Gets a topic.
    pub fn get_topic(&self) -> super::builder::service_bus_management::GetTopic {
        super::builder::service_bus_management::GetTopic::new(self.inner.clone())
    }

    /// Lists the topics in a namespace.
    ///
    /// Use `by_item()` on the returned builder to iterate over all the pages.
    pub fn list_topics(&self) -> super::builder::service_bus_management::ListTopics {
        super::builder::service_bus_management::ListTopics::new(self.inner.clone())
    }

    /// Resizes a topic and attaches or detaches subscriptions, returning the refreshed topic.
    pub fn update_topic(&self) -> super::builder::service_bus_management::UpdateTopic {
        super::builder::service_bus_management::UpdateTopic::new(self.inner.clone())
    }

    /// Deletes a topic, and all its subscriptions.
    pub fn delete_topic(&self) -> super::builder::service_bus_management::DeleteTopic {
        super::builder::service_bus_management::DeleteTopic::new(self.inner.clone())
    }

    /// Creates or updates a subscription.
    pub fn create_or_update_subscription(&self) -> super::builder::service_bus_management::CreateOrUpdateSubscription {
        super::builder::service_bus_management::CreateOrUpdateSubscription::new(self.inner.clone())
    }

    /// Gets a subscription.
    pub fn get_subscription(&self) -> super::builder::service_bus_management::GetSubscription {
        super::builder::service_bus_management::GetSubscription::new(self.inner.clone())
    }

    /// Lists the subscriptions of a topic.
    ///
    /// Use `by_item()` on the returned builder to iterate over all the pages.
    pub fn list_subscriptions(&self) -> super::builder::service_bus_management::ListSubscriptions {
        super::builder::service_bus_management::ListSubscriptions::new(self.inner.clone())
    }

    /// Deletes a subscription.
    pub fn delete_subscription(&self) -> super::builder::service_bus_management::DeleteSubscription {
        super::builder::service_bus_management::DeleteSubscription::new(self.inner.clone())
    }

    /// Lists the authorization rules of a namespace.
    ///
    /// Use `by_item()` on the returned builder to iterate over all the pages.
    pub fn list_authorization_rules(&self) -> super::builder::service_bus_management::ListAuthorizationRules {
        super::builder::service_bus_management::ListAuthorizationRules::new(self.inner.clone())
    }

    /// Gets an authorization rule of a namespace.
    pub fn get_authorization_rule(&self) -> super::builder::service_bus_management::GetAuthorizationRule {
        super::builder::service_bus_management::GetAuthorizationRule::new(self.inner.clone())
    }

    /// Gets the keys and connection strings of a namespace authorization rule.
    pub fn list_keys(&self) -> super::builder::service_bus_management::ListKeys {
        super::builder::service_bus_management::ListKeys::new(self.inner.clone())
    }

    /// Regenerates the primary or secondary key of a namespace authorization rule.
    pub fn regenerate_keys(&self) -> super::builder::service_bus_management::RegenerateKeys {
        super::builder::service_bus_management::RegenerateKeys::new(self.inner.clone())
    }

    /// Polls a long-running operation.
    pub fn get_operation(&self) -> super::builder::service_bus_management::GetOperation {
        super::builder::service_bus_management::GetOperation::new(self.inner.clone())
    }
}
