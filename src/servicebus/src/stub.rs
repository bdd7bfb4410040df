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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to
//! test how their application works with different (and sometimes hard to
//! trigger) provider responses. The in-memory emulator in this workspace
//! also implements these traits.

pub mod dynamic;

use crate::options::RequestOptions;
use crate::polling::backoff_policy::PollingBackoffPolicy;
use crate::polling::error_policy::PollingErrorPolicy;
use std::sync::Arc;

/// Defines the trait used to implement [crate::client::ServiceBusManagement].
///
/// Application developers may need to implement this trait to mock
/// `client::ServiceBusManagement`. In other use-cases, application developers
/// only use `client::ServiceBusManagement` and need not be concerned with
/// this trait or its implementations.
///
/// The provider gains new operations routinely. Consequently, this trait
/// gains new methods too. To avoid breaking applications the trait provides a
/// default implementation of each method. These implementations panic, test
/// mocks only need to implement the methods used in the test.
pub trait ServiceBusManagement: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::ServiceBusManagement::create_resource_group].
    fn create_resource_group(
        &self,
        _req: crate::model::CreateResourceGroupRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::ResourceGroup>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::get_resource_group].
    fn get_resource_group(
        &self,
        _req: crate::model::GetResourceGroupRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::ResourceGroup>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::delete_resource_group].
    fn delete_resource_group(
        &self,
        _req: crate::model::DeleteResourceGroupRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Operation>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::create_namespace].
    fn create_namespace(
        &self,
        _req: crate::model::CreateNamespaceRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Operation>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::get_namespace].
    fn get_namespace(
        &self,
        _req: crate::model::GetNamespaceRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Namespace>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::list_namespaces].
    fn list_namespaces(
        &self,
        _req: crate::model::ListNamespacesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::ListNamespacesResponse>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::delete_namespace].
    fn delete_namespace(
        &self,
        _req: crate::model::DeleteNamespaceRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Operation>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::create_or_update_topic].
    fn create_or_update_topic(
        &self,
        _req: crate::model::CreateOrUpdateTopicRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Topic>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::get_topic].
    fn get_topic(
        &self,
        _req: crate::model::GetTopicRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Topic>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::list_topics].
    fn list_topics(
        &self,
        _req: crate::model::ListTopicsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::ListTopicsResponse>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::update_topic].
    fn update_topic(
        &self,
        _req: crate::model::UpdateTopicRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Topic>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::delete_topic].
    fn delete_topic(
        &self,
        _req: crate::model::DeleteTopicRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<()>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::create_or_update_subscription].
    fn create_or_update_subscription(
        &self,
        _req: crate::model::CreateOrUpdateSubscriptionRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Subscription>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::get_subscription].
    fn get_subscription(
        &self,
        _req: crate::model::GetSubscriptionRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Subscription>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::list_subscriptions].
    fn list_subscriptions(
        &self,
        _req: crate::model::ListSubscriptionsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::ListSubscriptionsResponse>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::delete_subscription].
    fn delete_subscription(
        &self,
        _req: crate::model::DeleteSubscriptionRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<()>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::list_authorization_rules].
    fn list_authorization_rules(
        &self,
        _req: crate::model::ListAuthorizationRulesRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::ListAuthorizationRulesResponse>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::get_authorization_rule].
    fn get_authorization_rule(
        &self,
        _req: crate::model::GetAuthorizationRuleRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::AuthorizationRule>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::list_keys].
    fn list_keys(
        &self,
        _req: crate::model::ListKeysRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::AccessKeys>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::regenerate_keys].
    fn regenerate_keys(
        &self,
        _req: crate::model::RegenerateKeysRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::AccessKeys>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::ServiceBusManagement::get_operation].
    fn get_operation(
        &self,
        _req: crate::model::GetOperationRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Operation>> + Send {
        unimplemented_stub()
    }

    /// Returns the polling error policy.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to
    /// verify it is called by your mocks.
    fn get_polling_error_policy(&self, options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
        crate::polling::default_error_policy(options)
    }

    /// Returns the polling backoff policy.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to
    /// verify it is called by your mocks.
    fn get_polling_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn PollingBackoffPolicy> {
        crate::polling::default_backoff_policy(options)
    }
}

async fn unimplemented_stub<T: Send>() -> crate::Result<T> {
    unimplemented!(concat!(
        "to prevent breaking changes as the provider gains new operations, the ",
        "stub traits provide default implementations of each method. The REST ",
        "transport and the emulator override all methods. The only expected ",
        "context for this error is test code mocking the client. If that is how ",
        "you got this error, verify that you have mocked all methods used in ",
        "your test."
    ));
}
