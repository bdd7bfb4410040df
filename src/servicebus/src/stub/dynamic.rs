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

//! The dyn-compatible version of [super::ServiceBusManagement].

use crate::options::RequestOptions;
use crate::polling::backoff_policy::PollingBackoffPolicy;
use crate::polling::error_policy::PollingErrorPolicy;
use std::sync::Arc;

/// A dyn-compatible, crate-private version of [super::ServiceBusManagement].
#[async_trait::async_trait]
pub trait ServiceBusManagement: std::fmt::Debug + Send + Sync {
    async fn create_resource_group(
        &self,
        req: crate::model::CreateResourceGroupRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::ResourceGroup>;

    async fn get_resource_group(
        &self,
        req: crate::model::GetResourceGroupRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::ResourceGroup>;

    async fn delete_resource_group(
        &self,
        req: crate::model::DeleteResourceGroupRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation>;

    async fn create_namespace(
        &self,
        req: crate::model::CreateNamespaceRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation>;

    async fn get_namespace(
        &self,
        req: crate::model::GetNamespaceRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Namespace>;

    async fn list_namespaces(
        &self,
        req: crate::model::ListNamespacesRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::ListNamespacesResponse>;

    async fn delete_namespace(
        &self,
        req: crate::model::DeleteNamespaceRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation>;

    async fn create_or_update_topic(
        &self,
        req: crate::model::CreateOrUpdateTopicRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Topic>;

    async fn get_topic(
        &self,
        req: crate::model::GetTopicRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Topic>;

    async fn list_topics(
        &self,
        req: crate::model::ListTopicsRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::ListTopicsResponse>;

    async fn update_topic(
        &self,
        req: crate::model::UpdateTopicRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Topic>;

    async fn delete_topic(
        &self,
        req: crate::model::DeleteTopicRequest,
        options: RequestOptions,
    ) -> crate::Result<()>;

    async fn create_or_update_subscription(
        &self,
        req: crate::model::CreateOrUpdateSubscriptionRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Subscription>;

    async fn get_subscription(
        &self,
        req: crate::model::GetSubscriptionRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Subscription>;

    async fn list_subscriptions(
        &self,
        req: crate::model::ListSubscriptionsRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::ListSubscriptionsResponse>;

    async fn delete_subscription(
        &self,
        req: crate::model::DeleteSubscriptionRequest,
        options: RequestOptions,
    ) -> crate::Result<()>;

    async fn list_authorization_rules(
        &self,
        req: crate::model::ListAuthorizationRulesRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::ListAuthorizationRulesResponse>;

    async fn get_authorization_rule(
        &self,
        req: crate::model::GetAuthorizationRuleRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::AuthorizationRule>;

    async fn list_keys(
        &self,
        req: crate::model::ListKeysRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::AccessKeys>;

    async fn regenerate_keys(
        &self,
        req: crate::model::RegenerateKeysRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::AccessKeys>;

    async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation>;

    fn get_polling_error_policy(&self, options: &RequestOptions) -> Arc<dyn PollingErrorPolicy>;

    fn get_polling_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn PollingBackoffPolicy>;
}

/// All implementations of [super::ServiceBusManagement] also implement
/// [ServiceBusManagement].
#[async_trait::async_trait]
impl<T: super::ServiceBusManagement> ServiceBusManagement for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn create_resource_group(
        &self,
        req: crate::model::CreateResourceGroupRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::ResourceGroup> {
        T::create_resource_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_resource_group(
        &self,
        req: crate::model::GetResourceGroupRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::ResourceGroup> {
        T::get_resource_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_resource_group(
        &self,
        req: crate::model::DeleteResourceGroupRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        T::delete_resource_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_namespace(
        &self,
        req: crate::model::CreateNamespaceRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        T::create_namespace(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_namespace(
        &self,
        req: crate::model::GetNamespaceRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Namespace> {
        T::get_namespace(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_namespaces(
        &self,
        req: crate::model::ListNamespacesRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::ListNamespacesResponse> {
        T::list_namespaces(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_namespace(
        &self,
        req: crate::model::DeleteNamespaceRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        T::delete_namespace(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_or_update_topic(
        &self,
        req: crate::model::CreateOrUpdateTopicRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Topic> {
        T::create_or_update_topic(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_topic(
        &self,
        req: crate::model::GetTopicRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Topic> {
        T::get_topic(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_topics(
        &self,
        req: crate::model::ListTopicsRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::ListTopicsResponse> {
        T::list_topics(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_topic(
        &self,
        req: crate::model::UpdateTopicRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Topic> {
        T::update_topic(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_topic(
        &self,
        req: crate::model::DeleteTopicRequest,
        options: RequestOptions,
    ) -> crate::Result<()> {
        T::delete_topic(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_or_update_subscription(
        &self,
        req: crate::model::CreateOrUpdateSubscriptionRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Subscription> {
        T::create_or_update_subscription(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_subscription(
        &self,
        req: crate::model::GetSubscriptionRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Subscription> {
        T::get_subscription(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_subscriptions(
        &self,
        req: crate::model::ListSubscriptionsRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::ListSubscriptionsResponse> {
        T::list_subscriptions(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_subscription(
        &self,
        req: crate::model::DeleteSubscriptionRequest,
        options: RequestOptions,
    ) -> crate::Result<()> {
        T::delete_subscription(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_authorization_rules(
        &self,
        req: crate::model::ListAuthorizationRulesRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::ListAuthorizationRulesResponse> {
        T::list_authorization_rules(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_authorization_rule(
        &self,
        req: crate::model::GetAuthorizationRuleRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::AuthorizationRule> {
        T::get_authorization_rule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_keys(
        &self,
        req: crate::model::ListKeysRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::AccessKeys> {
        T::list_keys(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn regenerate_keys(
        &self,
        req: crate::model::RegenerateKeysRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::AccessKeys> {
        T::regenerate_keys(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: RequestOptions,
    ) -> crate::Result<crate::model::Operation> {
        T::get_operation(self, req, options).await
    }

    fn get_polling_error_policy(&self, options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
        T::get_polling_error_policy(self, options)
    }

    fn get_polling_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn PollingBackoffPolicy> {
        T::get_polling_backoff_policy(self, options)
    }
}
