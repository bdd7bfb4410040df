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

//! Decorates a stub with tracing spans and error logs.

use crate::options::RequestOptions;
use crate::polling::backoff_policy::PollingBackoffPolicy;
use crate::polling::error_policy::PollingErrorPolicy;
use crate::Result;
use std::sync::Arc;

/// Implements a [ServiceBusManagement](super::stub::ServiceBusManagement)
/// decorator for logging and tracing.
///
/// Each call runs in an `info` span named after the operation, with the
/// request attached as a field. Failed calls emit an `error` event.
#[derive(Clone, Debug)]
pub struct ServiceBusManagement<T>
where
    T: super::stub::ServiceBusManagement + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> ServiceBusManagement<T>
where
    T: super::stub::ServiceBusManagement + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::ServiceBusManagement for ServiceBusManagement<T>
where
    T: super::stub::ServiceBusManagement + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn create_resource_group(
        &self,
        req: crate::model::CreateResourceGroupRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ResourceGroup> {
        self.inner.create_resource_group(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn get_resource_group(
        &self,
        req: crate::model::GetResourceGroupRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ResourceGroup> {
        self.inner.get_resource_group(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn delete_resource_group(
        &self,
        req: crate::model::DeleteResourceGroupRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Operation> {
        self.inner.delete_resource_group(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn create_namespace(
        &self,
        req: crate::model::CreateNamespaceRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Operation> {
        self.inner.create_namespace(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn get_namespace(
        &self,
        req: crate::model::GetNamespaceRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Namespace> {
        self.inner.get_namespace(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn list_namespaces(
        &self,
        req: crate::model::ListNamespacesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListNamespacesResponse> {
        self.inner.list_namespaces(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn delete_namespace(
        &self,
        req: crate::model::DeleteNamespaceRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Operation> {
        self.inner.delete_namespace(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn create_or_update_topic(
        &self,
        req: crate::model::CreateOrUpdateTopicRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Topic> {
        self.inner.create_or_update_topic(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn get_topic(
        &self,
        req: crate::model::GetTopicRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Topic> {
        self.inner.get_topic(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn list_topics(
        &self,
        req: crate::model::ListTopicsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListTopicsResponse> {
        self.inner.list_topics(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn update_topic(
        &self,
        req: crate::model::UpdateTopicRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Topic> {
        self.inner.update_topic(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn delete_topic(
        &self,
        req: crate::model::DeleteTopicRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner.delete_topic(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn create_or_update_subscription(
        &self,
        req: crate::model::CreateOrUpdateSubscriptionRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Subscription> {
        self.inner.create_or_update_subscription(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn get_subscription(
        &self,
        req: crate::model::GetSubscriptionRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Subscription> {
        self.inner.get_subscription(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn list_subscriptions(
        &self,
        req: crate::model::ListSubscriptionsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListSubscriptionsResponse> {
        self.inner.list_subscriptions(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn delete_subscription(
        &self,
        req: crate::model::DeleteSubscriptionRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner.delete_subscription(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn list_authorization_rules(
        &self,
        req: crate::model::ListAuthorizationRulesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListAuthorizationRulesResponse> {
        self.inner.list_authorization_rules(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn get_authorization_rule(
        &self,
        req: crate::model::GetAuthorizationRuleRequest,
        options: RequestOptions,
    ) -> Result<crate::model::AuthorizationRule> {
        self.inner.get_authorization_rule(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn list_keys(
        &self,
        req: crate::model::ListKeysRequest,
        options: RequestOptions,
    ) -> Result<crate::model::AccessKeys> {
        self.inner.list_keys(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn regenerate_keys(
        &self,
        req: crate::model::RegenerateKeysRequest,
        options: RequestOptions,
    ) -> Result<crate::model::AccessKeys> {
        self.inner.regenerate_keys(req, options).await
    }

    #[tracing::instrument(level = "info", skip_all, fields(request = ?req), err)]
    async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Operation> {
        self.inner.get_operation(req, options).await
    }

    fn get_polling_error_policy(&self, options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
        self.inner.get_polling_error_policy(options)
    }

    fn get_polling_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn PollingBackoffPolicy> {
        self.inner.get_polling_backoff_policy(options)
    }
}
