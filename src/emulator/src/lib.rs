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

//! An in-memory emulator of the Service Bus management service.
//!
//! The emulator implements [servicebus_admin::stub::ServiceBusManagement], use
//! it with [ServiceBusManagement::from_stub] to run code written against the
//! management client without an Azure subscription.
//!
//! The emulator enforces the same naming rules, parent/child relationships and
//! error codes as the service. Long-running operations complete immediately,
//! unless configured with [Emulator::with_polls_to_complete].
//!
//! # Example
//! ```
//! # async fn sample() -> anyhow::Result<()> {
//! use servicebus_admin::client::ServiceBusManagement;
//! use servicebus_admin::model::ResourceGroup;
//! use servicebus_emulator::Emulator;
//! let client = ServiceBusManagement::from_stub(Emulator::new());
//! let group = client
//!     .create_resource_group()
//!     .set_resource_group_name("my-resource-group")
//!     .set_resource_group(ResourceGroup::new().set_location("westus"))
//!     .send()
//!     .await?;
//! assert_eq!(group.provisioning_state(), "Succeeded");
//! # Ok(()) }
//! ```
//!
//! [ServiceBusManagement::from_stub]: servicebus_admin::client::ServiceBusManagement::from_stub

mod keys;
mod state;
mod validation;

use servicebus_admin::Result;
use servicebus_admin::model::*;
use servicebus_admin::options::RequestOptions;
use servicebus_admin::polling::backoff_policy::PollingBackoffPolicy;
use state::{Pending, State};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

const DEFAULT_SUBSCRIPTION_ID: &str = "00000000-0000-0000-0000-000000000000";
const DEFAULT_PAGE_SIZE: usize = 100;

/// An in-memory implementation of the management service.
///
/// Clones share the same resources.
#[derive(Clone, Debug)]
pub struct Emulator {
    state: Arc<Mutex<State>>,
    subscription_id: String,
    polls_to_complete: u32,
    page_size: usize,
}

impl Emulator {
    /// Creates an emulator without any resources.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::new(DEFAULT_SUBSCRIPTION_ID.to_string()))),
            subscription_id: DEFAULT_SUBSCRIPTION_ID.to_string(),
            polls_to_complete: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Changes the subscription id used in the resource ids.
    ///
    /// Discards any resources created before the call.
    pub fn with_subscription_id<T: Into<String>>(mut self, v: T) -> Self {
        self.subscription_id = v.into();
        self.state = Arc::new(Mutex::new(State::new(self.subscription_id.clone())));
        self
    }

    /// Long-running operations complete after this many polls.
    ///
    /// With the default, zero, the operations are done when they start.
    pub fn with_polls_to_complete(mut self, v: u32) -> Self {
        self.polls_to_complete = v;
        self
    }

    /// The maximum number of items in each page of a list operation.
    pub fn with_page_size(mut self, v: usize) -> Self {
        self.page_size = v.max(1);
        self
    }

    /// The subscription id used in the resource ids.
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn page<T>(&self, items: Vec<T>, token: &str, top: Option<i32>) -> Result<(Vec<T>, Option<String>)> {
        let size = match top {
            None => self.page_size,
            Some(n) if n > 0 => n as usize,
            Some(n) => {
                return Err(validation::invalid_argument(
                    "InvalidTop",
                    format!("the $top value ({n}) must be greater than zero"),
                ));
            }
        };
        let start = match token {
            "" => 0,
            t => t.parse::<usize>().map_err(|_| {
                validation::invalid_argument("InvalidPageToken", format!("cannot parse the page token '{t}'"))
            })?,
        };
        let total = items.len();
        let end = start.saturating_add(size).min(total);
        let next = (end < total).then(|| end.to_string());
        let page = items.into_iter().skip(start).take(end.saturating_sub(start)).collect();
        Ok((page, next))
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Polls the emulator without waiting.
#[derive(Debug)]
struct NoDelay;

impl PollingBackoffPolicy for NoDelay {
    fn wait_period(&self, _loop_start: Instant, _attempt_count: u32) -> Duration {
        Duration::from_millis(1)
    }
}

impl servicebus_admin::stub::ServiceBusManagement for Emulator {
    async fn create_resource_group(
        &self,
        req: CreateResourceGroupRequest,
        _options: RequestOptions,
    ) -> Result<ResourceGroup> {
        self.state()
            .create_resource_group(&req.resource_group_name, req.resource_group)
    }

    async fn get_resource_group(
        &self,
        req: GetResourceGroupRequest,
        _options: RequestOptions,
    ) -> Result<ResourceGroup> {
        self.state().get_resource_group(&req.resource_group_name)
    }

    async fn delete_resource_group(
        &self,
        req: DeleteResourceGroupRequest,
        _options: RequestOptions,
    ) -> Result<Operation> {
        let mut state = self.state();
        state.delete_resource_group(&req.resource_group_name)?;
        state.start_operation(self.polls_to_complete, Pending::Delete)
    }

    async fn create_namespace(
        &self,
        req: CreateNamespaceRequest,
        _options: RequestOptions,
    ) -> Result<Operation> {
        let mut state = self.state();
        let namespace = state.create_namespace(
            &req.resource_group_name,
            &req.namespace_name,
            req.namespace,
            self.polls_to_complete > 0,
        )?;
        let pending = Pending::CreateNamespace {
            resource_group: req.resource_group_name,
            namespace: namespace.name,
        };
        state.start_operation(self.polls_to_complete, pending)
    }

    async fn get_namespace(
        &self,
        req: GetNamespaceRequest,
        _options: RequestOptions,
    ) -> Result<Namespace> {
        self.state()
            .get_namespace(&req.resource_group_name, &req.namespace_name)
    }

    async fn list_namespaces(
        &self,
        req: ListNamespacesRequest,
        _options: RequestOptions,
    ) -> Result<ListNamespacesResponse> {
        let items = self.state().list_namespaces(&req.resource_group_name)?;
        let (items, next) = self.page(items, &req.page_token, None)?;
        let response = ListNamespacesResponse::new().set_value(items);
        Ok(match next {
            Some(n) => response.set_next_link(n),
            None => response,
        })
    }

    async fn delete_namespace(
        &self,
        req: DeleteNamespaceRequest,
        _options: RequestOptions,
    ) -> Result<Operation> {
        let mut state = self.state();
        state.delete_namespace(&req.resource_group_name, &req.namespace_name)?;
        state.start_operation(self.polls_to_complete, Pending::Delete)
    }

    async fn create_or_update_topic(
        &self,
        req: CreateOrUpdateTopicRequest,
        _options: RequestOptions,
    ) -> Result<Topic> {
        self.state().create_or_update_topic(
            &req.resource_group_name,
            &req.namespace_name,
            &req.topic_name,
            req.topic,
        )
    }

    async fn get_topic(&self, req: GetTopicRequest, _options: RequestOptions) -> Result<Topic> {
        self.state()
            .get_topic(&req.resource_group_name, &req.namespace_name, &req.topic_name)
    }

    async fn list_topics(
        &self,
        req: ListTopicsRequest,
        _options: RequestOptions,
    ) -> Result<ListTopicsResponse> {
        let items = self
            .state()
            .list_topics(&req.resource_group_name, &req.namespace_name)?;
        let (items, next) = self.page(items, &req.page_token, req.top)?;
        let response = ListTopicsResponse::new().set_value(items);
        Ok(match next {
            Some(n) => response.set_next_link(n),
            None => response,
        })
    }

    async fn update_topic(&self, req: UpdateTopicRequest, _options: RequestOptions) -> Result<Topic> {
        self.state().update_topic(
            &req.resource_group_name,
            &req.namespace_name,
            &req.topic_name,
            req.max_size_in_megabytes,
            req.subscriptions_to_add,
            req.subscriptions_to_remove,
        )
    }

    async fn delete_topic(&self, req: DeleteTopicRequest, _options: RequestOptions) -> Result<()> {
        self.state()
            .delete_topic(&req.resource_group_name, &req.namespace_name, &req.topic_name)
    }

    async fn create_or_update_subscription(
        &self,
        req: CreateOrUpdateSubscriptionRequest,
        _options: RequestOptions,
    ) -> Result<Subscription> {
        self.state().create_or_update_subscription(
            &req.resource_group_name,
            &req.namespace_name,
            &req.topic_name,
            &req.subscription_name,
            req.subscription,
        )
    }

    async fn get_subscription(
        &self,
        req: GetSubscriptionRequest,
        _options: RequestOptions,
    ) -> Result<Subscription> {
        self.state().get_subscription(
            &req.resource_group_name,
            &req.namespace_name,
            &req.topic_name,
            &req.subscription_name,
        )
    }

    async fn list_subscriptions(
        &self,
        req: ListSubscriptionsRequest,
        _options: RequestOptions,
    ) -> Result<ListSubscriptionsResponse> {
        let items = self.state().list_subscriptions(
            &req.resource_group_name,
            &req.namespace_name,
            &req.topic_name,
        )?;
        let (items, next) = self.page(items, &req.page_token, req.top)?;
        let response = ListSubscriptionsResponse::new().set_value(items);
        Ok(match next {
            Some(n) => response.set_next_link(n),
            None => response,
        })
    }

    async fn delete_subscription(
        &self,
        req: DeleteSubscriptionRequest,
        _options: RequestOptions,
    ) -> Result<()> {
        self.state().delete_subscription(
            &req.resource_group_name,
            &req.namespace_name,
            &req.topic_name,
            &req.subscription_name,
        )
    }

    async fn list_authorization_rules(
        &self,
        req: ListAuthorizationRulesRequest,
        _options: RequestOptions,
    ) -> Result<ListAuthorizationRulesResponse> {
        let items = self
            .state()
            .list_authorization_rules(&req.resource_group_name, &req.namespace_name)?;
        let (items, next) = self.page(items, &req.page_token, None)?;
        let response = ListAuthorizationRulesResponse::new().set_value(items);
        Ok(match next {
            Some(n) => response.set_next_link(n),
            None => response,
        })
    }

    async fn get_authorization_rule(
        &self,
        req: GetAuthorizationRuleRequest,
        _options: RequestOptions,
    ) -> Result<AuthorizationRule> {
        self.state().get_authorization_rule(
            &req.resource_group_name,
            &req.namespace_name,
            &req.authorization_rule_name,
        )
    }

    async fn list_keys(&self, req: ListKeysRequest, _options: RequestOptions) -> Result<AccessKeys> {
        self.state().list_keys(
            &req.resource_group_name,
            &req.namespace_name,
            &req.authorization_rule_name,
        )
    }

    async fn regenerate_keys(
        &self,
        req: RegenerateKeysRequest,
        _options: RequestOptions,
    ) -> Result<AccessKeys> {
        self.state().regenerate_keys(
            &req.resource_group_name,
            &req.namespace_name,
            &req.authorization_rule_name,
            req.parameters,
        )
    }

    async fn get_operation(
        &self,
        req: GetOperationRequest,
        _options: RequestOptions,
    ) -> Result<Operation> {
        self.state().poll_operation(&req.name)
    }

    fn get_polling_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn PollingBackoffPolicy> {
        options
            .polling_backoff_policy()
            .clone()
            .unwrap_or_else(|| Arc::new(NoDelay))
    }
}
