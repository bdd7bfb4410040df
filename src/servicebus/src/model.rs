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

//! The data types used by the Service Bus management client.
//!
//! Resources serialize to the JSON shape used by Resource Manager:
//! `camelCase` field names with the resource attributes nested under
//! `properties`. Durations are sent as ISO 8601 strings, such as `PT10M`.

mod iso8601;

use crate::error::rpc::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// A resource group, the container for the Service Bus resources.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceGroup {
    /// The fully qualified resource id. Output only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The name of the resource group. Output only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The region of the resource group, e.g. `westus`.
    pub location: String,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ResourceGroupProperties>,
}

impl ResourceGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][ResourceGroup::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][ResourceGroup::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [location][ResourceGroup::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = v.into();
        self
    }

    /// Sets the value of [tags][ResourceGroup::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [properties][ResourceGroup::properties].
    pub fn set_properties<T: Into<ResourceGroupProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }

    /// The provisioning state, or an empty string if not known.
    pub fn provisioning_state(&self) -> &str {
        self.properties
            .as_ref()
            .map(|p| p.provisioning_state.as_str())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceGroupProperties {
    /// Output only. For example `Succeeded` or `Deleting`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provisioning_state: String,
}

impl ResourceGroupProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [provisioning_state][ResourceGroupProperties::provisioning_state].
    pub fn set_provisioning_state<T: Into<String>>(mut self, v: T) -> Self {
        self.provisioning_state = v.into();
        self
    }
}

/// A Service Bus namespace.
///
/// The namespace is the top-level container for messaging entities. Its name
/// is globally unique, it becomes part of the endpoint host name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Namespace {
    /// The fully qualified resource id. Output only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The name of the namespace. Output only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The region of the namespace, e.g. `westus`.
    pub location: String,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,

    /// The pricing tier. Topics require `Standard` or `Premium`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<NamespaceProperties>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][Namespace::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][Namespace::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [location][Namespace::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = v.into();
        self
    }

    /// Sets the value of [tags][Namespace::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [sku][Namespace::sku].
    pub fn set_sku<T: Into<Sku>>(mut self, v: T) -> Self {
        self.sku = Some(v.into());
        self
    }

    /// Sets the value of [properties][Namespace::properties].
    pub fn set_properties<T: Into<NamespaceProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }

    /// The provisioning state, or an empty string if not known.
    pub fn provisioning_state(&self) -> &str {
        self.properties
            .as_ref()
            .map(|p| p.provisioning_state.as_str())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NamespaceProperties {
    /// Output only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provisioning_state: String,

    /// Output only. For example `Active`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,

    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// The endpoint used by messaging clients. Output only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_bus_endpoint: String,

    /// Output only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub metric_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_redundant: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_local_auth: Option<bool>,
}

impl NamespaceProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [provisioning_state][NamespaceProperties::provisioning_state].
    pub fn set_provisioning_state<T: Into<String>>(mut self, v: T) -> Self {
        self.provisioning_state = v.into();
        self
    }

    /// Sets the value of [status][NamespaceProperties::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [created_at][NamespaceProperties::created_at].
    pub fn set_created_at<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.created_at = Some(v.into());
        self
    }

    /// Sets the value of [updated_at][NamespaceProperties::updated_at].
    pub fn set_updated_at<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.updated_at = Some(v.into());
        self
    }

    /// Sets the value of [service_bus_endpoint][NamespaceProperties::service_bus_endpoint].
    pub fn set_service_bus_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.service_bus_endpoint = v.into();
        self
    }

    /// Sets the value of [metric_id][NamespaceProperties::metric_id].
    pub fn set_metric_id<T: Into<String>>(mut self, v: T) -> Self {
        self.metric_id = v.into();
        self
    }

    /// Sets the value of [zone_redundant][NamespaceProperties::zone_redundant].
    pub fn set_zone_redundant(mut self, v: bool) -> Self {
        self.zone_redundant = Some(v);
        self
    }

    /// Sets the value of [disable_local_auth][NamespaceProperties::disable_local_auth].
    pub fn set_disable_local_auth(mut self, v: bool) -> Self {
        self.disable_local_auth = Some(v);
        self
    }
}

/// The pricing tier of a namespace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Sku {
    pub name: SkuName,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<SkuTier>,

    /// Messaging units, only used with the `Premium` tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
}

impl Sku {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Sku::name].
    pub fn set_name<T: Into<SkuName>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [tier][Sku::tier].
    pub fn set_tier<T: Into<SkuTier>>(mut self, v: T) -> Self {
        self.tier = Some(v.into());
        self
    }

    /// Sets the value of [capacity][Sku::capacity].
    pub fn set_capacity(mut self, v: i32) -> Self {
        self.capacity = Some(v);
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SkuName {
    Basic,
    #[default]
    Standard,
    Premium,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SkuTier {
    Basic,
    #[default]
    Standard,
    Premium,
}

/// The status of a messaging entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EntityStatus {
    Active,
    Disabled,
    Restoring,
    SendDisabled,
    ReceiveDisabled,
    Creating,
    Deleting,
    Renaming,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Message counts by state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MessageCountDetails {
    pub active_message_count: i64,
    pub dead_letter_message_count: i64,
    pub scheduled_message_count: i64,
    pub transfer_message_count: i64,
    pub transfer_dead_letter_message_count: i64,
}

impl MessageCountDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [active_message_count][MessageCountDetails::active_message_count].
    pub fn set_active_message_count(mut self, v: i64) -> Self {
        self.active_message_count = v;
        self
    }

    /// Sets the value of [dead_letter_message_count][MessageCountDetails::dead_letter_message_count].
    pub fn set_dead_letter_message_count(mut self, v: i64) -> Self {
        self.dead_letter_message_count = v;
        self
    }

    /// Sets the value of [scheduled_message_count][MessageCountDetails::scheduled_message_count].
    pub fn set_scheduled_message_count(mut self, v: i64) -> Self {
        self.scheduled_message_count = v;
        self
    }
}

/// A topic, a publish-subscribe channel within a namespace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Topic {
    /// The fully qualified resource id. Output only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The name of the topic. Output only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    pub properties: TopicProperties,
}

impl Topic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][Topic::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][Topic::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [properties][Topic::properties].
    pub fn set_properties<T: Into<TopicProperties>>(mut self, v: T) -> Self {
        self.properties = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TopicProperties {
    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<i64>,

    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessed_at: Option<DateTime<Utc>>,

    /// The number of subscriptions attached to the topic. Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_count: Option<i32>,

    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_details: Option<MessageCountDetails>,

    #[serde(skip_serializing_if = "Option::is_none", with = "iso8601::option")]
    pub default_message_time_to_live: Option<Duration>,

    /// The maximum size of the topic, in megabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size_in_megabytes: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_duplicate_detection: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", with = "iso8601::option")]
    pub duplicate_detection_history_time_window: Option<Duration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_batched_operations: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_ordering: Option<bool>,

    /// The topic is deleted after being idle for this long.
    #[serde(skip_serializing_if = "Option::is_none", with = "iso8601::option")]
    pub auto_delete_on_idle: Option<Duration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_partitioning: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_express: Option<bool>,
}

impl TopicProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [size_in_bytes][TopicProperties::size_in_bytes].
    pub fn set_size_in_bytes(mut self, v: i64) -> Self {
        self.size_in_bytes = Some(v);
        self
    }

    /// Sets the value of [created_at][TopicProperties::created_at].
    pub fn set_created_at<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.created_at = Some(v.into());
        self
    }

    /// Sets the value of [updated_at][TopicProperties::updated_at].
    pub fn set_updated_at<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.updated_at = Some(v.into());
        self
    }

    /// Sets the value of [accessed_at][TopicProperties::accessed_at].
    pub fn set_accessed_at<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.accessed_at = Some(v.into());
        self
    }

    /// Sets the value of [subscription_count][TopicProperties::subscription_count].
    pub fn set_subscription_count(mut self, v: i32) -> Self {
        self.subscription_count = Some(v);
        self
    }

    /// Sets the value of [count_details][TopicProperties::count_details].
    pub fn set_count_details<T: Into<MessageCountDetails>>(mut self, v: T) -> Self {
        self.count_details = Some(v.into());
        self
    }

    /// Sets the value of [default_message_time_to_live][TopicProperties::default_message_time_to_live].
    pub fn set_default_message_time_to_live<T: Into<Duration>>(mut self, v: T) -> Self {
        self.default_message_time_to_live = Some(v.into());
        self
    }

    /// Sets the value of [max_size_in_megabytes][TopicProperties::max_size_in_megabytes].
    pub fn set_max_size_in_megabytes(mut self, v: i32) -> Self {
        self.max_size_in_megabytes = Some(v);
        self
    }

    /// Sets the value of [requires_duplicate_detection][TopicProperties::requires_duplicate_detection].
    pub fn set_requires_duplicate_detection(mut self, v: bool) -> Self {
        self.requires_duplicate_detection = Some(v);
        self
    }

    /// Sets the value of [duplicate_detection_history_time_window][TopicProperties::duplicate_detection_history_time_window].
    pub fn set_duplicate_detection_history_time_window<T: Into<Duration>>(mut self, v: T) -> Self {
        self.duplicate_detection_history_time_window = Some(v.into());
        self
    }

    /// Sets the value of [enable_batched_operations][TopicProperties::enable_batched_operations].
    pub fn set_enable_batched_operations(mut self, v: bool) -> Self {
        self.enable_batched_operations = Some(v);
        self
    }

    /// Sets the value of [status][TopicProperties::status].
    pub fn set_status<T: Into<EntityStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [support_ordering][TopicProperties::support_ordering].
    pub fn set_support_ordering(mut self, v: bool) -> Self {
        self.support_ordering = Some(v);
        self
    }

    /// Sets the value of [auto_delete_on_idle][TopicProperties::auto_delete_on_idle].
    pub fn set_auto_delete_on_idle<T: Into<Duration>>(mut self, v: T) -> Self {
        self.auto_delete_on_idle = Some(v.into());
        self
    }

    /// Sets the value of [enable_partitioning][TopicProperties::enable_partitioning].
    pub fn set_enable_partitioning(mut self, v: bool) -> Self {
        self.enable_partitioning = Some(v);
        self
    }

    /// Sets the value of [enable_express][TopicProperties::enable_express].
    pub fn set_enable_express(mut self, v: bool) -> Self {
        self.enable_express = Some(v);
        self
    }
}

/// A subscription, a named consumer view over the messages of a topic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Subscription {
    /// The fully qualified resource id. Output only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The name of the subscription.
    ///
    /// Only used by [UpdateTopicRequest], elsewhere the name is part of the
    /// request path.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    pub properties: SubscriptionProperties,
}

impl Subscription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][Subscription::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][Subscription::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [properties][Subscription::properties].
    pub fn set_properties<T: Into<SubscriptionProperties>>(mut self, v: T) -> Self {
        self.properties = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SubscriptionProperties {
    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_count: Option<i64>,

    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessed_at: Option<DateTime<Utc>>,

    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_details: Option<MessageCountDetails>,

    #[serde(skip_serializing_if = "Option::is_none", with = "iso8601::option")]
    pub lock_duration: Option<Duration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_session: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", with = "iso8601::option")]
    pub default_message_time_to_live: Option<Duration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dead_lettering_on_filter_evaluation_exceptions: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dead_lettering_on_message_expiration: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", with = "iso8601::option")]
    pub duplicate_detection_history_time_window: Option<Duration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delivery_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_batched_operations: Option<bool>,

    /// The subscription is deleted after being idle for this long.
    #[serde(skip_serializing_if = "Option::is_none", with = "iso8601::option")]
    pub auto_delete_on_idle: Option<Duration>,

    /// The name of a queue or topic receiving the messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_to: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_dead_lettered_messages_to: Option<String>,
}

impl SubscriptionProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [message_count][SubscriptionProperties::message_count].
    pub fn set_message_count(mut self, v: i64) -> Self {
        self.message_count = Some(v);
        self
    }

    /// Sets the value of [created_at][SubscriptionProperties::created_at].
    pub fn set_created_at<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.created_at = Some(v.into());
        self
    }

    /// Sets the value of [accessed_at][SubscriptionProperties::accessed_at].
    pub fn set_accessed_at<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.accessed_at = Some(v.into());
        self
    }

    /// Sets the value of [updated_at][SubscriptionProperties::updated_at].
    pub fn set_updated_at<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.updated_at = Some(v.into());
        self
    }

    /// Sets the value of [count_details][SubscriptionProperties::count_details].
    pub fn set_count_details<T: Into<MessageCountDetails>>(mut self, v: T) -> Self {
        self.count_details = Some(v.into());
        self
    }

    /// Sets the value of [lock_duration][SubscriptionProperties::lock_duration].
    pub fn set_lock_duration<T: Into<Duration>>(mut self, v: T) -> Self {
        self.lock_duration = Some(v.into());
        self
    }

    /// Sets the value of [requires_session][SubscriptionProperties::requires_session].
    pub fn set_requires_session(mut self, v: bool) -> Self {
        self.requires_session = Some(v);
        self
    }

    /// Sets the value of [default_message_time_to_live][SubscriptionProperties::default_message_time_to_live].
    pub fn set_default_message_time_to_live<T: Into<Duration>>(mut self, v: T) -> Self {
        self.default_message_time_to_live = Some(v.into());
        self
    }

    /// Sets the value of [dead_lettering_on_filter_evaluation_exceptions][SubscriptionProperties::dead_lettering_on_filter_evaluation_exceptions].
    pub fn set_dead_lettering_on_filter_evaluation_exceptions(mut self, v: bool) -> Self {
        self.dead_lettering_on_filter_evaluation_exceptions = Some(v);
        self
    }

    /// Sets the value of [dead_lettering_on_message_expiration][SubscriptionProperties::dead_lettering_on_message_expiration].
    pub fn set_dead_lettering_on_message_expiration(mut self, v: bool) -> Self {
        self.dead_lettering_on_message_expiration = Some(v);
        self
    }

    /// Sets the value of [max_delivery_count][SubscriptionProperties::max_delivery_count].
    pub fn set_max_delivery_count(mut self, v: i32) -> Self {
        self.max_delivery_count = Some(v);
        self
    }

    /// Sets the value of [status][SubscriptionProperties::status].
    pub fn set_status<T: Into<EntityStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [enable_batched_operations][SubscriptionProperties::enable_batched_operations].
    pub fn set_enable_batched_operations(mut self, v: bool) -> Self {
        self.enable_batched_operations = Some(v);
        self
    }

    /// Sets the value of [auto_delete_on_idle][SubscriptionProperties::auto_delete_on_idle].
    pub fn set_auto_delete_on_idle<T: Into<Duration>>(mut self, v: T) -> Self {
        self.auto_delete_on_idle = Some(v.into());
        self
    }

    /// Sets the value of [forward_to][SubscriptionProperties::forward_to].
    pub fn set_forward_to<T: Into<String>>(mut self, v: T) -> Self {
        self.forward_to = Some(v.into());
        self
    }
}

/// A named set of access rights, with keys that can be rotated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AuthorizationRule {
    /// The fully qualified resource id. Output only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The name of the rule, e.g. `RootManageSharedAccessKey`. Output only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    pub properties: AuthorizationRuleProperties,
}

impl AuthorizationRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][AuthorizationRule::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][AuthorizationRule::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [properties][AuthorizationRule::properties].
    pub fn set_properties<T: Into<AuthorizationRuleProperties>>(mut self, v: T) -> Self {
        self.properties = v.into();
        self
    }

    /// The rights granted by this rule.
    pub fn rights(&self) -> &[AccessRights] {
        &self.properties.rights
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AuthorizationRuleProperties {
    pub rights: Vec<AccessRights>,
}

impl AuthorizationRuleProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [rights][AuthorizationRuleProperties::rights].
    pub fn set_rights<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AccessRights>,
    {
        self.rights = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AccessRights {
    Manage,
    Send,
    Listen,
}

impl std::fmt::Display for AccessRights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Manage => "Manage",
            Self::Send => "Send",
            Self::Listen => "Listen",
        };
        f.write_str(name)
    }
}

/// The keys and connection strings of an authorization rule.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AccessKeys {
    pub key_name: String,
    pub primary_key: String,
    pub secondary_key: String,
    pub primary_connection_string: String,
    pub secondary_connection_string: String,
}

impl AccessKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [key_name][AccessKeys::key_name].
    pub fn set_key_name<T: Into<String>>(mut self, v: T) -> Self {
        self.key_name = v.into();
        self
    }

    /// Sets the value of [primary_key][AccessKeys::primary_key].
    pub fn set_primary_key<T: Into<String>>(mut self, v: T) -> Self {
        self.primary_key = v.into();
        self
    }

    /// Sets the value of [secondary_key][AccessKeys::secondary_key].
    pub fn set_secondary_key<T: Into<String>>(mut self, v: T) -> Self {
        self.secondary_key = v.into();
        self
    }

    /// Sets the value of [primary_connection_string][AccessKeys::primary_connection_string].
    pub fn set_primary_connection_string<T: Into<String>>(mut self, v: T) -> Self {
        self.primary_connection_string = v.into();
        self
    }

    /// Sets the value of [secondary_connection_string][AccessKeys::secondary_connection_string].
    pub fn set_secondary_connection_string<T: Into<String>>(mut self, v: T) -> Self {
        self.secondary_connection_string = v.into();
        self
    }
}

impl std::fmt::Debug for AccessKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessKeys")
            .field("key_name", &self.key_name)
            .field("primary_key", &"[censored]")
            .field("secondary_key", &"[censored]")
            .field("primary_connection_string", &"[censored]")
            .field("secondary_connection_string", &"[censored]")
            .finish()
    }
}

/// Selects the key to regenerate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum KeyType {
    #[default]
    PrimaryKey,
    SecondaryKey,
}

/// The body of a regenerate keys request.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RegenerateAccessKeyParameters {
    pub key_type: KeyType,

    /// An explicit value for the new key. The service generates one if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// The state of a long-running operation.
///
/// Creating namespaces and deleting resource groups or namespaces return an
/// operation. The client polls the operation, using its
/// [name][Operation::name], until [done][Operation::done] is set.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Operation {
    /// Identifies the operation in [GetOperationRequest].
    pub name: String,

    /// The operation completed, successfully or not.
    pub done: bool,

    /// The result, only set when the operation is done.
    pub result: Option<OperationResult>,
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [done][Operation::done].
    pub fn set_done(mut self, v: bool) -> Self {
        self.done = v;
        self
    }

    /// Sets the value of [result][Operation::result].
    pub fn set_result<T: Into<OperationResult>>(mut self, v: T) -> Self {
        self.result = Some(v.into());
        self
    }

    /// Creates an operation that already completed with `response`.
    ///
    /// Used by operations that complete synchronously, such as a resource
    /// group delete on a group that does not contain any resources.
    pub fn completed(response: serde_json::Value) -> Self {
        Self::new()
            .set_done(true)
            .set_result(OperationResult::Response(response))
    }
}

/// The result of a completed [Operation].
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum OperationResult {
    /// The operation failed.
    Error(Status),

    /// The operation succeeded. Holds the JSON representation of the
    /// resource, or `null` for delete operations.
    Response(serde_json::Value),
}

impl RegenerateAccessKeyParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [key_type][RegenerateAccessKeyParameters::key_type].
    pub fn set_key_type<T: Into<KeyType>>(mut self, v: T) -> Self {
        self.key_type = v.into();
        self
    }

    /// Sets the value of [key][RegenerateAccessKeyParameters::key].
    pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
        self.key = Some(v.into());
        self
    }
}

impl std::fmt::Debug for RegenerateAccessKeyParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegenerateAccessKeyParameters")
            .field("key_type", &self.key_type)
            .field("key", &self.key.as_ref().map(|_| "[censored]"))
            .finish()
    }
}

/// The request for creating or updating a resource group.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateResourceGroupRequest {
    pub resource_group_name: String,
    pub resource_group: Option<ResourceGroup>,
}

impl CreateResourceGroupRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][CreateResourceGroupRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [resource_group][CreateResourceGroupRequest::resource_group].
    pub fn set_resource_group<T: Into<ResourceGroup>>(mut self, v: T) -> Self {
        self.resource_group = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetResourceGroupRequest {
    pub resource_group_name: String,
}

impl GetResourceGroupRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][GetResourceGroupRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }
}

/// The request for deleting a resource group and all its resources.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteResourceGroupRequest {
    pub resource_group_name: String,
}

impl DeleteResourceGroupRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][DeleteResourceGroupRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }
}

/// The request for creating or updating a namespace.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateNamespaceRequest {
    pub resource_group_name: String,
    pub namespace_name: String,
    pub namespace: Option<Namespace>,
}

impl CreateNamespaceRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][CreateNamespaceRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][CreateNamespaceRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [namespace][CreateNamespaceRequest::namespace].
    pub fn set_namespace<T: Into<Namespace>>(mut self, v: T) -> Self {
        self.namespace = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetNamespaceRequest {
    pub resource_group_name: String,
    pub namespace_name: String,
}

impl GetNamespaceRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][GetNamespaceRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][GetNamespaceRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }
}

/// Lists the namespaces in a resource group.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListNamespacesRequest {
    pub resource_group_name: String,

    /// The `nextLink` returned by a previous page, empty for the first page.
    pub page_token: String,
}

impl ListNamespacesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][ListNamespacesRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [page_token][ListNamespacesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteNamespaceRequest {
    pub resource_group_name: String,
    pub namespace_name: String,
}

impl DeleteNamespaceRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][DeleteNamespaceRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][DeleteNamespaceRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateOrUpdateTopicRequest {
    pub resource_group_name: String,
    pub namespace_name: String,
    pub topic_name: String,
    pub topic: Option<Topic>,
}

impl CreateOrUpdateTopicRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][CreateOrUpdateTopicRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][CreateOrUpdateTopicRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [topic_name][CreateOrUpdateTopicRequest::topic_name].
    pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
        self.topic_name = v.into();
        self
    }

    /// Sets the value of [topic][CreateOrUpdateTopicRequest::topic].
    pub fn set_topic<T: Into<Topic>>(mut self, v: T) -> Self {
        self.topic = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetTopicRequest {
    pub resource_group_name: String,
    pub namespace_name: String,
    pub topic_name: String,
}

impl GetTopicRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][GetTopicRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][GetTopicRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [topic_name][GetTopicRequest::topic_name].
    pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
        self.topic_name = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListTopicsRequest {
    pub resource_group_name: String,
    pub namespace_name: String,

    /// The `nextLink` returned by a previous page, empty for the first page.
    pub page_token: String,

    /// The maximum number of items in each page.
    pub top: Option<i32>,
}

impl ListTopicsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][ListTopicsRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][ListTopicsRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [page_token][ListTopicsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [top][ListTopicsRequest::top].
    pub fn set_top(mut self, v: i32) -> Self {
        self.top = Some(v);
        self
    }
}

/// Deletes a topic and all its subscriptions.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteTopicRequest {
    pub resource_group_name: String,
    pub namespace_name: String,
    pub topic_name: String,
}

impl DeleteTopicRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][DeleteTopicRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][DeleteTopicRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [topic_name][DeleteTopicRequest::topic_name].
    pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
        self.topic_name = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateOrUpdateSubscriptionRequest {
    pub resource_group_name: String,
    pub namespace_name: String,
    pub topic_name: String,
    pub subscription_name: String,
    pub subscription: Option<Subscription>,
}

impl CreateOrUpdateSubscriptionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][CreateOrUpdateSubscriptionRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][CreateOrUpdateSubscriptionRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [topic_name][CreateOrUpdateSubscriptionRequest::topic_name].
    pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
        self.topic_name = v.into();
        self
    }

    /// Sets the value of [subscription_name][CreateOrUpdateSubscriptionRequest::subscription_name].
    pub fn set_subscription_name<T: Into<String>>(mut self, v: T) -> Self {
        self.subscription_name = v.into();
        self
    }

    /// Sets the value of [subscription][CreateOrUpdateSubscriptionRequest::subscription].
    pub fn set_subscription<T: Into<Subscription>>(mut self, v: T) -> Self {
        self.subscription = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetSubscriptionRequest {
    pub resource_group_name: String,
    pub namespace_name: String,
    pub topic_name: String,
    pub subscription_name: String,
}

impl GetSubscriptionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][GetSubscriptionRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][GetSubscriptionRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [topic_name][GetSubscriptionRequest::topic_name].
    pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
        self.topic_name = v.into();
        self
    }

    /// Sets the value of [subscription_name][GetSubscriptionRequest::subscription_name].
    pub fn set_subscription_name<T: Into<String>>(mut self, v: T) -> Self {
        self.subscription_name = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSubscriptionsRequest {
    pub resource_group_name: String,
    pub namespace_name: String,
    pub topic_name: String,

    /// The `nextLink` returned by a previous page, empty for the first page.
    pub page_token: String,

    /// The maximum number of items in each page.
    pub top: Option<i32>,
}

impl ListSubscriptionsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][ListSubscriptionsRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][ListSubscriptionsRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [topic_name][ListSubscriptionsRequest::topic_name].
    pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
        self.topic_name = v.into();
        self
    }

    /// Sets the value of [page_token][ListSubscriptionsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [top][ListSubscriptionsRequest::top].
    pub fn set_top(mut self, v: i32) -> Self {
        self.top = Some(v);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteSubscriptionRequest {
    pub resource_group_name: String,
    pub namespace_name: String,
    pub topic_name: String,
    pub subscription_name: String,
}

impl DeleteSubscriptionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][DeleteSubscriptionRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][DeleteSubscriptionRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [topic_name][DeleteSubscriptionRequest::topic_name].
    pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
        self.topic_name = v.into();
        self
    }

    /// Sets the value of [subscription_name][DeleteSubscriptionRequest::subscription_name].
    pub fn set_subscription_name<T: Into<String>>(mut self, v: T) -> Self {
        self.subscription_name = v.into();
        self
    }
}

/// Lists the authorization rules of a namespace.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAuthorizationRulesRequest {
    pub resource_group_name: String,
    pub namespace_name: String,

    /// The `nextLink` returned by a previous page, empty for the first page.
    pub page_token: String,
}

impl ListAuthorizationRulesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][ListAuthorizationRulesRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][ListAuthorizationRulesRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [page_token][ListAuthorizationRulesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetAuthorizationRuleRequest {
    pub resource_group_name: String,
    pub namespace_name: String,
    pub authorization_rule_name: String,
}

impl GetAuthorizationRuleRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][GetAuthorizationRuleRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][GetAuthorizationRuleRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [authorization_rule_name][GetAuthorizationRuleRequest::authorization_rule_name].
    pub fn set_authorization_rule_name<T: Into<String>>(mut self, v: T) -> Self {
        self.authorization_rule_name = v.into();
        self
    }
}

/// Reads the keys and connection strings of a namespace authorization rule.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListKeysRequest {
    pub resource_group_name: String,
    pub namespace_name: String,
    pub authorization_rule_name: String,
}

impl ListKeysRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][ListKeysRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][ListKeysRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [authorization_rule_name][ListKeysRequest::authorization_rule_name].
    pub fn set_authorization_rule_name<T: Into<String>>(mut self, v: T) -> Self {
        self.authorization_rule_name = v.into();
        self
    }
}

/// Regenerates the primary or secondary key of a namespace authorization rule.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RegenerateKeysRequest {
    pub resource_group_name: String,
    pub namespace_name: String,
    pub authorization_rule_name: String,
    pub parameters: Option<RegenerateAccessKeyParameters>,
}

impl RegenerateKeysRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][RegenerateKeysRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][RegenerateKeysRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [authorization_rule_name][RegenerateKeysRequest::authorization_rule_name].
    pub fn set_authorization_rule_name<T: Into<String>>(mut self, v: T) -> Self {
        self.authorization_rule_name = v.into();
        self
    }

    /// Sets the value of [parameters][RegenerateKeysRequest::parameters].
    pub fn set_parameters<T: Into<RegenerateAccessKeyParameters>>(mut self, v: T) -> Self {
        self.parameters = Some(v.into());
        self
    }
}

/// Polls a long-running operation.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetOperationRequest {
    /// The [name][Operation::name] of the operation.
    pub name: String,
}

impl GetOperationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GetOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Resizes a topic and changes the set of subscriptions attached to it.
///
/// The update is a single call: the topic is resized (if
/// [max_size_in_megabytes][UpdateTopicRequest::max_size_in_megabytes] is
/// set), the subscriptions in
/// [subscriptions_to_add][UpdateTopicRequest::subscriptions_to_add] are
/// created, and the subscriptions named in
/// [subscriptions_to_remove][UpdateTopicRequest::subscriptions_to_remove]
/// are deleted. The response is the refreshed topic, its
/// [subscription_count][TopicProperties::subscription_count] reflects the
/// changes.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateTopicRequest {
    pub resource_group_name: String,
    pub namespace_name: String,
    pub topic_name: String,

    /// The new maximum size. The size is unchanged if not set.
    pub max_size_in_megabytes: Option<i32>,

    /// The subscriptions to create, each [Subscription::name] must be set.
    pub subscriptions_to_add: Vec<Subscription>,

    /// The names of the subscriptions to delete.
    pub subscriptions_to_remove: Vec<String>,
}

impl UpdateTopicRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_group_name][UpdateTopicRequest::resource_group_name].
    pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_group_name = v.into();
        self
    }

    /// Sets the value of [namespace_name][UpdateTopicRequest::namespace_name].
    pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    /// Sets the value of [topic_name][UpdateTopicRequest::topic_name].
    pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
        self.topic_name = v.into();
        self
    }

    /// Sets the value of [max_size_in_megabytes][UpdateTopicRequest::max_size_in_megabytes].
    pub fn set_max_size_in_megabytes(mut self, v: i32) -> Self {
        self.max_size_in_megabytes = Some(v);
        self
    }

    /// Sets the value of [subscriptions_to_add][UpdateTopicRequest::subscriptions_to_add].
    pub fn set_subscriptions_to_add<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Subscription>,
    {
        self.subscriptions_to_add = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [subscriptions_to_remove][UpdateTopicRequest::subscriptions_to_remove].
    pub fn set_subscriptions_to_remove<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.subscriptions_to_remove = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A page of namespaces.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListNamespacesResponse {
    pub value: Vec<Namespace>,

    /// The URL of the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

/// A page of topics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTopicsResponse {
    pub value: Vec<Topic>,

    /// The URL of the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

/// A page of subscriptions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSubscriptionsResponse {
    pub value: Vec<Subscription>,

    /// The URL of the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

/// A page of authorization rules.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAuthorizationRulesResponse {
    pub value: Vec<AuthorizationRule>,

    /// The URL of the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

macro_rules! list_response_setters {
    ($response:ident, $item:ty) => {
        impl $response {
            pub fn new() -> Self {
                Self::default()
            }

            /// Sets the value of [value][Self::value].
            pub fn set_value<T, V>(mut self, v: T) -> Self
            where
                T: IntoIterator<Item = V>,
                V: Into<$item>,
            {
                self.value = v.into_iter().map(|i| i.into()).collect();
                self
            }

            /// Sets the value of [next_link][Self::next_link].
            pub fn set_next_link<T: Into<String>>(mut self, v: T) -> Self {
                self.next_link = Some(v.into());
                self
            }
        }
    };
}

list_response_setters!(ListNamespacesResponse, Namespace);
list_response_setters!(ListTopicsResponse, Topic);
list_response_setters!(ListSubscriptionsResponse, Subscription);
list_response_setters!(ListAuthorizationRulesResponse, AuthorizationRule);
