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

//! The resources held by the emulator and the rules to change them.
//!
//! Names are case-insensitive, the maps use the lowercase name as key and the
//! resources keep the name used to create them.

use crate::keys;
use crate::validation;
use servicebus_admin::Result;
use servicebus_admin::error::Error;
use servicebus_admin::error::rpc::{Code, Status};
use servicebus_admin::model::{
    AccessKeys, AccessRights, AuthorizationRule, AuthorizationRuleProperties, EntityStatus,
    MessageCountDetails, Namespace, NamespaceProperties, Operation, OperationResult,
    RegenerateAccessKeyParameters, ResourceGroup, ResourceGroupProperties, Sku, SkuName, SkuTier,
    Subscription, SubscriptionProperties, Topic, TopicProperties,
};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// The largest duration the service accepts, used as "never".
const MAX_DURATION: Duration = Duration::new(922_337_203_685, 477_580_700);
const DEFAULT_DUPLICATE_DETECTION_WINDOW: Duration = Duration::from_secs(10 * 60);
const DEFAULT_LOCK_DURATION: Duration = Duration::from_secs(60);
const DEFAULT_MAX_SIZE_IN_MEGABYTES: i32 = 1024;
const DEFAULT_MAX_DELIVERY_COUNT: i32 = 10;

#[derive(Debug, Default)]
pub(crate) struct State {
    subscription_id: String,
    groups: BTreeMap<String, GroupEntry>,
    operations: HashMap<String, PendingOperation>,
    next_operation: u64,
}

#[derive(Debug)]
struct GroupEntry {
    group: ResourceGroup,
    namespaces: BTreeMap<String, NamespaceEntry>,
}

#[derive(Debug)]
struct NamespaceEntry {
    namespace: Namespace,
    topics: BTreeMap<String, TopicEntry>,
    rules: BTreeMap<String, RuleEntry>,
}

#[derive(Debug)]
struct TopicEntry {
    topic: Topic,
    subscriptions: BTreeMap<String, Subscription>,
}

#[derive(Debug)]
struct RuleEntry {
    rule: AuthorizationRule,
    keys: AccessKeys,
}

/// What to do when a long-running operation completes.
#[derive(Debug)]
pub(crate) enum Pending {
    CreateNamespace {
        resource_group: String,
        namespace: String,
    },
    Delete,
}

#[derive(Debug)]
struct PendingOperation {
    remaining_polls: u32,
    kind: Pending,
}

impl State {
    pub fn new(subscription_id: String) -> Self {
        Self {
            subscription_id,
            ..Default::default()
        }
    }

    pub fn create_resource_group(
        &mut self,
        name: &str,
        group: Option<ResourceGroup>,
    ) -> Result<ResourceGroup> {
        validation::resource_group_name(name)?;
        let group = group.unwrap_or_default();
        validation::location(&group.location)?;
        if let Some(entry) = self.groups.get_mut(&key(name)) {
            if !entry.group.location.eq_ignore_ascii_case(&group.location) {
                return Err(conflict(
                    "InvalidResourceGroupLocation",
                    format!(
                        "resource group '{name}' already exists in location '{}'",
                        entry.group.location
                    ),
                ));
            }
            entry.group.tags = group.tags;
            return Ok(entry.group.clone());
        }
        let created = ResourceGroup::new()
            .set_id(format!("/subscriptions/{}/resourceGroups/{name}", self.subscription_id))
            .set_name(name)
            .set_location(group.location)
            .set_tags(group.tags)
            .set_properties(ResourceGroupProperties::new().set_provisioning_state("Succeeded"));
        tracing::debug!("created resource group {name}");
        self.groups.insert(
            key(name),
            GroupEntry {
                group: created.clone(),
                namespaces: BTreeMap::new(),
            },
        );
        Ok(created)
    }

    pub fn get_resource_group(&self, name: &str) -> Result<ResourceGroup> {
        self.group(name).map(|e| e.group.clone())
    }

    /// Deletes the group and everything it contains.
    pub fn delete_resource_group(&mut self, name: &str) -> Result<()> {
        self.groups
            .remove(&key(name))
            .map(|_| tracing::debug!("deleted resource group {name}"))
            .ok_or_else(|| resource_group_not_found(name))
    }

    pub fn create_namespace(
        &mut self,
        resource_group: &str,
        name: &str,
        namespace: Option<Namespace>,
        pending: bool,
    ) -> Result<Namespace> {
        validation::namespace_name(name)?;
        let namespace = namespace.unwrap_or_default();
        validation::location(&namespace.location)?;
        let in_use = self
            .groups
            .iter()
            .any(|(k, g)| *k != key(resource_group) && g.namespaces.contains_key(&key(name)));
        if in_use {
            return Err(conflict(
                "NamespaceNameInUse",
                format!("the namespace name '{name}' is already in use"),
            ));
        }
        let subscription_id = self.subscription_id.clone();
        let group = self.group_mut(resource_group)?;
        let sku = namespace.sku.unwrap_or_else(|| Sku::new().set_name(SkuName::Standard));
        let sku = match sku.tier {
            Some(_) => sku,
            None => {
                let tier = tier_for(sku.name);
                sku.set_tier(tier)
            }
        };
        if let Some(entry) = group.namespaces.get_mut(&key(name)) {
            entry.namespace.tags = namespace.tags;
            entry.namespace.sku = Some(sku);
            if let Some(p) = entry.namespace.properties.as_mut() {
                p.updated_at = Some(chrono::Utc::now());
            }
            return Ok(entry.namespace.clone());
        }
        let now = chrono::Utc::now();
        let state = if pending { "Activating" } else { "Succeeded" };
        let created = Namespace::new()
            .set_id(format!(
                "/subscriptions/{subscription_id}/resourceGroups/{}/providers/Microsoft.ServiceBus/namespaces/{name}",
                group.group.name
            ))
            .set_name(name)
            .set_location(namespace.location)
            .set_tags(namespace.tags)
            .set_sku(sku)
            .set_properties(
                NamespaceProperties::new()
                    .set_provisioning_state(state)
                    .set_status("Active")
                    .set_created_at(now)
                    .set_updated_at(now)
                    .set_service_bus_endpoint(format!("https://{name}.servicebus.windows.net:443/"))
                    .set_metric_id(format!("{subscription_id}:{name}")),
            );
        let mut rules = BTreeMap::new();
        rules.insert(
            key(keys::ROOT_RULE),
            RuleEntry {
                rule: AuthorizationRule::new()
                    .set_id(format!("{}/AuthorizationRules/{}", created.id, keys::ROOT_RULE))
                    .set_name(keys::ROOT_RULE)
                    .set_properties(AuthorizationRuleProperties::new().set_rights([
                        AccessRights::Listen,
                        AccessRights::Manage,
                        AccessRights::Send,
                    ])),
                keys: keys::new_keys(name, keys::ROOT_RULE),
            },
        );
        tracing::debug!("created namespace {name} in {resource_group}");
        group.namespaces.insert(
            key(name),
            NamespaceEntry {
                namespace: created.clone(),
                topics: BTreeMap::new(),
                rules,
            },
        );
        Ok(created)
    }

    pub fn get_namespace(&self, resource_group: &str, name: &str) -> Result<Namespace> {
        self.namespace(resource_group, name)
            .map(|e| e.namespace.clone())
    }

    /// Lists the namespaces in `resource_group`, or in all groups if empty.
    pub fn list_namespaces(&self, resource_group: &str) -> Result<Vec<Namespace>> {
        if resource_group.is_empty() {
            return Ok(self
                .groups
                .values()
                .flat_map(|g| g.namespaces.values().map(|n| n.namespace.clone()))
                .collect());
        }
        let group = self.group(resource_group)?;
        Ok(group
            .namespaces
            .values()
            .map(|n| n.namespace.clone())
            .collect())
    }

    pub fn delete_namespace(&mut self, resource_group: &str, name: &str) -> Result<()> {
        self.group_mut(resource_group)?
            .namespaces
            .remove(&key(name))
            .map(|_| tracing::debug!("deleted namespace {name}"))
            .ok_or_else(|| namespace_not_found(name))
    }

    pub fn create_or_update_topic(
        &mut self,
        resource_group: &str,
        namespace: &str,
        name: &str,
        topic: Option<Topic>,
    ) -> Result<Topic> {
        validation::topic_name(name)?;
        let update = topic.unwrap_or_default().properties;
        let entry = self.namespace_mut(resource_group, namespace)?;
        let sku = sku_name(&entry.namespace);
        if sku == SkuName::Basic {
            return Err(validation::invalid_argument(
                "TopicsNotSupported",
                format!("namespace '{namespace}' uses the Basic tier, which does not support topics"),
            ));
        }
        if let Some(size) = update.max_size_in_megabytes {
            validation::max_size_in_megabytes(sku, size)?;
        }
        let now = chrono::Utc::now();
        if let Some(existing) = entry.topics.get_mut(&key(name)) {
            merge_topic(&mut existing.topic.properties, update);
            existing.topic.properties.updated_at = Some(now);
            return Ok(topic_view(existing));
        }
        let mut properties = TopicProperties::new()
            .set_size_in_bytes(0)
            .set_created_at(now)
            .set_updated_at(now)
            .set_accessed_at(now)
            .set_count_details(MessageCountDetails::new())
            .set_default_message_time_to_live(MAX_DURATION)
            .set_max_size_in_megabytes(DEFAULT_MAX_SIZE_IN_MEGABYTES)
            .set_requires_duplicate_detection(false)
            .set_duplicate_detection_history_time_window(DEFAULT_DUPLICATE_DETECTION_WINDOW)
            .set_enable_batched_operations(true)
            .set_status(EntityStatus::Active)
            .set_support_ordering(true)
            .set_auto_delete_on_idle(MAX_DURATION)
            .set_enable_partitioning(false)
            .set_enable_express(false);
        merge_topic(&mut properties, update);
        let topic = TopicEntry {
            topic: Topic::new()
                .set_id(format!("{}/topics/{name}", entry.namespace.id))
                .set_name(name)
                .set_properties(properties),
            subscriptions: BTreeMap::new(),
        };
        let view = topic_view(&topic);
        tracing::debug!("created topic {name} in {namespace}");
        entry.topics.insert(key(name), topic);
        Ok(view)
    }

    pub fn get_topic(&self, resource_group: &str, namespace: &str, name: &str) -> Result<Topic> {
        self.topic(resource_group, namespace, name).map(topic_view)
    }

    pub fn list_topics(&self, resource_group: &str, namespace: &str) -> Result<Vec<Topic>> {
        let entry = self.namespace(resource_group, namespace)?;
        Ok(entry.topics.values().map(topic_view).collect())
    }

    /// Resizes the topic and attaches or detaches subscriptions.
    ///
    /// All the changes are validated before any of them is applied.
    pub fn update_topic(
        &mut self,
        resource_group: &str,
        namespace: &str,
        name: &str,
        max_size_in_megabytes: Option<i32>,
        subscriptions_to_add: Vec<Subscription>,
        subscriptions_to_remove: Vec<String>,
    ) -> Result<Topic> {
        let sku = sku_name(&self.namespace(resource_group, namespace)?.namespace);
        let topic_id = {
            let entry = self.topic(resource_group, namespace, name)?;
            for s in &subscriptions_to_remove {
                if !entry.subscriptions.contains_key(&key(s)) {
                    return Err(subscription_not_found(s));
                }
            }
            entry.topic.id.clone()
        };
        if let Some(size) = max_size_in_megabytes {
            validation::max_size_in_megabytes(sku, size)?;
        }
        for s in &subscriptions_to_add {
            validation::subscription_name(&s.name)?;
        }

        let entry = self.topic_mut(resource_group, namespace, name)?;
        let now = chrono::Utc::now();
        if let Some(size) = max_size_in_megabytes {
            entry.topic.properties.max_size_in_megabytes = Some(size);
        }
        for s in subscriptions_to_add {
            let created = new_subscription(&topic_id, &s.name, s.properties, now);
            tracing::debug!("attached subscription {} to topic {name}", created.name);
            entry.subscriptions.insert(key(&s.name), created);
        }
        for s in subscriptions_to_remove {
            tracing::debug!("detached subscription {s} from topic {name}");
            entry.subscriptions.remove(&key(&s));
        }
        entry.topic.properties.updated_at = Some(now);
        Ok(topic_view(entry))
    }

    pub fn delete_topic(&mut self, resource_group: &str, namespace: &str, name: &str) -> Result<()> {
        self.namespace_mut(resource_group, namespace)?
            .topics
            .remove(&key(name))
            .map(|_| tracing::debug!("deleted topic {name}"))
            .ok_or_else(|| topic_not_found(name))
    }

    pub fn create_or_update_subscription(
        &mut self,
        resource_group: &str,
        namespace: &str,
        topic: &str,
        name: &str,
        subscription: Option<Subscription>,
    ) -> Result<Subscription> {
        validation::subscription_name(name)?;
        let update = subscription.unwrap_or_default().properties;
        let entry = self.topic_mut(resource_group, namespace, topic)?;
        let now = chrono::Utc::now();
        if let Some(existing) = entry.subscriptions.get_mut(&key(name)) {
            merge_subscription(&mut existing.properties, update);
            existing.properties.updated_at = Some(now);
            return Ok(existing.clone());
        }
        let created = new_subscription(&entry.topic.id, name, update, now);
        tracing::debug!("created subscription {name} in topic {topic}");
        entry.subscriptions.insert(key(name), created.clone());
        Ok(created)
    }

    pub fn get_subscription(
        &self,
        resource_group: &str,
        namespace: &str,
        topic: &str,
        name: &str,
    ) -> Result<Subscription> {
        self.topic(resource_group, namespace, topic)?
            .subscriptions
            .get(&key(name))
            .cloned()
            .ok_or_else(|| subscription_not_found(name))
    }

    pub fn list_subscriptions(
        &self,
        resource_group: &str,
        namespace: &str,
        topic: &str,
    ) -> Result<Vec<Subscription>> {
        let entry = self.topic(resource_group, namespace, topic)?;
        Ok(entry.subscriptions.values().cloned().collect())
    }

    pub fn delete_subscription(
        &mut self,
        resource_group: &str,
        namespace: &str,
        topic: &str,
        name: &str,
    ) -> Result<()> {
        self.topic_mut(resource_group, namespace, topic)?
            .subscriptions
            .remove(&key(name))
            .map(|_| tracing::debug!("deleted subscription {name}"))
            .ok_or_else(|| subscription_not_found(name))
    }

    pub fn list_authorization_rules(
        &self,
        resource_group: &str,
        namespace: &str,
    ) -> Result<Vec<AuthorizationRule>> {
        let entry = self.namespace(resource_group, namespace)?;
        Ok(entry.rules.values().map(|r| r.rule.clone()).collect())
    }

    pub fn get_authorization_rule(
        &self,
        resource_group: &str,
        namespace: &str,
        name: &str,
    ) -> Result<AuthorizationRule> {
        self.rule(resource_group, namespace, name)
            .map(|r| r.rule.clone())
    }

    pub fn list_keys(
        &self,
        resource_group: &str,
        namespace: &str,
        name: &str,
    ) -> Result<AccessKeys> {
        self.rule(resource_group, namespace, name)
            .map(|r| r.keys.clone())
    }

    /// Replaces one key of the rule. The rule name and rights do not change.
    pub fn regenerate_keys(
        &mut self,
        resource_group: &str,
        namespace: &str,
        name: &str,
        parameters: Option<RegenerateAccessKeyParameters>,
    ) -> Result<AccessKeys> {
        let parameters = parameters.unwrap_or_default();
        let entry = self.namespace_mut(resource_group, namespace)?;
        let namespace_name = entry.namespace.name.clone();
        let rule = entry
            .rules
            .get_mut(&key(name))
            .ok_or_else(|| rule_not_found(name))?;
        let keys = std::mem::take(&mut rule.keys);
        rule.keys = keys::regenerate(keys, &namespace_name, parameters.key_type, parameters.key);
        tracing::debug!("regenerated {:?} of {name}", parameters.key_type);
        Ok(rule.keys.clone())
    }

    /// Starts a long-running operation that completes after `polls` polls.
    pub fn start_operation(&mut self, polls: u32, kind: Pending) -> Result<Operation> {
        if polls == 0 {
            return self.complete(kind);
        }
        self.next_operation += 1;
        let name = format!("operations/{}", self.next_operation);
        self.operations.insert(
            name.clone(),
            PendingOperation {
                remaining_polls: polls,
                kind,
            },
        );
        Ok(Operation::new().set_name(name))
    }

    pub fn poll_operation(&mut self, name: &str) -> Result<Operation> {
        let pending = self.operations.get_mut(name).ok_or_else(|| {
            not_found(
                "OperationNotFound",
                format!("the operation '{name}' could not be found"),
            )
        })?;
        pending.remaining_polls = pending.remaining_polls.saturating_sub(1);
        if pending.remaining_polls > 0 {
            return Ok(Operation::new().set_name(name));
        }
        match self.operations.remove(name) {
            Some(pending) => self.complete(pending.kind),
            None => Ok(Operation::new().set_name(name)),
        }
    }

    fn complete(&mut self, kind: Pending) -> Result<Operation> {
        let (resource_group, namespace) = match kind {
            Pending::Delete => return Ok(Operation::completed(serde_json::Value::Null)),
            Pending::CreateNamespace {
                resource_group,
                namespace,
            } => (resource_group, namespace),
        };
        let entry = match self.namespace_mut(&resource_group, &namespace) {
            Ok(entry) => entry,
            Err(e) => {
                return Ok(Operation::new()
                    .set_done(true)
                    .set_result(OperationResult::Error(e.status().cloned().unwrap_or_default())));
            }
        };
        if let Some(p) = entry.namespace.properties.as_mut() {
            p.provisioning_state = "Succeeded".to_string();
        }
        let value = serde_json::to_value(&entry.namespace).map_err(Error::ser)?;
        Ok(Operation::completed(value))
    }

    fn group(&self, name: &str) -> Result<&GroupEntry> {
        self.groups
            .get(&key(name))
            .ok_or_else(|| resource_group_not_found(name))
    }

    fn group_mut(&mut self, name: &str) -> Result<&mut GroupEntry> {
        self.groups
            .get_mut(&key(name))
            .ok_or_else(|| resource_group_not_found(name))
    }

    fn namespace(&self, resource_group: &str, name: &str) -> Result<&NamespaceEntry> {
        self.group(resource_group)?
            .namespaces
            .get(&key(name))
            .ok_or_else(|| namespace_not_found(name))
    }

    fn namespace_mut(&mut self, resource_group: &str, name: &str) -> Result<&mut NamespaceEntry> {
        self.group_mut(resource_group)?
            .namespaces
            .get_mut(&key(name))
            .ok_or_else(|| namespace_not_found(name))
    }

    fn topic(&self, resource_group: &str, namespace: &str, name: &str) -> Result<&TopicEntry> {
        self.namespace(resource_group, namespace)?
            .topics
            .get(&key(name))
            .ok_or_else(|| topic_not_found(name))
    }

    fn topic_mut(
        &mut self,
        resource_group: &str,
        namespace: &str,
        name: &str,
    ) -> Result<&mut TopicEntry> {
        self.namespace_mut(resource_group, namespace)?
            .topics
            .get_mut(&key(name))
            .ok_or_else(|| topic_not_found(name))
    }

    fn rule(&self, resource_group: &str, namespace: &str, name: &str) -> Result<&RuleEntry> {
        self.namespace(resource_group, namespace)?
            .rules
            .get(&key(name))
            .ok_or_else(|| rule_not_found(name))
    }
}

fn key(name: &str) -> String {
    name.to_ascii_lowercase()
}

fn sku_name(namespace: &Namespace) -> SkuName {
    namespace.sku.as_ref().map(|s| s.name).unwrap_or_default()
}

fn tier_for(name: SkuName) -> SkuTier {
    match name {
        SkuName::Basic => SkuTier::Basic,
        SkuName::Premium => SkuTier::Premium,
        _ => SkuTier::Standard,
    }
}

fn topic_view(entry: &TopicEntry) -> Topic {
    let mut topic = entry.topic.clone();
    topic.properties.subscription_count = Some(entry.subscriptions.len() as i32);
    topic
}

fn new_subscription(
    topic_id: &str,
    name: &str,
    update: SubscriptionProperties,
    now: chrono::DateTime<chrono::Utc>,
) -> Subscription {
    let mut properties = SubscriptionProperties::new()
        .set_message_count(0)
        .set_created_at(now)
        .set_updated_at(now)
        .set_accessed_at(now)
        .set_count_details(MessageCountDetails::new())
        .set_lock_duration(DEFAULT_LOCK_DURATION)
        .set_requires_session(false)
        .set_default_message_time_to_live(MAX_DURATION)
        .set_dead_lettering_on_filter_evaluation_exceptions(true)
        .set_dead_lettering_on_message_expiration(false)
        .set_max_delivery_count(DEFAULT_MAX_DELIVERY_COUNT)
        .set_status(EntityStatus::Active)
        .set_enable_batched_operations(true)
        .set_auto_delete_on_idle(MAX_DURATION);
    merge_subscription(&mut properties, update);
    Subscription::new()
        .set_id(format!("{topic_id}/subscriptions/{name}"))
        .set_name(name)
        .set_properties(properties)
}

/// Copies the fields set in `$src` into `$dst`.
macro_rules! merge {
    ($dst:ident, $src:ident, $($field:ident),+ $(,)?) => {
        $(
            if $src.$field.is_some() {
                $dst.$field = $src.$field;
            }
        )+
    };
}

fn merge_topic(dst: &mut TopicProperties, src: TopicProperties) {
    merge!(
        dst,
        src,
        default_message_time_to_live,
        max_size_in_megabytes,
        requires_duplicate_detection,
        duplicate_detection_history_time_window,
        enable_batched_operations,
        status,
        support_ordering,
        auto_delete_on_idle,
        enable_partitioning,
        enable_express,
    );
}

fn merge_subscription(dst: &mut SubscriptionProperties, src: SubscriptionProperties) {
    merge!(
        dst,
        src,
        lock_duration,
        requires_session,
        default_message_time_to_live,
        dead_lettering_on_filter_evaluation_exceptions,
        dead_lettering_on_message_expiration,
        duplicate_detection_history_time_window,
        max_delivery_count,
        status,
        enable_batched_operations,
        auto_delete_on_idle,
        forward_to,
        forward_dead_lettered_messages_to,
    );
}

fn not_found(reason: &str, message: String) -> Error {
    Error::service_with_http_status(
        Status::default()
            .set_code(Code::NotFound)
            .set_reason(reason)
            .set_message(message),
        Some(404),
    )
}

fn conflict(reason: &str, message: String) -> Error {
    Error::service_with_http_status(
        Status::default()
            .set_code(Code::AlreadyExists)
            .set_reason(reason)
            .set_message(message),
        Some(409),
    )
}

fn resource_group_not_found(name: &str) -> Error {
    not_found(
        "ResourceGroupNotFound",
        format!("resource group '{name}' could not be found"),
    )
}

fn namespace_not_found(name: &str) -> Error {
    not_found(
        "NamespaceNotFound",
        format!("the namespace '{name}' could not be found"),
    )
}

fn topic_not_found(name: &str) -> Error {
    not_found(
        "TopicNotFound",
        format!("the topic '{name}' could not be found"),
    )
}

fn subscription_not_found(name: &str) -> Error {
    not_found(
        "SubscriptionNotFound",
        format!("the subscription '{name}' could not be found"),
    )
}

fn rule_not_found(name: &str) -> Error {
    not_found(
        "AuthorizationRuleNotFound",
        format!("the authorization rule '{name}' could not be found"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    fn reason(err: &Error) -> &str {
        err.status().map(|s| s.reason.as_str()).unwrap_or_default()
    }

    fn with_topic() -> anyhow::Result<State> {
        let mut state = State::new("sub".to_string());
        state.create_resource_group("rg", Some(ResourceGroup::new().set_location("westus")))?;
        state.create_namespace(
            "rg",
            "namespace-1",
            Some(Namespace::new().set_location("westus")),
            false,
        )?;
        state.create_or_update_topic("rg", "namespace-1", "topic-1", None)?;
        Ok(state)
    }

    #[test]
    fn parents_must_exist() {
        let mut state = State::new("sub".to_string());
        let ns = Some(Namespace::new().set_location("westus"));
        let err = state.create_namespace("rg", "namespace-1", ns, false).unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        assert_eq!(reason(&err), "ResourceGroupNotFound");

        let err = state
            .create_or_update_topic("rg", "namespace-1", "topic-1", None)
            .unwrap_err();
        assert_eq!(reason(&err), "ResourceGroupNotFound");
    }

    #[test_case("missing-namespace", "topic-1", "NamespaceNotFound")]
    #[test_case("namespace-1", "missing-topic", "TopicNotFound")]
    fn missing_parent(namespace: &str, topic: &str, want: &str) -> TestResult {
        let mut state = with_topic()?;
        let err = state
            .create_or_update_subscription("rg", namespace, topic, "sub-1", None)
            .unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        assert_eq!(reason(&err), want);
        Ok(())
    }

    #[test]
    fn resource_group_location_conflict() -> TestResult {
        let mut state = State::new("sub".to_string());
        state.create_resource_group("rg", Some(ResourceGroup::new().set_location("westus")))?;
        let again = state.create_resource_group("RG", Some(ResourceGroup::new().set_location("WestUS")))?;
        assert_eq!(again.name, "rg");
        let err = state
            .create_resource_group("rg", Some(ResourceGroup::new().set_location("eastus")))
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::AlreadyExists));
        Ok(())
    }

    #[test]
    fn namespace_defaults() -> TestResult {
        let state = with_topic()?;
        let ns = state.get_namespace("rg", "NAMESPACE-1")?;
        assert_eq!(ns.name, "namespace-1");
        assert_eq!(ns.provisioning_state(), "Succeeded");
        let sku = ns.sku.clone().unwrap_or_default();
        assert_eq!(sku.name, SkuName::Standard);
        assert_eq!(sku.tier, Some(SkuTier::Standard));
        assert!(ns.id.ends_with("/providers/Microsoft.ServiceBus/namespaces/namespace-1"), "{}", ns.id);

        let rules = state.list_authorization_rules("rg", "namespace-1")?;
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name, keys::ROOT_RULE);
        assert_eq!(
            rules[0].rights(),
            &[AccessRights::Listen, AccessRights::Manage, AccessRights::Send]
        );
        Ok(())
    }

    #[test]
    fn namespace_name_in_use() -> TestResult {
        let mut state = with_topic()?;
        state.create_resource_group("rg-2", Some(ResourceGroup::new().set_location("westus")))?;
        let err = state
            .create_namespace("rg-2", "namespace-1", Some(Namespace::new().set_location("westus")), false)
            .unwrap_err();
        assert_eq!(reason(&err), "NamespaceNameInUse");
        Ok(())
    }

    #[test]
    fn basic_tier_rejects_topics() -> TestResult {
        let mut state = with_topic()?;
        state.create_namespace(
            "rg",
            "namespace-basic",
            Some(Namespace::new().set_location("westus").set_sku(Sku::new().set_name(SkuName::Basic))),
            false,
        )?;
        let err = state
            .create_or_update_topic("rg", "namespace-basic", "topic-1", None)
            .unwrap_err();
        assert_eq!(reason(&err), "TopicsNotSupported");
        Ok(())
    }

    #[test]
    fn topic_defaults_and_update() -> TestResult {
        let mut state = with_topic()?;
        let topic = state.get_topic("rg", "namespace-1", "topic-1")?;
        assert_eq!(topic.properties.max_size_in_megabytes, Some(1024));
        assert_eq!(topic.properties.subscription_count, Some(0));
        assert_eq!(topic.properties.status, Some(EntityStatus::Active));

        let update = Topic::new().set_properties(TopicProperties::new().set_enable_express(true));
        let topic = state.create_or_update_topic("rg", "namespace-1", "topic-1", Some(update))?;
        assert_eq!(topic.properties.enable_express, Some(true));
        assert_eq!(topic.properties.max_size_in_megabytes, Some(1024));

        let update = Topic::new().set_properties(TopicProperties::new().set_max_size_in_megabytes(1000));
        let err = state
            .create_or_update_topic("rg", "namespace-1", "topic-1", Some(update))
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::InvalidArgument));
        Ok(())
    }

    #[test]
    fn update_topic_counts() -> TestResult {
        let mut state = with_topic()?;
        state.create_or_update_subscription("rg", "namespace-1", "topic-1", "sub-1", None)?;
        let topic = state.update_topic(
            "rg",
            "namespace-1",
            "topic-1",
            Some(2048),
            vec![Subscription::new().set_name("sub-2")],
            Vec::new(),
        )?;
        assert_eq!(topic.properties.subscription_count, Some(2));
        assert_eq!(topic.properties.max_size_in_megabytes, Some(2048));

        let topic = state.update_topic(
            "rg",
            "namespace-1",
            "topic-1",
            None,
            Vec::new(),
            vec!["sub-1".to_string()],
        )?;
        assert_eq!(topic.properties.subscription_count, Some(1));
        let err = state
            .get_subscription("rg", "namespace-1", "topic-1", "sub-1")
            .unwrap_err();
        assert_eq!(reason(&err), "SubscriptionNotFound");
        Ok(())
    }

    #[test]
    fn update_topic_is_atomic() -> TestResult {
        let mut state = with_topic()?;
        let err = state
            .update_topic(
                "rg",
                "namespace-1",
                "topic-1",
                Some(2048),
                vec![Subscription::new().set_name("sub-2")],
                vec!["missing".to_string()],
            )
            .unwrap_err();
        assert_eq!(reason(&err), "SubscriptionNotFound");
        let topic = state.get_topic("rg", "namespace-1", "topic-1")?;
        assert_eq!(topic.properties.max_size_in_megabytes, Some(1024));
        assert_eq!(topic.properties.subscription_count, Some(0));
        Ok(())
    }

    #[test]
    fn cascading_delete() -> TestResult {
        let mut state = with_topic()?;
        state.create_or_update_subscription("rg", "namespace-1", "topic-1", "sub-1", None)?;
        state.delete_resource_group("rg")?;
        let err = state.get_topic("rg", "namespace-1", "topic-1").unwrap_err();
        assert_eq!(reason(&err), "ResourceGroupNotFound");
        let err = state.delete_resource_group("rg").unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        Ok(())
    }

    #[test]
    fn regenerate_keeps_rule() -> TestResult {
        let mut state = with_topic()?;
        let before = state.list_keys("rg", "namespace-1", keys::ROOT_RULE)?;
        let rule_before = state.get_authorization_rule("rg", "namespace-1", keys::ROOT_RULE)?;
        let params = RegenerateAccessKeyParameters::new().set_key_type(servicebus_admin::model::KeyType::SecondaryKey);
        let after = state.regenerate_keys("rg", "namespace-1", keys::ROOT_RULE, Some(params))?;
        assert_eq!(after.key_name, before.key_name);
        assert_eq!(after.primary_key, before.primary_key);
        assert_ne!(after.secondary_key, before.secondary_key);
        let rule_after = state.get_authorization_rule("rg", "namespace-1", keys::ROOT_RULE)?;
        assert_eq!(rule_after, rule_before);
        assert_eq!(state.list_keys("rg", "namespace-1", keys::ROOT_RULE)?, after);
        Ok(())
    }

    #[test]
    fn operations() -> TestResult {
        let mut state = State::new("sub".to_string());
        state.create_resource_group("rg", Some(ResourceGroup::new().set_location("westus")))?;
        let ns = state.create_namespace("rg", "namespace-1", Some(Namespace::new().set_location("westus")), true)?;
        assert_eq!(ns.provisioning_state(), "Activating");
        let pending = Pending::CreateNamespace {
            resource_group: "rg".to_string(),
            namespace: "namespace-1".to_string(),
        };
        let op = state.start_operation(2, pending)?;
        assert!(!op.done, "{op:?}");
        let poll = state.poll_operation(&op.name)?;
        assert!(!poll.done, "{poll:?}");
        let poll = state.poll_operation(&op.name)?;
        assert!(poll.done, "{poll:?}");
        let Some(OperationResult::Response(value)) = poll.result else {
            panic!("expected a response");
        };
        assert_eq!(value["properties"]["provisioningState"], "Succeeded");
        assert_eq!(state.get_namespace("rg", "namespace-1")?.provisioning_state(), "Succeeded");

        let err = state.poll_operation(&op.name).unwrap_err();
        assert_eq!(reason(&err), "OperationNotFound");

        let op = state.start_operation(0, Pending::Delete)?;
        assert_eq!(op, Operation::completed(serde_json::Value::Null));
        Ok(())
    }
}
