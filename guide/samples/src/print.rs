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

//! Human-readable summaries of the resources.

use chrono::{DateTime, Utc};
use servicebus_admin::model::{
    AccessKeys, AuthorizationRule, EntityStatus, Namespace, Subscription, Topic,
};
use std::time::Duration;

/// Summarizes a namespace.
pub fn namespace(namespace: &Namespace) -> String {
    let properties = namespace.properties.clone().unwrap_or_default();
    let sku = namespace.sku.clone().unwrap_or_default();
    [
        format!("Service Bus namespace: {}", namespace.id),
        format!("\tName: {}", namespace.name),
        format!("\tRegion: {}", namespace.location),
        format!("\tResourceGroupName: {}", parent(&namespace.id, "resourceGroups")),
        format!("\tCreatedAt: {}", timestamp(&properties.created_at)),
        format!("\tUpdatedAt: {}", timestamp(&properties.updated_at)),
        format!("\tDnsLabel: {}", namespace.name),
        format!("\tFQDN: {}", fqdn(&properties.service_bus_endpoint)),
        format!("\tProvisioningState: {}", properties.provisioning_state),
        "\tSku:".to_string(),
        format!("\t\tCapacity: {}", optional(&sku.capacity)),
        format!("\t\tSkuName: {:?}", sku.name),
        format!("\t\tTier: {}", optional_debug(&sku.tier)),
    ]
    .join("\n")
}

/// Summarizes a topic.
pub fn topic(topic: &Topic) -> String {
    let p = &topic.properties;
    let counts = p.count_details.clone().unwrap_or_default();
    [
        format!("Service Bus topic: {}", topic.id),
        format!("\tName: {}", topic.name),
        format!("\tResourceGroupName: {}", parent(&topic.id, "resourceGroups")),
        format!("\tCreatedAt: {}", timestamp(&p.created_at)),
        format!("\tUpdatedAt: {}", timestamp(&p.updated_at)),
        format!("\tAccessedAt: {}", timestamp(&p.accessed_at)),
        format!("\tActiveMessageCount: {}", counts.active_message_count),
        format!("\tCurrentSizeInBytes: {}", optional(&p.size_in_bytes)),
        format!("\tDeadLetterMessageCount: {}", counts.dead_letter_message_count),
        format!("\tDefaultMessageTtlDuration: {}", duration(&p.default_message_time_to_live)),
        format!(
            "\tDuplicateMessageDetectionHistoryDuration: {}",
            duration(&p.duplicate_detection_history_time_window)
        ),
        format!("\tIsBatchedOperationsEnabled: {}", optional(&p.enable_batched_operations)),
        format!("\tIsDuplicateDetectionEnabled: {}", optional(&p.requires_duplicate_detection)),
        format!("\tIsExpressEnabled: {}", optional(&p.enable_express)),
        format!("\tIsPartitioningEnabled: {}", optional(&p.enable_partitioning)),
        format!("\tDeleteOnIdleDurationInMinutes: {}", minutes(&p.auto_delete_on_idle)),
        format!("\tMaxSizeInMB: {}", optional(&p.max_size_in_megabytes)),
        format!("\tScheduledMessageCount: {}", counts.scheduled_message_count),
        format!("\tStatus: {}", status(&p.status)),
        format!("\tTransferMessageCount: {}", counts.transfer_message_count),
        format!("\tSubscriptionCount: {}", optional(&p.subscription_count)),
        format!(
            "\tTransferDeadLetterMessageCount: {}",
            counts.transfer_dead_letter_message_count
        ),
    ]
    .join("\n")
}

/// Summarizes a subscription.
pub fn subscription(subscription: &Subscription) -> String {
    let p = &subscription.properties;
    let counts = p.count_details.clone().unwrap_or_default();
    [
        format!("Service Bus subscription: {}", subscription.id),
        format!("\tName: {}", subscription.name),
        format!("\tResourceGroupName: {}", parent(&subscription.id, "resourceGroups")),
        format!("\tCreatedAt: {}", timestamp(&p.created_at)),
        format!("\tUpdatedAt: {}", timestamp(&p.updated_at)),
        format!("\tAccessedAt: {}", timestamp(&p.accessed_at)),
        format!("\tActiveMessageCount: {}", counts.active_message_count),
        format!("\tDeadLetterMessageCount: {}", counts.dead_letter_message_count),
        format!("\tDefaultMessageTtlDuration: {}", duration(&p.default_message_time_to_live)),
        format!("\tIsBatchedOperationsEnabled: {}", optional(&p.enable_batched_operations)),
        format!("\tDeleteOnIdleDurationInMinutes: {}", minutes(&p.auto_delete_on_idle)),
        format!("\tScheduledMessageCount: {}", counts.scheduled_message_count),
        format!("\tStatus: {}", status(&p.status)),
        format!(
            "\tIsDeadLetteringEnabledForExpiredMessages: {}",
            optional(&p.dead_lettering_on_message_expiration)
        ),
        format!("\tIsSessionEnabled: {}", optional(&p.requires_session)),
        format!(
            "\tLockDurationInSeconds: {}",
            optional(&p.lock_duration.map(|d| d.as_secs()))
        ),
        format!(
            "\tMaxDeliveryCountBeforeDeadLetteringMessage: {}",
            optional(&p.max_delivery_count)
        ),
        format!(
            "\tIsDeadLetteringEnabledForFilterEvaluationFailedMessages: {}",
            optional(&p.dead_lettering_on_filter_evaluation_exceptions)
        ),
        format!("\tTransferMessageCount: {}", counts.transfer_message_count),
        format!(
            "\tTransferDeadLetterMessageCount: {}",
            counts.transfer_dead_letter_message_count
        ),
    ]
    .join("\n")
}

/// Summarizes a namespace authorization rule and its rights.
pub fn authorization_rule(rule: &AuthorizationRule) -> String {
    let mut lines = vec![
        format!("Service Bus namespace authorization rule: {}", rule.id),
        format!("\tName: {}", rule.name),
        format!("\tResourceGroupName: {}", parent(&rule.id, "resourceGroups")),
        format!("\tNamespaceName: {}", parent(&rule.id, "namespaces")),
        format!("\tNumber of access rights: {}", rule.rights().len()),
    ];
    lines.extend(rule.rights().iter().map(|r| format!("\t\tAccessRight: {r}")));
    lines.join("\n")
}

/// Summarizes the keys of an authorization rule.
///
/// The output contains secrets, the samples print it to show the key
/// rotation.
pub fn keys(keys: &AccessKeys) -> String {
    [
        format!("Authorization keys: {}", keys.key_name),
        format!("\tPrimaryKey: {}", keys.primary_key),
        format!("\tPrimaryConnectionString: {}", keys.primary_connection_string),
        format!("\tSecondaryKey: {}", keys.secondary_key),
        format!("\tSecondaryConnectionString: {}", keys.secondary_connection_string),
    ]
    .join("\n")
}

/// The path segment after `collection` in a resource id, or an empty string.
fn parent<'a>(id: &'a str, collection: &str) -> &'a str {
    let mut segments = id.split('/');
    segments
        .by_ref()
        .find(|s| s.eq_ignore_ascii_case(collection));
    segments.next().unwrap_or_default()
}

/// The host name in an endpoint such as `https://ns.servicebus.windows.net:443/`.
fn fqdn(endpoint: &str) -> &str {
    let host = endpoint
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(endpoint);
    host.split([':', '/']).next().unwrap_or_default()
}

fn timestamp(v: &Option<DateTime<Utc>>) -> String {
    v.map(|t| t.to_rfc3339()).unwrap_or_else(|| "-".to_string())
}

fn optional<T: std::fmt::Display>(v: &Option<T>) -> String {
    v.as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn optional_debug<T: std::fmt::Debug>(v: &Option<T>) -> String {
    v.as_ref()
        .map(|v| format!("{v:?}"))
        .unwrap_or_else(|| "-".to_string())
}

fn duration(v: &Option<Duration>) -> String {
    optional_debug(v)
}

fn minutes(v: &Option<Duration>) -> String {
    optional(&v.map(|d| d.as_secs() / 60))
}

fn status(v: &Option<EntityStatus>) -> String {
    optional_debug(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use servicebus_admin::model::{
        AccessRights, AuthorizationRuleProperties, MessageCountDetails, NamespaceProperties, Sku,
        SkuName, SkuTier, TopicProperties,
    };
    use test_case::test_case;

    const NAMESPACE_ID: &str = "/subscriptions/sub/resourceGroups/rg-test/providers/Microsoft.ServiceBus/namespaces/ns-test";

    #[test_case(NAMESPACE_ID, "resourceGroups", "rg-test")]
    #[test_case(NAMESPACE_ID, "resourcegroups", "rg-test")]
    #[test_case(NAMESPACE_ID, "namespaces", "ns-test")]
    #[test_case(NAMESPACE_ID, "topics", "")]
    #[test_case("", "resourceGroups", "")]
    fn parent_segment(id: &str, collection: &str, want: &str) {
        assert_eq!(parent(id, collection), want);
    }

    #[test_case("https://ns-test.servicebus.windows.net:443/", "ns-test.servicebus.windows.net")]
    #[test_case("ns-test.servicebus.windows.net", "ns-test.servicebus.windows.net")]
    #[test_case("", "")]
    fn fqdn_host(endpoint: &str, want: &str) {
        assert_eq!(fqdn(endpoint), want);
    }

    #[test]
    fn namespace_summary() {
        let ns = Namespace::new()
            .set_id(NAMESPACE_ID)
            .set_name("ns-test")
            .set_location("westus")
            .set_sku(Sku::new().set_name(SkuName::Standard).set_tier(SkuTier::Standard))
            .set_properties(
                NamespaceProperties::new()
                    .set_provisioning_state("Succeeded")
                    .set_service_bus_endpoint("https://ns-test.servicebus.windows.net:443/"),
            );
        let got = namespace(&ns);
        assert!(got.starts_with(&format!("Service Bus namespace: {NAMESPACE_ID}\n")), "{got}");
        assert!(got.contains("\n\tResourceGroupName: rg-test\n"), "{got}");
        assert!(got.contains("\n\tFQDN: ns-test.servicebus.windows.net\n"), "{got}");
        assert!(got.contains("\n\tCreatedAt: -\n"), "{got}");
        assert!(got.contains("\n\t\tSkuName: Standard\n"), "{got}");
        assert!(got.ends_with("\t\tTier: Standard"), "{got}");
    }

    #[test]
    fn topic_summary() {
        let t = Topic::new()
            .set_id(format!("{NAMESPACE_ID}/topics/topic-test"))
            .set_name("topic-test")
            .set_properties(
                TopicProperties::new()
                    .set_max_size_in_megabytes(3072)
                    .set_subscription_count(2)
                    .set_auto_delete_on_idle(Duration::from_secs(600))
                    .set_status(EntityStatus::Active)
                    .set_count_details(MessageCountDetails::new().set_active_message_count(7)),
            );
        let got = topic(&t);
        assert!(got.contains("\n\tMaxSizeInMB: 3072\n"), "{got}");
        assert!(got.contains("\n\tSubscriptionCount: 2\n"), "{got}");
        assert!(got.contains("\n\tDeleteOnIdleDurationInMinutes: 10\n"), "{got}");
        assert!(got.contains("\n\tActiveMessageCount: 7\n"), "{got}");
        assert!(got.contains("\n\tStatus: Active\n"), "{got}");
        assert!(got.contains("\n\tIsExpressEnabled: -\n"), "{got}");
    }

    #[test]
    fn subscription_summary() {
        let s = Subscription::new()
            .set_id(format!("{NAMESPACE_ID}/topics/topic-test/subscriptions/sub-test"))
            .set_name("sub-test")
            .set_properties(
                servicebus_admin::model::SubscriptionProperties::new()
                    .set_lock_duration(Duration::from_secs(60))
                    .set_max_delivery_count(10)
                    .set_requires_session(false),
            );
        let got = subscription(&s);
        assert!(got.contains("\n\tName: sub-test\n"), "{got}");
        assert!(got.contains("\n\tLockDurationInSeconds: 60\n"), "{got}");
        assert!(got.contains("\n\tMaxDeliveryCountBeforeDeadLetteringMessage: 10\n"), "{got}");
        assert!(got.contains("\n\tIsSessionEnabled: false\n"), "{got}");
    }

    #[test]
    fn rule_summary() {
        let rule = AuthorizationRule::new()
            .set_id(format!("{NAMESPACE_ID}/AuthorizationRules/RootManageSharedAccessKey"))
            .set_name("RootManageSharedAccessKey")
            .set_properties(
                AuthorizationRuleProperties::new()
                    .set_rights([AccessRights::Listen, AccessRights::Send]),
            );
        let got = authorization_rule(&rule);
        assert!(got.contains("\n\tNamespaceName: ns-test\n"), "{got}");
        assert!(got.contains("\n\tNumber of access rights: 2\n"), "{got}");
        assert!(got.ends_with("\t\tAccessRight: Listen\n\t\tAccessRight: Send"), "{got}");
    }

    #[test]
    fn keys_summary() {
        let k = AccessKeys::new()
            .set_key_name("RootManageSharedAccessKey")
            .set_primary_key("primary")
            .set_secondary_key("secondary");
        let got = keys(&k);
        assert!(got.contains("\n\tPrimaryKey: primary\n"), "{got}");
        assert!(got.contains("\n\tSecondaryKey: secondary\n"), "{got}");
    }
}
