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

//! Provision, change, and delete a namespace, a topic and two subscriptions.
//!
//! The sample runs these steps in order:
//! - Create a resource group and a Standard namespace in it.
//! - Create a topic.
//! - Update the topic with a new size and a new subscription.
//! - Create a second subscription in the topic.
//! - List the topics and the subscriptions.
//! - Get the default authorization rule and its keys.
//! - Regenerate the secondary key.
//! - Delete the first subscription as part of a topic update.
//! - Delete the second subscription, the topic and the namespace.
//! - Delete the resource group.

use crate::cleanup::ResourceGroupCleanup;
use crate::names::Names;
use crate::print;
use servicebus_admin::client::ServiceBusManagement;
use servicebus_admin::model::{
    KeyType, Namespace, RegenerateAccessKeyParameters, ResourceGroup, Sku, SkuName, SkuTier,
    Subscription, SubscriptionProperties, Topic, TopicProperties,
};
use std::time::Duration;

const TOPIC_SIZE_IN_MEGABYTES: i32 = 2048;
const UPDATED_TOPIC_SIZE_IN_MEGABYTES: i32 = 3072;
const SUBSCRIPTION_AUTO_DELETE_ON_IDLE: Duration = Duration::from_secs(10 * 60);

/// Runs the sample.
///
/// The resource group is deleted before this function returns, even if one of
/// the steps fails. Returns the error from the first failed step.
pub async fn run_sample(
    client: &ServiceBusManagement,
    names: &Names,
    region: &str,
) -> anyhow::Result<()> {
    let mut cleanup = ResourceGroupCleanup::new();
    let result = provision(client, names, region, &mut cleanup).await;
    let outcome = cleanup.run(client).await;
    tracing::debug!("cleanup completed with {outcome:?}");
    result
}

#[tracing::instrument(level = "info", skip(client, cleanup))]
async fn provision(
    client: &ServiceBusManagement,
    names: &Names,
    region: &str,
    cleanup: &mut ResourceGroupCleanup,
) -> anyhow::Result<()> {
    let Names {
        resource_group,
        namespace: namespace_name,
        topic: topic_name,
        subscription1,
        subscription2,
    } = names;

    println!("Creating resource group {resource_group} in {region}...");
    // The group may exist even if the response is lost.
    cleanup.record(resource_group);
    let group = client
        .create_resource_group()
        .set_resource_group_name(resource_group)
        .set_resource_group(ResourceGroup::new().set_location(region))
        .send()
        .await?;
    println!("Created resource group {}", group.name);

    println!("Creating namespace {namespace_name} in resource group {resource_group}...");
    let namespace = client
        .create_namespace()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .set_namespace(
            Namespace::new().set_location(region).set_sku(
                Sku::new()
                    .set_name(SkuName::Standard)
                    .set_tier(SkuTier::Standard),
            ),
        )
        .until_done()
        .await?;
    println!("Created namespace {}", namespace.name);
    println!("{}", print::namespace(&namespace));

    println!("Creating topic {topic_name} in namespace {namespace_name}...");
    let topic = client
        .create_or_update_topic()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .set_topic_name(topic_name)
        .set_topic(
            Topic::new().set_properties(
                TopicProperties::new().set_max_size_in_megabytes(TOPIC_SIZE_IN_MEGABYTES),
            ),
        )
        .send()
        .await?;
    println!("Created topic {}", topic.name);
    println!("{}", print::topic(&topic));

    println!("Updating topic {topic_name} with a new size and a subscription...");
    let topic = client
        .get_topic()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .set_topic_name(topic_name)
        .send()
        .await?;
    let topic = client
        .update_topic()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .set_topic_name(&topic.name)
        .set_max_size_in_megabytes(UPDATED_TOPIC_SIZE_IN_MEGABYTES)
        .set_subscriptions_to_add([Subscription::new().set_name(subscription1)])
        .send()
        .await?;
    println!("Updated the topic size along with a subscription");
    println!("{}", print::topic(&topic));

    let first = client
        .get_subscription()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .set_topic_name(topic_name)
        .set_subscription_name(subscription1)
        .send()
        .await?;
    println!("{}", print::subscription(&first));

    println!("Adding second subscription {subscription2} to topic {topic_name}...");
    let second = client
        .create_or_update_subscription()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .set_topic_name(topic_name)
        .set_subscription_name(subscription2)
        .set_subscription(Subscription::new().set_properties(
            SubscriptionProperties::new().set_auto_delete_on_idle(SUBSCRIPTION_AUTO_DELETE_ON_IDLE),
        ))
        .send()
        .await?;
    println!("Added second subscription {subscription2} to topic {topic_name}");
    println!("{}", print::subscription(&second));

    let mut items = client
        .list_topics()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .by_item();
    let mut topics = Vec::new();
    while let Some(t) = items.next().await.transpose()? {
        topics.push(t);
    }
    println!("Number of topics in namespace: {}", topics.len());
    topics.iter().for_each(|t| println!("{}", print::topic(t)));

    let mut items = client
        .list_subscriptions()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .set_topic_name(topic_name)
        .by_item();
    let mut subscriptions = Vec::new();
    while let Some(s) = items.next().await.transpose()? {
        subscriptions.push(s);
    }
    println!("Number of subscriptions to topic: {}", subscriptions.len());
    subscriptions
        .iter()
        .for_each(|s| println!("{}", print::subscription(s)));

    let mut items = client
        .list_authorization_rules()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .by_item();
    let mut rules = Vec::new();
    while let Some(r) = items.next().await.transpose()? {
        rules.push(r);
    }
    println!("Number of authorization rules for namespace: {}", rules.len());
    rules
        .iter()
        .for_each(|r| println!("{}", print::authorization_rule(r)));
    let Some(rule) = rules.first() else {
        anyhow::bail!("namespace {namespace_name} has no authorization rules");
    };

    println!("Getting keys for authorization rule {}...", rule.name);
    let keys = client
        .list_keys()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .set_authorization_rule_name(&rule.name)
        .send()
        .await?;
    println!("{}", print::keys(&keys));
    println!("Regenerating secondary key for authorization rule {}...", rule.name);
    let keys = client
        .regenerate_keys()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .set_authorization_rule_name(&rule.name)
        .set_parameters(RegenerateAccessKeyParameters::new().set_key_type(KeyType::SecondaryKey))
        .send()
        .await?;
    println!("{}", print::keys(&keys));

    println!("Deleting subscription {subscription1} in topic {topic_name} via update flow...");
    let topic = client
        .update_topic()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .set_topic_name(topic_name)
        .set_subscriptions_to_remove([subscription1])
        .send()
        .await?;
    println!("Deleted subscription {subscription1}");
    println!(
        "Number of subscriptions in the topic after deleting first subscription: {}",
        topic.properties.subscription_count.unwrap_or_default()
    );

    println!("Deleting subscription {subscription2}...");
    let deleted = client
        .delete_subscription()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .set_topic_name(topic_name)
        .set_subscription_name(subscription2)
        .send()
        .await;
    tolerate("subscription", subscription2, deleted);

    println!("Deleting topic {topic_name}...");
    let deleted = client
        .delete_topic()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .set_topic_name(topic_name)
        .send()
        .await;
    tolerate("topic", topic_name, deleted);

    println!("Deleting namespace {namespace_name}...");
    let deleted = client
        .delete_namespace()
        .set_resource_group_name(resource_group)
        .set_namespace_name(namespace_name)
        .until_done()
        .await;
    tolerate("namespace", namespace_name, deleted);

    Ok(())
}

/// Logs a failed delete. Deleting the resource group removes anything left.
fn tolerate(kind: &str, name: &str, result: servicebus_admin::Result<()>) {
    match result {
        Ok(()) => println!("Deleted {kind} {name}"),
        Err(e) => tracing::warn!("cannot delete {kind} {name}, continuing: {e}"),
    }
}
