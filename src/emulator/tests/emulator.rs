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

#[cfg(test)]
mod emulator {
    use servicebus_admin::client::ServiceBusManagement;
    use servicebus_admin::error::rpc::Code;
    use servicebus_admin::lro::{Poller, PollingResult};
    use servicebus_admin::model::{
        KeyType, Namespace, RegenerateAccessKeyParameters, ResourceGroup, Sku, SkuName,
        Subscription,
    };
    use servicebus_emulator::Emulator;

    type TestResult = anyhow::Result<()>;

    const RG: &str = "rgSB02_test";
    const NS: &str = "namespace0123";
    const TOPIC: &str = "topic_0123";

    async fn with_topic(emulator: Emulator) -> anyhow::Result<ServiceBusManagement> {
        let client = ServiceBusManagement::from_stub(emulator);
        client
            .create_resource_group()
            .set_resource_group_name(RG)
            .set_resource_group(ResourceGroup::new().set_location("westus"))
            .send()
            .await?;
        client
            .create_namespace()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_namespace(
                Namespace::new()
                    .set_location("westus")
                    .set_sku(Sku::new().set_name(SkuName::Standard)),
            )
            .until_done()
            .await?;
        client
            .create_or_update_topic()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_topic_name(TOPIC)
            .send()
            .await?;
        Ok(client)
    }

    fn reason(err: &servicebus_admin::error::Error) -> String {
        err.status().map(|s| s.reason.clone()).unwrap_or_default()
    }

    #[tokio::test]
    async fn requires_parents() -> TestResult {
        let client = ServiceBusManagement::from_stub(Emulator::new());
        let err = client
            .create_namespace()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_namespace(Namespace::new().set_location("westus"))
            .until_done()
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        assert_eq!(reason(&err), "ResourceGroupNotFound");
        assert_eq!(err.http_status_code(), Some(404));

        let err = client
            .create_or_update_subscription()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_topic_name(TOPIC)
            .set_subscription_name("sub1_0123")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_names() -> TestResult {
        let client = with_topic(Emulator::new()).await?;
        let err = client
            .create_namespace()
            .set_resource_group_name(RG)
            .set_namespace_name("ns")
            .set_namespace(Namespace::new().set_location("westus"))
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::InvalidArgument));

        let err = client
            .create_or_update_subscription()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_topic_name(TOPIC)
            .set_subscription_name("-bad")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::InvalidArgument));
        Ok(())
    }

    #[tokio::test]
    async fn namespace_operation_completes_after_polls() -> TestResult {
        let client = ServiceBusManagement::from_stub(Emulator::new().with_polls_to_complete(2));
        client
            .create_resource_group()
            .set_resource_group_name(RG)
            .set_resource_group(ResourceGroup::new().set_location("westus"))
            .send()
            .await?;
        let mut poller = client
            .create_namespace()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_namespace(Namespace::new().set_location("westus"))
            .poller();
        let mut in_progress = 0;
        let namespace = loop {
            match poller.poll().await {
                Some(PollingResult::InProgress(_)) => in_progress += 1,
                Some(PollingResult::Completed(r)) => break r?,
                Some(PollingResult::PollingError(e)) => return Err(e.into()),
                None => anyhow::bail!("poller ended without a result"),
            }
        };
        assert_eq!(in_progress, 2);
        assert_eq!(namespace.provisioning_state(), "Succeeded");
        assert_eq!(
            namespace.properties.as_ref().map(|p| p.service_bus_endpoint.as_str()),
            Some("https://namespace0123.servicebus.windows.net:443/")
        );
        Ok(())
    }

    #[tokio::test]
    async fn update_topic_subscription_count() -> TestResult {
        let client = with_topic(Emulator::new()).await?;
        let topic = client
            .update_topic()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_topic_name(TOPIC)
            .set_max_size_in_megabytes(2048)
            .set_subscriptions_to_add([
                Subscription::new().set_name("sub1_0123"),
                Subscription::new().set_name("sub2_0123"),
            ])
            .send()
            .await?;
        assert_eq!(topic.properties.max_size_in_megabytes, Some(2048));
        assert_eq!(topic.properties.subscription_count, Some(2));

        let topic = client
            .update_topic()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_topic_name(TOPIC)
            .set_subscriptions_to_remove(["sub1_0123"])
            .send()
            .await?;
        assert_eq!(topic.properties.subscription_count, Some(1));

        let mut items = client
            .list_subscriptions()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_topic_name(TOPIC)
            .by_item();
        let mut names = Vec::new();
        while let Some(s) = items.next().await {
            names.push(s?.name);
        }
        assert_eq!(names, vec!["sub2_0123"]);
        Ok(())
    }

    #[tokio::test]
    async fn list_topics_pages() -> TestResult {
        let client = with_topic(Emulator::new().with_page_size(2)).await?;
        for i in 1..5 {
            client
                .create_or_update_topic()
                .set_resource_group_name(RG)
                .set_namespace_name(NS)
                .set_topic_name(format!("topic_{i}"))
                .send()
                .await?;
        }
        let mut pages = client
            .list_topics()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .by_page();
        let mut sizes = Vec::new();
        while let Some(page) = pages.next().await {
            sizes.push(page?.value.len());
        }
        assert_eq!(sizes, vec![2, 2, 1]);
        Ok(())
    }

    #[tokio::test]
    async fn regenerate_keys() -> TestResult {
        let client = with_topic(Emulator::new()).await?;
        let rules = client
            .list_authorization_rules()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .send()
            .await?;
        let rule_name = rules
            .value
            .first()
            .map(|r| r.name.clone())
            .unwrap_or_default();
        assert_eq!(rule_name, "RootManageSharedAccessKey");
        let before = client
            .list_keys()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_authorization_rule_name(&rule_name)
            .send()
            .await?;
        assert!(
            before
                .primary_connection_string
                .starts_with("Endpoint=sb://namespace0123.servicebus.windows.net/;"),
            "{}",
            before.primary_connection_string
        );
        let after = client
            .regenerate_keys()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_authorization_rule_name(&rule_name)
            .set_parameters(RegenerateAccessKeyParameters::new().set_key_type(KeyType::PrimaryKey))
            .send()
            .await?;
        assert_ne!(after.primary_key, before.primary_key);
        assert_eq!(after.secondary_key, before.secondary_key);
        assert_eq!(after.key_name, rule_name);
        Ok(())
    }

    #[tokio::test]
    async fn delete_resource_group_cascades() -> TestResult {
        let client = with_topic(Emulator::new().with_polls_to_complete(1)).await?;
        client
            .delete_resource_group()
            .set_resource_group_name(RG)
            .until_done()
            .await?;
        let err = client
            .get_topic()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_topic_name(TOPIC)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        let namespaces = client.list_namespaces().send().await?;
        assert!(namespaces.value.is_empty(), "{namespaces:?}");

        let err = client
            .delete_resource_group()
            .set_resource_group_name(RG)
            .until_done()
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn delete_children_in_order() -> TestResult {
        let client = with_topic(Emulator::new()).await?;
        client
            .create_or_update_subscription()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_topic_name(TOPIC)
            .set_subscription_name("sub2_0123")
            .send()
            .await?;
        client
            .delete_subscription()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_topic_name(TOPIC)
            .set_subscription_name("sub2_0123")
            .send()
            .await?;
        client
            .delete_topic()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .set_topic_name(TOPIC)
            .send()
            .await?;
        client
            .delete_namespace()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .until_done()
            .await?;
        let group = client
            .get_resource_group()
            .set_resource_group_name(RG)
            .send()
            .await?;
        assert_eq!(group.name, RG);
        let err = client
            .get_namespace()
            .set_resource_group_name(RG)
            .set_namespace_name(NS)
            .send()
            .await
            .unwrap_err();
        assert_eq!(reason(&err), "NamespaceNotFound");
        Ok(())
    }
}
