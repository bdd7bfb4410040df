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
mod publish_subscribe_basic {
    use mockall::Sequence;
    use servicebus_admin::client::ServiceBusManagement;
    use servicebus_admin::error::Error;
    use servicebus_admin::error::rpc::{Code, Status};
    use servicebus_admin::model::*;
    use servicebus_admin::options::RequestOptions;
    use servicebus_emulator::Emulator;
    use servicebus_samples::names::Names;
    use servicebus_samples::publish_subscribe_basic::run_sample;

    type Result<T> = servicebus_admin::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        ServiceBusManagement {}
        impl servicebus_admin::stub::ServiceBusManagement for ServiceBusManagement {
            async fn create_resource_group(&self, req: CreateResourceGroupRequest, _options: RequestOptions) -> Result<ResourceGroup>;
            async fn delete_resource_group(&self, req: DeleteResourceGroupRequest, _options: RequestOptions) -> Result<Operation>;
            async fn create_namespace(&self, req: CreateNamespaceRequest, _options: RequestOptions) -> Result<Operation>;
            async fn delete_namespace(&self, req: DeleteNamespaceRequest, _options: RequestOptions) -> Result<Operation>;
            async fn create_or_update_topic(&self, req: CreateOrUpdateTopicRequest, _options: RequestOptions) -> Result<Topic>;
            async fn get_topic(&self, req: GetTopicRequest, _options: RequestOptions) -> Result<Topic>;
            async fn list_topics(&self, req: ListTopicsRequest, _options: RequestOptions) -> Result<ListTopicsResponse>;
            async fn update_topic(&self, req: UpdateTopicRequest, _options: RequestOptions) -> Result<Topic>;
            async fn delete_topic(&self, req: DeleteTopicRequest, _options: RequestOptions) -> Result<()>;
            async fn create_or_update_subscription(&self, req: CreateOrUpdateSubscriptionRequest, _options: RequestOptions) -> Result<Subscription>;
            async fn get_subscription(&self, req: GetSubscriptionRequest, _options: RequestOptions) -> Result<Subscription>;
            async fn list_subscriptions(&self, req: ListSubscriptionsRequest, _options: RequestOptions) -> Result<ListSubscriptionsResponse>;
            async fn delete_subscription(&self, req: DeleteSubscriptionRequest, _options: RequestOptions) -> Result<()>;
            async fn list_authorization_rules(&self, req: ListAuthorizationRulesRequest, _options: RequestOptions) -> Result<ListAuthorizationRulesResponse>;
            async fn list_keys(&self, req: ListKeysRequest, _options: RequestOptions) -> Result<AccessKeys>;
            async fn regenerate_keys(&self, req: RegenerateKeysRequest, _options: RequestOptions) -> Result<AccessKeys>;
        }
    }

    fn names() -> Names {
        Names {
            resource_group: "rgSB02_test".to_string(),
            namespace: "namespacetest".to_string(),
            topic: "topic_test".to_string(),
            subscription1: "sub1_test".to_string(),
            subscription2: "sub2_test".to_string(),
        }
    }

    fn unavailable() -> Error {
        Error::service_with_http_status(
            Status::default()
                .set_code(Code::Unavailable)
                .set_reason("ServiceUnavailable")
                .set_message("try again later"),
            Some(503),
        )
    }

    fn not_found() -> Error {
        Error::service_with_http_status(
            Status::default()
                .set_code(Code::NotFound)
                .set_reason("ResourceGroupNotFound")
                .set_message("gone"),
            Some(404),
        )
    }

    fn topic(subscription_count: i32) -> Topic {
        Topic::new().set_name("topic_test").set_properties(
            TopicProperties::new()
                .set_max_size_in_megabytes(3072)
                .set_subscription_count(subscription_count),
        )
    }

    fn deleted() -> Result<Operation> {
        Ok(Operation::completed(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn runs_in_order() -> anyhow::Result<()> {
        let mut seq = Sequence::new();
        let mut mock = MockServiceBusManagement::new();
        mock.expect_create_resource_group()
            .withf(|r, _| {
                r.resource_group_name == "rgSB02_test"
                    && r.resource_group.as_ref().is_some_and(|g| g.location == "westus")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|r, _| Ok(ResourceGroup::new().set_name(r.resource_group_name)));
        mock.expect_create_namespace()
            .withf(|r, _| {
                r.namespace_name == "namespacetest"
                    && r
                        .namespace
                        .as_ref()
                        .and_then(|n| n.sku.as_ref())
                        .is_some_and(|s| s.name == SkuName::Standard)
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|r, _| {
                Ok(Operation::completed(
                    serde_json::json!({"name": r.namespace_name}),
                ))
            });
        mock.expect_create_or_update_topic()
            .withf(|r, _| {
                r.topic
                    .as_ref()
                    .is_some_and(|t| t.properties.max_size_in_megabytes == Some(2048))
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(topic(0)));
        mock.expect_get_topic()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(topic(0)));
        mock.expect_update_topic()
            .withf(|r, _| {
                r.max_size_in_megabytes == Some(3072)
                    && r.subscriptions_to_add.len() == 1
                    && r.subscriptions_to_add[0].name == "sub1_test"
                    && r.subscriptions_to_remove.is_empty()
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(topic(1)));
        mock.expect_get_subscription()
            .withf(|r, _| r.subscription_name == "sub1_test")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|r, _| Ok(Subscription::new().set_name(r.subscription_name)));
        mock.expect_create_or_update_subscription()
            .withf(|r, _| r.subscription_name == "sub2_test")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|r, _| Ok(Subscription::new().set_name(r.subscription_name)));
        mock.expect_list_topics()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(ListTopicsResponse::new().set_value([topic(2)])));
        mock.expect_list_subscriptions()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(ListSubscriptionsResponse::new().set_value([
                    Subscription::new().set_name("sub1_test"),
                    Subscription::new().set_name("sub2_test"),
                ]))
            });
        mock.expect_list_authorization_rules()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(ListAuthorizationRulesResponse::new()
                    .set_value([AuthorizationRule::new().set_name("RootManageSharedAccessKey")]))
            });
        mock.expect_list_keys()
            .withf(|r, _| r.authorization_rule_name == "RootManageSharedAccessKey")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(AccessKeys::new().set_secondary_key("old")));
        mock.expect_regenerate_keys()
            .withf(|r, _| {
                r.parameters
                    .as_ref()
                    .is_some_and(|p| p.key_type == KeyType::SecondaryKey)
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(AccessKeys::new().set_secondary_key("new")));
        mock.expect_update_topic()
            .withf(|r, _| {
                r.subscriptions_to_remove == ["sub1_test"] && r.subscriptions_to_add.is_empty()
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(topic(1)));
        mock.expect_delete_subscription()
            .withf(|r, _| r.subscription_name == "sub2_test")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        mock.expect_delete_topic()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        mock.expect_delete_namespace()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| deleted());
        mock.expect_delete_resource_group()
            .withf(|r, _| r.resource_group_name == "rgSB02_test")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| deleted());

        let client = ServiceBusManagement::from_stub(mock);
        run_sample(&client, &names(), "westus").await?;
        Ok(())
    }

    #[tokio::test]
    async fn tolerates_delete_errors() -> anyhow::Result<()> {
        let mut mock = MockServiceBusManagement::new();
        mock.expect_create_resource_group()
            .returning(|r, _| Ok(ResourceGroup::new().set_name(r.resource_group_name)));
        mock.expect_create_namespace()
            .returning(|_, _| Ok(Operation::completed(serde_json::json!({}))));
        mock.expect_create_or_update_topic()
            .returning(|_, _| Ok(topic(0)));
        mock.expect_get_topic().returning(|_, _| Ok(topic(0)));
        mock.expect_update_topic().returning(|_, _| Ok(topic(1)));
        mock.expect_get_subscription()
            .returning(|_, _| Ok(Subscription::new()));
        mock.expect_create_or_update_subscription()
            .returning(|_, _| Ok(Subscription::new()));
        mock.expect_list_topics()
            .returning(|_, _| Ok(ListTopicsResponse::new()));
        mock.expect_list_subscriptions()
            .returning(|_, _| Ok(ListSubscriptionsResponse::new()));
        mock.expect_list_authorization_rules().returning(|_, _| {
            Ok(ListAuthorizationRulesResponse::new().set_value([AuthorizationRule::new()]))
        });
        mock.expect_list_keys().returning(|_, _| Ok(AccessKeys::new()));
        mock.expect_regenerate_keys()
            .returning(|_, _| Ok(AccessKeys::new()));
        mock.expect_delete_subscription()
            .times(1)
            .returning(|_, _| Err(not_found()));
        mock.expect_delete_topic()
            .times(1)
            .returning(|_, _| Err(unavailable()));
        mock.expect_delete_namespace()
            .times(1)
            .returning(|_, _| Err(unavailable()));
        mock.expect_delete_resource_group()
            .times(1)
            .returning(|_, _| deleted());

        let client = ServiceBusManagement::from_stub(mock);
        run_sample(&client, &names(), "westus").await?;
        Ok(())
    }

    #[tokio::test]
    async fn cleanup_after_namespace_failure() {
        let mut mock = MockServiceBusManagement::new();
        mock.expect_create_resource_group()
            .times(1)
            .returning(|r, _| Ok(ResourceGroup::new().set_name(r.resource_group_name)));
        mock.expect_create_namespace()
            .times(1)
            .returning(|_, _| Err(unavailable()));
        mock.expect_delete_resource_group()
            .withf(|r, _| r.resource_group_name == "rgSB02_test")
            .times(1)
            .returning(|_, _| deleted());

        let client = ServiceBusManagement::from_stub(mock);
        let err = run_sample(&client, &names(), "westus").await.unwrap_err();
        let err = err.downcast::<Error>().unwrap();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
    }

    #[tokio::test]
    async fn cleanup_after_update_failure() {
        let mut mock = MockServiceBusManagement::new();
        mock.expect_create_resource_group()
            .returning(|r, _| Ok(ResourceGroup::new().set_name(r.resource_group_name)));
        mock.expect_create_namespace()
            .returning(|_, _| Ok(Operation::completed(serde_json::json!({}))));
        mock.expect_create_or_update_topic()
            .returning(|_, _| Ok(topic(0)));
        mock.expect_get_topic().returning(|_, _| Ok(topic(0)));
        mock.expect_update_topic()
            .times(1)
            .returning(|_, _| Err(unavailable()));
        mock.expect_delete_resource_group()
            .times(1)
            .returning(|_, _| Err(not_found()));

        let client = ServiceBusManagement::from_stub(mock);
        let err = run_sample(&client, &names(), "westus").await.unwrap_err();
        let err = err.downcast::<Error>().unwrap();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
    }

    #[tokio::test]
    async fn cleanup_after_create_resource_group_failure() {
        let mut mock = MockServiceBusManagement::new();
        mock.expect_create_resource_group()
            .times(1)
            .returning(|_, _| Err(unavailable()));
        mock.expect_delete_resource_group()
            .withf(|r, _| r.resource_group_name == "rgSB02_test")
            .times(1)
            .returning(|_, _| Err(not_found()));

        let client = ServiceBusManagement::from_stub(mock);
        let err = run_sample(&client, &names(), "westus").await.unwrap_err();
        let err = err.downcast::<Error>().unwrap();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
    }

    #[tokio::test]
    async fn cleanup_after_create_resource_group_timeout() {
        let mut mock = MockServiceBusManagement::new();
        mock.expect_create_resource_group()
            .times(1)
            .returning(|_, _| Err(Error::timeout("response lost")));
        mock.expect_delete_resource_group()
            .withf(|r, _| r.resource_group_name == "rgSB02_test")
            .times(1)
            .returning(|_, _| deleted());

        let client = ServiceBusManagement::from_stub(mock);
        let err = run_sample(&client, &names(), "westus").await.unwrap_err();
        let err = err.downcast::<Error>().unwrap();
        assert!(err.is_timeout(), "{err:?}");
    }

    #[tokio::test]
    async fn emulator() -> anyhow::Result<()> {
        let emulator = Emulator::new().with_polls_to_complete(2);
        let client = ServiceBusManagement::from_stub(emulator);
        let names = Names::random();
        run_sample(&client, &names, "westus").await?;

        let err = client
            .get_resource_group()
            .set_resource_group_name(&names.resource_group)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        Ok(())
    }
}
