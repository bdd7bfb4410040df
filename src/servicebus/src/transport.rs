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

//! Implements the stub over the Resource Manager REST API.

use crate::Result;
use crate::client_builder::{ClientConfig, Error as BuilderError};
use crate::error::Error;
use crate::error::rpc::{Code, Status};
use crate::http::{NoBody, ReqwestClient, Response};
use crate::model::{Operation, OperationResult};
use crate::options::RequestOptions;
use crate::polling::backoff_policy::PollingBackoffPolicy;
use crate::polling::error_policy::PollingErrorPolicy;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

pub(crate) const DEFAULT_ENDPOINT: &str = "https://management.azure.com";
const RESOURCES_API_VERSION: &str = "2021-04-01";
const SERVICEBUS_API_VERSION: &str = "2021-11-01";

const ASYNC_OPERATION_HEADER: &str = "azure-asyncoperation";

/// Implements [ServiceBusManagement](super::stub::ServiceBusManagement) using
/// the Resource Manager REST API.
#[derive(Clone, Debug)]
pub struct ServiceBusManagement {
    inner: ReqwestClient,
    subscription_id: String,
    polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl ServiceBusManagement {
    pub async fn new(config: ClientConfig) -> crate::client_builder::Result<Self> {
        let inner = ReqwestClient::new(&config, DEFAULT_ENDPOINT).await?;
        let subscription_id = config
            .subscription_id
            .clone()
            .or_else(|| inner.credentials().subscription_id().map(str::to_string))
            .ok_or_else(|| BuilderError::configuration("the subscription id is not set"))?;
        Ok(Self {
            inner,
            subscription_id,
            polling_error_policy: config.polling_error_policy,
            polling_backoff_policy: config.polling_backoff_policy,
        })
    }

    fn resource_group_path(&self, resource_group: &str) -> Result<String> {
        Ok(format!(
            "/subscriptions/{}/resourcegroups/{}",
            self.subscription_id,
            required("resource_group_name", resource_group)?
        ))
    }

    fn namespace_path(&self, resource_group: &str, namespace: &str) -> Result<String> {
        Ok(format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.ServiceBus/namespaces/{}",
            self.subscription_id,
            required("resource_group_name", resource_group)?,
            required("namespace_name", namespace)?
        ))
    }

    fn topic_path(&self, resource_group: &str, namespace: &str, topic: &str) -> Result<String> {
        Ok(format!(
            "{}/topics/{}",
            self.namespace_path(resource_group, namespace)?,
            required("topic_name", topic)?
        ))
    }

    fn subscription_path(
        &self,
        resource_group: &str,
        namespace: &str,
        topic: &str,
        subscription: &str,
    ) -> Result<String> {
        Ok(format!(
            "{}/subscriptions/{}",
            self.topic_path(resource_group, namespace, topic)?,
            required("subscription_name", subscription)?
        ))
    }

    fn authorization_rule_path(
        &self,
        resource_group: &str,
        namespace: &str,
        rule: &str,
    ) -> Result<String> {
        Ok(format!(
            "{}/AuthorizationRules/{}",
            self.namespace_path(resource_group, namespace)?,
            required("authorization_rule_name", rule)?
        ))
    }

    async fn call<I, O>(
        &self,
        method: Method,
        path: &str,
        api_version: &str,
        body: Option<I>,
        options: &RequestOptions,
    ) -> Result<Response<O>>
    where
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        let builder = self
            .inner
            .builder(method, path)
            .query(&[("api-version", api_version)]);
        self.inner.execute(builder, body, options).await
    }

    async fn get<O>(&self, path: &str, api_version: &str, options: &RequestOptions) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        self.call(Method::GET, path, api_version, None::<NoBody>, options)
            .await
            .map(|r| r.body)
    }

    async fn put<I, O>(
        &self,
        path: &str,
        api_version: &str,
        body: I,
        options: &RequestOptions,
    ) -> Result<O>
    where
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        self.call(Method::PUT, path, api_version, Some(body), options)
            .await
            .map(|r| r.body)
    }

    async fn delete(&self, path: &str, api_version: &str, options: &RequestOptions) -> Result<()> {
        self.call::<NoBody, Value>(Method::DELETE, path, api_version, None, options)
            .await
            .map(|_| ())
    }

    async fn list<O>(
        &self,
        path: Result<String>,
        page_token: &str,
        top: Option<i32>,
        options: &RequestOptions,
    ) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        // A `nextLink` is an absolute URL and already carries the query.
        if !page_token.is_empty() {
            let builder = self.inner.builder_for_url(Method::GET, page_token);
            return self
                .inner
                .execute::<NoBody, O>(builder, None, options)
                .await
                .map(|r| r.body);
        }
        let mut builder = self
            .inner
            .builder(Method::GET, &path?)
            .query(&[("api-version", SERVICEBUS_API_VERSION)]);
        if let Some(top) = top {
            builder = builder.query(&[("$top", top)]);
        }
        self.inner
            .execute::<NoBody, O>(builder, None, options)
            .await
            .map(|r| r.body)
    }

    /// Starts a long-running operation and converts the response.
    async fn start_operation(
        &self,
        method: Method,
        path: String,
        api_version: &str,
        body: Option<Value>,
        resource: Option<ResourceRef>,
        options: &RequestOptions,
    ) -> Result<Operation> {
        let response = self
            .call::<Value, Value>(method, &path, api_version, body, options)
            .await?;
        let header = |name: &str| {
            response
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        if let Some(url) = header(ASYNC_OPERATION_HEADER) {
            return OperationToken::new(PollKind::AsyncOperation, url, resource).into_operation();
        }
        if response.status == 202 {
            if let Some(url) = header(reqwest::header::LOCATION.as_str()) {
                return OperationToken::new(PollKind::Location, url, resource).into_operation();
            }
        }
        let Some(resource) = resource else {
            return Ok(Operation::completed(Value::Null));
        };
        match ProvisioningState::of(&response.body) {
            ProvisioningState::Running => {
                OperationToken::new(PollKind::ProvisioningState, String::new(), Some(resource))
                    .into_operation()
            }
            ProvisioningState::Failed(status) => Ok(failed(status)),
            ProvisioningState::Succeeded => Ok(Operation::completed(response.body)),
        }
    }

    /// Fetches the resource once its operation succeeded.
    async fn finish_operation(
        &self,
        token: &OperationToken,
        options: &RequestOptions,
    ) -> Result<Operation> {
        let Some(resource) = &token.resource else {
            return Ok(Operation::completed(Value::Null));
        };
        let body = self
            .get::<Value>(&resource.path, &resource.api_version, options)
            .await?;
        Ok(Operation::completed(body))
    }
}

impl super::stub::ServiceBusManagement for ServiceBusManagement {
    async fn create_resource_group(
        &self,
        req: crate::model::CreateResourceGroupRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ResourceGroup> {
        let path = self.resource_group_path(&req.resource_group_name)?;
        let body = req.resource_group.unwrap_or_default();
        self.put(&path, RESOURCES_API_VERSION, body, &options).await
    }

    async fn get_resource_group(
        &self,
        req: crate::model::GetResourceGroupRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ResourceGroup> {
        let path = self.resource_group_path(&req.resource_group_name)?;
        self.get(&path, RESOURCES_API_VERSION, &options).await
    }

    async fn delete_resource_group(
        &self,
        req: crate::model::DeleteResourceGroupRequest,
        options: RequestOptions,
    ) -> Result<Operation> {
        let path = self.resource_group_path(&req.resource_group_name)?;
        self.start_operation(Method::DELETE, path, RESOURCES_API_VERSION, None, None, &options)
            .await
    }

    async fn create_namespace(
        &self,
        req: crate::model::CreateNamespaceRequest,
        options: RequestOptions,
    ) -> Result<Operation> {
        let path = self.namespace_path(&req.resource_group_name, &req.namespace_name)?;
        let body = serde_json::to_value(req.namespace.unwrap_or_default()).map_err(Error::ser)?;
        let resource = ResourceRef::new(&path, SERVICEBUS_API_VERSION);
        self.start_operation(
            Method::PUT,
            path,
            SERVICEBUS_API_VERSION,
            Some(body),
            Some(resource),
            &options,
        )
        .await
    }

    async fn get_namespace(
        &self,
        req: crate::model::GetNamespaceRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Namespace> {
        let path = self.namespace_path(&req.resource_group_name, &req.namespace_name)?;
        self.get(&path, SERVICEBUS_API_VERSION, &options).await
    }

    async fn list_namespaces(
        &self,
        req: crate::model::ListNamespacesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListNamespacesResponse> {
        let path = if req.resource_group_name.is_empty() {
            format!(
                "/subscriptions/{}/providers/Microsoft.ServiceBus/namespaces",
                self.subscription_id
            )
        } else {
            format!(
                "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.ServiceBus/namespaces",
                self.subscription_id, req.resource_group_name
            )
        };
        self.list(Ok(path), &req.page_token, None, &options).await
    }

    async fn delete_namespace(
        &self,
        req: crate::model::DeleteNamespaceRequest,
        options: RequestOptions,
    ) -> Result<Operation> {
        let path = self.namespace_path(&req.resource_group_name, &req.namespace_name)?;
        self.start_operation(Method::DELETE, path, SERVICEBUS_API_VERSION, None, None, &options)
            .await
    }

    async fn create_or_update_topic(
        &self,
        req: crate::model::CreateOrUpdateTopicRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Topic> {
        let path = self.topic_path(&req.resource_group_name, &req.namespace_name, &req.topic_name)?;
        let body = req.topic.unwrap_or_default();
        self.put(&path, SERVICEBUS_API_VERSION, body, &options).await
    }

    async fn get_topic(
        &self,
        req: crate::model::GetTopicRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Topic> {
        let path = self.topic_path(&req.resource_group_name, &req.namespace_name, &req.topic_name)?;
        self.get(&path, SERVICEBUS_API_VERSION, &options).await
    }

    async fn list_topics(
        &self,
        req: crate::model::ListTopicsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListTopicsResponse> {
        let path = self
            .namespace_path(&req.resource_group_name, &req.namespace_name)
            .map(|p| format!("{p}/topics"));
        self.list(path, &req.page_token, req.top, &options).await
    }

    async fn update_topic(
        &self,
        req: crate::model::UpdateTopicRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Topic> {
        let topic_path =
            self.topic_path(&req.resource_group_name, &req.namespace_name, &req.topic_name)?;
        let child_path = |name: &str| -> Result<String> {
            Ok(format!("{topic_path}/subscriptions/{}", required("subscription name", name)?))
        };
        let added = req
            .subscriptions_to_add
            .into_iter()
            .map(|s| child_path(s.name.as_str()).map(|path| (path, s)))
            .collect::<Result<Vec<_>>>()?;
        let removed = req
            .subscriptions_to_remove
            .iter()
            .map(|name| child_path(name.as_str()))
            .collect::<Result<Vec<_>>>()?;

        if let Some(size) = req.max_size_in_megabytes {
            let current = self
                .get::<crate::model::Topic>(&topic_path, SERVICEBUS_API_VERSION, &options)
                .await?;
            let body = crate::model::Topic::new().set_properties(crate::model::TopicProperties {
                max_size_in_megabytes: Some(size),
                ..writable_topic_properties(current.properties)
            });
            self.put::<_, crate::model::Topic>(&topic_path, SERVICEBUS_API_VERSION, body, &options)
                .await?;
        }
        for (path, subscription) in added {
            tracing::debug!("attaching subscription {path}");
            let body = crate::model::Subscription::new().set_properties(subscription.properties);
            self.put::<_, crate::model::Subscription>(&path, SERVICEBUS_API_VERSION, body, &options)
                .await?;
        }
        for path in removed {
            tracing::debug!("detaching subscription {path}");
            self.delete(&path, SERVICEBUS_API_VERSION, &options).await?;
        }
        self.get(&topic_path, SERVICEBUS_API_VERSION, &options).await
    }

    async fn delete_topic(
        &self,
        req: crate::model::DeleteTopicRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let path = self.topic_path(&req.resource_group_name, &req.namespace_name, &req.topic_name)?;
        self.delete(&path, SERVICEBUS_API_VERSION, &options).await
    }

    async fn create_or_update_subscription(
        &self,
        req: crate::model::CreateOrUpdateSubscriptionRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Subscription> {
        let path = self.subscription_path(
            &req.resource_group_name,
            &req.namespace_name,
            &req.topic_name,
            &req.subscription_name,
        )?;
        let body = req.subscription.unwrap_or_default();
        self.put(&path, SERVICEBUS_API_VERSION, body, &options).await
    }

    async fn get_subscription(
        &self,
        req: crate::model::GetSubscriptionRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Subscription> {
        let path = self.subscription_path(
            &req.resource_group_name,
            &req.namespace_name,
            &req.topic_name,
            &req.subscription_name,
        )?;
        self.get(&path, SERVICEBUS_API_VERSION, &options).await
    }

    async fn list_subscriptions(
        &self,
        req: crate::model::ListSubscriptionsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListSubscriptionsResponse> {
        let path = self
            .topic_path(&req.resource_group_name, &req.namespace_name, &req.topic_name)
            .map(|p| format!("{p}/subscriptions"));
        self.list(path, &req.page_token, req.top, &options).await
    }

    async fn delete_subscription(
        &self,
        req: crate::model::DeleteSubscriptionRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let path = self.subscription_path(
            &req.resource_group_name,
            &req.namespace_name,
            &req.topic_name,
            &req.subscription_name,
        )?;
        self.delete(&path, SERVICEBUS_API_VERSION, &options).await
    }

    async fn list_authorization_rules(
        &self,
        req: crate::model::ListAuthorizationRulesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListAuthorizationRulesResponse> {
        let path = self
            .namespace_path(&req.resource_group_name, &req.namespace_name)
            .map(|p| format!("{p}/AuthorizationRules"));
        self.list(path, &req.page_token, None, &options).await
    }

    async fn get_authorization_rule(
        &self,
        req: crate::model::GetAuthorizationRuleRequest,
        options: RequestOptions,
    ) -> Result<crate::model::AuthorizationRule> {
        let path = self.authorization_rule_path(
            &req.resource_group_name,
            &req.namespace_name,
            &req.authorization_rule_name,
        )?;
        self.get(&path, SERVICEBUS_API_VERSION, &options).await
    }

    async fn list_keys(
        &self,
        req: crate::model::ListKeysRequest,
        options: RequestOptions,
    ) -> Result<crate::model::AccessKeys> {
        let path = self.authorization_rule_path(
            &req.resource_group_name,
            &req.namespace_name,
            &req.authorization_rule_name,
        )?;
        self.call(
            Method::POST,
            &format!("{path}/listKeys"),
            SERVICEBUS_API_VERSION,
            None::<NoBody>,
            &options,
        )
        .await
        .map(|r| r.body)
    }

    async fn regenerate_keys(
        &self,
        req: crate::model::RegenerateKeysRequest,
        options: RequestOptions,
    ) -> Result<crate::model::AccessKeys> {
        let path = self.authorization_rule_path(
            &req.resource_group_name,
            &req.namespace_name,
            &req.authorization_rule_name,
        )?;
        let body = req.parameters.unwrap_or_default();
        self.call(
            Method::POST,
            &format!("{path}/regenerateKeys"),
            SERVICEBUS_API_VERSION,
            Some(body),
            &options,
        )
        .await
        .map(|r| r.body)
    }

    async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<Operation> {
        let token = OperationToken::parse(&req.name)?;
        let in_progress = || Ok(Operation::new().set_name(&req.name));
        match token.kind {
            PollKind::AsyncOperation => {
                let builder = self.inner.builder_for_url(Method::GET, &token.url);
                let response = self
                    .inner
                    .execute::<NoBody, AsyncOperationStatus>(builder, None, &options)
                    .await?;
                match response.body.status.as_str() {
                    "Succeeded" => self.finish_operation(&token, &options).await,
                    "Failed" | "Canceled" => Ok(failed(response.body.into_status())),
                    _ => in_progress(),
                }
            }
            PollKind::Location => {
                let builder = self.inner.builder_for_url(Method::GET, &token.url);
                let response = self
                    .inner
                    .execute::<NoBody, Value>(builder, None, &options)
                    .await?;
                if response.status == 202 {
                    return in_progress();
                }
                self.finish_operation(&token, &options).await
            }
            PollKind::ProvisioningState => {
                let Some(resource) = &token.resource else {
                    return Err(Error::binding("operation name without a resource"));
                };
                let body = self
                    .get::<Value>(&resource.path, &resource.api_version, &options)
                    .await?;
                match ProvisioningState::of(&body) {
                    ProvisioningState::Running => in_progress(),
                    ProvisioningState::Failed(status) => Ok(failed(status)),
                    ProvisioningState::Succeeded => Ok(Operation::completed(body)),
                }
            }
        }
    }

    fn get_polling_error_policy(&self, options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
        options
            .polling_error_policy()
            .clone()
            .or_else(|| self.polling_error_policy.clone())
            .unwrap_or_else(|| crate::polling::default_error_policy(options))
    }

    fn get_polling_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn PollingBackoffPolicy> {
        options
            .polling_backoff_policy()
            .clone()
            .or_else(|| self.polling_backoff_policy.clone())
            .unwrap_or_else(|| crate::polling::default_backoff_policy(options))
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::binding(format!("missing required field `{field}`")));
    }
    Ok(value)
}

fn failed(status: Status) -> Operation {
    Operation::new()
        .set_done(true)
        .set_result(OperationResult::Error(status))
}

/// Drops the fields the service computes, which cannot be sent in a PUT.
fn writable_topic_properties(p: crate::model::TopicProperties) -> crate::model::TopicProperties {
    crate::model::TopicProperties {
        size_in_bytes: None,
        created_at: None,
        updated_at: None,
        accessed_at: None,
        subscription_count: None,
        count_details: None,
        ..p
    }
}

/// How to poll a long-running operation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum PollKind {
    /// Poll the `Azure-AsyncOperation` URL for a status document.
    AsyncOperation,
    /// Poll the `Location` URL until it stops returning 202.
    Location,
    /// Poll the resource until its `provisioningState` is terminal.
    ProvisioningState,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceRef {
    path: String,
    api_version: String,
}

impl ResourceRef {
    fn new(path: &str, api_version: &str) -> Self {
        Self {
            path: path.to_string(),
            api_version: api_version.to_string(),
        }
    }
}

/// The contents of [Operation::name] for operations started by this
/// transport.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperationToken {
    kind: PollKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resource: Option<ResourceRef>,
}

impl OperationToken {
    fn new(kind: PollKind, url: String, resource: Option<ResourceRef>) -> Self {
        Self {
            kind,
            url,
            resource,
        }
    }

    fn parse(name: &str) -> Result<Self> {
        serde_json::from_str(name)
            .map_err(|e| Error::binding(format!("`{name}` is not a valid operation name: {e}")))
    }

    fn into_operation(self) -> Result<Operation> {
        let name = serde_json::to_string(&self).map_err(Error::ser)?;
        Ok(Operation::new().set_name(name))
    }
}

/// The document returned by an `Azure-AsyncOperation` URL.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AsyncOperationStatus {
    status: String,
    error: Option<crate::error::rpc::ErrorDetail>,
}

impl AsyncOperationStatus {
    fn into_status(self) -> Status {
        let status = Status::default().set_code(Code::Unknown);
        match self.error {
            Some(e) => status.set_reason(e.code).set_message(e.message),
            None => status.set_message(format!("the operation status is {}", self.status)),
        }
    }
}

enum ProvisioningState {
    Running,
    Succeeded,
    Failed(Status),
}

impl ProvisioningState {
    /// Classifies a resource by its `properties.provisioningState`.
    ///
    /// Resources without a provisioning state are complete.
    fn of(resource: &Value) -> Self {
        let state = resource
            .get("properties")
            .and_then(|p| p.get("provisioningState"))
            .and_then(Value::as_str);
        match state {
            None | Some("Succeeded") => Self::Succeeded,
            Some(s @ ("Failed" | "Canceled")) => Self::Failed(
                Status::default()
                    .set_code(Code::Unknown)
                    .set_reason(s)
                    .set_message(format!("the resource provisioning state is {s}")),
            ),
            Some(_) => Self::Running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn token_roundtrip() -> anyhow::Result<()> {
        let token = OperationToken::new(
            PollKind::AsyncOperation,
            "https://example.com/operations/123".to_string(),
            Some(ResourceRef::new("/subscriptions/s/resourceGroups/rg", RESOURCES_API_VERSION)),
        );
        let operation = token.clone().into_operation()?;
        assert!(!operation.done, "{operation:?}");
        assert_eq!(OperationToken::parse(&operation.name)?, token);
        Ok(())
    }

    #[test]
    fn token_parse_error() {
        let err = OperationToken::parse("not-a-token").unwrap_err();
        assert!(err.is_binding(), "{err:?}");
    }

    #[test_case(serde_json::json!({}), true, false; "missing")]
    #[test_case(serde_json::json!({"properties": {"provisioningState": "Succeeded"}}), true, false; "succeeded")]
    #[test_case(serde_json::json!({"properties": {"provisioningState": "Created"}}), false, false; "created")]
    #[test_case(serde_json::json!({"properties": {"provisioningState": "Failed"}}), false, true; "failed")]
    #[test_case(serde_json::json!({"properties": {"provisioningState": "Canceled"}}), false, true; "canceled")]
    fn provisioning_state(resource: Value, succeeded: bool, failed: bool) {
        let got = ProvisioningState::of(&resource);
        assert_eq!(matches!(got, ProvisioningState::Succeeded), succeeded);
        assert_eq!(matches!(got, ProvisioningState::Failed(_)), failed);
    }

    #[test]
    fn async_operation_status() {
        let body = serde_json::json!({
            "status": "Failed",
            "error": {"code": "Conflict", "message": "the namespace name is taken"}
        });
        let status = serde_json::from_value::<AsyncOperationStatus>(body)
            .map(AsyncOperationStatus::into_status);
        let status = status.unwrap();
        assert_eq!(status.reason, "Conflict");
        assert_eq!(status.message, "the namespace name is taken");
    }

    #[test]
    fn required_field() {
        assert_eq!(required("name", "value").ok(), Some("value"));
        let err = required("namespace_name", "").unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("namespace_name"), "{err}");
    }

    #[test]
    fn writable_topic() {
        let properties = crate::model::TopicProperties {
            subscription_count: Some(2),
            size_in_bytes: Some(1024),
            max_size_in_megabytes: Some(1024),
            enable_express: Some(true),
            ..Default::default()
        };
        let got = writable_topic_properties(properties);
        assert_eq!(got.subscription_count, None);
        assert_eq!(got.size_in_bytes, None);
        assert_eq!(got.max_size_in_megabytes, Some(1024));
        assert_eq!(got.enable_express, Some(true));
    }
}
