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

//! Request builders for [ServiceBusManagement](crate::client::ServiceBusManagement).

pub mod service_bus_management {
    use crate::Result;
    use crate::lro::{self, Poller};
    use crate::options::RequestOptions;
    use crate::options::internal::RequestBuilder as OptionsBuilder;
    use crate::paginator::{ItemPaginator, Paginator};
    use std::sync::Arc;

    type Stub = Arc<dyn crate::stub::dynamic::ServiceBusManagement>;

    /// Common implementation for the request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Stub,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Stub) -> Self {
            Self {
                stub,
                request: R::default(),
                options: RequestOptions::default(),
            }
        }
    }

    /// The request builder for [ServiceBusManagement::create_resource_group][crate::client::ServiceBusManagement::create_resource_group] calls.
    #[derive(Clone, Debug)]
    pub struct CreateResourceGroup(RequestBuilder<crate::model::CreateResourceGroupRequest>);

    impl CreateResourceGroup {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateResourceGroupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ResourceGroup> {
            (*self.0.stub)
                .create_resource_group(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_group_name][crate::model::CreateResourceGroupRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [resource_group][crate::model::CreateResourceGroupRequest::resource_group].
        pub fn set_resource_group<T: Into<crate::model::ResourceGroup>>(mut self, v: T) -> Self {
            self.0.request.resource_group = Some(v.into());
            self
        }
    }

    impl OptionsBuilder for CreateResourceGroup {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::get_resource_group][crate::client::ServiceBusManagement::get_resource_group] calls.
    #[derive(Clone, Debug)]
    pub struct GetResourceGroup(RequestBuilder<crate::model::GetResourceGroupRequest>);

    impl GetResourceGroup {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetResourceGroupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ResourceGroup> {
            (*self.0.stub)
                .get_resource_group(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_group_name][crate::model::GetResourceGroupRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }
    }

    impl OptionsBuilder for GetResourceGroup {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::delete_resource_group][crate::client::ServiceBusManagement::delete_resource_group] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteResourceGroup(RequestBuilder<crate::model::DeleteResourceGroupRequest>);

    impl DeleteResourceGroup {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteResourceGroupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. Use
        /// [until_done][DeleteResourceGroup::until_done] to wait for the operation to
        /// complete, or [poller][DeleteResourceGroup::poller] to observe its progress.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .delete_resource_group(self.0.request, self.0.options)
                .await
        }

        /// Creates a [Poller][lro::Poller] to work with `delete_resource_group`.
        pub fn poller(self) -> impl Poller<()> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let query = move |name: String| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    GetOperation::new(stub)
                        .set_name(name)
                        .with_options(options)
                        .send()
                        .await
                }
            };
            let start = move || self.send();
            lro::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Starts the operation and polls it until it completes.
        pub async fn until_done(self) -> Result<()> {
            self.poller().until_done().await
        }

        /// Sets the value of [resource_group_name][crate::model::DeleteResourceGroupRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }
    }

    impl OptionsBuilder for DeleteResourceGroup {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::create_namespace][crate::client::ServiceBusManagement::create_namespace] calls.
    #[derive(Clone, Debug)]
    pub struct CreateNamespace(RequestBuilder<crate::model::CreateNamespaceRequest>);

    impl CreateNamespace {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateNamespaceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. Use
        /// [until_done][CreateNamespace::until_done] to wait for the operation to
        /// complete, or [poller][CreateNamespace::poller] to observe its progress.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .create_namespace(self.0.request, self.0.options)
                .await
        }

        /// Creates a [Poller][lro::Poller] to work with `create_namespace`.
        pub fn poller(self) -> impl Poller<crate::model::Namespace> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let query = move |name: String| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    GetOperation::new(stub)
                        .set_name(name)
                        .with_options(options)
                        .send()
                        .await
                }
            };
            let start = move || self.send();
            lro::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Starts the operation and polls it until it completes.
        pub async fn until_done(self) -> Result<crate::model::Namespace> {
            self.poller().until_done().await
        }

        /// Sets the value of [resource_group_name][crate::model::CreateNamespaceRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::CreateNamespaceRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [namespace][crate::model::CreateNamespaceRequest::namespace].
        pub fn set_namespace<T: Into<crate::model::Namespace>>(mut self, v: T) -> Self {
            self.0.request.namespace = Some(v.into());
            self
        }
    }

    impl OptionsBuilder for CreateNamespace {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::get_namespace][crate::client::ServiceBusManagement::get_namespace] calls.
    #[derive(Clone, Debug)]
    pub struct GetNamespace(RequestBuilder<crate::model::GetNamespaceRequest>);

    impl GetNamespace {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetNamespaceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Namespace> {
            (*self.0.stub)
                .get_namespace(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_group_name][crate::model::GetNamespaceRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::GetNamespaceRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }
    }

    impl OptionsBuilder for GetNamespace {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::list_namespaces][crate::client::ServiceBusManagement::list_namespaces] calls.
    #[derive(Clone, Debug)]
    pub struct ListNamespaces(RequestBuilder<crate::model::ListNamespacesRequest>);

    impl ListNamespaces {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListNamespacesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListNamespacesResponse> {
            (*self.0.stub)
                .list_namespaces(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> Paginator<crate::model::ListNamespacesResponse, crate::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> ItemPaginator<crate::model::ListNamespacesResponse, crate::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [resource_group_name][crate::model::ListNamespacesRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListNamespacesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    impl OptionsBuilder for ListNamespaces {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::delete_namespace][crate::client::ServiceBusManagement::delete_namespace] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteNamespace(RequestBuilder<crate::model::DeleteNamespaceRequest>);

    impl DeleteNamespace {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteNamespaceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. Use
        /// [until_done][DeleteNamespace::until_done] to wait for the operation to
        /// complete, or [poller][DeleteNamespace::poller] to observe its progress.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .delete_namespace(self.0.request, self.0.options)
                .await
        }

        /// Creates a [Poller][lro::Poller] to work with `delete_namespace`.
        pub fn poller(self) -> impl Poller<()> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let query = move |name: String| {
                let stub = stub.clone();
                let options = options.clone();
                async move {
                    GetOperation::new(stub)
                        .set_name(name)
                        .with_options(options)
                        .send()
                        .await
                }
            };
            let start = move || self.send();
            lro::new_poller(polling_error_policy, polling_backoff_policy, start, query)
        }

        /// Starts the operation and polls it until it completes.
        pub async fn until_done(self) -> Result<()> {
            self.poller().until_done().await
        }

        /// Sets the value of [resource_group_name][crate::model::DeleteNamespaceRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::DeleteNamespaceRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }
    }

    impl OptionsBuilder for DeleteNamespace {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::create_or_update_topic][crate::client::ServiceBusManagement::create_or_update_topic] calls.
    #[derive(Clone, Debug)]
    pub struct CreateOrUpdateTopic(RequestBuilder<crate::model::CreateOrUpdateTopicRequest>);

    impl CreateOrUpdateTopic {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateOrUpdateTopicRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Topic> {
            (*self.0.stub)
                .create_or_update_topic(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_group_name][crate::model::CreateOrUpdateTopicRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::CreateOrUpdateTopicRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [topic_name][crate::model::CreateOrUpdateTopicRequest::topic_name].
        pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.topic_name = v.into();
            self
        }

        /// Sets the value of [topic][crate::model::CreateOrUpdateTopicRequest::topic].
        pub fn set_topic<T: Into<crate::model::Topic>>(mut self, v: T) -> Self {
            self.0.request.topic = Some(v.into());
            self
        }
    }

    impl OptionsBuilder for CreateOrUpdateTopic {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::get_topic][crate::client::ServiceBusManagement::get_topic] calls.
    #[derive(Clone, Debug)]
    pub struct GetTopic(RequestBuilder<crate::model::GetTopicRequest>);

    impl GetTopic {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetTopicRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Topic> {
            (*self.0.stub)
                .get_topic(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_group_name][crate::model::GetTopicRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::GetTopicRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [topic_name][crate::model::GetTopicRequest::topic_name].
        pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.topic_name = v.into();
            self
        }
    }

    impl OptionsBuilder for GetTopic {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::list_topics][crate::client::ServiceBusManagement::list_topics] calls.
    #[derive(Clone, Debug)]
    pub struct ListTopics(RequestBuilder<crate::model::ListTopicsRequest>);

    impl ListTopics {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListTopicsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListTopicsResponse> {
            (*self.0.stub)
                .list_topics(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> Paginator<crate::model::ListTopicsResponse, crate::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> ItemPaginator<crate::model::ListTopicsResponse, crate::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [resource_group_name][crate::model::ListTopicsRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::ListTopicsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListTopicsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [top][crate::model::ListTopicsRequest::top].
        pub fn set_top(mut self, v: i32) -> Self {
            self.0.request.top = Some(v);
            self
        }
    }

    impl OptionsBuilder for ListTopics {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::update_topic][crate::client::ServiceBusManagement::update_topic] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateTopic(RequestBuilder<crate::model::UpdateTopicRequest>);

    impl UpdateTopic {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateTopicRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Topic> {
            (*self.0.stub)
                .update_topic(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_group_name][crate::model::UpdateTopicRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::UpdateTopicRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [topic_name][crate::model::UpdateTopicRequest::topic_name].
        pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.topic_name = v.into();
            self
        }

        /// Sets the value of [max_size_in_megabytes][crate::model::UpdateTopicRequest::max_size_in_megabytes].
        pub fn set_max_size_in_megabytes(mut self, v: i32) -> Self {
            self.0.request.max_size_in_megabytes = Some(v);
            self
        }

        /// Sets the value of [subscriptions_to_add][crate::model::UpdateTopicRequest::subscriptions_to_add].
        pub fn set_subscriptions_to_add<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::Subscription>,
        {
            self.0.request.subscriptions_to_add = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [subscriptions_to_remove][crate::model::UpdateTopicRequest::subscriptions_to_remove].
        pub fn set_subscriptions_to_remove<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request.subscriptions_to_remove = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    impl OptionsBuilder for UpdateTopic {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::delete_topic][crate::client::ServiceBusManagement::delete_topic] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteTopic(RequestBuilder<crate::model::DeleteTopicRequest>);

    impl DeleteTopic {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteTopicRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            (*self.0.stub)
                .delete_topic(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_group_name][crate::model::DeleteTopicRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::DeleteTopicRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [topic_name][crate::model::DeleteTopicRequest::topic_name].
        pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.topic_name = v.into();
            self
        }
    }

    impl OptionsBuilder for DeleteTopic {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::create_or_update_subscription][crate::client::ServiceBusManagement::create_or_update_subscription] calls.
    #[derive(Clone, Debug)]
    pub struct CreateOrUpdateSubscription(RequestBuilder<crate::model::CreateOrUpdateSubscriptionRequest>);

    impl CreateOrUpdateSubscription {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateOrUpdateSubscriptionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Subscription> {
            (*self.0.stub)
                .create_or_update_subscription(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_group_name][crate::model::CreateOrUpdateSubscriptionRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::CreateOrUpdateSubscriptionRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [topic_name][crate::model::CreateOrUpdateSubscriptionRequest::topic_name].
        pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.topic_name = v.into();
            self
        }

        /// Sets the value of [subscription_name][crate::model::CreateOrUpdateSubscriptionRequest::subscription_name].
        pub fn set_subscription_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.subscription_name = v.into();
            self
        }

        /// Sets the value of [subscription][crate::model::CreateOrUpdateSubscriptionRequest::subscription].
        pub fn set_subscription<T: Into<crate::model::Subscription>>(mut self, v: T) -> Self {
            self.0.request.subscription = Some(v.into());
            self
        }
    }

    impl OptionsBuilder for CreateOrUpdateSubscription {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::get_subscription][crate::client::ServiceBusManagement::get_subscription] calls.
    #[derive(Clone, Debug)]
    pub struct GetSubscription(RequestBuilder<crate::model::GetSubscriptionRequest>);

    impl GetSubscription {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetSubscriptionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Subscription> {
            (*self.0.stub)
                .get_subscription(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_group_name][crate::model::GetSubscriptionRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::GetSubscriptionRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [topic_name][crate::model::GetSubscriptionRequest::topic_name].
        pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.topic_name = v.into();
            self
        }

        /// Sets the value of [subscription_name][crate::model::GetSubscriptionRequest::subscription_name].
        pub fn set_subscription_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.subscription_name = v.into();
            self
        }
    }

    impl OptionsBuilder for GetSubscription {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::list_subscriptions][crate::client::ServiceBusManagement::list_subscriptions] calls.
    #[derive(Clone, Debug)]
    pub struct ListSubscriptions(RequestBuilder<crate::model::ListSubscriptionsRequest>);

    impl ListSubscriptions {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSubscriptionsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListSubscriptionsResponse> {
            (*self.0.stub)
                .list_subscriptions(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> Paginator<crate::model::ListSubscriptionsResponse, crate::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> ItemPaginator<crate::model::ListSubscriptionsResponse, crate::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [resource_group_name][crate::model::ListSubscriptionsRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::ListSubscriptionsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [topic_name][crate::model::ListSubscriptionsRequest::topic_name].
        pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.topic_name = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListSubscriptionsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [top][crate::model::ListSubscriptionsRequest::top].
        pub fn set_top(mut self, v: i32) -> Self {
            self.0.request.top = Some(v);
            self
        }
    }

    impl OptionsBuilder for ListSubscriptions {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::delete_subscription][crate::client::ServiceBusManagement::delete_subscription] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteSubscription(RequestBuilder<crate::model::DeleteSubscriptionRequest>);

    impl DeleteSubscription {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteSubscriptionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            (*self.0.stub)
                .delete_subscription(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_group_name][crate::model::DeleteSubscriptionRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::DeleteSubscriptionRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [topic_name][crate::model::DeleteSubscriptionRequest::topic_name].
        pub fn set_topic_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.topic_name = v.into();
            self
        }

        /// Sets the value of [subscription_name][crate::model::DeleteSubscriptionRequest::subscription_name].
        pub fn set_subscription_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.subscription_name = v.into();
            self
        }
    }

    impl OptionsBuilder for DeleteSubscription {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::list_authorization_rules][crate::client::ServiceBusManagement::list_authorization_rules] calls.
    #[derive(Clone, Debug)]
    pub struct ListAuthorizationRules(RequestBuilder<crate::model::ListAuthorizationRulesRequest>);

    impl ListAuthorizationRules {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAuthorizationRulesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListAuthorizationRulesResponse> {
            (*self.0.stub)
                .list_authorization_rules(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> Paginator<crate::model::ListAuthorizationRulesResponse, crate::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> ItemPaginator<crate::model::ListAuthorizationRulesResponse, crate::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [resource_group_name][crate::model::ListAuthorizationRulesRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::ListAuthorizationRulesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListAuthorizationRulesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    impl OptionsBuilder for ListAuthorizationRules {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::get_authorization_rule][crate::client::ServiceBusManagement::get_authorization_rule] calls.
    #[derive(Clone, Debug)]
    pub struct GetAuthorizationRule(RequestBuilder<crate::model::GetAuthorizationRuleRequest>);

    impl GetAuthorizationRule {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAuthorizationRuleRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AuthorizationRule> {
            (*self.0.stub)
                .get_authorization_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_group_name][crate::model::GetAuthorizationRuleRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::GetAuthorizationRuleRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [authorization_rule_name][crate::model::GetAuthorizationRuleRequest::authorization_rule_name].
        pub fn set_authorization_rule_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.authorization_rule_name = v.into();
            self
        }
    }

    impl OptionsBuilder for GetAuthorizationRule {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::list_keys][crate::client::ServiceBusManagement::list_keys] calls.
    #[derive(Clone, Debug)]
    pub struct ListKeys(RequestBuilder<crate::model::ListKeysRequest>);

    impl ListKeys {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListKeysRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AccessKeys> {
            (*self.0.stub)
                .list_keys(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_group_name][crate::model::ListKeysRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::ListKeysRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [authorization_rule_name][crate::model::ListKeysRequest::authorization_rule_name].
        pub fn set_authorization_rule_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.authorization_rule_name = v.into();
            self
        }
    }

    impl OptionsBuilder for ListKeys {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::regenerate_keys][crate::client::ServiceBusManagement::regenerate_keys] calls.
    #[derive(Clone, Debug)]
    pub struct RegenerateKeys(RequestBuilder<crate::model::RegenerateKeysRequest>);

    impl RegenerateKeys {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RegenerateKeysRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AccessKeys> {
            (*self.0.stub)
                .regenerate_keys(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [resource_group_name][crate::model::RegenerateKeysRequest::resource_group_name].
        pub fn set_resource_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.resource_group_name = v.into();
            self
        }

        /// Sets the value of [namespace_name][crate::model::RegenerateKeysRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [authorization_rule_name][crate::model::RegenerateKeysRequest::authorization_rule_name].
        pub fn set_authorization_rule_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.authorization_rule_name = v.into();
            self
        }

        /// Sets the value of [parameters][crate::model::RegenerateKeysRequest::parameters].
        pub fn set_parameters<T: Into<crate::model::RegenerateAccessKeyParameters>>(mut self, v: T) -> Self {
            self.0.request.parameters = Some(v.into());
            self
        }
    }

    impl OptionsBuilder for RegenerateKeys {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ServiceBusManagement::get_operation][crate::client::ServiceBusManagement::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<crate::model::GetOperationRequest>);

    impl GetOperation {
        pub(crate) fn new(stub: Stub) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetOperationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .get_operation(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::GetOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    impl OptionsBuilder for GetOperation {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

}
