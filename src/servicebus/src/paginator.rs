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

//! Streams over the pages, or the items, of a list operation.
//!
//! List operations return one page at a time. Each page carries a
//! `nextLink` with the URL of the following page. [Paginator] follows these
//! links, and [ItemPaginator] flattens the pages into a stream of items.
//!
//! # Example
//! ```no_run
//! # use servicebus_admin::client::ServiceBusManagement;
//! # async fn sample(client: &ServiceBusManagement) -> servicebus_admin::Result<()> {
//! let mut topics = client
//!     .list_topics()
//!     .set_resource_group_name("my-resource-group")
//!     .set_namespace_name("my-namespace")
//!     .by_item();
//! while let Some(topic) = topics.next().await.transpose()? {
//!     println!("{}", topic.name);
//! }
//! # Ok(()) }
//! ```

use crate::model;
use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

/// Implemented by the responses of list operations.
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the response and returns the items in the page.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token (for Resource Manager, the URL) of the next page. Empty
    /// when this is the last page.
    fn next_page_token(&self) -> String;
}

/// A stream of pages from a list operation.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a paginator starting at `seed_token`.
    ///
    /// `execute` fetches the page for a token. The stream ends after a page
    /// with an empty next page token, or after the first error.
    pub fn new<F>(seed_token: String, execute: impl Fn(String) -> F + Clone + Send + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let next = page.next_page_token();
                        let state = if next.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(next)
                        };
                        Some((Ok(page), state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the paginator into a stream of items.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A stream of items from a list operation, fetching pages as needed.
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    pages: Paginator<T, E>,
    current: VecDeque<T::PageItem>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new(pages: Paginator<T, E>) -> Self {
        Self {
            pages,
            current: VecDeque::new(),
        }
    }

    /// Returns the next item, fetching the next page if needed.
    ///
    /// Returns `None` when all the pages are consumed. An error ends the
    /// stream.
    pub async fn next(&mut self) -> Option<Result<T::PageItem, E>> {
        loop {
            if let Some(item) = self.current.pop_front() {
                return Some(Ok(item));
            }
            match self.pages.next().await? {
                Ok(page) => self.current = page.items().into(),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

macro_rules! pageable {
    ($response:ty, $item:ty) => {
        impl PageableResponse for $response {
            type PageItem = $item;

            fn items(self) -> Vec<Self::PageItem> {
                self.value
            }

            fn next_page_token(&self) -> String {
                self.next_link.clone().unwrap_or_default()
            }
        }
    };
}

pageable!(model::ListNamespacesResponse, model::Namespace);
pageable!(model::ListTopicsResponse, model::Topic);
pageable!(model::ListSubscriptionsResponse, model::Subscription);
pageable!(model::ListAuthorizationRulesResponse, model::AuthorizationRule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{ListTopicsResponse, Topic};
    use std::sync::{Arc, Mutex};

    fn page(names: &[&str], next: &str) -> ListTopicsResponse {
        let response = ListTopicsResponse::new().set_value(names.iter().map(|n| Topic::new().set_name(*n)));
        if next.is_empty() {
            response
        } else {
            response.set_next_link(next)
        }
    }

    fn fake_pages(
        pages: Vec<crate::Result<ListTopicsResponse>>,
    ) -> (Arc<Mutex<Vec<String>>>, Paginator<ListTopicsResponse, Error>) {
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let pages = Arc::new(Mutex::new(VecDeque::from(pages)));
        let captured = tokens.clone();
        let execute = move |token: String| {
            captured.lock().unwrap().push(token);
            let page = pages.lock().unwrap().pop_front().unwrap();
            async move { page }
        };
        (tokens, Paginator::new(String::new(), execute))
    }

    #[tokio::test]
    async fn pages() {
        let (tokens, mut paginator) = fake_pages(vec![
            Ok(page(&["t1", "t2"], "https://test.invalid/page2")),
            Ok(page(&["t3"], "")),
        ]);
        let mut got = Vec::new();
        while let Some(page) = paginator.next().await {
            got.push(page.unwrap().value.len());
        }
        assert_eq!(got, vec![2, 1]);
        assert_eq!(
            *tokens.lock().unwrap(),
            vec!["".to_string(), "https://test.invalid/page2".to_string()]
        );
    }

    #[tokio::test]
    async fn items() -> anyhow::Result<()> {
        let (_, paginator) = fake_pages(vec![
            Ok(page(&["t1", "t2"], "page2")),
            Ok(page(&[], "page3")),
            Ok(page(&["t3"], "")),
        ]);
        let mut items = paginator.items();
        let mut got = Vec::new();
        while let Some(topic) = items.next().await.transpose()? {
            got.push(topic.name);
        }
        assert_eq!(got, vec!["t1", "t2", "t3"]);
        Ok(())
    }

    #[tokio::test]
    async fn error_ends_stream() {
        let (_, paginator) = fake_pages(vec![
            Ok(page(&["t1"], "page2")),
            Err(Error::io("connection reset")),
        ]);
        let mut items = paginator.items();
        let first = items.next().await;
        assert!(matches!(first, Some(Ok(ref t)) if t.name == "t1"), "{first:?}");
        let second = items.next().await;
        assert!(matches!(second, Some(Err(ref e)) if e.is_io()), "{second:?}");
        let third = items.next().await;
        assert!(third.is_none(), "{third:?}");
    }
}
