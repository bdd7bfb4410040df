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

//! Management client for Service Bus namespaces, topics, subscriptions and
//! authorization rules.
//!
//! The client talks to Azure Resource Manager. It also creates and deletes the
//! resource groups that contain Service Bus namespaces. Applications create a
//! [client::ServiceBusManagement] and call its methods, each method returns a
//! request builder. Creating namespaces and deleting resource groups or
//! namespaces are long-running operations, see [lro] for details.
//!
//! The [stub] module defines the traits used by the client. Applications use
//! these traits to mock the client in tests, or to run it against an
//! in-memory emulator.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use servicebus_admin::client::ServiceBusManagement;
//! use servicebus_admin::model::ResourceGroup;
//! let client = ServiceBusManagement::builder().build().await?;
//! let group = client
//!     .create_resource_group()
//!     .set_resource_group_name("my-resource-group")
//!     .set_resource_group(ResourceGroup::new().set_location("westus"))
//!     .send()
//!     .await?;
//! println!("created {}", group.id);
//! # Ok(()) }
//! ```

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod build_errors;
pub mod builder;
pub mod client;
pub mod client_builder;
pub mod credentials;
pub mod error;
pub mod lro;
pub mod model;
pub mod options;
pub mod paginator;
pub mod polling;
pub mod stub;
pub mod tracing;

mod http;
mod transport;
