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

//! Provision, change and delete Service Bus publish/subscribe resources.

mod args;

use args::Args;
use clap::Parser;
use servicebus_admin::client::ServiceBusManagement;
use servicebus_admin::credentials;
use servicebus_emulator::Emulator;
use servicebus_samples::names::Names;
use servicebus_samples::publish_subscribe_basic::run_sample;

const DESCRIPTION: &str = concat!(
    "This program creates a Service Bus namespace, a topic and two subscriptions,",
    " changes them, lists them, rotates the keys of the namespace authorization rule,",
    " and then deletes all the resources it created."
);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    enable_tracing()?;
    tracing::debug!("Configuration: {args:?}");

    let (client, subscription_id) = if args.emulator {
        let emulator = Emulator::new();
        let subscription_id = emulator.subscription_id().to_string();
        (ServiceBusManagement::from_stub(emulator), subscription_id)
    } else {
        let mut builder = credentials::Builder::default();
        if let Some(path) = &args.auth_location {
            builder = builder.with_auth_file(path);
        }
        let credentials = builder.build()?;
        let subscription_id = credentials
            .subscription_id()
            .unwrap_or_default()
            .to_string();
        let mut builder = ServiceBusManagement::builder()
            .with_credentials(credentials)
            .with_tracing();
        if let Some(endpoint) = &args.endpoint {
            builder = builder.with_endpoint(endpoint);
        }
        (builder.build().await?, subscription_id)
    };

    println!("Selected subscription: {subscription_id}");
    run_sample(&client, &Names::random(), &args.region).await
}

fn enable_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot initialize tracing: {e}"))
}
