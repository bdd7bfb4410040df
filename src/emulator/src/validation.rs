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

//! Validates resource names and settings the way the service does.

use servicebus_admin::Result;
use servicebus_admin::error::Error;
use servicebus_admin::error::rpc::{Code, Status};
use servicebus_admin::model::SkuName;

pub(crate) fn invalid_argument(reason: &str, message: String) -> Error {
    Error::service_with_http_status(
        Status::default()
            .set_code(Code::InvalidArgument)
            .set_reason(reason)
            .set_message(message),
        Some(400),
    )
}

/// Resource group names: up to 90 alphanumerics, underscores, parentheses,
/// hyphens and periods. They cannot end in a period.
pub(crate) fn resource_group_name(name: &str) -> Result<()> {
    let valid = (1..=90).contains(&name.len())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_()-.".contains(c))
        && !name.ends_with('.');
    check(valid, "resource group", name)
}

/// Namespace names: 6 to 50 letters, digits and hyphens. They start with a
/// letter and end with a letter or digit.
pub(crate) fn namespace_name(name: &str) -> Result<()> {
    let valid = (6..=50).contains(&name.len())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name.ends_with(|c: char| c.is_ascii_alphanumeric());
    check(valid, "namespace", name)
}

/// Topic names: up to 260 letters, digits, periods, hyphens and underscores,
/// starting and ending with a letter or digit.
pub(crate) fn topic_name(name: &str) -> Result<()> {
    check(entity_name(name, 260), "topic", name)
}

/// Subscription names: like topics, but up to 50 characters.
pub(crate) fn subscription_name(name: &str) -> Result<()> {
    check(entity_name(name, 50), "subscription", name)
}

pub(crate) fn location(location: &str) -> Result<()> {
    if location.is_empty() {
        return Err(invalid_argument(
            "LocationRequired",
            "the location property is required for this definition".to_string(),
        ));
    }
    Ok(())
}

/// Topic sizes are multiples of 1 GiB, up to 5 GiB in the Basic and Standard
/// tiers and 80 GiB in the Premium tier.
pub(crate) fn max_size_in_megabytes(sku: SkuName, size: i32) -> Result<()> {
    let limit = match sku {
        SkuName::Premium => 81920,
        _ => 5120,
    };
    if size <= 0 || size % 1024 != 0 || size > limit {
        return Err(invalid_argument(
            "InvalidMaxSize",
            format!("the value {size} is not a valid maximum size in megabytes, use a multiple of 1024 up to {limit}"),
        ));
    }
    Ok(())
}

fn entity_name(name: &str, max_len: usize) -> bool {
    (1..=max_len).contains(&name.len())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._-".contains(c))
        && name.starts_with(|c: char| c.is_ascii_alphanumeric())
        && name.ends_with(|c: char| c.is_ascii_alphanumeric())
}

fn check(valid: bool, kind: &str, name: &str) -> Result<()> {
    if valid {
        return Ok(());
    }
    Err(invalid_argument(
        "InvalidResourceName",
        format!("the {kind} name '{name}' is invalid"),
    ))
}
