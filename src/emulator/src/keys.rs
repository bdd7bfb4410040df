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

//! Shared access keys for authorization rules.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore as _;
use servicebus_admin::model::{AccessKeys, KeyType};

/// The rule every namespace starts with.
pub(crate) const ROOT_RULE: &str = "RootManageSharedAccessKey";

const KEY_BYTES: usize = 32;

/// Returns a random 256-bit key, base64 encoded.
pub(crate) fn new_key() -> String {
    let mut bytes = [0_u8; KEY_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

/// Returns a fresh pair of keys for `rule` in `namespace`.
pub(crate) fn new_keys(namespace: &str, rule: &str) -> AccessKeys {
    with_connection_strings(
        AccessKeys::new()
            .set_key_name(rule)
            .set_primary_key(new_key())
            .set_secondary_key(new_key()),
        namespace,
    )
}

/// Replaces one of the keys, leaving the other one untouched.
pub(crate) fn regenerate(
    keys: AccessKeys,
    namespace: &str,
    key_type: KeyType,
    key: Option<String>,
) -> AccessKeys {
    let key = key.unwrap_or_else(new_key);
    let keys = match key_type {
        KeyType::SecondaryKey => keys.set_secondary_key(key),
        _ => keys.set_primary_key(key),
    };
    with_connection_strings(keys, namespace)
}

fn with_connection_strings(keys: AccessKeys, namespace: &str) -> AccessKeys {
    let primary = connection_string(namespace, &keys.key_name, &keys.primary_key);
    let secondary = connection_string(namespace, &keys.key_name, &keys.secondary_key);
    keys.set_primary_connection_string(primary)
        .set_secondary_connection_string(secondary)
}

fn connection_string(namespace: &str, rule: &str, key: &str) -> String {
    format!("Endpoint=sb://{namespace}.servicebus.windows.net/;SharedAccessKeyName={rule};SharedAccessKey={key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_format() -> anyhow::Result<()> {
        let key = new_key();
        let decoded = STANDARD.decode(&key)?;
        assert_eq!(decoded.len(), KEY_BYTES);
        assert_ne!(key, new_key());
        Ok(())
    }

    #[test]
    fn new_pair() {
        let keys = new_keys("my-namespace", ROOT_RULE);
        assert_eq!(keys.key_name, ROOT_RULE);
        assert_ne!(keys.primary_key, keys.secondary_key);
        assert!(
            keys.primary_connection_string
                .starts_with("Endpoint=sb://my-namespace.servicebus.windows.net/;"),
            "{}",
            keys.primary_connection_string
        );
        assert!(keys.secondary_connection_string.ends_with(&keys.secondary_key));
    }

    #[test]
    fn regenerate_secondary() {
        let before = new_keys("my-namespace", ROOT_RULE);
        let after = regenerate(before.clone(), "my-namespace", KeyType::SecondaryKey, None);
        assert_eq!(after.key_name, before.key_name);
        assert_eq!(after.primary_key, before.primary_key);
        assert_eq!(after.primary_connection_string, before.primary_connection_string);
        assert_ne!(after.secondary_key, before.secondary_key);
        assert!(after.secondary_connection_string.ends_with(&after.secondary_key));
    }

    #[test]
    fn regenerate_with_value() {
        let before = new_keys("my-namespace", ROOT_RULE);
        let after = regenerate(
            before.clone(),
            "my-namespace",
            KeyType::PrimaryKey,
            Some("custom-key".to_string()),
        );
        assert_eq!(after.primary_key, "custom-key");
        assert_eq!(after.secondary_key, before.secondary_key);
    }
}
