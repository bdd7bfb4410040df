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

//! Random names for the resources created by the samples.

use rand::Rng;

/// Keep at least this many random characters, even for long prefixes.
const MIN_RANDOM_LEN: usize = 3;

/// Returns `prefix` followed by random lowercase hex digits, `max_len`
/// characters in total.
///
/// The prefix is truncated if it leaves fewer than three random characters.
pub fn random_name(prefix: &str, max_len: usize) -> String {
    let keep = max_len.saturating_sub(MIN_RANDOM_LEN);
    let mut rng = rand::rng();
    let mut name: String = prefix.chars().take(keep).collect();
    let mut len = name.chars().count();
    while len < max_len {
        let digit = rng.random_range(0..16_u32);
        name.push(char::from_digit(digit, 16).unwrap_or('0'));
        len += 1;
    }
    name
}

/// The names of the resources created by the publish/subscribe sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Names {
    pub resource_group: String,
    pub namespace: String,
    pub topic: String,
    pub subscription1: String,
    pub subscription2: String,
}

impl Names {
    /// Creates a new set of random names.
    pub fn random() -> Self {
        Self {
            resource_group: random_name("rgSB02_", 24),
            namespace: random_name("namespace", 20),
            topic: random_name("topic_", 24),
            subscription1: random_name("sub1_", 24),
            subscription2: random_name("sub2_", 24),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("rgSB02_", 24)]
    #[test_case("namespace", 20)]
    #[test_case("topic_", 24)]
    #[test_case("", 8)]
    fn prefix_and_length(prefix: &str, max_len: usize) {
        let got = random_name(prefix, max_len);
        assert_eq!(got.len(), max_len, "{got}");
        assert!(got.starts_with(prefix), "{got}");
        let suffix = &got[prefix.len()..];
        assert!(
            suffix.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
            "{got}"
        );
    }

    #[test]
    fn long_prefix() {
        let got = random_name("a-very-long-prefix", 8);
        assert_eq!(got.len(), 8, "{got}");
        assert!(got.starts_with("a-ve"), "{got}");
    }

    #[test]
    fn non_ascii_prefix() {
        let got = random_name("größe_", 6);
        assert_eq!(got.chars().count(), 6, "{got}");
        assert!(got.starts_with("grö"), "{got}");

        let got = random_name("größe_", 12);
        assert_eq!(got.chars().count(), 12, "{got}");
        assert!(got.starts_with("größe_"), "{got}");
    }

    #[test]
    fn random() {
        let names = Names::random();
        assert!(names.resource_group.starts_with("rgSB02_"), "{names:?}");
        assert_eq!(names.namespace.len(), 20, "{names:?}");
        assert!(names.subscription1.starts_with("sub1_"), "{names:?}");
        assert!(names.subscription2.starts_with("sub2_"), "{names:?}");
        assert_ne!(names, Names::random());
    }
}
