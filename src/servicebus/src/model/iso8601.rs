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

//! Serialize [Duration] as ISO 8601 durations.
//!
//! The service sends durations as `[-]PnDTnHnMn.nS`, e.g. `PT10M` or
//! `P10675199DT2H48M5.4775807S` for "never". Years, months and weeks are not
//! used by the service and are rejected.

use std::time::Duration;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("invalid ISO 8601 duration {0:?}")]
pub struct ParseError(String);

/// Formats `d` using the largest units first, e.g. `P1DT2H` or `PT0.5S`.
pub fn format(d: &Duration) -> String {
    let mut seconds = d.as_secs();
    let nanos = d.subsec_nanos();
    let days = seconds / SECONDS_PER_DAY;
    seconds %= SECONDS_PER_DAY;
    let hours = seconds / SECONDS_PER_HOUR;
    seconds %= SECONDS_PER_HOUR;
    let minutes = seconds / SECONDS_PER_MINUTE;
    seconds %= SECONDS_PER_MINUTE;

    let mut out = String::from("P");
    if days != 0 {
        out.push_str(&format!("{days}D"));
    }
    if hours == 0 && minutes == 0 && seconds == 0 && nanos == 0 {
        if days == 0 {
            out.push_str("T0S");
        }
        return out;
    }
    out.push('T');
    if hours != 0 {
        out.push_str(&format!("{hours}H"));
    }
    if minutes != 0 {
        out.push_str(&format!("{minutes}M"));
    }
    match (seconds, nanos) {
        (0, 0) => {}
        (s, 0) => out.push_str(&format!("{s}S")),
        (s, n) => {
            let fraction = format!("{n:09}");
            out.push_str(&format!("{s}.{}S", fraction.trim_end_matches('0')));
        }
    }
    out
}

/// Parses durations in the `PnDTnHnMn.nS` format.
pub fn parse(input: &str) -> Result<Duration, ParseError> {
    let error = || ParseError(input.to_string());
    let rest = input.strip_prefix('P').ok_or_else(error)?;
    let (date, time) = match rest.split_once('T') {
        Some((_, "")) => return Err(error()),
        Some((d, t)) => (d, Some(t)),
        None => (rest, None),
    };
    if date.is_empty() && time.is_none() {
        return Err(error());
    }

    let mut total = Duration::ZERO;
    let mut add = |value: Duration| -> Result<(), ParseError> {
        total = total.checked_add(value).ok_or_else(error)?;
        Ok(())
    };

    if !date.is_empty() {
        let days = date.strip_suffix('D').ok_or_else(error)?;
        let days = days.parse::<u64>().map_err(|_| error())?;
        let seconds = days.checked_mul(SECONDS_PER_DAY).ok_or_else(error)?;
        add(Duration::from_secs(seconds))?;
    }

    let mut time = time.unwrap_or_default();
    for (unit, scale) in [('H', SECONDS_PER_HOUR), ('M', SECONDS_PER_MINUTE)] {
        if let Some((value, tail)) = time.split_once(unit) {
            let value = value.parse::<u64>().map_err(|_| error())?;
            let seconds = value.checked_mul(scale).ok_or_else(error)?;
            add(Duration::from_secs(seconds))?;
            time = tail;
        }
    }
    if !time.is_empty() {
        let seconds = time.strip_suffix('S').ok_or_else(error)?;
        let (whole, fraction) = seconds.split_once('.').unwrap_or((seconds, ""));
        let whole = whole.parse::<u64>().map_err(|_| error())?;
        add(Duration::from_secs(whole))?;
        if !fraction.is_empty() {
            if !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(error());
            }
            // Nanosecond precision, extra digits are truncated.
            let digits = &fraction[..fraction.len().min(9)];
            let nanos = digits.parse::<u32>().map_err(|_| error())?
                * 10_u32.pow(9 - digits.len() as u32);
            add(Duration::from_nanos(nanos as u64))?;
        }
    }
    Ok(total)
}

/// Use with `#[serde(with = "iso8601::option")]` on `Option<Duration>` fields.
pub mod option {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => serializer.serialize_str(&super::format(d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| super::parse(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Duration::ZERO, "PT0S")]
    #[test_case(Duration::from_secs(30), "PT30S")]
    #[test_case(Duration::from_secs(600), "PT10M")]
    #[test_case(Duration::from_secs(3600 + 61), "PT1H1M1S")]
    #[test_case(Duration::from_secs(14 * 86400), "P14D")]
    #[test_case(Duration::from_secs(86400 + 7200), "P1DT2H")]
    #[test_case(Duration::from_millis(1500), "PT1.5S")]
    fn format_and_parse(input: Duration, want: &str) -> anyhow::Result<()> {
        assert_eq!(format(&input), want);
        assert_eq!(parse(want)?, input);
        Ok(())
    }

    #[test]
    fn parse_max_timespan() -> anyhow::Result<()> {
        let got = parse("P10675199DT2H48M5.4775807S")?;
        let want = Duration::new(10675199 * 86400 + 2 * 3600 + 48 * 60 + 5, 477_580_700);
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case("PT0.0000000001S", Duration::ZERO)]
    #[test_case("PT1M", Duration::from_secs(60))]
    #[test_case("PT1H", Duration::from_secs(3600))]
    fn parse_edge_cases(input: &str, want: Duration) -> anyhow::Result<()> {
        assert_eq!(parse(input)?, want);
        Ok(())
    }

    #[test_case("")]
    #[test_case("P")]
    #[test_case("PT")]
    #[test_case("10M")]
    #[test_case("P1Y")]
    #[test_case("P1W")]
    #[test_case("PT1X")]
    #[test_case("PT-1S")]
    #[test_case("PT1.aS")]
    #[test_case("P99999999999999999999D")]
    fn parse_errors(input: &str) {
        let got = parse(input);
        assert!(got.is_err(), "{input} => {got:?}");
    }
}
