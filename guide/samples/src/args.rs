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

use clap::Parser;

/// Command-line options for the sample.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = super::DESCRIPTION)]
pub struct Args {
    /// The region for the resource group and the namespace.
    #[arg(long, default_value = "westus")]
    pub region: String,

    /// Run against an in-memory emulator instead of Azure.
    ///
    /// The emulator ignores the credentials.
    #[arg(long, default_value_t = false, conflicts_with = "endpoint")]
    pub emulator: bool,

    /// Override the Resource Manager endpoint.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// The credentials file.
    ///
    /// A JSON file with `accessToken` and `subscriptionId` fields.
    #[arg(long, env = "AZURE_AUTH_LOCATION")]
    pub auth_location: Option<std::path::PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let args = Args::try_parse_from(["program"])?;
        assert_eq!(args.region, "westus");
        assert!(!args.emulator, "{args:?}");
        assert_eq!(args.endpoint, None);
        Ok(())
    }

    #[test]
    fn options() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "program",
            "--region=eastus",
            "--endpoint=http://localhost:8080",
            "--auth-location=/tmp/auth.json",
        ])?;
        assert_eq!(args.region, "eastus");
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:8080"));
        assert_eq!(
            args.auth_location,
            Some(std::path::PathBuf::from("/tmp/auth.json"))
        );
        Ok(())
    }

    #[test_case(&["program", "--emulator", "--endpoint=http://localhost:8080"])]
    #[test_case(&["program", "--unknown"])]
    fn invalid(input: &[&str]) {
        let args = Args::try_parse_from(input);
        assert!(args.is_err(), "{args:?}");
    }
}
