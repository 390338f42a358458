//! Endpoint and transport configuration.
//!
//! Microsoft Graph is deployed to several sovereign clouds, each with its own
//! Graph host and login authority. [`NationalCloud`] selects the pair; the
//! timeout constants are shared by the token provider and the API client.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Graph API version every request targets.
pub const API_VERSION: &str = "v1.0";

/// Connect timeout (TCP + TLS) for Graph and token requests.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Overall timeout for one Graph API round-trip.
pub const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(100);

/// Overall timeout for one token request.
pub const TOKEN_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A Microsoft Graph deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NationalCloud {
    /// Worldwide service.
    #[default]
    Global,
    /// US Government L4.
    UsGovernment,
    /// US Government L5 (DoD).
    UsGovernmentDod,
    /// China, operated by 21Vianet.
    China,
}

impl NationalCloud {
    /// Graph host for this cloud, without trailing slash.
    pub fn graph_endpoint(&self) -> &'static str {
        match self {
            NationalCloud::Global => "https://graph.microsoft.com",
            NationalCloud::UsGovernment => "https://graph.microsoft.us",
            NationalCloud::UsGovernmentDod => "https://dod-graph.microsoft.us",
            NationalCloud::China => "https://microsoftgraph.chinacloudapi.cn",
        }
    }

    /// Login authority host for this cloud, without trailing slash.
    pub fn login_endpoint(&self) -> &'static str {
        match self {
            NationalCloud::Global => "https://login.microsoftonline.com",
            NationalCloud::UsGovernment | NationalCloud::UsGovernmentDod => {
                "https://login.microsoftonline.us"
            }
            NationalCloud::China => "https://login.chinacloudapi.cn",
        }
    }

    /// Base URL requests are expanded against, e.g.
    /// `https://graph.microsoft.com/v1.0`.
    pub fn base_url(&self) -> String {
        format!("{}/{API_VERSION}", self.graph_endpoint())
    }

    /// The `.default` scope for client-credentials tokens on this cloud.
    pub fn default_scope(&self) -> String {
        format!("{}/.default", self.graph_endpoint())
    }
}

impl fmt::Display for NationalCloud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NationalCloud::Global => "global",
            NationalCloud::UsGovernment => "us-gov",
            NationalCloud::UsGovernmentDod => "us-gov-dod",
            NationalCloud::China => "china",
        };
        f.write_str(name)
    }
}

impl FromStr for NationalCloud {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "global" | "public" => Ok(NationalCloud::Global),
            "us-gov" | "usgov" | "gcc-high" => Ok(NationalCloud::UsGovernment),
            "us-gov-dod" | "dod" => Ok(NationalCloud::UsGovernmentDod),
            "china" | "21vianet" => Ok(NationalCloud::China),
            other => Err(format!("unknown national cloud: {other}")),
        }
    }
}
