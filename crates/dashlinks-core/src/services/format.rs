//! URL shapes a service can be published under.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a service URL embeds the tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceFormat {
    /// `https://{tenant}-{service}.{domain}{path}`
    TenantPrefix,
    /// `https://{tenant}.{domain}{path}`
    TenantSubdomain,
}

impl ServiceFormat {
    pub fn label(self) -> &'static str {
        match self {
            Self::TenantPrefix => "tenant-prefix",
            Self::TenantSubdomain => "tenant-subdomain",
        }
    }

    /// Parses the textual form used in listings and JSON output.
    ///
    /// Unknown formats log a warning and yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tenant-prefix" | "tenant_prefix" => Some(Self::TenantPrefix),
            "tenant-subdomain" | "tenant_subdomain" => Some(Self::TenantSubdomain),
            other => {
                tracing::warn!(format = other, "invalid service URL format");
                None
            }
        }
    }

    /// Renders the URL for `tenant` on `domain`.
    pub fn render(self, service_name: &str, tenant: &str, domain: &str, path: &str) -> String {
        match self {
            Self::TenantPrefix => format!("https://{tenant}-{service_name}.{domain}{path}"),
            Self::TenantSubdomain => format!("https://{tenant}.{domain}{path}"),
        }
    }
}

impl fmt::Display for ServiceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
