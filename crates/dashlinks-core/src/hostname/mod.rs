//! Hostname parsing: tenant and domain extraction.
//!
//! A dashboard hostname looks like `<tenant>.<domain>`, optionally with a
//! `-kubeflow` suffix on the tenant label when served through the Kubeflow
//! ingress (`demo-dev-kubeflow.cloud-tmp.physicsx.ai`).

mod normalize;
mod provider;

pub use normalize::normalize_hostname;
pub use provider::{Chain, EnvHostname, HostnameProvider, StaticHostname, DEFAULT_HOSTNAME_ENV};

/// Domain used when a hostname carries no suffix after its first label.
pub const DEFAULT_DOMAIN: &str = "cloud-tmp.physicsx.ai";

/// Ingress suffix stripped from the tenant label.
const KUBEFLOW_MARKER: &str = "-kubeflow";

/// Extracts the tenant from the leading label of `hostname`.
///
/// Returns `None` for hostnames with fewer than two labels, an empty leading
/// label, or an empty suffix. A `-kubeflow` marker truncates the label at its
/// first occurrence.
///
/// # Examples
///
/// - `"ramsay.cloud-tmp.physicsx.ai"` → `Some("ramsay")`
/// - `"demo-dev-kubeflow.cloud-tmp.physicsx.ai"` → `Some("demo-dev")`
/// - `"localhost"` → `None`
pub fn extract_tenant_from_hostname(hostname: &str) -> Option<String> {
    let (label, domain) = hostname.split_once('.')?;
    if label.is_empty() || domain.is_empty() {
        return None;
    }

    let tenant = match label.find(KUBEFLOW_MARKER) {
        Some(idx) => &label[..idx],
        None => label,
    };
    if tenant.is_empty() {
        return None;
    }
    Some(tenant.to_string())
}

/// Returns everything after the first `.` in `hostname`, or [`DEFAULT_DOMAIN`].
pub fn extract_domain_from_hostname(hostname: &str) -> String {
    extract_domain_with_default(hostname, DEFAULT_DOMAIN)
}

/// Like [`extract_domain_from_hostname`] with a caller-chosen fallback.
pub fn extract_domain_with_default(hostname: &str, default_domain: &str) -> String {
    match hostname.split_once('.') {
        Some((_, domain)) if !domain.is_empty() => domain.to_string(),
        _ => default_domain.to_string(),
    }
}
