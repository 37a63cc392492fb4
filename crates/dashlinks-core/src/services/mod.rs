//! Per-tenant service URL generation from the static service table.

mod format;
mod table;

pub use format::ServiceFormat;
pub use table::{lookup_service, ServiceDescriptor, SERVICES};

use std::collections::BTreeMap;

/// Builds the URL of `service_id` for `tenant` on `domain`.
///
/// Returns `None` when `tenant` or `service_id` is empty, or when the
/// identifier is not in [`SERVICES`] (a warning is logged in that case).
///
/// # Examples
///
/// - `generate_service_url("MLFLOW", "ramsay", "cloud-tmp.physicsx.ai")`
///   → `"https://ramsay-mlflow.cloud-tmp.physicsx.ai/"`
/// - `generate_service_url("optimizer", "demo-dev", "cloud-tmp.physicsx.ai")`
///   → `"https://demo-dev.cloud-tmp.physicsx.ai/platform-app/app/optimizer"`
pub fn generate_service_url(service_id: &str, tenant: &str, domain: &str) -> Option<String> {
    if service_id.is_empty() || tenant.is_empty() {
        return None;
    }

    let Some(service) = lookup_service(service_id) else {
        tracing::warn!(service_id, "unknown service");
        return None;
    };

    Some(
        service
            .format
            .render(service.name, tenant, domain, service.path),
    )
}

/// Generates every service URL in the table, keyed by display name.
///
/// Each entry is computed independently; a `None` for one service does not
/// affect the others.
pub fn generate_all_service_urls(
    tenant: &str,
    domain: &str,
) -> BTreeMap<&'static str, Option<String>> {
    SERVICES
        .iter()
        .map(|(id, service)| (service.name, generate_service_url(id, tenant, domain)))
        .collect()
}
