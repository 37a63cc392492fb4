//! The static service table.

use super::ServiceFormat;
use serde::Serialize;

/// Static description of how to build one service's URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    /// Display name; also the host label in [`ServiceFormat::TenantPrefix`] URLs.
    pub name: &'static str,
    pub format: ServiceFormat,
    /// Path appended after the host, always starting with `/`.
    pub path: &'static str,
}

/// Identifier → descriptor. Identifiers are matched case-insensitively.
pub static SERVICES: &[(&str, ServiceDescriptor)] = &[
    (
        "MLFLOW",
        ServiceDescriptor {
            name: "mlflow",
            format: ServiceFormat::TenantPrefix,
            path: "/",
        },
    ),
    (
        "OPTIMIZER",
        ServiceDescriptor {
            name: "optimizer",
            format: ServiceFormat::TenantSubdomain,
            path: "/platform-app/app/optimizer",
        },
    ),
    (
        "VAULT",
        ServiceDescriptor {
            name: "vault",
            format: ServiceFormat::TenantPrefix,
            path: "/",
        },
    ),
    (
        "SIM_WORKBENCH",
        ServiceDescriptor {
            name: "sim-workbench",
            format: ServiceFormat::TenantSubdomain,
            path: "/platform-app/app/sim-workbench",
        },
    ),
    (
        "PLATFORM_DOCS",
        ServiceDescriptor {
            name: "docs",
            format: ServiceFormat::TenantPrefix,
            path: "/",
        },
    ),
    (
        "AI_WORKBENCH_DOCS",
        ServiceDescriptor {
            name: "ai-workbench-docs",
            format: ServiceFormat::TenantPrefix,
            path: "/",
        },
    ),
];

/// Looks up a descriptor by identifier, ignoring ASCII case.
///
/// Matching is ASCII-only: non-ASCII case folds such as `ſ` → `S` do not match.
pub fn lookup_service(service_id: &str) -> Option<&'static ServiceDescriptor> {
    SERVICES
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(service_id))
        .map(|(_, descriptor)| descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_ignores_case() {
        let upper = lookup_service("SIM_WORKBENCH").unwrap();
        let lower = lookup_service("sim_workbench").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.name, "sim-workbench");
    }

    #[test]
    fn lookup_unknown() {
        assert!(lookup_service("UNKNOWN").is_none());
        assert!(lookup_service("").is_none());
        assert!(lookup_service("sim-workbench").is_none());
        assert!(lookup_service("\u{17f}im_workbench").is_none());
    }

    #[test]
    fn table_keys_and_names_unique() {
        let ids: HashSet<_> = SERVICES.iter().map(|(id, _)| id.to_ascii_uppercase()).collect();
        let names: HashSet<_> = SERVICES.iter().map(|(_, d)| d.name).collect();
        assert_eq!(ids.len(), SERVICES.len());
        assert_eq!(names.len(), SERVICES.len());
        assert_eq!(SERVICES.len(), 6);
    }

    #[test]
    fn paths_are_absolute() {
        for (id, d) in SERVICES {
            assert!(d.path.starts_with('/'), "{id} path must start with '/'");
        }
    }
}
