//! Operations bound to the current hostname.
//!
//! [`LinkContext`] wraps a [`HostnameProvider`] and fills in the domain when a
//! caller does not pass one explicitly.

use crate::hostname::{
    extract_domain_with_default, extract_tenant_from_hostname, HostnameProvider, DEFAULT_DOMAIN,
};
use crate::links::{self, ExternalLink};
use crate::services;
use serde_json::Value;
use std::collections::BTreeMap;

pub struct LinkContext<P> {
    provider: P,
    default_domain: String,
}

impl<P: HostnameProvider> LinkContext<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            default_domain: DEFAULT_DOMAIN.to_string(),
        }
    }

    /// Overrides the domain used when the hostname has no suffix.
    pub fn with_default_domain(mut self, domain: impl Into<String>) -> Self {
        self.default_domain = domain.into();
        self
    }

    pub fn default_domain(&self) -> &str {
        &self.default_domain
    }

    pub fn current_hostname(&self) -> Option<String> {
        self.provider.current_hostname()
    }

    pub fn current_tenant(&self) -> Option<String> {
        self.current_hostname()
            .and_then(|h| extract_tenant_from_hostname(&h))
    }

    pub fn current_domain(&self) -> String {
        match self.current_hostname() {
            Some(h) => extract_domain_with_default(&h, &self.default_domain),
            None => self.default_domain.clone(),
        }
    }

    fn resolve_domain(&self, domain: Option<&str>) -> String {
        match domain {
            Some(d) => d.to_string(),
            None => self.current_domain(),
        }
    }

    pub fn service_url(
        &self,
        service_id: &str,
        tenant: &str,
        domain: Option<&str>,
    ) -> Option<String> {
        if service_id.is_empty() || tenant.is_empty() {
            return None;
        }
        services::generate_service_url(service_id, tenant, &self.resolve_domain(domain))
    }

    pub fn all_service_urls(
        &self,
        tenant: &str,
        domain: Option<&str>,
    ) -> BTreeMap<&'static str, Option<String>> {
        services::generate_all_service_urls(tenant, &self.resolve_domain(domain))
    }

    pub fn process_link(&self, link: &str, tenant: &str, domain: Option<&str>) -> String {
        if link.is_empty() || tenant.is_empty() {
            return link.to_string();
        }
        links::process_external_link(link, tenant, &self.resolve_domain(domain))
    }

    pub fn process_links(
        &self,
        list: &[ExternalLink],
        tenant: &str,
        domain: Option<&str>,
    ) -> Vec<ExternalLink> {
        if tenant.is_empty() {
            return list.to_vec();
        }
        links::process_external_links(list, tenant, &self.resolve_domain(domain))
    }

    pub fn process_links_value(&self, value: &Value, tenant: &str, domain: Option<&str>) -> Value {
        if tenant.is_empty() || !value.is_array() {
            return value.clone();
        }
        links::process_external_links_value(value, tenant, &self.resolve_domain(domain))
    }
}
