//! `${TENANT}` / `${DOMAIN}` placeholder substitution in externally supplied links.
//!
//! Link records come from the dashboard configuration API. Only the `link`
//! field is rewritten; every other field is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Read;

pub const TENANT_PLACEHOLDER: &str = "${TENANT}";
pub const DOMAIN_PLACEHOLDER: &str = "${DOMAIN}";

/// An external link record. Unknown fields are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub link: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExternalLink {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LinkListError {
    #[error("read link list: {0}")]
    Io(#[from] std::io::Error),
    #[error("link list is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Replaces every `${TENANT}` and then every `${DOMAIN}` in `link`.
///
/// An empty `link` or `tenant` returns `link` unchanged.
pub fn process_external_link(link: &str, tenant: &str, domain: &str) -> String {
    if link.is_empty() || tenant.is_empty() {
        return link.to_string();
    }
    link.replace(TENANT_PLACEHOLDER, tenant)
        .replace(DOMAIN_PLACEHOLDER, domain)
}

/// Returns new records with each `link` processed; `links` is left as is.
pub fn process_external_links(
    links: &[ExternalLink],
    tenant: &str,
    domain: &str,
) -> Vec<ExternalLink> {
    if tenant.is_empty() {
        return links.to_vec();
    }
    links
        .iter()
        .map(|l| ExternalLink {
            link: process_external_link(&l.link, tenant, domain),
            extra: l.extra.clone(),
        })
        .collect()
}

/// Dynamic form of [`process_external_links`] for raw JSON.
///
/// Non-array input, or an empty tenant, is returned unchanged. Array elements
/// without a string `link` field are copied as they are.
pub fn process_external_links_value(value: &Value, tenant: &str, domain: &str) -> Value {
    let Value::Array(items) = value else {
        return value.clone();
    };
    if tenant.is_empty() {
        return value.clone();
    }

    let processed = items
        .iter()
        .map(|item| {
            let mut copy = item.clone();
            if let Some(Value::String(link)) = copy.get_mut("link") {
                *link = process_external_link(link, tenant, domain);
            }
            copy
        })
        .collect();
    Value::Array(processed)
}

/// Reads a JSON document of link records.
pub fn read_link_list(mut reader: impl Read) -> Result<Value, LinkListError> {
    let mut data = String::new();
    reader.read_to_string(&mut data)?;
    Ok(serde_json::from_str(&data)?)
}
