//! End-to-end checks: hostname → tenant/domain → service URLs and processed links.

use dashlinks_core::hostname::{
    extract_domain_from_hostname, extract_tenant_from_hostname, StaticHostname,
};
use dashlinks_core::links::{process_external_link, process_external_links};
use dashlinks_core::services::{generate_all_service_urls, generate_service_url, SERVICES};
use dashlinks_core::{ExternalLink, LinkContext, DEFAULT_DOMAIN};

const DOMAIN: &str = "cloud-tmp.physicsx.ai";

#[test]
fn hostname_parsing_examples() {
    assert_eq!(
        extract_tenant_from_hostname("ramsay.cloud-tmp.physicsx.ai").as_deref(),
        Some("ramsay")
    );
    assert_eq!(
        extract_tenant_from_hostname("demo-dev-kubeflow.cloud-tmp.physicsx.ai").as_deref(),
        Some("demo-dev")
    );
    assert_eq!(extract_tenant_from_hostname("localhost"), None);
    assert_eq!(
        extract_domain_from_hostname("ramsay.cloud-tmp.physicsx.ai"),
        "cloud-tmp.physicsx.ai"
    );
    assert_eq!(extract_domain_from_hostname("nodothost"), DEFAULT_DOMAIN);
}

#[test]
fn service_url_examples() {
    assert_eq!(
        generate_service_url("MLFLOW", "ramsay", DOMAIN).as_deref(),
        Some("https://ramsay-mlflow.cloud-tmp.physicsx.ai/")
    );
    assert_eq!(
        generate_service_url("optimizer", "demo-dev", DOMAIN).as_deref(),
        Some("https://demo-dev.cloud-tmp.physicsx.ai/platform-app/app/optimizer")
    );
    assert_eq!(generate_service_url("UNKNOWN", "ramsay", DOMAIN), None);
}

#[test]
fn every_service_generated_once() {
    let urls = generate_all_service_urls("ramsay", DOMAIN);
    assert_eq!(urls.len(), SERVICES.len());
    for (_, descriptor) in SERVICES {
        let url = urls[descriptor.name].as_deref().expect("url generated");
        assert!(url.starts_with("https://ramsay"), "{url}");
        assert!(url.ends_with(descriptor.path), "{url}");
        assert!(url::Url::parse(url).is_ok(), "{url} should be a valid URL");
    }
}

#[test]
fn placeholder_examples() {
    assert_eq!(
        process_external_link("https://${TENANT}-mlflow.${DOMAIN}/", "ramsay", DOMAIN),
        "https://ramsay-mlflow.cloud-tmp.physicsx.ai/"
    );

    let input = vec![ExternalLink::new("${TENANT}")];
    let output = process_external_links(&input, "x", "d");
    assert_eq!(output[0].link, "x");
    assert_eq!(input[0].link, "${TENANT}");
}

#[test]
fn context_matches_hand_built_links() {
    let ctx = LinkContext::new(StaticHostname::new(Some(
        "https://demo-dev-kubeflow.cloud-tmp.physicsx.ai/_/pipelines",
    )));
    let tenant = ctx.current_tenant().expect("tenant from hostname");
    assert_eq!(tenant, "demo-dev");

    let templated = ctx.process_link("https://${TENANT}-mlflow.${DOMAIN}/", &tenant, None);
    assert_eq!(
        Some(templated),
        ctx.service_url("mlflow", &tenant, None),
        "placeholder link and generated service URL agree"
    );
}

#[test]
fn context_without_hostname_degrades() {
    let ctx = LinkContext::new(StaticHostname::new(None));
    assert_eq!(ctx.current_tenant(), None);
    assert_eq!(ctx.current_domain(), DEFAULT_DOMAIN);
    let tenant = ctx.current_tenant().unwrap_or_default();
    assert_eq!(ctx.process_link("${TENANT}", &tenant, None), "${TENANT}");
    assert!(ctx
        .all_service_urls(&tenant, None)
        .values()
        .all(Option::is_none));
}
