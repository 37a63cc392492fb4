//! `dashlinks all` – print every service URL for a tenant.

use anyhow::Result;

use crate::cli::{resolve_tenant, CliContext, TenantArgs};

pub fn run_all(ctx: &CliContext, target: &TenantArgs, json: bool) -> Result<()> {
    let tenant = resolve_tenant(ctx, target)?;
    let urls = ctx.all_service_urls(&tenant, target.domain.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&urls)?);
        return Ok(());
    }

    for (name, url) in &urls {
        println!("{:<20} {}", name, url.as_deref().unwrap_or("-"));
    }
    Ok(())
}
