//! `dashlinks url <service>` – print one service URL.

use anyhow::Result;

use crate::cli::{resolve_tenant, CliContext, TenantArgs};

pub fn run_url(ctx: &CliContext, service: &str, target: &TenantArgs) -> Result<()> {
    let tenant = resolve_tenant(ctx, target)?;
    match ctx.service_url(service, &tenant, target.domain.as_deref()) {
        Some(url) => println!("{url}"),
        None => anyhow::bail!("unknown service {service:?} (see `dashlinks services`)"),
    }
    Ok(())
}
