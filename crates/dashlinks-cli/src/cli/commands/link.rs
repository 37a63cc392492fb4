//! `dashlinks link <template>` – substitute placeholders in one link.

use anyhow::Result;

use crate::cli::{resolve_tenant, CliContext, TenantArgs};

pub fn run_link(ctx: &CliContext, template: &str, target: &TenantArgs) -> Result<()> {
    let tenant = resolve_tenant(ctx, target)?;
    println!(
        "{}",
        ctx.process_link(template, &tenant, target.domain.as_deref())
    );
    Ok(())
}
