//! `dashlinks tenant` / `dashlinks domain` – show what the current hostname resolves to.

use anyhow::Result;

use crate::cli::CliContext;

pub fn run_tenant(ctx: &CliContext) -> Result<()> {
    let Some(tenant) = ctx.current_tenant() else {
        match ctx.current_hostname() {
            Some(host) => anyhow::bail!("hostname {host} does not name a tenant"),
            None => anyhow::bail!("no hostname: pass --hostname or set $DASHLINKS_HOSTNAME"),
        }
    };
    println!("{tenant}");
    Ok(())
}

pub fn run_domain(ctx: &CliContext) -> Result<()> {
    println!("{}", ctx.current_domain());
    Ok(())
}
