//! `dashlinks links <path>` – process a JSON list of link records.

use anyhow::{Context, Result};
use dashlinks_core::links::read_link_list;
use std::fs::File;
use std::io;

use crate::cli::{resolve_tenant, CliContext, TenantArgs};

pub fn run_links(ctx: &CliContext, path: &str, target: &TenantArgs) -> Result<()> {
    let tenant = resolve_tenant(ctx, target)?;

    let records = if path == "-" {
        read_link_list(io::stdin().lock()).context("stdin")?
    } else {
        let file = File::open(path).with_context(|| format!("open {path}"))?;
        read_link_list(file).with_context(|| format!("read {path}"))?
    };
    if !records.is_array() {
        tracing::warn!(path, "link list is not a JSON array; passing it through unchanged");
    }

    let processed = ctx.process_links_value(&records, &tenant, target.domain.as_deref());
    println!("{}", serde_json::to_string_pretty(&processed)?);
    Ok(())
}
