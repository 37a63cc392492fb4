//! `dashlinks services` – list the service table.

use anyhow::Result;
use dashlinks_core::services::{ServiceFormat, SERVICES};
use serde_json::json;

pub fn run_services(format: Option<&str>, json: bool) -> Result<()> {
    let filter = match format {
        Some(raw) => match ServiceFormat::parse(raw) {
            Some(f) => Some(f),
            None => anyhow::bail!(
                "unknown format {raw:?} (expected tenant-prefix or tenant-subdomain)"
            ),
        },
        None => None,
    };
    let rows = SERVICES
        .iter()
        .filter(|(_, d)| filter.map_or(true, |f| d.format == f));

    if json {
        let entries: Vec<_> = rows
            .map(|(id, d)| json!({ "id": id, "name": d.name, "format": d.format, "path": d.path }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{:<18} {:<18} {:<17} {}", "ID", "NAME", "FORMAT", "PATH");
    for (id, d) in rows {
        println!("{:<18} {:<18} {:<17} {}", id, d.name, d.format.label(), d.path);
    }
    Ok(())
}
