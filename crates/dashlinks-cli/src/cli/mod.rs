//! CLI for dashlinks.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use dashlinks_core::config::{self, DashlinksConfig};
use dashlinks_core::hostname::{Chain, EnvHostname, StaticHostname};
use dashlinks_core::LinkContext;
use std::path::PathBuf;

use commands::{
    run_all, run_completions, run_domain, run_link, run_links, run_man, run_services,
    run_tenant, run_url,
};

/// Hostname sources in priority order: `--hostname`, environment, config file.
pub(crate) type CliContext = LinkContext<Chain<StaticHostname, Chain<EnvHostname, StaticHostname>>>;

/// Top-level CLI for dashlinks.
#[derive(Debug, Parser)]
#[command(name = "dashlinks")]
#[command(about = "Derive tenant service URLs from a dashboard hostname", long_about = None)]
pub struct Cli {
    /// Current dashboard hostname or page URL (falls back to $DASHLINKS_HOSTNAME, then config).
    #[arg(long, global = true, value_name = "HOST")]
    pub hostname: Option<String>,

    /// Config file to read instead of ~/.config/dashlinks/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Tenant and domain overrides shared by the templating commands.
#[derive(Debug, Clone, Default, Args)]
pub struct TenantArgs {
    /// Tenant to template for (default: derived from the current hostname).
    #[arg(long)]
    pub tenant: Option<String>,

    /// Domain to template for (default: derived from the current hostname).
    #[arg(long)]
    pub domain: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the tenant derived from the current hostname.
    Tenant,

    /// Print the domain derived from the current hostname.
    Domain,

    /// Print the URL of one service.
    Url {
        /// Service identifier, e.g. MLFLOW or optimizer.
        service: String,

        #[command(flatten)]
        target: TenantArgs,
    },

    /// Print the URLs of every known service.
    All {
        #[command(flatten)]
        target: TenantArgs,

        /// Print a JSON object keyed by service name.
        #[arg(long)]
        json: bool,
    },

    /// List the known services and their URL shapes.
    Services {
        /// Only list services published in this format (tenant-prefix or tenant-subdomain).
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Substitute ${TENANT} and ${DOMAIN} in a link.
    Link {
        /// Link template.
        template: String,

        #[command(flatten)]
        target: TenantArgs,
    },

    /// Substitute placeholders in a JSON array of link records ("-" reads stdin).
    Links {
        /// Path to the JSON file.
        path: String,

        #[command(flatten)]
        target: TenantArgs,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let ctx = build_context(cli.hostname.as_deref(), &cfg);

        match cli.command {
            CliCommand::Tenant => run_tenant(&ctx)?,
            CliCommand::Domain => run_domain(&ctx)?,
            CliCommand::Url { service, target } => run_url(&ctx, &service, &target)?,
            CliCommand::All { target, json } => run_all(&ctx, &target, json)?,
            CliCommand::Services { format, json } => run_services(format.as_deref(), json)?,
            CliCommand::Link { template, target } => run_link(&ctx, &template, &target)?,
            CliCommand::Links { path, target } => run_links(&ctx, &path, &target)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

pub(crate) fn build_context(hostname: Option<&str>, cfg: &DashlinksConfig) -> CliContext {
    let provider = Chain(
        StaticHostname::new(hostname),
        Chain(
            EnvHostname::new(cfg.hostname_env.as_str()),
            StaticHostname::new(cfg.hostname.as_deref()),
        ),
    );
    LinkContext::new(provider).with_default_domain(cfg.default_domain.as_str())
}

/// Explicit `--tenant`, else the tenant of the current hostname.
pub(crate) fn resolve_tenant(ctx: &CliContext, target: &TenantArgs) -> Result<String> {
    if let Some(tenant) = target.tenant.as_deref().filter(|t| !t.is_empty()) {
        return Ok(tenant.to_string());
    }
    match ctx.current_tenant() {
        Some(tenant) => Ok(tenant),
        None => anyhow::bail!("no tenant: pass --tenant or a tenant --hostname"),
    }
}
