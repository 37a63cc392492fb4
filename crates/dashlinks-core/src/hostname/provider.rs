//! Sources of the "current" hostname.
//!
//! Parsing and templating never read ambient state directly; callers hand a
//! provider to [`crate::LinkContext`] instead.

use super::normalize_hostname;

/// Environment variable read by [`EnvHostname::default`].
pub const DEFAULT_HOSTNAME_ENV: &str = "DASHLINKS_HOSTNAME";

/// Supplies the hostname of the page currently being served, if known.
pub trait HostnameProvider {
    fn current_hostname(&self) -> Option<String>;
}

impl<F> HostnameProvider for F
where
    F: Fn() -> Option<String>,
{
    fn current_hostname(&self) -> Option<String> {
        self()
    }
}

/// Fixed hostname, normalized once at construction.
#[derive(Debug, Clone, Default)]
pub struct StaticHostname(Option<String>);

impl StaticHostname {
    pub fn new(input: Option<&str>) -> Self {
        Self(input.and_then(normalize_hostname))
    }
}

impl HostnameProvider for StaticHostname {
    fn current_hostname(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reads the hostname from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvHostname {
    var: String,
}

impl EnvHostname {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvHostname {
    fn default() -> Self {
        Self::new(DEFAULT_HOSTNAME_ENV)
    }
}

impl HostnameProvider for EnvHostname {
    fn current_hostname(&self) -> Option<String> {
        let value = std::env::var(&self.var).ok()?;
        normalize_hostname(&value)
    }
}

/// Asks `A` first and falls back to `B`.
#[derive(Debug, Clone)]
pub struct Chain<A, B>(pub A, pub B);

impl<A, B> HostnameProvider for Chain<A, B>
where
    A: HostnameProvider,
    B: HostnameProvider,
{
    fn current_hostname(&self) -> Option<String> {
        self.0
            .current_hostname()
            .or_else(|| self.1.current_hostname())
    }
}
