pub mod config;
pub mod logging;

pub mod context;
pub mod hostname;
pub mod links;
pub mod services;

pub use context::LinkContext;
pub use hostname::{HostnameProvider, DEFAULT_DOMAIN};
pub use links::ExternalLink;
pub use services::{ServiceDescriptor, ServiceFormat};

#[cfg(test)]
pub(crate) mod test_support;
