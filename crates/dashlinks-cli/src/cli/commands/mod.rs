//! CLI command handlers, one file per command.

mod all;
mod completions;
mod context;
mod link;
mod links;
mod services;
mod url;

pub use all::run_all;
pub use completions::{run_completions, run_man};
pub use context::{run_domain, run_tenant};
pub use link::run_link;
pub use links::run_links;
pub use services::run_services;
pub use url::run_url;
