//! Settings, provider selection and rendering behind the `horizon-regions`
//! binary.

pub mod cli;
pub mod commands;
pub mod factory;
pub mod output;
pub mod settings;

pub use cli::{Cli, Commands};
pub use commands::{execute, resolve_settings, run};
pub use factory::{build_provider, build_service};
pub use output::OutputFormat;
pub use settings::Settings;
