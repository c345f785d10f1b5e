//! Configuration module

mod mode;
mod site;

pub use mode::{Mode, MODE_ENV_VAR};
pub use site::SiteConfig;
