pub mod check;
pub mod config;
pub mod context;
pub mod init;
pub mod tokens;

pub use check::run_check;
pub use config::run_config;
pub use init::{generate_config_template, run_init};
pub use tokens::run_tokens;
