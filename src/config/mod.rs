#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, FilesCommand, SortArgs, TimeCommand};
pub use toml_config::TomlConfig;
