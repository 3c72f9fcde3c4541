//! CLI overrides on top of file config

use crate::domain::Config;
use std::path::PathBuf;

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    pub exclude: Option<Vec<String>>,
    pub respect_gitignore: Option<bool>,
    pub progress: Option<bool>,
}

/// Apply CLI overrides to a file config.
///
/// CLI exclude patterns are appended after the file's, duplicates included:
/// rule order decides the outcome, so they are evaluated later and win on
/// conflict.
pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(output) = cli.output {
        config.output = Some(output);
    }
    if let Some(exclude) = cli.exclude {
        config.exclude.extend(exclude);
    }
    if let Some(respect) = cli.respect_gitignore {
        config.respect_gitignore = respect;
    }
    if let Some(progress) = cli.progress {
        config.progress = progress;
    }
    config
}
