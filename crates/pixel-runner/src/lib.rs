mod cli;
mod config;
mod io;
mod logging;
mod run;

pub use cli::{CheckCommand, Cli, Commands, OutputFormat, ValidateCommand};
pub use config::{
    load_runner_config, resolve_runner_config, validate_runner_config, ConfigIssue, RunnerConfig,
    RunnerConfigError,
};
pub use io::{load_pull_request_event, load_structured_patch, DocumentLoadError, PullRequestEvent};
pub use logging::init_tracing;
pub use run::{execute_check, execute_validate, CommandOutput, RunnerError};
