use clap::CommandFactory;
use pixel_runner::Cli;

#[test]
fn help_smoke_lists_core_subcommands() {
    let mut command = Cli::command();
    let help = command.render_long_help().to_string();
    assert!(help.contains("check"));
    assert!(help.contains("validate"));
    assert!(help.contains("--log-json"));
}
