// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use iced_toasts::config::paths;
use std::path::PathBuf;

const HELP: &str = "\
iced_toasts - toast notification demo

USAGE:
  iced_toasts [OPTIONS]

OPTIONS:
  -h, --help               Print help information
  --config-dir <DIR>       Read settings.toml from DIR
  --diagnostics <FILE>     Write a JSON diagnostics report to FILE on exit
";

/// Options accepted on the command line.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    help: bool,
    config_dir: Option<String>,
    diagnostics_path: Option<PathBuf>,
}

fn parse_args(mut args: pico_args::Arguments) -> Result<CliArgs, pico_args::Error> {
    let cli = CliArgs {
        help: args.contains(["-h", "--help"]),
        config_dir: args.opt_value_from_str("--config-dir")?,
        diagnostics_path: args.opt_value_from_str("--diagnostics")?,
    };

    let leftover: Vec<String> = args
        .finish()
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    if !leftover.is_empty() {
        return Err(pico_args::Error::UnusedArgsLeft(leftover));
    }

    Ok(cli)
}

fn main() -> iced::Result {
    let cli = match parse_args(pico_args::Arguments::from_env()) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    if cli.help {
        print!("{HELP}");
        return Ok(());
    }

    paths::init_cli_override(cli.config_dir);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to start timer runtime: {err}");
            std::process::exit(1);
        }
    };

    app::run(Flags {
        runtime: runtime.handle().clone(),
        diagnostics_path: cli.diagnostics_path,
    })
}
