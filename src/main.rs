// SPDX-License-Identifier: MPL-2.0
use pandemic_atlas::app::{self, paths, Flags};
use pandemic_atlas::domain::CenturyFilter;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
PandemicAtlas - chronicle of historical pandemics

USAGE:
  pandemic_atlas [OPTIONS]

OPTIONS:
  -h, --help             Print this help and exit
  --lang <LOCALE>        Interface language (e.g. ru, en-US)
  --url <URL>            Page address encoded by the QR dialog
  --config-dir <PATH>    Directory holding settings.toml
  --century <N|all>      Century filter applied at startup

ENVIRONMENT:
  PANDEMIC_ATLAS_PAGE_URL     Page address when --url is absent
  PANDEMIC_ATLAS_CONFIG_DIR   Config directory when --config-dir is absent
  RUST_LOG                    Log filter (default: info)
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        page_url: args.opt_value_from_str("--url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        initial_century: args.opt_value_from_str::<_, CenturyFilter>("--century")?,
    };

    let remaining = args.finish();
    if let Some(arg) = remaining.into_iter().next() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected argument {}", arg.to_string_lossy()),
        });
    }

    Ok(flags)
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    paths::init_cli_override(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
