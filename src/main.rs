// SPDX-License-Identifier: MPL-2.0
use vertical_cor::app::{self, paths, Flags};
use vertical_cor::logging;

const HELP: &str = "\
vertical_cor

USAGE:
  vertical_cor [OPTIONS]

OPTIONS:
  -h, --help             Print this help
  --config-dir <PATH>    Directory holding settings.toml
  --offline              Skip the location lookup
  --log <DIRECTIVE>      Log filter, e.g. `debug` or `vertical_cor=trace`

ENVIRONMENT:
  VERTICAL_COR_CONFIG_DIR   Same as --config-dir (the flag wins)
  RUST_LOG                  Log filter when --log is absent
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or(None);
    let offline = args.contains("--offline");
    let log: Option<String> = args.opt_value_from_str("--log").unwrap_or(None);

    logging::init(log.as_deref());

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        config_dir,
        offline,
    })
}
