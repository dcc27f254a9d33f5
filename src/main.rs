// SPDX-License-Identifier: MPL-2.0
use brandly_login::app::{self, Flags};

const HELP: &str = "\
brandly-login

USAGE:
  brandly-login [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
  --config-dir <PATH>      Read settings.toml from PATH
                           (overrides BRANDLY_CONFIG_DIR)
";

fn main() -> iced::Result {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            log::warn!("ignoring --config-dir: {err}");
            None
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    for line in app::STARTUP_BANNER {
        log::info!("{line}");
    }
    log::debug!("Enter submits a form or switches to the hovered side, Escape hides loading");

    app::run(Flags { config_dir })
}
