// SPDX-License-Identifier: MPL-2.0
use starfolio::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Starfolio - art portfolio with an animated star field

USAGE:
  starfolio [OPTIONS] [MANIFEST]

ARGS:
  MANIFEST              Path to a gallery.toml manifest

OPTIONS:
  --lang <LOCALE>       UI language (en-US, zh-CN)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("starfolio=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --lang");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --config-dir");
            None
        });

    let flags = Flags {
        lang,
        config_dir,
        manifest: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
