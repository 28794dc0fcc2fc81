// SPDX-License-Identifier: MPL-2.0
use iced_overture::app::{self, paths, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        cache_dir: args.opt_value_from_str("--cache-dir").unwrap(),
        asset_dir: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    paths::init_cli_overrides(flags.cache_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}
