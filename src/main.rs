// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use zoombox::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        zoom_source: args.opt_value_from_str("--zoom").unwrap(),
        auto_mode: args.opt_value_from_str("--auto").unwrap(),
        title: args.opt_value_from_str("--title").unwrap(),
        disable_zoom: args.contains("--no-zoom"),
        eager: args.contains("--eager"),
        source: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok())
            .map(PathBuf::from),
    };

    app::run(flags)
}
