// SPDX-License-Identifier: MPL-2.0
use silva_site::app::{self, Flags};

const HELP: &str = "\
silva_site - Silva & Associados landing page

USAGE:
  silva_site [OPTIONS]

OPTIONS:
  -h, --help                 Print this help and exit
      --lang <LOCALE>        Interface language (pt-BR, en-US)
      --data-dir <DIR>       Directory for stored preferences
      --config-dir <DIR>     Directory for settings.toml
      --assets-dir <DIR>     Directory image sources are resolved against
      --diagnostics-report <FILE>
                             Write the diagnostics report (JSON) on close
      --export-faq-schema    Print the FAQ structured data (JSON-LD) and exit
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let export_faq_schema = args.contains("--export-faq-schema");
    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        data_dir: opt_value(&mut args, "--data-dir"),
        config_dir: opt_value(&mut args, "--config-dir"),
        assets_dir: opt_value(&mut args, "--assets-dir"),
        diagnostics_report: opt_value(&mut args, "--diagnostics-report"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    if export_faq_schema {
        app::paths::init_cli_overrides(flags.data_dir, flags.config_dir);
        match app::export_faq_schema(flags.lang) {
            Ok(Some(document)) => println!("{document}"),
            Ok(None) => eprintln!("No FAQ entries to export"),
            Err(err) => eprintln!("Failed to render FAQ schema: {err}"),
        }
        return Ok(());
    }

    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Invalid value for {key}: {err}");
            None
        }
    }
}
