// SPDX-License-Identifier: MPL-2.0
use lingua_lens::loader;
use lingua_lens::logging::{Logger, Prefixed};
use lingua_lens::{overrides, settings};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
lingua_lens [OPTIONS] [KEY]

Loads the translation catalogs with all override files applied and prints
what the registry ended up with. When KEY is given, also resolves it for
the default locale.

OPTIONS:
  --lang TAG   Locale tag to use, e.g. en-US or de_DE
  --dir PATH   Base directory (default: the platform config directory)
  -h, --help   Print this help
";

struct StderrLog;

impl Logger for StderrLog {
    fn info(&self, message: &str) {
        eprintln!("{message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("warning: {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let lang: Option<String> = match args.opt_value_from_str("--lang") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let dir: Option<PathBuf> = match args.opt_value_from_str("--dir") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let key = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    let logger = Prefixed::new("i18n", StderrLog);

    let Some(base_dir) = dir.or_else(settings::base_dir) else {
        logger.error("could not determine a base directory, pass --dir");
        return ExitCode::FAILURE;
    };
    let settings = settings::load_from_dir(&base_dir).unwrap_or_default();

    let registry = match loader::load_with_settings(&base_dir, lang.as_deref(), &settings, &logger)
    {
        Ok(registry) => registry,
        Err(err) => {
            logger.error(&err.to_string());
            return ExitCode::FAILURE;
        }
    };

    let lang_dir = base_dir.join(overrides::LANG_DIR);
    println!("base directory: {}", base_dir.display());
    if let Some(default_locale) = registry.default_locale() {
        println!("default locale: {default_locale}");
    }
    println!(
        "global overrides: {}",
        if lang_dir.join(overrides::GLOBAL_OVERRIDES_FILE).exists() {
            "present"
        } else {
            "none"
        }
    );
    for locale in registry.locales() {
        let entries = registry.catalog(locale).map_or(0, |catalog| catalog.len());
        let marker = if lang_dir.join(overrides::override_file_name(locale)).exists() {
            " (overridden)"
        } else {
            ""
        };
        println!("  {locale}: {entries} entries{marker}");
    }

    if let Some(key) = key {
        let Some(locale) = registry.default_locale() else {
            logger.error("no default locale available");
            return ExitCode::FAILURE;
        };
        match registry.lookup(locale, &key) {
            Some(value) => println!("{key} = {value}"),
            None => {
                println!("{key} is not defined for {locale}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
