use clap::Parser;
use std::path::PathBuf;

use crate::build::{BuildConfig, DEFAULT_PRIMARY_LANGUAGE};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// HTML template with NAME_ and LANG_ tokens
    #[arg(long, default_value = "index.src.html")]
    pub template: PathBuf,
    /// Directory of <language>.json dictionaries
    #[arg(long, default_value = "translations")]
    pub translations: PathBuf,
    /// Output root; the primary language is written here
    #[arg(long, default_value = "gh-pages")]
    pub output: PathBuf,
    /// Language published at the output root
    #[arg(long, default_value = DEFAULT_PRIMARY_LANGUAGE)]
    pub primary_language: String,
    /// Exit with an error when any token is left untranslated
    #[arg(long)]
    pub strict: bool,
    /// Skip HTML minification
    #[arg(long)]
    pub no_minify: bool,
    /// More log output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> BuildConfig {
        BuildConfig {
            template: self.template.clone(),
            translations: self.translations.clone(),
            output: self.output.clone(),
            primary_language: self.primary_language.clone(),
            strict: self.strict,
        }
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_layout() {
        let cli = Cli::parse_from(["pagelocalizer"]);
        assert_eq!(cli.config(), BuildConfig::default());
        assert!(!cli.no_minify);
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn flags_are_forwarded() {
        let cli = Cli::parse_from([
            "pagelocalizer",
            "--template",
            "src.html",
            "--primary-language",
            "fr",
            "--strict",
            "-vv",
        ]);
        let config = cli.config();
        assert_eq!(config.template, PathBuf::from("src.html"));
        assert_eq!(config.primary_language, "fr");
        assert!(config.strict);
        assert_eq!(cli.log_filter(), "debug");
    }
}
