use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{self, Config};
use crate::utils::error::SiteResult;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "foldsite")]
#[command(about = "Fold a content tree, layouts and partials into a static site", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (.yml, .yaml or .toml)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Do not copy the static directory into the output
    #[arg(long, default_value_t = false, global = true)]
    pub skip_static: bool,

    /// Remove the output directory before building
    #[arg(long, default_value_t = false, global = true)]
    pub clean: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,

    /// Only print warnings and errors
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Build your site
    #[command(alias = "b")]
    Build {
        /// Site source directory (defaults to ./)
        input: Option<PathBuf>,

        /// Output directory (defaults to ./site)
        output: Option<PathBuf>,
    },

    /// Build, then rebuild whenever the source changes
    #[command(alias = "w")]
    Watch {
        /// Site source directory (defaults to ./)
        input: Option<PathBuf>,

        /// Output directory (defaults to ./site)
        output: Option<PathBuf>,

        /// Also serve the output over HTTP (port defaults to 8080)
        #[arg(long, value_name = "PORT", num_args = 0..=1, default_missing_value = "8080")]
        serve: Option<u16>,
    },

    /// Create a starter site
    Init {
        /// Directory to create the site in
        destination: PathBuf,
    },
}

impl Cli {
    /// Load the configuration file, then apply command-line overrides
    pub fn build_config(&self, input: Option<&PathBuf>, output: Option<&PathBuf>) -> SiteResult<Config> {
        let mut config = config::load_config(self.config.as_ref())?;

        if let Some(input) = input {
            config.input = input.clone();
        }
        if let Some(output) = output {
            config.output = output.clone();
        }
        config.skip_static |= self.skip_static;
        config.clean |= self.clean;

        config::finalize(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_positionals() {
        let cli = Cli::try_parse_from(["foldsite", "build", "src", "out", "--skip-static"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Build { input: Some("src".into()), output: Some("out".into()) }
        );
        assert!(cli.skip_static);

        let config = cli
            .build_config(Some(&PathBuf::from("src")), Some(&PathBuf::from("out")))
            .unwrap();
        assert_eq!(config.input, PathBuf::from("src"));
        assert_eq!(config.output, PathBuf::from("out"));
        assert!(config.skip_static);
    }

    #[test]
    fn test_watch_serve_port() {
        let cli = Cli::try_parse_from(["foldsite", "watch", "--serve"]).unwrap();
        assert!(matches!(cli.command, Commands::Watch { serve: Some(8080), .. }));

        let cli = Cli::try_parse_from(["foldsite", "watch", "site", "out", "--serve=3000"]).unwrap();
        assert!(matches!(cli.command, Commands::Watch { serve: Some(3000), .. }));

        let cli = Cli::try_parse_from(["foldsite", "watch"]).unwrap();
        assert!(matches!(cli.command, Commands::Watch { serve: None, .. }));
    }

    #[test]
    fn test_init_requires_destination() {
        assert!(Cli::try_parse_from(["foldsite", "init"]).is_err());
        assert!(Cli::try_parse_from(["foldsite"]).is_err());
    }
}
