//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;

/// Grove theme components and garden link tooling
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: grove.toml, searched upward from cwd)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the page title markup for one or more page slugs
    #[command(visible_alias = "r")]
    Render {
        /// Page slugs (e.g. `index`, `posts/my-post`)
        #[arg(value_name = "SLUG", required = true)]
        slugs: Vec<String>,

        /// Extra display class merged after `page-title`
        #[arg(short, long)]
        display_class: Option<String>,
    },

    /// Print the bundled component stylesheet
    Css {
        /// Minify the bundled CSS
        #[arg(short, long)]
        minify: bool,
    },

    /// Check markdown sources for broken links and links to drafts
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Directory to scan (default: `[check] dir` from config, else cwd)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Automatically fix broken links where possible
    #[arg(short, long)]
    pub fix: bool,

    /// Review each fix before applying
    #[arg(short, long)]
    pub interactive: bool,

    /// Save the Markdown report to a file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub report: Option<PathBuf>,

    /// Print the report as JSON instead of Markdown
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Config file name and whether the user named it explicitly.
    pub fn config_path(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from(["grove", "render", "a/b/c", "-d", "sidebar"]);
        match cli.command {
            Commands::Render {
                slugs,
                display_class,
            } => {
                assert_eq!(slugs, ["a/b/c"]);
                assert_eq!(display_class.as_deref(), Some("sidebar"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::parse_from(["grove", "-C", "site.toml", "check", "--fix", "-r", "health.md"]);
        assert_eq!(cli.config_path(), (PathBuf::from("site.toml"), true));
        let Commands::Check { args } = cli.command else {
            panic!("expected check");
        };
        assert!(args.fix);
        assert!(!args.interactive);
        assert_eq!(args.report, Some(PathBuf::from("health.md")));
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::parse_from(["grove", "css"]);
        assert_eq!(cli.config_path(), (PathBuf::from(CONFIG_FILE), false));
    }
}
