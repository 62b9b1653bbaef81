use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::github::{RepoRef, DEFAULT_API_BASE};

#[derive(Parser)]
#[command(name = "commitviz")]
#[command(about = "Chart a GitHub repository's daily commits per author")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct CommonArgs {
    #[arg(long, env = "COMMITVIZ_USER", default_value = "angular", help = "Repository owner")]
    pub user: String,

    #[arg(long, env = "COMMITVIZ_REPO", default_value = "angular.js", help = "Repository name")]
    pub repo: String,

    #[arg(long, help = "Read a saved commits API response instead of fetching")]
    pub input: Option<PathBuf>,

    #[arg(long, env = "COMMITVIZ_API_BASE", default_value = DEFAULT_API_BASE, help = "REST API base URL")]
    pub api_base: String,

    #[arg(long, default_value = "30s", help = "Request timeout (e.g. 10s, 1m)")]
    pub timeout: humantime::Duration,

    #[arg(
        long,
        env = "COMMITVIZ_LOG",
        value_parser = crate::logging::parse_directive,
        help = "Log filter (e.g. warn, commitviz=debug)"
    )]
    pub log_level: Option<String>,
}

impl CommonArgs {
    pub fn repo_ref(&self) -> crate::error::Result<RepoRef> {
        RepoRef::new(self.user.as_str(), self.repo.as_str())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Per-author daily commit matrix
    Matrix {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,

        #[arg(long = "interactive", alias = "tui", alias = "ui", help = "Enable interactive terminal UI")]
        interactive: bool,
    },
    /// Render the matrix as an SVG bar chart
    Chart {
        #[arg(long, short, help = "SVG file to write")]
        output: PathBuf,

        #[arg(long, help = "Draw bars side by side instead of stacked")]
        grouped: bool,

        #[arg(long, default_value_t = 960)]
        width: u32,

        #[arg(long, default_value_t = 500)]
        height: u32,
    },
    /// Dump the fetched commits
    Export {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        // stderr output would tear through the terminal UI
        let interactive = matches!(self.command, Commands::Matrix { interactive: true, .. });
        let level = match (self.common.log_level.as_deref(), interactive) {
            (Some(level), _) => Some(level),
            (None, true) => Some("off"),
            (None, false) => None,
        };
        crate::logging::init(level);

        match self.command {
            Commands::Matrix { json, ndjson, interactive } => {
                if interactive {
                    crate::tui::run(&self.common)
                } else {
                    crate::matrix::exec(&self.common, json, ndjson)
                }
            }
            Commands::Chart { output, grouped, width, height } => {
                crate::chart::exec(&self.common, &output, grouped, width, height)
            }
            Commands::Export { json, ndjson } => crate::export::exec(&self.common, json, ndjson),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_repository() {
        let cli = Cli::try_parse_from(["commitviz", "matrix", "--json"]).unwrap();
        assert_eq!(cli.common.user, "angular");
        assert_eq!(cli.common.repo, "angular.js");
        assert_eq!(cli.common.api_base, DEFAULT_API_BASE);
        assert_eq!(*cli.common.timeout, std::time::Duration::from_secs(30));
    }

    #[test]
    fn chart_requires_output() {
        assert!(Cli::try_parse_from(["commitviz", "chart"]).is_err());
        let cli = Cli::try_parse_from(["commitviz", "chart", "-o", "out.svg", "--grouped"]).unwrap();
        match cli.command {
            Commands::Chart { grouped, width, height, .. } => {
                assert!(grouped);
                assert_eq!((width, height), (960, 500));
            }
            _ => panic!("expected chart command"),
        }
    }

    #[test]
    fn bad_log_filter_is_a_usage_error() {
        assert!(Cli::try_parse_from(["commitviz", "--log-level", "commitviz=loud", "matrix"]).is_err());
        let cli = Cli::try_parse_from(["commitviz", "--log-level", "commitviz=debug", "matrix"]).unwrap();
        assert_eq!(cli.common.log_level.as_deref(), Some("commitviz=debug"));
    }
}
