use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use author_page::connector::api::{Container, ContainerConfig, Router};
use author_page::Commands;

#[derive(Parser)]
#[command(name = "author-page")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Galaxy server root (default: $GALAXY_BASE_URL or the public server)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// API token (default: $GALAXY_API_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Serve all data from a JSON fixture file instead of the network
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        base_url: cli.base_url,
        token: cli.token,
        fixture: cli.fixture,
    })?;
    debug!("Serving author pages from {}", container.source());

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn show_accepts_toolbar_flags() {
        let cli = Cli::try_parse_from([
            "author-page",
            "show",
            "acme",
            "--name",
            "web server",
            "--type",
            "collection",
            "--sort",
            "download_count",
            "--desc",
            "--page",
            "2",
        ])
        .unwrap();

        match cli.command {
            Commands::Show {
                name, kind, desc, page, ..
            } => {
                assert_eq!(name.as_deref(), Some("web server"));
                assert_eq!(kind, Some(author_page::PackageKind::Collection));
                assert!(desc);
                assert_eq!(page, Some(2));
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        let res = Cli::try_parse_from(["author-page", "show", "acme", "--type", "plugin"]);
        assert!(res.is_err());
    }

    #[test]
    fn format_belongs_to_show() {
        let cli = Cli::try_parse_from(["author-page", "show", "acme", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Show { format, .. } => {
                assert_eq!(format, author_page::OutputFormat::Json)
            }
            _ => panic!("expected show"),
        }

        let res = Cli::try_parse_from(["author-page", "follow", "acme", "--format", "json"]);
        assert!(res.is_err());
    }

    #[test]
    fn fixture_flag_is_global() {
        let cli =
            Cli::try_parse_from(["author-page", "follow", "acme", "--fixture", "galaxy.json"])
                .unwrap();
        assert_eq!(cli.fixture, Some(PathBuf::from("galaxy.json")));
    }
}
