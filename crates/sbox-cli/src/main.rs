mod api;
mod browser;

use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use sbox_config::Config;
use sbox_engine::{
    Link, Page, PageSource, collect_links, load_page, parse, parsing::plain_text, render,
};

use crate::api::HttpPageSource;

#[derive(Parser, Debug)]
#[command(name = "sbox", version, about = "CLI for Scrapbox")]
struct Cli {
    /// Config file (default is ~/.config/sbox/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Target server, overriding config and SBOX_SERVER
    #[arg(long, global = true)]
    server: Option<String>,

    /// Target project, overriding config and SBOX_PROJECT
    #[arg(long, global = true)]
    project: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Show page contents.
    Show {
        /// `[[server/]project/]page`
        page: String,
        /// Print the text with markup stripped.
        #[arg(long)]
        plain: bool,
    },
    /// List the links of a page as `title<TAB>url<TAB>internal|external`.
    Links { page: String },
    /// Parse a local file (or stdin) and print its segments.
    Parse { file: Option<PathBuf> },
    /// Open a page in the browser.
    Browse {
        page: String,
        /// Body to pre-fill when the page does not exist yet.
        #[arg(long)]
        contents: Option<String>,
    },
    /// List pages of a project.
    List {
        #[command(subcommand)]
        what: ListCmd,
    },
    /// Switch the default server or project.
    Switch {
        #[arg(long = "to-server")]
        to_server: Option<String>,
        #[arg(long = "to-project")]
        to_project: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ListCmd {
    /// List pages of the current project.
    Pages {
        /// Maximum number of pages.
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref());
    let config = Config::resolve(&config_path)
        .context("failed to load config")?
        .with_overrides(cli.server, cli.project);
    log::debug!("server: {}, project: {}", config.server, config.project);

    match cli.cmd {
        Cmd::Show { page, plain } => show(&config, &page, plain),
        Cmd::Links { page } => links(&config, &page),
        Cmd::Parse { file } => parse_file(&config, file),
        Cmd::Browse { page, contents } => {
            let page = target_page(&config, &page);
            browser::open_url(&page.browse_url(contents.as_deref()))
                .with_context(|| format!("failed to open {page}"))
        }
        Cmd::List {
            what: ListCmd::Pages { limit },
        } => list_pages(&config, limit),
        Cmd::Switch {
            to_server,
            to_project,
        } => switch(&config_path, to_server, to_project),
    }
}

fn target_page(config: &Config, path: &str) -> Page {
    Page::parse_path(path, &config.project, &config.server)
}

fn show(config: &Config, path: &str, plain: bool) -> Result<()> {
    let page = target_page(config, path);
    let source = HttpPageSource::new();
    if plain {
        let segments = load_page(&source, &page)?;
        println!("{}", plain_text(&segments));
    } else {
        let text = source
            .fetch_text(&page)
            .with_context(|| format!("failed to fetch page from {page}"))?;
        println!("{text}");
    }
    Ok(())
}

fn links(config: &Config, path: &str) -> Result<()> {
    let page = target_page(config, path);
    let segments = load_page(&HttpPageSource::new(), &page)?;
    for link in collect_links(&segments) {
        println!("{}", link_line(link));
    }
    Ok(())
}

fn link_line(link: &Link) -> String {
    let kind = if link.is_external() {
        "external"
    } else {
        "internal"
    };
    format!("{}\t{}\t{kind}", link.title, link.url)
}

fn parse_file(config: &Config, file: Option<PathBuf>) -> Result<()> {
    let input = match &file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("failed to read stdin")?,
    };

    let segments = parse(&input, &config.server, &config.project)?;
    for segment in &segments {
        println!("{segment:?}");
    }

    if render(&segments) != input {
        bail!("rendered segments do not reproduce the input");
    }
    Ok(())
}

fn list_pages(config: &Config, limit: usize) -> Result<()> {
    if config.project.is_empty() {
        bail!("no project selected; pass --project or run `sbox switch --to-project <name>`");
    }
    let titles = HttpPageSource::new()
        .list_pages(&config.server, &config.project, limit)
        .with_context(|| {
            format!(
                "failed to fetch pages from {}/{}",
                config.server, config.project
            )
        })?;
    for title in titles {
        println!("{title}");
    }
    Ok(())
}

/// Persists new defaults; only the file's own values are carried over, never
/// environment or flag overrides.
fn switch(config_path: &Path, to_server: Option<String>, to_project: Option<String>) -> Result<()> {
    if to_server.is_none() && to_project.is_none() {
        bail!("nothing to switch; pass --to-server and/or --to-project");
    }
    let config = Config::load_from_path(config_path)?
        .unwrap_or_default()
        .with_overrides(to_server, to_project);
    config.save_to_path(config_path)?;
    log::info!(
        "Saved server {} and project {} to {}",
        config.server,
        config.project,
        config_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sbox", "show", "proj/page", "--server", "https://example.com"])
            .unwrap();
        assert_eq!(cli.server.as_deref(), Some("https://example.com"));
        assert!(matches!(cli.cmd, Cmd::Show { plain: false, .. }));
    }

    #[test]
    fn list_pages_default_limit() {
        let cli = Cli::try_parse_from(["sbox", "list", "pages"]).unwrap();
        assert!(matches!(
            cli.cmd,
            Cmd::List {
                what: ListCmd::Pages { limit: 100 }
            }
        ));
    }

    #[test]
    fn link_lines_mark_external_links() {
        let segments = parse(
            "[Page] [https://example.com Example]",
            "https://scrapbox.io",
            "niboshi",
        )
        .unwrap();
        let lines: Vec<String> = collect_links(&segments).into_iter().map(link_line).collect();
        assert_eq!(
            lines,
            vec![
                "Page\thttps://scrapbox.io/niboshi/Page\tinternal",
                "Example\thttps://example.com\texternal",
            ]
        );
    }

    #[test]
    fn target_page_uses_config_defaults() {
        let config = Config {
            server: "https://scrapbox.io".to_string(),
            project: "niboshi".to_string(),
        };
        let page = target_page(&config, "Page");
        assert_eq!(page.project, "niboshi");
        assert_eq!(page.server, "https://scrapbox.io");
    }
}
