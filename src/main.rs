//! Command-line entry point.
//!
//! ```text
//! toolshelf --dataset tools.json --category image-generation,marketing --sort rating
//! toolshelf --dataset tools.json --favorite chatgpt --view midjourney
//! toolshelf --config ~/.config/toolshelf.toml --search writer --min-rating 4
//! ```
//!
//! Filter options (`--search`, `--category`, `--access`, `--tag`, `--api`,
//! `--min-rating`, `--sort`, `--order`) narrow the printed list for this run
//! only. Preference options (`--favorite`, `--unfavorite`, `--view`) are
//! persisted to the data directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use toolshelf::app::FilterPatch;
use toolshelf::domain::{AccessLevel, FilterCriteria, SortKey, SortOrder, ToolCategory};
use toolshelf::observability::init_tracing;
use toolshelf::{initialize, Config, Event, Result};

#[derive(Parser, Debug)]
#[command(name = "toolshelf", version)]
#[command(about = "Browse, filter and bookmark a catalog of AI tools")]
struct Cli {
    /// JSON file holding the tool dataset
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Case-insensitive text matched against name, description and tags
    #[arg(long)]
    search: Option<String>,

    /// Categories to include, e.g. `text-generation,marketing`
    #[arg(long, value_delimiter = ',')]
    category: Vec<ToolCategory>,

    /// Access levels to include (free, freemium, paid, enterprise)
    #[arg(long, value_delimiter = ',')]
    access: Vec<AccessLevel>,

    /// Tags to include
    #[arg(long, value_delimiter = ',')]
    tag: Vec<String>,

    /// Only tools whose API availability matches
    #[arg(long)]
    api: Option<bool>,

    /// Minimum rating; unrated tools count as 0
    #[arg(long)]
    min_rating: Option<f64>,

    /// Sort key (popularity, rating, newest, name)
    #[arg(long)]
    sort: Option<SortKey>,

    /// Sort direction (asc, desc)
    #[arg(long)]
    order: Option<SortOrder>,

    /// Tool id to add to the favorites
    #[arg(long)]
    favorite: Option<String>,

    /// Tool id to remove from the favorites
    #[arg(long)]
    unfavorite: Option<String>,

    /// Tool id to record as recently viewed
    #[arg(long)]
    view: Option<String>,

    /// TOML configuration file; command-line options take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for persisted preferences, collections and traces
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Tracing filter directive, e.g. `debug` or `toolshelf::storage=trace`
    #[arg(long)]
    trace_level: Option<String>,

    /// Also print log events to stderr
    #[arg(long)]
    trace_stderr: bool,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let overrides = Config {
            data_dir: self.data_dir.clone(),
            dataset: self.dataset.clone(),
            trace_level: self.trace_level.clone(),
            trace_stderr: self.trace_stderr,
        };
        Ok(match &self.config {
            Some(path) => Config::from_file(path)?.merged_with(overrides),
            None => overrides,
        })
    }

    /// Only the filter options given on the command line become patch fields.
    fn filter_patch(&self) -> FilterPatch {
        FilterPatch::from(FilterCriteria {
            categories: non_empty(&self.category),
            access_levels: non_empty(&self.access),
            tags: non_empty(&self.tag),
            has_api: self.api,
            min_rating: self.min_rating,
            sort_by: self.sort,
            sort_order: self.order,
        })
    }
}

fn non_empty<T: Clone>(values: &[T]) -> Option<Vec<T>> {
    (!values.is_empty()).then(|| values.to_vec())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("toolshelf: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config()?;
    init_tracing(&config);
    tracing::debug!(?config, "starting toolshelf");

    let mut catalog = initialize(&config)?;

    let filters = cli.filter_patch();
    if !filters.is_empty() {
        catalog.dispatch(Event::UpdateFilters(filters));
    }
    if let Some(term) = &cli.search {
        catalog.dispatch(Event::SetSearchTerm(term.clone()));
    }
    if let Some(id) = &cli.favorite {
        catalog.dispatch(Event::AddFavorite(id.clone()));
    }
    if let Some(id) = &cli.unfavorite {
        catalog.dispatch(Event::RemoveFavorite(id.clone()));
    }
    if let Some(id) = &cli.view {
        catalog.dispatch(Event::ViewTool(id.clone()));
    }

    let state = catalog.state();
    for tool in state.filtered_tools() {
        let rating = tool
            .rating
            .map_or_else(|| "-".to_string(), |r| format!("{r:.1}"));
        println!("{}  {}  {}", tool.id, tool.name, rating);
    }
    println!(
        "{} of {} tools, {} favorites, {} recent",
        state.filtered_tools().len(),
        state.tools().len(),
        state.preferences().favorite_tools.len(),
        state.preferences().recent_tools.len(),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use toolshelf::app::Patch;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("toolshelf").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_filter_options() {
        let cli = parse(&[
            "--category",
            "image-generation,marketing",
            "--access",
            "free",
            "--api",
            "true",
            "--min-rating",
            "4.5",
            "--sort",
            "rating",
        ])
        .unwrap();
        let patch = cli.filter_patch();

        assert_eq!(
            patch.categories,
            Patch::Set(vec![ToolCategory::ImageGeneration, ToolCategory::Marketing])
        );
        assert_eq!(patch.access_levels, Patch::Set(vec![AccessLevel::Free]));
        assert_eq!(patch.has_api, Patch::Set(true));
        assert_eq!(patch.min_rating, Patch::Set(4.5));
        assert_eq!(patch.sort_by, Patch::Set(SortKey::Rating));
        assert!(patch.sort_order.is_keep());
        assert!(patch.tags.is_keep());
    }

    #[test]
    fn no_filter_options_means_empty_patch() {
        let cli = parse(&["--dataset", "tools.json", "--view", "gpt"]).unwrap();
        assert!(cli.filter_patch().is_empty());
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(parse(&["--category", "robots"]).is_err());
        assert!(parse(&["--api", "sometimes"]).is_err());
        assert!(parse(&["--order", "sideways"]).is_err());
    }

    #[test]
    fn rejects_stray_arguments() {
        assert!(parse(&["dataset=tools.json", "--sort", "rating"]).is_err());
    }

    #[test]
    fn command_line_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("toolshelf.toml");
        std::fs::write(&file, "dataset = \"/a.json\"\ntrace_level = \"info\"\n").unwrap();
        let file = file.to_string_lossy().into_owned();

        let cli = parse(&["--config", &file, "--dataset", "/b.json"]).unwrap();
        let config = cli.config().unwrap();

        assert_eq!(config.dataset, Some(PathBuf::from("/b.json")));
        assert_eq!(config.trace_level.as_deref(), Some("info"));
    }
}
