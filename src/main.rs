//! folio - Entry Point

use clap::{Parser, ValueEnum};
use folio::state::{ActiveView, AppState, StartupQuery};
use folio::view::{ColorConfig, TuiOptions};
use std::path::PathBuf;
use tracing::info;

/// View to open on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    /// Blog index
    Blog,
    /// Project gallery
    Projects,
    /// Video carousel
    Videos,
}

impl From<ViewArg> for ActiveView {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Blog => ActiveView::Blog,
            ViewArg::Projects => ActiveView::Projects,
            ViewArg::Videos => ActiveView::Videos,
        }
    }
}

/// folio - browse a portfolio's blog, projects and videos in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Search, filter and page through a portfolio content document")]
pub struct Args {
    /// Path to the JSON content document (`-` reads stdin)
    pub content: Option<PathBuf>,

    /// View to open
    #[arg(long, value_enum, default_value = "blog")]
    pub view: ViewArg,

    /// Start with this search text applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Select a facet (repeatable)
    #[arg(long = "facet")]
    pub facets: Vec<String>,

    /// Start on this page (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Posts per blog page (0 shows all)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the view as JSON instead of opening the browser
    #[arg(long)]
    pub print: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Log engine transitions at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Startup view and query from the flags.
    pub fn startup_query(&self) -> StartupQuery {
        StartupQuery {
            view: self.view.into(),
            search: self.search.clone(),
            facets: self.facets.clone(),
            page: self.page.map(|p| p as usize),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = folio::config::load_config_with_precedence(args.config.clone())?;
        let merged = folio::config::merge_config(config_file);
        let with_env = folio::config::apply_env_overrides(merged)?;
        folio::config::apply_cli_overrides(with_env, args.content.clone(), args.page_size)
    };

    let directive = if args.verbose {
        folio::logging::VERBOSE_DIRECTIVE
    } else {
        folio::logging::DEFAULT_DIRECTIVE
    };
    folio::logging::init_with_default(&config.log_file_path, directive)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = folio::source::detect_content_source(config.content_path.clone())?;
    let document = source.load()?;

    let mut app_state = AppState::new(document, config.policies());
    app_state.apply_startup(args.startup_query());

    if args.print {
        println!("{}", folio::view::render_json(&app_state)?);
        return Ok(());
    }

    app_state.help_visible = config.show_help;
    let options = TuiOptions {
        color: ColorConfig::from_env_and_args(args.no_color),
    };
    folio::view::run_with_state(app_state, options)?;

    Ok(())
}
