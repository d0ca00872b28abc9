//! txview - Entry Point

use clap::Parser;
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use txview::model::AppError;
use txview::source::RecordSource;
use txview::state::{SortColumn, TransactionView};
use txview::view::{render_kpis, render_table, ChartRenderer, TextChartRenderer};

/// txview - search, sort and page through a transactions table
#[derive(Parser, Debug)]
#[command(name = "txview")]
#[command(version)]
#[command(about = "Search, sort and page through a JSON transactions table")]
pub struct Args {
    /// Path to JSON record file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Case-insensitive search over id, user name and status
    #[arg(short, long)]
    pub search: Option<String>,

    /// Click a column header (user, date, amount, status); repeat to toggle
    #[arg(long, value_name = "COLUMN")]
    pub sort: Vec<SortColumn>,

    /// Page to show (must be positive)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<NonZeroUsize>,

    /// Print the revenue chart under the table
    #[arg(long)]
    pub chart: bool,

    /// Print the KPI summary above the table
    #[arg(long)]
    pub kpis: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = txview::config::load_config_with_precedence(args.config.clone())?;
        let merged = txview::config::merge_config(config_file)?;
        let with_env = txview::config::apply_env_overrides(merged);

        // Flags only override when explicitly set
        let chart_override = if args.chart { Some(true) } else { None };
        let kpis_override = if args.kpis { Some(true) } else { None };
        txview::config::apply_cli_overrides(
            with_env,
            args.file.clone(),
            args.page_size,
            chart_override,
            kpis_override,
        )
    };

    txview::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let mut source = txview::source::detect_input_source(config.data_file.clone())?;
    let data = source.load()?;

    let mut view = TransactionView::with_page_size(config.page_size);
    view.set_records(data.transactions);

    if let Some(search) = &args.search {
        view.set_query(search);
    }
    for column in &args.sort {
        view.set_sort(*column);
    }

    let requested = args.page as usize;
    if requested != view.current_page() && !view.set_page(requested) {
        warn!(requested, total_pages = view.total_pages(), "Requested page out of range");
        eprintln!(
            "txview: page {requested} does not exist ({} pages), showing page {}",
            view.total_pages(),
            view.current_page()
        );
    }

    let mut stdout = std::io::stdout().lock();

    if config.show_kpis {
        stdout.write_all(render_kpis(&data.kpis).as_bytes())?;
        writeln!(stdout)?;
    }

    stdout.write_all(render_table(&view).as_bytes())?;

    if config.show_chart {
        writeln!(stdout)?;
        let chart = TextChartRenderer::default().render(&data.revenue);
        stdout.write_all(chart.as_bytes())?;
    }

    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("txview: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        // Help returns Err with DisplayHelp, which is success
        let err = Args::try_parse_from(["txview", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let err = Args::try_parse_from(["txview", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["txview"]);
        assert_eq!(args.file, None);
        assert_eq!(args.search, None);
        assert!(args.sort.is_empty());
        assert_eq!(args.page, 1);
        assert_eq!(args.page_size, None);
        assert!(!args.chart);
        assert!(!args.kpis);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["txview", "records.json"]);
        assert_eq!(args.file, Some(PathBuf::from("records.json")));
    }

    #[test]
    fn test_search_short_and_long_flag() {
        let short = Args::parse_from(["txview", "-s", "pending"]);
        let long = Args::parse_from(["txview", "--search", "John"]);
        assert_eq!(short.search.as_deref(), Some("pending"));
        assert_eq!(long.search.as_deref(), Some("John"));
    }

    #[test]
    fn test_sort_is_repeatable_and_ordered() {
        let args = Args::parse_from(["txview", "--sort", "amount", "--sort", "Amount", "--sort", "user"]);
        assert_eq!(
            args.sort,
            vec![SortColumn::Amount, SortColumn::Amount, SortColumn::User]
        );
    }

    #[test]
    fn test_sort_rejects_unknown_column() {
        let err = Args::try_parse_from(["txview", "--sort", "id"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_page_short_and_long_flag() {
        assert_eq!(Args::parse_from(["txview", "-p", "3"]).page, 3);
        assert_eq!(Args::parse_from(["txview", "--page", "42"]).page, 42);
    }

    #[test]
    fn test_page_rejects_zero() {
        assert!(Args::try_parse_from(["txview", "--page", "0"]).is_err());
    }

    #[test]
    fn test_page_rejects_negative() {
        assert!(Args::try_parse_from(["txview", "--page", "-1"]).is_err());
    }

    #[test]
    fn test_page_size_rejects_zero() {
        assert!(Args::try_parse_from(["txview", "--page-size", "0"]).is_err());
        let args = Args::parse_from(["txview", "--page-size", "25"]);
        assert_eq!(args.page_size.map(NonZeroUsize::get), Some(25));
    }

    #[test]
    fn test_chart_flag() {
        assert!(Args::parse_from(["txview", "--chart"]).chart);
    }

    #[test]
    fn test_kpis_flag() {
        assert!(Args::parse_from(["txview", "--kpis"]).kpis);
    }

    #[test]
    fn test_config_flag() {
        let args = Args::parse_from(["txview", "--config", "/tmp/txview.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/txview.toml")));
    }

    #[test]
    fn test_all_flags_combined() {
        let args = Args::parse_from([
            "txview",
            "data.json",
            "--search",
            "failed",
            "--sort",
            "date",
            "--page",
            "2",
            "--page-size",
            "5",
            "--chart",
            "--kpis",
            "--config",
            "custom.toml",
        ]);

        assert_eq!(args.file, Some(PathBuf::from("data.json")));
        assert_eq!(args.search.as_deref(), Some("failed"));
        assert_eq!(args.sort, vec![SortColumn::Date]);
        assert_eq!(args.page, 2);
        assert_eq!(args.page_size.map(NonZeroUsize::get), Some(5));
        assert!(args.chart);
        assert!(args.kpis);
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    }
}
