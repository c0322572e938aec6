use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use nyt_trends::config::{DEFAULT_API_URL, DEFAULT_CHART_URL, PLACEHOLDER_API_KEY};
use nyt_trends::{TrendParams, TrendsConfig, TrendsService};
use nyt_trends::{render, server, storage};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "trends",
    version,
    about = "Compare two queries in the NYT Article Search API by month and printed page"
)]
struct Cli {
    #[command(flatten)]
    upstream: UpstreamArgs,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct UpstreamArgs {
    /// Article Search API key.
    #[arg(
        long,
        env = "NYT_ARTICLE_API_KEY",
        default_value = PLACEHOLDER_API_KEY,
        hide_default_value = true,
        hide_env_values = true,
        global = true
    )]
    api_key: String,
    /// Article Search endpoint.
    #[arg(long, env = "NYT_ARTICLE_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,
    /// Chart image service endpoint.
    #[arg(long, env = "TRENDS_CHART_URL", default_value = DEFAULT_CHART_URL, global = true)]
    chart_url: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the comparison page over HTTP.
    Serve(ServeArgs),
    /// Run one comparison (and optionally save the page or the aggregates).
    Get(GetArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    PagesCsv,
    Json,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// First query (default "palin").
    #[arg(long)]
    query_1: Option<String>,
    /// Second query (default "biden").
    #[arg(long)]
    query_2: Option<String>,
    /// Year for the first query; out-of-range values fall back to 2008.
    #[arg(long)]
    year_1: Option<String>,
    /// Year for the second query; out-of-range values fall back to 2008.
    #[arg(long)]
    year_2: Option<String>,
    /// Write the rendered HTML page to this path.
    #[arg(long)]
    html: Option<PathBuf>,
    /// Save aggregates to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format. If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// How many people/terms to print per query.
    #[arg(long, default_value_t = 5)]
    top: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let config = TrendsConfig {
        api_url: cli.upstream.api_url,
        chart_url: cli.upstream.chart_url,
        ..TrendsConfig::default()
    }
    .with_api_key(cli.upstream.api_key);
    let service = TrendsService::new(config)?;

    match cli.cmd {
        Command::Serve(args) => server::serve(Arc::new(service), args.bind).await,
        Command::Get(args) => cmd_get(&service, args).await,
    }
}

fn top_terms(items: &[(String, u64)], n: usize) -> String {
    items
        .iter()
        .take(n)
        .map(|(t, c)| format!("{t} ({c})"))
        .collect::<Vec<_>>()
        .join("; ")
}

async fn cmd_get(service: &TrendsService, args: GetArgs) -> Result<()> {
    let params = TrendParams {
        query_1: args.query_1,
        query_2: args.query_2,
        year_1: args.year_1,
        year_2: args.year_2,
    };
    let report = service.run(&params).await?;

    for side in [&report.side_1, &report.side_2] {
        println!("{} ({}): {} articles", side.query, side.year, side.total);
        println!("  people: {}", top_terms(&side.people, args.top));
        println!("  terms:  {}", top_terms(&side.terms, args.top));
    }
    println!("month chart: {}", report.month_chart_url);
    println!("page chart:  {}", report.page_chart_url);

    if let Some(path) = args.html.as_ref() {
        std::fs::write(path, render::render_page(&report))?;
        eprintln!("Wrote page to {}", path.display());
    }

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::PagesCsv) => "pages-csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&report, path)?,
            "pages-csv" => storage::save_page_csv(&report, path)?,
            "json" => storage::save_json(&report, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved report to {}", path.display());
    }

    Ok(())
}
