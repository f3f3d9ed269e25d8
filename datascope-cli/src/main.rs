//! Terminal front-end: the form-controller stand-in.
//!
//! Collects an endpoint, filter parameters and a field name from the
//! command line, runs one fetch cycle, and prints the rendered table.

use clap::Parser;
use datascope_lib::FetchClient;
use datascope_lib::fetch::FetchController;
use datascope_lib::render::TableView;
use datascope_lib::render::render_text;
use datascope_lib::request::FetchRequest;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;

#[derive(Parser)]
#[command(
    name = "datascope",
    about = "Fetch a JSON endpoint and tabulate a field of its first element"
)]
struct Args {
    /// Endpoint URL to fetch (absolute)
    url: String,

    /// Key inside the first response element that holds the dataset
    #[arg(short, long)]
    field: String,

    /// Filter parameter as KEY=VALUE; repeatable. Empty values are dropped.
    #[arg(short, long = "param", value_name = "KEY=VALUE")]
    params: Vec<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .expect("Failed to initialize logger");

    let mut request = FetchRequest::new(&args.url, &args.field);
    for pair in &args.params {
        match pair.split_once('=') {
            Some((key, value)) => request = request.param(key, value),
            None => log::warn!("ignoring malformed parameter {pair:?} (expected KEY=VALUE)"),
        }
    }

    let controller = FetchController::new(FetchClient::new(), request);
    controller.load().await;

    let view = TableView::from_snapshot(&controller.snapshot());
    print!("{}", render_text(&view));
    if !matches!(view, TableView::Table(_)) {
        println!();
    }

    if matches!(view, TableView::Error(_)) {
        std::process::exit(1);
    }
}
