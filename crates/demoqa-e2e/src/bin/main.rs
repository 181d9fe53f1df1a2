use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use demoqa_e2e::{scenarios, RunReport, ScenarioOutcome};
use demoqa_pages::{SuiteConfig, SuiteSession};

#[derive(Parser)]
#[command(name = "demoqa-e2e")]
#[command(about = "End-to-end scenarios for the demoqa.com practice site")]
#[command(version)]
struct Cli {
    /// Config file (YAML); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run with a visible browser window (overrides config)
    #[arg(long)]
    headed: bool,

    /// Only run scenarios whose name contains this substring
    #[arg(short, long)]
    filter: Option<String>,

    /// List scenarios without running them
    #[arg(long)]
    list: bool,

    /// Validate config and print the plan without running
    #[arg(long)]
    check: bool,

    /// Directory for failure screenshots
    #[arg(long, default_value = "screenshots")]
    screenshot_dir: PathBuf,

    /// Verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (only errors)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> demoqa_pages::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    let mut config = match cli.config {
        Some(ref path) => SuiteConfig::load(path)?,
        None => SuiteConfig::default(),
    };
    config.apply_env();
    if cli.headed {
        config.browser.headless = false;
    }

    let selected: Vec<_> = scenarios::all()
        .into_iter()
        .filter(|s| {
            cli.filter
                .as_deref()
                .map(|needle| s.name.contains(needle))
                .unwrap_or(true)
        })
        .collect();

    if cli.list {
        for scenario in &selected {
            println!("{}", scenario.name);
        }
        return Ok(());
    }

    if cli.check {
        println!("Config valid");
        println!("  Base URL: {}", config.base_url);
        println!("  Headless: {}", config.browser.headless);
        println!(
            "  Viewport: {}x{}",
            config.browser.viewport.width, config.browser.viewport.height
        );
        println!(
            "  Timeouts: navigation {}ms, default {}ms, poll {}ms",
            config.timeouts.navigation_ms,
            config.timeouts.default_ms,
            config.timeouts.poll_interval_ms
        );
        println!("  Scenarios: {}", selected.len());
        return Ok(());
    }

    println!("Running {} scenario(s) against {}", selected.len(), config.base_url);

    let mut report = RunReport::default();
    for scenario in &selected {
        info!("Scenario: {}", scenario.name);
        let start = Instant::now();

        // Fresh session per scenario so state never leaks between them.
        let session = SuiteSession::launch(&config).await?;
        let result = (scenario.run)(session.page(), &config).await;

        let mut screenshot = None;
        if let Err(ref e) = result {
            error!("Scenario '{}' failed: {}", scenario.name, e);
            screenshot = session
                .failure_screenshot(&cli.screenshot_dir, scenario.name)
                .await;
        }
        session.close().await?;

        report.record(ScenarioOutcome {
            name: scenario.name,
            error: result.err().map(|e| e.to_string()),
            duration_ms: start.elapsed().as_millis() as u64,
            screenshot,
        });
    }

    println!("\n{report}");

    if !report.all_passed() {
        std::process::exit(1);
    }

    Ok(())
}
