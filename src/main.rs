use anyhow::{Context, Result};
use clap::{ArgAction, Args, ColorChoice, CommandFactory, FromArgMatches, Parser, Subcommand};
use colored::Colorize;
use originsense::config::{Config, ConfigError};
use originsense::{Analysis, Badge, DetectionReport, OriginDetector};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `originsense=debug`.
const LOG_ENV: &str = "ORIGINSENSE_LOG";

#[derive(Parser)]
#[command(
    name = "originsense",
    version,
    about = "Detect whether a product page describes an Indian-made product",
    arg_required_else_help = true
)]
struct Cli {
    /// Disable color
    #[arg(long = "no-color", global = true)]
    no_color: bool,

    /// Config file (default: <config dir>/originsense/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the origin badge for a product page
    Detect(DetectArgs),
    /// Exit 0 when the page earns the "made in India" badge, 1 otherwise
    Check(CheckArgs),
    /// Classify an address against the Indian geography tables
    Classify(ClassifyArgs),
    /// Print the JSON schema of `detect --json` output
    Schema,
}

#[derive(Args, Clone)]
struct InputArgs {
    /// Page text or HTML to read; stdin when omitted or "-"
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Parse input as HTML (implied by a .html/.htm file)
    #[arg(long)]
    html: bool,

    /// Confidence an Indian verdict must exceed to earn the badge
    #[arg(long, value_name = "N")]
    threshold: Option<f32>,
}

#[derive(Args, Clone)]
struct DetectArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output JSON (stable schema)
    #[arg(long)]
    json: bool,

    /// Show extracted fields and the deciding signal
    #[arg(short, long)]
    explain: bool,
}

#[derive(Args, Clone)]
struct CheckArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Suppress output (useful in scripts)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Args, Clone)]
struct ClassifyArgs {
    /// Address text; several arguments are joined with spaces
    #[arg(value_name = "TEXT", required = true)]
    text: Vec<String>,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

struct Runtime {
    config: Config,
    detector: OriginDetector,
    color: bool,
}

fn detect_color_choice() -> ColorChoice {
    // Scan args before clap so help/errors honor `--no-color`.
    // Mirror clap's parsing by stopping at `--` which terminates flags.
    let mut args = std::env::args_os();
    // Skip binary name
    args.next();
    let mut flag = false;
    for arg in args {
        if arg == "--" {
            break;
        }
        if arg == "--no-color" {
            flag = true;
            break;
        }
    }
    if flag || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn is_html_input(args: &InputArgs) -> bool {
    args.html
        || args
            .file
            .as_deref()
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

/// Read, analyze and badge one input. Errors are reported here and mapped to
/// exit code 2.
fn analyze(args: &InputArgs, runtime: &Runtime) -> Result<(Analysis, Badge), i32> {
    let mut display = runtime.config.display.clone();
    if let Some(threshold) = args.threshold {
        display.threshold = threshold;
    }
    if let Err(e) = display.validate() {
        eprintln!("Error: {}", e);
        return Err(2);
    }

    let input = match read_input(args.file.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return Err(2);
        }
    };

    let analysis = if is_html_input(args) {
        runtime.detector.analyze_html(&input)
    } else {
        runtime.detector.analyze_text(&input)
    };
    let badge = Badge::for_result(&analysis.result, &display);
    debug!(?badge, confidence = analysis.result.confidence, "badge chosen");
    Ok((analysis, badge))
}

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

fn colorize_value(v: &str, color: bool) -> String {
    if !color {
        return v.to_string();
    }
    match v {
        "true" => v.green().to_string(),
        "false" | "none" => v.red().to_string(),
        _ => v.to_string(),
    }
}

fn render_explanation(analysis: &Analysis, color: bool) -> String {
    let result = &analysis.result;
    let fields = &analysis.fields;
    let signal = serde_json::to_value(result.signal)
        .ok()
        .and_then(|v| v.as_str().map(String::from))
        .unwrap_or_default();

    let mut items: Vec<(&str, String)> = vec![
        ("is_indian", result.is_indian.to_string()),
        ("confidence", format!("{:.2}", result.confidence)),
        ("indicator", result.indicator.clone()),
        ("signal", signal),
    ];
    items.push((
        "country_of_origin",
        fields.country_of_origin.clone().unwrap_or_else(|| "none".into()),
    ));
    items.push((
        "manufacturer",
        fields.manufacturer.clone().unwrap_or_else(|| "none".into()),
    ));

    let mut out = heading("Explanation:", color);
    for (key, value) in items {
        out.push_str("\n  ");
        out.push_str(key);
        out.push_str(" = ");
        out.push_str(&colorize_value(&value, color));
    }
    out
}

fn run_detect(args: DetectArgs, runtime: &Runtime) -> Result<(), i32> {
    let (analysis, badge) = analyze(&args.input, runtime)?;

    if args.json {
        let mut report = DetectionReport::new(analysis.result.clone(), badge);
        if args.explain {
            report = report.with_fields(analysis.fields.clone());
        }
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(_) => return Err(3),
        }
    } else {
        println!("{}", badge.render(&analysis.result, runtime.color));
        if args.explain {
            println!("{}", render_explanation(&analysis, runtime.color));
        }
    }
    Ok(())
}

fn run_check(args: CheckArgs, runtime: &Runtime) -> Result<(), i32> {
    let (analysis, badge) = analyze(&args.input, runtime)?;
    if !args.quiet {
        println!("{}", badge.render(&analysis.result, runtime.color));
    }
    if badge.is_made_in_india() {
        Ok(())
    } else {
        Err(1)
    }
}

fn run_classify(args: ClassifyArgs, runtime: &Runtime) -> Result<(), i32> {
    let text = args.text.join(" ");
    let found = runtime.detector.kb().classify_location(&text);

    if args.json {
        match serde_json::to_string_pretty(&found) {
            Ok(s) => println!("{}", s),
            Err(_) => return Err(3),
        }
        return Ok(());
    }

    let match_type = found
        .match_type
        .map(|t| t.label().to_string())
        .unwrap_or_else(|| "none".into());
    let match_value = found.match_value.clone().unwrap_or_else(|| "none".into());
    let rows = [
        ("is_indian", found.is_indian.to_string()),
        ("match_type", match_type),
        ("match_value", match_value),
    ];
    let lines: Vec<String> = rows
        .iter()
        .map(|(k, v)| format!("{} = {}", k, colorize_value(v, runtime.color)))
        .collect();
    println!("{}", lines.join("\n"));
    Ok(())
}

fn run_schema() -> Result<(), i32> {
    let schema = schemars::schema_for!(DetectionReport);
    match serde_json::to_string_pretty(&schema) {
        Ok(s) => println!("{}", s),
        Err(_) => return Err(3),
    }
    Ok(())
}

fn main() {
    let color = detect_color_choice();
    let matches = Cli::command().color(color).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        return;
    };

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    let want_color = !matches!(color, ColorChoice::Never)
        && config.output.color
        && supports_color::on(supports_color::Stream::Stdout).is_some();
    let runtime = Runtime {
        detector: OriginDetector::from_config(&config),
        config,
        color: want_color,
    };

    let outcome = match command {
        Commands::Detect(args) => run_detect(args, &runtime),
        Commands::Check(args) => run_check(args, &runtime),
        Commands::Classify(args) => run_classify(args, &runtime),
        Commands::Schema => run_schema(),
    };
    if let Err(code) = outcome {
        std::process::exit(code);
    }
}
