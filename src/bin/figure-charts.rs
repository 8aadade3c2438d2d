use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use figure_charts::models::Figure;
use figure_charts::{chart_from_figure, classify, storage};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "figure-charts",
    version,
    about = "Extract structured chart data from a rendered figure snapshot"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the chart of a figure snapshot (JSON).
    Extract(ExtractArgs),
    /// Print the detected chart type of every plot area.
    Classify(ClassifyArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Json,
    Csv,
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// Figure snapshot as JSON; `-` reads stdin.
    input: PathBuf,
    /// Write the result to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (json or csv). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Pretty-print JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Figure snapshot as JSON; `-` reads stdin.
    input: PathBuf,
}

fn read_figure(path: &Path) -> Result<Figure> {
    let mut text = String::new();
    if path == Path::new("-") {
        io::stdin()
            .read_to_string(&mut text)
            .context("reading figure from stdin")?;
    } else {
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut text))
            .with_context(|| format!("reading {}", path.display()))?;
    }
    serde_json::from_str(&text).with_context(|| format!("parsing figure {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Extract(args) => cmd_extract(args),
        Command::Classify(args) => cmd_classify(args),
    }
}

fn cmd_extract(args: ExtractArgs) -> Result<()> {
    let figure = read_figure(&args.input)?;
    let chart = chart_from_figure(&figure).context("extracting chart")?;
    if chart.is_none() {
        log::info!("figure has no plot areas");
    }

    let fmt = match (&args.format, &args.out) {
        (Some(f), _) => f.clone(),
        (None, Some(path)) => match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => OutFormat::Csv,
            _ => OutFormat::Json,
        },
        (None, None) => OutFormat::Json,
    };

    let writer: Box<dyn Write> = match args.out.as_ref() {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    match fmt {
        OutFormat::Json => storage::write_json(chart.as_ref(), writer, args.pretty)?,
        OutFormat::Csv => storage::write_csv(chart.as_ref(), writer)?,
    }

    if let Some(path) = args.out.as_ref() {
        eprintln!("Wrote chart to {}", path.display());
    }
    Ok(())
}

fn cmd_classify(args: ClassifyArgs) -> Result<()> {
    let figure = read_figure(&args.input)?;
    for (i, area) in figure.axes.iter().enumerate() {
        let title = if area.title.is_empty() { "-" } else { &area.title };
        println!("{i}\t{}\t{title}", classify::classify(area));
    }
    Ok(())
}
