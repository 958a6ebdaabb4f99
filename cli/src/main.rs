use std::fs::File;
use std::io::{self, Read, Write};

use clap::{Parser, Subcommand, ValueEnum};
use edges::service::{BUILDINGS_ROUTE, BuildingMap, DEFAULT_PATH_COLOR, PATH_ROUTE, PathResponse};
use edges::{CoordBounds, DrawController, EDGE_FORM, MAX_COORD, MIN_COORD, ParseFailure, Segment, SegmentSink};
use serde_json::Value;
use tracing_subscriber::EnvFilter;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
    #[error("{0}")]
    Parse(#[from] ParseFailure),
    #[error("invalid coordinate bounds: min {min} is above max {max}")]
    InvalidBounds { min: f64, max: f64 },
    #[error("routing service unreachable: {0}")]
    ServiceUnreachable(#[source] reqwest::Error),
    #[error("routing service answered {status} for {route}")]
    UnexpectedStatus { route: &'static str, status: u16 },
    #[error("routing service sent an unreadable body: {0}")]
    InvalidBody(#[source] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "lines-cli",
    about = "Edge-list checker and campus routing service CLI",
    after_help = format!("Edge lists hold one `{EDGE_FORM}` line per segment.")
)]
struct Cli {
    #[arg(long, env = "CAMPUS_PATHS_URL", default_value = "http://localhost:4567")]
    base_url: String,

    #[arg(long, env = "LINES_MIN_COORD", default_value_t = MIN_COORD, allow_negative_numbers = true)]
    min_coord: f64,

    #[arg(long, env = "LINES_MAX_COORD", default_value_t = MAX_COORD, allow_negative_numbers = true)]
    max_coord: f64,

    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    bounds: CoordBounds,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate an edge list and report the first bad line.
    Check {
        #[arg(default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
    /// Draw an edge list and print the committed segments as JSON.
    Draw {
        #[arg(default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
    /// List the buildings known to the routing service.
    Buildings,
    /// Ask the routing service for the shortest path between two buildings.
    Path {
        start: String,
        end: String,
        #[arg(long, default_value = DEFAULT_PATH_COLOR)]
        color: String,
        #[arg(long, value_enum, default_value_t = PathFormat::Json)]
        format: PathFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PathFormat {
    /// The service response, pretty-printed.
    Json,
    /// One `x1 y1 x2 y2 color` line per hop.
    Edges,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = CliContext { base_url: cli.base_url, bounds: coord_bounds(cli.min_coord, cli.max_coord)? };

    match cli.command {
        Command::Check { input } => run_check(&ctx, &input),
        Command::Draw { input } => run_draw(&ctx, &input),
        Command::Buildings => run_buildings(&ctx).await,
        Command::Path { start, end, color, format } => run_path(&ctx, &start, &end, &color, format).await,
    }
}

/// Build the validation bound, rejecting an inverted or NaN interval.
fn coord_bounds(min: f64, max: f64) -> Result<CoordBounds, CliError> {
    let bounds = CoordBounds::new(min, max);
    if bounds.span() >= 0.0 { Ok(bounds) } else { Err(CliError::InvalidBounds { min, max }) }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn run_check(ctx: &CliContext, input: &str) -> Result<(), CliError> {
    let text = read_input(input)?;
    let segments = edges::parse_with(&text, &ctx.bounds)?;
    println!("{}", check_summary(&segments));
    Ok(())
}

fn check_summary(segments: &[Segment]) -> String {
    match segments.len() {
        1 => "ok: 1 segment".to_owned(),
        n => format!("ok: {n} segments"),
    }
}

fn run_draw(ctx: &CliContext, input: &str) -> Result<(), CliError> {
    let text = read_input(input)?;
    let mut controller = DrawController::with_bounds(JsonSink::new(io::stdout().lock()), ctx.bounds);
    controller.on_text_edit(text);
    let outcome = controller.on_draw_requested();
    controller.into_sink().finish()?;
    let count = outcome?;
    tracing::info!(count, "edge list drawn");
    Ok(())
}

/// Render sink that writes each committed sequence as one JSON array line.
struct JsonSink<W: Write> {
    writer: W,
    error: Option<CliError>,
}

impl<W: Write> JsonSink<W> {
    fn new(writer: W) -> Self {
        Self { writer, error: None }
    }

    fn write(&mut self, segments: &[Segment]) -> Result<(), CliError> {
        serde_json::to_writer(&mut self.writer, segments)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Surface the first write failure, if any.
    fn finish(self) -> Result<W, CliError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.writer),
        }
    }
}

impl<W: Write> SegmentSink for JsonSink<W> {
    fn commit(&mut self, segments: &[Segment]) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.write(segments) {
            tracing::error!(%error, "could not write committed segments");
            self.error = Some(error);
        }
    }
}

async fn run_buildings(ctx: &CliContext) -> Result<(), CliError> {
    let buildings: BuildingMap = service_get(ctx, BUILDINGS_ROUTE, &[]).await?;
    tracing::info!(count = buildings.len(), "buildings fetched");
    for (short, long) in buildings.entries() {
        println!("{short}\t{long}");
    }
    Ok(())
}

async fn run_path(ctx: &CliContext, start: &str, end: &str, color: &str, format: PathFormat) -> Result<(), CliError> {
    let response: PathResponse = service_get(ctx, PATH_ROUTE, &[("start", start), ("end", end)]).await?;
    tracing::info!(hops = response.path.len(), cost = response.cost, "path fetched");
    if response.is_trivial() {
        tracing::warn!(start, end, "path has no hops");
    }
    match format {
        PathFormat::Json => print_json(&serde_json::to_value(&response)?),
        PathFormat::Edges => {
            let mut out = io::stdout().lock();
            write_edges(&mut out, &response.segments(color))?;
            Ok(())
        }
    }
}

/// Write segments in the edge-list form `check` reads back.
fn write_edges(out: &mut impl Write, segments: &[Segment]) -> io::Result<()> {
    for segment in segments {
        writeln!(out, "{segment}")?;
    }
    Ok(())
}

async fn service_get<T: serde::de::DeserializeOwned>(
    ctx: &CliContext,
    route: &'static str,
    query: &[(&str, &str)],
) -> Result<T, CliError> {
    let url = service_url(&ctx.base_url, route);
    tracing::debug!(%url, ?query, "routing service request");

    let response = reqwest::Client::new()
        .get(&url)
        .query(query)
        .send()
        .await
        .map_err(CliError::ServiceUnreachable)?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::UnexpectedStatus { route, status: status.as_u16() });
    }
    response.json::<T>().await.map_err(CliError::InvalidBody)
}

fn service_url(base_url: &str, route: &str) -> String {
    format!("{}{route}", base_url.trim_end_matches('/'))
}

fn read_input(input: &str) -> Result<String, CliError> {
    let io_error = |source| CliError::Io { path: input.to_owned(), source };
    let mut text = String::new();
    if input == "-" {
        io::stdin().read_to_string(&mut text).map_err(io_error)?;
    } else {
        File::open(input).and_then(|mut f| f.read_to_string(&mut text)).map_err(io_error)?;
    }
    tracing::debug!(path = input, bytes = text.len(), "edge list read");
    Ok(text)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
