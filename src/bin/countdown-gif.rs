use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "countdown-gif", version, about = "Render a countdown timer as a looping GIF")]
struct Cli {
    /// Output GIF path (`.gif` is appended if missing).
    #[arg(short = 'f', long)]
    filename: String,

    /// Countdown minutes.
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    minutes: i64,

    /// Countdown seconds (0-59).
    #[arg(short = 's', long, default_value_t = 0, allow_negative_numbers = true)]
    seconds: i64,

    /// Number of `00:00` frames shown at the end (>= 1).
    #[arg(short = 'd', long, default_value_t = 10, allow_negative_numbers = true)]
    delay: i64,

    /// SVG template containing a `{text}` placeholder (relative to the work directory).
    #[arg(short = 't', long)]
    template: Option<PathBuf>,

    /// Worker count for frame rendering; 0 renders sequentially.
    #[arg(short = 'p', long = "parallel_processing", default_value_t = 0)]
    parallel_processing: usize,

    /// Rasterizer executable; by default `inkscape` on PATH or the bundled copy.
    #[arg(long)]
    rasterizer: Option<PathBuf>,

    /// Encoder executable.
    #[arg(long, default_value = countdown_gif::DEFAULT_ENCODER)]
    encoder: PathBuf,

    /// Directory for the output, frame directory and palette (defaults to the current directory).
    #[arg(long)]
    work_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let countdown = countdown_gif::CountdownSpec::new(cli.minutes, cli.seconds, cli.delay)?;

    let work_dir = match cli.work_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("resolve current directory")?,
    };

    tracing::info!("Checking if inkscape available...");
    let search_path = std::env::var_os("PATH");
    let rasterizer = match &cli.rasterizer {
        Some(program) => {
            countdown_gif::Rasterizer::resolve(program, search_path.as_deref(), &work_dir)?
        }
        None => countdown_gif::Rasterizer::locate(search_path.as_deref(), &work_dir)?,
    };
    tracing::debug!(rasterizer = %rasterizer.program().display());

    let template = match &cli.template {
        Some(path) => countdown_gif::Template::resolve(path, &work_dir)?,
        None => countdown_gif::Template::default(),
    };
    if !template.has_placeholder() {
        tracing::debug!("template has no {} placeholder", countdown_gif::PLACEHOLDER);
    }

    let mut cfg = countdown_gif::PipelineConfig::new(cli.filename, work_dir, countdown, rasterizer);
    cfg.template = template;
    cfg.encoder = countdown_gif::GifEncoder::new(cli.encoder);
    cfg.dispatch = countdown_gif::Dispatch::from_workers(cli.parallel_processing);

    let report = countdown_gif::run_pipeline(&cfg)?;
    eprintln!("wrote {}", report.layout.output_path.display());
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
