use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context as _;
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "tminus", version, about = "Render a countdown to a UTC instant as a GIF")]
struct Cli {
    /// Target date, YYYY-MM-DD (UTC).
    #[arg(value_parser = parse_date_arg)]
    date: NaiveDate,

    /// Target time of day, HH:MM:SS (UTC).
    #[arg(value_parser = parse_time_arg)]
    time: NaiveTime,

    /// Output GIF path.
    #[arg(long, default_value = "countdown.gif")]
    out: PathBuf,

    /// Maximum number of frames (one per second).
    #[arg(long)]
    frames: Option<u32>,

    /// JSON render config; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the resolved font family and SHA-256 of its bytes.
    #[arg(long)]
    dump_font: bool,

    /// Log every rendered frame.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    tminus::parse_date(s).map_err(|_| "please provide a date in the format YYYY-MM-DD".to_owned())
}

fn parse_time_arg(s: &str) -> Result<NaiveTime, String> {
    tminus::parse_time(s).map_err(|_| "please provide a time in the format HH:MM:SS".to_owned())
}

fn main() -> anyhow::Result<()> {
    let started = Instant::now();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let mut cfg = match &cli.config {
        Some(path) => tminus::CountdownConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => tminus::CountdownConfig::default(),
    };
    if let Some(frames) = cli.frames {
        cfg.max_frames = frames;
    }
    cfg.validate()?;

    let window = tminus::CountdownTarget::from_date_time(cli.date, cli.time, tminus::now_utc());
    let remaining = window.remaining();
    tracing::info!(
        start = %window.now().format("%Y-%m-%d %H:%M"),
        end = %window.target().format("%Y-%m-%d %H:%M"),
        "countdown window"
    );
    tracing::info!("{}", tminus::decompose(remaining));

    let font = tminus::LoadedFont::load(&tminus::FontSource::Embedded).context("load font")?;
    let engine = tminus::ParleyTextEngine::new(&font, cfg.dpi, cfg.width, cfg.height)
        .context("prepare text engine")?;

    if cli.dump_font {
        eprintln!("font diagnostics:");
        eprintln!("  family:  {}", engine.family_name());
        eprintln!("  index:   {}", font.index);
        eprintln!("  sha256:  {}", sha256_hex(&font.bytes));
    }

    let mut assembler = tminus::AnimationAssembler::new(cfg, engine)?;
    let seq = assembler.assemble(remaining);

    tminus::write_gif(&seq, &cli.out)
        .with_context(|| format!("write gif '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    eprintln!("total execution time: {:?}", started.elapsed());
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
