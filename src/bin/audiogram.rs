use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use audiogram::{
    AmplitudeSource, ClipRequest, FrameIndex, PeakWindowAmplitudes, RenderClipRequest,
    RenderSession, RenderThreading, SilentAmplitudes, compose_frames_with_stats,
    write_scenes_jsonl,
};

#[derive(Parser, Debug)]
#[command(name = "audiogram", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a single frame and write its scene as JSON.
    Frame(FrameArgs),
    /// Compose every frame of the clip as JSON Lines, one scene per line.
    Compose(ComposeArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input render request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output scene JSON path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    audio: AudioArgs,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Input render request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON Lines path.
    #[arg(long)]
    out: PathBuf,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Composition chunk size (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    #[command(flatten)]
    audio: AudioArgs,
}

#[derive(Parser, Debug)]
struct AudioArgs {
    /// Pre-extracted waveform peaks (JSON array of values in 0..1).
    /// Without this, bars render at their silent floor height.
    #[arg(long)]
    peaks: Option<PathBuf>,

    /// Resolution of the peaks file, in peaks per second of audio.
    #[arg(long, default_value_t = 20.0)]
    peaks_per_second: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Compose(args) => cmd_compose(args),
    }
}

fn read_request(path: &Path) -> anyhow::Result<ClipRequest> {
    let f = File::open(path).with_context(|| format!("open request '{}'", path.display()))?;
    let wire: RenderClipRequest =
        serde_json::from_reader(BufReader::new(f)).context("parse render request JSON")?;
    Ok(wire.into_clip_request()?)
}

fn load_source(args: &AudioArgs) -> anyhow::Result<Box<dyn AmplitudeSource>> {
    let Some(path) = &args.peaks else {
        return Ok(Box::new(SilentAmplitudes));
    };
    let f = File::open(path).with_context(|| format!("open peaks '{}'", path.display()))?;
    let peaks: Vec<f64> =
        serde_json::from_reader(BufReader::new(f)).context("parse peaks JSON")?;
    Ok(Box::new(PeakWindowAmplitudes::new(
        peaks,
        args.peaks_per_second,
    )?))
}

fn ensure_parent_dir(out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let request = read_request(&args.in_path)?;
    let session = RenderSession::new(request)?;
    let source = load_source(&args.audio)?;

    let scene = session.compose(FrameIndex(args.frame), source.as_ref())?;

    ensure_parent_dir(&args.out)?;
    let f = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &scene).context("encode scene JSON")?;
    w.write_all(b"\n")?;
    w.flush().context("flush output")?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let request = read_request(&args.in_path)?;
    let session = RenderSession::new(request)?;
    let source = load_source(&args.audio)?;

    let threading = RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let (scenes, stats) = compose_frames_with_stats(&session, source.as_ref(), &threading)?;

    ensure_parent_dir(&args.out)?;
    let f = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);
    write_scenes_jsonl(&scenes, &mut w)?;
    w.flush().context("flush output")?;

    eprintln!(
        "composed {} frames ({} nodes)",
        stats.frames_total, stats.nodes_total
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
