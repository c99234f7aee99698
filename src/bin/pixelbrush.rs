use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use pixelbrush::{
    Clock, ElementView, Engine, FrameIndex, FrameQueue, FrameSink, Mode, PixelbrushOptions,
    PngSequenceSink, RunOpts, SinkConfig, SystemClock, VirtualClock,
};

#[derive(Parser, Debug)]
#[command(name = "pixelbrush", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate an image and write every presented frame as a PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input image (PNG, JPEG, ...).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// Options JSON; flags below override its fields.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Animation mode (fade-in, fade-out, focus, focus-in, unfocus, unfocus-out, bounce).
    #[arg(long)]
    mode: Option<String>,

    /// Reverse at boundaries instead of finishing.
    #[arg(long = "loop", default_value_t = false)]
    looping: bool,

    /// Finish at the first terminal boundary, even if the options file loops.
    #[arg(long, default_value_t = false, conflicts_with = "looping")]
    no_loop: bool,

    /// Delay between frames in milliseconds.
    #[arg(long)]
    interval: Option<u64>,

    /// Space-separated classes dropped when the image is restored.
    #[arg(long)]
    ignore_class: Option<String>,

    /// Class attribute of the animated element.
    #[arg(long, default_value = "")]
    class: String,

    /// Stop after this many frames.
    #[arg(long, default_value_t = 1000)]
    max_frames: u64,

    /// Wait the frame interval in wall-clock time.
    #[arg(long, default_value_t = false)]
    realtime: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn load_options(args: &RenderArgs) -> anyhow::Result<PixelbrushOptions> {
    let mut opts = match &args.options {
        Some(path) => PixelbrushOptions::from_path(path)?,
        None => PixelbrushOptions::default(),
    };
    if let Some(mode) = &args.mode {
        opts.mode = Mode::parse_or_default(mode);
    }
    if args.looping {
        opts.looping = true;
    }
    if args.no_loop {
        opts.looping = false;
    }
    if let Some(ms) = args.interval {
        opts.interval = ms;
    }
    if let Some(classes) = &args.ignore_class {
        opts.ignore_class = classes.clone();
    }
    Ok(opts)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let opts = load_options(&args)?;
    let mut img = pixelbrush::load_image(&args.in_path)?;
    if let Some(size) = opts.size {
        img = img.with_rendered_size(size)?;
    }
    let size = img.rendered_size();

    let cfg = opts.to_engine_config();
    let view = ElementView::new(&args.class).concealed_by(cfg.ignore_classes.clone());
    let mut engine = Engine::new(cfg, view, FrameQueue::new());
    engine.activate(img);

    let mut sink = PngSequenceSink::new(&args.out_dir);
    sink.begin(SinkConfig {
        width: size.width,
        height: size.height,
        interval: Duration::from_millis(opts.interval),
    })?;
    sink.push_frame(FrameIndex(0), &pixelbrush::compose_frame(&engine)?)?;

    let mut clock: Box<dyn Clock> = if args.realtime {
        Box::new(SystemClock::default())
    } else {
        Box::new(VirtualClock::new())
    };
    let stats = pixelbrush::run(
        &mut engine,
        clock.as_mut(),
        RunOpts {
            max_frames: Some(args.max_frames),
        },
        |e| {
            let idx = e.state().map_or(FrameIndex(0), |s| s.frame);
            sink.push_frame(idx, &pixelbrush::compose_frame(e)?)
        },
    )
    .with_context(|| format!("animate '{}'", args.in_path.display()))?;
    sink.end()?;

    eprintln!(
        "wrote {} frames ({} mode, {} ms animated{}) to {}",
        sink.written().len(),
        opts.mode,
        stats.elapsed.as_millis(),
        if stats.capped { ", capped" } else { "" },
        args.out_dir.display()
    );
    Ok(())
}
