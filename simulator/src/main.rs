use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use fdtdcore::frames::read_matrix;
use fdtdcore::render::animate;
use log::info;
use preview::AsciiSurface;
use workflow::runner::Runner;

mod preview;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline FDTD-1D run driver")]
struct Args {
    /// Load a scenario spec from YAML instead of the flag values
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Left edge of the domain
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    x0: f32,
    /// Right edge of the domain
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    x1: f32,
    /// Grid spacing
    #[arg(long, default_value_t = 0.01)]
    dx: f32,
    /// Simulated run length
    #[arg(long, default_value_t = 22.0)]
    t_final: f32,
    /// Courant stability factor in (0, 1]
    #[arg(long, default_value_t = 0.99)]
    stability: f32,
    /// File the frame matrix is recorded to
    #[arg(long, default_value = "output.csv")]
    out: PathBuf,
    /// Run the solver without recording frames
    #[arg(long, default_value_t = false)]
    no_write: bool,
    /// Replay the recorded frames as a terminal sparkline afterwards
    #[arg(long, default_value_t = false)]
    preview: bool,
    /// Frame delay for --preview, in milliseconds
    #[arg(long, default_value_t = 50)]
    delay_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.preview && args.no_write {
        anyhow::bail!("--preview replays the recorded frames; drop --no-write");
    }

    let spec = if let Some(path) = &args.scenario {
        let spec = workflow::config::load(path)?;
        info!("scenario loaded from {}", path.display());
        spec
    } else {
        workflow::config::from_args(args.x0, args.x1, args.dx, args.t_final, args.stability)
    };

    let runner = Runner::new(spec);
    let output = if args.no_write { None } else { Some(args.out.clone()) };
    let report = runner.execute(output.as_deref())?;

    if args.no_write {
        println!(
            "Simulated {} steps of {} samples in {:.2?} (dt {:.4}, peak |E| {:.4}, frames discarded)",
            report.steps, report.samples_per_frame, report.elapsed, report.dt, report.peak_field
        );
    } else {
        println!(
            "Simulated {} steps -> {} frames of {} samples in {:.2?} (dt {:.4}, peak |E| {:.4})",
            report.steps,
            report.frames,
            report.samples_per_frame,
            report.elapsed,
            report.dt,
            report.peak_field
        );
    }

    if args.preview {
        let frames = read_matrix(&args.out)
            .with_context(|| format!("loading frames from {}", args.out.display()))?;
        println!("E.shape : {:?}", frames.shape());
        info!(
            "replaying {} frames at {} ms per frame",
            frames.num_frames(),
            args.delay_ms
        );
        let mut surface = AsciiSurface::stdout();
        animate(&frames, Duration::from_millis(args.delay_ms), &mut surface)?;
    }

    Ok(())
}
