use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "casement", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scripted event stream and write the final view contents as a PNG.
    Replay(ReplayArgs),
    /// List the registered drawing backends.
    Backends,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input replay script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Backend to use instead of the one in the script (also read from CASEMENT_BACKEND).
    #[arg(long)]
    backend: Option<casement::BackendKind>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
        Command::Backends => cmd_backends(),
    }
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let mut script = casement::replay::ReplayScript::from_path(&args.in_path)?;
    script.config = script.config.with_env_overrides()?;
    if let Some(kind) = args.backend {
        script.config.backend = kind;
    }

    let outcome = casement::replay::run_replay(&script)?;
    let frame = &outcome.frame;
    if frame.data.is_empty() {
        anyhow::bail!("view ended with an empty drawable, nothing to write");
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({})",
        args.out.display(),
        casement::replay::summarize(&outcome.stats)
    );
    Ok(())
}

fn cmd_backends() -> anyhow::Result<()> {
    for (kind, backend) in casement::registry() {
        println!("{kind}\t{}", backend.name());
    }
    Ok(())
}
