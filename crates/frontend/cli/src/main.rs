mod rom_emulator;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use harness_core::config::Config;
use harness_core::variant::RomVariant;
use harness_runtime::runtime::Runtime;

use rom_emulator::RawRomEmulator;

#[derive(Parser)]
struct Args {
    /// ROM variant: "red", "blue" or "yellow"
    variant: String,

    /// Load the ROM from this path instead of the environment-derived one
    #[arg(long)]
    rom_path: Option<PathBuf>,

    /// Skip loading a prior save state on startup
    #[arg(long, default_value_t = false)]
    skip_autoload: bool,

    /// Never write periodic save-state snapshots
    #[arg(long, default_value_t = false)]
    skip_autosave: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let variant = RomVariant::from_str(&args.variant).context("invalid ROM variant")?;

    let mut config = Config::from_env(variant).context("configuration error")?;
    if let Some(rom_path) = args.rom_path {
        config.rom_path = rom_path;
    }
    if args.skip_autoload {
        config.autoload_state = false;
    }
    if args.skip_autosave {
        config.autosave_enabled = false;
    }

    let emu = RawRomEmulator::load(&config.rom_path)
        .with_context(|| format!("failed to load ROM at {}", config.rom_path.display()))?;

    let runtime = Runtime::new(config, emu);
    runtime.run();

    Ok(())
}
