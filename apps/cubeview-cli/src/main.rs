use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use cubeview_assets::ShaderLibrary;
use cubeview_common::{ShadingModel, ViewerConfig};
use cubeview_input::{InputState, Key};
use cubeview_render::{DebugTextRenderer, Renderer, ViewerState};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cubeview-cli", about = "Headless tool for the cube viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the shading model table
    Info,
    /// Simulate scripted input and print the resulting frame
    Frame {
        #[arg(long, default_value = "800")]
        width: u32,
        #[arg(long, default_value = "600")]
        height: u32,
        /// Comma-separated `KEY[*FRAMES]` steps, e.g. `W*30,L,D*10`
        #[arg(short, long, default_value = "")]
        keys: String,
        /// Seconds per simulated frame
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
    },
    /// Write the effective configuration as JSON
    Config {
        /// Output file
        out: PathBuf,
    },
    /// Report where each shader program is loaded from
    Shaders {
        /// Directory with WGSL overrides
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

/// One step of a key script: hold `key` for `frames` frames, then release.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScriptStep {
    key: Key,
    frames: u32,
}

fn parse_script(script: &str) -> anyhow::Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for token in script.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let (name, frames) = match token.split_once('*') {
            Some((name, count)) => {
                let frames: u32 = count
                    .trim()
                    .parse()
                    .with_context(|| format!("bad frame count in `{token}`"))?;
                (name.trim(), frames)
            }
            None => (token, 1),
        };
        if frames == 0 {
            bail!("frame count must be positive in `{token}`");
        }
        steps.push(ScriptStep {
            key: name.parse()?,
            frames,
        });
    }
    Ok(steps)
}

fn check_dt(dt: f32) -> anyhow::Result<()> {
    if !dt.is_finite() || dt <= 0.0 {
        bail!("--dt must be a positive finite number of seconds, got {dt}");
    }
    Ok(())
}

fn simulate(config: &ViewerConfig, steps: &[ScriptStep], dt: f32) -> ViewerState {
    let mut state = ViewerState::new(&config.controls);
    let mut input = InputState::new();

    for step in steps {
        input.key_pressed(step.key);
        for _ in 0..step.frames {
            let actions = input.frame_actions(dt, &config.controls);
            state.apply_all(&actions);
        }
        input.key_released(step.key);
    }

    tracing::debug!(mode = %input.mode(), steps = steps.len(), "script finished");
    state
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ViewerConfig> {
    match path {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(ViewerConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Info => {
            println!("cubeview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", cubeview_render::crate_info());
            println!("{:<8} {:<14} lit", "model", "file");
            for model in ShadingModel::ALL {
                println!(
                    "{:<8} {:<14} {}",
                    model.to_string(),
                    format!("{}.wgsl", model.file_stem()),
                    model.is_lit()
                );
            }
        }
        Commands::Frame {
            width,
            height,
            keys,
            dt,
        } => {
            check_dt(dt)?;
            let steps = parse_script(&keys)?;
            let state = simulate(&config, &steps, dt);
            let aspect = width as f32 / height.max(1) as f32;
            let plan = state.frame_plan(aspect);
            print!("{}", DebugTextRenderer::new().render(&plan));
        }
        Commands::Config { out } => {
            config
                .save(&out)
                .with_context(|| format!("writing config {}", out.display()))?;
            println!("wrote {}", out.display());
        }
        Commands::Shaders { dir } => {
            let dir = dir.or(config.shader_dir);
            let library = ShaderLibrary::load(dir.as_deref());
            for source in library.iter() {
                let origin = if source.is_embedded() { "embedded" } else { "disk" };
                println!("{:<8} {:<20} {}", source.model.to_string(), source.label(), origin);
            }
            println!("{} of {} loaded from disk", library.disk_count(), ShadingModel::ALL.len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeview_input::ControlMode;

    #[test]
    fn parses_counts_and_defaults() {
        let steps = parse_script("W*30, L ,d*10").unwrap();
        assert_eq!(
            steps,
            vec![
                ScriptStep { key: Key::W, frames: 30 },
                ScriptStep { key: Key::L, frames: 1 },
                ScriptStep { key: Key::D, frames: 10 },
            ]
        );
        assert!(parse_script("").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_steps() {
        assert!(parse_script("Q").is_err());
        assert!(parse_script("W*x").is_err());
        assert!(parse_script("W*0").is_err());
    }

    #[test]
    fn script_moves_camera_then_light() {
        let config = ViewerConfig::default();
        let steps = parse_script("W*10,L,D*10").unwrap();
        let state = simulate(&config, &steps, 0.1);

        // 10 frames forward at 6 units/s, 0.1 s each
        assert!((state.camera.position.z - (3.0 - 6.0)).abs() < 1e-3);
        let light = state.scene.light.position();
        assert!((light.x - 6.0).abs() < 1e-3);
        assert!((light.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn frame_step_must_be_finite_and_positive() {
        assert!(check_dt(0.016).is_ok());
        for dt in [0.0, -0.5, f32::INFINITY, f32::NAN] {
            assert!(check_dt(dt).is_err(), "accepted {dt}");
        }
    }

    #[test]
    fn verbose_flag_is_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["cubeview-cli", "frame", "-v", "--keys", "W*2"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Frame { .. }));

        let cli = Cli::try_parse_from(["cubeview-cli", "-v", "info"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn double_toggle_returns_to_camera_mode() {
        let mut input = InputState::new();
        for step in parse_script("L,L").unwrap() {
            input.key_pressed(step.key);
            input.key_released(step.key);
        }
        assert_eq!(input.mode(), ControlMode::Camera);
    }
}
