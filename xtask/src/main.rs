use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for cubeview")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Run fmt, clippy, tests and doc in sequence
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
}

impl Commands {
    fn args(self) -> &'static [&'static str] {
        match self {
            Commands::Check => &[],
            Commands::Fmt => &["fmt", "--all", "--", "--check"],
            Commands::Clippy => &[
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ],
            Commands::Test => &["test", "--workspace"],
            Commands::Doc => &["doc", "--workspace", "--no-deps"],
            Commands::Build => &["build", "--workspace"],
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            for step in [Commands::Fmt, Commands::Clippy, Commands::Test, Commands::Doc] {
                cargo(step.args())?;
            }
        }
        other => cargo(other.args())?,
    }

    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    println!("==> cargo {}", args.join(" "));
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        bail!("cargo {} failed", args[0]);
    }
    Ok(())
}
