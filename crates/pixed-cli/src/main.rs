use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pixed::{Command, Editor};
use std::{fs, io::Read, path::PathBuf};

use crate::console::ConsoleTarget;
mod console;

#[derive(Parser)]
#[command(name = "pixed", about = "Text-command raster canvas editor")]
struct Cli {
    /// Log executed commands
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Log everything, including flood fill statistics
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(clap::Args)]
struct CanvasArgs {
    /// Initial canvas width (an `I` command replaces it)
    #[arg(long, default_value = "5")]
    width: usize,
    /// Initial canvas height
    #[arg(long, default_value = "6")]
    height: usize,
    /// Show canvases as ANSI colour blocks
    #[arg(long)]
    color: bool,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run a command script (stdin when SCRIPT is omitted or `-`)
    Run {
        script: Option<PathBuf>,
        #[command(flatten)]
        canvas: CanvasArgs,
        /// Report failing lines and continue
        #[arg(long)]
        keep_going: bool,
        /// Show the canvas once more after the script ends
        #[arg(long = "final")]
        show_final: bool,
    },
    /// Execute each argument as one command line, then show the canvas
    Exec {
        #[arg(required = true)]
        commands: Vec<String>,
        #[command(flatten)]
        canvas: CanvasArgs,
    },
    /// Parse a script without executing it
    Check { script: Option<PathBuf> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::TRACE
    } else if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match cli.command {
        Cmd::Run {
            script,
            canvas,
            keep_going,
            show_final,
        } => {
            let source = read_script(script.as_ref())?;
            let mut editor = open_editor(&canvas)?;
            let mut failures = 0;
            for (n, line) in script_lines(&source) {
                match editor.execute(line) {
                    Ok(_) => {}
                    Err(err) if keep_going => {
                        tracing::warn!(line = n, %err, "command failed");
                        eprintln!("line {n}: {err}");
                        failures += 1;
                    }
                    Err(err) => return Err(err).with_context(|| format!("line {n}: {line}")),
                }
            }
            if show_final {
                editor.show()?;
            }
            if failures > 0 {
                bail!("{failures} command(s) failed");
            }
        }
        Cmd::Exec { commands, canvas } => {
            let mut editor = open_editor(&canvas)?;
            for line in &commands {
                editor
                    .execute(line)
                    .with_context(|| format!("command '{line}'"))?;
            }
            editor.show()?;
        }
        Cmd::Check { script } => {
            let source = read_script(script.as_ref())?;
            let mut count = 0;
            let mut bad = 0;
            for (n, line) in script_lines(&source) {
                match Command::parse(line) {
                    Ok(Command::Unknown(name)) => {
                        eprintln!("line {n}: unknown command '{name}' will be ignored");
                    }
                    Ok(_) => count += 1,
                    Err(err) => {
                        eprintln!("line {n}: {err}");
                        bad += 1;
                    }
                }
            }
            if bad > 0 {
                bail!("{bad} malformed line(s)");
            }
            println!("ok: {count} commands");
        }
    }
    Ok(())
}

fn open_editor(args: &CanvasArgs) -> Result<Editor<ConsoleTarget>> {
    let editor = Editor::with_target(args.width, args.height, ConsoleTarget::new(args.color))?;
    Ok(editor)
}

fn read_script(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Non-empty, non-comment lines with their 1-based line numbers.
fn script_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}
