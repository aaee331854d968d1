mod effects;
mod runner;
mod surface;

use std::io::{BufRead, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};

use effects::{Effect, GrayscaleGradient, RandomColors, LOGICAL_DIM};
use runner::Runner;

#[derive(Parser)]
#[command(name = "gridfx-demo", about = "Animated color grids in the terminal")]
struct Cli {
    /// Effect to run; omit to pick from a menu
    effect: Option<EffectKind>,

    /// Target frame rate
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Allow non-uniform stretching instead of aspect-preserving scaling
    #[arg(long)]
    no_aspect: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EffectKind {
    /// Grid of independently re-rolled random colors
    Random,
    /// Static vertical grayscale gradient
    Gradient,
}

impl EffectKind {
    const ALL: [EffectKind; 2] = [EffectKind::Random, EffectKind::Gradient];

    fn label(self) -> &'static str {
        match self {
            EffectKind::Random => "Random Colors Grid",
            EffectKind::Gradient => "Grayscale Gradient",
        }
    }

    fn build(self) -> Box<dyn Effect> {
        match self {
            EffectKind::Random => Box::new(RandomColors::new()),
            EffectKind::Gradient => Box::new(GrayscaleGradient),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    surface::install_panic_hook();

    match cli.effect {
        Some(kind) => run_effect(kind, &cli),
        None => run_menu(&cli),
    }
}

/// One full effect session: the Runner owns the raw-mode surface, so the
/// terminal is restored when this returns and the menu can use cooked
/// stdin again.
fn run_effect(kind: EffectKind, cli: &Cli) -> anyhow::Result<()> {
    let mut runner = Runner::new(LOGICAL_DIM, LOGICAL_DIM, cli.fps, !cli.no_aspect)
        .context("failed to set up the terminal")?;
    let mut effect = kind.build();
    runner.run(effect.as_mut())
}

/// Interactive menu loop, running in cooked mode between effect sessions.
fn run_menu(cli: &Cli) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("Welcome to the Terminal Graphics Demo!");
        println!();
        println!("Select an option:");
        for (i, kind) in EffectKind::ALL.iter().enumerate() {
            println!("{i}. {}", kind.label());
        }
        println!("Q. Exit");
        print!("Enter your choice: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let choice = line?.trim().to_string();

        if choice.eq_ignore_ascii_case("q") {
            println!("Exiting the program. Goodbye!");
            return Ok(());
        }

        match choice.parse::<usize>() {
            Ok(index) if index < EffectKind::ALL.len() => {
                run_effect(EffectKind::ALL[index], cli)?;
            }
            Ok(_) => println!("Invalid choice. Please try again.\n"),
            Err(_) => println!("Invalid input. Please enter a valid number or 'Q' to quit.\n"),
        }
    }
}
