//! pathgrid sandbox: builds a random solvable grid, prints it and reads one
//! command per line from stdin.

use std::io::{self, BufRead, Write};

use clap::Parser;
use pathgrid_core::StateLog;
use pathgrid_graph::{ControllerConfig, DEFAULT_MAX_ATTEMPTS, GridConfig, GridController};
use rand::rngs::SmallRng;
use rand::{Rng, RngExt, SeedableRng};
use sandbox_lib::{Command, Flow, HELP, Palette, changed_cells, render_grid, status_line};

/// Interactive A* grid sandbox
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 20)]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = 20)]
    height: i32,

    /// Fraction of cells turned into walls (0.0 to 0.5)
    #[arg(long, default_value_t = 0.3)]
    walls: f64,

    /// Random seed; drawn from the thread RNG when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Place start and goal at random instead of opposite corners
    #[arg(long)]
    randomize: bool,

    /// Regeneration attempts before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Print bare glyphs without colours
    #[arg(long)]
    plain: bool,
}

impl Args {
    fn controller_config(&self) -> ControllerConfig {
        let mut grid = GridConfig::new(self.width, self.height, self.walls);
        grid.randomize_start_and_goal = self.randomize;
        ControllerConfig {
            grid,
            max_attempts: self.max_attempts,
        }
    }
}

fn draw<R: Rng>(
    out: &mut impl Write,
    controller: &GridController<R>,
    palette: Option<&Palette>,
    changes: &StateLog,
) -> io::Result<()> {
    render_grid(out, controller.graph(), palette)?;
    let changed = changed_cells(&changes.take());
    writeln!(out, "{} | {changed} cells changed", status_line(controller))?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("seed {seed}");

    let mut controller = GridController::new(args.controller_config(), SmallRng::seed_from_u64(seed))?;
    let changes = StateLog::new();
    controller.set_observer(Box::new(changes.clone()));
    if let Err(err) = controller.regenerate() {
        log::warn!("{err}");
    }

    let palette = Palette::default();
    let palette = (!args.plain).then_some(&palette);
    let mut out = io::stdout().lock();
    draw(&mut out, &controller, palette, &changes)?;

    for line in io::stdin().lock().lines() {
        let cmd = match line?.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        match cmd.apply(&mut controller) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Help) => writeln!(out, "{HELP}")?,
            Ok(Flow::Redraw) => draw(&mut out, &controller, palette, &changes)?,
            Err(err) => {
                log::warn!("{err}");
                draw(&mut out, &controller, palette, &changes)?;
            }
        }
    }
    Ok(())
}
