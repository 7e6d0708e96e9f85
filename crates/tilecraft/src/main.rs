mod ascii_view;
mod config;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tilecraft_core::{ActionResult, MoveIntent, Simulation, WorldGenConfig};

use crate::config::GameConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Layered config file (RON); defaults to ./tilecraft.ron if present
    #[arg(long)]
    config: Option<PathBuf>,

    /// World seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate (overrides config)
    #[arg(long)]
    ticks: Option<u64>,

    /// Held movement intent for the whole run
    #[arg(long, value_enum, default_value = "none")]
    walk: Walk,

    /// Trigger a jump every N ticks (0 = never)
    #[arg(long, default_value = "0")]
    jump_every: u64,

    /// Trigger the mine/place action every N ticks (0 = never)
    #[arg(long, default_value = "0")]
    act_every: u64,

    /// Hotbar slot to select before the first tick
    #[arg(long)]
    slot: Option<usize>,

    /// World generation preset file (RON); takes precedence over --flat
    #[arg(long)]
    worldgen: Option<PathBuf>,

    /// Use the flat world preset
    #[arg(long)]
    flat: bool,

    /// Pace ticks at the configured tick rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Print a text view of this radius around the player after the run
    #[arg(long)]
    view: Option<i32>,

    /// Color the text view with block and sky colors (ANSI)
    #[arg(long)]
    color: bool,

    /// Print the effective configuration as RON and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Walk {
    Left,
    Right,
    None,
}

impl From<Walk> for MoveIntent {
    fn from(walk: Walk) -> Self {
        match walk {
            Walk::Left => MoveIntent::Left,
            Walk::Right => MoveIntent::Right,
            Walk::None => MoveIntent::None,
        }
    }
}

/// Action outcomes seen during a run
#[derive(Debug, Default)]
struct ActionTally {
    mined: u32,
    placed: u32,
    rejected: u32,
    no_op: u32,
    no_target: u32,
}

impl ActionTally {
    fn record(&mut self, result: ActionResult) {
        match result {
            ActionResult::Mined { .. } => self.mined += 1,
            ActionResult::Placed(_) => self.placed += 1,
            ActionResult::Rejected(_) => self.rejected += 1,
            ActionResult::NoOp => self.no_op += 1,
            ActionResult::NoTarget => self.no_target += 1,
        }
    }
}

fn every(n: u64, period: u64) -> bool {
    period > 0 && n % period == 0
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut game = GameConfig::load(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        game.world.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        game.run.ticks = ticks;
    }
    if args.flat {
        game.world.preset = "flat".to_string();
    }
    game.run.realtime |= args.realtime;

    if args.print_config {
        let pretty = ron::ser::to_string_pretty(&game, ron::ser::PrettyConfig::default())
            .context("Failed to serialize configuration")?;
        println!("{}", pretty);
        return Ok(());
    }

    let worldgen = match &args.worldgen {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read world preset {}", path.display()))?;
            WorldGenConfig::from_ron_str(&source)
                .with_context(|| format!("Invalid world preset {}", path.display()))?
        }
        None => game.world.worldgen()?,
    };
    log::info!(
        "Generating '{}' ({}x{}) with seed {}",
        worldgen.name,
        worldgen.width,
        worldgen.height,
        game.world.seed
    );

    let mut sim = Simulation::try_new(game.sim.clone(), worldgen, game.world.seed)
        .context("Failed to start simulation")?;

    if let Some(slot) = args.slot {
        sim.input_mut().select_slot(slot);
    }
    sim.input_mut().set_movement_intent(args.walk.into());

    let tick_rate = game.run.tick_rate_hz.max(1);
    let frame = Duration::from_secs_f64(1.0 / tick_rate as f64);
    let mut next_frame = Instant::now();
    let started = Instant::now();
    let mut tally = ActionTally::default();
    let mut blocks_fallen = 0;

    for n in 1..=game.run.ticks {
        if every(n, args.jump_every) {
            sim.input_mut().trigger_jump();
        }
        if every(n, args.act_every) {
            sim.input_mut().trigger_action();
        }

        let report = sim.tick();
        if let Some(action) = report.action {
            log::debug!("Tick {}: {:?}", report.tick, action);
            tally.record(action);
        }
        blocks_fallen += report.blocks_fallen;

        if every(n, tick_rate as u64) {
            let body = &sim.player().body;
            log::debug!(
                "Tick {}: player at {:?} velocity {:?} on_ground {} darkness {:.2}",
                n,
                body.position,
                body.velocity,
                body.on_ground,
                sim.darkness_level()
            );
        }

        if game.run.realtime {
            next_frame += frame;
            let now = Instant::now();
            if next_frame > now {
                std::thread::sleep(next_frame - now);
            } else {
                next_frame = now;
            }
        }
    }

    let player = sim.player();
    log::info!(
        "Ran {} ticks in {:.2?}: player at {:?} (on_ground {}), time {} darkness {:.2}",
        sim.tick_count(),
        started.elapsed(),
        player.body.position,
        player.body.on_ground,
        sim.time_cycle().time(),
        sim.darkness_level()
    );
    log::info!(
        "Actions: {} mined, {} placed, {} rejected, {} no-op, {} no target; {} blocks fell",
        tally.mined,
        tally.placed,
        tally.rejected,
        tally.no_op,
        tally.no_target,
        blocks_fallen
    );
    for (index, slot) in sim.inventory_slots().iter().enumerate() {
        if !slot.is_empty() {
            log::info!(
                "Slot {}: {} x{}",
                index,
                sim.blocks().name(slot.item_id),
                slot.count
            );
        }
    }

    if let Some(radius) = args.view {
        let radius = radius.max(0);
        if args.color {
            print!("{}", ascii_view::render_colored(&sim, radius));
        } else {
            print!("{}", ascii_view::render(&sim, radius));
        }
    }

    Ok(())
}
