//! Headless demo: a player walks a short route while an enemy gives chase.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tilestep::{
    init_logging, Actor, BlockingGrid, Direction, Enemy, GridPos, LayerMask, Mover, MoverConfig,
    Player,
};

const WALLS: LayerMask = LayerMask::layer(8);
const ROUTE: [Direction; 6] = [
    Direction::East,
    Direction::East,
    Direction::North,
    Direction::East,
    Direction::North,
    Direction::North,
];

/// Grid movement demo
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Seconds per grid step, overriding the config file
    #[arg(long)]
    move_time: Option<f32>,
    /// Simulated seconds per frame
    #[arg(long, default_value_t = 0.02)]
    dt: f32,
    /// Frame limit for the whole run
    #[arg(long, default_value_t = 2_000)]
    frames: u32,
    /// JSON mover configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<MoverConfig> {
    let mut config = match &args.config {
        Some(path) => MoverConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => MoverConfig {
            blocking_layer: WALLS,
            ..MoverConfig::default()
        },
    };
    if let Some(move_time) = args.move_time {
        config.move_time = move_time;
    }
    config.validate()?;
    Ok(config)
}

/// Plays one round: the player tries `direction`, then the enemy chases the
/// player's destination. A blocked player still hands the turn over.
fn play_round(player: &mut Player, enemy: &mut Enemy, grid: &BlockingGrid, direction: Direction) {
    player.begin_turn();
    let destination = if player.attempt_move(direction, grid) {
        player.tile().step(direction)
    } else {
        info!("player bumps into a wall heading {direction:?}");
        player.tile()
    };
    enemy.take_turn(destination, grid);
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;
    let mut grid = BlockingGrid::new();
    grid.insert(GridPos::new(1, 1), WALLS);
    grid.insert(GridPos::new(2, 3), WALLS);

    let mut player = Player::new(Mover::from_config(&config)?, GridPos::new(0, 0), 10);
    let mut enemy = Enemy::new(Mover::from_config(&config)?, GridPos::new(5, 4));
    let mut frames = 0;

    'turns: for direction in ROUTE {
        play_round(&mut player, &mut enemy, &grid, direction);

        while player.mover().is_moving() || enemy.mover().is_moving() {
            if frames >= args.frames {
                info!("frame limit reached");
                break 'turns;
            }
            player.update(args.dt);
            enemy.update(args.dt);
            frames += 1;
        }
        info!(
            "turn done: player at {:?} (food {}), enemy at {:?}",
            player.tile(),
            player.food(),
            enemy.tile()
        );
    }

    info!("finished after {frames} frames, enemy moved {} times", enemy.moves());
    Ok(())
}
