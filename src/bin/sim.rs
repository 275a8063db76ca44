use clap::{builder::RangedU64ValueParser, Parser};
use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{
    init_logging_with_default, play_out, random_grid, AiPlayer, Combatant, GameConfig, BOARD_SIZE,
    MAX_BOARD_SIZE,
};

/// Play one computer-vs-computer match and print a JSON summary.
#[derive(Parser)]
struct Args {
    seed1: u64,
    seed2: u64,
    #[arg(
        long,
        default_value_t = BOARD_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_BOARD_SIZE as u64)
    )]
    size: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging_with_default(log::LevelFilter::Warn);
    let args = Args::parse();
    let config = GameConfig::with_size(args.size);

    let mut rng1 = SmallRng::seed_from_u64(args.seed1);
    let mut rng2 = SmallRng::seed_from_u64(args.seed2);
    let grid1 = random_grid(&mut rng1, &config)?;
    let grid2 = random_grid(&mut rng2, &config)?;

    let mut p1 = Combatant::new(grid1, AiPlayer::new(rng1));
    let mut p2 = Combatant::new(grid2, AiPlayer::new(rng2));
    let summary = play_out(&mut p1, &mut p2)?;

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
