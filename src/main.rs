use clap::{builder::RangedU64ValueParser, Parser};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    init_logging_with_default, AiPlayer, CliPlayer, Game, GameConfig, BOARD_SIZE, MAX_BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = BOARD_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_BOARD_SIZE as u64),
        help = "Side length of both boards"
    )]
    size: usize,
    #[arg(long, help = "Skip the greeting and rules prompt")]
    no_greeting: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging_with_default(LevelFilter::Warn);
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut setup_rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let ai_rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s.wrapping_add(1))
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let config = GameConfig::with_size(cli.size);
    let mut game = Game::new(&config, &mut setup_rng, CliPlayer::stdio(), AiPlayer::new(ai_rng))?;
    if !cli.no_greeting {
        game.greet()?;
    }
    let winner = game.run()?;
    log::info!("game over, winner: {:?}", winner);
    Ok(())
}
