use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use othello_core::{Game, Side};
use othello_engine::{MinimaxAI, OthelloAI, RandomAI, SearchConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlayerKind {
    Minimax,
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "othello", about = "Play Othello games between two AI players")]
struct Args {
    /// Player for Dark (X), who moves first
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    dark: PlayerKind,

    /// Player for Light (O)
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    light: PlayerKind,

    /// Minimax lookahead in plies
    #[arg(long, default_value_t = 6)]
    depth: u32,

    /// Rank bonus per forced opponent pass
    #[arg(long, default_value_t = 35)]
    forfeit_weight: i32,

    /// Rank per move of mobility advantage
    #[arg(long, default_value_t = 5)]
    mobility_weight: i32,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Seed for random players
    #[arg(long, default_value_t = 1u64)]
    seed: u64,
}

fn make_player(kind: PlayerKind, config: SearchConfig, seed: u64) -> Result<Box<dyn OthelloAI>> {
    let player: Box<dyn OthelloAI> = match kind {
        PlayerKind::Minimax => Box::new(MinimaxAI::new(config).context("invalid search settings")?),
        PlayerKind::Random => Box::new(RandomAI::new(seed)),
    };
    Ok(player)
}

fn play_game<'a>(dark: &mut (dyn OthelloAI + 'a), light: &mut (dyn OthelloAI + 'a)) -> Result<Game> {
    let mut game = Game::new();

    while !game.is_over() {
        let side = game.current_turn();
        let player = match side {
            Side::Dark => &mut *dark,
            Side::Light => &mut *light,
        };

        match player.choose_move(game.board(), side) {
            Some(position) => game
                .play(position)
                .with_context(|| format!("{} chose an illegal move", player.name()))?,
            None => game.pass().with_context(|| format!("{} refused to move", player.name()))?,
        }
    }

    Ok(game)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = SearchConfig::new(args.depth)
        .with_forfeit_weight(args.forfeit_weight)
        .with_mobility_weight(args.mobility_weight);
    debug!("search config: {:?}", config);

    let (mut dark_wins, mut light_wins, mut draws) = (0usize, 0usize, 0usize);

    for index in 0..args.games {
        let game_seed = args.seed.wrapping_add(index as u64 * 2);
        let mut dark = make_player(args.dark, config, game_seed)?;
        let mut light = make_player(args.light, config, game_seed.wrapping_add(1))?;

        let game = play_game(dark.as_mut(), light.as_mut())?;
        let (dark_count, light_count) = game.score();

        match game.winner() {
            Some(Side::Dark) => dark_wins += 1,
            Some(Side::Light) => light_wins += 1,
            None => draws += 1,
        }
        info!(
            "game {}: {} (X) {} - {} {} (O) after {} moves",
            index + 1,
            dark.name(),
            dark_count,
            light_count,
            light.name(),
            game.history().len()
        );

        if index + 1 == args.games {
            println!("{}", game.board());
        }
    }

    println!(
        "Dark ({:?}) wins: {}, Light ({:?}) wins: {}, draws: {}",
        args.dark, dark_wins, args.light, light_wins, draws
    );

    Ok(())
}
