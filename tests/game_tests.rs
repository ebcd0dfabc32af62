//! Full games between engine players.

use ultimate_ttt::game::{Match, ResultLog, ResultSink};
use ultimate_ttt::heuristic::WeightedHeuristic;
use ultimate_ttt::players::{AlphaBetaPlayer, MctsPlayer, Player, RandomPlayer};
use ultimate_ttt::search::AlphaBetaConfig;
use ultimate_ttt::{MCTSConfig, MetaBoard, Status};

fn alphabeta(depth: u32) -> AlphaBetaPlayer<WeightedHeuristic> {
    AlphaBetaPlayer::new(
        WeightedHeuristic::default(),
        AlphaBetaConfig::default().with_depth(depth),
    )
}

#[test]
fn test_alphabeta_vs_random_game() {
    let mut game = Match::new(alphabeta(2), RandomPlayer::new(5));
    let status = game.run().unwrap();

    assert!(status.is_decided());
    let stats = game.stats();
    assert_eq!(stats.player_one_name, "AlphaBeta");
    assert_eq!(stats.player_two_name, "Random");
    assert_eq!(stats.winner, status);
    assert!(stats.player_one_moves + stats.player_two_moves <= 81);
}

#[test]
fn test_mcts_vs_random_game() {
    let mcts = MctsPlayer::new(MCTSConfig::default().with_iterations(30));
    let mut game = Match::new(RandomPlayer::new(8), mcts);

    let status = game.run().unwrap();
    assert!(status.is_decided());
    assert_eq!(game.stats().player_two_params, "iterations=30 c=1.414");
}

#[test]
fn test_boxed_players() {
    let one: Box<dyn Player> = Box::new(RandomPlayer::new(1));
    let two: Box<dyn Player> = Box::new(alphabeta(1));
    let mut game = Match::new(one, two);

    assert!(game.run().unwrap().is_decided());
}

#[test]
fn test_series_with_alternating_seats() {
    let mut log = ResultLog::new();

    for game_number in 0..4u32 {
        let stats = if game_number % 2 == 0 {
            let mut game = Match::new(alphabeta(1), RandomPlayer::new(u64::from(game_number)));
            game.run().unwrap();
            game.stats()
        } else {
            let mut game = Match::new(RandomPlayer::new(u64::from(game_number)), alphabeta(1));
            game.run().unwrap();
            game.stats()
        };
        log.record_result(game_number, &stats);
    }

    assert_eq!(log.len(), 4);
    let tally = log.tally();
    let total = tally.wins_for("AlphaBeta") + tally.wins_for("Random") + tally.draws;
    assert_eq!(total, 4);
}

#[test]
fn test_match_result_matches_board() {
    let mut game = Match::new(RandomPlayer::new(21), RandomPlayer::new(22));
    let status = game.run().unwrap();

    assert_eq!(game.board().winner(), status);
    assert_ne!(status, Status::Running);
    assert_ne!(game.board(), &MetaBoard::new());
}
