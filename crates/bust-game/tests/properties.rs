//! Property tests for rounds and games driven by scripted draws.

use proptest::prelude::*;

use bust_game::rules::{BUST_THRESHOLD, ROUNDS_PER_GAME};
use bust_game::{
    Console, DrawSource, Game, RandomDraws, Round, RoundState, ScriptedDraws, SessionConfig,
};

fn play_round(draws: &[u32], input: &str) -> Round {
    let mut source = ScriptedDraws::new(draws.iter().copied());
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let mut round = Round::new(1);
    round
        .play(&mut source, &mut console)
        .expect("scripted round should finish");
    round
}

proptest! {
    #[test]
    fn draws_stay_in_range(seed in any::<u64>()) {
        let mut source = RandomDraws::new(SessionConfig::default().with_seed(seed).rng());
        for _ in 0..64 {
            let value = source.draw();
            prop_assert!((2..=9).contains(&value));
        }
    }

    #[test]
    fn stopped_round_scores_sum_of_draws(
        draws in prop::collection::vec(2u32..10, 1..3),
    ) {
        // Two draws of at most 9 can never bust.
        let mut input = "continue\n".repeat(draws.len() - 1);
        input.push_str("stop\n");
        let round = play_round(&draws, &input);
        prop_assert_eq!(round.state(), RoundState::Stopped);
        prop_assert_eq!(round.score(), draws.iter().sum::<u32>());
        prop_assert_eq!(round.draws(), draws.as_slice());
    }

    #[test]
    fn continuing_forever_always_busts(draws in prop::collection::vec(2u32..10, 1..20)) {
        let input = "continue\n".repeat(20);
        let round = play_round(&draws, &input);
        prop_assert_eq!(round.state(), RoundState::Bust);
        prop_assert_eq!(round.score(), 0);

        let history = round.draws();
        let before_last: u32 = history[..history.len() - 1].iter().sum();
        prop_assert!(before_last <= BUST_THRESHOLD);
        prop_assert!(before_last + history[history.len() - 1] > BUST_THRESHOLD);
    }

    #[test]
    fn garbage_answers_do_not_change_the_round(
        value in 2u32..10,
        junk in prop::collection::vec("[a-z ]{0,12}", 0..5),
    ) {
        let mut input = String::new();
        for line in &junk {
            if line.trim() != "continue" && line.trim() != "stop" {
                input.push_str(line);
                input.push('\n');
            }
        }
        input.push_str("stop\n");
        let round = play_round(&[value], &input);
        prop_assert_eq!(round.score(), value);
        prop_assert_eq!(round.draws(), &[value][..]);
    }

    #[test]
    fn game_total_is_sum_of_round_scores(seed in any::<u64>(), bank_after in 1usize..3) {
        let mut source = RandomDraws::new(SessionConfig::default().with_seed(seed).rng());
        let per_round = format!("{}stop\n", "continue\n".repeat(bank_after - 1));
        let input = per_round.repeat(ROUNDS_PER_GAME as usize);
        let mut console = Console::new(input.as_bytes(), Vec::new());
        let mut game = Game::new();
        game.play(&mut source, &mut console).expect("game should finish");

        prop_assert_eq!(game.rounds().len(), ROUNDS_PER_GAME as usize);
        let sum: u32 = game.rounds().iter().map(Round::score).sum();
        prop_assert_eq!(game.total(), sum);
        for round in game.rounds() {
            prop_assert_eq!(round.score(), round.draws().iter().sum::<u32>());
        }
    }
}
