//! Property tests for feedback, pruning, entropy and games

use entropy_guesser::core::{Feedback, Letters, Moves, Pattern, Word, evaluate};
use entropy_guesser::corpus::Corpus;
use entropy_guesser::game::{Game, GameStatus, Rules};
use entropy_guesser::solver::entropy::guess_entropy;
use entropy_guesser::solver::prune;
use proptest::prelude::*;

fn word(text: &str) -> Word<Letters> {
    Word::new(text).unwrap()
}

fn texts(pool: &entropy_guesser::corpus::Pool<'_, Letters>) -> Vec<String> {
    pool.words().map(|w| w.text().to_string()).collect()
}

/// Five letters over a tiny alphabet, so repeated letters are common
fn small_word() -> impl Strategy<Value = String> {
    "[a-c]{5}"
}

fn corpus_records() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::vec((small_word(), 1u32..10), 1..30)
        .prop_map(|v| v.into_iter().map(|(w, f)| (w, f64::from(f))).collect())
}

proptest! {
    #[test]
    fn evaluate_is_reflexive(s in small_word()) {
        let s = word(&s);
        prop_assert!(evaluate(&s, &s).unwrap().is_perfect());
    }

    #[test]
    fn greens_are_exact_matches(g in small_word(), s in small_word()) {
        let pattern = evaluate(&word(&g), &word(&s)).unwrap();
        let matching = g.chars().zip(s.chars()).filter(|(a, b)| a == b).count();
        prop_assert_eq!(pattern.count_greens(), matching);
    }

    #[test]
    fn marked_symbols_never_exceed_secret_count(g in small_word(), s in small_word()) {
        let pattern = evaluate(&word(&g), &word(&s)).unwrap();

        for symbol in ['a', 'b', 'c'] {
            let marked = g
                .chars()
                .zip(pattern.feedback())
                .filter(|&(c, f)| c == symbol && f != Feedback::Gray)
                .count();
            let available = s.chars().filter(|&c| c == symbol).count();
            prop_assert!(marked <= available);
        }
    }

    #[test]
    fn encoding_round_trips(g in small_word(), s in small_word()) {
        let pattern = evaluate(&word(&g), &word(&s)).unwrap();
        prop_assert_eq!(Pattern::parse(&pattern.to_code(), 5).unwrap(), pattern);
    }

    #[test]
    fn prune_is_idempotent_and_monotonic(
        records in corpus_records(),
        secret_idx in any::<prop::sample::Index>(),
        guesses in prop::collection::vec(small_word(), 1..4),
    ) {
        let corpus = Corpus::<Letters>::from_records(records, 5).unwrap();
        let secret = secret_idx.get(corpus.entries()).word().clone();

        let mut history = Vec::new();
        let mut previous = corpus.len();
        for g in &guesses {
            let g = word(g);
            let pattern = evaluate(&g, &secret).unwrap();
            history.push((g, pattern));

            let once = prune(&corpus.pool(), &history).unwrap();
            let twice = prune(&once, &history).unwrap();

            prop_assert_eq!(texts(&once), texts(&twice));
            prop_assert!(once.len() <= previous);
            prop_assert!(once.contains(&secret));
            previous = once.len();
        }
    }

    #[test]
    fn entropy_is_bounded(records in corpus_records(), guess in small_word()) {
        let corpus = Corpus::<Letters>::from_records(records, 5).unwrap();
        let entropy = guess_entropy(&word(&guess), &corpus.pool()).unwrap();

        prop_assert!(entropy >= 0.0);
        prop_assert!(entropy <= (corpus.len() as f64).ln() + 1e-9);
    }

    #[test]
    fn submitting_the_secret_wins(s in small_word(), misses in prop::collection::vec(small_word(), 0..5)) {
        let secret = word(&s);
        let mut game = Game::new(secret.clone(), Rules::new(5, 6)).unwrap();

        for m in misses.iter().filter(|m| **m != s) {
            game.submit_guess(word(m)).unwrap();
        }
        game.submit_guess(secret).unwrap();
        prop_assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn rows_run_out(s in small_word(), misses in prop::collection::vec(small_word(), 3)) {
        prop_assume!(misses.iter().all(|m| *m != s));
        let mut game = Game::new(word(&s), Rules::new(5, 3)).unwrap();

        for m in &misses {
            prop_assert_eq!(game.status(), GameStatus::InProgress);
            game.submit_guess(word(m)).unwrap();
        }
        prop_assert_eq!(game.status(), GameStatus::Lost);
        prop_assert!(game.submit_guess(word(&s)).is_err());
        prop_assert_eq!(game.row(), 3);
    }
}

#[test]
fn singleton_pool_has_zero_entropy() {
    let corpus = Corpus::<Letters>::from_records([("crane", 3.0)], 5).unwrap();
    let entropy = guess_entropy(&word("slate"), &corpus.pool()).unwrap();
    assert!(entropy.abs() < f64::EPSILON);
}

#[test]
fn moves_behave_like_letters() {
    // Same shape as trace/crate, one token per letter
    let guess = Word::<Moves>::new("Nf3 d4 c4 Nc3 e4").unwrap();
    let secret = Word::<Moves>::new("Nc3 d4 c4 Nf3 e4").unwrap();
    let moves = evaluate(&guess, &secret).unwrap();
    let letters = evaluate(&word("trace"), &word("crate")).unwrap();
    assert_eq!(moves, letters);
}
