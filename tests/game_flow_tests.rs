//! End-to-end game flow tests over small hand-built catalogs and the
//! built-in catalog.

use character_guess::core::{Answer, Difficulty, EngineConfig, GameRng, RandomSource};
use character_guess::engine::{apply_answer, information_gain, set_uncertainty, start_new_game};
use character_guess::knowledge::{
    Category, Character, CharacterId, KnowledgeBase, Question, QuestionId,
};

/// Replays a fixed list of picks, then repeats the last one.
struct Scripted {
    picks: Vec<usize>,
    next: usize,
}

impl Scripted {
    fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for Scripted {
    fn pick_index(&mut self, len: usize) -> usize {
        let i = self.next.min(self.picks.len() - 1);
        self.next += 1;
        self.picks[i] % len
    }
}

fn six_with_three_men() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();
    let rows: [(&str, bool, bool); 6] = [
        ("Ada", false, true),
        ("Bob", true, false),
        ("Cy", true, true),
        ("Di", false, false),
        ("Ed", true, false),
        ("Flo", false, false),
    ];
    for (i, &(name, male, flies)) in rows.iter().enumerate() {
        kb.register_character(
            Character::new(CharacterId::new(i as u32 + 1), name)
                .with_attr("isMale", male)
                .with_attr("canFly", flies),
        );
    }
    kb.register_question(Question::new(QuestionId::new(1), "Is your character male?", "isMale"));
    kb.register_question(Question::new(QuestionId::new(2), "Can your character fly?", "canFly"));
    kb
}

// =============================================================================
// Worked Example
// =============================================================================

#[test]
fn test_six_entities_example() {
    let kb = six_with_three_men();

    let uncertainty = set_uncertainty(kb.list_entities());
    assert!((uncertainty - 2.585).abs() < 1e-3);

    let gain = information_gain(kb.list_entities(), "isMale");
    assert!((gain - 1.0).abs() < 1e-9);

    let mut rng = GameRng::new(0);
    let start = start_new_game(&kb, &EngineConfig::default(), Difficulty::Hard, None, &mut rng);
    assert_eq!(start.current_question().unwrap().id, QuestionId::new(1));

    let end = apply_answer(&start, Answer::Yes, &mut rng);
    let names: Vec<_> = end.candidates().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Bob", "Cy", "Ed"]);
    assert_eq!(end.remaining_questions().len(), 1);
    assert!(end.is_over());
    assert_eq!(end.guessed().unwrap().name, "Bob");
    assert!((end.confidence() - 33.33).abs() < 0.01);

    let others: Vec<_> = end.runner_ups(3).map(|c| c.name.as_str()).collect();
    assert_eq!(others, ["Cy", "Ed"]);
}

// =============================================================================
// Difficulty Behaviour
// =============================================================================

#[test]
fn test_medium_uses_random_source_among_top_three() {
    let kb = six_with_three_men();
    // Only two questions exist, so the top-k list is both of them.
    let config = EngineConfig::default();
    let start = start_new_game(&kb, &config, Difficulty::Medium, None, &mut Scripted::new(&[1]));
    assert_eq!(start.current_question().unwrap().id, QuestionId::new(2));

    let start = start_new_game(&kb, &config, Difficulty::Medium, None, &mut Scripted::new(&[0]));
    assert_eq!(start.current_question().unwrap().id, QuestionId::new(1));
}

#[test]
fn test_easy_can_pick_any_question() {
    let kb = KnowledgeBase::builtin();
    let last = kb.list_questions().len() - 1;
    let mut rng = Scripted::new(&[last]);
    let start = start_new_game(kb, &EngineConfig::default(), Difficulty::Easy, None, &mut rng);
    assert_eq!(start.current_question(), kb.list_questions().last());
}

#[test]
fn test_hard_game_is_reproducible_without_seed_agreement() {
    let kb = KnowledgeBase::builtin();
    let play = |seed: u64| {
        let mut rng = GameRng::new(seed);
        let config = EngineConfig::default();
        let mut state = start_new_game(kb, &config, Difficulty::Hard, None, &mut rng);
        let mut asked = Vec::new();
        while let Some(q) = state.current_question() {
            asked.push(q.id);
            state = apply_answer(&state, Answer::No, &mut rng);
        }
        (asked, state)
    };

    let (asked_a, end_a) = play(1);
    let (asked_b, end_b) = play(987_654);
    assert_eq!(asked_a, asked_b);
    assert_eq!(end_a, end_b);
}

#[test]
fn test_question_caps_per_difficulty() {
    let kb = KnowledgeBase::builtin();
    for difficulty in Difficulty::ALL {
        let mut rng = GameRng::new(3);
        let mut state = start_new_game(kb, &EngineConfig::default(), difficulty, None, &mut rng);
        while !state.is_over() {
            state = apply_answer(&state, Answer::Unknown, &mut rng);
        }
        // Unknown never prunes, so only the question cap can end the game.
        assert_eq!(state.questions_asked(), difficulty.policy().max_questions, "{}", difficulty);
        assert_eq!(state.candidates().len(), kb.len());
    }
}

// =============================================================================
// Categories
// =============================================================================

#[test]
fn test_category_restricts_candidates() {
    let kb = KnowledgeBase::builtin();
    let config = EngineConfig::default();
    let categories = [
        Category::Movies,
        Category::History,
        Category::Sports,
        Category::Cartoons,
        Category::Games,
    ];
    for category in categories {
        let mut rng = GameRng::new(1);
        let state = start_new_game(kb, &config, Difficulty::Medium, Some(category), &mut rng);
        assert!(state.candidates().iter().all(|c| category.matches(c)), "{}", category);
        assert!(state.candidates().len() >= 5);
    }
}

#[test]
fn test_all_and_none_are_unfiltered() {
    let kb = KnowledgeBase::builtin();
    let config = EngineConfig::default();
    let all =
        start_new_game(kb, &config, Difficulty::Hard, Some(Category::All), &mut GameRng::new(1));
    let none = start_new_game(kb, &config, Difficulty::Hard, None, &mut GameRng::new(1));

    assert_eq!(all.candidates().len(), kb.len());
    assert_eq!(none.candidates(), all.candidates());
    assert_eq!(none.category(), None);
}

#[test]
fn test_configurable_fallback_threshold() {
    let kb = KnowledgeBase::builtin();
    let sports = kb.filter_by_category(Category::Sports).len();
    let config = EngineConfig::default().with_min_category_size(sports + 1);

    let mut rng = GameRng::new(1);
    let state = start_new_game(kb, &config, Difficulty::Hard, Some(Category::Sports), &mut rng);
    assert_eq!(state.candidates().len(), kb.len());
}

// =============================================================================
// Playing To A Known Character
// =============================================================================

/// Answer truthfully for `target` and check the engine finds it.
fn play_truthfully(
    kb: &KnowledgeBase,
    difficulty: Difficulty,
    target: CharacterId,
    seed: u64,
) -> bool {
    let target = kb.get_character(target).unwrap().clone();
    let mut rng = GameRng::new(seed);
    let mut state = start_new_game(kb, &EngineConfig::default(), difficulty, None, &mut rng);

    while let Some(q) = state.current_question() {
        let answer = if target.has(q.attribute.as_str()) { Answer::Yes } else { Answer::No };
        state = apply_answer(&state, answer, &mut rng);
        assert!(state.candidates().iter().any(|c| c.id == target.id));
    }

    state.guessed().map(|c| c.id) == Some(target.id)
        || state.runner_ups(usize::MAX).any(|c| c.id == target.id)
}

#[test]
fn test_truthful_answers_keep_target_in_play() {
    let kb = KnowledgeBase::builtin();
    for character in kb.list_entities().iter().take(12) {
        for difficulty in Difficulty::ALL {
            assert!(
                play_truthfully(kb, difficulty, character.id, 17),
                "{} lost on {}",
                character.name,
                difficulty
            );
        }
    }
}
