//! The game state machine.
//!
//! A game is either active (a current question is waiting for an answer)
//! or terminal (`game_over`, with a guess or an admission of defeat).
//! `apply_answer` is the only transition; it returns a new state and
//! leaves its input untouched.
//!
//! ## Transition
//!
//! 1. Terminal states, and states without a current question, are returned as-is
//! 2. The (question, answer) pair is appended to the history
//! 3. Yes/no filters the candidates on the question's attribute; unknown keeps them
//! 4. The question leaves the remaining pool
//! 5. The termination policy decides between guessing and asking again

use im::Vector;
use tracing::{debug, info};

use super::selector::select_next;
use crate::core::{
    Answer, AnswerRecord, Difficulty, DifficultyPolicy, EngineConfig, GameState, RandomSource,
};
use crate::knowledge::{Category, Character, KnowledgeBase, Question};

/// Start a game over the characters of `category`.
///
/// When the category yields fewer than `config.min_category_size`
/// characters the filter is dropped and the whole catalog plays.
pub fn start_new_game<R>(
    kb: &KnowledgeBase,
    config: &EngineConfig,
    difficulty: Difficulty,
    category: Option<Category>,
    rng: &mut R,
) -> GameState
where
    R: RandomSource + ?Sized,
{
    let filter = category.unwrap_or_default();
    let mut candidates: Vector<Character> = kb.filter_by_category(filter).into_iter().collect();
    if candidates.len() < config.min_category_size {
        debug!(
            category = %filter,
            found = candidates.len(),
            min = config.min_category_size,
            "category too small, falling back to full catalog"
        );
        candidates = kb.list_entities().iter().cloned().collect();
    }
    let questions: Vector<Question> = kb.list_questions().iter().cloned().collect();

    let mut state = GameState::new(candidates, questions, difficulty, category);
    state.current_question = select_next(
        &state.possible_candidates,
        &state.remaining_questions,
        difficulty,
        rng,
    )
    .cloned();

    debug!(
        %difficulty,
        candidates = state.possible_candidates.len(),
        questions = state.remaining_questions.len(),
        first = ?state.current_question.as_ref().map(|q| q.id),
        "started game"
    );
    state
}

/// Apply the player's answer to the current question.
///
/// Returns the next state. A terminal state, or one with no current
/// question, comes back unchanged.
pub fn apply_answer<R>(state: &GameState, answer: Answer, rng: &mut R) -> GameState
where
    R: RandomSource + ?Sized,
{
    let current = match (&state.current_question, state.game_over) {
        (Some(question), false) => question,
        _ => return state.clone(),
    };

    let mut asked_history = state.asked_history.clone();
    asked_history.push_back(AnswerRecord::new(current.clone(), answer));

    let possible_candidates =
        filter_candidates(&state.possible_candidates, current.attribute.as_str(), answer);

    let remaining_questions: Vector<Question> = state
        .remaining_questions
        .iter()
        .filter(|q| q.id != current.id)
        .cloned()
        .collect();

    debug!(
        question = %current.id,
        %answer,
        before = state.possible_candidates.len(),
        after = possible_candidates.len(),
        remaining = remaining_questions.len(),
        "applied answer"
    );

    let mut next = GameState {
        possible_candidates,
        remaining_questions,
        asked_history,
        current_question: None,
        game_over: false,
        guessed_entity: None,
        confidence: 0.0,
        difficulty: state.difficulty,
        category: state.category,
    };

    let policy = state.difficulty.policy();
    if termination_reached(
        &policy,
        next.asked_history.len(),
        next.possible_candidates.len(),
        next.remaining_questions.len(),
    ) {
        next.game_over = true;
        next.guessed_entity = next.possible_candidates.front().cloned();
        next.confidence = confidence_for(next.possible_candidates.len());
        info!(
            guess = ?next.guessed_entity.as_ref().map(|c| c.name.as_str()),
            confidence = next.confidence,
            asked = next.asked_history.len(),
            "game over"
        );
    } else {
        next.current_question = select_next(
            &next.possible_candidates,
            &next.remaining_questions,
            next.difficulty,
            rng,
        )
        .cloned();
    }

    next
}

/// Keep the candidates consistent with `answer` on `attribute`.
///
/// Missing attributes read as false, so they survive "no" and fall to "yes".
#[must_use]
pub fn filter_candidates(
    candidates: &Vector<Character>,
    attribute: &str,
    answer: Answer,
) -> Vector<Character> {
    match answer.expected_value() {
        None => candidates.clone(),
        Some(expected) => candidates
            .iter()
            .filter(|c| c.has(attribute) == expected)
            .cloned()
            .collect(),
    }
}

/// Should the game stop and guess?
///
/// Evaluated after the just-asked question has left the pool.
#[must_use]
pub fn termination_reached(
    policy: &DifficultyPolicy,
    asked: usize,
    candidates: usize,
    remaining: usize,
) -> bool {
    asked >= policy.max_questions || candidates <= policy.min_candidates_to_stop || remaining == 0
}

/// Confidence in a guess made among `remaining` candidates.
#[must_use]
pub fn confidence_for(remaining: usize) -> f64 {
    if remaining == 0 {
        return 0.0;
    }
    (100.0 / remaining as f64).min(100.0)
}
