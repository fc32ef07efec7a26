//! Question selection.
//!
//! Given the surviving candidates and the unasked questions, choose what
//! to ask next. Difficulty decides how greedy the choice is:
//!
//! - **Easy**: uniform pick among all remaining questions. Deliberately
//!   uninformative so the guesser is easier to beat.
//! - **Medium**: uniform pick among the three highest-gain questions.
//! - **Hard**: the highest-gain question. Ties go to the question that
//!   comes first in the remaining list, so hard mode is deterministic.
//!
//! The selector is pure apart from drawing on the `RandomSource`.

use smallvec::SmallVec;
use tracing::trace;

use super::entropy::{gain_from_split, partition};
use crate::core::{CandidatePool, Difficulty, RandomSource};
use crate::knowledge::{Character, Question};

/// A question paired with its expected information gain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredQuestion<'q> {
    pub question: &'q Question,
    pub gain: f64,
}

/// Score every question against `candidates`, highest gain first.
///
/// The sort is stable: equal gains keep their input order.
pub fn rank_questions<'a, 'q, C, Q>(candidates: C, questions: Q) -> Vec<ScoredQuestion<'q>>
where
    C: IntoIterator<Item = &'a Character> + Copy,
    Q: IntoIterator<Item = &'q Question>,
{
    let mut ranked: Vec<ScoredQuestion<'q>> = questions
        .into_iter()
        .map(|question| {
            let (yes, no) = partition(candidates, question.attribute.as_str());
            let gain = gain_from_split(yes, no);
            trace!(
                question = %question.id,
                attribute = %question.attribute,
                yes,
                no,
                gain,
                "scored question"
            );
            ScoredQuestion { question, gain }
        })
        .collect();
    ranked.sort_by(|a, b| b.gain.total_cmp(&a.gain));
    ranked
}

/// Choose the next question, or `None` when no questions remain.
///
/// With at most one candidate left there is nothing to discriminate, so
/// the first remaining question is returned without scoring.
pub fn select_next<'a, 'q, C, Q, R>(
    candidates: C,
    remaining: Q,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<&'q Question>
where
    C: IntoIterator<Item = &'a Character> + Copy,
    Q: IntoIterator<Item = &'q Question>,
    R: RandomSource + ?Sized,
{
    let pool: Vec<&'q Question> = remaining.into_iter().collect();
    let first = *pool.first()?;

    if candidates.into_iter().nth(1).is_none() {
        return Some(first);
    }

    match difficulty.policy().pool {
        CandidatePool::Any => Some(pool[rng.pick_index(pool.len())]),
        CandidatePool::Best => rank_questions(candidates, pool).first().map(|s| s.question),
        CandidatePool::TopK(k) => {
            let top: SmallVec<[&'q Question; 3]> = rank_questions(candidates, pool)
                .into_iter()
                .take(k.max(1))
                .map(|s| s.question)
                .collect();
            Some(top[rng.pick_index(top.len())])
        }
    }
}
