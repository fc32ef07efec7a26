//! Terminal front-end.
//!
//! Usage: `guess [easy|medium|hard] [all|movies|books|games|history|sports|cartoons] [seed]`
//!
//! Answer with `y`, `n`, or `?`. Set `RUST_LOG=character_guess=debug` to
//! watch the candidate set shrink.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use character_guess::{
    Answer, Category, Difficulty, EngineConfig, GameRng, GameSession, KnowledgeBase,
};

const DEFAULT_LOG: &str = "character_guess=info";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let difficulty = args.next().map(|s| s.parse::<Difficulty>()).transpose()?.unwrap_or_default();
    let category = args.next().map(|s| s.parse::<Category>()).transpose()?;
    let rng = match args.next() {
        Some(seed) => {
            GameRng::new(seed.parse().with_context(|| format!("invalid seed: {:?}", seed))?)
        }
        None => GameRng::from_entropy(),
    };

    let kb = KnowledgeBase::builtin();
    let mut session = GameSession::new(kb, EngineConfig::default(), difficulty, category, rng);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Think of a character and I'll try to guess it. ({} mode)", difficulty);

    loop {
        if session.state().is_over() {
            print_result(&session);
            if !ask(&mut lines, "Play again? (y/n) ")?.is_some_and(|a| a == Answer::Yes) {
                break;
            }
            session.restart();
            continue;
        }

        let state = session.state();
        let Some(text) = state.current_question_text() else {
            println!("I've run out of questions.");
            break;
        };
        let prompt = format!(
            "[{:>3.0}%] Q{}: {} (y/n/?) ",
            state.progress(),
            state.questions_asked() + 1,
            text
        );

        match ask(&mut lines, &prompt)? {
            Some(answer) => {
                session.answer(answer);
            }
            None => break,
        }
    }

    Ok(())
}

/// `RUST_LOG` when set and valid, otherwise `DEFAULT_LOG`.
fn log_filter(env: Option<&str>) -> EnvFilter {
    env.filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG))
}

/// Prompt until a valid answer arrives. `None` on end of input.
fn ask<B: BufRead>(lines: &mut io::Lines<B>, prompt: &str) -> Result<Option<Answer>> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match line?.parse::<Answer>() {
            Ok(answer) => return Ok(Some(answer)),
            Err(err) => eprintln!("{}", err),
        }
    }
}

fn print_result(session: &GameSession<'_>) {
    let state = session.state();
    match state.guessed() {
        Some(character) => {
            println!();
            println!("I think your character is... {}!", character.name);
            println!("  {}", character.description);
            println!("  With {:.0}% confidence", state.confidence().round());
            let others = session.runner_ups();
            if !others.is_empty() {
                println!("  Other possibilities:");
                for other in others {
                    println!("    - {}", other.name);
                }
            }
        }
        None => {
            println!();
            println!("I couldn't guess your character! I need to improve my knowledge base.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).to_string(), DEFAULT_LOG);
        assert_eq!(log_filter(Some("  ")).to_string(), DEFAULT_LOG);
    }

    #[test]
    fn test_log_filter_honours_rust_log() {
        let filter = log_filter(Some("character_guess=debug")).to_string();
        assert!(filter.contains("character_guess=debug"), "{}", filter);
        assert!(!filter.contains("info"), "{}", filter);
    }

    #[test]
    fn test_log_filter_ignores_invalid_rust_log() {
        assert_eq!(log_filter(Some("character_guess=loud")).to_string(), DEFAULT_LOG);
    }
}
