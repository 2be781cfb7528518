//! Quiz rounds over a deck.
//!
//! A session asks exactly `times` questions, walking the deck in order and
//! wrapping around to the first card when it runs out. Every wrong answer
//! bumps the asked card's mistake counter.

use anyhow::Result;

use crate::console::{prompt, Console};
use crate::deck::Deck;

/// How an answer was scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The answer is the asked card's definition.
    Correct,
    /// The answer is wrong here but is the definition of `owner`.
    Swapped { owner: String },
    /// The answer matches no card.
    Wrong,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Tally of a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeSummary {
    pub asked: usize,
    pub correct: usize,
}

/// Deck indices in the order questions are asked.
///
/// Yields nothing for an empty deck regardless of `times`.
pub fn schedule(deck_len: usize, times: usize) -> impl Iterator<Item = usize> {
    let times = if deck_len == 0 { 0 } else { times };
    (0..times).map(move |i| i % deck_len)
}

/// Score `answer` against the card at `index` without touching the deck.
pub fn grade(deck: &Deck, index: usize, answer: &str) -> Verdict {
    let card = &deck.cards()[index];
    if answer == card.definition {
        return Verdict::Correct;
    }
    match deck.get_term(answer) {
        Some(owner) => Verdict::Swapped {
            owner: owner.to_string(),
        },
        None => Verdict::Wrong,
    }
}

/// Score `answer` and record a mistake on the asked card if it was wrong.
pub fn answer(deck: &mut Deck, index: usize, reply: &str) -> Verdict {
    let verdict = grade(deck, index, reply);
    if !verdict.is_correct() {
        deck.cards_mut()[index].add_mistake();
    }
    verdict
}

/// Feedback line for a scored answer.
pub fn feedback(definition: &str, verdict: &Verdict) -> String {
    match verdict {
        Verdict::Correct => "Correct!".to_string(),
        Verdict::Swapped { owner } => format!(
            "Wrong. The right answer is \"{definition}\", but your definition is correct for \"{owner}\"."
        ),
        Verdict::Wrong => format!("Wrong. The right answer is \"{definition}\"."),
    }
}

/// Run an interactive session of `times` questions.
pub fn run<C: Console + ?Sized>(
    deck: &mut Deck,
    console: &mut C,
    times: usize,
) -> Result<PracticeSummary> {
    let mut summary = PracticeSummary::default();

    for index in schedule(deck.len(), times) {
        let term = deck.cards()[index].term.clone();
        let reply = prompt(console, &format!("Print the definition of \"{term}\":"))?;

        let verdict = answer(deck, index, &reply);
        console.write_line(&feedback(&deck.cards()[index].definition, &verdict))?;

        summary.asked += 1;
        if verdict.is_correct() {
            summary.correct += 1;
        }
    }

    tracing::info!(
        asked = summary.asked,
        correct = summary.correct,
        "practice session finished"
    );
    Ok(summary)
}
