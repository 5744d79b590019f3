//! Line-oriented human input over any reader/writer pair.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::{check_match_length, normalize_name};
use crate::domain::cards_parsing::format_cards;
use crate::domain::player_view::PlayerView;
use crate::domain::Card;
use crate::error::AppError;
use crate::ports::{HumanChoice, HumanInput};

/// Keyword typed at the name prompt to enable the match log file.
pub const LOG_KEYWORD: &str = "logon";
/// Keyword typed at the name prompt to hide the status prompt.
pub const NO_PROMPT_KEYWORD: &str = "noprompt";

/// Outcome of the interactive name prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub name: String,
    pub log_enabled: bool,
    pub prompts_disabled: bool,
}

/// Compact status prompt: `R<deck> B<trump> T<table|-> P<you>/<cpu> - C <hand> > `.
pub fn status_prompt(view: &PlayerView) -> String {
    let table = view
        .table
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "R{} B{} T{} P{}/{} - C {} > ",
        view.deck_remaining,
        view.trump_card,
        table,
        view.own_score,
        view.opponent_score,
        format_cards(&view.hand)
    )
}

/// A 1-based position in the hand, or a card code held in the hand.
pub fn parse_selection(input: &str, hand: &[Card]) -> Option<Card> {
    let input = input.trim();
    if let Ok(pos) = input.parse::<usize>() {
        return pos.checked_sub(1).and_then(|i| hand.get(i)).copied();
    }
    input
        .parse::<Card>()
        .ok()
        .filter(|card| hand.contains(card))
}

pub struct TerminalInput<R, W> {
    input: R,
    output: W,
    prompts: bool,
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    pub fn new(input: R, output: W, prompts: bool) -> Self {
        Self {
            input,
            output,
            prompts,
        }
    }

    pub fn set_prompts(&mut self, prompts: bool) {
        self.prompts = prompts;
    }

    /// One line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn closed() -> AppError {
        AppError::input("input closed".into())
    }

    /// Ask for the player name, handling the `logon` and `noprompt` keywords.
    pub fn ask_name(&mut self) -> Result<NameEntry, AppError> {
        writeln!(
            self.output,
            "Type '{LOG_KEYWORD}' to save a match log or '{NO_PROMPT_KEYWORD}' to hide the status prompt."
        )?;
        let mut log_enabled = false;
        let mut prompts_disabled = false;
        loop {
            let line = self
                .ask("Enter your name for the challenge: ")?
                .ok_or_else(Self::closed)?;
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case(LOG_KEYWORD) {
                log_enabled = true;
                writeln!(self.output, ">>> Match log enabled. Enter your name again. <<<")?;
                continue;
            }
            if trimmed.eq_ignore_ascii_case(NO_PROMPT_KEYWORD) {
                prompts_disabled = true;
                writeln!(self.output, ">>> Status prompt hidden. Enter your name again. <<<")?;
                continue;
            }
            match normalize_name(trimmed) {
                Ok(name) => {
                    return Ok(NameEntry {
                        name,
                        log_enabled,
                        prompts_disabled,
                    })
                }
                Err(_) => writeln!(self.output, "The name cannot be empty. Try again.")?,
            }
        }
    }

    /// Ask for the best-of-N length until a valid one is given.
    pub fn ask_match_length(&mut self) -> Result<u8, AppError> {
        loop {
            let line = self
                .ask("Best of how many games? (1-11): ")?
                .ok_or_else(Self::closed)?;
            match line.trim().parse::<u8>() {
                Ok(n) if check_match_length(n).is_ok() => return Ok(n),
                Ok(_) => writeln!(self.output, "Please enter a number from 1 to 11.")?,
                Err(_) => writeln!(self.output, "Invalid input. Enter a number.")?,
            }
        }
    }

    fn confirm_forfeit(&mut self) -> Result<bool, AppError> {
        let answer = self.ask("Are you sure you want to abandon the match? (y/n): ")?;
        Ok(answer.map_or(true, |a| a.trim().eq_ignore_ascii_case("y")))
    }
}

impl<R: BufRead, W: Write> HumanInput for TerminalInput<R, W> {
    fn choose_card(&mut self, view: &PlayerView) -> Result<HumanChoice, AppError> {
        let names: Vec<String> = view.hand.iter().map(|c| c.long_name()).collect();
        writeln!(self.output, "You hold: {}.", names.join(". "))?;

        let prompt = if self.prompts {
            status_prompt(view)
        } else {
            "> ".to_string()
        };
        loop {
            let Some(line) = self.ask(&prompt)? else {
                debug!("input closed, treating as forfeit");
                return Ok(HumanChoice::Forfeit);
            };
            if line.trim().is_empty() {
                if self.confirm_forfeit()? {
                    return Ok(HumanChoice::Forfeit);
                }
                writeln!(self.output, "Forfeit cancelled. Keep playing.")?;
                continue;
            }
            match parse_selection(&line, &view.hand) {
                Some(card) => return Ok(HumanChoice::Play(card)),
                None => writeln!(
                    self.output,
                    "Invalid choice. Enter a number between 1 and {} or a card code.",
                    view.hand.len()
                )?,
            }
        }
    }
}
