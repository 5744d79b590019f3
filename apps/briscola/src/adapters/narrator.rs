//! Narrates match events as plain sentences.

use std::io::Write;

use tracing::warn;

use crate::domain::events::MatchEvent;
use crate::domain::game::GameOutcome;
use crate::domain::match_summary::Outlook;
use crate::domain::state::Seat;
use crate::ports::MatchLog;

pub struct Narrator<W> {
    out: W,
    names: [String; 2],
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            names: [Seat::Human.to_string(), Seat::Computer.to_string()],
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn name(&self, seat: Seat) -> &str {
        &self.names[seat.index()]
    }

    /// Sentence for `event`; `None` for events the player must not see.
    pub fn describe(&mut self, event: &MatchEvent) -> Option<String> {
        let text = match event {
            MatchEvent::MatchStart {
                human,
                computer,
                games,
            } => {
                self.names = [human.clone(), computer.clone()];
                format!("{human} vs {computer}, best of {games}.")
            }
            MatchEvent::FirstLeaderDraw {
                human_card,
                computer_card,
                leader,
            } => format!(
                "{} drew the {}. {} drew the {}. {} leads the first game.",
                self.name(Seat::Human),
                human_card.long_name(),
                self.name(Seat::Computer),
                computer_card.long_name(),
                self.name(*leader)
            ),
            MatchEvent::GameStart {
                game_no,
                leader_name,
                ..
            } => format!("\n--- Game {game_no}: {leader_name} leads ---"),
            MatchEvent::Trump { card } => format!("The trump card is the {}.", card.long_name()),
            MatchEvent::TrickStart { .. } => return None,
            MatchEvent::Play { name, card, .. } => format!("{name} plays the {}.", card.long_name()),
            MatchEvent::Capture { name, points, .. } => {
                format!("{name} takes the trick ({points} points).")
            }
            MatchEvent::GameEnd {
                human,
                human_points,
                computer,
                computer_points,
            } => format!("Final score: {human} {human_points}, {computer} {computer_points}."),
            MatchEvent::GameResult {
                game_no,
                outcome,
                records,
            } => {
                let verdict = match outcome {
                    GameOutcome::Winner(seat) => format!("{} wins", self.name(*seat)),
                    GameOutcome::Tie => "it is a draw".to_string(),
                    GameOutcome::Forfeit => "abandoned".to_string(),
                };
                let [h, c] = records;
                format!(
                    "Game {game_no}: {verdict}. Match: {} {}-{}-{}, {} {}-{}-{} (W-T-L).",
                    self.name(Seat::Human),
                    h.wins,
                    h.ties,
                    h.losses,
                    self.name(Seat::Computer),
                    c.wins,
                    c.ties,
                    c.losses
                )
            }
            MatchEvent::Outlook {
                name,
                match_points,
                outlook,
                ..
            } => {
                let detail = match outlook {
                    Outlook::Secured => "has the match secured".to_string(),
                    Outlook::Impossible => "can no longer win the match".to_string(),
                    Outlook::MustWinAll { wins_needed } => {
                        format!("must win all {wins_needed} remaining games")
                    }
                    Outlook::Needs {
                        points,
                        wins_needed,
                    } => format!("needs {points} more points, about {wins_needed} wins"),
                };
                format!("{name} ({match_points} points) {detail}.")
            }
            MatchEvent::EarlyFinish => "The match is decided before the last game.".to_string(),
            MatchEvent::Forfeit { name } => format!("{name} abandons the match."),
            MatchEvent::MatchEnd {
                winner_name,
                decided_on_points,
                totals,
                ..
            } => match winner_name {
                Some(name) if *decided_on_points => format!(
                    "\nMatch tied on games; {name} wins on card points ({}-{}).",
                    totals[0], totals[1]
                ),
                Some(name) => format!("\n{name} wins the match!"),
                None => format!(
                    "\nAbsolute draw: tied on games and on card points ({}-{}).",
                    totals[0], totals[1]
                ),
            },
        };
        Some(text)
    }
}

impl<W: Write> MatchLog for Narrator<W> {
    fn record(&mut self, event: &MatchEvent) {
        let Some(line) = self.describe(event) else {
            return;
        };
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!(error = %e, "narration write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_parsing::parse_cards;
    use crate::domain::match_play::MatchRecord;

    fn start() -> MatchEvent {
        MatchEvent::MatchStart {
            human: "Anna".into(),
            computer: "AI-Bakodu".into(),
            games: 3,
        }
    }

    #[test]
    fn hides_the_computer_hand() {
        let mut n = Narrator::new(Vec::new());
        n.record(&start());
        n.record(&MatchEvent::TrickStart {
            trick_no: 1,
            computer_hand: parse_cards(&["AB", "3D", "7C"]),
        });
        let out = String::from_utf8(n.into_inner()).unwrap();
        assert_eq!(out, "Anna vs AI-Bakodu, best of 3.\n");
    }

    #[test]
    fn uses_names_from_match_start() {
        let mut n = Narrator::new(Vec::new());
        n.record(&start());
        let line = n
            .describe(&MatchEvent::GameResult {
                game_no: 1,
                outcome: GameOutcome::Winner(Seat::Computer),
                records: [
                    MatchRecord {
                        losses: 1,
                        total_points: 50,
                        ..MatchRecord::default()
                    },
                    MatchRecord {
                        wins: 1,
                        total_points: 70,
                        ..MatchRecord::default()
                    },
                ],
            })
            .unwrap();
        assert_eq!(
            line,
            "Game 1: AI-Bakodu wins. Match: Anna 0-0-1, AI-Bakodu 1-0-0 (W-T-L)."
        );
    }

    #[test]
    fn plays_use_long_names() {
        let mut n = Narrator::new(Vec::new());
        let line = n
            .describe(&MatchEvent::Play {
                seat: Seat::Human,
                name: "Anna".into(),
                card: parse_cards(&["9C"])[0],
            })
            .unwrap();
        assert_eq!(line, "Anna plays the Knight of Cups.");
    }
}
