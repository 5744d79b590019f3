//! Metrics collection and output for AI simulation results.

use briscola::domain::{is_trump, points};
use briscola::Card;
use serde::Serialize;

use crate::simulator::{seat_index, GameResult};

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tricks: Vec<TrickMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub ai_types: [String; 2],
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: [u16; 2],
    /// `None` for a 60-60 draw.
    pub winner: Option<u8>,
    pub leader: u8,
    pub trump: Card,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrickMetrics {
    pub trick_no: u8,
    pub leader: u8,
    pub lead: Card,
    pub follow: Card,
    pub winner: u8,
    pub points: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: u8,
    pub ai_type: String,
    pub card_points: u16,
    pub tricks_won: u32,
    pub leads_won: u32,
    pub trumps_played: u32,
    /// Points of own cards that ended in the opponent's pile.
    pub points_conceded: u32,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    ai_types: [String; 2],
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
    detailed: bool,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let tricks: Vec<TrickMetrics> = if detailed {
        result
            .tricks
            .iter()
            .map(|t| TrickMetrics {
                trick_no: t.trick_no,
                leader: seat_index(t.trick.lead.0),
                lead: t.trick.lead.1,
                follow: t.trick.follow.1,
                winner: seat_index(t.winner),
                points: t.points,
            })
            .collect()
    } else {
        Vec::new()
    };

    let player_metrics = (0..2u8)
        .map(|seat| build_player_metrics(seat, &ai_types[usize::from(seat)], result))
        .collect();

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config: GameConfig {
            ai_types,
            total_games,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores,
            winner: result.winner,
            leader: result.leader,
            trump: result.trump,
            duration_ms,
        },
        tricks,
        player_metrics,
    }
}

fn build_player_metrics(
    seat: u8,
    ai_type: &str,
    result: &GameResult,
) -> PlayerMetrics {
    let trump = result.trump.suit;
    let mut tricks_won = 0;
    let mut leads_won = 0;
    let mut trumps_played = 0;
    let mut points_conceded = 0;

    for t in &result.tricks {
        let led = seat_index(t.trick.lead.0) == seat;
        let own = if led { t.trick.lead.1 } else { t.trick.follow.1 };
        if seat_index(t.winner) == seat {
            tricks_won += 1;
            if led {
                leads_won += 1;
            }
        } else {
            points_conceded += u32::from(points(own));
        }
        if is_trump(own, trump) {
            trumps_played += 1;
        }
    }

    PlayerMetrics {
        seat,
        ai_type: ai_type.to_string(),
        card_points: result.final_scores[usize::from(seat)],
        tricks_won,
        leads_won,
        trumps_played,
        points_conceded,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub winner: String,
    pub leader: u8,
    pub trump: Card,
    pub seat0_score: u16,
    pub seat1_score: u16,
    pub seat0_ai: String,
    pub seat1_ai: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            winner: metrics
                .result
                .winner
                .map_or_else(|| "draw".to_string(), |s| s.to_string()),
            leader: metrics.result.leader,
            trump: metrics.result.trump,
            seat0_score: metrics.result.final_scores[0],
            seat1_score: metrics.result.final_scores[1],
            seat0_ai: metrics.config.ai_types[0].clone(),
            seat1_ai: metrics.config.ai_types[1].clone(),
        }
    }
}
