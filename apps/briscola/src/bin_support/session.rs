//! One interactive terminal session: setup prompts, the match, and wrap-up.

use std::io::{self, Write};

use briscola::adapters::leaderboard_json::JsonFileLeaderboard;
use briscola::adapters::match_logs::{log_file_path, MemoryLog, Tee};
use briscola::adapters::narrator::Narrator;
use briscola::adapters::terminal_input::TerminalInput;
use briscola::ai::generate_ai_name;
use briscola::leaderboard::format_date;
use briscola::{AppError, LeaderboardStore, Maestro, Match, MatchCollaborators, MatchConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use time::OffsetDateTime;
use tracing::info;

use super::leaderboard_view::render_leaderboard;

fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// `YYYYmmdd_HHMMSS`, used in log file names.
fn file_stamp(at: OffsetDateTime) -> String {
    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        at.year(),
        u8::from(at.month()),
        at.day(),
        at.hour(),
        at.minute(),
        at.second()
    )
}

pub fn run(mut config: MatchConfig) -> Result<(), AppError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Briscola v{}", env!("CARGO_PKG_VERSION"));
    let mut input = TerminalInput::new(io::stdin().lock(), io::stdout(), config.prompts);

    let player_name = match config.player_name.take() {
        Some(name) => name,
        None => {
            let entry = input.ask_name()?;
            config.log_enabled |= entry.log_enabled;
            config.prompts &= !entry.prompts_disabled;
            entry.name
        }
    };
    input.set_prompts(config.prompts);
    let games = match config.games {
        Some(games) => games,
        None => input.ask_match_length()?,
    };

    let computer_name = generate_ai_name(&mut rng);
    let ai = Maestro::new();
    let store = JsonFileLeaderboard::new(&config.leaderboard_path);
    let mut narrator = Narrator::new(io::stdout());
    let mut memory = MemoryLog::default();
    let mut game = Match::new(player_name.clone(), computer_name, games)?;

    info!(player = %player_name, games, log = config.log_enabled, "session started");
    let result = if config.log_enabled {
        let mut tee = Tee::new(&mut narrator, &mut memory);
        game.run(
            &mut rng,
            MatchCollaborators {
                human: &mut input,
                ai: &ai,
                log: &mut tee,
                leaderboard: Some(&store),
            },
        )?
    } else {
        game.run(
            &mut rng,
            MatchCollaborators {
                human: &mut input,
                ai: &ai,
                log: &mut narrator,
                leaderboard: Some(&store),
            },
        )?
    };

    if result.leaderboard_saved {
        println!("\n{}", render_leaderboard(&store.load()));
        println!("Leaderboard saved to {}.", store.path().display());
    } else if result.winner.is_some() {
        println!("\nThe leaderboard could not be saved to {}.", store.path().display());
    }

    if config.log_enabled {
        let at = now();
        let path = log_file_path(&config.log_dir, &player_name, &file_stamp(at));
        let header = format!(
            "Match log of {} {:02}:{:02}:{:02}",
            format_date(at.date()),
            at.hour(),
            at.minute(),
            at.second()
        );
        memory.write_to(&path, &header)?;
        println!("\nMatch log saved to {}.", path.display());
    }
    io::stdout().flush()?;
    Ok(())
}
