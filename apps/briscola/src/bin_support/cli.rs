use std::path::PathBuf;

use briscola::config::RawOptions;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "briscola")]
#[command(about = "Play Briscola against the computer in your terminal", long_about = None)]
#[command(version)]
pub struct Args {
    /// Player name (asked interactively when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Best-of-N match length, 1 to 11 (asked interactively when omitted)
    #[arg(long)]
    pub games: Option<u8>,

    /// RNG seed for a reproducible match
    #[arg(long)]
    pub seed: Option<u64>,

    /// Save a match log file when the match ends
    #[arg(long)]
    pub log: bool,

    /// Show a bare `> ` instead of the status prompt
    #[arg(long)]
    pub no_prompt: bool,

    /// Leaderboard file [env: BRISCOLA_LEADERBOARD]
    #[arg(long)]
    pub leaderboard: Option<PathBuf>,

    /// Debug-level diagnostics on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_options(self) -> RawOptions {
        RawOptions {
            name: self.name,
            games: self.games,
            seed: self.seed,
            log: self.log,
            no_prompt: self.no_prompt,
            leaderboard: self.leaderboard,
        }
    }
}
