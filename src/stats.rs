//! Per-player win/loss/tie records kept in small text files
//!
//! Each player has a `<name>.txt` file holding three lines: wins, losses and
//! ties, counted from the human player's side.

use thiserror::Error;
use tracing::{debug, info, instrument};

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::turn::GameResult;

const FILE_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("no stats found for {name} at {}", .path.display())]
    NotFound { name: String, path: PathBuf },

    #[error("failed to access stats file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("stats file {} is malformed: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },
}

/// A player's all-time record
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct PlayerStats {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl PlayerStats {
    /// Counts one finished game, `PlayerA` being the player these stats belong to
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::PlayerAWin => self.wins += 1,
            GameResult::PlayerBWin => self.losses += 1,
            GameResult::Tie => self.ties += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    pub fn win_percent(&self) -> f64 {
        self.percent_of_total(self.wins)
    }

    pub fn loss_percent(&self) -> f64 {
        self.percent_of_total(self.losses)
    }

    fn percent_of_total(&self, count: u32) -> f64 {
        match self.total_games() {
            0 => 0.0,
            total => count as f64 / total as f64 * 100.0,
        }
    }

    fn parse(contents: &str) -> Result<Self, String> {
        let mut lines = contents.lines().map(str::trim);
        let mut next = |label: &str| -> Result<u32, String> {
            let line = lines.next().ok_or_else(|| format!("missing {} line", label))?;
            line.parse::<u32>()
                .map_err(|err| format!("invalid {} count '{}': {}", label, line, err))
        };

        Ok(Self {
            wins: next("wins")?,
            losses: next("losses")?,
            ties: next("ties")?,
        })
    }

    fn to_file_contents(&self) -> String {
        format!("{}\n{}\n{}\n", self.wins, self.losses, self.ties)
    }
}

impl fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Your Current Stats -----")?;
        writeln!(f, "Wins: {} ({:.1}%)", self.wins, self.win_percent())?;
        writeln!(f, "Losses: {} ({:.1}%)", self.losses, self.loss_percent())?;
        writeln!(f, "Ties: {}", self.ties)
    }
}

/// The stats file for one named player
#[derive(Clone, Debug)]
pub struct StatsFile {
    name: String,
    path: PathBuf,
}

impl StatsFile {
    pub fn path_for<P: AsRef<Path>>(dir: P, name: &str) -> PathBuf {
        dir.as_ref().join(format!("{}.{}", name, FILE_EXTENSION))
    }

    /// Starts a fresh record for a new player, replacing any existing file
    #[instrument(skip(dir))]
    pub fn create<P: AsRef<Path>>(dir: P, name: &str) -> Result<Self, StatsError> {
        let file = Self {
            name: name.to_string(),
            path: Self::path_for(dir, name),
        };
        file.save(&PlayerStats::default())?;
        info!(path = %file.path.display(), "created stats file");
        Ok(file)
    }

    /// Opens an existing record for a returning player
    ///
    /// Fails with [`StatsError::NotFound`] when the file is missing or has no
    /// content at all; a malformed file is only reported when loaded.
    #[instrument(skip(dir))]
    pub fn open<P: AsRef<Path>>(dir: P, name: &str) -> Result<Self, StatsError> {
        let path = Self::path_for(dir, name);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StatsError::NotFound {
                    name: name.to_string(),
                    path,
                })
            }
            Err(source) => return Err(StatsError::Io { path, source }),
        };

        if contents.is_empty() {
            return Err(StatsError::NotFound {
                name: name.to_string(),
                path,
            });
        }
        debug!(path = %path.display(), "opened stats file");
        Ok(Self {
            name: name.to_string(),
            path,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<PlayerStats, StatsError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| StatsError::Io {
            path: self.path.clone(),
            source,
        })?;
        PlayerStats::parse(&contents).map_err(|reason| StatsError::Parse {
            path: self.path.clone(),
            reason,
        })
    }

    /// Adds a finished game to the file, returning the updated record
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn record(&self, result: GameResult) -> Result<PlayerStats, StatsError> {
        let mut stats = self.load()?;
        stats.record(result);
        self.save(&stats)?;
        info!(?result, ?stats, "recorded game");
        Ok(stats)
    }

    fn save(&self, stats: &PlayerStats) -> Result<(), StatsError> {
        fs::write(&self.path, stats.to_file_contents()).map_err(|source| StatsError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
