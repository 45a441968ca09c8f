//! Builder for creating and configuring Board instances.

use std::path::{Path, PathBuf};

use super::Board;
use crate::{
    dates::WeekdayStyle,
    error::{BoardError, Result},
    store::{MemoryStore, SnapshotStore, SqliteStore},
};

/// Builder for creating and configuring Board instances.
#[derive(Debug, Clone, Default)]
pub struct BoardBuilder {
    database_path: Option<PathBuf>,
    in_memory: bool,
    weekday_style: WeekdayStyle,
}

impl BoardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/npi-board/board.db` or
    /// `~/.local/share/npi-board/board.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Keeps the board in memory only; nothing touches the disk.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Sets the language of schedule weekday labels.
    pub fn with_weekday_style(mut self, style: WeekdayStyle) -> Self {
        self.weekday_style = style;
        self
    }

    /// Opens the store and loads the board.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::XdgDirectory` if no default path can be found,
    /// `BoardError::FileSystem` if the parent directory cannot be created,
    /// and `BoardError::Database` if the database cannot be opened.
    pub fn build(self) -> Result<Board> {
        let store: Box<dyn SnapshotStore> = if self.in_memory {
            Box::new(MemoryStore::new())
        } else {
            let db_path = match self.database_path {
                Some(path) => path,
                None => Self::default_database_path()?,
            };

            if let Some(parent) = db_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| BoardError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }

            Box::new(SqliteStore::new(&db_path)?)
        };

        Ok(Board::open(store, self.weekday_style))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("npi-board")
            .place_data_file("board.db")
            .map_err(|e| BoardError::XdgDirectory(e.to_string()))
    }
}
