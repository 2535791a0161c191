use crate::cli::Cli;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const APP_DIR_NAME: &str = "lucky-vault";
pub const WORDS_FILE: &str = "countries.txt";
pub const SCORE_FILE: &str = "highscore.txt";
pub const LOGS_DIR: &str = "logs";

/// Where the game reads its word list and keeps its score and session logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePaths {
    pub words: PathBuf,
    pub score_file: PathBuf,
    pub logs_dir: PathBuf,
}

impl GamePaths {
    /// Standard layout under one data directory.
    pub fn in_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            words: data_dir.join(WORDS_FILE),
            score_file: data_dir.join(SCORE_FILE),
            logs_dir: data_dir.join(LOGS_DIR),
        }
    }

    /// Resolve paths from command-line options.
    ///
    /// Individual overrides win over `--data-dir`, which wins over `--user-data`.
    pub fn from_cli(cli: &Cli) -> Self {
        let base = match (&cli.data_dir, cli.user_data) {
            (Some(dir), _) => dir.clone(),
            (None, true) => user_data_dir().unwrap_or_else(|| {
                log::warn!("No per-user data directory on this platform; using '{DEFAULT_DATA_DIR}'");
                PathBuf::from(DEFAULT_DATA_DIR)
            }),
            (None, false) => PathBuf::from(DEFAULT_DATA_DIR),
        };

        let mut paths = Self::in_dir(base);
        if let Some(words) = &cli.words {
            paths.words.clone_from(words);
        }
        if let Some(score_file) = &cli.score_file {
            paths.score_file.clone_from(score_file);
        }
        if let Some(logs_dir) = &cli.logs_dir {
            paths.logs_dir.clone_from(logs_dir);
        }
        crate::debug_log!("Resolved game paths: {:?}", paths);
        paths
    }
}

impl Default for GamePaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

pub fn user_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME))
}
