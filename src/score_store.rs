use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Line prefix of the score file: `COUNTRY=<attempts>`.
pub const SCORE_PREFIX: &str = "COUNTRY=";

/// Best (lowest) attempt count, cached in memory and persisted to a one-line file.
#[derive(Debug)]
pub struct ScoreStore {
    path: PathBuf,
    best: Option<u32>,
}

impl ScoreStore {
    /// Create the file (and its parent directory) if absent, then load the record.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !path.exists() {
            fs::File::create(&path)?;
            crate::info_log!("Created empty score file {}", path.display());
        }
        let bytes = fs::read(&path)?;
        let best = std::str::from_utf8(&bytes).ok().and_then(parse_score);
        crate::debug_log!("Loaded best score {:?} from {}", best, path.display());
        Ok(Self { path, best })
    }

    pub fn current_best(&self) -> Option<u32> {
        self.best
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record `attempts` if it beats the current best. Returns whether a record was written.
    pub fn update(&mut self, attempts: u32) -> io::Result<bool> {
        if self.best.is_some_and(|best| attempts >= best) {
            return Ok(false);
        }
        fs::write(&self.path, format_score(attempts))?;
        self.best = Some(attempts);
        crate::info_log!("New best score {} written to {}", attempts, self.path.display());
        Ok(true)
    }
}

/// Anything other than `COUNTRY=<non-negative integer>` reads as no record.
pub fn parse_score(content: &str) -> Option<u32> {
    content
        .trim()
        .strip_prefix(SCORE_PREFIX)
        .and_then(|value| value.trim().parse().ok())
}

pub fn format_score(attempts: u32) -> String {
    format!("{SCORE_PREFIX}{attempts}")
}
