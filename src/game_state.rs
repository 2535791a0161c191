use crate::config::GamePaths;
use crate::feedback::{QUIT_TOKEN, Turn, count_position_matches, is_quit, matches_secret, word_length};
use crate::score_store::ScoreStore;
use crate::session_log::SessionLog;
use crate::wordbank::load_words_from_file;
use crate::{debug_log, info_log};
use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Finished,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Won { attempts: u32, new_best: bool },
    Quit { attempts: u32 },
    InputClosed { attempts: u32 },
}

impl SessionOutcome {
    pub fn attempts(self) -> u32 {
        match self {
            SessionOutcome::Won { attempts, .. }
            | SessionOutcome::Quit { attempts }
            | SessionOutcome::InputClosed { attempts } => attempts,
        }
    }
}

/// What the player is told before the first guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIntro {
    pub secret_length: usize,
    pub best: Option<u32>,
}

/// Console (or test) front end for a session.
pub trait GameInterface {
    /// Next raw input line, or `None` once input is exhausted.
    fn read_guess(&mut self) -> io::Result<Option<String>>;
    fn display_intro(&mut self, intro: &SessionIntro) -> io::Result<()>;
    fn display_no_words(&mut self) -> io::Result<()>;
    fn display_empty_guess(&mut self) -> io::Result<()>;
    fn display_farewell(&mut self) -> io::Result<()>;
    fn display_wrong_length(&mut self, length: usize, required: usize) -> io::Result<()>;
    fn display_miss(&mut self, matches: usize) -> io::Result<()>;
    fn display_correct(&mut self, attempts: u32, secret: &str) -> io::Result<()>;
    fn display_new_best(&mut self) -> io::Result<()>;
    fn display_input_closed(&mut self) -> io::Result<()>;
}

/// One round against a fixed secret word.
#[derive(Debug, Clone)]
pub struct GuessSession {
    secret: String,
    attempts: u32,
    state: SessionState,
}

impl GuessSession {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            attempts: 0,
            state: SessionState::AwaitingInput,
        }
    }

    /// Pick the secret with one uniform draw; `None` for an empty word list.
    pub fn choose<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> Option<Self> {
        words.choose(rng).map(|secret| Self::new(secret.as_str()))
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn secret_length(&self) -> usize {
        word_length(&self.secret)
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Evaluate one input line. The attempt counter moves before the length check.
    ///
    /// A finished session ignores further input and reports `Turn::Empty`.
    pub fn evaluate(&mut self, input: &str) -> Turn {
        let input = input.trim();

        if self.is_finished() || input.is_empty() {
            return Turn::Empty;
        }
        if is_quit(input) {
            self.state = SessionState::Finished;
            return Turn::Quit;
        }

        self.attempts += 1;
        let length = word_length(input);
        let required = self.secret_length();
        if length != required {
            Turn::WrongLength { length, required }
        } else if matches_secret(input, &self.secret) {
            self.state = SessionState::Finished;
            Turn::Correct {
                attempts: self.attempts,
            }
        } else {
            Turn::Miss {
                matches: count_position_matches(input, &self.secret),
            }
        }
    }
}

/// Drive `session` until the player wins, quits, or input runs out.
pub fn play_session<I: GameInterface>(
    session: &mut GuessSession,
    ui: &mut I,
    store: &mut ScoreStore,
    log: &mut SessionLog,
) -> io::Result<SessionOutcome> {
    loop {
        let Some(line) = ui.read_guess()? else {
            info_log!("Input closed after {} attempts", session.attempts());
            ui.display_input_closed()?;
            return Ok(SessionOutcome::InputClosed {
                attempts: session.attempts(),
            });
        };
        let input = line.trim();
        let turn = session.evaluate(input);
        debug_log!("guess {:?} -> {:?}", input, turn);

        if let Some(outcome) = turn.outcome_label() {
            let logged_guess = if turn == Turn::Quit { QUIT_TOKEN } else { input };
            log.append(logged_guess, &outcome.to_string())?;
        }

        match turn {
            Turn::Empty => ui.display_empty_guess()?,
            Turn::Quit => {
                ui.display_farewell()?;
                return Ok(SessionOutcome::Quit {
                    attempts: session.attempts(),
                });
            }
            Turn::WrongLength { length, required } => ui.display_wrong_length(length, required)?,
            Turn::Miss { matches } => ui.display_miss(matches)?,
            Turn::Correct { attempts } => {
                ui.display_correct(attempts, session.secret())?;
                let new_best = store.update(attempts)?;
                if new_best {
                    ui.display_new_best()?;
                }
                return Ok(SessionOutcome::Won { attempts, new_best });
            }
        }
    }
}

/// Load the word list, open the score file and session log, and play one session.
///
/// Returns `Ok(None)` when there are no words to play with; nothing is created in that case.
pub fn run_game<I: GameInterface, R: Rng + ?Sized>(
    paths: &GamePaths,
    ui: &mut I,
    rng: &mut R,
) -> Result<Option<SessionOutcome>> {
    let words = load_words_from_file(&paths.words);
    let Some(mut session) = GuessSession::choose(&words, rng) else {
        ui.display_no_words()?;
        return Ok(None);
    };

    let mut store = ScoreStore::open(&paths.score_file)
        .with_context(|| format!("failed to open score file '{}'", paths.score_file.display()))?;
    let mut log = SessionLog::create(&paths.logs_dir).with_context(|| {
        format!("failed to create session log in '{}'", paths.logs_dir.display())
    })?;

    debug_log!("Secret word is {}", session.secret());
    ui.display_intro(&SessionIntro {
        secret_length: session.secret_length(),
        best: store.current_best(),
    })?;

    let outcome = play_session(&mut session, ui, &mut store, &mut log)
        .with_context(|| format!("session aborted; log at '{}'", log.path().display()))?;
    let log_path = log.path().to_path_buf();
    log.close()
        .with_context(|| format!("failed to close session log '{}'", log_path.display()))?;

    info_log!("Session finished: {:?}", outcome);
    Ok(Some(outcome))
}
