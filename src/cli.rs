use crate::feedback::QUIT_TOKEN;
use crate::game_state::{GameInterface, SessionIntro};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Lucky Vault: guess the secret country
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding countries.txt, highscore.txt and logs/ [default: data]
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Keep game data in the per-user data directory
    #[arg(long = "user-data")]
    pub user_data: bool,

    /// Newline-delimited word list
    #[arg(long = "words")]
    pub words: Option<PathBuf>,

    /// Best-score file
    #[arg(long = "score-file")]
    pub score_file: Option<PathBuf>,

    /// Directory for per-session logs
    #[arg(long = "logs-dir")]
    pub logs_dir: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub const PROMPT: &str = "Your guess: ";

/// Console implementation of `GameInterface` over any line reader and writer.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl CliInterface<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_guess(&mut self) -> io::Result<Option<String>> {
        write!(self.writer, "{PROMPT}")?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    fn display_intro(&mut self, intro: &SessionIntro) -> io::Result<()> {
        writeln!(self.writer, "LUCKY VAULT - COUNTRY MODE. Type {QUIT_TOKEN} to exit.")?;
        writeln!(self.writer, "Secret word length: {}", intro.secret_length)?;
        match intro.best {
            Some(best) => writeln!(self.writer, "Current best: {best} attempts"),
            None => writeln!(self.writer, "Current best: -"),
        }
    }

    fn display_no_words(&mut self) -> io::Result<()> {
        writeln!(self.writer, "No countries found")
    }

    fn display_empty_guess(&mut self) -> io::Result<()> {
        writeln!(self.writer, "Empty guess. Try again.")
    }

    fn display_farewell(&mut self) -> io::Result<()> {
        writeln!(self.writer, "Bye.")
    }

    fn display_wrong_length(&mut self, length: usize, required: usize) -> io::Result<()> {
        writeln!(self.writer, "Wrong length ({length}). Need {required}.")
    }

    fn display_miss(&mut self, matches: usize) -> io::Result<()> {
        writeln!(self.writer, "Not it. {matches} letter(s) correct (right position).")
    }

    fn display_correct(&mut self, attempts: u32, secret: &str) -> io::Result<()> {
        writeln!(self.writer, "Correct in {attempts} attempts! Word was: {secret}")
    }

    fn display_new_best(&mut self) -> io::Result<()> {
        writeln!(self.writer, "NEW BEST for COUNTRY mode!")
    }

    fn display_input_closed(&mut self) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Input closed. Bye.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Cursor;

    fn interface(input: &str) -> CliInterface<Cursor<&str>, Vec<u8>> {
        CliInterface::new(Cursor::new(input), Vec::new())
    }

    fn output(ui: CliInterface<Cursor<&str>, Vec<u8>>) -> String {
        String::from_utf8(ui.into_writer()).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cli_no_args() {
        let cli = Cli::try_parse_from(["lucky-vault"]).unwrap();
        assert_eq!(cli.data_dir, None);
        assert!(!cli.user_data);
        assert_eq!(cli.words, None);
    }

    #[test]
    fn test_parse_cli_with_paths() {
        let cli = Cli::try_parse_from([
            "lucky-vault",
            "-d",
            "/srv/vault",
            "--words",
            "asia.txt",
            "--score-file",
            "best.txt",
            "--logs-dir",
            "logs",
            "--user-data",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/vault")));
        assert_eq!(cli.words, Some(PathBuf::from("asia.txt")));
        assert_eq!(cli.score_file, Some(PathBuf::from("best.txt")));
        assert_eq!(cli.logs_dir, Some(PathBuf::from("logs")));
        assert!(cli.user_data);
    }

    #[test]
    fn test_read_guess_trims_and_prompts() {
        let mut ui = interface("  Canada \n");
        assert_eq!(ui.read_guess().unwrap(), Some("Canada".to_string()));
        assert_eq!(output(ui), "Your guess: ");
    }

    #[test]
    fn test_read_guess_blank_line_is_some_empty() {
        let mut ui = interface("\n");
        assert_eq!(ui.read_guess().unwrap(), Some(String::new()));
    }

    #[test]
    fn test_read_guess_eof() {
        let mut ui = interface("");
        assert_eq!(ui.read_guess().unwrap(), None);
    }

    #[test]
    fn test_read_guess_last_line_without_newline() {
        let mut ui = interface("Peru");
        assert_eq!(ui.read_guess().unwrap(), Some("Peru".to_string()));
        assert_eq!(ui.read_guess().unwrap(), None);
    }

    #[test]
    fn test_intro_without_record() {
        let mut ui = interface("");
        ui.display_intro(&SessionIntro {
            secret_length: 6,
            best: None,
        })
        .unwrap();
        assert_eq!(
            output(ui),
            "LUCKY VAULT - COUNTRY MODE. Type QUIT to exit.\nSecret word length: 6\nCurrent best: -\n"
        );
    }

    #[test]
    fn test_intro_with_record() {
        let mut ui = interface("");
        ui.display_intro(&SessionIntro {
            secret_length: 4,
            best: Some(3),
        })
        .unwrap();
        assert!(output(ui).ends_with("Current best: 3 attempts\n"));
    }

    #[test]
    fn test_feedback_messages() {
        let mut ui = interface("");
        ui.display_wrong_length(4, 6).unwrap();
        ui.display_miss(2).unwrap();
        ui.display_correct(3, "Canada").unwrap();
        ui.display_new_best().unwrap();
        assert_eq!(
            output(ui),
            "Wrong length (4). Need 6.\n\
             Not it. 2 letter(s) correct (right position).\n\
             Correct in 3 attempts! Word was: Canada\n\
             NEW BEST for COUNTRY mode!\n"
        );
    }
}
