use anyhow::Result;
use lucky_vault::cli::{CliInterface, parse_cli};
use lucky_vault::{GamePaths, logging, run_game};

fn main() -> Result<()> {
    let cli = parse_cli();
    logging::init();

    let paths = GamePaths::from_cli(&cli);
    let mut interface = CliInterface::stdio();
    run_game(&paths, &mut interface, &mut rand::rng())?;
    Ok(())
}
