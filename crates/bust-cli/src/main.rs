//! Terminal frontend for the Bust dice game.

use std::io;
use std::process;

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

use bust_game::{GameError, Session, SessionConfig};

const BANNER_BODY: &str = "    ----------------------------
        
    The game is simple.
\tThere are 5 rounds.
    A random number is chosen between 2 and 10.
    The number is added to your score.
    You will be given the number.
    
    You can choose to 'continue' or 'stop' the game at any point.
    If you choose to 'continue', a new number will be chosen and added to your score.
    If you choose to 'stop', the game will end and the sum of the numbers you continued with will be your score.
    
    DO NOT let your score in the round exceed 25! A score of more then 25 will cause you to lose the game.
    
    Understand? Great! Let's begin....
    ";

#[derive(Parser)]
#[command(
    name = "bust",
    about = "Bust: a push-your-luck dice game. Bank your points before you go over 25.",
    version
)]
struct Cli {
    /// RNG seed for a reproducible sequence of draws
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let mut config = SessionConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    print_banner();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = Session::from_config(&config, stdin.lock(), stdout.lock()).run();

    if let Err(e) = result {
        report_fatal(&e);
        process::exit(1);
    }
}

fn print_banner() {
    println!("\n        {}\n{BANNER_BODY}", "Welcome to The Game!".bold());
}

/// Input failures are reported to the player on stdout; anything else means
/// stdout itself is gone, so fall back to stderr.
fn report_fatal(e: &GameError) {
    if e.is_input_failure() {
        println!(
            "{} {e}\n\nClosing the application gracefully. Sorry for the inconvenience :(",
            "Something went wrong:".yellow()
        );
    } else {
        eprintln!("error: {e}");
    }
}
