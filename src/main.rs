use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use minichess::board::{Color, MoveRecord};
use minichess::notation::parse_move;
use minichess::{Game, GameConfig};

/// Who controls each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    #[value(name = "pvp")]
    PlayerVsPlayer,
    #[value(name = "pvai")]
    PlayerVsAi,
    #[value(name = "aivai")]
    AiVsAi,
}

/// Side played by the engine in `pvai` mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

/// Play MiniChess on a 5x5 board.
#[derive(Debug, Parser)]
#[command(name = "minichess", version, about)]
struct Options {
    /// Who plays: two humans, human against the engine, or engine against itself
    #[arg(long, value_enum, default_value_t = Mode::PlayerVsPlayer)]
    mode: Mode,

    /// Side played by the engine in pvai mode
    #[arg(long = "ai", value_enum, default_value_t = Side::Black)]
    ai_color: Side,

    /// Thinking time per engine move, in seconds
    #[arg(long = "time", value_parser = parse_think_time, default_value = "5")]
    think_time: Duration,

    /// End the game as a draw after both sides made this many moves
    #[arg(long)]
    max_turns: Option<u32>,

    /// Journal file that committed moves are appended to
    #[arg(long, default_value = "gameTrace.txt")]
    trace: PathBuf,
}

fn parse_think_time(value: &str) -> Result<Duration, String> {
    let secs: f64 = value
        .parse()
        .map_err(|_| format!("invalid time '{value}'"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("time must be a positive number of seconds, got '{value}'"));
    }
    Ok(Duration::from_secs_f64(secs))
}

fn is_ai_turn(opts: &Options, side: Color) -> bool {
    match opts.mode {
        Mode::PlayerVsPlayer => false,
        Mode::PlayerVsAi => side == Color::from(opts.ai_color),
        Mode::AiVsAi => true,
    }
}

fn journal(trace: &mut File, record: &MoveRecord) -> io::Result<()> {
    println!("{record}");
    writeln!(trace, "{record}")
}

fn run(opts: &Options) -> io::Result<()> {
    let mut trace = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&opts.trace)?;
    let mut game = Game::new(GameConfig {
        max_turns: opts.max_turns,
    });
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to Mini Chess! Enter moves as 'B2 B3'. Type 'exit' to quit.");
    while !game.is_over() {
        println!("\n{}", game.board());
        let side = game.side_to_move();

        if is_ai_turn(opts, side) {
            match game.play_ai_turn(opts.think_time) {
                Ok(Some(record)) => journal(&mut trace, &record)?,
                Ok(None) => println!("{side} has no legal moves."),
                Err(e) => println!("{e}"),
            }
            continue;
        }

        print!("{side} to move: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            println!("\nGame exited.");
            return Ok(());
        };
        let line = line?;
        if line.trim().eq_ignore_ascii_case("exit") {
            println!("Game exited.");
            return Ok(());
        }

        let result = parse_move(&line)
            .map_err(|e| e.to_string())
            .and_then(|mv| game.commit(mv).map(|r| *r).map_err(|e| e.to_string()));
        match result {
            Ok(record) => journal(&mut trace, &record)?,
            Err(e) => println!("{e}. Try again."),
        }
    }

    println!("\n{}", game.board());
    println!("Game over: {}", game.outcome());
    writeln!(trace, "Game over: {}", game.outcome())?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let opts = Options::parse();
    if let Err(e) = run(&opts) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
