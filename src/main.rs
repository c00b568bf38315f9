//! Terminal front end for the Gomoku engine.
//!
//! All game rules live in the library; this binary only reads prompts,
//! renders the grid, and relays moves into the session.

use std::io::{self, BufRead, Write};

use gomoku_core::{
    Difficulty, GameResult, GameSession, Player, Pos, Scoreboard, DEFAULT_BOARD_SIZE,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut score = Scoreboard::new();
    let mut starter = Player::Black;

    while prompt_yes_no(&mut input, "Start a game? (y/n): ") {
        let difficulty = if prompt_yes_no(&mut input, "Play against the bot? (y/n): ") {
            Some(prompt_difficulty(&mut input))
        } else {
            None
        };
        let mut session = prompt_session(&mut input, difficulty, starter);

        let result = run_game(&mut input, &mut session);
        score.record(result);

        // Alternate who opens the next game.
        starter = starter.opponent();
        print_score(&score);
    }

    print_score(&score);
}

/// Drive one game to completion and return its result.
fn run_game(input: &mut impl BufRead, session: &mut GameSession) -> GameResult {
    loop {
        println!();
        render(session);

        let result = if session.is_bot_turn() {
            println!("Bot ({}) is thinking...", symbol(session.to_move()));
            session.play_bot().expect("bot turn was checked")
        } else {
            println!("Player {} to move", symbol(session.to_move()));
            let pos = prompt_move(input, session.board().size());
            match session.play(pos) {
                Ok(result) => result,
                Err(err) => {
                    println!("Invalid move: {err}. Try again.");
                    continue;
                }
            }
        };

        if result.is_over() {
            println!();
            render(session);
            match result {
                GameResult::Win(player) => println!("Player {} wins!", symbol(player)),
                GameResult::Draw => println!("Game is a draw"),
                GameResult::InProgress => unreachable!("loop exits only on terminal results"),
            }
            return result;
        }
    }
}

/// Map a player to its display symbol. Rendering concern only; the core
/// never sees these characters.
fn symbol(player: Player) -> char {
    match player {
        Player::Black => 'X',
        Player::White => 'O',
    }
}

fn render(session: &GameSession) {
    let size = session.board().size();
    print!("   ");
    for col in 0..size {
        print!("{col:3}");
    }
    println!();

    for (row, cells) in session.board().rows().enumerate() {
        print!("{row:3}");
        for cell in cells {
            let ch = match cell {
                Some(player) => symbol(*player),
                None => '.',
            };
            print!("  {ch}");
        }
        println!();
    }
}

fn print_score(score: &Scoreboard) {
    println!(
        "\nScore - X: {}, O: {}, Draws: {}",
        score.wins(Player::Black),
        score.wins(Player::White),
        score.draws()
    );
}

/// Read a trimmed line, or `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn prompt(input: &mut impl BufRead, text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();
    read_line(input)
}

/// Yes/no prompt; end of input counts as "no".
fn prompt_yes_no(input: &mut impl BufRead, text: &str) -> bool {
    match prompt(input, text) {
        Some(answer) => answer.eq_ignore_ascii_case("y"),
        None => false,
    }
}

fn prompt_difficulty(input: &mut impl BufRead) -> Difficulty {
    println!("Choose difficulty:");
    println!("1. Easy");
    println!("2. Medium");
    println!("3. Hard");
    loop {
        match prompt(input, "Enter a difficulty (1-3): ").as_deref() {
            Some("1") => return Difficulty::Easy,
            Some("2") => return Difficulty::Medium,
            Some("3") => return Difficulty::Hard,
            Some(_) => println!("Invalid choice, try again"),
            None => return Difficulty::Medium,
        }
    }
}

/// Ask for a board size until the session accepts one. The human always
/// plays X (Black); who opens alternates across a series.
fn prompt_session(
    input: &mut impl BufRead,
    difficulty: Option<Difficulty>,
    starter: Player,
) -> GameSession {
    loop {
        let text = format!("Enter a board size (default {DEFAULT_BOARD_SIZE}): ");
        let size = match prompt(input, &text).as_deref() {
            Some("") | None => DEFAULT_BOARD_SIZE,
            Some(answer) => match answer.parse::<usize>() {
                Ok(size) => size,
                Err(_) => {
                    println!("Please enter a number.");
                    continue;
                }
            },
        };

        let session = match difficulty {
            Some(difficulty) => {
                GameSession::human_vs_bot(size, difficulty, Player::Black, starter)
            }
            None => GameSession::new(
                size,
                gomoku_core::Seat::Human,
                gomoku_core::Seat::Human,
                starter,
            ),
        };
        match session {
            Ok(session) => return session,
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt_move(input: &mut impl BufRead, size: usize) -> Pos {
    let row = prompt_coordinate(input, "row", size);
    let col = prompt_coordinate(input, "col", size);
    Pos::new(row, col)
}

fn prompt_coordinate(input: &mut impl BufRead, name: &str, size: usize) -> usize {
    loop {
        let text = format!("Enter a {name} (0-{}): ", size - 1);
        match prompt(input, &text) {
            Some(answer) => match answer.parse::<usize>() {
                Ok(value) => return value,
                Err(_) => println!("Please enter integers only"),
            },
            // Out of input mid-game: nothing sensible left to do.
            None => std::process::exit(0),
        }
    }
}
