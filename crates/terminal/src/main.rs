//! Terminal front end
//!
//! Reads one command per line from stdin and redraws the board after each.
//! Rows and columns are 0-based, row 0 at the top (black's back rank).

mod render;

use chess_game::{GameConfig, GameState, TurnStatus};
use render::Renderer;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn print_usage(out: &mut impl Write) {
    writeln!(out, "Commands:").ok();
    writeln!(out, "  new            start a new game").ok();
    writeln!(out, "  select R C     select your piece at row R, column C").ok();
    writeln!(out, "  move R C       move the selected piece to R C").ok();
    writeln!(out, "  click R C      select or move, like clicking the square").ok();
    writeln!(out, "  undo           take back the last move").ok();
    writeln!(out, "  hint           show a suggested move").ok();
    writeln!(out, "  show           redraw the board").ok();
    writeln!(out, "  json           print the game state as JSON").ok();
    writeln!(out, "  rotate         flip the board display").ok();
    writeln!(out, "  quit").ok();
}

fn parse_coords(args: &[&str]) -> Option<(i8, i8)> {
    match args {
        [r, c] => Some((r.parse().ok()?, c.parse().ok()?)),
        _ => None,
    }
}

fn load_config() -> GameConfig {
    match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&path).unwrap_or_else(|e| {
            error!("{e}");
            warn!("using default config");
            GameConfig::default()
        }),
        None => GameConfig::default(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut game = GameState::new(load_config());
    let mut renderer = Renderer::default();
    let mut last_tick = Instant::now();

    writeln!(
        stdout,
        "You play white against {}. Type 'help' for commands.",
        game.opponent_name()
    )
    .ok();
    renderer.draw(&mut stdout, &game);
    write!(stdout, "> ").ok();
    stdout.flush().ok();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        // Catch up on hint timeouts that expired while waiting for input
        game.advance(last_tick.elapsed());
        last_tick = Instant::now();

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            write!(stdout, "> ").ok();
            stdout.flush().ok();
            continue;
        }

        match parts[0] {
            "new" => game.new_game(),
            "select" | "move" | "click" => match parse_coords(&parts[1..]) {
                Some((r, c)) => {
                    let ok = match parts[0] {
                        "select" => game.select_piece_at(r, c),
                        "move" => game.attempt_move(r, c),
                        _ => game.click(r, c),
                    };
                    if !ok {
                        writeln!(stdout, "nothing to do at {r} {c}").ok();
                    }
                }
                None => {
                    writeln!(stdout, "expected: {} ROW COL", parts[0]).ok();
                }
            },
            "undo" => {
                if !game.undo() {
                    writeln!(stdout, "nothing to undo").ok();
                }
            }
            "hint" => match game.hint() {
                Some(mv) => {
                    writeln!(stdout, "try {mv}").ok();
                }
                None => {
                    writeln!(stdout, "no hint available").ok();
                }
            },
            "show" => {}
            "json" => match game.view().to_json() {
                Ok(json) => {
                    writeln!(stdout, "{json}").ok();
                }
                Err(e) => error!("failed to serialize view: {e}"),
            },
            "rotate" => renderer.rotate(),
            "help" => print_usage(&mut stdout),
            "quit" => break,
            other => {
                writeln!(stdout, "unknown command: {other}").ok();
                print_usage(&mut stdout);
            }
        }

        renderer.draw(&mut stdout, &game);

        // Show the player's move, then let the opponent think
        while game.status() == TurnStatus::OpponentTurn {
            let Some(wait) = game.time_until_next_task() else {
                break;
            };
            stdout.flush().ok();
            std::thread::sleep(wait);
            game.advance(last_tick.elapsed());
            last_tick = Instant::now();
            renderer.draw(&mut stdout, &game);
        }

        write!(stdout, "> ").ok();
        stdout.flush().ok();
    }
}
