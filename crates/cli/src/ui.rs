//! Interactive prompt loop.

use anyhow::Context;
use num_format::{Locale, ToFormattedString};
use othello_core::disc::Disc;
use othello_core::game_state::PlayerKind;
use othello_core::level;
use othello_core::search::Search;
use othello_core::search::options::SearchOptions;
use othello_core::search::search_result::SearchResult;
use othello_core::square::Square;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::game::GameState;

const HELP: &str = "\
Commands:
  <square>               play a move, e.g. d3
  play <moves>           play a sequence of moves, e.g. d3c5f6
  go                     let the computer move for the side to move
  hint                   show the computer's choice without playing it
  undo | u               take back moves until a human is to move
  new | n                start a new game
  level | l <0-7>        set the difficulty (search depth = level + 3)
  mode | m <black> <white>
                         set who plays each color (human or computer)
  quit | q               exit";

/// Main prompt loop.
///
/// Computer-controlled sides move automatically; everything else is driven by
/// the commands listed in [`HELP`].
///
/// # Arguments
/// * `options` - Initial search options
/// * `initial_level` - Initial difficulty level
/// * `players` - Who controls Black and White, in that order
pub fn ui_loop(
    options: &SearchOptions,
    initial_level: usize,
    players: [PlayerKind; 2],
) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new().context("failed to initialize line editor")?;
    let mut game = GameState::new();
    let mut search = Search::new(options);
    let mut level = initial_level;
    let mut players = players;

    println!("{HELP}\n");

    loop {
        game.print(search.evaluator());
        println!();

        let side = game.core().side_to_move();
        if !game.core().is_game_over() && player_of(&players, side) == PlayerKind::Computer {
            computer_move(&mut game, &search);
            continue;
        }

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        };
        let _ = rl.add_history_entry(&line);

        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        println!();

        match cmd {
            "new" | "n" => {
                game = GameState::new();
            }
            "undo" | "u" => {
                if !undo_to_human(&mut game, &players) {
                    println!("Cannot undo.\n");
                }
            }
            "level" | "l" => match parts.next().map(str::parse::<usize>) {
                Some(Ok(lv)) => match level::search_depth(lv) {
                    Ok(depth) => {
                        level = lv;
                        search.set_depth(depth);
                        println!("Level changed to {level} (depth {depth}).\n");
                    }
                    Err(e) => println!("{e}\n"),
                },
                Some(Err(_)) => println!("Invalid level. Please specify a value between 0-7.\n"),
                None => println!("Current level: {level} (depth {})\n", search.depth()),
            },
            "mode" | "m" => match (parts.next(), parts.next()) {
                (Some(black), Some(white)) => {
                    match (black.parse::<PlayerKind>(), white.parse::<PlayerKind>()) {
                        (Ok(black), Ok(white)) => {
                            players = [black, white];
                            println!("Black: {black}, White: {white}\n");
                        }
                        (Err(e), _) | (_, Err(e)) => println!("{e}\n"),
                    }
                }
                _ => println!(
                    "Black: {}, White: {}\nUsage: mode <black> <white>\n",
                    players[0], players[1]
                ),
            },
            "go" => {
                if game.core().is_game_over() {
                    println!("The game is over.\n");
                } else {
                    computer_move(&mut game, &search);
                }
            }
            "hint" => {
                let result = search.run(game.core().board(), side);
                print_result(&result);
            }
            "play" => {
                if let Some(moves_str) = parts.next() {
                    for chunk in moves_str.as_bytes().chunks(2) {
                        let text = String::from_utf8_lossy(chunk);
                        let played = text
                            .parse::<Square>()
                            .map_err(|e| e.to_string())
                            .and_then(|sq| game.make_move(sq).map_err(|e| e.to_string()));
                        if let Err(e) = played {
                            println!("Stopped at {text}: {e}\n");
                            break;
                        }
                    }
                }
            }
            "help" | "h" | "?" => println!("{HELP}\n"),
            "quit" | "q" => break,
            _ => match cmd.parse::<Square>() {
                Ok(sq) => {
                    if let Err(e) = game.make_move(sq) {
                        println!("{e}\n");
                    }
                }
                Err(_) => println!("Unknown command: {cmd}\n"),
            },
        }
    }

    Ok(())
}

fn player_of(players: &[PlayerKind; 2], side: Disc) -> PlayerKind {
    match side {
        Disc::White => players[1],
        _ => players[0],
    }
}

/// Takes back the last move, then keeps going while a computer would move
/// next, so the computer does not replay its answer straight away.
fn undo_to_human(game: &mut GameState, players: &[PlayerKind; 2]) -> bool {
    if !game.undo() {
        return false;
    }
    while player_of(players, game.core().side_to_move()) == PlayerKind::Computer && game.undo() {}
    true
}

fn computer_move(game: &mut GameState, search: &Search) {
    let side = game.core().side_to_move();
    let result = search.run(game.core().board(), side);
    print_result(&result);

    match game.apply_search_result(&result) {
        Ok(()) => match result.best_move {
            Some(mv) => println!("Computer ({side}) plays {mv}\n"),
            None => println!("Computer ({side}) passes\n"),
        },
        Err(e) => println!("{e}\n"),
    }
}

fn print_result(result: &SearchResult) {
    let best = result
        .best_move
        .map_or_else(|| "pass".to_string(), |mv| mv.to_string());
    println!("depth | score | nodes | move");
    println!("----------------------------");
    println!(
        "{} | {} | {} | {}\n",
        result.depth,
        result.score,
        result.n_nodes.to_formatted_string(&Locale::en),
        best
    );
}
