//! Interactive terminal front end.
//!
//! Owns everything the core does not: board rendering (enemy ships
//! masked), fleet panels, coordinate parsing, the computer's "thinking"
//! pause, and end-of-game messaging. The core is driven one call at a
//! time and its structured results are turned into output here.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::{
    Board, Game, GameError, Orientation, Outcome, Phase, ShotReport, ShotResult, GRID_SIZE,
};

/// Column letter + row number, e.g. (4, 0) -> "A5".
fn coord_to_string(row: usize, col: usize) -> String {
    let col = (b'A' + col as u8) as char;
    format!("{}{}", col, row + 1)
}

/// Parse "A5"-style input into (row, col). No bounds check; the core
/// rejects off-grid coordinates.
fn parse_coord(input: &str) -> Option<(usize, usize)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().trim().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt(text: &str) -> io::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    read_line()
}

fn print_grid(board: &Board, reveal: bool) {
    print!("   ");
    for c in 0..GRID_SIZE {
        print!(" {}", (b'A' + c as u8) as char);
    }
    println!();
    for r in 0..GRID_SIZE {
        print!("{:2} ", r + 1);
        for c in 0..GRID_SIZE {
            let ch = if board.hits().get(r, c).unwrap_or(false) {
                'X'
            } else if board.misses().get(r, c).unwrap_or(false) {
                'o'
            } else if reveal && board.ship_map().get(r, c).unwrap_or(false) {
                'S'
            } else {
                '.'
            };
            print!(" {}", ch);
        }
        println!();
    }
}

fn print_fleet(board: &Board) {
    for status in board.ship_statuses().into_iter().flatten() {
        if status.sunk {
            println!("  {} {:<12} sunk", status.icon, status.name);
        } else {
            println!(
                "  {} {:<12} {} hp",
                status.icon,
                status.name,
                status.length - status.hits
            );
        }
    }
}

/// Enemy waters (masked) on top, the player's own grid below.
fn print_player_view(game: &Game) {
    println!("\nEnemy waters:");
    print_grid(game.enemy_board(), false);
    print_fleet(game.enemy_board());
    println!("\nYour waters:");
    print_grid(game.player_board(), true);
    print_fleet(game.player_board());
}

fn announce_player_shot(report: &ShotReport) {
    let at = coord_to_string(report.row, report.col);
    match report.result {
        ShotResult::Sunk(name) => println!("🎯 You sank {}!", name),
        ShotResult::Hit(_) => println!("🎯 Hit at {}!", at),
        ShotResult::Miss => println!("💦 Miss at {}.", at),
    }
}

fn announce_enemy_shot(report: &ShotReport) {
    let at = coord_to_string(report.row, report.col);
    match report.result {
        ShotResult::Sunk(name) => println!("💥 Computer sank your {}!", name),
        ShotResult::Hit(_) => println!("💥 Computer hit at {}!", at),
        ShotResult::Miss => println!("🌊 Computer missed at {}.", at),
    }
}

fn announce_outcome(outcome: Outcome) {
    match outcome {
        Outcome::PlayerWon => {
            println!("\nYou Win! 🎉");
            println!("All enemy ships have been sunk.");
        }
        Outcome::PlayerLost => {
            println!("\nYou Lose 💀");
            println!("Your fleet has been destroyed.");
        }
    }
}

fn manual_placement<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) -> anyhow::Result<()> {
    println!("Place your ships (e.g. A5 H). Press enter for random placement.");
    while let Some(spec) = game.next_ship_to_place() {
        print_grid(game.player_board(), true);
        let line = prompt(&format!(
            "Place {} {} (length {}): ",
            spec.icon(),
            spec.name(),
            spec.length()
        ))?;
        if line.is_empty() {
            game.auto_place_next(rng)?;
            println!("✅ {} placed!", spec.name());
            continue;
        }
        let mut parts = line.split_whitespace();
        let coord = parts.next().and_then(parse_coord);
        let orientation = match parts.next().map(|p| p.to_ascii_uppercase()) {
            Some(ref p) if p.starts_with('V') => Orientation::Vertical,
            _ => Orientation::Horizontal,
        };
        let Some((row, col)) = coord else {
            println!("Invalid input");
            continue;
        };
        match game.place_player_ship(row, col, orientation) {
            Ok(()) => println!("✅ {} placed!", spec.name()),
            Err(GameError::ShipOutOfBounds | GameError::ShipOverlaps | GameError::Cell(_)) => {
                println!("❌ Can't place {} there.", spec.name())
            }
            Err(e) => return Err(e.into()),
        }
    }
    println!("✅ All ships placed! Battle begins!");
    Ok(())
}

fn prompt_shot() -> io::Result<(usize, usize)> {
    loop {
        let line = prompt("Enter target: ")?;
        if let Some(coord) = parse_coord(&line) {
            return Ok(coord);
        }
        println!("Invalid coordinate");
    }
}

/// Play one full game on the terminal.
pub fn run_session<R: Rng + ?Sized>(
    rng: &mut R,
    manual: bool,
    delay: Duration,
) -> anyhow::Result<()> {
    let mut game = Game::new(rng)?;
    info!(
        "game started, {} placement",
        if manual { "manual" } else { "random" }
    );

    if manual {
        manual_placement(&mut game, rng)?;
    } else {
        game.auto_place_player(rng)?;
        println!("Ships placed randomly. Ready to fire!");
    }

    loop {
        match game.phase() {
            Phase::PlayerTurn => {
                print_player_view(&game);
                let (row, col) = prompt_shot()?;
                match game.player_fire(row, col) {
                    Ok(Some(report)) => announce_player_shot(&report),
                    Ok(None) => println!("You already fired at {}.", coord_to_string(row, col)),
                    Err(GameError::Cell(_)) => println!("That square is off the grid."),
                    Err(e) => return Err(e.into()),
                }
            }
            Phase::EnemyTurn => {
                println!("💭 Computer thinking...");
                thread::sleep(delay);
                let report = game.enemy_fire(rng)?;
                debug!(
                    "computer fired at {} ({})",
                    coord_to_string(report.row, report.col),
                    if game.gunner().has_lead() {
                        "targeting"
                    } else {
                        "hunting"
                    }
                );
                announce_enemy_shot(&report);
            }
            Phase::Over(outcome) => {
                print_player_view(&game);
                announce_outcome(outcome);
                info!("game over: {:?}", outcome);
                return Ok(());
            }
            Phase::Placement => unreachable!("placement finished before the battle loop"),
        }
    }
}
