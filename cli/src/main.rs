//! # 2048 CLI
//!
//! Command-line front end for the 2048 rule engine: play interactively in the
//! terminal, or run headless simulations with a simple move policy.

use std::collections::BTreeMap;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tile2048_core::{Direction, Game};

#[derive(Parser, Debug)]
#[command(name = "tile2048")]
#[command(author, version, about = "Play 2048 in the terminal or run simulations")]
struct Args {
    /// Number of episodes to run in headless mode (interactive if omitted)
    #[arg(short, long)]
    episodes: Option<u32>,

    /// Random seed for deterministic runs
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Maximum steps per episode (0 = unlimited)
    #[arg(short, long, default_value = "10000")]
    max_steps: u32,

    /// Policy for headless mode
    #[arg(short, long, value_enum, default_value = "random")]
    policy: Policy,

    /// Show board after each move in headless mode
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    /// Random legal moves
    Random,
    /// Cycle through moves: Left, Down, Right, Up
    Cycle,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match args.episodes {
        Some(episodes) => run_headless(&args, episodes),
        None => run_interactive(&args),
    }
}

const BANNER: &str = "=== 2048 ===\nControls: WASD or Arrow Keys | Q to quit | R to restart\n";

fn redraw(game: &Game) -> Result<()> {
    println!("\x1b[2J\x1b[H"); // Clear screen
    println!("{}", BANNER);
    print_game(game)
}

/// Interactive mode: the user plays with the keyboard.
fn run_interactive(args: &Args) -> Result<()> {
    let _raw = RawMode::enable();

    let mut game = Game::new(args.seed);
    let mut stdin = io::stdin();
    let mut buffer = [0u8; 3];

    redraw(&game)?;

    loop {
        let bytes_read = stdin.read(&mut buffer).context("reading stdin")?;
        if bytes_read == 0 {
            // EOF
            return Ok(());
        }

        match parse_input(&buffer[..bytes_read]) {
            InputAction::Move(dir) => {
                if game.is_done() {
                    continue;
                }
                let result = game.step(dir);
                debug!("{} -> {:?}", dir, result);
                redraw(&game)?;

                if result.reward > 0 {
                    println!("  +{} points!", result.reward);
                }

                if game.is_done() {
                    println!("\n  *** GAME OVER ***");
                    println!("  Final Score: {}", game.score());
                    println!("  Max Tile: {}", game.max_tile());
                    println!("\n  Press R to restart or Q to quit");
                }
            }
            InputAction::Restart => {
                game.reset(args.seed);
                redraw(&game)?;
            }
            InputAction::Quit => {
                println!("\nGoodbye!");
                return Ok(());
            }
            InputAction::None => {}
        }
    }
}

/// Per-episode outcome of a headless run.
#[derive(Debug, Clone, Copy)]
struct Episode {
    score: u32,
    max_tile: u32,
    steps: u32,
}

/// Headless simulation mode.
fn run_headless(args: &Args, episodes: u32) -> Result<()> {
    anyhow::ensure!(episodes > 0, "--episodes must be at least 1");

    let mut action_rng = SmallRng::seed_from_u64(args.seed.wrapping_add(1000));
    let mut results = Vec::with_capacity(episodes as usize);

    for episode in 0..episodes {
        let mut game = Game::new(args.seed.wrapping_add(episode as u64));
        let mut steps = 0;
        let mut action_cycle = 0;

        while !game.is_done() && (args.max_steps == 0 || steps < args.max_steps) {
            let action = match args.policy {
                Policy::Random => select_random_action(&game, &mut action_rng),
                Policy::Cycle => select_cycle_action(&game, &mut action_cycle),
            };
            let Some(dir) = action else { break };

            game.step(dir);
            steps += 1;

            if args.verbose {
                println!("Episode {} Step {}: {}", episode + 1, steps, dir);
                print_game(&game)?;
            }
        }

        let outcome = Episode {
            score: game.score(),
            max_tile: game.max_tile(),
            steps,
        };
        info!("episode {} finished: {:?}", episode + 1, outcome);
        if args.verbose {
            println!(
                "Episode {}: Score={}, MaxTile={}, Steps={}",
                episode + 1,
                outcome.score,
                outcome.max_tile,
                outcome.steps
            );
        }
        results.push(outcome);
    }

    print_summary(args, &results);
    Ok(())
}

fn print_summary(args: &Args, results: &[Episode]) {
    let mut scores: Vec<u32> = results.iter().map(|e| e.score).collect();
    scores.sort_unstable();
    let n = scores.len();
    let total: u64 = scores.iter().map(|&s| s as u64).sum();
    let avg_score = total as f64 / n as f64;
    let median_score = if n % 2 == 0 {
        (scores[n / 2 - 1] as f64 + scores[n / 2] as f64) / 2.0
    } else {
        scores[n / 2] as f64
    };

    let mut tile_counts: BTreeMap<u32, u32> = BTreeMap::new();
    for e in results {
        *tile_counts.entry(e.max_tile).or_insert(0) += 1;
    }
    let max_tile_overall = tile_counts.keys().next_back().copied().unwrap_or(0);

    // Output results in parseable format
    println!("=== Simulation Results ===");
    println!("episodes={}", n);
    println!("policy={:?}", args.policy);
    println!("seed={}", args.seed);
    println!("max_steps={}", args.max_steps);
    println!("avg_score={:.2}", avg_score);
    println!("median_score={:.2}", median_score);
    println!("min_score={}", scores.first().unwrap_or(&0));
    println!("max_score={}", scores.last().unwrap_or(&0));
    println!("max_tile_overall={}", max_tile_overall);
    let distribution: Vec<String> = tile_counts
        .iter()
        .map(|(tile, count)| format!("{}:{}", tile, count))
        .collect();
    println!("tile_distribution={}", distribution.join(","));
}

/// Select a random legal move.
fn select_random_action(game: &Game, rng: &mut SmallRng) -> Option<Direction> {
    let legal = game.legal_actions();
    let valid: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|d| legal[d.index()])
        .collect();

    if valid.is_empty() {
        None
    } else {
        Some(valid[rng.gen_range(0..valid.len())])
    }
}

/// Select moves in a cycle: Left, Down, Right, Up, skipping illegal ones.
fn select_cycle_action(game: &Game, cycle: &mut usize) -> Option<Direction> {
    const ORDER: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];
    let legal = game.legal_actions();

    for _ in 0..ORDER.len() {
        let dir = ORDER[*cycle % ORDER.len()];
        *cycle += 1;
        if legal[dir.index()] {
            return Some(dir);
        }
    }

    None
}

#[derive(Debug, PartialEq, Eq)]
enum InputAction {
    Move(Direction),
    Restart,
    Quit,
    None,
}

fn parse_input(bytes: &[u8]) -> InputAction {
    match bytes {
        // Arrow keys (escape sequences)
        [27, 91, 65] => InputAction::Move(Direction::Up),
        [27, 91, 66] => InputAction::Move(Direction::Down),
        [27, 91, 67] => InputAction::Move(Direction::Right),
        [27, 91, 68] => InputAction::Move(Direction::Left),

        // WASD keys
        [b'w'] | [b'W'] => InputAction::Move(Direction::Up),
        [b's'] | [b'S'] => InputAction::Move(Direction::Down),
        [b'a'] | [b'A'] => InputAction::Move(Direction::Left),
        [b'd'] | [b'D'] => InputAction::Move(Direction::Right),

        // q, Q, Ctrl+C, Esc
        [b'q'] | [b'Q'] | [3] | [27] => InputAction::Quit,
        [b'r'] | [b'R'] => InputAction::Restart,

        _ => InputAction::None,
    }
}

fn print_game(game: &Game) -> Result<()> {
    print!("{}", game);
    io::stdout().flush().context("flushing stdout")
}

/// Puts the terminal into unbuffered, no-echo mode until dropped.
struct RawMode {
    #[cfg(unix)]
    saved: Option<libc::termios>,
}

#[cfg(unix)]
impl RawMode {
    fn enable() -> Self {
        use std::os::unix::io::AsRawFd;
        let fd = io::stdin().as_raw_fd();
        // SAFETY: termios is plain data and tcgetattr/tcsetattr only read or
        // write the struct we pass for a valid fd.
        unsafe {
            let mut termios: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(fd, &mut termios) != 0 {
                debug!("stdin is not a terminal, staying in line mode");
                return RawMode { saved: None };
            }
            let saved = termios;
            termios.c_lflag &= !(libc::ICANON | libc::ECHO);
            termios.c_cc[libc::VMIN] = 1;
            termios.c_cc[libc::VTIME] = 0;
            libc::tcsetattr(fd, libc::TCSANOW, &termios);
            RawMode { saved: Some(saved) }
        }
    }
}

#[cfg(unix)]
impl Drop for RawMode {
    fn drop(&mut self) {
        use std::os::unix::io::AsRawFd;
        if let Some(saved) = self.saved {
            // SAFETY: restores the settings captured in `enable`.
            unsafe {
                libc::tcsetattr(io::stdin().as_raw_fd(), libc::TCSANOW, &saved);
            }
        }
    }
}

#[cfg(not(unix))]
impl RawMode {
    // Without raw mode each key needs Enter.
    fn enable() -> Self {
        RawMode {}
    }
}
