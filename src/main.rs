use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use sonar::{
    coord_to_string, init_logging, parse_coord, print_probability_board, print_status_board,
    Board, CellStatus, HiddenFleet, Mode, ProbabilityMatrix, SonarError, Strategy,
    DEFAULT_BOARD_SIZE, DEFAULT_FLEET,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    RuleBased,
    MonteCarlo,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Strategy {
        match arg {
            StrategyArg::RuleBased => Strategy::RuleBased,
            StrategyArg::MonteCarlo => Strategy::MonteCarlo,
        }
    }
}

#[derive(Parser)]
enum Commands {
    /// Track a live game: enter shot results, get probability heatmaps.
    Play {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        rows: usize,
        #[arg(long, help = "Column count; omit for a square board")]
        cols: Option<usize>,
        #[arg(long, value_enum, default_value_t = StrategyArg::RuleBased)]
        strategy: StrategyArg,
        #[arg(long, value_delimiter = ',', help = "Fleet ship lengths (e.g., --fleet 5,4,3,3,2)")]
        fleet: Option<Vec<usize>>,
    },
    /// Autoplay against a random hidden fleet and report the shot count.
    Sim {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        rows: usize,
        #[arg(long, help = "Column count; omit for a square board")]
        cols: Option<usize>,
        #[arg(long, value_enum, default_value_t = StrategyArg::RuleBased)]
        strategy: StrategyArg,
        #[arg(long, value_delimiter = ',', help = "Fleet ship lengths (e.g., --fleet 5,4,3,3,2)")]
        fleet: Option<Vec<usize>>,
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { rows, cols, strategy, fleet } => {
            let (rows, cols) = checked_dims(rows, cols)?;
            let fleet = fleet.unwrap_or_else(|| DEFAULT_FLEET.to_vec());
            let board = Board::build(rows, cols, &fleet).map_err(|e| anyhow::anyhow!(e))?;
            play(board, strategy.into())
        }
        Commands::Sim { rows, cols, strategy, fleet, seed } => {
            let (rows, cols) = checked_dims(rows, cols)?;
            let fleet = fleet.unwrap_or_else(|| DEFAULT_FLEET.to_vec());
            if let Some(s) = seed {
                println!("Using fixed seed: {} (run will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            sim(rows, cols, &fleet, strategy.into(), &mut rng)
        }
    }
}

fn checked_dims(rows: usize, cols: Option<usize>) -> anyhow::Result<(usize, usize)> {
    let cols = cols.unwrap_or(rows);
    // lettered columns cap the CLI at A..Z; the engine itself has no limit
    if !(1..=26).contains(&rows) || !(1..=26).contains(&cols) {
        anyhow::bail!("rows and columns must be between 1 and 26");
    }
    Ok((rows, cols))
}

fn play(mut board: Board, mut strategy: Strategy) -> anyhow::Result<()> {
    println!(
        "Tracking a {}x{} board. Commands: hit B4 | miss B4 | add N | remove N | fleet | quit",
        board.dims().rows,
        board.dims().cols
    );
    let stdin = io::stdin();
    loop {
        print_status_board(board.status());
        match render_heatmap(&board, strategy) {
            Ok(matrix) => {
                print_probability_board(&matrix);
                let status = board.status();
                match matrix.peak_where(|r, c| status[(r, c)] == CellStatus::Unknown) {
                    Some((r, c)) => println!("Suggested target: {}", coord_to_string(r, c)),
                    None => println!("No unrevealed cells left."),
                }
            }
            Err(e) => println!("Heatmap unavailable: {}", e),
        }
        if board.fleet().all_sunk() && !board.fleet().is_empty() {
            println!("All ships sunk. Well hunted.");
        }

        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let mut parts = line.split_whitespace();
        match parts.next() {
            None => continue,
            Some("quit") | Some("exit") => break,
            Some("fleet") => {
                print_fleet(&board);
            }
            Some("add") => match parts.next().and_then(|t| t.parse::<usize>().ok()) {
                Some(len) => match board.add_ship(len) {
                    Ok(()) => println!("Added a ship of length {}.", len),
                    Err(e) => println!("Error: {}", e),
                },
                None => println!("Usage: add <length>"),
            },
            Some("remove") => match parts.next().and_then(|t| t.parse::<usize>().ok()) {
                Some(n) if n > 0 => match board.remove_ship(n - 1) {
                    Ok(()) => println!("Removed ship {}.", n),
                    Err(e) => println!("Error: {}", e),
                },
                _ => println!("Usage: remove <number> (see `fleet`)"),
            },
            Some("strategy") => match parts.next() {
                Some("rule-based") => {
                    strategy = Strategy::RuleBased;
                    println!("Using the rule-based estimator.");
                }
                Some("monte-carlo") => {
                    strategy = Strategy::MonteCarlo;
                    println!("Using the Monte-Carlo estimator.");
                }
                _ => println!("Usage: strategy rule-based|monte-carlo"),
            },
            Some(verb @ "hit") | Some(verb @ "miss") => {
                let coord = parts.next().and_then(parse_coord);
                match coord {
                    Some((r, c)) => record_shot(&mut board, verb == "hit", r, c, &stdin)?,
                    None => println!("Usage: {} <cell>, e.g. {} B4", verb, verb),
                }
            }
            Some(other) => println!("Unknown command: {}", other),
        }
    }
    Ok(())
}

fn record_shot(
    board: &mut Board,
    hit: bool,
    row: usize,
    col: usize,
    stdin: &io::Stdin,
) -> anyhow::Result<()> {
    let outcome = if hit {
        board.record_hit(row, col)
    } else {
        board.record_miss(row, col)
    };
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("Error: {}", e);
            return Ok(());
        }
    };
    if let Some(candidate) = outcome.sink_candidate {
        print!("Mark a boat of length {} as destroyed? [y/N] ", candidate.length());
        io::stdout().flush()?;
        let mut answer = String::new();
        stdin.lock().read_line(&mut answer)?;
        if matches!(answer.trim(), "y" | "Y" | "yes") {
            match board.confirm_sink(candidate) {
                Ok(sunk) => println!(
                    "Sunk a ship of length {} at {}.",
                    sunk.length,
                    sunk.cells
                        .iter()
                        .map(|&(r, c)| coord_to_string(r, c))
                        .collect::<Vec<_>>()
                        .join(" ")
                ),
                Err(e) => println!("Error: {}", e),
            }
        }
    }
    Ok(())
}

/// Current heatmap; a hunt query that runs off the grid falls back to a
/// search-mode sweep.
fn render_heatmap(board: &Board, strategy: Strategy) -> Result<ProbabilityMatrix, SonarError> {
    match board.current_heatmap(strategy) {
        Err(SonarError::NoValidPlacement) => {
            println!("Hunt exhausted; falling back to a full search sweep.");
            board.heatmap(strategy, Mode::Search, 0, 0)
        }
        other => other,
    }
}

fn print_fleet(board: &Board) {
    if board.fleet().is_empty() {
        println!("Fleet is empty.");
        return;
    }
    for (i, ship) in board.fleet().ships().iter().enumerate() {
        let state = if ship.is_sunk() { "sunk" } else { "afloat" };
        println!("{:2}. length {}  ({})", i + 1, ship.length(), state);
    }
}

fn sim(
    rows: usize,
    cols: usize,
    fleet: &[usize],
    strategy: Strategy,
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    let mut board = Board::build(rows, cols, fleet).map_err(|e| anyhow::anyhow!(e))?;
    let hidden = HiddenFleet::place_random(board.dims(), fleet, rng)
        .ok_or_else(|| anyhow::anyhow!("could not arrange the hidden fleet on this board"))?;
    println!(
        "Hidden fleet placed: {} ships, {} cells on a {}x{} board.",
        hidden.ships().len(),
        hidden.total_cells(),
        rows,
        cols
    );

    let mut shots = 0usize;
    while !board.fleet().all_sunk() {
        let matrix = render_heatmap(&board, strategy).map_err(|e| anyhow::anyhow!(e))?;
        let status = board.status();
        let target = matrix.peak_where(|r, c| status[(r, c)] == CellStatus::Unknown);
        let (r, c) = match target {
            Some(cell) => cell,
            None => break,
        };
        shots += 1;
        if hidden.is_ship_at(r, c) {
            let outcome = board.record_hit(r, c).map_err(|e| anyhow::anyhow!(e))?;
            log::debug!("shot {}: {} -> hit", shots, coord_to_string(r, c));
            if let Some(candidate) = outcome.sink_candidate {
                if ground_truth_sunk(&board, &hidden, r, c, candidate.length()) {
                    let sunk = board
                        .confirm_sink(candidate)
                        .map_err(|e| anyhow::anyhow!(e))?;
                    println!(
                        "Sunk a ship of length {} after {} shots.",
                        sunk.length, shots
                    );
                }
            }
        } else {
            board.record_miss(r, c).map_err(|e| anyhow::anyhow!(e))?;
            log::debug!("shot {}: {} -> miss", shots, coord_to_string(r, c));
        }
    }

    print_status_board(board.status());
    println!("All ships sunk in {} shots.", shots);
    Ok(())
}

/// The candidate is real when the ship actually covering the cell is fully
/// hit and matches the proposed length.
fn ground_truth_sunk(
    board: &Board,
    hidden: &HiddenFleet,
    row: usize,
    col: usize,
    length: usize,
) -> bool {
    match hidden.ship_cells_at(row, col) {
        Some(cells) => {
            cells.len() == length
                && cells
                    .iter()
                    .all(|&(r, c)| board.status()[(r, c)] == CellStatus::Hit)
        }
        None => false,
    }
}
