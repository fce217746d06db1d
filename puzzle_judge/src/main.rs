use std::path::PathBuf;

use clap::Parser;
use puzzle_judge::{grade, load_puzzles, parse_played_moves, select_puzzles, GradeReport, Verdict};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wallwars::PuzzleProgress;

#[derive(Parser)]
struct Args {
    /// Path to a JSON file with one puzzle or a list of puzzles
    puzzle_file: PathBuf,

    /// Only judge the puzzle with this id
    #[arg(short, long)]
    puzzle_id: Option<String>,

    /// The moves played from the start of the game, one move per turn separated by ';'
    #[arg(short, long, default_value = "")]
    moves: String,

    /// Stop judging a puzzle as soon as a move doesn't match its solution
    #[arg(short, long, default_value_t = false)]
    stop_on_incorrect_move: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct Tally {
    solved: usize,
    in_progress: usize,
    not_started: usize,
    failed: usize,
    errors: usize,
}

fn print_report(report: &GradeReport) {
    println!("Puzzle '{}':", report.puzzle_id);
    for graded in &report.turns {
        let side = if graded.by_solver { "solver" } else { "opponent" };
        let verdict = match graded.verdict {
            Verdict::Setup => "setup",
            Verdict::Correct => "correct",
            Verdict::Incorrect => "INCORRECT",
            Verdict::Ungraded => "not graded",
        };
        println!(
            "  {:>3}. {:<10} {:<8} {}",
            graded.turn,
            graded.played.to_string(),
            side,
            verdict
        );
    }
    match report.progress {
        PuzzleProgress::NotStarted => println!("  not started"),
        PuzzleProgress::InProgress => println!("  in progress"),
        PuzzleProgress::Failed { turn } => println!("  failed at turn {}", turn),
        PuzzleProgress::Solved => println!("  solved"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let puzzles = select_puzzles(
        load_puzzles(&args.puzzle_file)?,
        args.puzzle_id.as_deref(),
    )?;
    info!(num_puzzles = puzzles.len(), "Loaded puzzles");

    let moves = parse_played_moves(&args.moves)?;
    debug!(num_moves = moves.len());

    let mut tally = Tally::default();
    for puzzle in puzzles {
        let puzzle_id = puzzle.id.clone();
        match grade(puzzle, &moves, args.stop_on_incorrect_move) {
            Ok(report) => {
                print_report(&report);
                match report.progress {
                    PuzzleProgress::NotStarted => tally.not_started += 1,
                    PuzzleProgress::InProgress => tally.in_progress += 1,
                    PuzzleProgress::Failed { .. } => tally.failed += 1,
                    PuzzleProgress::Solved => tally.solved += 1,
                }
            }
            Err(err) => {
                info!(puzzle = puzzle_id, "Puzzle could not be judged");
                let mut err_dyn = &err as &dyn std::error::Error;
                while let Some(src_err) = err_dyn.source() {
                    info!("{}", err_dyn);
                    err_dyn = src_err;
                }
                info!("{}", err_dyn);
                tally.errors += 1;
            }
        }
    }

    eprintln!(
        "End result:\n- {} solved\n- {} in progress\n- {} not started\n- {} failed\n- {} could not be judged",
        tally.solved, tally.in_progress, tally.not_started, tally.failed, tally.errors
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
