//! Print a generated bracket to the console.
//! Run with: cargo run --bin bracket -- [COUNT | ROSTER.csv]
//! COUNT defaults to 7. A CSV roster needs a `registration_id,seed` header.
//! Env: LOSERS_START (rounds before the final the losers bracket starts), RUST_LOG.

use elimination_bracket::{
    generate_bracket, participants_from_count, read_participants, render_bracket, sequential_ids,
    BracketSummary, GeneratorOptions, Participant,
};
use std::fs::File;
use std::process::ExitCode;

const DEFAULT_COUNT: usize = 7;

fn load_participants(arg: Option<String>) -> Result<Vec<Participant>, String> {
    let Some(arg) = arg else {
        return Ok(participants_from_count(DEFAULT_COUNT));
    };
    if let Ok(count) = arg.parse::<usize>() {
        return Ok(participants_from_count(count));
    }
    let file = File::open(&arg).map_err(|e| format!("Could not open {}: {}", arg, e))?;
    read_participants(file).map_err(|e| e.to_string())
}

fn losers_start() -> Result<Option<i64>, String> {
    match std::env::var("LOSERS_START") {
        Ok(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| format!("LOSERS_START must be an integer, got {:?}", v)),
        Err(_) => Ok(None),
    }
}

fn run() -> Result<(), String> {
    let participants = load_participants(std::env::args().nth(1))?;
    let options = GeneratorOptions {
        event_id: "event-1".to_string(),
        participants,
        losers_start_rounds_before_final: losers_start()?,
    };

    let matches = generate_bracket(&options, sequential_ids("m")).map_err(|e| e.to_string())?;
    let summary = BracketSummary::new(options.participants.len(), &matches);

    print!("{}", render_bracket(&matches));
    println!("\n=== SUMMARY ===");
    println!("Participants: {}", summary.participants);
    println!("Bracket size: {}", summary.bracket_size);
    println!("Winners matches: {}", summary.winners_matches);
    println!("Losers matches: {}", summary.losers_matches);
    println!("Byes: {}", summary.byes);
    println!("Total matches: {}", summary.total_matches);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
