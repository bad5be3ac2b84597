use anyhow::{anyhow, Result};
use std::time::{Duration, Instant};
use wordgrid_solver::{Board, Checkpoint, Deadline, Dictionary, Error, LetterValues, Rack, Search};

const STATE: &[&str] = &[
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    ".....RUSTY.....",
    ".......e.......",
    ".......A.......",
    ".......L.......",
    "...............",
    "...............",
    "...............",
    "...............",
];

/// Usage: `best_plays WORDFILE RACK [BOARD.json]`
///
/// The board file holds a board in transfer JSON. Without it a standard board with a
/// few tiles is used.
fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        return Err(anyhow!("usage: best_plays WORDFILE RACK [BOARD.json]"));
    }
    let dictionary = Dictionary::from_file(&args[0])?;
    eprintln!("{}", dictionary);
    let rack: Rack = args[1].parse()?;
    let board = match args.get(2) {
        Some(path) => Board::from_transferable(&std::fs::read_to_string(path)?)?,
        None => Board::standard().with_state_from_strings(STATE)?,
    };
    eprintln!("{}\nrack: {}", board, rack);

    let values = LetterValues::standard();
    let search = Search::new(&board, &rack, &dictionary, &values);
    let mut deadline = Deadline::after(Duration::from_secs(60));
    let total = dictionary.len();
    let mut progress = |index: usize, word: &str| -> Result<(), Error> {
        if index % 10_000 == 0 {
            eprintln!("{:6}/{} {}", index, total, word);
        }
        deadline.checkpoint(index, word)
    };
    let now = Instant::now();
    let playables = search.run_with(&mut progress)?;
    let dt = now.elapsed().as_secs_f32();
    eprintln!("{} placements in {:.2} s", playables.len(), dt);

    for (score, p) in playables.best().take(20) {
        println!(
            "{:3} {:2} {:2} {:1} {}",
            score, p.x, p.y, p.horizontal as i32, p.word
        );
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
