use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use jigsaw::{visualize_board, BoardTracker, GridSpec, ImageSlicer, PieceId};
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

/// One accepted drop, as written to the session recording.
#[derive(Serialize)]
struct RecordedMove {
    piece: String,
    /// `None` for a return to the table.
    slot: Option<usize>,
    correct: bool,
}

struct Recorder {
    path: PathBuf,
    moves: Vec<RecordedMove>,
}

impl Recorder {
    fn store(&mut self, piece: PieceId, slot: Option<usize>, correct: bool) {
        self.moves.push(RecordedMove {
            piece: piece.to_string(),
            slot,
            correct,
        });
    }

    fn write(&self) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &self.moves)?;
        writer.flush()?;
        Ok(())
    }
}

/// Cuts the image and runs the drag-and-drop session on stdin/stdout.
pub fn run(
    image: &Path,
    grid: GridSpec,
    mut rng: StdRng,
    record: Option<&Path>,
) -> anyhow::Result<()> {
    let mut slicer = ImageSlicer::open(image)?;
    let (width, height) = slicer.dimensions();
    debug!(width, height, "Loaded board image");

    let (mut tracker, dealt) = BoardTracker::generate(grid, &mut slicer, &mut rng)?;
    let mut recorder = record.map(|path| Recorder {
        path: path.to_path_buf(),
        moves: Vec::new(),
    });

    println!(
        "Cut '{}' into {} pieces. Place them with 'place <piece> <slot>'.",
        image.display(),
        dealt.len()
    );
    print_table(&tracker);

    let stdin = std::io::stdin().lock();
    for line in stdin.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["place", piece, slot] => {
                let Ok(piece) = piece.parse::<PieceId>() else {
                    println!("'{}' is not a piece id, expected <row>-<column>", piece);
                    continue;
                };
                let Ok(slot) = slot.parse::<usize>() else {
                    println!("'{}' is not a slot index", slot);
                    continue;
                };
                match tracker.place_in_slot(piece, slot) {
                    Ok(placement) => {
                        if let Some(evicted) = placement.evicted {
                            println!("Piece {} went back to the table.", evicted);
                        }
                        println!(
                            "Piece {} is {}.",
                            piece,
                            if placement.correct { "correct" } else { "misplaced" }
                        );
                        if let Some(recorder) = &mut recorder {
                            recorder.store(piece, Some(slot), placement.correct);
                        }
                        report(&mut tracker);
                    }
                    Err(err) => println!("{}", err),
                }
            }
            ["return", piece] => {
                let Ok(piece) = piece.parse::<PieceId>() else {
                    println!("'{}' is not a piece id, expected <row>-<column>", piece);
                    continue;
                };
                match tracker.return_to_table(piece) {
                    Ok(()) => {
                        if let Some(recorder) = &mut recorder {
                            recorder.store(piece, None, false);
                        }
                        report(&mut tracker);
                    }
                    Err(err) => println!("{}", err),
                }
            }
            ["show"] => {
                println!("{}", visualize_board(&tracker));
                print_table(&tracker);
            }
            ["progress"] => report(&mut tracker),
            ["quit"] => break,
            [] => {}
            _ => println!("Commands: place <piece> <slot>, return <piece>, show, progress, quit"),
        }
    }

    if let Some(recorder) = &recorder {
        recorder.write()?;
    }
    Ok(())
}

fn report(tracker: &mut BoardTracker) {
    let progress = tracker.progress();
    println!("Correctly placed: {} / {}", progress.correct, progress.total);
    if tracker.poll_completion() {
        println!("Congratulations! The picture is complete.");
    }
}

fn print_table(tracker: &BoardTracker) {
    let loose: Vec<String> = tracker.table().iter().map(PieceId::to_string).collect();
    if loose.is_empty() {
        println!("The table is empty.");
    } else {
        println!("On the table: {}", loose.join(" "));
    }
}
