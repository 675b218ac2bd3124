use super::*;

use std::collections::VecDeque;

use tracing::{debug, error, info, trace};

/// A square waiting in the frontier, with the number of moves it took to reach it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierRecord {
    pub square: Square,
    pub moves: u32,
}

/// The board as it stood when the first square reached in `moves` moves
/// was taken off the frontier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wave {
    pub moves: u32,
    pub board: Board,
}

/// A breadth-first knight's tour.
///
/// Iterating a `Tour` runs the search lazily,
/// yielding one `Wave` per move-count level.
#[derive(Clone, Debug)]
pub struct Tour {
    board: Board,
    frontier: VecDeque<FrontierRecord>,
    highest_level_seen: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coverage {
    /// The number of moves after which every reachable square has been reached.
    pub levels: u32,
    pub reached: usize,
    pub unreached: usize,
    pub board: Board,
}

impl Tour {
    pub fn new(config: &TourConfig) -> TourResult<Tour> {
        let board = Board::initialize(config)?;

        let initial = FrontierRecord {
            square: config.start,
            moves: 0,
        };
        let frontier = std::iter::once(initial).collect::<VecDeque<_>>();

        debug!(
            width = config.width,
            height = config.height,
            start = ?config.start,
            "starting tour"
        );

        Ok(Tour {
            board,
            frontier,
            highest_level_seen: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_done(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Runs the rest of the search and returns the final board.
    pub fn into_board(mut self) -> Board {
        while self.next().is_some() {}
        self.board
    }

    /// Runs the rest of the search and summarizes how much of the board it reached.
    pub fn into_coverage(self) -> Coverage {
        let board = self.into_board();
        let reached = board.reached_count();

        let coverage = Coverage {
            levels: board.max_moves(),
            reached,
            unreached: board.square_count() - reached,
            board,
        };

        info!(
            levels = coverage.levels,
            reached = coverage.reached,
            unreached = coverage.unreached,
            "tour complete"
        );

        coverage
    }

    fn expand(&mut self, record: FrontierRecord) {
        let FrontierRecord { square, moves } = record;
        let moves = moves + 1;
        let (width, height) = (self.board.width(), self.board.height());

        for candidate in square.knight_moves(width, height) {
            if !self.board.is_unvisited(candidate) {
                continue;
            }

            // Marking on discovery rather than on dequeue
            // keeps a square from entering the frontier twice.
            if let Err(err) = self.board.mark(candidate, moves) {
                error!(%err, "could not record square");
                continue;
            }
            self.frontier.push_back(FrontierRecord {
                square: candidate,
                moves,
            });
            trace!(square = ?candidate, moves, "enqueued");
        }
    }
}

impl Iterator for Tour {
    type Item = Wave;

    fn next(&mut self) -> Option<Wave> {
        while let Some(record) = self.frontier.pop_front() {
            let wave = if record.moves > self.highest_level_seen {
                self.highest_level_seen = record.moves;
                debug!(moves = record.moves, "level reached");
                Some(Wave {
                    moves: record.moves,
                    board: self.board.clone(),
                })
            } else {
                None
            };

            self.expand(record);

            if wave.is_some() {
                return wave;
            }
        }

        None
    }
}

/// Runs a whole tour, calling `on_wave` each time a new move-count level starts.
pub fn run_tour(
    config: &TourConfig,
    mut on_wave: impl FnMut(u32, &Board),
) -> TourResult<Board> {
    let mut tour = Tour::new(config)?;

    for wave in tour.by_ref() {
        on_wave(wave.moves, &wave.board);
    }

    Ok(tour.board)
}

pub fn coverage(config: &TourConfig) -> TourResult<Coverage> {
    Ok(Tour::new(config)?.into_coverage())
}

impl Coverage {
    /// One line saying how many moves the tour needed,
    /// and how many squares it could never reach.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Every reachable square is covered after {}.",
            counted(self.levels as usize, "move", "moves")
        );

        if self.unreached > 0 {
            let unreached = counted(self.unreached, "square", "squares");
            let verb = if self.unreached == 1 { "is" } else { "are" };
            summary.push_str(&format!(" {unreached} {verb} never reached."));
        }

        summary
    }
}

fn counted(count: usize, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("{count} {noun}")
}
