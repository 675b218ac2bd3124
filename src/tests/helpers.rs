use super::*;

use std::collections::{HashMap, VecDeque};

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

pub fn deterministic_prng() -> XorShiftRng {
    XorShiftRng::seed_from_u64(0x6b6e_6967_6874)
}

/// The board's move counts, one row per `y`.
pub fn table(board: &Board) -> Vec<Vec<Option<u32>>> {
    (0..board.height())
        .map(|y| {
            (0..board.width())
                .map(|x| board.moves_at(Square::new(x, y)))
                .collect()
        })
        .collect()
}

/// Converts a row-per-`y` table of distances where `-1` means unreachable.
pub fn expected_table<const W: usize, const H: usize>(
    rows: [[i32; W]; H],
) -> Vec<Vec<Option<u32>>> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|&d| if d < 0 { None } else { Some(d as u32) })
                .collect()
        })
        .collect()
}

/// A plain shortest-path search that shares nothing with `Tour`
/// except the knight offsets.
pub fn reference_distances(config: &TourConfig) -> HashMap<Square, u32> {
    let mut distances = HashMap::new();
    distances.insert(config.start, 0);

    let mut queue = std::iter::once(config.start).collect::<VecDeque<_>>();

    while let Some(square) = queue.pop_front() {
        let distance = distances[&square];
        for (dx, dy) in KNIGHT_OFFSETS {
            let x = i64::from(square.x) + i64::from(dx);
            let y = i64::from(square.y) + i64::from(dy);
            if x < 0 || y < 0 || x >= i64::from(config.width) || y >= i64::from(config.height) {
                continue;
            }
            let next = Square::new(x as u16, y as u16);
            if !distances.contains_key(&next) {
                distances.insert(next, distance + 1);
                queue.push_back(next);
            }
        }
    }

    distances
}

pub fn collect_waves(config: &TourConfig) -> Vec<Wave> {
    Tour::new(config).unwrap().collect()
}
