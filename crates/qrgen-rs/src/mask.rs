use crate::builder::MatrixBuilder;
use crate::ecc_level::EccLevel;
use crate::error::QrError;
use crate::{PENALTY_N1, PENALTY_N2, PENALTY_N3, PENALTY_N4};

/// A mask pattern index, between 0 and 7 (inclusive).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mask(u8);

impl Mask {
    /// Creates a mask from its index, rejecting anything above 7.
    pub fn new(index: u8) -> Result<Self, QrError> {
        if index < 8 {
            Ok(Self(index))
        } else {
            Err(QrError::InvalidArgument(format!(
                "mask index {index} is outside 0..=7"
            )))
        }
    }

    pub(crate) const fn new_unchecked(index: u8) -> Self {
        Self(index)
    }

    /// The index, in 0..=7.
    pub fn value(self) -> u8 {
        self.0
    }
}

// The eight mask predicates over (row, col); true means invert.
fn mask_bit(mask: u8, row: usize, col: usize) -> bool {
    let (r, c) = (row, col);
    match mask {
        0 => (r + c) % 2 == 0,
        1 => r % 2 == 0,
        2 => c % 3 == 0,
        3 => (r + c) % 3 == 0,
        4 => (r / 2 + c / 3) % 2 == 0,
        5 => r * c % 2 + r * c % 3 == 0,
        6 => (r * c % 2 + r * c % 3) % 2 == 0,
        7 => ((r + c) % 2 + r * c % 3) % 2 == 0,
        _ => unreachable!("mask index is validated at construction"),
    }
}

// XORs the pattern onto every non-reserved module. Self-inverse.
fn apply(builder: &mut MatrixBuilder, mask: u8) {
    let size = builder.size();
    for row in 0..size {
        for col in 0..size {
            if !builder.is_reserved(row, col) && mask_bit(mask, row, col) {
                builder.modules[row * size + col] ^= true;
            }
        }
    }
}

/// Masks the grid and writes the matching format information.
///
/// With `forced` set, that candidate is taken as-is; otherwise all eight are
/// scored and the lowest penalty wins, ties to the lower index. Returns the
/// chosen mask and the final grid's penalty.
pub(crate) fn select_and_apply(
    builder: &mut MatrixBuilder,
    level: EccLevel,
    forced: Option<Mask>,
) -> (Mask, u32) {
    let chosen = match forced {
        Some(mask) => mask,
        None => {
            let unmasked = builder.modules.clone();
            let mut best = Mask::new_unchecked(0);
            let mut best_penalty = u32::MAX;
            for index in 0..8 {
                apply(builder, index);
                builder.write_format_info(level, index);
                let penalty = penalty_score(&builder.modules, builder.size());
                if penalty < best_penalty {
                    best = Mask::new_unchecked(index);
                    best_penalty = penalty;
                }
                builder.modules.copy_from_slice(&unmasked);
            }
            best
        }
    };
    apply(builder, chosen.value());
    builder.write_format_info(level, chosen.value());
    (chosen, penalty_score(&builder.modules, builder.size()))
}

/// The four-rule penalty of a fully drawn grid.
pub(crate) fn penalty_score(modules: &[bool], size: usize) -> u32 {
    score_runs(modules, size)
        + score_blocks(modules, size)
        + score_finder_patterns(modules, size)
        + score_balance(modules, size)
}

// N1: runs of 5+ same-colored modules in a row or column: 3 + (len - 5).
fn score_runs(modules: &[bool], size: usize) -> u32 {
    let mut score = 0;
    let mut tally = |run: usize| {
        if run >= 5 {
            score += PENALTY_N1 + (run - 5) as u32;
        }
    };
    for line in 0..size {
        let mut row_run = (modules[line * size], 0usize);
        let mut col_run = (modules[line], 0usize);
        for i in 0..size {
            for (run, color) in [
                (&mut row_run, modules[line * size + i]),
                (&mut col_run, modules[i * size + line]),
            ] {
                if color == run.0 {
                    run.1 += 1;
                } else {
                    tally(run.1);
                    *run = (color, 1);
                }
            }
        }
        tally(row_run.1);
        tally(col_run.1);
    }
    score
}

// N2: each 2x2 block of one color: 3.
fn score_blocks(modules: &[bool], size: usize) -> u32 {
    let mut score = 0;
    for row in 0..size - 1 {
        for col in 0..size - 1 {
            let color = modules[row * size + col];
            if color == modules[row * size + col + 1]
                && color == modules[(row + 1) * size + col]
                && color == modules[(row + 1) * size + col + 1]
            {
                score += PENALTY_N2;
            }
        }
    }
    score
}

// N3: each window reading 1011101 0000 (or reversed) in a row or column: 40.
const FINDER_WINDOW: [bool; 11] = [
    true, false, true, true, true, false, true, false, false, false, false,
];

fn score_finder_patterns(modules: &[bool], size: usize) -> u32 {
    if size < FINDER_WINDOW.len() {
        return 0;
    }
    let mut score = 0;
    for line in 0..size {
        for start in 0..=size - FINDER_WINDOW.len() {
            let mut fwd_row = true;
            let mut rev_row = true;
            let mut fwd_col = true;
            let mut rev_col = true;
            for (k, &want) in FINDER_WINDOW.iter().enumerate() {
                let row_cell = modules[line * size + start + k];
                let col_cell = modules[(start + k) * size + line];
                fwd_row &= row_cell == want;
                rev_row &= row_cell == FINDER_WINDOW[FINDER_WINDOW.len() - 1 - k];
                fwd_col &= col_cell == want;
                rev_col &= col_cell == FINDER_WINDOW[FINDER_WINDOW.len() - 1 - k];
            }
            score += PENALTY_N3 * (u32::from(fwd_row) + u32::from(rev_row))
                + PENALTY_N3 * (u32::from(fwd_col) + u32::from(rev_col));
        }
    }
    score
}

// N4: 10 * floor(|2*darkPct - 100| / 5), darkPct the integer percentage of
// dark modules.
fn score_balance(modules: &[bool], size: usize) -> u32 {
    let dark = modules.iter().filter(|&&m| m).count();
    let pct = (dark * 100 / (size * size)) as i32;
    (2 * pct - 100).unsigned_abs() / 5 * PENALTY_N4
}
