//! Builds the module grid: function patterns, reservations, payload path.
//!
//! The builder owns two parallel grids. `modules` holds the colors;
//! `reserved` marks function cells plus the format/version areas, the cells
//! the payload walk and the masks must leave alone. Only `modules` survives
//! into the public container; `reserved` is discarded after mask selection.

use crate::bit_stream::BitReader;
use crate::ecc_level::EccLevel;
use crate::format_info;
use crate::tables;
use crate::version::Version;

pub(crate) struct MatrixBuilder {
    version: Version,
    size: usize,
    pub(crate) modules: Vec<bool>,
    pub(crate) reserved: Vec<bool>,
}

impl MatrixBuilder {
    pub fn new(version: Version) -> Self {
        let size = version.side();
        Self {
            version,
            size,
            modules: vec![false; size * size],
            reserved: vec![false; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn module(&self, row: usize, col: usize) -> bool {
        self.modules[row * self.size + col]
    }

    pub fn is_reserved(&self, row: usize, col: usize) -> bool {
        self.reserved[row * self.size + col]
    }

    fn set_function(&mut self, row: usize, col: usize, dark: bool) {
        let idx = row * self.size + col;
        self.modules[idx] = dark;
        self.reserved[idx] = true;
    }

    fn reserve(&mut self, row: usize, col: usize) {
        self.reserved[row * self.size + col] = true;
    }

    /// Consumes the builder, dropping the reservation grid.
    pub fn finish(self) -> (Version, usize, Vec<bool>) {
        (self.version, self.size, self.modules)
    }

    /*---- Function patterns and reservations ----*/

    /// Places every fixed pattern and reserves the format/version areas,
    /// in the order: finders + separators, timing, alignment, dark module,
    /// format/version reservations.
    pub fn place_function_patterns(&mut self) {
        let size = self.size;
        self.place_finder(3, 3);
        self.place_finder(3, size - 4);
        self.place_finder(size - 4, 3);
        for i in 8..size - 8 {
            let dark = i % 2 == 0;
            self.set_function(6, i, dark);
            self.set_function(i, 6, dark);
        }
        self.place_alignment_patterns();
        // Dark module at (4v + 9, 8).
        self.set_function(size - 8, 8, true);
        for i in 0..15 {
            for (row, col) in self.format_positions(i) {
                self.reserve(row, col);
            }
        }
        if self.version.value() >= 7 {
            for i in 0..18 {
                for (row, col) in self.version_positions(i) {
                    self.reserve(row, col);
                }
            }
        }
    }

    // 7x7 finder centered at (row, col) plus its one-module separator ring;
    // cells falling outside the grid are clipped.
    fn place_finder(&mut self, row: usize, col: usize) {
        for dr in -4i32..=4 {
            for dc in -4i32..=4 {
                let r = row as i32 + dr;
                let c = col as i32 + dc;
                if r < 0 || c < 0 || r >= self.size as i32 || c >= self.size as i32 {
                    continue;
                }
                let dist = dr.abs().max(dc.abs());
                self.set_function(r as usize, c as usize, dist != 2 && dist != 4);
            }
        }
    }

    fn place_alignment_patterns(&mut self) {
        let centers = tables::alignment_positions(self.version);
        let last = centers.len().wrapping_sub(1);
        for (i, &r) in centers.iter().enumerate() {
            for (j, &c) in centers.iter().enumerate() {
                // The three finder corners host no alignment pattern.
                if (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0) {
                    continue;
                }
                self.place_alignment(usize::from(r), usize::from(c));
            }
        }
    }

    // 5x5 alignment pattern centered at (row, col), always fully in bounds.
    fn place_alignment(&mut self, row: usize, col: usize) {
        for dr in -2i32..=2 {
            for dc in -2i32..=2 {
                let dark = dr.abs().max(dc.abs()) != 1;
                self.set_function(
                    (row as i32 + dr) as usize,
                    (col as i32 + dc) as usize,
                    dark,
                );
            }
        }
    }

    // The two cells carrying format bit `i`.
    fn format_positions(&self, i: usize) -> [(usize, usize); 2] {
        let size = self.size;
        let first = match i {
            0..=5 => (i, 8),
            6 => (7, 8),
            7 => (8, 8),
            8 => (8, 7),
            _ => (8, 14 - i),
        };
        let second = if i < 8 {
            (8, size - 1 - i)
        } else {
            (size - 15 + i, 8)
        };
        [first, second]
    }

    // The two cells carrying version bit `i`.
    fn version_positions(&self, i: usize) -> [(usize, usize); 2] {
        let long = self.size - 11 + i % 3;
        let short = i / 3;
        [(short, long), (long, short)]
    }

    /*---- Payload and configuration bits ----*/

    /// Walks the zig-zag path (column pairs right to left, skipping column 6,
    /// alternating bottom-up and top-down) and writes one stream bit into
    /// every unreserved cell. Returns the number of bits placed.
    pub fn place_payload(&mut self, bits: &mut BitReader<'_>) -> usize {
        let size = self.size as i32;
        let mut placed = 0usize;
        let mut right = size - 1;
        while right >= 1 {
            if right == 6 {
                right = 5;
            }
            let upward = (right + 1) & 2 == 0;
            for vert in 0..size {
                let row = if upward { size - 1 - vert } else { vert };
                for col in [right, right - 1] {
                    let idx = (row * size + col) as usize;
                    if !self.reserved[idx] {
                        self.modules[idx] = bits.has_bits() && bits.read_bit();
                        placed += 1;
                    }
                }
            }
            right -= 2;
        }
        placed
    }

    /// Writes both copies of the BCH-protected format word.
    pub fn write_format_info(&mut self, level: EccLevel, mask: u8) {
        let bits = format_info::format_bits(level, mask);
        for i in 0..15 {
            let dark = bits >> i & 1 != 0;
            for (row, col) in self.format_positions(i) {
                self.modules[row * self.size + col] = dark;
            }
        }
    }

    /// Writes both copies of the BCH-protected version word (version ≥ 7).
    pub fn write_version_info(&mut self) {
        if self.version.value() < 7 {
            return;
        }
        let bits = format_info::version_bits(self.version);
        for i in 0..18 {
            let dark = bits >> i & 1 != 0;
            for (row, col) in self.version_positions(i) {
                self.modules[row * self.size + col] = dark;
            }
        }
    }
}
