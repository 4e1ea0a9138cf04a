//! Generates QR Code symbols (ISO/IEC 18004 Model 2) from text or bytes.
//!
//! The crate covers the encoding core only: mode selection, data encoding,
//! Reed-Solomon error correction, codeword interleaving, module placement,
//! mask evaluation and format/version information. The result is a
//! [`QrMatrix`] of dark/light modules with a stable byte serialization;
//! rendering it to an image, terminal or vector surface is a consumer's job.
//!
//! Simple operation:
//!
//! ```
//! use qrgen_rs::{create_qr_code, EccLevel};
//!
//! let matrix = create_qr_code("Hello, world!", EccLevel::Medium).unwrap();
//! for row in 0..matrix.size() {
//!     for col in 0..matrix.size() {
//!         let _dark = matrix.get(row, col);
//!         // paint the module
//!     }
//! }
//! ```
//!
//! Manual parameters:
//!
//! ```
//! use qrgen_rs::{create_qr_code_with, EccLevel, GeneratorOptions};
//!
//! let mut options = GeneratorOptions::default();
//! options.eci = Some(26); // UTF-8 byte payloads
//! options.quiet_zone = 2;
//! let matrix = create_qr_code_with("\u{3053}\u{3093}\u{306b}\u{3061}\u{306f}",
//!     EccLevel::Quartile, &options).unwrap();
//! let raw = matrix.get_raw_data();
//! # assert_eq!(raw[0] as usize, matrix.size());
//! ```
//!
//! Generation is synchronous and allocation-local; the only cross-call state
//! is immutable precomputed tables, so independent threads may generate
//! concurrently without coordination.

// The set of all legal characters in alphanumeric mode,
// where each character value maps to the index in the string.
pub static ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

mod bit_stream;
mod builder;
mod ecc_level;
mod encoder;
mod error;
pub mod format_info;
pub mod galois;
mod generator;
mod interleave;
mod mask;
mod matrix;
mod mode;
pub mod reed_solomon;
mod segment;
pub mod tables;
mod version;

pub use bit_stream::{BitReader, BitWriter};
pub use ecc_level::EccLevel;
pub use error::QrError;
pub use generator::{
    create_qr_code, create_qr_code_from_bytes, create_qr_code_with, GeneratorOptions,
    DEFAULT_QUIET_ZONE,
};
pub use mask::Mask;
pub use matrix::QrMatrix;
pub use mode::Mode;
pub use segment::Segment;
pub use version::Version;

/*---- Constants for the mask penalty rules ----*/

pub const PENALTY_N1: u32 = 3;
pub const PENALTY_N2: u32 = 3;
pub const PENALTY_N3: u32 = 40;
pub const PENALTY_N4: u32 = 10;
