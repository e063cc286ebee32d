pub mod tables;
pub mod tree;

/// Key length of the ASCII-keyed table: one eight-bit character code.
const ASCII_BITS: usize = 8;
/// Key length of the Braille-keyed tables: one six-dot cell pattern.
const CELL_BITS: usize = 6;
