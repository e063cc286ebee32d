use std::cell::OnceCell;

use crate::tree::{BitTree, TreeError};
use crate::{ASCII_BITS, CELL_BITS};

/// ASCII codes (eight bits) to Braille cell patterns. The dataset covers
/// the uppercase letters A through Z only.
const ASCII_TO_BRAILLE: &str = "\
01000001,100000
01000010,110000
01000011,100100
01000100,100110
01000101,100010
01000110,110100
01000111,110110
01001000,110010
01001001,010100
01001010,010110
01001011,101000
01001100,111000
01001101,101100
01001110,101110
01001111,101010
01010000,111100
01010001,111110
01010010,111010
01010011,011100
01010100,011110
01010101,101001
01010110,111001
01010111,010111
01011000,101101
01011001,101111
01011010,101011
";

/// Braille cell patterns to ASCII letters. The source dataset has no
/// entry for "W", so the pattern 010111 is left unmapped.
const BRAILLE_TO_ASCII: &str = "\
100000,A
110000,B
100100,C
100110,D
100010,E
110100,F
110110,G
110010,H
010100,I
010110,J
101000,K
111000,L
101100,M
101110,N
101010,O
111100,P
111110,Q
111010,R
011100,S
011110,T
101001,U
111001,V
101101,X
101111,Y
101011,Z
";

/// Braille cell patterns to Unicode Braille code points, as four hex
/// digits. The source dataset covers the letters A through J only.
const BRAILLE_TO_UNICODE: &str = "\
100000,2801
110000,2803
100100,2809
100110,2819
100010,2811
110100,280B
110110,281B
110010,2813
010100,280A
010110,281A
";

/// Errors that can occur while converting between encodings.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConvertError {
    /// The lookup key was malformed or has no table entry.
    #[error(transparent)]
    Lookup(#[from] TreeError),
    /// A stored code point is not four hex digits naming a Unicode
    /// scalar value.
    #[error("Invalid code point {0:?} in translation table")]
    InvalidHexCode(String),
}

/// The three translation tables, each materialized at most once, on the
/// first conversion that needs it.
///
/// `OnceCell` keeps the lazy builds single-threaded; to share tables
/// across threads, build them eagerly first or put the whole value
/// behind a lock.
#[derive(Debug, Default)]
pub struct CodeTables {
    ascii_to_braille: OnceCell<BitTree>,
    braille_to_ascii: OnceCell<BitTree>,
    braille_to_unicode: OnceCell<BitTree>,
}

impl CodeTables {
    /// Create the tables with nothing built yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a table, building it from its embedded dataset on first use.
    fn table<'a>(
        cell: &'a OnceCell<BitTree>,
        depth: usize,
        data: &str,
    ) -> Result<&'a BitTree, ConvertError> {
        if let Some(tree) = cell.get() {
            return Ok(tree);
        }
        let mut tree = BitTree::new(depth);
        tree.load(data.lines())?;
        log::debug!(
            "built depth-{depth} translation table ({} entries)",
            tree.iter().count()
        );
        Ok(cell.get_or_init(|| tree))
    }

    /// Convert an ASCII character to its six-dot Braille cell pattern.
    ///
    /// The character's code is widened to eight binary digits and looked
    /// up in the ASCII-to-Braille table, so only uppercase A-Z succeed.
    pub fn to_braille(&self, letter: char) -> Result<&str, ConvertError> {
        let table = Self::table(&self.ascii_to_braille, ASCII_BITS, ASCII_TO_BRAILLE)?;
        let bits = format!("{:0width$b}", u32::from(letter), width = ASCII_BITS);
        Ok(table.get(&bits)?)
    }

    /// Convert a six-dot Braille cell pattern to its ASCII letter,
    /// returned as a one-character string.
    pub fn to_ascii(&self, bits: &str) -> Result<&str, ConvertError> {
        let table = Self::table(&self.braille_to_ascii, CELL_BITS, BRAILLE_TO_ASCII)?;
        Ok(table.get(bits)?)
    }

    /// Convert a six-dot Braille cell pattern to the equivalent Unicode
    /// Braille character.
    pub fn to_unicode(&self, bits: &str) -> Result<char, ConvertError> {
        let table = Self::table(&self.braille_to_unicode, CELL_BITS, BRAILLE_TO_UNICODE)?;
        let hex = table.get(bits)?;
        let code = u32::from_str_radix(hex, 16)
            .map_err(|_| ConvertError::InvalidHexCode(hex.to_string()))?;
        char::from_u32(code).ok_or_else(|| ConvertError::InvalidHexCode(hex.to_string()))
    }
}
