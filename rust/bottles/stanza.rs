// SPDX-License-Identifier: GPL-2.0

//! Generation of the song text, one stanza per bottle count.

use core::fmt::{self, Write};

use super::error::Result;

/// Size of the buffer a stanza is generated into.
///
/// Text always stays shorter than this. The longest stanza, the closing one, is 129 bytes.
pub const CAPACITY: usize = 160;

const CLOSING: &str = "No more bottles of beer on the wall, no more bottles of beer.\n\
                       Go to the store and buy some more, 99 bottles of beer on the wall.\n";

/// Displays a bottle count with the right plural: "1 bottle", "2 bottles".
struct Bottles(u32);

impl fmt::Display for Bottles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.0 == 1 { "" } else { "s" };
        write!(f, "{} bottle{}", self.0, plural)
    }
}

/// The text of one stanza.
///
/// # Examples
///
/// ```
/// use bottles::stanza::Stanza;
///
/// let stanza = Stanza::new(2).unwrap();
/// assert_eq!(
///     stanza.as_bytes(),
///     b"2 bottles of beer on the wall, 2 bottles of beer.\n\
///       Take one down and pass it around, 1 bottle of beer on the wall.\n"
/// );
/// ```
#[derive(Clone)]
pub struct Stanza {
    buf: [u8; CAPACITY],
    len: usize,
}

impl Stanza {
    /// Generates the stanza sung when `bottles` bottles are left on the wall.
    ///
    /// Fails with `ENOSPC` if the text does not fit in [`CAPACITY`]; this cannot happen for
    /// counts up to 99.
    pub fn new(bottles: u32) -> Result<Self> {
        let mut stanza = Self {
            buf: [0; CAPACITY],
            len: 0,
        };
        match bottles {
            0 => stanza.write_str(CLOSING)?,
            1 => stanza.write_str(
                "1 bottle of beer on the wall, 1 bottle of beer.\n\
                 Take one down and pass it around, no more bottles of beer on the wall.\n",
            )?,
            n => write!(
                stanza,
                "{0} of beer on the wall, {0} of beer.\n\
                 Take one down and pass it around, {1} of beer on the wall.\n",
                Bottles(n),
                Bottles(n - 1),
            )?,
        }
        Ok(stanza)
    }

    /// Returns the generated text.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the length of the generated text in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stanza holds no text.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Write for Stanza {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len.checked_add(s.len()).ok_or(fmt::Error)?;
        if end >= CAPACITY {
            return Err(fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Returns the length of the whole song, from `start` bottles down to the closing stanza.
#[cfg(test)]
pub(crate) fn song_len(start: u32) -> Result<usize> {
    let mut total = 0;
    for bottles in 0..=start {
        total += Stanza::new(bottles)?.len();
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn text(bottles: u32) -> alloc::string::String {
        let stanza = Stanza::new(bottles).unwrap();
        alloc::string::String::from_utf8(stanza.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn counts_above_one() {
        for n in 2..=99 {
            let text = text(n);
            let wall = format!("{n} bottles of beer on the wall");
            assert_eq!(text.matches(&wall).count(), 1, "{text}");
            assert_eq!(text.matches(&format!("{n} bottles of beer")).count(), 2);
            assert!(text.starts_with(&format!("{wall}, {n} bottles of beer.\n")));
            assert!(text.ends_with('\n'));
        }
    }

    #[test]
    fn next_count_is_singular_at_one() {
        assert!(text(2).ends_with("pass it around, 1 bottle of beer on the wall.\n"));
        assert!(text(3).ends_with("pass it around, 2 bottles of beer on the wall.\n"));
    }

    #[test]
    fn last_bottle() {
        assert_eq!(
            text(1),
            "1 bottle of beer on the wall, 1 bottle of beer.\n\
             Take one down and pass it around, no more bottles of beer on the wall.\n"
        );
    }

    #[test]
    fn closing_is_fixed() {
        assert_eq!(text(0), CLOSING);
        assert_eq!(text(0).len(), 129);
    }

    #[test]
    fn every_stanza_fits() {
        for n in 0..=99 {
            assert!(Stanza::new(n).unwrap().len() < CAPACITY);
        }
    }

    #[test]
    fn overflow_is_an_error() {
        let mut stanza = Stanza::new(0).unwrap();
        assert!(stanza.write_str(CLOSING).is_err());
        assert_eq!(stanza.as_bytes(), CLOSING.as_bytes());
    }

    #[test]
    fn whole_song() {
        let len = song_len(99).unwrap();
        let sum: usize = (0..=99).map(|n| text(n).len()).sum();
        assert_eq!(len, sum);
        assert_eq!(song_len(0).unwrap(), 129);
    }
}
