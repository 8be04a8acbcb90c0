use core::convert::TryFrom;
use core::fmt;
use core::fmt::Display;
use core::fmt::Formatter;

/// Number of recognized letters: the 26 ASCII lowercase letters `'a'..='z'`.
///
/// Every [`LetterInventory`](crate::LetterInventory) holds exactly this many
/// slots for its whole lifetime; the alphabet never grows or shrinks.
pub const ALPHABET_LEN: usize = 26;

/// Error type returned when a character outside `'a'..='z'` is used where a
/// recognized letter is required.
///
/// The offending character is carried so callers can report it. Note that
/// uppercase letters produce this error too: validation is a raw range check
/// on the character code, with no case folding applied.
///
/// # Example
///
/// ```rust
/// # use littera::letter::*;
/// # fn main() {
/// let result = Letter::try_from('!');
///
/// assert!(result.is_err());
/// assert_eq!(result, Err(NotALetterError('!')));
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotALetterError(pub char);

impl Display for NotALetterError {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{:?} is not an ASCII lowercase letter", self.0)
  }
}

impl core::error::Error for NotALetterError {}

/// A validated index into the 26-letter ASCII lowercase alphabet.
///
/// A `Letter` is a zero-based offset from `'a'`, guaranteed by construction
/// to fall in `0..26`. It is the typed key for a
/// [`LetterInventory`](crate::LetterInventory) slot: once a character has
/// been checked here, slot access never needs to fail again.
///
/// Conversion from `char` is a raw range check with no case folding, so
/// uppercase input is rejected with [`NotALetterError`] rather than folded
/// to lowercase.
///
/// # Example
///
/// ```rust
/// # use littera::letter::*;
///
/// # fn main() -> Result<(), NotALetterError> {
/// let q = Letter::try_from('q')?;
/// assert_eq!(q.index(), 16);
/// assert_eq!(q.as_char(), 'q');
///
/// // uppercase and non-alphabetic input is out of range:
/// assert!(Letter::try_from('Q').is_err());
/// assert!(Letter::try_from('7').is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
  /// Returns the zero-based offset of this letter from `'a'`.
  #[inline]
  pub const fn index(self) -> usize {
    self.0 as usize
  }

  /// Returns the letter as a lowercase `char`.
  #[inline]
  pub const fn as_char(self) -> char {
    (b'a' + self.0) as char
  }

  /// Iterates the whole alphabet in order, `'a'` through `'z'`.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use littera::Letter;
  /// let alphabet: String = Letter::all().map(Letter::as_char).collect();
  /// assert_eq!(alphabet, "abcdefghijklmnopqrstuvwxyz");
  /// ```
  #[inline]
  pub fn all() -> impl Iterator<Item = Letter> {
    (0..ALPHABET_LEN as u8).map(Letter)
  }
}

impl TryFrom<char> for Letter {
  type Error = NotALetterError;

  #[inline]
  fn try_from(c: char) -> Result<Letter, NotALetterError> {
    // Raw `'a'`-relative range check; uppercase is out of range, not folded.
    let offset = (c as u32).wrapping_sub('a' as u32);
    if offset < ALPHABET_LEN as u32 {
      Ok(Letter(offset as u8))
    } else {
      Err(NotALetterError(c))
    }
  }
}

impl From<Letter> for char {
  #[inline(always)]
  fn from(letter: Letter) -> char {
    letter.as_char()
  }
}

impl Display for Letter {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_char())
  }
}

impl PartialEq<char> for Letter {
  #[inline(always)]
  fn eq(&self, other: &char) -> bool {
    self.as_char() == *other
  }
}

impl PartialEq<Letter> for char {
  #[inline(always)]
  fn eq(&self, other: &Letter) -> bool {
    *self == other.as_char()
  }
}
