use alloc::string::String;
use alloc::string::ToString;
use core::convert::Infallible;
use core::convert::TryFrom;
use core::fmt;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Write;
use core::iter::FromIterator;
use core::iter::repeat;
use core::ops::Add;
use core::ops::AddAssign;
use core::str::FromStr;

use crate::letter::ALPHABET_LEN;
use crate::letter::Letter;
use crate::letter::NotALetterError;

/// Error type returned by [`LetterInventory::get`] and
/// [`LetterInventory::set`] when an argument falls outside the operation's
/// contract.
///
/// Both variants are programming-contract violations surfaced immediately to
/// the caller; neither leaves the inventory partially mutated. The expected
/// "subtraction not defined for these operands" outcome of
/// [`LetterInventory::subtract`] is *not* an error and is signaled with
/// `None` instead.
///
/// # Example
///
/// ```rust
/// # use littera::letter_inventory::*;
/// # fn main() {
/// let mut inventory = LetterInventory::new();
///
/// assert_eq!(inventory.get('!'), Err(InvalidArgumentError::NotALetter('!')));
/// assert_eq!(inventory.set('a', -1), Err(InvalidArgumentError::NegativeCount(-1)));
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "is_variant", derive(derive_more::IsVariant))]
pub enum InvalidArgumentError {
  /// The character is not one of the 26 recognized lowercase letters.
  /// Uppercase input lands here too, since validation never folds case.
  NotALetter(char),
  /// A negative count was passed to [`LetterInventory::set`].
  NegativeCount(i32),
}

impl Display for InvalidArgumentError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      InvalidArgumentError::NotALetter(c) => {
        write!(f, "{:?} is not an ASCII lowercase letter", c)
      }
      InvalidArgumentError::NegativeCount(n) => {
        write!(f, "count must be non-negative, got {}", n)
      }
    }
  }
}

impl core::error::Error for InvalidArgumentError {}

impl From<NotALetterError> for InvalidArgumentError {
  #[inline(always)]
  fn from(err: NotALetterError) -> Self {
    InvalidArgumentError::NotALetter(err.0)
  }
}

/// A counted multiset over the 26 ASCII lowercase letters.
///
/// Each inventory holds exactly [`ALPHABET_LEN`] counters, slot *i* counting
/// occurrences of the letter `'a' + i`, alongside a cached running total
/// maintained by every mutator. The array is fixed for the lifetime of the
/// instance and is never resized.
///
/// Inventories are typically built from text: each character is folded to
/// ASCII lowercase, counted if it lands in `'a'..='z'`, and skipped silently
/// otherwise. The algebra operations [`add`](Self::add) and
/// [`subtract`](Self::subtract) always produce fresh instances and never
/// mutate their operands.
///
/// # Example
///
/// ```rust
/// # use littera::LetterInventory;
///
/// # fn main() {
/// let inventory = LetterInventory::from_text("aabbbc");
/// assert_eq!(inventory.get('a'), Ok(2));
/// assert_eq!(inventory.get('b'), Ok(3));
/// assert_eq!(inventory.len(), 6);
/// assert_eq!(inventory.to_string(), "[aabbbc]");
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
  feature = "index",
  derive(derive_more::Index, derive_more::IndexMut)
)]
pub struct LetterInventory {
  /// Per-letter counters; slot `i` holds the count for letter `'a' + i`.
  #[cfg_attr(feature = "index", index)]
  #[cfg_attr(feature = "index", index_mut)]
  counts: [u32; ALPHABET_LEN],
  /// Cached sum of `counts`, updated by every mutator rather than
  /// recomputed on demand.
  size:   u32,
}

impl LetterInventory {
  /// Creates an empty inventory with every slot at zero.
  #[inline]
  pub const fn new() -> Self {
    Self {
      counts: [0; ALPHABET_LEN],
      size:   0,
    }
  }

  /// Builds an inventory from `text`, counting its ASCII letters
  /// case-insensitively.
  ///
  /// Each character is folded to ASCII lowercase up front; if the folded
  /// character falls in `'a'..='z'` its slot and the total are incremented,
  /// otherwise it is skipped silently. Digits, punctuation, whitespace, and
  /// non-ASCII characters never affect [`len`](Self::len).
  ///
  /// # Example
  ///
  /// ```rust
  /// # use littera::LetterInventory;
  /// let inventory = LetterInventory::from_text("Hello, World!");
  /// assert_eq!(inventory.len(), 10);
  /// assert_eq!(inventory.to_string(), "[dehllloorw]");
  /// ```
  pub fn from_text(text: &str) -> Self {
    let mut inventory = Self::new();
    inventory.extend(text.chars());
    inventory
  }

  /// Returns the count for `letter`.
  ///
  /// `letter` is validated with the same raw range check used everywhere
  /// else in this crate: it must already be lowercase. Uppercase and
  /// non-alphabetic characters are rejected with
  /// [`InvalidArgumentError::NotALetter`].
  #[inline]
  pub fn get(&self, letter: char) -> Result<u32, InvalidArgumentError> {
    let letter = Letter::try_from(letter)?;
    Ok(self.counts[letter.index()])
  }

  /// Returns the count for an already-validated [`Letter`]. Never fails.
  #[inline]
  pub const fn count(&self, letter: Letter) -> u32 {
    self.counts[letter.index()]
  }

  /// Overwrites the slot for `letter` with `value`.
  ///
  /// `letter` is validated first (same raw range check as [`get`](Self::get)),
  /// then `value` must be non-negative. Either failure returns before any
  /// state changes.
  ///
  /// The cached total is updated by **adding** `value` to it, not by the
  /// difference from the slot's previous count. Calling `set` twice on the
  /// same letter therefore leaves [`len`](Self::len) larger than the sum of
  /// the slots; callers that need the total to track the slots must set each
  /// letter at most once.
  pub fn set(
    &mut self,
    letter: char,
    value: i32,
  ) -> Result<(), InvalidArgumentError> {
    let letter = Letter::try_from(letter)?;
    if value < 0 {
      return Err(InvalidArgumentError::NegativeCount(value));
    }
    self.counts[letter.index()] = value as u32;
    self.size += value as u32;
    Ok(())
  }

  /// Returns the total number of letters counted, using the cached running
  /// total. Constant time; the slots are not re-summed.
  #[inline]
  pub const fn len(&self) -> usize {
    self.size as usize
  }

  /// Returns `true` if no letters have been counted.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.size == 0
  }

  /// Returns a read-only view of all 26 per-letter counters, in alphabetical
  /// slot order.
  #[inline]
  pub const fn counts(&self) -> &[u32; ALPHABET_LEN] {
    &self.counts
  }

  /// Returns the element-wise sum of two inventories.
  ///
  /// The result is freshly allocated and owned by the caller; neither
  /// operand is mutated. Its total is the sum of the operand totals. Sums of
  /// non-negative counts are non-negative, so this operation always
  /// succeeds.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use littera::LetterInventory;
  /// let abc = LetterInventory::from_text("abc");
  /// let bcd = LetterInventory::from_text("bcd");
  /// let sum = LetterInventory::add(&abc, &bcd);
  /// assert_eq!(sum.to_string(), "[abbccd]");
  /// assert_eq!(sum.len(), 6);
  /// ```
  pub fn add(&self, other: &Self) -> Self {
    let mut counts = [0u32; ALPHABET_LEN];
    for (i, slot) in counts.iter_mut().enumerate() {
      *slot = self.counts[i] + other.counts[i];
    }
    Self {
      counts,
      size: self.size + other.size,
    }
  }

  /// Returns the element-wise difference `self - other`, or `None` if it is
  /// not defined.
  ///
  /// True multiset difference requires `other` to be a sub-multiset of
  /// `self`: the moment any slot would go negative, `None` is returned and
  /// no partial result is ever produced. On success the result's total is
  /// the sum of the per-slot differences.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use littera::LetterInventory;
  /// let a = LetterInventory::from_text("a");
  /// assert!(a.subtract(&LetterInventory::from_text("a")).unwrap().is_empty());
  /// assert_eq!(a.subtract(&LetterInventory::from_text("b")), None);
  /// assert_eq!(a.subtract(&LetterInventory::from_text("aa")), None);
  /// ```
  pub fn subtract(&self, other: &Self) -> Option<Self> {
    let mut counts = [0u32; ALPHABET_LEN];
    let mut size = 0u32;
    for (i, slot) in counts.iter_mut().enumerate() {
      *slot = self.counts[i].checked_sub(other.counts[i])?;
      size += *slot;
    }
    Some(Self { counts, size })
  }

  /// Iterates `(Letter, count)` pairs over every slot in alphabetical
  /// order, empty slots included.
  pub fn iter(&self) -> impl Iterator<Item = (Letter, u32)> + '_ {
    Letter::all().map(move |letter| (letter, self.counts[letter.index()]))
  }

  /// Iterates every counted letter in alphabetical order, each repeated
  /// according to its slot. This is the character stream behind the
  /// [`Display`] rendering.
  pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
    self
      .iter()
      .flat_map(|(letter, n)| repeat(letter.as_char()).take(n as usize))
  }
}

impl Default for LetterInventory {
  #[inline(always)]
  fn default() -> Self {
    Self::new()
  }
}

/// Renders the inventory as `[` + each letter repeated by its count, in
/// alphabetical order with no separators + `]`. An empty inventory renders
/// as `[]`.
impl Display for LetterInventory {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_char('[')?;
    for c in self.chars() {
      f.write_char(c)?;
    }
    f.write_char(']')
  }
}

impl Extend<char> for LetterInventory {
  fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
    for c in iter {
      if let Ok(letter) = Letter::try_from(c.to_ascii_lowercase()) {
        self.counts[letter.index()] += 1;
        self.size += 1;
      }
    }
  }
}

impl FromIterator<char> for LetterInventory {
  #[inline]
  fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
    let mut inventory = Self::new();
    inventory.extend(iter);
    inventory
  }
}

impl From<&str> for LetterInventory {
  #[inline(always)]
  fn from(text: &str) -> Self {
    Self::from_text(text)
  }
}

impl FromStr for LetterInventory {
  type Err = Infallible;

  #[inline(always)]
  fn from_str(text: &str) -> Result<Self, Infallible> {
    Ok(Self::from_text(text))
  }
}

impl From<LetterInventory> for String {
  #[inline(always)]
  fn from(inventory: LetterInventory) -> Self {
    inventory.to_string()
  }
}

impl From<&LetterInventory> for String {
  #[inline(always)]
  fn from(inventory: &LetterInventory) -> Self {
    inventory.to_string()
  }
}

impl Add<&LetterInventory> for &LetterInventory {
  type Output = LetterInventory;

  #[inline(always)]
  fn add(self, other: &LetterInventory) -> LetterInventory {
    LetterInventory::add(self, other)
  }
}

impl Add for LetterInventory {
  type Output = LetterInventory;

  #[inline(always)]
  fn add(self, other: LetterInventory) -> LetterInventory {
    LetterInventory::add(&self, &other)
  }
}

impl AddAssign<&LetterInventory> for LetterInventory {
  #[inline]
  fn add_assign(&mut self, other: &LetterInventory) {
    *self = LetterInventory::add(self, other);
  }
}

#[cfg(feature = "serde")]
mod serde_impl {
  use super::*;

  /// Serializes as a plain sequence of the 26 slot counts, in alphabetical
  /// order.
  impl serde::Serialize for LetterInventory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: serde::Serializer,
    {
      use serde::ser::SerializeSeq;
      let mut seq = serializer.serialize_seq(Some(ALPHABET_LEN))?;
      for slot in &self.counts {
        seq.serialize_element(slot)?;
      }
      seq.end()
    }
  }

  /// Deserializes from a sequence of at most 26 counts. Missing trailing
  /// slots are zero, extra elements are rejected, and the cached total is
  /// recomputed as the slot sum.
  impl<'de> serde::Deserialize<'de> for LetterInventory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: serde::Deserializer<'de>,
    {
      use serde::de::Error;
      use serde::de::SeqAccess;
      use serde::de::Visitor;
      struct LetterInventoryVisitor;
      impl<'de> Visitor<'de> for LetterInventoryVisitor {
        type Value = LetterInventory;
        fn expecting(
          &self,
          formatter: &mut core::fmt::Formatter,
        ) -> core::fmt::Result {
          formatter.write_str("a sequence of at most 26 letter counts")
        }
        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
          A: SeqAccess<'de>,
        {
          let mut inventory = LetterInventory::new();
          let mut index = 0usize;
          while let Some(value) = seq.next_element::<u32>()? {
            if index >= ALPHABET_LEN {
              return Err(A::Error::invalid_length(index + 1, &self));
            }
            inventory.counts[index] = value;
            inventory.size += value;
            index += 1;
          }
          Ok(inventory)
        }
      }
      deserializer.deserialize_seq(LetterInventoryVisitor)
    }
  }
}
