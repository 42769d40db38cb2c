//! Path tokenizer
//!
//! Splits a path expression such as `Address.Street`, `Numbers[2]` or
//! `[0].Name` into segments. Splitting happens on `.`, `[` and `]`; empty
//! fragments are dropped, so `Foo[0]`, `Foo.[0]` and `Foo..0` tokenize alike.
//!
//! A segment is not typed as a name or an index here. The same fragment (`"0"`)
//! can be a map key or a sequence position depending on the value it meets, so
//! the dispatcher classifies each segment when it is applied.

use smallvec::SmallVec;

const SEPARATORS: [char; 3] = ['.', '[', ']'];

/// Segments of one path expression. Most paths are short enough to stay inline.
pub type Segments<'p> = SmallVec<[Segment<'p>; 8]>;

/// One fragment of a path expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'p> {
    text: &'p str,
}

/// How a segment is applied to the value it meets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'p> {
    /// Member or key lookup.
    Name(&'p str),
    /// Position lookup. Negative values are kept so they can be rejected as out of range.
    Index(i32),
}

impl<'p> Segment<'p> {
    pub fn new(text: &'p str) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &'p str {
        self.text
    }

    /// Integer value of the segment, if it parses as a 32-bit base-10
    /// integer. Surrounding whitespace is ignored, so `[ 1 ]` is index 1;
    /// integers outside the 32-bit range are names.
    pub fn as_index(&self) -> Option<i32> {
        self.text.trim().parse::<i32>().ok()
    }

    /// Classify the segment. Integer-looking segments are always indices.
    pub fn step(&self) -> Step<'p> {
        match self.as_index() {
            Some(index) => Step::Index(index),
            None => Step::Name(self.text),
        }
    }
}

/// Split `path` into its segments.
pub fn tokenize(path: &str) -> Segments<'_> {
    path.split(&SEPARATORS[..])
        .filter(|fragment| !fragment.is_empty())
        .map(Segment::new)
        .collect()
}

/// Case-insensitive string equality without allocating.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
