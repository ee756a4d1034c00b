//! Dotted path parsing.
//!
//! A path is a string of `.`-separated segments such as `users.0.name`.
//! Each [`Segment`] keeps its raw text and, when that text is a plain
//! decimal number, the parsed index. Whether a segment is used as a key or
//! an index depends on the container it is applied to:
//!
//! - on an array, an index segment selects an element and any other
//!   segment resolves to nothing;
//! - on an object, the raw text is always the key, even when numeric.
//!
//! There is no escaping: a key that itself contains `.` cannot be
//! addressed. The empty path `""` is a single empty-string segment.
//!
//! ```
//! # use nested_traversal::path::{Segment, segments};
//! let parts: Vec<Segment<'_>> = segments("users.0.name").collect();
//! assert_eq!(parts[0].as_str(), "users");
//! assert_eq!(parts[1].index(), Some(0));
//! assert_eq!(parts[2].index(), None);
//! ```

use std::fmt;

/// One `.`-separated component of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    raw: &'a str,
    index: Option<usize>,
}

impl<'a> Segment<'a> {
    /// Parses a single segment.
    ///
    /// The segment is an index when it is non-empty, made only of ASCII
    /// digits, and fits in `usize`.
    pub fn parse(raw: &'a str) -> Self {
        let index = if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            raw.parse().ok()
        } else {
            None
        };
        Segment { raw, index }
    }

    /// Returns the segment text, used as the key on objects.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Returns the parsed array index, if the segment is one.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// True when the segment addresses array elements.
    pub fn is_index(&self) -> bool {
        self.index.is_some()
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// Splits a path into its segments.
pub fn segments(path: &str) -> impl Iterator<Item = Segment<'_>> {
    path.split('.').map(Segment::parse)
}

/// Builds a dotted path from components.
///
/// Every argument is formatted with `Display` and the results are joined
/// with `.`.
///
/// ```
/// # use nested_traversal::path;
/// let index = 2;
/// assert_eq!(path!("users", index, "name"), "users.2.name");
/// assert_eq!(path!("single"), "single");
/// ```
#[macro_export]
macro_rules! path {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let mut path = ::std::string::ToString::to_string(&$first);
        $(
            path.push('.');
            path.push_str(&::std::string::ToString::to_string(&$rest));
        )*
        path
    }};
}
