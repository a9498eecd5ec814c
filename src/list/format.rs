//! Text form of a [`List`].
//!
//! Lists of at most [`INLINE_LIMIT`] elements print on one line as
//! `[1, 2, 3]`. Longer lists print one element per line, each indented by
//! [`INDENT`] and followed by a comma except the last one:
//!
//! ```text
//! [
//!     1,
//!     2,
//!     3,
//!     4,
//!     5,
//!     6
//! ]
//! ```
//!
//! Multi-line elements (such as nested long lists) have every one of their
//! lines indented, so nesting stays readable.

use std::fmt::{self, Write};

use crate::List;

/// Lists longer than this print one element per line.
const INLINE_LIMIT: usize = 5;

/// Indentation of each element in the multi-line form.
const INDENT: &str = "    ";

/// Writes through to `inner`, inserting [`INDENT`] at the beginning of every
/// line.
struct PadAdapter<'a, W: ?Sized> {
    inner: &'a mut W,
    on_newline: bool,
}

impl<'a, W: Write + ?Sized> PadAdapter<'a, W> {
    fn new(inner: &'a mut W) -> Self {
        Self {
            inner,
            on_newline: true,
        }
    }
}

impl<W: Write + ?Sized> Write for PadAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for line in s.split_inclusive('\n') {
            if self.on_newline {
                self.inner.write_str(INDENT)?;
            }
            self.on_newline = line.ends_with('\n');
            self.inner.write_str(line)?;
        }
        Ok(())
    }
}

/// Writes a single element.
type Render<T> = fn(&T, &mut dyn Write) -> fmt::Result;

impl<T> List<T> {
    /// Shared layout of [`Display`](fmt::Display) and [`Debug`](fmt::Debug).
    fn write_elements(&self, f: &mut fmt::Formatter<'_>, render: Render<T>) -> fmt::Result {
        if self.len() <= INLINE_LIMIT {
            f.write_char('[')?;
            for (index, element) in self.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                render(element, f)?;
            }
            return f.write_char(']');
        }

        f.write_str("[\n")?;
        let last = self.len() - 1;
        for (index, element) in self.iter().enumerate() {
            let mut pad = PadAdapter::new(&mut *f);
            render(element, &mut pad)?;
            if index < last {
                pad.write_char(',')?;
            }
            f.write_char('\n')?;
        }
        f.write_char(']')
    }
}

/// # Examples
///
/// ```
/// use indexed_list::List;
///
/// assert_eq!(List::<i32>::new().to_string(), "[]");
/// assert_eq!(List::from([1, 2, 3]).to_string(), "[1, 2, 3]");
/// assert_eq!(
///     List::from_iter(1..=6).to_string(),
///     "[\n    1,\n    2,\n    3,\n    4,\n    5,\n    6\n]"
/// );
/// ```
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_elements(f, |element, w| write!(w, "{}", element))
    }
}

/// Same layout as [`Display`](fmt::Display), with each element in its
/// [`Debug`](fmt::Debug) form.
impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_elements(f, |element, w| write!(w, "{:?}", element))
    }
}

#[cfg(test)]
mod tests {
    use super::{PadAdapter, INDENT, INLINE_LIMIT};
    use crate::List;
    use pretty_assertions::assert_eq;
    use std::fmt::Write;

    #[test]
    fn empty_and_short_lists_print_inline() {
        assert_eq!(List::<u8>::new().to_string(), "[]");
        assert_eq!(List::from([7]).to_string(), "[7]");
        assert_eq!(List::from([1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(
            List::from_iter(1..=INLINE_LIMIT).to_string(),
            "[1, 2, 3, 4, 5]"
        );
    }

    #[test]
    fn long_lists_print_one_element_per_line() {
        assert_eq!(List::<i32>::from_elements(&[]).to_string(), "[]");
        assert_eq!(
            List::from_elements(&[1, 2, 3, 4, 5, 6]).to_string(),
            "[\n    1,\n    2,\n    3,\n    4,\n    5,\n    6\n]"
        );
        let text = List::from_iter(0..100).to_string();
        assert_eq!(text.lines().count(), 102);
        assert!(text.lines().skip(1).take(100).all(|line| line.starts_with(INDENT)));
    }

    #[test]
    fn debug_uses_the_same_layout() {
        let list = List::from(["a", "b"]);
        assert_eq!(format!("{:?}", list), r#"["a", "b"]"#);
        assert_eq!(list.to_string(), "[a, b]");

        let long = List::from(["a", "b", "c", "d", "e", "f"]);
        assert_eq!(
            format!("{:?}", long),
            "[\n    \"a\",\n    \"b\",\n    \"c\",\n    \"d\",\n    \"e\",\n    \"f\"\n]"
        );
    }

    #[test]
    fn nested_long_lists_are_indented() {
        let inner = List::from_iter(1..=6);
        let outer = List::from([
            List::from([0]),
            inner.clone(),
            List::new(),
            List::new(),
            List::new(),
            List::new(),
        ]);
        let expected = "[\n    [0],\n    [\n        1,\n        2,\n        3,\n        4,\n        5,\n        6\n    ],\n    [],\n    [],\n    [],\n    []\n]";
        assert_eq!(outer.to_string(), expected);

        let short = List::from([inner]);
        assert_eq!(
            short.to_string(),
            "[[\n    1,\n    2,\n    3,\n    4,\n    5,\n    6\n]]"
        );
    }

    #[test]
    fn pad_adapter_indents_every_line() {
        let mut out = String::new();
        let mut pad = PadAdapter::new(&mut out);
        pad.write_str("a\nb").unwrap();
        pad.write_str("c\n").unwrap();
        pad.write_str("d").unwrap();
        assert_eq!(out, "    a\n    bc\n    d");
    }
}
