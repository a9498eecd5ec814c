//! This crate provides an indexed, mutable and sortable sequence addressed by
//! 1-based positions, backed by a doubly-linked list with owned nodes,
//! implemented as a cyclic list.
//!
//! The [`List`] inserts and removes elements, or whole runs of elements, at any
//! position by relinking nodes. Reaching a position walks from the nearest end,
//! so positional operations take *O*(min(*p*, *n* - *p*)) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use indexed_list::List;
//!
//! let mut list = List::new();
//! list.append_elements([1, 2, 3, 4]);
//!
//! list.insert_element_before(0, 1).unwrap(); // [0, 1, 2, 3, 4]
//! assert_eq!(list.element_at(1), Ok(&0));
//!
//! assert_eq!(list.remove_element_at(4), Ok(3)); // [0, 1, 2, 4]
//! assert_eq!(list.replace_element_at(5, 4), Ok(4)); // [0, 1, 2, 5]
//!
//! let removed = list.remove_elements_in_range(2, 3).unwrap();
//! assert_eq!(removed.to_string(), "[1, 2]");
//! assert_eq!(list.to_string(), "[0, 5]");
//! ```
//!
//! # Positions
//!
//! Elements are at positions `1..=len`. Insertion anchors are `1..=len + 1`:
//! inserting before `len + 1` appends. Any other position is rejected with
//! [`Error::IndexOutOfRange`] before the list is touched. A range
//! `first..=last` with `first > last` is empty and always accepted.
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │   Position 1              Position 2                          Position N + 1
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//!
//! Each node is allocated on the heap. The ghost node has *NO* payload, and in
//! an empty list its `next` and `prev` pointers point to itself. `ghost.next`
//! is the first element and `ghost.prev` is the last one.
//!
//! # Text Form
//!
//! Lists of up to five elements print inline, longer lists print one element
//! per line:
//!
//! ```
//! use indexed_list::List;
//!
//! assert_eq!(List::<i32>::new().to_string(), "[]");
//! assert_eq!(List::from([1, 2, 3]).to_string(), "[1, 2, 3]");
//! assert_eq!(
//!     List::from_iter(1..=6).to_string(),
//!     "[\n    1,\n    2,\n    3,\n    4,\n    5,\n    6\n]"
//! );
//! ```
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`CursorMut`] sit on a position and move in
//! either direction. [`CursorMut`] edits the list in place:
//! - [`insert`]: insert a new item before the cursor;
//! - [`remove`]: remove the item at the cursor;
//! - [`remove_run`]: remove a run of items starting at the cursor;
//! - [`split`]: split the list into a new one, from the cursor position to the end;
//! - [`splice`]: move every element of another list before the cursor position.
//!
//! ```
//! use indexed_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//! let mut cursor = list.cursor_mut(2).unwrap();
//!
//! cursor.insert(5); // becomes [1, 5, 2, 3, 4], points to 2
//! assert_eq!(cursor.current(), Some(&2));
//! assert_eq!(cursor.position(), 3);
//!
//! assert_eq!(cursor.remove(), Some(2)); // becomes [1, 5, 3, 4], points to 3
//! assert_eq!(list.to_vec(), vec![1, 5, 3, 4]);
//! ```
//!
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`remove_run`]: crate::list::cursor::CursorMut::remove_run
//! [`split`]: crate::list::cursor::CursorMut::split
//! [`splice`]: crate::list::cursor::CursorMut::splice

mod error;
pub mod list;

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;
