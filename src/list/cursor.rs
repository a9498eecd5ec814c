use crate::error::Result;
use crate::list::{next_of, prev_of, List, Node};
use crate::Iter;
use log::trace;
use std::ptr::NonNull;

/// A read-only position in a `List` that can walk in both directions.
///
/// A list of *n* elements has *n* + 1 cursor positions. Positions `1..=n`
/// sit on elements, and position *n* + 1 sits on the ghost node past the
/// last element.
///
/// # Examples
///
/// Below, `|` marks the cursor and `#` the ghost node.
/// ```
/// use indexed_list::List;
///
/// let list = List::from(['A', 'B', 'C', 'D']);
///
/// // [|A B C D #], position 1
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // [ A|B C D #], position 2
/// assert!(cursor.move_next());
/// assert_eq!((cursor.previous(), cursor.current()), (Some(&'A'), Some(&'B')));
///
/// // [ A B C D|#], position 5
/// cursor.seek_to(5).unwrap();
/// assert_eq!((cursor.previous(), cursor.current()), (Some(&'D'), None));
///
/// // the ghost node is the last stop
/// assert!(!cursor.move_next());
/// assert_eq!(cursor.position(), 5);
/// ```
#[derive(Clone)]
pub struct Cursor<'a, T: 'a> {
    index: usize,
    current: NonNull<Node<T>>,
    list: &'a List<T>,
}

/// A cursor that can also edit the list around it.
///
/// It borrows the list exclusively, and the elements it hands out borrow
/// the cursor, so only one of them is reachable at a time.
///
/// # Examples
///
/// ```compile_fail
/// use indexed_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.element_at(1));
/// cursor.insert(0);
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    current: NonNull<Node<T>>,
    list: &'a mut List<T>,
}

/// Navigation shared by [`Cursor`] and [`CursorMut`].
macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            fn at_ghost(&self) -> bool {
                self.current == self.list.ghost_node()
            }

            fn node_after(&self) -> NonNull<Node<T>> {
                // SAFETY: every node of a cyclic list has a successor.
                unsafe { next_of(self.current) }
            }

            fn node_before(&self) -> NonNull<Node<T>> {
                // SAFETY: every node of a cyclic list has a predecessor.
                unsafe { prev_of(self.current) }
            }

            /// Takes `steps` steps towards the back.
            ///
            /// It is unsafe because `index + steps` must not exceed `len`,
            /// or `index` no longer matches `current`.
            unsafe fn walk_forward(&mut self, steps: usize) {
                for _ in 0..steps {
                    self.current = self.node_after();
                }
                self.index += steps;
            }

            /// Takes `steps` steps towards the front.
            ///
            /// It is unsafe because `steps` must not exceed `index`.
            unsafe fn walk_backward(&mut self, steps: usize) {
                for _ in 0..steps {
                    self.current = self.node_before();
                }
                self.index -= steps;
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// The 1-based position of the cursor, `len + 1` at the ghost node.
            pub fn position(&self) -> usize {
                self.index + 1
            }

            /// Steps one position towards the back in *O*(1) time. At the ghost
            /// node it stays put and returns `false`.
            pub fn move_next(&mut self) -> bool {
                if self.at_ghost() {
                    return false;
                }
                self.current = self.node_after();
                self.index += 1;
                true
            }

            /// Steps one position towards the front in *O*(1) time. At position
            /// 1 it stays put and returns `false`.
            pub fn move_prev(&mut self) -> bool {
                if self.index == 0 {
                    return false;
                }
                self.current = self.node_before();
                self.index -= 1;
                true
            }

            /// Moves to `position`, walking from the front, the ghost node or
            /// the current node, whichever is closest.
            ///
            /// # Errors
            ///
            /// [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) unless
            /// `1 <= position <= len + 1`. The cursor does not move then.
            ///
            /// # Examples
            ///
            /// ```
            /// use indexed_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            /// cursor.seek_to(3).unwrap();
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// assert!(cursor.seek_to(5).is_err());
            /// assert!(cursor.seek_to(0).is_err());
            /// assert_eq!(cursor.position(), 3);
            /// ```
            pub fn seek_to(&mut self, position: usize) -> Result<()> {
                self.list.check_anchor(position)?;
                let (target, len) = (position - 1, self.list.len());
                let from_front = target;
                let from_ghost = len - target;
                if from_front.min(from_ghost) < target.abs_diff(self.index) {
                    if from_front <= from_ghost {
                        self.move_to_start();
                    } else {
                        self.move_to_end();
                    }
                }
                // SAFETY: `index` and `target` are both in `0..=len`, so the walk
                // between them never wraps around the ghost node.
                unsafe {
                    if target > self.index {
                        self.walk_forward(target - self.index);
                    } else {
                        self.walk_backward(self.index - target);
                    }
                }
                Ok(())
            }

            /// Jumps to position 1 in *O*(1) time.
            #[inline]
            pub fn move_to_start(&mut self) {
                self.index = 0;
                self.current = self.list.front_node();
            }

            /// Jumps to the ghost node (position `len + 1`) in *O*(1) time.
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list.len();
                self.current = self.list.ghost_node();
            }
        }
    };
}

impl_cursor!(Cursor);
impl_cursor!(CursorMut);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    /// The element under the cursor, `None` at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(1).unwrap().current(), Some(&1));
    /// assert_eq!(list.cursor(3).unwrap().current(), Some(&3));
    /// assert_eq!(list.cursor(4).unwrap().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        if self.at_ghost() {
            return None;
        }
        // SAFETY: every node but the ghost holds an element.
        unsafe { Some(&(*self.current.as_ptr()).element) }
    }

    /// The element at `position() - 1`, `None` at position 1.
    pub fn previous(&self) -> Option<&'a T> {
        if self.index == 0 {
            return None;
        }
        // SAFETY: the previous node of a non-first node is never the ghost node.
        unsafe { Some(&(*self.node_before().as_ptr()).element) }
    }

    /// Iterates from the element under the cursor to the back of the list.
    /// The iterator borrows the list, not the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let list = List::from([1, 2, 3, 4]);
    /// let tail: Vec<_> = list.cursor(3).unwrap().iter().collect();
    /// assert_eq!(tail, vec![&3, &4]);
    /// ```
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::from_range(
            self.current,
            self.list.ghost_node(),
            self.list.len() - self.index,
        )
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }
}

// element access; the links are left alone
impl<'a, T: 'a> CursorMut<'a, T> {
    /// See [`Cursor::current`].
    pub fn current(&self) -> Option<&T> {
        if self.at_ghost() {
            return None;
        }
        // SAFETY: every node but the ghost holds an element.
        unsafe { Some(&(*self.current.as_ptr()).element) }
    }

    /// See [`Cursor::previous`].
    pub fn previous(&self) -> Option<&T> {
        if self.index == 0 {
            return None;
        }
        // SAFETY: the previous node of a non-first node is never the ghost node.
        unsafe { Some(&(*self.node_before().as_ptr()).element) }
    }

    /// The element under the cursor for writing, `None` at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_mut(1).unwrap();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // the ghost node has no element
    /// assert!(list.cursor_mut(4).unwrap().current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.at_ghost() {
            return None;
        }
        // SAFETY: every node but the ghost holds an element.
        unsafe { Some(&mut (*self.current.as_ptr()).element) }
    }

    /// Like [`CursorMut::current_mut`], giving up the cursor so the element
    /// stays borrowed for as long as the list is.
    pub fn into_current_mut(self) -> Option<&'a mut T> {
        if self.at_ghost() {
            return None;
        }
        // SAFETY: every node but the ghost holds an element, and the cursor
        // that could reach it again is gone.
        unsafe { Some(&mut (*self.current.as_ptr()).element) }
    }

    /// Reads the whole list without giving up the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert_eq!(cursor.view().back(), Some(&3));
    ///
    /// cursor.insert(4);
    /// assert_eq!(list.to_vec(), vec![4, 1, 2, 3]);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// edits that relink nodes
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Links `item` in front of the cursor in *O*(1) time. The cursor keeps
    /// its node, so its position grows by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(2).unwrap();
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.position(), 3);
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(5); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.position(), 6);
    /// assert_eq!(cursor.previous(), Some(&5));
    ///
    /// assert_eq!(list.to_vec(), vec![1, 4, 2, 3, 5]);
    /// ```
    pub fn insert(&mut self, item: T) {
        // SAFETY: `self.current` is a node of the list.
        unsafe { self.list.link_element_before(self.current, item) };
        self.index += 1;
    }

    /// Unlinks the element under the cursor in *O*(1) time and returns it.
    /// The cursor lands on the following node at the same position. `None`
    /// at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(6).unwrap();
    ///
    /// assert_eq!(cursor.remove(), Some(5)); // becomes [0, 1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.position(), 6);
    /// assert_eq!(cursor.current(), Some(&6));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.at_ghost() {
            return None;
        }
        let next = self.node_after();
        // SAFETY: `self.current` is an element node of the list.
        let element = unsafe { self.list.unlink_element(self.current) };
        self.current = next;
        Some(element)
    }

    /// Unlinks up to `count` elements starting under the cursor and returns
    /// them as a new list; the nodes themselves are handed over. The cursor
    /// lands on the node after the run at the same position.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(3).unwrap();
    ///
    /// let run = cursor.remove_run(4);
    /// assert_eq!(cursor.current(), Some(&6));
    /// assert_eq!(run.to_vec(), vec![2, 3, 4, 5]);
    /// assert_eq!(list.to_vec(), vec![0, 1, 6, 7, 8, 9]);
    /// ```
    pub fn remove_run(&mut self, count: usize) -> List<T> {
        let count = count.min(self.list.len() - self.index);
        if count == 0 {
            return List::new();
        }
        trace!(
            "unlinking {} node(s) at position {} of {}",
            count,
            self.position(),
            self.list.len()
        );
        let front = self.current;
        let mut back = front;
        // SAFETY: there are at least `count` non-ghost nodes from `front`.
        (1..count).for_each(|_| back = unsafe { next_of(back) });
        // SAFETY: `front..=back` is a valid range of `count` nodes of the list.
        unsafe {
            self.current = next_of(back);
            List::from_run(self.list.unlink_run(front, back, count))
        }
    }

    /// Cuts the list at the cursor and returns the back part, the element
    /// under the cursor included. Empty at the ghost node.
    pub fn split(&mut self) -> List<T> {
        let remaining = self.list.len() - self.index;
        self.remove_run(remaining)
    }

    /// Relinks every node of `other` in front of the cursor in *O*(1) time,
    /// leaving `other` empty. The cursor keeps its node.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from([0, 1, 7, 8, 9]);
    /// let mut list2 = List::from([2, 3, 4, 5, 6]);
    /// let mut cursor = list.cursor_mut(3).unwrap();
    ///
    /// cursor.splice(&mut list2);
    /// assert_eq!(cursor.current(), Some(&7));
    /// assert_eq!(cursor.position(), 8);
    ///
    /// assert_eq!(list.to_vec(), Vec::from_iter(0..10));
    /// assert!(list2.is_empty());
    /// ```
    pub fn splice(&mut self, other: &mut List<T>) {
        let Some(run) = other.take_run() else {
            return;
        };
        trace!("splicing {} node(s) before position {}", run.len(), self.position());
        self.index += run.len();
        // SAFETY: `self.current` is a node of the list.
        unsafe { self.list.link_run_before(self.current, run) };
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
