//! The 1-based positional interface of [`List`].
//!
//! Every positional operation validates its arguments through
//! [`List::check_position`], [`List::check_anchor`] or [`List::check_range`]
//! before touching the list, so a rejected call never leaves a partial
//! mutation behind.

use std::mem;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::list::cursor::{Cursor, CursorMut};
use crate::List;

// bounds validation
impl<T> List<T> {
    fn out_of_range(&self, position: usize) -> Error {
        debug!(
            "rejected position {} for a list of length {}",
            position, self.len
        );
        Error::IndexOutOfRange {
            position,
            len: self.len,
        }
    }

    /// Accepts the element positions `1..=len`.
    pub(crate) fn check_position(&self, position: usize) -> Result<()> {
        if position == 0 || position > self.len {
            return Err(self.out_of_range(position));
        }
        Ok(())
    }

    /// Accepts the insertion anchors `1..=len + 1`, where `len + 1` is the
    /// ghost node.
    pub(crate) fn check_anchor(&self, position: usize) -> Result<()> {
        if position == 0 || position > self.len + 1 {
            return Err(self.out_of_range(position));
        }
        Ok(())
    }

    /// Validates the closed range `first..=last` and returns the number of
    /// elements in it. `first > last` is an empty range and is accepted
    /// whatever the bounds are.
    pub(crate) fn check_range(&self, first: usize, last: usize) -> Result<usize> {
        if first > last {
            return Ok(0);
        }
        if first == 0 {
            return Err(self.out_of_range(first));
        }
        if last > self.len {
            return Err(self.out_of_range(last));
        }
        Ok(last - first + 1)
    }
}

impl<T> List<T> {
    /// Provides a cursor at the given position.
    ///
    /// By convention, the cursor is pointing to the "ghost" node if
    /// `position == len + 1`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `1 <= position <= len + 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(2).unwrap().current(), Some(&2));
    /// assert_eq!(list.cursor(4).unwrap().current(), None);
    /// assert!(list.cursor(5).is_err());
    /// ```
    pub fn cursor(&self, position: usize) -> Result<Cursor<'_, T>> {
        let mut cursor = self.cursor_start();
        cursor.seek_to(position)?;
        Ok(cursor)
    }

    /// Provides a cursor with editing operations at the given position.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `1 <= position <= len + 1`.
    pub fn cursor_mut(&mut self, position: usize) -> Result<CursorMut<'_, T>> {
        let mut cursor = self.cursor_start_mut();
        cursor.seek_to(position)?;
        Ok(cursor)
    }

    /// Returns the element at `position`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `1 <= position <= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::{Error, List};
    ///
    /// let list = List::from(['a', 'b', 'c']);
    /// assert_eq!(list.element_at(1), Ok(&'a'));
    /// assert_eq!(list.element_at(3), Ok(&'c'));
    /// assert_eq!(
    ///     list.element_at(0),
    ///     Err(Error::IndexOutOfRange { position: 0, len: 3 })
    /// );
    /// assert!(list.element_at(4).is_err());
    /// ```
    pub fn element_at(&self, position: usize) -> Result<&T> {
        self.check_position(position)?;
        let cursor = self.cursor(position)?;
        cursor.current().ok_or(Error::IndexOutOfRange {
            position,
            len: self.len,
        })
    }

    /// Returns a mutable reference to the element at `position`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `1 <= position <= len`.
    pub fn element_at_mut(&mut self, position: usize) -> Result<&mut T> {
        self.check_position(position)?;
        let len = self.len;
        self.cursor_mut(position)?
            .into_current_mut()
            .ok_or(Error::IndexOutOfRange { position, len })
    }

    /// Returns a new list holding a copy of the elements at positions
    /// `first..=last`, in order.
    ///
    /// `first > last` denotes an empty range: an empty list is returned and the
    /// bounds are not checked.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `first < 1` or `last > len` for a
    /// non-empty range.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let list = List::from([1, 2, 3, 4, 5]);
    /// assert_eq!(list.elements_in_range(2, 4).unwrap(), List::from([2, 3, 4]));
    /// assert!(list.elements_in_range(5, 3).unwrap().is_empty());
    /// assert!(list.elements_in_range(4, 6).is_err());
    /// ```
    pub fn elements_in_range(&self, first: usize, last: usize) -> Result<List<T>>
    where
        T: Clone,
    {
        let count = self.check_range(first, last)?;
        if count == 0 {
            return Ok(List::new());
        }
        Ok(self.cursor(first)?.iter().take(count).cloned().collect())
    }

    /// Appends `element` after the last position.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn append_element(&mut self, element: T) {
        self.push_back(element);
    }

    /// Appends every element of `elements`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from([1]);
    /// list.append_elements([2, 3]);
    /// list.append_elements(List::from([4]));
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn append_elements<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(elements);
    }

    /// Inserts `element` so that it becomes the element at `position`, shifting
    /// the elements from `position` on one place to the right.
    ///
    /// `position == len + 1` appends.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `1 <= position <= len + 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from([1]);
    /// list.insert_element_before(0, 1).unwrap();
    /// list.insert_element_before(2, 3).unwrap();
    /// assert_eq!(list.to_vec(), vec![0, 1, 2]);
    /// assert!(list.insert_element_before(9, 5).is_err());
    /// ```
    pub fn insert_element_before(&mut self, element: T, position: usize) -> Result<()> {
        self.cursor_mut(position)?.insert(element);
        Ok(())
    }

    /// Moves all of `elements` so that its first element lands at `position`,
    /// shifting the elements from `position` on `elements.len()` places to the
    /// right. The nodes of `elements` are relinked, not copied, and `elements`
    /// is left empty.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `1 <= position <= len + 1`. On error
    /// neither list is changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    /// let mut batch = List::from([-3, -2, -1]);
    /// list.insert_elements_before(&mut batch, 1).unwrap();
    /// assert_eq!(list.to_vec(), vec![-3, -2, -1, 0, 1, 2]);
    /// assert!(batch.is_empty());
    /// ```
    pub fn insert_elements_before(
        &mut self,
        elements: &mut List<T>,
        position: usize,
    ) -> Result<()> {
        self.cursor_mut(position)?.splice(elements);
        Ok(())
    }

    /// Stores `element` at `position` and returns the element previously there.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `1 <= position <= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// assert_eq!(list.replace_element_at(20, 2), Ok(2));
    /// assert_eq!(list.to_vec(), vec![1, 20, 3]);
    /// ```
    pub fn replace_element_at(&mut self, element: T, position: usize) -> Result<T> {
        Ok(mem::replace(self.element_at_mut(position)?, element))
    }

    /// Removes and returns the element at `position`, shifting the elements
    /// after it one place to the left.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `1 <= position <= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// assert_eq!(list.remove_element_at(2), Ok(2));
    /// assert_eq!(list.to_vec(), vec![1, 3]);
    /// assert!(list.remove_element_at(3).is_err());
    /// ```
    pub fn remove_element_at(&mut self, position: usize) -> Result<T> {
        self.check_position(position)?;
        let len = self.len;
        self.cursor_mut(position)?
            .remove()
            .ok_or(Error::IndexOutOfRange { position, len })
    }

    /// Removes the elements at positions `first..=last` and returns them, in
    /// order, as a new list. The elements after the range shift
    /// `last - first + 1` places to the left.
    ///
    /// `first > last` denotes an empty range: nothing is removed, an empty list
    /// is returned and the bounds are not checked.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `first < 1` or `last > len` for a
    /// non-empty range.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from_iter(1..=6);
    /// assert_eq!(list.remove_elements_in_range(2, 4).unwrap().to_vec(), vec![2, 3, 4]);
    /// assert_eq!(list.to_vec(), vec![1, 5, 6]);
    ///
    /// assert!(list.remove_elements_in_range(3, 1).unwrap().is_empty());
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn remove_elements_in_range(&mut self, first: usize, last: usize) -> Result<List<T>> {
        let count = self.check_range(first, last)?;
        if count == 0 {
            return Ok(List::new());
        }
        trace!("removing positions {}..={} of {}", first, last, self.len);
        Ok(self.cursor_mut(first)?.remove_run(count))
    }

    /// Clones the elements, in order, into the front of `destination`.
    /// Slots of `destination` past `len` are left untouched.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if `destination` is shorter than the list;
    /// `destination` is then left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::{Error, List};
    ///
    /// let list = List::from([3, 1, 2]);
    /// let mut array = [0; 4];
    /// list.copy_to_slice(&mut array).unwrap();
    /// assert_eq!(array, [3, 1, 2, 0]);
    ///
    /// let mut small = [0; 2];
    /// assert_eq!(
    ///     list.copy_to_slice(&mut small),
    ///     Err(Error::CapacityExceeded { capacity: 2, len: 3 })
    /// );
    /// ```
    pub fn copy_to_slice(&self, destination: &mut [T]) -> Result<()>
    where
        T: Clone,
    {
        if destination.len() < self.len {
            debug!(
                "destination of {} slot(s) cannot hold {} element(s)",
                destination.len(),
                self.len
            );
            return Err(Error::CapacityExceeded {
                capacity: destination.len(),
                len: self.len,
            });
        }
        destination
            .iter_mut()
            .zip(self.iter())
            .for_each(|(slot, element)| slot.clone_from(element));
        Ok(())
    }
}
