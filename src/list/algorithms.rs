use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use log::trace;

use crate::List;

mod sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        let mut source_iter = source.iter();
        let mut cursor = self.cursor_start_mut();
        while let Some(element) = cursor.current_mut() {
            match source_iter.next() {
                Some(source_element) => element.clone_from(source_element),
                None => break,
            }
            cursor.move_next();
        }
        // drop the surplus, or append what is missing
        cursor.split();
        self.extend(source_iter.cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns a new list holding a copy of the elements of `first` followed by
    /// a copy of the elements of `second`. Both inputs are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let first = List::from([1, 2]);
    /// let second = List::from([3]);
    /// let both = List::concatenate(&first, &second);
    ///
    /// assert_eq!(both.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(List::concatenate(&both, &List::new()), both);
    /// ```
    pub fn concatenate(first: &List<T>, second: &List<T>) -> List<T>
    where
        T: Clone,
    {
        trace!(
            "concatenating lists of {} and {} element(s)",
            first.len(),
            second.len()
        );
        first.iter().chain(second).cloned().collect()
    }

    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// assert_eq!(list.contains_element(&0), true);
    /// assert_eq!(list.contains_element(&10), false);
    /// ```
    pub fn contains_element(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == element)
    }

    /// Returns `true` if at least one of `elements` is in the list.
    pub fn contains_any<'a, I>(&self, elements: I) -> bool
    where
        T: PartialEq + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        elements.into_iter().any(|e| self.contains_element(e))
    }

    /// Returns `true` if every one of `elements` is in the list. Vacuously
    /// `true` for no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let list = List::from(['a', 'b', 'c']);
    ///
    /// assert!(list.contains_all(&['c', 'a']));
    /// assert!(!list.contains_all(&['c', 'd']));
    /// assert!(list.contains_any(&['c', 'd']));
    /// ```
    pub fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        T: PartialEq + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        elements.into_iter().all(|e| self.contains_element(e))
    }

    /// Returns the 1-based position of the first element equal to `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let list = List::from([5, 6, 5]);
    ///
    /// assert_eq!(list.index_of_element(&5), Some(1));
    /// assert_eq!(list.index_of_element(&6), Some(2));
    /// assert_eq!(list.index_of_element(&7), None);
    /// ```
    pub fn index_of_element(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|e| e == element).map(|index| index + 1)
    }

    /// Removes the first element equal to `element`. Returns `true` if one was
    /// removed.
    pub fn remove_element(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = self.cursor_start_mut();
        while let Some(current) = cursor.current() {
            if current == element {
                cursor.remove();
                return true;
            }
            cursor.move_next();
        }
        false
    }

    /// Removes, for each of `elements`, the first element equal to it. Returns
    /// the number of elements removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from([1, 2, 1, 3]);
    ///
    /// assert_eq!(list.remove_elements(&[1, 3, 4]), 2);
    /// assert_eq!(list.to_vec(), vec![2, 1]);
    /// ```
    pub fn remove_elements<'a, I>(&mut self, elements: I) -> usize
    where
        T: PartialEq + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let removed = elements
            .into_iter()
            .filter(|e| self.remove_element(e))
            .count();
        trace!("removed {} element(s) by value", removed);
        removed
    }

    /// Removes every element. Same as [`List::clear`].
    #[inline]
    pub fn remove_all(&mut self) {
        self.clear();
    }

    /// Sort the list in ascending order.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and *O*(1) memory.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is done by a naive merge sort. There is no extra
    /// temporary storage during merging.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(list.into_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        sort::merge_sort(self, T::cmp);
    }

    /// Sort the list with a comparator function, so that for any two adjacent
    /// elements `a` then `b`, `compare(a, b)` is never [`Ordering::Greater`].
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut v = List::from([5, 4, 1, 3, 2]);
    /// v.sort_elements(|a, b| a.cmp(b));
    /// assert_eq!(v.to_vec(), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// v.sort_elements(|a, b| b.cmp(a));
    /// assert_eq!(v.to_vec(), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_elements<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::merge_sort(self, compare);
    }

    /// Sorts the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements)
    /// and *O*(*m* \* *n* \* log(*n*)) worst-case, where the
    /// key function is *O*(*m*).
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    /// let mut v = List::from([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(v.into_vec(), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        sort::merge_sort(self, |a, b| f(a).cmp(&f(b)));
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::List;
    use pretty_assertions::assert_eq;
    use rand::seq::SliceRandom;
    use rand::Rng;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality() {
        let list = List::from([1, 2, 3]);
        assert_eq!(list, list.clone());
        assert_ne!(list, List::from([1, 2]));
        assert_ne!(list, List::from([1, 2, 4]));
        assert_eq!(List::<i32>::new(), List::new());
        assert_eq!(hash_of(&list), hash_of(&List::from([1, 2, 3])));
        assert!(List::from([1, 2]) < List::from([1, 3]));
        assert!(List::from([1, 2]) < List::from([1, 2, 0]));
    }

    #[test]
    fn clone_from_any_length() {
        for (target, source) in [(0, 3), (3, 3), (5, 2), (2, 5), (4, 0)] {
            let mut list = List::from_iter(100..100 + target);
            let source = List::from_iter(0..source);
            list.clone_from(&source);
            assert_eq!(list, source);
        }
    }

    #[test]
    fn concatenation_identities() {
        let values = [2, 4, 1, 8, 6, 7, 3];
        let list = List::from(values);
        let empty = List::new();

        assert_eq!(List::concatenate(&empty, &list), list);
        assert_eq!(List::concatenate(&list, &empty), list);
        assert!(List::concatenate(&empty, &empty).is_empty());

        let twice = List::concatenate(&list, &list);
        assert_eq!(twice.len(), 2 * values.len());
        assert_eq!(twice.elements_in_range(1, 7).unwrap(), list);
        assert_eq!(twice.elements_in_range(8, 14).unwrap(), list);

        let mut split = twice.clone();
        let tail = split.remove_elements_in_range(8, 14).unwrap();
        assert_eq!(List::concatenate(&split, &tail), twice);

        // inputs are untouched
        assert_eq!(list.to_vec(), values.to_vec());
    }

    #[test]
    fn concatenate_two_lists() {
        let first = List::from([1, 2, 3]);
        let second = List::from([4, 5, 6]);
        let both = List::concatenate(&first, &second);
        assert_eq!(both, List::from([1, 2, 3, 4, 5, 6]));

        let mut both = both;
        let tail = both.remove_elements_in_range(4, 6).unwrap();
        assert_eq!(both, first);
        assert_eq!(tail, second);
    }

    #[test]
    fn concatenate_then_insert_list() {
        let first = List::from(['a', 'b']);
        let second = List::from(['c']);
        let mut inserted = first.clone();
        inserted.insert_elements_before(&mut second.clone(), 3).unwrap();
        assert_eq!(List::concatenate(&first, &second), inserted);
    }

    #[test]
    fn sort_in_both_directions() {
        let values = [2, 4, 1, 8, 6, 7, 3];
        let mut list = List::from(values);

        list.sort_elements(|a, b| b.cmp(a));
        assert_eq!(list.to_vec(), vec![8, 7, 6, 4, 3, 2, 1]);

        list.sort_elements(|a, b| a.cmp(b));
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 6, 7, 8]);

        let sorted = list.clone();
        list.sort();
        assert_eq!(list, sorted);
        list.sort_elements(|a, b| a.cmp(b));
        assert_eq!(list, sorted);

        list.sort_elements(|a, b| b.cmp(a));
        assert_eq!(list.to_vec(), sorted.iter().rev().copied().collect::<Vec<_>>());
    }

    #[test]
    fn sort_is_stable() {
        let mut rng = rand::thread_rng();
        let mut pairs: Vec<(u8, usize)> = (0..300).map(|i| (rng.gen_range(0..10), i)).collect();
        pairs.shuffle(&mut rng);

        let mut list = List::from(pairs.clone());
        list.sort_elements(|a, b| a.0.cmp(&b.0));
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(list.to_vec(), pairs);

        let mut by_key = List::from([(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')]);
        by_key.sort_by_key(|pair| pair.0);
        assert_eq!(by_key.to_vec(), vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn sort_large_random() {
        let mut rng = rand::thread_rng();
        let values: Vec<i64> = (0..5000).map(|_| rng.gen()).collect();
        let mut list = List::from(values.clone());
        list.sort_elements(|a, b| b.cmp(a));

        let mut expected = values;
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(list.to_vec(), expected);
        assert!(list
            .iter()
            .zip(list.iter().skip(1))
            .all(|(a, b)| a.cmp(b) != Ordering::Less));
    }

    #[test]
    fn search_and_remove_by_value() {
        let mut list = List::from(["x", "y", "z", "y"]);
        assert!(list.contains_element(&"z"));
        assert!(list.contains_any(&["q", "y"]));
        assert!(!list.contains_any(&["q"]));
        assert!(list.contains_all(&[]));
        assert_eq!(list.index_of_element(&"y"), Some(2));

        assert!(list.remove_element(&"y"));
        assert_eq!(list.to_vec(), vec!["x", "z", "y"]);
        assert!(!list.remove_element(&"w"));

        assert_eq!(list.remove_elements(&["x", "y", "y"]), 2);
        assert_eq!(list.to_vec(), vec!["z"]);

        list.remove_all();
        assert!(list.is_empty());
        assert_eq!(list.index_of_element(&"z"), None);
    }
}
