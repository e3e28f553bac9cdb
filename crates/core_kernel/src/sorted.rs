//! Comparator-ordered collection
//!
//! [`SortedList`] keeps its elements in the order defined by a comparator
//! supplied at construction. It is backed by an unbalanced binary search
//! tree: inserting already-sorted input degrades to a linked chain, so every
//! walk over the tree (insertion, removal, iteration, teardown) is iterative
//! and never recurses on tree depth.
//!
//! The list makes no tie-breaking decision of its own. An element that
//! compares equal to one already present is placed in that element's right
//! subtree, so equal elements come out of iteration in insertion order only
//! as far as the comparator allows. Comparators that need a stable order
//! among ties must include a secondary key.
//!
//! To order entities without taking ownership, store references:
//!
//! ```rust
//! use core_kernel::SortedList;
//!
//! let names = vec!["delta".to_string(), "alpha".to_string(), "charlie".to_string()];
//! let mut sorted = SortedList::new(|a: &&String, b: &&String| a.cmp(b));
//! sorted.add_all(names.iter());
//!
//! let ordered: Vec<&str> = sorted.iter().map(|s| s.as_str()).collect();
//! assert_eq!(ordered, ["alpha", "charlie", "delta"]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Errors raised when reading from a [`SortedList`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortedListError {
    #[error("The list is empty")]
    Empty,

    #[error("Index {index} out of bounds for list of size {size}")]
    IndexOutOfBounds {
        index: usize,
        size: usize,
    },
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// A collection kept in comparator order
///
/// # Invariants
///
/// - An in-order walk yields elements in non-decreasing comparator order
/// - `len()` equals the number of nodes in the tree
pub struct SortedList<T, C> {
    root: Link<T>,
    len: usize,
    compare: C,
}

impl<T, C> SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty list ordered by `compare`
    pub fn new(compare: C) -> Self {
        Self {
            root: None,
            len: 0,
            compare,
        }
    }

    /// Inserts an element at its sorted position
    ///
    /// Runs in O(height): logarithmic for shuffled input, linear for input
    /// that arrives already sorted.
    pub fn add(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if (self.compare)(&value, &node.value) == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::leaf(value));
        self.len += 1;
    }

    /// Inserts every element of `values`
    pub fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.add(value);
        }
    }

    /// Removes one element that compares equal to `value`
    ///
    /// Returns `false` and leaves the list untouched when no element matches.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                None => return false,
                Some(node) => (self.compare)(value, &node.value),
            };
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = link else {
                return false;
            };
            link = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        unlink(link);
        self.len -= 1;
        true
    }

    /// Returns true if an element comparing equal to `value` is present
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match (self.compare)(value, &node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }
}

impl<T, C> SortedList<T, C> {
    /// Returns the element at `index` in sorted order
    ///
    /// Walks the list from the start on every call.
    pub fn get(&self, index: usize) -> Result<&T, SortedListError> {
        if index >= self.len {
            return Err(SortedListError::IndexOutOfBounds {
                index,
                size: self.len,
            });
        }
        self.iter().nth(index).ok_or(SortedListError::IndexOutOfBounds {
            index,
            size: self.len,
        })
    }

    /// Returns the smallest element
    pub fn first(&self) -> Result<&T, SortedListError> {
        let mut node = self.root.as_deref().ok_or(SortedListError::Empty)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Returns the largest element
    pub fn last(&self) -> Result<&T, SortedListError> {
        let mut node = self.root.as_deref().ok_or(SortedListError::Empty)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every element
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Returns an iterator over the elements in sorted order
    ///
    /// Each call starts a fresh traversal of the current tree.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

/// Removes the node held by `link`, which must be occupied
///
/// A leaf is dropped, a node with one child is replaced by that child, and a
/// node with two children takes over the value of its in-order successor,
/// which is then detached from the right subtree.
fn unlink<T>(link: &mut Link<T>) {
    let Some(mut node) = link.take() else {
        return;
    };
    *link = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            node.left = Some(left);
            node.right = Some(right);
            if let Some(successor) = detach_min(&mut node.right) {
                node.value = successor;
            }
            Some(node)
        }
    };
}

/// Detaches the leftmost node of a subtree and returns its value
fn detach_min<T>(mut link: &mut Link<T>) -> Option<T> {
    loop {
        let has_left = match link.as_deref() {
            None => return None,
            Some(node) => node.left.is_some(),
        };
        if !has_left {
            break;
        }
        let Some(node) = link else {
            return None;
        };
        link = &mut node.left;
    }

    let node = link.take()?;
    let Node { value, right, .. } = *node;
    *link = right;
    Some(value)
}

impl<T, C> Drop for SortedList<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SortedList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C> Extend<T> for SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T, C> IntoIterator for &'a SortedList<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`SortedList`]
///
/// Holds a shared borrow of the list, so the list cannot be modified while
/// the iterator is alive.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
