//! Singly linked list with array-like positional access.
//!
//! [`List`] is the per-gene container for list-encoded individuals. Each
//! node owns its successor, so the chain is released front-to-back; `Drop`
//! unlinks iteratively to keep deep chains off the call stack.
//!
//! Positional reads walk the chain: `get(pos)` is O(pos), front insertion
//! and removal are O(1), back operations are O(n). Every positional
//! operation validates its bounds eagerly and returns a [`ListError`]
//! instead of panicking on bad caller input.
//!
//! Structural mutation during iteration is ruled out at compile time:
//! [`Iter`] borrows the list for its whole lifetime.

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use thiserror::Error;

/// Positional access failure on a [`List`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The position lies outside the valid bounds for the current length.
    #[error("position {position} is out of range for a list of length {length}")]
    OutOfRange {
        /// The offending position.
        position: usize,
        /// The list length at the time of the call.
        length: usize,
    },
    /// A value was requested from a list with no elements.
    #[error("the list is empty")]
    Empty,
}

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// A singly linked, position-addressable sequence.
///
/// Positions run from `0` (front) to `len() - 1` (back). Insertion
/// additionally accepts position `len()` to append.
///
/// # Examples
///
/// ```
/// use evolist::individual::List;
///
/// let mut gene = List::from(vec![1, 3, 4]);
/// gene.swap(1, 2)?;
/// assert_eq!(gene.to_string(), "{ 1 4 3 }");
/// assert_eq!(gene.get(0)?, &1);
/// # Ok::<(), evolist::individual::ListError>(())
/// ```
pub struct List<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        List { head: None, len: 0 }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first element, or `None` on an empty list.
    ///
    /// # Complexity
    /// O(1)
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.data)
    }

    /// The last element, or `None` on an empty list.
    ///
    /// # Complexity
    /// O(n)
    pub fn back(&self) -> Option<&T> {
        self.node_at(self.len.checked_sub(1)?).map(|node| &node.data)
    }

    /// The element at `position`.
    ///
    /// # Complexity
    /// O(position)
    pub fn get(&self, position: usize) -> Result<&T, ListError> {
        self.node_at(position)
            .map(|node| &node.data)
            .ok_or(ListError::OutOfRange {
                position,
                length: self.len,
            })
    }

    /// Exclusive access to the element at `position`.
    pub fn get_mut(&mut self, position: usize) -> Result<&mut T, ListError> {
        let length = self.len;
        self.node_at_mut(position)
            .map(|node| &mut node.data)
            .ok_or(ListError::OutOfRange { position, length })
    }

    /// Prepends `value`.
    ///
    /// # Complexity
    /// O(1)
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            data: value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Appends `value`.
    ///
    /// # Complexity
    /// O(n)
    pub fn push_back(&mut self, value: T) {
        let len = self.len;
        let slot = self.slot_at(len);
        *slot = Some(Box::new(Node {
            data: value,
            next: None,
        }));
        self.len += 1;
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let node = *self.head.take().ok_or(ListError::Empty)?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.data)
    }

    /// Removes and returns the last element.
    ///
    /// # Complexity
    /// O(n)
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        self.remove(self.len - 1)
    }

    /// Inserts `value` at `position`, shifting later elements one place
    /// toward the back. `position == len()` appends.
    pub fn insert(&mut self, position: usize, value: T) -> Result<(), ListError> {
        if position > self.len {
            return Err(ListError::OutOfRange {
                position,
                length: self.len,
            });
        }
        let slot = self.slot_at(position);
        let node = Box::new(Node {
            data: value,
            next: slot.take(),
        });
        *slot = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `position`, shifting later
    /// elements one place toward the front.
    pub fn remove(&mut self, position: usize) -> Result<T, ListError> {
        if position >= self.len {
            return Err(ListError::OutOfRange {
                position,
                length: self.len,
            });
        }
        let slot = self.slot_at(position);
        let node = *slot.take().expect("length invariant: chain shorter than len");
        *slot = node.next;
        self.len -= 1;
        Ok(node.data)
    }

    /// Exchanges the values at two valid positions.
    ///
    /// The values swap in place; node identity and all other positions are
    /// untouched. `first == second` is a no-op.
    ///
    /// # Complexity
    /// O(max(first, second))
    pub fn swap(&mut self, first: usize, second: usize) -> Result<(), ListError> {
        let length = self.len;
        if first >= length {
            return Err(ListError::OutOfRange {
                position: first,
                length,
            });
        }
        if second >= length {
            return Err(ListError::OutOfRange {
                position: second,
                length,
            });
        }
        if first == second {
            return Ok(());
        }

        let (near, far) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        let mut node = self
            .head
            .as_deref_mut()
            .expect("length invariant: chain shorter than len");
        for _ in 0..near {
            node = node
                .next
                .as_deref_mut()
                .expect("length invariant: chain shorter than len");
        }
        // Split the borrow at the near node so its value stays reachable
        // while the walk continues to the far node.
        let Node {
            data: near_data,
            next,
        } = node;
        let mut far_node = next
            .as_deref_mut()
            .expect("length invariant: chain shorter than len");
        for _ in 0..far - near - 1 {
            far_node = far_node
                .next
                .as_deref_mut()
                .expect("length invariant: chain shorter than len");
        }
        mem::swap(near_data, &mut far_node.data);
        Ok(())
    }

    /// Stores `value` at `position` and returns the previous value.
    pub fn replace(&mut self, position: usize, value: T) -> Result<T, ListError> {
        let slot = self.get_mut(position)?;
        Ok(mem::replace(slot, value))
    }

    /// Front-to-back iterator over shared references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// `true` if every element satisfies `predicate`. Vacuously `true` on
    /// an empty list.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// `true` if any element satisfies `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// The first element satisfying `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|&item| predicate(item))
    }

    /// The position of the first element satisfying `predicate`.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    fn node_at(&self, position: usize) -> Option<&Node<T>> {
        let mut current = self.head.as_deref();
        for _ in 0..position {
            current = current?.next.as_deref();
        }
        current
    }

    fn node_at_mut(&mut self, position: usize) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..position {
            current = current?.next.as_deref_mut();
        }
        current
    }

    /// The link that points at `position`: the head link for `0`, otherwise
    /// the previous node's `next`. Callers guarantee `position <= len`.
    fn slot_at(&mut self, position: usize) -> &mut Option<Box<Node<T>>> {
        let mut slot = &mut self.head;
        for _ in 0..position {
            slot = &mut slot
                .as_mut()
                .expect("length invariant: chain shorter than len")
                .next;
        }
        slot
    }
}

impl<T: PartialEq> List<T> {
    /// `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }

    /// The position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// The position of the last element equal to `value`.
    ///
    /// Single forward scan; the chain has no back links.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        let mut found = None;
        for (position, item) in self.iter().enumerate() {
            if item == value {
                found = Some(position);
            }
        }
        found
    }
}

impl<T: Clone> List<T> {
    /// Materializes the elements front-to-back.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `{ e1 e2 ... en }`; an empty list renders as `{ }`.
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for value in self {
            write!(f, "{value} ")?;
        }
        write!(f, "}}")
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> FromIterator<T> for List<T> {
    /// Builds front-to-back in one pass by chasing the tail link.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        let mut tail = &mut list.head;
        for value in iter {
            let node = tail.insert(Box::new(Node {
                data: value,
                next: None,
            }));
            list.len += 1;
            tail = &mut node.next;
        }
        list
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // Unlink iteratively so deep chains cannot overflow the stack.
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Borrowing front-to-back iterator over a [`List`].
pub struct Iter<'a, T> {
    node: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.node?;
        self.node = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Consuming front-to-back iterator over a [`List`].
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for List<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(List::from)
    }
}
