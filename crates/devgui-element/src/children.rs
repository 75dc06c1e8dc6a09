use std::{fmt, iter::FusedIterator};

use devgui_var::ArcEq;

use crate::{ElementHandle, ElementRef};

/// Shared array of child element slots.
///
/// Slots can be empty (`None`), empty slots are kept in the array and skipped only when
/// the children are enumerated, so [`len`] can be greater than the enumerated count.
///
/// Equality is by reference, a new list with the same elements in the same order is not equal to
/// the previous list. Container elements use this to notify a change every time a new list is assigned.
///
/// [`len`]: ChildList::len
#[derive(Clone, PartialEq, Eq)]
pub struct ChildList(ArcEq<[Option<ElementRef>]>);
impl ChildList {
    /// New list from slots.
    pub fn new(slots: Vec<Option<ElementRef>>) -> Self {
        Self(ArcEq::from(slots))
    }

    /// New empty list.
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Number of slots, including empty slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// If the list has no slots.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets the slot at the `index`.
    ///
    /// Returns `None` if the index is out of bounds and `Some(None)` if the slot is empty.
    pub fn get(&self, index: usize) -> Option<Option<&ElementRef>> {
        self.0.get(index).map(Option::as_ref)
    }

    /// All slots, including empty slots.
    pub fn slots(&self) -> &[Option<ElementRef>] {
        &self.0
    }

    /// Iterate over the elements, skipping empty slots.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ElementRef> + '_ {
        self.0.iter().flatten()
    }

    /// Returns `true` if both are the same list instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }
}
impl fmt::Debug for ChildList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
impl From<Vec<Option<ElementRef>>> for ChildList {
    fn from(slots: Vec<Option<ElementRef>>) -> Self {
        Self::new(slots)
    }
}
impl From<Vec<ElementRef>> for ChildList {
    fn from(elements: Vec<ElementRef>) -> Self {
        elements.into_iter().collect()
    }
}
impl<H: ElementHandle, const N: usize> From<[H; N]> for ChildList {
    fn from(elements: [H; N]) -> Self {
        elements.into_iter().map(ElementHandle::into_element).collect()
    }
}
impl FromIterator<ElementRef> for ChildList {
    fn from_iter<T: IntoIterator<Item = ElementRef>>(iter: T) -> Self {
        iter.into_iter().map(Some).collect()
    }
}
impl FromIterator<Option<ElementRef>> for ChildList {
    fn from_iter<T: IntoIterator<Item = Option<ElementRef>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
impl<'a> IntoIterator for &'a ChildList {
    type Item = &'a ElementRef;

    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Option<ElementRef>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().flatten()
    }
}

/// Lazy enumeration of the children of an element.
///
/// The iterator holds the list that was current when the enumeration started and yields each
/// non-empty slot in order.
#[derive(Clone, Default)]
pub struct ElementChildren {
    list: Option<ChildList>,
    next: usize,
}
impl ElementChildren {
    /// Enumerate the elements in `list`, or nothing if the list is `None`.
    pub fn new(list: Option<ChildList>) -> Self {
        Self { list, next: 0 }
    }

    /// Enumerate nothing.
    pub fn empty() -> Self {
        Self::new(None)
    }
}
impl Iterator for ElementChildren {
    type Item = ElementRef;

    fn next(&mut self) -> Option<Self::Item> {
        let slots = self.list.as_ref()?.slots();
        while let Some(slot) = slots.get(self.next) {
            self.next += 1;
            if let Some(child) = slot {
                return Some(child.clone());
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .list
            .as_ref()
            .map(|l| l.len().saturating_sub(self.next))
            .unwrap_or(0);
        (0, Some(remaining))
    }
}
impl FusedIterator for ElementChildren {}
impl fmt::Debug for ElementChildren {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementChildren")
            .field("list", &self.list)
            .field("next", &self.next)
            .finish()
    }
}

/// Depth-first enumeration of the descendants of an element.
///
/// The children of each element are enumerated lazily when the walk reaches the element.
#[derive(Debug)]
pub struct Descendants {
    stack: Vec<ElementChildren>,
}
impl Descendants {
    /// Walk the `children` and all their descendants.
    pub fn new(children: ElementChildren) -> Self {
        Self { stack: vec![children] }
    }
}
impl Iterator for Descendants {
    type Item = ElementRef;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(children) = self.stack.last_mut() {
            if let Some(child) = children.next() {
                self.stack.push(child.children());
                return Some(child);
            }
            self.stack.pop();
        }
        None
    }
}
impl FusedIterator for Descendants {}
