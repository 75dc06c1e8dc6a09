use std::{any::Any, fmt, ops, sync::Arc};

use crate::{Descendants, ElementChildren};

/// Represents a node in the declarative UI tree.
///
/// Elements expose only read access to their state, the code that creates an element keeps the
/// means to mutate it. Container elements override [`children`] to enumerate their child elements, leaf
/// elements keep the default empty enumeration.
///
/// [`children`]: Element::children
pub trait Element: Any + Send + Sync + fmt::Debug {
    /// Identifier set when the element was created.
    ///
    /// The identifier never changes after creation.
    fn id(&self) -> Option<&str>;

    /// Enumerate the current child elements.
    ///
    /// The enumeration is derived from the current state on every call, an enumeration started after
    /// the children are replaced sees the new children.
    fn children(&self) -> ElementChildren {
        ElementChildren::empty()
    }

    /// Type erased reference, used to downcast an [`ElementRef`] back to the concrete element.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

/// Shared reference to an [`Element`].
///
/// Cloning the reference does not clone the element, all clones refer to the same element. Equality is
/// by reference.
#[derive(Clone)]
pub struct ElementRef(Arc<dyn Element>);
impl ElementRef {
    /// New reference to the `element`.
    pub fn new<E: Element>(element: Arc<E>) -> Self {
        Self(element)
    }

    /// Enumerate the descendants of the element in depth-first order, not including the element.
    ///
    /// Note that an element tree that contains itself never finishes enumerating.
    pub fn descendants(&self) -> Descendants {
        Descendants::new(self.children())
    }

    /// Returns `true` if both refer to the same element.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }

    /// Try to convert the reference to the public handle type `H`.
    ///
    /// Returns the reference back if the element is not of the type `H` represents.
    pub fn downcast<H: ElementHandle>(self) -> Result<H, ElementRef> {
        H::from_element(self)
    }

    /// Try to get the concrete element type.
    ///
    /// This is used by [`ElementHandle`] implementers, consumers should use [`downcast`].
    ///
    /// [`downcast`]: Self::downcast
    pub fn downcast_arc<E: Element>(&self) -> Option<Arc<E>> {
        match self.0.clone().into_any().downcast::<E>() {
            Ok(e) => Some(e),
            Err(_) => {
                tracing::debug!(
                    "element {:?} is not a `{}`",
                    self.id(),
                    pretty_type_name::pretty_type_name::<E>()
                );
                None
            }
        }
    }
}
impl ops::Deref for ElementRef {
    type Target = dyn Element;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
impl PartialEq for ElementRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
impl Eq for ElementRef {}
impl fmt::Debug for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
impl<E: Element> From<Arc<E>> for ElementRef {
    fn from(element: Arc<E>) -> Self {
        Self::new(element)
    }
}

/// Represents the public handle of an element type.
///
/// Element crates implement this for their read-only handle type so that the handle can be placed in
/// a [`ChildList`] and recovered from an [`ElementRef`].
///
/// [`ChildList`]: crate::ChildList
pub trait ElementHandle: Sized {
    /// Convert the reference to the handle, or return it back if the element is not of this type.
    fn from_element(element: ElementRef) -> Result<Self, ElementRef>;

    /// Convert the handle to a type erased reference.
    fn into_element(self) -> ElementRef;
}
impl ElementHandle for ElementRef {
    fn from_element(element: ElementRef) -> Result<Self, ElementRef> {
        Ok(element)
    }

    fn into_element(self) -> ElementRef {
        self
    }
}
