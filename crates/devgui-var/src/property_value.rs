use std::{any::Any, fmt, ops, sync::Arc};

/// Represents a type that can be a [`Property<T>`] value.
///
/// # Trait Alias
///
/// This trait is used like a type alias for traits and is
/// already implemented for all types it can apply to.
///
/// # Implementing
///
/// Types need to be `Debug + Clone + PartialEq + Send + Sync + Any` to auto-implement this trait.
/// The `PartialEq` implementation defines what counts as a change, the property only notifies
/// when the new value is not equal to the current value.
///
/// If you want a property to notify on every new instance of a value use the [`ArcEq<T>`] wrapper,
/// it implements equality by pointer comparison.
///
/// [`Property<T>`]: crate::Property
pub trait PropertyValue: fmt::Debug + Clone + PartialEq + Any + Send + Sync {}
impl<T: fmt::Debug + Clone + PartialEq + Any + Send + Sync> PropertyValue for T {}

/// Shared value that is equal only to its own clones.
///
/// Values with identical contents allocated separately are not equal, setting a property to a new
/// `ArcEq` always counts as a change, even if the contents are the same. Element child lists use this
/// to notify every time a new list is assigned.
pub struct ArcEq<T: fmt::Debug + Send + Sync + ?Sized>(Arc<T>);
impl<T: fmt::Debug + Send + Sync + ?Sized> ArcEq<T> {
    /// Returns `true` if both are clones of the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl<T: fmt::Debug + Send + Sync + ?Sized> ops::Deref for ArcEq<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}
impl<T: fmt::Debug + Send + Sync + ?Sized> PartialEq for ArcEq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
impl<T: fmt::Debug + Send + Sync + ?Sized> Eq for ArcEq<T> {}
impl<T: fmt::Debug + Send + Sync + ?Sized> Clone for ArcEq<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<T: fmt::Debug + Send + Sync + ?Sized> fmt::Debug for ArcEq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
impl<T: fmt::Debug + Send + Sync> From<Vec<T>> for ArcEq<[T]> {
    fn from(items: Vec<T>) -> Self {
        Self(items.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_eq_is_by_reference() {
        let a = ArcEq::from(vec![1, 2, 3]);
        let b = ArcEq::from(vec![1, 2, 3]);

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(&a[..], &b[..]);
    }
}
