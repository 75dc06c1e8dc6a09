use std::{fmt, mem};

use parking_lot::RwLock;

use crate::{Event, PropertyValue};

/// Observable value storage.
///
/// The property only records a change when the new value is not equal to the current value, see
/// [`PropertyValue`] for details about what counts as equal.
///
/// Element types keep their properties private and expose only getters, the setters are
/// available to the code that owns the element.
pub struct Property<T: PropertyValue> {
    value: RwLock<T>,
}
impl<T: PropertyValue + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
impl<T: PropertyValue> Property<T> {
    /// New property with the `initial_value`.
    pub fn new(initial_value: T) -> Self {
        Self {
            value: RwLock::new(initial_value),
        }
    }

    /// Clone the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Visit the current value.
    ///
    /// Note that the property cannot be set inside `read`.
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&*self.value.read())
    }

    /// Replace the value if `new_value` is not equal to the current value.
    ///
    /// Returns `true` if the value was replaced. This method does not notify, see [`set`] for that.
    ///
    /// [`set`]: Self::set
    pub fn set_if_changed(&self, new_value: T) -> bool {
        let old_value = {
            let mut value = self.value.write();
            if *value == new_value {
                return false;
            }
            mem::replace(&mut *value, new_value)
        };
        // old value can own elements, drop after releasing the lock
        drop(old_value);
        true
    }

    /// Replace the value if `new_value` is not equal to the current value, and then notify `changed` with `sender`.
    ///
    /// The notification is synchronous, all handlers run before this method returns. Handlers can read the
    /// property, the value lock is not held during notification. If `changed` is already notifying, the
    /// case of a handler that sets the property again, the new notification runs after the current one.
    ///
    /// Returns `true` if the value changed.
    pub fn set<A: Clone>(&self, new_value: T, changed: &Event<A>, sender: &A) -> bool {
        let is_new = self.set_if_changed(new_value);
        if is_new {
            changed.notify(sender);
        }
        is_new
    }
}
impl<T: PropertyValue> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b = f.debug_struct("Property");
        #[cfg(feature = "type_names")]
        b.field("type", &pretty_type_name::pretty_type_name::<T>());
        if let Some(value) = self.value.try_read() {
            b.field("value", &*value);
        } else {
            b.field("value", &"<locked>");
        }
        b.finish()
    }
}
