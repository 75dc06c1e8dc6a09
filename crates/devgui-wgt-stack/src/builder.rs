use std::fmt;

use devgui_element::{ChildList, ElementRef};
use devgui_var::{Event, Property, PropertyValue};

use crate::{Orientation, Spacing, Stack};

/// New stack without identifier.
///
/// Returns the builder that is the only way to configure the stack, use [`StackBuilder::view`] to get the
/// read-only handle.
///
/// # Examples
///
/// ```
/// use devgui_wgt_stack::*;
///
/// let s = stack().vertical().large_spacing().use_max_height();
///
/// assert_eq!(Orientation::Vertical, s.view().orientation());
/// assert_eq!(Spacing::Large, s.view().spacing());
/// assert!(s.view().use_max_height());
/// ```
pub fn stack() -> StackBuilder {
    StackBuilder::new(None)
}

/// New stack with identifier.
///
/// The identifier is set only here, it does not change for the lifetime of the stack.
pub fn stack_id(id: impl Into<String>) -> StackBuilder {
    StackBuilder::new(Some(id.into()))
}

/// Stack configuration.
///
/// The builder is the mutation token of one stack, it is returned by [`stack`] and [`stack_id`] and cannot be cloned, only
/// the code that created the stack can change it. The chaining methods modify the stack and return the
/// same builder, the `set_*` methods modify the stack and return if the value changed.
///
/// Each modification that changes a value notifies the property change event before returning, setting a
/// value equal to the current value does nothing.
pub struct StackBuilder {
    stack: Stack,
}
impl StackBuilder {
    fn new(id: Option<String>) -> Self {
        let stack = Stack::new(id);
        tracing::trace!(id = ?stack.id(), "new stack");
        Self { stack }
    }

    /// Read-only handle to the stack.
    ///
    /// All views refer to the same stack, views see every change made by the builder.
    pub fn view(&self) -> Stack {
        self.stack.clone()
    }

    /// Drop the builder, the stack can no longer be modified.
    pub fn into_view(self) -> Stack {
        self.stack
    }

    fn set<T: PropertyValue>(
        &self,
        name: &'static str,
        property: &Property<T>,
        changed: &Event<Stack>,
        new_value: T,
    ) -> bool {
        let is_new = property.set(new_value, changed, &self.stack);
        if is_new {
            tracing::trace!(id = ?self.stack.id(), "stack {name} changed");
        }
        is_new
    }

    /// Sets the orientation, returns `true` if it changed.
    pub fn set_orientation(&self, orientation: Orientation) -> bool {
        let s = &self.stack.0;
        self.set("orientation", &s.orientation, &s.orientation_changed, orientation)
    }

    /// Sets the spacing, returns `true` if it changed.
    pub fn set_spacing(&self, spacing: Spacing) -> bool {
        let s = &self.stack.0;
        self.set("spacing", &s.spacing, &s.spacing_changed, spacing)
    }

    /// Sets the child list, returns `true` if it changed.
    ///
    /// The list is compared by reference, any new list is a change, even if it has the same
    /// children as the current list. Empty slots are kept, they are only skipped during enumeration.
    pub fn set_children(&self, children: Option<ChildList>) -> bool {
        let s = &self.stack.0;
        self.set("children", &s.children, &s.children_changed, children)
    }

    /// Sets if the stack uses the full height available, returns `true` if it changed.
    pub fn set_use_max_height(&self, use_max_height: bool) -> bool {
        let s = &self.stack.0;
        self.set("use_max_height", &s.use_max_height, &s.height_changed, use_max_height)
    }

    /// Arrange the children vertically.
    pub fn vertical(self) -> Self {
        self.set_orientation(Orientation::Vertical);
        self
    }

    /// Arrange the children horizontally.
    pub fn horizontal(self) -> Self {
        self.set_orientation(Orientation::Horizontal);
        self
    }

    /// Sets the children displayed in the stack.
    pub fn with_children(self, children: impl Into<ChildList>) -> Self {
        self.set_children(Some(children.into()));
        self
    }

    /// Sets the space in-between children.
    pub fn with_spacing(self, spacing: Spacing) -> Self {
        self.set_spacing(spacing);
        self
    }

    /// Sets no space in-between children.
    pub fn no_spacing(self) -> Self {
        self.with_spacing(Spacing::None)
    }

    /// Sets a small space in-between children.
    pub fn small_spacing(self) -> Self {
        self.with_spacing(Spacing::Small)
    }

    /// Sets a medium space in-between children.
    pub fn medium_spacing(self) -> Self {
        self.with_spacing(Spacing::Medium)
    }

    /// Sets a large space in-between children.
    pub fn large_spacing(self) -> Self {
        self.with_spacing(Spacing::Large)
    }

    /// Use the full height available.
    pub fn use_max_height(self) -> Self {
        self.set_use_max_height(true);
        self
    }
}
impl fmt::Debug for StackBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StackBuilder").field(&self.stack).finish()
    }
}
impl From<StackBuilder> for Stack {
    fn from(builder: StackBuilder) -> Self {
        builder.into_view()
    }
}
impl From<StackBuilder> for ElementRef {
    fn from(builder: StackBuilder) -> Self {
        builder.into_view().into()
    }
}
