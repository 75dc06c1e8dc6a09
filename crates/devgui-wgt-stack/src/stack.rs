use std::{any::Any, fmt, sync::Arc};

use devgui_element::{ChildList, Element, ElementChildren, ElementHandle, ElementRef};
use devgui_var::{Event, EventHandles, EventSubscriber, Property};

use crate::{Orientation, Spacing};

/// Container element that arranges children along one axis.
///
/// This is the read-only public handle of the element, clones of the handle refer to the same element.
/// The element is created and configured by a [`StackBuilder`], only the builder can change the properties.
///
/// Each property has a dedicated change event, the event notifies synchronously, once for each
/// actual change, with the stack as the sender.
///
/// [`StackBuilder`]: crate::StackBuilder
#[derive(Clone)]
pub struct Stack(pub(crate) Arc<StackData>);

pub(crate) struct StackData {
    id: Option<String>,
    pub(crate) orientation: Property<Orientation>,
    pub(crate) spacing: Property<Spacing>,
    pub(crate) children: Property<Option<ChildList>>,
    pub(crate) use_max_height: Property<bool>,

    pub(crate) orientation_changed: Event<Stack>,
    pub(crate) spacing_changed: Event<Stack>,
    pub(crate) children_changed: Event<Stack>,
    pub(crate) height_changed: Event<Stack>,
}

impl Stack {
    pub(crate) fn new(id: Option<String>) -> Self {
        Self(Arc::new(StackData {
            id,
            orientation: Property::default(),
            spacing: Property::default(),
            children: Property::default(),
            use_max_height: Property::default(),
            orientation_changed: Event::new(),
            spacing_changed: Event::new(),
            children_changed: Event::new(),
            height_changed: Event::new(),
        }))
    }

    /// Identifier set when the stack was created.
    pub fn id(&self) -> Option<&str> {
        self.0.id.as_deref()
    }

    /// Dimension by which the children are arranged.
    ///
    /// Is [`Orientation::Horizontal`] by default.
    pub fn orientation(&self) -> Orientation {
        self.0.orientation.get()
    }

    /// Space in-between children.
    ///
    /// Is [`Spacing::Small`] by default.
    pub fn spacing(&self) -> Spacing {
        self.0.spacing.get()
    }

    /// Current child list, including empty slots.
    ///
    /// Is `None` by default. Use [`enumerate_children`] to iterate only over the actual children.
    ///
    /// [`enumerate_children`]: Self::enumerate_children
    pub fn children(&self) -> Option<ChildList> {
        self.0.children.get()
    }

    /// If the stack should use the full height available.
    ///
    /// Is `false` by default.
    pub fn use_max_height(&self) -> bool {
        self.0.use_max_height.get()
    }

    /// Enumerate the current children, skipping empty slots.
    pub fn enumerate_children(&self) -> ElementChildren {
        self.0.children()
    }

    /// Event that notifies when [`orientation`] changes.
    ///
    /// [`orientation`]: Self::orientation
    pub fn orientation_changed(&self) -> EventSubscriber<'_, Stack> {
        self.0.orientation_changed.subscriber()
    }

    /// Event that notifies when [`spacing`] changes.
    ///
    /// [`spacing`]: Self::spacing
    pub fn spacing_changed(&self) -> EventSubscriber<'_, Stack> {
        self.0.spacing_changed.subscriber()
    }

    /// Event that notifies when a new child list is set.
    ///
    /// The list is compared by reference, a new list with the same children notifies.
    pub fn children_changed(&self) -> EventSubscriber<'_, Stack> {
        self.0.children_changed.subscriber()
    }

    /// Event that notifies when [`use_max_height`] changes.
    ///
    /// [`use_max_height`]: Self::use_max_height
    pub fn height_changed(&self) -> EventSubscriber<'_, Stack> {
        self.0.height_changed.subscriber()
    }

    /// Subscribe `handler` to all property change events of the stack.
    ///
    /// The handler is called once for each property that changes, drop the handles to unsubscribe.
    pub fn subscribe_changes(
        &self,
        handler: impl Fn(&Stack) + Send + Sync + 'static,
    ) -> EventHandles {
        let handler = Arc::new(handler);
        let mut handles = EventHandles::dummy();
        for event in [
            self.orientation_changed(),
            self.spacing_changed(),
            self.children_changed(),
            self.height_changed(),
        ] {
            let handler = handler.clone();
            handles.push(event.subscribe(move |s| (*handler)(s)));
        }
        handles
    }

    /// Returns `true` if both handles refer to the same stack.
    pub fn ptr_eq(&self, other: &Stack) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl PartialEq for Stack {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
impl Eq for Stack {}
impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
impl ElementHandle for Stack {
    fn from_element(element: ElementRef) -> Result<Self, ElementRef> {
        match element.downcast_arc::<StackData>() {
            Some(s) => Ok(Stack(s)),
            None => Err(element),
        }
    }

    fn into_element(self) -> ElementRef {
        ElementRef::new(self.0)
    }
}
impl From<Stack> for ElementRef {
    fn from(stack: Stack) -> Self {
        stack.into_element()
    }
}
impl TryFrom<ElementRef> for Stack {
    type Error = ElementRef;

    fn try_from(element: ElementRef) -> Result<Self, Self::Error> {
        Stack::from_element(element)
    }
}

impl Element for StackData {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn children(&self) -> ElementChildren {
        ElementChildren::new(self.children.get())
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}
impl fmt::Debug for StackData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Stack")
                .field("id", &self.id)
                .field("orientation", &self.orientation.get())
                .field("spacing", &self.spacing.get())
                .field("children", &self.children.get())
                .field("use_max_height", &self.use_max_height.get())
                .finish()
        } else {
            f.debug_struct("Stack")
                .field("id", &self.id)
                .field("orientation", &self.orientation.get())
                .finish_non_exhaustive()
        }
    }
}
