use std::{
    collections::VecDeque,
    fmt, ops,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use parking_lot::Mutex;
use smallvec::SmallVec;

type HookFn<A> = Box<dyn FnMut(&A) -> bool + Send + 'static>;

struct Hook<A> {
    handler: Mutex<HookFn<A>>,
    cancelled: Arc<AtomicBool>,
}
impl<A> Hook<A> {
    fn is_alive(&self) -> bool {
        !self.cancelled.load(Ordering::Relaxed)
    }

    fn call(&self, args: &A) -> bool {
        if !self.is_alive() {
            return false;
        }
        let mut handler = self.handler.lock();
        let retain = (&mut *handler)(args);
        if !retain {
            self.cancelled.store(true, Ordering::Relaxed);
        }
        retain
    }
}

struct EventData<A> {
    hooks: SmallVec<[Arc<Hook<A>>; 1]>,
    notifying: bool,
    pending: VecDeque<A>,
}

/// Synchronous multicast event.
///
/// Handlers are called in the order they were registered, on the thread that calls [`notify`], before
/// `notify` returns. Each handler is associated with an [`EventHandle`], dropping the handle
/// unsubscribes the handler.
///
/// Handlers registered during a notification are retained but are only called by the next notification.
///
/// A handler can cause the same event to notify again, the nested notification is queued and delivered to
/// all handlers after the current notification, before the outer [`notify`] returns. If a handler panics the
/// panic propagates to the caller of [`notify`], queued notifications are discarded and all other handlers
/// stay subscribed.
///
/// [`notify`]: Event::notify
pub struct Event<A> {
    data: Mutex<EventData<A>>,
}
impl<A> Default for Event<A> {
    fn default() -> Self {
        Self::new()
    }
}
impl<A> Event<A> {
    /// New event without subscribers.
    pub fn new() -> Self {
        Self {
            data: Mutex::new(EventData {
                hooks: SmallVec::new(),
                notifying: false,
                pending: VecDeque::new(),
            }),
        }
    }

    /// Register a `handler` that is called every notification, the closure must return `true` to be retained
    /// and `false` to be dropped.
    ///
    /// The subscription is also cancelled when the returned handle drops, use [`EventHandle::perm`] to keep it
    /// for the lifetime of the event.
    pub fn hook(&self, handler: impl FnMut(&A) -> bool + Send + 'static) -> EventHandle {
        let (cancelled, handle) = EventHandle::new();
        self.data.lock().hooks.push(Arc::new(Hook {
            handler: Mutex::new(Box::new(handler)),
            cancelled,
        }));
        handle
    }

    /// Register a `handler` that is called every notification while the returned handle is held.
    pub fn subscribe(&self, mut handler: impl FnMut(&A) + Send + 'static) -> EventHandle {
        self.hook(move |args| {
            handler(args);
            true
        })
    }

    /// Calls all live handlers with `args`.
    ///
    /// If the event is already notifying `args` is queued and delivered by the ongoing notification.
    pub fn notify(&self, args: &A)
    where
        A: Clone,
    {
        {
            let mut data = self.data.lock();
            if data.notifying {
                data.pending.push_back(args.clone());
                return;
            }
            data.notifying = true;
        }

        let mut guard = NotifyGuard {
            data: &self.data,
            finished: false,
        };

        self.notify_hooks(args);
        loop {
            let next = {
                let mut data = self.data.lock();
                let next = data.pending.pop_front();
                if next.is_none() {
                    data.notifying = false;
                }
                next
            };
            match next {
                Some(args) => self.notify_hooks(&args),
                None => break,
            }
        }

        guard.finished = true;
    }

    fn notify_hooks(&self, args: &A) {
        let _s = tracing::trace_span!("notify_hooks").entered();

        // handlers run without the lock, they can subscribe and notify
        let hooks: SmallVec<[Arc<Hook<A>>; 4]> = self.data.lock().hooks.iter().cloned().collect();

        let mut any_dropped = false;
        for hook in &hooks {
            any_dropped |= !hook.call(args);
        }

        if any_dropped {
            let mut data = self.data.lock();
            let count = data.hooks.len();
            data.hooks.retain(|h| h.is_alive());
            tracing::trace!("dropped {} event handlers", count - data.hooks.len());
        }
    }

    /// Number of subscribers that are still alive.
    ///
    /// Cancelled subscriptions are only removed on the next notification, but are not counted here.
    pub fn subscriber_count(&self) -> usize {
        self.data.lock().hooks.iter().filter(|h| h.is_alive()).count()
    }

    /// Subscribe-only reference to the event.
    pub fn subscriber(&self) -> EventSubscriber<'_, A> {
        EventSubscriber(self)
    }
}
impl<A> fmt::Debug for Event<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "type_names")]
        write!(f, "Event<{}>", pretty_type_name::pretty_type_name::<A>())?;
        #[cfg(not(feature = "type_names"))]
        write!(f, "Event")?;

        match self.data.try_lock() {
            Some(data) => {
                let count = data.hooks.iter().filter(|h| h.is_alive()).count();
                write!(f, "({count} subscribers)")
            }
            None => write!(f, "(<locked>)"),
        }
    }
}

// resets the event if a handler panics
struct NotifyGuard<'a, A> {
    data: &'a Mutex<EventData<A>>,
    finished: bool,
}
impl<'a, A> Drop for NotifyGuard<'a, A> {
    fn drop(&mut self) {
        if !self.finished {
            let mut data = self.data.lock();
            data.notifying = false;
            data.pending.clear();
        }
    }
}

/// Subscribe-only reference to an [`Event<A>`].
///
/// Element handles expose their events using this type, so that consumers can subscribe but not notify.
pub struct EventSubscriber<'a, A>(&'a Event<A>);
impl<'a, A> Clone for EventSubscriber<'a, A> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, A> Copy for EventSubscriber<'a, A> {}
impl<'a, A> EventSubscriber<'a, A> {
    /// Register a `handler` that is retained while it returns `true` and the handle is held.
    ///
    /// See [`Event::hook`] for more details.
    pub fn hook(self, handler: impl FnMut(&A) -> bool + Send + 'static) -> EventHandle {
        self.0.hook(handler)
    }

    /// Register a `handler` that is called every notification while the returned handle is held.
    pub fn subscribe(self, handler: impl FnMut(&A) + Send + 'static) -> EventHandle {
        self.0.subscribe(handler)
    }

    /// Number of subscribers that are still alive.
    pub fn subscriber_count(self) -> usize {
        self.0.subscriber_count()
    }
}
impl<'a, A> fmt::Debug for EventSubscriber<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventSubscriber").field(self.0).finish()
    }
}

/// Handle to an event subscription.
///
/// Dropping the handle cancels the subscription, use [`perm`] to keep the handler subscribed for the lifetime
/// of the event.
///
/// The handler closure is not dropped immediately when the subscription is cancelled, it drops the next
/// time the event notifies.
///
/// [`perm`]: EventHandle::perm
#[must_use = "the event subscription is cancelled if the handle is dropped"]
pub struct EventHandle(Option<Arc<AtomicBool>>);
impl EventHandle {
    /// Handle to no subscription.
    pub const fn dummy() -> Self {
        EventHandle(None)
    }

    fn new() -> (Arc<AtomicBool>, Self) {
        let cancelled = Arc::new(AtomicBool::new(false));
        (cancelled.clone(), Self(Some(cancelled)))
    }

    /// Returns `true` if the handle is a [`dummy`].
    ///
    /// [`dummy`]: EventHandle::dummy
    pub fn is_dummy(&self) -> bool {
        self.0.is_none()
    }

    /// Returns `true` if the subscription was cancelled, a hook handler can cancel itself by returning `false`.
    ///
    /// Dummy handles are always cancelled.
    pub fn is_cancelled(&self) -> bool {
        match &self.0 {
            Some(c) => c.load(Ordering::Relaxed),
            None => true,
        }
    }

    /// Drop the handle without cancelling the subscription.
    pub fn perm(mut self) {
        self.0 = None;
    }
}
impl Drop for EventHandle {
    fn drop(&mut self) {
        if let Some(c) = self.0.take() {
            c.store(true, Ordering::Relaxed);
        }
    }
}
impl fmt::Debug for EventHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dummy() {
            write!(f, "EventHandle(<dummy>)")
        } else if self.is_cancelled() {
            write!(f, "EventHandle(<cancelled>)")
        } else {
            write!(f, "EventHandle(<subscribed>)")
        }
    }
}

/// Subscriptions that are cancelled together.
///
/// Renderers usually keep one collection for each element they display and drop it when the
/// element is removed from the display.
#[must_use = "the event subscriptions are cancelled if the handles are dropped"]
#[derive(Debug, Default)]
pub struct EventHandles(SmallVec<[EventHandle; 4]>);
impl EventHandles {
    /// Empty collection.
    pub const fn dummy() -> Self {
        EventHandles(SmallVec::new_const())
    }

    /// Returns `true` if no subscription is held.
    pub fn is_dummy(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop all handles without cancelling their subscriptions.
    pub fn perm(self) {
        for handle in self.0 {
            handle.perm()
        }
    }

    /// Add the `handle` to the collection, dummy handles are ignored.
    pub fn push(&mut self, handle: EventHandle) {
        if !handle.is_dummy() {
            self.0.push(handle);
        }
    }

    /// Cancel all subscriptions.
    pub fn clear(&mut self) {
        self.0.clear()
    }
}
impl ops::Deref for EventHandles {
    type Target = [EventHandle];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
