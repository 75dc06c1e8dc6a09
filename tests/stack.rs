use std::sync::Arc;

use devgui::{element::ElementChildren, prelude::*};
use parking_lot::Mutex;

fn init_log() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Changed {
    Orientation,
    Spacing,
    Children,
    Height,
}

fn record(s: &Stack) -> (Arc<Mutex<Vec<Changed>>>, EventHandles) {
    let log = Arc::new(Mutex::new(vec![]));
    let mut handles = EventHandles::dummy();
    for (changed, event) in [
        (Changed::Orientation, s.orientation_changed()),
        (Changed::Spacing, s.spacing_changed()),
        (Changed::Children, s.children_changed()),
        (Changed::Height, s.height_changed()),
    ] {
        let log = log.clone();
        handles.push(event.subscribe(move |_| log.lock().push(changed)));
    }
    (log, handles)
}

fn leaf(id: &str) -> ElementRef {
    stack_id(id).into()
}

fn ids(children: ElementChildren) -> Vec<String> {
    children.map(|c| c.id().unwrap_or_default().to_owned()).collect()
}

#[test]
fn default_stack() {
    init_log();

    let b = stack();
    let (log, _h) = record(&b.view());
    let s = b.into_view();

    assert_eq!(None, s.id());
    assert_eq!(Orientation::Horizontal, s.orientation());
    assert_eq!(Spacing::Small, s.spacing());
    assert!(s.children().is_none());
    assert!(!s.use_max_height());
    assert!(log.lock().is_empty());
}

#[test]
fn vertical_twice_notifies_once() {
    init_log();

    let b = stack_id("s1");
    let (log, _h) = record(&b.view());

    let b = b.vertical();
    let b = b.vertical();

    assert_eq!(Some("s1"), b.view().id());
    assert_eq!(&[Changed::Orientation], &log.lock()[..]);
}

#[test]
fn same_value_never_notifies() {
    init_log();

    let b = stack_id("s").vertical().large_spacing().use_max_height();
    let (log, _h) = record(&b.view());

    let _b = b.vertical().large_spacing().use_max_height();

    assert!(log.lock().is_empty());
}

#[test]
fn each_property_notifies_once_per_change() {
    init_log();

    let b = stack_id("s");
    let (log, _h) = record(&b.view());

    let b = b
        .vertical()
        .horizontal()
        .no_spacing()
        .medium_spacing()
        .with_children(vec![leaf("a")])
        .use_max_height();

    assert_eq!(
        &[
            Changed::Orientation,
            Changed::Orientation,
            Changed::Spacing,
            Changed::Spacing,
            Changed::Children,
            Changed::Height,
        ],
        &log.lock()[..]
    );
    assert!(b.set_use_max_height(false));
    assert_eq!(Some(&Changed::Height), log.lock().last());
}

#[test]
fn chain_applies_last_values_in_call_order() {
    init_log();

    let b = stack_id("s");
    let (log, _h) = record(&b.view());
    let a = leaf("a");
    let c = leaf("c");

    let b = b
        .vertical()
        .with_spacing(Spacing::Large)
        .with_children(vec![a.clone(), c.clone()])
        .use_max_height();

    let s = b.view();
    assert_eq!(Orientation::Vertical, s.orientation());
    assert_eq!(Spacing::Large, s.spacing());
    assert_eq!(vec![a, c], s.enumerate_children().collect::<Vec<_>>());
    assert!(s.use_max_height());

    assert_eq!(
        &[Changed::Orientation, Changed::Spacing, Changed::Children, Changed::Height],
        &log.lock()[..]
    );
}

#[test]
fn new_list_with_same_children_notifies() {
    init_log();

    let a = leaf("a");
    let b = stack().with_children(vec![a.clone()]);
    let (log, _h) = record(&b.view());

    let b = b.with_children(vec![a.clone()]);
    let b = b.with_children(vec![a]);

    assert_eq!(&[Changed::Children, Changed::Children], &log.lock()[..]);

    let list = b.view().children().unwrap();
    assert!(!b.set_children(Some(list)));
    assert_eq!(2, log.lock().len());
}

#[test]
fn empty_slots_are_skipped_on_enumeration() {
    init_log();

    let list = ChildList::new(vec![None, Some(leaf("a")), None, None, Some(leaf("b")), None]);
    let s = stack().with_children(list).into_view();

    let stored = s.children().unwrap();
    assert_eq!(6, stored.len());
    assert_eq!(vec!["a", "b"], ids(s.enumerate_children()));
    assert_eq!(stored.len() - 4, s.enumerate_children().count());
}

#[test]
fn enumeration_sees_current_children() {
    init_log();

    let b = stack().with_children(vec![leaf("a"), leaf("b")]);
    let s = b.view();

    let before = s.enumerate_children();
    let b = b.with_children(vec![leaf("c")]);
    let after = s.enumerate_children();

    assert_eq!(vec!["a", "b"], ids(before));
    assert_eq!(vec!["c"], ids(after));

    assert!(b.set_children(None));
    assert_eq!(0, s.enumerate_children().count());
}

#[test]
fn children_are_shared_references() {
    init_log();

    let child = stack_id("child");
    let child_view = child.view();
    let parent = stack().with_children([child_view.clone()]).into_view();

    let _child = child.vertical();

    let from_parent = parent.enumerate_children().next().unwrap().downcast::<Stack>().unwrap();
    assert_eq!(child_view, from_parent);
    assert_eq!(Orientation::Vertical, from_parent.orientation());
}

#[test]
fn descendants_walk_the_tree() {
    init_log();

    let inner = stack_id("inner").with_children(vec![leaf("inner.a"), leaf("inner.b")]);
    let root: ElementRef = stack_id("root")
        .with_children(ChildList::new(vec![Some(ElementRef::from(inner)), None, Some(leaf("b"))]))
        .into();

    let ids: Vec<_> = root.descendants().map(|e| e.id().unwrap_or_default().to_owned()).collect();
    assert_eq!(vec!["inner", "inner.a", "inner.b", "b"], ids);
}

#[test]
fn dropped_handle_stops_notifications() {
    init_log();

    let b = stack();
    let (log, handles) = record(&b.view());

    let b = b.vertical();
    drop(handles);
    let b = b.horizontal().no_spacing();

    assert_eq!(&[Changed::Orientation], &log.lock()[..]);
    assert_eq!(0, b.view().orientation_changed().subscriber_count());
}

#[test]
fn handlers_can_read_the_sender() {
    init_log();

    let b = stack_id("s");
    let seen = Arc::new(Mutex::new(vec![]));
    let _h = b.view().spacing_changed().subscribe({
        let seen = seen.clone();
        move |s: &Stack| seen.lock().push(s.spacing())
    });

    let _b = b.no_spacing().large_spacing().large_spacing().small_spacing();

    assert_eq!(&[Spacing::None, Spacing::Large, Spacing::Small], &seen.lock()[..]);
}

#[test]
fn foreign_element_does_not_downcast() {
    init_log();

    #[derive(Debug)]
    struct Label;
    impl Element for Label {
        fn id(&self) -> Option<&str> {
            Some("label")
        }

        fn into_any(self: Arc<Self>) -> Arc<dyn std::any::Any + Send + Sync> {
            self
        }
    }

    let label = ElementRef::new(Arc::new(Label));
    let r = label.clone().downcast::<Stack>();

    assert_eq!(Err(label), r.map(|s| s.into_element()));
}

#[test]
fn property_types_serialize() {
    assert_eq!("\"Vertical\"", serde_json::to_string(&Orientation::Vertical).unwrap());
    assert_eq!(Spacing::Medium, serde_json::from_str::<Spacing>("\"Medium\"").unwrap());
}

#[test]
fn change_made_by_a_handler_is_notified() {
    init_log();

    let b = Arc::new(stack_id("s"));
    let view = b.view();

    let seen = Arc::new(Mutex::new(vec![]));
    let _render = view.orientation_changed().subscribe({
        let seen = seen.clone();
        move |s: &Stack| seen.lock().push(s.orientation())
    });
    let nested_set = Arc::new(Mutex::new(None));
    let _force_horizontal = view.orientation_changed().subscribe({
        let b = Arc::downgrade(&b);
        let nested_set = nested_set.clone();
        move |_| {
            if let Some(b) = b.upgrade() {
                let changed = b.set_orientation(Orientation::Horizontal);
                let mut first = nested_set.lock();
                if first.is_none() {
                    *first = Some(changed);
                }
            }
        }
    });

    assert!(b.set_orientation(Orientation::Vertical));

    assert_eq!(Some(true), *nested_set.lock());
    assert_eq!(Orientation::Horizontal, view.orientation());
    assert_eq!(&[Orientation::Vertical, Orientation::Horizontal], &seen.lock()[..]);
    assert_eq!(Some(&view.orientation()), seen.lock().last());
}

#[test]
fn panicking_handler_keeps_other_subscribers() {
    init_log();

    let b = stack();
    let view = b.view();

    let _fails = view.orientation_changed().subscribe(|s: &Stack| {
        if s.orientation().is_vertical() {
            panic!("cannot render vertical");
        }
    });
    let seen = Arc::new(Mutex::new(vec![]));
    let _render = view.orientation_changed().subscribe({
        let seen = seen.clone();
        move |s: &Stack| seen.lock().push(s.orientation())
    });

    let r = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        b.set_orientation(Orientation::Vertical)
    }));
    assert!(r.is_err());
    assert_eq!(Orientation::Vertical, view.orientation());
    assert_eq!(2, view.orientation_changed().subscriber_count());

    assert!(b.set_orientation(Orientation::Horizontal));
    assert_eq!(&[Orientation::Horizontal], &seen.lock()[..]);
}
