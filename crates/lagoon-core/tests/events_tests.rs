// Host-side tests for the typed event channel.

use std::cell::RefCell;
use std::rc::Rc;

use lagoon_core::{EventBus, EventKind, SceneEvent};

#[test]
fn emit_fans_out_in_insertion_order() {
    let mut bus = EventBus::new();
    let order: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));

    let first = order.clone();
    bus.on(EventKind::Ready, move |_| first.borrow_mut().push(1));
    let second = order.clone();
    bus.on(EventKind::Ready, move |_| second.borrow_mut().push(2));
    let third = order.clone();
    bus.on(EventKind::Ready, move |_| third.borrow_mut().push(3));

    bus.emit(&SceneEvent::Ready);
    bus.emit(&SceneEvent::Ready);
    assert_eq!(*order.borrow(), vec![1, 2, 3, 1, 2, 3]);
}

#[test]
fn subscribers_only_see_their_kind() {
    let mut bus = EventBus::new();
    let count: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));
    let sink = count.clone();
    bus.on(EventKind::Resized, move |_| *sink.borrow_mut() += 1);

    bus.emit(&SceneEvent::Ready);
    bus.emit(&SceneEvent::PlaybackChanged { active: Some(1) });
    assert_eq!(*count.borrow(), 0);

    bus.emit(&SceneEvent::Resized {
        width: 100.0,
        height: 100.0,
        fov_deg: 104.0,
    });
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn off_removes_only_the_given_subscription() {
    let mut bus = EventBus::new();
    let hits: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let a = hits.clone();
    let sub_a = bus.on(EventKind::Ready, move |_| a.borrow_mut().push("a"));
    let b = hits.clone();
    let _sub_b = bus.on(EventKind::Ready, move |_| b.borrow_mut().push("b"));

    bus.off(sub_a);
    bus.emit(&SceneEvent::Ready);
    assert_eq!(*hits.borrow(), vec!["b"]);
    assert_eq!(bus.subscriber_count(EventKind::Ready), 1);
}

#[test]
fn event_kinds_match_their_payloads() {
    assert_eq!(SceneEvent::Ready.kind(), EventKind::Ready);
    assert_eq!(
        SceneEvent::Resized {
            width: 1.0,
            height: 1.0,
            fov_deg: 45.0
        }
        .kind(),
        EventKind::Resized
    );
    assert_eq!(
        SceneEvent::PlaybackChanged { active: None }.kind(),
        EventKind::PlaybackChanged
    );
    assert_eq!(
        SceneEvent::WallLoaded { vertex_count: 0 }.kind(),
        EventKind::WallLoaded
    );
}

#[test]
fn emit_with_no_subscribers_is_a_no_op() {
    let mut bus = EventBus::new();
    bus.emit(&SceneEvent::Ready);
    assert_eq!(bus.subscriber_count(EventKind::Ready), 0);
}
