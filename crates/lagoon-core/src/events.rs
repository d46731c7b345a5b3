//! Typed publish/subscribe channel between the scene and its embedder.
//!
//! The event set is a closed enum rather than an open string-keyed map, so
//! subscriber contracts are checked at compile time. Emission is synchronous
//! and in-process: callbacks run on the caller's thread in insertion order.

use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Discriminant used to register interest in one event family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Ready,
    Resized,
    PlaybackChanged,
    WallLoaded,
}

/// Payload-carrying scene notifications.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneEvent {
    Ready,
    Resized { width: f32, height: f32, fov_deg: f32 },
    PlaybackChanged { active: Option<usize> },
    WallLoaded { vertex_count: usize },
}

impl SceneEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            SceneEvent::Ready => EventKind::Ready,
            SceneEvent::Resized { .. } => EventKind::Resized,
            SceneEvent::PlaybackChanged { .. } => EventKind::PlaybackChanged,
            SceneEvent::WallLoaded { .. } => EventKind::WallLoaded,
        }
    }
}

/// Handle returned by `on`, accepted by `off` to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription {
    kind: EventKind,
    id: u64,
}

type Callback = Box<dyn FnMut(&SceneEvent)>;

/// Named-event registry with fan-out in insertion order.
#[derive(Default)]
pub struct EventBus {
    subscribers: FnvHashMap<EventKind, SmallVec<[(u64, Callback); 2]>>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&SceneEvent) + 'static,
    ) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers
            .entry(kind)
            .or_default()
            .push((id, Box::new(callback)));
        Subscription { kind, id }
    }

    pub fn off(&mut self, subscription: Subscription) {
        if let Some(list) = self.subscribers.get_mut(&subscription.kind) {
            list.retain(|(id, _)| *id != subscription.id);
        }
    }

    pub fn emit(&mut self, event: &SceneEvent) {
        if let Some(list) = self.subscribers.get_mut(&event.kind()) {
            for (_, callback) in list.iter_mut() {
                callback(event);
            }
        }
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers.get(&kind).map_or(0, |l| l.len())
    }
}
