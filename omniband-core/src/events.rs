//! Lifecycle pub/sub: three fixed topics, ordered delivery, stable tokens.
//!
//! Removal goes through a shared liveness flag per subscription instead of
//! index surgery, so a handler can drop its own (or another) token while a
//! publish is in flight without shifting anything. Dead entries are
//! compacted at the start of the next publish, never mid-iteration.

use std::cell::Cell;
use std::rc::Rc;

use crate::state::SliderInfo;

/// The three lifecycle topics a slider emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Start,
    Moving,
    Stop,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Start, Topic::Moving, Topic::Stop];

    pub fn from_name(name: &str) -> Option<Topic> {
        match name {
            "start" => Some(Topic::Start),
            "moving" => Some(Topic::Moving),
            "stop" => Some(Topic::Stop),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Topic::Start => "start",
            Topic::Moving => "moving",
            Topic::Stop => "stop",
        }
    }

    fn index(self) -> usize {
        match self {
            Topic::Start => 0,
            Topic::Moving => 1,
            Topic::Stop => 2,
        }
    }
}

type Handler = Box<dyn FnMut(&SliderInfo)>;

struct Entry {
    live: Rc<Cell<bool>>,
    handler: Handler,
}

/// Capability token for one subscription. Dropping the token does NOT
/// unsubscribe; only `remove` does. Inert tokens (from invalid topics)
/// remove nothing and are always safe to call.
#[derive(Debug, Clone, Default)]
pub struct Subscription {
    live: Option<Rc<Cell<bool>>>,
}

impl Subscription {
    pub fn inert() -> Self {
        Self::default()
    }

    /// Tombstone this subscription. Idempotent; safe during a publish.
    pub fn remove(&self) {
        if let Some(live) = &self.live {
            live.set(false);
        }
    }

    pub fn is_active(&self) -> bool {
        self.live.as_ref().is_some_and(|live| live.get())
    }
}

/// Per-topic ordered handler lists.
#[derive(Default)]
pub struct EventBus {
    topics: [Vec<Entry>; 3],
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler; invocation order is subscription order.
    pub fn subscribe(
        &mut self,
        topic: Topic,
        handler: impl FnMut(&SliderInfo) + 'static,
    ) -> Subscription {
        let live = Rc::new(Cell::new(true));
        self.topics[topic.index()].push(Entry {
            live: live.clone(),
            handler: Box::new(handler),
        });
        Subscription { live: Some(live) }
    }

    /// Invoke every live handler for `topic`, in subscription order.
    ///
    /// Handler panics propagate to the caller; the bus itself stays
    /// consistent for subsequent publishes.
    pub fn publish(&mut self, topic: Topic, info: &SliderInfo) {
        let entries = &mut self.topics[topic.index()];
        entries.retain(|entry| entry.live.get());
        for entry in entries.iter_mut() {
            // A handler earlier in this pass may have tombstoned this one.
            if entry.live.get() {
                (entry.handler)(info);
            }
        }
    }

    /// Live subscriber count for a topic.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.topics[topic.index()]
            .iter()
            .filter(|entry| entry.live.get())
            .count()
    }
}
