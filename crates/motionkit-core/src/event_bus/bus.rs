//! Event Bus implementation.
//!
//! Handlers run synchronously on the publishing thread, in subscription
//! order. Surfaces and animation loops hold an `Arc<EventBus>` handed to
//! them by the host, so several independent surfaces can run in one process.
//!
//! A handler must not subscribe to the bus it is called from.

use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;

use super::events::{AppEvent, EventCategory};

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Check if an event matches this filter
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type EventHandler = Box<dyn Fn(&AppEvent) + Send + Sync>;

/// Last `limit` published events, oldest first.
struct Recording {
    limit: usize,
    events: VecDeque<AppEvent>,
}

/// Synchronous publish/subscribe hub for [`AppEvent`]s.
pub struct EventBus {
    handlers: RwLock<Vec<(EventFilter, EventHandler)>>,
    recording: Option<Mutex<Recording>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
            recording: None,
        }
    }

    /// Bus that also keeps the last `limit` events for [`EventBus::recorded`].
    pub fn recording(limit: usize) -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
            recording: Some(Mutex::new(Recording {
                limit,
                events: VecDeque::with_capacity(limit.min(64)),
            })),
        }
    }

    /// Call `handler` for every future event that passes `filter`.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F)
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        self.handlers.write().push((filter, Box::new(handler)));
    }

    /// Deliver `event`. Returns how many handlers it was passed to.
    pub fn publish(&self, event: AppEvent) -> usize {
        tracing::trace!("Event: {}", event.description());

        let delivered = {
            let handlers = self.handlers.read();
            let mut delivered = 0;
            for (filter, handler) in handlers.iter() {
                if filter.matches(&event) {
                    handler(&event);
                    delivered += 1;
                }
            }
            delivered
        };

        if let Some(recording) = &self.recording {
            let mut recording = recording.lock();
            if recording.limit > 0 {
                while recording.events.len() >= recording.limit {
                    recording.events.pop_front();
                }
                recording.events.push_back(event);
            }
        }

        delivered
    }

    /// Recorded events, oldest first. Empty unless built with
    /// [`EventBus::recording`].
    pub fn recorded(&self) -> Vec<AppEvent> {
        self.recording
            .as_ref()
            .map(|recording| recording.lock().events.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.read().len())
            .field("recording", &self.recording.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_bus::{AnimationEvent, SurfaceEvent};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn cleared(removed: usize) -> AppEvent {
        AppEvent::Surface(SurfaceEvent::Cleared { removed })
    }

    #[test]
    fn test_publish_without_handlers() {
        let bus = EventBus::new();
        assert_eq!(bus.publish(AppEvent::Animation(AnimationEvent::Stopped)), 0);
        assert!(bus.recorded().is_empty());
    }

    #[test]
    fn test_event_filtering() {
        let bus = EventBus::new();
        let surface_count = Arc::new(AtomicUsize::new(0));
        let all_count = Arc::new(AtomicUsize::new(0));

        let c = surface_count.clone();
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Surface]),
            move |event| {
                assert_eq!(event.category(), EventCategory::Surface);
                c.fetch_add(1, Ordering::SeqCst);
            },
        );
        let c = all_count.clone();
        bus.subscribe(EventFilter::All, move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(bus.publish(cleared(2)), 2);
        assert_eq!(bus.publish(AppEvent::Animation(AnimationEvent::Stopped)), 1);

        assert_eq!(surface_count.load(Ordering::SeqCst), 1);
        assert_eq!(all_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_recording_keeps_latest() {
        let bus = EventBus::recording(3);
        for removed in 0..5 {
            bus.publish(cleared(removed));
        }
        assert_eq!(bus.recorded(), vec![cleared(2), cleared(3), cleared(4)]);
    }

    #[test]
    fn test_zero_limit_records_nothing() {
        let bus = EventBus::recording(0);
        bus.publish(cleared(1));
        assert!(bus.recorded().is_empty());
    }
}
