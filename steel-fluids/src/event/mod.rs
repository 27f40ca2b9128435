//! A synchronous event bus with priorities and cancellation.
//!
//! Listeners run in priority order, from [`EventPriority::Highest`] to
//! [`EventPriority::Lowest`], and in subscription order within a priority.
//! Once an event is cancelled, only listeners subscribed with
//! `receive_cancelled` still see it.

mod fill_bucket;

pub use fill_bucket::FillBucketEvent;

use std::{any, sync::Arc};

use crate::behavior::context::InteractionContext;

/// The priority levels of event listeners.
///
/// Higher priorities run first, so lower priorities can react to what they did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventPriority {
    /// Highest priority level.
    Highest,
    /// High priority level.
    High,
    /// Normal priority level.
    Normal,
    /// Low priority level.
    Low,
    /// Lowest priority level.
    Lowest,
}

/// The outcome a listener can attach to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// Refuse the action.
    Deny,
    /// No listener decided, run the default behavior.
    #[default]
    Default,
    /// A listener handled the action.
    Allow,
}

/// An event that can be posted on an [`EventBus`].
pub trait Event {
    /// Whether the event was cancelled. Events that cannot be cancelled
    /// keep the default.
    fn cancelled(&self) -> bool {
        false
    }
}

/// A trait for cancellable events.
pub trait Cancellable: Event {
    /// Sets the cancellation state of the event.
    fn set_cancelled(&mut self, cancelled: bool);
}

/// A listener for events of type `E`.
pub trait EventHandler<E>: Send + Sync {
    /// Handles the event. The context carries the world and the acting player.
    fn handle(&self, ctx: &mut InteractionContext<'_>, event: &mut E);
}

struct FnHandler<F>(F);

impl<E, F> EventHandler<E> for FnHandler<F>
where
    F: Fn(&mut InteractionContext<'_>, &mut E) + Send + Sync,
{
    fn handle(&self, ctx: &mut InteractionContext<'_>, event: &mut E) {
        (self.0)(ctx, event);
    }
}

struct Registration<E> {
    handler: Arc<dyn EventHandler<E>>,
    priority: EventPriority,
    receive_cancelled: bool,
}

/// Dispatches events of one type to its listeners.
pub struct EventBus<E> {
    handlers: Vec<Registration<E>>,
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<E: Event + 'static> EventBus<E> {
    /// Creates a bus without listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener.
    pub fn subscribe(
        &mut self,
        handler: Arc<dyn EventHandler<E>>,
        priority: EventPriority,
        receive_cancelled: bool,
    ) {
        // After every listener of the same or a higher priority.
        let index = self
            .handlers
            .iter()
            .position(|registration| registration.priority > priority)
            .unwrap_or(self.handlers.len());
        self.handlers.insert(
            index,
            Registration {
                handler,
                priority,
                receive_cancelled,
            },
        );
        log::debug!(
            "Subscribed {:?} listener for {}",
            priority,
            any::type_name::<E>()
        );
    }

    /// Registers a closure as a listener.
    pub fn subscribe_fn<F>(&mut self, priority: EventPriority, receive_cancelled: bool, handler: F)
    where
        F: Fn(&mut InteractionContext<'_>, &mut E) + Send + Sync + 'static,
    {
        self.subscribe(Arc::new(FnHandler(handler)), priority, receive_cancelled);
    }

    /// The number of listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns whether nothing listens on this bus.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs every listener on `event`. Returns whether the event ended up cancelled.
    pub fn post(&self, ctx: &mut InteractionContext<'_>, event: &mut E) -> bool {
        let _span = tracing::debug_span!("post_event", event = any::type_name::<E>()).entered();
        for registration in &self.handlers {
            if event.cancelled() && !registration.receive_cancelled {
                continue;
            }
            registration.handler.handle(ctx, event);
        }
        event.cancelled()
    }
}
