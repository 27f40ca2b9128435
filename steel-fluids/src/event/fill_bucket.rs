use steel_registry::item_stack::ItemStack;

use super::{Cancellable, Event, EventResult};
use crate::behavior::context::HitResult;

/// Posted when a player tries to fill an empty container from the world.
///
/// A listener that handles the fill sets the result to [`EventResult::Allow`]
/// and attaches the filled stack. Cancelling the event stops the fill
/// entirely. The world and the player travel in the context passed to
/// [`EventBus::post`](super::EventBus::post).
#[derive(Debug, Clone)]
pub struct FillBucketEvent {
    empty_bucket: ItemStack,
    filled_bucket: Option<ItemStack>,
    target: Option<HitResult>,
    result: EventResult,
    cancelled: bool,
}

impl FillBucketEvent {
    /// Creates an event for `empty_bucket` aimed at `target`.
    #[must_use]
    pub fn new(empty_bucket: ItemStack, target: Option<HitResult>) -> Self {
        Self {
            empty_bucket,
            filled_bucket: None,
            target,
            result: EventResult::Default,
            cancelled: false,
        }
    }

    /// The container being filled.
    #[must_use]
    pub fn empty_bucket(&self) -> &ItemStack {
        &self.empty_bucket
    }

    /// The filled container a listener produced.
    #[must_use]
    pub fn filled_bucket(&self) -> Option<&ItemStack> {
        self.filled_bucket.as_ref()
    }

    /// Sets the filled container handed to the player on `Allow`.
    pub fn set_filled_bucket(&mut self, filled_bucket: ItemStack) {
        self.filled_bucket = Some(filled_bucket);
    }

    /// What the player aimed at, `None` if nothing.
    #[must_use]
    pub fn target(&self) -> Option<&HitResult> {
        self.target.as_ref()
    }

    /// The outcome decided so far.
    #[must_use]
    pub fn result(&self) -> EventResult {
        self.result
    }

    /// Decides the outcome.
    pub fn set_result(&mut self, result: EventResult) {
        self.result = result;
    }
}

impl Event for FillBucketEvent {
    fn cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Cancellable for FillBucketEvent {
    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}
