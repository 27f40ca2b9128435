use std::borrow::Cow;

use steel_utils::Identifier;

/// The default stack size of an item.
pub const DEFAULT_MAX_STACK_SIZE: i32 = 64;

/// An item definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// The registry key.
    pub key: Identifier,
    /// Translation key without the `.name` suffix, e.g. `item.bucket`.
    pub translation_key: Cow<'static, str>,
    /// How many of this item fit in one slot.
    pub max_stack_size: i32,
}

impl Item {
    /// Creates an item that stacks to 64.
    #[must_use]
    pub fn new(key: Identifier, translation_key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            translation_key: translation_key.into(),
            max_stack_size: DEFAULT_MAX_STACK_SIZE,
        }
    }

    /// Sets the max stack size.
    #[must_use]
    pub fn with_max_stack_size(mut self, max_stack_size: i32) -> Self {
        self.max_stack_size = max_stack_size;
        self
    }

    /// The key used to look up the display name.
    #[must_use]
    pub fn name_key(&self) -> String {
        format!("{}.name", self.translation_key)
    }
}
