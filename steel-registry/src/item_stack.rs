//! A stack of items with optional NBT data.

use simdnbt::owned::{NbtCompound, NbtTag};
use steel_utils::Identifier;

use crate::items::{ItemRegistry, vanilla};
use crate::nbt::{nbt_compound, nbt_i32, nbt_string};

static AIR: Identifier = vanilla::AIR;

/// A stack of items.
///
/// A stack of air, or with a count of zero or less, is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    item: Identifier,
    count: i32,
    tag: Option<NbtCompound>,
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::empty()
    }
}

impl ItemStack {
    /// The empty stack.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            item: vanilla::AIR,
            count: 0,
            tag: None,
        }
    }

    /// A stack of one item.
    #[must_use]
    pub const fn new(item: Identifier) -> Self {
        Self::with_count(item, 1)
    }

    /// A stack of `count` items.
    #[must_use]
    pub const fn with_count(item: Identifier, count: i32) -> Self {
        Self {
            item,
            count,
            tag: None,
        }
    }

    /// Air or a count of zero or less.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count <= 0 || self.item == vanilla::AIR
    }

    /// The item key, air for empty stacks.
    #[must_use]
    pub fn item(&self) -> &Identifier {
        if self.is_empty() {
            &AIR
        } else {
            &self.item
        }
    }

    /// Returns whether this stack holds `item`.
    #[must_use]
    pub fn is(&self, item: &Identifier) -> bool {
        self.item() == item
    }

    /// Changes the item, keeping count and tag.
    pub fn set_item(&mut self, item: Identifier) {
        self.item = item;
    }

    /// The count, 0 for empty stacks.
    #[must_use]
    pub fn count(&self) -> i32 {
        if self.is_empty() { 0 } else { self.count }
    }

    /// Sets the count.
    pub fn set_count(&mut self, count: i32) {
        self.count = count;
    }

    /// Adds `amount` items.
    pub fn grow(&mut self, amount: i32) {
        self.count += amount;
    }

    /// Removes `amount` items.
    pub fn shrink(&mut self, amount: i32) {
        self.count -= amount;
    }

    /// Returns the max stack size of this stack's item.
    #[must_use]
    pub fn max_stack_size(&self, items: &ItemRegistry) -> i32 {
        items.max_stack_size(self.item())
    }

    /// Returns whether more than one of this item fits in a slot.
    #[must_use]
    pub fn is_stackable(&self, items: &ItemRegistry) -> bool {
        self.max_stack_size(items) > 1
    }

    /// Takes up to `amount` items off this stack.
    pub fn split(&mut self, amount: i32) -> ItemStack {
        let taken = amount.min(self.count());
        let result = self.copy_with_count(taken);
        self.shrink(taken);
        result
    }

    /// Returns a copy holding `count` items.
    #[must_use]
    pub fn copy_with_count(&self, count: i32) -> ItemStack {
        if self.is_empty() {
            return ItemStack::empty();
        }
        let mut copy = self.clone();
        copy.count = count;
        copy
    }

    /// The NBT tag, if any.
    #[must_use]
    pub fn tag(&self) -> Option<&NbtCompound> {
        self.tag.as_ref()
    }

    /// Returns the tag, creating an empty one if needed.
    pub fn tag_mut(&mut self) -> &mut NbtCompound {
        self.tag.get_or_insert_with(NbtCompound::new)
    }

    /// Replaces the NBT tag.
    pub fn set_tag(&mut self, tag: Option<NbtCompound>) {
        self.tag = tag;
    }

    /// Same item, ignoring count and tag.
    #[must_use]
    pub fn is_item_equal(&self, other: &ItemStack) -> bool {
        !other.is_empty() && self.item() == other.item()
    }

    /// Returns whether both stacks carry the same tag.
    #[must_use]
    pub fn are_tags_equal(a: &ItemStack, b: &ItemStack) -> bool {
        match (a.tag(), b.tag()) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Same item and same tag, ignoring count.
    #[must_use]
    pub fn is_same_item_same_tags(a: &ItemStack, b: &ItemStack) -> bool {
        a.item() == b.item() && Self::are_tags_equal(a, b)
    }

    /// The name set with an anvil, stored at `display.Name`.
    #[must_use]
    pub fn custom_name(&self) -> Option<String> {
        let display = self.tag()?.get("display").and_then(nbt_compound)?;
        display.get("Name").and_then(nbt_string)
    }

    /// Sets the name stored at `display.Name`.
    pub fn set_custom_name(&mut self, name: &str) {
        let tag = self.tag_mut();
        let mut display = tag
            .get("display")
            .and_then(nbt_compound)
            .map_or_else(NbtCompound::new, Clone::clone);
        display.insert("Name", NbtTag::String(name.into()));
        tag.insert("display", NbtTag::Compound(display));
    }

    /// Writes this stack as `{id, Count, tag?}`.
    #[must_use]
    pub fn serialize_nbt(&self) -> NbtCompound {
        let mut nbt = NbtCompound::new();
        nbt.insert("id", NbtTag::String(self.item().to_string().into()));
        nbt.insert("Count", NbtTag::Byte(self.count().clamp(0, i32::from(i8::MAX)) as i8));
        if let Some(tag) = &self.tag {
            nbt.insert("tag", NbtTag::Compound(tag.clone()));
        }
        nbt
    }

    /// Replaces this stack with the one stored in `nbt`.
    ///
    /// Malformed data leaves an empty stack.
    pub fn deserialize_nbt(&mut self, nbt: &NbtCompound) {
        *self = Self::from_nbt(nbt).unwrap_or_default();
    }

    /// Reads a stack written by [`ItemStack::serialize_nbt`].
    #[must_use]
    pub fn from_nbt(nbt: &NbtCompound) -> Option<ItemStack> {
        let item = nbt.get("id").and_then(nbt_string)?.parse().ok()?;
        let count = nbt.get("Count").and_then(nbt_i32).unwrap_or(1);
        let tag = match nbt.get("tag") {
            None => None,
            Some(tag) => Some(nbt_compound(tag)?.clone()),
        };
        Some(ItemStack { item, count, tag })
    }
}
