//! The vanilla items the bucket system depends on.

use steel_utils::Identifier;

use super::Item;

/// The empty item.
pub const AIR: Identifier = Identifier::vanilla_static("air");
/// The empty bucket.
pub const BUCKET: Identifier = Identifier::vanilla_static("bucket");
/// The water bucket.
pub const WATER_BUCKET: Identifier = Identifier::vanilla_static("water_bucket");
/// The lava bucket.
pub const LAVA_BUCKET: Identifier = Identifier::vanilla_static("lava_bucket");
/// The milk bucket.
pub const MILK_BUCKET: Identifier = Identifier::vanilla_static("milk_bucket");

/// Returns the vanilla item definitions.
#[must_use]
pub fn items() -> Vec<Item> {
    vec![
        Item::new(AIR, "tile.air"),
        Item::new(BUCKET, "item.bucket").with_max_stack_size(16),
        Item::new(WATER_BUCKET, "item.bucketWater").with_max_stack_size(1),
        Item::new(LAVA_BUCKET, "item.bucketLava").with_max_stack_size(1),
        Item::new(MILK_BUCKET, "item.milk").with_max_stack_size(1),
    ]
}
