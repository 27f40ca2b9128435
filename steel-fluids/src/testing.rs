//! In-memory world and player for tests.

use rustc_hash::{FxHashMap, FxHashSet};
use steel_registry::{
    Registry,
    blocks::{Block, BlockConfig, BlockState},
    fluid::{Fluid, FluidId},
    item_stack::ItemStack,
};
use steel_utils::{BlockPos, Direction, Identifier, UpdateFlags, math::Vector3};
use uuid::Uuid;

use crate::config::FluidConfig;
use crate::host::Host;
use crate::inventory::PlayerInventory;
use crate::player::{Player, Stat};
use crate::world::World;

/// A bucket fluid that only exists in tests.
pub const OIL: &str = "oil";

/// The block placed for [`OIL`].
pub fn oil_block() -> Identifier {
    Identifier::new_static("steel", "oil")
}

/// The id of [`OIL`] in `host`.
pub fn oil(host: &Host) -> FluidId {
    host.registry()
        .fluids
        .get_by_name(OIL)
        .expect("oil is registered")
}

/// A host with the universal bucket installed with the default config and
/// oil registered as a bucket fluid.
pub fn test_host() -> Host {
    test_host_with(&FluidConfig::default())
}

/// Like [`test_host`], with the universal bucket installed from `config`.
pub fn test_host_with(config: &FluidConfig) -> Host {
    let mut registry = Registry::vanilla();
    registry
        .blocks
        .register(Block::new(oil_block(), BlockConfig::LIQUID))
        .expect("oil block");
    let oil = registry
        .fluids
        .register(Fluid::new(OIL).with_block(oil_block()))
        .expect("oil fluid");
    registry
        .fluids
        .add_bucket_for_fluid(oil)
        .expect("oil bucket");

    let mut host = Host::new(registry);
    host.translations_mut().insert("fluid.oil", "Oil");
    host.install_universal_bucket(config)
        .expect("universal bucket");
    host
}

/// A flat world of air between y = -64 and y = 319.
pub struct TestWorld {
    blocks: FxHashMap<BlockPos, BlockState>,
    /// Positions no player may modify.
    pub protected: FxHashSet<BlockPos>,
    /// Makes water vaporize.
    pub ultra_warm: bool,
    /// Sounds played at blocks.
    pub sounds: Vec<(Identifier, BlockPos)>,
    /// Item entities spawned.
    pub dropped: Vec<(Vector3<f64>, ItemStack)>,
    /// Blocks broken by `destroy_block`.
    pub destroyed: Vec<BlockPos>,
}

impl TestWorld {
    /// An empty world.
    pub fn new() -> Self {
        Self {
            blocks: FxHashMap::default(),
            protected: FxHashSet::default(),
            ultra_warm: false,
            sounds: Vec::new(),
            dropped: Vec::new(),
            destroyed: Vec::new(),
        }
    }

    /// Places a block without side effects.
    pub fn put(&mut self, pos: BlockPos, state: BlockState) {
        self.blocks.insert(pos, state);
    }
}

impl World for TestWorld {
    fn get_block_state(&self, pos: &BlockPos) -> BlockState {
        self.blocks.get(pos).cloned().unwrap_or_else(BlockState::air)
    }

    fn set_block(&mut self, pos: BlockPos, state: BlockState, _flags: UpdateFlags) -> bool {
        if !self.is_in_valid_bounds(&pos) || self.get_block_state(&pos) == state {
            return false;
        }
        self.blocks.insert(pos, state);
        true
    }

    fn destroy_block(&mut self, pos: &BlockPos, _drop_block: bool) -> bool {
        if self.get_block_state(pos) == BlockState::air() {
            return false;
        }
        self.destroyed.push(*pos);
        self.blocks.insert(*pos, BlockState::air());
        true
    }

    fn is_in_valid_bounds(&self, pos: &BlockPos) -> bool {
        (-64..320).contains(&pos.y())
    }

    fn may_interact(&self, _player: &dyn Player, pos: &BlockPos) -> bool {
        !self.protected.contains(pos)
    }

    fn does_water_vaporize(&self) -> bool {
        self.ultra_warm
    }

    fn play_sound(&mut self, sound: &Identifier, pos: BlockPos, _volume: f32, _pitch: f32) {
        self.sounds.push((sound.clone(), pos));
    }

    fn spawn_item(&mut self, pos: Vector3<f64>, stack: ItemStack) {
        self.dropped.push((pos, stack));
    }
}

/// A survival player standing on (0, 64, 0) and looking straight down.
pub struct TestPlayer {
    pub uuid: Uuid,
    pub position: Vector3<f64>,
    pub yaw: f32,
    pub pitch: f32,
    pub creative: bool,
    /// Positions the player may not use items on.
    pub denied: FxHashSet<BlockPos>,
    pub stats: Vec<Stat>,
    pub sounds: Vec<Identifier>,
    pub inventory: PlayerInventory,
}

impl TestPlayer {
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            position: Vector3::new(0.5, 65.0, 0.5),
            yaw: 0.0,
            pitch: 90.0,
            creative: false,
            denied: FxHashSet::default(),
            stats: Vec::new(),
            sounds: Vec::new(),
            inventory: PlayerInventory::new(),
        }
    }
}

impl Player for TestPlayer {
    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn position(&self) -> Vector3<f64> {
        self.position
    }

    fn eye_position(&self) -> Vector3<f64> {
        self.position.add(&Vector3::new(0.0, 1.62, 0.0))
    }

    fn rotation(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }

    fn has_infinite_materials(&self) -> bool {
        self.creative
    }

    fn may_use_item_at(&self, pos: &BlockPos, _face: Direction, _stack: &ItemStack) -> bool {
        !self.denied.contains(pos)
    }

    fn award_stat(&mut self, stat: Stat) {
        self.stats.push(stat);
    }

    fn play_sound(&mut self, sound: &Identifier, _volume: f32, _pitch: f32) {
        self.sounds.push(sound.clone());
    }

    fn inventory_mut(&mut self) -> &mut PlayerInventory {
        &mut self.inventory
    }
}
