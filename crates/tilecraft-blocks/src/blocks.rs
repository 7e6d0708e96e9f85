//! Block definitions and registry

use serde::{Deserialize, Serialize};

use crate::items::ItemId;

/// Built-in block IDs
pub struct BlockId;

impl BlockId {
    pub const AIR: u16 = 0;
    pub const GRASS: u16 = 1;
    pub const DIRT: u16 = 2;
    pub const STONE: u16 = 3;
    pub const COAL_ORE: u16 = 4;
    pub const WOOD: u16 = 5;
    pub const LEAVES: u16 = 6;

    // Placed structures
    pub const CRAFTING_TABLE: u16 = 10;
    pub const FURNACE: u16 = 11;

    // Fluids and loose material
    pub const WATER: u16 = 20;
    pub const SAND: u16 = 21;

    pub const DIAMOND_ORE: u16 = 50;

    /// Indestructible world floor
    pub const BEDROCK: u16 = 60;
}

/// Definition of a block type's properties
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockDef {
    pub id: u16,
    pub name: String,

    /// Base color (RGBA), consumed by renderers only
    pub color: [u8; 4],

    /// Blocks entity movement
    pub solid: bool,
    /// Can be removed by the mine action
    pub mineable: bool,
    /// Item deposited when mined (None = nothing drops)
    pub drop: Option<u16>,
    /// An item with this id can be placed as this block
    pub placeable: bool,
    /// Falls one row per tick while unsupported
    pub falls: bool,
}

impl Default for BlockDef {
    fn default() -> Self {
        Self {
            id: 0,
            name: "unknown".to_string(),
            color: [255, 0, 255, 255], // Magenta for missing blocks
            solid: true,
            mineable: true,
            drop: None,
            placeable: false,
            falls: false,
        }
    }
}

/// Flattened per-tile view of a block definition
///
/// This is what collision and interaction code reads; `drop_item_id == 0`
/// means the block drops nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockState {
    pub block_type_id: u16,
    pub is_solid: bool,
    pub is_mineable: bool,
    pub drop_item_id: u16,
}

impl BlockState {
    pub const AIR: BlockState = BlockState {
        block_type_id: BlockId::AIR,
        is_solid: false,
        is_mineable: false,
        drop_item_id: 0,
    };

    pub fn is_air(&self) -> bool {
        self.block_type_id == BlockId::AIR
    }
}

/// Registry of all block types
#[derive(Clone, Debug)]
pub struct Blocks {
    blocks: Vec<BlockDef>,
}

impl Blocks {
    pub fn new() -> Self {
        let mut blocks = Self { blocks: Vec::new() };
        blocks.register_defaults();
        log::debug!("Registered {} block types", blocks.len());
        blocks
    }

    fn register_defaults(&mut self) {
        // Air (empty space) - never solid, never mineable
        self.register(BlockDef {
            id: BlockId::AIR,
            name: "air".to_string(),
            color: [0, 0, 0, 0],
            solid: false,
            mineable: false,
            ..Default::default()
        });

        // Grass crumbles to dirt when dug up
        self.register(BlockDef {
            id: BlockId::GRASS,
            name: "grass".to_string(),
            color: [86, 160, 60, 255],
            drop: Some(BlockId::DIRT),
            ..Default::default()
        });

        self.register(BlockDef {
            id: BlockId::DIRT,
            name: "dirt".to_string(),
            color: [101, 67, 33, 255],
            drop: Some(BlockId::DIRT),
            placeable: true,
            ..Default::default()
        });

        self.register(BlockDef {
            id: BlockId::STONE,
            name: "stone".to_string(),
            color: [128, 128, 128, 255],
            drop: Some(BlockId::STONE),
            placeable: true,
            ..Default::default()
        });

        self.register(BlockDef {
            id: BlockId::COAL_ORE,
            name: "coal_ore".to_string(),
            color: [45, 45, 45, 255],
            drop: Some(ItemId::COAL),
            ..Default::default()
        });

        self.register(BlockDef {
            id: BlockId::WOOD,
            name: "wood".to_string(),
            color: [139, 90, 43, 255],
            drop: Some(BlockId::WOOD),
            placeable: true,
            ..Default::default()
        });

        // Leaves hang in the canopy but never block movement
        self.register(BlockDef {
            id: BlockId::LEAVES,
            name: "leaves".to_string(),
            color: [46, 125, 50, 220],
            solid: false,
            drop: Some(BlockId::LEAVES),
            placeable: true,
            ..Default::default()
        });

        self.register(BlockDef {
            id: BlockId::CRAFTING_TABLE,
            name: "crafting_table".to_string(),
            color: [160, 110, 60, 255],
            drop: Some(BlockId::CRAFTING_TABLE),
            placeable: true,
            ..Default::default()
        });

        self.register(BlockDef {
            id: BlockId::FURNACE,
            name: "furnace".to_string(),
            color: [90, 90, 95, 255],
            drop: Some(BlockId::FURNACE),
            placeable: true,
            ..Default::default()
        });

        self.register(BlockDef {
            id: BlockId::WATER,
            name: "water".to_string(),
            color: [64, 164, 223, 200],
            solid: false,
            mineable: false,
            ..Default::default()
        });

        self.register(BlockDef {
            id: BlockId::SAND,
            name: "sand".to_string(),
            color: [194, 178, 128, 255],
            drop: Some(BlockId::SAND),
            placeable: true,
            falls: true,
            ..Default::default()
        });

        self.register(BlockDef {
            id: BlockId::DIAMOND_ORE,
            name: "diamond_ore".to_string(),
            color: [90, 220, 230, 255],
            drop: Some(ItemId::DIAMOND),
            ..Default::default()
        });

        self.register(BlockDef {
            id: BlockId::BEDROCK,
            name: "bedrock".to_string(),
            color: [40, 40, 50, 255],
            mineable: false,
            ..Default::default()
        });
    }

    fn register(&mut self, block: BlockDef) {
        let id = block.id as usize;

        // Unregistered gaps resolve to air on lookup
        if self.blocks.len() <= id {
            self.blocks.resize_with(id + 1, || BlockDef {
                id: BlockId::AIR,
                ..Default::default()
            });
        }

        self.blocks[id] = block;
    }

    /// Get block definition by ID, falling back to air for unknown IDs
    pub fn get(&self, id: u16) -> &BlockDef {
        match self.blocks.get(id as usize) {
            Some(def) if def.id == id => def,
            _ => &self.blocks[BlockId::AIR as usize],
        }
    }

    /// Derive the per-tile state for a block ID
    pub fn state(&self, id: u16) -> BlockState {
        let def = self.get(id);
        BlockState {
            block_type_id: def.id,
            is_solid: def.solid,
            is_mineable: def.mineable,
            drop_item_id: def.drop.unwrap_or(0),
        }
    }

    /// True if an item with this ID can be placed into the world
    pub fn is_placeable(&self, item_id: u16) -> bool {
        item_id != BlockId::AIR && self.get(item_id).id == item_id && self.get(item_id).placeable
    }

    /// Display name for a block or plain item ID
    pub fn name(&self, id: u16) -> &str {
        if let Some(name) = ItemId::name(id) {
            return name;
        }
        &self.get(id).name
    }

    /// Get color for a block
    pub fn get_color(&self, id: u16) -> [u8; 4] {
        self.get(id).color
    }

    /// Number of registered block types (excluding unregistered gaps)
    pub fn len(&self) -> usize {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(index, def)| def.id as usize == *index)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Blocks {
    fn default() -> Self {
        Self::new()
    }
}
