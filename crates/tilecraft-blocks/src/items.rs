//! Plain items that exist only in inventories

/// Built-in item IDs that have no block form
///
/// Items share the ID space with blocks: any block ID is also a valid item
/// ID (the item a mined block drops, or the item used to place it).
pub struct ItemId;

impl ItemId {
    pub const COAL: u16 = 100;
    pub const DIAMOND: u16 = 101;

    /// Name of a plain item, or None if the ID belongs to a block
    pub fn name(id: u16) -> Option<&'static str> {
        match id {
            Self::COAL => Some("coal"),
            Self::DIAMOND => Some("diamond"),
            _ => None,
        }
    }
}

/// Maximum units a single inventory slot can hold
pub const MAX_STACK: u32 = 999;
