//! One-character glyphs for block ids
//!
//! Used to build small terrains from ASCII sketches and to print a text view
//! of the world. Unknown ids print as `?`.

use tilecraft_blocks::BlockId;

const GLYPHS: &[(char, u16)] = &[
    ('.', BlockId::AIR),
    ('g', BlockId::GRASS),
    ('d', BlockId::DIRT),
    ('#', BlockId::STONE),
    ('c', BlockId::COAL_ORE),
    ('w', BlockId::WOOD),
    ('l', BlockId::LEAVES),
    ('T', BlockId::CRAFTING_TABLE),
    ('F', BlockId::FURNACE),
    ('~', BlockId::WATER),
    ('s', BlockId::SAND),
    ('D', BlockId::DIAMOND_ORE),
    ('B', BlockId::BEDROCK),
];

/// Glyph for a block id
pub fn glyph(block_id: u16) -> char {
    GLYPHS
        .iter()
        .find(|(_, id)| *id == block_id)
        .map(|(c, _)| *c)
        .unwrap_or('?')
}

/// Block id for a glyph, if it names one
pub fn block_for_glyph(glyph: char) -> Option<u16> {
    GLYPHS.iter().find(|(c, _)| *c == glyph).map(|(_, id)| *id)
}
