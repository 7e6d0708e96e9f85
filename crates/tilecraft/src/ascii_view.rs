//! Text view of the tiles around the player

use tilecraft_core::simulation::BlockId;
use tilecraft_core::{Body, Simulation};
use tilecraft_core::world::{CollisionDetector, sketch};

/// What occupies one cell of the view
enum Cell {
    Player,
    Body,
    Tile(u16),
}

/// Render a `(2r+1)`-square window centered on the player's tile
///
/// Rows are printed top row first. Tiles covered by the player print as `@`,
/// tiles covered by any other body as `&`.
pub fn render(sim: &Simulation, radius: i32) -> String {
    render_with(sim, radius, |cell| match cell {
        Cell::Player => "@".to_string(),
        Cell::Body => "&".to_string(),
        Cell::Tile(id) => sketch::glyph(id).to_string(),
    })
}

/// Same window with 24-bit ANSI colors
///
/// Block glyphs take the block's base color; air takes the current sky color.
pub fn render_colored(sim: &Simulation, radius: i32) -> String {
    let sky = sim.time_cycle().sky_color();
    render_with(sim, radius, |cell| match cell {
        Cell::Player => "@".to_string(),
        Cell::Body => "&".to_string(),
        Cell::Tile(id) => {
            let [r, g, b] = if id == BlockId::AIR {
                sky
            } else {
                let [r, g, b, _] = sim.blocks().get_color(id);
                [r, g, b]
            };
            format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, sketch::glyph(id))
        }
    })
}

fn render_with(sim: &Simulation, radius: i32, mut draw: impl FnMut(Cell) -> String) -> String {
    let tile_size = sim.config().tile_size;
    let player = &sim.player().body;
    let center = (player.center() / tile_size).floor().as_ivec2();

    let mut out = String::new();
    for y in (center.y - radius..=center.y + radius).rev() {
        for x in center.x - radius..=center.x + radius {
            let covered_by = |body: &Body| {
                CollisionDetector::box_covers_tile(body.position, body.size, x, y, tile_size)
            };
            let cell = if covered_by(player) {
                Cell::Player
            } else if sim.bodies().iter().any(covered_by) {
                Cell::Body
            } else {
                Cell::Tile(sim.tile_at(x, y).block_type_id)
            };
            out.push_str(&draw(cell));
        }
        out.push('\n');
    }
    out
}
