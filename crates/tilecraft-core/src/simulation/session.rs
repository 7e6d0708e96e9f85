//! The simulation aggregate and its fixed-order tick

use glam::Vec2;
use tilecraft_blocks::{BlockState, Blocks};

use crate::config::SimConfig;
use crate::entity::{Body, BodyId, InputState, Player, Slot};
use crate::error::SimResult;
use crate::simulation::time_cycle::TimeCycle;
use crate::world::{
    ActionResult, BodyIntent, FallingBlockSystem, MiningSystem, PhysicsSystem, Terrain,
    WorldGenConfig,
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number, starting at 1 for the first tick
    pub tick: u64,
    /// Outcome of the action latch, if it was set
    pub action: Option<ActionResult>,
    /// Falling blocks moved this tick
    pub blocks_fallen: usize,
}

/// Complete simulation state for one session
///
/// Collaborators read through the accessors and write only through
/// [`Simulation::input_mut`]. Every tick runs the same fixed order, so the
/// same inputs always produce the same state.
pub struct Simulation {
    config: SimConfig,
    terrain: Terrain,
    player: Player,
    bodies: Vec<Body>,
    input: InputState,
    time: TimeCycle,
    tick: u64,
}

impl Simulation {
    /// Validate both configs, generate terrain and spawn the player
    pub fn try_new(config: SimConfig, worldgen: WorldGenConfig, seed: u64) -> SimResult<Self> {
        config.validate()?;
        let terrain = Terrain::generate(worldgen, seed)?;
        Ok(Self::new(config, terrain))
    }

    /// Wrap an existing terrain; `config` must already be valid
    ///
    /// The player spawns on the middle column.
    pub fn new(config: SimConfig, terrain: Terrain) -> Self {
        let spawn = Self::spawn_position(&config, &terrain);
        let player = Player::new(spawn, &config);
        let time = TimeCycle::new(config.time.clone());

        log::info!(
            "Simulation ready: {}x{} tiles, seed {}, player at {:?}",
            terrain.width(),
            terrain.height(),
            terrain.seed(),
            spawn
        );

        Self {
            config,
            terrain,
            player,
            bodies: Vec::new(),
            input: InputState::new(),
            time,
            tick: 0,
        }
    }

    fn spawn_position(config: &SimConfig, terrain: &Terrain) -> Vec2 {
        terrain.spawn_point(terrain.width() / 2, config.body_size.0, config.tile_size)
    }

    /// Advance the world by one tick
    ///
    /// Order: slot selection, time, physics (player then bodies in spawn
    /// order), falling blocks, the player's action.
    pub fn tick(&mut self) -> TickReport {
        self.tick += 1;
        let tile_size = self.config.tile_size;

        // 1. Hotbar selection
        if let Some(index) = self.input.take_slot_selection() {
            self.player.inventory.select_slot(index);
        }

        // 2. Time of day
        self.time.tick();

        // 3. Physics
        let intent = BodyIntent {
            movement: self.input.movement(),
            jump: self.input.take_jump(),
        };
        PhysicsSystem::step(&mut self.player.body, intent, &self.terrain, &self.config);
        for body in &mut self.bodies {
            PhysicsSystem::step(body, BodyIntent::default(), &self.terrain, &self.config);
        }

        // 4. Loose blocks, before the action so fresh placements rest a tick
        let occupants: Vec<&Body> = std::iter::once(&self.player.body)
            .chain(self.bodies.iter())
            .collect();
        let blocks_fallen = FallingBlockSystem::update(&mut self.terrain, &occupants, tile_size);

        // 5. Mine/place
        let action = if self.input.take_action() {
            Some(MiningSystem::act(
                &self.player.body,
                &mut self.player.inventory,
                &mut self.terrain,
                &self.bodies,
                tile_size,
            ))
        } else {
            None
        };

        TickReport {
            tick: self.tick,
            action,
            blocks_fallen,
        }
    }

    /// Rebuild the terrain from a new seed and respawn the player
    ///
    /// Extra bodies are re-seated on the new ground of the column they stood
    /// in. Inventory, extra bodies and time of day are kept.
    pub fn regenerate(&mut self, seed: u64) {
        self.terrain.regenerate(seed);
        let spawn = Self::spawn_position(&self.config, &self.terrain);
        self.player.respawn(spawn);

        let tile_size = self.config.tile_size;
        for body in &mut self.bodies {
            let column = (body.position.x / tile_size).floor() as i32;
            body.place_at(self.terrain.spawn_point(column, body.size.x, tile_size));
        }

        log::info!(
            "World regenerated with seed {}, {} extra bodies re-seated",
            seed,
            self.bodies.len()
        );
    }

    /// Add a non-player body, simulated after the player every tick
    pub fn spawn_body(&mut self, body: Body) -> BodyId {
        self.bodies.push(body);
        BodyId(self.bodies.len() - 1)
    }

    /// Write path for input collaborators
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Direct player access for session setup (starting kits, fixtures)
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn tile_at(&self, x: i32, y: i32) -> BlockState {
        self.terrain.get_tile(x, y)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn inventory_slots(&self) -> &[Slot] {
        self.player.inventory.slots()
    }

    pub fn active_slot_index(&self) -> usize {
        self.player.inventory.active_slot_index()
    }

    pub fn darkness_level(&self) -> f32 {
        self.time.darkness_level()
    }

    pub fn time_cycle(&self) -> &TimeCycle {
        &self.time
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn blocks(&self) -> &Blocks {
        self.terrain.blocks()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Ticks run so far
    pub fn tick_count(&self) -> u64 {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Facing, MoveIntent};
    use crate::world::{CollisionDetector, RejectReason};
    use tilecraft_blocks::BlockId;

    fn sketch_sim(rows: &[&str]) -> Simulation {
        Simulation::new(SimConfig::default(), Terrain::from_sketch(rows))
    }

    /// 7 wide, 6 tall: grass floor at row 1 over bedrock, player spawns on column 3
    fn flat_sim() -> Simulation {
        sketch_sim(&[
            ".......", //
            ".......", //
            ".......", //
            ".......", //
            "ggggggg", //
            "BBBBBBB",
        ])
    }

    #[test]
    fn test_player_spawns_on_middle_column() {
        let sim = flat_sim();
        assert_eq!(sim.player().body.position, Vec2::new(96.0, 64.0));
        assert_eq!(sim.tick_count(), 0);
    }

    #[test]
    fn test_tick_counts_and_advances_time() {
        let mut sim = flat_sim();
        let report = sim.tick();
        assert_eq!(report.tick, 1);
        assert_eq!(report.action, None);
        assert_eq!(sim.time_cycle().time(), 10);
        assert_eq!(sim.tick_count(), 1);
    }

    #[test]
    fn test_player_settles_on_spawn() {
        let mut sim = flat_sim();
        for _ in 0..5 {
            sim.tick();
        }
        let body = &sim.player().body;
        assert_eq!(body.position.y, 64.0);
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.on_ground);
    }

    #[test]
    fn test_action_consumed_once() {
        let mut sim = sketch_sim(&[
            ".......", //
            ".......", //
            "....#..", //
            ".......", //
            "ggggggg", //
            "BBBBBBB",
        ]);

        sim.input_mut().trigger_action();
        let first = sim.tick();
        assert_eq!(
            first.action,
            Some(ActionResult::Mined {
                block_id: BlockId::STONE,
                drop: BlockId::STONE,
                stored: true
            })
        );

        // Stale latch never re-fires
        let second = sim.tick();
        assert_eq!(second.action, None);
        assert_eq!(sim.inventory_slots()[0], Slot::new(BlockId::STONE, 1));
    }

    #[test]
    fn test_slot_selection_applied_before_action() {
        let mut sim = flat_sim();
        sim.player_mut().inventory.set_slot(2, BlockId::DIRT, 1);

        sim.input_mut().select_slot(2);
        sim.input_mut().trigger_action();
        let report = sim.tick();

        assert_eq!(sim.active_slot_index(), 2);
        // Target (4, 3) floats above the grass at row 1
        assert_eq!(
            report.action,
            Some(ActionResult::Rejected(RejectReason::NoSupport))
        );
    }

    #[test]
    fn test_movement_intent_persists_across_ticks() {
        let mut sim = flat_sim();
        sim.input_mut().set_movement_intent(MoveIntent::Left);
        for _ in 0..4 {
            sim.tick();
        }
        assert_eq!(sim.player().body.position.x, 76.0);
        assert_eq!(sim.player().body.facing, Facing::Left);
    }

    #[test]
    fn test_jump_latch_consumed() {
        let mut sim = flat_sim();
        sim.tick();
        sim.input_mut().trigger_jump();
        sim.tick();
        assert!(sim.player().body.velocity.y > 0.0);
        assert!(!sim.input_mut().take_jump());
    }

    #[test]
    fn test_extra_bodies_fall_after_player() {
        let mut sim = flat_sim();
        let id = sim.spawn_body(Body::new(Vec2::new(0.0, 120.0), Vec2::new(32.0, 32.0)));

        for _ in 0..40 {
            sim.tick();
        }

        let body = sim.body(id).expect("spawned body");
        assert_eq!(body.position.y, 64.0);
        assert!(body.on_ground);
    }

    #[test]
    fn test_placement_blocked_by_extra_body() {
        let mut sim = sketch_sim(&[
            ".......", //
            ".......", //
            ".....#.", //
            ".......", //
            "ggggggg", //
            "BBBBBBB",
        ]);
        sim.player_mut().inventory.set_slot(0, BlockId::DIRT, 1);
        // Sits on the grass right in front of the player
        sim.spawn_body(Body::new(Vec2::new(128.0, 64.0), Vec2::new(32.0, 64.0)));

        sim.input_mut().trigger_action();
        let report = sim.tick();

        assert_eq!(
            report.action,
            Some(ActionResult::Rejected(RejectReason::Occupied))
        );
        assert_eq!(sim.player().inventory.count_item(BlockId::DIRT), 1);
    }

    #[test]
    fn test_placed_sand_falls_on_later_ticks() {
        let mut sim = sketch_sim(&[
            ".......", //
            ".......", //
            ".....#.", //
            ".......", //
            "ggggggg", //
            "BBBBBBB",
        ]);
        sim.player_mut().inventory.set_slot(0, BlockId::SAND, 1);

        // Target (4, 3) is held up only by the stone beside it
        sim.input_mut().trigger_action();
        let report = sim.tick();
        assert_eq!(report.action, Some(ActionResult::Placed(BlockId::SAND)));
        assert_eq!(report.blocks_fallen, 0);
        assert_eq!(sim.tile_at(4, 3).block_type_id, BlockId::SAND);

        let report = sim.tick();
        assert_eq!(report.blocks_fallen, 1);
        assert_eq!(sim.tile_at(4, 2).block_type_id, BlockId::SAND);
        assert!(sim.tile_at(4, 3).is_air());

        let report = sim.tick();
        assert_eq!(report.blocks_fallen, 0);
    }

    #[test]
    fn test_regenerate_respawns_and_keeps_inventory() {
        let mut sim = Simulation::try_new(
            SimConfig::default(),
            WorldGenConfig::preset_small(32),
            1,
        )
        .expect("valid configs");
        sim.player_mut().inventory.set_slot(0, BlockId::DIRT, 7);
        sim.input_mut().set_movement_intent(MoveIntent::Right);
        for _ in 0..10 {
            sim.tick();
        }

        sim.regenerate(2);

        let terrain = sim.terrain();
        let expected = terrain.spawn_point(16, 32.0, 32.0);
        assert_eq!(terrain.seed(), 2);
        assert_eq!(sim.player().body.position, expected);
        assert_eq!(sim.player().inventory.count_item(BlockId::DIRT), 7);
    }

    #[test]
    fn test_regenerate_reseats_extra_bodies() {
        let mut sim = Simulation::try_new(
            SimConfig::default(),
            WorldGenConfig::preset_small(32),
            1,
        )
        .expect("valid configs");
        let spawn = sim.terrain().spawn_point(5, 32.0, 32.0);
        let id = sim.spawn_body(Body::new(spawn, Vec2::new(32.0, 32.0)));
        let tall = sim.spawn_body(Body::new(Vec2::new(700.0, 900.0), Vec2::new(32.0, 64.0)));

        for seed in 2..60 {
            sim.regenerate(seed);
            for _ in 0..3 {
                sim.tick();
            }

            let terrain = sim.terrain();
            for body in std::iter::once(&sim.player().body).chain(sim.bodies()) {
                let overlaps =
                    CollisionDetector::box_hits_solid(terrain, body.position, body.size, 32.0);
                assert!(
                    !overlaps,
                    "seed {}: body at {:?} inside solid ground",
                    seed,
                    body.position
                );
            }
        }

        // Re-seated bodies stand on the surface of their own column
        let body = sim.body(id).expect("spawned body");
        assert_eq!(body.position.x, 160.0);
        assert!(body.on_ground);
        let tall = sim.body(tall).expect("spawned body");
        assert_eq!(tall.position.x, 672.0);
    }

    #[test]
    fn test_try_new_rejects_bad_config() {
        let config = SimConfig {
            tile_size: 0.0,
            ..SimConfig::default()
        };
        assert!(Simulation::try_new(config, WorldGenConfig::default(), 1).is_err());
    }
}
