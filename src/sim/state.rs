//! Game state and core simulation types
//!
//! Everything the per-frame tick mutates lives here: the player, the two
//! recycled entity populations, and the session-wide counters.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::lane::Lane;
use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for a restart command
    GameOver,
}

/// Anything with an axis-aligned footprint on the screen
pub trait Entity {
    fn bounds(&self) -> Rect;
}

/// Indices of entities whose boxes overlap `target`, in storage order
pub fn overlapping<'a, E: Entity>(
    target: Rect,
    entities: &'a [E],
) -> impl Iterator<Item = usize> + 'a {
    entities
        .iter()
        .enumerate()
        .filter(move |(_, e)| e.bounds().intersects(&target))
        .map(|(i, _)| i)
}

/// The player sprite
///
/// Created once per session and reset in place on restart. The jump is the
/// only vertical motion; `is_invincible` is true exactly while airborne.
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub lane: Lane,
    pub vertical_speed: f32,
    pub is_jumping: bool,
    pub is_invincible: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            rect: Self::start_rect(),
            lane: Lane::Middle,
            vertical_speed: 0.0,
            is_jumping: false,
            is_invincible: false,
        }
    }

    fn start_rect() -> Rect {
        Rect::from_center(
            Vec2::new(Lane::Middle.center_x(), GROUND_Y - PLAYER_HEIGHT / 2.0),
            Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        )
    }

    /// Restore the session-start configuration without recreating the value
    pub fn reset(&mut self) {
        self.rect = Self::start_rect();
        self.lane = Lane::Middle;
        self.vertical_speed = 0.0;
        self.is_jumping = false;
        self.is_invincible = false;
    }

    /// Consume this frame's intents and advance lane slide and jump physics
    pub fn update(&mut self, input: &TickInput, tuning: &Tuning, dt: f32) {
        if input.move_left {
            self.lane = self.lane.left();
        }
        if input.move_right {
            self.lane = self.lane.right();
        }
        if input.jump && !self.is_jumping {
            self.is_jumping = true;
            self.is_invincible = true;
            self.vertical_speed = tuning.jump_speed;
        }

        // Slide toward the lane center. The step is clamped so the box
        // settles exactly on the target instead of oscillating past it.
        let target_x = self.lane.center_x();
        let delta = target_x - self.rect.center_x();
        let step = tuning.lane_slide_speed * dt;
        if delta.abs() <= step {
            self.rect.set_center_x(target_x);
        } else {
            let x = self.rect.center_x() + step * delta.signum();
            self.rect.set_center_x(x);
        }

        if self.is_jumping {
            // Gravity applies before displacement, so the launch frame
            // already rises by less than the full jump speed.
            self.vertical_speed -= tuning.gravity * dt;
            self.rect.pos.y -= self.vertical_speed * dt;
            if self.rect.bottom() >= GROUND_Y {
                self.rect.set_bottom(GROUND_Y);
                self.is_jumping = false;
                self.vertical_speed = 0.0;
                self.is_invincible = false;
            }
        } else {
            // Landing already clears this; the invariant holds regardless.
            self.is_invincible = false;
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Player {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// An oncoming train obstacle
///
/// Trains are never destroyed during play; off-screen trains are recycled
/// back above the top edge into a fresh random lane.
#[derive(Debug, Clone)]
pub struct Train {
    pub id: u32,
    pub rect: Rect,
    pub lane: Lane,
}

impl Train {
    pub fn new(id: u32, lane: Lane) -> Self {
        let mut rect = Rect::new(0.0, 0.0, TRAIN_WIDTH, TRAIN_HEIGHT);
        rect.set_center_x(lane.center_x());
        rect.set_bottom(-TRAIN_HEIGHT);
        Self { id, rect, lane }
    }

    /// Fall by the tuned speed; recycle once fully below the screen
    pub fn update(&mut self, tuning: &Tuning, dt: f32, rng: &mut impl Rng) {
        self.rect.pos.y += tuning.train_speed * dt;
        if self.rect.top() > SCREEN_HEIGHT {
            self.rect.set_bottom(-self.rect.height());
            self.rect.set_center_x(Lane::random(rng).center_x());
            self.lane = Lane::from_x(self.rect.center_x());
        }
    }
}

impl Entity for Train {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// A collectible coin
///
/// Coins carry no lane value; collection uses box overlap only. Off-screen
/// coins re-enter from a random height above the top edge.
#[derive(Debug, Clone)]
pub struct Coin {
    pub id: u32,
    pub rect: Rect,
}

impl Coin {
    pub fn new(id: u32, lane: Lane, rng: &mut impl Rng) -> Self {
        let mut rect = Rect::new(0.0, 0.0, COIN_SIZE, COIN_SIZE);
        rect.set_center_x(lane.center_x());
        rect.set_bottom(rng.random_range(COIN_DROP_MIN_Y..COIN_DROP_MAX_Y));
        Self { id, rect }
    }

    /// Fall by the tuned speed; recycle once fully below the screen
    pub fn update(&mut self, tuning: &Tuning, dt: f32, rng: &mut impl Rng) {
        self.rect.pos.y += tuning.coin_speed * dt;
        if self.rect.top() > SCREEN_HEIGHT {
            self.rect
                .set_bottom(rng.random_range(COIN_DROP_MIN_Y..COIN_DROP_MAX_Y));
            self.rect.set_center_x(Lane::random(rng).center_x());
        }
    }
}

impl Entity for Coin {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// All live entities, with typed views for targeted collision queries
#[derive(Debug, Clone)]
pub struct EntityRegistry {
    pub player: Player,
    pub(crate) trains: Vec<Train>,
    pub(crate) coins: Vec<Coin>,
    next_id: u32,
}

impl EntityRegistry {
    pub fn new(tuning: &Tuning, rng: &mut impl Rng) -> Self {
        let mut registry = Self {
            player: Player::new(),
            trains: Vec::new(),
            coins: Vec::new(),
            next_id: 1,
        };
        registry.populate(tuning, rng);
        registry
    }

    /// Restore the initial entity configuration in place
    pub fn reset(&mut self, tuning: &Tuning, rng: &mut impl Rng) {
        self.player.reset();
        self.trains.clear();
        self.coins.clear();
        self.populate(tuning, rng);
    }

    fn populate(&mut self, tuning: &Tuning, rng: &mut impl Rng) {
        // Initial trains enter left to right; the reference layout starts
        // with a single train in the left lane.
        let lanes = [Lane::Left, Lane::Middle, Lane::Right];
        for i in 0..tuning.initial_trains {
            let lane = lanes[i % lanes.len()];
            self.spawn_train(lane);
        }
        for _ in 0..tuning.initial_coins {
            let lane = Lane::random(rng);
            self.spawn_coin(lane, rng);
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// Append a new train entering above the screen in `lane`
    pub fn spawn_train(&mut self, lane: Lane) {
        let id = self.next_entity_id();
        self.trains.push(Train::new(id, lane));
    }

    /// Append a new coin entering above the screen in `lane`
    pub fn spawn_coin(&mut self, lane: Lane, rng: &mut impl Rng) {
        let id = self.next_entity_id();
        self.coins.push(Coin::new(id, lane, rng));
    }

    /// Remove a coin by storage index in O(1)
    pub fn collect_coin(&mut self, index: usize) -> Coin {
        self.coins.swap_remove(index)
    }

    /// Update every live entity exactly once
    pub fn update_all(&mut self, input: &TickInput, tuning: &Tuning, dt: f32, rng: &mut impl Rng) {
        self.player.update(input, tuning, dt);
        for train in &mut self.trains {
            train.update(tuning, dt, rng);
        }
        for coin in &mut self.coins {
            coin.update(tuning, dt, rng);
        }
    }

    /// Ensure trains and coins are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.trains.sort_by_key(|t| t.id);
        self.coins.sort_by_key(|c| c.id);
    }
}

/// Complete game state (deterministic given seed and inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG (lane draws, coin drop heights)
    pub rng: Pcg32,
    /// Balance constants
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Coins collected this run
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Elapsed simulated time in milliseconds
    pub clock_ms: f32,
    /// Current delay between train spawns (non-increasing, floored)
    pub spawn_interval_ms: f32,
    /// Clock reading at the last spawn event
    pub last_spawn_ms: f32,
    /// Horizontal background offset (cosmetic, coupled to the tick)
    pub scroll_x: f32,
    /// All live entities
    pub registry: EntityRegistry,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let registry = EntityRegistry::new(&tuning, &mut rng);
        let spawn_interval_ms = tuning.spawn_interval_start_ms;
        Self {
            seed,
            rng,
            tuning,
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            clock_ms: 0.0,
            spawn_interval_ms,
            last_spawn_ms: 0.0,
            scroll_x: 0.0,
            registry,
        }
    }

    /// Restart the session in place: score, spawn ramp and entity sets go
    /// back to their initial configuration; the clock and RNG keep running.
    pub fn reset(&mut self) {
        self.score = 0;
        self.spawn_interval_ms = self.tuning.spawn_interval_start_ms;
        self.last_spawn_ms = self.clock_ms;
        self.phase = GamePhase::Playing;
        self.registry.reset(&self.tuning, &mut self.rng);
        log::info!("session restarted (seed {})", self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_initial_population() {
        let tuning = Tuning::default();
        let mut rng = test_rng();
        let registry = EntityRegistry::new(&tuning, &mut rng);
        assert_eq!(registry.trains().len(), INITIAL_TRAIN_COUNT);
        assert_eq!(registry.coins().len(), INITIAL_COIN_COUNT);
        assert_eq!(registry.trains()[0].lane, Lane::Left);
        assert_eq!(registry.player.lane, Lane::Middle);
        assert_eq!(registry.player.rect.bottom(), GROUND_Y);
    }

    #[test]
    fn test_coins_spawn_above_screen_in_a_lane() {
        let tuning = Tuning::default();
        let mut rng = test_rng();
        let registry = EntityRegistry::new(&tuning, &mut rng);
        for coin in registry.coins() {
            assert!(coin.rect.bottom() >= COIN_DROP_MIN_Y);
            assert!(coin.rect.bottom() < COIN_DROP_MAX_Y);
            let x = coin.rect.center_x();
            assert!([150.0, 400.0, 650.0].contains(&x), "coin off-lane at {x}");
        }
    }

    #[test]
    fn test_train_recycle_reclassifies_lane() {
        let tuning = Tuning::default();
        let mut rng = test_rng();
        let mut train = Train::new(1, Lane::Middle);
        // Park it just below the screen so one update recycles it
        train.rect.pos.y = SCREEN_HEIGHT + 1.0;
        train.update(&tuning, SIM_DT, &mut rng);
        assert!(train.rect.bottom() <= 0.0);
        assert_eq!(train.lane, Lane::from_x(train.rect.center_x()));
    }

    #[test]
    fn test_collect_coin_is_removal_by_index() {
        let tuning = Tuning::default();
        let mut rng = test_rng();
        let mut registry = EntityRegistry::new(&tuning, &mut rng);
        let victim = registry.coins()[3].id;
        let removed = registry.collect_coin(3);
        assert_eq!(removed.id, victim);
        assert_eq!(registry.coins().len(), INITIAL_COIN_COUNT - 1);
        assert!(registry.coins().iter().all(|c| c.id != victim));
    }

    #[test]
    fn test_overlapping_query() {
        let mut rng = test_rng();
        let coins = vec![
            Coin::new(1, Lane::Left, &mut rng),
            Coin::new(2, Lane::Middle, &mut rng),
        ];
        let target = coins[1].rect;
        let hits: Vec<usize> = overlapping(target, &coins).collect();
        assert_eq!(hits, vec![1]);
    }
}
