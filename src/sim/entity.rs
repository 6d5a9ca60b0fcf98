//! Moving entities: enemies, the player, and the bridge
//!
//! Every entity is a `Body` (top-left position + fixed box) plus its own
//! per-kind data and update rule. Nothing is ever despawned; entities that
//! leave the screen are repositioned instead.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Opaque handle to a sprite asset, owned by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sprite(pub String);

impl Sprite {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Axis-aligned box anchored at its top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// A body the size of one grid cell
    pub fn cell(pos: Vec2) -> Self {
        Self::new(pos, Vec2::new(CELL_WIDTH, CELL_HEIGHT))
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Anything with a hitbox
pub trait Bounded {
    fn body(&self) -> &Body;
}

impl Bounded for Body {
    fn body(&self) -> &Body {
        self
    }
}

/// Draw a fresh enemy speed
fn random_enemy_speed<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED)
}

/// A bug crawling along one row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Shown to the player as the cause of death
    pub name: String,
    pub body: Body,
    /// Units per second, always positive (moves right)
    pub speed: f32,
    pub sprite: Sprite,
}

impl Enemy {
    /// Spawn somewhere on the visible part of row `row_y` with a random speed
    pub fn spawn<R: Rng>(
        name: impl Into<String>,
        row_y: f32,
        sprite: Sprite,
        rng: &mut R,
    ) -> Self {
        let x = rng.random_range(0.0..ENEMY_WRAP_X);
        Self {
            name: name.into(),
            body: Body::cell(Vec2::new(x, row_y)),
            speed: random_enemy_speed(rng),
            sprite,
        }
    }

    /// Advance by `dt` seconds. Returns true if the enemy wrapped this tick.
    ///
    /// The wrap test looks at the position *before* moving, so an enemy can
    /// sit past the right edge for one tick.
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) -> bool {
        let wrapped = self.body.pos.x > ENEMY_WRAP_X;
        if wrapped {
            self.body.pos.x = rng.random_range(ENEMY_REENTRY_MIN_X..0.0);
            self.speed = random_enemy_speed(rng);
            log::debug!("{} re-enters at x={:.1} speed={:.1}", self.name, self.body.pos.x, self.speed);
        }
        self.body.pos.x += self.speed * dt;
        wrapped
    }
}

impl Bounded for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// The floating bridge, the only safe way across the water
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bridge {
    pub body: Body,
    /// Units per second, moves left
    pub speed: f32,
    pub sprite: Sprite,
}

impl Bridge {
    pub fn new(start: Vec2, sprite: Sprite) -> Self {
        Self {
            body: Body::cell(start),
            speed: BRIDGE_SPEED,
            sprite,
        }
    }

    /// Advance by `dt` seconds. Returns true if the bridge wrapped this tick.
    pub fn update(&mut self, dt: f32) -> bool {
        let wrapped = self.body.pos.x < BRIDGE_WRAP_X;
        if wrapped {
            self.body.pos.x = BRIDGE_REENTRY_X;
        }
        self.body.pos.x -= self.speed * dt;
        wrapped
    }
}

impl Bounded for Bridge {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// One grid step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map a DOM `keyCode` for the arrow keys
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Direction::Left),
            38 => Some(Direction::Up),
            39 => Some(Direction::Right),
            40 => Some(Direction::Down),
            _ => None,
        }
    }

    /// Parse "left" / "right" / "up" / "down" (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Offset of one step in this direction
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-CELL_WIDTH, 0.0),
            Direction::Right => Vec2::new(CELL_WIDTH, 0.0),
            Direction::Up => Vec2::new(0.0, -CELL_HEIGHT),
            Direction::Down => Vec2::new(0.0, CELL_HEIGHT),
        }
    }
}

/// The player's avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Where the player respawns after losing a life
    pub spawn: Vec2,
    pub sprite: Sprite,
}

impl Player {
    pub fn new(spawn: Vec2, sprite: Sprite) -> Self {
        Self {
            body: Body::new(spawn, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)),
            spawn,
            sprite,
        }
    }

    pub fn reset_position(&mut self) {
        self.body.pos = self.spawn;
    }

    /// True if a top-left corner at `pos` is inside the playable area
    pub fn in_bounds(pos: Vec2) -> bool {
        (PLAYER_MIN_X..=PLAYER_MAX_X).contains(&pos.x)
            && (PLAYER_MIN_Y..=PLAYER_MAX_Y).contains(&pos.y)
    }

    /// Step one cell in `dir`. Moves that would leave the playable area are
    /// dropped, not clamped. Returns true if the player moved.
    pub fn handle_input(&mut self, dir: Direction) -> bool {
        let candidate = self.body.pos + dir.offset();
        if !Self::in_bounds(candidate) {
            return false;
        }
        self.body.pos = candidate;
        true
    }

    /// Over the water?
    pub fn above_water(&self) -> bool {
        self.body.pos.y < WATER_LINE_Y
    }
}

impl Bounded for Player {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// Borrowed view over any entity, for uniform iteration (e.g. drawing)
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Enemy(&'a Enemy),
    Player(&'a Player),
    Bridge(&'a Bridge),
}

impl<'a> EntityRef<'a> {
    pub fn body(&self) -> &'a Body {
        match *self {
            EntityRef::Enemy(e) => &e.body,
            EntityRef::Player(p) => &p.body,
            EntityRef::Bridge(b) => &b.body,
        }
    }

    pub fn sprite(&self) -> &'a Sprite {
        match *self {
            EntityRef::Enemy(e) => &e.sprite,
            EntityRef::Player(p) => &p.sprite,
            EntityRef::Bridge(b) => &b.sprite,
        }
    }
}
