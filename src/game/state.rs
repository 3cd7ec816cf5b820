//! Game state and session types

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first start input
    Idle,
    /// Active gameplay
    Playing,
    /// Session ended; a start input begins a new one
    GameOver,
}

/// Obstacle variants scrolling toward the cat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Dog,
    Puddle,
    Chair,
    Pit,
}

impl ObstacleKind {
    /// Spawn pool, drawn from uniformly
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Dog,
        ObstacleKind::Puddle,
        ObstacleKind::Chair,
        ObstacleKind::Pit,
    ];

    /// Label drawn above the obstacle
    pub fn label(&self) -> &'static str {
        match self {
            ObstacleKind::Dog => "\u{1f436}",
            ObstacleKind::Puddle => "\u{1f4a7}",
            ObstacleKind::Chair => "\u{1fa91}",
            ObstacleKind::Pit => "\u{26ab}",
        }
    }

    /// Fill color for the obstacle body
    pub fn color(&self) -> &'static str {
        match self {
            ObstacleKind::Dog => "#808080",
            ObstacleKind::Puddle => "#1e90ff",
            ObstacleKind::Chair => "#a52a2a",
            ObstacleKind::Pit => "#333333",
        }
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub id: u32,
    pub x: f32,
    pub kind: ObstacleKind,
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Set when the session ended on an obstacle hit
    pub collided: bool,
    /// Frames survived this session
    pub score: u32,
    /// Height of the cat above the ground, never negative
    pub cat_position: f32,
    /// Positive is downward; jumps launch with a negative velocity
    pub cat_velocity: f32,
    /// Set between launch and the next ground contact
    pub jumping: bool,
    /// Spawn order; ids strictly increasing within a session
    pub obstacles: Vec<Obstacle>,
    pub(crate) last_spawn_ms: f64,
    next_id: u32,
    rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Idle,
            collided: false,
            score: 0,
            cat_position: 0.0,
            cat_velocity: 0.0,
            jumping: false,
            obstacles: Vec::new(),
            last_spawn_ms: 0.0,
            next_id: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begin a fresh session at `now_ms`. Ids restart at 0; the first
    /// obstacle is due one spawn interval after this moment.
    pub(crate) fn reset(&mut self, now_ms: f64) {
        self.phase = GamePhase::Playing;
        self.collided = false;
        self.score = 0;
        self.cat_position = 0.0;
        self.cat_velocity = 0.0;
        self.jumping = false;
        self.obstacles.clear();
        self.last_spawn_ms = now_ms;
        self.next_id = 0;
    }

    /// Allocate the next obstacle id
    fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append one obstacle of uniformly random kind at the right edge
    pub(crate) fn spawn_obstacle(&mut self, now_ms: f64) {
        let kind = ObstacleKind::ALL[self.rng.random_range(0..ObstacleKind::ALL.len())];
        let id = self.next_obstacle_id();
        self.obstacles.push(Obstacle {
            id,
            x: SPAWN_X,
            kind,
        });
        self.last_spawn_ms = now_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_ids_strictly_increase() {
        let mut state = GameState::new(11);
        for i in 0..20 {
            state.spawn_obstacle(i as f64 * 1500.0);
        }
        let ids: Vec<u32> = state.obstacles.iter().map(|o| o.id).collect();
        assert_eq!(ids, (0..20).collect::<Vec<u32>>());
        assert!(state.obstacles.iter().all(|o| o.x == SPAWN_X));
    }

    #[test]
    fn test_reset_restarts_ids_and_timer() {
        let mut state = GameState::new(11);
        state.spawn_obstacle(0.0);
        state.spawn_obstacle(1500.0);
        state.score = 77;
        state.cat_position = 12.0;
        state.cat_velocity = -3.0;
        state.jumping = true;
        state.collided = true;

        state.reset(9000.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.collided);
        assert_eq!(state.score, 0);
        assert_eq!(state.cat_position, 0.0);
        assert_eq!(state.cat_velocity, 0.0);
        assert!(!state.jumping);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.last_spawn_ms, 9000.0);

        state.spawn_obstacle(10_500.0);
        assert_eq!(state.obstacles[0].id, 0);
    }
}
