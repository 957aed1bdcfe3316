//! Text plan to level builder
//!
//! Each character of a plan row is one tile at `(x = column, y = row)`.
//! `x` and `!` are terrain; dictionary symbols spawn actors; anything else
//! is open air.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::SimError;
use crate::sim::{Actor, Level, Obstacle, Vector, random_phase};

/// Builds an actor for the tile at the given position
pub type ActorSpawner = fn(Vector, &mut Pcg32) -> Actor;

fn spawn_player(pos: Vector, _rng: &mut Pcg32) -> Actor {
    Actor::player(pos)
}

fn spawn_coin(pos: Vector, rng: &mut Pcg32) -> Actor {
    Actor::coin(pos, random_phase(rng))
}

fn spawn_horizontal_fireball(pos: Vector, _rng: &mut Pcg32) -> Actor {
    Actor::horizontal_fireball(pos)
}

fn spawn_vertical_fireball(pos: Vector, _rng: &mut Pcg32) -> Actor {
    Actor::vertical_fireball(pos)
}

fn spawn_fire_rain(pos: Vector, _rng: &mut Pcg32) -> Actor {
    Actor::fire_rain(pos)
}

/// The game's standard symbol table
pub fn standard_dictionary() -> HashMap<char, ActorSpawner> {
    HashMap::from([
        ('@', spawn_player as ActorSpawner),
        ('v', spawn_fire_rain as ActorSpawner),
        ('o', spawn_coin as ActorSpawner),
        ('=', spawn_horizontal_fireball as ActorSpawner),
        ('|', spawn_vertical_fireball as ActorSpawner),
    ])
}

pub struct LevelParser {
    dictionary: HashMap<char, ActorSpawner>,
    /// Source of coin phases
    rng: Pcg32,
}

impl LevelParser {
    pub fn new(dictionary: &HashMap<char, ActorSpawner>) -> Self {
        Self::with_seed(dictionary, 0)
    }

    pub fn with_seed(dictionary: &HashMap<char, ActorSpawner>, seed: u64) -> Self {
        Self {
            dictionary: dictionary.clone(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Parser with the standard symbol table
    pub fn standard(seed: u64) -> Self {
        Self::with_seed(&standard_dictionary(), seed)
    }

    pub fn actor_from_symbol(&self, symbol: char) -> Option<ActorSpawner> {
        self.dictionary.get(&symbol).copied()
    }

    pub fn obstacle_from_symbol(symbol: char) -> Option<Obstacle> {
        match symbol {
            'x' => Some(Obstacle::Wall),
            '!' => Some(Obstacle::Lava),
            _ => None,
        }
    }

    pub fn create_grid(&self, plan: &[&str]) -> Vec<Vec<Option<Obstacle>>> {
        plan.iter()
            .map(|line| line.chars().map(Self::obstacle_from_symbol).collect())
            .collect()
    }

    /// Actors in row-major order
    pub fn create_actors(&mut self, plan: &[&str]) -> Vec<Actor> {
        let mut actors = Vec::new();
        for (y, line) in plan.iter().enumerate() {
            for (x, symbol) in line.chars().enumerate() {
                if let Some(spawn) = self.actor_from_symbol(symbol) {
                    actors.push(spawn(Vector::new(x as f32, y as f32), &mut self.rng));
                }
            }
        }
        actors
    }

    pub fn parse(&mut self, plan: &[&str]) -> Result<Level, SimError> {
        let grid = self.create_grid(plan);
        let actors = self.create_actors(plan);
        let level = Level::new(&grid, actors)?;
        log::info!(
            "Parsed {}x{} level with {} actors",
            level.width(),
            level.height(),
            level.actors().len()
        );
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Behavior, TouchKind};

    #[test]
    fn test_obstacle_symbols() {
        assert_eq!(LevelParser::obstacle_from_symbol('x'), Some(Obstacle::Wall));
        assert_eq!(LevelParser::obstacle_from_symbol('!'), Some(Obstacle::Lava));
        assert_eq!(LevelParser::obstacle_from_symbol(' '), None);
        assert_eq!(LevelParser::obstacle_from_symbol('o'), None);
        assert_eq!(LevelParser::obstacle_from_symbol('X'), None);
    }

    #[test]
    fn test_actor_symbols() {
        let parser = LevelParser::standard(1);
        for symbol in ['@', 'v', 'o', '=', '|'] {
            assert!(parser.actor_from_symbol(symbol).is_some(), "{symbol}");
        }
        assert!(parser.actor_from_symbol('x').is_none());
        assert!(parser.actor_from_symbol('w').is_none());

        let empty = LevelParser::new(&HashMap::new());
        assert!(empty.actor_from_symbol('@').is_none());
    }

    #[test]
    fn test_create_grid() {
        let parser = LevelParser::standard(1);
        let grid = parser.create_grid(&["x o", "!!", ""]);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0], vec![Some(Obstacle::Wall), None, None]);
        assert_eq!(grid[1], vec![Some(Obstacle::Lava), Some(Obstacle::Lava)]);
        assert!(grid[2].is_empty());
    }

    #[test]
    fn test_create_actors_positions_and_order() {
        let mut parser = LevelParser::standard(1);
        let actors = parser.create_actors(&[" = ", "@ o", "v|*"]);

        let kinds: Vec<TouchKind> = actors.iter().map(Actor::kind).collect();
        assert_eq!(
            kinds,
            vec![
                TouchKind::Fireball,
                TouchKind::Player,
                TouchKind::Coin,
                TouchKind::Fireball,
                TouchKind::Fireball,
            ]
        );
        assert_eq!(actors[0].pos, Vector::new(1.0, 0.0));
        assert_eq!(actors[1].pos, Vector::new(0.0, 0.5));
        assert_eq!(actors[3].speed, Vector::new(0.0, 3.0));
        assert_eq!(actors[4].speed, Vector::new(0.0, 2.0));
        assert_eq!(actors[4].pos, Vector::new(1.0, 2.0));
    }

    #[test]
    fn test_custom_dictionary() {
        let dictionary: HashMap<char, ActorSpawner> =
            HashMap::from([('f', spawn_horizontal_fireball as ActorSpawner)]);
        let mut parser = LevelParser::new(&dictionary);
        let actors = parser.create_actors(&["f@f"]);
        assert_eq!(actors.len(), 2);
        assert!(actors.iter().all(|a| a.kind() == TouchKind::Fireball));
    }

    #[test]
    fn test_seed_controls_coin_phase() {
        let phases = |seed| {
            let mut parser = LevelParser::standard(seed);
            parser
                .create_actors(&["ooo"])
                .into_iter()
                .map(|a| match a.behavior {
                    Behavior::Coin(spring) => spring.phase,
                    _ => panic!("expected coin"),
                })
                .collect::<Vec<f32>>()
        };
        assert_eq!(phases(5), phases(5));
        assert_ne!(phases(5), phases(6));
    }

    #[test]
    fn test_parse() {
        let mut parser = LevelParser::standard(3);
        let level = parser
            .parse(&["      ", " @  o ", "xxxxxx", "  !!  "])
            .unwrap();
        assert_eq!(level.width(), 6);
        assert_eq!(level.height(), 4);
        assert_eq!(level.actors().len(), 2);
        assert!(level.player().is_some());
        assert_eq!(
            level.obstacle_at(Vector::new(2.0, 3.0), Vector::ONE),
            Some(Obstacle::Lava)
        );
        // Player stands on the wall row without overlapping it
        let player = level.player().unwrap();
        assert_eq!(level.obstacle_at(player.pos, player.size), None);
    }

    #[test]
    fn test_parse_rejects_two_players() {
        let mut parser = LevelParser::standard(3);
        assert!(matches!(
            parser.parse(&["@ @"]),
            Err(SimError::DuplicatePlayer(_))
        ));
    }
}
