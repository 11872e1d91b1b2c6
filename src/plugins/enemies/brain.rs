//! Enemy behaviour state machine.
//!
//! Behaviour is recomputed every tick from `(distance, player_alive)` with
//! plain threshold comparisons; nothing but timers is carried between ticks.
//!
//! ```text
//! d < attack_range && alive  -> Attack
//! d < vision_range && alive  -> Chase
//! otherwise                  -> Patrol
//! receive_damage, health <= 0 -> Dead (terminal)
//! ```

use std::time::Duration;

use bevy::prelude::*;

use crate::common::motion::Facing;
use crate::common::tunables::{secs, EnemyTunables};

/// How long the "shoot" clip stays up after a shot.
const SHOOT_ANIM: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Behavior {
    #[default]
    Patrol,
    Chase,
    Attack,
    Dead,
}

/// Pure transition function for a living enemy.
#[inline]
pub fn select_behavior(distance: f32, player_alive: bool, t: &EnemyTunables) -> Behavior {
    if !player_alive {
        Behavior::Patrol
    } else if distance < t.attack_range {
        Behavior::Attack
    } else if distance < t.vision_range {
        Behavior::Chase
    } else {
        Behavior::Patrol
    }
}

/// Oscillation around a fixed anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patrol {
    pub anchor_x: f32,
    pub half_width: f32,
    pub dir: f32,
}

impl Patrol {
    /// Direction to walk from `x`, flipping once the anchor offset leaves the band.
    #[inline]
    pub fn step(&mut self, x: f32) -> f32 {
        let offset = x - self.anchor_x;
        if offset > self.half_width {
            self.dir = -1.0;
        } else if offset < -self.half_width {
            self.dir = 1.0;
        }
        self.dir
    }
}

/// What the behaviour machine asks of the physics and projectile collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnemyCommand {
    /// `None` leaves the current horizontal velocity alone (dead or staggered).
    pub velocity_x: Option<f32>,
    pub fire_at: Option<Vec2>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyDamage {
    Ignored,
    Hurt,
    Killed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAnimation {
    Dead,
    Shoot,
    Walk,
    Idle,
}

impl EnemyAnimation {
    pub fn label(self) -> &'static str {
        match self {
            EnemyAnimation::Dead => "dead",
            EnemyAnimation::Shoot => "shoot",
            EnemyAnimation::Walk => "walk",
            EnemyAnimation::Idle => "idle",
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct EnemyBrain {
    behavior: Behavior,
    health: i32,
    /// Zero means ready; a fresh enemy fires as soon as it first attacks.
    fire_cooldown: Duration,
    patrol: Patrol,
    facing: Facing,
    stagger: Duration,
    hit_flash: Duration,
    since_shot: Option<Duration>,
    dying: Option<Timer>,
}

impl EnemyBrain {
    pub fn new(anchor_x: f32, t: &EnemyTunables) -> Self {
        Self {
            behavior: Behavior::Patrol,
            health: t.max_health,
            fire_cooldown: Duration::ZERO,
            patrol: Patrol {
                anchor_x,
                half_width: t.patrol_half_width,
                dir: 1.0,
            },
            facing: Facing::Right,
            stagger: Duration::ZERO,
            hit_flash: Duration::ZERO,
            since_shot: None,
            dying: None,
        }
    }

    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn patrol(&self) -> Patrol {
        self.patrol
    }

    pub fn fire_cooldown(&self) -> Duration {
        self.fire_cooldown
    }

    pub fn is_dead(&self) -> bool {
        self.behavior == Behavior::Dead
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }

    pub fn is_staggered(&self) -> bool {
        !self.stagger.is_zero()
    }

    /// Hit tint; a dead enemy never reverts to (or shows) it.
    pub fn is_flashing(&self) -> bool {
        self.is_alive() && !self.hit_flash.is_zero()
    }

    /// Advance every countdown. Returns `true` on the tick the death timer ends.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.fire_cooldown = self.fire_cooldown.saturating_sub(dt);
        self.stagger = self.stagger.saturating_sub(dt);
        self.hit_flash = self.hit_flash.saturating_sub(dt);
        if let Some(since) = &mut self.since_shot {
            *since += dt;
        }

        match &mut self.dying {
            Some(timer) => timer.tick(dt).just_finished(),
            None => false,
        }
    }

    /// Re-evaluate behaviour and produce this tick's command.
    pub fn think(&mut self, position: Vec2, player: Vec2, player_alive: bool, t: &EnemyTunables) -> EnemyCommand {
        if self.is_dead() {
            return EnemyCommand::default();
        }

        self.behavior = select_behavior(position.distance(player), player_alive, t);

        let mut cmd = EnemyCommand::default();
        let velocity_x = match self.behavior {
            Behavior::Patrol => {
                let dir = self.patrol.step(position.x);
                self.facing = self.facing.toward(dir);
                dir * t.patrol_speed
            }
            Behavior::Chase => {
                self.facing = self.facing.toward(player.x - position.x);
                self.facing.sign() * t.chase_speed
            }
            Behavior::Attack => {
                self.facing = self.facing.toward(player.x - position.x);
                if self.fire_cooldown.is_zero() {
                    self.fire_cooldown = secs(t.fire_rate_secs);
                    self.since_shot = Some(Duration::ZERO);
                    cmd.fire_at = Some(player);
                }
                0.0
            }
            Behavior::Dead => 0.0,
        };

        if !self.is_staggered() {
            cmd.velocity_x = Some(velocity_x);
        }
        cmd
    }

    pub fn receive_damage(&mut self, amount: i32, t: &EnemyTunables) -> EnemyDamage {
        if self.is_dead() {
            return EnemyDamage::Ignored;
        }

        self.health -= amount;
        self.hit_flash = secs(t.hit_flash_secs);

        if self.health <= 0 {
            self.health = 0;
            self.behavior = Behavior::Dead;
            self.stagger = Duration::ZERO;
            self.dying = Some(Timer::new(secs(t.death_secs), TimerMode::Once));
            EnemyDamage::Killed
        } else {
            EnemyDamage::Hurt
        }
    }

    /// Open the knockback window in which behaviour leaves velocity alone.
    pub fn stagger(&mut self, t: &EnemyTunables) {
        if self.is_alive() {
            self.stagger = secs(t.stagger_secs);
        }
    }

    pub fn animation(&self, velocity_x: f32) -> EnemyAnimation {
        if self.is_dead() {
            return EnemyAnimation::Dead;
        }
        if self.behavior == Behavior::Attack {
            return match self.since_shot {
                Some(since) if since < SHOOT_ANIM => EnemyAnimation::Shoot,
                _ => EnemyAnimation::Idle,
            };
        }
        if velocity_x.abs() > 1.0 {
            EnemyAnimation::Walk
        } else {
            EnemyAnimation::Idle
        }
    }
}
