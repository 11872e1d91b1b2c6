//! Player action state machine.
//!
//! Plain data plus methods. Systems feed it intents and elapsed time, then
//! translate the returned requests (velocity, shots) into physics writes and
//! messages. Nothing in here touches the ECS, so every rule is unit-testable.
//!
//! ```text
//!            +------------------- receive_damage (health > 0) ----------------+
//!            v                                                                |
//!   Knockback (invulnerable timer) --expires--> Free ---request_*---> Shooting | Reloading | Healing
//!                                                ^                          |
//!                                                +------- timer ends -------+
//!   any --receive_damage (health == 0)--> Dead (terminal)
//! ```

use std::time::Duration;

use bevy::prelude::*;

use crate::common::motion::{aim_angle, Facing};
use crate::common::tunables::{secs, PlayerTunables};
use crate::plugins::pickups::PickupKind;

/// Exclusive action lock.
///
/// Each variant owns its countdown, so two actions at once cannot be expressed
/// and a cancelled action takes its timer with it.
#[derive(Debug, Clone, Default)]
pub enum ActionLock {
    #[default]
    Free,
    Shooting(Timer),
    Reloading(Timer),
    Healing(Timer),
}

impl ActionLock {
    #[inline]
    fn once(duration: Duration) -> Timer {
        Timer::new(duration, TimerMode::Once)
    }
}

/// Resource economy, always within `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vitals {
    pub health: u32,
    pub max_health: u32,
    pub stamina: f32,
    pub max_stamina: f32,
    pub ammo: u32,
    pub max_ammo: u32,
}

impl Vitals {
    pub fn full(t: &PlayerTunables) -> Self {
        Self {
            health: t.max_health,
            max_health: t.max_health,
            stamina: t.max_stamina,
            max_stamina: t.max_stamina,
            ammo: t.max_ammo,
            max_ammo: t.max_ammo,
        }
    }

    #[inline]
    fn add_stamina(&mut self, delta: f32) {
        self.stamina = (self.stamina + delta).clamp(0.0, self.max_stamina);
    }
}

/// Coarse view of the machine, mostly for HUD/debug and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerPhase {
    Free,
    Shooting,
    Reloading,
    Healing,
    Knockback,
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAnimation {
    Dead,
    Reload,
    Shoot,
    Heal,
    Run,
    Walk,
    Idle,
}

impl PlayerAnimation {
    pub fn label(self) -> &'static str {
        match self {
            PlayerAnimation::Dead => "dead",
            PlayerAnimation::Reload => "reload",
            PlayerAnimation::Shoot => "shoot",
            PlayerAnimation::Heal => "heal",
            PlayerAnimation::Run => "run",
            PlayerAnimation::Walk => "walk",
            PlayerAnimation::Idle => "idle",
        }
    }
}

/// Per-tick movement intent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveIntent {
    /// -1 (left), 0, or 1 (right).
    pub axis: f32,
    pub run: bool,
    pub jump: bool,
}

/// Velocity changes requested from the physics collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionRequest {
    pub velocity_x: f32,
    /// Upward speed to set when a jump was accepted.
    pub jump_velocity: Option<f32>,
}

/// A shot that consumed ammo. Whether a projectile appears is the pool's call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub origin: Vec2,
    pub angle: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotOutcome {
    /// Locked or dead.
    Ignored,
    /// Empty magazine; the request was turned into a reload attempt.
    Reload { started: bool },
    Fired(Shot),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// Invulnerable or already dead.
    Ignored,
    /// Survived; velocity to apply away from the attacker.
    Knockback(Vec2),
    Died,
}

#[derive(Component, Debug, Clone)]
pub struct PlayerState {
    vitals: Vitals,
    action: ActionLock,
    /// Invulnerability flag and its countdown are the same value.
    invulnerable: Option<Timer>,
    dead: bool,
    facing: Facing,
}

impl PlayerState {
    pub fn new(t: &PlayerTunables) -> Self {
        Self {
            vitals: Vitals::full(t),
            action: ActionLock::Free,
            invulnerable: None,
            dead: false,
            facing: Facing::Right,
        }
    }

    /// Same machine with different starting resources (clamped to the maxima).
    pub fn with_vitals(mut self, health: u32, ammo: u32, stamina: f32) -> Self {
        self.vitals.health = health.min(self.vitals.max_health);
        self.vitals.ammo = ammo.min(self.vitals.max_ammo);
        self.vitals.stamina = stamina.clamp(0.0, self.vitals.max_stamina);
        self
    }

    pub fn vitals(&self) -> Vitals {
        self.vitals
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable.is_some()
    }

    /// Seconds left on the invulnerability window, if any.
    pub fn invulnerable_remaining(&self) -> Option<f32> {
        self.invulnerable.as_ref().map(Timer::remaining_secs)
    }

    /// Knockback is the invulnerability window of a living player.
    pub fn is_knocked_back(&self) -> bool {
        !self.dead && self.invulnerable.is_some()
    }

    pub fn is_shooting(&self) -> bool {
        matches!(self.action, ActionLock::Shooting(_))
    }

    pub fn is_reloading(&self) -> bool {
        matches!(self.action, ActionLock::Reloading(_))
    }

    pub fn is_healing(&self) -> bool {
        matches!(self.action, ActionLock::Healing(_))
    }

    pub fn is_action_locked(&self) -> bool {
        !matches!(self.action, ActionLock::Free)
    }

    pub fn phase(&self) -> PlayerPhase {
        if self.dead {
            return PlayerPhase::Dead;
        }
        match self.action {
            ActionLock::Shooting(_) => PlayerPhase::Shooting,
            ActionLock::Reloading(_) => PlayerPhase::Reloading,
            ActionLock::Healing(_) => PlayerPhase::Healing,
            ActionLock::Free if self.invulnerable.is_some() => PlayerPhase::Knockback,
            ActionLock::Free => PlayerPhase::Free,
        }
    }

    /// Advance action and invulnerability countdowns.
    ///
    /// Reload restores ammo here, on completion. Heal already applied its
    /// health at start, so completing it only releases the lock.
    pub fn tick(&mut self, dt: Duration) {
        if self.dead {
            return;
        }

        let action_done = match &mut self.action {
            ActionLock::Free => false,
            ActionLock::Shooting(t) | ActionLock::Reloading(t) | ActionLock::Healing(t) => {
                t.tick(dt).is_finished()
            }
        };
        if action_done {
            if self.is_reloading() {
                self.vitals.ammo = self.vitals.max_ammo;
            }
            self.action = ActionLock::Free;
        }

        let invulnerability_done = self
            .invulnerable
            .as_mut()
            .is_some_and(|t| t.tick(dt).is_finished());
        if invulnerability_done {
            self.invulnerable = None;
        }
    }

    /// Movement, stamina and jump for one tick.
    ///
    /// Returns `None` while knocked back or dead; the physics body keeps
    /// whatever velocity the hit (or death) left it with.
    pub fn apply_movement(
        &mut self,
        intent: MoveIntent,
        grounded: bool,
        dt: f32,
        t: &PlayerTunables,
    ) -> Option<MotionRequest> {
        if self.dead {
            return None;
        }

        let moving = intent.axis != 0.0;
        let running = intent.run && moving;

        if self.is_knocked_back() {
            self.vitals.add_stamina(t.stamina_regen * dt);
            return None;
        }

        let speed = if intent.run && self.vitals.stamina > 0.0 {
            t.run_speed
        } else {
            t.walk_speed
        };

        if running {
            if self.vitals.stamina > 0.0 {
                self.vitals.add_stamina(-t.run_drain * dt);
            }
        } else {
            self.vitals.add_stamina(t.stamina_regen * dt);
        }

        let axis = intent.axis.clamp(-1.0, 1.0);
        self.facing = self.facing.toward(axis);

        let jump_velocity = (intent.jump && grounded && self.vitals.stamina >= t.jump_cost).then(|| {
            self.vitals.stamina -= t.jump_cost;
            t.jump_speed
        });

        Some(MotionRequest { velocity_x: axis * speed, jump_velocity })
    }

    /// Try to fire toward `target`.
    ///
    /// `position` is the player's body centre. An empty magazine redirects to
    /// [`Self::request_reload`]. A shot is paid for here even if the pool later
    /// has no free slot.
    pub fn request_shoot(&mut self, position: Vec2, target: Vec2, t: &PlayerTunables) -> ShotOutcome {
        if self.dead || self.is_action_locked() {
            return ShotOutcome::Ignored;
        }
        if self.vitals.ammo == 0 {
            return ShotOutcome::Reload { started: self.request_reload(t) };
        }

        self.facing = self.facing.toward(target.x - position.x);
        self.action = ActionLock::Shooting(ActionLock::once(secs(t.shoot_secs)));
        self.vitals.ammo -= 1;

        let origin = position + Vec2::new(t.muzzle_offset.x * self.facing.sign(), t.muzzle_offset.y);
        ShotOutcome::Fired(Shot { origin, angle: aim_angle(origin, target) })
    }

    /// Start a reload. Ammo is restored when the reload timer completes.
    pub fn request_reload(&mut self, t: &PlayerTunables) -> bool {
        if self.dead || self.is_action_locked() || self.vitals.ammo == self.vitals.max_ammo {
            return false;
        }
        self.action = ActionLock::Reloading(ActionLock::once(secs(t.reload_secs)));
        true
    }

    /// Start a heal. Health is applied immediately; the lock holds for the heal timer.
    pub fn request_heal(&mut self, t: &PlayerTunables) -> bool {
        if self.dead || self.is_action_locked() || self.vitals.health == self.vitals.max_health {
            return false;
        }
        self.vitals.health = (self.vitals.health + t.heal_amount).min(self.vitals.max_health);
        self.action = ActionLock::Healing(ActionLock::once(secs(t.heal_secs)));
        true
    }

    /// One point of damage from an attacker at `attacker_x`.
    pub fn receive_damage(&mut self, position_x: f32, attacker_x: f32, t: &PlayerTunables) -> DamageOutcome {
        if self.dead || self.invulnerable.is_some() {
            return DamageOutcome::Ignored;
        }

        // Interrupted actions are lost; no refunds.
        if self.is_shooting() || self.is_reloading() {
            self.action = ActionLock::Free;
        }

        self.vitals.health = self.vitals.health.saturating_sub(1);

        if self.vitals.health == 0 {
            self.dead = true;
            self.action = ActionLock::Free;
            return DamageOutcome::Died;
        }

        self.invulnerable = Some(ActionLock::once(secs(t.invulnerable_secs)));
        let away = if attacker_x < position_x { 1.0 } else { -1.0 };
        DamageOutcome::Knockback(Vec2::new(t.knockback.x * away, t.knockback.y))
    }

    /// Top up from a pickup. Returns whether anything changed.
    ///
    /// Locked or dead players gain nothing; the caller still consumes the pickup.
    pub fn collect(&mut self, kind: PickupKind, amount: u32) -> bool {
        if self.dead || self.is_action_locked() {
            return false;
        }
        match kind {
            PickupKind::Ammo if self.vitals.ammo < self.vitals.max_ammo => {
                self.vitals.ammo = (self.vitals.ammo + amount).min(self.vitals.max_ammo);
                true
            }
            PickupKind::Health if self.vitals.health < self.vitals.max_health => {
                self.vitals.health = (self.vitals.health + amount).min(self.vitals.max_health);
                true
            }
            _ => false,
        }
    }

    /// Priority: dead > reload > shoot > heal > run/walk/idle by horizontal speed.
    pub fn animation(&self, velocity_x: f32, t: &PlayerTunables) -> PlayerAnimation {
        match self.phase() {
            PlayerPhase::Dead => PlayerAnimation::Dead,
            PlayerPhase::Reloading => PlayerAnimation::Reload,
            PlayerPhase::Shooting => PlayerAnimation::Shoot,
            PlayerPhase::Healing => PlayerAnimation::Heal,
            PlayerPhase::Free | PlayerPhase::Knockback => {
                let speed = velocity_x.abs();
                if speed <= f32::EPSILON {
                    PlayerAnimation::Idle
                } else if speed > t.run_anim_threshold {
                    PlayerAnimation::Run
                } else {
                    PlayerAnimation::Walk
                }
            }
        }
    }
}
