//! Turret-ring boss: eight turrets alternating orbit and spread formations.

use glam::DVec2;
use rand::Rng;

use gyre_core::enums::BossKind;
use gyre_core::state::SubTargetView;
use gyre_core::types::{dist_sq, polar_to_cartesian};

use crate::behavior::{BossTick, BurstSpec, ShotSpec};
use crate::death::DeathSequence;
use crate::profiles::{get_profile, BossProfile};

#[derive(Clone, Copy)]
enum Formation {
    Orbit,
    Spread,
}

struct Turret {
    health: u32,
    /// Ring slot angle, fixed at spawn.
    base_angle: f64,
    /// Eased toward the formation target each tick.
    current_angle: f64,
    pos: DVec2,
    fire_timer: f64,
    charging: bool,
    charge_timer: f64,
}

/// Ring boss. Dead turrets stay in formation as wreckage, so sub-target
/// indices are stable for the whole encounter.
pub struct TurretRing {
    profile: BossProfile,
    turrets: Vec<Turret>,
    elapsed: f64,
    mode: Formation,
    mode_timer: f64,
    death: DeathSequence,
}

impl TurretRing {
    pub fn new(rng: &mut impl Rng) -> Self {
        let profile = get_profile(BossKind::TurretRing);
        let count = profile.sub_target_count;
        let turrets = (0..count)
            .map(|i| {
                let base_angle = (i as f64 / count as f64) * std::f64::consts::TAU;
                Turret {
                    health: profile.sub_target_health,
                    base_angle,
                    current_angle: base_angle,
                    pos: polar_to_cartesian(base_angle, profile.orbit_radius),
                    fire_timer: rng.gen_range(0.0..2.0),
                    charging: false,
                    charge_timer: 0.0,
                }
            })
            .collect();
        Self {
            profile,
            turrets,
            elapsed: 0.0,
            mode: Formation::Orbit,
            mode_timer: 0.0,
            death: DeathSequence::default(),
        }
    }

    pub fn update(&mut self, dt: f64, player_pos: DVec2, rng: &mut impl Rng) -> BossTick {
        let mut tick = BossTick::default();

        if self.death.active() {
            self.death.advance(dt);
            // Turrets detonate one by one along the ring.
            for (i, turret) in self.turrets.iter().enumerate() {
                if self.death.crossed(i as f64 * 0.4) {
                    tick.bursts.push(BurstSpec {
                        pos: turret.pos,
                        color: "#ff8800",
                        count: 60,
                    });
                }
            }
            if self.death.crossed(self.profile.death_duration) {
                tick.bursts.push(BurstSpec {
                    pos: DVec2::ZERO,
                    color: "#ff6600",
                    count: 150,
                });
                tick.score_delta += self.profile.victory_score;
                tick.victory = true;
            }
            return tick;
        }

        self.elapsed += dt;
        self.mode_timer += dt;
        if self.mode_timer > 8.0 {
            self.mode = match self.mode {
                Formation::Orbit => Formation::Spread,
                Formation::Spread => Formation::Orbit,
            };
            self.mode_timer = 0.0;
        }

        let health_ratio = self.health_ratio();
        let spin = self.profile.rotation_speed * (2.0 - health_ratio);
        for (i, turret) in self.turrets.iter_mut().enumerate() {
            let mut target_angle = turret.base_angle + self.elapsed * spin;
            let mut radius = self.profile.orbit_radius;
            if let Formation::Spread = self.mode {
                radius += (self.elapsed + i as f64).sin() * 60.0;
                target_angle += (self.elapsed * 0.7 + i as f64).cos() * 0.5;
            }
            turret.current_angle += (target_angle - turret.current_angle) * dt * 3.0;
            turret.pos = polar_to_cartesian(turret.current_angle, radius);
        }

        for turret in self.turrets.iter_mut().filter(|t| t.health > 0) {
            if turret.charging {
                turret.charge_timer -= dt;
                if turret.charge_timer <= 0.0 {
                    // Charged volley: a five-bullet fan past the player.
                    let to_player = player_pos - turret.pos;
                    let bearing = to_player.y.atan2(to_player.x);
                    for j in -2..=2 {
                        let a = bearing + j as f64 * 0.2;
                        tick.shots.push(ShotSpec {
                            origin: turret.pos,
                            target: turret.pos + DVec2::new(a.cos(), a.sin()) * 300.0,
                        });
                    }
                    turret.charging = false;
                    turret.fire_timer = 3.0;
                }
            } else {
                turret.fire_timer -= dt;
                if turret.fire_timer <= 0.0 {
                    if rng.gen::<f64>() < 0.3 {
                        turret.charging = true;
                        turret.charge_timer = 1.5;
                    } else {
                        tick.shots.push(ShotSpec {
                            origin: turret.pos,
                            target: player_pos,
                        });
                        turret.fire_timer = (2.5 - (1.0 - health_ratio) * 1.5).max(1.0);
                    }
                }
            }
        }

        tick
    }

    pub fn take_damage(&mut self, sub_target: usize, damage: u32) -> BossTick {
        let mut tick = BossTick::default();
        if self.death.active() {
            return tick;
        }
        let Some(turret) = self.turrets.get_mut(sub_target) else {
            return tick;
        };
        if turret.health == 0 {
            return tick;
        }
        turret.health = turret.health.saturating_sub(damage);
        if turret.health == 0 {
            tick.bursts.push(BurstSpec {
                pos: turret.pos,
                color: "#ff8800",
                count: 50,
            });
            tick.score_delta += self.profile.sub_target_score;
            if self.turrets.iter().all(|t| t.health == 0) {
                self.death.start();
            }
        }
        tick
    }

    pub fn check_bullet_collision(&self, point: DVec2) -> Option<usize> {
        if self.death.active() {
            return None;
        }
        let r = self.profile.hit_radius;
        self.turrets
            .iter()
            .position(|t| t.health > 0 && dist_sq(point, t.pos) < r * r)
    }

    pub fn is_destroying(&self) -> bool {
        self.death.active()
    }

    pub fn death_timer(&self) -> f64 {
        self.death.timer()
    }

    /// Alive fraction of the ring; also the difficulty scale input.
    pub fn health_ratio(&self) -> f64 {
        let alive = self.turrets.iter().filter(|t| t.health > 0).count();
        alive as f64 / self.profile.sub_target_count as f64
    }

    pub fn shake_offset(&self) -> DVec2 {
        if self.death.active() && self.death.timer() > 3.0 {
            let s = (self.death.timer() * 20.0).sin() * 5.0;
            DVec2::new(s, s * 0.5)
        } else {
            DVec2::ZERO
        }
    }

    pub fn sub_targets(&self) -> Vec<SubTargetView> {
        self.turrets
            .iter()
            .map(|t| SubTargetView {
                x: t.pos.x,
                y: t.pos.y,
                alive: t.health > 0,
                is_head: false,
                charging: t.charging,
                health_frac: t.health as f64 / self.profile.sub_target_health as f64,
            })
            .collect()
    }
}
