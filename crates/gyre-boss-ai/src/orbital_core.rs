//! Orbital-core boss: six nodes pulsing on wave-modulated orbits.

use glam::DVec2;
use rand::Rng;

use gyre_core::enums::BossKind;
use gyre_core::state::SubTargetView;
use gyre_core::types::{dist_sq, polar_to_cartesian};

use crate::behavior::{BossTick, BurstSpec, ShotSpec};
use crate::death::DeathSequence;
use crate::profiles::{get_profile, BossProfile};

struct Orbital {
    health: u32,
    base_angle: f64,
    /// Phase offset into the shared radius wave.
    wave_phase: f64,
    /// Seconds since this node last fired.
    last_shot: f64,
    pos: DVec2,
}

/// Final boss. Destroyed orbitals stay in formation as inert husks, and
/// the ring keeps spinning through the whole death sequence.
pub struct OrbitalCore {
    profile: BossProfile,
    orbitals: Vec<Orbital>,
    elapsed: f64,
    wave_timer: f64,
    fire_timer: f64,
    death: DeathSequence,
}

impl OrbitalCore {
    pub fn new() -> Self {
        let profile = get_profile(BossKind::OrbitalCore);
        let count = profile.sub_target_count;
        let orbitals = (0..count)
            .map(|i| {
                let base_angle = (i as f64 / count as f64) * std::f64::consts::TAU;
                Orbital {
                    health: profile.sub_target_health,
                    base_angle,
                    wave_phase: i as f64 * std::f64::consts::PI / 3.0,
                    last_shot: 0.0,
                    pos: polar_to_cartesian(base_angle, profile.orbit_radius),
                }
            })
            .collect();
        Self {
            profile,
            orbitals,
            elapsed: 0.0,
            wave_timer: 0.0,
            fire_timer: 1.0,
            death: DeathSequence::default(),
        }
    }

    pub fn update(&mut self, dt: f64, player_pos: DVec2, rng: &mut impl Rng) -> BossTick {
        let mut tick = BossTick::default();

        self.elapsed += dt;
        self.wave_timer += dt;
        for orbital in &mut self.orbitals {
            orbital.last_shot += dt;
        }

        let core_energy = self.health_ratio();
        let base_rotation = self.elapsed * self.profile.rotation_speed * (1.0 + (1.0 - core_energy));
        for (i, orbital) in self.orbitals.iter_mut().enumerate() {
            let radius = self.profile.orbit_radius
                + (self.wave_timer + orbital.wave_phase).sin() * 60.0
                + (self.elapsed * 0.8 + i as f64).cos() * 30.0;
            orbital.pos = polar_to_cartesian(orbital.base_angle + base_rotation, radius);
        }

        if self.death.active() {
            self.death.advance(dt);
            let t = self.death.timer();
            // Cascade failure: random node discharges that thin out over time.
            if t > 1.0 {
                let p = (0.3 - (t - 1.0) * 0.05).max(0.0);
                if rng.gen::<f64>() < p {
                    let i = rng.gen_range(0..self.orbitals.len());
                    let jitter =
                        DVec2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
                    tick.bursts.push(BurstSpec {
                        pos: self.orbitals[i].pos + jitter,
                        color: "#ff00ff",
                        count: 50,
                    });
                }
            }
            if t > 3.0 && rng.gen::<f64>() < 0.4 {
                let jitter = DVec2::new(rng.gen_range(-75.0..75.0), rng.gen_range(-75.0..75.0));
                tick.bursts.push(BurstSpec {
                    pos: jitter,
                    color: "#ffffff",
                    count: 30,
                });
            }
            // Finale: a ripple of centre detonations, victory on the last one.
            for k in 0..=4 {
                if self.death.crossed(self.profile.death_duration + k as f64 * 0.2) {
                    tick.bursts.push(BurstSpec {
                        pos: DVec2::ZERO,
                        color: "#ff00ff",
                        count: 150,
                    });
                    if k == 4 {
                        tick.score_delta += self.profile.victory_score;
                        tick.victory = true;
                    }
                }
            }
            return tick;
        }

        self.fire_timer -= dt;
        if self.fire_timer <= 0.0 {
            for orbital in self.orbitals.iter_mut().filter(|o| o.health > 0) {
                if orbital.last_shot <= 0.3 {
                    continue;
                }
                if core_energy < 0.5 {
                    // Desperation fan once the ring is half gone.
                    let to_player = player_pos - orbital.pos;
                    let bearing = to_player.y.atan2(to_player.x);
                    for j in -1..=1 {
                        let a = bearing + j as f64 * 0.4;
                        tick.shots.push(ShotSpec {
                            origin: orbital.pos,
                            target: orbital.pos + DVec2::new(a.cos(), a.sin()) * 400.0,
                        });
                    }
                } else {
                    tick.shots.push(ShotSpec {
                        origin: orbital.pos,
                        target: player_pos,
                    });
                }
                orbital.last_shot = 0.0;
            }
            self.fire_timer = (2.0 - (1.0 - core_energy) * 0.8).max(1.0);
        }

        tick
    }

    pub fn take_damage(&mut self, sub_target: usize, damage: u32) -> BossTick {
        let mut tick = BossTick::default();
        if self.death.active() {
            return tick;
        }
        let Some(orbital) = self.orbitals.get_mut(sub_target) else {
            return tick;
        };
        if orbital.health == 0 {
            return tick;
        }
        orbital.health = orbital.health.saturating_sub(damage);
        if orbital.health == 0 {
            tick.bursts.push(BurstSpec {
                pos: orbital.pos,
                color: "#ff00ff",
                count: 60,
            });
            tick.score_delta += self.profile.sub_target_score;
            if self.orbitals.iter().all(|o| o.health == 0) {
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
        self.orbitals
            .iter()
            .position(|o| o.health > 0 && dist_sq(point, o.pos) < r * r)
    }

    pub fn is_destroying(&self) -> bool {
        self.death.active()
    }

    pub fn death_timer(&self) -> f64 {
        self.death.timer()
    }

    pub fn health_ratio(&self) -> f64 {
        let alive = self.orbitals.iter().filter(|o| o.health > 0).count();
        alive as f64 / self.profile.sub_target_count as f64
    }

    pub fn shake_offset(&self) -> DVec2 {
        if self.death.active() && self.death.timer() > 3.0 {
            let s = (self.death.timer() * 25.0).sin() * 8.0;
            DVec2::new(s, s * 0.6)
        } else {
            DVec2::ZERO
        }
    }

    pub fn sub_targets(&self) -> Vec<SubTargetView> {
        self.orbitals
            .iter()
            .map(|o| SubTargetView {
                x: o.pos.x,
                y: o.pos.y,
                alive: o.health > 0,
                is_head: false,
                charging: false,
                health_frac: o.health as f64 / self.profile.sub_target_health as f64,
            })
            .collect()
    }
}
