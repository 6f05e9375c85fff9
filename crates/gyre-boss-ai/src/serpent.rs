//! Serpent boss: a segmented chain weaving a spiral around the center.

use glam::DVec2;
use rand::Rng;

use gyre_core::enums::BossKind;
use gyre_core::state::SubTargetView;
use gyre_core::types::dist_sq;

use crate::behavior::{BossTick, BurstSpec, ShotSpec};
use crate::death::DeathSequence;
use crate::profiles::{get_profile, BossProfile};

struct Segment {
    health: u32,
    max_health: u32,
    is_head: bool,
    /// Angular offset along the chain, fixed at spawn.
    offset_angle: f64,
    pos: DVec2,
}

/// Segmented chain boss.
///
/// Dead segments leave the chain and the survivors close ranks, so
/// sub-target indices always address the current chain order.
pub struct Serpent {
    profile: BossProfile,
    segments: Vec<Segment>,
    max_health: u32,
    elapsed: f64,
    spiral_phase: f64,
    fire_timer: f64,
    death: DeathSequence,
    /// Final segment positions, anchors for death-sequence bursts.
    wrecks: Vec<(DVec2, bool)>,
}

impl Serpent {
    pub fn new() -> Self {
        let profile = get_profile(BossKind::Serpent);
        let count = profile.sub_target_count;
        let segments = (0..count)
            .map(|i| {
                let health = if i == 0 {
                    profile.head_health
                } else {
                    profile.sub_target_health
                };
                Segment {
                    health,
                    max_health: health,
                    is_head: i == 0,
                    offset_angle: (i as f64 / count as f64) * std::f64::consts::PI * 0.4,
                    pos: DVec2::ZERO,
                }
            })
            .collect();
        let max_health = profile.head_health + (count as u32 - 1) * profile.sub_target_health;
        Self {
            profile,
            segments,
            max_health,
            elapsed: 0.0,
            spiral_phase: 0.0,
            fire_timer: 1.0,
            death: DeathSequence::default(),
            wrecks: Vec::new(),
        }
    }

    pub fn update(&mut self, dt: f64, player_pos: DVec2, rng: &mut impl Rng) -> BossTick {
        let mut tick = BossTick::default();

        if self.death.active() {
            self.death.advance(dt);
            // Sporadic secondary blasts at the fallen segments.
            if !self.wrecks.is_empty() && rng.gen::<f64>() < 0.3 {
                let (pos, is_head) = self.wrecks[rng.gen_range(0..self.wrecks.len())];
                tick.bursts.push(BurstSpec {
                    pos,
                    color: if is_head { "#ff3333" } else { "#ffaa00" },
                    count: 40,
                });
            }
            if self.death.crossed(self.profile.death_duration) {
                tick.bursts.push(BurstSpec {
                    pos: DVec2::ZERO,
                    color: "#ff6600",
                    count: 120,
                });
                tick.score_delta += self.profile.victory_score;
                tick.victory = true;
            }
            return tick;
        }

        self.elapsed += dt;
        let aggression = 1.0 + (1.0 - self.health_ratio()) * 2.0;
        self.spiral_phase += dt * aggression;

        let base_angle = self.elapsed * self.profile.rotation_speed * aggression;
        let spiral_radius = 60.0 + (self.spiral_phase * 0.5).sin() * 40.0;
        let figure_eight = (self.elapsed * 1.5).sin() * 80.0;

        for (i, seg) in self.segments.iter_mut().enumerate() {
            let delayed = self.elapsed - i as f64 * 0.1;
            let spiral_offset = (delayed * 3.0 + i as f64 * 0.8).sin() * spiral_radius;
            let vertical_wave = (delayed * 2.5 + i as f64 * 0.3).sin() * 60.0;
            let angle = base_angle + seg.offset_angle;
            seg.pos = DVec2::new(
                angle.cos() * (self.profile.orbit_radius + spiral_offset) + figure_eight,
                angle.sin() * (self.profile.orbit_radius + spiral_offset * 0.7) + vertical_wave,
            );
        }

        self.fire_timer -= dt;
        if self.fire_timer <= 0.0 {
            for (i, seg) in self.segments.iter().enumerate() {
                if i % 2 == 0 {
                    tick.shots.push(ShotSpec {
                        origin: seg.pos,
                        target: player_pos,
                    });
                }
            }
            // Head volley once the chain is below half strength.
            if self.health_ratio() < 0.5 {
                if let Some(head) = self.segments.first().filter(|s| s.is_head) {
                    let to_player = player_pos - head.pos;
                    let bearing = to_player.y.atan2(to_player.x);
                    let reach = to_player.length() + 50.0;
                    for offset in [-0.3, 0.3] {
                        let a = bearing + offset;
                        tick.shots.push(ShotSpec {
                            origin: head.pos,
                            target: head.pos + DVec2::new(a.cos(), a.sin()) * reach,
                        });
                    }
                }
            }
            self.fire_timer = (2.0 - aggression * 0.4).max(0.8);
        }

        tick
    }

    pub fn take_damage(&mut self, sub_target: usize, damage: u32) -> BossTick {
        let mut tick = BossTick::default();
        if self.death.active() {
            return tick;
        }
        let Some(seg) = self.segments.get_mut(sub_target) else {
            return tick;
        };
        seg.health = seg.health.saturating_sub(damage);
        if seg.health == 0 {
            tick.bursts.push(BurstSpec {
                pos: seg.pos,
                color: if seg.is_head { "#ff5555" } else { "#55ff55" },
                count: 30,
            });
            tick.score_delta += if seg.is_head {
                self.profile.head_score
            } else {
                self.profile.sub_target_score
            };
            let dead = self.segments.remove(sub_target);
            self.wrecks.push((dead.pos, dead.is_head));
            if self.segments.is_empty() {
                self.death.start();
            }
        }
        tick
    }

    pub fn check_bullet_collision(&self, point: DVec2) -> Option<usize> {
        if self.death.active() {
            return None;
        }
        self.segments.iter().position(|seg| {
            let hit_radius = if seg.is_head {
                self.profile.head_hit_radius
            } else {
                self.profile.hit_radius
            };
            dist_sq(point, seg.pos) < hit_radius * hit_radius
        })
    }

    pub fn is_destroying(&self) -> bool {
        self.death.active()
    }

    pub fn death_timer(&self) -> f64 {
        self.death.timer()
    }

    pub fn health_ratio(&self) -> f64 {
        let current: u32 = self.segments.iter().map(|s| s.health).sum();
        current as f64 / self.max_health as f64
    }

    pub fn sub_targets(&self) -> Vec<SubTargetView> {
        self.segments
            .iter()
            .map(|seg| SubTargetView {
                x: seg.pos.x,
                y: seg.pos.y,
                alive: true,
                is_head: seg.is_head,
                charging: false,
                health_frac: seg.health as f64 / seg.max_health as f64,
            })
            .collect()
    }
}
