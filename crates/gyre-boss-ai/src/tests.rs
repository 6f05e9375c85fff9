#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use gyre_core::enums::BossKind;
    use gyre_core::types::polar_to_cartesian;

    use crate::behavior::{BossState, BurstSpec};
    use crate::death::DeathSequence;
    use crate::profiles::get_profile;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn player_pos() -> DVec2 {
        polar_to_cartesian(-std::f64::consts::FRAC_PI_2, 378.0)
    }

    struct RunTotals {
        score: u32,
        victories: u32,
        shots: usize,
        bursts: Vec<BurstSpec>,
    }

    /// Step the boss through `steps` ticks of 50 ms, accumulating effects.
    fn run_steps(boss: &mut BossState, steps: usize, rng: &mut StdRng) -> RunTotals {
        let mut totals = RunTotals {
            score: 0,
            victories: 0,
            shots: 0,
            bursts: Vec::new(),
        };
        for _ in 0..steps {
            let tick = boss.update(0.05, player_pos(), rng);
            totals.score += tick.score_delta;
            if tick.victory {
                totals.victories += 1;
            }
            totals.shots += tick.shots.len();
            totals.bursts.extend(tick.bursts);
        }
        totals
    }

    /// One-shot every sub-target, highest index first so the serpent's
    /// compacting chain and the rings' stable slots both sweep clean.
    fn destroy_all(boss: &mut BossState) -> u32 {
        let mut score = 0;
        for i in (0..boss.sub_targets().len()).rev() {
            score += boss.take_damage(i, 99).score_delta;
        }
        score
    }

    // ---- Death-sequence clock ----

    #[test]
    fn test_death_clock_marks_fire_once() {
        let mut clock = DeathSequence::default();
        clock.start();
        // Armed but not yet advanced: no mark has been crossed.
        assert!(clock.active());
        assert!(!clock.crossed(0.0));

        let mut zero_hits = 0;
        let mut one_hits = 0;
        for _ in 0..100 {
            clock.advance(0.05);
            if clock.crossed(0.0) {
                zero_hits += 1;
            }
            if clock.crossed(1.0) {
                one_hits += 1;
            }
        }
        assert_eq!(zero_hits, 1, "mark 0.0 should fire exactly once");
        assert_eq!(one_hits, 1, "mark 1.0 should fire exactly once");
    }

    #[test]
    fn test_death_clock_start_is_one_way() {
        let mut clock = DeathSequence::default();
        clock.start();
        clock.advance(1.0);
        // A second start must not rewind the running clock.
        clock.start();
        assert_eq!(clock.timer(), 1.0);
    }

    #[test]
    fn test_death_clock_inert_until_started() {
        let mut clock = DeathSequence::default();
        clock.advance(2.0);
        assert!(!clock.active());
        assert_eq!(clock.timer(), 0.0);
        assert!(!clock.crossed(0.0));
    }

    // ---- Variant encounters ----

    #[test]
    fn test_spawn_matches_kind() {
        let mut rng = rng();
        for (kind, count) in [
            (BossKind::Serpent, 10),
            (BossKind::TurretRing, 8),
            (BossKind::OrbitalCore, 6),
        ] {
            let boss = BossState::spawn(kind, &mut rng);
            assert_eq!(boss.kind(), kind);
            assert_eq!(boss.sub_targets().len(), count);
            assert!(!boss.is_destroying());
            assert!((boss.health_ratio() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_profiles_are_consistent() {
        for kind in [BossKind::Serpent, BossKind::TurretRing, BossKind::OrbitalCore] {
            let profile = get_profile(kind);
            assert!(profile.sub_target_count > 0);
            assert!(profile.sub_target_health > 0);
            assert!(profile.hit_radius > 0.0);
            assert!(profile.death_duration > 0.0);
            assert!(profile.victory_score > 0);
        }
    }

    #[test]
    fn test_serpent_chain_compacts_on_kill() {
        let mut rng = rng();
        let mut boss = BossState::spawn(BossKind::Serpent, &mut rng);
        assert!(boss.sub_targets()[0].is_head);

        // Killing the head shifts the chain down one slot.
        let tick = boss.take_damage(0, 5);
        assert_eq!(tick.score_delta, 2000);
        assert_eq!(tick.bursts.len(), 1);
        let subs = boss.sub_targets();
        assert_eq!(subs.len(), 9);
        assert!(!subs[0].is_head);
    }

    #[test]
    fn test_serpent_head_soaks_partial_damage() {
        let mut rng = rng();
        let mut boss = BossState::spawn(BossKind::Serpent, &mut rng);
        for _ in 0..4 {
            let tick = boss.take_damage(0, 1);
            assert_eq!(tick.score_delta, 0);
        }
        assert_eq!(boss.sub_targets().len(), 10);
        // Fifth point of damage finishes the head.
        let tick = boss.take_damage(0, 1);
        assert_eq!(tick.score_delta, 2000);
        assert_eq!(boss.sub_targets().len(), 9);
    }

    #[test]
    fn test_serpent_destruction_is_one_way() {
        let mut rng = rng();
        let mut boss = BossState::spawn(BossKind::Serpent, &mut rng);
        // Positions start centred, so the origin is a guaranteed hit.
        assert_eq!(boss.check_bullet_collision(DVec2::ZERO), Some(0));

        let kill_score = destroy_all(&mut boss);
        assert_eq!(kill_score, 2000 + 9 * 500);
        assert!(boss.is_destroying());

        // Once destroying, hits pass through and damage is ignored.
        assert_eq!(boss.check_bullet_collision(DVec2::ZERO), None);
        let tick = boss.take_damage(0, 99);
        assert_eq!(tick.score_delta, 0);
        assert!(tick.bursts.is_empty());
    }

    #[test]
    fn test_serpent_victory_fires_once() {
        let mut rng = rng();
        let mut boss = BossState::spawn(BossKind::Serpent, &mut rng);
        destroy_all(&mut boss);

        // 6 simulated seconds, well past the 4 s sequence.
        let totals = run_steps(&mut boss, 120, &mut rng);
        assert_eq!(totals.victories, 1, "victory must fire exactly once");
        assert_eq!(totals.score, 10_000);
        assert_eq!(totals.shots, 0, "no firing during the death sequence");
        // The finale burst is the big centre one.
        assert!(totals.bursts.iter().any(|b| b.count == 120));
    }

    #[test]
    fn test_serpent_fires_at_player_when_alive() {
        let mut rng = rng();
        let mut boss = BossState::spawn(BossKind::Serpent, &mut rng);
        let totals = run_steps(&mut boss, 40, &mut rng);
        assert!(totals.shots > 0, "serpent should volley within 2 s");
        assert_eq!(totals.victories, 0);
    }

    #[test]
    fn test_turret_ring_staged_detonations() {
        let mut rng = rng();
        let mut boss = BossState::spawn(BossKind::TurretRing, &mut rng);
        let kill_score = destroy_all(&mut boss);
        assert_eq!(kill_score, 8 * 1000);
        assert!(boss.is_destroying());

        let totals = run_steps(&mut boss, 120, &mut rng);
        // One detonation per turret, then the finale.
        let staged = totals.bursts.iter().filter(|b| b.count == 60).count();
        let finale = totals.bursts.iter().filter(|b| b.count == 150).count();
        assert_eq!(staged, 8);
        assert_eq!(finale, 1);
        assert_eq!(totals.victories, 1);
        assert_eq!(totals.score, 15_000);
        assert_eq!(totals.shots, 0);
    }

    #[test]
    fn test_turret_ring_dead_slot_keeps_index() {
        let mut rng = rng();
        let mut boss = BossState::spawn(BossKind::TurretRing, &mut rng);
        let tick = boss.take_damage(3, 15);
        assert_eq!(tick.score_delta, 1000);

        // Dead turrets stay in the ring and absorb nothing further.
        let subs = boss.sub_targets();
        assert_eq!(subs.len(), 8);
        assert!(!subs[3].alive);
        let tick = boss.take_damage(3, 15);
        assert_eq!(tick.score_delta, 0);
        assert!((boss.health_ratio() - 7.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_turret_ring_shake_only_late_in_death() {
        let mut rng = rng();
        let mut boss = BossState::spawn(BossKind::TurretRing, &mut rng);
        destroy_all(&mut boss);

        run_steps(&mut boss, 40, &mut rng); // 2 s in
        assert_eq!(boss.shake_offset(), DVec2::ZERO);
        run_steps(&mut boss, 30, &mut rng); // 3.5 s in
        assert!(boss.shake_offset().length() > 0.0);
    }

    #[test]
    fn test_out_of_range_damage_ignored() {
        let mut rng = rng();
        for kind in [BossKind::Serpent, BossKind::TurretRing, BossKind::OrbitalCore] {
            let mut boss = BossState::spawn(kind, &mut rng);
            let tick = boss.take_damage(99, 5);
            assert_eq!(tick.score_delta, 0);
            assert!(tick.bursts.is_empty());
            assert!((boss.health_ratio() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_orbital_core_finale_awards_once() {
        let mut rng = rng();
        let mut boss = BossState::spawn(BossKind::OrbitalCore, &mut rng);
        let kill_score = destroy_all(&mut boss);
        assert_eq!(kill_score, 6 * 1500);
        assert!(boss.is_destroying());

        // 8 simulated seconds covers the 6.0..6.8 s finale ripple.
        let totals = run_steps(&mut boss, 160, &mut rng);
        let finale = totals.bursts.iter().filter(|b| b.count == 150).count();
        assert_eq!(finale, 5, "five centre detonations in the finale");
        assert_eq!(totals.victories, 1);
        assert_eq!(totals.score, 25_000);
        assert_eq!(totals.shots, 0);
    }

    #[test]
    fn test_orbital_core_health_ratio_counts_live_nodes() {
        let mut rng = rng();
        let mut boss = BossState::spawn(BossKind::OrbitalCore, &mut rng);

        // Partial damage does not move the ratio, only kills do.
        boss.take_damage(0, 10);
        assert!((boss.health_ratio() - 1.0).abs() < 1e-9);
        assert!((boss.sub_targets()[0].health_frac - 0.5).abs() < 1e-9);

        boss.take_damage(0, 10);
        assert!((boss.health_ratio() - 5.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_orbital_core_dead_node_not_hittable() {
        let mut rng = rng();
        let mut boss = BossState::spawn(BossKind::OrbitalCore, &mut rng);
        boss.update(0.05, player_pos(), &mut rng);

        let live_pos = {
            let s = &boss.sub_targets()[0];
            DVec2::new(s.x, s.y)
        };
        assert_eq!(boss.check_bullet_collision(live_pos), Some(0));

        boss.take_damage(0, 20);
        let dead_pos = {
            let s = &boss.sub_targets()[0];
            DVec2::new(s.x, s.y)
        };
        assert_eq!(boss.check_bullet_collision(dead_pos), None);
    }
}
