// Physics tests for the integrator, collision handling and the step ordering

use super::collision::{find_colliding_pairs, resolve, Resolution};
use super::integrator::{integrate, reflect_from_walls};
use super::simulation::Simulation;
use crate::clock::ManualClock;
use crate::config::{BroadPhase, SimConfig, TRAIL_LENGTH};
use crate::particle::Particle;
use rand::{rngs::StdRng, Rng, SeedableRng};
use ultraviolet::Vec2;

fn zero_gravity() -> SimConfig {
    SimConfig {
        gravity: Vec2::zero(),
        seed: Some(7),
        ..SimConfig::default()
    }
}

fn test_sim(config: SimConfig) -> Simulation<ManualClock> {
    Simulation::with_clock(config, ManualClock::default())
}

fn ball(id: u64, center: Vec2, vel: Vec2, size: f32) -> Particle {
    Particle::centered_at(id, center, vel, size, 1.0)
}

/// An overlapping pair that is approaching along the line of centers.
fn random_approaching_pair(rng: &mut StdRng) -> (Particle, Particle) {
    let size_a: f32 = rng.random_range(10.0..60.0);
    let size_b: f32 = rng.random_range(10.0..60.0);
    let reach = (size_a + size_b) / 2.0;
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    let dir = Vec2::new(angle.cos(), angle.sin());
    let center_a = Vec2::new(500.0, 450.0);
    let spread: f32 = rng.random_range(0.2..0.95);
    let center_b = center_a + dir * (reach * spread);
    let closing: f32 = rng.random_range(0.1..5.0);
    let drift = Vec2::new(rng.random_range(-2.0..2.0), rng.random_range(-2.0..2.0));
    let a = Particle::centered_at(1, center_a, dir * closing + drift, size_a, 1.0);
    let b = Particle::centered_at(2, center_b, -dir * closing * 0.5 + drift, size_b, 1.3);
    (a, b)
}

mod collisions {
    use super::*;

    #[test]
    fn momentum_is_conserved_for_resolved_pairs() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let (mut a, mut b) = random_approaching_pair(&mut rng);
            let before = a.momentum() + b.momentum();
            let scale = a.momentum().mag() + b.momentum().mag();
            assert_eq!(resolve(&mut a, &mut b, 0.99, 0), Resolution::Resolved);
            let after = a.momentum() + b.momentum();
            assert!(
                (after - before).mag() / scale < 1e-4,
                "momentum drifted from {before:?} to {after:?}"
            );
        }
    }

    #[test]
    fn kinetic_energy_never_increases() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..500 {
            let (mut a, mut b) = random_approaching_pair(&mut rng);
            let before = a.kinetic_energy() + b.kinetic_energy();
            resolve(&mut a, &mut b, 0.99, 0);
            let after = a.kinetic_energy() + b.kinetic_energy();
            assert!(
                after <= before * (1.0 + 1e-5),
                "energy grew from {before} to {after}"
            );
        }
    }

    #[test]
    fn equal_masses_head_on_exchange_velocities_scaled_by_restitution() {
        let mut a = ball(1, Vec2::new(100.0, 500.0), Vec2::new(1.0, 0.0), 40.0);
        let mut b = ball(2, Vec2::new(139.0, 500.0), Vec2::new(-1.0, 0.0), 40.0);
        assert!(a.overlaps(&b));

        assert_eq!(resolve(&mut a, &mut b, 0.99, 0), Resolution::Resolved);
        assert!((a.vel.x + 0.99).abs() < 1e-5, "a.vel = {:?}", a.vel);
        assert!((b.vel.x - 0.99).abs() < 1e-5, "b.vel = {:?}", b.vel);
        assert_eq!(a.vel.y, 0.0);
        assert_eq!(b.vel.y, 0.0);
    }

    #[test]
    fn coincident_centers_are_skipped() {
        let mut a = ball(1, Vec2::new(200.0, 200.0), Vec2::new(3.0, -1.0), 40.0);
        let mut b = ball(2, Vec2::new(200.0, 200.0), Vec2::new(-2.0, 5.0), 40.0);

        assert_eq!(resolve(&mut a, &mut b, 0.99, 42), Resolution::Degenerate);
        assert_eq!(a.vel, Vec2::new(3.0, -1.0));
        assert_eq!(b.vel, Vec2::new(-2.0, 5.0));
        // the highlight still fires on the overlap
        assert!(a.collided && b.collided);
        assert_eq!(a.collision_stamp_ms, 42);
        assert_eq!(b.collision_stamp_ms, 42);
    }

    #[test]
    fn separating_pairs_are_skipped_but_highlighted() {
        let mut a = ball(1, Vec2::new(100.0, 100.0), Vec2::new(-2.0, 0.0), 40.0);
        let mut b = ball(2, Vec2::new(130.0, 100.0), Vec2::new(2.0, 0.0), 40.0);

        assert_eq!(resolve(&mut a, &mut b, 0.99, 7), Resolution::Separating);
        assert_eq!(a.vel, Vec2::new(-2.0, 0.0));
        assert_eq!(b.vel, Vec2::new(2.0, 0.0));
        assert!(a.collided && b.collided);
    }

    #[test]
    fn tangent_pairs_are_not_detected() {
        let particles = vec![
            ball(1, Vec2::new(100.0, 100.0), Vec2::zero(), 40.0),
            ball(2, Vec2::new(140.0, 100.0), Vec2::zero(), 40.0),
        ];
        assert!(find_colliding_pairs(&particles, BroadPhase::AllPairs).is_empty());
        assert!(find_colliding_pairs(&particles, BroadPhase::SweepTree).is_empty());
    }

    #[test]
    fn pairs_come_back_in_index_order() {
        let particles = vec![
            ball(1, Vec2::new(100.0, 100.0), Vec2::zero(), 40.0),
            ball(2, Vec2::new(500.0, 500.0), Vec2::zero(), 40.0),
            ball(3, Vec2::new(120.0, 100.0), Vec2::zero(), 40.0),
            ball(4, Vec2::new(110.0, 110.0), Vec2::zero(), 40.0),
        ];
        let pairs = find_colliding_pairs(&particles, BroadPhase::AllPairs);
        assert_eq!(pairs, vec![(0, 2), (0, 3), (2, 3)]);
    }

    #[test]
    fn tree_broad_phase_finds_the_same_pairs() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            let particles: Vec<Particle> = (0..80)
                .map(|id| {
                    let center =
                        Vec2::new(rng.random_range(0.0..400.0), rng.random_range(0.0..400.0));
                    let size = rng.random_range(10.0..50.0);
                    Particle::centered_at(id, center, Vec2::zero(), size, 1.0)
                })
                .collect();
            assert_eq!(
                find_colliding_pairs(&particles, BroadPhase::AllPairs),
                find_colliding_pairs(&particles, BroadPhase::SweepTree)
            );
        }
    }
}

mod integration {
    use super::*;

    #[test]
    fn boundary_containment_for_any_start() {
        let mut rng = StdRng::seed_from_u64(3);
        let (width, height, size) = (1000.0_f32, 900.0_f32, 40.0_f32);
        for _ in 0..2000 {
            let pos = Vec2::new(rng.random_range(-800.0..1800.0), rng.random_range(-800.0..1700.0));
            let vel = Vec2::new(rng.random_range(-60.0..60.0), rng.random_range(-60.0..60.0));
            let mut p = Particle::new(1, pos, vel, size, 1.0);
            integrate(&mut p, Vec2::new(0.0, 0.15), width, height);
            assert!(
                (0.0..=width - size).contains(&p.pos.x),
                "x escaped: {:?} from {pos:?} {vel:?}",
                p.pos
            );
            assert!(
                (0.0..=height - size).contains(&p.pos.y),
                "y escaped: {:?} from {pos:?} {vel:?}",
                p.pos
            );
        }
    }

    #[test]
    fn corner_reflects_both_axes() {
        let mut p = Particle::new(1, Vec2::new(-3.0, -4.0), Vec2::new(-1.0, -2.0), 40.0, 1.0);
        reflect_from_walls(&mut p, 1000.0, 900.0);
        assert_eq!(p.pos, Vec2::zero());
        assert_eq!(p.vel, Vec2::new(1.0, 2.0));

        let mut q = Particle::new(2, Vec2::new(970.0, 880.0), Vec2::new(1.0, 2.0), 40.0, 1.0);
        reflect_from_walls(&mut q, 1000.0, 900.0);
        assert_eq!(q.pos, Vec2::new(960.0, 860.0));
        assert_eq!(q.vel, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn gravity_applies_only_above_the_floor() {
        let gravity = Vec2::new(0.0, 0.15);
        let mut airborne = Particle::new(1, Vec2::new(100.0, 100.0), Vec2::zero(), 40.0, 1.0);
        integrate(&mut airborne, gravity, 1000.0, 900.0);
        assert!((airborne.vel.y - 0.15).abs() < 1e-6);

        let mut grounded = Particle::new(2, Vec2::new(100.0, 860.0), Vec2::zero(), 40.0, 1.0);
        integrate(&mut grounded, gravity, 1000.0, 900.0);
        assert_eq!(grounded.vel.y, 0.0);
        assert_eq!(grounded.pos.y, 860.0);
    }

    #[test]
    fn trail_length_settles_at_capacity() {
        let mut sim = test_sim(SimConfig::default());
        sim.add_particle(Vec2::new(300.0, 300.0), Vec2::new(1.0, 0.0));
        for _ in 0..(TRAIL_LENGTH - 1) {
            sim.step();
        }
        assert_eq!(sim.particles[0].trail.len(), TRAIL_LENGTH);
        for _ in 0..30 {
            sim.step();
        }
        assert_eq!(sim.particles[0].trail.len(), TRAIL_LENGTH);
        assert_eq!(sim.particles[0].trail.latest(), Some(sim.particles[0].center()));
    }

    #[test]
    fn dropped_particle_never_tunnels_through_the_floor() {
        let mut sim = test_sim(SimConfig::default());
        sim.add_particle(Vec2::new(480.0, 100.0), Vec2::zero());
        let floor = sim.config.height - sim.config.particle_size;

        let mut contacts = 0;
        let mut prev_vy = 0.0_f32;
        for _ in 0..5000 {
            sim.step();
            let p = &sim.particles[0];
            assert!(p.pos.y <= floor, "tunnelled to {}", p.pos.y);
            assert!(p.pos.y >= 0.0);
            if p.pos.y == floor && prev_vy > 0.0 {
                contacts += 1;
                assert!(p.vel.y < 0.0, "contact must send the particle back up");
            }
            prev_vy = p.vel.y;
        }
        assert!(contacts >= 2, "expected repeated bounces, saw {contacts}");
    }
}

mod stepping {
    use super::*;

    #[test]
    fn collisions_see_this_steps_positions() {
        let mut sim = test_sim(zero_gravity());
        // one unit apart before the step, overlapping after it
        sim.add_particle_centered(Vec2::new(100.0, 500.0), Vec2::new(1.0, 0.0));
        sim.add_particle_centered(Vec2::new(141.0, 500.0), Vec2::new(-1.0, 0.0));

        let stats = sim.step();
        assert_eq!(stats.overlaps, 1);
        assert_eq!(stats.resolved, 1);
        assert!((sim.particles[0].vel.x + 0.99).abs() < 1e-5);
        assert!((sim.particles[1].vel.x - 0.99).abs() < 1e-5);
    }

    #[test]
    fn highlight_expires_on_the_clock() {
        let mut sim = test_sim(zero_gravity());
        sim.add_particle_centered(Vec2::new(100.0, 500.0), Vec2::zero());
        sim.add_particle_centered(Vec2::new(120.0, 500.0), Vec2::zero());

        sim.clock.set(1_000);
        sim.step();
        assert!(sim.particles.iter().all(|p| p.collided));

        sim.particles[1].pos.x += 300.0;
        sim.clock.set(1_100);
        sim.step();
        assert!(sim.particles.iter().all(|p| p.collided));

        sim.clock.set(1_126);
        sim.step();
        assert!(sim.particles.iter().all(|p| !p.collided));
    }

    #[test]
    fn broad_phases_produce_identical_runs() {
        let config = SimConfig {
            seed: Some(5),
            ..SimConfig::default()
        };
        let mut naive = test_sim(config.clone());
        let mut tree = test_sim(SimConfig {
            broad_phase: BroadPhase::SweepTree,
            ..config
        });
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..40 {
            let pos = Vec2::new(rng.random_range(0.0..960.0), rng.random_range(0.0..860.0));
            let vel = Vec2::new(rng.random_range(-3.0..3.0), rng.random_range(-3.0..3.0));
            naive.add_particle(pos, vel);
            tree.add_particle(pos, vel);
        }
        for _ in 0..300 {
            let a = naive.step();
            let b = tree.step();
            assert_eq!(a, b);
        }
        for (a, b) in naive.particles.iter().zip(&tree.particles) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel, b.vel);
        }
    }

    #[test]
    fn energy_report_sums_kinetic_and_potential() {
        let mut sim = test_sim(SimConfig::default());
        let floor = sim.config.height;
        sim.add_particle_centered(Vec2::new(500.0, floor - 100.0), Vec2::new(3.0, 4.0));
        let m = sim.particles[0].mass();

        let report = sim.energy();
        assert!((report.kinetic - 0.5 * m * 25.0).abs() < 1e-2);
        assert!((report.potential - m * 0.15 * 100.0).abs() < 1e-1);
        assert!((report.total() - (report.kinetic + report.potential)).abs() < 1e-3);
    }

    #[test]
    fn removing_from_empty_is_a_no_op() {
        let mut sim = test_sim(SimConfig::default());
        assert!(sim.remove_oldest().is_none());
        let first = sim.add_particle(Vec2::new(10.0, 10.0), Vec2::zero());
        let second = sim.add_particle(Vec2::new(100.0, 10.0), Vec2::zero());
        assert!(second > first);
        assert_eq!(sim.remove_oldest().map(|p| p.id), Some(first));
        assert_eq!(sim.particles.len(), 1);
    }
}
