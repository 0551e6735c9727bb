// simulation/collision.rs
// Contains collision detection and resolution functions

use crate::config::BroadPhase;
use crate::particle::Particle;
use crate::profile_scope;
use broccoli::aabb::Rect;

/// What happened to one overlapping pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Centers coincide, so there is no normal to push along.
    Degenerate,
    /// Already moving apart along the normal.
    Separating,
    /// An impulse was applied.
    Resolved,
}

/// Per-step tally of overlap handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub overlaps: usize,
    pub resolved: usize,
    pub separating: usize,
    pub degenerate: usize,
}

/// Detect every overlapping pair and resolve each in `(i, j)` order.
///
/// Resolution only changes velocities, so the overlap set computed up front is the same one an
/// interleaved detect-then-resolve loop would see.
pub fn resolve_all(
    particles: &mut [Particle],
    broad_phase: BroadPhase,
    restitution: f32,
    now_ms: u64,
) -> CollisionStats {
    profile_scope!("collision");
    let pairs = find_colliding_pairs(particles, broad_phase);
    let mut stats = CollisionStats {
        overlaps: pairs.len(),
        ..Default::default()
    };
    for (i, j) in pairs {
        let (a, b) = pair_mut(particles, i, j);
        match resolve(a, b, restitution, now_ms) {
            Resolution::Resolved => stats.resolved += 1,
            Resolution::Separating => stats.separating += 1,
            Resolution::Degenerate => stats.degenerate += 1,
        }
    }
    stats
}

/// All overlapping pairs `(i, j)` with `i < j`, sorted lexicographically.
pub fn find_colliding_pairs(
    particles: &[Particle],
    broad_phase: BroadPhase,
) -> Vec<(usize, usize)> {
    match broad_phase {
        BroadPhase::AllPairs => all_pairs(particles),
        BroadPhase::SweepTree => tree_pairs(particles),
    }
}

fn all_pairs(particles: &[Particle]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, p1) in particles.iter().enumerate() {
        for (j, p2) in particles.iter().enumerate().skip(i + 1) {
            if p1.overlaps(p2) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

fn tree_pairs(particles: &[Particle]) -> Vec<(usize, usize)> {
    profile_scope!("collision_broad_phase");
    let mut rects = particles
        .iter()
        .enumerate()
        .map(|(index, particle)| {
            let min = particle.pos;
            let max = particle.pos + ultraviolet::Vec2::broadcast(particle.size());
            (Rect::new(min.x, max.x, min.y, max.y), index)
        })
        .collect::<Vec<_>>();
    let mut candidates = Vec::new();
    let mut tree = broccoli::Tree::new(&mut rects);
    tree.find_colliding_pairs(|i, j| {
        let i = *i.unpack_inner();
        let j = *j.unpack_inner();
        candidates.push((i.min(j), i.max(j)));
    });
    candidates.sort_unstable();
    candidates.dedup();
    candidates.retain(|&(i, j)| particles[i].overlaps(&particles[j]));
    candidates
}

/// Mutable access to two distinct particles, `i < j`.
fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert!(i < j);
    let (head, tail) = particles.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Apply an impulse along the line of centers.
///
/// Both particles are highlighted first, whether or not an impulse follows.
pub fn resolve(a: &mut Particle, b: &mut Particle, restitution: f32, now_ms: u64) -> Resolution {
    a.mark_collided(now_ms);
    b.mark_collided(now_ms);

    let normal = a.center() - b.center();
    let distance = normal.mag();
    if distance == 0.0 {
        return Resolution::Degenerate;
    }
    let normal_unit = normal / distance;

    let rel_vel = a.vel - b.vel;
    let vel_along_normal = rel_vel.dot(normal_unit);
    if vel_along_normal > 0.0 {
        return Resolution::Separating;
    }

    let j = -(1.0 + restitution) * vel_along_normal / (a.mass().recip() + b.mass().recip());
    let impulse = normal_unit * j;
    a.vel += impulse / a.mass();
    b.vel -= impulse / b.mass();
    Resolution::Resolved
}
