use crate::config::TRAIL_DOT_FRACTION;
use crate::particle::Particle;
use palette::{Hsluv, IntoColor, Srgba};

use super::world_to_view;

const PARTICLE_COLOR: [u8; 4] = [255, 255, 255, 255];
const COLLIDED_COLOR: [u8; 4] = [255, 0, 0, 255];

/// Gray for the `age`-th oldest of `len` trail points; older points are dimmer.
pub fn trail_color(age: usize, len: usize) -> [u8; 4] {
    let t = if len > 1 {
        age as f32 / (len - 1) as f32
    } else {
        1.0
    };
    let l = 20.0 + 45.0 * t;

    let c = Hsluv::new(0.0, 0.0, l);
    let rgba: Srgba = c.into_color();
    [
        (rgba.red * 255.0) as u8,
        (rgba.green * 255.0) as u8,
        (rgba.blue * 255.0) as u8,
        (rgba.alpha * 255.0) as u8,
    ]
}

pub fn particle_color(particle: &Particle) -> [u8; 4] {
    if particle.collided {
        COLLIDED_COLOR
    } else {
        PARTICLE_COLOR
    }
}

impl super::Renderer {
    pub fn draw(&mut self, ctx: &mut quarkstrom::RenderContext) {
        ctx.clear_circles();
        ctx.clear_lines();
        ctx.clear_rects();
        ctx.set_view_pos(self.pos);
        ctx.set_view_scale(self.scale);

        let height = self.world_height();
        let particles = &self.simulation.particles;

        // Trails first so particles are drawn over them
        if self.simulation.show_trails {
            for particle in particles {
                let radius = particle.size() * TRAIL_DOT_FRACTION;
                let len = particle.trail.len();
                for (age, point) in particle.trail.iter().enumerate() {
                    ctx.draw_circle(world_to_view(*point, height), radius, trail_color(age, len));
                }
            }
        }

        for particle in particles {
            ctx.draw_circle(
                world_to_view(particle.center(), height),
                particle.radius(),
                particle_color(particle),
            );
        }
    }
}
