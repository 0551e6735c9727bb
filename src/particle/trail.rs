// particle/trail.rs
// Fixed-capacity FIFO of recent particle centers

use crate::config::TRAIL_LENGTH;
use smallvec::SmallVec;
use ultraviolet::Vec2;

/// The most recent centers of a particle, oldest first. Never longer than [`TRAIL_LENGTH`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trail {
    points: SmallVec<[Vec2; TRAIL_LENGTH]>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(point: Vec2) -> Self {
        let mut trail = Self::new();
        trail.record(point);
        trail
    }

    /// Append `point`, discarding the oldest entry once full.
    pub fn record(&mut self, point: Vec2) {
        if self.points.len() == TRAIL_LENGTH {
            self.points.remove(0);
        }
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Vec2> + ExactSizeIterator {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<Vec2> {
        self.points.last().copied()
    }
}
