//! Bounded rays for sliding pieces.
//!
//! A straight line on the cube can run across several faces, fold back at a
//! seam, or lap the equator, so every ray carries a step limit.

use crate::topology::cube_types::BOARD_SIZE;
use crate::topology::square::Square;
use crate::topology::stepper::{step, step_diagonal, Diagonal, Direction};

/// Enough steps to cross every face once.
pub const DEFAULT_RAY_LIMIT: usize = 6 * BOARD_SIZE as usize;

#[derive(Debug, Clone, Copy)]
enum Heading {
    Straight(Direction),
    Diagonal(Diagonal),
}

/// Lazily stepped ray. Ends at the first failed step or after `limit` squares.
#[derive(Debug, Clone)]
pub struct Ray {
    current: Option<Square>,
    heading: Heading,
    remaining: usize,
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.remaining == 0 {
            return None;
        }
        let from = self.current?;
        let next = match self.heading {
            Heading::Straight(direction) => step(from, direction),
            Heading::Diagonal((first, second)) => step_diagonal(from, first, second),
        };
        self.current = next;
        self.remaining = if next.is_some() { self.remaining - 1 } else { 0 };
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// Squares reached by repeatedly stepping `direction` from `origin` (origin excluded).
pub fn trace_ray(origin: Square, direction: Direction, limit: usize) -> Ray {
    Ray {
        current: Some(origin),
        heading: Heading::Straight(direction),
        remaining: limit,
    }
}

/// Squares reached by repeatedly stepping `diagonal` from `origin` (origin excluded).
pub fn trace_diagonal_ray(origin: Square, diagonal: Diagonal, limit: usize) -> Ray {
    Ray {
        current: Some(origin),
        heading: Heading::Diagonal(diagonal),
        remaining: limit,
    }
}
