//! `Racetrack`: the classic velocity-control domain.
//!
//! A state is a grid position plus a velocity vector. Each move adjusts the
//! velocity by at most one in each axis and then coasts; a move whose
//! straight-line segment touches a wall is illegal. The goal is to be on
//! the finish line with zero velocity.

use std::convert::Infallible;

use redo_search::SearchDomain;

/// An integer grid point.
pub type Point = (i32, i32);
/// A line segment between two grid points (walls, finish line).
pub type Edge = (Point, Point);

/// A point with fractional coordinates, for intersection arithmetic and
/// stopping-distance projections.
pub type FPoint = (f64, f64);
/// A segment between fractional points.
pub type FEdge = (FPoint, FPoint);

/// Widen an integer segment to fractional coordinates.
#[must_use]
pub fn to_fedge(((xa, ya), (xb, yb)): Edge) -> FEdge {
    (
        (f64::from(xa), f64::from(ya)),
        (f64::from(xb), f64::from(yb)),
    )
}

/// One search state: where the car is and how fast it is going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Car {
    /// Current position.
    pub pos: Point,
    /// Current velocity.
    pub vel: (i32, i32),
}

impl Car {
    /// A stationary car at `pos`.
    #[must_use]
    pub fn stopped_at(pos: Point) -> Self {
        Self { pos, vel: (0, 0) }
    }
}

/// A racetrack problem: start point, finish line, and walls.
///
/// The finish line must be axis-aligned (vertical or horizontal), as in the
/// source problem sets.
#[derive(Debug, Clone)]
pub struct Racetrack {
    start: Point,
    finish_line: Edge,
    walls: Vec<Edge>,
}

impl Racetrack {
    /// Build a problem from its three parts.
    #[must_use]
    pub fn new(start: Point, finish_line: Edge, walls: Vec<Edge>) -> Self {
        Self {
            start,
            finish_line,
            walls,
        }
    }

    /// The initial state: stationary at the start point.
    #[must_use]
    pub fn initial_state(&self) -> Car {
        Car::stopped_at(self.start)
    }

    /// The finish line segment.
    #[must_use]
    pub fn finish_line(&self) -> Edge {
        self.finish_line
    }

    /// The wall segments.
    #[must_use]
    pub fn walls(&self) -> &[Edge] {
        &self.walls
    }

    /// Whether the move segment `from -> to` touches any wall.
    #[must_use]
    pub fn crash(&self, from: FPoint, to: FPoint) -> bool {
        self.walls
            .iter()
            .any(|&wall| intersect((from, to), to_fedge(wall)))
    }
}

impl SearchDomain for Racetrack {
    type State = Car;
    type Error = Infallible;

    /// The nine unit accelerations, minus those that would drive through a
    /// wall. Every legal move costs 1.
    fn successors(&self, car: &Car) -> Result<Vec<(Car, f64)>, Infallible> {
        let (x, y) = car.pos;
        let (vx, vy) = car.vel;
        let mut states = Vec::new();
        for dx in [0, -1, 1] {
            for dy in [0, -1, 1] {
                let (wx, wy) = (vx + dx, vy + dy);
                let new_pos = (x + wx, y + wy);
                if !self.crash(
                    (f64::from(x), f64::from(y)),
                    (f64::from(new_pos.0), f64::from(new_pos.1)),
                ) {
                    states.push((
                        Car {
                            pos: new_pos,
                            vel: (wx, wy),
                        },
                        1.0,
                    ));
                }
            }
        }
        Ok(states)
    }

    /// On the finish line with zero velocity.
    fn is_goal(&self, car: &Car) -> bool {
        let p = (f64::from(car.pos.0), f64::from(car.pos.1));
        car.vel == (0, 0) && intersect((p, p), to_fedge(self.finish_line))
    }
}

/// Whether segments `e1` and `e2` intersect.
///
/// Slopes and intercepts are compared via cross-multiplied products, so the
/// parallel/collinear tests are exact for integer-coordinate segments and
/// for the halved coordinates that stopping-distance projections produce.
#[must_use]
#[allow(clippy::float_cmp, clippy::similar_names)]
pub fn intersect(e1: FEdge, e2: FEdge) -> bool {
    let ((x1a, y1a), (x1b, y1b)) = e1;
    let ((x2a, y2a), (x2b, y2b)) = e2;
    let dx1 = x1a - x1b;
    let dy1 = y1a - y1b;
    let dx2 = x2a - x2b;
    let dy2 = y2a - y2b;

    if dx1 == 0.0 && dx2 == 0.0 {
        // Both segments vertical.
        if x1a != x2a {
            return false;
        }
        return collinear_point_in_edge((x1a, y1a), e2)
            || collinear_point_in_edge((x1b, y1b), e2)
            || collinear_point_in_edge((x2a, y2a), e1)
            || collinear_point_in_edge((x2b, y2b), e1);
    }
    if dx2 == 0.0 {
        // Only e2 vertical; meet it at its x.
        let x = x2a;
        let y = (x2a - x1a) * dy1 / dx1 + y1a;
        return collinear_point_in_edge((x, y), e1) && collinear_point_in_edge((x, y), e2);
    }
    if dx1 == 0.0 {
        let x = x1a;
        let y = (x1a - x2a) * dy2 / dx2 + y2a;
        return collinear_point_in_edge((x, y), e1) && collinear_point_in_edge((x, y), e2);
    }

    if dy1 * dx2 == dx1 * dy2 {
        // Same slope: parallel or collinear.
        if dx2 * dx1 * (y2a - y1a) != dy2 * dx1 * x2a - dy1 * dx2 * x1a {
            return false;
        }
        return collinear_point_in_edge((x1a, y1a), e2)
            || collinear_point_in_edge((x1b, y1b), e2)
            || collinear_point_in_edge((x2a, y2a), e1)
            || collinear_point_in_edge((x2b, y2b), e1);
    }

    // General position: solve for the crossing, keeping each coordinate as
    // a single quotient to limit roundoff.
    let x = (dx2 * dx1 * (y2a - y1a) - dy2 * dx1 * x2a + dy1 * dx2 * x1a) / (dx2 * dy1 - dy2 * dx1);
    let y = (dy2 * dy1 * (x2a - x1a) - dx2 * dy1 * y2a + dx1 * dy2 * y1a) / (dy2 * dx1 - dx2 * dy1);
    collinear_point_in_edge((x, y), e1) && collinear_point_in_edge((x, y), e2)
}

/// Whether `point`, already known collinear with `edge`, lies within it.
fn collinear_point_in_edge((x, y): FPoint, ((xa, ya), (xb, yb)): FEdge) -> bool {
    // The y test is redundant unless the edge is vertical.
    ((xa <= x && x <= xb) || (xb <= x && x <= xa)) && ((ya <= y && y <= yb) || (yb <= y && y <= ya))
}
