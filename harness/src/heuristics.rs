//! Heuristic values for the bundled worlds.
//!
//! None of the racetrack heuristics is admissible; they trade admissibility
//! for much stronger guidance. `WallDistance` is the strongest of the three
//! and the only one that accounts for walls.

use std::convert::Infallible;

use redo_search::{Heuristic, SearchDomain};

use crate::worlds::grid_maze::{Cell, GridMaze};
use crate::worlds::racetrack::{intersect, to_fedge, Car, Edge, FPoint, Point, Racetrack};

/// The trivial heuristic. Turns greedy and A* searches into blind ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl<D: SearchDomain> Heuristic<D> for Zero {
    fn estimate(&self, _state: &D::State) -> Result<f64, D::Error> {
        Ok(0.0)
    }
}

/// Manhattan distance to a goal cell. Admissible for `GridMaze`, whose
/// moves are axis-aligned with unit cost.
#[derive(Debug, Clone, Copy)]
pub struct Manhattan {
    goal: Cell,
}

impl Manhattan {
    /// Targets the maze's goal cell.
    #[must_use]
    pub fn for_maze(maze: &GridMaze) -> Self {
        Self { goal: maze.goal() }
    }
}

impl Heuristic<GridMaze> for Manhattan {
    fn estimate(&self, &(x, y): &Cell) -> Result<f64, Infallible> {
        Ok(f64::from((x - self.goal.0).abs() + (y - self.goal.1).abs()))
    }
}

/// Straight-line distance from a position to the nearest integer point of
/// the finish line, ignoring walls and velocity.
#[derive(Debug, Clone, Copy)]
pub struct Euclidean {
    finish_line: Edge,
}

impl Euclidean {
    /// Targets the track's finish line.
    #[must_use]
    pub fn for_track(track: &Racetrack) -> Self {
        Self {
            finish_line: track.finish_line(),
        }
    }

    fn distance_to_line(&self, (x, y): Point) -> f64 {
        let ((x1, y1), (x2, y2)) = self.finish_line;
        let mut best = f64::INFINITY;
        for xx in x1.min(x2)..=x1.max(x2) {
            for yy in y1.min(y2)..=y1.max(y2) {
                let d = f64::from((xx - x).pow(2) + (yy - y).pow(2)).sqrt();
                best = best.min(d);
            }
        }
        best
    }
}

impl Heuristic<Racetrack> for Euclidean {
    fn estimate(&self, car: &Car) -> Result<f64, Infallible> {
        Ok(self.distance_to_line(car.pos))
    }
}

/// `Euclidean` plus an estimate of how many moves it takes to brake from
/// the current speed.
#[derive(Debug, Clone, Copy)]
pub struct EuclideanStop {
    edist: Euclidean,
}

impl EuclideanStop {
    /// Targets the track's finish line.
    #[must_use]
    pub fn for_track(track: &Racetrack) -> Self {
        Self {
            edist: Euclidean::for_track(track),
        }
    }
}

impl Heuristic<Racetrack> for EuclideanStop {
    fn estimate(&self, car: &Car) -> Result<f64, Infallible> {
        let (u, v) = car.vel;
        let m = f64::from(u.pow(2) + v.pow(2)).sqrt();
        let stop_dist = m * (m - 1.0) / 2.0;
        Ok((self.edist.distance_to_line(car.pos) + stop_dist / 10.0).max(stop_dist))
    }
}

/// Exact number of moves to stop on the finish line if there were no
/// walls. The only admissible heuristic of the family: A* with it returns
/// optimal runs, at the price of far more exploration than the inadmissible
/// ones.
#[derive(Debug, Clone, Copy)]
pub struct NumMoves {
    finish_line: Edge,
}

impl NumMoves {
    /// Targets the track's finish line.
    #[must_use]
    pub fn for_track(track: &Racetrack) -> Self {
        Self {
            finish_line: track.finish_line(),
        }
    }
}

impl Heuristic<Racetrack> for NumMoves {
    fn estimate(&self, car: &Car) -> Result<f64, Infallible> {
        let (x, y) = car.pos;
        let (u, v) = car.vel;
        let ((x1, y1), (x2, y2)) = self.finish_line;
        // The finish line is axis-aligned: one axis has a fixed target, the
        // other may aim at any integer point of the line.
        let (fixed, swept) = if x1 == x2 {
            let swept = (y1.min(y2)..=y1.max(y2))
                .map(|y3| moves_to_cover(v, y3 - y))
                .min()
                .unwrap_or(0);
            (moves_to_cover(u, x1 - x), swept)
        } else {
            let swept = (x1.min(x2)..=x1.max(x2))
                .map(|x3| moves_to_cover(u, x3 - x))
                .min()
                .unwrap_or(0);
            (moves_to_cover(v, y1 - y), swept)
        };
        Ok(f64::from(fixed.max(swept)))
    }
}

/// Distance covered on one axis while the speed changes from `v` to `t`,
/// one unit of acceleration per move. Both speeds must be non-negative;
/// the products are always even, so the division is exact.
fn coast_distance(v: i32, t: i32) -> i32 {
    if t == v {
        t
    } else if t < v {
        v * (v - 1) / 2 - t * (t - 1) / 2
    } else {
        t * (t + 1) / 2 - v * (v + 1) / 2
    }
}

/// Moves needed on one axis to travel exactly `d` and come to rest, given
/// current speed `v` and no walls.
fn moves_to_cover(mut v: i32, mut d: i32) -> i32 {
    if d < 0 {
        d = -d;
        v = -v;
    }
    if v < 0 {
        // Wrong direction: brake to a stop (v moves, adding the stopping
        // distance to the shortfall), then start over from rest.
        let v = -v;
        return v + moves_to_cover(0, d + coast_distance(v, 0));
    }
    let stop = coast_distance(v, 0);
    if stop > d {
        // Overshoot: stop in v moves, then come back.
        return v + moves_to_cover(0, stop - d);
    }
    if stop == d {
        return v;
    }
    // Largest peak speed t whose accelerate-then-brake profile fits in d.
    // t = 1 always fits (stop < d implies d >= 1), so tmax >= 1.
    let mut t = (v - 1).max(0);
    let mut tmax = t;
    let mut dmax = 0;
    while coast_distance(v, t) + coast_distance(t, 0) <= d {
        tmax = t;
        dmax = coast_distance(v, t) + coast_distance(t, 0);
        t += 1;
    }
    let extra = if dmax < d {
        // Cruise at tmax for the remainder, rounding up.
        (d - dmax + tmax - 1) / tmax
    } else {
        0
    };
    (tmax - v) + tmax + extra
}

/// Approximate distance to the finish line that respects walls.
///
/// Construction runs a relaxation backwards from the finish line over every
/// grid point inside the walls' bounding box, so each value is a rough
/// shortest-path length rather than a straight-line distance. Estimates add
/// a braking penalty, plus a crash penalty when the fastest stop from the
/// current velocity would run through a wall.
///
/// The grid is owned by the value: two `WallDistance` instances for
/// different tracks never share or clobber each other's tables.
#[derive(Debug, Clone)]
pub struct WallDistance {
    grid: Vec<Vec<f64>>,
    walls: Vec<Edge>,
}

impl WallDistance {
    /// Precompute the distance grid for `track`.
    #[must_use]
    pub fn for_track(track: &Racetrack) -> Self {
        let xmax = track
            .walls()
            .iter()
            .map(|&((xa, _), (xb, _))| xa.max(xb))
            .max()
            .unwrap_or(0);
        let ymax = track
            .walls()
            .iter()
            .map(|&((_, ya), (_, yb))| ya.max(yb))
            .max()
            .unwrap_or(0);

        // Seed with the straight-line distance where the line of sight is
        // clear, then relax over grid neighbors until the table is stable.
        let mut grid: Vec<Vec<f64>> = (0..=xmax)
            .map(|x| {
                (0..=ymax)
                    .map(|y| line_of_sight_distance((x, y), track))
                    .collect()
            })
            .collect();

        let mut changed = true;
        while changed {
            changed = false;
            for x in 0..=xmax {
                for y in 0..=ymax {
                    for x1 in (x - 1).max(0)..=(x + 1).min(xmax) {
                        for y1 in (y - 1).max(0)..=(y + 1).min(ymax) {
                            let base = grid[usize_of(x1)][usize_of(y1)];
                            if base.is_finite()
                                && !track.crash(
                                    (f64::from(x), f64::from(y)),
                                    (f64::from(x1), f64::from(y1)),
                                )
                            {
                                let step = if x == x1 || y == y1 {
                                    1.0
                                } else {
                                    std::f64::consts::SQRT_2
                                };
                                let d = base + step;
                                if d < grid[usize_of(x)][usize_of(y)] {
                                    grid[usize_of(x)][usize_of(y)] = d;
                                    changed = true;
                                }
                            }
                        }
                    }
                }
            }
        }

        Self {
            grid,
            walls: track.walls().to_vec(),
        }
    }

    /// Grid value at `pos`, or infinity outside the table.
    #[must_use]
    pub fn lookup(&self, (x, y): Point) -> f64 {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => self
                .grid
                .get(x)
                .and_then(|col| col.get(y))
                .copied()
                .unwrap_or(f64::INFINITY),
            _ => f64::INFINITY,
        }
    }

    fn crashes(&self, from: FPoint, to: FPoint) -> bool {
        self.walls
            .iter()
            .any(|&wall| intersect((from, to), to_fedge(wall)))
    }
}

impl Heuristic<Racetrack> for WallDistance {
    fn estimate(&self, car: &Car) -> Result<f64, Infallible> {
        let (x, y) = car.pos;
        let (u, v) = car.vel;
        let hval = self.lookup(car.pos);

        // Braking penalty, per axis.
        let (au, av) = (u.abs(), v.abs());
        let mut sdu = f64::from(au * (au - 1)) / 2.0;
        let mut sdv = f64::from(av * (av - 1)) / 2.0;
        let sd = sdu.max(sdv);
        let mut penalty = sd / 10.0;

        // Where the fastest stop ends up; stopping through a wall costs more.
        if u < 0 {
            sdu = -sdu;
        }
        if v < 0 {
            sdv = -sdv;
        }
        let stop = (f64::from(x) + sdu, f64::from(y) + sdv);
        if self.crashes((f64::from(x), f64::from(y)), stop) {
            penalty += f64::from(au.pow(2) + av.pow(2)).sqrt();
        }
        Ok((hval + penalty).max(sd))
    }
}

/// Straight-line distance from `point` to the nearest integer point of the
/// finish line that it can see without crossing a wall. The finish line is
/// axis-aligned, so one coordinate is swept. Infinity when no point of the
/// line is visible.
fn line_of_sight_distance((x, y): Point, track: &Racetrack) -> f64 {
    let ((x1, y1), (x2, y2)) = track.finish_line();
    let from = (f64::from(x), f64::from(y));
    let mut best = f64::INFINITY;
    if x1 == x2 {
        for y3 in y1.min(y2)..=y1.max(y2) {
            if !track.crash(from, (f64::from(x1), f64::from(y3))) {
                best = best.min(f64::from((x1 - x).pow(2) + (y3 - y).pow(2)).sqrt());
            }
        }
    } else {
        for x3 in x1.min(x2)..=x1.max(x2) {
            if !track.crash(from, (f64::from(x3), f64::from(y1))) {
                best = best.min(f64::from((x3 - x).pow(2) + (y1 - y).pow(2)).sqrt());
            }
        }
    }
    best
}

#[allow(clippy::cast_sign_loss)]
fn usize_of(v: i32) -> usize {
    v as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed_track() -> Racetrack {
        Racetrack::new(
            (1, 2),
            ((9, 1), (9, 3)),
            vec![
                ((0, 0), (10, 0)),
                ((10, 0), (10, 10)),
                ((10, 10), (0, 10)),
                ((0, 10), (0, 0)),
            ],
        )
    }

    #[test]
    fn zero_is_zero() {
        let track = boxed_track();
        let h: &dyn Heuristic<Racetrack> = &Zero;
        assert_eq!(h.estimate(&track.initial_state()).unwrap(), 0.0);
    }

    #[test]
    fn manhattan_distance_to_goal() {
        let maze = GridMaze::from_ascii("S..\n...\n..G").unwrap();
        let h = Manhattan::for_maze(&maze);
        assert_eq!(h.estimate(&maze.start()).unwrap(), 4.0);
        assert_eq!(h.estimate(&maze.goal()).unwrap(), 0.0);
    }

    #[test]
    fn euclidean_takes_the_nearest_line_point() {
        let track = boxed_track();
        let h = Euclidean::for_track(&track);
        // (5, 2) is level with the middle of the vertical finish line.
        assert_eq!(h.estimate(&Car::stopped_at((5, 2))).unwrap(), 4.0);
        assert_eq!(h.estimate(&Car::stopped_at((9, 2))).unwrap(), 0.0);
    }

    #[test]
    fn euclidean_stop_adds_braking_distance() {
        let track = boxed_track();
        let h = EuclideanStop::for_track(&track);
        // Speed 3 toward the line: stop_dist = 3 * 2 / 2 = 3.
        let moving = Car {
            pos: (5, 2),
            vel: (3, 0),
        };
        let hv = h.estimate(&moving).unwrap();
        assert!((hv - 4.3).abs() < 1e-9);
        // At rest the stop term vanishes.
        assert_eq!(h.estimate(&Car::stopped_at((5, 2))).unwrap(), 4.0);
    }

    #[test]
    fn moves_to_cover_handles_rest_overshoot_and_reversal() {
        // At rest: accelerate to 1, brake to 0.
        assert_eq!(moves_to_cover(0, 1), 2);
        assert_eq!(moves_to_cover(0, 0), 0);
        // Moving at 1 with nothing left: one braking move.
        assert_eq!(moves_to_cover(1, 0), 1);
        // Speed profile 1, 2, 2, 1, 0 covers 6 in 5 moves.
        assert_eq!(moves_to_cover(0, 6), 5);
        // Wrong direction: 2 braking moves overshoot to distance 1, then a
        // fresh start from rest (2 more).
        assert_eq!(moves_to_cover(-2, 0), 4);
    }

    #[test]
    fn num_moves_is_exact_on_open_ground() {
        let track = boxed_track();
        let h = NumMoves::for_track(&track);
        // From rest, 8 cells to the line: peak speed 2 covers 4, two cruise
        // moves cover the rest, 6 moves total - the true optimum.
        assert_eq!(h.estimate(&track.initial_state()).unwrap(), 6.0);
        assert_eq!(h.estimate(&Car::stopped_at((9, 2))).unwrap(), 0.0);
        // Passing over the line at speed still needs a braking move.
        assert_eq!(
            h.estimate(&Car {
                pos: (9, 2),
                vel: (1, 0),
            })
            .unwrap(),
            1.0
        );
    }

    #[test]
    fn wall_distance_matches_line_of_sight_in_the_open() {
        let track = boxed_track();
        let h = WallDistance::for_track(&track);
        assert_eq!(h.lookup((9, 2)), 0.0);
        assert_eq!(h.estimate(&Car::stopped_at((5, 2))).unwrap(), 4.0);
    }

    #[test]
    fn wall_distance_routes_around_obstacles() {
        // A wall screening the finish line from the left half of the box.
        let track = Racetrack::new(
            (1, 2),
            ((9, 1), (9, 3)),
            vec![
                ((0, 0), (10, 0)),
                ((10, 0), (10, 10)),
                ((10, 10), (0, 10)),
                ((0, 10), (0, 0)),
                ((5, 0), (5, 8)),
            ],
        );
        let straight = Euclidean::for_track(&track);
        let walled = WallDistance::for_track(&track);
        let car = Car::stopped_at((1, 2));
        assert!(walled.estimate(&car).unwrap() > straight.estimate(&car).unwrap());
    }

    #[test]
    fn wall_distance_penalizes_crashing_stops() {
        let track = boxed_track();
        let h = WallDistance::for_track(&track);
        // Speed 5 rightward from (7, 2): the fastest stop ends at x = 17,
        // through the right wall.
        let hurtling = Car {
            pos: (7, 2),
            vel: (5, 0),
        };
        let stoppable = Car {
            pos: (7, 2),
            vel: (0, 0),
        };
        assert!(h.estimate(&hurtling).unwrap() > h.estimate(&stoppable).unwrap() + 5.0);
    }

    #[test]
    fn wall_distance_outside_the_grid_is_infinite() {
        let track = boxed_track();
        let h = WallDistance::for_track(&track);
        assert_eq!(h.lookup((-1, 2)), f64::INFINITY);
        assert_eq!(h.lookup((2, 99)), f64::INFINITY);
    }

    #[test]
    fn wall_distance_grids_are_independent() {
        let a = WallDistance::for_track(&boxed_track());
        let bigger = Racetrack::new(
            (1, 2),
            ((19, 1), (19, 3)),
            vec![
                ((0, 0), (20, 0)),
                ((20, 0), (20, 20)),
                ((20, 20), (0, 20)),
                ((0, 20), (0, 0)),
            ],
        );
        let b = WallDistance::for_track(&bigger);
        assert_eq!(a.lookup((9, 2)), 0.0);
        assert!(b.lookup((9, 2)) > 0.0);
        // Building b must not disturb a's table.
        assert_eq!(a.lookup((9, 2)), 0.0);
    }
}
