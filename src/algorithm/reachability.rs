//! Jump reachability between tiles and between structures
//!
//! A jump from a standing position can reach a rectangle around it plus two
//! triangular fall zones that open out towards the bottom of the map on
//! either side. The shape is a loose approximation of the source game's jump
//! arc; its reach constants live in [`ReachabilityConfig`].

use std::cmp::Ordering;

use log::trace;

use crate::io::configuration::{HORIZONTAL_REACH, MAP_ROWS, TRIANGLE_TOLERANCE, VERTICAL_REACH};
use crate::math::geometry::{Point, Triangle};
use crate::spatial::BoundingBox;
use crate::structure::Node;

/// Reach constants of the jump approximation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReachabilityConfig {
    /// Columns reachable either side of the source
    pub horizontal_reach: i32,
    /// Rows reachable above and below the source
    pub vertical_reach: i32,
    /// Lowest row of the map; fall zones extend down to it
    pub bottom_row: i32,
    /// Slack for the point-in-triangle test
    pub tolerance: f64,
}

impl Default for ReachabilityConfig {
    fn default() -> Self {
        Self {
            horizontal_reach: HORIZONTAL_REACH,
            vertical_reach: VERTICAL_REACH,
            bottom_row: MAP_ROWS as i32 - 1,
            tolerance: TRIANGLE_TOLERANCE,
        }
    }
}

/// Region reachable from one source position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpZone {
    /// Directly reachable rectangle, clamped to the map
    pub rectangle: BoundingBox,
    /// Fall zone opening to the left
    pub left: Triangle,
    /// Fall zone opening to the right
    pub right: Triangle,
    tolerance: f64,
}

impl JumpZone {
    /// Whether `target` lies in the rectangle or either fall zone
    pub fn contains(&self, target: [i32; 2]) -> bool {
        if self.rectangle.contains(target) {
            return true;
        }
        let point: Point = [f64::from(target[1]), f64::from(target[0])];
        self.left.contains(point, self.tolerance) || self.right.contains(point, self.tolerance)
    }
}

/// Decides whether one position, or one structure, reaches another
#[derive(Debug, Clone, Copy, Default)]
pub struct ReachabilityAnalyzer {
    config: ReachabilityConfig,
}

impl ReachabilityAnalyzer {
    /// Create an analyzer with explicit reach constants
    pub const fn new(config: ReachabilityConfig) -> Self {
        Self { config }
    }

    /// Reach constants in use
    pub const fn config(&self) -> &ReachabilityConfig {
        &self.config
    }

    /// Build the reachable zone around `source`
    pub fn jump_zone(&self, source: [i32; 2]) -> JumpZone {
        let ReachabilityConfig {
            horizontal_reach,
            vertical_reach,
            bottom_row,
            tolerance,
        } = self.config;
        let [row, col] = source;

        let c_min = (col - horizontal_reach).max(0);
        let c_max = col + horizontal_reach;
        let r_min = (row - vertical_reach).max(0);
        let r_max = (row + vertical_reach).min(bottom_row);

        let bottom = f64::from(bottom_row);
        let top = f64::from(r_min);
        let span = bottom_row - r_min;

        // The left spread keeps the fractional half, the right one truncates
        let left_spread = (f64::from(c_min) - f64::from(span) / 2.0).max(0.0);
        let right_spread = f64::from(c_max + span / 2);

        let left = Triangle::new(
            [f64::from(c_min), top],
            [f64::from(c_min), bottom],
            [left_spread, bottom],
        );
        let right = Triangle::new(
            [f64::from(c_max), top],
            [f64::from(c_max), bottom],
            [right_spread, bottom],
        );

        JumpZone {
            rectangle: BoundingBox::from_corners([r_min, c_min], [r_max, c_max]),
            left,
            right,
            tolerance,
        }
    }

    /// Whether `target` can be reached by jumping from `source`
    pub fn is_reachable(&self, source: [i32; 2], target: [i32; 2]) -> bool {
        self.jump_zone(source).contains(target)
    }

    /// Closest reachable (solid source, target) pair between two node sets
    ///
    /// Sources are the solid nodes of `from`; targets are all nodes of `to`,
    /// solid ones first. Pairs are tried in ascending distance (ties keep that
    /// order) and the first reachable one is returned. When nothing is
    /// reachable every pair has been examined.
    pub fn find_reachable_pair(
        &self,
        from: impl IntoIterator<Item = Node>,
        to: impl IntoIterator<Item = Node>,
    ) -> Option<(Node, Node)> {
        let sources: Vec<(Node, JumpZone)> = from
            .into_iter()
            .filter(Node::is_solid)
            .map(|n| (n, self.jump_zone(n.position)))
            .collect();
        if sources.is_empty() {
            return None;
        }

        let (mut targets, non_solids): (Vec<Node>, Vec<Node>) =
            to.into_iter().partition(Node::is_solid);
        targets.extend(non_solids);

        let mut pairs: Vec<(f64, usize, usize)> = Vec::with_capacity(sources.len() * targets.len());
        for (si, (source, _)) in sources.iter().enumerate() {
            for (ti, target) in targets.iter().enumerate() {
                pairs.push((source.distance(target), si, ti));
            }
        }
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        pairs.into_iter().find_map(|(distance, si, ti)| {
            let (source, zone) = sources.get(si)?;
            let target = targets.get(ti)?;
            let reachable = zone.contains(target.position);
            trace!(
                "dist {distance:.3}: ({}, {}) -> ({}, {}) reachable={reachable}",
                source.position[0], source.position[1], target.position[0], target.position[1]
            );
            reachable.then_some((*source, *target))
        })
    }

    /// Whether any solid node of `from` reaches any node of `to`
    pub fn structures_reachable(
        &self,
        from: impl IntoIterator<Item = Node>,
        to: impl IntoIterator<Item = Node>,
    ) -> bool {
        self.find_reachable_pair(from, to).is_some()
    }
}
