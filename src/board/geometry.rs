use crate::domain::project::ProjectStatus;
use serde::{Deserialize, Serialize};

/// A pointer position in the board's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point
    ///
    /// Comparisons only ever need relative magnitude, so the square root is
    /// never taken.
    pub fn distance_squared(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// An axis-aligned bounding box, as measured by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether the point falls inside this box
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// A lane's drop region on screen
///
/// The rendering layer measures each lane's bounding box and reports the
/// full set on every pointer move; hover detection works purely on these
/// measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneTarget {
    pub status: ProjectStatus,
    pub bounds: Rect,
}

impl LaneTarget {
    pub fn new(status: ProjectStatus, bounds: Rect) -> Self {
        Self { status, bounds }
    }
}

/// Resolves which lane the pointer is hovering
///
/// Only lanes whose bounding box contains the pointer are candidates; among
/// those the lane whose center is nearest the pointer wins, which settles
/// ties when measured boxes overlap. A pointer inside no lane hovers
/// nothing.
pub fn hovered_lane(pointer: Point, targets: &[LaneTarget]) -> Option<ProjectStatus> {
    targets
        .iter()
        .filter(|target| target.bounds.contains(pointer))
        .min_by(|a, b| {
            let da = pointer.distance_squared(a.bounds.center());
            let db = pointer.distance_squared(b.bounds.center());
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|target| target.status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_lanes() -> Vec<LaneTarget> {
        // Four 100x400 lanes side by side
        ProjectStatus::ALL
            .iter()
            .enumerate()
            .map(|(i, status)| {
                LaneTarget::new(*status, Rect::new(i as f64 * 100.0, 0.0, 100.0, 400.0))
            })
            .collect()
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(rect.center(), Point::new(60.0, 40.0));
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(100.0, 100.0)));
        assert!(rect.contains(Point::new(50.0, 50.0)));
        assert!(!rect.contains(Point::new(100.1, 50.0)));
        assert!(!rect.contains(Point::new(50.0, -0.1)));
    }

    #[test]
    fn test_hovered_lane_by_containment() {
        let lanes = four_lanes();

        assert_eq!(
            hovered_lane(Point::new(50.0, 200.0), &lanes),
            Some(ProjectStatus::Idea)
        );
        assert_eq!(
            hovered_lane(Point::new(150.0, 200.0), &lanes),
            Some(ProjectStatus::InProgress)
        );
        assert_eq!(
            hovered_lane(Point::new(350.0, 10.0), &lanes),
            Some(ProjectStatus::Complete)
        );
    }

    #[test]
    fn test_hovered_lane_outside_everything() {
        let lanes = four_lanes();
        assert_eq!(hovered_lane(Point::new(450.0, 200.0), &lanes), None);
        assert_eq!(hovered_lane(Point::new(50.0, 500.0), &lanes), None);
        assert_eq!(hovered_lane(Point::new(50.0, 200.0), &[]), None);
    }

    #[test]
    fn test_hovered_lane_overlap_resolved_by_nearest_center() {
        // Two overlapping lanes; the pointer sits in the overlap but closer
        // to the second lane's center.
        let targets = vec![
            LaneTarget::new(ProjectStatus::Idea, Rect::new(0.0, 0.0, 120.0, 400.0)),
            LaneTarget::new(
                ProjectStatus::InProgress,
                Rect::new(100.0, 0.0, 120.0, 400.0),
            ),
        ];

        assert_eq!(
            hovered_lane(Point::new(115.0, 200.0), &targets),
            Some(ProjectStatus::InProgress)
        );
        assert_eq!(
            hovered_lane(Point::new(105.0, 200.0), &targets),
            Some(ProjectStatus::Idea)
        );
    }
}
