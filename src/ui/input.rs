use std::f32::consts::{FRAC_PI_2, PI};

use crate::layout::LayoutRect;
use crate::tree::arena::NodeId;

/// Input action produced by the external event-wiring collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Pointer moved to a new position
    Hover { x: f32, y: f32 },
    /// Click at a position (drill down into the hit node)
    Select { x: f32, y: f32 },
    /// Click on breadcrumb entry i (jump back)
    BreadcrumbJump { index: usize },
    /// Navigate one level up
    NavigateUp,
    /// Viewport resized
    Resize { width: f32, height: f32 },
}

/// Hit-test: find which layout rectangle contains the given point.
/// Returns the topmost (deepest) rectangle at that point; rects are
/// ordered parents-first, so the reverse scan wins.
pub fn hit_test(rects: &[LayoutRect], x: f32, y: f32) -> Option<NodeId> {
    for rect in rects.iter().rev() {
        if x >= rect.x && x < rect.x + rect.w && y >= rect.y && y < rect.y + rect.h {
            return Some(rect.node);
        }
    }
    None
}

/// Direction of a keyboard focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    fn angle(self) -> f32 {
        match self {
            Direction::Left => PI,
            Direction::Right => 0.0,
            Direction::Up => -FRAC_PI_2,
            Direction::Down => FRAC_PI_2,
        }
    }
}

/// Find the best rectangle to move focus to in the given direction.
/// Scores candidates by distance, angular deviation from the direction,
/// and bonuses for same-depth rects and perpendicular-extent overlap.
/// Same-depth candidates are tried first; any depth is the fallback pass.
pub fn spatial_neighbor(
    rects: &[LayoutRect],
    current: NodeId,
    direction: Direction,
) -> Option<NodeId> {
    let cur = rects.iter().find(|r| r.node == current)?;
    let cx = cur.x + cur.w / 2.0;
    let cy = cur.y + cur.h / 2.0;
    let desired = direction.angle();

    for same_depth_only in [true, false] {
        let mut best: Option<(f32, NodeId)> = None;
        for r in rects {
            if r.node == current {
                continue;
            }
            if same_depth_only && r.depth != cur.depth {
                continue;
            }
            let nx = r.x + r.w / 2.0;
            let ny = r.y + r.h / 2.0;
            let dx = nx - cx;
            let dy = ny - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist == 0.0 {
                continue;
            }
            // Candidates behind the direction of travel are out.
            let dot = desired.cos() * dx + desired.sin() * dy;
            if dot <= 0.0 {
                continue;
            }
            let mut angle_diff = (dy.atan2(dx) - desired).abs();
            if angle_diff > PI {
                angle_diff = 2.0 * PI - angle_diff;
            }
            let depth_bonus = if r.depth == cur.depth { 0.75 } else { 1.0 };
            let overlap = match direction {
                Direction::Left | Direction::Right => {
                    (r.y + r.h).min(cur.y + cur.h) - r.y.max(cur.y)
                }
                Direction::Up | Direction::Down => {
                    (r.x + r.w).min(cur.x + cur.w) - r.x.max(cur.x)
                }
            };
            let overlap_bonus = if overlap > 0.0 { 0.8 } else { 1.0 };
            let score = dist * (1.0 + angle_diff / PI) * depth_bonus * overlap_bonus;
            if best.map_or(true, |(s, _)| score < s) {
                best = Some((score, r.node));
            }
        }
        if let Some((_, node)) = best {
            return Some(node);
        }
    }
    None
}
