//! Door placement rules.
//!
//! Every non-corridor room gets exactly one door on the wall facing its
//! circulation path. Ensuite doors open toward their bedroom instead.

use crate::model::{Direction, Door, Swing};
use crate::zones::Rect;

/// Wall of a room rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Doors swing out through the wall they sit on.
    pub fn direction(self) -> Direction {
        match self {
            Edge::Top => Direction::Up,
            Edge::Bottom => Direction::Down,
            Edge::Left => Direction::Left,
            Edge::Right => Direction::Right,
        }
    }
}

/// Swing alternates within a room group: even index → cw, odd → ccw.
pub fn swing_for_index(index: usize) -> Swing {
    if index % 2 == 0 {
        Swing::Cw
    } else {
        Swing::Ccw
    }
}

/// Door on `edge` of `rect`, `offset` of the way along that wall
/// (from the left for horizontal walls, from the top for vertical ones).
pub fn door_on_edge(rect: &Rect, edge: Edge, offset: f32, swing: Swing) -> Door {
    let (x, y) = match edge {
        Edge::Top => (rect.x + rect.w * offset, rect.y),
        Edge::Bottom => (rect.x + rect.w * offset, rect.bottom()),
        Edge::Left => (rect.x, rect.y + rect.h * offset),
        Edge::Right => (rect.right(), rect.y + rect.h * offset),
    };
    Door {
        x,
        y,
        direction: edge.direction(),
        swing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swing_alternates_by_parity() {
        assert_eq!(swing_for_index(0), Swing::Cw);
        assert_eq!(swing_for_index(1), Swing::Ccw);
        assert_eq!(swing_for_index(2), Swing::Cw);
        assert_eq!(swing_for_index(7), Swing::Ccw);
    }

    #[test]
    fn bottom_door_sits_on_lower_wall() {
        let rect = Rect::new(1.0, 2.0, 4.0, 3.0);
        let door = door_on_edge(&rect, Edge::Bottom, 0.25, Swing::Cw);
        assert_eq!(door.x, 2.0);
        assert_eq!(door.y, 5.0);
        assert_eq!(door.direction, Direction::Down);
    }

    #[test]
    fn vertical_walls_measure_offset_from_top() {
        let rect = Rect::new(1.0, 2.0, 4.0, 3.0);
        let left = door_on_edge(&rect, Edge::Left, 0.5, Swing::Ccw);
        assert_eq!((left.x, left.y), (1.0, 3.5));
        assert_eq!(left.direction, Direction::Left);
        assert_eq!(left.swing, Swing::Ccw);

        let right = door_on_edge(&rect, Edge::Right, 0.5, Swing::Cw);
        assert_eq!((right.x, right.y), (5.0, 3.5));
        assert_eq!(right.direction, Direction::Right);
    }

    #[test]
    fn top_door_faces_up() {
        let rect = Rect::new(0.0, 4.0, 6.0, 2.0);
        let door = door_on_edge(&rect, Edge::Top, 0.5, Swing::Cw);
        assert_eq!((door.x, door.y), (3.0, 4.0));
        assert_eq!(door.direction, Direction::Up);
    }
}
