use crate::config::game::{HOME_RIGHT_MARGIN, HOME_SIZE};
use crate::game::canvas::{Canvas, Shape, ShapeId};
use crate::game::element::{GameElement, IdAllocator};
use crate::game::types::{Bounds, Color, Position};

/// The player's goal: a fixed square region.
#[derive(Debug, Clone)]
pub struct Home {
    pos: Position,
    size: f64,
    id: Option<ShapeId>,
}

impl Home {
    pub fn new(pos: Position, size: f64) -> Self {
        Self { pos, size, id: None }
    }

    /// Home placed near the right edge, vertically centered.
    pub fn for_bounds(bounds: Bounds) -> Self {
        Self::new(
            Position::new(bounds.width - HOME_RIGHT_MARGIN, (bounds.height / 2.0).floor()),
            HOME_SIZE,
        )
    }

    #[cfg(test)]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Inclusive containment: a point on the edge is inside.
    pub fn contains(&self, point: Position) -> bool {
        let half = self.size / 2.0;
        (self.pos.x - half..=self.pos.x + half).contains(&point.x)
            && (self.pos.y - half..=self.pos.y + half).contains(&point.y)
    }
}

impl GameElement for Home {
    fn create(&mut self, ids: &mut IdAllocator) {
        self.id = Some(ids.next_id());
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        if let Some(id) = self.id {
            canvas.draw(id, Shape::Rect {
                center: self.pos,
                size: self.size,
                fill: None,
                outline: Some(Color::Brown),
                width: 2.0,
            });
        }
    }

    fn delete(&mut self, canvas: &mut dyn Canvas) {
        if let Some(id) = self.id.take() {
            canvas.remove(id);
        }
    }

    fn position(&self) -> Position {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_placement() {
        let home = Home::for_bounds(Bounds::new(800.0, 601.0));
        assert_eq!(home.position(), Position::new(700.0, 300.0));
        assert_eq!(home.size(), HOME_SIZE);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let home = Home::new(Position::new(100.0, 100.0), 20.0);
        assert!(home.contains(Position::new(100.0, 100.0)));
        assert!(home.contains(Position::new(90.0, 110.0)));
        assert!(home.contains(Position::new(110.0, 90.0)));
        assert!(!home.contains(Position::new(110.5, 100.0)));
        assert!(!home.contains(Position::new(100.0, 89.9)));
    }
}
