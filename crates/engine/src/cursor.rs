//! Keyboard selection cursor.
//!
//! The terminal has no drag gesture, so a selection is made by anchoring at
//! one cell and moving the cursor to another. The selected cells are always
//! a straight line from the anchor; when the cursor is off any of the eight
//! directions the line snaps to the closest one.

use crate::types::{Direction, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCursor {
    size: u8,
    position: Position,
    anchor: Option<Position>,
}

impl SelectionCursor {
    pub fn new(size: u8) -> Self {
        Self {
            size,
            position: Position::new(0, 0),
            anchor: None,
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn anchor(&self) -> Option<Position> {
        self.anchor
    }

    pub fn is_selecting(&self) -> bool {
        self.anchor.is_some()
    }

    /// Reset for a grid of `size`
    pub fn reset(&mut self, size: u8) {
        *self = Self::new(size);
    }

    /// Move by one step, clamped to the grid.
    pub fn move_by(&mut self, dr: i8, dc: i8) -> bool {
        if self.size == 0 {
            return false;
        }
        let max = self.size as i8 - 1;
        let next = Position::new(
            (self.position.row + dr).clamp(0, max),
            (self.position.col + dc).clamp(0, max),
        );
        let moved = next != self.position;
        self.position = next;
        moved
    }

    pub fn begin(&mut self) {
        self.anchor = Some(self.position);
    }

    pub fn clear(&mut self) {
        self.anchor = None;
    }

    /// Cells from the anchor towards the cursor (empty when not selecting).
    pub fn selection(&self) -> Vec<Position> {
        let Some(anchor) = self.anchor else {
            return Vec::new();
        };
        let end = snap_to_line(anchor, self.position);
        anchor.line_to(end).unwrap_or_else(|| vec![anchor])
    }
}

/// Closest cell to `target` that lies on a straight line from `anchor`.
pub fn snap_to_line(anchor: Position, target: Position) -> Position {
    let dr = target.row as i16 - anchor.row as i16;
    let dc = target.col as i16 - anchor.col as i16;
    if Direction::from_delta(dr, dc).is_some() || (dr == 0 && dc == 0) {
        return target;
    }

    let m = dr.abs().min(dc.abs());
    let candidates = [
        Position::new(anchor.row, target.col),
        Position::new(target.row, anchor.col),
        Position::new(
            (anchor.row as i16 + dr.signum() * m) as i8,
            (anchor.col as i16 + dc.signum() * m) as i8,
        ),
    ];
    let dist = |p: &Position| {
        let r = (p.row as i16 - target.row as i16).abs();
        let c = (p.col as i16 - target.col as i16).abs();
        r * r + c * c
    };
    candidates
        .into_iter()
        .min_by_key(dist)
        .unwrap_or(anchor)
}
