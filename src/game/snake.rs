//! Snake body storage

use std::collections::VecDeque;

use crate::core::types::GridPos;

/// Ordered body cells, tail at the front, head at the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<GridPos>,
}

impl Snake {
    /// Build a snake from cells listed tail-to-head. Returns `None` if empty.
    pub fn from_cells(cells: impl IntoIterator<Item = GridPos>) -> Option<Self> {
        let body: VecDeque<GridPos> = cells.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    /// Horizontal snake of `len` cells ending at `head`, pointing right
    pub fn horizontal(head: GridPos, len: usize) -> Self {
        let body = (0..len as i32)
            .rev()
            .map(|offset| GridPos::new(head.x - offset, head.y))
            .collect();
        Self { body }
    }

    pub fn head(&self) -> GridPos {
        // Non-empty by construction
        self.body[self.body.len() - 1]
    }

    pub fn tail(&self) -> GridPos {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        self.body.contains(&pos)
    }

    /// Cells tail-to-head
    pub fn cells(&self) -> impl DoubleEndedIterator<Item = GridPos> + ExactSizeIterator + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn push_head(&mut self, pos: GridPos) {
        self.body.push_back(pos);
    }

    pub(crate) fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_front();
        }
    }
}
