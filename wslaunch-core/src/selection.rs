/// Focus state over an ordered, fixed-size list of workspace buttons.
///
/// Either nothing is focusable (empty list) or exactly one index in
/// `0..count` is focused. Movement wraps at the boundaries, so an
/// out-of-range index is never observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    count: usize,
    focused: Option<usize>,
}

impl Selection {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            focused: if count == 0 { None } else { Some(0) },
        }
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_idle(&self) -> bool {
        self.focused.is_none()
    }

    /// Move focus forward by one, wrapping from the last index to 0.
    pub fn next(&mut self) {
        if let Some(i) = self.focused {
            self.focused = Some((i + 1) % self.count);
        }
    }

    /// Move focus backward by one, wrapping from 0 to the last index.
    pub fn previous(&mut self) {
        if let Some(i) = self.focused {
            self.focused = Some((i + self.count - 1) % self.count);
        }
    }

    /// Re-derive the selection for a list of `count` items. The focused
    /// index is preserved unless it would now be out of range, in which
    /// case it clamps to the last valid index.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.focused = match (self.focused, count) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), n) if i >= n => Some(n - 1),
            (Some(i), _) => Some(i),
        };
    }
}

/// Placement of item `i` in the two-column grid: `(column, row)`.
///
/// Items alternate columns, so the grid fills left, right, left...
/// top to bottom. Pure layout math; rendering derives cell sizes from
/// the live terminal area.
pub fn grid_slot(i: usize) -> (usize, usize) {
    (i % 2, i / 2)
}
