/// How far a linear move along the tree should go.
///
/// Hosts historically encode "all the way" as a negative count
/// (end key = advance -1, home key = retreat -1), so any negative
/// integer converts to `Full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stride {
    By(usize),
    Full,
}

impl From<isize> for Stride {
    fn from(n: isize) -> Self {
        if n < 0 {
            Self::Full
        } else {
            Self::By(n as usize)
        }
    }
}

impl From<usize> for Stride {
    fn from(n: usize) -> Self {
        Self::By(n)
    }
}

/// Result of a single navigation step.
///
/// Navigation never fails. Boundaries clamp and no-op requests are skipped,
/// but callers (and tests) can still tell which of those happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Did exactly what was asked.
    Exact,
    /// Stopped at a tree boundary before completing.
    Clamped,
    /// Nothing to do; the cursor was not touched.
    Skipped,
}

impl Outcome {
    /// Combine the outcomes of consecutive sub-steps of one operation.
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Clamped, _) | (_, Self::Clamped) => Self::Clamped,
            (Self::Skipped, Self::Skipped) => Self::Skipped,
            _ => Self::Exact,
        }
    }
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact)
    }
    pub fn is_clamped(&self) -> bool {
        matches!(self, Self::Clamped)
    }
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// The navigation surface a move tree exposes to the codecs.
///
/// There is exactly one cursor per tree. All movement primitives clamp at
/// the tree's extremes instead of failing. Children are reported in
/// variation order: the first child is the main line.
pub trait Navigate {
    type Id: Copy + Eq + std::fmt::Debug;
    type Move: PartialEq;

    fn root(&self) -> Self::Id;
    fn current(&self) -> Self::Id;
    fn focus(&mut self, id: Self::Id);

    fn parent(&self, id: Self::Id) -> Option<Self::Id>;
    fn children(&self, id: Self::Id) -> Vec<Self::Id>;
    fn depth(&self, id: Self::Id) -> usize;
    fn move_at(&self, id: Self::Id) -> Option<&Self::Move>;

    /// Follow first children. `Full` goes to the end of the line.
    fn advance(&mut self, stride: Stride) -> Outcome {
        let mut moved = 0;
        while stride != Stride::By(moved) {
            match self.children(self.current()).first() {
                Some(&next) => self.focus(next),
                None => break,
            }
            moved += 1;
        }
        match stride {
            Stride::By(0) => Outcome::Skipped,
            Stride::By(n) if n == moved => Outcome::Exact,
            Stride::By(_) => Outcome::Clamped,
            Stride::Full if moved == 0 => Outcome::Skipped,
            Stride::Full => Outcome::Exact,
        }
    }

    /// Follow parents. `Full` goes to the root.
    fn retreat(&mut self, stride: Stride) -> Outcome {
        let mut moved = 0;
        while stride != Stride::By(moved) {
            match self.parent(self.current()) {
                Some(prev) => self.focus(prev),
                None => break,
            }
            moved += 1;
        }
        match stride {
            Stride::By(0) => Outcome::Skipped,
            Stride::By(n) if n == moved => Outcome::Exact,
            Stride::By(_) => Outcome::Clamped,
            Stride::Full if moved == 0 => Outcome::Skipped,
            Stride::Full => Outcome::Exact,
        }
    }

    /// Move among the current node's siblings by a relative offset,
    /// clamped to the first and last sibling.
    fn select(&mut self, offset: isize) -> Outcome {
        if offset == 0 {
            return Outcome::Skipped;
        }
        let current = self.current();
        let Some(parent) = self.parent(current) else {
            return Outcome::Clamped;
        };
        let siblings = self.children(parent);
        let index = siblings
            .iter()
            .position(|&s| s == current)
            .unwrap_or_default() as isize;
        let wanted = index.saturating_add(offset);
        let landed = wanted.clamp(0, siblings.len() as isize - 1);
        if landed != index {
            self.focus(siblings[landed as usize]);
        }
        if landed == wanted {
            Outcome::Exact
        } else {
            Outcome::Clamped
        }
    }
}
