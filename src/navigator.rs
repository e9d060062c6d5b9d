use crate::*;

/// Per-segment outcomes of walking a `Path`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Walk(Vec<(Segment, Outcome)>);

impl Walk {
    pub fn steps(&self) -> &[(Segment, Outcome)] {
        &self.0
    }
    /// every segment did exactly what it asked (or had nothing to do)
    pub fn is_exact(&self) -> bool {
        self.0.iter().all(|(_, o)| !o.is_clamped())
    }
    pub fn outcome(&self) -> Outcome {
        self.0
            .iter()
            .map(|(_, o)| *o)
            .fold(Outcome::Skipped, Outcome::and)
    }
}

/// Issues the actual tree-walk calls for paths and addresses.
///
/// Nothing here can fail: segments that do not apply are skipped and
/// boundaries clamp. The returned `Outcome`s say which happened.
pub struct Navigator<'tree, N>
where
    N: Navigate,
{
    tree: &'tree mut N,
}

impl<'tree, N> From<&'tree mut N> for Navigator<'tree, N>
where
    N: Navigate,
{
    fn from(tree: &'tree mut N) -> Self {
        Self { tree }
    }
}

impl<'tree, N> Navigator<'tree, N>
where
    N: Navigate,
{
    /// execute every segment in order
    pub fn walk(&mut self, path: &Path) -> Walk {
        Walk(path.into_iter().map(|s| (*s, self.step(*s))).collect())
    }

    /// execute one segment
    pub fn step(&mut self, segment: Segment) -> Outcome {
        let outcome = match segment {
            s if s.is_noop() => Outcome::Skipped,
            Segment {
                mode: Mode::Next,
                count,
            } => self.tree.advance(Stride::By(count)),
            Segment {
                mode: Mode::Branch,
                count,
            } => self.branch(count),
        };
        if !outcome.is_exact() {
            log::debug!("segment {} {:?}", segment, outcome);
        }
        outcome
    }

    /// enter the children of the cursor and pick the `count`-th (1-based)
    fn branch(&mut self, count: usize) -> Outcome {
        if self.tree.children(self.tree.current()).is_empty() {
            return Outcome::Skipped;
        }
        let offset = isize::try_from(count - 1).unwrap_or(isize::MAX);
        let entered = self.tree.advance(Stride::By(1));
        match self.tree.select(offset) {
            Outcome::Skipped => entered,
            selected => entered.and(selected),
        }
    }

    /// address of the node under the cursor
    pub fn address(&self) -> Address {
        Address::of(&*self.tree, self.tree.current())
    }

    /// best-effort return to a persisted address, starting from the root
    pub fn restore(&mut self, address: Address) -> Outcome {
        let root = self.tree.root();
        self.tree.focus(root);
        if address.is_root() {
            return Outcome::Exact;
        }
        let reached = match self.tree.advance(Stride::By(address.depth)) {
            Outcome::Skipped => Outcome::Exact,
            outcome => outcome,
        };
        let Some(parent) = self.tree.parent(self.tree.current()) else {
            log::debug!("address {} restored to the root", address);
            return Outcome::Clamped;
        };
        let siblings = self.tree.children(parent);
        let index = address.sibling.min(siblings.len()) - 1;
        self.tree.focus(siblings[index]);
        let selected = if index + 1 == address.sibling {
            Outcome::Exact
        } else {
            Outcome::Clamped
        };
        let outcome = reached.and(selected);
        if outcome.is_clamped() {
            log::debug!("address {} restored approximately", address);
        }
        outcome
    }
}
