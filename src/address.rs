use crate::*;

/// A compact, persistable fingerprint of a cursor position.
///
/// `depth` is the move number of the node and `sibling` its 1-based
/// position among its parent's children, with `0` reserved for the root.
/// Written as `"<depth>,<sibling>"`, e.g. `"4,2"`; the root is `"0,0"`.
///
/// # Ambiguity
///
/// Only the last branch choice is remembered. Restoring walks the main line
/// down to `depth` and then picks the sibling there, so a node that sits
/// below more than one variation point comes back as a different node on
/// the main line's side of the earlier branches. This is the persisted
/// format hosts already store, so it is kept as is.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    pub depth: usize,
    pub sibling: usize,
}

impl Address {
    const SEPARATOR: char = ',';

    pub fn root() -> Self {
        Self::default()
    }
    pub fn is_root(&self) -> bool {
        self.sibling == 0
    }

    /// Fingerprint a node of any navigable tree.
    ///
    /// Siblings are matched by move value, so if the same move appears twice
    /// among a parent's children the first one wins.
    pub fn of<N>(tree: &N, id: N::Id) -> Self
    where
        N: Navigate,
    {
        let depth = tree.depth(id);
        let Some(parent) = tree.parent(id).filter(|_| depth > 0) else {
            return Self::root();
        };
        let held = tree.move_at(id);
        let sibling = tree
            .children(parent)
            .into_iter()
            .position(|child| tree.move_at(child) == held)
            .map(|i| i + 1)
            .unwrap_or(1);
        Self { depth, sibling }
    }
}

impl From<(usize, usize)> for Address {
    fn from((depth, sibling): (usize, usize)) -> Self {
        Self { depth, sibling }
    }
}

impl TryFrom<&str> for Address {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (depth, sibling) = s
            .trim()
            .split_once(Self::SEPARATOR)
            .ok_or_else(|| anyhow::anyhow!("missing '{}' in address: {:?}", Self::SEPARATOR, s))?;
        let depth = depth
            .trim()
            .parse::<usize>()
            .map_err(|e| anyhow::anyhow!("invalid address depth {:?}: {}", depth, e))?;
        let sibling = sibling
            .trim()
            .parse::<usize>()
            .map_err(|e| anyhow::anyhow!("invalid address sibling {:?}: {}", sibling, e))?;
        Ok(Self { depth, sibling })
    }
}

impl std::str::FromStr for Address {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.depth, Self::SEPARATOR, self.sibling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_address() {
        assert_eq!(Address::try_from("4,2").unwrap(), Address::from((4, 2)));
        assert_eq!(Address::try_from(" 4 , 2 ").unwrap(), Address::from((4, 2)));
        assert_eq!("0,0".parse::<Address>().unwrap(), Address::root());
    }

    #[test]
    fn reject_malformed_address() {
        assert!(Address::try_from("4").is_err());
        assert!(Address::try_from("a,b").is_err());
        assert!(Address::try_from("").is_err());
        assert!(Address::try_from("-1,2").is_err());
        assert!(Address::try_from("1,2,3").is_err());
    }

    #[test]
    fn display_address() {
        assert_eq!(Address::from((4, 2)).to_string(), "4,2");
        assert_eq!(Address::root().to_string(), "0,0");
    }

    #[test]
    fn root_address() {
        let tree = MoveTree::default();
        assert_eq!(Address::of(&tree, tree.root()), Address::root());
    }

    #[test]
    fn sibling_is_one_based() {
        let mut tree = MoveTree::default();
        tree.play(Move::stone(Color::Black, 4, 4)).unwrap();
        tree.play(Move::stone(Color::White, 16, 16)).unwrap();
        tree.retreat(Stride::By(1));
        let second = tree.play(Move::stone(Color::White, 16, 4)).unwrap();
        assert_eq!(Address::of(&tree, second), Address::from((2, 2)));
        let first = tree.children(tree.parent(second).unwrap())[0];
        assert_eq!(Address::of(&tree, first), Address::from((2, 1)));
    }

    #[test]
    fn sibling_matches_by_move() {
        let mut tree = MoveTree::default();
        let main = tree.play(Move::stone(Color::Black, 3, 3)).unwrap();
        assert_eq!(Address::of(&tree, main), Address::from((1, 1)));
        tree.retreat(Stride::Full);
        let pass = tree.play(Move::pass(Color::Black)).unwrap();
        assert_eq!(Address::of(&tree, pass), Address::from((1, 2)));
    }
}
