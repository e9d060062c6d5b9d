/// Whether a segment walks down the current line or picks a variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Next,
    Branch,
}

/// One navigation instruction parsed from a path string.
///
/// A zero count is a valid segment that does nothing when executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub mode: Mode,
    pub count: usize,
}

impl Segment {
    pub fn next(count: usize) -> Self {
        Self {
            mode: Mode::Next,
            count,
        }
    }
    pub fn branch(count: usize) -> Self {
        Self {
            mode: Mode::Branch,
            count,
        }
    }
    pub fn is_noop(&self) -> bool {
        self.count == 0
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mode {
            Mode::Next => write!(f, "{}{}", Path::NEXT, self.count),
            Mode::Branch => write!(f, "{}{}", Path::BRANCH, self.count),
        }
    }
}

/// A deep link into a move tree, written as a short string.
///
/// # Grammar
///
/// Case-insensitive. The string is split on runs of `N` into groups, each
/// group on runs of `B` into subgroups, and each subgroup on runs of
/// non-digits into counts. The first subgroup of a group is in Next mode,
/// every later one in Branch mode.
///
/// | input     | segments                      |
/// |-----------|-------------------------------|
/// | `3`       | next 3                        |
/// | `3B2`     | next 3, branch 2              |
/// | `5N2B1`   | next 5, next 2, branch 1      |
/// | `1,2 B 3` | next 1, next 2, branch 3      |
///
/// Parsing cannot fail. Characters outside the grammar only separate
/// counts, so a broken link navigates less far instead of erroring.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<Segment>);

impl Path {
    const NEXT: char = 'N';
    const BRANCH: char = 'B';

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digit runs of a subgroup, saturating on overflow.
    fn counts(subgroup: &str) -> impl Iterator<Item = usize> + '_ {
        subgroup
            .split(|c: char| !c.is_ascii_digit())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .bytes()
                    .map(|b| (b - b'0') as usize)
                    .fold(0usize, |n, d| n.saturating_mul(10).saturating_add(d))
            })
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        s.split(|c: char| c.eq_ignore_ascii_case(&Self::NEXT))
            .flat_map(|group| {
                group
                    .split(|c: char| c.eq_ignore_ascii_case(&Self::BRANCH))
                    .enumerate()
                    .flat_map(|(i, subgroup)| {
                        let mode = if i == 0 { Mode::Next } else { Mode::Branch };
                        Self::counts(subgroup).map(move |count| Segment { mode, count })
                    })
            })
            .collect()
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl From<Path> for Vec<Segment> {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl std::iter::FromIterator<Segment> for Path {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Segment>,
    {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// canonical form: the leading N is implied
impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match (i, segment.mode) {
                (0, Mode::Next) => write!(f, "{}", segment.count)?,
                _ => write!(f, "{}", segment)?,
            }
        }
        Ok(())
    }
}
