use crate::*;
use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use petgraph::visit::Dfs;

/// what we store at each vertex of the arena.
/// the root carries no move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    play: Option<Move>,
    depth: usize,
}

/// the move tree is a wrapper around a petgraph StableDiGraph.
/// edges point from parent to child and carry no weight.
/// indices stay valid across cuts, so NodeIndex doubles as the
/// non-owning handle for both parent and child links.
///
/// the tree also owns the single cursor.
#[derive(Debug)]
pub struct MoveTree {
    graph: StableDiGraph<Vertex, ()>,
    root: NodeIndex,
    cursor: NodeIndex,
    size: Size,
}

impl MoveTree {
    pub fn size(&self) -> Size {
        self.size
    }
    /// get a Node by index
    pub fn node(&self, index: NodeIndex) -> Node<'_> {
        Node::from((index, &self.graph))
    }
    /// the Node under the cursor
    pub fn cursor(&self) -> Node<'_> {
        self.node(self.cursor)
    }
    /// number of Nodes including the root
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }
    /// true while only the root exists
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }

    /// enter a move below the cursor. an existing child with
    /// the same move is followed instead of duplicated.
    pub fn play(&mut self, play: Move) -> anyhow::Result<NodeIndex> {
        if let Some(point) = play.point {
            if !self.size.contains(&point) {
                return Err(anyhow::anyhow!("{} is off a {} board", point, self.size));
            }
        }
        let head = self.cursor;
        let existing = self.cursor().follow(&play).map(|n| n.index());
        let tail = match existing {
            Some(existing) => existing,
            None => {
                let depth = self.cursor().depth() + 1;
                let tail = self.graph.add_node(Vertex {
                    play: Some(play),
                    depth,
                });
                self.graph.add_edge(head, tail, ());
                tail
            }
        };
        self.cursor = tail;
        Ok(tail)
    }

    /// remove the cursor's subtree and step back to its parent.
    /// the root cannot be cut.
    pub fn cut(&mut self) -> Outcome {
        let Some(parent) = self.cursor().parent().map(|p| p.index()) else {
            return Outcome::Skipped;
        };
        let mut doomed = Vec::new();
        let mut dfs = Dfs::new(&self.graph, self.cursor);
        while let Some(index) = dfs.next(&self.graph) {
            doomed.push(index);
        }
        for index in doomed {
            self.graph.remove_node(index);
        }
        self.cursor = parent;
        Outcome::Exact
    }

    /// display the Tree in a human-readable format
    fn show(&self, f: &mut std::fmt::Formatter, x: NodeIndex, prefix: &str) -> std::fmt::Result {
        if x == self.root {
            writeln!(f, "ROOT")?;
        }
        let children = self.node(x).children();
        let n = children.len();
        for (i, child) in children.into_iter().enumerate() {
            let last = i == n - 1;
            let gaps = if last { "    " } else { "│   " };
            let stem = if last { "└" } else { "├" };
            let mark = if child.index() == self.cursor { " *" } else { "" };
            match child.play() {
                Some(play) => writeln!(f, "{}{}──{} {}{}", prefix, stem, child.depth(), play, mark)?,
                None => writeln!(f, "{}{}──{}{}", prefix, stem, child.depth(), mark)?,
            }
            self.show(f, child.index(), &format!("{}{}", prefix, gaps))?;
        }
        Ok(())
    }
}

impl From<Size> for MoveTree {
    fn from(size: Size) -> Self {
        let mut graph = StableDiGraph::default();
        let root = graph.add_node(Vertex {
            play: None,
            depth: 0,
        });
        Self {
            graph,
            root,
            cursor: root,
            size,
        }
    }
}

impl Default for MoveTree {
    fn default() -> Self {
        Self::from(Size::default())
    }
}

impl Navigate for MoveTree {
    type Id = NodeIndex;
    type Move = Move;

    fn root(&self) -> NodeIndex {
        self.root
    }
    fn current(&self) -> NodeIndex {
        self.cursor
    }
    fn focus(&mut self, id: NodeIndex) {
        if self.graph.contains_node(id) {
            self.cursor = id;
        } else {
            log::warn!("ignoring focus on missing node {}", id.index());
        }
    }
    // ids removed by a cut read as detached roots
    fn parent(&self, id: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .contains_node(id)
            .then(|| self.node(id).parent().map(|n| n.index()))
            .flatten()
    }
    fn children(&self, id: NodeIndex) -> Vec<NodeIndex> {
        match self.graph.contains_node(id) {
            true => self.node(id).children().iter().map(|n| n.index()).collect(),
            false => Vec::new(),
        }
    }
    fn depth(&self, id: NodeIndex) -> usize {
        self.graph
            .node_weight(id)
            .map(|v| v.depth)
            .unwrap_or_default()
    }
    fn move_at(&self, id: NodeIndex) -> Option<&Move> {
        self.graph.node_weight(id).and_then(|v| v.play.as_ref())
    }
}

impl std::fmt::Display for MoveTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.show(f, self.root, "")
    }
}

/// A Node is a wrapper around a NodeIndex and a &Graph.
/// because they are thin wrappers around an index, they're
/// cheap to Copy. holding reference to Graph is useful
/// for navigational methods.
#[derive(Debug, Clone, Copy)]
pub struct Node<'tree> {
    index: NodeIndex,
    graph: &'tree StableDiGraph<Vertex, ()>,
}

impl<'tree> From<(NodeIndex, &'tree StableDiGraph<Vertex, ()>)> for Node<'tree> {
    fn from((index, graph): (NodeIndex, &'tree StableDiGraph<Vertex, ()>)) -> Self {
        Self { index, graph }
    }
}

impl<'tree> Node<'tree> {
    fn spawn(&self, index: NodeIndex) -> Node<'tree> {
        Self::from((index, self.graph))
    }
    fn vertex(&self) -> &'tree Vertex {
        self.graph
            .node_weight(self.index)
            .expect("node index in tree")
    }
    pub fn index(&self) -> NodeIndex {
        self.index
    }
    pub fn play(&self) -> Option<&'tree Move> {
        self.vertex().play.as_ref()
    }
    /// move number; the root is 0
    pub fn depth(&self) -> usize {
        self.vertex().depth
    }
    pub fn parent(&self) -> Option<Node<'tree>> {
        self.graph
            .neighbors_directed(self.index, Incoming)
            .next()
            .map(|index| self.spawn(index))
    }
    /// children in variation order. petgraph yields
    /// outgoing neighbors newest first, so we reverse.
    pub fn children(&self) -> Vec<Node<'tree>> {
        let mut children = self
            .graph
            .neighbors_directed(self.index, Outgoing)
            .map(|index| self.spawn(index))
            .collect::<Vec<_>>();
        children.reverse();
        children
    }
    /// the child holding this move, if any
    pub fn follow(&self, play: &Move) -> Option<Node<'tree>> {
        self.children()
            .into_iter()
            .find(|child| child.play() == Some(play))
    }
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

impl std::fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "N{}", self.index().index())
    }
}
