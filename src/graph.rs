use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::board::{Board, BoundaryId};
use crate::location::Point;

/// The drawn lines of a board as an undirected graph over lattice points. Crosses are ignored.
///
/// Rebuilt from the board whenever it is needed and never stored alongside it.
#[derive(Clone)]
pub struct LoopGraph {
    graph: UnGraphMap<Point, BoundaryId>,
}

impl From<&Board> for LoopGraph {
    fn from(board: &Board) -> Self {
        let mut graph = UnGraphMap::new();
        for id in board.lines() {
            let UnorderedPair(a, b) = board.endpoints(id);
            graph.add_edge(a, b, id);
        }

        Self { graph }
    }
}

impl LoopGraph {
    /// Number of drawn segments.
    pub fn segment_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn degree(&self, point: Point) -> usize {
        self.graph.neighbors(point).count()
    }

    /// Segments touching a lattice point where three or more lines meet, sorted.
    pub fn branching_segments(&self) -> Vec<BoundaryId> {
        self.graph.nodes()
            .filter(|point| self.degree(*point) > 2)
            .flat_map(|point| self.graph.edges(point).map(|(_, _, id)| *id))
            .sorted()
            .dedup()
            .collect_vec()
    }

    /// Whether the lines form exactly one closed loop without branches or loose ends.
    ///
    /// The loop is walked segment by segment, consuming each one. The first segment must touch exactly two others,
    /// one at each end, and every later segment exactly one more, the one it was reached from being gone already.
    /// A second loop is never reached by the walk, so it shows up as a segment with nothing left to connect to.
    pub fn is_single_loop(&self) -> bool {
        if self.graph.nodes().any(|point| self.degree(point) != 2) {
            return false;
        }

        let mut remaining = self.graph.clone();
        let Some((mut a, mut b)) = remaining.all_edges().next().map(|(a, b, _)| (a, b)) else {
            return false;
        };

        let mut expected = 2;
        while remaining.edge_count() > 1 {
            remaining.remove_edge(a, b);
            let connected = remaining.edges(a)
                .chain(remaining.edges(b))
                .map(|(n1, n2, _)| (n1, n2))
                .collect_vec();
            if connected.len() != expected {
                return false;
            }

            (a, b) = connected[0];
            expected = 1;
        }

        true
    }
}
