use towerpath_core::{Move, Point, Range};

/// Sentinel cost meaning "not reached" in search cost tables.
pub const UNREACHABLE: i32 = i32::MAX;

/// A minimum-damage path from the start corner to the goal corner.
///
/// `moves` is empty both for the trivial 1×1 instance (where `damage` is 0)
/// and never for anything else: an unreachable goal yields no `Route` at all.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub moves: Vec<Move>,
    pub damage: i32,
}

// ---------------------------------------------------------------------------
// Internal node state for the A* search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    /// Best known cumulative damage to reach this cell.
    pub(crate) g: i32,
    /// Flat index of the predecessor cell, `usize::MAX` for the start.
    pub(crate) parent: usize,
    /// Move taken from the predecessor; `None` only for the start.
    pub(crate) step: Option<Move>,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: usize::MAX,
            step: None,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry, ordered ascending by `(f, g, row, col)`.
///
/// Since cells are indexed row-major, comparing the flat index is exactly the
/// `(row, col)` comparison; the full key makes pop order a deterministic
/// total order, so equal-cost instances always reproduce the same path.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct HeapEntry {
    pub(crate) f: i32,
    pub(crate) g: i32,
    pub(crate) idx: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest key first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Coordinator for searches over `n × n` grids.
///
/// `Search` owns the node array, the BFS queue and the visited markers, so a
/// batch run can solve many instances while reusing one allocation. Stale
/// node state is invalidated lazily by bumping a generation counter rather
/// than clearing the arrays.
pub struct Search {
    pub(crate) size: i32,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) bfs_seen: Vec<bool>,
    pub(crate) bfs_queue: std::collections::VecDeque<usize>,
}

impl Search {
    /// Create a search coordinator for `size × size` grids.
    pub fn new(size: i32) -> Self {
        let w = size.max(0) as usize;
        Self {
            size,
            width: w,
            nodes: vec![Node::default(); w * w],
            generation: 0,
            bfs_seen: vec![false; w * w],
            bfs_queue: std::collections::VecDeque::new(),
        }
    }

    /// Adapt the coordinator to a new grid size.
    ///
    /// If the new size fits within existing capacity, buffers are kept and
    /// only the generation counter is bumped so stale entries are ignored.
    /// Otherwise the buffers are reallocated.
    pub fn set_size(&mut self, size: i32) {
        let w = size.max(0) as usize;
        let new_len = w * w;
        self.size = size;
        self.width = w;

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
        self.bfs_seen.clear();
        self.bfs_seen.resize(new_len, false);
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.size, self.size)
    }

    /// The goal corner for the current size.
    #[inline]
    pub(crate) fn goal(&self) -> Point {
        Point::new(self.size - 1, self.size - 1)
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some((p.y as usize) * self.width + (p.x as usize))
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Search {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.size.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Search {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let size = i32::deserialize(deserializer)?;
        Ok(Search::new(size))
    }
}
