/// Union-find over grid cells, used to grow the maze as a random spanning tree.
///
/// Indices outside `0..len()` are a programming error and panic.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    /// Number of distinct components remaining
    count: usize,
}

impl DisjointSet {
    /// Creates `size` singleton components, each cell its own root.
    pub fn new(size: usize) -> Self {
        DisjointSet {
            parent: (0..size).collect(),
            rank: vec![0; size],
            count: size,
        }
    }

    /// Returns the representative of the component containing `cell`.
    /// Every cell on the way up is re-pointed straight at the root.
    pub fn find(&mut self, cell: usize) -> usize {
        let mut root = cell;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = cell;
        while current != root {
            current = std::mem::replace(&mut self.parent[current], root);
        }
        root
    }

    /// Merges the components containing `a` and `b`.
    ///
    /// Returns `false` without touching anything if they are already in the
    /// same component, since joining them would close a cycle.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }

        // Hang the shallower tree under the deeper one
        let (parent, child) = if self.rank[root_a] >= self.rank[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[child] = parent;
        if self.rank[parent] == self.rank[child] {
            self.rank[parent] = self.rank[parent].saturating_add(1);
        }
        self.count -= 1;
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of distinct components remaining.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of elements tracked.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
