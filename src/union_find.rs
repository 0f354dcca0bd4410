/// Union find over observations where every merge creates a new cluster label, as in a
/// dendrogram. Each label remembers the smallest observation it contains, which is the index
/// reported for that cluster in linkages.
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    next_label: usize,
    representative: Vec<usize>,
}

impl UnionFind {
    pub(crate) fn new(n_samples: usize) -> Self {
        let length = (2 * n_samples).saturating_sub(1);
        let parent = vec![length; length];
        let next_label = n_samples;
        let representative = (0..length).collect();

        UnionFind {
            parent,
            next_label,
            representative,
        }
    }

    pub(crate) fn union(&mut self, m: usize, n: usize) {
        self.parent[m] = self.next_label;
        self.parent[n] = self.next_label;
        self.representative[self.next_label] = self.representative[m].min(self.representative[n]);
        self.next_label += 1;
    }

    pub(crate) fn find(&mut self, mut n: usize) -> usize {
        let root_marker = self.parent.len();
        let mut p = n;
        while self.parent[n] != root_marker {
            n = self.parent[n];
        }
        // Point everything on the path straight at the root
        while p != n {
            let next = self.parent[p];
            self.parent[p] = n;
            p = next;
        }
        n
    }

    pub(crate) fn representative_of(&self, label: usize) -> usize {
        self.representative[label]
    }
}
