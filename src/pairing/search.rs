use crate::pairing::rematch::RematchTable;

/// One level of the backtracking search: the lowest unmatched position and
/// the partner currently assigned to it.
#[derive(Debug, Clone)]
struct Frame {
    first: usize,
    /// Next candidate partner to try
    cursor: usize,
    partner: Option<usize>,
}

/// Lazy enumeration of perfect matchings over positions `0..size` that avoid
/// every pair in a [`RematchTable`].
///
/// The lowest unmatched position is fixed and paired with each legal partner in
/// ascending order, recursing on the rest. Each yielded partition lists pairs as
/// `(lower, higher)` in ascending order of the lower position. Iteration stops
/// after `cap` partitions even if more exist.
#[derive(Debug, Clone)]
pub struct PartitionSearch<'a> {
    rematches: &'a RematchTable,
    matched: Vec<bool>,
    frames: Vec<Frame>,
    cap: usize,
    yielded: usize,
    started: bool,
    exhausted: bool,
}

impl<'a> PartitionSearch<'a> {
    pub fn new(rematches: &'a RematchTable, cap: usize) -> Self {
        Self {
            rematches,
            matched: vec![false; rematches.size()],
            frames: Vec::new(),
            cap,
            yielded: 0,
            started: false,
            exhausted: false,
        }
    }

    /// Number of partitions yielded so far
    #[must_use]
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    #[must_use]
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// True once the cap stopped the enumeration before the search space was
    /// known to be exhausted
    #[must_use]
    pub fn cap_reached(&self) -> bool {
        self.yielded >= self.cap && !self.exhausted
    }

    /// Open a frame for the lowest unmatched position. Returns `false` when every
    /// position is matched.
    fn push_frame(&mut self) -> bool {
        match self.matched.iter().position(|&m| !m) {
            Some(first) => {
                self.matched[first] = true;
                self.frames.push(Frame {
                    first,
                    cursor: first + 1,
                    partner: None,
                });
                true
            }
            None => false,
        }
    }

    fn pop_frame(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.matched[frame.first] = false;
            if let Some(partner) = frame.partner {
                self.matched[partner] = false;
            }
        }
    }

    /// Move the top frame to its next legal partner. Returns `false` when it has
    /// none left.
    fn advance_top(&mut self) -> bool {
        let Some(top) = self.frames.len().checked_sub(1) else {
            return false;
        };
        let first = self.frames[top].first;
        if let Some(previous) = self.frames[top].partner.take() {
            self.matched[previous] = false;
        }

        let size = self.matched.len();
        let mut candidate = self.frames[top].cursor;
        while candidate < size {
            if !self.matched[candidate] && !self.rematches.contains(first, candidate) {
                self.matched[candidate] = true;
                self.frames[top].partner = Some(candidate);
                self.frames[top].cursor = candidate + 1;
                return true;
            }
            candidate += 1;
        }
        self.frames[top].cursor = size;
        false
    }

    fn current(&self) -> Vec<(usize, usize)> {
        self.frames
            .iter()
            .filter_map(|frame| frame.partner.map(|p| (frame.first, p)))
            .collect()
    }
}

impl Iterator for PartitionSearch<'_> {
    type Item = Vec<(usize, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.yielded >= self.cap {
            return None;
        }

        if !self.started {
            self.started = true;
            if !self.push_frame() {
                // Nothing to pair: the empty partition is the only one
                self.exhausted = true;
                self.yielded += 1;
                return Some(Vec::new());
            }
        }

        // Frames either start fresh or still hold the previously yielded partition
        while !self.frames.is_empty() {
            if self.advance_top() {
                if self.push_frame() {
                    continue;
                }
                self.yielded += 1;
                return Some(self.current());
            }
            self.pop_frame();
        }

        self.exhausted = true;
        None
    }
}

/// Sum of rank distances over a partition's pairs
#[must_use]
pub fn partition_cost(partition: &[(usize, usize)]) -> usize {
    partition.iter().map(|&(a, b)| a.abs_diff(b)).sum()
}
