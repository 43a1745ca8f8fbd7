//! Lazy swap-order permutations.

/// Iterator over all permutations of `0..n`, in the same order the
/// in-place swap recursion of [`BruteForceRunner`](super::BruteForceRunner)
/// visits them.
///
/// The recursion stack is kept explicitly: `frames[l]` is the position
/// currently swapped into slot `l`. Yields `n!` items for `n >= 1`, none
/// for `n == 0`, and cannot be restarted.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::search::SwapPermutations;
///
/// let perms: Vec<Vec<usize>> = SwapPermutations::new(3).collect();
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec![0, 1, 2]);
/// assert_eq!(perms[1], vec![0, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct SwapPermutations {
    order: Vec<usize>,
    frames: Vec<usize>,
    started: bool,
    done: bool,
}

impl SwapPermutations {
    pub fn new(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
            frames: Vec::with_capacity(n.saturating_sub(1)),
            started: false,
            done: n == 0,
        }
    }

    fn leaf_depth(&self) -> usize {
        self.order.len() - 1
    }

    /// Pushes identity frames until a full permutation is fixed.
    fn descend(&mut self) {
        while self.frames.len() < self.leaf_depth() {
            let depth = self.frames.len();
            self.frames.push(depth);
        }
    }
}

impl Iterator for SwapPermutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            self.descend();
            return Some(self.order.clone());
        }

        while let Some(i) = self.frames.pop() {
            let depth = self.frames.len();
            self.order.swap(depth, i);

            if i + 1 < self.order.len() {
                let next = i + 1;
                self.order.swap(depth, next);
                self.frames.push(next);
                self.descend();
                return Some(self.order.clone());
            }
        }

        self.done = true;
        None
    }
}
