use common::CodeError;

/// Array-backed binary min-heap.
///
/// Storage is 0-indexed, so `parent(i) = (i - 1) / 2` and the children of
/// `i` sit at `2i + 1` and `2i + 2`. The heap owns its items until
/// [`extract_min`](MinHeap::extract_min) moves them out. The item's `Ord`
/// is the single source of truth for priority, for code trees that is
/// (weight ascending, then representative symbol ascending).
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            items: Vec::with_capacity(capacity),
        }
    }

    /// bulk constructor, heapifies bottom-up over every non-leaf position in O(n)
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut heap = MinHeap { items };
        let num_items = heap.items.len();
        for pos in (0..num_items / 2).rev() {
            heap.percolate_down(pos);
        }
        debug_assert!(heap.is_valid());
        heap
    }

    /// adds an item and restores heap order by percolating it upward
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.percolate_up(self.items.len() - 1);
    }

    /// removes and returns the minimum item, moving the last element to the
    /// root and percolating it downward
    pub fn extract_min(&mut self) -> Result<T, CodeError> {
        if self.items.is_empty() {
            return Err(CodeError::EmptyQueue);
        }
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.percolate_down(0);
        }
        Ok(min)
    }

    pub fn peek_min(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// checks the heap order property on every position
    pub fn is_valid(&self) -> bool {
        for pos in 1..self.items.len() {
            if self.items[pos] < self.items[(pos - 1) / 2] {
                return false;
            }
        }
        true
    }

    fn percolate_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.items[pos] < self.items[parent] {
                self.items.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn percolate_down(&mut self, mut pos: usize) {
        loop {
            let left = 2 * pos + 1;
            if left >= self.items.len() {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < self.items.len() && self.items[right] < self.items[left] {
                child = right;
            }
            if self.items[child] < self.items[pos] {
                self.items.swap(pos, child);
                pos = child;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
