//! Binary heap priority queue
//!
//! One generic engine covers both orderings: the min/max distinction is a
//! zero-sized [`HeapOrder`] strategy type, so [`MinHeap`] and [`MaxHeap`]
//! share every line of structural logic and differ only in the comparison
//! direction. Storage is a complete binary tree in a dense zero-indexed
//! `Vec`: parent at `(i - 1) / 2`, children at `2i + 1` and `2i + 2`.

use std::marker::PhantomData;

/// One `(item, value)` entry in the heap
#[derive(Debug, Clone, PartialEq)]
pub struct HeapEntry<T> {
    pub item: T,
    pub value: f64,
}

/// Comparison direction for a heap ordering
pub trait HeapOrder {
    /// Whether an entry with value `a` belongs above one with value `b`
    fn precedes(a: f64, b: f64) -> bool;
}

/// Smallest value on top
#[derive(Debug)]
pub enum MinOrder {}

impl HeapOrder for MinOrder {
    fn precedes(a: f64, b: f64) -> bool {
        a < b
    }
}

/// Largest value on top
#[derive(Debug)]
pub enum MaxOrder {}

impl HeapOrder for MaxOrder {
    fn precedes(a: f64, b: f64) -> bool {
        a > b
    }
}

/// Binary heap over `(item, value)` entries
///
/// Duplicate entries for one item may coexist; consumers relying on lazy
/// deletion treat whichever entry pops first as authoritative.
#[derive(Debug)]
pub struct Heap<T, O: HeapOrder> {
    elements: Vec<HeapEntry<T>>,
    _order: PhantomData<O>,
}

pub type MinHeap<T> = Heap<T, MinOrder>;
pub type MaxHeap<T> = Heap<T, MaxOrder>;

impl<T, O: HeapOrder> Default for Heap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O: HeapOrder> Heap<T, O> {
    pub fn new() -> Self {
        Heap {
            elements: Vec::new(),
            _order: PhantomData,
        }
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Top entry without removing it; `None` on an empty heap
    pub fn peek(&self) -> Option<&HeapEntry<T>> {
        self.elements.first()
    }

    /// Remove and return the top entry; `None` on an empty heap
    pub fn pop(&mut self) -> Option<HeapEntry<T>> {
        if self.elements.is_empty() {
            return None;
        }

        // swap_remove replaces the root with the last element
        let top = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.heapify_down(0);
        }
        Some(top)
    }

    /// Append a new entry and restore ordering upward
    pub fn insert(&mut self, item: T, value: f64) {
        self.elements.push(HeapEntry { item, value });
        self.heapify_up(self.elements.len() - 1);
    }

    /// Update the value at an internal position and restore ordering
    ///
    /// Moves the entry up when the new value strengthens its priority,
    /// down otherwise. Silently does nothing when `index` is out of range.
    pub fn change_key(&mut self, index: usize, new_value: f64) {
        let Some(entry) = self.elements.get_mut(index) else {
            return;
        };

        let current = entry.value;
        entry.value = new_value;

        if O::precedes(new_value, current) {
            self.heapify_up(index);
        } else {
            self.heapify_down(index);
        }
    }

    /// Read-only view of the backing storage, in tree order
    pub fn entries(&self) -> &[HeapEntry<T>] {
        &self.elements
    }

    /// Parent-to-child index pairs of the implicit tree
    ///
    /// Structural export for presentation layers that lay the heap out as
    /// a tree; indices address into [`Heap::entries`].
    pub fn tree_edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for index in 0..self.elements.len() {
            if let Some(left) = self.left_index(index) {
                edges.push((index, left));
            }
            if let Some(right) = self.right_index(index) {
                edges.push((index, right));
            }
        }
        edges
    }

    fn parent_index(&self, index: usize) -> Option<usize> {
        if index == 0 {
            None
        } else {
            Some((index - 1) / 2)
        }
    }

    fn left_index(&self, index: usize) -> Option<usize> {
        let left = 2 * index + 1;
        (left < self.elements.len()).then_some(left)
    }

    fn right_index(&self, index: usize) -> Option<usize> {
        let right = 2 * index + 2;
        (right < self.elements.len()).then_some(right)
    }

    /// Swap with the parent until the heap property holds
    fn heapify_up(&mut self, mut index: usize) {
        while let Some(parent) = self.parent_index(index) {
            if !O::precedes(self.elements[index].value, self.elements[parent].value) {
                break;
            }
            self.elements.swap(index, parent);
            index = parent;
        }
    }

    /// Swap with the more extreme child until the heap property holds
    fn heapify_down(&mut self, mut index: usize) {
        loop {
            let mut extreme = index;

            if let Some(left) = self.left_index(index) {
                if O::precedes(self.elements[left].value, self.elements[extreme].value) {
                    extreme = left;
                }
            }
            if let Some(right) = self.right_index(index) {
                if O::precedes(self.elements[right].value, self.elements[extreme].value) {
                    extreme = right;
                }
            }

            if extreme == index {
                break;
            }
            self.elements.swap(index, extreme);
            index = extreme;
        }
    }
}

#[cfg(test)]
mod tests;
