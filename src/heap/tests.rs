use super::*;

/// Assert the heap property for every non-root element
fn assert_heap_property<T, O: HeapOrder>(heap: &Heap<T, O>) {
    let entries = heap.entries();
    for index in 1..entries.len() {
        let parent = (index - 1) / 2;
        assert!(
            !O::precedes(entries[index].value, entries[parent].value),
            "entry at {} (value {}) outranks its parent at {} (value {})",
            index,
            entries[index].value,
            parent,
            entries[parent].value,
        );
    }
}

#[test]
fn test_empty_heap() {
    let mut heap: MinHeap<u64> = MinHeap::new();
    assert_eq!(heap.size(), 0);
    assert!(heap.is_empty());
    assert!(heap.peek().is_none());
    assert!(heap.pop().is_none());
}

#[test]
fn test_min_heap_pop_order() {
    let mut heap: MinHeap<&str> = MinHeap::new();
    heap.insert("c", 3.0);
    heap.insert("a", 1.0);
    heap.insert("d", 4.0);
    heap.insert("b", 2.0);

    let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|e| e.item)).collect();
    assert_eq!(order, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_max_heap_pop_order() {
    let mut heap: MaxHeap<&str> = MaxHeap::new();
    heap.insert("c", 3.0);
    heap.insert("a", 1.0);
    heap.insert("d", 4.0);
    heap.insert("b", 2.0);

    let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|e| e.item)).collect();
    assert_eq!(order, vec!["d", "c", "b", "a"]);
}

#[test]
fn test_peek_does_not_remove() {
    let mut heap: MinHeap<u64> = MinHeap::new();
    heap.insert(7, 0.5);

    assert_eq!(heap.peek().map(|e| e.item), Some(7));
    assert_eq!(heap.size(), 1);
}

#[test]
fn test_single_element_pop_empties() {
    let mut heap: MinHeap<u64> = MinHeap::new();
    heap.insert(1, 1.0);

    let entry = heap.pop().unwrap();
    assert_eq!(entry.item, 1);
    assert_eq!(entry.value, 1.0);
    assert!(heap.is_empty());
}

#[test]
fn test_property_after_mixed_operations() {
    let mut heap: MinHeap<u64> = MinHeap::new();
    let values = [5.0, 3.0, 8.0, 1.0, 9.0, 2.0, 7.0, 4.0, 6.0, 0.0];
    for (item, &value) in values.iter().enumerate() {
        heap.insert(item as u64, value);
        assert_heap_property(&heap);
    }

    heap.pop();
    heap.pop();
    assert_heap_property(&heap);

    heap.insert(100, 0.5);
    heap.change_key(4, 10.0);
    heap.change_key(6, -1.0);
    assert_heap_property(&heap);

    let mut last = f64::NEG_INFINITY;
    while let Some(entry) = heap.pop() {
        assert!(entry.value >= last);
        last = entry.value;
        assert_heap_property(&heap);
    }
}

#[test]
fn test_change_key_moves_up() {
    let mut heap: MinHeap<&str> = MinHeap::new();
    heap.insert("a", 1.0);
    heap.insert("b", 2.0);
    heap.insert("c", 3.0);

    // Strengthen the last entry past the root
    heap.change_key(2, 0.1);
    assert_heap_property(&heap);
    assert_eq!(heap.peek().map(|e| e.item), Some("c"));
}

#[test]
fn test_change_key_moves_down() {
    let mut heap: MinHeap<&str> = MinHeap::new();
    heap.insert("a", 1.0);
    heap.insert("b", 2.0);
    heap.insert("c", 3.0);

    // Weaken the root below both children
    heap.change_key(0, 9.0);
    assert_heap_property(&heap);
    assert_ne!(heap.peek().map(|e| e.item), Some("a"));
}

#[test]
fn test_change_key_out_of_range_is_noop() {
    let mut heap: MinHeap<u64> = MinHeap::new();
    heap.change_key(0, 1.0);
    assert!(heap.is_empty());

    heap.insert(1, 1.0);
    heap.change_key(5, 0.0);
    assert_eq!(heap.size(), 1);
    assert_eq!(heap.peek().map(|e| e.value), Some(1.0));
}

#[test]
fn test_duplicate_items_coexist() {
    let mut heap: MinHeap<u64> = MinHeap::new();
    heap.insert(1, 5.0);
    heap.insert(1, 2.0);
    heap.insert(1, 8.0);

    assert_eq!(heap.size(), 3);
    // The strongest entry for the item pops first
    assert_eq!(heap.pop().map(|e| e.value), Some(2.0));
    assert_eq!(heap.size(), 2);
}

#[test]
fn test_tree_edges_export() {
    let mut heap: MinHeap<u64> = MinHeap::new();
    for i in 0..5 {
        heap.insert(i, i as f64);
    }

    // Complete tree over 5 entries: 0->{1,2}, 1->{3,4}
    assert_eq!(heap.tree_edges(), vec![(0, 1), (0, 2), (1, 3), (1, 4)]);
}

#[test]
fn test_tree_edges_empty() {
    let heap: MinHeap<u64> = MinHeap::new();
    assert!(heap.tree_edges().is_empty());
}
