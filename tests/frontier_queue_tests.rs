use ordered_float::OrderedFloat;
use road_graph::data_structures::FrontierQueue;

#[test]
fn test_frontier_pops_lowest_priority_first() {
    let mut queue: FrontierQueue<usize, OrderedFloat<f64>> = FrontierQueue::with_capacity(4);
    queue.push(1, OrderedFloat(10.0));
    queue.push(2, OrderedFloat(5.0));
    // better priority for an item already queued
    queue.push(1, OrderedFloat(3.0));

    assert_eq!(queue.pop(), Some((1, OrderedFloat(3.0))));
    assert_eq!(queue.pop(), Some((2, OrderedFloat(5.0))));
    // stale entry is still there for the caller to skip
    assert_eq!(queue.pop(), Some((1, OrderedFloat(10.0))));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_frontier_breaks_ties_by_item() {
    let mut queue: FrontierQueue<usize, OrderedFloat<f64>> = FrontierQueue::new();
    queue.push(7, OrderedFloat(1.0));
    queue.push(3, OrderedFloat(1.0));
    queue.push(5, OrderedFloat(1.0));

    let order: Vec<usize> = std::iter::from_fn(|| queue.pop().map(|(item, _)| item)).collect();
    assert_eq!(order, vec![3, 5, 7]);
}
