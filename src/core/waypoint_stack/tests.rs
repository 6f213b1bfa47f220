use super::*;
use approx::assert_relative_eq;

fn positions(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| Vec3::new(i as f32, (i % 3) as f32 * 0.5, -(i as f32) * 0.25))
        .collect()
}

#[test]
fn test_first_push_has_no_segment() {
    let mut stack = WaypointStack::new();
    let id = stack.push(Vec3::ZERO);

    assert_eq!(id, WaypointId(0));
    assert_eq!(stack.count(), 1);
    assert_eq!(stack.segment_count(), 0);
    assert!(stack.incoming_segment(id).is_none());
}

#[test]
fn test_second_push_spans_previous_waypoint() {
    let mut stack = WaypointStack::new();
    stack.push(Vec3::ZERO);
    let id = stack.push(Vec3::new(1.0, 0.0, 0.0));

    assert_eq!(stack.count(), 2);
    assert_eq!(stack.segment_count(), 1);

    let segment = stack.incoming_segment(id).expect("Segment erwartet");
    assert_eq!(segment.from, Vec3::ZERO);
    assert_eq!(segment.to, Vec3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(segment.length, 1.0);
    assert_eq!(segment.midpoint, Vec3::new(0.5, 0.0, 0.0));
}

#[test]
fn test_pop_returns_incoming_segment() {
    let mut stack = WaypointStack::new();
    stack.push(Vec3::ZERO);
    stack.push(Vec3::X);

    let popped = stack.pop().expect("Wegpunkt erwartet");
    assert_eq!(popped.waypoint.id, WaypointId(1));
    assert!(popped.segment.is_some());

    let first = stack.pop().expect("Wegpunkt erwartet");
    assert_eq!(first.waypoint.id, WaypointId(0));
    assert!(first.segment.is_none());
}

#[test]
fn test_pop_on_empty_is_idempotent() {
    let mut stack = WaypointStack::new();
    assert!(stack.pop().is_none());
    assert!(stack.pop().is_none());
    assert_eq!(stack.count(), 0);
}

#[test]
fn test_push_pop_sequences_keep_prefix_and_invariant() {
    for n in 0..8 {
        for m in 0..=n {
            let points = positions(n);
            let mut stack = WaypointStack::new();
            for p in &points {
                stack.push(*p);
                assert_eq!(stack.segment_count(), stack.count().saturating_sub(1));
            }
            for _ in 0..m {
                stack.pop();
                assert_eq!(stack.segment_count(), stack.count().saturating_sub(1));
            }

            assert_eq!(stack.count(), n - m);
            let remaining: Vec<Vec3> = stack.waypoints().iter().map(|w| w.position).collect();
            assert_eq!(remaining, points[..n - m].to_vec());
        }
    }
}

#[test]
fn test_segment_i_spans_neighbours_after_undo_and_repush() {
    let mut stack = WaypointStack::new();
    stack.push(Vec3::ZERO);
    stack.push(Vec3::X);
    stack.push(Vec3::Y);
    stack.pop();
    stack.push(Vec3::Z);

    for (id, segment) in stack.segments() {
        let previous = stack.get(WaypointId(id.0 - 1)).expect("Vorgänger");
        let current = stack.get(id).expect("Wegpunkt");
        assert_eq!(segment.from, previous.position);
        assert_eq!(segment.to, current.position);
    }
    assert_eq!(stack.peek_top().map(|w| w.position), Some(Vec3::Z));
}

#[test]
fn test_origin_label_only_on_first_waypoint() {
    let mut stack = WaypointStack::with_origin_label("Start");
    let first = stack.push(Vec3::ZERO);
    let second = stack.push(Vec3::X);

    assert_eq!(stack.get(first).and_then(|w| w.label.as_deref()), Some("Start"));
    assert!(stack.get(second).and_then(|w| w.label.as_deref()).is_none());

    stack.drain();
    let again = stack.push(Vec3::Y);
    assert_eq!(stack.get(again).and_then(|w| w.label.as_deref()), Some("Start"));
}

#[test]
fn test_anchor_index_follows_push_and_pop() {
    let mut stack = WaypointStack::new();
    let id = stack.push_anchored(Vec3::ZERO, AnchorId(10));
    stack.push_anchored(Vec3::X, AnchorId(11));

    assert!(stack.contains_anchor(AnchorId(10)));
    assert_eq!(stack.find_by_anchor(AnchorId(10)), Some(id));

    stack.pop();
    assert!(!stack.contains_anchor(AnchorId(11)));
    assert!(stack.contains_anchor(AnchorId(10)));
}

#[test]
fn test_duplicate_position_keeps_segment_count() {
    let mut stack = WaypointStack::new();
    stack.push(Vec3::ONE);
    let id = stack.push(Vec3::ONE);

    assert_eq!(stack.segment_count(), 1);
    assert!(stack.incoming_segment(id).expect("Segment").is_degenerate());
}

#[test]
fn test_drain_returns_pop_order() {
    let mut stack = WaypointStack::new();
    stack.push(Vec3::ZERO);
    stack.push(Vec3::X);
    stack.push(Vec3::Y);

    let drained: Vec<usize> = stack.drain().iter().map(|p| p.waypoint.id.0).collect();
    assert_eq!(drained, vec![2, 1, 0]);
    assert!(stack.is_empty());
}

#[test]
fn test_path_length_sums_segments() {
    let mut stack = WaypointStack::new();
    stack.push(Vec3::ZERO);
    stack.push(Vec3::new(3.0, 0.0, 0.0));
    stack.push(Vec3::new(3.0, 4.0, 0.0));

    assert_relative_eq!(stack.path_length(), 7.0);
}
