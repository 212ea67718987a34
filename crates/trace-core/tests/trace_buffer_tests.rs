// Host-side tests for bounded trace buffers.

use glam::DVec2;
use trace_core::*;

#[test]
fn keeps_last_capacity_points_in_order() {
    let mut buf = TraceBuffer::new(3).unwrap();
    for i in 1..=4 {
        buf.append(DVec2::splat(i as f64));
    }
    assert_eq!(
        buf.as_sequence(),
        vec![DVec2::splat(2.0), DVec2::splat(3.0), DVec2::splat(4.0)]
    );
}

#[test]
fn overflow_by_k_leaves_exactly_capacity() {
    let capacity = 50;
    for k in [1usize, 2, 49, 50, 51, 500] {
        let mut buf = TraceBuffer::new(capacity).unwrap();
        let total = capacity + k;
        for i in 0..total {
            buf.append(DVec2::new(i as f64, -(i as f64)));
        }
        assert_eq!(buf.len(), capacity);
        let expected: Vec<DVec2> = (k..total)
            .map(|i| DVec2::new(i as f64, -(i as f64)))
            .collect();
        assert_eq!(buf.as_sequence(), expected, "k={k}");
    }
}

#[test]
fn clear_empties_any_state() {
    let mut buf = TraceBuffer::new(2).unwrap();
    buf.clear();
    assert!(buf.as_sequence().is_empty());

    buf.append(DVec2::X);
    buf.append(DVec2::Y);
    buf.append(DVec2::ONE);
    buf.clear();
    assert!(buf.is_empty());
    assert!(buf.as_sequence().is_empty());
    assert_eq!(buf.capacity(), 2);

    buf.append(DVec2::ZERO);
    assert_eq!(buf.len(), 1);
}

#[test]
fn zero_capacity_is_invalid() {
    assert!(matches!(
        TraceBuffer::<DVec2>::new(0),
        Err(TraceError::InvalidConfiguration(_))
    ));
}

#[test]
fn negative_requested_capacity_is_invalid() {
    for requested in [0i64, -1, -2000, i64::MIN] {
        assert!(matches!(
            TraceBuffer::<DVec2>::with_requested_capacity(requested),
            Err(TraceError::InvalidConfiguration(_))
        ));
    }
    let buf = TraceBuffer::<DVec2>::with_requested_capacity(2000).unwrap();
    assert_eq!(buf.capacity(), 2000);
}

#[test]
fn huge_requested_capacity_is_accepted_lazily() {
    let mut buf = TraceBuffer::<DVec2>::with_requested_capacity(i64::MAX).unwrap();
    assert_eq!(buf.capacity() as u64, i64::MAX as u64);
    buf.extend((0..5).map(|i| DVec2::splat(i as f64)));
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.oldest(), Some(&DVec2::ZERO));

    let buf = TraceBuffer::<DVec2>::new(usize::MAX).unwrap();
    assert!(buf.is_empty());
}

#[test]
fn snapshot_is_isolated_from_buffer() {
    let mut buf = TraceBuffer::new(3).unwrap();
    buf.append(DVec2::ONE);
    let mut snapshot = buf.as_sequence();
    snapshot.push(DVec2::ZERO);
    snapshot[0] = DVec2::NEG_ONE;
    assert_eq!(buf.as_sequence(), vec![DVec2::ONE]);

    buf.append(DVec2::X);
    assert_eq!(snapshot.len(), 2);
}

#[test]
fn iter_runs_oldest_to_newest() {
    let mut buf = TraceBuffer::new(5).unwrap();
    buf.extend([1, 2, 3]);
    let seen: Vec<i32> = buf.iter().copied().collect();
    assert_eq!(seen, vec![1, 2, 3]);
    let rev: Vec<i32> = (&buf).into_iter().rev().copied().collect();
    assert_eq!(rev, vec![3, 2, 1]);
}

#[test]
fn error_message_names_the_problem() {
    let err = TraceBuffer::<f64>::new(0).unwrap_err();
    assert!(err.to_string().contains("capacity"));
}
