//! Integration tests for list-of-lists storage
//!
//! Exercises the public API end to end: point access and mutation with
//! cascading prune, structural equality across differently-materialized
//! storages, counting, and conversions to and from dense and
//! compressed-row representations.

use lilr::prelude::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_unwritten_coordinates_read_default() {
    let s = ListStorage::<f64>::new([2, 3, 4], 1.5).unwrap();
    for i in 0..2 {
        for j in 0..3 {
            for k in 0..4 {
                assert_eq!(*s.get(&[i, j, k]).unwrap(), 1.5);
            }
        }
    }
    assert_eq!(s.count_stored(), 0);
}

#[test]
fn test_insert_get_remove_round_trip() {
    let mut s = ListStorage::<i64>::zeros([4, 4]).unwrap();
    let coords = [[0usize, 3], [2, 1], [3, 3], [1, 0]];
    for (n, c) in coords.iter().enumerate() {
        s.insert(c, n as i64 + 10).unwrap();
    }
    for (n, c) in coords.iter().enumerate() {
        assert_eq!(*s.get(c).unwrap(), n as i64 + 10);
    }
    for c in &coords {
        assert!(s.remove(c).unwrap().is_some());
    }
    assert!(s.is_empty());
    for c in &coords {
        assert_eq!(*s.get(c).unwrap(), 0);
    }
}

#[test]
fn test_remove_leaves_no_dangling_sublists() {
    let mut s = ListStorage::<f64>::zeros([5, 5, 5]).unwrap();
    let before = s.count_stored();
    s.insert(&[4, 4, 4], 1.0).unwrap();
    s.insert(&[4, 4, 0], 2.0).unwrap();
    s.remove(&[4, 4, 4]).unwrap();
    s.remove(&[4, 4, 0]).unwrap();
    assert_eq!(s.count_stored(), before);
    // structurally identical to a fresh storage, not just countwise
    let fresh = ListStorage::<f64>::zeros([5, 5, 5]).unwrap();
    assert!(s.content_eq(&fresh).unwrap());
    assert!(s.is_empty());
}

#[test]
fn test_count_stored_tracks_materialized_leaves() {
    let mut s = ListStorage::<f32>::zeros([3, 3]).unwrap();
    assert_eq!(s.count_stored(), 0);
    s.insert(&[0, 0], 5.0).unwrap();
    s.insert(&[1, 2], 7.0).unwrap();
    s.insert(&[1, 2], 8.0).unwrap(); // replacement, not growth
    assert_eq!(s.count_stored(), 2);
    s.insert(&[2, 2], 0.0).unwrap(); // explicit default still counts
    assert_eq!(s.count_stored(), 3);
}

#[test]
fn test_spec_scenario_rank_2() {
    let mut s = ListStorage::<i32>::zeros([3, 3]).unwrap();
    s.insert(&[0, 0], 5).unwrap();
    s.insert(&[1, 2], 7).unwrap();

    assert_eq!(*s.get(&[0, 0]).unwrap(), 5);
    assert_eq!(*s.get(&[1, 2]).unwrap(), 7);
    assert_eq!(*s.get(&[2, 2]).unwrap(), 0);
    assert_eq!(s.count_stored(), 2);
    assert_eq!(s.count_off_diagonal().unwrap(), 1);

    assert_eq!(s.remove(&[0, 0]).unwrap(), Some(5));
    assert_eq!(s.count_stored(), 1);
    assert_eq!(s.count_off_diagonal().unwrap(), 1);
    assert_eq!(*s.get(&[1, 2]).unwrap(), 7);
}

#[test]
fn test_equal_to_own_copy() {
    let mut s = ListStorage::<f64>::new([2, 2, 3], -1.0).unwrap();
    s.insert(&[1, 0, 2], 4.0).unwrap();
    s.insert(&[0, 1, 1], -1.0).unwrap();
    let copy = s.clone();
    assert!(s.content_eq(&copy).unwrap());
    assert!(copy.content_eq(&s).unwrap());
}

#[test]
fn test_equality_ignores_materialization_differences() {
    let left = ListStorage::<f64>::zeros([2, 2]).unwrap();
    let mut right = ListStorage::<f64>::zeros([2, 2]).unwrap();
    right.insert(&[0, 0], 0.0).unwrap();
    assert!(left.content_eq(&right).unwrap());
    assert!(right.content_eq(&left).unwrap());
}

#[test]
fn test_equality_rank_mismatch_errors() {
    let a = ListStorage::<f64>::zeros([4]).unwrap();
    let b = ListStorage::<f64>::zeros([2, 2]).unwrap();
    assert!(matches!(a.content_eq(&b), Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_dense_round_trip_exact() {
    let data = [0.0f64, 3.0, 0.0, 0.0, 0.0, 0.0, -2.5, 0.0, 9.0];
    let dense = DenseArray::from_slice(&data, [3, 3]).unwrap();
    let s = ListStorage::<f64>::from_dense(&dense).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(s.get(&[i, j]).unwrap(), dense.get(&[i, j]).unwrap());
        }
    }
    assert_eq!(s.to_dense(), dense);
}

#[test]
fn test_dense_round_trip_randomized() {
    let mut rng = StdRng::seed_from_u64(0x11f2);
    for _ in 0..20 {
        let shape = [rng.gen_range(1..5usize), rng.gen_range(1..5), rng.gen_range(1..5)];
        let numel = shape.iter().product::<usize>();
        let data: Vec<i32> = (0..numel)
            .map(|_| if rng.gen_bool(0.6) { 0 } else { rng.gen_range(-9..10) })
            .collect();
        let dense = DenseArray::from_slice(&data, shape).unwrap();
        let s = ListStorage::<i32>::from_dense(&dense).unwrap();

        let expected_stored = data.iter().filter(|&&v| v != 0).count();
        assert_eq!(s.count_stored(), expected_stored);
        assert_eq!(s.to_dense(), dense, "shape {shape:?}");
    }
}

#[test]
fn test_dense_import_equals_pointwise_construction() {
    let data = [0i32, 4, 0, 0, 0, 6];
    let dense = DenseArray::from_slice(&data, [2, 3]).unwrap();
    let imported = ListStorage::<i32>::from_dense(&dense).unwrap();

    let mut built = ListStorage::<i32>::zeros([2, 3]).unwrap();
    built.insert(&[0, 1], 4).unwrap();
    built.insert(&[1, 2], 6).unwrap();

    assert!(imported.content_eq(&built).unwrap());
}

#[test]
fn test_csr_identity_import() {
    let csr = CsrMatrix::new([2, 2], vec![1.0, 1.0, 0.0], vec![3, 3, 3]).unwrap();
    let s = ListStorage::<f64>::from_csr(&csr).unwrap();

    assert_eq!(*s.default_value(), 0.0);
    assert_eq!(s.count_stored(), 2);
    assert_eq!(s.count_off_diagonal().unwrap(), 0);
    assert_eq!(*s.get(&[0, 0]).unwrap(), 1.0);
    assert_eq!(*s.get(&[1, 1]).unwrap(), 1.0);
    assert_eq!(*s.get(&[0, 1]).unwrap(), 0.0);
    assert_eq!(*s.get(&[1, 0]).unwrap(), 0.0);
}

#[test]
fn test_csr_import_matches_dense_import() {
    // [[1, 0, 4],
    //  [0, 2, 0],
    //  [5, 0, 3]]
    let csr = CsrMatrix::new(
        [3, 3],
        vec![1.0, 2.0, 3.0, 0.0, 4.0, 5.0],
        vec![4, 5, 5, 6, 2, 0],
    )
    .unwrap();
    let dense = DenseArray::from_slice(
        &[1.0, 0.0, 4.0, 0.0, 2.0, 0.0, 5.0, 0.0, 3.0],
        [3, 3],
    )
    .unwrap();

    let from_csr = ListStorage::<f64>::from_csr(&csr).unwrap();
    let from_dense = ListStorage::<f64>::from_dense(&dense).unwrap();
    assert!(from_csr.content_eq(&from_dense).unwrap());
    assert_eq!(from_csr.to_dense(), dense);
}

#[test]
fn test_cast_round_trip_through_wider_type() {
    let mut s = ListStorage::<i16>::new([2, 2], 3).unwrap();
    s.insert(&[0, 1], -7).unwrap();
    let wide: ListStorage<f64> = s.cast();
    let back: ListStorage<i16> = wide.cast();
    assert!(s.content_eq(&back).unwrap());
    assert_eq!(*wide.get(&[0, 1]).unwrap(), -7.0);
    assert_eq!(*wide.default_value(), 3.0);
}

#[test]
fn test_mutating_copy_leaves_original_untouched() {
    let mut original = ListStorage::<u32>::zeros([3]).unwrap();
    original.insert(&[1], 11).unwrap();
    let mut copy = original.clone();
    copy.insert(&[1], 99).unwrap();
    copy.insert(&[2], 22).unwrap();
    copy.remove(&[1]).unwrap();

    assert_eq!(*original.get(&[1]).unwrap(), 11);
    assert_eq!(*original.get(&[2]).unwrap(), 0);
    assert_eq!(original.count_stored(), 1);
}

#[test]
fn test_high_rank_storage() {
    let mut s = ListStorage::<f64>::zeros([2, 2, 2, 2, 2]).unwrap();
    s.insert(&[1, 0, 1, 0, 1], 0.25).unwrap();
    assert_eq!(*s.get(&[1, 0, 1, 0, 1]).unwrap(), 0.25);
    assert_eq!(s.count_stored(), 1);
    assert_eq!(s.remove(&[1, 0, 1, 0, 1]).unwrap(), Some(0.25));
    assert!(s.is_empty());
}
