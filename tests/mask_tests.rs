use flotilla::{GridMask, MaskError};

type M = GridMask<u64, 7>;

#[test]
fn new_mask_is_empty() {
    let m = M::new();
    assert!(m.is_empty());
    assert_eq!(m.count_ones(), 0);
    assert!(!m.get(0, 0).unwrap());
}

#[test]
fn set_get_roundtrip() {
    let mut m = M::new();
    m.set(3, 4).unwrap();
    assert!(m.get(3, 4).unwrap());
    assert!(!m.get(4, 3).unwrap());
    assert_eq!(m.count_ones(), 1);
}

#[test]
fn setting_twice_counts_once() {
    let mut m = M::new();
    m.set(2, 2).unwrap();
    m.set(2, 2).unwrap();
    assert_eq!(m.count_ones(), 1);
}

#[test]
fn out_of_bounds_rejected() {
    let mut m = M::new();
    assert_eq!(
        m.get(7, 0).unwrap_err(),
        MaskError::OutOfBounds { row: 7, col: 0 }
    );
    assert_eq!(
        m.set(0, 7).unwrap_err(),
        MaskError::OutOfBounds { row: 0, col: 7 }
    );
}

#[test]
fn cells_iterate_row_major() {
    let mut m = M::new();
    m.set(5, 1).unwrap();
    m.set(0, 6).unwrap();
    m.set(0, 2).unwrap();
    let cells: Vec<_> = m.cells().collect();
    assert_eq!(cells, vec![(0, 2), (0, 6), (5, 1)]);
}

#[test]
fn bitwise_ops_stay_on_board() {
    let mut a = M::new();
    a.set(0, 0).unwrap();
    a.set(1, 1).unwrap();
    let mut b = M::new();
    b.set(1, 1).unwrap();

    assert_eq!((a & b).count_ones(), 1);
    assert_eq!((a | b).count_ones(), 2);
    // complement covers exactly the 49 board cells
    assert_eq!((!M::new()).count_ones(), 49);
    assert_eq!((!a).count_ones(), 47);
    assert!(!(!a).get(0, 0).unwrap());
}
