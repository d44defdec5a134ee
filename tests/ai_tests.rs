use flotilla::{AiGunner, ShotResult, GRID_SIZE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn first_hit_queues_orthogonal_neighbors_in_order() {
    let mut gunner = AiGunner::new();
    gunner.record_result(3, 3, ShotResult::Hit("Cruiser"));
    let pending: Vec<_> = gunner.pending().collect();
    assert_eq!(pending, vec![(2, 3), (4, 3), (3, 2), (3, 4)]);
    assert!(gunner.has_lead());
}

#[test]
fn corner_hit_queues_only_in_bounds_neighbors() {
    let mut gunner = AiGunner::new();
    gunner.record_result(0, 0, ShotResult::Hit("Cruiser"));
    let pending: Vec<_> = gunner.pending().collect();
    assert_eq!(pending, vec![(1, 0), (0, 1)]);
}

#[test]
fn already_fired_neighbors_are_not_queued() {
    let mut gunner = AiGunner::new();
    gunner.record_result(2, 3, ShotResult::Miss);
    gunner.record_result(3, 3, ShotResult::Hit("Cruiser"));
    let pending: Vec<_> = gunner.pending().collect();
    assert_eq!(pending, vec![(4, 3), (3, 2), (3, 4)]);
}

#[test]
fn queued_candidates_win_over_hunting() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut gunner = AiGunner::new();
    gunner.record_result(3, 3, ShotResult::Hit("Cruiser"));
    assert_eq!(gunner.pick_shot(&mut rng), (2, 3));
}

#[test]
fn second_hit_on_a_row_probes_that_row_first() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut gunner = AiGunner::new();
    gunner.record_result(3, 3, ShotResult::Hit("Cruiser"));
    gunner.record_result(3, 4, ShotResult::Hit("Cruiser"));
    let pending: Vec<_> = gunner.pending().collect();
    // the row continuation leads; flanking squares follow; the first
    // hit's remaining candidates keep their place behind them
    assert_eq!(
        pending,
        vec![(3, 5), (2, 4), (4, 4), (2, 3), (4, 3), (3, 2), (3, 4)]
    );
    // (3, 4) is stale (already fired) and gets skipped on the way out
    assert_eq!(gunner.pick_shot(&mut rng), (3, 5));
}

#[test]
fn second_hit_on_a_column_probes_that_column_first() {
    let mut gunner = AiGunner::new();
    gunner.record_result(2, 2, ShotResult::Hit("Submarine"));
    gunner.record_result(3, 2, ShotResult::Hit("Submarine"));
    let pending: Vec<_> = gunner.pending().collect();
    assert_eq!(pending[0], (4, 2));
}

#[test]
fn sinking_clears_the_lead() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut gunner = AiGunner::new();
    gunner.record_result(3, 3, ShotResult::Hit("Destroyer A"));
    gunner.record_result(3, 4, ShotResult::Sunk("Destroyer A"));
    assert!(!gunner.has_lead());
    assert_eq!(gunner.pending().count(), 0);
    // back to hunting: the next pick is some unfired square
    let (r, c) = gunner.pick_shot(&mut rng);
    assert!(!gunner.fired().get(r, c).unwrap());
}

#[test]
fn misses_leave_the_queue_alone() {
    let mut gunner = AiGunner::new();
    gunner.record_result(3, 3, ShotResult::Hit("Cruiser"));
    let before: Vec<_> = gunner.pending().collect();
    gunner.record_result(2, 3, ShotResult::Miss);
    let after: Vec<_> = gunner.pending().collect();
    assert_eq!(before, after);
}

#[test]
fn hunting_never_repeats_while_the_board_is_open() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut gunner = AiGunner::new();
    for _ in 0..40 {
        let (r, c) = gunner.pick_shot(&mut rng);
        assert!(!gunner.fired().get(r, c).unwrap());
        gunner.record_result(r, c, ShotResult::Miss);
    }
    assert_eq!(gunner.fired().count_ones(), 40);
}

#[test]
fn exhausted_board_still_yields_a_shot() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut gunner = AiGunner::new();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            gunner.record_result(r, c, ShotResult::Miss);
        }
    }
    // every square fired: the degraded fallback hands back a repeat
    // rather than spinning forever
    let (r, c) = gunner.pick_shot(&mut rng);
    assert!(r < GRID_SIZE && c < GRID_SIZE);
    assert!(gunner.fired().get(r, c).unwrap());
}
