use crate::ship::ShipSpec;

/// Edge length of each side's grid.
pub const GRID_SIZE: usize = 7;

/// Ships per fleet; both sides field the same composition.
pub const NUM_SHIPS: usize = 4;

/// Fleet table, placed in this order.
pub const FLEET: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new("Cruiser", 4, "🚢"),
    ShipSpec::new("Submarine", 3, "🛥️"),
    ShipSpec::new("Destroyer A", 2, "🚤"),
    ShipSpec::new("Destroyer B", 2, "🚤"),
];

/// Total cells occupied by a full fleet.
pub const FLEET_CELLS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < NUM_SHIPS {
        total += FLEET[i].length();
        i += 1;
    }
    total
};
