use crate::ship::ShipClass;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random draws tried per ship before automatic placement gives up on it.
pub const PLACEMENT_ATTEMPTS: usize = 1000;

/// How often a session re-runs automatic placement of a whole fleet on a
/// fresh board before reporting exhaustion.
pub const FLEET_RETRIES: usize = 3;

/// Pause before the computer fires, used by presentation layers.
pub const COMPUTER_DELAY_MS: u64 = 500;

/// Schema version written into persisted snapshots.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Environment variable holding the log level.
pub const LOG_ENV_VAR: &str = "SEA_BATTLE_LOG";

