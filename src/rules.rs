/// Birth counts of Conway's Game of Life, one bit per neighbor count.
///
/// ```notrust
/// b3: 0000_0000_0000_1000
/// ```
pub const BIRTHS: u16 = 0b1000;

/// Survival counts of Conway's Game of Life, one bit per neighbor count.
///
/// ```notrust
/// s23: 0000_0000_0000_1100
/// ```
pub const SURVIVALS: u16 = 0b1100;

/// Decide whether a cell is alive on the next day, given whether it's alive today and how many of
/// its neighbors are.
///
/// See: https://conwaylife.com/wiki/Rulestring
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    // Any count past 8 can't happen on a square grid, and would overflow the shift
    if neighbors > 8 {
        return false;
    }

    let n = 1u16 << neighbors;

    if alive {
        SURVIVALS & n == n
    } else {
        BIRTHS & n == n
    }
}
