/// Direction the snake can be steered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        *self == other.opposite()
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Per-tick displacement of the head.
///
/// A fresh game starts `Still` and stays that way until the first direction
/// is accepted; a still snake is not advanced by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Velocity {
    #[default]
    Still,
    Moving(Direction),
}

impl Velocity {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Velocity::Still => (0, 0),
            Velocity::Moving(direction) => direction.delta(),
        }
    }

    pub fn is_still(&self) -> bool {
        matches!(self, Velocity::Still)
    }

    /// True if `direction` points straight back against this velocity
    pub fn opposes(&self, direction: Direction) -> bool {
        match self {
            Velocity::Still => false,
            Velocity::Moving(current) => current.is_opposite(direction),
        }
    }
}

impl From<Direction> for Velocity {
    fn from(direction: Direction) -> Self {
        Velocity::Moving(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_still_velocity() {
        let velocity = Velocity::default();
        assert!(velocity.is_still());
        assert_eq!(velocity.delta(), (0, 0));
        for direction in Direction::ALL {
            assert!(!velocity.opposes(direction));
        }
    }

    #[test]
    fn test_moving_velocity_opposes_only_reverse() {
        let velocity = Velocity::from(Direction::Right);
        assert_eq!(velocity.delta(), (1, 0));
        assert!(velocity.opposes(Direction::Left));
        assert!(!velocity.opposes(Direction::Right));
        assert!(!velocity.opposes(Direction::Up));
        assert!(!velocity.opposes(Direction::Down));
    }
}
