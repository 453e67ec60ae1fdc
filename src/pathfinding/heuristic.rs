use super::grid::Position;

/// Manhattan distance. Admissible on four-connected grids where every move
/// costs at least 1.
pub fn manhattan(a: Position, b: Position) -> u64 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_is_symmetric() {
        let a = Position::new(1, 5);
        let b = Position::new(4, 2);
        assert_eq!(manhattan(a, b), 6);
        assert_eq!(manhattan(b, a), 6);
        assert_eq!(manhattan(a, a), 0);
    }
}
