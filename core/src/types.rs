/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for card counts and pair counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major flattened index of `coords` on a board of `size`.
pub const fn flatten(coords: Coord2, size: Coord2) -> usize {
    coords.0 as usize * size.1 as usize + coords.1 as usize
}

/// Inverse of [`flatten`], `None` when `index` falls outside the board.
pub fn unflatten(index: usize, size: Coord2) -> Option<Coord2> {
    let cols = usize::from(size.1);
    if cols == 0 || index >= cols * usize::from(size.0) {
        return None;
    }
    Some(((index / cols).try_into().ok()?, (index % cols).try_into().ok()?))
}

/// Iterates every coordinate of a board of `size` in row-major order.
pub fn iter_coords(size: Coord2) -> impl Iterator<Item = Coord2> {
    let (rows, cols) = size;
    (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_round_trips_through_unflatten() {
        let size = (6, 5);
        for coords in iter_coords(size) {
            assert_eq!(unflatten(flatten(coords, size), size), Some(coords));
        }
        assert_eq!(unflatten(30, size), None);
    }

    #[test]
    fn iter_coords_is_row_major() {
        let coords: alloc::vec::Vec<_> = iter_coords((2, 2)).collect();
        assert_eq!(coords, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
