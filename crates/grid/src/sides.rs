/// One edge of a grid cell. `Top` faces grid -Y (world -Z), `Left` faces grid -X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellSide {
    Left,
    Top,
    Right,
    Bottom,
}

impl CellSide {
    pub const ALL: [CellSide; 4] = [
        CellSide::Left,
        CellSide::Top,
        CellSide::Right,
        CellSide::Bottom,
    ];

    /// Stable ordinal, usable as an array index.
    pub fn index(self) -> usize {
        match self {
            CellSide::Left => 0,
            CellSide::Top => 1,
            CellSide::Right => 2,
            CellSide::Bottom => 3,
        }
    }

    fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl std::fmt::Display for CellSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CellSide::Left => "left",
            CellSide::Top => "top",
            CellSide::Right => "right",
            CellSide::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// A set of cell sides, stored as a 4-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSides(u8);

impl CellSides {
    pub const NONE: CellSides = CellSides(0);
    pub const ALL: CellSides = CellSides(0b1111);

    pub fn contains(self, side: CellSide) -> bool {
        self.0 & side.bit() != 0
    }

    pub fn insert(&mut self, side: CellSide) {
        self.0 |= side.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in `CellSide::ALL` order.
    pub fn iter(self) -> impl Iterator<Item = CellSide> {
        CellSide::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl FromIterator<CellSide> for CellSides {
    fn from_iter<I: IntoIterator<Item = CellSide>>(iter: I) -> Self {
        let mut sides = CellSides::NONE;
        for side in iter {
            sides.insert(side);
        }
        sides
    }
}
