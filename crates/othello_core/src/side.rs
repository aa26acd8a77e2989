/// One of the two players. Light maximizes, Dark minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Dark,
    Light,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }

    /// Numeric polarity used by the evaluation: +1 for Light, -1 for Dark.
    pub fn sign(self) -> i32 {
        match self {
            Side::Light => 1,
            Side::Dark => -1,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Side::Dark => Cell::Dark,
            Side::Light => Cell::Light,
        }
    }

    pub fn symbol(self) -> char {
        self.to_cell().symbol()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Dark,
    Light,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Dark => 'X',
            Cell::Light => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Dark),
            'O' | 'o' => Some(Cell::Light),
            _ => None,
        }
    }

    /// Same square with the colors swapped.
    pub fn flipped(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Dark => Cell::Light,
            Cell::Light => Cell::Dark,
        }
    }
}
