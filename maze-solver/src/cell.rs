//! Cell states

/// State of a single grid cell.
///
/// The discriminants are the numeric codes used by the text maze format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Wall = 0,
    #[default]
    Open = 1,
    Visited = 2,
    Path = 3,
    GoldCoin = 4,
}

impl CellState {
    /// All states, indexed by their numeric code
    pub const ALL: [CellState; 5] = [
        CellState::Wall,
        CellState::Open,
        CellState::Visited,
        CellState::Path,
        CellState::GoldCoin,
    ];

    /// Look up a state by its numeric code
    pub fn from_code(code: usize) -> Option<CellState> {
        Self::ALL.get(code).copied()
    }

    /// Whether a search may step onto this cell
    pub fn is_available(self) -> bool {
        matches!(self, CellState::Open | CellState::GoldCoin)
    }

    /// Symbol used when rendering the grid as text.
    ///
    /// `Open` cells render blank here; start and target markers are decided
    /// by the maze, which knows those positions.
    pub fn symbol(self) -> char {
        match self {
            CellState::Wall => '+',
            CellState::Open => ' ',
            CellState::Visited => 'x',
            CellState::Path => '√',
            CellState::GoldCoin => 'G',
        }
    }
}
