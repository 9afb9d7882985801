/// Battle-wide constants and tunable parameters for the spatial queries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Upper bound on the number of cells a single reachability search may
    /// expand. Guards against degenerate grids; `None` means unbounded.
    pub search_budget: Option<u32>,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Largest grid accepted by [`crate::Grid::new`].
    pub const MAX_GRID_CELLS: usize = 1 << 20;
    /// Extra steps granted to the line rasterizer beyond the line length.
    pub const LINE_STEP_MARGIN: u32 = 2;
    /// Cardinal neighbours per cell.
    pub const MAX_NEIGHBORS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEARCH_BUDGET: u32 = 65_536;

    pub fn new() -> Self {
        Self {
            search_budget: Some(Self::DEFAULT_SEARCH_BUDGET),
        }
    }

    pub fn with_search_budget(search_budget: Option<u32>) -> Self {
        Self { search_budget }
    }

    /// Budget as a plain count, `usize::MAX` when unbounded.
    pub fn search_limit(&self) -> usize {
        self.search_budget.map_or(usize::MAX, |budget| budget as usize)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
