use timestable_business::{BoundsForm, Cell, GridSink, MemoryGrid, Page, TableGenerator};

/// Mount point the generated table is attached to.
///
/// `generation` changes on every clear so the grid widget gets a fresh id
/// (and a fresh scroll position) for each submit.
#[derive(Debug, Default)]
pub struct MountPoint {
    grid: MemoryGrid,
    generation: u64,
}

impl MountPoint {
    pub fn rows(&self) -> &[Vec<Cell>] {
        self.grid.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl GridSink for MountPoint {
    fn clear(&mut self) {
        self.grid.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    fn append_row(&mut self, cells: Vec<Cell>) {
        self.grid.append_row(cells);
    }
}

/// The generator page as the UI drives it: text fields, message text and
/// the table mount point.
pub type TablePage = Page<String, String, MountPoint>;

/// The main application state.
pub struct State {
    pub page: TablePage,
}

impl Default for State {
    fn default() -> Self {
        let generator =
            TableGenerator::new(BoundsForm::default(), String::new(), MountPoint::default());

        Self {
            page: Page::new(generator),
        }
    }
}

impl State {
    pub fn test() -> Self {
        Self::default()
    }
}
