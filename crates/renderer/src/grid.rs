//! Per-render plot grid.

/// What a single plot cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyph {
    #[default]
    Empty,
    /// Ordinary sample.
    Point,
    /// Sample above both neighbours.
    Peak,
    /// Sample below both neighbours.
    Valley,
    /// Newest visible sample.
    Current,
    /// Vertical fill between two consecutive samples.
    Connector,
}

impl Glyph {
    pub const fn as_char(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Point => 'o',
            Self::Peak => '/',
            Self::Valley => '\\',
            Self::Current => '*',
            Self::Connector => '│',
        }
    }
}

/// Owned `rows × cols` array of glyphs, row-major, built fresh for each render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Glyph>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Glyph::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Glyph> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, glyph: Glyph) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = glyph;
        }
    }

    /// Fill rows strictly between `a` and `b` in `col`, leaving occupied cells alone.
    pub fn connect(&mut self, col: usize, a: usize, b: usize) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for row in lo + 1..hi {
            if self.get(row, col) == Some(Glyph::Empty) {
                self.set(row, col, Glyph::Connector);
            }
        }
    }

    pub fn row_text(&self, row: usize) -> String {
        if row >= self.rows {
            return String::new();
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols]
            .iter()
            .map(|g| g.as_char())
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}
