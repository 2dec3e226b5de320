//! Border cell classification.

/// What a cell of a box's bordered rectangle draws as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Corner,
    HorizontalEdge,
    VerticalEdge,
    /// Interior; never written so nested boxes show through.
    Blank,
}

impl Cell {
    /// Classify local cell (`col`, `row`) of a box with the given interior.
    ///
    /// Local coordinates run from `0` to `padding + 1` on each axis.
    pub fn classify(
        col: usize,
        row: usize,
        horizontal_padding: usize,
        vertical_padding: usize,
    ) -> Self {
        let on_vertical_edge = col == 0 || col == horizontal_padding + 1;
        let on_horizontal_edge = row == 0 || row == vertical_padding + 1;
        match (on_vertical_edge, on_horizontal_edge) {
            (true, true) => Self::Corner,
            (false, true) => Self::HorizontalEdge,
            (true, false) => Self::VerticalEdge,
            (false, false) => Self::Blank,
        }
    }

    /// The character drawn for this cell.
    pub fn glyph(self) -> char {
        match self {
            Self::Corner => '+',
            Self::HorizontalEdge => '-',
            Self::VerticalEdge => '|',
            Self::Blank => ' ',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_corners() {
        for (col, row) in [(0, 0), (4, 0), (0, 3), (4, 3)] {
            assert_eq!(Cell::classify(col, row, 3, 2), Cell::Corner);
        }
    }

    #[test]
    fn edges_exclude_corners() {
        assert_eq!(Cell::classify(1, 0, 3, 2), Cell::HorizontalEdge);
        assert_eq!(Cell::classify(3, 3, 3, 2), Cell::HorizontalEdge);
        assert_eq!(Cell::classify(0, 1, 3, 2), Cell::VerticalEdge);
        assert_eq!(Cell::classify(4, 2, 3, 2), Cell::VerticalEdge);
    }

    #[test]
    fn interior_is_blank() {
        assert_eq!(Cell::classify(2, 1, 3, 2), Cell::Blank);
        assert_eq!(Cell::classify(1, 2, 3, 2), Cell::Blank);
    }

    #[test]
    fn glyphs() {
        assert_eq!(Cell::Corner.glyph(), '+');
        assert_eq!(Cell::HorizontalEdge.glyph(), '-');
        assert_eq!(Cell::VerticalEdge.glyph(), '|');
        assert_eq!(Cell::Blank.glyph(), ' ');
    }
}
