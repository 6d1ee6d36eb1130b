use crate::cells::Cell;

/// How a renderer should paint a cell when it receives a `DrawEvent`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum ColourTag {
    /// A freshly carved passage.
    Neutral,
    HighlightStart,
    HighlightEnd,
    /// A cell on a discovered path.
    PathMarker,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct DrawEvent {
    pub cell: Cell,
    pub colour: ColourTag,
}

impl DrawEvent {
    pub fn new(cell: Cell, colour: ColourTag) -> DrawEvent {
        DrawEvent { cell, colour }
    }
}
