//! Grid layout: buildings on a square lattice, linked by belts
//!
//! Everything here is a pure function of the grid size. The same size always
//! yields the same entities in the same order.

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Distance between two adjacent building centers.
pub const GRID_UNIT: i64 = 8;

/// Distance from a building center to the belt endpoint attached to it.
pub const PORT_OFFSET: i64 = 2;

/// Scene format version written in the header line.
pub const FORMAT_VERSION: u32 = 0;

/// Extension of generated scene files.
pub const FILE_EXTENSION: &str = "satisfied";

/// Side length used when none is given.
pub const DEFAULT_SIZE: u32 = 100;

/// Side length of a square grid, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridSize(u32);

impl GridSize {
    pub fn new(n: u32) -> Result<Self, DomainError> {
        if n == 0 {
            return Err(DomainError::InvalidSize(n.to_string()));
        }
        Ok(Self(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Conventional file name for a grid of this size, e.g. `grid_100.satisfied`.
    pub fn file_name(self) -> String {
        format!("grid_{}.{}", self.0, FILE_EXTENSION)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(DEFAULT_SIZE)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GridSize {
    type Err = DomainError;

    /// Accepts a positive decimal integer, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidSize(s.to_string());
        let n: i64 = s.trim().parse().map_err(|_| invalid())?;
        if n <= 0 {
            return Err(invalid());
        }
        let n = u32::try_from(n).map_err(|_| invalid())?;
        Self::new(n)
    }
}

/// Building class placed at a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Splitter,
    Merger,
}

impl NodeKind {
    /// Splitters on even `x + y`, mergers on odd, giving a checkerboard.
    pub fn at(x: u32, y: u32) -> Self {
        if (u64::from(x) + u64::from(y)) % 2 == 1 {
            NodeKind::Merger
        } else {
            NodeKind::Splitter
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Splitter => "Splitter",
            NodeKind::Merger => "Merger",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Building at grid cell `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub x: u32,
    pub y: u32,
    pub kind: NodeKind,
    /// Always 0: generated buildings are never rotated.
    pub orientation: u32,
}

impl Node {
    pub fn at(x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            kind: NodeKind::at(x, y),
            orientation: 0,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(
            GRID_UNIT * i64::from(self.x),
            GRID_UNIT * i64::from(self.y),
        )
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.position(), self.orientation)
    }
}

/// Directed connector; items flow from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Belt {
    pub start: Point,
    pub end: Point,
}

impl Belt {
    /// Belt between the ports `low` (toward the lower index) and `high`.
    ///
    /// Even `index` runs low to high, odd `index` runs high to low, so the
    /// flow snakes back and forth across consecutive columns or rows.
    fn alternating(low: Point, high: Point, index: u32) -> Self {
        if index % 2 == 0 {
            Self {
                start: low,
                end: high,
            }
        } else {
            Self {
                start: high,
                end: low,
            }
        }
    }

    /// Horizontal belt joining `(x - 1, y)` to `(x, y)`; `None` in column 0.
    pub fn horizontal(x: u32, y: u32) -> Option<Self> {
        let left = Node::at(x.checked_sub(1)?, y).position();
        let right = Node::at(x, y).position();
        Some(Self::alternating(
            Point::new(left.x + PORT_OFFSET, left.y),
            Point::new(right.x - PORT_OFFSET, right.y),
            x,
        ))
    }

    /// Vertical belt joining `(x, y - 1)` to `(x, y)`; `None` in row 0.
    pub fn vertical(x: u32, y: u32) -> Option<Self> {
        let below = Node::at(x, y.checked_sub(1)?).position();
        let above = Node::at(x, y).position();
        Some(Self::alternating(
            Point::new(below.x, below.y + PORT_OFFSET),
            Point::new(above.x, above.y - PORT_OFFSET),
            y,
        ))
    }
}

impl fmt::Display for Belt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Belt {} {}", self.start, self.end)
    }
}

/// One line of a scene file body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Node(Node),
    Belt(Belt),
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Node(node) => node.fmt(f),
            Entity::Belt(belt) => belt.fmt(f),
        }
    }
}

/// A node and the belts that trail it in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub node: Node,
    /// Belt from the left neighbour, absent in column 0
    pub horizontal: Option<Belt>,
    /// Belt from the neighbour below, absent in row 0
    pub vertical: Option<Belt>,
}

impl Cell {
    pub fn at(x: u32, y: u32) -> Self {
        Self {
            node: Node::at(x, y),
            horizontal: Belt::horizontal(x, y),
            vertical: Belt::vertical(x, y),
        }
    }

    pub fn entities(&self) -> impl Iterator<Item = Entity> {
        std::iter::once(Entity::Node(self.node))
            .chain(self.horizontal.map(Entity::Belt))
            .chain(self.vertical.map(Entity::Belt))
    }
}

/// Full layout of an `n × n` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    size: GridSize,
}

impl GridLayout {
    pub fn new(size: GridSize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Header line of the scene file.
    pub fn header(&self) -> String {
        format!("#VERSION={}", FORMAT_VERSION)
    }

    /// Cells in row-major order, `x` outer and `y` inner.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let n = self.size.get();
        (0..n).flat_map(move |x| (0..n).map(move |y| Cell::at(x, y)))
    }

    /// Body lines in file order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> {
        self.cells().flat_map(|cell| cell.entities())
    }

    pub fn summary(&self) -> GridSummary {
        GridSummary::for_size(self.size)
    }
}

/// Entity counts of a generated grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSummary {
    pub size: GridSize,
    /// `n²`
    pub buildings: u64,
    /// `⌈n²/2⌉`
    pub splitters: u64,
    /// `⌊n²/2⌋`
    pub mergers: u64,
    /// Belt figure shown to the user: `(n-1)²`.
    pub belts: u64,
    /// Belt lines actually written: one per adjacent pair, `2n(n-1)`.
    pub belt_lines: u64,
}

impl GridSummary {
    pub fn for_size(size: GridSize) -> Self {
        let n = u64::from(size.get());
        let buildings = n * n;
        Self {
            size,
            buildings,
            splitters: buildings.div_ceil(2),
            mergers: buildings / 2,
            belts: (n - 1) * (n - 1),
            belt_lines: 2 * n * (n - 1),
        }
    }

    /// Lines in the scene file, header included.
    pub fn total_lines(&self) -> u64 {
        1 + self.buildings + self.belt_lines
    }
}
