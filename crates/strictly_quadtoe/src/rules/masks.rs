//! The twenty winning patterns.
//!
//! A pattern is a 16-bit mask with one bit per cell, cell 0 (top-left) in
//! the most significant bit. There are exactly twenty ways to win:
//! four rows, four columns, two diagonals, nine 2x2 boxes and the four
//! corners.

use serde::{Deserialize, Serialize};

/// How two masks are compared when testing for a win.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinRule {
    /// The player's cells must be exactly one winning pattern.
    ///
    /// A player holding a pattern plus any other cell does not win.
    #[default]
    Exact,
    /// The player's cells must include a winning pattern.
    Contains,
}

/// Shape of a winning pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum WinKind {
    /// A full row (0 = top).
    #[display("row {}", _0)]
    Row(u8),
    /// A full column (0 = left).
    #[display("column {}", _0)]
    Column(u8),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
    /// A 2x2 box, identified by its top-left cell's row and column.
    #[display("box at ({}, {})", _0, _1)]
    Box(u8, u8),
    /// All four corners.
    #[display("corners")]
    Corners,
}

/// A winning pattern and its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningMask {
    /// Shape of the pattern.
    pub kind: WinKind,
    /// Cells required for the win.
    pub bits: u16,
}

impl WinningMask {
    const fn new(kind: WinKind, bits: u16) -> Self {
        Self { kind, bits }
    }

    /// Checks a player's occupancy mask against this pattern.
    pub fn matches(&self, occupancy: u16, rule: WinRule) -> bool {
        match rule {
            WinRule::Exact => occupancy == self.bits,
            WinRule::Contains => occupancy & self.bits == self.bits,
        }
    }
}

/// All winning patterns, shared by every evaluation.
pub const WINNING_MASKS: [WinningMask; 20] = [
    // Rows
    WinningMask::new(WinKind::Row(0), 0xF000),
    WinningMask::new(WinKind::Row(1), 0x0F00),
    WinningMask::new(WinKind::Row(2), 0x00F0),
    WinningMask::new(WinKind::Row(3), 0x000F),
    // Columns
    WinningMask::new(WinKind::Column(0), 0x8888),
    WinningMask::new(WinKind::Column(1), 0x4444),
    WinningMask::new(WinKind::Column(2), 0x2222),
    WinningMask::new(WinKind::Column(3), 0x1111),
    // Diagonals
    WinningMask::new(WinKind::Diagonal, 0x8421),
    WinningMask::new(WinKind::AntiDiagonal, 0x1248),
    // Boxes
    WinningMask::new(WinKind::Box(0, 0), 0xCC00),
    WinningMask::new(WinKind::Box(0, 1), 0x6600),
    WinningMask::new(WinKind::Box(0, 2), 0x3300),
    WinningMask::new(WinKind::Box(1, 0), 0x0CC0),
    WinningMask::new(WinKind::Box(1, 1), 0x0660),
    WinningMask::new(WinKind::Box(1, 2), 0x0330),
    WinningMask::new(WinKind::Box(2, 0), 0x00CC),
    WinningMask::new(WinKind::Box(2, 1), 0x0066),
    WinningMask::new(WinKind::Box(2, 2), 0x0033),
    // Corners
    WinningMask::new(WinKind::Corners, 0x9009),
];

/// Finds the first pattern the occupancy mask satisfies.
pub fn find_match(occupancy: u16, rule: WinRule) -> Option<&'static WinningMask> {
    WINNING_MASKS.iter().find(|mask| mask.matches(occupancy, rule))
}
