// Copyright 2026 the pixel-path authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use core::fmt;
use core::str::FromStr;

/// A path rasterization algorithm.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TraceMode {
    /// Integer error-accumulation walk, one cell per dominant-axis step.
    Bresenham,
    /// Every cell the continuous segment enters.
    ///
    /// Simultaneous cell-face crossings advance diagonally and record a
    /// single cell.
    Actual,
    /// One cell per cell-face crossing.
    ///
    /// Diagonal steps also record the intermediate cells, so the path is
    /// always face-connected.
    Full,
}

impl TraceMode {
    /// Returns the lowercase tag of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TraceMode::Bresenham => "bresenham",
            TraceMode::Actual => "actual",
            TraceMode::Full => "full",
        }
    }
}

impl fmt::Display for TraceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error which can be returned when parsing a [`TraceMode`] tag.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ModeParseError;

impl fmt::Display for ModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown trace mode")
    }
}

impl FromStr for TraceMode {
    type Err = ModeParseError;

    /// Tags are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, ModeParseError> {
        if s.eq_ignore_ascii_case("bresenham") {
            Ok(TraceMode::Bresenham)
        } else if s.eq_ignore_ascii_case("actual") {
            Ok(TraceMode::Actual)
        } else if s.eq_ignore_ascii_case("full") {
            Ok(TraceMode::Full)
        } else {
            Err(ModeParseError)
        }
    }
}
