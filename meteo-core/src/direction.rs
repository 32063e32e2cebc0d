use std::fmt;

use crate::error::{ReportError, Result};

/// One of the 16 compass points, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl Direction {
    pub const fn all() -> &'static [Direction; 16] {
        &[
            Direction::N,
            Direction::Nne,
            Direction::Ne,
            Direction::Ene,
            Direction::E,
            Direction::Ese,
            Direction::Se,
            Direction::Sse,
            Direction::S,
            Direction::Ssw,
            Direction::Sw,
            Direction::Wsw,
            Direction::W,
            Direction::Wnw,
            Direction::Nw,
            Direction::Nnw,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::Nne => "NNE",
            Direction::Ne => "NE",
            Direction::Ene => "ENE",
            Direction::E => "E",
            Direction::Ese => "ESE",
            Direction::Se => "SE",
            Direction::Sse => "SSE",
            Direction::S => "S",
            Direction::Ssw => "SSW",
            Direction::Sw => "SW",
            Direction::Wsw => "WSW",
            Direction::W => "W",
            Direction::Wnw => "WNW",
            Direction::Nw => "NW",
            Direction::Nnw => "NNW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const SECTOR_DEGREES: f64 = 22.5;

/// Map an azimuth in `[0, 360)` degrees to its compass point.
///
/// Sector boundaries use round-half-to-even, so 11.25° is `N` and 33.75° is `NE`.
pub fn cardinal(azimuth: f64) -> Result<Direction> {
    if !(0.0..360.0).contains(&azimuth) {
        return Err(ReportError::InvalidArgument(format!(
            "azimuth must be in the range [0, 360) degrees, got {azimuth}"
        )));
    }

    // At most 16 here; 16 wraps back to north.
    let sector = (azimuth / SECTOR_DEGREES).round_ties_even() as usize % 16;
    Ok(Direction::all()[sector])
}
