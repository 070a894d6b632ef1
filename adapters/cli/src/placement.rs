use std::str::FromStr;

use lane_defence_core::{CellCoord, DefenderKind, ParseDefenderKindError};
use thiserror::Error;

const FIELD_DELIMITER: char = ',';

/// Defender requested on the command line as `ROW,COL,KIND`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PlacementSpec {
    cell: CellCoord,
    kind: DefenderKind,
}

impl PlacementSpec {
    pub(crate) const fn cell(&self) -> CellCoord {
        self.cell
    }

    pub(crate) const fn kind(&self) -> DefenderKind {
        self.kind
    }
}

/// Errors raised while parsing a placement argument.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub(crate) enum PlacementSpecError {
    /// The argument did not contain exactly three fields.
    #[error("expected ROW,COL,KIND but found `{0}`")]
    Shape(String),
    /// A coordinate was not a non-negative integer.
    #[error("invalid {axis} `{value}`")]
    Coordinate {
        /// Name of the offending coordinate.
        axis: &'static str,
        /// Text supplied for it.
        value: String,
    },
    /// The defender kind was not recognised.
    #[error(transparent)]
    Kind(#[from] ParseDefenderKindError),
}

impl FromStr for PlacementSpec {
    type Err = PlacementSpecError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = value.trim().split(FIELD_DELIMITER).collect();
        let [row, column, kind] = fields.as_slice() else {
            return Err(PlacementSpecError::Shape(value.to_owned()));
        };

        Ok(Self {
            cell: CellCoord::new(parse_axis("row", row)?, parse_axis("column", column)?),
            kind: kind.parse()?,
        })
    }
}

fn parse_axis(axis: &'static str, value: &str) -> Result<u32, PlacementSpecError> {
    value
        .trim()
        .parse()
        .map_err(|_| PlacementSpecError::Coordinate {
            axis,
            value: value.to_owned(),
        })
}
