//! A cell that can be built into geometry.

use arcstr::ArcStr;

use crate::error::Result;
use crate::qgeometry::QGeometry;

/// A parametric device cell.
///
/// A cell is a value object: building it twice yields identical geometry,
/// and nothing is retained between builds.
pub trait Cell {
    /// A crate-wide unique identifier for this kind of cell.
    fn id() -> ArcStr
    where
        Self: Sized;

    /// A name for a specific parametrization of this cell.
    ///
    /// Instances are initially assigned this name; the host may rename them
    /// to avoid duplicates.
    fn name(&self) -> ArcStr {
        arcstr::literal!("unnamed")
    }

    /// Builds the cell's geometry.
    ///
    /// Validates parameters first; on error, no geometry is produced.
    fn build(&self) -> Result<QGeometry>;
}
