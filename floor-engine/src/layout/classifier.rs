//! Capacity classifier
//!
//! Shapes are hand-assigned per table on the floor plan, so they are kept
//! as membership lists rather than derived from the table number.

use shared::models::{TableNumber, TableShape};

use super::LayoutError;

/// 长桌 (6 seats)
const RECTANGLE_TABLES: [u8; 21] = [
    1, 5, 6, 8, 9, 10, 13, 14, 15, 16, 18, 19, 20, 22, 23, 24, 25, 26, 31, 32, 33,
];
/// 圆桌 (8 seats)
const CIRCLE_TABLES: [u8; 5] = [4, 7, 17, 21, 27];
/// 方桌 (4 seats)
const SQUARE_TABLES: [u8; 9] = [2, 3, 11, 12, 28, 29, 34, 35, 36];

const SHAPE_LISTS: [(TableShape, &[u8]); 3] = [
    (TableShape::Rectangle, &RECTANGLE_TABLES),
    (TableShape::Circle, &CIRCLE_TABLES),
    (TableShape::Square, &SQUARE_TABLES),
];

/// Map a table to its shape and maximum party size
///
/// The bar slot is not in any list and classifies as [`TableShape::Bar`].
/// Any other table missing from the lists, or listed twice, is a layout
/// error.
pub fn classify(table: TableNumber) -> Result<(TableShape, u32), LayoutError> {
    if table.is_bar() {
        return Ok((TableShape::Bar, TableShape::Bar.max_capacity()));
    }

    let mut matches = SHAPE_LISTS
        .iter()
        .filter(|(_, members)| members.contains(&table.get()))
        .map(|(shape, _)| *shape);

    match (matches.next(), matches.next()) {
        (Some(shape), None) => Ok((shape, shape.max_capacity())),
        (None, _) => Err(LayoutError::UnclassifiedTable(table)),
        (Some(_), Some(_)) => Err(LayoutError::AmbiguousTable(table)),
    }
}
