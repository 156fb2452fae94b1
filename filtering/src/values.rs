use prelude::*;

use crate::dimension_error;

/// Reads an `order`x1 column out of a dynamic value such as `[[1], [2], [3]]`.
///
/// Every cell is type checked before the shape so a flat array of numbers is a shape error while
/// a flat array of strings is a type error.
pub fn column(value: &Value, order: usize) -> Result<Vector> {
    let rows = value
        .as_array()
        .ok_or_else(|| Error::type_error(dimension_error(order)))?;

    let mut cells = Vec::with_capacity(rows.len());
    let mut is_column = rows.len() == order;
    for row in rows {
        match *row {
            Value::Array(ref row) => {
                is_column &= row.len() == 1;
                for cell in row {
                    cells.push(cell_value(cell, order)?);
                }
            }
            ref cell => {
                is_column = false;
                cell_value(cell, order)?;
            }
        }
    }

    if !is_column {
        return Err(Error::value_error(dimension_error(order)));
    }
    Ok(Vector::from_vec(cells))
}

fn cell_value(cell: &Value, order: usize) -> Result<float> {
    number(cell).ok_or_else(|| Error::type_error(dimension_error(order)))
}
