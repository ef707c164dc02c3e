//! Abricate summary table loading and value scaling

mod cell;
mod range;
mod table;

pub(crate) use cell::cell_value;
pub(crate) use range::DisplayRange;
pub(crate) use table::{SERIES_OFFSET, Table};
