//! Parser tests.
//!
//! - `disambiguation`: inputs with more than one reading
//! - `parser`: entry points, trailing input, warnings, batches
//! - `statements`: statements and compilation units
//! - `switch`: switch expressions and switch statements
//! - `shape`: s-expression rendering used by the grammar tests

pub(crate) mod shape;
mod switch;
