//! Type promotion table.
//!
//! Maps an ordered pair of operand types to the type their combination
//! produces. Pairs without an explicit rule take the left operand's type.

use crate::expression::value::DataType;

/// Result type of combining a `left` operand with a `right` operand.
///
/// Total over every pair of [`DataType`]s.
pub fn promote(left: DataType, right: DataType) -> DataType {
    explicit_rule(left, right).unwrap_or(left)
}

/// The documented promotion rule for `(left, right)`, if one exists.
///
/// Match arms are disjoint, so at most one rule applies to a pair.
pub fn explicit_rule(left: DataType, right: DataType) -> Option<DataType> {
    use DataType::*;

    match (left, right) {
        // Writing anything to a stream yields the stream
        (Stream, _) | (_, Stream) => Some(Stream),
        (Integer, Integer) => Some(Integer),
        (Integer, Real32) | (Real32, Integer) => Some(Real32),
        (Integer, Real64) | (Real64, Integer) => Some(Real64),
        (Real32, Real64) | (Real64, Real32) => Some(Real64),
        _ => None,
    }
}

/// Common type two operands are compared in.
///
/// Unlike [`promote`] this is symmetric: a `Boolean` meets a number in the
/// number's type, and distinct types without a rule have no common type.
pub fn comparison_type(left: DataType, right: DataType) -> Option<DataType> {
    use DataType::*;

    if left == right {
        return Some(left);
    }
    if let Some(rule) = explicit_rule(left, right) {
        return Some(rule);
    }
    match (left, right) {
        (Boolean, other) | (other, Boolean) if other.is_numeric() => Some(other),
        _ => None,
    }
}
