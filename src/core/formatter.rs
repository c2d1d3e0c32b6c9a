//! Formatter trait turning a record into bytes

use super::content::{CommonField, Content};

/// Encodes one record together with the process-wide common fields
///
/// Implementations must be pure functions of their inputs: the engine formats
/// each record once and writes the same bytes to every accepting output.
/// The returned bytes always end with `\n`.
pub trait Formatter: Send + Sync {
    fn format(&self, common_fields: &[CommonField], record: &Content) -> Vec<u8>;
}
