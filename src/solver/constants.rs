// Search defaults
pub const DEFAULT_TARGET: i64 = 24;
/// Operand counts above this take impractically long with the full enumeration
pub const PRACTICAL_OPERAND_LIMIT: usize = 7;
