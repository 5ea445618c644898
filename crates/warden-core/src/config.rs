//! Rule switches for the legality engine.

/// Adjustable rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    /// Forbid castling out of, through, or into check.
    ///
    /// With this off, castling only needs the rights and an empty path.
    pub castling_safety: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            castling_safety: true,
        }
    }
}

impl RulesConfig {
    /// Castling checked only for rights and empty squares.
    pub const fn lenient_castling() -> Self {
        Self {
            castling_safety: false,
        }
    }
}
