//! Display and promotion settings adjustable with `set` and `promote`.

use tabiya_core::PromotionPiece;

/// Configuration knobs for a [`Shell`](crate::session::Shell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    /// Print the board after every applied move.
    pub show_board: bool,
    /// Echo the notation of every applied move.
    pub show_notation: bool,
    /// Piece a promoting pawn becomes when the move names none.
    pub promotion: PromotionPiece,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            show_notation: true,
            promotion: PromotionPiece::Queen,
        }
    }
}

/// One `set <name> <on|off>` assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOption {
    ShowBoard(bool),
    ShowNotation(bool),
}

impl ShellConfig {
    pub fn apply(&mut self, option: ShellOption) {
        match option {
            ShellOption::ShowBoard(on) => self.show_board = on,
            ShellOption::ShowNotation(on) => self.show_notation = on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_everything() {
        let config = ShellConfig::default();
        assert!(config.show_board);
        assert!(config.show_notation);
        assert_eq!(config.promotion, PromotionPiece::Queen);
    }

    #[test]
    fn apply_toggles_one_field() {
        let mut config = ShellConfig::default();
        config.apply(ShellOption::ShowBoard(false));
        assert!(!config.show_board);
        assert!(config.show_notation);
        config.apply(ShellOption::ShowNotation(false));
        assert!(!config.show_notation);
    }
}
