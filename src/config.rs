use crate::common::ConfigError;

/// Allowed board sizes. The board is always square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum BoardSize {
    #[default]
    Small = 3,
    Middle = 5,
    Large = 7,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Small, BoardSize::Middle, BoardSize::Large];

    /// Side length N of the grid.
    pub const fn side(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ConfigError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        BoardSize::ALL
            .into_iter()
            .find(|s| s.side() == n)
            .ok_or(ConfigError::UnsupportedSize(n))
    }
}

/// Which lines through the anchor cell count towards a win.
///
/// Rows, columns and the main diagonal are always checked. The anti-diagonal
/// is checked only when `anti_diagonal` is set; `classic()` leaves it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinRules {
    pub anti_diagonal: bool,
}

impl WinRules {
    /// Rule set without anti-diagonal wins.
    pub const fn classic() -> Self {
        Self {
            anti_diagonal: false,
        }
    }
}

impl Default for WinRules {
    fn default() -> Self {
        Self {
            anti_diagonal: true,
        }
    }
}
