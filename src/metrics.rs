use crate::BySide;

/// Quality metrics of one side in one game.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerMetrics {
    /// Average centipawn loss.
    pub acpl: f64,
    /// Game point loss, before any reconciliation with the result.
    pub gpl_raw: f64,
    /// Game index from the result and the game point loss alone.
    pub gi_raw: f64,
    /// Game index after the opponent-strength adjustment.
    pub gi_adjusted: f64,
    /// Reported game index.
    pub gi_normalized: f64,
    /// Number of own moves counted.
    pub move_number: u32,
}

impl PlayerMetrics {
    /// Rounds every real-valued field to `decimals` places.
    #[must_use]
    pub fn rounded(self, decimals: u32) -> PlayerMetrics {
        let factor = 10f64.powi(decimals as i32);
        let round = |value: f64| (value * factor).round() / factor;
        PlayerMetrics {
            acpl: round(self.acpl),
            gpl_raw: round(self.gpl_raw),
            gi_raw: round(self.gi_raw),
            gi_adjusted: round(self.gi_adjusted),
            gi_normalized: round(self.gi_normalized),
            move_number: self.move_number,
        }
    }
}

/// Metrics of both sides of a game.
pub type GameMetrics = BySide<PlayerMetrics>;
