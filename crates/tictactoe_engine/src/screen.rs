//! The presentation phase reported to the UI.

use serde::{Deserialize, Serialize};

/// Which view the presentation layer should show. Exactly one is active.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Screen {
    /// Title screen before the first game.
    #[default]
    Intro,
    /// The board is in play.
    Board,
    /// The game was won or drawn.
    End,
}
