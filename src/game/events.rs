//! Game events (messages).

use bevy::prelude::*;

use super::Cell;
use crate::round::RoundSummary;

/// Message triggered when food is eaten (for visual effects).
#[derive(Message)]
pub struct FoodEatenEvent {
    pub position: Cell,
}

/// Message carrying the summary of a round that just ended.
#[derive(Message)]
pub struct RoundOverEvent {
    pub summary: RoundSummary,
}
