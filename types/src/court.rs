use serde::{Deserialize, Serialize};

use crate::{error::RecordError, event::EventKind, team::Team};

/// A point on the court diagram as percentages of its width and height.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourtPosition {
    pub x: f64,
    pub y: f64,
}

/// Where the court image is drawn, in the same units as click coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourtBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for CourtBounds {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
        }
    }
}

impl CourtBounds {
    pub fn contains(&self, client_x: f64, client_y: f64) -> bool {
        client_x >= self.left
            && client_x <= self.left + self.width
            && client_y >= self.top
            && client_y <= self.top + self.height
    }

    /// Maps a click to normalized court coordinates. Clicks outside the
    /// image are rejected rather than clamped.
    pub fn normalize(&self, client_x: f64, client_y: f64) -> Result<CourtPosition, RecordError> {
        if self.width <= 0.0 || self.height <= 0.0 || !self.contains(client_x, client_y) {
            return Err(RecordError::ClickOutsideCourt);
        }
        Ok(CourtPosition {
            x: (client_x - self.left) / self.width * 100.0,
            y: (client_y - self.top) / self.height * 100.0,
        })
    }
}

/// Projection of a positioned event onto the court diagram.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventMarker {
    pub x: f64,
    pub y: f64,
    pub team: Team,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub id: u32,
}

impl EventMarker {
    pub fn style(&self) -> MarkerStyle {
        MarkerStyle::for_kind(&self.kind)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerShape {
    Circle,
    Square,
    Diamond,
    Teardrop,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    pub rotation_deg: i16,
    pub filled: bool,
    pub size: u8,
}

impl MarkerStyle {
    const fn new(shape: MarkerShape, rotation_deg: i16, filled: bool, size: u8) -> Self {
        Self {
            shape,
            rotation_deg,
            filled,
            size,
        }
    }

    pub fn for_kind(kind: &EventKind) -> Self {
        match kind {
            EventKind::Score { .. } => Self::new(MarkerShape::Circle, 0, false, 16),
            EventKind::Block => Self::new(MarkerShape::Square, 45, false, 16),
            EventKind::Steal => Self::new(MarkerShape::Diamond, 45, true, 12),
            EventKind::Assist => Self::new(MarkerShape::Teardrop, -45, true, 16),
            EventKind::Foul { .. } => Self::new(MarkerShape::Square, 0, true, 16),
            EventKind::Rebound { .. } => Self::new(MarkerShape::Diamond, 45, false, 16),
            _ => Self::new(MarkerShape::Circle, 0, true, 16),
        }
    }
}
