use serde::{Deserialize, Serialize};

use crate::error::RecordError;

pub const QUARTER_COUNT: u8 = 4;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quarter {
    pub id: u8,
    pub name: String,
    pub is_active: bool,
    pub is_completed: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QuarterStatus {
    Pending,
    Active,
    Completed,
}

impl Quarter {
    fn new(id: u8) -> Self {
        let name = match id {
            1 => "1st quarter",
            2 => "2nd quarter",
            3 => "3rd quarter",
            _ => "4th quarter",
        };
        Self {
            id,
            name: name.to_string(),
            is_active: false,
            is_completed: false,
        }
    }

    pub fn status(&self) -> QuarterStatus {
        if self.is_completed {
            QuarterStatus::Completed
        } else if self.is_active {
            QuarterStatus::Active
        } else {
            QuarterStatus::Pending
        }
    }
}

/// The four quarters of a game. At most one is active at any time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuarterBoard {
    quarters: Vec<Quarter>,
}

impl Default for QuarterBoard {
    fn default() -> Self {
        Self {
            quarters: (1..=QUARTER_COUNT).map(Quarter::new).collect(),
        }
    }
}

impl QuarterBoard {
    pub fn quarters(&self) -> &[Quarter] {
        &self.quarters
    }

    pub fn get(&self, id: u8) -> Option<&Quarter> {
        self.quarters.iter().find(|q| q.id == id)
    }

    /// Makes `id` the active quarter and deactivates every other one.
    /// A completed quarter cannot be started again.
    pub fn start(&mut self, id: u8) -> Result<(), RecordError> {
        let target = self.get(id).ok_or(RecordError::UnknownQuarter(id))?;
        if target.is_completed {
            return Err(RecordError::QuarterCompleted(id));
        }
        for quarter in self.quarters.iter_mut() {
            quarter.is_active = quarter.id == id;
        }
        log::info!("Quarter {id} started");
        Ok(())
    }

    /// Marks `id` completed and inactive. Other quarters are left alone.
    pub fn complete(&mut self, id: u8) -> Result<(), RecordError> {
        let quarter = self
            .quarters
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(RecordError::UnknownQuarter(id))?;
        quarter.is_active = false;
        quarter.is_completed = true;
        log::info!("Quarter {id} completed");
        Ok(())
    }

    /// Tag for newly created events: the active quarter, or 0.
    pub fn current(&self) -> u8 {
        self.quarters
            .iter()
            .find(|q| q.is_active)
            .map_or(0, |q| q.id)
    }
}
