use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Accuracy,
    MoveCategory,
};

/// Data about a particular move, as supplied by the data source.
///
/// The type is kept as the raw name from the data source, so that a type missing from the chart
/// degrades to neutral effectiveness instead of failing to load.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move category.
    #[serde(default, alias = "damage_class")]
    pub category: MoveCategory,
    /// Move type.
    #[serde(alias = "type")]
    pub primary_type: String,
    /// Base power.
    ///
    /// Signed so that invalid data reaches battle validation rather than failing to parse.
    #[serde(default, alias = "power")]
    pub base_power: i32,
    /// Base accuracy.
    #[serde(default)]
    pub accuracy: Accuracy,
}

impl MoveData {
    /// Can the move deal damage?
    ///
    /// Only damaging moves can be chosen for a battle.
    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status && self.base_power > 0
    }
}
