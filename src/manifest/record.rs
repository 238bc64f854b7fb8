use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Name of the animation state every record starts with
pub const DEFAULT_STATE: &str = "default";

/// Metadata for one sprite slot of a sheet
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteRecord {
    /// Left empty for an editor to fill in
    pub display_name: String,
    /// Sheet path as it was given to the tool
    pub sprite_sheet: String,
    /// One past the rightmost visible column, 1 for an empty cell
    pub x_trim: u32,
    /// One past the bottommost visible row, 1 for an empty cell
    pub y_trim: u32,
    /// Animation states, each an ordered list of sprite indices
    pub states: BTreeMap<String, Vec<usize>>,
}

impl SpriteRecord {
    /// Build a record from the trim bounds reported for its cell.
    pub fn new(index: usize, sprite_sheet: &str, (right, bottom): (u32, u32)) -> Self {
        Self {
            display_name: String::new(),
            sprite_sheet: sprite_sheet.to_string(),
            x_trim: right + 1,
            y_trim: bottom + 1,
            states: BTreeMap::from([(DEFAULT_STATE.to_string(), vec![index])]),
        }
    }
}

/// Sprite records in grid enumeration order.
///
/// Serializes as a JSON object keyed by each record's index in decimal,
/// ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    records: Vec<SpriteRecord>,
    empty_cells: usize,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; `visible` is false for a cell with no visible pixel.
    pub fn push(&mut self, record: SpriteRecord, visible: bool) {
        if !visible {
            self.empty_cells += 1;
        }
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SpriteRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &SpriteRecord)> {
        self.records.iter().enumerate()
    }

    /// Number of cells that held no visible pixel
    pub fn empty_cells(&self) -> usize {
        self.empty_cells
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for (index, record) in self.iter() {
            map.serialize_entry(&index.to_string(), record)?;
        }
        map.end()
    }
}
