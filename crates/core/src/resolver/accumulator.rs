// List accumulator
// Computes the display name of a multi-feature report while its values are
// collected: the first feature's name while the list holds one entry, blank
// from the second entry on. Blank never reverts.

use crate::model::NamedParamList;

#[derive(Debug, Clone)]
pub struct ListAccumulator<V> {
    name: String,
    values: Vec<V>,
}

impl<V> ListAccumulator<V> {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            values: Vec::new(),
        }
    }

    /// Add one feature's display name and value.
    pub fn push(&mut self, display_name: &str, value: V) {
        match self.values.len() {
            0 => self.name = display_name.to_string(),
            1 => self.name.clear(),
            _ => {}
        }
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn finish(self) -> NamedParamList<V> {
        NamedParamList {
            name: self.name,
            values: self.values,
        }
    }
}

impl<V> Default for ListAccumulator<V> {
    fn default() -> Self {
        Self::new()
    }
}
