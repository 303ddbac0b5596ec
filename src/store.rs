use serde::Serialize;

use crate::color::is_valid_hex;

/// Weight ceiling for a single entry, in percent
pub const MAX_WEIGHT: u8 = 100;

/// The two starting entries split the blend evenly
const INITIAL_WEIGHT: u8 = 50;

/// One user-managed color slot: hex text, blend weight, and the inline
/// validity flag shown next to the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    hex: String,
    weight: u8,
    valid: bool,
}

impl ColorEntry {
    /// Build an entry, testing the hex text against the color pattern.
    pub fn new(hex: impl Into<String>, weight: u8) -> Self {
        let hex = hex.into();
        let valid = is_valid_hex(&hex);
        Self {
            hex,
            weight: weight.min(MAX_WEIGHT),
            valid,
        }
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn weight(&self) -> u8 {
        self.weight
    }

    /// Display-side validity. Picker-sourced text sets this without a
    /// retest; the mixer checks the pattern itself rather than trusting it.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Listener invoked with the latest entries after every effective mutation
pub type ChangeListener = Box<dyn FnMut(&[ColorEntry])>;

/// Ordered collection of color entries with synchronous change
/// notification. Index positions are stable until a removal shifts the
/// entries behind it down by one.
pub struct ColorStore {
    entries: Vec<ColorEntry>,
    listeners: Vec<ChangeListener>,
}

impl ColorStore {
    /// A fresh store holds two empty entries split 50/50.
    pub fn new() -> Self {
        Self {
            entries: vec![
                ColorEntry::new("", INITIAL_WEIGHT),
                ColorEntry::new("", INITIAL_WEIGHT),
            ],
            listeners: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a change listener. It runs to completion inside every
    /// mutating call that actually changes the store.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&[ColorEntry]) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Append a new entry with empty hex and weight 0.
    pub fn add_entry(&mut self) {
        self.entries.push(ColorEntry::new("", 0));
        self.notify();
    }

    /// Remove the entry at `index`, shifting later entries down by one.
    /// Out-of-range indices are ignored.
    pub fn remove_entry(&mut self, index: usize) {
        if index >= self.entries.len() {
            return;
        }
        self.entries.remove(index);
        self.notify();
    }

    /// Store hex text at `index` and retest its validity. Other entries
    /// are untouched.
    pub fn set_hex(&mut self, index: usize, value: &str) {
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        entry.hex = value.to_string();
        entry.valid = is_valid_hex(&entry.hex);
        self.notify();
    }

    /// Store hex text delivered by a color picker. Pickers only emit
    /// well-formed colors, so any prior validation error is cleared
    /// without a retest.
    pub fn set_hex_from_picker(&mut self, index: usize, value: &str) {
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        entry.hex = value.to_string();
        entry.valid = true;
        self.notify();
    }

    /// Parse `input` as an integer weight. Unparseable input keeps the
    /// prior weight; parsed values are clamped to 0-100.
    pub fn set_weight(&mut self, index: usize, input: &str) {
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        let Ok(value) = input.trim().parse::<i64>() else {
            return;
        };
        entry.weight = value.clamp(0, i64::from(MAX_WEIGHT)) as u8;
        self.notify();
    }

    fn notify(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener(&self.entries);
        }
    }
}

impl Default for ColorStore {
    fn default() -> Self {
        Self::new()
    }
}
