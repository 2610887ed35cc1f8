//! The window tracker: the encoder's bookkeeping for one open window.
//!
//! A window remembers its lower bound, its radix, how often each distinct value
//! has appeared, and how many digits have been folded. It never touches the
//! accumulator; it only decides whether the next value fits.

use hashbrown::HashMap;

/// Why an incoming value could not join the open window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushTrigger {
    /// The value is below the window's `min` (or `min` is unset).
    BelowMin,
    /// The value is new to the window and the window already holds `radix`
    /// distinct values.
    DistinctOverflow,
    Both,
}

impl FlushTrigger {
    fn from_conditions(below_min: bool, overflow: bool) -> Option<Self> {
        match (below_min, overflow) {
            (false, false) => None,
            (true, false) => Some(Self::BelowMin),
            (false, true) => Some(Self::DistinctOverflow),
            (true, true) => Some(Self::Both),
        }
    }

    pub fn lowers_min(self) -> bool {
        matches!(self, Self::BelowMin | Self::Both)
    }

    pub fn grows_radix(self) -> bool {
        matches!(self, Self::DistinctOverflow | Self::Both)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Window {
    /// `None` until the window is opened with a lower bound.
    min: Option<u8>,
    radix: u16,
    distinct: HashMap<u8, usize>,
    position: usize,
}

impl Window {
    /// Returns the window to its unset state: no `min`, radix 0, no digits.
    pub fn reset(&mut self) {
        self.min = None;
        self.radix = 0;
        self.distinct.clear();
        self.position = 0;
    }

    /// Opens a freshly reset window with the given header.
    pub fn reopen(&mut self, radix: u16, min: u8) {
        debug_assert_eq!(self.position, 0, "reopen on a window holding digits");
        self.radix = radix;
        self.min = Some(min);
    }

    /// Decides whether `value` fits, returning the flush trigger when it does not.
    pub fn check(&self, value: u8) -> Option<FlushTrigger> {
        let below_min = self.min.map_or(true, |min| value < min);
        let is_new = !self.distinct.contains_key(&value);
        let overflow = is_new && self.distinct_len() + 1 > usize::from(self.radix);
        FlushTrigger::from_conditions(below_min, overflow)
    }

    /// The `(radix, min)` header of the window that replaces this one after
    /// `trigger` fired on `value`.
    ///
    /// Radix grows by exactly one on overflow rather than being resized to the
    /// value range in use, so a later digit may exceed `radix - 1`.
    pub fn successor(&self, value: u8, trigger: FlushTrigger) -> (u16, u8) {
        let radix = if trigger.grows_radix() {
            self.radix + 1
        } else {
            self.radix
        };
        let min = match self.min {
            Some(min) if !trigger.lowers_min() => min,
            _ => value,
        };
        (radix, min)
    }

    /// Records an accepted value and advances the position.
    pub fn record(&mut self, value: u8) {
        *self.distinct.entry(value).or_insert(0) += 1;
        self.position += 1;
    }

    pub fn min(&self) -> Option<u8> {
        self.min
    }

    pub fn radix(&self) -> u16 {
        self.radix
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn distinct_len(&self) -> usize {
        self.distinct.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position == 0
    }
}
