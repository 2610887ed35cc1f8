//! The stateful encoder: a window tracker paired with its accumulator.
//!
//! Each `encode` call either folds the value into the open window or flushes
//! that window into a `Packet` and opens a new one starting with the value.
//! The caller ends a stream with an explicit `flush`.

use num_traits::PrimInt;
use std::fmt::Display;

use crate::codec::accumulator::Accumulator;
use crate::codec::packet::Packet;
use crate::codec::window::Window;
use crate::config::{CodecConfig, EmptyWindowPolicy};
use crate::error::{RadixPackError, Result};
use crate::utils::{checked_bounds, checked_byte};

/// Single-stream encoder. Not meant to be shared; use one instance per stream.
#[derive(Debug, Clone)]
pub struct Encoder {
    window: Window,
    accumulator: Accumulator,
    policy: EmptyWindowPolicy,
}

impl Encoder {
    /// Creates an encoder whose first window covers `[min, max]`.
    pub fn new(min: u8, max: u8) -> Result<Self> {
        Self::from_config(&CodecConfig::with_bounds(min, max)?)
    }

    /// Like `new`, but accepts any integer type and range-checks both bounds.
    pub fn with_bounds<T>(min: T, max: T) -> Result<Self>
    where
        T: PrimInt + Display,
    {
        let (min, max) = checked_bounds(min, max)?;
        Self::new(min, max)
    }

    pub fn from_config(config: &CodecConfig) -> Result<Self> {
        config.validate()?;
        let mut encoder = Self {
            window: Window::default(),
            accumulator: Accumulator::default(),
            policy: config.empty_window,
        };
        encoder.reset();
        encoder.window.reopen(config.initial_radix(), config.min);
        Ok(encoder)
    }

    /// Replaces the empty-window policy.
    pub fn with_policy(mut self, policy: EmptyWindowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Discards the open window and returns to the unset state
    /// (no `min`, radix 0). Nothing is emitted.
    pub fn reset(&mut self) {
        self.window.reset();
        self.accumulator.reset();
    }

    /// Encodes one byte, returning the packet of the previous window when the
    /// byte forced a flush.
    pub fn encode(&mut self, value: u8) -> Option<Packet> {
        let Some(trigger) = self.window.check(value) else {
            self.fold(value);
            return None;
        };

        let (radix, min) = self.window.successor(value, trigger);
        log_metric!("event" = "flush", "trigger" = format!("{trigger:?}"));
        let emitted = self.take_for_trigger();
        if trigger.grows_radix() {
            log_metric!("event" = "grow_radix", "radix" = radix, "value" = value);
        }
        self.window.reopen(radix, min);
        self.fold(value);
        emitted
    }

    /// Range-checks `value` before encoding it.
    pub fn encode_value<T>(&mut self, value: T) -> Result<Option<Packet>>
    where
        T: PrimInt + Display,
    {
        let byte = checked_byte(value, "Parameter byte")?;
        Ok(self.encode(byte))
    }

    /// Encodes every byte of `values`, returning the packets flushed along the way.
    /// The open window is left for the caller to `flush`.
    pub fn encode_all(&mut self, values: &[u8]) -> Vec<Packet> {
        values.iter().filter_map(|&v| self.encode(v)).collect()
    }

    /// Snapshots the open window into a packet and resets to the unset state.
    ///
    /// A window without digits fails with `EmptyWindow` under the `Reject`
    /// policy and is left untouched. An unset window (after a previous flush
    /// or `reset`) has no header to write and fails under either policy.
    pub fn flush(&mut self) -> Result<Packet> {
        let Some(min) = self.window.min() else {
            return Err(RadixPackError::EmptyWindow);
        };
        if self.window.is_empty() && self.policy == EmptyWindowPolicy::Reject {
            return Err(RadixPackError::EmptyWindow);
        }
        let packet = self.snapshot(min);
        self.reset();
        Ok(packet)
    }

    pub fn radix(&self) -> u16 {
        self.window.radix()
    }

    /// Lower bound of the open window, `None` once the encoder has been flushed.
    pub fn min(&self) -> Option<u8> {
        self.window.min()
    }

    /// Number of digits folded into the open window.
    pub fn position(&self) -> usize {
        self.window.position()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn policy(&self) -> EmptyWindowPolicy {
        self.policy
    }

    /// Flush performed on behalf of `encode`. An unset window never emits,
    /// and an empty one only does under the `Emit` policy.
    fn take_for_trigger(&mut self) -> Option<Packet> {
        let packet = self
            .window
            .min()
            .filter(|_| !self.window.is_empty() || self.policy == EmptyWindowPolicy::Emit)
            .map(|min| self.snapshot(min));
        self.reset();
        packet
    }

    /// Serializes the opened window whose lower bound is `min`.
    fn snapshot(&self, min: u8) -> Packet {
        let data = self.accumulator.to_le_bytes();
        log_metric!(
            "event" = "snapshot",
            "radix" = self.window.radix(),
            "min" = min,
            "digits" = self.window.position(),
            "data_bytes" = data.len()
        );
        Packet::from_parts(self.window.radix(), min, data)
    }

    fn fold(&mut self, value: u8) {
        // `check` guarantees an opened window with `min <= value`.
        let min = self.window.min().unwrap_or(value);
        self.accumulator.fold(value - min, self.window.radix());
        self.window.record(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_construction_sets_initial_window() {
        let encoder = Encoder::new(32, 226).unwrap();
        assert_eq!(encoder.radix(), 195);
        assert_eq!(encoder.min(), Some(32));
        assert!(encoder.is_empty());
    }

    #[test]
    fn test_construction_rejects_bad_bounds() {
        assert!(matches!(
            Encoder::new(5, 5),
            Err(RadixPackError::InvalidBounds { .. })
        ));
        assert!(matches!(
            Encoder::new(6, 5),
            Err(RadixPackError::InvalidBounds { .. })
        ));
        assert!(matches!(
            Encoder::with_bounds(-1, 10),
            Err(RadixPackError::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            Encoder::with_bounds(0, 256),
            Err(RadixPackError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_encode_value_rejects_out_of_range() {
        let mut encoder = Encoder::new(0, 1).unwrap();
        assert!(matches!(
            encoder.encode_value(256),
            Err(RadixPackError::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            encoder.encode_value(-3i64),
            Err(RadixPackError::ValueOutOfRange { .. })
        ));
        // The encoder is still usable.
        assert_eq!(encoder.encode_value(1).unwrap(), None);
        assert_eq!(encoder.position(), 1);
    }

    #[test]
    fn test_fitting_values_emit_nothing() {
        let mut encoder = Encoder::new(0, 1).unwrap();
        for v in [0, 1, 0, 1] {
            assert_eq!(encoder.encode(v), None);
        }
        assert_eq!(encoder.position(), 4);
        assert_eq!(encoder.radix(), 2);
    }

    #[test]
    fn test_flush_serializes_header_and_alpha() {
        let mut encoder = Encoder::new(0, 1).unwrap();
        encoder.encode_all(&[0, 1, 0, 1]);
        let packet = encoder.flush().unwrap();
        assert_eq!(packet.radix(), 2);
        assert_eq!(packet.min(), 0);
        assert_eq!(packet.alpha(), BigUint::from(10u32));
        assert_eq!(packet.to_bytes(), vec![2, 0, 10]);

        // Flushing resets to the unset state.
        assert_eq!(encoder.min(), None);
        assert_eq!(encoder.radix(), 0);
        assert!(encoder.is_empty());
    }

    #[test]
    fn test_value_below_min_flushes_and_lowers_min() {
        let mut encoder = Encoder::new(10, 20).unwrap();
        assert_eq!(encoder.encode(12), None);
        assert_eq!(encoder.encode(15), None);

        let packet = encoder.encode(4).expect("value below min must flush");
        assert_eq!(packet.radix(), 11);
        assert_eq!(packet.min(), 10);
        assert_eq!(packet.alpha(), BigUint::from(2u32 + 5 * 11));

        assert_eq!(encoder.min(), Some(4));
        assert_eq!(encoder.radix(), 11);
        assert_eq!(encoder.position(), 1);
    }

    #[test]
    fn test_distinct_overflow_grows_radix_by_one() {
        let mut encoder = Encoder::new(0, 1).unwrap();
        encoder.encode(0);
        encoder.encode(1);

        let packet = encoder.encode(5).expect("third distinct value must flush");
        assert_eq!(packet.to_bytes(), vec![2, 0, 2]);

        // Grown by one, not resized to fit 5.
        assert_eq!(encoder.radix(), 3);
        assert_eq!(encoder.min(), Some(0));
        assert_eq!(encoder.position(), 1);
    }

    #[test]
    fn test_below_min_with_full_budget_grows_radix_and_lowers_min() {
        let mut encoder = Encoder::new(5, 6).unwrap();
        assert_eq!(encoder.encode(5), None);
        assert_eq!(encoder.encode(6), None);

        // 1 is below min and a third distinct value for radix 2.
        let packet = encoder.encode(1).expect("value must flush the full window");
        assert_eq!(packet.to_bytes(), vec![2, 5, 2]);

        assert_eq!(encoder.radix(), 3);
        assert_eq!(encoder.min(), Some(1));
        assert_eq!(encoder.position(), 1);
    }

    #[test]
    fn test_empty_flush_is_rejected_by_default() {
        let mut encoder = Encoder::new(0, 9).unwrap();
        assert!(matches!(encoder.flush(), Err(RadixPackError::EmptyWindow)));
        // Still open and usable.
        assert_eq!(encoder.min(), Some(0));
        assert_eq!(encoder.radix(), 10);
    }

    #[test]
    fn test_empty_flush_emits_header_only_packet_when_allowed() {
        let mut encoder = Encoder::new(0, 9)
            .unwrap()
            .with_policy(EmptyWindowPolicy::Emit);
        let packet = encoder.flush().unwrap();
        assert_eq!(packet.to_bytes(), vec![10, 0]);
        assert!(packet.is_empty());
    }

    #[test]
    fn test_flushing_an_unset_window_fails_under_either_policy() {
        for policy in [EmptyWindowPolicy::Reject, EmptyWindowPolicy::Emit] {
            let mut encoder = Encoder::new(0, 9).unwrap().with_policy(policy);
            encoder.encode(4);
            assert_eq!(encoder.flush().unwrap().to_bytes(), vec![10, 0, 4]);
            assert!(matches!(encoder.flush(), Err(RadixPackError::EmptyWindow)));
        }
    }

    #[test]
    fn test_trigger_on_empty_window_follows_policy() {
        let mut rejecting = Encoder::new(50, 60).unwrap();
        assert_eq!(rejecting.encode(3), None);
        assert_eq!(rejecting.min(), Some(3));

        let mut emitting = Encoder::new(50, 60)
            .unwrap()
            .with_policy(EmptyWindowPolicy::Emit);
        let packet = emitting.encode(3).expect("emit policy flushes empty windows");
        assert_eq!(packet.to_bytes(), vec![11, 50]);
    }

    #[test]
    fn test_encode_after_flush_starts_unit_radix_window() {
        let mut encoder = Encoder::new(0, 9).unwrap();
        encoder.encode(4);
        encoder.flush().unwrap();

        // The unset window never emits, whatever the policy.
        assert_eq!(encoder.encode(7), None);
        assert_eq!(encoder.radix(), 1);
        assert_eq!(encoder.min(), Some(7));
    }

    #[test]
    fn test_reset_discards_open_window() {
        let mut encoder = Encoder::new(0, 9).unwrap();
        encoder.encode_all(&[1, 2, 3]);
        encoder.reset();
        assert!(encoder.is_empty());
        assert_eq!(encoder.min(), None);
    }
}
