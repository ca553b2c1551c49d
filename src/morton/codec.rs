//! The codec type
use log::{debug, warn};

use crate::morton::schedule::Schedule;
use crate::types::{low_mask, CodeType, Result};

/// Packs `dimensions` lanes of `bits` bits each into a single [`CodeType`].
///
/// A codec is immutable once built. It is `Send + Sync`, and one instance may be used by any
/// number of threads at the same time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Codec {
    pub(crate) dimensions: usize,
    pub(crate) bits: u32,
    pub(crate) schedule: Schedule,
}

impl Codec {
    /// Build a codec for `dimensions` lanes of `bits` bits.
    ///
    /// Fails with [`Error::Configuration`](crate::Error::Configuration) if either argument is
    /// zero or if `dimensions * bits` exceeds 64.
    pub fn new(dimensions: usize, bits: u32) -> Result<Self> {
        let schedule = Schedule::new(dimensions, bits)?;

        if dimensions == 1 {
            warn!("Creating a codec with a single dimension. Packing and unpacking are the identity.");
        }
        debug!("Built codec with {dimensions} dimensions and {bits} bits: {schedule}");

        Ok(Self {
            dimensions,
            bits,
            schedule,
        })
    }

    /// Number of lanes in a code
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Bits per lane
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// The precomputed split/compact schedule
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Largest value an unsigned lane can hold, `2^bits - 1`.
    pub fn max_value(&self) -> CodeType {
        low_mask(self.bits)
    }

    /// Largest magnitude a signed lane can hold, `2^(bits - 1) - 1`.
    pub fn max_magnitude(&self) -> CodeType {
        self.max_value() >> 1
    }

    /// Number of code bits holding lane data; any higher bits are ignored when unpacking.
    pub fn code_bits(&self) -> u32 {
        self.dimensions as u32 * self.bits
    }
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use log::{Level, LevelFilter, Log, Metadata, Record};

    use super::*;
    use crate::types::Error;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_codec_is_shareable() {
        assert_send_sync::<Codec>();
    }

    #[test]
    fn test_accessors() {
        let codec = Codec::new(3, 21).unwrap();
        assert_eq!(codec.dimensions(), 3);
        assert_eq!(codec.bits(), 21);
        assert_eq!(codec.max_value(), (1 << 21) - 1);
        assert_eq!(codec.max_magnitude(), (1 << 20) - 1);
        assert_eq!(codec.code_bits(), 63);
        assert_eq!(codec.schedule().len(), 6);
    }

    #[test]
    fn test_extreme_widths() {
        let codec = Codec::new(1, 64).unwrap();
        assert_eq!(codec.max_value(), u64::MAX);
        assert_eq!(codec.max_magnitude(), i64::MAX as u64);

        let codec = Codec::new(64, 1).unwrap();
        assert_eq!(codec.max_value(), 1);
        assert_eq!(codec.max_magnitude(), 0);
    }

    #[test]
    fn test_invalid_configuration() {
        for (dimensions, bits) in [(0, 1), (1, 0), (1, 65), (2, 33), (65, 1)] {
            assert_eq!(
                Codec::new(dimensions, bits),
                Err(Error::Configuration { dimensions, bits })
            );
        }
    }

    struct Recorder(Mutex<Vec<(Level, String)>>);

    impl Log for Recorder {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if let Ok(mut records) = self.0.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static RECORDER: Recorder = Recorder(Mutex::new(Vec::new()));

    fn recorded(level: Level, needle: &str) -> bool {
        RECORDER
            .0
            .lock()
            .unwrap()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }

    #[test]
    fn test_build_logging() {
        // Only one logger can be installed per process; an existing one is kept.
        let _ = log::set_logger(&RECORDER);
        log::set_max_level(LevelFilter::Debug);

        let codec = Codec::new(1, 64).unwrap();
        assert_eq!(codec.unpack(12345), vec![12345]);
        assert!(recorded(Level::Warn, "single dimension"));
        assert!(recorded(Level::Debug, "1 dimensions and 64 bits"));

        Codec::new(2, 7).unwrap();
        assert!(recorded(Level::Debug, "2 dimensions and 7 bits"));
        assert!(!recorded(Level::Warn, "2 dimensions"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = Codec::new(5, 12).unwrap();
        let b = Codec::new(5, 12).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.schedule(), b.schedule());
    }
}
