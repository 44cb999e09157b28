use std::fmt;

use cas_wire::{ChunkFrame, Tag};

use crate::error::DecodeError;

/// Overall bit order for PWM-encoded data, from bit 2 of the `pwms`
/// aux byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOrder {
    Lsb,
    Msb,
}

impl fmt::Display for BitOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lsb => f.write_str("LSB"),
            Self::Msb => f.write_str("MSB"),
        }
    }
}

/// A decoded CAS chunk — one variant per known tag.
///
/// This is the typed layer above [`ChunkFrame`]: the frame carries the
/// raw tag/aux/payload bytes, a `Chunk` carries what they mean. The
/// mapping from frame to variant lives in [`Chunk::from_frame`], which
/// also enforces the tag-specific length constraints.
///
/// ```text
/// ┌─────────┬──────────┬─────────────────────────────────────────┐
/// │ Variant │ Wire tag │ Aux meaning                             │
/// ├─────────┼──────────┼─────────────────────────────────────────┤
/// │ Fuji    │ "FUJI"   │ unused (payload is the tape title)      │
/// │ Baud    │ "baud"   │ baud rate (u16 LE)                      │
/// │ Fsk     │ "fsk "   │ leading silence, ms (u16 LE)            │
/// │ Data    │ "data"   │ leading silence, ms (u16 LE)            │
/// │ Pwmc    │ "pwmc"   │ leading silence, ms (u16 LE)            │
/// │ Pwml    │ "pwml"   │ leading silence, ms (u16 LE)            │
/// │ Pwmd    │ "pwmd"   │ aux[0] = 0-bit pulse, aux[1] = 1-bit    │
/// │ Pwms    │ "pwms"   │ aux[0] bit 2 = bit order, bits 0-1 =    │
/// │         │          │ pwm bit order (payload = sample, u16 LE)│
/// └─────────┴──────────┴─────────────────────────────────────────┘
/// ```
///
/// Unknown tags have no variant: the tag set is closed, so they are a
/// [`DecodeError::UnknownTag`], never an opaque passthrough.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Chunk {
    /// Tape description record; the payload is the title text.
    Fuji { name: String },

    /// Baud rate for subsequent FSK data. Header-only.
    Baud { rate: u16 },

    /// FSK-encoded data record.
    Fsk { silence_ms: u16, length: u16 },

    /// Standard data record.
    Data { silence_ms: u16, length: u16 },

    /// PWM block marker.
    Pwmc { silence_ms: u16, length: u16 },

    /// PWM raw pulse-length record; payload is a sequence of u16 pairs.
    Pwml { silence_ms: u16, length: u16 },

    /// PWM bit-duration settings: pulse lengths for 0-bits and 1-bits.
    Pwmd {
        zero_duration: u8,
        one_duration: u8,
        length: u16,
    },

    /// PWM sample-rate and bit-order settings.
    Pwms {
        order: BitOrder,
        /// Two-bit field from aux[0] bits 0-1.
        pwm_order: u8,
        /// Sample value from the two payload bytes (u16 LE).
        sample: u16,
    },
}

impl Chunk {
    /// Classify a raw frame into a typed chunk, enforcing the
    /// tag-specific constraints.
    ///
    /// `index` is the chunk's zero-based position in the stream; it is
    /// only used to label errors.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnknownTag`] for any tag outside the known set.
    /// - [`DecodeError::LengthMismatch`] for `baud` with a nonzero
    ///   length or `pwms` with length ≠ 2.
    /// - [`DecodeError::OddLength`] for `pwml` with an odd length.
    /// - [`DecodeError::InvalidText`] for a `FUJI` payload that is not
    ///   valid UTF-8.
    pub fn from_frame(index: usize, frame: &ChunkFrame) -> Result<Self, DecodeError> {
        let length = frame.length();

        match frame.tag {
            Tag::FUJI => {
                let name = std::str::from_utf8(&frame.payload)
                    .map_err(|_| DecodeError::InvalidText {
                        index,
                        tag: frame.tag,
                    })?
                    .to_owned();
                Ok(Self::Fuji { name })
            }

            Tag::BAUD => {
                if length != 0 {
                    return Err(DecodeError::LengthMismatch {
                        index,
                        tag: frame.tag,
                        expected: 0,
                        actual: length,
                    });
                }
                Ok(Self::Baud {
                    rate: frame.aux_u16(),
                })
            }

            Tag::FSK => Ok(Self::Fsk {
                silence_ms: frame.aux_u16(),
                length,
            }),

            Tag::DATA => Ok(Self::Data {
                silence_ms: frame.aux_u16(),
                length,
            }),

            Tag::PWMC => Ok(Self::Pwmc {
                silence_ms: frame.aux_u16(),
                length,
            }),

            Tag::PWML => {
                if length % 2 != 0 {
                    return Err(DecodeError::OddLength {
                        index,
                        tag: frame.tag,
                        actual: length,
                    });
                }
                Ok(Self::Pwml {
                    silence_ms: frame.aux_u16(),
                    length,
                })
            }

            Tag::PWMD => Ok(Self::Pwmd {
                zero_duration: frame.aux[0],
                one_duration: frame.aux[1],
                length,
            }),

            Tag::PWMS => {
                if length != 2 {
                    return Err(DecodeError::LengthMismatch {
                        index,
                        tag: frame.tag,
                        expected: 2,
                        actual: length,
                    });
                }
                let sample = u16::from_le_bytes([frame.payload[0], frame.payload[1]]);
                let order = if (frame.aux[0] >> 2) & 1 == 1 {
                    BitOrder::Msb
                } else {
                    BitOrder::Lsb
                };
                Ok(Self::Pwms {
                    order,
                    pwm_order: frame.aux[0] & 3,
                    sample,
                })
            }

            tag => Err(DecodeError::UnknownTag { index, tag }),
        }
    }

    /// The `pwms` sample value, if this chunk carries one.
    ///
    /// This is the one piece of state the format carries across chunks;
    /// nothing downstream consumes it today, but the reader tracks it
    /// for callers that will.
    #[must_use]
    pub fn sample(&self) -> Option<u16> {
        match self {
            Self::Pwms { sample, .. } => Some(*sample),
            _ => None,
        }
    }
}

impl fmt::Display for Chunk {
    /// One dump line per chunk.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fuji { name } => write!(f, "FUJI '{name}'"),
            Self::Baud { rate } => write!(f, "Baud rate: {rate}"),
            Self::Fsk { silence_ms, length } => {
                write!(f, "FSK, silence {silence_ms} ms, length {length}")
            }
            Self::Data { silence_ms, length } => {
                write!(f, "DATA, silence {silence_ms} ms, length {length}")
            }
            Self::Pwmc { silence_ms, length } => {
                write!(f, "PWMC, silence {silence_ms} ms, length {length}")
            }
            Self::Pwml { silence_ms, length } => {
                write!(f, "PWML, silence {silence_ms} ms, length {length}")
            }
            Self::Pwmd {
                zero_duration,
                one_duration,
                length,
            } => write!(
                f,
                "PWMD, 0 duration {zero_duration}, 1 duration {one_duration}, length {length}"
            ),
            Self::Pwms {
                order,
                pwm_order,
                sample,
            } => write!(
                f,
                "PWMS, bit order {order}, pwm bit order {pwm_order:02b}, sample {sample}"
            ),
        }
    }
}
