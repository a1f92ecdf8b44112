use crate::domain::acceleration::Acceleration;
use core::fmt::Write;
use heapless::{String, Vec};

/// Three little-endian `i16`.
pub const BINARY_LEN: usize = 6;
/// Three 4-digit hex fields, two separators and the terminator.
pub const TEXT_LEN: usize = 15;

pub const SEPARATOR: char = ' ';
pub const TERMINATOR: char = '\n';

/// Wire format of a snapshot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Encoding {
    #[default]
    Binary,
    Text,
}

impl Encoding {
    pub const fn len(&self) -> usize {
        match self {
            Encoding::Binary => BINARY_LEN,
            Encoding::Text => TEXT_LEN,
        }
    }
}

/// Write `sample` as `xxxx yyyy zzzz\n`, each field the lowercase hex of the 16-bit
/// two's-complement value.
pub fn write_text<W: Write>(sample: &Acceleration, w: &mut W) -> core::fmt::Result {
    for (i, value) in sample.values().iter().enumerate() {
        if i > 0 {
            w.write_char(SEPARATOR)?;
        }
        write!(w, "{:04x}", *value as u16)?;
    }
    w.write_char(TERMINATOR)
}

/// One converted sample in its wire format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    bytes: Vec<u8, TEXT_LEN>,
}

impl Snapshot {
    pub fn encode(sample: &Acceleration, encoding: Encoding) -> Self {
        // Both encodings fit the buffer exactly.
        let bytes = match encoding {
            Encoding::Binary => Vec::from_slice(&sample.to_le_bytes()).unwrap_or_default(),
            Encoding::Text => {
                let mut text: String<TEXT_LEN> = String::new();
                write_text(sample, &mut text).ok();
                text.into_bytes()
            }
        };
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Read position over the current snapshot.
///
/// An offset of zero is the idle state: the next read starts a new sequence and may replace
/// the snapshot. Any other offset means a sequence is being drained and the snapshot is
/// frozen until its last byte has been handed out.
pub struct SnapshotCursor {
    encoding: Encoding,
    snapshot: Snapshot,
    offset: usize,
}

impl SnapshotCursor {
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            snapshot: Snapshot::default(),
            offset: 0,
        }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_draining(&self) -> bool {
        self.offset > 0
    }

    /// Start a new sequence over `sample`. Ignored while draining.
    pub fn load(&mut self, sample: &Acceleration) -> bool {
        if self.is_draining() {
            return false;
        }
        self.snapshot = Snapshot::encode(sample, self.encoding);
        true
    }

    /// Copy as much of the remaining snapshot as fits into `buf`.
    pub fn drain(&mut self, buf: &mut [u8]) -> usize {
        let remaining = &self.snapshot.as_bytes()[self.offset..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.offset += n;
        if self.offset == self.snapshot.len() {
            self.offset = 0;
        }
        n
    }
}
