//! Byte-stream access to the latest acceleration sample.

pub mod snapshot;

use crate::domain::acceleration::Acceleration;
use crate::drivers::sensors::mma8452::{sample, Mma8452, Mma8452Error};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

pub use snapshot::{Encoding, Snapshot, SnapshotCursor};

struct Inner<I> {
    driver: Mma8452<I>,
    cursor: SnapshotCursor,
    latest: Option<Acceleration>,
}

/// A configured sensor behind a shared read cursor.
///
/// Every read runs in one critical section covering the decision to fetch, the fetch itself
/// and the copy, so concurrent readers never trigger overlapping bus transactions and a
/// sequence of partial reads always sees a single sample.
pub struct AccelStream<M, I>
where
    M: RawMutex,
{
    encoding: Encoding,
    inner: Mutex<M, Inner<I>>,
}

impl<M, I> AccelStream<M, I>
where
    M: RawMutex,
    I: I2c,
{
    /// Initialize `driver` and expose it as a stream. On failure no stream is created.
    pub async fn mount<D: DelayNs>(
        mut driver: Mma8452<I>,
        delay: &mut D,
        encoding: Encoding,
    ) -> Result<Self, Mma8452Error<I::Error>> {
        if let Err(e) = driver.initialize(delay).await {
            error!("initialization failed, stream not mounted");
            return Err(e);
        }
        info!("stream mounted with {:?} encoding", encoding);
        Ok(Self {
            encoding,
            inner: Mutex::new(Inner {
                driver,
                cursor: SnapshotCursor::new(encoding),
                latest: None,
            }),
        })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Bytes in one complete snapshot.
    pub fn snapshot_len(&self) -> usize {
        self.encoding.len()
    }

    /// Copy the next bytes of the current snapshot into `buf`.
    ///
    /// A read that starts a sequence fetches first. `Ok(0)` with a non-empty `buf` means no
    /// new sample was ready; nothing changed and the previous snapshot is kept. A bus error
    /// leaves the previous snapshot and the cursor untouched.
    pub async fn read(&self, buf: &mut [u8]) -> Result<usize, Mma8452Error<I::Error>> {
        if buf.is_empty() {
            return Ok(0);
        }

        let mut guard = self.inner.lock().await;
        let inner = &mut *guard;

        if !inner.cursor.is_draining() {
            let full_scale = inner.driver.config().full_scale;
            match inner.driver.fetch().await {
                Ok(Some(raw)) => {
                    let acceleration = sample::convert(sample::assemble(&raw), full_scale);
                    trace!("new snapshot {:?}", acceleration);
                    inner.cursor.load(&acceleration);
                    inner.latest = Some(acceleration);
                }
                Ok(None) => return Ok(0),
                Err(e) => {
                    warn!("sample fetch failed");
                    return Err(e);
                }
            }
        }

        Ok(inner.cursor.drain(buf))
    }

    /// The sample behind the current snapshot, if one was ever fetched.
    pub async fn latest(&self) -> Option<Acceleration> {
        self.inner.lock().await.latest
    }

    /// Offset of the next byte to be read; zero between sequences.
    pub async fn position(&self) -> usize {
        self.inner.lock().await.cursor.offset()
    }

    /// Tear down the stream and hand back the driver.
    pub fn release(self) -> Mma8452<I> {
        self.inner.into_inner().driver
    }
}
