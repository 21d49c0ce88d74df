//! Fixed-size chunking of a byte source

use bytes::Bytes;
use futures::Stream;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Splits a byte source into chunks of `chunk_size` bytes.
///
/// Every chunk is full except possibly the last. End of input ends the
/// sequence without an empty chunk. The sequence is not restartable: once it
/// ends, or a read fails, `next_chunk` keeps returning `Ok(None)`.
pub struct ChunkReader<R> {
    reader: R,
    chunk_size: usize,
    finished: bool,
}

impl<R: AsyncRead + Unpin> ChunkReader<R> {
    /// Wrap `reader`. A zero `chunk_size` fails with `InvalidInput`.
    pub fn new(reader: R, chunk_size: usize) -> io::Result<Self> {
        if chunk_size == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "chunk size must be non-zero",
            ));
        }
        Ok(Self {
            reader,
            chunk_size,
            finished: false,
        })
    }

    /// Chunk size in bytes
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Read the next chunk, or `None` once the source is exhausted.
    pub async fn next_chunk(&mut self) -> io::Result<Option<Bytes>> {
        if self.finished {
            return Ok(None);
        }

        let mut buffer = vec![0u8; self.chunk_size];
        let mut filled = 0;

        // Short reads are normal for files and sockets; keep reading until the
        // chunk is full or the source ends.
        while filled < self.chunk_size {
            match self.reader.read(&mut buffer[filled..]).await {
                Ok(0) => {
                    self.finished = true;
                    break;
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Err(e);
                }
            }
        }

        if filled == 0 {
            return Ok(None);
        }
        buffer.truncate(filled);
        Ok(Some(Bytes::from(buffer)))
    }

    /// Turn the reader into a stream of chunks.
    pub fn into_stream(self) -> impl Stream<Item = io::Result<Bytes>> {
        futures::stream::try_unfold(self, |mut reader| async move {
            let chunk = reader.next_chunk().await?;
            Ok::<_, io::Error>(chunk.map(|chunk| (chunk, reader)))
        })
    }
}

/// Number of messages needed to carry `len` bytes in chunks of `chunk_size`.
pub fn chunk_count(len: u64, chunk_size: u64) -> u64 {
    if chunk_size == 0 {
        return 0;
    }
    len.div_ceil(chunk_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use tokio::io::ReadBuf;

    async fn collect(data: &[u8], chunk_size: usize) -> Vec<Bytes> {
        let mut reader = ChunkReader::new(data, chunk_size).unwrap();
        let mut chunks = Vec::new();
        while let Some(chunk) = reader.next_chunk().await.unwrap() {
            chunks.push(chunk);
        }
        chunks
    }

    /// Yields at most `step` bytes per read, then optionally fails.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        step: usize,
        fail_at: Option<usize>,
    }

    impl AsyncRead for Trickle {
        fn poll_read(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            if self.fail_at.is_some_and(|at| self.pos >= at) {
                return Poll::Ready(Err(io::Error::new(io::ErrorKind::Other, "disk gone")));
            }
            let end = (self.pos + self.step).min(self.data.len());
            let end = match self.fail_at {
                Some(at) => end.min(at),
                None => end,
            };
            let n = (end - self.pos).min(buf.remaining());
            let start = self.pos;
            buf.put_slice(&self.data[start..start + n]);
            self.pos += n;
            Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn test_ten_bytes_by_four() {
        let chunks = collect(b"0123456789", 4).await;
        let lens: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
        assert_eq!(lens, vec![4, 4, 2]);
        assert_eq!(chunks.concat(), b"0123456789");
    }

    #[tokio::test]
    async fn test_exact_multiple_has_full_last_chunk() {
        let chunks = collect(&[7u8; 12], 4).await;
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.len() == 4));
    }

    #[tokio::test]
    async fn test_empty_source_yields_nothing() {
        assert!(collect(b"", 8).await.is_empty());
    }

    #[tokio::test]
    async fn test_round_trip_various_sizes() {
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        for chunk_size in [1, 3, 7, 64, 999, 1000, 4096] {
            let chunks = collect(&data, chunk_size).await;
            assert_eq!(chunks.len() as u64, chunk_count(1000, chunk_size as u64));
            assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= chunk_size));
            let expected_last = match 1000 % chunk_size {
                0 => chunk_size,
                rem => rem,
            };
            assert_eq!(chunks.last().unwrap().len(), expected_last);
            assert_eq!(chunks.concat(), data);
        }
    }

    #[tokio::test]
    async fn test_short_reads_are_coalesced() {
        let source = Trickle {
            data: b"abcdefghij".to_vec(),
            pos: 0,
            step: 3,
            fail_at: None,
        };
        let mut reader = ChunkReader::new(source, 4).unwrap();
        assert_eq!(reader.next_chunk().await.unwrap().unwrap(), &b"abcd"[..]);
        assert_eq!(reader.next_chunk().await.unwrap().unwrap(), &b"efgh"[..]);
        assert_eq!(reader.next_chunk().await.unwrap().unwrap(), &b"ij"[..]);
        assert!(reader.next_chunk().await.unwrap().is_none());
        assert!(reader.next_chunk().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_read_error_ends_sequence() {
        let source = Trickle {
            data: b"abcdefghij".to_vec(),
            pos: 0,
            step: 10,
            fail_at: Some(6),
        };
        let mut reader = ChunkReader::new(source, 4).unwrap();
        assert_eq!(reader.next_chunk().await.unwrap().unwrap(), &b"abcd"[..]);
        let err = reader.next_chunk().await.unwrap_err();
        assert_eq!(err.to_string(), "disk gone");
        assert!(reader.next_chunk().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_into_stream() {
        let chunks: Vec<Bytes> = ChunkReader::new(&b"hello world"[..], 5)
            .unwrap()
            .into_stream()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(chunks, vec![&b"hello"[..], &b" worl"[..], &b"d"[..]]);
    }

    #[test]
    fn test_zero_chunk_size_is_rejected() {
        let err = ChunkReader::new(&b"data"[..], 0).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_chunk_count() {
        assert_eq!(chunk_count(10, 4), 3);
        assert_eq!(chunk_count(8, 4), 2);
        assert_eq!(chunk_count(0, 4), 0);
        assert_eq!(chunk_count(7, 3), 3);
    }
}
