//! Fixed-capacity byte FIFO that decouples key translation from transmission.
//!
//! # What is a ring buffer? (for beginners)
//!
//! A ring buffer is an array whose end wraps around to its start.  Two
//! cursors walk around the ring: the *write cursor* marks where the next
//! pushed byte lands, the *read cursor* marks which byte is popped next.
//! Neither cursor ever moves data, so push and pop are both O(1) and never
//! allocate.
//!
//! When both cursors point at the same slot the queue is either completely
//! empty or completely full.  This implementation keeps an explicit element
//! count so the two cases are never confused.
//!
//! # Capacity
//!
//! Capacity is any value from 1 to 255.  The cursors wrap at `capacity`, not
//! at a power-of-two mask, so odd depths such as 3 or 100 behave exactly like
//! 16 or 128.  A capacity of zero is rejected at construction time: such a
//! queue would be simultaneously empty and full.
//!
//! # Zero bytes and empty reads
//!
//! The legacy firmware returned `0x00` from an empty pop, which cannot be told
//! apart from a queued `0x00`.  Here [`ByteFifo::pop`] returns `None` instead,
//! and no value of the 0–255 range is reserved as a sentinel.  Transmitters
//! still follow the check-before-read contract: look at
//! [`ByteFifo::is_empty`] (or [`ByteFifo::len`]) and only then pop.
//!
//! # Thread safety
//!
//! None.  A `ByteFifo` is owned by a single sequential flow of control
//! (one interrupt handler plus one main loop, or a single task).  Sharing it
//! between two contexts requires external locking.

use thiserror::Error;

/// Errors reported by [`ByteFifo`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FifoError {
    /// A queue cannot be constructed with zero slots.
    #[error("fifo capacity must be between 1 and 255, got 0")]
    ZeroCapacity,

    /// The queue is full; the rejected byte is handed back to the caller.
    #[error("fifo is full, byte 0x{0:02x} was not queued")]
    Full(u8),
}

/// A first-in first-out queue of bytes with a fixed capacity of 1–255.
///
/// # Examples
///
/// ```rust
/// use x68k_keycore::ByteFifo;
///
/// let mut fifo = ByteFifo::new(3).unwrap();
/// fifo.push(0x1e).unwrap();
/// fifo.push(0x9e).unwrap();
/// assert_eq!(fifo.pop(), Some(0x1e));
/// assert_eq!(fifo.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ByteFifo {
    /// Backing storage, exactly `capacity` bytes, allocated once.
    slots: Box<[u8]>,
    /// Number of queued bytes.
    count: u8,
    /// Slot the next push writes to.
    write: u8,
    /// Slot the next pop reads from.
    read: u8,
}

impl ByteFifo {
    /// Creates an empty queue with room for `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FifoError::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: u8) -> Result<Self, FifoError> {
        if capacity == 0 {
            return Err(FifoError::ZeroCapacity);
        }
        Ok(Self {
            slots: vec![0u8; usize::from(capacity)].into_boxed_slice(),
            count: 0,
            write: 0,
            read: 0,
        })
    }

    /// Resets both cursors and the count.
    ///
    /// The backing storage is not zeroed; stale bytes are unreachable because
    /// reads are bounded by the count.
    pub fn clear(&mut self) {
        self.count = 0;
        self.write = 0;
        self.read = 0;
    }

    /// Appends `byte` at the tail of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`FifoError::Full`] carrying `byte` when no slot is free.  The
    /// queue is left untouched; the producer decides whether to drop or retry.
    pub fn push(&mut self, byte: u8) -> Result<(), FifoError> {
        if self.is_full() {
            return Err(FifoError::Full(byte));
        }
        self.slots[usize::from(self.write)] = byte;
        self.write = self.advance(self.write);
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the byte at the head of the queue.
    ///
    /// Returns `None` when the queue is empty.
    pub fn pop(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let byte = self.slots[usize::from(self.read)];
        self.read = self.advance(self.read);
        self.count -= 1;
        Some(byte)
    }

    /// Returns the byte at the head of the queue without removing it.
    pub fn peek(&self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[usize::from(self.read)])
        }
    }

    /// Returns `true` when no bytes are queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` when every slot holds a queued byte.
    #[inline]
    pub fn is_full(&self) -> bool {
        usize::from(self.count) == self.slots.len()
    }

    /// Number of queued bytes.
    #[inline]
    pub fn len(&self) -> u8 {
        self.count
    }

    /// Number of slots fixed at construction.
    #[inline]
    pub fn capacity(&self) -> u8 {
        // Construction guarantees 1..=255 slots.
        self.slots.len() as u8
    }

    /// Moves a cursor one slot forward, wrapping at the capacity.
    #[inline]
    fn advance(&self, cursor: u8) -> u8 {
        let next = usize::from(cursor) + 1;
        if next == self.slots.len() {
            0
        } else {
            next as u8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_capacity() {
        assert_eq!(ByteFifo::new(0).unwrap_err(), FifoError::ZeroCapacity);
    }

    #[test]
    fn test_new_fifo_is_empty_and_not_full() {
        // Arrange / Act
        let fifo = ByteFifo::new(4).expect("capacity 4 is valid");

        // Assert
        assert!(fifo.is_empty());
        assert!(!fifo.is_full());
        assert_eq!(fifo.len(), 0);
        assert_eq!(fifo.capacity(), 4);
    }

    #[test]
    fn test_every_capacity_fills_after_exactly_capacity_pushes() {
        for capacity in 1..=255u8 {
            // Arrange
            let mut fifo = ByteFifo::new(capacity).unwrap();

            // Act
            for i in 0..capacity {
                assert!(!fifo.is_full(), "capacity {capacity} full after {i} pushes");
                fifo.push(i).expect("push below capacity must succeed");
            }

            // Assert
            assert!(fifo.is_full(), "capacity {capacity} should be full");
            assert_eq!(fifo.len(), capacity);
            assert_eq!(fifo.push(0xAA), Err(FifoError::Full(0xAA)));
            assert_eq!(fifo.len(), capacity, "failed push must not change count");
            assert_eq!(fifo.peek(), Some(0), "failed push must not disturb the head");
        }
    }

    #[test]
    fn test_pop_on_empty_returns_none() {
        let mut fifo = ByteFifo::new(2).unwrap();
        assert_eq!(fifo.pop(), None);
        assert!(fifo.is_empty());
    }

    #[test]
    fn test_zero_byte_is_a_legitimate_payload() {
        // Arrange
        let mut fifo = ByteFifo::new(2).unwrap();

        // Act
        fifo.push(0x00).unwrap();

        // Assert
        assert!(!fifo.is_empty());
        assert_eq!(fifo.pop(), Some(0x00));
        assert_eq!(fifo.pop(), None);
    }

    #[test]
    fn test_capacity_three_scenario() {
        // Arrange
        let mut fifo = ByteFifo::new(3).unwrap();

        // Act / Assert
        assert!(fifo.push(10).is_ok());
        assert!(fifo.push(20).is_ok());
        assert!(fifo.push(30).is_ok());
        assert!(fifo.is_full());
        assert!(fifo.push(40).is_err());

        assert_eq!(fifo.pop(), Some(10));
        assert_eq!(fifo.pop(), Some(20));
        assert!(fifo.push(40).is_ok());
        assert_eq!(fifo.pop(), Some(30));
        assert_eq!(fifo.pop(), Some(40));
        assert!(fifo.is_empty());
    }

    #[test]
    fn test_wraparound_preserves_fifo_order() {
        for capacity in [1u8, 2, 3, 7, 100, 255] {
            // Arrange: fill, then drain all but one so the cursors sit at the end.
            let mut fifo = ByteFifo::new(capacity).unwrap();
            for i in 0..capacity {
                fifo.push(i).unwrap();
            }
            for i in 0..capacity - 1 {
                assert_eq!(fifo.pop(), Some(i));
            }

            // Act: two more pushes force the write cursor round the ring.
            let mut expected = vec![capacity - 1];
            for extra in [0xF0u8, 0xF1] {
                if fifo.push(extra).is_ok() {
                    expected.push(extra);
                }
            }

            // Assert
            let mut drained = Vec::new();
            while let Some(b) = fifo.pop() {
                drained.push(b);
            }
            assert_eq!(drained, expected, "capacity {capacity}");
        }
    }

    #[test]
    fn test_interleaved_operations_stay_fifo() {
        // Arrange
        let mut fifo = ByteFifo::new(5).unwrap();
        let mut model = std::collections::VecDeque::new();
        let mut next = 0u8;

        // Act: a deterministic push/pop pattern that circles the ring many times.
        for step in 0..500u32 {
            if step % 3 == 2 {
                assert_eq!(fifo.pop(), model.pop_front());
            } else if !fifo.is_full() {
                fifo.push(next).unwrap();
                model.push_back(next);
                next = next.wrapping_add(1);
            }
            assert_eq!(usize::from(fifo.len()), model.len());
        }

        // Assert
        while let Some(b) = fifo.pop() {
            assert_eq!(Some(b), model.pop_front());
        }
        assert!(model.is_empty());
    }

    #[test]
    fn test_clear_resets_regardless_of_cursor_position() {
        // Arrange: move the cursors off zero.
        let mut fifo = ByteFifo::new(4).unwrap();
        for b in [1, 2, 3] {
            fifo.push(b).unwrap();
        }
        fifo.pop();
        fifo.pop();
        fifo.push(4).unwrap();
        fifo.push(5).unwrap();

        // Act
        fifo.clear();

        // Assert
        assert!(fifo.is_empty());
        assert_eq!(fifo.len(), 0);
        assert_eq!(fifo.pop(), None);

        // The ring is fully usable again after clearing.
        for b in [6, 7, 8, 9] {
            fifo.push(b).unwrap();
        }
        assert!(fifo.is_full());
        assert_eq!(fifo.pop(), Some(6));
    }

    #[test]
    fn test_error_messages_render_the_rejected_byte() {
        assert_eq!(
            FifoError::Full(0x1e).to_string(),
            "fifo is full, byte 0x1e was not queued"
        );
    }
}
