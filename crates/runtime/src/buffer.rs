//! FIFO of move requests waiting to be resolved.

use std::collections::VecDeque;

use tower_core::Direction;

/// Bounded queue of directional requests.
///
/// Requests arriving while earlier ones are still pending are appended; the
/// session drains them one at a time and clears the whole queue when a move
/// is rejected.
#[derive(Clone, Debug, Default)]
pub struct MoveBuffer {
    queue: VecDeque<Direction>,
    capacity: Option<usize>,
}

impl MoveBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer that refuses requests beyond `capacity` pending moves.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Appends a request. Returns false when the buffer is full.
    pub fn push(&mut self, direction: Direction) -> bool {
        if self
            .capacity
            .is_some_and(|capacity| self.queue.len() >= capacity)
        {
            return false;
        }
        self.queue.push_back(direction);
        true
    }

    pub fn pop(&mut self) -> Option<Direction> {
        self.queue.pop_front()
    }

    /// Drops every pending request and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let discarded = self.queue.len();
        self.queue.clear();
        discarded
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.queue.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_arrival_order() {
        let mut buffer = MoveBuffer::new();
        buffer.push(Direction::Up);
        buffer.push(Direction::Left);
        assert_eq!(buffer.pop(), Some(Direction::Up));
        assert_eq!(buffer.pop(), Some(Direction::Left));
        assert_eq!(buffer.pop(), None);
    }

    #[test]
    fn capacity_limits_pending_requests() {
        let mut buffer = MoveBuffer::with_capacity(2);
        assert!(buffer.push(Direction::Up));
        assert!(buffer.push(Direction::Up));
        assert!(!buffer.push(Direction::Down));
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![Direction::Up; 2]);
    }

    #[test]
    fn clear_reports_discarded_count() {
        let mut buffer = MoveBuffer::new();
        buffer.push(Direction::Right);
        buffer.push(Direction::Down);
        assert_eq!(buffer.clear(), 2);
        assert!(buffer.is_empty());
    }
}
