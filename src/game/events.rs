//! Event queue for sound cues.
//!
//! The core never touches the audio device. It queues named cues during a
//! tick and the sound bank drains them once per frame, so each system
//! handles its own concern without knowing about the others.

/// A queue for events of a single type.
/// Events are collected during the tick and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events in queue
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Named sound cues issued by the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Runner swings, whether or not anything is hit
    Attack,
    /// An orb was consumed by a collision
    OrbBreak,
    /// Phase 1 -> phase 2 transformation
    Transform,
    /// Flyer clipped a fireball
    FireballHit,
    /// Full energy bar
    Victory,
    /// Start the looped background music (startup and retry)
    MusicStart,
    /// Stop the background music (terminal screens)
    MusicStop,
}
