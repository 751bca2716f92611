use std::time::{Duration, Instant};

pub const AUTO_ADVANCE: Duration = Duration::from_secs(6);
pub const RESUME_AFTER: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Playing,
    Paused { resume_at: Instant },
}

/// Slide position for the testimonial carousel.
///
/// Time is passed in by the caller: whoever owns the timer sleeps until
/// [`Carousel::next_deadline`] and then calls [`Carousel::tick`]. Manual
/// navigation pauses auto-advance; the pause ends `resume_after` past the
/// most recent interaction.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    playback: Playback,
    in_view: bool,
    advance_every: Duration,
    resume_after: Duration,
    next_advance: Option<Instant>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self::with_timing(len, AUTO_ADVANCE, RESUME_AFTER)
    }

    pub fn with_timing(len: usize, advance_every: Duration, resume_after: Duration) -> Self {
        Self {
            len,
            index: 0,
            playback: Playback::Playing,
            in_view: false,
            advance_every,
            resume_after,
            next_advance: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Auto-advance only runs while the carousel is on screen.
    pub fn set_in_view(&mut self, in_view: bool, now: Instant) {
        if self.in_view == in_view {
            return;
        }
        self.in_view = in_view;
        self.schedule_from(now);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match self.playback {
            Playback::Paused { resume_at } => Some(resume_at),
            Playback::Playing => self.next_advance,
        }
    }

    /// Applies whatever transitions are due at `now`. Returns true when the
    /// visible slide changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Playback::Paused { resume_at } = self.playback {
            if now < resume_at {
                return false;
            }
            self.playback = Playback::Playing;
            self.schedule_from(resume_at);
        }

        match self.next_advance {
            Some(at) if now >= at => {
                self.index = (self.index + 1) % self.len;
                let next = at + self.advance_every;
                self.next_advance = Some(if next > now { next } else { now + self.advance_every });
                true
            }
            _ => false,
        }
    }

    pub fn next(&mut self, now: Instant) -> bool {
        if self.is_empty() {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        self.pause(now);
        true
    }

    pub fn previous(&mut self, now: Instant) -> bool {
        if self.is_empty() {
            return false;
        }
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        self.pause(now);
        true
    }

    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.pause(now);
        true
    }

    fn pause(&mut self, now: Instant) {
        self.playback = Playback::Paused {
            resume_at: now + self.resume_after,
        };
        self.next_advance = None;
    }

    fn schedule_from(&mut self, from: Instant) {
        let active = self.in_view && self.playback == Playback::Playing && self.len > 1;
        self.next_advance = active.then(|| from + self.advance_every);
    }
}
