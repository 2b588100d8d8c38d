use crate::foundation::error::{CountdownError, CountdownResult};

/// Display text of the final countdown frame and of every hold frame.
pub const ZERO_LABEL: &str = "00:00";

/// Largest frame count a countdown may produce (about 277 hours at 1 fps).
pub const MAX_FRAMES: u64 = 1_000_000;

/// Validated countdown parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownSpec {
    minutes: u64,
    seconds: u64,
    hold_frames: u64,
}

impl CountdownSpec {
    /// Validate raw (possibly negative) user input.
    ///
    /// `seconds` must lie in `0..=59`, `hold_frames` must be at least 1, and the resulting
    /// frame count must not exceed [`MAX_FRAMES`].
    pub fn new(minutes: i64, seconds: i64, hold_frames: i64) -> CountdownResult<Self> {
        if minutes < 0 {
            return Err(CountdownError::validation(format!(
                "minutes must be >= 0, got {minutes}"
            )));
        }
        if !(0..=59).contains(&seconds) {
            return Err(CountdownError::validation(format!(
                "seconds must be within 0..=59, got {seconds}"
            )));
        }
        if hold_frames < 1 {
            return Err(CountdownError::validation(format!(
                "delay (hold frames) must be >= 1, got {hold_frames}"
            )));
        }

        let frames = (minutes as u64)
            .checked_mul(60)
            .and_then(|s| s.checked_add(seconds as u64))
            .and_then(|s| s.checked_add(hold_frames as u64));
        match frames {
            Some(n) if n <= MAX_FRAMES => {}
            _ => {
                return Err(CountdownError::validation(format!(
                    "countdown of {minutes}m{seconds}s with delay {hold_frames} exceeds \
                     {MAX_FRAMES} frames"
                )));
            }
        }

        Ok(Self {
            minutes: minutes as u64,
            seconds: seconds as u64,
            hold_frames: hold_frames as u64,
        })
    }

    /// Minutes on the clock at frame 0.
    pub fn minutes(self) -> u64 {
        self.minutes
    }

    /// Seconds on the clock at frame 0.
    pub fn seconds(self) -> u64 {
        self.seconds
    }

    /// Number of frames showing [`ZERO_LABEL`] at the end, counting the last countdown frame.
    pub fn hold_frames(self) -> u64 {
        self.hold_frames
    }

    /// Countdown length in seconds.
    pub fn total_seconds(self) -> u64 {
        self.minutes * 60 + self.seconds
    }

    /// Number of frames [`FrameSequence::generate`] produces for this spec.
    ///
    /// Bounded by [`MAX_FRAMES`], so this cannot overflow.
    pub fn frame_count(self) -> u64 {
        self.total_seconds() + self.hold_frames
    }
}

/// Format a remaining-seconds value as zero-padded `MM:SS`.
///
/// The minutes field grows past two digits once the countdown exceeds 99 minutes.
pub fn format_clock(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Display strings for every frame, in playback order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSequence {
    labels: Vec<String>,
}

impl FrameSequence {
    /// Count down from the spec's total to `00:00`, then repeat `00:00` `hold_frames - 1` times.
    pub fn generate(spec: CountdownSpec) -> Self {
        let mut labels = Vec::with_capacity(spec.frame_count() as usize);
        labels.extend((0..=spec.total_seconds()).rev().map(format_clock));
        labels.extend((1..spec.hold_frames()).map(|_| ZERO_LABEL.to_string()));
        Self { labels }
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false` for a generated sequence; there is at least the `00:00` frame.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of frame `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// `(index, label)` pairs in playback order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &str)> + '_ {
        self.labels.iter().map(String::as_str).enumerate()
    }

    /// All labels as a slice.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
#[path = "../../tests/unit/countdown/sequence.rs"]
mod tests;
