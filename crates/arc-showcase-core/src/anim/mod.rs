//! Timeline of property tweens against a shared clock.
//!
//! A [`Timeline`] holds tweens with absolute start offsets. Each tween reads
//! its starting value from the target the first time the clock reaches its
//! start, then writes an eased value every frame until it ends. The timeline
//! is finished when the last tween has ended.

pub mod ease;

pub use ease::Ease;

use glam::Vec3;

/// An animatable property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    CameraPosition,
    /// The live look-at target the camera orientation is derived from.
    LookAt,
    Fov,
    BoxYaw(usize),
    BoxOpacity(usize),
    PanelOpacity,
}

/// A property value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Scalar(f32),
    Vector(Vec3),
}

impl Value {
    /// Interpolate toward `to`. Mismatched kinds jump straight to `to`.
    pub fn lerp(self, to: Value, t: f32) -> Value {
        match (self, to) {
            (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(a + (b - a) * t),
            (Value::Vector(a), Value::Vector(b)) => Value::Vector(a.lerp(b, t)),
            _ => to,
        }
    }
}

/// Something a timeline can drive.
pub trait Animatable {
    fn read(&self, channel: Channel) -> Value;
    fn write(&mut self, channel: Channel, value: Value);
}

/// Where a tween starts on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Absolute offset in seconds.
    At(f32),
    /// Relative to the end of the most recently added tween. Negative values
    /// overlap it.
    AfterLast(f32),
}

#[derive(Clone, Debug)]
struct Tween {
    channel: Channel,
    from: Option<Value>,
    to: Value,
    start: f32,
    duration: f32,
    ease: Ease,
}

impl Tween {
    fn end(&self) -> f32 {
        self.start + self.duration
    }

    fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            ((elapsed - self.start) / self.duration).clamp(0.0, 1.0)
        }
    }
}

/// A group of tweens sharing one clock.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    tweens: Vec<Tween>,
    elapsed: f32,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tween of `channel` to `to` over `duration` seconds.
    pub fn add(
        &mut self,
        channel: Channel,
        to: Value,
        duration: f32,
        ease: Ease,
        placement: Placement,
    ) -> &mut Self {
        let start = match placement {
            Placement::At(offset) => offset,
            Placement::AfterLast(offset) => {
                self.tweens.last().map(Tween::end).unwrap_or(0.0) + offset
            }
        };
        self.tweens.push(Tween {
            channel,
            from: None,
            to,
            start: start.max(0.0),
            duration: duration.max(0.0),
            ease,
        });
        self
    }

    /// Time at which the last tween ends.
    pub fn end(&self) -> f32 {
        self.tweens.iter().map(Tween::end).fold(0.0, f32::max)
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Channels driven by this timeline, in insertion order.
    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.tweens.iter().map(|t| t.channel)
    }

    /// Start offset of the first tween on `channel`.
    pub fn start_of(&self, channel: Channel) -> Option<f32> {
        self.tweens
            .iter()
            .find(|t| t.channel == channel)
            .map(|t| t.start)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.end()
    }

    /// Advance the clock by `dt` seconds and write every active tween.
    ///
    /// Returns true once the whole timeline has finished.
    pub fn advance<T: Animatable>(&mut self, dt: f32, target: &mut T) -> bool {
        self.elapsed += dt.max(0.0);
        let elapsed = self.elapsed;

        for tween in &mut self.tweens {
            if elapsed < tween.start {
                continue;
            }
            let from = *tween
                .from
                .get_or_insert_with(|| target.read(tween.channel));
            let t = tween.ease.apply(tween.progress(elapsed));
            target.write(tween.channel, from.lerp(tween.to, t));
        }

        self.is_finished()
    }
}
