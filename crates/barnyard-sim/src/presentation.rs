//! Transient presentation effects: pet flourishes and the message banner.
//!
//! These run on the wall-clock frame delta, not on the simulation tick, and
//! never feed back into agent state. Every flourish only contributes an
//! offset on top of the rest pose ([`Pose::REST`]); the displayed pose is
//! recomputed from the live tasks each frame. A finished task is dropped, so
//! once all tasks for an agent are done its pose is exactly the rest pose no
//! matter how the triggers overlapped.

use std::f32::consts::PI;

use keyframe::{ease, functions};
use serde::{Deserialize, Serialize};

use crate::notice::Notice;
use crate::types::AgentId;

/// Easing applied to a flourish's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EaseType {
    /// Constant speed
    #[default]
    Linear,
    /// Slow start and end
    EaseInOut,
    /// Fast start, slow end
    QuadOut,
}

impl EaseType {
    pub fn apply(&self, t: f32) -> f32 {
        let t = (t as f64).clamp(0.0, 1.0);
        let result = match self {
            EaseType::Linear => ease(functions::Linear, 0.0, 1.0, t),
            EaseType::EaseInOut => ease(functions::EaseInOut, 0.0, 1.0, t),
            EaseType::QuadOut => ease(functions::EaseOutQuad, 0.0, 1.0, t),
        };
        result as f32
    }
}

/// Vertical lift and uniform scale applied on top of an agent's body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub lift: f32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        lift: 0.0,
        scale: 1.0,
    };

    /// Stack another contribution on top of this pose
    fn compose(self, other: Pose) -> Pose {
        Pose {
            lift: self.lift + other.lift,
            scale: self.scale * other.scale,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

/// Species reaction to a pat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Flourish {
    /// Half-sine hop
    Jump { height: f32, duration: f32 },
    /// Scale pulse held for the whole duration
    Bark { scale: f32, duration: f32 },
}

impl Flourish {
    pub fn duration(&self) -> f32 {
        match *self {
            Flourish::Jump { duration, .. } | Flourish::Bark { duration, .. } => duration,
        }
    }

    /// Offset from the rest pose at normalized `progress`
    fn offset(&self, progress: f32) -> Pose {
        match *self {
            Flourish::Jump { height, .. } => Pose {
                lift: (progress * PI).sin() * height,
                scale: 1.0,
            },
            Flourish::Bark { scale, .. } => Pose { lift: 0.0, scale },
        }
    }
}

/// One scheduled flourish for one agent
#[derive(Debug, Clone, PartialEq)]
pub struct PoseTask {
    pub agent: AgentId,
    pub flourish: Flourish,
    elapsed: f32,
    easing: EaseType,
}

impl PoseTask {
    pub fn new(agent: AgentId, flourish: Flourish, easing: EaseType) -> Self {
        Self {
            agent,
            flourish,
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `dt` seconds. Returns `true` while still running.
    pub fn update(&mut self, dt: f32) -> bool {
        self.elapsed += dt.max(0.0);
        self.elapsed < self.flourish.duration()
    }

    pub fn progress(&self) -> f32 {
        let duration = self.flourish.duration();
        if duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / duration).min(1.0)
        }
    }

    pub fn offset(&self) -> Pose {
        self.flourish.offset(self.easing.apply(self.progress()))
    }
}

/// Single transient banner, last write wins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageBoard {
    current: Option<Notice>,
    remaining: f32,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing and restart the timer
    pub fn show(&mut self, notice: Notice, duration: f32) {
        self.current = Some(notice);
        self.remaining = duration;
    }

    pub fn advance(&mut self, dt: f32) {
        if self.current.is_none() {
            return;
        }
        self.remaining -= dt.max(0.0);
        if self.remaining <= 0.0 {
            self.current = None;
            self.remaining = 0.0;
        }
    }

    pub fn message(&self) -> Option<Notice> {
        self.current
    }
}

/// Live flourishes plus the banner
#[derive(Debug, Clone, Default)]
pub struct Presentation {
    tasks: Vec<PoseTask>,
    board: MessageBoard,
    easing: EaseType,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_easing(mut self, easing: EaseType) -> Self {
        self.easing = easing;
        self
    }

    pub fn schedule(&mut self, agent: AgentId, flourish: Flourish) {
        log::trace!("{} flourish {:?}", agent, flourish);
        self.tasks.push(PoseTask::new(agent, flourish, self.easing));
    }

    /// Advance every task and the banner by a wall-clock delta
    pub fn advance(&mut self, dt: f32) {
        self.tasks.retain_mut(|task| task.update(dt));
        self.board.advance(dt);
    }

    /// Current displayed pose of `agent`
    pub fn pose(&self, agent: AgentId) -> Pose {
        self.tasks
            .iter()
            .filter(|task| task.agent == agent)
            .fold(Pose::REST, |pose, task| pose.compose(task.offset()))
    }

    pub fn is_animating(&self, agent: AgentId) -> bool {
        self.tasks.iter().any(|task| task.agent == agent)
    }

    pub fn active_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn show(&mut self, notice: Notice, duration: f32) {
        self.board.show(notice, duration);
    }

    pub fn message(&self) -> Option<Notice> {
        self.board.message()
    }
}
