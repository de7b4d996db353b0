use crate::draw::model::Point;
use serde::{Deserialize, Serialize};

/// One pointer event forwarded by the host, in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Start { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    End {
        #[serde(default)]
        at: Option<Point>,
    },
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub count: u32,
    pub message: String,
}

impl Milestone {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            message: format!("There are {count} boxes"),
        }
    }
}

/// Capabilities the drawing core needs from whatever owns the surface.
pub trait DrawHost {
    fn request_redraw(&mut self);
    fn notify(&mut self, milestone: &Milestone);
}

/// Host that only remembers what was asked of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingHost {
    pub redraws: usize,
    pub notifications: Vec<Milestone>,
}

impl DrawHost for RecordingHost {
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn notify(&mut self, milestone: &Milestone) {
        self.notifications.push(milestone.clone());
    }
}
