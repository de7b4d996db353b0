use crate::draw::model::{Color, Rect};

/// Number of completed gestures that triggers a merge.
pub const MERGE_RUN_LENGTH: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
}

impl GesturePhase {
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }
}

/// Rectangles and their colors, kept index-aligned, plus the gesture
/// bookkeeping that drives merges and milestones.
///
/// The active rectangle, when present, is always the last one in the list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawSession {
    active: Option<usize>,
    rectangles: Vec<Rect>,
    colors: Vec<Color>,
    gesture_run_count: u8,
    completed_gestures: u32,
    restored_active: Option<Rect>,
}

impl DrawSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        rectangles: Vec<Rect>,
        colors: Vec<Color>,
        restored_active: Option<Rect>,
        gesture_run_count: u8,
        completed_gestures: u32,
    ) -> Self {
        let session = Self {
            active: None,
            rectangles,
            colors,
            gesture_run_count: gesture_run_count.min(MERGE_RUN_LENGTH - 1),
            completed_gestures,
            restored_active,
        };
        session.check_invariants();
        session
    }

    pub fn phase(&self) -> GesturePhase {
        if self.active.is_some() {
            GesturePhase::Dragging
        } else {
            GesturePhase::Idle
        }
    }

    pub fn rectangles(&self) -> &[Rect] {
        &self.rectangles
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_rect(&self) -> Option<&Rect> {
        self.active.map(|index| &self.rectangles[index])
    }

    /// The in-progress rectangle carried over from a snapshot. It is a copy,
    /// not linked to any entry of [`Self::rectangles`].
    pub fn restored_active(&self) -> Option<&Rect> {
        self.restored_active.as_ref()
    }

    pub fn gesture_run_count(&self) -> u8 {
        self.gesture_run_count
    }

    pub fn completed_gestures(&self) -> u32 {
        self.completed_gestures
    }

    /// Appends a rectangle with its color. Returns the new index.
    pub fn push(&mut self, rect: Rect, color: Color) -> usize {
        self.rectangles.push(rect);
        self.colors.push(color);
        self.check_invariants();
        self.rectangles.len() - 1
    }

    /// Appends a rectangle and marks it active.
    pub fn begin(&mut self, rect: Rect, color: Color) -> usize {
        let index = self.push(rect, color);
        self.active = Some(index);
        self.restored_active = None;
        index
    }

    pub fn active_rect_mut(&mut self) -> Option<&mut Rect> {
        let index = self.active?;
        self.rectangles.get_mut(index)
    }

    /// Replaces the color shown for the active rectangle. No-op when idle.
    pub fn set_active_color(&mut self, color: Color) {
        if let Some(index) = self.active {
            self.colors[index] = color;
        }
        self.check_invariants();
    }

    pub fn clear_active(&mut self) -> Option<usize> {
        self.active.take()
    }

    /// The last two assigned colors, most recent first.
    pub fn recent_colors(&self) -> [Option<Color>; 2] {
        let mut recent = self.colors.iter().rev().copied();
        [recent.next(), recent.next()]
    }

    /// Counts a finished gesture and returns the updated run count.
    pub fn record_completed_gesture(&mut self) -> u8 {
        self.completed_gestures = self.completed_gestures.saturating_add(1);
        self.gesture_run_count += 1;
        self.gesture_run_count
    }

    pub fn reset_run_count(&mut self) {
        self.gesture_run_count = 0;
    }

    fn check_invariants(&self) {
        debug_assert_eq!(
            self.rectangles.len(),
            self.colors.len(),
            "rectangles and colors must stay index-aligned"
        );
        debug_assert!(
            self.active
                .map_or(true, |index| index + 1 == self.rectangles.len()),
            "active rectangle must be the last one"
        );
    }
}
