use crate::draw::color::merge;
use crate::draw::messages::{DrawHost, Milestone, PointerEvent};
use crate::draw::model::{Color, Point, Rect};
use crate::draw::palette::ColorPicker;
use crate::draw::settings::DrawSettings;
use crate::draw::state::{DrawSession, GesturePhase, MERGE_RUN_LENGTH};

/// Turns start/move/end/cancel pointer events into session mutations.
#[derive(Debug, Clone)]
pub struct GestureController {
    session: DrawSession,
    picker: ColorPicker,
    initial_color: Color,
    milestone_interval: u32,
}

impl GestureController {
    pub fn new(picker: ColorPicker, initial_color: Color, milestone_interval: u32) -> Self {
        Self::with_session(DrawSession::new(), picker, initial_color, milestone_interval)
    }

    pub fn with_session(
        session: DrawSession,
        picker: ColorPicker,
        initial_color: Color,
        milestone_interval: u32,
    ) -> Self {
        Self {
            session,
            picker,
            initial_color,
            milestone_interval,
        }
    }

    pub fn from_settings(settings: &DrawSettings, seed: u64) -> Self {
        Self::restore(DrawSession::new(), settings, seed)
    }

    /// Resumes a session decoded from a snapshot. The controller starts idle.
    pub fn restore(session: DrawSession, settings: &DrawSettings, seed: u64) -> Self {
        Self::with_session(
            session,
            ColorPicker::new(settings.palette.clone(), seed),
            settings.initial_color,
            settings.milestone_interval,
        )
    }

    pub fn session(&self) -> &DrawSession {
        &self.session
    }

    pub fn into_session(self) -> DrawSession {
        self.session
    }

    pub fn phase(&self) -> GesturePhase {
        self.session.phase()
    }

    pub fn handle_event<H: DrawHost>(&mut self, event: PointerEvent, host: &mut H) {
        match event {
            PointerEvent::Start { x, y } => self.handle_start(Point::new(x, y)),
            PointerEvent::Move { x, y } => self.handle_move(Point::new(x, y), host),
            PointerEvent::End { at } => self.handle_end(at, host),
            PointerEvent::Cancel => self.handle_cancel(),
        }
    }

    pub fn handle_start(&mut self, point: Point) {
        if self.phase().is_dragging() {
            tracing::debug!("start while dragging; cancelling the previous gesture");
            self.handle_cancel();
        }
        self.session.begin(Rect::new(point), self.initial_color);
    }

    pub fn handle_move<H: DrawHost>(&mut self, point: Point, host: &mut H) {
        let Some(rect) = self.session.active_rect_mut() else {
            return;
        };
        rect.set_current(point);

        let color = self.picker.pick_next(self.session.recent_colors());
        self.session.set_active_color(color);
        host.request_redraw();
    }

    /// Finishes the gesture. Without a final point the rectangle keeps the
    /// position of the last move.
    pub fn handle_end<H: DrawHost>(&mut self, at: Option<Point>, host: &mut H) {
        let Some(rect) = self.session.active_rect_mut() else {
            return;
        };
        let mut moved = false;
        if let Some(point) = at {
            moved = rect.current() != point;
            rect.set_current(point);
        }
        let finished = *rect;
        self.session.clear_active();
        tracing::debug!(
            boxes = self.session.len(),
            origin = ?finished.origin(),
            current = ?finished.current(),
            "finished box"
        );

        if self.session.record_completed_gesture() >= MERGE_RUN_LENGTH {
            self.append_merge_rect();
            self.session.reset_run_count();
            moved = true;
        }
        if moved {
            host.request_redraw();
        }

        let completed = self.session.completed_gestures();
        if self.milestone_interval > 0 && completed % self.milestone_interval == 0 {
            let milestone = Milestone::new(completed);
            tracing::info!(count = completed, "box milestone reached");
            host.notify(&milestone);
        }
    }

    /// Drops the pointer but leaves the partial rectangle and its color in place.
    pub fn handle_cancel(&mut self) {
        if let Some(index) = self.session.clear_active() {
            tracing::debug!(index, "gesture cancelled; keeping partial box");
        }
    }

    fn append_merge_rect(&mut self) -> Option<usize> {
        let count = self.session.len();
        if count < 2 {
            return None;
        }
        let rects = self.session.rectangles();
        let colors = self.session.colors();
        let (last, previous) = (&rects[count - 1], &rects[count - 2]);

        let rect = Rect::spanning(last.bounds().center(), previous.bounds().center());
        let color = merge(colors[count - 1], colors[count - 2]);
        tracing::debug!(
            origin = ?rect.origin(),
            current = ?rect.current(),
            "adding middle box"
        );
        Some(self.session.push(rect, color))
    }
}
