use crate::draw::model::{Bounds, Color};
use crate::draw::state::DrawSession;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillSurface { color: Color },
    FillRect { bounds: Bounds, color: Color },
}

/// Background first, then every rectangle in list order. The active
/// rectangle is already in the list and needs no extra command.
pub fn render(session: &DrawSession, background: Color) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(session.len() + 1);
    commands.push(DrawCommand::FillSurface { color: background });
    commands.extend(
        session
            .rectangles()
            .iter()
            .zip(session.colors())
            .map(|(rect, &color)| DrawCommand::FillRect {
                bounds: rect.bounds(),
                color,
            }),
    );
    commands
}

#[cfg(test)]
mod tests {
    use super::{render, DrawCommand};
    use crate::draw::model::{Bounds, Color, Point, Rect};
    use crate::draw::palette::{OFF_WHITE, PINK, PURPLE};
    use crate::draw::state::DrawSession;

    #[test]
    fn empty_session_only_fills_background() {
        assert_eq!(
            render(&DrawSession::new(), OFF_WHITE),
            vec![DrawCommand::FillSurface { color: OFF_WHITE }]
        );
    }

    #[test]
    fn rectangles_render_in_list_order_with_their_colors() {
        let mut session = DrawSession::new();
        session.push(
            Rect::spanning(Point::new(10.0, 10.0), Point::new(0.0, 0.0)),
            PURPLE,
        );
        session.begin(Rect::new(Point::new(5.0, 5.0)), PINK);
        session
            .active_rect_mut()
            .expect("active")
            .set_current(Point::new(8.0, 2.0));

        let commands = render(&session, Color::BLACK);
        assert_eq!(
            commands,
            vec![
                DrawCommand::FillSurface {
                    color: Color::BLACK
                },
                DrawCommand::FillRect {
                    bounds: Bounds {
                        left: 0.0,
                        top: 0.0,
                        right: 10.0,
                        bottom: 10.0,
                    },
                    color: PURPLE,
                },
                DrawCommand::FillRect {
                    bounds: Bounds {
                        left: 5.0,
                        top: 2.0,
                        right: 8.0,
                        bottom: 5.0,
                    },
                    color: PINK,
                },
            ]
        );
    }
}
