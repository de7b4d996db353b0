use drag_and_draw::draw::color::merge;
use drag_and_draw::draw::messages::RecordingHost;
use drag_and_draw::draw::model::{Bounds, Point};
use drag_and_draw::draw::settings::DrawSettings;
use drag_and_draw::draw::{render, DrawCommand, GestureController, PointerEvent};

fn controller(seed: u64) -> GestureController {
    GestureController::from_settings(&DrawSettings::default(), seed)
}

fn drag(controller: &mut GestureController, host: &mut RecordingHost, from: Point, to: Point) {
    controller.handle_start(from);
    controller.handle_move(Point::new((from.x + to.x) / 2.0, from.y), host);
    controller.handle_move(to, host);
    controller.handle_end(Some(to), host);
}

#[test]
fn colors_stay_aligned_after_every_event() {
    let mut controller = controller(3);
    let mut host = RecordingHost::default();
    let events = [
        PointerEvent::Start { x: 0.0, y: 0.0 },
        PointerEvent::Move { x: 4.0, y: 4.0 },
        PointerEvent::Move { x: 8.0, y: 2.0 },
        PointerEvent::End { at: None },
        PointerEvent::Start { x: 20.0, y: 20.0 },
        PointerEvent::Move { x: 10.0, y: 30.0 },
        PointerEvent::End {
            at: Some(Point::new(12.0, 28.0)),
        },
        PointerEvent::Start { x: 1.0, y: 1.0 },
        PointerEvent::Move { x: 2.0, y: 2.0 },
        PointerEvent::Cancel,
        PointerEvent::Start { x: 5.0, y: 5.0 },
        PointerEvent::End { at: None },
    ];

    for event in events {
        controller.handle_event(event, &mut host);
        let session = controller.session();
        assert_eq!(session.rectangles().len(), session.colors().len(), "{event:?}");
    }
    // Two drags, one merge box, one cancelled partial box, one tap.
    assert_eq!(controller.session().len(), 5);
}

#[test]
fn single_gesture_scenario() {
    let mut controller = controller(1);
    let mut host = RecordingHost::default();
    controller.handle_start(Point::new(0.0, 0.0));
    controller.handle_move(Point::new(10.0, 10.0), &mut host);
    controller.handle_end(Some(Point::new(10.0, 10.0)), &mut host);

    let session = controller.session();
    assert_eq!(session.len(), 1);
    assert_eq!(session.colors().len(), 1);
    assert_eq!(
        session.rectangles()[0].bounds(),
        Bounds {
            left: 0.0,
            top: 0.0,
            right: 10.0,
            bottom: 10.0,
        }
    );
    assert!(host.redraws >= 1);
}

#[test]
fn every_second_gesture_spawns_a_merged_box() {
    let mut controller = controller(9);
    let mut host = RecordingHost::default();
    drag(
        &mut controller,
        &mut host,
        Point::new(100.0, 10.0),
        Point::new(0.0, 50.0),
    );
    assert_eq!(controller.session().gesture_run_count(), 1);

    let redraws_before = host.redraws;
    drag(
        &mut controller,
        &mut host,
        Point::new(20.0, 20.0),
        Point::new(40.0, 80.0),
    );

    let session = controller.session();
    assert_eq!(session.len(), 3);
    assert_eq!(session.gesture_run_count(), 0);
    assert!(host.redraws > redraws_before + 2);

    let colors = session.colors();
    assert_eq!(colors[2], merge(colors[0], colors[1]));

    let middle = session.rectangles()[2];
    assert_eq!(middle.origin(), Point::new(30.0, 50.0));
    assert_eq!(middle.current(), Point::new(50.0, 30.0));
    assert_eq!(
        middle.bounds(),
        Bounds {
            left: 30.0,
            top: 30.0,
            right: 50.0,
            bottom: 50.0,
        }
    );

    drag(
        &mut controller,
        &mut host,
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
    );
    assert_eq!(controller.session().len(), 4);
    assert_eq!(controller.session().gesture_run_count(), 1);
}

#[test]
fn milestones_fire_on_every_fifth_completed_gesture() {
    let mut controller = controller(5);
    let mut host = RecordingHost::default();

    for gesture in 1..=10u32 {
        let offset = gesture as f32 * 10.0;
        drag(
            &mut controller,
            &mut host,
            Point::new(offset, offset),
            Point::new(offset + 5.0, offset + 8.0),
        );
        let expected = (gesture / 5) as usize;
        assert_eq!(host.notifications.len(), expected, "after gesture {gesture}");
        if gesture == 5 {
            assert_eq!(host.notifications[0].count, 5);
            assert!(host.notifications[0].message.contains('5'));
        }
    }
    assert_eq!(host.notifications[1].count, 10);
    assert!(host.notifications[1].message.contains("10"));
}

#[test]
fn render_pass_mirrors_session_order() {
    let settings = DrawSettings::default();
    let mut controller = GestureController::from_settings(&settings, 17);
    let mut host = RecordingHost::default();
    drag(
        &mut controller,
        &mut host,
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
    );
    controller.handle_start(Point::new(50.0, 50.0));
    controller.handle_move(Point::new(40.0, 60.0), &mut host);

    let session = controller.session();
    let commands = render(session, settings.background_color);
    assert_eq!(commands.len(), session.len() + 1);
    assert_eq!(
        commands[0],
        DrawCommand::FillSurface {
            color: settings.background_color
        }
    );
    for (index, command) in commands[1..].iter().enumerate() {
        assert_eq!(
            *command,
            DrawCommand::FillRect {
                bounds: session.rectangles()[index].bounds(),
                color: session.colors()[index],
            }
        );
    }
}

#[test]
fn fixed_seed_reproduces_the_same_drawing() {
    let run = |seed| {
        let mut controller = controller(seed);
        let mut host = RecordingHost::default();
        for i in 0..6 {
            let base = i as f32 * 3.0;
            drag(
                &mut controller,
                &mut host,
                Point::new(base, base),
                Point::new(base + 7.0, base + 2.0),
            );
        }
        controller.into_session()
    };
    assert_eq!(run(123), run(123));
}
