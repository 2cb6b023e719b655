use canview::{channel_frames, Direction, Frame, FrameView, ViewConfig};

fn frame(id: u32, direction: Direction) -> Frame {
    Frame::new(id, direction, vec![0x01])
}

#[test]
fn drained_commands_apply_in_send_order() {
    let (sink, rx) = channel_frames();
    let mut view = FrameView::new(ViewConfig::default());

    sink.set_filter_active(true).unwrap();
    sink.send_frame(frame(1, Direction::Rx), 1.0).unwrap();
    sink.send_frame(frame(1, Direction::Rx), 2.0).unwrap();
    sink.send_frame(frame(2, Direction::Tx), 2.0).unwrap();

    view.drain(&rx);

    assert!(view.filter_active());
    assert_eq!(view.log().len(), 3);
    assert_eq!(view.visible_rows(), vec![1, 2]);
}

#[test]
fn send_frames_batches_each_frame_with_its_own_timestamp() {
    let (sink, rx) = channel_frames();
    let mut view = FrameView::new(ViewConfig::default());

    sink.send_frames(vec![
        (frame(1, Direction::Rx), 0.1),
        (frame(2, Direction::Rx), 0.2),
    ])
    .unwrap();
    view.drain(&rx);

    assert_eq!(view.log().len(), 2);
    assert_eq!(view.log().get(1).unwrap().time, 0.2);
}

#[test]
fn cloned_sinks_feed_the_same_view() {
    let (sink, rx) = channel_frames();
    let sink2 = sink.clone();
    let mut view = FrameView::new(ViewConfig::default());

    sink.send_frame(frame(1, Direction::Rx), 1.0).unwrap();
    sink2.send_frame(frame(2, Direction::Rx), 2.0).unwrap();
    view.drain(&rx);

    assert_eq!(view.log().len(), 2);
}

#[test]
fn control_commands_round_trip_through_the_channel() {
    let (sink, rx) = channel_frames();
    let mut view = FrameView::new(ViewConfig {
        filter_active_on_start: true,
        ..ViewConfig::default()
    });

    sink.send_frame(frame(1, Direction::Rx), 1.0).unwrap();
    sink.toggle_filter().unwrap();
    view.drain(&rx);
    assert!(!view.filter_active());

    sink.clear_filter().unwrap();
    sink.restart_session().unwrap();
    view.drain(&rx);
    assert!(view.log().is_empty());
    assert!(!view.filter_active(), "restart keeps the toggled-off flag");
}

#[test]
fn drain_on_empty_channel_is_a_no_op() {
    let (_sink, rx) = channel_frames();
    let mut view = FrameView::new(ViewConfig::default());
    view.drain(&rx);
    assert!(view.log().is_empty());
}

#[test]
fn frames_sent_from_another_thread_arrive_intact() {
    let (sink, rx) = channel_frames();
    let mut view = FrameView::new(ViewConfig::default());

    let handle = std::thread::spawn(move || {
        for i in 0..10u32 {
            sink.send_frame(frame(i, Direction::Rx), i as f64 * 0.1).unwrap();
        }
    });
    handle.join().unwrap();
    view.drain(&rx);

    assert_eq!(view.log().len(), 10);
    assert_eq!(view.log().get(9).unwrap().frame.id, 9);
}
