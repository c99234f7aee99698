use super::*;
use crate::foundation::core::Canvas;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        interval: Duration::from_millis(15),
    }
}

fn frame(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: px.repeat((width * height) as usize),
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_keeps_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(2, 2)).unwrap();
    sink.push_frame(FrameIndex(0), &frame(2, 2, [1, 2, 3, 255]))
        .unwrap();
    sink.push_frame(FrameIndex(3), &frame(2, 2, [4, 5, 6, 255]))
        .unwrap();
    sink.end().unwrap();

    assert!(sink.ended());
    assert_eq!(sink.config(), Some(cfg(2, 2)));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 3]);
}

#[test]
fn out_of_order_push_is_rejected() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(1, 1)).unwrap();
    sink.push_frame(FrameIndex(5), &frame(1, 1, [0; 4])).unwrap();
    let err = sink
        .push_frame(FrameIndex(5), &frame(1, 1, [0; 4]))
        .unwrap_err();
    assert!(err.to_string().contains("pushed after frame 5"));
}

#[test]
fn push_before_begin_or_with_wrong_size_fails() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(FrameIndex(0), &frame(1, 1, [0; 4])).is_err());

    sink.begin(cfg(2, 2)).unwrap();
    let err = sink
        .push_frame(FrameIndex(0), &frame(3, 2, [0; 4]))
        .unwrap_err();
    assert!(err.to_string().contains("sink expects 2x2"));
}

#[test]
fn file_names_are_zero_padded() {
    assert_eq!(PngSequenceSink::file_name(FrameIndex(7)), "frame_00007.png");
    assert_eq!(
        PngSequenceSink::file_name(FrameIndex(123_456)),
        "frame_123456.png"
    );
}

#[test]
fn png_sequence_writes_straight_alpha_files() {
    let dir = std::path::PathBuf::from("target").join("png_sequence_unit");
    let _ = std::fs::remove_dir_all(&dir);

    let mut sink = PngSequenceSink::new(&dir);
    let size = Canvas::new(3, 2).unwrap();
    sink.begin(cfg(size.width, size.height)).unwrap();
    sink.push_frame(FrameIndex(0), &frame(3, 2, [64, 32, 0, 128]))
        .unwrap();
    sink.push_frame(FrameIndex(1), &FrameRGBA::transparent(size))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    let first = image::open(dir.join("frame_00000.png")).unwrap().to_rgba8();
    assert_eq!(first.dimensions(), (3, 2));
    assert_eq!(first.get_pixel(1, 1).0, [128, 64, 0, 128]);
    let second = image::open(&sink.written()[1]).unwrap().to_rgba8();
    assert_eq!(second.get_pixel(0, 0).0, [0, 0, 0, 0]);
}
