use super::*;

fn frame(w: u32, h: u32) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: vec![255; (w * h * 4) as usize],
        premultiplied: true,
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_sink").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn in_memory_sink_records_lifecycle() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        width: 2,
        height: 2,
        refresh_hz: 60.0,
    };
    sink.begin(cfg).unwrap();
    sink.push_frame(1, &frame(2, 2)).unwrap();
    sink.push_frame(2, &frame(2, 2)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg));
    assert_eq!(sink.frames().len(), 2);
    assert_eq!(sink.frames()[1].0, 2);
    assert!(sink.is_ended());
}

#[test]
fn png_sequence_names_frames_with_padding() {
    let sink = PngSequenceSink::new("out");
    assert_eq!(
        sink.frame_path(7),
        PathBuf::from("out").join("frame_000007.png")
    );
}

#[test]
fn png_sequence_writes_decodable_files() {
    let dir = scratch_dir("png_sequence");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(SinkConfig {
        width: 3,
        height: 2,
        refresh_hz: 60.0,
    })
    .unwrap();
    sink.push_frame(1, &frame(3, 2)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written(), 1);
    let img = image::open(sink.frame_path(1)).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
}

#[test]
fn write_png_rejects_short_buffers() {
    let dir = scratch_dir("short_buffer");
    std::fs::create_dir_all(&dir).unwrap();
    let mut f = frame(2, 2);
    f.data.truncate(3);
    let err = write_png(&dir.join("x.png"), &f).unwrap_err();
    assert!(matches!(err, ArcglideError::Render(_)));
}
