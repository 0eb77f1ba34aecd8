use super::*;
use crate::foundation::core::Fps;

fn ctx(frame: u64, total_frames: u64) -> FrameContext {
    FrameContext::new(FrameIndex(frame), Fps::new(30, 1).unwrap(), total_frames).unwrap()
}

#[test]
fn two_chunks_split_ninety_frames_evenly() {
    let w0 = ChunkWindow::resolve(ctx(0, 90), 2).unwrap();
    assert_eq!(w0.index, 0);
    assert_eq!(w0.start, FrameIndex(0));
    assert_eq!(w0.len_frames, 45);

    let w_last_of_first = ChunkWindow::resolve(ctx(44, 90), 2).unwrap();
    assert_eq!(w_last_of_first.index, 0);

    let w1 = ChunkWindow::resolve(ctx(45, 90), 2).unwrap();
    assert_eq!(w1.index, 1);
    assert_eq!(w1.start, FrameIndex(45));

    assert_eq!(ChunkWindow::resolve(ctx(89, 90), 2).unwrap().index, 1);
}

#[test]
fn no_chunks_means_no_caption() {
    assert!(ChunkWindow::resolve(ctx(10, 90), 0).is_none());
    assert!(schedule_caption(ctx(10, 90), 0).is_none());
}

#[test]
fn envelope_is_zero_at_window_edges_and_full_in_the_middle() {
    // fade = min(0.3 * 30, 0.15 * 45) = 6.75 frames
    let at = |frame| schedule_caption(ctx(frame, 90), 2).unwrap();

    assert_eq!(at(0).opacity, 0.0);
    assert_eq!(at(0).translate_y, 10.0);

    let settled = at(10);
    assert_eq!(settled.opacity, 1.0);
    assert_eq!(settled.translate_y, 0.0);

    let fading_out = at(44);
    assert!(fading_out.opacity > 0.0);
    assert!(fading_out.opacity < 0.2);

    let next = at(45);
    assert_eq!(next.chunk_index, 1);
    assert_eq!(next.opacity, 0.0);
    assert_eq!(next.translate_y, 10.0);
}

#[test]
fn fade_in_is_strictly_increasing() {
    let mut prev = -1.0;
    for frame in 0..=6 {
        let s = schedule_caption(ctx(frame, 90), 2).unwrap();
        assert!(s.opacity > prev, "no growth at frame {frame}");
        assert!(s.translate_y < 10.0 || frame == 0);
        prev = s.opacity;
    }
}

#[test]
fn fade_is_symmetric_within_a_window() {
    for k in 1..=6 {
        let rising = schedule_caption(ctx(k, 90), 2).unwrap().opacity;
        let falling = schedule_caption(ctx(45 - k, 90), 2).unwrap().opacity;
        assert!((rising - falling).abs() < 1e-9, "asymmetry at offset {k}");
    }
}

#[test]
fn remainder_frames_stay_on_the_final_chunk() {
    // 100 frames over 3 chunks: windows of 33, one leftover frame.
    let tail = ChunkWindow::resolve(ctx(99, 100), 3).unwrap();
    assert_eq!(tail.index, 2);
    assert_eq!(tail.start, FrameIndex(66));

    let s = schedule_caption(ctx(99, 100), 3).unwrap();
    assert_eq!(s.chunk_index, 2);
    assert_eq!(s.opacity, 0.0);
}

#[test]
fn more_chunks_than_frames_clamps_window_length_to_one() {
    // 10 frames, 20 chunks: each frame shows its own chunk, the rest never appear.
    let w = ChunkWindow::resolve(ctx(3, 10), 20).unwrap();
    assert_eq!(w.index, 3);
    assert_eq!(w.len_frames, 1);

    let last = ChunkWindow::resolve(ctx(9, 10), 20).unwrap();
    assert_eq!(last.index, 9);
}

#[test]
fn single_chunk_spans_the_whole_clip() {
    let w = ChunkWindow::resolve(ctx(40, 75), 1).unwrap();
    assert_eq!(w.index, 0);
    assert_eq!(w.start, FrameIndex(0));
    assert_eq!(w.len_frames, 75);

    assert_eq!(schedule_caption(ctx(37, 75), 1).unwrap().opacity, 1.0);
}
