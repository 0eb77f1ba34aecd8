use rayon::prelude::*;

use crate::audio::amplitude::AmplitudeSource;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ClipError, ClipResult};
use crate::render::session::RenderSession;
use crate::scene::model::Scene;

/// Threading and chunking controls for multi-frame composition.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Enable parallel composition when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Aggregated composition counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComposeStats {
    /// Total frames composed.
    pub frames_total: u64,
    /// Scene nodes emitted across all frames.
    pub nodes_total: u64,
}

/// Composes every frame of the session's clip, in order.
///
/// Frames are independent, so parallel composition returns byte-identical
/// output to the sequential path regardless of chunk size or thread count.
pub fn compose_frames(
    session: &RenderSession,
    source: &dyn AmplitudeSource,
    threading: &RenderThreading,
) -> ClipResult<Vec<Scene>> {
    compose_frames_with_stats(session, source, threading).map(|(scenes, _)| scenes)
}

/// Composes every frame and returns aggregate counters alongside.
pub fn compose_frames_with_stats(
    session: &RenderSession,
    source: &dyn AmplitudeSource,
    threading: &RenderThreading,
) -> ClipResult<(Vec<Scene>, ComposeStats)> {
    let total = session.total_frames();
    let mut out = Vec::with_capacity(total.min(4096) as usize);
    let mut stats = ComposeStats::default();

    if !threading.parallel {
        for f in 0..total {
            push_scene(session.compose(FrameIndex(f), source)?, &mut out, &mut stats);
        }
        return Ok((out, stats));
    }

    let pool = build_thread_pool(threading.threads)?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);

    let mut chunk_start = 0u64;
    while chunk_start < total {
        let chunk_end = (chunk_start + chunk_size).min(total);
        let composed = pool.install(|| {
            (chunk_start..chunk_end)
                .into_par_iter()
                .map(|f| session.compose(FrameIndex(f), source))
                .collect::<Vec<_>>()
        });
        for item in composed {
            push_scene(item?, &mut out, &mut stats);
        }
        chunk_start = chunk_end;
    }

    Ok((out, stats))
}

fn push_scene(scene: Scene, out: &mut Vec<Scene>, stats: &mut ComposeStats) {
    stats.frames_total += 1;
    stats.nodes_total += scene.nodes.len() as u64;
    out.push(scene);
}

/// Serializes scenes as JSON Lines, one scene object per line.
pub fn write_scenes_jsonl<W: std::io::Write>(scenes: &[Scene], out: &mut W) -> ClipResult<()> {
    for scene in scenes {
        serde_json::to_writer(&mut *out, scene)
            .map_err(|e| ClipError::serde(format!("encode scene: {e}")))?;
        out.write_all(b"\n").map_err(anyhow::Error::from)?;
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> ClipResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ClipError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ClipError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 { 1 } else { chunk_size as u64 }
}
