/// Frame composition driver over a prepared session.
pub mod pipeline;
/// Validated request state shared by every composed frame.
pub mod session;
