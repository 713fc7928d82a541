//! Copydesk engine: generation service client and effect execution.
mod client;
mod clipboard;
mod engine;
mod sink;
mod timer;
mod types;
mod wire;

pub use client::{ClientSettings, GenerationClient, ReqwestGenerationClient, DEFAULT_BASE_URL};
pub use clipboard::{ClipboardError, ClipboardWriter, SystemClipboard};
pub use engine::{EngineError, EngineHandle};
pub use sink::{ChannelEventSink, EventSink};
pub use timer::FeedbackTimers;
pub use types::{EngineEvent, FailureCause, RequestError};
