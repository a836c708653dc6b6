//! Cathartic comment and email-reply generation.
//!
//! A [`Synthesizer`] asks a chat model for ten comments on a post or for a
//! reply to an email, falls back to fixed templates whenever the model is
//! unavailable or answers in the wrong shape, and decorates every entry with
//! a name, timestamp, id and a deterministic avatar.

pub mod args;
pub mod avatar;
pub mod clock;
pub mod decode;
pub mod error;
pub mod llm;
pub mod logger;
pub mod models;
pub mod random;
pub mod reveal;
pub mod server;
pub mod shutdown;
pub mod synthesizer;
pub mod templates;

pub use avatar::{AvatarStyle, identity_for};
pub use error::ApiError;
pub use models::*;
pub use server::Server;
pub use synthesizer::{GenerationRequest, GenerationResult, Synthesizer, ValidationError};
