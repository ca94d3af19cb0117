//! Wire codec: request encoding, envelope decoding and response normalization.

pub mod envelope;
pub mod lines;
pub mod normalize;
pub mod payload;

pub use envelope::{Envelope, SUCCESS_CODE, Status};
pub use lines::{DEFAULT_LINE, DEFAULT_LINE_ID, reshape_lines};
pub use normalize::{FieldAlias, Normalize, RECORD_ALIASES, resolve};
pub use payload::Payload;
