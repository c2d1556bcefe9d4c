//! The lossy block-transform codec.
//!
//! Audio is cut into fixed blocks, each block goes through a type-II DCT,
//! only the first `K` (lowest-frequency) coefficients survive, and those are
//! rounded and bit-packed at `Q` bits apiece. Compression comes from both
//! the discarded coefficients and the narrow integer codes.

mod decoder;
mod encoder;

pub use decoder::TransformDecoder;
pub use encoder::TransformEncoder;
