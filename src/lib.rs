pub mod args;
pub mod config;
pub mod reed_solomon;

pub use args::parse_args;
pub use config::{CodeShape, CodecConfig};
pub use reed_solomon::{decode, default_code, encode, CodecError, Gf8, ReedSolomon, Rs4x2, Rs8x2};
