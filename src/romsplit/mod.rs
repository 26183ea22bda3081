pub mod core;
mod error;
pub mod io;
pub mod paths;
pub mod size;
pub mod transcode;


pub use self::core::*;
pub use self::error::RomSplitError;
pub use self::paths::{Naming, OutputPlan};
pub use self::size::{KIB, RomImage, SizeError, SizeSet};
pub use self::transcode::{TranscodeMode, Transcoded, Transcoder, transcode_bytes};
