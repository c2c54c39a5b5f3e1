//! Named homes: private by default, shareable with single players or
//! listed publicly.
//!
//! Another player's home is addressed as `owner:home` and usable when it is
//! public or shared with the caller.

mod error;
mod model;
mod registry;

pub use error::HomeError;
pub use model::{Home, PublicHomeInfo, ShareListKind};
pub use registry::{HOMES_FILE, HomeRegistry};
