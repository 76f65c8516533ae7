//! Asset discovery and the in-memory bundle.

mod asset;
mod error;
mod index;
pub mod mime;
pub mod path;
mod scan;

// Types
pub use asset::{Asset, Bundle, MIME_SUFFIX, PATH_SUFFIX};
pub use error::{BundleError, Result};
pub use index::AssetIndex;

// Scanning
pub use scan::collect_bundle;
