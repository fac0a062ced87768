pub mod archive;
pub mod canvas;
pub mod engine;
pub mod icon;

pub use crate::domain::model::{ArchiveBundle, ArchiveEntry, IconSpec, RenderedIcon};
pub use crate::domain::ports::{IconConfig, Job, PackageConfig, Storage};
pub use crate::utils::error::Result;
