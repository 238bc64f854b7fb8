mod builder;
mod record;

pub use builder::build_manifest;
pub use record::{DEFAULT_STATE, Manifest, SpriteRecord};
