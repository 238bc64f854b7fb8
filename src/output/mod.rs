mod json;

pub use json::{manifest_to_string, write_manifest};
