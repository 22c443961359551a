mod fingerprint;

pub use fingerprint::{build_fingerprint_config, output_format};
