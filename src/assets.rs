use include_dir::{include_dir, Dir};

static DATA_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/data");

/// Contents of a data file embedded at build time
pub fn asset(file_name: &str) -> Option<&'static str> {
    DATA_DIR
        .get_file(file_name)
        .and_then(|file| file.contents_utf8())
}
