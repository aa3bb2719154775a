use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FrmError {
    #[error("Reading {width} bytes at offset {offset} overruns buffer of {len} bytes")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },
    #[error("Invalid {field}: {value}")]
    InvalidGeometry { field: &'static str, value: i64 },
    #[error("Bad offset {offset:#x} for buffer of {len} bytes")]
    BadOffset { offset: usize, len: usize },
    #[error("Frame offset table needs {needed} bytes. Have ({len})")]
    TableTooSmall { needed: usize, len: usize },
    #[error("Unsupported FRM layout: {source}")]
    UnsupportedLayout {
        #[source]
        source: Box<FrmError>,
    },
    #[error("Header does not look like a Fallout FRM in either byte order")]
    ImplausibleHeader,
    #[error("Frame header at offset {offset} does not look valid in either byte order")]
    ImplausibleFrame { offset: usize },
    #[error("Atlas has no directions")]
    NoDirections,
    #[error("Cannot read file `{path}`: {source}")]
    IOError {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

impl FrmError {
    pub fn to_result<T>(self) -> Result<T, Self> {
        Err(self)
    }
}
