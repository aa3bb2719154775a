use std::{ffi::OsStr, path::Path};

use image::{Rgba, RgbaImage};

use crate::{
    error::FrmError,
    fallout::parse_fallout,
    palette::{Palette, TRANSPARENT_INDEX},
    parser::parse_frm,
    Atlas, Frame,
};

fn read_file(path: &Path) -> Result<Vec<u8>, FrmError> {
    std::fs::read(path).map_err(|op| FrmError::IOError {
        source: op,
        path: path.to_path_buf(),
    })
}

impl Atlas {
    pub fn open_from_bytes(i: &[u8]) -> Result<Atlas, FrmError> {
        parse_frm(i)
    }

    pub fn open_from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<Atlas, FrmError> {
        let path: &Path = path.as_ref();
        let file = read_file(path)?;

        Self::open_from_bytes(&file)
    }

    /// Tries the Fallout layout only after every other layout failed.
    ///
    /// When that fails too, the error from the other layouts is returned.
    pub fn open_from_bytes_or_fallout(i: &[u8]) -> Result<Atlas, FrmError> {
        parse_frm(i).or_else(|err| parse_fallout(i).map_err(|_| err))
    }

    pub fn open_from_file_or_fallout(
        path: impl AsRef<OsStr> + AsRef<Path>,
    ) -> Result<Atlas, FrmError> {
        let path: &Path = path.as_ref();
        let file = read_file(path)?;

        Self::open_from_bytes_or_fallout(&file)
    }
}

impl Frame {
    /// Index 0 comes out as a fully transparent black pixel.
    pub fn to_rgba8(&self, palette: &Palette) -> RgbaImage {
        let stride_length = self.width() as u32;
        let pixels = self.pixels();

        RgbaImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            let color_index = pixels[(x + y * stride_length) as usize];

            if color_index == TRANSPARENT_INDEX {
                return Rgba([0, 0, 0, 0]);
            }

            let [r, g, b] = palette[color_index as usize];
            Rgba([r, g, b, 255])
        })
    }
}
