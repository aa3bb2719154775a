use std::{
    fs,
    path::{Path, PathBuf},
};

use frm::{
    palette::{Palette, PALETTE},
    Atlas,
};
use log::{error, info, warn};
use rayon::prelude::*;

use crate::{
    config::Config,
    err,
    utils::{
        constants::DIRECTION_SUFFIX,
        gif_stuffs::{frame_delay_ms, write_direction_gif},
        meta_stuffs::AtlasMetadata,
        misc::{file_stem_string, find_files_with_ext_recursively},
    },
};

pub struct Frm2GifOptions {
    /// One GIF per direction. Otherwise only direction 0 is written.
    split_dirs: bool,
    fps_scale: f64,
    metadata: bool,
    fallout_fallback: bool,
    extensions: Vec<String>,
}

impl Default for Frm2GifOptions {
    fn default() -> Self {
        let config = Config::default();

        Self {
            split_dirs: config.split_dirs,
            fps_scale: config.fps_scale,
            metadata: config.metadata,
            fallout_fallback: config.fallout_fallback,
            extensions: config.extensions,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Frm2GifReport {
    pub scanned: usize,
    pub ok: usize,
    pub err: usize,
}

pub struct Frm2Gif {
    src: Option<PathBuf>,
    dst: Option<PathBuf>,
    palette: Palette,
    options: Frm2GifOptions,
}

impl Default for Frm2Gif {
    fn default() -> Self {
        Self {
            src: Default::default(),
            dst: Default::default(),
            palette: PALETTE,
            options: Default::default(),
        }
    }
}

impl Frm2Gif {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        let mut res = Self::new();

        res.split_dirs(config.split_dirs)
            .fps_scale(config.fps_scale)
            .metadata(config.metadata)
            .fallout_fallback(config.fallout_fallback)
            .extensions(&config.extensions);

        res
    }

    pub fn src(&mut self, path: impl AsRef<Path> + Into<PathBuf>) -> &mut Self {
        self.src = Some(path.into());

        self
    }

    pub fn dst(&mut self, path: impl AsRef<Path> + Into<PathBuf>) -> &mut Self {
        self.dst = Some(path.into());

        self
    }

    pub fn palette(&mut self, palette: Palette) -> &mut Self {
        self.palette = palette;

        self
    }

    pub fn split_dirs(&mut self, v: bool) -> &mut Self {
        self.options.split_dirs = v;

        self
    }

    pub fn fps_scale(&mut self, v: f64) -> &mut Self {
        self.options.fps_scale = v;

        self
    }

    pub fn metadata(&mut self, v: bool) -> &mut Self {
        self.options.metadata = v;

        self
    }

    pub fn fallout_fallback(&mut self, v: bool) -> &mut Self {
        self.options.fallout_fallback = v;

        self
    }

    pub fn extensions(&mut self, extensions: &[String]) -> &mut Self {
        self.options.extensions = extensions.to_vec();

        self
    }

    fn folders(&self) -> eyre::Result<(&Path, &Path)> {
        let Some(src) = self.src.as_deref() else {
            return err!("No source folder");
        };

        let Some(dst) = self.dst.as_deref() else {
            return err!("No destination folder");
        };

        Ok((src, dst))
    }

    /// Converts one file and returns the paths written.
    ///
    /// `path` must be inside the source folder. The output mirrors its relative location.
    pub fn convert_file(&self, path: &Path) -> eyre::Result<Vec<PathBuf>> {
        let (src, dst) = self.folders()?;

        let relative = path.strip_prefix(src)?;
        let Some(stem) = file_stem_string(relative) else {
            return err!("Cannot get file name of {}", path.display());
        };

        let atlas = if self.options.fallout_fallback {
            Atlas::open_from_file_or_fallout(path)?
        } else {
            Atlas::open_from_file(path)?
        };

        let out_dir = relative
            .parent()
            .map(|parent| dst.join(parent))
            .unwrap_or_else(|| dst.to_path_buf());

        fs::create_dir_all(&out_dir)?;

        let delay_ms = frame_delay_ms(atlas.frame_rate(), self.options.fps_scale);

        let outputs = if self.options.split_dirs {
            (0..atlas.direction_count())
                .map(|direction_index| format!("{stem}{DIRECTION_SUFFIX}{direction_index}.gif"))
                .collect::<Vec<String>>()
        } else {
            vec![format!("{stem}.gif")]
        };

        let mut written = vec![];

        for (direction, file_name) in atlas.directions().iter().zip(&outputs) {
            let out_path = out_dir.join(file_name);

            write_direction_gif(direction, &self.palette, delay_ms, &out_path)?;
            written.push(out_path);
        }

        if self.options.metadata {
            let files = outputs.into_iter().map(Some).collect::<Vec<_>>();
            let source = relative.display().to_string();
            let metadata = AtlasMetadata::new(&source, &atlas, delay_ms, &files);
            let out_path = out_dir.join(format!("{stem}.json"));

            metadata.write(&out_path)?;
            written.push(out_path);
        }

        info!(
            "converted {} ({}, {} directions, {} fps)",
            relative.display(),
            atlas.layout(),
            atlas.direction_count(),
            atlas.frame_rate()
        );

        Ok(written)
    }

    /// Converts every matching file under the source folder.
    ///
    /// A file that fails is counted and skipped.
    pub fn run(&self) -> eyre::Result<Frm2GifReport> {
        let (src, dst) = self.folders()?;

        if !src.is_dir() {
            return err!("{} is not a folder", src.display());
        }

        fs::create_dir_all(dst)?;

        let paths = find_files_with_ext_recursively(src, &self.options.extensions);

        if paths.is_empty() {
            warn!("No FRM files found in {}", src.display());
        }

        let results = paths
            .par_iter()
            .map(|path| (path, self.convert_file(path)))
            .collect::<Vec<_>>();

        let mut report = Frm2GifReport {
            scanned: paths.len(),
            ..Default::default()
        };

        for (path, res) in results {
            match res {
                Ok(_) => report.ok += 1,
                Err(err) => {
                    report.err += 1;
                    error!("{} -> {}", path.display(), err);
                }
            }
        }

        Ok(report)
    }
}
