use std::path::PathBuf;

use clap::{builder::BoolishValueParser, Parser};
use frm2gif::{
    config::{parse_config, parse_config_from_file, Config},
    err,
    modules::frm2gif::Frm2Gif,
    utils::palette_stuffs::load_palette,
};

pub enum CliRes {
    Ok,
    Err,
}

/// Converts Fallout FRM sprites into GIF animations
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Frm2GifCli {
    /// Folder to scan recursively
    #[arg(long)]
    src: PathBuf,
    /// Output folder. Sub-folders of the source are mirrored
    #[arg(long)]
    dst: PathBuf,
    /// One GIF per direction instead of only the first direction
    #[arg(long, value_parser = BoolishValueParser::new())]
    split_dirs: Option<bool>,
    /// Multiplies the frame rate stored in each file
    #[arg(long)]
    fps_scale: Option<f64>,
    /// JASC-PAL, GIMP .gpl, or raw binary palette
    #[arg(long)]
    palette: Option<PathBuf>,
    /// Decodes files no other layout accepts as written by the Fallout tools
    #[arg(long, value_parser = BoolishValueParser::new())]
    fallout_fallback: Option<bool>,
    /// Writes a .json describing every frame
    #[arg(long)]
    metadata: bool,
    /// Config file. Defaults to frm2gif.toml next to the binary
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Frm2GifCli {
    fn config(&self) -> eyre::Result<Config> {
        let mut config = match &self.config {
            Some(path) => parse_config_from_file(path)?,
            None => parse_config()?,
        };

        if let Some(split_dirs) = self.split_dirs {
            config.split_dirs = split_dirs;
        }

        if let Some(fallout_fallback) = self.fallout_fallback {
            config.fallout_fallback = fallout_fallback;
        }

        if let Some(fps_scale) = self.fps_scale {
            config.fps_scale = fps_scale;
        }

        if self.palette.is_some() {
            config.palette.clone_from(&self.palette);
        }

        config.metadata |= self.metadata;

        config.validate()?;

        Ok(config)
    }

    fn run(&self) -> eyre::Result<()> {
        let config = self.config()?;

        let mut frm2gif = Frm2Gif::from_config(&config);

        frm2gif.src(self.src.as_path()).dst(self.dst.as_path());

        if let Some(path) = &config.palette {
            frm2gif.palette(load_palette(path)?);
        }

        let report = frm2gif.run()?;

        println!(
            "Done. scanned={} ok={} err={}",
            report.scanned, report.ok, report.err
        );

        if report.ok == 0 {
            return err!("Nothing was converted");
        }

        Ok(())
    }
}

pub fn cli() -> CliRes {
    let cli = Frm2GifCli::parse();

    match cli.run() {
        Ok(_) => CliRes::Ok,
        Err(err) => {
            println!("{}", err);
            CliRes::Err
        }
    }
}
