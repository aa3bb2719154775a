use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

use frm::{palette::Palette, Direction};
use image::{
    codecs::gif::{GifEncoder, Repeat},
    imageops, Delay, Frame, RgbaImage,
};

use crate::err;

/// `max(1, round(1000 / (frame_rate * fps_scale)))` milliseconds
pub fn frame_delay_ms(frame_rate: u16, fps_scale: f64) -> u32 {
    (1000. / (frame_rate as f64 * fps_scale)).round().max(1.) as u32
}

/// Every frame of the direction on one canvas, sized to the largest frame.
///
/// Smaller frames sit at the top left. The rest is transparent.
fn direction_to_rgba8(direction: &Direction, palette: &Palette) -> Vec<RgbaImage> {
    let width = direction.iter().map(|f| f.width()).max().unwrap_or(0) as u32;
    let height = direction.iter().map(|f| f.height()).max().unwrap_or(0) as u32;

    direction
        .iter()
        .map(|frame| {
            let mut canvas = RgbaImage::new(width, height);
            imageops::replace(&mut canvas, &frame.to_rgba8(palette), 0, 0);
            canvas
        })
        .collect()
}

/// A still image for one frame, a looping animation for more.
pub fn direction_to_gif_bytes(
    direction: &Direction,
    palette: &Palette,
    delay_ms: u32,
) -> eyre::Result<Vec<u8>> {
    let images = direction_to_rgba8(direction, palette);

    if images.is_empty() {
        return err!("Direction has no frames");
    }

    let mut bytes = vec![];

    {
        let mut encoder = GifEncoder::new(&mut bytes);

        if let [image] = images.as_slice() {
            encoder.encode_frame(Frame::new(image.clone()))?;
        } else {
            encoder.set_repeat(Repeat::Infinite)?;

            for image in images {
                let delay = Delay::from_numer_denom_ms(delay_ms, 1);
                encoder.encode_frame(Frame::from_parts(image, 0, 0, delay))?;
            }
        }
    }

    Ok(bytes)
}

pub fn write_direction_gif(
    direction: &Direction,
    palette: &Palette,
    delay_ms: u32,
    path: impl AsRef<Path>,
) -> eyre::Result<()> {
    let bytes = direction_to_gif_bytes(direction, palette, delay_ms)?;

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&bytes)?;
    writer.flush()?;

    Ok(())
}
