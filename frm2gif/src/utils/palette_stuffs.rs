//! Palette files that can replace the embedded one.
//!
//! Supports JASC-PAL text, GIMP `.gpl` text, and raw 768 (or 772) byte binaries.
use std::path::Path;

use frm::palette::Palette;

use crate::{err, utils::constants::PADDED_BINARY_PALETTE_LENGTH};

const JASC_MAGIC: &str = "JASC-PAL";

fn parse_rgb_line(line: &str) -> eyre::Result<[u8; 3]> {
    let values = line
        .split_whitespace()
        .map(|s| s.parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()?;

    match values.as_slice() {
        [r, g, b] => Ok([*r, *g, *b]),
        _ => err!("Expected 3 color components: `{}`", line),
    }
}

pub fn parse_jasc_palette(text: &str) -> eyre::Result<Vec<[u8; 3]>> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    if lines.next() != Some(JASC_MAGIC) {
        return err!("Missing {} header", JASC_MAGIC);
    }

    // version, always 0100
    if lines.next().is_none() {
        return err!("Missing JASC-PAL version");
    }

    let Some(count) = lines.next() else {
        return err!("Missing JASC-PAL color count");
    };

    let count = count.parse::<usize>()?;

    let colors = lines
        .take(count)
        .map(parse_rgb_line)
        .collect::<eyre::Result<Vec<[u8; 3]>>>()?;

    if colors.len() != count {
        return err!(
            "Mismatched color count. Expect ({}). Have ({})",
            count,
            colors.len()
        );
    }

    Ok(colors)
}

/// Out of range components are clamped.
pub fn parse_gimp_palette(text: &str) -> eyre::Result<Vec<[u8; 3]>> {
    let colors = text
        .lines()
        .filter(|line| {
            let line = line.trim();

            !line.is_empty()
                && !line.starts_with('#')
                && !line.starts_with(|c: char| c.is_ascii_alphabetic())
        })
        .filter_map(|line| {
            let parts = line
                .split_whitespace()
                .filter_map(|part| part.parse::<i64>().ok())
                .map(|v| v.clamp(0, 255) as u8)
                .collect::<Vec<u8>>();

            (parts.len() >= 3).then(|| [parts[0], parts[1], parts[2]])
        })
        .collect::<Vec<[u8; 3]>>();

    if colors.is_empty() {
        return err!("No colors in GIMP palette");
    }

    Ok(colors)
}

pub fn parse_binary_palette(bytes: &[u8]) -> eyre::Result<Vec<[u8; 3]>> {
    if bytes.is_empty() {
        return err!("Empty palette");
    }

    let bytes = if bytes.len() == PADDED_BINARY_PALETTE_LENGTH {
        &bytes[..768]
    } else {
        bytes
    };

    if bytes.len() % 3 != 0 {
        return err!(
            "Binary palette length must be a multiple of 3: {}",
            bytes.len()
        );
    }

    Ok(bytes
        .chunks_exact(3)
        .map(|rgb| [rgb[0], rgb[1], rgb[2]])
        .collect())
}

/// Pads with black or truncates to exactly 256 colors.
pub fn palette_from_colors(colors: &[[u8; 3]]) -> Palette {
    let mut palette = [[0u8; 3]; 256];

    palette
        .iter_mut()
        .zip(colors)
        .for_each(|(slot, color)| *slot = *color);

    palette
}

pub fn load_palette(path: impl AsRef<Path>) -> eyre::Result<Palette> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;

    let is_gpl = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gpl"));

    let colors = if is_gpl {
        parse_gimp_palette(&String::from_utf8_lossy(&bytes))?
    } else if bytes.starts_with(JASC_MAGIC.as_bytes()) {
        parse_jasc_palette(&String::from_utf8_lossy(&bytes))?
    } else {
        parse_binary_palette(&bytes)?
    };

    Ok(palette_from_colors(&colors))
}

#[cfg(test)]
mod test {
    use frm::palette::PALETTE;

    use super::*;

    #[test]
    fn jasc() {
        let colors = parse_jasc_palette("JASC-PAL\r\n0100\r\n2\r\n0 0 255\r\n236 236 236\r\n").unwrap();

        assert_eq!(colors, vec![[0, 0, 255], [236, 236, 236]]);
    }

    #[test]
    fn jasc_short() {
        assert!(parse_jasc_palette("JASC-PAL\n0100\n3\n1 2 3\n").is_err());
        assert!(parse_jasc_palette("JASC-PAL\n0100\n1\n1 2\n").is_err());
        assert!(parse_jasc_palette("GIMP Palette\n").is_err());
    }

    #[test]
    fn gimp() {
        let colors = parse_gimp_palette("GIMP Palette\nName: test\n#\n10 20 30\n 40 50 60 Untitled\n300 -1 7").unwrap();

        assert_eq!(colors, vec![[10, 20, 30], [40, 50, 60], [255, 0, 7]]);
    }

    #[test]
    fn gimp_empty() {
        assert!(parse_gimp_palette("GIMP Palette\n#\n").is_err());
    }

    #[test]
    fn binary() {
        assert_eq!(
            parse_binary_palette(&[1, 2, 3, 4, 5, 6]).unwrap(),
            vec![[1, 2, 3], [4, 5, 6]]
        );
        assert!(parse_binary_palette(&[]).is_err());
        assert!(parse_binary_palette(&[1, 2]).is_err());

        let padded = vec![7u8; PADDED_BINARY_PALETTE_LENGTH];

        assert_eq!(parse_binary_palette(&padded).unwrap().len(), 256);
    }

    #[test]
    fn pad_and_truncate() {
        let palette = palette_from_colors(&[[1, 2, 3]]);

        assert_eq!(palette[0], [1, 2, 3]);
        assert_eq!(palette[1], [0, 0, 0]);

        let long = vec![[9u8, 9, 9]; 300];

        assert_eq!(palette_from_colors(&long), [[9u8, 9, 9]; 256]);
    }

    #[test]
    fn load_by_kind() {
        let dir = tempfile::tempdir().unwrap();

        let gpl = dir.path().join("fallout.gpl");
        std::fs::write(&gpl, "GIMP Palette\n#\n1 2 3\n").unwrap();
        assert_eq!(load_palette(&gpl).unwrap()[0], [1, 2, 3]);

        let jasc = dir.path().join("fallout.pal");
        std::fs::write(&jasc, "JASC-PAL\n0100\n1\n4 5 6\n").unwrap();
        assert_eq!(load_palette(&jasc).unwrap()[0], [4, 5, 6]);

        let binary = dir.path().join("color.pal");
        let bytes = PALETTE.as_flattened().to_vec();
        std::fs::write(&binary, bytes).unwrap();
        assert_eq!(load_palette(&binary).unwrap(), PALETTE);
    }
}
