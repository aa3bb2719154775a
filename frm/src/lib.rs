//! FRM sprite atlas decoding
//!
//! FRM files carry no reliable magic or version, so a buffer is tried against every known layout
//! in a fixed order and the first one that parses wins. See [`parser::ATTEMPTS`].
//!
//! Files written by the Fallout tools have a header of their own and are decoded by
//! [`fallout::parse_fallout`].
mod cursor;
pub mod error;
pub mod fallout;
pub mod palette;
pub mod parser;
mod types;
mod utils;

pub use cursor::{read_i16, read_u16, read_u32};
pub use fallout::parse_fallout;
pub use parser::parse_frm;
pub use types::*;

#[cfg(test)]
mod test {
    use crate::{error::FrmError, palette::PALETTE, parser::ATTEMPTS, Atlas, Layout};

    #[test]
    fn parse_six_directions() {
        let file = include_bytes!("../test/seq_six_dirs.frm");
        let atlas = Atlas::open_from_bytes(file).unwrap();

        assert_eq!(atlas.layout(), ATTEMPTS[0]);
        assert_eq!(atlas.frame_rate(), 12);
        assert_eq!(atlas.direction_count(), 6);
        assert_eq!(atlas.frames_per_direction(), 2);
        assert_eq!(atlas.frame_count(), 12);

        for (d, direction) in atlas.directions().iter().enumerate() {
            assert_eq!(direction.len(), 2);

            for (f, frame) in direction.iter().enumerate() {
                assert_eq!(frame.width() as usize, 2 + d);
                assert_eq!(frame.height() as usize, 1 + f);
                assert_eq!(frame.origin_x() as isize, d as isize);
                assert_eq!(frame.origin_y() as isize, -(f as isize));

                let expected = (0..(2 + d) * (1 + f))
                    .map(|i| (d * 16 + f * 4 + i) as u8)
                    .collect::<Vec<u8>>();

                assert_eq!(frame.pixels(), expected.as_slice());
            }
        }
    }

    #[test]
    fn parse_versioned() {
        let file = include_bytes!("../test/versioned.frm");
        let atlas = Atlas::open_from_bytes(file).unwrap();

        assert_eq!(atlas.layout().layout, Layout::Sequential);
        assert_eq!(atlas.layout().base, 4);
        // stored as 0
        assert_eq!(atlas.frame_rate(), 10);
        assert_eq!(atlas.direction_count(), 1);

        let frame = &atlas.directions()[0].frames()[0];

        assert_eq!((frame.width(), frame.height()), (3, 2));
        assert_eq!((frame.origin_x(), frame.origin_y()), (-1, 5));
        assert_eq!(frame.pixels(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn parse_offset_table() {
        let file = include_bytes!("../test/table_b.frm");
        let atlas = Atlas::open_from_bytes(file).unwrap();

        assert_eq!(atlas.layout().to_string(), "B@0");
        assert_eq!(atlas.frame_rate(), 8);
        assert_eq!(atlas.direction_count(), 2);

        for (d, direction) in atlas.directions().iter().enumerate() {
            for (f, frame) in direction.iter().enumerate() {
                assert_eq!(frame.width() as usize, 1 + f);
                assert_eq!(frame.height() as usize, 2 + d);
                assert_eq!(frame.origin_x() as usize, 10 * d);
                assert_eq!(frame.origin_y() as usize, f);
                assert_eq!(
                    frame.pixels()[0] as usize,
                    0x40 + d * 8 + f * 2,
                    "direction {d} frame {f}"
                );
            }
        }
    }

    #[test]
    fn pixel_count_matches_geometry() {
        let files: [&[u8]; 3] = [
            include_bytes!("../test/seq_six_dirs.frm"),
            include_bytes!("../test/versioned.frm"),
            include_bytes!("../test/table_b.frm"),
        ];

        for file in files {
            let atlas = Atlas::open_from_bytes(file).unwrap();

            atlas
                .directions()
                .iter()
                .flat_map(|direction| direction.iter())
                .for_each(|frame| {
                    assert_eq!(
                        frame.pixels().len(),
                        frame.width() as usize * frame.height() as usize
                    )
                });
        }
    }

    #[test]
    fn truncated_fails_every_layout() {
        let file = include_bytes!("../test/seq_six_dirs.frm");

        for cut in [1, 3] {
            let truncated = &file[..file.len() - cut];

            for attempt in ATTEMPTS {
                assert!(attempt.parse(truncated).is_err(), "{attempt} cut {cut}");
            }

            assert!(matches!(
                Atlas::open_from_bytes(truncated),
                Err(FrmError::UnsupportedLayout { .. })
            ));
        }
    }

    #[test]
    fn parse_fallout_fixture() {
        let file = include_bytes!("../test/fallout_be.frm");

        assert!(matches!(
            Atlas::open_from_bytes(file),
            Err(FrmError::UnsupportedLayout { .. })
        ));

        let atlas = Atlas::open_from_bytes_or_fallout(file).unwrap();

        assert_eq!(atlas.layout().to_string(), "Fallout(BE)@0");
        assert_eq!(atlas.frame_rate(), 12);
        assert_eq!(atlas.direction_count(), 6);
        assert_eq!(atlas.frames_per_direction(), 2);

        let first = &atlas.directions()[0];

        assert_eq!(first.frames()[0].pixels(), &[1, 2]);
        assert_eq!(
            (first.frames()[0].origin_x(), first.frames()[0].origin_y()),
            (1, -1)
        );
        assert_eq!((first.frames()[1].width(), first.frames()[1].height()), (1, 2));

        // 2 to 5 mirror 1
        for (d, direction) in atlas.directions().iter().enumerate().skip(1) {
            assert_eq!(direction.frames()[0].pixels(), &[5, 6, 7], "direction {d}");
            assert_eq!(direction.frames()[1].pixels(), &[8]);
            assert_eq!((direction.shift_x(), direction.shift_y()), (d as i16, -(d as i16)));
        }
    }

    #[test]
    fn fallback_keeps_other_layouts_first() {
        let file = include_bytes!("../test/seq_six_dirs.frm");

        assert_eq!(
            Atlas::open_from_bytes_or_fallout(file).unwrap(),
            Atlas::open_from_bytes(file).unwrap()
        );

        // neither
        assert!(matches!(
            Atlas::open_from_bytes_or_fallout(&[0; 70]),
            Err(FrmError::UnsupportedLayout { .. })
        ));
    }

    #[test]
    fn open_missing_file() {
        let res = Atlas::open_from_file("./test/does_not_exist.frm");

        assert!(matches!(res, Err(FrmError::IOError { .. })));
    }

    #[test]
    fn frame_to_rgba() {
        let file = include_bytes!("../test/versioned.frm");
        let atlas = Atlas::open_from_bytes(file).unwrap();
        let image = atlas.directions()[0].frames()[0].to_rgba8(&PALETTE);

        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(image.get_pixel(1, 0).0, [236, 236, 236, 255]);
        // index 5, second row
        assert_eq!(image.get_pixel(2, 1).0, [176, 176, 176, 255]);
    }
}
