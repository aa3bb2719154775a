//! The layout written by the Fallout tools themselves.
//!
//! A fixed 62 byte header holds a version, a shift per direction and six direction offsets relative
//! to the frame area. Frame headers are 12 bytes and repeat the pixel count. Both byte orders exist
//! in the wild, sometimes mixed within one file, so every header is tried in both.
use nom::{
    combinator::{map, map_res},
    multi::count,
    number::{complete as number, Endianness},
    Parser,
};

use crate::{
    cursor::window,
    error::FrmError,
    parser::{normalize_frame_rate, IResult, MAX_DIRECTIONS},
    Atlas, Attempt, Direction, Endian, FalloutFrameHeader, FalloutHeader, Frame, FrameHeader,
    Layout,
};

pub const FRAME_AREA_OFFSET: usize = 0x3e;
const FRAME_HEADER_SIZE: usize = 12;

const MAX_VERSION: u32 = 0xffff;
const MAX_RAW_FRAME_RATE: u16 = 1000;
const MAX_FRAMES_PER_DIRECTION: u16 = 400;
const MAX_FRAME_SIDE: u16 = 4096;

pub fn parse_fallout_header(i: &'_ [u8], endian: Endian) -> IResult<'_, FalloutHeader> {
    let endian = Endianness::from(endian);

    map(
        (
            number::u32(endian),
            number::u16(endian),
            number::u16(endian),
            number::u16(endian),
            map_res(count(number::i16(endian), MAX_DIRECTIONS), |v: Vec<i16>| {
                <[i16; MAX_DIRECTIONS]>::try_from(v)
            }),
            map_res(count(number::i16(endian), MAX_DIRECTIONS), |v: Vec<i16>| {
                <[i16; MAX_DIRECTIONS]>::try_from(v)
            }),
            map_res(count(number::u32(endian), MAX_DIRECTIONS), |v: Vec<u32>| {
                <[u32; MAX_DIRECTIONS]>::try_from(v)
            }),
            number::u32(endian),
        ),
        |(
            version,
            frame_rate,
            action,
            frames_per_direction,
            shift_x,
            shift_y,
            direction_offsets,
            frame_area_size,
        )| FalloutHeader {
            version,
            frame_rate,
            action,
            frames_per_direction,
            shift_x,
            shift_y,
            direction_offsets,
            frame_area_size,
        },
    )
    .parse(i)
}

pub fn parse_fallout_frame_header(i: &'_ [u8], endian: Endian) -> IResult<'_, FalloutFrameHeader> {
    let endian = Endianness::from(endian);

    map(
        (
            number::u16(endian),
            number::u16(endian),
            number::u32(endian),
            number::i16(endian),
            number::i16(endian),
        ),
        |(width, height, size, origin_x, origin_y)| FalloutFrameHeader {
            width,
            height,
            size,
            origin_x,
            origin_y,
        },
    )
    .parse(i)
}

fn is_header_plausible(header: &FalloutHeader, len: usize) -> bool {
    let frame_area_size = header.frame_area_size as usize;

    (1..=MAX_VERSION).contains(&header.version)
        && header.frame_rate <= MAX_RAW_FRAME_RATE
        && (1..=MAX_FRAMES_PER_DIRECTION).contains(&header.frames_per_direction)
        && frame_area_size > 0
        && frame_area_size <= len.saturating_sub(FRAME_AREA_OFFSET)
        && header
            .direction_offsets
            .iter()
            .all(|&offset| offset == 0 || offset < header.frame_area_size)
}

fn is_frame_plausible(header: &FalloutFrameHeader, offset: usize, frame_area_end: usize) -> bool {
    let remaining = frame_area_end.saturating_sub(offset + FRAME_HEADER_SIZE);
    let size = header.size as usize;

    (1..=MAX_FRAME_SIDE).contains(&header.width)
        && (1..=MAX_FRAME_SIDE).contains(&header.height)
        && size == header.width as usize * header.height as usize
        && size <= remaining
}

/// Big endian is tried first.
fn read_fallout_header(buf: &[u8]) -> Result<(FalloutHeader, Endian), FrmError> {
    let bytes = window(buf, 0, FRAME_AREA_OFFSET)?;

    [Endian::Big, Endian::Little]
        .into_iter()
        .find_map(|endian| {
            parse_fallout_header(bytes, endian)
                .ok()
                .map(|(_, header)| (header, endian))
                .filter(|(header, _)| is_header_plausible(header, buf.len()))
        })
        .ok_or(FrmError::ImplausibleHeader)
}

/// `preferred` is the byte order the previous frame used.
fn read_fallout_frame_header(
    buf: &[u8],
    offset: usize,
    preferred: Endian,
    frame_area_end: usize,
) -> Result<(FalloutFrameHeader, Endian), FrmError> {
    let bytes = window(buf, offset, FRAME_HEADER_SIZE)?;

    [preferred, preferred.flip()]
        .into_iter()
        .find_map(|endian| {
            parse_fallout_frame_header(bytes, endian)
                .ok()
                .map(|(_, header)| (header, endian))
                .filter(|(header, _)| is_frame_plausible(header, offset, frame_area_end))
        })
        .ok_or(FrmError::ImplausibleFrame { offset })
}

/// Decodes the Fallout layout. Always yields six directions.
///
/// A zero offset past the first direction marks a mirrored facing. It reuses the frames of the
/// direction before it but keeps its own shift.
pub fn parse_fallout(buf: &[u8]) -> Result<Atlas, FrmError> {
    let (header, endian) = read_fallout_header(buf)?;

    let frame_area_end = FRAME_AREA_OFFSET + header.frame_area_size as usize;
    let frames_per_direction = header.frames_per_direction as usize;

    let mut directions: Vec<Direction> = Vec::with_capacity(MAX_DIRECTIONS);

    for (direction_index, &offset) in header.direction_offsets.iter().enumerate() {
        let shift_x = header.shift_x[direction_index];
        let shift_y = header.shift_y[direction_index];

        if offset == 0 {
            if let Some(previous) = directions.last() {
                let frames = previous.frames().to_vec();

                directions.push(Direction::with_shift(frames, shift_x, shift_y));
                continue;
            }
        }

        let mut cursor = FRAME_AREA_OFFSET + offset as usize;
        let mut frame_endian = endian;
        let mut frames = Vec::with_capacity(frames_per_direction);

        for _ in 0..frames_per_direction {
            let (raw, used) = read_fallout_frame_header(buf, cursor, frame_endian, frame_area_end)?;
            frame_endian = used;

            let pixels_start = cursor + FRAME_HEADER_SIZE;
            let size = raw.size as usize;
            let pixels = window(buf, pixels_start, size)?;

            // sides are at most 4096 after the plausibility check
            let frame_header = FrameHeader {
                width: raw.width as i16,
                height: raw.height as i16,
                origin_x: raw.origin_x,
                origin_y: raw.origin_y,
            };

            frames.push(Frame::new(frame_header, pixels)?);
            cursor = pixels_start + size;
        }

        directions.push(Direction::with_shift(frames, shift_x, shift_y));
    }

    Atlas::new(
        directions,
        normalize_frame_rate(header.frame_rate),
        frames_per_direction,
        Attempt {
            layout: Layout::Fallout(endian),
            base: 0,
        },
    )
}
