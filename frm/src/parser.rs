use nom::{
    combinator::map,
    number::complete::{le_i16, le_u16},
    IResult as _IResult, Parser,
};

use crate::{
    cursor::{out_of_bounds, read_u32, window},
    error::FrmError,
    fallout::parse_fallout,
    Atlas, Attempt, Direction, Frame, FrameHeader, FrmHeader, Layout,
};

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

pub const MAX_DIRECTIONS: usize = 6;
pub const MAX_FRAMES_PER_DIRECTION: u16 = 32;
pub const MAX_FRAME_RATE: u16 = 60;
pub const DEFAULT_FRAME_RATE: u16 = 10;

const HEADER_SIZE: usize = 8;
const FRAME_HEADER_SIZE: usize = 8;

/// Order matters. Some files parse under more than one layout and only the first reading is correct.
pub const ATTEMPTS: [Attempt; 4] = [
    Attempt {
        layout: Layout::Sequential,
        base: 0,
    },
    Attempt {
        layout: Layout::Sequential,
        base: 4,
    },
    Attempt {
        layout: Layout::OffsetTable,
        base: 0,
    },
    Attempt {
        layout: Layout::OffsetTable,
        base: 4,
    },
];

pub fn parse_header(i: &'_ [u8]) -> IResult<'_, FrmHeader> {
    map(
        (le_u16, le_u16, le_u16, le_u16),
        |(frame_rate, action, frames_per_direction, direction_count)| FrmHeader {
            frame_rate,
            action,
            frames_per_direction,
            direction_count,
        },
    )
    .parse(i)
}

pub fn parse_frame_header(i: &'_ [u8]) -> IResult<'_, FrameHeader> {
    map(
        (le_i16, le_i16, le_i16, le_i16),
        |(width, height, origin_x, origin_y)| FrameHeader {
            width,
            height,
            origin_x,
            origin_y,
        },
    )
    .parse(i)
}

fn read_header(buf: &[u8], base: usize) -> Result<FrmHeader, FrmError> {
    parse_header(window(buf, base, HEADER_SIZE)?)
        .map(|(_, header)| header)
        .map_err(|_| out_of_bounds(buf, base, HEADER_SIZE))
}

fn checked_frames_per_direction(header: &FrmHeader) -> Result<usize, FrmError> {
    let frames_per_direction = header.frames_per_direction;

    if !(1..=MAX_FRAMES_PER_DIRECTION).contains(&frames_per_direction) {
        return FrmError::InvalidGeometry {
            field: "frames per direction",
            value: frames_per_direction.into(),
        }
        .to_result();
    }

    Ok(frames_per_direction as usize)
}

/// 0 means every facing is present. Anything else is capped at 6.
fn clamped_direction_count(header: &FrmHeader) -> usize {
    match header.direction_count as usize {
        0 => MAX_DIRECTIONS,
        count => count.min(MAX_DIRECTIONS),
    }
}

pub fn normalize_frame_rate(frame_rate: u16) -> u16 {
    if frame_rate == 0 || frame_rate > MAX_FRAME_RATE {
        DEFAULT_FRAME_RATE
    } else {
        frame_rate
    }
}

/// Reads the frame at `offset`. Also returns the offset right past its pixel block.
fn parse_frame_at(buf: &[u8], offset: usize) -> Result<(Frame, usize), FrmError> {
    let (_, header) = parse_frame_header(window(buf, offset, FRAME_HEADER_SIZE)?)
        .map_err(|_| out_of_bounds(buf, offset, FRAME_HEADER_SIZE))?;

    let area = header.area()?;
    let pixels_start = offset + FRAME_HEADER_SIZE;
    let pixels = window(buf, pixels_start, area)?;

    Ok((Frame::new(header, pixels)?, pixels_start + area))
}

/// Layout A
///
/// Six `u32` direction offsets follow the header. Each direction stores its frames back to back.
pub fn parse_sequential(buf: &[u8], base: usize) -> Result<Atlas, FrmError> {
    let header = read_header(buf, base)?;
    let frames_per_direction = checked_frames_per_direction(&header)?;
    let direction_count = clamped_direction_count(&header);

    let mut directions = Vec::with_capacity(direction_count);

    for direction_index in 0..direction_count {
        let offset = read_u32(buf, base + HEADER_SIZE + direction_index * 4)? as usize;

        if offset == 0 || offset >= buf.len() {
            return FrmError::BadOffset {
                offset,
                len: buf.len(),
            }
            .to_result();
        }

        let mut cursor = offset;
        let mut frames = Vec::with_capacity(frames_per_direction);

        for _ in 0..frames_per_direction {
            let (frame, next) = parse_frame_at(buf, cursor)?;

            frames.push(frame);
            cursor = next;
        }

        directions.push(Direction::new(frames));
    }

    Atlas::new(
        directions,
        normalize_frame_rate(header.frame_rate),
        frames_per_direction,
        Attempt {
            layout: Layout::Sequential,
            base,
        },
    )
}

/// Layout B
///
/// A table of `6 * frames_per_direction` absolute frame offsets follows the header.
pub fn parse_offset_table(buf: &[u8], base: usize) -> Result<Atlas, FrmError> {
    let header = read_header(buf, base)?;
    let frames_per_direction = checked_frames_per_direction(&header)?;
    let direction_count = clamped_direction_count(&header);

    // the table always reserves all six direction slots
    let table_start = base + HEADER_SIZE;
    let needed = table_start + MAX_DIRECTIONS * frames_per_direction * 4;

    if needed > buf.len() {
        return FrmError::TableTooSmall {
            needed,
            len: buf.len(),
        }
        .to_result();
    }

    let mut directions = Vec::with_capacity(direction_count);

    for direction_index in 0..direction_count {
        let mut frames = Vec::with_capacity(frames_per_direction);

        for frame_index in 0..frames_per_direction {
            let slot = direction_index * frames_per_direction + frame_index;
            let offset = read_u32(buf, table_start + slot * 4)? as usize;

            // `>=` rather than `>`, files right at the boundary are rejected
            if offset == 0 || offset.saturating_add(FRAME_HEADER_SIZE) >= buf.len() {
                return FrmError::BadOffset {
                    offset,
                    len: buf.len(),
                }
                .to_result();
            }

            let (frame, _) = parse_frame_at(buf, offset)?;

            frames.push(frame);
        }

        directions.push(Direction::new(frames));
    }

    Atlas::new(
        directions,
        normalize_frame_rate(header.frame_rate),
        frames_per_direction,
        Attempt {
            layout: Layout::OffsetTable,
            base,
        },
    )
}

impl Attempt {
    pub fn parse(&self, buf: &[u8]) -> Result<Atlas, FrmError> {
        match self.layout {
            Layout::Sequential => parse_sequential(buf, self.base),
            Layout::OffsetTable => parse_offset_table(buf, self.base),
            Layout::Fallout(_) => parse_fallout(buf),
        }
    }
}

/// Returns the first layout attempt that parses.
///
/// Failed attempts are dropped. When all of them fail, the last error is kept as the source.
pub fn parse_frm(buf: &[u8]) -> Result<Atlas, FrmError> {
    let [first, rest @ ..] = ATTEMPTS;

    rest.iter()
        .fold(first.parse(buf), |res, attempt| res.or_else(|_| attempt.parse(buf)))
        .map_err(|err| FrmError::UnsupportedLayout {
            source: Box::new(err),
        })
}
