use std::fmt;

use crate::error::FrmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    pub fn flip(self) -> Self {
        match self {
            Endian::Big => Endian::Little,
            Endian::Little => Endian::Big,
        }
    }
}

impl From<Endian> for nom::number::Endianness {
    fn from(value: Endian) -> Self {
        match value {
            Endian::Big => nom::number::Endianness::Big,
            Endian::Little => nom::number::Endianness::Little,
        }
    }
}

/// The memory layouts an FRM file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Six direction offsets, each pointing at frames stored back to back.
    Sequential,
    /// One offset per (direction, frame) pair right after the header.
    OffsetTable,
    /// The Fallout tools' own layout, in the byte order of its header.
    Fallout(Endian),
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Sequential => f.write_str("A"),
            Layout::OffsetTable => f.write_str("B"),
            Layout::Fallout(Endian::Big) => f.write_str("Fallout(BE)"),
            Layout::Fallout(Endian::Little) => f.write_str("Fallout(LE)"),
        }
    }
}

/// A layout tried at a given base offset.
///
/// A base of 4 skips the `u32` version field some files start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attempt {
    pub layout: Layout,
    pub base: usize,
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.layout, self.base)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FrmHeader {
    pub frame_rate: u16,
    // unused
    pub action: u16,
    pub frames_per_direction: u16,
    pub direction_count: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct FrameHeader {
    pub width: i16,
    pub height: i16,
    pub origin_x: i16,
    pub origin_y: i16,
}

/// Fixed 62 byte header of the Fallout layout.
#[derive(Debug, Clone, Copy)]
pub struct FalloutHeader {
    pub version: u32,
    pub frame_rate: u16,
    // unused
    pub action: u16,
    pub frames_per_direction: u16,
    pub shift_x: [i16; 6],
    pub shift_y: [i16; 6],
    /// Relative to the start of the frame area.
    pub direction_offsets: [u32; 6],
    pub frame_area_size: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct FalloutFrameHeader {
    pub width: u16,
    pub height: u16,
    /// Must equal `width * height`.
    pub size: u32,
    pub origin_x: i16,
    pub origin_y: i16,
}

impl FrameHeader {
    /// Pixel count of the block following the header.
    pub fn area(&self) -> Result<usize, FrmError> {
        if self.width <= 0 {
            return FrmError::InvalidGeometry {
                field: "width",
                value: self.width.into(),
            }
            .to_result();
        }

        if self.height <= 0 {
            return FrmError::InvalidGeometry {
                field: "height",
                value: self.height.into(),
            }
            .to_result();
        }

        Ok(self.width as usize * self.height as usize)
    }
}

/// One palette indexed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    origin_x: i16,
    origin_y: i16,
    // [[u8; width]; height]
    pixels: Vec<u8>,
}

impl Frame {
    pub(crate) fn new(header: FrameHeader, pixels: &[u8]) -> Result<Self, FrmError> {
        let area = header.area()?;

        if pixels.len() != area {
            return FrmError::InvalidGeometry {
                field: "pixel count",
                value: pixels.len() as i64,
            }
            .to_result();
        }

        let FrameHeader {
            width,
            height,
            origin_x,
            origin_y,
        } = header;

        // both positive after `area`
        let (width, height) = (width as u16, height as u16);

        Ok(Self {
            width,
            height,
            origin_x,
            origin_y,
            pixels: pixels.to_vec(),
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn origin_x(&self) -> i16 {
        self.origin_x
    }

    pub fn origin_y(&self) -> i16 {
        self.origin_y
    }

    /// Row major palette indices, exactly `width * height` of them.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Frames of one facing in playback order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Direction {
    frames: Vec<Frame>,
    shift_x: i16,
    shift_y: i16,
}

impl Direction {
    pub(crate) fn new(frames: Vec<Frame>) -> Self {
        Self::with_shift(frames, 0, 0)
    }

    pub(crate) fn with_shift(frames: Vec<Frame>, shift_x: i16, shift_y: i16) -> Self {
        Self {
            frames,
            shift_x,
            shift_y,
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Offset applied to every frame of this facing. Only the Fallout layout stores one.
    pub fn shift_x(&self) -> i16 {
        self.shift_x
    }

    pub fn shift_y(&self) -> i16 {
        self.shift_y
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

impl<'a> IntoIterator for &'a Direction {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A decoded FRM file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atlas {
    directions: Vec<Direction>,
    frame_rate: u16,
    frames_per_direction: usize,
    layout: Attempt,
}

impl Atlas {
    pub(crate) fn new(
        directions: Vec<Direction>,
        frame_rate: u16,
        frames_per_direction: usize,
        layout: Attempt,
    ) -> Result<Self, FrmError> {
        if directions.is_empty() {
            return FrmError::NoDirections.to_result();
        }

        Ok(Self {
            directions,
            frame_rate,
            frames_per_direction,
            layout,
        })
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn direction_count(&self) -> usize {
        self.directions.len()
    }

    /// Frames per second, always within `1..=60`.
    pub fn frame_rate(&self) -> u16 {
        self.frame_rate
    }

    pub fn frames_per_direction(&self) -> usize {
        self.frames_per_direction
    }

    /// Which layout attempt produced this atlas.
    pub fn layout(&self) -> Attempt {
        self.layout
    }

    pub fn frame_count(&self) -> usize {
        self.directions.iter().map(Direction::len).sum()
    }
}
