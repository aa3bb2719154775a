//! Little-endian reads at absolute offsets of an untrusted buffer.
//!
//! Every read is bounds checked. Nothing in here panics.
use nom::number::complete::{le_i16, le_u16, le_u32};

use crate::{error::FrmError, parser::IResult};

pub(crate) fn out_of_bounds(buf: &[u8], offset: usize, width: usize) -> FrmError {
    FrmError::OutOfBounds {
        offset,
        width,
        len: buf.len(),
    }
}

/// Borrows `width` bytes starting at `offset`.
pub fn window(buf: &[u8], offset: usize, width: usize) -> Result<&[u8], FrmError> {
    offset
        .checked_add(width)
        .and_then(|end| buf.get(offset..end))
        .ok_or_else(|| out_of_bounds(buf, offset, width))
}

/// Runs `parser` on everything from `offset` on. Running out of input is reported as a read of
/// `width` bytes past the end.
fn read_with<'a, T>(
    buf: &'a [u8],
    offset: usize,
    width: usize,
    parser: impl Fn(&'a [u8]) -> IResult<'a, T>,
) -> Result<T, FrmError> {
    let input = buf
        .get(offset..)
        .ok_or_else(|| out_of_bounds(buf, offset, width))?;

    parser(input)
        .map(|(_, value)| value)
        .map_err(|_| out_of_bounds(buf, offset, width))
}

pub fn read_u16(buf: &[u8], offset: usize) -> Result<u16, FrmError> {
    read_with(buf, offset, 2, le_u16)
}

pub fn read_i16(buf: &[u8], offset: usize) -> Result<i16, FrmError> {
    read_with(buf, offset, 2, le_i16)
}

pub fn read_u32(buf: &[u8], offset: usize) -> Result<u32, FrmError> {
    read_with(buf, offset, 4, le_u32)
}
