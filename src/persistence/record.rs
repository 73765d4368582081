//! Binary position records
//!
//! Format (native-endian, no header):
//! - i32 x
//! - i32 y
//! - i32 w
//! - i32 h
//!
//! A room's positions are one record per entity, in room order. Loaded
//! positions replace the entities' current boxes.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use super::PersistenceError;
use crate::sim::{Rect, Room};

/// Bytes in one record
pub const RECORD_LEN: usize = std::mem::size_of::<Rect>();

/// Write one box as a position record
pub fn write_rect<W: Write>(out: &mut W, rect: &Rect) -> Result<(), PersistenceError> {
    out.write_all(bytemuck::bytes_of(rect))?;
    Ok(())
}

/// Read one position record
pub fn read_rect<R: Read>(inp: &mut R) -> Result<Rect, PersistenceError> {
    let mut buf = [0u8; RECORD_LEN];
    inp.read_exact(&mut buf).map_err(|err| match err.kind() {
        ErrorKind::UnexpectedEof => PersistenceError::ShortRecord,
        _ => PersistenceError::Io(err),
    })?;
    Ok(bytemuck::pod_read_unaligned(&buf))
}

/// Write every entity's box, in room order
pub fn save_positions<W: Write>(room: &Room, out: &mut W) -> Result<(), PersistenceError> {
    for entity in room.iter() {
        write_rect(out, &entity.rect)?;
    }
    out.flush()?;
    Ok(())
}

/// Replace every entity's box with the next record from `inp`.
///
/// All records are read before any entity is touched, so a short stream
/// leaves the room unchanged. Returns the number of records applied.
pub fn load_positions<R: Read>(room: &mut Room, inp: &mut R) -> Result<usize, PersistenceError> {
    let count = room.count();
    let mut rects = Vec::with_capacity(count);
    for index in 0..count {
        let rect = read_rect(inp).map_err(|err| match err {
            PersistenceError::ShortRecord => PersistenceError::MissingRecord { index, count },
            other => other,
        })?;
        rects.push(rect);
    }

    for (entity, rect) in room.iter_mut().zip(rects) {
        entity.rect = rect;
    }
    Ok(count)
}

pub fn save_positions_to(room: &Room, path: &Path) -> Result<(), PersistenceError> {
    let mut out = BufWriter::new(File::create(path)?);
    save_positions(room, &mut out)?;
    log::info!("Saved {} positions to {}", room.count(), path.display());
    Ok(())
}

pub fn load_positions_from(room: &mut Room, path: &Path) -> Result<usize, PersistenceError> {
    let mut inp = BufReader::new(File::open(path)?);
    let applied = load_positions(room, &mut inp)?;
    log::info!("Loaded {} positions from {}", applied, path.display());
    Ok(applied)
}
