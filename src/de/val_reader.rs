use std::io::{ErrorKind, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::de::Element;
use crate::PlyError;

/// Little-endian scalar reader over the binary body.
///
/// Tracks which record is being read so a short stream is reported as
/// `UnexpectedEof` at that record instead of a bare IO error.
pub(crate) struct BinValReader<R: Read> {
    reader: R,
    element: Element,
    index: usize,
}

impl<R: Read> BinValReader<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            element: Element::Vertex,
            index: 0,
        }
    }

    fn eof_or_io(&self, e: std::io::Error) -> PlyError {
        if e.kind() == ErrorKind::UnexpectedEof {
            PlyError::UnexpectedEof {
                element: self.element,
                index: self.index,
            }
        } else {
            PlyError::Io(e)
        }
    }
}

pub(crate) trait ScalarReader {
    /// Point error reports at record `index` of `element`.
    fn at(&mut self, element: Element, index: usize);

    fn read_u8(&mut self) -> Result<u8, PlyError>;
    fn read_i32(&mut self) -> Result<i32, PlyError>;
    fn read_f32_into(&mut self, dst: &mut [f32]) -> Result<(), PlyError>;
}

impl<R: Read> ScalarReader for BinValReader<R> {
    fn at(&mut self, element: Element, index: usize) {
        self.element = element;
        self.index = index;
    }

    fn read_u8(&mut self) -> Result<u8, PlyError> {
        self.reader.read_u8().map_err(|e| self.eof_or_io(e))
    }

    fn read_i32(&mut self) -> Result<i32, PlyError> {
        self.reader
            .read_i32::<LittleEndian>()
            .map_err(|e| self.eof_or_io(e))
    }

    fn read_f32_into(&mut self, dst: &mut [f32]) -> Result<(), PlyError> {
        self.reader
            .read_f32_into::<LittleEndian>(dst)
            .map_err(|e| self.eof_or_io(e))
    }
}
