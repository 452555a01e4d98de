//! Fixed-width primitive reads and writes, parameterized by [`Endian`].
//!
//! This is the only place `byteorder` is used directly; everything above
//! goes through [`Reader`]/[`Writer`].

use crate::endian::Endian;
use crate::error::{digest_io, NBTError, NBTResult};
use byteorder::{BigEndian as BE, LittleEndian as LE, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Read, Write};

/// A byte cursor plus the endian profile this decode call is using.
pub(crate) struct Reader<'a> {
    cursor: Cursor<&'a [u8]>,
    len: usize,
    endian: Endian,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8], endian: Endian) -> Self {
        Reader {
            len: buf.len(),
            cursor: Cursor::new(buf),
            endian,
        }
    }

    fn remaining(&self) -> usize {
        self.len.saturating_sub(self.cursor.position() as usize)
    }

    fn take(&mut self, n: usize) -> NBTResult<Vec<u8>> {
        if self.remaining() < n {
            return Err(NBTError::LengthExceedsBuffer {
                wanted: n,
                remaining: self.remaining(),
            });
        }
        let mut buf = vec![0u8; n];
        digest_io(self.cursor.read_exact(&mut buf))?;
        Ok(buf)
    }

    pub(crate) fn read_u8(&mut self) -> NBTResult<u8> {
        digest_io(self.cursor.read_u8())
    }

    pub(crate) fn read_i8(&mut self) -> NBTResult<i8> {
        digest_io(self.cursor.read_i8())
    }

    pub(crate) fn read_i16(&mut self) -> NBTResult<i16> {
        match self.endian {
            Endian::Big => digest_io(self.cursor.read_i16::<BE>()),
            Endian::Little => digest_io(self.cursor.read_i16::<LE>()),
        }
    }

    pub(crate) fn read_u16(&mut self) -> NBTResult<u16> {
        match self.endian {
            Endian::Big => digest_io(self.cursor.read_u16::<BE>()),
            Endian::Little => digest_io(self.cursor.read_u16::<LE>()),
        }
    }

    pub(crate) fn read_i32(&mut self) -> NBTResult<i32> {
        match self.endian {
            Endian::Big => digest_io(self.cursor.read_i32::<BE>()),
            Endian::Little => digest_io(self.cursor.read_i32::<LE>()),
        }
    }

    pub(crate) fn read_i64(&mut self) -> NBTResult<i64> {
        match self.endian {
            Endian::Big => digest_io(self.cursor.read_i64::<BE>()),
            Endian::Little => digest_io(self.cursor.read_i64::<LE>()),
        }
    }

    pub(crate) fn read_f32(&mut self) -> NBTResult<f32> {
        match self.endian {
            Endian::Big => digest_io(self.cursor.read_f32::<BE>()),
            Endian::Little => digest_io(self.cursor.read_f32::<LE>()),
        }
    }

    pub(crate) fn read_f64(&mut self) -> NBTResult<f64> {
        match self.endian {
            Endian::Big => digest_io(self.cursor.read_f64::<BE>()),
            Endian::Little => digest_io(self.cursor.read_f64::<LE>()),
        }
    }

    /// Reads the NBT string encoding: an unsigned 16-bit length prefix
    /// followed by that many bytes of UTF-8.
    pub(crate) fn read_string(&mut self) -> NBTResult<String> {
        let len = self.read_u16()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes).map_err(|_| NBTError::InvalidUtf8)
    }

    pub(crate) fn read_byte_array(&mut self) -> NBTResult<Vec<i8>> {
        let len = self.read_array_len()?;
        let bytes = self.take(len)?;
        Ok(bytes.into_iter().map(|b| b as i8).collect())
    }

    pub(crate) fn read_int_array(&mut self) -> NBTResult<Vec<i32>> {
        let len = self.read_array_len()?;
        (0..len).map(|_| self.read_i32()).collect()
    }

    pub(crate) fn read_long_array(&mut self) -> NBTResult<Vec<i64>> {
        let len = self.read_array_len()?;
        (0..len).map(|_| self.read_i64()).collect()
    }

    /// Array/list length prefixes are a signed 32-bit int on the wire; a
    /// negative value is a format error rather than silently truncated.
    pub(crate) fn read_array_len(&mut self) -> NBTResult<usize> {
        let len = self.read_i32()?;
        if len < 0 {
            return Err(NBTError::NegativeListLength(len));
        }
        Ok(len as usize)
    }
}

/// A growable byte buffer plus the endian profile this encode call is using.
pub(crate) struct Writer {
    buf: Vec<u8>,
    endian: Endian,
}

impl Writer {
    pub(crate) fn new(endian: Endian) -> Self {
        Writer {
            buf: Vec::new(),
            endian,
        }
    }

    pub(crate) fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    pub(crate) fn write_u8(&mut self, v: u8) -> NBTResult<()> {
        digest_io(self.buf.write_u8(v))
    }

    pub(crate) fn write_i8(&mut self, v: i8) -> NBTResult<()> {
        digest_io(self.buf.write_i8(v))
    }

    pub(crate) fn write_i16(&mut self, v: i16) -> NBTResult<()> {
        match self.endian {
            Endian::Big => digest_io(self.buf.write_i16::<BE>(v)),
            Endian::Little => digest_io(self.buf.write_i16::<LE>(v)),
        }
    }

    pub(crate) fn write_u16(&mut self, v: u16) -> NBTResult<()> {
        match self.endian {
            Endian::Big => digest_io(self.buf.write_u16::<BE>(v)),
            Endian::Little => digest_io(self.buf.write_u16::<LE>(v)),
        }
    }

    pub(crate) fn write_i32(&mut self, v: i32) -> NBTResult<()> {
        match self.endian {
            Endian::Big => digest_io(self.buf.write_i32::<BE>(v)),
            Endian::Little => digest_io(self.buf.write_i32::<LE>(v)),
        }
    }

    pub(crate) fn write_i64(&mut self, v: i64) -> NBTResult<()> {
        match self.endian {
            Endian::Big => digest_io(self.buf.write_i64::<BE>(v)),
            Endian::Little => digest_io(self.buf.write_i64::<LE>(v)),
        }
    }

    pub(crate) fn write_f32(&mut self, v: f32) -> NBTResult<()> {
        match self.endian {
            Endian::Big => digest_io(self.buf.write_f32::<BE>(v)),
            Endian::Little => digest_io(self.buf.write_f32::<LE>(v)),
        }
    }

    pub(crate) fn write_f64(&mut self, v: f64) -> NBTResult<()> {
        match self.endian {
            Endian::Big => digest_io(self.buf.write_f64::<BE>(v)),
            Endian::Little => digest_io(self.buf.write_f64::<LE>(v)),
        }
    }

    /// Writes the NBT string encoding: an unsigned 16-bit length prefix
    /// followed by the UTF-8 bytes. Both directions of this crate agree on
    /// an unsigned prefix (see DESIGN.md "String-length asymmetry").
    pub(crate) fn write_string(&mut self, s: &str) -> NBTResult<()> {
        let bytes = s.as_bytes();
        self.write_u16(bytes.len() as u16)?;
        digest_io(self.buf.write_all(bytes))
    }

    pub(crate) fn write_array_len(&mut self, len: usize) -> NBTResult<()> {
        self.write_i32(len as i32)
    }
}
