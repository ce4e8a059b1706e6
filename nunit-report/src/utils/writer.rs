// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Stderr, Stdout, Write};

use crate::results::errors::Error;
use crate::results::Result;

/// Output of a command: the report goes to `buffer`, diagnostics to `err`.
pub struct Writer {
    buffer: WriteBuffer,
    err: WriteBuffer,
}

impl Default for Writer {
    fn default() -> Self {
        Self {
            buffer: WriteBuffer::Stdout(std::io::stdout()),
            err: WriteBuffer::Stderr(std::io::stderr()),
        }
    }
}

impl Writer {
    pub fn new(buffer: WriteBuffer, err: WriteBuffer) -> Self {
        Self { buffer, err }
    }

    pub fn write_err(&mut self, message: String) -> std::io::Result<()> {
        writeln!(self.err, "{message}")
    }

    pub fn into_string(self) -> Result<String> {
        self.buffer.into_string()
    }

    pub fn err_to_stripped(self) -> Result<String> {
        strip(self.err.into_string()?)
    }

    /// Buffered output with every ANSI escape sequence removed.
    pub fn stripped(self) -> Result<String> {
        strip(self.buffer.into_string()?)
    }
}

fn strip(text: String) -> Result<String> {
    let stripped = strip_ansi_escapes::strip(text)?;
    Ok(String::from_utf8(stripped)?)
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.buffer.flush()
    }
}

pub enum WriteBuffer {
    Stdout(Stdout),
    Stderr(Stderr),
    Vec(Vec<u8>),
    File(File),
}

impl WriteBuffer {
    fn into_string(self) -> Result<String> {
        match self {
            WriteBuffer::Stdout(..) | WriteBuffer::Stderr(..) => Err(Error::IllegalArguments(
                String::from("standard streams cannot be read back"),
            )),
            WriteBuffer::Vec(vec) => Ok(String::from_utf8(vec)?),
            WriteBuffer::File(mut file) => {
                let mut data = String::new();
                file.seek(SeekFrom::Start(0))?;
                file.read_to_string(&mut data)?;
                Ok(data)
            }
        }
    }
}

impl Write for WriteBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            WriteBuffer::Stdout(stdout) => stdout.write(buf),
            WriteBuffer::Stderr(stderr) => stderr.write(buf),
            WriteBuffer::Vec(vec) => vec.write(buf),
            WriteBuffer::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            WriteBuffer::Stdout(stdout) => stdout.flush(),
            WriteBuffer::Stderr(stderr) => stderr.flush(),
            WriteBuffer::Vec(vec) => vec.flush(),
            WriteBuffer::File(file) => file.flush(),
        }
    }
}
