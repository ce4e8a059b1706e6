// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{Cursor, Read, Stdin};

/// Input of a command when no results path was given.
pub struct Reader {
    inner: ReadBuffer,
}

impl Read for Reader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match &mut self.inner {
            ReadBuffer::Stdin(stdin) => stdin.read(buf),
            ReadBuffer::Cursor(cursor) => cursor.read(buf),
            ReadBuffer::File(file) => file.read(buf),
        }
    }
}

impl Reader {
    pub fn new(inner: ReadBuffer) -> Self {
        Self { inner }
    }
}

pub enum ReadBuffer {
    Stdin(Stdin),
    Cursor(Cursor<Vec<u8>>),
    File(File),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, SeekFrom, Write};

    #[test]
    fn file_reader_yields_file_content() -> std::io::Result<()> {
        let mut file = tempfile::tempfile()?;
        file.write_all(b"<test-run />")?;
        file.seek(SeekFrom::Start(0))?;
        let mut content = String::new();
        Reader::new(ReadBuffer::File(file)).read_to_string(&mut content)?;
        assert_eq!(content, "<test-run />");
        Ok(())
    }
}
