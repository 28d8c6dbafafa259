use eyre::{Result, WrapErr};
use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Lines of a census file in file order. `\n`, `\r\n` and a lone `\r` all end
/// a line; bytes that are not UTF-8 decode to U+FFFD.
///
/// Exhausted once; a read failure is yielded as an error and should end the run.
pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
}

impl LineSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .wrap_err_with(|| format!("Failed to open input {}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    fn fill(&mut self) -> Result<bool> {
        self.buf.clear();
        let nread = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .wrap_err("Failed to read input line")?;
        if nread == 0 {
            return Ok(false);
        }

        let mut chunk = self.buf.as_slice();
        if let Some(rest) = chunk.strip_suffix(b"\n") {
            chunk = rest;
        }
        if let Some(rest) = chunk.strip_suffix(b"\r") {
            chunk = rest;
        }
        self.pending.extend(
            chunk
                .split(|b| *b == b'\r')
                .map(|line| String::from_utf8_lossy(line).into_owned()),
        );

        Ok(true)
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            match self.fill() {
                Ok(true) => continue,
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
