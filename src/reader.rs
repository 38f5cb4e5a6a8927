use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::parser::{self, Line};
use crate::record::VariantRecord;

/// Iterator over the variant records of a VCF-like text source.
///
/// Blank lines, `#` lines and lines with fewer than eight columns are skipped.
/// A read failure or an unparseable position is yielded as an error.
pub struct VariantRecords<R: BufRead> {
    lines: Lines<R>,
    line_number: usize,
}

impl VariantRecords<BufReader<Box<dyn Read>>> {
    /// Opens `path`, decompressing gzip input transparently.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = match niffler::from_path(path) {
            Ok((reader, _format)) => reader,
            // too short to sniff, so it can't be compressed either
            Err(niffler::Error::FileTooShort) => {
                Box::new(File::open(path).map_err(|e| Error::Open {
                    path: path.to_owned(),
                    source: e.into(),
                })?) as Box<dyn Read>
            }
            Err(source) => {
                return Err(Error::Open {
                    path: path.to_owned(),
                    source,
                })
            }
        };
        Ok(Self::new(BufReader::new(reader)))
    }
}

impl<R: BufRead> VariantRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// 1-based number of the last line read.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for VariantRecords<R> {
    type Item = Result<VariantRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;
            match parser::line(&line) {
                Line::Data(data) => {
                    return Some(VariantRecord::from_data_line(&data, self.line_number))
                }
                Line::TooFewFields(n) => {
                    trace!("Skipping line {}: {} fields", self.line_number, n)
                }
                Line::Blank | Line::Comment => {}
            }
        }
    }
}

/// Reads every record of `source` in file order. The first error aborts the whole read.
pub fn parse_records<R: BufRead>(source: R) -> Result<Vec<VariantRecord>> {
    let records = VariantRecords::new(source).collect::<Result<Vec<_>>>()?;
    debug!("Read {} variant records", records.len());
    Ok(records)
}

/// [`parse_records`] on a (possibly gzip-compressed) file.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<VariantRecord>> {
    let records = VariantRecords::from_path(path)?.collect::<Result<Vec<_>>>()?;
    debug!("Read {} variant records", records.len());
    Ok(records)
}
