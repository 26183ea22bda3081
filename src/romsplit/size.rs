use std::fmt;
use std::ops::Deref;

use thiserror::Error;

pub const KIB: usize = 1024;

/// Which ROM sizes a run accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeSet {
    /// 512 KiB only (Kickstart 3.x images).
    Legacy,
    /// 256 KiB, 512 KiB or 1024 KiB.
    #[default]
    Standard,
}

impl SizeSet {
    pub fn accepted(self) -> &'static [usize] {
        match self {
            SizeSet::Legacy => &[512 * KIB],
            SizeSet::Standard => &[256 * KIB, 512 * KIB, 1024 * KIB],
        }
    }

    pub fn contains(self, size: u64) -> bool {
        self.accepted().iter().any(|&n| n as u64 == size)
    }

    /// Check an observed length against the set.
    pub fn validate(self, size: u64) -> Result<(), SizeError> {
        if self.contains(size) {
            Ok(())
        } else {
            Err(SizeError { size, set: self })
        }
    }

    /// The largest size in the set; files bigger than this are never read.
    pub fn max(self) -> usize {
        self.accepted().iter().copied().max().unwrap_or(0)
    }
}

impl fmt::Display for SizeSet {
    /// "512KiB", "256KiB, 512KiB or 1024KiB"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes = self.accepted();
        for (i, n) in sizes.iter().enumerate() {
            if i > 0 {
                f.write_str(if i + 1 == sizes.len() { " or " } else { ", " })?;
            }
            write!(f, "{}KiB", n / KIB)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("rom not suitable for splitting (needs to be {set}, got {size} bytes)")]
pub struct SizeError {
    pub size: u64,
    pub set: SizeSet,
}

/// A loaded ROM dump whose length is one of the accepted sizes.
///
/// The only way to build one is through [`RomImage::new`], so every image
/// handed to the transcoder is a whole number of 4-byte groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RomImage {
    data: Vec<u8>,
}

impl RomImage {
    pub fn new(data: Vec<u8>, set: SizeSet) -> Result<Self, SizeError> {
        set.validate(data.len() as u64)?;
        Ok(Self { data })
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl Deref for RomImage {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}
