use super::size::RomImage;

/// Bytes per group: two 16-bit words.
pub const GROUP: usize = 4;

/// How the corrected stream is laid out on disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TranscodeMode {
    /// One file, every 16-bit word byte-swapped in place.
    #[default]
    Merge,
    /// Two files: even words to the high plane, odd words to the low plane.
    Split,
}

/// Output of one transcode run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transcoded {
    Merged(Vec<u8>),
    Split { low: Vec<u8>, high: Vec<u8> },
}

impl Transcoded {
    /// Total bytes across all streams.
    pub fn len(&self) -> usize {
        match self {
            Transcoded::Merged(v) => v.len(),
            Transcoded::Split { low, high } => low.len() + high.len(),
        }
    }
}

/// Re-orders ROM bytes for an EPROM burner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transcoder {
    pub mode: TranscodeMode,
    /// Repeat the whole corrected stream once more, for a socket twice as wide
    /// as the ROM.
    pub widen: bool,
}

impl Transcoder {
    pub fn new(mode: TranscodeMode, widen: bool) -> Self {
        Self { mode, widen }
    }

    pub fn transcode(&self, rom: &RomImage) -> Transcoded {
        transcode_bytes(rom, self.mode, self.widen)
    }
}

/// Transcode a raw buffer.
///
/// Each group `b0 b1 b2 b3` becomes `b1 b0 b3 b2` (Merge), or `b1 b0` on the
/// high plane and `b3 b2` on the low plane (Split).
///
/// # Panics
/// If `data.len()` is not a multiple of 4. Sizes are validated before a
/// buffer gets here; [`RomImage`] guarantees it.
pub fn transcode_bytes(data: &[u8], mode: TranscodeMode, widen: bool) -> Transcoded {
    assert!(
        data.len() % GROUP == 0,
        "transcode input length {} is not a multiple of {}",
        data.len(),
        GROUP
    );

    let passes = if widen { 2 } else { 1 };

    match mode {
        TranscodeMode::Merge => {
            let mut out = Vec::with_capacity(data.len() * passes);
            swap_words(data, &mut out);
            repeat_if(&mut out, widen);
            Transcoded::Merged(out)
        }
        TranscodeMode::Split => {
            let half = data.len() / 2;
            let mut high = Vec::with_capacity(half * passes);
            let mut low = Vec::with_capacity(half * passes);
            split_planes(data, &mut high, &mut low);
            repeat_if(&mut high, widen);
            repeat_if(&mut low, widen);
            Transcoded::Split { low, high }
        }
    }
}

#[inline]
fn swap_words(data: &[u8], out: &mut Vec<u8>) {
    for g in data.chunks_exact(GROUP) {
        out.extend_from_slice(&[g[1], g[0], g[3], g[2]]);
    }
}

#[inline]
fn split_planes(data: &[u8], high: &mut Vec<u8>, low: &mut Vec<u8>) {
    for g in data.chunks_exact(GROUP) {
        high.extend_from_slice(&[g[1], g[0]]);
        low.extend_from_slice(&[g[3], g[2]]);
    }
}

/// Widen: append a verbatim copy of the stream built so far.
#[inline]
fn repeat_if(stream: &mut Vec<u8>, widen: bool) {
    if widen {
        stream.extend_from_within(..);
    }
}
