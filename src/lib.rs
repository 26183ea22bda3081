#![allow(clippy::len_without_is_empty, clippy::doc_lazy_continuation)]

/// Use mimalloc as the global allocator for all binaries.
/// The whole ROM and both output planes live on the heap at once.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod args;
pub mod common;
pub mod romsplit;
