//! Generator tests.

pub mod writer;
