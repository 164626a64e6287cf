//! Per-file unit tests mirroring the `src` layout

mod io;
