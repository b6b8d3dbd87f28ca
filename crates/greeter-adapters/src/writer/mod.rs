//! Line writer adapters.

mod memory;
mod stdout;

pub use memory::MemoryWriter;
pub use stdout::StdoutWriter;
