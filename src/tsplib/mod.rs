//! TSPLIB input and tour output adapters.
//!
//! These are the I/O edges of the crate: [`parse`]/[`read`] turn a TSPLIB
//! `EUC_2D` problem into an [`Instance`](crate::models::Instance), and
//! [`write_tour`] emits the solved tour as space-separated point ids.

mod reader;
mod writer;

pub use reader::{parse, read, read_path};
pub use writer::{write_tour, write_tour_path};
