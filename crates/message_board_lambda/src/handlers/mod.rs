pub mod reader;
pub mod router;
pub mod writer;
