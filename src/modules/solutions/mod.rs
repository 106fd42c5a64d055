pub mod syncer;
pub mod writer;
