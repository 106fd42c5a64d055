pub mod git;
pub mod syncer;
