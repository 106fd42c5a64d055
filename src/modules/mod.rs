pub mod leetcode;
pub mod repo;
pub mod solutions;
