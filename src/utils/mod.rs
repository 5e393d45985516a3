pub mod dir_scan;
pub mod file_ops;
