pub mod data_dir;
pub mod storage;
pub mod view_state;
