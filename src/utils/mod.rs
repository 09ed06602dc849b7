pub mod editor;
pub mod fs;
pub mod link;
pub mod logs;
pub mod path;
