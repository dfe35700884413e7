mod class_list;
pub use class_list::*;
