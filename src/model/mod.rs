pub mod item;
pub mod link;
