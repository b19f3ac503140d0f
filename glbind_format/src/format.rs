pub mod info;
pub mod iter;
pub mod node;
