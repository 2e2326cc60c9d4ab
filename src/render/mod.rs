pub mod colors;
pub mod scene;
