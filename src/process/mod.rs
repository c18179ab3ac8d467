pub mod bvh;
pub mod cube;
pub mod intersect;
pub mod output;
pub mod render;
