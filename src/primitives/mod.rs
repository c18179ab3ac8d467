pub mod aabb;
pub mod camera;
pub mod color;
pub mod hit;
pub mod pixel_buffer;
pub mod ray;
pub mod scene;
pub mod tri_mesh;
pub mod triangle;
