pub mod aabb;
pub mod vector;

pub use aabb::Aabb3;
pub use glam::{dvec3, DMat3, DVec3};
pub use vector::{
    any_orthonormal, least_aligned_axis, orthogonal_component, scale_to_unit, stable_length,
    try_normalize,
};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
