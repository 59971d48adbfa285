//! Frenet frames along discretely sampled 3D curves.

pub mod frame;
pub mod polyline;
pub mod solver;

pub use frame::{Frame, FrenetFrames, NormalSource, FRAME_EPSILON};
pub use polyline::Polyline;
pub use solver::{solve_frenet_frame, FrenetFrameSolver};
