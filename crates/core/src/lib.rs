//! Render core module - pure, deterministic, and testable
//!
//! This crate contains the whole software rendering pipeline. It has
//! **zero dependencies** on terminal I/O, file loading, or timing, so the
//! same code runs identically in the app, in tests, and in benchmarks.
//!
//! # Module Structure
//!
//! - [`math`]: vectors, 4x4 matrices, homogeneous transforms, angle helpers
//! - [`transform`]: position/rotation/scale with eagerly derived matrices
//! - [`mesh`]: vertex/index buffers plus per-triangle shading data
//! - [`camera`], [`light`], [`object`]: the three scene entity kinds
//! - [`scene`]: exactly one object, one camera, one directional light
//! - [`screen`]: the glyph grid the rasterizer writes into
//! - [`pipeline`]: per-frame geometry processing (world -> view -> clip -> screen)
//! - [`raster`]: scan conversion with a persistent depth buffer
//! - [`error`]: the crate-wide error type
//!
//! # Coordinate Conventions
//!
//! - x grows to the right, y grows **downwards**, z grows away from the
//!   viewer (into the screen).
//! - Triangles are front-facing when their vertices wind clockwise on
//!   screen; backface culling and the rasterizer's edge tests both assume
//!   this.
//! - Rotations are Euler angles in degrees, composed through a half-angle
//!   quaternion.
//!
//! Two matrix-vector conventions coexist, as the matrices are built for
//! different multiplication orders: entity matrices multiply column
//! vectors ([`math::Matrix4x4::mul_vec`]), while the view and projection
//! matrices multiply row vectors ([`math::Vector3::mul_mat`]). Both apply
//! the homogeneous divide and fail on a near-zero w.
//!
//! # Example
//!
//! ```
//! use rastty_core::camera::Camera;
//! use rastty_core::light::DirectionalLight;
//! use rastty_core::math::Vector3;
//! use rastty_core::mesh::{Mesh, Vertex};
//! use rastty_core::object::Object3D;
//! use rastty_core::pipeline::GeometryPipeline;
//! use rastty_core::raster::Rasterizer;
//! use rastty_core::scene::Scene;
//! use rastty_core::screen::Screen;
//! use rastty_core::transform::Transform;
//!
//! // One clockwise-wound triangle in front of the camera.
//! let normal = Vector3::new(0.0, 0.0, -1.0);
//! let mesh = Mesh::new(
//!     vec![
//!         Vertex::new(Vector3::new(0.0, 0.0, 5.0), normal),
//!         Vertex::new(Vector3::new(0.0, 1.0, 5.0), normal),
//!         Vertex::new(Vector3::new(1.0, 0.0, 5.0), normal),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//!
//! let mut scene = Scene::new(
//!     Object3D::new(mesh, Transform::default()),
//!     Camera::new(90.0, 0.1, 1000.0, Transform::default()).unwrap(),
//!     DirectionalLight::new(1.0, Transform::default()).unwrap(),
//! );
//!
//! let mut screen = Screen::new(80, 40).unwrap();
//! let mut pipeline = GeometryPipeline::new();
//! let mut raster = Rasterizer::new();
//!
//! screen.clear();
//! let processed = pipeline.process(&mut scene, &screen).unwrap();
//! raster.rasterize(&processed, &mut screen);
//! ```

pub mod camera;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod object;
pub mod pipeline;
pub mod raster;
pub mod scene;
pub mod screen;
pub mod transform;

pub use rastty_types as types;

// Re-export commonly used types for convenience
pub use camera::Camera;
pub use error::{Error, Result};
pub use light::DirectionalLight;
pub use math::{Matrix4x4, Vector2, Vector3};
pub use mesh::{Mesh, Vertex};
pub use object::Object3D;
pub use pipeline::GeometryPipeline;
pub use raster::{Rasterizer, GLYPH_RAMP};
pub use scene::Scene;
pub use screen::Screen;
pub use transform::Transform;
