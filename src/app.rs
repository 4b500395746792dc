//! Application: scene setup and the render loop.

use anyhow::{Context, Result};

use rastty::core::{
    Camera, DirectionalLight, GeometryPipeline, Object3D, Rasterizer, Scene, Screen, Transform,
    Vector3,
};
use rastty::input::poll_actions;
use rastty::obj;
use rastty::term::TerminalSession;
use rastty::types::{
    ControlAction, DEFAULT_FOV_DEG, DEFAULT_Z_FAR, DEFAULT_Z_NEAR, SCREEN_HEIGHT, SCREEN_WIDTH,
};

use crate::clock::FrameClock;

/// Object spin speed in degrees of yaw per second of wall time.
const SPIN_DEG_PER_SEC: f32 = 90.0;

const CAMERA_POSITION: Vector3 = Vector3::new(0.0, -2.0, -6.0);
const LIGHT_ROTATION_DEG: Vector3 = Vector3::new(0.0, 180.0, 0.0);
const LIGHT_INTENSITY: f32 = 1.0;

pub struct App {
    scene: Scene,
    pipeline: GeometryPipeline,
    raster: Rasterizer,
    screen: Screen,
    clock: FrameClock,
}

impl App {
    /// Load the mesh and assemble the scene.
    ///
    /// The camera sits above and behind the origin looking down +z; the
    /// light is yawed half a turn so it shines along -z, back toward the
    /// camera's side of the scene.
    pub fn new(mesh_path: &str) -> Result<Self> {
        let mesh = obj::load(mesh_path)
            .with_context(|| format!("failed to load mesh from {mesh_path}"))?;
        let object = Object3D::new(mesh, Transform::default());

        let mut camera = Camera::new(
            DEFAULT_FOV_DEG,
            DEFAULT_Z_NEAR,
            DEFAULT_Z_FAR,
            Transform::default(),
        )?;
        camera.transform_mut().set_position(CAMERA_POSITION);

        let mut light_transform = Transform::default();
        light_transform.set_rotation(LIGHT_ROTATION_DEG);
        let light = DirectionalLight::new(LIGHT_INTENSITY, light_transform)?;

        Ok(Self {
            scene: Scene::new(object, camera, light),
            pipeline: GeometryPipeline::new(),
            raster: Rasterizer::new(),
            screen: Screen::new(SCREEN_WIDTH, SCREEN_HEIGHT)?,
            clock: FrameClock::new(),
        })
    }

    /// Run the render loop until a shutdown action arrives.
    pub fn run(&mut self, term: &mut TerminalSession) -> Result<()> {
        loop {
            let dt = self.clock.tick();

            for action in poll_actions()? {
                match action {
                    ControlAction::Shutdown => return Ok(()),
                }
            }

            self.render_frame(dt, term)?;
        }
    }

    fn render_frame(&mut self, dt: f32, term: &mut TerminalSession) -> Result<()> {
        self.screen.clear();

        self.scene
            .object
            .transform_mut()
            .apply_rotation(Vector3::new(0.0, SPIN_DEG_PER_SEC * dt, 0.0));

        let mesh = self.pipeline.process(&mut self.scene, &self.screen)?;
        self.raster.rasterize(&mesh, &mut self.screen);

        term.draw(&self.screen)?;
        Ok(())
    }
}
