use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use scrollspace::background::BackgroundLoader;
use scrollspace::camera::Camera;
use scrollspace::cli::Cli;
use scrollspace::controller::{self, Viewport};
use scrollspace::frame::FrameDriver;
use scrollspace::renderer::Renderer;
use scrollspace::scene::{build_scene, Scene, SceneOptions};
use scrollspace::scroll::ScrollTracker;
use scrollspace::starfield::{self, SplitMix64};

const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: Scene,
    camera: Camera,
    scroll: ScrollTracker,
    driver: FrameDriver,
    viewport: Viewport,
    loader: Option<BackgroundLoader>,
    last_frame_time: Instant,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli) -> Self {
        let seed = cli.seed.unwrap_or_else(starfield::entropy_seed);
        log::info!("star seed: {seed}");

        let options = SceneOptions {
            star_count: cli.stars,
            grid: !cli.no_grid,
            aspect: cli.width as f32 / cli.height as f32,
        };
        let (scene, camera) = build_scene(&options, &mut SplitMix64::new(seed));

        Self {
            cli,
            window: None,
            renderer: None,
            scene,
            camera,
            scroll: ScrollTracker::new(),
            driver: FrameDriver::new(),
            viewport: Viewport::default(),
            loader: None,
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            if !self.cli.no_ui {
                log::debug!("FPS: {:.1}", self.fps);
            }
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn redraw(&mut self) {
        // Attach the background the frame after its load resolves
        if let Some(mut loader) = self.loader.take() {
            match loader.poll() {
                Some(image) => {
                    if let Some(renderer) = &mut self.renderer {
                        renderer.set_background(&image);
                    }
                    self.scene.background = Some(image);
                }
                None => self.loader = Some(loader),
            }
        }

        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.update_fps(delta);

        self.driver.tick(&mut self.scene);

        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            match renderer.render(&self.scene, &self.camera, window, self.fps) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let size = renderer.size();
                    renderer.set_size(size.width, size.height);
                }
                Err(e) => log::error!("render error: {e}"),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("scrollspace")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.cli.width,
                        self.cli.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(Renderer::new(
                window.clone(),
                &self.scene,
                !self.cli.no_ui,
            )) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {e:#}");
                    event_loop.exit();
                    return;
                }
            };

            // Eager initial sizing, same path as a resize event
            let size = window.inner_size();
            controller::apply_resize(&mut self.camera, &mut self.viewport, size.width, size.height);

            self.loader = Some(BackgroundLoader::spawn(self.cli.background.clone()));
            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.driver.stop();
                event_loop.exit();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll.process(delta);
                controller::apply_scroll(self.scroll.offset(), &mut self.camera, &mut self.scene);
            }
            WindowEvent::Resized(size) => {
                controller::apply_resize(
                    &mut self.camera,
                    &mut self.viewport,
                    size.width,
                    size.height,
                );
                if let Some(renderer) = &mut self.renderer {
                    renderer.set_size(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    log::info!("scrollspace - scroll to fly, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
