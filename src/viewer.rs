//! Standalone fly-through window backed by winit.
//!
//! ```no_run
//! # use vista::Viewer;
//! Viewer::builder()
//!     .with_title("Camera demo")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    camera::Camera,
    error::VistaError,
    gpu::{texture::DepthTarget, RenderContext},
    input::{InputEvent, InputProcessor, KeyAction},
    options::Options,
    renderer::{ClipPlanes, CubeRenderer},
    scene::{diffuse_image, LightingUniform},
    util::FrameTiming,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title (overrides `window.title` from options).
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.window.title = title;
        }
        Viewer { options }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing the cube scene through a free-fly camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// The options the window will open with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or the exit key is pressed.
    ///
    /// # Errors
    ///
    /// Returns [`VistaError::Viewer`] if the event loop cannot be created
    /// or exits abnormally, and [`VistaError::Gpu`] if GPU setup failed.
    pub fn run(self) -> Result<(), VistaError> {
        let event_loop =
            EventLoop::new().map_err(|e| VistaError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let camera = Camera::from_options(&self.options.camera);
        let lighting =
            LightingUniform::from_options(&self.options.lighting, &camera);
        let mut app = ViewerApp {
            window: None,
            gpu: None,
            input: InputProcessor::with_key_bindings(
                self.options.keybindings.clone(),
            ),
            timing: FrameTiming::new(self.options.window.target_fps),
            camera,
            lighting,
            cursor_grabbed: false,
            error: None,
            options: self.options,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| VistaError::Viewer(e.to_string()))?;

        app.error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// GPU resources created once the window exists.
struct GpuState {
    context: RenderContext,
    depth: DepthTarget,
    renderer: CubeRenderer,
}

impl GpuState {
    fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.depth.resize(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }
}

struct ViewerApp {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    input: InputProcessor,
    timing: FrameTiming,
    camera: Camera,
    lighting: LightingUniform,
    cursor_grabbed: bool,
    error: Option<VistaError>,
    options: Options,
}

impl ViewerApp {
    /// Hide the cursor and lock it to the window, falling back to confining
    /// it where locking is unsupported.
    fn grab_cursor(&mut self) {
        if !self.options.window.grab_cursor {
            return;
        }
        let Some(window) = &self.window else {
            return;
        };
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => {
                window.set_cursor_visible(false);
                self.cursor_grabbed = true;
            }
            Err(e) => {
                log::warn!("cursor grab unavailable, using window cursor: {e}");
                self.cursor_grabbed = false;
            }
        }
    }

    fn handle_input(&mut self, event_loop: &ActiveEventLoop, event: InputEvent) {
        match self.input.handle_event(event) {
            Some(KeyAction::Exit) => event_loop.exit(),
            Some(KeyAction::ResetCamera) => {
                self.camera.reset(&self.options.camera);
                self.input.release_all();
            }
            _ => {}
        }
    }

    fn redraw(&mut self) {
        if !self.timing.should_render() {
            return;
        }
        let dt = self.timing.tick();

        self.input
            .apply(&mut self.camera, dt, self.options.camera.constrain_pitch);
        self.lighting.follow_camera(&self.camera);

        let Some(gpu) = &mut self.gpu else {
            return;
        };
        let aspect = gpu.context.aspect_ratio();
        gpu.renderer
            .update(&gpu.context.queue, &self.camera, aspect, &self.lighting);

        match render(gpu, self.options.window.clear_color) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                let width = gpu.context.config.width;
                let height = gpu.context.config.height;
                log::debug!("surface lost, reconfiguring at {width}x{height}");
                gpu.resize(width, height);
            }
            Err(e) => log::error!("render error: {e:?}"),
        }
    }
}

fn render(
    gpu: &GpuState,
    clear_color: [f32; 3],
) -> Result<(), wgpu::SurfaceError> {
    let frame = gpu.context.get_next_frame()?;
    let view = frame
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = gpu.context.create_encoder();
    {
        let mut render_pass =
            encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: f64::from(clear_color[0]),
                            g: f64::from(clear_color[1]),
                            b: f64::from(clear_color[2]),
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: &gpu.depth.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                ..Default::default()
            });
        gpu.renderer.draw(&mut render_pass);
    }
    gpu.context.submit(encoder);
    frame.present();
    Ok(())
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_opts = &self.options.window;
        let attrs = Window::default_attributes()
            .with_title(&window_opts.title)
            .with_inner_size(LogicalSize::new(
                window_opts.width.max(1),
                window_opts.height.max(1),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.error = Some(VistaError::Viewer(e.to_string()));
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (inner.width, inner.height),
            window_opts.vsync,
        )) {
            Ok(c) => c,
            Err(e) => {
                log::error!("failed to initialize GPU: {e}");
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        let depth = DepthTarget::new(
            &context.device,
            context.config.width,
            context.config.height,
        );
        let diffuse =
            diffuse_image(self.options.scene.diffuse_texture.as_deref());
        let renderer = CubeRenderer::new(
            &context,
            ClipPlanes::from(&self.options.camera),
            &diffuse,
        );

        log::info!(
            "window ready: {}x{} ({:?})",
            context.config.width,
            context.config.height,
            context.config.present_mode
        );

        self.gpu = Some(GpuState {
            context,
            depth,
            renderer,
        });
        window.request_redraw();
        self.window = Some(window);
        self.grab_cursor();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size.width, size.height);
                }
            }

            WindowEvent::Focused(focused) => {
                if focused {
                    self.grab_cursor();
                } else {
                    self.handle_input(event_loop, InputEvent::FocusLost);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                // raw motion drives mouse-look while grabbed
                if !self.cursor_grabbed {
                    self.handle_input(
                        event_loop,
                        InputEvent::CursorMoved {
                            x: position.x as f32,
                            y: position.y as f32,
                        },
                    );
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.handle_input(event_loop, InputEvent::from_scroll(delta));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_event = InputEvent::Key {
                    key: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                };
                self.handle_input(event_loop, key_event);
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if !self.cursor_grabbed {
            return;
        }
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.handle_input(
                event_loop,
                InputEvent::MouseMotion {
                    dx: dx as f32,
                    dy: dy as f32,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_default_options() {
        let viewer = Viewer::builder().build();
        assert_eq!(viewer.options(), &Options::default());
    }

    #[test]
    fn title_overrides_options_title() {
        let mut options = Options::default();
        options.window.title = "From file".into();
        options.window.width = 1024;

        let viewer = Viewer::builder()
            .with_title("Camera demo")
            .with_options(options)
            .build();
        assert_eq!(viewer.options().window.title, "Camera demo");
        assert_eq!(viewer.options().window.width, 1024);
    }
}
