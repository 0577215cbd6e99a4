use anyhow::{Context, Result};
use clap::Parser;
use cubeview_assets::{ShaderLibrary, TextureData};
use cubeview_common::ViewerConfig;
use cubeview_input::{InputState, Key};
use cubeview_render::ViewerState;
use cubeview_render_wgpu::WgpuRenderer;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Parser)]
#[command(name = "cubeview-desktop", about = "Interactive cube viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory with WGSL overrides
    #[arg(long)]
    shader_dir: Option<PathBuf>,

    /// Base texture (PNG or JPEG)
    #[arg(long)]
    texture: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(long)]
    title: Option<String>,
}

impl Cli {
    /// Load the config file, if any, and apply flag overrides on top.
    fn viewer_config(&self) -> Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ViewerConfig::default(),
        };
        if let Some(dir) = &self.shader_dir {
            config.shader_dir = Some(dir.clone());
        }
        if let Some(texture) = &self.texture {
            config.texture = Some(texture.clone());
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if let Some(title) = &self.title {
            config.window.title = title.clone();
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

/// Map a physical key to a viewer key. Both numpad and main-row `+`/`-` zoom.
fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyL => Key::L,
        KeyCode::Space => Key::Space,
        KeyCode::NumpadAdd | KeyCode::Equal => Key::Plus,
        KeyCode::NumpadSubtract | KeyCode::Minus => Key::Minus,
        KeyCode::Escape => Key::Escape,
        _ => return None,
    };
    Some(key)
}

/// Window, surface and device, created together on resume.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
}

impl Gpu {
    fn init(event_loop: &ActiveEventLoop, viewer: &ViewerConfig) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(viewer.window.title.clone())
            .with_inner_size(PhysicalSize::new(viewer.window.width, viewer.window.height));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("creating window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("creating surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no compatible GPU adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("cubeview_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("creating device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shaders = ShaderLibrary::load(viewer.shader_dir.as_deref());
        let texture = TextureData::load_or_fallback(viewer.texture.as_deref());
        let renderer = WgpuRenderer::new(
            &device,
            &queue,
            surface_format,
            config.width,
            config.height,
            &shaders,
            &texture,
        )?;

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
        })
    }

    fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.config.width = size.width.max(1);
        self.config.height = size.height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    fn set_cursor_grab(&self, grabbed: bool) {
        let result = if grabbed {
            self.window
                .set_cursor_grab(CursorGrabMode::Confined)
                .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Locked))
        } else {
            self.window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = result {
            tracing::warn!("cursor grab unavailable: {e}");
        }
        self.window.set_cursor_visible(!grabbed);
    }
}

struct ViewerApp {
    config: ViewerConfig,
    viewer: ViewerState,
    input: InputState,
    gpu: Option<Gpu>,
    cursor_grabbed: bool,
    last_frame: Instant,
    init_error: Option<anyhow::Error>,
}

impl ViewerApp {
    fn new(config: ViewerConfig) -> Self {
        Self {
            viewer: ViewerState::new(&config.controls),
            config,
            input: InputState::new(),
            gpu: None,
            cursor_grabbed: true,
            last_frame: Instant::now(),
            init_error: None,
        }
    }

    fn handle_key(&mut self, key: Key, pressed: bool) {
        if !pressed {
            self.input.key_released(key);
            return;
        }
        if key == Key::Escape && !self.input.is_held(Key::Escape) {
            self.cursor_grabbed = !self.cursor_grabbed;
            if let Some(gpu) = &self.gpu {
                gpu.set_cursor_grab(self.cursor_grabbed);
            }
        }
        self.input.key_pressed(key);
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(0.1);
        self.last_frame = now;

        let actions = self.input.frame_actions(dt, &self.config.controls);
        self.viewer.apply_all(&actions);

        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let plan = self.viewer.frame_plan(gpu.aspect());
        gpu.renderer.render(&gpu.device, &gpu.queue, &view, &plan);

        output.present();
        gpu.window.request_redraw();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }

        match Gpu::init(event_loop, &self.config) {
            Ok(gpu) => {
                gpu.set_cursor_grab(self.cursor_grabbed);
                self.last_frame = Instant::now();
                self.gpu = Some(gpu);
            }
            Err(e) => {
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                if let Some(key) = map_key(code) {
                    self.handle_key(key, key_state == ElementState::Pressed);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.cursor_grabbed {
                self.input.mouse_motion(
                    delta.0 as f32,
                    delta.1 as f32,
                    self.config.controls.mouse_sensitivity,
                );
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = cli.viewer_config()?;
    tracing::info!(
        width = config.window.width,
        height = config.window.height,
        "cubeview-desktop starting"
    );

    let event_loop = EventLoop::new().context("creating event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ViewerApp::new(config);
    event_loop.run_app(&mut app)?;

    match app.init_error.take() {
        Some(e) => Err(e.context("initialisation failed")),
        None => Ok(()),
    }
}
