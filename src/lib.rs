#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;
pub mod panels;
pub mod renderer;
pub mod resize;
pub mod surface;
pub mod texture_manager;

pub use app::PaintApp;
pub use config::AppConfig;
pub use controller::DrawingController;
pub use error::{CanvasError, CanvasResult, ConfigError};
pub use geometry::{Position, resolve};
pub use input::{InputEvent, InputState, InputStateMachine, Phase, Reaction};
pub use options::{BrushOptions, CanvasOptions};
pub use renderer::{ExportStream, RenderPipeline, SurfaceKind, Tool};
pub use surface::Surface;
