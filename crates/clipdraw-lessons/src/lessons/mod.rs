//! The exercises, one `App` each.

mod clear;
mod points;
mod shapes;
mod transform;

use anyhow::Result;
use clipdraw_engine::core::FrameCtx;
use clipdraw_engine::device::GpuInit;
use clipdraw_engine::input::Key;
use clipdraw_engine::window::{Runtime, RuntimeConfig};

use crate::cli::{Args, Lesson};

pub use clear::ClearLesson;
pub use points::PointsLesson;
pub use shapes::ShapeLesson;
pub use transform::TransformLesson;

/// Opens the window for the selected lesson and runs it until it exits.
pub fn run(args: &Args) -> Result<()> {
    let config = RuntimeConfig::default()
        .with_title(args.lesson.title())
        .with_size(args.width, args.height);
    let gpu_init = GpuInit::default();

    log::info!("starting {:?} ({}x{})", args.lesson, config.width, config.height);

    match args.lesson {
        Lesson::Clear => Runtime::run(config, gpu_init, ClearLesson::default()),
        Lesson::Points => Runtime::run(config, gpu_init, PointsLesson::default()),
        Lesson::Triangle => Runtime::run(config, gpu_init, ShapeLesson::triangle()),
        Lesson::Rectangle => Runtime::run(config, gpu_init, ShapeLesson::rectangle()),
        Lesson::Polygon { sides } => Runtime::run(config, gpu_init, ShapeLesson::polygon(sides)),
        Lesson::Transform => Runtime::run(config, gpu_init, TransformLesson::default()),
    }
}

/// Escape closes every lesson.
fn exit_requested(ctx: &FrameCtx<'_, '_>) -> bool {
    ctx.input_frame.key_pressed(Key::Escape)
}
