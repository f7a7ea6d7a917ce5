use clap::{Parser, Subcommand};

/// Clip-space drawing exercises
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub lesson: Lesson,

    /// Initial window width in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 800.0, global = true)]
    pub width: f64,

    /// Initial window height in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 600.0, global = true)]
    pub height: f64,

    /// Increase logging verbosity (default: info, -v: debug, -vv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Log filter in env_logger syntax, overrides RUST_LOG (e.g. "clipdraw_engine=trace")
    #[arg(long = "log", value_name = "FILTER", global = true)]
    pub log: Option<String>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lesson {
    /// Clear the window to a solid orange
    Clear,
    /// Click to place points; red on the left half, blue on the right
    Points,
    /// A single triangle with per-vertex colors
    Triangle,
    /// An axis-aligned rectangle
    Rectangle,
    /// A regular polygon
    Polygon {
        /// Number of sides
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(3..=128))]
        sides: u32,
    },
    /// A rectangle driven by live scale, rotation and translation (W/S, A/D, arrows, Space, R)
    Transform,
}

impl Lesson {
    pub fn title(self) -> String {
        match self {
            Lesson::Clear => "clipdraw: clear".to_string(),
            Lesson::Points => "clipdraw: points".to_string(),
            Lesson::Triangle => "clipdraw: triangle".to_string(),
            Lesson::Rectangle => "clipdraw: rectangle".to_string(),
            Lesson::Polygon { sides } => format!("clipdraw: polygon ({sides} sides)"),
            Lesson::Transform => "clipdraw: transform".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lesson_with_defaults() {
        let args = Args::try_parse_from(["clipdraw", "points"]).unwrap();
        assert_eq!(args.lesson, Lesson::Points);
        assert_eq!((args.width, args.height), (800.0, 600.0));
        assert_eq!(args.verbosity, 0);
        assert!(args.log.is_none());
    }

    #[test]
    fn global_options_after_subcommand() {
        let args =
            Args::try_parse_from(["clipdraw", "transform", "--width", "640", "-vv", "--log", "debug"])
                .unwrap();
        assert_eq!(args.lesson, Lesson::Transform);
        assert_eq!(args.width, 640.0);
        assert_eq!(args.verbosity, 2);
        assert_eq!(args.log.as_deref(), Some("debug"));
    }

    #[test]
    fn polygon_sides() {
        let args = Args::try_parse_from(["clipdraw", "polygon", "--sides", "5"]).unwrap();
        assert_eq!(args.lesson, Lesson::Polygon { sides: 5 });

        let args = Args::try_parse_from(["clipdraw", "polygon"]).unwrap();
        assert_eq!(args.lesson, Lesson::Polygon { sides: 6 });

        assert!(Args::try_parse_from(["clipdraw", "polygon", "--sides", "2"]).is_err());
    }

    #[test]
    fn lesson_is_required() {
        assert!(Args::try_parse_from(["clipdraw"]).is_err());
    }
}
