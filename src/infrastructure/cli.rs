use clap::Parser;

use crate::{presentation::layout::LayoutVariant, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 1.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 4.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "VARIANT",
        help = "Layout variant (compact or extended), overrides the config file"
    )]
    pub layout: Option<LayoutVariant>,

    #[arg(
        long,
        help = "Print a single plain-text frame to stdout and exit"
    )]
    pub snapshot: bool,

    #[arg(
        long,
        value_name = "COLUMNS",
        help = "Snapshot width",
        default_value_t = 120,
        requires = "snapshot"
    )]
    pub width: u16,

    #[arg(
        long,
        value_name = "ROWS",
        help = "Snapshot height",
        default_value_t = 36,
        requires = "snapshot"
    )]
    pub height: u16,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["statboard"]);
        assert_eq!(cli.tick_rate, 1.0);
        assert_eq!(cli.frame_rate, 4.0);
        assert_eq!(cli.layout, None);
        assert!(!cli.snapshot);
    }

    #[test]
    fn test_layout_and_snapshot() {
        let cli = Cli::parse_from([
            "statboard",
            "--layout",
            "extended",
            "--snapshot",
            "--width",
            "100",
            "--height",
            "30",
        ]);
        assert_eq!(cli.layout, Some(LayoutVariant::Extended));
        assert!(cli.snapshot);
        assert_eq!((cli.width, cli.height), (100, 30));
    }

    #[test]
    fn test_unknown_layout_is_rejected() {
        assert!(Cli::try_parse_from(["statboard", "--layout", "grid"]).is_err());
    }
}
