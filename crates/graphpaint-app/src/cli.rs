use std::path::PathBuf;

use clap::Parser;

use crate::frame::AppConfig;

#[derive(Debug, Parser)]
#[command(
    name = "graphpaint",
    version,
    about = "Paint one editor frame and dump its draw calls as JSON lines"
)]
pub struct Cli {
    /// Settings JSON file; defaults are used when it does not exist
    pub settings_path: Option<PathBuf>,

    #[arg(long, help = "Centered alert message to paint")]
    pub alert: Option<String>,

    #[arg(long, default_value_t = 1280.0, help = "Viewport width in pixels")]
    pub width: f64,

    #[arg(long, default_value_t = 800.0, help = "Viewport height in pixels")]
    pub height: f64,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            settings_path: cli.settings_path,
            view_width: cli.width,
            view_height: cli.height,
            alert: cli.alert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_path_and_alert() {
        let args = ["graphpaint", "settings.json", "--alert", "Unsaved changes"];
        let cli = Cli::try_parse_from(args).unwrap();
        let config = AppConfig::from(cli);
        assert_eq!(config.settings_path, Some(PathBuf::from("settings.json")));
        assert_eq!(config.alert.as_deref(), Some("Unsaved changes"));
        assert_eq!(config.view_width, 1280.0);
        assert_eq!(config.view_height, 800.0);
    }

    #[test]
    fn test_defaults_without_args() {
        let config = AppConfig::from(Cli::try_parse_from(["graphpaint"]).unwrap());
        assert_eq!(config.settings_path, None);
        assert_eq!(config.alert, None);
    }

    #[test]
    fn test_view_size_flags() {
        let cli = Cli::try_parse_from(["graphpaint", "--width", "640", "--height", "480"]).unwrap();
        assert_eq!(cli.width, 640.0);
        assert_eq!(cli.height, 480.0);
    }

    #[test]
    fn test_alert_requires_value() {
        assert!(Cli::try_parse_from(["graphpaint", "--alert"]).is_err());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["graphpaint", "--alrt", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_is_not_a_path() {
        let err = Cli::try_parse_from(["graphpaint", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
