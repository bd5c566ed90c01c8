use clap::ValueEnum;

/// When to use colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Color {
    Never,
    Always,
    Auto,
}

impl Color {
    pub fn is_enabled(self) -> bool {
        match self {
            Color::Never => false,
            Color::Always => true,
            Color::Auto => supports_color::on(supports_color::Stream::Stdout).is_some(),
        }
    }
}

/// Install the error report handler, without colors unless `color` is enabled.
pub fn install_color_eyre(color: Color) -> color_eyre::Result<()> {
    if color.is_enabled() {
        color_eyre::install()
    } else {
        // An empty theme disables error coloring
        color_eyre::config::HookBuilder::new()
            .theme(color_eyre::config::Theme::new())
            .install()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_names() {
        assert_eq!(Color::from_str("never", false), Ok(Color::Never));
        assert_eq!(Color::from_str("always", false), Ok(Color::Always));
        assert_eq!(Color::from_str("auto", false), Ok(Color::Auto));
        assert!(Color::from_str("no", false).is_err());
    }

    #[test]
    fn explicit_choices_ignore_the_terminal() {
        assert!(!Color::Never.is_enabled());
        assert!(Color::Always.is_enabled());
    }
}
