/// ANSI color codes for diagnostics on stderr
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub error: &'static str, // Bright red for the error prefix
    pub reset: &'static str, // Reset to default color
}

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if use_colors {
            Self {
                error: "\x1b[91m",
                reset: "\x1b[0m",
            }
        } else {
            Self {
                error: "",
                reset: "",
            }
        }
    }
}
