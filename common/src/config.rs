/// Options chosen by the driver for a single run.
#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    /// Quiet level. `1` hides headers, `2` also hides notification events.
    pub quiet: u8,
    /// Disables ANSI colors in terminal output.
    pub no_color: bool,
}

impl Config {
    pub fn show_headers(&self) -> bool {
        self.quiet == 0
    }

    pub fn show_events(&self) -> bool {
        self.quiet < 2
    }
}
