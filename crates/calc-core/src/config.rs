/// Settings for the interactive loop.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">> ".to_string(),
            banner: true,
        }
    }
}

impl ReplConfig {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }
}
