//! Output configuration types

/// Configuration for diagram formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Decorate the header, directories and files with emoji glyphs.
    pub use_emoji: bool,
    /// Color directory names when printing to a terminal.
    pub use_color: bool,
}

impl OutputConfig {
    pub fn root_marker(&self) -> &'static str {
        if self.use_emoji { "📂 " } else { "" }
    }

    pub fn dir_glyph(&self) -> &'static str {
        if self.use_emoji { "📁 " } else { "" }
    }

    pub fn file_glyph(&self) -> &'static str {
        if self.use_emoji { "📄 " } else { "" }
    }
}
