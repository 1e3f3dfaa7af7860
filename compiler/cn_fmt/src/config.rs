//! Formatting configuration.

/// Default maximum line width before a child list breaks.
pub const MAX_LINE_WIDTH: usize = 100;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// How declaration trees are laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Everything on one line (default).
    #[default]
    Compact,

    /// A declaration whose single-line form exceeds the maximum width puts
    /// each child on its own indented line.
    Pretty,
}

/// Configuration for the serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Fixed number of decimals for floats and vector components.
    /// `None` writes the shortest text that parses back to the same float.
    pub float_precision: Option<usize>,

    /// Write `#RRGGBBAA` for colors that are not fully opaque.
    pub emit_alpha: bool,

    pub layout: Layout,

    /// Width limit used by [`Layout::Pretty`].
    pub max_width: usize,

    /// Indentation size in spaces, used by [`Layout::Pretty`].
    pub indent_size: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            float_precision: None,
            emit_alpha: false,
            layout: Layout::Compact,
            max_width: MAX_LINE_WIDTH,
            indent_size: INDENT_WIDTH,
        }
    }
}

impl FormatConfig {
    /// Create a new config with fixed float precision.
    pub fn with_float_precision(precision: usize) -> Self {
        Self {
            float_precision: Some(precision),
            ..Default::default()
        }
    }

    /// Create a new config that keeps color alpha.
    pub fn with_alpha() -> Self {
        Self {
            emit_alpha: true,
            ..Default::default()
        }
    }

    /// Create a new config with the pretty layout.
    pub fn pretty() -> Self {
        Self {
            layout: Layout::Pretty,
            ..Default::default()
        }
    }
}
