//! Semantic styles and symbols on top of `console`
//!
//! Every style is forced on or off at construction so output does not depend
//! on whatever `console` guesses about the attached stream.

use console::Style;

pub const CHECKMARK: &str = "✓";
pub const CROSS: &str = "✗";
pub const WARNING_SYMBOL: &str = "!";
pub const INFO_SYMBOL: &str = "·";
pub const ARROW: &str = "›";
pub const BULLET: &str = "•";

/// Style manager for user-facing output
#[derive(Debug, Clone)]
pub struct StyleManager {
    success: Style,
    error: Style,
    warning: Style,
    info: Style,
    emphasis: Style,
    subtle: Style,
}

impl StyleManager {
    pub fn new(color: bool) -> Self {
        let style = |base: Style| base.force_styling(color);

        Self {
            success: style(Style::new().green()),
            error: style(Style::new().red().bold()),
            warning: style(Style::new().yellow()),
            info: style(Style::new().cyan()),
            emphasis: style(Style::new().bold()),
            subtle: style(Style::new().dim()),
        }
    }

    pub fn style_success(&self, text: &str) -> String {
        self.success.apply_to(text).to_string()
    }

    pub fn style_error(&self, text: &str) -> String {
        self.error.apply_to(text).to_string()
    }

    pub fn style_warning(&self, text: &str) -> String {
        self.warning.apply_to(text).to_string()
    }

    pub fn style_info(&self, text: &str) -> String {
        self.info.apply_to(text).to_string()
    }

    /// Style text with emphasis (bold)
    pub fn style_emphasis(&self, text: &str) -> String {
        self.emphasis.apply_to(text).to_string()
    }

    /// Style text as subtle/muted
    pub fn style_subtle(&self, text: &str) -> String {
        self.subtle.apply_to(text).to_string()
    }

    /// `✓ message`
    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.style_success(CHECKMARK), message)
    }

    /// `✗ message`
    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.style_error(CROSS), message)
    }

    /// `! message`
    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.style_warning(WARNING_SYMBOL), message)
    }

    /// `· message`
    pub fn format_info(&self, message: &str) -> String {
        format!("{} {}", self.style_info(INFO_SYMBOL), message)
    }

    /// `› message`
    pub fn format_working(&self, message: &str) -> String {
        format!("{} {}", self.style_info(ARROW), message)
    }

    /// Horizontal rule of `width` characters with an optional caption
    pub fn format_rule(&self, caption: &str, width: usize) -> String {
        let line = if caption.is_empty() {
            "─".repeat(width)
        } else {
            let caption = format!(" {caption} ");
            let fill = width.saturating_sub(caption.chars().count() + 2);
            format!("──{caption}{}", "─".repeat(fill))
        };
        self.style_subtle(&line)
    }
}

impl Default for StyleManager {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_styles_are_untouched() {
        let styling = StyleManager::new(false);

        assert_eq!(styling.format_success("done"), "✓ done");
        assert_eq!(styling.format_error("failed"), "✗ failed");
        assert_eq!(styling.format_warning("careful"), "! careful");
        assert_eq!(styling.format_info("note"), "· note");
        assert_eq!(styling.style_emphasis("bold"), "bold");
    }

    #[test]
    fn test_colored_styles_emit_ansi() {
        let styling = StyleManager::new(true);

        let styled = styling.style_success("ok");
        assert!(styled.contains("\u{1b}["));
        assert_eq!(console::strip_ansi_codes(&styled), "ok");
    }

    #[test]
    fn test_rule_width() {
        let styling = StyleManager::new(false);

        assert_eq!(styling.format_rule("", 5), "─────");
        assert_eq!(styling.format_rule("uml", 12), "── uml ─────");
        // Caption wider than the rule still renders
        assert_eq!(styling.format_rule("caption", 3), "── caption ");
    }
}
