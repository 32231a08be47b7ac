//! Named style definitions and the style registry
//!
//! Styles are registered once when a document is constructed and referenced
//! by name afterwards. The registry contents drive word/styles.xml, so a
//! style that was never registered can never be referenced by a paragraph
//! or a run.

use crate::error::ConvertError;

/// Built-in style names registered by [`StyleRegistry::with_defaults`].
pub const STYLE_NORMAL: &str = "Normal";
pub const STYLE_TITLE: &str = "Title";
pub const STYLE_QUOTE: &str = "Quote";
pub const STYLE_CODE_BLOCK: &str = "CodeBlock";
pub const STYLE_HYPERLINK: &str = "Hyperlink";

/// Whether a style applies to whole paragraphs or to runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    Paragraph,
    Character,
}

impl StyleKind {
    /// The `w:type` value used in styles.xml.
    pub fn label(self) -> &'static str {
        match self {
            StyleKind::Paragraph => "paragraph",
            StyleKind::Character => "character",
        }
    }
}

/// Paragraph alignment carried by a paragraph-level style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justified,
}

impl Alignment {
    /// The `w:jc` value.
    pub fn wml_value(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justified => "both",
        }
    }
}

/// Formatting attributes attached to a style definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleAttributes {
    pub alignment: Option<Alignment>,
    /// Font size in half-points (`w:sz`).
    pub size_half_points: Option<u32>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// RRGGBB run color.
    pub color: Option<String>,
    /// Emit a fixed-width run font (Consolas) for this style.
    pub monospace: bool,
}

/// A registered style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDefinition {
    pub name: String,
    pub kind: StyleKind,
    pub attributes: StyleAttributes,
}

/// Opaque handle returned by registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleHandle(usize);

/// Registry of named document styles.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: Vec<StyleDefinition>,
}

impl StyleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        StyleRegistry { styles: Vec::new() }
    }

    /// Register a style.
    ///
    /// Registering a name that already exists with the same kind returns
    /// the existing handle; a collision with a different kind is an error.
    pub fn register(
        &mut self,
        name: &str,
        kind: StyleKind,
        attributes: StyleAttributes,
    ) -> Result<StyleHandle, ConvertError> {
        if let Some(index) = self.styles.iter().position(|s| s.name == name) {
            let existing = &self.styles[index];
            if existing.kind != kind {
                return Err(ConvertError::Style(format!(
                    "style '{name}' is already registered as a {} style",
                    existing.kind.label()
                )));
            }
            return Ok(StyleHandle(index));
        }

        self.styles.push(StyleDefinition {
            name: name.to_string(),
            kind,
            attributes,
        });
        Ok(StyleHandle(self.styles.len() - 1))
    }

    /// Get a style by name
    pub fn get(&self, name: &str) -> Option<&StyleDefinition> {
        self.styles.iter().find(|s| s.name == name)
    }

    /// Check if a style exists
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All registered styles, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.styles.iter()
    }

    /// Create a registry with the fixed built-in style set.
    pub fn with_defaults() -> Result<Self, ConvertError> {
        let mut registry = Self::new();

        registry.register(STYLE_NORMAL, StyleKind::Paragraph, StyleAttributes::default())?;
        registry.register(
            STYLE_TITLE,
            StyleKind::Paragraph,
            StyleAttributes {
                alignment: Some(Alignment::Center),
                size_half_points: Some(36),
                bold: true,
                ..Default::default()
            },
        )?;
        for (level, size) in [(2u8, 32u32), (3, 28), (4, 26), (5, 24), (6, 22)] {
            registry.register(
                &format!("Heading{level}"),
                StyleKind::Paragraph,
                StyleAttributes {
                    size_half_points: Some(size),
                    bold: true,
                    ..Default::default()
                },
            )?;
        }
        registry.register(
            STYLE_QUOTE,
            StyleKind::Paragraph,
            StyleAttributes {
                italic: true,
                ..Default::default()
            },
        )?;
        registry.register(
            STYLE_CODE_BLOCK,
            StyleKind::Paragraph,
            StyleAttributes {
                size_half_points: Some(20),
                monospace: true,
                ..Default::default()
            },
        )?;
        registry.register(
            STYLE_HYPERLINK,
            StyleKind::Character,
            StyleAttributes {
                underline: true,
                color: Some("0000FF".to_string()),
                ..Default::default()
            },
        )?;

        Ok(registry)
    }
}

/// Paragraph style name used for a heading of the given level.
///
/// Level 1 maps to the title style; levels above 6 clamp to Heading6.
pub fn heading_style_name(level: u8) -> String {
    let level = level.clamp(1, 6);
    if level == 1 {
        STYLE_TITLE.to_string()
    } else {
        format!("Heading{level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = StyleRegistry::new();
        assert_eq!(registry.iter().count(), 0);
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = StyleRegistry::new();
        registry
            .register("Body", StyleKind::Paragraph, StyleAttributes::default())
            .unwrap();

        assert!(registry.has("Body"));
        let style = registry.get("Body").unwrap();
        assert_eq!(style.kind, StyleKind::Paragraph);
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = StyleRegistry::new();
        assert!(registry.get("Missing").is_none());
        assert!(!registry.has("Missing"));
    }

    #[test]
    fn test_reregister_same_kind_returns_existing_handle() {
        let mut registry = StyleRegistry::new();
        let first = registry
            .register("Body", StyleKind::Paragraph, StyleAttributes::default())
            .unwrap();
        let second = registry
            .register("Body", StyleKind::Paragraph, StyleAttributes::default())
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(registry.iter().count(), 1);
    }

    #[test]
    fn test_kind_collision_is_an_error() {
        let mut registry = StyleRegistry::new();
        registry
            .register("Body", StyleKind::Paragraph, StyleAttributes::default())
            .unwrap();

        let result = registry.register("Body", StyleKind::Character, StyleAttributes::default());
        match result {
            Err(ConvertError::Style(msg)) => assert!(msg.contains("Body")),
            other => panic!("Expected style error, got {other:?}"),
        }
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = StyleRegistry::with_defaults().unwrap();

        assert!(registry.has(STYLE_NORMAL));
        assert!(registry.has(STYLE_TITLE));
        assert!(registry.has("Heading2"));
        assert!(registry.has("Heading6"));
        assert!(registry.has(STYLE_QUOTE));
        assert!(registry.has(STYLE_CODE_BLOCK));
        assert!(registry.has(STYLE_HYPERLINK));

        let title = registry.get(STYLE_TITLE).unwrap();
        assert_eq!(title.attributes.alignment, Some(Alignment::Center));
        assert!(title.attributes.bold);

        let link = registry.get(STYLE_HYPERLINK).unwrap();
        assert_eq!(link.kind, StyleKind::Character);
        assert!(link.attributes.underline);
        assert_eq!(link.attributes.color.as_deref(), Some("0000FF"));
    }

    #[test]
    fn test_heading_style_names() {
        assert_eq!(heading_style_name(1), "Title");
        assert_eq!(heading_style_name(2), "Heading2");
        assert_eq!(heading_style_name(6), "Heading6");
        // Out-of-range levels clamp instead of inventing unregistered names.
        assert_eq!(heading_style_name(0), "Title");
        assert_eq!(heading_style_name(9), "Heading6");
    }
}
