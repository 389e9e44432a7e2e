//! Code snippet classes.

use crate::core::classes::{join_classes, with_extra};
use serde::{Deserialize, Serialize};

/// Colour scheme of a code snippet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeVariant {
    /// Grey.
    #[default]
    Default,
    /// Blue.
    Primary,
    /// Green.
    Success,
    /// Yellow.
    Warning,
    /// Red.
    Error,
}

impl CodeVariant {
    /// Classes for the variant.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-gray-100 text-gray-900 border border-gray-200",
            Self::Primary => "bg-blue-50 text-blue-900 border border-blue-200",
            Self::Success => "bg-green-50 text-green-900 border border-green-200",
            Self::Warning => "bg-yellow-50 text-yellow-900 border border-yellow-200",
            Self::Error => "bg-red-50 text-red-900 border border-red-200",
        }
    }
}

/// Font size of a code snippet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeSize {
    /// Extra small text.
    Sm,
    /// Small text.
    #[default]
    Default,
    /// Base text.
    Lg,
}

impl CodeSize {
    /// Classes for the size.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sm => "text-xs",
            Self::Default => "text-sm",
            Self::Lg => "text-base",
        }
    }
}

/// Layout options of a code snippet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodeLayout {
    /// Render as a block inside `pre`.
    pub block: bool,
    /// Allow long lines to wrap.
    pub wrap: bool,
}

impl CodeLayout {
    const fn whitespace(self) -> &'static str {
        match (self.wrap, self.block) {
            (true, _) => "whitespace-pre-wrap",
            (false, true) => "whitespace-pre",
            (false, false) => "whitespace-nowrap",
        }
    }
}

/// Classes for the `code` element.
#[must_use]
pub fn code_class(
    variant: CodeVariant,
    size: CodeSize,
    layout: CodeLayout,
    extra: Option<&str>,
) -> String {
    let shape = if layout.block {
        "block w-full p-4 overflow-x-auto"
    } else {
        "inline-block px-1.5 py-0.5"
    };
    with_extra(
        &join_classes([
            "font-mono rounded transition-colors",
            variant.class(),
            size.class(),
            shape,
            layout.whitespace(),
        ]),
        extra,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_code_does_not_wrap() {
        let class = code_class(
            CodeVariant::Default,
            CodeSize::Default,
            CodeLayout::default(),
            None,
        );
        assert!(class.contains("inline-block px-1.5 py-0.5"));
        assert!(class.ends_with("whitespace-nowrap"));
    }

    #[test]
    fn block_code_preserves_whitespace_unless_wrapping() {
        let block = CodeLayout {
            block: true,
            wrap: false,
        };
        let preserved = code_class(CodeVariant::Error, CodeSize::Lg, block, None);
        assert!(preserved.ends_with("whitespace-pre"));

        let wrapped = CodeLayout {
            block: true,
            wrap: true,
        };
        let class = code_class(CodeVariant::Error, CodeSize::Lg, wrapped, None);
        assert!(class.contains("block w-full"));
        assert!(class.ends_with("whitespace-pre-wrap"));
        assert!(class.contains("text-base"));
    }
}
