//! Fragments produced by declaration nodes.

/// A piece of generated text, independent of its final indentation.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line; a newline is appended.
    Line(String),
    Blank,
    /// `header`, the body one level deeper, then `close` if any.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A single-line `/** ... */` comment.
    JsDoc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn jsdoc(s: impl Into<String>) -> Self {
        Self::JsDoc(s.into())
    }
}

/// A node that renders to fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Alias(&'static str);

    impl Renderable for Alias {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::line(format!("export type {} = string;", self.0))]
        }
    }

    #[test]
    fn test_reference_renders_like_value() {
        let alias = Alias("sku");
        assert_eq!(
            (&alias).to_fragments(),
            vec![CodeFragment::Line("export type sku = string;".into())]
        );
    }
}
