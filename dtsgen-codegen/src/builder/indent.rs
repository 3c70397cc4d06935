//! Indentation of generated text.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    /// A tab per level. Declaration files use this.
    #[default]
    Tab,
    /// A fixed number of spaces per level.
    Spaces(usize),
}

impl Indent {
    pub const DECLARATION: Self = Self::Tab;

    /// Append `level` indentation units to `buffer`.
    pub fn write_to(&self, buffer: &mut String, level: usize) {
        match self {
            Self::Tab => buffer.extend(std::iter::repeat_n('\t', level)),
            Self::Spaces(width) => buffer.extend(std::iter::repeat_n(' ', level * width)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_levels() {
        let mut buffer = String::new();
        Indent::Tab.write_to(&mut buffer, 2);
        assert_eq!(buffer, "\t\t");

        buffer.clear();
        Indent::Spaces(4).write_to(&mut buffer, 1);
        assert_eq!(buffer, "    ");

        buffer.clear();
        Indent::default().write_to(&mut buffer, 0);
        assert!(buffer.is_empty());
    }
}
