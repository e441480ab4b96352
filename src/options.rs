use core::fmt;

/// Bytes of context dumped on each side of a match by default
pub const DEFAULT_CONTEXT: usize = 16;

///
/// Options of a search run
#[derive(Clone)]
pub struct Options {
    pub(crate) before: usize,
    pub(crate) after: usize,
    pub(crate) color: bool,
    pub(crate) hexlify: bool,
}
///
/// Options implementations
impl Options {
    ///
    /// Number of bytes dumped before each match
    pub fn set_before(&mut self, sz: usize) -> &mut Self {
        self.before = sz;
        self
    }
    ///
    /// Number of bytes dumped after each match
    pub fn set_after(&mut self, sz: usize) -> &mut Self {
        self.after = sz;
        self
    }
    ///
    /// Highlight the matched bytes with ANSI colors
    pub fn set_color(&mut self, color: bool) -> &mut Self {
        self.color = color;
        self
    }
    ///
    /// Decode the pattern argument from hex (true), or take it literally (false)
    pub fn set_hexlify(&mut self, hexlify: bool) -> &mut Self {
        self.hexlify = hexlify;
        self
    }
    pub fn before(&self) -> usize {
        self.before
    }
    pub fn after(&self) -> usize {
        self.after
    }
    pub fn color(&self) -> bool {
        self.color
    }
    pub fn hexlify(&self) -> bool {
        self.hexlify
    }
}
///
/// Options by defaults
impl Default for Options {
    fn default() -> Self {
        Self {
            before: DEFAULT_CONTEXT,
            after: DEFAULT_CONTEXT,
            color: false,
            hexlify: true,
        }
    }
}
///
/// Debug
impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "before={}, after={}, color={}, hexlify={}",
            self.before, self.after, self.color, self.hexlify
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = Options::default()
            .set_before(4)
            .set_after(8)
            .set_color(true)
            .clone();
        assert_eq!(options.before(), 4);
        assert_eq!(options.after(), 8);
        assert!(options.color());
        assert!(options.hexlify(), "Unchanged default");
        assert_eq!(
            format!("{options:?}"),
            "before=4, after=8, color=true, hexlify=true"
        );
    }
}
