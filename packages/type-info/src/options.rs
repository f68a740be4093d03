use crate::generic_context::GenericContext;

pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Per-call options threaded through the type analyzer
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Fold `isOptional` into the result
    pub is_optional: bool,

    /// Fold `isArray` into the result
    pub is_array: bool,

    /// Recursion limit; reaching it yields a fallback property
    pub max_depth: usize,

    pub current_depth: usize,

    /// Type parameter bindings visible at this point
    pub generic_context: GenericContext,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            is_optional: false,
            is_array: false,
            max_depth: DEFAULT_MAX_DEPTH,
            current_depth: 0,
            generic_context: GenericContext::new(),
        }
    }
}

impl AnalyzeOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Options for a child position: one level deeper, modifiers cleared
    pub fn nested(&self) -> Self {
        Self {
            is_optional: false,
            is_array: false,
            max_depth: self.max_depth,
            current_depth: self.current_depth + 1,
            generic_context: self.generic_context.clone(),
        }
    }

    pub fn with_optional(mut self, is_optional: bool) -> Self {
        self.is_optional = is_optional;
        self
    }

    pub fn with_array(mut self, is_array: bool) -> Self {
        self.is_array = is_array;
        self
    }

    pub fn with_generic_context(mut self, generic_context: GenericContext) -> Self {
        self.generic_context = generic_context;
        self
    }

    pub fn depth_exceeded(&self) -> bool {
        self.current_depth >= self.max_depth
    }
}

/// Configuration for `InterfaceExtractor`
#[derive(Debug, Clone)]
pub struct ExtractorOptions {
    pub max_depth: usize,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ExtractorOptions {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub(crate) fn analyze_options(&self) -> AnalyzeOptions {
        AnalyzeOptions::default().with_max_depth(self.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_clears_modifiers_and_increments_depth() {
        let options = AnalyzeOptions::default().with_optional(true).with_array(true);
        let nested = options.nested();

        assert!(!nested.is_optional);
        assert!(!nested.is_array);
        assert_eq!(nested.current_depth, 1);
        assert_eq!(nested.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_depth_exceeded() {
        let mut options = AnalyzeOptions::default().with_max_depth(2);
        assert!(!options.depth_exceeded());
        options = options.nested().nested();
        assert!(options.depth_exceeded());
    }
}
