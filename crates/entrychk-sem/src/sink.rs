//! Error accumulation with ignore-aware emission.

use entrychk_types::ValidationError;

use crate::ignore::IgnoreSet;

/// Collects validation errors, consulting an ignore set before each
/// emission. Reserved internal codes bypass the ignore set entirely.
#[derive(Debug)]
pub struct ErrorSink<'a> {
    errors: Vec<ValidationError>,
    ignores: Option<&'a IgnoreSet>,
}

impl<'a> ErrorSink<'a> {
    pub fn new(ignores: Option<&'a IgnoreSet>) -> Self {
        Self {
            errors: Vec::new(),
            ignores,
        }
    }

    /// Emit an error unless its code is suppressed.
    pub fn push(&mut self, err: ValidationError) {
        if let Some(ignores) = self.ignores {
            if ignores.suppresses(err.code) {
                return;
            }
        }
        self.errors.push(err);
    }

    /// Emit with the fields spelled out; the common path for predicates.
    pub fn report(
        &mut self,
        code: i32,
        node: usize,
        depth: u32,
        function_name: &'static str,
        message: impl Into<String>,
    ) {
        self.push(ValidationError {
            code,
            node,
            depth,
            function_name,
            message: message.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entrychk_types::codes;

    fn err(code: i32) -> ValidationError {
        ValidationError {
            code,
            node: 0,
            depth: 0,
            function_name: "test",
            message: String::new(),
        }
    }

    #[test]
    fn push_without_ignores_keeps_everything() {
        let mut sink = ErrorSink::new(None);
        sink.push(err(codes::UNKNOWN_MEMBER));
        sink.push(err(codes::INTERNAL_BAD_NODE));
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn ignored_user_codes_are_dropped_reserved_kept() {
        let mut set = IgnoreSet::new();
        set.ignore(codes::UNKNOWN_MEMBER);
        set.ignore(codes::INTERNAL_BAD_NODE);
        let mut sink = ErrorSink::new(Some(&set));
        sink.push(err(codes::UNKNOWN_MEMBER));
        sink.push(err(codes::INTERNAL_BAD_NODE));
        let errors = sink.into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, codes::INTERNAL_BAD_NODE);
    }
}
