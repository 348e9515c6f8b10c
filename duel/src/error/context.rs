use std::{
    fmt,
    panic::Location,
};

/// A message layered on top of another error, tagged with the engine code that added it.
pub struct ContextError {
    message: String,
    file: &'static str,
    line: u32,
}

impl ContextError {
    #[track_caller]
    pub fn new<M>(message: M) -> Self
    where
        M: fmt::Display,
    {
        let caller = Location::caller();
        Self {
            message: message.to_string(),
            file: caller.file(),
            line: caller.line(),
        }
    }

    /// Where the context was attached, as `file:line`.
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextError")
            .field("message", &self.message)
            .field("at", &format_args!("{}:{}", self.file, self.line))
            .finish()
    }
}
