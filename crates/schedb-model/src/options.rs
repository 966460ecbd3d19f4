/// Options controlling a catalog conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Explicit value for the `generated` attribute.
    ///
    /// When unset, the catalog's own export timestamp is used, falling back
    /// to the current time.
    pub generated: Option<String>,
}

impl ConvertOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_generated(mut self, generated: impl Into<String>) -> Self {
        self.generated = Some(generated.into());
        self
    }
}
