use super::DEFAULT_LANG;

/// Page rendering options.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderOptions {
    lang: String,
    title: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_LANG)
    }
}

impl RenderOptions {
    /// Creates a new `RenderOptions` instance.
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            title: None,
        }
    }

    /// Returns a document language.
    #[allow(clippy::missing_const_for_fn)]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Returns a document title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Sets a document language.
    pub fn set_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Sets a document title.
    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default() {
        let options = RenderOptions::default();

        assert_eq!(options.lang(), "en");
        assert_eq!(options.title(), None);
    }

    #[test]
    fn set_fields() {
        let options = RenderOptions::default().set_lang("fr").set_title("Bonjour");

        assert_eq!(options.lang(), "fr");
        assert_eq!(options.title(), Some("Bonjour"));
    }
}
