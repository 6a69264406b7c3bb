//! Page seam.

/// A buy-button placeholder found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Identifies the placeholder element to the page.
    pub id: String,
    /// `price` data attribute.
    pub price: Option<String>,
    /// `description` data attribute.
    pub description: Option<String>,
}

/// The page hosting wallet buttons.
///
/// Methods take `&self`; implementations own whatever interior state the
/// document needs.
pub trait Page: Send + Sync {
    /// Button element type accepted by [`Page::mount_button`].
    type Button;

    /// Every element tagged as a wallet-button placeholder.
    fn placeholders(&self) -> Vec<Placeholder>;

    /// Clear the placeholder's content and append `button`.
    fn mount_button(&self, placeholder_id: &str, button: Self::Button);

    /// Hide the placeholder.
    fn hide(&self, placeholder_id: &str);

    /// Navigate the browser to `url`.
    fn navigate(&self, url: &str);
}

impl<T: Page + ?Sized> Page for std::sync::Arc<T> {
    type Button = T::Button;

    fn placeholders(&self) -> Vec<Placeholder> {
        (**self).placeholders()
    }

    fn mount_button(&self, placeholder_id: &str, button: Self::Button) {
        (**self).mount_button(placeholder_id, button);
    }

    fn hide(&self, placeholder_id: &str) {
        (**self).hide(placeholder_id);
    }

    fn navigate(&self, url: &str) {
        (**self).navigate(url);
    }
}
