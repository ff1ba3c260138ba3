//! Abstraction over the visual element whose classes are toggled.

/// Target of class and style mutations.
///
/// The host supplies an implementation backed by whatever owns the visual
/// element (a DOM node handle, a retained-mode widget, a test double).
///
/// Implementations must treat the class list as a set: adding a class that
/// is already present and removing a class that is absent are both no-ops,
/// never errors.
pub trait AnimatedElement {
    /// Add a class to the element's class set.
    fn add_class(&mut self, class: &str);

    /// Remove a class from the element's class set.
    fn remove_class(&mut self, class: &str);

    /// Set a custom style property (e.g. `--animation-duration`) on the
    /// element.
    fn set_style_property(&mut self, name: &str, value: &str);
}
