/// A single element: tag, class list, attributes and optional own text.
///
/// Tree structure (parent/children) lives in the owning document, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    /// Attributes in insertion order. `class` is never stored here.
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            classes: Vec::new(),
            attributes: Vec::new(),
            text: None,
        }
    }

    // Builders

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.set_attribute("id", id);
        self
    }

    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        for name in class.as_ref().split_whitespace() {
            self.add_class(name);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    // Identity

    pub fn id_attr(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    // Classes

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. No-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add the class if absent, remove it if present. Returns whether it is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    // Attributes

    /// Read an attribute. `class` is answered from the class list.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Owned variant of [`attribute`](Self::attribute) that also covers `class`.
    pub fn attribute_value(&self, name: &str) -> Option<String> {
        if name.eq_ignore_ascii_case("class") {
            return (!self.classes.is_empty()).then(|| self.classes.join(" "));
        }
        self.attribute(name).map(str::to_owned)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        if name.eq_ignore_ascii_case("class") {
            return !self.classes.is_empty();
        }
        self.attribute(name).is_some()
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into().to_ascii_lowercase();
        let value = value.into();

        if name == "class" {
            self.classes.clear();
            for class in value.split_whitespace() {
                self.add_class(class);
            }
            return;
        }

        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Returns the previous value, if any.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        if name.eq_ignore_ascii_case("class") {
            let previous = self.attribute_value("class");
            self.classes.clear();
            return previous;
        }
        let index = self
            .attributes
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name))?;
        Some(self.attributes.remove(index).1)
    }
}
