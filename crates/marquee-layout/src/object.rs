//! Object definitions read from layout documents.

/// A named property value, as written inside `<property>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// One `<object>` element and everything nested in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDefinition {
    /// Type name from the `class` attribute.
    pub class: String,
    /// Identifier from the `id` attribute. Always set on top-level objects.
    pub id: Option<String>,
    pub properties: Vec<Property>,
    pub children: Vec<ObjectDefinition>,
}

impl ObjectDefinition {
    pub(crate) fn new(class: String, id: Option<String>) -> Self {
        Self {
            class,
            id,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the last value given for `name`.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .rev()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Searches this object and its descendants, depth first, for `id`.
    pub fn find(&self, id: &str) -> Option<&ObjectDefinition> {
        let mut pending = vec![self];
        while let Some(object) = pending.pop() {
            if object.id.as_deref() == Some(id) {
                return Some(object);
            }
            pending.extend(object.children.iter().rev());
        }
        None
    }

    /// Visits this object and every descendant in document order.
    pub(crate) fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ObjectDefinition)) {
        let mut pending = vec![self];
        while let Some(object) = pending.pop() {
            visit(object);
            pending.extend(object.children.iter().rev());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(class: &str, id: Option<&str>) -> ObjectDefinition {
        ObjectDefinition::new(class.to_string(), id.map(str::to_string))
    }

    #[test]
    fn find_descends_into_children() {
        let mut inner = object("Label", Some("title"));
        inner.properties.push(Property {
            name: "text".to_string(),
            value: "Hello".to_string(),
        });
        let mut middle = object("Box", None);
        middle.children.push(inner);
        let mut root = object("Stage", Some("stage"));
        root.children.push(middle);

        let found = root.find("title").unwrap();
        assert_eq!(found.class, "Label");
        assert_eq!(found.property("text"), Some("Hello"));
        assert!(root.find("missing").is_none());
    }

    #[test]
    fn walk_is_document_order() {
        let mut root = object("Stage", Some("a"));
        let mut first = object("Box", Some("b"));
        first.children.push(object("Label", Some("c")));
        root.children.push(first);
        root.children.push(object("Label", Some("d")));

        let mut seen = Vec::new();
        root.walk(&mut |o| seen.push(o.id.clone().unwrap_or_default()));
        assert_eq!(seen, vec!["a", "b", "c", "d"]);
    }
}
