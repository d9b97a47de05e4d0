//! Declarative shapes for authored JSON.
//!
//! A shape is built once and walked against raw `serde_json::Value`s; see
//! `walk.rs` for the checker.

/// Expected JSON shape at one position of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Text,
    Bool,
    Number,
    List(Box<Shape>),
    Object(ObjectShape),
    Union(UnionShape),
}

impl Shape {
    pub fn list(item: impl Into<Shape>) -> Shape {
        Shape::List(Box::new(item.into()))
    }

    /// Short name used in "expected X, found Y" messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Text => "string",
            Shape::Bool => "boolean",
            Shape::Number => "number",
            Shape::List(_) => "array",
            Shape::Object(_) | Shape::Union(_) => "object",
        }
    }
}

impl From<ObjectShape> for Shape {
    fn from(shape: ObjectShape) -> Self {
        Shape::Object(shape)
    }
}

impl From<UnionShape> for Shape {
    fn from(shape: UnionShape) -> Self {
        Shape::Union(shape)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
    pub required: bool,
}

/// A record with declared fields.
///
/// Strict objects reject keys that are not declared; lenient objects drop
/// them from the canonical value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectShape {
    pub fields: Vec<Field>,
    pub strict: bool,
}

impl ObjectShape {
    pub fn strict() -> Self {
        Self {
            fields: Vec::new(),
            strict: true,
        }
    }

    pub fn lenient() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: &'static str, shape: impl Into<Shape>) -> Self {
        self.fields.push(Field {
            name,
            shape: shape.into(),
            required: true,
        });
        self
    }

    pub fn optional(mut self, name: &'static str, shape: impl Into<Shape>) -> Self {
        self.fields.push(Field {
            name,
            shape: shape.into(),
            required: false,
        });
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A record discriminated by a string tag, one object shape per tag value.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionShape {
    pub tag: &'static str,
    /// Secondary discriminator key, consulted only when `tag` is absent.
    pub alias: Option<&'static str>,
    pub variants: Vec<(&'static str, ObjectShape)>,
}

impl UnionShape {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            alias: None,
            variants: Vec::new(),
        }
    }

    pub fn alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    pub fn variant(mut self, name: &'static str, shape: ObjectShape) -> Self {
        self.variants.push((name, shape));
        self
    }

    pub fn variant_for(&self, name: &str) -> Option<&ObjectShape> {
        self.variants
            .iter()
            .find(|(variant, _)| *variant == name)
            .map(|(_, shape)| shape)
    }

    pub fn variant_names(&self) -> Vec<&'static str> {
        self.variants.iter().map(|(name, _)| *name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_builder_keeps_declaration_order() {
        let shape = ObjectShape::strict()
            .required("title", Shape::Text)
            .optional("lead", Shape::Text);

        assert!(shape.strict);
        assert_eq!(shape.fields[0].name, "title");
        assert!(shape.fields[0].required);
        assert_eq!(shape.fields[1].name, "lead");
        assert!(!shape.fields[1].required);
        assert!(shape.field("lead").is_some());
        assert!(shape.field("body").is_none());
    }

    #[test]
    fn test_union_variant_lookup() {
        let union = UnionShape::new("type")
            .alias("style")
            .variant("cta", ObjectShape::strict())
            .variant("prose", ObjectShape::lenient());

        assert_eq!(union.variant_names(), vec!["cta", "prose"]);
        assert!(union.variant_for("cta").is_some_and(|s| s.strict));
        assert!(union.variant_for("carousel").is_none());
        assert_eq!(union.alias, Some("style"));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Shape::Text.type_name(), "string");
        assert_eq!(Shape::list(Shape::Text).type_name(), "array");
        assert_eq!(Shape::from(ObjectShape::strict()).type_name(), "object");
    }
}
