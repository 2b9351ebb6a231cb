use crate::objects::Dictionary;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    number: u32,
    generation: u16,
}

impl ObjectId {
    pub fn new(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn generation(&self) -> u16 {
        self.generation
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(String),
    Name(String),
    Array(Vec<Object>),
    Dictionary(Dictionary),
    Stream(Dictionary, Vec<u8>),
    Reference(ObjectId),
}

impl Object {
    /// Shorthand for `Object::Name`.
    pub fn name(name: impl Into<String>) -> Self {
        Object::Name(name.into())
    }

    /// A `[llx lly urx ury]` array.
    pub fn rect(llx: f64, lly: f64, urx: f64, ury: f64) -> Self {
        Object::Array(vec![
            Object::Real(llx),
            Object::Real(lly),
            Object::Real(urx),
            Object::Real(ury),
        ])
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Object::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Object::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Object::Name(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Object>> {
        match self {
            Object::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }
}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Object::Boolean(b)
    }
}

impl From<i32> for Object {
    fn from(i: i32) -> Self {
        Object::Integer(i as i64)
    }
}

impl From<i64> for Object {
    fn from(i: i64) -> Self {
        Object::Integer(i)
    }
}

impl From<f64> for Object {
    fn from(f: f64) -> Self {
        Object::Real(f)
    }
}

impl From<String> for Object {
    fn from(s: String) -> Self {
        Object::String(s)
    }
}

impl From<&str> for Object {
    fn from(s: &str) -> Self {
        Object::String(s.to_string())
    }
}

impl From<Vec<Object>> for Object {
    fn from(v: Vec<Object>) -> Self {
        Object::Array(v)
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Object::Dictionary(d)
    }
}

impl From<ObjectId> for Object {
    fn from(id: ObjectId) -> Self {
        Object::Reference(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_display() {
        assert_eq!(ObjectId::new(12, 0).to_string(), "12 0 R");
    }

    #[test]
    fn test_object_ids_order_by_number() {
        let mut ids = vec![ObjectId::new(3, 0), ObjectId::new(1, 0), ObjectId::new(2, 0)];
        ids.sort();
        assert_eq!(ids[0].number(), 1);
        assert_eq!(ids[2].number(), 3);
    }

    #[test]
    fn test_rect_helper() {
        let rect = Object::rect(1.0, 2.0, 3.0, 4.0);
        let values = rect.as_array().unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(values[3], Object::Real(4.0));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Object::from(true), Object::Boolean(true));
        assert_eq!(Object::from(7), Object::Integer(7));
        assert_eq!(Object::from("Helv").as_string(), Some("Helv"));
        assert_eq!(Object::name("Widget").as_name(), Some("Widget"));
        assert_eq!(
            Object::from(ObjectId::new(4, 0)),
            Object::Reference(ObjectId::new(4, 0))
        );
    }
}
