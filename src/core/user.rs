use std::fmt;

use serde::{Serialize, Deserialize};
use serde_json::{Map, Value};

pub type Fields = Map<String, Value>;

/// A single entry of the `users` collection.
///
/// The record is kept as the JSON object it was read as: no field is
/// required or typed, and everything is written back exactly as received.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User {
    fields: Fields
}

impl User {
    pub fn new(id: &str, name: &str, email: &str) -> User {
        let mut fields = Fields::new();
        fields.insert("id".to_owned(), Value::from(id));
        fields.insert("name".to_owned(), Value::from(name));
        fields.insert("email".to_owned(), Value::from(email));
        User { fields }
    }

    pub fn id(&self) -> Option<&Value> {
        self.fields.get("id")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Assigns `value` to `key`, or removes the key when there is no value.
    /// An existing key keeps its position.
    pub fn set(&mut self, key: &str, value: Option<Value>) {
        match value {
            Some(value) => { self.fields.insert(key.to_owned(), value); },
            None => { self.fields.shift_remove(key); }
        }
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }
}

impl From<Fields> for User {
    fn from(fields: Fields) -> Self {
        User { fields }
    }
}

/// Strict equality on identifiers: scalars compare by value, two missing
/// ids are equal, arrays and objects never match anything.
pub fn ids_match(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(Value::Null), Some(Value::Null)) => true,
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a == b,
        (Some(Value::Number(a)), Some(Value::Number(b))) => a.as_f64() == b.as_f64(),
        (Some(Value::String(a)), Some(Value::String(b))) => a == b,
        _ => false
    }
}

fn show(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => "-".to_owned()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} <{}>", show(self.id()), show(self.get("name")), show(self.get("email")))
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User {}", show(self.id()))
    }
}

/// Payload of an update. `name` and `email` are applied as given,
/// `null` included; a missing one is removed from the record.
/// Anything else sent along is ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserUpdate {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub email: Option<Value>
}

impl From<Fields> for UserUpdate {
    fn from(mut fields: Fields) -> Self {
        UserUpdate {
            id: fields.remove("id"),
            name: fields.remove("name"),
            email: fields.remove("email")
        }
    }
}

impl UserUpdate {
    pub(crate) fn apply(&self, user: &mut User) {
        user.set("name", self.name.clone());
        user.set("email", self.email.clone());
    }
}


#[cfg(test)]
mod tests {
    use crate::core::{User, UserUpdate};
    use crate::core::user::ids_match;

    use rstest::{fixture, rstest};
    use serde_json::{json, Value};

    #[fixture]
    fn eve_json() -> Value {
        json!({
            "id": "5",
            "name": "Eve",
            "email": "e@x.com",
            "role": "admin",
            "tags": ["a", "b"]
        })
    }

    fn update(value: Value) -> UserUpdate {
        let fields = serde_json::from_value::<serde_json::Map<String, Value>>(value).unwrap();
        UserUpdate::from(fields)
    }

    #[rstest]
    fn keeps_every_field(eve_json: Value) {
        let user: User = serde_json::from_value(eve_json.clone()).unwrap();
        assert_eq!(user.id(), Some(&json!("5")));
        assert_eq!(user.fields().len(), 5);
        assert_eq!(serde_json::to_value(&user).unwrap(), eve_json);
    }

    #[rstest]
    fn keeps_field_order(eve_json: Value) {
        let user: User = serde_json::from_value(eve_json).unwrap();
        let text = serde_json::to_string(&user).unwrap();
        assert_eq!(text, r#"{"id":"5","name":"Eve","email":"e@x.com","role":"admin","tags":["a","b"]}"#);
    }

    #[rstest]
    #[case::no_id(json!({"name": "Nobody"}))]
    #[case::numeric_id(json!({"id": 1, "name": "a", "email": "b"}))]
    #[case::null_name(json!({"id": "1", "name": null, "email": "b"}))]
    #[case::odd_types(json!({"id": [1], "name": 42, "email": {"at": "x"}}))]
    fn any_object_round_trips(#[case] value: Value) {
        let user: User = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&user).unwrap(), value);
    }

    #[test]
    fn must_be_an_object() {
        assert!(serde_json::from_value::<User>(json!(42)).is_err());
        assert!(serde_json::from_value::<User>(json!(["id", "1"])).is_err());
    }

    #[rstest]
    #[case(Some(json!("1")), Some(json!("1")), true)]
    #[case(Some(json!("1")), Some(json!(1)), false)]
    #[case(Some(json!(1)), Some(json!(1.0)), true)]
    #[case(Some(json!(null)), Some(json!(null)), true)]
    #[case(Some(json!(null)), None, false)]
    #[case(None, None, true)]
    #[case(Some(json!([1])), Some(json!([1])), false)]
    #[case(Some(json!({})), Some(json!({})), false)]
    fn strict_id_equality(#[case] left: Option<Value>, #[case] right: Option<Value>, #[case] expected: bool) {
        assert_eq!(ids_match(left.as_ref(), right.as_ref()), expected);
    }

    #[test]
    fn update_ignores_other_fields() {
        let update = update(json!({
            "id": "1", "name": "NewName", "email": "new@x.com", "role": "root"
        }));

        let mut user = User::new("1", "Old", "old@x.com");
        user.set("age", Some(json!(30)));
        update.apply(&mut user);

        assert_eq!(serde_json::to_value(&user).unwrap(), json!({
            "id": "1", "name": "NewName", "email": "new@x.com", "age": 30
        }));
    }

    #[test]
    fn update_assigns_values_verbatim() {
        let update = update(json!({"id": "1", "name": null, "email": 42}));
        let mut user = User::new("1", "Old", "old@x.com");
        update.apply(&mut user);
        assert_eq!(serde_json::to_value(&user).unwrap(), json!({"id": "1", "name": null, "email": 42}));
    }

    #[test]
    fn update_removes_missing_values() {
        let update = update(json!({"id": "1", "email": "new@x.com"}));
        let mut user = User::new("1", "Old", "old@x.com");
        user.set("age", Some(json!(30)));
        update.apply(&mut user);

        let text = serde_json::to_string(&user).unwrap();
        assert_eq!(text, r#"{"id":"1","email":"new@x.com","age":30}"#);
    }

    #[test]
    fn can_print() {
        let user = User::new("1", "Bilbo", "bilbo@shire.me");
        assert_eq!(user.to_string(), "1: Bilbo <bilbo@shire.me>");
        assert_eq!(format!("{:?}", user), "User 1");

        let odd: User = serde_json::from_value(json!({"id": 7, "name": null})).unwrap();
        assert_eq!(odd.to_string(), "7: null <->");
    }
}
