use serde::{Serialize, Deserialize};
use serde_json::{Map, Value};

use crate::core::user::{ids_match, User, UserUpdate};

/// In-memory copy of the whole data file, alive for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,
    #[serde(flatten)]
    pub extra: Map<String, Value>
}

impl Dataset {
    pub fn new(users: Vec<User>) -> Dataset {
        Dataset { users, extra: Map::new() }
    }

    /// Position of the first user whose id strictly equals `id`, in insertion order.
    pub fn position(&self, id: Option<&Value>) -> Option<usize> {
        self.users.iter().position(|user| ids_match(user.id(), id))
    }

    pub fn find(&self, id: Option<&Value>) -> Option<&User> {
        self.users.iter().find(|user| ids_match(user.id(), id))
    }

    pub fn find_mut(&mut self, id: Option<&Value>) -> Option<&mut User> {
        self.users.iter_mut().find(|user| ids_match(user.id(), id))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.find(Some(&Value::from(id)))
    }

    pub fn position_by_id(&self, id: &str) -> Option<usize> {
        self.position(Some(&Value::from(id)))
    }

    /// Appends without looking for an existing user with the same id.
    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn update_user(&mut self, update: &UserUpdate) -> Option<&User> {
        let user = self.find_mut(update.id.as_ref())?;
        update.apply(user);
        return Some(user);
    }

    pub fn remove_user(&mut self, id: &str) -> Option<User> {
        let index = self.position_by_id(id)?;
        return Some(self.users.remove(index));
    }
}
