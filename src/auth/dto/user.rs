use std::{ops::Deref, sync::Arc};
use uuid::Uuid;

///
/// Authenticated principal extracted from the JWT.
///
/// To make sure cloning does not take too long
/// all fields are stored in InnerUser behind an Arc.
///
/// InnerUser fields are accessible thanks to Deref trait.
///
#[derive(Clone)]
pub struct User {
    inner: Arc<InnerUser>,
}

pub struct InnerUser {
    pub id: Uuid,
    pub email: String,
    pub roles: Vec<String>,
}

impl User {
    pub fn new(id: Uuid, email: String, roles: Vec<String>) -> Self {
        Self {
            inner: Arc::new(InnerUser { id, email, roles }),
        }
    }
}

impl Deref for User {
    type Target = InnerUser;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
