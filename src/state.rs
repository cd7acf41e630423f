use std::{ops::Deref, sync::Arc};

use crate::store::BookStore;

#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(store: BookStore) -> Self {
        Self {
            inner: Arc::new(ApiStateInner { store }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    store: BookStore,
}

impl ApiStateInner {
    pub fn store(&self) -> &BookStore {
        &self.store
    }
}
