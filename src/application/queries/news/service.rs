use std::sync::Arc;

use crate::{application::dto::NewsTransformer, domain::news::NewsReadRepository};

pub struct NewsQueryService {
    pub(super) read_repo: Arc<dyn NewsReadRepository>,
    pub(super) transformer: Arc<NewsTransformer>,
}

impl NewsQueryService {
    pub fn new(read_repo: Arc<dyn NewsReadRepository>, transformer: Arc<NewsTransformer>) -> Self {
        Self {
            read_repo,
            transformer,
        }
    }
}
