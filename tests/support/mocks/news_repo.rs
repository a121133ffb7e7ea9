// tests/support/mocks/news_repo.rs
use super::user_repo::InMemoryUserRepo;
use async_trait::async_trait;
use news_core::domain::errors::{DomainError, DomainResult};
use news_core::domain::news::{
    NewNews, News, NewsId, NewsReadRepository, NewsUpdate, NewsWithOwner, NewsWriteRepository,
    OwnerProjection,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// メモリ上のニュースリポジトリ（読み書き両方）
///
/// 挿入・更新の回数を数え、`fail_writes` で永続化エラーを再現できる。
pub struct InMemoryNewsRepo {
    users: Arc<InMemoryUserRepo>,
    rows: Mutex<Vec<News>>,
    inserts: AtomicUsize,
    updates: AtomicUsize,
    fail_writes: AtomicBool,
}

impl InMemoryNewsRepo {
    pub fn new(users: Arc<InMemoryUserRepo>) -> Self {
        Self {
            users,
            rows: Mutex::new(Vec::new()),
            inserts: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// 既存レコードを直接投入する（カウンタは増えない）
    pub fn seed(&self, news: News) {
        self.rows.lock().unwrap().push(news);
    }

    pub fn get(&self, id: i64) -> Option<News> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|n| i64::from(n.id) == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn owner_of(&self, news: &News) -> DomainResult<OwnerProjection> {
        let user = self
            .users
            .get(news.owner_id)
            .ok_or_else(|| DomainError::NotFound("referenced user not found".into()))?;
        Ok(OwnerProjection {
            id: user.id,
            name: user.name,
            email: user.email,
            image: user.image,
        })
    }

    fn join(&self, news: News) -> DomainResult<NewsWithOwner> {
        let owner = self.owner_of(&news)?;
        Ok(NewsWithOwner { news, owner })
    }

    fn check_writable(&self) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(DomainError::Persistence("database is locked".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl NewsWriteRepository for InMemoryNewsRepo {
    async fn insert(&self, news: NewNews) -> DomainResult<News> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.check_writable()?;
        if self.users.get(news.owner_id).is_none() {
            return Err(DomainError::NotFound("referenced user not found".into()));
        }

        let mut rows = self.rows.lock().unwrap();
        let next_id = rows.iter().map(|n| i64::from(n.id)).max().unwrap_or(0) + 1;
        let created = News {
            id: NewsId::new(next_id)?,
            title: news.title,
            content: news.content,
            image: news.image,
            owner_id: news.owner_id,
            created_at: news.created_at,
            updated_at: news.updated_at,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: NewsUpdate) -> DomainResult<News> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.check_writable()?;

        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|n| n.id == update.id)
            .ok_or_else(|| DomainError::NotFound("news not found".into()))?;
        row.title = update.title;
        row.content = update.content;
        if let Some(image) = update.image {
            row.image = image;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }
}

#[async_trait]
impl NewsReadRepository for InMemoryNewsRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.len() as u64)
    }

    async fn list_page(&self, skip: u64, limit: u64) -> DomainResult<Vec<NewsWithOwner>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| i64::from(b.id).cmp(&i64::from(a.id)));
        rows.into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .map(|news| self.join(news))
            .collect()
    }

    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<NewsWithOwner>> {
        match self.get(id.into()) {
            Some(news) => self.join(news).map(Some),
            None => Ok(None),
        }
    }

    async fn list_image_names(&self) -> DomainResult<Vec<String>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.image.as_str().to_string())
            .collect())
    }
}
