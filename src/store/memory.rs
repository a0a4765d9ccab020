use super::{Entity, ResourceStore, StoreError, StoreResult};
use crate::forms;
use crate::models::{self, CommentParent};
use crate::pagination::{self, CursorPage, OffsetPage, Order};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Keeps all collections in process memory.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    products: Vec<Row<models::Product>>,
    articles: Vec<Row<models::Article>>,
    comments: Vec<Row<models::Comment>>,
    seq: u64,
    last_tick: Option<DateTime<Utc>>,
}

struct Row<T> {
    seq: u64,
    record: T,
}

impl Tables {
    /// Insertion sequence and a strictly increasing timestamp.
    fn tick(&mut self) -> (u64, DateTime<Utc>) {
        let mut now = Utc::now();
        if let Some(last) = self.last_tick {
            if now <= last {
                now = last + Duration::microseconds(1);
            }
        }
        self.last_tick = Some(now);
        self.seq += 1;
        (self.seq, now)
    }

    fn now(&mut self) -> DateTime<Utc> {
        self.tick().1
    }

    fn parent_exists(&self, parent: &CommentParent) -> bool {
        match parent {
            CommentParent::Product(id) => self.products.iter().any(|row| row.record.id == *id),
            CommentParent::Article(id) => self.articles.iter().any(|row| row.record.id == *id),
        }
    }

    fn drop_comments_of(&mut self, parent: CommentParent) {
        self.comments.retain(|row| row.record.parent != parent);
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn position<T, F>(rows: &[Row<T>], found: F) -> Option<usize>
where
    F: Fn(&T) -> bool,
{
    rows.iter().position(|row| found(&row.record))
}

fn page_of<T, F, G>(rows: &[Row<T>], page: &OffsetPage, fields: F, created: G) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> [&str; 2],
    G: Fn(&T) -> DateTime<Utc>,
{
    let mut matching: Vec<&Row<T>> = rows
        .iter()
        .filter(|row| pagination::search_matches(&page.search, &fields(&row.record)))
        .collect();
    pagination::sort_by_order(&mut matching, page.order, |row| (created(&row.record), row.seq));

    pagination::offset_window(matching, page)
        .into_iter()
        .map(|row| row.record.clone())
        .collect()
}

#[async_trait]
impl ResourceStore for MemoryStore {
    async fn insert_product(&self, form: forms::CreateProduct) -> StoreResult<models::Product> {
        let mut tables = self.tables.write().await;
        let (seq, now) = tables.tick();
        let product = models::Product {
            id: Uuid::new_v4(),
            name: form.name,
            description: form.description,
            price: form.price,
            tags: form.tags,
            created_at: now,
            updated_at: now,
        };
        tables.products.push(Row {
            seq,
            record: product.clone(),
        });
        Ok(product)
    }

    async fn list_products(&self, page: &OffsetPage) -> StoreResult<Vec<models::Product>> {
        let tables = self.tables.read().await;
        Ok(page_of(
            &tables.products,
            page,
            |p| [p.name.as_str(), p.description.as_str()],
            |p| p.created_at,
        ))
    }

    async fn fetch_product(&self, id: Uuid) -> StoreResult<models::Product> {
        let tables = self.tables.read().await;
        tables
            .products
            .iter()
            .find(|row| row.record.id == id)
            .map(|row| row.record.clone())
            .ok_or(StoreError::NotFound(Entity::Product))
    }

    async fn update_product(
        &self,
        id: Uuid,
        patch: forms::PatchProduct,
    ) -> StoreResult<models::Product> {
        let mut tables = self.tables.write().await;
        let index = position(&tables.products, |p| p.id == id)
            .ok_or(StoreError::NotFound(Entity::Product))?;
        let now = tables.now();
        let product = &mut tables.products[index].record;
        patch.update(product);
        product.updated_at = now;
        Ok(product.clone())
    }

    async fn delete_product(&self, id: Uuid) -> StoreResult<models::Product> {
        let mut tables = self.tables.write().await;
        let index = position(&tables.products, |p| p.id == id)
            .ok_or(StoreError::NotFound(Entity::Product))?;
        let removed = tables.products.remove(index).record;
        tables.drop_comments_of(CommentParent::Product(id));
        Ok(removed)
    }

    async fn insert_article(&self, form: forms::CreateArticle) -> StoreResult<models::Article> {
        let mut tables = self.tables.write().await;
        let (seq, now) = tables.tick();
        let article = models::Article {
            id: Uuid::new_v4(),
            title: form.title,
            content: form.content,
            created_at: now,
            updated_at: now,
        };
        tables.articles.push(Row {
            seq,
            record: article.clone(),
        });
        Ok(article)
    }

    async fn list_articles(&self, page: &OffsetPage) -> StoreResult<Vec<models::Article>> {
        let tables = self.tables.read().await;
        Ok(page_of(
            &tables.articles,
            page,
            |a| [a.title.as_str(), a.content.as_str()],
            |a| a.created_at,
        ))
    }

    async fn fetch_article(&self, id: Uuid) -> StoreResult<models::Article> {
        let tables = self.tables.read().await;
        tables
            .articles
            .iter()
            .find(|row| row.record.id == id)
            .map(|row| row.record.clone())
            .ok_or(StoreError::NotFound(Entity::Article))
    }

    async fn update_article(
        &self,
        id: Uuid,
        patch: forms::PatchArticle,
    ) -> StoreResult<models::Article> {
        let mut tables = self.tables.write().await;
        let index = position(&tables.articles, |a| a.id == id)
            .ok_or(StoreError::NotFound(Entity::Article))?;
        let now = tables.now();
        let article = &mut tables.articles[index].record;
        patch.update(article);
        article.updated_at = now;
        Ok(article.clone())
    }

    async fn delete_article(&self, id: Uuid) -> StoreResult<models::Article> {
        let mut tables = self.tables.write().await;
        let index = position(&tables.articles, |a| a.id == id)
            .ok_or(StoreError::NotFound(Entity::Article))?;
        let removed = tables.articles.remove(index).record;
        tables.drop_comments_of(CommentParent::Article(id));
        Ok(removed)
    }

    async fn list_comments(
        &self,
        parent: CommentParent,
        page: &CursorPage,
    ) -> StoreResult<Vec<models::Comment>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<&Row<models::Comment>> = tables
            .comments
            .iter()
            .filter(|row| row.record.parent == parent)
            .collect();
        pagination::sort_by_order(&mut rows, Order::Recent, |row| (row.record.created_at, row.seq));

        Ok(pagination::cursor_window(rows, page, |row| row.record.id)
            .into_iter()
            .map(|row| row.record.clone())
            .collect())
    }

    async fn insert_comment(
        &self,
        parent: CommentParent,
        form: forms::CreateComment,
    ) -> StoreResult<models::Comment> {
        let mut tables = self.tables.write().await;
        if !tables.parent_exists(&parent) {
            return Err(StoreError::NotFound(Entity::parent_of(&parent)));
        }
        let (seq, now) = tables.tick();
        let comment = models::Comment {
            id: Uuid::new_v4(),
            content: form.content,
            parent,
            created_at: now,
            updated_at: now,
        };
        tables.comments.push(Row {
            seq,
            record: comment.clone(),
        });
        Ok(comment)
    }

    async fn update_comment(
        &self,
        parent: CommentParent,
        id: Uuid,
        patch: forms::PatchComment,
    ) -> StoreResult<models::Comment> {
        let mut tables = self.tables.write().await;
        let index = position(&tables.comments, |c| c.id == id && c.parent == parent)
            .ok_or(StoreError::NotFound(Entity::Comment))?;
        let now = tables.now();
        let comment = &mut tables.comments[index].record;
        patch.update(comment);
        comment.updated_at = now;
        Ok(comment.clone())
    }

    async fn delete_comment(
        &self,
        parent: CommentParent,
        id: Uuid,
    ) -> StoreResult<models::Comment> {
        let mut tables = self.tables.write().await;
        let index = position(&tables.comments, |c| c.id == id && c.parent == parent)
            .ok_or(StoreError::NotFound(Entity::Comment))?;
        Ok(tables.comments.remove(index).record)
    }

    async fn clear(&self) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.comments.clear();
        tables.articles.clear();
        tables.products.clear();
        Ok(())
    }
}
