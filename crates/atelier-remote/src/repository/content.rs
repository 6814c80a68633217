//! # Content Repository
//!
//! Site content reads and admin writes: collections, categories, and
//! journal articles. Row structs mirror the snake_case remote columns
//! and convert into the domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use atelier_core::{Article, Category, Collection};

use crate::client::{Filter, OrderBy, RemoteClient};
use crate::error::RemoteResult;

const COLLECTIONS: &str = "collections";
const CATEGORIES: &str = "categories";
const ARTICLES: &str = "articles";

// =============================================================================
// Row Types
// =============================================================================

/// A collection row as stored remotely.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionRow {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i64,
    pub created_at: DateTime<Utc>,
}

impl CollectionRow {
    pub fn into_collection(self) -> Collection {
        Collection {
            id: self.id,
            slug: self.slug,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            sort_order: self.sort_order,
            created_at: self.created_at,
        }
    }
}

/// A category row as stored remotely.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRow {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub collection_slug: String,
    pub sort_order: i64,
    pub created_at: DateTime<Utc>,
}

impl CategoryRow {
    pub fn into_category(self) -> Category {
        Category {
            id: self.id,
            slug: self.slug,
            name: self.name,
            collection_slug: self.collection_slug,
            sort_order: self.sort_order,
            created_at: self.created_at,
        }
    }
}

/// An article row as stored remotely.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleRow {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub cover_image: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ArticleRow {
    pub fn into_article(self) -> Article {
        Article {
            id: self.id,
            slug: self.slug,
            title: self.title,
            excerpt: self.excerpt,
            body: self.body,
            cover_image: self.cover_image,
            author: self.author,
            published_at: self.published_at,
            created_at: self.created_at,
        }
    }
}

// =============================================================================
// Write Payloads
// =============================================================================

/// Writable article fields for admin insert/update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleWrite {
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub cover_image: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for collections, categories, and articles.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    client: RemoteClient,
}

impl ContentRepository {
    /// Creates a new ContentRepository.
    pub fn new(client: RemoteClient) -> Self {
        ContentRepository { client }
    }

    /// Lists all collections in their manual display order.
    pub async fn collections(&self) -> RemoteResult<Vec<Collection>> {
        let rows: Vec<CollectionRow> = self
            .client
            .select(COLLECTIONS, &[], Some(OrderBy::asc("sort_order")))
            .await?;
        Ok(rows.into_iter().map(CollectionRow::into_collection).collect())
    }

    /// Looks up one collection by slug.
    pub async fn collection_by_slug(&self, slug: &str) -> RemoteResult<Option<Collection>> {
        let row: Option<CollectionRow> = self
            .client
            .select_one(COLLECTIONS, &[Filter::eq("slug", slug)])
            .await?;
        Ok(row.map(CollectionRow::into_collection))
    }

    /// Lists the categories of a collection in display order.
    pub async fn categories(&self, collection_slug: &str) -> RemoteResult<Vec<Category>> {
        let rows: Vec<CategoryRow> = self
            .client
            .select(
                CATEGORIES,
                &[Filter::eq("collection_slug", collection_slug)],
                Some(OrderBy::asc("sort_order")),
            )
            .await?;
        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }

    /// Lists all articles, newest first.
    pub async fn articles(&self) -> RemoteResult<Vec<Article>> {
        let rows: Vec<ArticleRow> = self
            .client
            .select(ARTICLES, &[], Some(OrderBy::desc("created_at")))
            .await?;
        Ok(rows.into_iter().map(ArticleRow::into_article).collect())
    }

    /// Looks up one article by slug.
    pub async fn article_by_slug(&self, slug: &str) -> RemoteResult<Option<Article>> {
        let row: Option<ArticleRow> = self
            .client
            .select_one(ARTICLES, &[Filter::eq("slug", slug)])
            .await?;
        Ok(row.map(ArticleRow::into_article))
    }

    /// Publishes a new article (admin form).
    pub async fn insert_article(&self, article: &ArticleWrite) -> RemoteResult<Article> {
        let saved: ArticleRow = self.client.insert(ARTICLES, article).await?;
        debug!(article_id = %saved.id, slug = %saved.slug, "Article published");
        Ok(saved.into_article())
    }

    /// Updates an existing article (admin form).
    pub async fn update_article(&self, id: &str, article: &ArticleWrite) -> RemoteResult<()> {
        self.client.update(ARTICLES, id, article).await
    }

    /// Deletes an article.
    pub async fn delete_article(&self, id: &str) -> RemoteResult<()> {
        self.client.delete(ARTICLES, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_decodes_from_remote_row() {
        let json = r#"{
            "id": "c-1",
            "slug": "wrought-lemeute",
            "name": "Wrought L'émeute",
            "description": "Hand-forged ironwork",
            "image_url": null,
            "sort_order": 1,
            "created_at": "2026-01-01T00:00:00Z"
        }"#;

        let row: CollectionRow = serde_json::from_str(json).unwrap();
        let collection = row.into_collection();
        assert_eq!(collection.slug, "wrought-lemeute");
        assert_eq!(collection.sort_order, 1);
        assert_eq!(collection.image_url, None);
    }

    #[test]
    fn test_article_row_converts_camel_case() {
        let json = r#"{
            "id": "a-1",
            "slug": "forging-notes",
            "title": "Forging Notes",
            "excerpt": null,
            "body": "<p>From the workshop.</p>",
            "cover_image": "https://cdn.example/forge.jpg",
            "author": "Studio",
            "published_at": null,
            "created_at": "2026-02-01T00:00:00Z"
        }"#;

        let row: ArticleRow = serde_json::from_str(json).unwrap();
        let article = row.into_article();

        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["coverImage"], "https://cdn.example/forge.jpg");
        assert!(value.get("cover_image").is_none());
    }

    #[test]
    fn test_article_write_payload_shape() {
        let article = ArticleWrite {
            slug: "forging-notes".to_string(),
            title: "Forging Notes".to_string(),
            excerpt: None,
            body: "<p>From the workshop.</p>".to_string(),
            cover_image: None,
            author: Some("Studio".to_string()),
            published_at: None,
        };

        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["slug"], "forging-notes");
        assert!(value.get("id").is_none());
    }
}
