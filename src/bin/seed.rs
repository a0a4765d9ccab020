//! Loads sample products, articles and comments into the configured database.
//!
//! ```text
//! seed            # insert sample data next to existing records
//! seed --reset    # wipe every collection first
//! ```

use anyhow::Context;
use clap::Parser;
use marketboard::configuration::get_configuration;
use marketboard::forms::{CreateArticle, CreateComment, CreateProduct};
use marketboard::models::CommentParent;
use marketboard::store::{PgStore, ResourceStore};
use marketboard::telemetry::{get_subscriber, init_subscriber};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "seed", version, about = "Seed the marketboard database with sample data")]
struct Cli {
    /// Delete all products, articles and comments before seeding
    #[arg(long, env = "SEED_RESET")]
    reset: bool,
}

fn products() -> Vec<CreateProduct> {
    vec![
        CreateProduct {
            name: "Product 1".to_string(),
            description: "A cool product".to_string(),
            price: 29.99,
            tags: vec!["tag1".to_string(), "tag2".to_string()],
        },
        CreateProduct {
            name: "Product 2".to_string(),
            description: "Another awesome product".to_string(),
            price: 49.99,
            tags: vec!["tag3".to_string(), "tag4".to_string()],
        },
    ]
}

fn articles() -> Vec<CreateArticle> {
    vec![
        CreateArticle {
            title: "First Article".to_string(),
            content: "Content of the first article".to_string(),
        },
        CreateArticle {
            title: "Second Article".to_string(),
            content: "Content of the second article".to_string(),
        },
    ]
}

async fn seed(store: &dyn ResourceStore, reset: bool) -> anyhow::Result<()> {
    if reset {
        store.clear().await.context("Failed to clear collections")?;
        tracing::info!("Cleared all collections");
    }

    let mut parents = Vec::new();
    for form in products() {
        let product = store.insert_product(form).await.context("Failed to insert product")?;
        parents.push(CommentParent::Product(product.id));
    }
    for form in articles() {
        let article = store.insert_article(form).await.context("Failed to insert article")?;
        parents.push(CommentParent::Article(article.id));
    }

    for parent in parents {
        let content = match parent {
            CommentParent::Product(_) => "Great product!",
            CommentParent::Article(_) => "Very informative article.",
        };
        store
            .insert_comment(parent, CreateComment { content: content.to_string() })
            .await
            .with_context(|| format!("Failed to insert comment for {}", parent))?;
    }

    tracing::info!("Seeding finished");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_subscriber(get_subscriber("seed".into(), "info".into(), std::io::stdout));

    let settings = get_configuration().context("Failed to read configuration")?;
    let pg_pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(settings.database.acquire_timeout_secs))
        .connect(&settings.database.connection_string())
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pg_pool)
        .await
        .context("Failed to migrate database")?;

    let store = PgStore::new(pg_pool);
    seed(&store, cli.reset).await
}
