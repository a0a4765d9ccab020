//! Comment routes. Product and article comments share every handler body; only
//! the [`CommentParent`](crate::models::CommentParent) built from the path differs.

pub mod add;
pub mod delete;
pub mod get;
pub mod update;

#[cfg(test)]
mod tests {
    use crate::startup::configure;
    use crate::store::{MemoryStore, ResourceStore};
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn store() -> web::Data<Arc<dyn ResourceStore>> {
        let store: Arc<dyn ResourceStore> = Arc::new(MemoryStore::new());
        web::Data::new(store)
    }

    fn contents(list: &Value) -> Vec<&str> {
        list.as_array()
            .unwrap()
            .iter()
            .map(|c| c["content"].as_str().unwrap())
            .collect()
    }

    #[actix_web::test]
    async fn product_comments_page_by_cursor() {
        let app = test::init_service(App::new().app_data(store()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/product")
            .set_json(json!({"name": "Widget", "description": "d", "price": 1, "tags": []}))
            .to_request();
        let product: Value = test::call_and_read_body_json(&app, req).await;
        let product_id = product["id"].as_str().unwrap();

        for i in 1..=5 {
            let req = test::TestRequest::post()
                .uri(&format!("/comment/product/{}", product_id))
                .set_json(json!({"content": format!("c{}", i)}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
            let comment: Value = test::read_body_json(resp).await;
            assert_eq!(comment["productId"], product_id);
            assert!(comment["articleId"].is_null());
        }

        let req = test::TestRequest::get()
            .uri(&format!("/comment/product/{}?limit=2", product_id))
            .to_request();
        let first: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(contents(&first), vec!["c5", "c4"]);

        let cursor = first[1]["id"].as_str().unwrap();
        let req = test::TestRequest::get()
            .uri(&format!("/comment/product/{}?limit=2&cursor={}", product_id, cursor))
            .to_request();
        let second: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(contents(&second), vec!["c3", "c2"]);

        let req = test::TestRequest::get()
            .uri(&format!("/comment/product/{}?cursor=unknown", product_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let empty: Value = test::read_body_json(resp).await;
        assert_eq!(empty, json!([]));

        let req = test::TestRequest::get()
            .uri(&format!("/comment/product/{}?limit=0", product_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn article_comments_are_scoped_to_their_parent() {
        let app = test::init_service(App::new().app_data(store()).configure(configure)).await;

        let mut ids = Vec::new();
        for title in ["one", "two"] {
            let req = test::TestRequest::post()
                .uri("/article")
                .set_json(json!({"title": title, "content": "c"}))
                .to_request();
            let article: Value = test::call_and_read_body_json(&app, req).await;
            ids.push(article["id"].as_str().unwrap().to_string());
        }

        let req = test::TestRequest::post()
            .uri(&format!("/comment/article/{}", ids[0]))
            .set_json(json!({"content": "Very informative article."}))
            .to_request();
        let comment: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(comment["articleId"], ids[0].as_str());
        assert!(comment["productId"].is_null());
        let comment_id = comment["id"].as_str().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/comment/article/{}", ids[1]))
            .to_request();
        let other: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(other, json!([]));

        let req = test::TestRequest::patch()
            .uri(&format!("/comment/article/{}/{}", ids[1], comment_id))
            .set_json(json!({"content": "hijack"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::patch()
            .uri(&format!("/comment/article/{}/{}", ids[0], comment_id))
            .set_json(json!({"content": "edited"}))
            .to_request();
        let edited: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(edited["content"], "edited");
        assert_eq!(edited["articleId"], ids[0].as_str());

        let req = test::TestRequest::delete()
            .uri(&format!("/comment/article/{}/{}", ids[0], comment_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete()
            .uri(&format!("/comment/article/{}/{}", ids[0], comment_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn comment_on_missing_parent_is_not_found() {
        let app = test::init_service(App::new().app_data(store()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/comment/product/f7f3a340-4e47-4a87-b72b-4479f989b9b4")
            .set_json(json!({"content": "hello"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Product not found");

        let req = test::TestRequest::post()
            .uri("/comment/article/f7f3a340-4e47-4a87-b72b-4479f989b9b4")
            .set_json(json!({"content": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn malformed_parent_id_names_the_parent() {
        let app = test::init_service(App::new().app_data(store()).configure(configure)).await;
        let comment_id = "f7f3a340-4e47-4a87-b72b-4479f989b9b4";

        let cases = [
            (test::TestRequest::post().uri("/comment/product/nope"), "Product not found"),
            (
                test::TestRequest::patch().uri(&format!("/comment/product/nope/{}", comment_id)),
                "Product not found",
            ),
            (
                test::TestRequest::delete().uri(&format!("/comment/product/nope/{}", comment_id)),
                "Product not found",
            ),
            (test::TestRequest::post().uri("/comment/article/nope"), "Article not found"),
            (
                test::TestRequest::patch().uri(&format!("/comment/article/nope/{}", comment_id)),
                "Article not found",
            ),
            (
                test::TestRequest::delete().uri(&format!("/comment/article/nope/{}", comment_id)),
                "Article not found",
            ),
        ];

        for (req, message) in cases {
            let req = req.set_json(json!({"content": "hello"})).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], message);
        }
    }
}
