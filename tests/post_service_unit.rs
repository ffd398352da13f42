// tests/post_service_unit.rs
use hodolog::application::commands::posts::{CreatePostCommand, DeletePostCommand, EditPostCommand};
use hodolog::application::error::ApplicationError;
use hodolog::application::queries::posts::{GetPostQuery, ListPostsQuery};
use hodolog::domain::post::{PostReadRepository, PostWriteRepository, TitlePolicy};

mod support;

use support::TestApp;

fn expect_not_found<T: std::fmt::Debug>(result: Result<T, ApplicationError>) {
    match result {
        Err(ApplicationError::NotFound(_)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

/// A written post can be read back by the id it was given.
#[tokio::test]
async fn write_then_get_returns_same_fields() {
    let app = TestApp::new();

    let id = app.write("title here", "content here").await;
    let post = app
        .services
        .post_queries
        .get_post(GetPostQuery { id: id.into() })
        .await
        .unwrap();

    assert_eq!(post.id, i64::from(id));
    assert_eq!(post.title, "title here");
    assert_eq!(post.content, "content here");
    assert_eq!(app.repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn missing_post_is_not_found_for_get_edit_and_delete() {
    let app = TestApp::new();
    let id = i64::from(app.write("foo", "bar").await) + 1;
    let services = &app.services;

    expect_not_found(services.post_queries.get_post(GetPostQuery { id }).await);
    expect_not_found(
        services
            .post_commands
            .edit_post(EditPostCommand {
                id,
                title: Some("foo".into()),
                content: Some("BAR".into()),
            })
            .await,
    );
    expect_not_found(
        services
            .post_commands
            .delete_post(DeletePostCommand { id })
            .await,
    );
    assert_eq!(app.repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn non_positive_ids_are_not_found() {
    let app = TestApp::new();
    for id in [0, -1] {
        expect_not_found(app.services.post_queries.get_post(GetPostQuery { id }).await);
    }
}

/// Fields left out of an edit keep their current value.
#[tokio::test]
async fn edit_keeps_fields_that_were_not_supplied() {
    let app = TestApp::new();
    let id = i64::from(app.write("foo", "bar").await);

    let edited = app
        .services
        .post_commands
        .edit_post(EditPostCommand {
            id,
            title: None,
            content: Some("BAR".into()),
        })
        .await
        .unwrap();

    assert_eq!(edited.title, "foo");
    assert_eq!(edited.content, "BAR");

    let stored = app
        .services
        .post_queries
        .get_post(GetPostQuery { id })
        .await
        .unwrap();
    assert_eq!(stored, edited);
}

#[tokio::test]
async fn edit_title_only() {
    let app = TestApp::new();
    let id = i64::from(app.write("foo", "bar").await);

    let edited = app
        .services
        .post_commands
        .edit_post(EditPostCommand {
            id,
            title: Some("FOO".into()),
            content: None,
        })
        .await
        .unwrap();

    assert_eq!(edited.id, id);
    assert_eq!(edited.title, "FOO");
    assert_eq!(edited.content, "bar");
}

#[tokio::test]
async fn edit_rejects_blank_supplied_fields_and_leaves_post_alone() {
    let app = TestApp::new();
    let id = i64::from(app.write("foo", "bar").await);

    let err = app
        .services
        .post_commands
        .edit_post(EditPostCommand {
            id,
            title: Some(" ".into()),
            content: Some(String::new()),
        })
        .await
        .unwrap_err();

    let validation = err.validation();
    assert_eq!(validation.len(), 2);
    assert!(validation.get("title").is_some());
    assert!(validation.get("content").is_some());

    let stored = app
        .services
        .post_queries
        .get_post(GetPostQuery { id })
        .await
        .unwrap();
    assert_eq!((stored.title.as_str(), stored.content.as_str()), ("foo", "bar"));
}

/// Twenty posts: the first page holds the ten newest, the second the ten before them.
#[tokio::test]
async fn list_pages_newest_first_ten_at_a_time() {
    let app = TestApp::new();
    app.seed(0..20).await;

    let first = app
        .services
        .post_queries
        .list_posts(ListPostsQuery::page(1))
        .await
        .unwrap();
    let second = app
        .services
        .post_queries
        .list_posts(ListPostsQuery::page(2))
        .await
        .unwrap();

    assert_eq!(first.len(), 10);
    assert_eq!(first[0].title, "title 19");
    assert_eq!(first[9].title, "title 10");
    assert_eq!(second.len(), 10);
    assert_eq!(second[0].title, "title 9");
    assert_eq!(second[9].title, "title 0");

    let ids: Vec<i64> = first.iter().chain(second.iter()).map(|p| p.id).collect();
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
}

#[tokio::test]
async fn page_zero_matches_page_one() {
    let app = TestApp::new();
    app.seed(0..15).await;
    let queries = &app.services.post_queries;

    let zero = queries.list_posts(ListPostsQuery::page(0)).await.unwrap();
    let one = queries.list_posts(ListPostsQuery::page(1)).await.unwrap();
    let none = queries.list_posts(ListPostsQuery::default()).await.unwrap();

    assert_eq!(zero, one);
    assert_eq!(none, one);
}

#[tokio::test]
async fn list_past_the_end_is_empty() {
    let app = TestApp::new();
    app.seed(0..3).await;

    let posts = app
        .services
        .post_queries
        .list_posts(ListPostsQuery::page(5))
        .await
        .unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn list_honours_size_and_sort_override() {
    let app = TestApp::new();
    app.seed(0..30).await;

    let posts = app
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            page: Some(1),
            size: Some(5),
            sort: Some("id,asc".into()),
        })
        .await
        .unwrap();

    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["title 0", "title 1", "title 2", "title 3", "title 4"]);
}

#[tokio::test]
async fn list_rejects_unknown_sort_field() {
    let app = TestApp::new();

    let err = app
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            sort: Some("content,desc".into()),
            ..ListPostsQuery::default()
        })
        .await
        .unwrap_err();

    assert!(err.validation().get("sort").is_some());
}

#[tokio::test]
async fn delete_is_terminal() {
    let app = TestApp::new();
    let id = i64::from(app.write("foo", "bar").await);

    app.services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .unwrap();

    assert_eq!(app.repo.count().await.unwrap(), 0);
    expect_not_found(app.services.post_queries.get_post(GetPostQuery { id }).await);
    expect_not_found(
        app.services
            .post_commands
            .edit_post(EditPostCommand {
                id,
                title: Some("back".into()),
                content: None,
            })
            .await,
    );
    expect_not_found(
        app.services
            .post_commands
            .delete_post(DeletePostCommand { id })
            .await,
    );
}

/// Both violations come back in one error, not just the first.
#[tokio::test]
async fn create_reports_every_invalid_field() {
    let app = TestApp::new();

    let err = app
        .services
        .post_commands
        .create_post(CreatePostCommand::new("", ""))
        .await
        .unwrap_err();

    let validation = err.validation();
    assert_eq!(validation.get("title"), Some("title is required"));
    assert_eq!(validation.get("content"), Some("content is required"));
    assert_eq!(app.repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn create_treats_missing_fields_as_empty() {
    let app = TestApp::new();

    let err = app
        .services
        .post_commands
        .create_post(CreatePostCommand {
            title: None,
            content: Some("content".into()),
        })
        .await
        .unwrap_err();

    let validation = err.validation();
    assert_eq!(validation.len(), 1);
    assert_eq!(validation.get("title"), Some("title is required"));
}

#[tokio::test]
async fn forbidden_title_words_are_rejected_on_create_and_edit() {
    let app = TestApp::with_policy(TitlePolicy::new(["바보"]));

    let err = app
        .services
        .post_commands
        .create_post(CreatePostCommand::new("나는 바보입니다", ""))
        .await
        .unwrap_err();
    let validation = err.validation();
    assert!(validation.get("title").is_some());
    assert_eq!(validation.get("content"), Some("content is required"));

    let id = i64::from(app.write("fine", "body").await);
    let err = app
        .services
        .post_commands
        .edit_post(EditPostCommand {
            id,
            title: Some("바보".into()),
            content: None,
        })
        .await
        .unwrap_err();
    assert!(err.validation().get("title").is_some());
}

#[tokio::test]
async fn delete_all_clears_the_store_without_reusing_ids() {
    let app = TestApp::new();
    let before = app.seed(0..3).await;

    assert_eq!(app.repo.delete_all().await.unwrap(), 3);
    let after = app.write("again", "again").await;

    assert!(before.iter().all(|id| *id < after));
}
