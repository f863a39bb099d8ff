mod common;

use clubhouse::database::{event_repo, member_repo, participation_repo, photo_repo};
use common::{file_part, location, TestApp};
use reqwest::{multipart, StatusCode};

#[tokio::test]
async fn duplicate_email_is_reported_and_not_stored() {
    let app = TestApp::spawn().await;
    app.create_member("Ada Lovelace", "ada@example.com").await;

    let resp = app
        .post_form("/members", &[("name", "Impostor"), ("email", "ada@example.com")])
        .await;
    let target = location(&resp);
    assert_eq!(target, "/members?notice=duplicate_email");
    assert_eq!(member_repo::count(&app.pool).await.unwrap(), 1);

    let (status, body) = app.get(&target).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Email already exists!"));
    assert!(body.contains("Ada Lovelace"));
    assert!(!body.contains("Impostor"));
}

#[tokio::test]
async fn missing_member_fields_are_rejected() {
    let app = TestApp::spawn().await;

    let resp = app.post_form("/members", &[("name", "No Email")]).await;
    assert_eq!(location(&resp), "/members?notice=missing_fields");
    assert_eq!(member_repo::count(&app.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn member_profile_image_is_uploaded() {
    let app = TestApp::spawn().await;

    let form = multipart::Form::new()
        .text("name", "Grace Hopper")
        .text("email", "grace@example.com")
        .part("profile_image", file_part("grace.png", b"fake-png"));
    let resp = app.post_multipart("/members", form).await;
    assert_eq!(location(&resp), "/members?notice=member_added");

    let members = member_repo::list_all(&app.pool).await.unwrap();
    let stored = members[0].profile_image.clone().expect("profile image");
    assert!(stored.ends_with("_grace.png"));
    assert!(app.upload_dir.join(&stored).exists());

    let (status, body) = app.get(&format!("/uploads/{}", stored)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "fake-png");
}

#[tokio::test]
async fn member_without_chosen_file_is_still_created() {
    let app = TestApp::spawn().await;

    let form = multipart::Form::new()
        .text("name", "Linus")
        .text("email", "linus@example.com")
        .part("profile_image", file_part("", b""));
    let resp = app.post_multipart("/members", form).await;
    assert_eq!(location(&resp), "/members?notice=member_added");

    let members = member_repo::list_all(&app.pool).await.unwrap();
    assert_eq!(members.len(), 1);
    assert!(members[0].profile_image.is_none());
}

#[tokio::test]
async fn event_dates_accept_two_formats_only() {
    let app = TestApp::spawn().await;

    app.create_event("Kickoff", "2024-05-01T10:00").await;
    app.create_event("Picnic", "2024-06-15").await;

    let resp = app
        .post_form(
            "/events",
            &[("title", "Broken"), ("description", "x"), ("date", "not-a-date")],
        )
        .await;
    assert_eq!(location(&resp), "/events?notice=invalid_date");
    assert_eq!(event_repo::count(&app.pool).await.unwrap(), 2);

    let (status, body) = app.get("/events?notice=invalid_date").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Invalid date format"));
    assert!(body.contains("2024-05-01 10:00"));
    assert!(body.contains("2024-06-15 00:00"));
    assert!(!body.contains("Broken"));
}

#[tokio::test]
async fn joining_twice_keeps_a_single_participation() {
    let app = TestApp::spawn().await;
    app.create_member("Ada", "ada@example.com").await;
    app.create_event("Picnic", "2024-06-15T12:00").await;

    let resp = app.post_form("/event/1", &[("member_id", "1")]).await;
    assert_eq!(location(&resp), "/event/1?notice=member_joined");

    let resp = app.post_form("/event/1", &[("member_id", "1")]).await;
    assert_eq!(location(&resp), "/event/1?notice=already_joined");

    let rows = participation_repo::list_for_event(&app.pool, 1).await.unwrap();
    assert_eq!(rows.len(), 1);

    let (status, body) = app.get("/event/1?notice=already_joined").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Member already joined this event."));
    assert!(body.contains("Participants (1)"));
    assert!(body.contains(&format!(
        "joined {}",
        rows[0].joined_at.format("%Y-%m-%d %H:%M")
    )));
}

#[tokio::test]
async fn joining_an_unknown_member_is_reported() {
    let app = TestApp::spawn().await;
    app.create_event("Picnic", "2024-06-15").await;

    let resp = app.post_form("/event/1", &[("member_id", "99")]).await;
    assert_eq!(location(&resp), "/event/1?notice=member_not_found");

    let resp = app.post_form("/event/1", &[("member_id", "abc")]).await;
    assert_eq!(location(&resp), "/event/1?notice=member_not_found");
    assert!(participation_repo::list_for_event(&app.pool, 1)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn photo_uploads_are_filtered_by_extension() {
    let app = TestApp::spawn().await;
    app.create_event("Picnic", "2024-06-15").await;

    let form = multipart::Form::new().part("photo", file_part("photo.txt", b"text"));
    let resp = app.post_multipart("/event/1", form).await;
    assert_eq!(location(&resp), "/event/1?notice=invalid_file_type");
    assert!(photo_repo::list_for_event(&app.pool, 1)
        .await
        .unwrap()
        .is_empty());

    let form = multipart::Form::new().part("photo", file_part("photo.jpg", b"jpeg"));
    let resp = app.post_multipart("/event/1", form).await;
    assert_eq!(location(&resp), "/event/1?notice=photo_uploaded");

    let photos = photo_repo::list_for_event(&app.pool, 1).await.unwrap();
    assert_eq!(photos.len(), 1);
    assert!(photos[0].filename.starts_with("event_1_"));
    assert!(photos[0].filename.ends_with("_photo.jpg"));

    let (_, detail) = app.get("/event/1").await;
    assert!(detail.contains(&format!("/uploads/{}", photos[0].filename)));

    let (status, albums) = app.get("/albums").await;
    assert_eq!(status, StatusCode::OK);
    assert!(albums.contains("Picnic"));
    assert!(albums.contains(&format!("/uploads/{}", photos[0].filename)));
}

#[tokio::test]
async fn empty_photo_field_asks_for_a_file() {
    let app = TestApp::spawn().await;
    app.create_event("Picnic", "2024-06-15").await;

    let form = multipart::Form::new().part("photo", file_part("", b""));
    let resp = app.post_multipart("/event/1", form).await;
    assert_eq!(location(&resp), "/event/1?notice=no_file_selected");
}

#[tokio::test]
async fn post_without_photo_or_member_just_redirects() {
    let app = TestApp::spawn().await;
    app.create_event("Picnic", "2024-06-15").await;

    let resp = app.post_form("/event/1", &[]).await;
    assert_eq!(location(&resp), "/event/1");

    let resp = app.post_form("/event/1", &[("member_id", "  ")]).await;
    assert_eq!(location(&resp), "/event/1");
}

#[tokio::test]
async fn home_lists_five_most_recent_events() {
    let app = TestApp::spawn().await;
    for day in 1..=7 {
        app.create_event(&format!("Event {}", day), &format!("2024-05-0{}", day))
            .await;
    }
    app.create_member("Ada", "ada@example.com").await;

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<strong>1</strong> members"));

    let positions: Vec<usize> = (3..=7)
        .rev()
        .map(|day| body.find(&format!("Event {}", day)).expect("listed event"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(!body.contains("Event 2"));
    assert!(!body.contains("Event 1"));
}

#[tokio::test]
async fn unknown_events_and_paths_are_not_found() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/event/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Not Found"));

    let (status, _) = app.get("/event/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let resp = app.post_form("/event/42", &[("member_id", "1")]).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let (status, _) = app.get("/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_notice_codes_are_ignored() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/members?notice=%3Cscript%3E").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("class=\"notice"));
    assert!(!body.contains("<script>"));
}
