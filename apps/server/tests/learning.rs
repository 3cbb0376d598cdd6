mod common;

use axum::http::{Method, StatusCode};
use common::{get, post, put, register, send, test_app};
use serde_json::{json, Value};

async fn create_assignment(app: &axum::Router, user_id: &str, title: &str, due: &str) -> Value {
    let (status, body) = post(
        app,
        &format!("/api/assignments/{user_id}"),
        json!({ "title": title, "subject": "Physics", "due_date": due }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Assignment created successfully");
    body["assignment"].clone()
}

#[tokio::test]
async fn assignments_filter_by_status_in_due_order() {
    let (app, _tmp) = test_app(None).await;
    let user_id = register(&app, "ada@example.com").await;

    create_assignment(&app, &user_id, "Late", "2025-03-20").await;
    let done = create_assignment(&app, &user_id, "Done", "2025-03-01").await;
    create_assignment(&app, &user_id, "Early", "2025-03-05T08:00:00Z").await;

    let (status, body) = put(
        &app,
        &format!("/api/assignments/{user_id}/{}", done["id"].as_str().unwrap()),
        json!({ "status": "completed", "score": 88 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Assignment updated successfully");
    assert_eq!(body["assignment"]["status"], "completed");
    assert_eq!(body["assignment"]["score"], 88.0);

    let (status, body) = get(&app, &format!("/api/assignments/{user_id}?status=pending")).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Early", "Late"]);

    let (_, body) = get(&app, &format!("/api/assignments/{user_id}?status=all")).await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, _) = post(
        &app,
        &format!("/api/assignments/{user_id}"),
        json!({ "title": "No date", "subject": "Physics" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn updating_another_users_assignment_is_not_found() {
    let (app, _tmp) = test_app(None).await;
    let owner = register(&app, "ada@example.com").await;
    let other = register(&app, "bob@example.com").await;
    let assignment = create_assignment(&app, &owner, "Essay", "2025-04-01").await;

    let (status, body) = put(
        &app,
        &format!("/api/assignments/{other}/{}", assignment["id"].as_str().unwrap()),
        json!({ "status": "completed" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn dashboard_shows_user_activity_and_performance() {
    let (app, _tmp) = test_app(None).await;
    let user_id = register(&app, "ada@example.com").await;
    create_assignment(&app, &user_id, "Essay", "2025-04-01").await;

    let (status, body) = post(
        &app,
        &format!("/api/dashboard/user/{user_id}/performance"),
        json!({ "subject": "maths", "score": 91 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["subject"], "Mathematics");

    let (status, body) = get(&app, &format!("/api/dashboard/user/{user_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], user_id.as_str());
    assert_eq!(body["pending_assignments"].as_array().unwrap().len(), 1);
    assert_eq!(body["recent_activities"].as_array().unwrap().len(), 2);
    assert_eq!(body["performance"][0]["score"], 91.0);

    let (status, _) = get(&app, "/api/dashboard/user/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn booster_for_high_grade_is_tier_one() {
    let (app, _tmp) = test_app(None).await;
    let user_id = register(&app, "ada@example.com").await;
    let assignment = create_assignment(&app, &user_id, "Lab report", "2025-04-01").await;

    let request = json!({
        "user_id": user_id,
        "assignment_id": assignment["id"],
        "subject": "Physics",
        "assignment_title": "Lab report",
        "grade": 92,
        "feedback": "Great analysis"
    });
    let (status, booster) = post(&app, "/api/boosters", request.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(booster["tier"], 1);
    assert!(booster["diagnostic_summary"]
        .as_str()
        .unwrap()
        .starts_with("🎯 From Excellence to Mastery"));
    assert_eq!(booster["strategies"].as_array().unwrap().len(), 3);

    let booster_id = booster["id"].as_str().unwrap();
    let (status, fetched) = get(&app, &format!("/api/boosters/{booster_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, booster);

    let (_, listed) = get(&app, &format!("/api/boosters/user/{user_id}")).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let mut out_of_range = request;
    out_of_range["grade"] = json!(120);
    let (status, _) = post(&app, "/api/boosters", out_of_range).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/api/boosters/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn practice_generation_falls_back_without_api_key() {
    let (app, _tmp) = test_app(None).await;
    let user_id = register(&app, "ada@example.com").await;

    let (status, practice) = post(
        &app,
        "/api/adaptive-practice/generate",
        json!({ "user_id": user_id, "subject": "physics" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(practice["subject"], "Physics");
    assert_eq!(practice["performance_level"], "standard");
    assert_eq!(practice["title"], "Intermediate Physics: Forces and Motion");
    assert!(!practice["resources"].as_array().unwrap().is_empty());

    post(
        &app,
        &format!("/api/dashboard/user/{user_id}/performance"),
        json!({ "subject": "Physics", "score": 95 }),
    )
    .await;
    let (_, advanced) = post(
        &app,
        "/api/adaptive-practice/generate",
        json!({ "user_id": user_id, "subject": "Physics" }),
    )
    .await;
    assert_eq!(advanced["performance_level"], "advanced");

    let (status, _) = post(
        &app,
        "/api/adaptive-practice/generate",
        json!({ "user_id": user_id, "subject": "History" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, listed) = get(
        &app,
        &format!("/api/adaptive-practice?user_id={user_id}&subject=Physics"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 2);

    let (status, _) = get(&app, "/api/adaptive-practice").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn practice_crud() {
    let (app, _tmp) = test_app(None).await;
    let user_id = register(&app, "ada@example.com").await;

    let (status, created) = post(
        &app,
        "/api/adaptive-practice",
        json!({
            "user_id": user_id,
            "subject": "Chemistry",
            "performance_level": "remedial",
            "title": "Moles",
            "description": "Counting particles",
            "content": "## Moles",
            "resources": ["Textbook"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let uri = format!("/api/adaptive-practice/{}", created["id"].as_str().unwrap());

    let (status, updated) = put(&app, &uri, json!({ "completed": true })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["title"], "Moles");

    let (status, body) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Adaptive practice deleted successfully");

    let (status, _) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = post(
        &app,
        "/api/adaptive-practice",
        json!({ "user_id": user_id, "subject": "Chemistry", "title": "Missing level" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tutor_submission_scores_and_records_history() {
    let (app, _tmp) = test_app(None).await;
    let user_id = register(&app, "ada@example.com").await;

    let (status, session) = post(
        &app,
        "/api/personalized-tutor/generate",
        json!({ "user_id": user_id, "subject": "Chemistry" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(session["completed"], false);
    let quiz = session["quiz_data"].as_array().unwrap();
    assert!(!quiz.is_empty());

    // Only the first answer is right.
    let answers: Vec<String> = quiz
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let correct = q["correct_answer"].as_str().unwrap();
            if i == 0 {
                correct.to_lowercase()
            } else if correct == "A" {
                "B".to_string()
            } else {
                "A".to_string()
            }
        })
        .collect();

    let id = session["id"].as_str().unwrap();
    let (status, result) = post(
        &app,
        &format!("/api/personalized-tutor/{id}/submit"),
        json!({ "answers": answers }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["correct_count"], 1);
    assert_eq!(result["total_questions"], quiz.len());
    let expected = 100.0 / quiz.len() as f64;
    assert!((result["score"].as_f64().unwrap() - expected).abs() < 1e-9);

    let (_, stored) = get(&app, &format!("/api/personalized-tutor/{id}")).await;
    assert_eq!(stored["completed"], true);

    let (status, history) = get(
        &app,
        &format!("/api/personalized-tutor/performance-history?user_id={user_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["quiz_id"], id);
    assert_eq!(history[0]["score"], 1.0);
    assert_eq!(history[0]["max_score"], quiz.len() as f64);

    let (status, _) = post(
        &app,
        "/api/personalized-tutor/missing/submit",
        json!({ "answers": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/api/personalized-tutor").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
