// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Facade integration tests with wiremock.

use chrono::NaiveDate;
use satchel_core::{Config, EventSource, Satchel, TaskConditions};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config {
        base_url: server.uri(),
        access_token: Some("secret-token".to_string()),
        timeout_secs: None,
    }
}

async fn mount_tasks(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json"))
        .mount(server)
        .await;
}

async fn mount_exams(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/exams"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn calendar_events_orders_exams_before_tasks() {
    let server = MockServer::start().await;
    mount_tasks(
        &server,
        r#"{"status": "ok", "msg": {"tasks": [
            {"id": "1", "description": "Essay", "isDone": false, "date": "2024-03-01", "subjectId": "s1"},
            {"id": "2", "description": "Quiz", "isDone": true, "date": "2024-03-02", "subjectId": "s1"},
            {"id": "3", "description": "Reading", "isDone": false, "date": null, "subjectId": "s2"}
        ]}}"#,
    )
    .await;
    mount_exams(
        &server,
        r#"{"status": "ok", "msg": {"exams": [
            {"id": "t1", "description": "Midterm", "subjectId": "s1", "date": "2024-04-01"}
        ]}}"#,
    )
    .await;

    let satchel = Satchel::new(config_for(&server)).expect("Failed to create satchel");
    let events = satchel
        .calendar_events()
        .await
        .expect("Failed to aggregate events");

    // Midterm first (exam), then the pending dated task; the done task and
    // the undated task contribute nothing.
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Midterm");
    assert!(matches!(events[0].source, EventSource::Exam(_)));
    assert_eq!(events[1].title, "Essay");
    assert_eq!(events[1].start, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(events[1].end, events[1].start);
    assert!(events[1].all_day);
}

#[tokio::test]
async fn calendar_events_empty_when_nothing_qualifies() {
    let server = MockServer::start().await;
    mount_tasks(
        &server,
        r#"{"status": "ok", "msg": {"tasks": [
            {"id": "3", "description": "Reading", "isDone": false, "date": null, "subjectId": "s2"}
        ]}}"#,
    )
    .await;
    mount_exams(&server, r#"{"status": "ok", "msg": {"exams": []}}"#).await;

    let satchel = Satchel::new(config_for(&server)).expect("Failed to create satchel");
    let events = satchel.calendar_events().await.expect("Failed to aggregate");
    assert!(events.is_empty());
}

#[tokio::test]
async fn calendar_events_propagates_fetch_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let satchel = Satchel::new(config_for(&server)).expect("Failed to create satchel");
    assert!(satchel.calendar_events().await.is_err());
}

#[tokio::test]
async fn list_tasks_filters_by_subject_client_side() {
    let server = MockServer::start().await;
    mount_tasks(
        &server,
        r#"{"status": "ok", "msg": {"tasks": [
            {"id": "1", "description": "Essay", "isDone": false, "date": "2024-03-01", "subjectId": "s1"},
            {"id": "2", "description": "Lab report", "isDone": false, "subjectId": "s2"},
            {"id": "3", "description": "Quiz", "isDone": true, "subjectId": "s1"}
        ]}}"#,
    )
    .await;

    let satchel = Satchel::new(config_for(&server)).expect("Failed to create satchel");

    let conds = TaskConditions {
        subject: Some("s1".to_string()),
        ..Default::default()
    };
    let tasks = satchel.list_tasks(&conds).await.expect("Failed to list");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, "1");

    let conds = TaskConditions {
        subject: Some("s1".to_string()),
        include_done: true,
    };
    let tasks = satchel.list_tasks(&conds).await.expect("Failed to list");
    assert_eq!(tasks.len(), 2);
}

#[tokio::test]
async fn update_task_rejects_empty_patch() {
    let server = MockServer::start().await;
    let satchel = Satchel::new(config_for(&server)).expect("Failed to create satchel");

    let err = satchel
        .update_task("1", satchel_core::TaskPatch::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Nothing to update"));
}
