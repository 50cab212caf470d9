// SPDX-FileCopyrightText: 2026 Satchel contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Aggregation of tasks and exams into calendar-displayable events.

use chrono::NaiveDate;

use crate::exam::Exam;
use crate::task::Task;

/// The record a calendar event was derived from.
///
/// Consumers pattern-match on the variant to show kind-specific detail
/// (a task's completion state, an exam's score, and so on).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
pub enum EventSource {
    /// The event wraps a homework task.
    Task(Task),

    /// The event wraps a scheduled exam.
    Exam(Exam),
}

impl EventSource {
    /// Identifier of the wrapped record.
    pub fn id(&self) -> &str {
        match self {
            EventSource::Task(task) => &task.id,
            EventSource::Exam(exam) => &exam.id,
        }
    }

    /// Subject identifier of the wrapped record.
    pub fn subject_id(&self) -> &str {
        match self {
            EventSource::Task(task) => &task.subject_id,
            EventSource::Exam(exam) => &exam.subject_id,
        }
    }

    /// Score of the wrapped record, if any.
    pub fn score(&self) -> Option<&str> {
        match self {
            EventSource::Task(task) => task.score.as_deref(),
            EventSource::Exam(exam) => exam.score.as_deref(),
        }
    }
}

/// A calendar-displayable projection of a task or an exam.
///
/// Events are all-day points: `start` and `end` always hold the same date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Title shown on the calendar, copied from the source description.
    pub title: String,

    /// First day of the event.
    pub start: NaiveDate,

    /// Last day of the event, always equal to `start`.
    pub end: NaiveDate,

    /// Whether the event spans the whole day. Always true.
    pub all_day: bool,

    /// The record this event was derived from.
    pub source: EventSource,
}

impl CalendarEvent {
    fn new(title: String, date: NaiveDate, source: EventSource) -> Self {
        Self {
            title,
            start: date,
            end: date,
            all_day: true,
            source,
        }
    }
}

/// Combines tasks and exams into the list of calendar events to display.
///
/// An exam contributes an event iff it has a date. A task contributes an
/// event iff it has a date and is not done. Exam-derived events come first,
/// then task-derived events; within each group the input order is preserved.
///
/// The function is pure: inputs are only borrowed, the result is recomputed
/// from scratch on every call, and identical inputs yield equal outputs.
pub fn aggregate(tasks: &[Task], exams: &[Exam]) -> Vec<CalendarEvent> {
    let exam_events = exams.iter().filter_map(|exam| {
        let date = exam.due?;
        Some(CalendarEvent::new(
            exam.description.clone(),
            date,
            EventSource::Exam(exam.clone()),
        ))
    });

    let task_events = tasks
        .iter()
        .filter(|task| !task.done)
        .filter_map(|task| {
            let date = task.due?;
            Some(CalendarEvent::new(
                task.description.clone(),
                date,
                EventSource::Task(task.clone()),
            ))
        });

    exam_events.chain(task_events).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: &str, description: &str, done: bool, due: Option<NaiveDate>) -> Task {
        Task {
            id: id.to_string(),
            description: description.to_string(),
            done,
            due,
            score: None,
            subject_id: "s1".to_string(),
        }
    }

    fn exam(id: &str, description: &str, due: Option<NaiveDate>) -> Exam {
        Exam {
            id: id.to_string(),
            description: description.to_string(),
            subject_id: "s1".to_string(),
            due,
            score: None,
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert!(aggregate(&[], &[]).is_empty());
    }

    #[test]
    fn test_done_task_never_contributes() {
        let tasks = vec![task("1", "Quiz", true, Some(date(2024, 3, 2)))];
        assert!(aggregate(&tasks, &[]).is_empty());
    }

    #[test]
    fn test_undated_records_never_contribute() {
        let tasks = vec![task("3", "Reading", false, None)];
        let exams = vec![exam("t2", "Final", None)];
        assert!(aggregate(&tasks, &exams).is_empty());
    }

    #[test]
    fn test_exams_precede_tasks() {
        let tasks = vec![task("k1", "Essay", false, Some(date(2024, 3, 1)))];
        let exams = vec![
            exam("t1", "Midterm", Some(date(2024, 4, 1))),
            exam("t2", "Final", Some(date(2024, 6, 1))),
        ];

        let events = aggregate(&tasks, &exams);
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Midterm", "Final", "Essay"]);
    }

    #[test]
    fn test_events_are_all_day_points() {
        let exams = vec![exam("t1", "Midterm", Some(date(2024, 4, 1)))];

        let events = aggregate(&[], &exams);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start, date(2024, 4, 1));
        assert_eq!(events[0].end, events[0].start);
        assert!(events[0].all_day);
    }

    #[test]
    fn test_source_wraps_originating_record() {
        let tasks = vec![task("k1", "Essay", false, Some(date(2024, 3, 1)))];
        let exams = vec![exam("t1", "Midterm", Some(date(2024, 4, 1)))];

        let events = aggregate(&tasks, &exams);
        match &events[0].source {
            EventSource::Exam(e) => assert_eq!(e.id, "t1"),
            other => panic!("expected exam source, got {other:?}"),
        }
        match &events[1].source {
            EventSource::Task(t) => {
                assert_eq!(t.id, "k1");
                assert!(!t.done);
            }
            other => panic!("expected task source, got {other:?}"),
        }
    }

    #[test]
    fn test_length_bound() {
        let tasks = vec![
            task("1", "Essay", false, Some(date(2024, 3, 1))),
            task("2", "Quiz", true, Some(date(2024, 3, 2))),
            task("3", "Reading", false, None),
        ];
        let exams = vec![
            exam("t1", "Midterm", Some(date(2024, 4, 1))),
            exam("t2", "Final", None),
        ];

        let events = aggregate(&tasks, &exams);
        assert!(events.len() <= tasks.len() + exams.len());
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let tasks = vec![task("1", "Essay", false, Some(date(2024, 3, 1)))];
        let exams = vec![exam("t1", "Midterm", Some(date(2024, 4, 1)))];
        let tasks_before = tasks.clone();
        let exams_before = exams.clone();

        let _ = aggregate(&tasks, &exams);
        assert_eq!(tasks, tasks_before);
        assert_eq!(exams, exams_before);
    }

    #[test]
    fn test_idempotence() {
        let tasks = vec![
            task("1", "Essay", false, Some(date(2024, 3, 1))),
            task("2", "Quiz", true, Some(date(2024, 3, 2))),
        ];
        let exams = vec![exam("t1", "Midterm", Some(date(2024, 4, 1)))];

        assert_eq!(aggregate(&tasks, &exams), aggregate(&tasks, &exams));
    }

    #[test]
    fn test_mixed_example() {
        // tasks: Essay (pending, dated), Quiz (done, dated)
        // exams: Midterm (dated)
        // expected: Midterm then Essay; Quiz excluded
        let tasks = vec![
            task("1", "Essay", false, Some(date(2024, 3, 1))),
            task("2", "Quiz", true, Some(date(2024, 3, 2))),
        ];
        let exams = vec![exam("t1", "Midterm", Some(date(2024, 4, 1)))];

        let events = aggregate(&tasks, &exams);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Midterm");
        assert_eq!(events[1].title, "Essay");
    }

    #[test]
    fn test_json_shape_tags_the_source_kind() {
        let exams = vec![exam("t1", "Midterm", Some(date(2024, 4, 1)))];
        let events = aggregate(&[], &exams);

        let json = serde_json::to_value(&events[0]).unwrap();
        assert_eq!(json["allDay"], serde_json::Value::Bool(true));
        assert_eq!(json["source"]["kind"], "exam");
        assert_eq!(json["source"]["record"]["id"], "t1");
    }
}
