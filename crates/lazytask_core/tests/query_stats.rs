use chrono::NaiveDate;
use lazytask_core::{
    Category, Clock, InMemoryTaskRepository, Priority, StatusFilter, TaskInput, TaskService,
};

fn service() -> TaskService<InMemoryTaskRepository> {
    let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
    TaskService::new(InMemoryTaskRepository::new(Clock::fixed(today)))
}

fn add(
    service: &mut TaskService<InMemoryTaskRepository>,
    title: &str,
    description: &str,
    priority: &str,
    due: &str,
    category: &str,
) -> u64 {
    service
        .create_task(&TaskInput {
            title: title.to_string(),
            description: description.to_string(),
            priority: priority.to_string(),
            due_date: due.to_string(),
            category: category.to_string(),
        })
        .unwrap()
        .id
}

fn ids(tasks: Vec<&lazytask_core::Task>) -> Vec<u64> {
    tasks.into_iter().map(|task| task.id).collect()
}

#[test]
fn past_due_tasks_are_overdue() {
    let mut service = service();
    let a = add(&mut service, "a", "", "Low", "11.10.2025", "Work");
    let b = add(&mut service, "b", "", "Low", "12.10.2025", "Work");
    add(&mut service, "today", "", "Low", "15.10.2025", "Work");
    add(&mut service, "later", "", "Low", "16.10.2025", "Work");

    assert_eq!(ids(service.overdue_tasks()), [a, b]);
}

#[test]
fn completed_tasks_drop_out_of_overdue() {
    let mut service = service();
    let a = add(&mut service, "a", "", "Low", "11.10.2025", "Work");
    let b = add(&mut service, "b", "", "Low", "12.10.2025", "Work");

    service.mark_completed(a);
    assert_eq!(ids(service.overdue_tasks()), [b]);
    assert!(!service.is_overdue(service.get_task(a).unwrap()));
    assert!(service.is_overdue(service.get_task(b).unwrap()));
}

#[test]
fn search_is_case_insensitive_over_title_and_description() {
    let mut service = service();
    let groceries = add(&mut service, "Покупки", "Молоко, хлеб", "Low", "20.10.2025", "Personal");
    add(&mut service, "Report", "quarterly numbers", "High", "20.10.2025", "Work");
    add(&mut service, "Gym", "", "Medium", "20.10.2025", "Health");

    assert_eq!(ids(service.search("молоко")), [groceries]);
    assert_eq!(ids(service.search("REPORT")).len(), 1);
    assert!(service.search("nothing matches").is_empty());
}

#[test]
fn blank_search_matches_every_task() {
    let mut service = service();
    add(&mut service, "a", "", "Low", "20.10.2025", "Work");
    add(&mut service, "b", "", "Low", "20.10.2025", "Work");

    assert_eq!(service.search("").len(), 2);
}

#[test]
fn filter_by_status_splits_active_and_completed() {
    let mut service = service();
    let a = add(&mut service, "a", "", "Low", "20.10.2025", "Work");
    let b = add(&mut service, "b", "", "Low", "20.10.2025", "Work");
    service.mark_completed(b);

    assert_eq!(ids(service.filter_by_status(StatusFilter::Active)), [a]);
    assert_eq!(ids(service.filter_by_status(StatusFilter::Completed)), [b]);
    assert_eq!(ids(service.filter_by_status(StatusFilter::All)), [a, b]);
}

#[test]
fn statistics_on_empty_store() {
    let stats = service().statistics();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.active, 0);
    assert_eq!(stats.completion_rate, 0.0);
    assert_eq!(stats.overdue_count, 0);
}

#[test]
fn statistics_counts_and_distributions() {
    let mut service = service();
    let a = add(&mut service, "a", "", "High", "20.10.2025", "Work");
    add(&mut service, "b", "", "High", "10.10.2025", "Garden");
    add(&mut service, "c", "", "Low", "20.10.2025", "Work");
    service.mark_completed(a);

    let stats = service.statistics();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.completion_rate, 100.0 * 1.0 / 3.0);
    assert!((stats.completion_rate - 33.333).abs() < 0.01);
    assert_eq!(stats.overdue_count, 1);

    let priorities: Vec<_> = stats.priority_distribution.into_iter().collect();
    assert_eq!(priorities, [(Priority::Low, 1), (Priority::High, 2)]);

    let categories: Vec<_> = stats.category_distribution.into_iter().collect();
    assert_eq!(
        categories,
        [(Category::Work, 2), (Category::Custom("Garden".to_string()), 1)]
    );
}

#[test]
fn statistics_serialize_with_labels() {
    let mut service = service();
    add(&mut service, "a", "", "Urgent", "20.10.2025", "Study");

    let json = serde_json::to_value(service.statistics()).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["completion_rate"], 0.0);
    assert_eq!(json["priority_distribution"]["Urgent"], 1);
    assert_eq!(json["category_distribution"]["Study"], 1);
}
