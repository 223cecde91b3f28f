#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use simcal::db::db::Db;
    use simcal::db::tasks::Tasks;
    use simcal::libs::color::Color;
    use simcal::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskStoreContext {
        temp_dir: TempDir,
        tasks: Tasks,
    }

    impl TestContext for TaskStoreContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("simcal.db")).unwrap();
            TaskStoreContext {
                tasks: Tasks::with_db(&db),
                temp_dir,
            }
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn task(title: &str, start: NaiveDate, end: NaiveDate) -> Task {
        Task::new(title, "details", Color::BLUE, start, end)
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_insert_assigns_id_and_persists_fields(ctx: &mut TaskStoreContext) {
        let new = Task::new("Dentist", "10:30", Color::MAGENTA, date(2024, 3, 15), date(2024, 3, 16));
        let id = ctx.tasks.insert(&new).unwrap().unwrap();

        let stored = ctx.tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored, new.with_id(id));
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_insert_with_existing_id_is_ignored(ctx: &mut TaskStoreContext) {
        let original = task("Original", date(2024, 3, 1), date(2024, 3, 1)).with_id(5);
        assert_eq!(ctx.tasks.insert(&original).unwrap(), Some(5));

        let clash = task("Clash", date(2024, 6, 1), date(2024, 6, 2)).with_id(5);
        assert_eq!(ctx.tasks.insert(&clash).unwrap(), None);

        assert_eq!(ctx.tasks.get_by_id(5).unwrap().unwrap(), original);
        assert_eq!(ctx.tasks.find_month(date(2024, 6, 1), date(2024, 7, 1)).unwrap().len(), 0);
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_month_overlap_march_2024(ctx: &mut TaskStoreContext) {
        ctx.tasks.insert(&task("A", date(2024, 2, 28), date(2024, 3, 2))).unwrap();
        ctx.tasks.insert(&task("B", date(2024, 3, 31), date(2024, 4, 5))).unwrap();
        ctx.tasks.insert(&task("C", date(2024, 4, 1), date(2024, 4, 3))).unwrap();
        ctx.tasks.insert(&task("Before", date(2024, 2, 1), date(2024, 2, 29))).unwrap();
        ctx.tasks.insert(&task("Spanning", date(2024, 1, 1), date(2024, 12, 31))).unwrap();

        let march = ctx.tasks.find_month(date(2024, 3, 1), date(2024, 4, 1)).unwrap();
        assert_eq!(titles(&march), vec!["Spanning", "A", "B"]);
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_day_range_is_closed(ctx: &mut TaskStoreContext) {
        ctx.tasks.insert(&task("Ends today", date(2024, 3, 10), date(2024, 3, 15))).unwrap();
        ctx.tasks.insert(&task("Starts tomorrow", date(2024, 3, 16), date(2024, 3, 20))).unwrap();
        ctx.tasks.insert(&task("Starts today", date(2024, 3, 15), date(2024, 3, 15))).unwrap();

        let day = ctx.tasks.find_day(date(2024, 3, 15)).unwrap();
        assert_eq!(titles(&day), vec!["Ends today", "Starts today"]);
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_results_ordered_by_start_then_id(ctx: &mut TaskStoreContext) {
        ctx.tasks.insert(&task("Later", date(2024, 5, 20), date(2024, 5, 20))).unwrap();
        ctx.tasks.insert(&task("Same day 1", date(2024, 5, 3), date(2024, 5, 4))).unwrap();
        ctx.tasks.insert(&task("Same day 2", date(2024, 5, 3), date(2024, 5, 3))).unwrap();

        let may = ctx.tasks.find_month(date(2024, 5, 1), date(2024, 6, 1)).unwrap();
        assert_eq!(titles(&may), vec!["Same day 1", "Same day 2", "Later"]);
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_update_replaces_whole_record(ctx: &mut TaskStoreContext) {
        let id = ctx.tasks.insert(&task("Draft", date(2024, 3, 1), date(2024, 3, 1))).unwrap().unwrap();

        let mut changed = ctx.tasks.get_by_id(id).unwrap().unwrap();
        changed.title = "Final".to_string();
        changed.content = "Rewritten".to_string();
        changed.color = Color::RED;
        changed.end_date = date(2024, 3, 4);
        assert!(ctx.tasks.update(&changed).unwrap());

        assert_eq!(ctx.tasks.get_by_id(id).unwrap().unwrap(), changed);
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_update_and_delete_of_missing_task_are_noops(ctx: &mut TaskStoreContext) {
        let kept = ctx.tasks.insert(&task("Kept", date(2024, 3, 1), date(2024, 3, 1))).unwrap().unwrap();

        let ghost = task("Ghost", date(2024, 3, 1), date(2024, 3, 1)).with_id(kept + 100);
        assert!(!ctx.tasks.update(&ghost).unwrap());
        assert!(!ctx.tasks.delete(&ghost).unwrap());

        let unsaved = task("Unsaved", date(2024, 3, 1), date(2024, 3, 1));
        assert!(!ctx.tasks.update(&unsaved).unwrap());
        assert!(!ctx.tasks.delete(&unsaved).unwrap());

        assert!(ctx.tasks.get_by_id(kept).unwrap().is_some());
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_delete_removes_matching_id(ctx: &mut TaskStoreContext) {
        let id = ctx.tasks.insert(&task("Gone", date(2024, 3, 1), date(2024, 3, 2))).unwrap().unwrap();
        let stored = ctx.tasks.get_by_id(id).unwrap().unwrap();

        assert!(ctx.tasks.delete(&stored).unwrap());
        assert!(ctx.tasks.get_by_id(id).unwrap().is_none());
        assert!(ctx.tasks.find_day(date(2024, 3, 1)).unwrap().is_empty());
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_store_persists_inverted_range(ctx: &mut TaskStoreContext) {
        let inverted = task("Inverted", date(2024, 3, 10), date(2024, 3, 5));
        let id = ctx.tasks.insert(&inverted).unwrap().unwrap();

        assert_eq!(ctx.tasks.get_by_id(id).unwrap().unwrap().start_date, date(2024, 3, 10));
        assert!(ctx.tasks.find_day(date(2024, 3, 7)).unwrap().is_empty());
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_delete_ended_before(ctx: &mut TaskStoreContext) {
        ctx.tasks.insert(&task("Old", date(2024, 2, 1), date(2024, 2, 28))).unwrap();
        ctx.tasks.insert(&task("Ends today", date(2024, 3, 1), date(2024, 3, 15))).unwrap();
        ctx.tasks.insert(&task("Future", date(2024, 4, 1), date(2024, 4, 1))).unwrap();

        assert_eq!(ctx.tasks.delete_ended_before(date(2024, 3, 15)).unwrap(), 1);
        assert_eq!(ctx.tasks.delete_ended_before(date(2024, 3, 15)).unwrap(), 0);

        let remaining = ctx.tasks.find_month(date(2024, 1, 1), date(2025, 1, 1)).unwrap();
        assert_eq!(titles(&remaining), vec!["Ends today", "Future"]);
    }

    #[test_context(TaskStoreContext)]
    #[test]
    fn test_tasks_survive_reopen(ctx: &mut TaskStoreContext) {
        let id = ctx.tasks.insert(&task("Persistent", date(2024, 3, 1), date(2024, 3, 1))).unwrap().unwrap();

        let reopened = Tasks::with_db(&Db::open(ctx.temp_dir.path().join("simcal.db")).unwrap());
        assert_eq!(reopened.get_by_id(id).unwrap().unwrap().title, "Persistent");
    }
}
