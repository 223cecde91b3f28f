#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use simcal::db::db::Db;
    use simcal::db::tasks::Tasks;
    use simcal::libs::calendar::Calendar;
    use simcal::libs::color::Color;
    use simcal::libs::live::TaskQuery;
    use simcal::libs::month::MonthRange;
    use simcal::libs::task::Task;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct LiveContext {
        _temp_dir: TempDir,
        db: Db,
        tasks: Tasks,
    }

    impl AsyncTestContext for LiveContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("simcal.db")).unwrap();
            LiveContext {
                tasks: Tasks::with_db(&db),
                db,
                _temp_dir: temp_dir,
            }
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn task(title: &str, start: NaiveDate, end: NaiveDate) -> Task {
        Task::new(title, "details", Color::GREEN, start, end)
    }

    fn march() -> TaskQuery {
        TaskQuery::month(MonthRange::new(2024, 3).unwrap())
    }

    #[test]
    fn test_query_predicates_match_sql_ranges() {
        let month = march();
        assert!(month.matches(&task("A", date(2024, 2, 28), date(2024, 3, 2))));
        assert!(month.matches(&task("B", date(2024, 3, 31), date(2024, 4, 5))));
        assert!(!month.matches(&task("C", date(2024, 4, 1), date(2024, 4, 3))));
        assert!(!month.matches(&task("D", date(2024, 2, 1), date(2024, 2, 29))));

        let day = TaskQuery::day(date(2024, 3, 15));
        assert!(day.matches(&task("E", date(2024, 3, 10), date(2024, 3, 15))));
        assert!(day.matches(&task("F", date(2024, 3, 15), date(2024, 3, 20))));
        assert!(!day.matches(&task("G", date(2024, 3, 16), date(2024, 3, 20))));
    }

    #[test_context(LiveContext)]
    #[tokio::test]
    async fn test_subscription_starts_with_current_rows(ctx: &mut LiveContext) {
        ctx.tasks.insert(&task("Existing", date(2024, 3, 4), date(2024, 3, 4))).unwrap();

        let live = ctx.tasks.subscribe(march()).unwrap();
        assert_eq!(live.current().len(), 1);
        assert!(!live.has_changed());
    }

    #[test_context(LiveContext)]
    #[tokio::test]
    async fn test_insert_inside_range_redelivers(ctx: &mut LiveContext) {
        let mut live = ctx.tasks.subscribe(march()).unwrap();

        let tasks = ctx.tasks.clone();
        let writer = tokio::task::spawn_blocking(move || tasks.insert(&task("New", date(2024, 3, 9), date(2024, 3, 9))));

        let delivered = tokio::time::timeout(Duration::from_secs(5), live.changed()).await.unwrap().unwrap();
        writer.await.unwrap().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].title, "New");
    }

    #[test_context(LiveContext)]
    #[tokio::test]
    async fn test_insert_outside_range_does_not_notify(ctx: &mut LiveContext) {
        let live = ctx.tasks.subscribe(march()).unwrap();

        ctx.tasks.insert(&task("April", date(2024, 4, 1), date(2024, 4, 3))).unwrap();
        assert!(!live.has_changed());
        assert!(live.current().is_empty());
    }

    #[test_context(LiveContext)]
    #[tokio::test]
    async fn test_update_moving_task_out_notifies_old_range(ctx: &mut LiveContext) {
        let id = ctx.tasks.insert(&task("Moving", date(2024, 3, 20), date(2024, 3, 21))).unwrap().unwrap();
        let mut march_live = ctx.tasks.subscribe(march()).unwrap();
        let mut april_live = ctx.tasks.subscribe(TaskQuery::month(MonthRange::new(2024, 4).unwrap())).unwrap();
        assert_eq!(march_live.current().len(), 1);

        let moved = task("Moving", date(2024, 4, 20), date(2024, 4, 21)).with_id(id);
        assert!(ctx.tasks.update(&moved).unwrap());

        assert!(march_live.changed().await.unwrap().is_empty());
        assert_eq!(april_live.changed().await.unwrap(), vec![moved]);
    }

    #[test_context(LiveContext)]
    #[tokio::test]
    async fn test_delete_and_purge_notify_day_query(ctx: &mut LiveContext) {
        let day = date(2024, 3, 15);
        let first = ctx.tasks.insert(&task("First", date(2024, 3, 14), day)).unwrap().unwrap();
        ctx.tasks.insert(&task("Second", day, date(2024, 3, 18))).unwrap();
        let mut live = ctx.tasks.subscribe(TaskQuery::day(day)).unwrap();

        let stored = ctx.tasks.get_by_id(first).unwrap().unwrap();
        assert!(ctx.tasks.delete(&stored).unwrap());
        assert_eq!(live.changed().await.unwrap().len(), 1);

        assert_eq!(ctx.tasks.delete_ended_before(date(2024, 3, 19)).unwrap(), 1);
        assert!(live.changed().await.unwrap().is_empty());
    }

    #[test_context(LiveContext)]
    #[tokio::test]
    async fn test_dropped_subscription_is_pruned(ctx: &mut LiveContext) {
        let kept = ctx.tasks.subscribe(march()).unwrap();
        let dropped = ctx.tasks.subscribe(TaskQuery::day(date(2024, 3, 2))).unwrap();
        assert_eq!(ctx.tasks.subscription_count(), 2);

        drop(dropped);
        ctx.tasks.insert(&task("Trigger", date(2024, 3, 2), date(2024, 3, 2))).unwrap();

        assert_eq!(ctx.tasks.subscription_count(), 1);
        assert_eq!(kept.current().len(), 1);
    }

    #[test_context(LiveContext)]
    #[tokio::test]
    async fn test_write_through_another_store_reaches_live_query(ctx: &mut LiveContext) {
        let day = date(2024, 3, 15);
        let calendar = Calendar::with_db(&ctx.db);
        let mut live = calendar.day_tasks(day).unwrap();

        let other = Tasks::with_db(&ctx.db);
        other.insert(&task("Elsewhere", day, day)).unwrap();

        assert!(live.has_changed());
        let delivered = live.changed().await.unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].title, "Elsewhere");

        let month = ctx.tasks.subscribe(march()).unwrap();
        assert_eq!(other.subscription_count(), 2);
        other.insert(&task("Later", date(2024, 3, 30), date(2024, 3, 30))).unwrap();
        assert_eq!(month.current().len(), 2);
    }
}
