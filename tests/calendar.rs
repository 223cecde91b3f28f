#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use simcal::db::db::Db;
    use simcal::libs::calendar::Calendar;
    use simcal::libs::color::Color;
    use simcal::libs::session::TaskDraft;
    use simcal::libs::task::Task;
    use simcal::libs::validation::ValidationError;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct CalendarContext {
        _temp_dir: TempDir,
        calendar: Calendar,
    }

    impl AsyncTestContext for CalendarContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("simcal.db")).unwrap();
            CalendarContext {
                calendar: Calendar::with_db(&db),
                _temp_dir: temp_dir,
            }
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn draft(title: &str, content: &str, start: NaiveDate, end: NaiveDate) -> Task {
        let mut draft = TaskDraft::blank_on(start);
        draft.set_title(title);
        draft.set_content(content);
        draft.set_end_date(end);
        draft.set_color(Color::YELLOW);
        draft.into_task()
    }

    #[test_context(CalendarContext)]
    #[tokio::test]
    async fn test_submit_valid_task_reaches_month_view(ctx: &mut CalendarContext) {
        let live = ctx.calendar.month_tasks(2024, 3).unwrap();

        let pending = ctx.calendar.submit_task(draft("Trip", "Pack light", date(2024, 3, 29), date(2024, 4, 2))).unwrap();
        let id = pending.wait().await.unwrap().unwrap();

        let march = live.current();
        assert_eq!(march.len(), 1);
        assert_eq!(march[0].id, Some(id));
        assert_eq!(march[0].color, Color::YELLOW);
    }

    #[test_context(CalendarContext)]
    #[tokio::test]
    async fn test_invalid_task_is_rejected_before_the_store(ctx: &mut CalendarContext) {
        let live = ctx.calendar.month_tasks(2024, 3).unwrap();

        let inverted = draft("Backwards", "Oops", date(2024, 3, 10), date(2024, 3, 5));
        assert_eq!(ctx.calendar.submit_task(inverted).err(), Some(ValidationError::InvertedRange));

        let blank = draft("   ", "Body", date(2024, 3, 10), date(2024, 3, 10));
        assert_eq!(ctx.calendar.submit_task(blank).err(), Some(ValidationError::EmptyTitle));

        assert!(!live.has_changed());
        assert!(ctx.calendar.tasks().find_month(date(2024, 3, 1), date(2024, 4, 1)).unwrap().is_empty());
    }

    #[test_context(CalendarContext)]
    #[tokio::test]
    async fn test_update_and_delete_through_calendar(ctx: &mut CalendarContext) {
        let day = date(2024, 3, 15);
        let live = ctx.calendar.day_tasks(day).unwrap();
        let id = ctx.calendar.submit_task(draft("Call", "Bank", day, day)).unwrap().wait().await.unwrap().unwrap();

        let mut edit = TaskDraft::blank_on(day);
        edit.setup(ctx.calendar.task(id).unwrap().unwrap());
        edit.set_content("Bank, ask about fees");
        let edited = edit.into_task();
        assert!(ctx.calendar.update_task(edited.clone()).unwrap().wait().await.unwrap());
        assert_eq!(live.current(), vec![edited.clone()]);

        let mut invalid = edited.clone();
        invalid.content = String::new();
        assert_eq!(ctx.calendar.update_task(invalid).err(), Some(ValidationError::EmptyContent));

        assert!(ctx.calendar.delete_task(edited.clone()).wait().await.unwrap());
        assert!(live.current().is_empty());
        assert!(!ctx.calendar.delete_task(edited).wait().await.unwrap());
    }

    #[test_context(CalendarContext)]
    #[tokio::test]
    async fn test_detached_write_still_completes(ctx: &mut CalendarContext) {
        let mut live = ctx.calendar.day_tasks(date(2024, 5, 1)).unwrap();

        drop(ctx.calendar.submit_task(draft("Detached", "Fire and forget", date(2024, 5, 1), date(2024, 5, 1))).unwrap());

        assert_eq!(live.changed().await.unwrap().len(), 1);
    }

    #[test_context(CalendarContext)]
    #[tokio::test]
    async fn test_month_tasks_rejects_invalid_month(ctx: &mut CalendarContext) {
        assert!(ctx.calendar.month_tasks(2024, 13).is_err());
        assert!(ctx.calendar.month_tasks(2024, 0).is_err());
    }

    #[test_context(CalendarContext)]
    #[tokio::test]
    async fn test_purge_expired(ctx: &mut CalendarContext) {
        let today = date(2024, 3, 15);
        for (title, start, end) in [
            ("Past", date(2024, 3, 1), date(2024, 3, 14)),
            ("Current", date(2024, 3, 14), today),
            ("Upcoming", date(2024, 3, 20), date(2024, 3, 21)),
        ] {
            ctx.calendar.submit_task(draft(title, "x", start, end)).unwrap().wait().await.unwrap();
        }

        assert_eq!(ctx.calendar.purge_expired(today).wait().await.unwrap(), 1);
        let left = ctx.calendar.month_tasks(2024, 3).unwrap().current();
        assert_eq!(left.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(), vec!["Current", "Upcoming"]);
    }
}
