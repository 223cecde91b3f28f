#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use simcal::libs::color::Color;
    use simcal::libs::task::Task;
    use simcal::libs::validation::{validate, validation_errors, ValidationError};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn task(title: &str, content: &str, start: u32, end: u32) -> Task {
        Task::new(title, content, Color::BLACK, day(start), day(end))
    }

    #[test]
    fn test_valid_task_passes() {
        assert_eq!(validate(&task("Title", "Content", 1, 1)), Ok(()));
        assert_eq!(validate(&task("Title", "Content", 1, 31)), Ok(()));
    }

    #[test]
    fn test_inverted_range_wins_over_blank_fields() {
        assert_eq!(validate(&task("Title", "Content", 5, 4)), Err(ValidationError::InvertedRange));
        assert_eq!(validate(&task("", "", 5, 4)), Err(ValidationError::InvertedRange));
    }

    #[test]
    fn test_blank_title_and_content() {
        assert_eq!(validate(&task("", "Content", 1, 2)), Err(ValidationError::EmptyTitle));
        assert_eq!(validate(&task(" \t\n", "Content", 1, 2)), Err(ValidationError::EmptyTitle));
        assert_eq!(validate(&task("Title", "   ", 1, 2)), Err(ValidationError::EmptyContent));
        assert_eq!(validate(&task(" x ", " y ", 1, 2)), Ok(()));
    }

    #[test]
    fn test_all_errors_are_listed_in_order() {
        assert_eq!(
            validation_errors(&task("", " ", 3, 2)),
            vec![ValidationError::InvertedRange, ValidationError::EmptyTitle, ValidationError::EmptyContent]
        );
        assert!(validation_errors(&task("a", "b", 2, 2)).is_empty());
    }
}
